//! Report rendering.
//!
//! One section per discipline, in run order: the Gantt chart (process
//! slices with idle gaps shown as `IDLE`), a per-process table in input
//! order, then averages and utilization. A final line names the best
//! discipline. Output is deterministic: numbers use fixed two-decimal
//! formatting and nothing depends on hash ordering.

use serde::Serialize;
use std::fmt;

use crate::dispatching::PriorityOrder;
use crate::error::Result;
use crate::models::{Discipline, Process, ScheduleResult, SchedulingInput};
use crate::scheduler::{best_discipline, ScheduleKpi};

/// A complete, serializable scheduling report.
#[derive(Debug, Clone, Serialize)]
pub struct Report {
    pub processes: Vec<Process>,
    pub quantum_time: i64,
    pub priority_order: PriorityOrder,
    pub sections: Vec<ReportSection>,
    /// `None` when there are no processes.
    pub best_discipline: Option<Discipline>,
}

/// Results for one discipline.
#[derive(Debug, Clone, Serialize)]
pub struct ReportSection {
    pub result: ScheduleResult,
    pub kpi: ScheduleKpi,
}

impl Report {
    /// Assembles a report from finished results.
    pub fn new(
        input: &SchedulingInput,
        results: Vec<ScheduleResult>,
        priority_order: PriorityOrder,
    ) -> Self {
        let best = best_discipline(&results).map(|r| r.discipline);
        let sections = results
            .into_iter()
            .map(|result| ReportSection {
                kpi: ScheduleKpi::calculate(&result),
                result,
            })
            .collect();

        Self {
            processes: input.processes.clone(),
            quantum_time: input.quantum_time,
            priority_order,
            sections,
            best_discipline: best,
        }
    }

    /// Renders the human-readable report.
    pub fn to_text(&self) -> String {
        self.to_string()
    }

    /// Renders the report as pretty-printed JSON.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    fn write_section(&self, f: &mut impl fmt::Write, section: &ReportSection) -> fmt::Result {
        let result = &section.result;
        let kpi = &section.kpi;

        writeln!(f, "=== {} ===", result.discipline.name())?;
        writeln!(f, "Gantt Chart:")?;
        if result.timeline.is_empty() {
            writeln!(f, "(empty)")?;
        }
        let mut cursor = 0;
        for slice in &result.timeline {
            if slice.start_time > cursor {
                writeln!(f, "IDLE: {} - {}", cursor, slice.start_time)?;
            }
            writeln!(f, "P{}: {} - {}", slice.process_id, slice.start_time, slice.end_time)?;
            cursor = slice.end_time;
        }

        writeln!(
            f,
            "{:<8}{:>9}{:>7}{:>10}{:>12}{:>12}{:>9}{:>10}",
            "Process", "Arrival", "Burst", "Priority", "Completion", "Turnaround", "Waiting",
            "Response"
        )?;
        for (process, m) in self.processes.iter().zip(&result.metrics) {
            writeln!(
                f,
                "{:<8}{:>9}{:>7}{:>10}{:>12}{:>12}{:>9}{:>10}",
                process.label(),
                process.arrival_time,
                process.burst_time,
                process.priority,
                m.completion_time,
                m.turnaround_time,
                m.waiting_time,
                m.response_time
            )?;
        }

        writeln!(f, "Average Waiting Time: {}", ms(kpi.average_waiting_time))?;
        writeln!(f, "Average Turnaround Time: {}", ms(kpi.average_turnaround_time))?;
        writeln!(f, "Average Response Time: {}", ms(kpi.average_response_time))?;
        writeln!(f, "CPU Utilization: {:.2} %", kpi.cpu_utilization)?;
        writeln!(f, "Context Switches: {}", kpi.context_switches)
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Processes: {}, Quantum: {}, Priority: {}",
            self.processes.len(),
            self.quantum_time,
            self.priority_order
        )?;

        for section in &self.sections {
            writeln!(f)?;
            self.write_section(f, section)?;
        }

        writeln!(f)?;
        let best = self
            .best_discipline
            .and_then(|d| self.sections.iter().find(|s| s.result.discipline == d));
        match best {
            Some(section) => writeln!(
                f,
                "Best Algorithm: {} (average waiting {}, average turnaround {})",
                section.result.discipline.name(),
                ms(section.kpi.average_waiting_time),
                ms(section.kpi.average_turnaround_time)
            ),
            None => writeln!(f, "Best Algorithm: n/a"),
        }
    }
}

fn ms(value: Option<f64>) -> String {
    match value {
        Some(v) => format!("{v:.2} ms"),
        None => "n/a".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::EngineConfig;
    use crate::scheduler::Simulator;

    fn reference_input() -> SchedulingInput {
        SchedulingInput::new(2)
            .with_process(0, 5, 2)
            .with_process(1, 3, 1)
            .with_process(2, 8, 3)
    }

    fn report_for(input: &SchedulingInput, disciplines: Vec<Discipline>) -> Report {
        let config = EngineConfig::new().with_disciplines(disciplines);
        let sim = Simulator::with_config(config);
        let results = sim.run_all(input).unwrap();
        Report::new(input, results, PriorityOrder::LowerFirst)
    }

    #[test]
    fn test_fcfs_golden() {
        let report = report_for(&reference_input(), vec![Discipline::Fcfs]);
        let expected = "\
Processes: 3, Quantum: 2, Priority: lower value first

=== First-Come, First-Served (FCFS) ===
Gantt Chart:
P1: 0 - 5
P2: 5 - 8
P3: 8 - 16
Process   Arrival  Burst  Priority  Completion  Turnaround  Waiting  Response
P1              0      5         2           5           5        0         0
P2              1      3         1           8           7        4         4
P3              2      8         3          16          14        6         6
Average Waiting Time: 3.33 ms
Average Turnaround Time: 8.67 ms
Average Response Time: 3.33 ms
CPU Utilization: 100.00 %
Context Switches: 2

Best Algorithm: First-Come, First-Served (FCFS) (average waiting 3.33 ms, average turnaround 8.67 ms)
";
        assert_eq!(report.to_text(), expected);
    }

    #[test]
    fn test_idle_rows() {
        let input = SchedulingInput::new(2)
            .with_process(3, 1, 0)
            .with_process(6, 1, 0);
        let text = report_for(&input, vec![Discipline::RoundRobin]).to_text();
        assert!(text.contains("IDLE: 0 - 3\nP1: 3 - 4\nIDLE: 4 - 6\nP2: 6 - 7\n"));
        assert!(text.contains("CPU Utilization: 28.57 %"));
    }

    #[test]
    fn test_empty_report() {
        let text = report_for(&SchedulingInput::new(2), vec![Discipline::Sjf]).to_text();
        assert!(text.contains("=== Shortest Job First (SJF) ===\nGantt Chart:\n(empty)\n"));
        assert!(text.contains("Average Waiting Time: n/a"));
        assert!(text.contains("CPU Utilization: 0.00 %"));
        assert!(text.ends_with("Best Algorithm: n/a\n"));
    }

    #[test]
    fn test_sections_in_run_order_and_stable() {
        let input = reference_input();
        let a = report_for(&input, vec![Discipline::RoundRobin, Discipline::Fcfs]).to_text();
        let b = report_for(&input, vec![Discipline::RoundRobin, Discipline::Fcfs]).to_text();
        assert_eq!(a, b);
        let rr = a.find("=== Round Robin (RR) ===").unwrap();
        let fcfs = a.find("=== First-Come, First-Served (FCFS) ===").unwrap();
        assert!(rr < fcfs);
    }

    #[test]
    fn test_json_report() {
        let report = report_for(&reference_input(), vec![Discipline::Fcfs, Discipline::Sjf]);
        let json: serde_json::Value = serde_json::from_str(&report.to_json().unwrap()).unwrap();
        assert_eq!(json["quantum_time"], 2);
        assert_eq!(json["priority_order"], "lower_first");
        assert_eq!(json["best_discipline"], "fcfs");
        assert_eq!(json["sections"][1]["result"]["discipline"], "sjf");
        assert_eq!(json["sections"][0]["result"]["timeline"][2]["end_time"], 16);
        assert_eq!(json["sections"][0]["kpi"]["makespan"], 16);
    }
}
