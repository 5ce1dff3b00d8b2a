//! Line-oriented input decoding.
//!
//! # Format
//!
//! ```text
//! 3          <- process count n
//! 0 5 2      <- arrival burst priority   (process 1)
//! 1 3 1      <-                          (process 2)
//! 2 8 3      <-                          (process 3)
//! 2          <- quantum
//! ```
//!
//! Blank lines are ignored and line numbers in errors refer to physical
//! lines of the payload. `n = 0` is valid.

use std::io::Read;

use crate::error::{Result, ScheduleError};
use crate::models::SchedulingInput;
use crate::validation::validate_input;

/// Parses a textual payload into a validated [`SchedulingInput`].
pub fn parse_input(text: &str) -> Result<SchedulingInput> {
    let mut lines = text
        .lines()
        .enumerate()
        .map(|(i, line)| (i + 1, line.trim()))
        .filter(|(_, line)| !line.is_empty());
    let last_line = text.lines().count();
    let missing = |what: &str| ScheduleError::malformed(last_line + 1, format!("missing {what}"));

    let (count_line, text_count) = lines.next().ok_or_else(|| missing("process count"))?;
    let count: usize = single_integer(count_line, text_count, "process count")?
        .try_into()
        .map_err(|_| ScheduleError::malformed(count_line, "process count must be non-negative"))?;

    let mut input = SchedulingInput::new(0);
    let mut process_lines = Vec::new();
    for i in 0..count {
        let (line_no, line) = lines
            .next()
            .ok_or_else(|| missing(&format!("line for process {} of {count}", i + 1)))?;
        let [arrival, burst, priority] = triple(line_no, line)?;
        let priority = i32::try_from(priority)
            .map_err(|_| ScheduleError::malformed(line_no, "priority out of range"))?;
        input = input.with_process(arrival, burst, priority);
        process_lines.push(line_no);
    }

    let (quantum_line, text_quantum) = lines.next().ok_or_else(|| missing("quantum"))?;
    input.quantum_time = single_integer(quantum_line, text_quantum, "quantum")?;

    if let Some((line_no, _)) = lines.next() {
        return Err(ScheduleError::malformed(line_no, "unexpected data after quantum"));
    }

    if let Err(errors) = validate_input(&input) {
        // errors are non-empty by construction
        let first = &errors[0];
        let line = first
            .process_id
            .and_then(|id| process_lines.get(id - 1).copied())
            .unwrap_or(quantum_line);
        return Err(ScheduleError::malformed(line, first.message.clone()));
    }

    Ok(input)
}

/// Reads a whole payload from a reader and parses it.
pub fn read_input<R: Read>(mut reader: R) -> Result<SchedulingInput> {
    let mut text = String::new();
    reader.read_to_string(&mut text)?;
    parse_input(&text)
}

fn integer(line_no: usize, token: &str) -> Result<i64> {
    token
        .parse()
        .map_err(|_| ScheduleError::malformed(line_no, format!("'{token}' is not an integer")))
}

fn single_integer(line_no: usize, line: &str, what: &str) -> Result<i64> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    match tokens.as_slice() {
        [token] => integer(line_no, token),
        _ => Err(ScheduleError::malformed(
            line_no,
            format!("expected a single integer {what}, found {} fields", tokens.len()),
        )),
    }
}

fn triple(line_no: usize, line: &str) -> Result<[i64; 3]> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    match tokens.as_slice() {
        [a, b, c] => Ok([integer(line_no, a)?, integer(line_no, b)?, integer(line_no, c)?]),
        _ => Err(ScheduleError::malformed(
            line_no,
            format!(
                "expected 'arrival burst priority', found {} fields",
                tokens.len()
            ),
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line_of(err: ScheduleError) -> usize {
        match err {
            ScheduleError::MalformedInput { line, .. } => line,
            other => panic!("unexpected error {other:?}"),
        }
    }

    #[test]
    fn test_parse_reference() {
        let input = parse_input("3\n0 5 2\n1 3 1\n2 8 3\n2\n").unwrap();
        assert_eq!(input.len(), 3);
        assert_eq!(input.quantum_time, 2);
        assert_eq!(input.processes[2].id, 3);
        assert_eq!(input.processes[2].burst_time, 8);
        assert_eq!(input.processes[1].priority, 1);
    }

    #[test]
    fn test_parse_zero_processes() {
        let input = parse_input("0\n4\n").unwrap();
        assert!(input.is_empty());
        assert_eq!(input.quantum_time, 4);
    }

    #[test]
    fn test_parse_tolerates_blank_lines_and_crlf() {
        let input = parse_input("\r\n1\r\n\r\n  0   2  -1 \r\n3\r\n\r\n").unwrap();
        assert_eq!(input.processes[0].priority, -1);
        assert_eq!(input.quantum_time, 3);
    }

    #[test]
    fn test_reader() {
        let input = read_input("1\n0 1 0\n1\n".as_bytes()).unwrap();
        assert_eq!(input.len(), 1);
    }

    #[test]
    fn test_negative_count() {
        assert_eq!(line_of(parse_input("-1\n2\n").unwrap_err()), 1);
    }

    #[test]
    fn test_non_integer_field() {
        let err = parse_input("2\n0 5 2\n1 x 1\n2\n").unwrap_err();
        assert!(err.to_string().contains("'x' is not an integer"));
        assert_eq!(line_of(err), 3);
    }

    #[test]
    fn test_wrong_field_count() {
        assert_eq!(line_of(parse_input("1\n0 5\n2\n").unwrap_err()), 2);
    }

    #[test]
    fn test_missing_process_line() {
        let err = parse_input("3\n0 5 2\n1 3 1\n").unwrap_err();
        assert!(err.to_string().contains("missing"));
        assert_eq!(line_of(err), 4);
    }

    #[test]
    fn test_missing_quantum() {
        let err = parse_input("1\n0 5 2\n").unwrap_err();
        assert!(err.to_string().contains("missing quantum"));
    }

    #[test]
    fn test_zero_burst_names_process_line() {
        let err = parse_input("2\n0 5 2\n4 0 1\n2\n").unwrap_err();
        assert!(err.to_string().contains("burst time must be positive"));
        assert_eq!(line_of(err), 3);
    }

    #[test]
    fn test_negative_arrival() {
        assert_eq!(line_of(parse_input("1\n-3 5 2\n2\n").unwrap_err()), 2);
    }

    #[test]
    fn test_zero_quantum() {
        let err = parse_input("1\n0 5 2\n\n0\n").unwrap_err();
        assert_eq!(line_of(err), 4);
    }

    #[test]
    fn test_trailing_data() {
        assert_eq!(line_of(parse_input("0\n2\n7\n").unwrap_err()), 3);
    }

    #[test]
    fn test_empty_payload() {
        let err = parse_input("").unwrap_err();
        assert!(err.to_string().contains("missing process count"));
    }

    #[test]
    fn test_priority_out_of_range() {
        assert!(parse_input("1\n0 1 99999999999\n1\n").is_err());
    }
}
