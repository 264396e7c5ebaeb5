use std::io::{BufRead, Write};

use thiserror::Error;
use tracing::debug;

/// Shown when the line is not a whole number.
pub const INVALID_NUMBER: &str = "Invalid input. Please enter a whole number.";

/// Shown when the line is a negative number.
pub const NEGATIVE_NUMBER: &str = "Please enter a non-negative integer.";

#[derive(Debug, Error)]
pub enum PromptError {
    #[error("input closed before a valid amount was entered")]
    InputClosed,
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// Prompt until the player enters a non-negative whole number.
pub fn read_non_negative<R, W>(input: &mut R, output: &mut W, prompt: &str) -> Result<u64, PromptError>
where
    R: BufRead,
    W: Write,
{
    let mut buf = Vec::new();
    loop {
        write!(output, "{prompt}")?;
        output.flush()?;

        buf.clear();
        if input.read_until(b'\n', &mut buf)? == 0 {
            return Err(PromptError::InputClosed);
        }
        let line = String::from_utf8_lossy(&buf);
        let line = line.trim();

        match line.parse::<i64>() {
            Ok(value) if value < 0 => {
                debug!(value, "rejected negative amount");
                writeln!(output, "{NEGATIVE_NUMBER}")?;
            }
            Ok(value) => return Ok(value as u64),
            Err(err) => {
                debug!(line, %err, "rejected malformed amount");
                writeln!(output, "{INVALID_NUMBER}")?;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn read(input: &str) -> (Result<u64, PromptError>, String) {
        let mut input = Cursor::new(input.as_bytes().to_vec());
        let mut output = Vec::new();
        let result = read_non_negative(&mut input, &mut output, "> ");
        (result, String::from_utf8(output).unwrap())
    }

    #[test]
    fn test_accepts_first_valid_line() {
        let (result, output) = read("42\n7\n");
        assert_eq!(result.unwrap(), 42);
        assert_eq!(output, "> ");
    }

    #[test]
    fn test_trims_whitespace() {
        let (result, _) = read("  15 \t\r\n");
        assert_eq!(result.unwrap(), 15);
    }

    #[test]
    fn test_accepts_zero_and_last_line_without_newline() {
        assert_eq!(read("0").0.unwrap(), 0);
        assert_eq!(read("+8").0.unwrap(), 8);
    }

    #[test]
    fn test_reprompts_on_garbage() {
        let (result, output) = read("abc\n\n1.5\n12\n");
        assert_eq!(result.unwrap(), 12);
        assert_eq!(
            output,
            format!("> {INVALID_NUMBER}\n> {INVALID_NUMBER}\n> {INVALID_NUMBER}\n> ")
        );
    }

    #[test]
    fn test_reprompts_on_negative() {
        let (result, output) = read("-1\n3\n");
        assert_eq!(result.unwrap(), 3);
        assert_eq!(output, format!("> {NEGATIVE_NUMBER}\n> "));
    }

    #[test]
    fn test_rejects_overflow() {
        let (result, output) = read("99999999999999999999\n5\n");
        assert_eq!(result.unwrap(), 5);
        assert!(output.contains(INVALID_NUMBER));
    }

    #[test]
    fn test_closed_input() {
        let (result, output) = read("nope\n");
        assert!(matches!(result, Err(PromptError::InputClosed)));
        assert_eq!(output, format!("> {INVALID_NUMBER}\n> "));
    }
}
