use crate::command::{Command, INSERT_TOKEN, QUERY_TOKEN};
use crate::error::ParseError;

use std::str::SplitAsciiWhitespace;

/// Reads commands one at a time from a whitespace-delimited token stream.
///
/// Groups are `k <int>` or `q <int> <int>`; line breaks and runs of spaces are treated alike. The
/// reader accepts any `i32` operands and does not check that a query is ascending.
pub struct CommandReader<'a> {
    tokens: SplitAsciiWhitespace<'a>,
}

impl<'a> CommandReader<'a> {
    pub fn new(input: &'a str) -> Self {
        Self {
            tokens: input.split_ascii_whitespace(),
        }
    }

    fn operand(&mut self, command: char) -> Result<i32, ParseError> {
        match self.tokens.next() {
            Some(token) => token.parse::<i32>().map_err(|_| ParseError::WrongInput {
                command,
                token: Some(token.to_string()),
            }),
            None => Err(ParseError::WrongInput {
                command,
                token: None,
            }),
        }
    }

    /// A head token must be exactly `k` or `q`; anything longer, such as `kq`, is an unknown
    /// command rather than a command glued to its operand.
    fn read_command(&mut self, head: &str) -> Result<Command, ParseError> {
        let mut chars = head.chars();
        let command = match (chars.next(), chars.next()) {
            (Some(c), None) => c,
            _ => return Err(ParseError::UnknownCommand(head.to_string())),
        };

        match command {
            INSERT_TOKEN => Ok(Command::Insert(self.operand(command)?)),
            QUERY_TOKEN => {
                let low = self.operand(command)?;
                let high = self.operand(command)?;
                Ok(Command::Query { low, high })
            }
            _ => Err(ParseError::UnknownCommand(head.to_string())),
        }
    }
}

impl Iterator for CommandReader<'_> {
    type Item = Result<Command, ParseError>;

    fn next(&mut self) -> Option<Self::Item> {
        let head = self.tokens.next()?;
        Some(self.read_command(head))
    }
}

/// Parses a whole workload, stopping at the first malformed group.
pub fn parse_workload(input: &str) -> Result<Vec<Command>, ParseError> {
    CommandReader::new(input).collect()
}
