use std::fmt;

/// Token that starts an insert group, `k <value>`.
pub const INSERT_TOKEN: char = 'k';

/// Token that starts a range-query group, `q <low> <high>`.
pub const QUERY_TOKEN: char = 'q';

/// A single request for the consuming data structure.
///
/// Commands order by variant first, which lets tests compare two workloads as multisets by
/// sorting them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Command {
    /// Store `value`.
    Insert(i32),
    /// Look up the stored values between `low` and `high`. Generated queries always have
    /// `low < high`.
    Query { low: i32, high: i32 },
}

impl Command {
    pub fn is_insert(&self) -> bool {
        matches!(self, Command::Insert(_))
    }

    pub fn is_query(&self) -> bool {
        matches!(self, Command::Query { .. })
    }
}

/// Formats the command as its token group, without any separator around it.
impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Command::Insert(value) => write!(f, "{INSERT_TOKEN} {value}"),
            Command::Query { low, high } => write!(f, "{QUERY_TOKEN} {low} {high}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_insert() {
        assert_eq!(Command::Insert(-42).to_string(), "k -42");
        assert_eq!(Command::Insert(7).to_string(), "k 7");
    }

    #[test]
    fn test_display_query() {
        let query = Command::Query { low: -100, high: 3 };
        assert_eq!(query.to_string(), "q -100 3");
    }

    #[test]
    fn test_inserts_sort_before_queries() {
        let mut commands = vec![
            Command::Query { low: -5, high: 5 },
            Command::Insert(100),
            Command::Insert(-100),
        ];
        commands.sort();
        assert_eq!(
            commands,
            vec![
                Command::Insert(-100),
                Command::Insert(100),
                Command::Query { low: -5, high: 5 },
            ]
        );
    }
}
