//! Replays a workload against an ordered set to produce the expected query answers.

use crate::command::Command;

use std::collections::BTreeSet;
use tracing::debug;

/// An ordered set of integers that can answer closed-range counts.
pub trait RangeIndex {
    /// Store `value`. Storing a value twice keeps a single copy.
    fn insert(&mut self, value: i32);

    /// Number of stored values `v` with `low <= v <= high`. Zero when `low > high`.
    fn count_range(&self, low: i32, high: i32) -> usize;
}

impl RangeIndex for BTreeSet<i32> {
    fn insert(&mut self, value: i32) {
        BTreeSet::insert(self, value);
    }

    fn count_range(&self, low: i32, high: i32) -> usize {
        // BTreeSet::range panics on an inverted range.
        if low > high {
            return 0;
        }
        self.range(low..=high).count()
    }
}

/// Applies `commands` in order to `index` and returns one answer per query.
pub fn replay<'a, I, X>(commands: I, index: &mut X) -> Vec<usize>
where
    I: IntoIterator<Item = &'a Command>,
    X: RangeIndex + ?Sized,
{
    let mut answers = Vec::new();
    for command in commands {
        match *command {
            Command::Insert(value) => index.insert(value),
            Command::Query { low, high } => answers.push(index.count_range(low, high)),
        }
    }
    debug!("{} queries answered.", answers.len());
    answers
}

/// Replays `commands` against a fresh `BTreeSet`.
pub fn expected_answers<'a, I>(commands: I) -> Vec<usize>
where
    I: IntoIterator<Item = &'a Command>,
{
    replay(commands, &mut BTreeSet::new())
}
