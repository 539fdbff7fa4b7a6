use crate::command::Command;
use crate::error::WorkloadError;
use crate::workload::Workload;

use rand::seq::SliceRandom;
use rand::Rng;
use std::ops::RangeInclusive;
use tracing::debug;

/// Bound of the default value range, `[-INT_RANGE, INT_RANGE]`.
pub const INT_RANGE: i32 = 100;

/// Parameters for a single generation run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorConfig {
    /// Number of `k` commands to emit.
    pub inserts: usize,
    /// Number of `q` commands to emit.
    pub queries: usize,
    /// Closed range every sampled integer is drawn from.
    pub value_range: RangeInclusive<i32>,
}

impl GeneratorConfig {
    pub fn new(inserts: usize, queries: usize) -> Self {
        Self {
            inserts,
            queries,
            ..Default::default()
        }
    }
}

/// An empty workload over `[-100, 100]`.
impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            inserts: 0,
            queries: 0,
            value_range: -INT_RANGE..=INT_RANGE,
        }
    }
}

/// Samples insert and range-query commands uniformly from a fixed value range.
///
/// The generator holds no random state of its own: every call to [`WorkloadGenerator::generate`]
/// draws from the `Rng` the caller passes in, so a seeded rng reproduces the same workload.
#[derive(Debug, Clone)]
pub struct WorkloadGenerator {
    value_range: RangeInclusive<i32>,
}

impl Default for WorkloadGenerator {
    fn default() -> Self {
        Self {
            value_range: GeneratorConfig::default().value_range,
        }
    }
}

impl WorkloadGenerator {
    /// Creates a generator over a custom value range. The range needs at least two distinct
    /// values, otherwise no query with `low < high` exists.
    pub fn with_value_range(value_range: RangeInclusive<i32>) -> Result<Self, WorkloadError> {
        if value_range.start() >= value_range.end() {
            return Err(WorkloadError::DegenerateRange {
                low: *value_range.start(),
                high: *value_range.end(),
            });
        }
        Ok(Self { value_range })
    }

    pub fn from_config(config: &GeneratorConfig) -> Result<Self, WorkloadError> {
        Self::with_value_range(config.value_range.clone())
    }

    /// Builds `inserts` insert commands followed by `queries` query commands, then shuffles the
    /// whole sequence.
    pub fn generate<R: Rng + ?Sized>(
        &self,
        inserts: usize,
        queries: usize,
        rng: &mut R,
    ) -> Workload {
        let mut commands = Vec::with_capacity(inserts + queries);

        for _ in 0..inserts {
            commands.push(self.sample_insert(rng));
        }
        for _ in 0..queries {
            commands.push(self.sample_query(rng));
        }

        commands.shuffle(rng);
        debug!(inserts, queries, "Workload generated and shuffled.");

        Workload::from(commands)
    }

    pub fn sample_insert<R: Rng + ?Sized>(&self, rng: &mut R) -> Command {
        Command::Insert(rng.gen_range(self.value_range.clone()))
    }

    /// Draws two independent values, resampling the second until it differs from the first.
    /// There is no cap on the number of redraws; each one fails with probability 1/N over a
    /// range of N values.
    pub fn sample_query<R: Rng + ?Sized>(&self, rng: &mut R) -> Command {
        let a = rng.gen_range(self.value_range.clone());
        let mut b = rng.gen_range(self.value_range.clone());
        while b == a {
            b = rng.gen_range(self.value_range.clone());
        }
        Command::Query {
            low: a.min(b),
            high: a.max(b),
        }
    }
}

/// Generates the workload described by `config` with the caller's rng.
pub fn generate<R: Rng + ?Sized>(
    config: &GeneratorConfig,
    rng: &mut R,
) -> Result<Workload, WorkloadError> {
    let generator = WorkloadGenerator::from_config(config)?;
    Ok(generator.generate(config.inserts, config.queries, rng))
}
