use std::path::PathBuf;

use crate::{Error, Result};

/// The largest supported size exponent.
pub const MAX_LOG2: u32 = 31;

/// Defines how long a node pair stays reserved once it has been used.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
pub enum DedupScope {
    /// A single edge set is shared by all instances of a run. A node pair
    /// used in one instance is never used again in a later instance.
    #[default]
    Run,
    /// Every instance starts with an empty edge set.
    File,
}

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "clap", derive(clap::Args))]
pub struct GeneratorConfig {
    /// The size exponent of the first instance. An instance with exponent
    /// `k` has `2^k - 1` nodes.
    #[cfg_attr(feature = "clap", arg(long, default_value_t = GeneratorConfig::DEFAULT_MIN_LOG2))]
    pub min_log2: u32,

    /// The size exponent of the last instance (inclusive).
    #[cfg_attr(feature = "clap", arg(long, default_value_t = GeneratorConfig::DEFAULT_MAX_LOG2))]
    pub max_log2: u32,

    /// Whether used node pairs are tracked across the whole run or per file.
    #[cfg_attr(feature = "clap", arg(long, value_enum, default_value_t = DedupScope::Run))]
    pub dedup_scope: DedupScope,

    /// Number of random draws per edge before the sampler falls back to
    /// picking among the remaining unused node pairs.
    #[cfg_attr(feature = "clap", arg(long, default_value_t = GeneratorConfig::DEFAULT_MAX_ATTEMPTS))]
    pub max_attempts: usize,

    /// Smallest edge weight (inclusive).
    #[cfg_attr(feature = "clap", arg(long, default_value_t = GeneratorConfig::DEFAULT_MIN_WEIGHT))]
    pub min_weight: u32,

    /// Largest edge weight (inclusive).
    #[cfg_attr(feature = "clap", arg(long, default_value_t = GeneratorConfig::DEFAULT_MAX_WEIGHT))]
    pub max_weight: u32,

    /// Seed for the random number generator. Seeded from system entropy
    /// if absent.
    #[cfg_attr(feature = "clap", arg(long))]
    pub seed: Option<u64>,

    /// Directory the instance files are written to.
    #[cfg_attr(feature = "clap", arg(short, long, default_value = "."))]
    pub output_dir: PathBuf,
}

impl GeneratorConfig {
    pub const DEFAULT_MIN_LOG2: u32 = 8;
    pub const DEFAULT_MAX_LOG2: u32 = 15;
    pub const DEFAULT_MAX_ATTEMPTS: usize = 1024;
    pub const DEFAULT_MIN_WEIGHT: u32 = 1;
    pub const DEFAULT_MAX_WEIGHT: u32 = 99;

    pub fn new(min_log2: u32, max_log2: u32) -> Self {
        Self {
            min_log2,
            max_log2,
            ..Self::default()
        }
    }

    pub fn dedup_scope(mut self, dedup_scope: DedupScope) -> Self {
        self.dedup_scope = dedup_scope;
        self
    }

    pub fn max_attempts(mut self, max_attempts: usize) -> Self {
        self.max_attempts = max_attempts;
        self
    }

    pub fn weights(mut self, min_weight: u32, max_weight: u32) -> Self {
        self.min_weight = min_weight;
        self.max_weight = max_weight;
        self
    }

    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn output_dir(mut self, output_dir: impl Into<PathBuf>) -> Self {
        self.output_dir = output_dir.into();
        self
    }

    pub fn validate(&self) -> Result<()> {
        let Self {
            min_log2,
            max_log2,
            max_attempts,
            min_weight,
            max_weight,
            ..
        } = *self;

        if min_log2 == 0 || max_log2 > MAX_LOG2 {
            return Err(Error::InvalidConfig(format!(
                "size exponents must be within 1..={MAX_LOG2}, got {min_log2}..={max_log2}"
            )));
        }
        if min_log2 > max_log2 {
            return Err(Error::InvalidConfig(format!(
                "min_log2 ({min_log2}) must not exceed max_log2 ({max_log2})"
            )));
        }
        if min_weight == 0 {
            return Err(Error::InvalidConfig("min_weight must be positive".into()));
        }
        if min_weight > max_weight {
            return Err(Error::InvalidConfig(format!(
                "min_weight ({min_weight}) must not exceed max_weight ({max_weight})"
            )));
        }
        if max_attempts == 0 {
            return Err(Error::InvalidConfig("max_attempts must be positive".into()));
        }

        Ok(())
    }

    /// Returns the instance sizes of a run in generation order.
    pub fn sizes(&self) -> impl Iterator<Item = InstanceSize> {
        (self.min_log2..=self.max_log2).map(InstanceSize::new)
    }
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            min_log2: Self::DEFAULT_MIN_LOG2,
            max_log2: Self::DEFAULT_MAX_LOG2,
            dedup_scope: DedupScope::default(),
            max_attempts: Self::DEFAULT_MAX_ATTEMPTS,
            min_weight: Self::DEFAULT_MIN_WEIGHT,
            max_weight: Self::DEFAULT_MAX_WEIGHT,
            seed: None,
            output_dir: PathBuf::from("."),
        }
    }
}

/// The dimensions of a single instance.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct InstanceSize {
    pub log2_n: u32,
    /// `n`, the number of nodes and self-loops.
    pub node_count: usize,
    /// `m`, the number of directed edge lines, i.e. `4n`.
    pub edge_count: usize,
}

impl InstanceSize {
    pub fn new(log2_n: u32) -> Self {
        let node_count = (1_usize << log2_n) - 1;
        Self {
            log2_n,
            node_count,
            edge_count: 4 * node_count,
        }
    }

    /// Returns the number of distinct undirected edges, each of which is
    /// written as two directed lines.
    pub fn undirected_edge_count(&self) -> usize {
        self.edge_count / 2
    }

    pub fn line_count(&self) -> usize {
        self.node_count + self.edge_count
    }

    pub fn file_name(&self) -> String {
        format!("V13E-{}.in", self.edge_count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_covers_source_sizes() {
        let config = GeneratorConfig::default();
        assert!(config.validate().is_ok());

        let sizes = config.sizes().collect::<Vec<_>>();
        assert_eq!(sizes.len(), 8);
        assert_eq!(sizes.first().map(|s| s.log2_n), Some(8));
        assert_eq!(sizes.last().map(|s| s.log2_n), Some(15));
        assert_eq!(config.dedup_scope, DedupScope::Run);
        assert_eq!((config.min_weight, config.max_weight), (1, 99));
    }

    #[test]
    fn instance_size() {
        let size = InstanceSize::new(8);
        assert_eq!(size.node_count, 255);
        assert_eq!(size.edge_count, 1020);
        assert_eq!(size.undirected_edge_count(), 510);
        assert_eq!(size.line_count(), 1275);
        assert_eq!(size.file_name(), "V13E-1020.in");

        let size = InstanceSize::new(15);
        assert_eq!(size.node_count, 32767);
        assert_eq!(size.file_name(), "V13E-131068.in");
    }

    #[test]
    fn validate_rejects_invalid_configs() {
        let invalid = [
            GeneratorConfig::new(0, 4),
            GeneratorConfig::new(4, MAX_LOG2 + 1),
            GeneratorConfig::new(9, 8),
            GeneratorConfig::default().weights(0, 10),
            GeneratorConfig::default().weights(10, 9),
            GeneratorConfig::default().max_attempts(0),
        ];

        for config in invalid {
            assert!(
                matches!(config.validate(), Err(Error::InvalidConfig(_))),
                "expected {config:?} to be rejected"
            );
        }
    }

    #[test]
    fn single_weight_is_valid() {
        assert!(GeneratorConfig::default().weights(7, 7).validate().is_ok());
    }
}
