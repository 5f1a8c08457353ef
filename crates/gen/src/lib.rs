//! A library that generates random weighted undirected graphs and writes
//! them as plain text instances, e.g. as inputs for shortest-path or minimum
//! spanning tree benchmarks.
//!
//! An instance is parameterized by a size exponent `k`. It has `n = 2^k - 1`
//! nodes, a self-loop of weight `1` on every node and `2n` distinct
//! undirected edges between distinct nodes, each with a random weight. Every
//! undirected edge is written twice, once per direction, so the file holds
//! `m = 4n` directed edge lines after the `n` self-loop lines.
//!
//! # File format
//!
//! ```ignore
//! > cat V13E-28.in
//! 1 1 1
//! 2 2 1
//! ...
//! 7 7 1
//! 6 1 17
//! 1 6 17
//! ...
//! ```
//!
//! Values are separated by a single whitespace. Every line but the last one
//! is terminated by a newline.
//!
//! # How to generate instances
//!
//! The default configuration generates the sizes `8..=15` into the current
//! working directory. Edges are unique across all instances of a run.
//!
//! ```no_run
//! use graph_gen::prelude::*;
//!
//! let mut generator = GraphInstanceGenerator::new(GeneratorConfig::default())?;
//! let summaries = generator.run()?;
//!
//! assert_eq!(summaries.len(), 8);
//! assert_eq!(summaries[0].path.file_name().unwrap(), "V13E-1020.in");
//! # Ok::<(), graph_gen::Error>(())
//! ```
//!
//! Instances can also be written to any [`std::io::Write`] using a seeded
//! random number generator:
//!
//! ```
//! use graph_gen::prelude::*;
//! use rand::{rngs::StdRng, SeedableRng};
//!
//! let mut generator =
//!     GraphInstanceGenerator::with_rng(GeneratorConfig::default(), StdRng::seed_from_u64(42))?;
//!
//! let (buf, lines) = generator.generate_instance(InstanceSize::new(3), Vec::new())?;
//! let text = String::from_utf8(buf).unwrap();
//!
//! assert_eq!(lines, 7 + 28);
//! assert!(text.starts_with("1 1 1\n2 2 1\n"));
//! assert!(!text.ends_with('\n'));
//! # Ok::<(), graph_gen::Error>(())
//! ```

pub mod config;
pub mod edge_set;
pub mod format;
pub mod generator;
pub mod prelude;
pub mod sampler;

pub use crate::config::{DedupScope, GeneratorConfig, InstanceSize};
pub use crate::edge_set::EdgeSet;
pub use crate::generator::{GraphInstanceGenerator, InstanceSummary};

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("error while writing graph instance")]
    IoError {
        #[from]
        source: std::io::Error,
    },
    #[error("invalid generator configuration: {0}")]
    InvalidConfig(String),
    #[error(
        "cannot place {requested} new edges between {node_count} nodes, \
         only {available} unused node pairs are left"
    )]
    CapacityExhausted {
        node_count: usize,
        requested: usize,
        available: usize,
    },
}

pub type Result<T> = std::result::Result<T, Error>;

/// An undirected edge between two distinct nodes.
///
/// The edge `(42, 1337, w)` is equivalent to the edge `(1337, 42, w)`, the
/// order only decides which direction is written first.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct WeightedEdge {
    pub source: usize,
    pub target: usize,
    pub weight: u32,
}

impl WeightedEdge {
    pub fn new(source: usize, target: usize, weight: u32) -> Self {
        Self {
            source,
            target,
            weight,
        }
    }
}
