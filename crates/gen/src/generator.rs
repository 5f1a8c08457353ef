use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::PathBuf;
use std::time::Instant;

use log::{debug, info, trace};
use num_format::{Locale, ToFormattedString};
use rand::{rngs::StdRng, Rng, SeedableRng};

use crate::config::{DedupScope, GeneratorConfig, InstanceSize};
use crate::format::InstanceWriter;
use crate::sampler::{capacity, EdgeSampler};
use crate::{EdgeSet, Error, Result};

/// Describes a written instance file.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct InstanceSummary {
    pub size: InstanceSize,
    pub path: PathBuf,
    pub lines: usize,
}

/// Generates random weighted graph instances.
///
/// The generator owns the [`EdgeSet`] that records which node pairs have
/// been used. Depending on [`GeneratorConfig::dedup_scope`] the set is either
/// kept for the lifetime of the generator or cleared before each instance.
pub struct GraphInstanceGenerator<R = StdRng> {
    config: GeneratorConfig,
    rng: R,
    edges: EdgeSet,
}

impl GraphInstanceGenerator<StdRng> {
    /// Creates a generator that is seeded from [`GeneratorConfig::seed`] or,
    /// if absent, from system entropy.
    pub fn new(config: GeneratorConfig) -> Result<Self> {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self::with_rng(config, rng)
    }
}

impl<R: Rng> GraphInstanceGenerator<R> {
    pub fn with_rng(config: GeneratorConfig, rng: R) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            config,
            rng,
            edges: EdgeSet::new(),
        })
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Returns the node pairs used so far.
    pub fn edge_set(&self) -> &EdgeSet {
        &self.edges
    }

    /// Writes one file per configured size into the output directory.
    ///
    /// Sizes are generated in increasing order. The first failing instance
    /// aborts the run.
    pub fn run(&mut self) -> Result<Vec<InstanceSummary>> {
        let start = Instant::now();
        let sizes = self.config.sizes().collect::<Vec<_>>();

        let mut summaries = Vec::with_capacity(sizes.len());
        for size in sizes {
            summaries.push(self.generate_file(size)?);
        }

        info!(
            "Generated {} instances into {} in {:?}",
            summaries.len(),
            self.config.output_dir.display(),
            start.elapsed()
        );

        Ok(summaries)
    }

    /// Creates, or truncates, `V13E-{m}.in` in the output directory and
    /// writes the instance into it.
    ///
    /// The file is not touched if the instance cannot be generated because
    /// there are not enough unused node pairs left.
    pub fn generate_file(&mut self, size: InstanceSize) -> Result<InstanceSummary> {
        self.prepare(size)?;

        let path = self.config.output_dir.join(size.file_name());
        let start = Instant::now();

        let writer = BufWriter::new(File::create(&path)?);
        let (_, lines) = self.write_instance(size, writer)?;

        info!(
            "Wrote {} nodes and {} edges to {} in {:?}",
            size.node_count.to_formatted_string(&Locale::en),
            size.edge_count.to_formatted_string(&Locale::en),
            path.display(),
            start.elapsed()
        );

        Ok(InstanceSummary { size, path, lines })
    }

    /// Writes a single instance into the given writer and returns the writer
    /// together with the number of lines written.
    pub fn generate_instance<W: Write>(
        &mut self,
        size: InstanceSize,
        writer: W,
    ) -> Result<(W, usize)> {
        self.prepare(size)?;
        self.write_instance(size, writer)
    }

    fn prepare(&mut self, size: InstanceSize) -> Result<()> {
        trace!("Preparing instance {size:?}");

        if self.config.dedup_scope == DedupScope::File {
            self.edges.clear();
        }

        let requested = size.undirected_edge_count();
        let available = capacity(size.node_count, &self.edges);

        debug!(
            "Instance with {} nodes needs {} of {} unused node pairs ({} pairs reserved)",
            size.node_count.to_formatted_string(&Locale::en),
            requested.to_formatted_string(&Locale::en),
            available.to_formatted_string(&Locale::en),
            self.edges.len().to_formatted_string(&Locale::en),
        );

        if requested > available {
            return Err(Error::CapacityExhausted {
                node_count: size.node_count,
                requested,
                available,
            });
        }

        Ok(())
    }

    fn write_instance<W: Write>(&mut self, size: InstanceSize, writer: W) -> Result<(W, usize)> {
        let mut out = InstanceWriter::new(writer);
        out.write_self_loops(size.node_count)?;

        let mut sampler = EdgeSampler::new(
            &mut self.rng,
            &mut self.edges,
            size.node_count,
            self.config.min_weight..=self.config.max_weight,
            self.config.max_attempts,
        );

        for _ in 0..size.undirected_edge_count() {
            let edge = sampler.sample()?;
            out.write_edge(&edge)?;
        }

        out.finish()
    }
}
