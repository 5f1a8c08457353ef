use std::io::Write;

use crate::{Result, WeightedEdge};

/// The weight of every self-loop.
pub const SELF_LOOP_WEIGHT: u32 = 1;

/// Writes a graph instance as one `source target weight` triple per line.
///
/// Lines are separated by `\n`. The last line written is not terminated,
/// i.e. the output never ends with a newline.
pub struct InstanceWriter<W: Write> {
    inner: W,
    lines: usize,
}

impl<W: Write> InstanceWriter<W> {
    pub fn new(inner: W) -> Self {
        Self { inner, lines: 0 }
    }

    /// Writes `i i 1` for every node `i` in `[1, node_count]`.
    pub fn write_self_loops(&mut self, node_count: usize) -> Result<()> {
        for node in 1..=node_count {
            self.write_line(node, node, SELF_LOOP_WEIGHT)?;
        }
        Ok(())
    }

    /// Writes the edge in both directions, `u v w` followed by `v u w`.
    pub fn write_edge(&mut self, edge: &WeightedEdge) -> Result<()> {
        let WeightedEdge {
            source,
            target,
            weight,
        } = *edge;

        self.write_line(source, target, weight)?;
        self.write_line(target, source, weight)
    }

    fn write_line(&mut self, source: usize, target: usize, weight: u32) -> Result<()> {
        if self.lines > 0 {
            self.inner.write_all(b"\n")?;
        }
        write!(self.inner, "{source} {target} {weight}")?;
        self.lines += 1;
        Ok(())
    }

    pub fn lines(&self) -> usize {
        self.lines
    }

    /// Flushes the output and returns the inner writer together with the
    /// number of lines written.
    pub fn finish(mut self) -> Result<(W, usize)> {
        self.inner.flush()?;
        Ok((self.inner, self.lines))
    }
}
