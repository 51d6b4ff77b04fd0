//! The plain-text report of unchurnable graphs.
//!
//! ```text
//! Graph 1
//! 5 4
//! 0 1
//! 0 2
//! 0 3
//! 0 4
//! ```
//!
//! Graphs are numbered from 1 in the order they are written; each header is
//! followed by the vertex and edge counts and one line per edge.

use std::io::{self, Write};

use crate::graph::Graph;

pub struct ReportWriter<W: Write> {
    out: W,
    written: usize,
}

impl<W: Write> ReportWriter<W> {
    pub fn new(out: W) -> Self {
        ReportWriter { out, written: 0 }
    }

    pub fn write_graph(&mut self, graph: &Graph) -> io::Result<()> {
        self.written += 1;
        writeln!(self.out, "Graph {}", self.written)?;
        writeln!(self.out, "{} {}", graph.vertex_count(), graph.edge_count())?;
        for (u, v) in graph.edges() {
            writeln!(self.out, "{u} {v}")?;
        }
        Ok(())
    }

    /// Number of graphs written so far.
    pub fn written(&self) -> usize {
        self.written
    }

    /// Flushes the output and returns the number of graphs written.
    pub fn finish(mut self) -> io::Result<usize> {
        self.out.flush()?;
        Ok(self.written)
    }
}
