pub use error::{ClassifyError, DecodeError, DecodeErrorKind, Error};
pub use extremal::{extremal_vertex_sets, ExtremalDeletion};
pub use filter::{ParUnchurnable, Unchurnable, Verdict};
pub use graph::{Graph, Vertex};
pub use graph6::{decode_line, document::Span, Graph6Reader};
pub use membership::Classifier;
pub use patterns::ReferencePatterns;
pub use report::ReportWriter;

pub mod structure;

mod error;
mod extremal;
mod filter;
mod graph;
mod graph6;
mod membership;
mod patterns;
mod report;

/// Decodes graph6 text and returns the unchurnable graphs in input order.
pub fn unchurnable_graphs(source: &str) -> Result<Vec<Graph>, Error> {
    Classifier::default()
        .unchurnable(Graph6Reader::new(source.as_bytes()).map(|graph| graph.map_err(Error::from)))
        .collect()
}
