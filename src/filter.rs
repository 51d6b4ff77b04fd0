//! The unchurnable filter: classification of whole graph sequences.
//!
//! A graph is unchurnable when it lies outside `X ∪ Y` while deleting either
//! its minimum-degree or its maximum-degree vertices lands in `Y`. Each graph
//! is classified independently, so sequences can be filtered lazily one graph
//! at a time or in parallel batches; both keep the input order.

use std::collections::VecDeque;

use rayon::prelude::*;
use tracing::debug;

use crate::{error::ClassifyError, extremal::ExtremalDeletion, graph::Graph, membership::Classifier};

/// How a single graph was classified.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    /// The graph is in `X ∪ Y` and not eligible.
    InBaseClasses,
    /// At least one extremal deletion falls outside `Y`.
    Churnable { low_in_y: bool, high_in_y: bool },
    Unchurnable,
}

impl Verdict {
    pub fn is_unchurnable(&self) -> bool {
        matches!(self, Verdict::Unchurnable)
    }
}

impl<'p> Classifier<'p> {
    pub fn classify(&self, graph: &Graph) -> Result<Verdict, ClassifyError> {
        let complement = graph.complement();
        if self.in_x_or_y(graph, &complement) {
            return Ok(Verdict::InBaseClasses);
        }

        // Regular and vertex-free graphs are in X ∪ Y, so both degree bounds
        // exist and differ here.
        let deletion = ExtremalDeletion::new(graph)?;
        let low_in_y = self.in_y(&deletion.low);
        let high_in_y = self.in_y(&deletion.high);

        if low_in_y && high_in_y {
            Ok(Verdict::Unchurnable)
        } else {
            Ok(Verdict::Churnable {
                low_in_y,
                high_in_y,
            })
        }
    }

    pub fn is_unchurnable(&self, graph: &Graph) -> Result<bool, ClassifyError> {
        self.classify(graph).map(|verdict| verdict.is_unchurnable())
    }

    /// Lazily keeps the unchurnable graphs of `graphs`, in order.
    ///
    /// Errors from the input are passed through; the caller decides whether
    /// to stop.
    pub fn unchurnable<I, E>(self, graphs: I) -> Unchurnable<'p, I::IntoIter>
    where
        I: IntoIterator<Item = Result<Graph, E>>,
        E: From<ClassifyError>,
    {
        Unchurnable {
            classifier: self,
            graphs: graphs.into_iter(),
            index: 0,
        }
    }

    /// Classifies `graphs` on the rayon thread pool and returns the
    /// unchurnable ones in their original order.
    pub fn classify_batch(&self, graphs: Vec<Graph>) -> Result<Vec<Graph>, ClassifyError> {
        graphs
            .into_par_iter()
            .filter_map(|graph| match self.classify(&graph) {
                Ok(Verdict::Unchurnable) => Some(Ok(graph)),
                Ok(_) => None,
                Err(err) => Some(Err(err)),
            })
            .collect()
    }

    /// Like [`Classifier::unchurnable`], but decodes up to `batch_size`
    /// graphs at a time and classifies each batch in parallel.
    pub fn par_unchurnable<I, E>(self, graphs: I, batch_size: usize) -> ParUnchurnable<'p, I::IntoIter, E>
    where
        I: IntoIterator<Item = Result<Graph, E>>,
        E: From<ClassifyError>,
    {
        ParUnchurnable {
            classifier: self,
            graphs: graphs.into_iter(),
            batch_size: batch_size.max(1),
            accepted: VecDeque::new(),
            deferred: None,
            exhausted: false,
        }
    }
}

/// Iterator returned by [`Classifier::unchurnable`].
pub struct Unchurnable<'p, I> {
    classifier: Classifier<'p>,
    graphs: I,
    index: usize,
}

impl<I, E> Iterator for Unchurnable<'_, I>
where
    I: Iterator<Item = Result<Graph, E>>,
    E: From<ClassifyError>,
{
    type Item = Result<Graph, E>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let graph = match self.graphs.next()? {
                Ok(graph) => graph,
                Err(err) => return Some(Err(err)),
            };
            let index = self.index;
            self.index += 1;

            match self.classifier.classify(&graph) {
                Ok(Verdict::Unchurnable) => {
                    debug!(index, n = graph.vertex_count(), m = graph.edge_count(), "unchurnable");
                    return Some(Ok(graph));
                }
                Ok(verdict) => debug!(index, ?verdict, "discarded"),
                Err(err) => return Some(Err(err.into())),
            }
        }
    }
}

/// Iterator returned by [`Classifier::par_unchurnable`].
pub struct ParUnchurnable<'p, I, E> {
    classifier: Classifier<'p>,
    graphs: I,
    batch_size: usize,
    accepted: VecDeque<Graph>,
    /// An input error to report once the graphs read before it are drained.
    deferred: Option<E>,
    exhausted: bool,
}

impl<I, E> ParUnchurnable<'_, I, E>
where
    I: Iterator<Item = Result<Graph, E>>,
{
    fn next_batch(&mut self) -> Vec<Graph> {
        let mut batch = Vec::with_capacity(self.batch_size);
        while batch.len() < self.batch_size {
            match self.graphs.next() {
                Some(Ok(graph)) => batch.push(graph),
                Some(Err(err)) => {
                    self.deferred = Some(err);
                    self.exhausted = true;
                    break;
                }
                None => {
                    self.exhausted = true;
                    break;
                }
            }
        }
        batch
    }
}

impl<I, E> Iterator for ParUnchurnable<'_, I, E>
where
    I: Iterator<Item = Result<Graph, E>>,
    E: From<ClassifyError>,
{
    type Item = Result<Graph, E>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(graph) = self.accepted.pop_front() {
                return Some(Ok(graph));
            }
            if let Some(err) = self.deferred.take() {
                return Some(Err(err));
            }
            if self.exhausted {
                return None;
            }

            let batch = self.next_batch();
            let size = batch.len();
            match self.classifier.classify_batch(batch) {
                Ok(accepted) => {
                    debug!(size, accepted = accepted.len(), "classified batch");
                    self.accepted.extend(accepted);
                }
                Err(err) => {
                    self.exhausted = true;
                    self.deferred = None;
                    return Some(Err(err.into()));
                }
            }
        }
    }
}
