//! Per-invocation TF-IDF corpus statistics

use std::collections::HashMap;

use crate::text::tokenize;

/// Term statistics over a candidate pool.
///
/// Built fresh for every ranking pass and discarded afterwards; nothing is
/// shared or memoized across invocations.
#[derive(Debug, Default)]
pub struct TfIdf {
    documents: Vec<HashMap<String, usize>>,
    document_frequency: HashMap<String, usize>,
}

impl TfIdf {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one document to the corpus
    pub fn add_document(&mut self, text: &str) {
        let mut counts: HashMap<String, usize> = HashMap::new();
        for term in tokenize(text) {
            *counts.entry(term).or_insert(0) += 1;
        }

        for term in counts.keys() {
            *self
                .document_frequency
                .entry(term.clone())
                .or_insert(0) += 1;
        }

        self.documents.push(counts);
    }

    /// Number of documents in the corpus
    pub fn len(&self) -> usize {
        self.documents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }

    /// TF-IDF weight of a term within one document:
    /// `tf × (1 + ln(N / (1 + df)))`.
    ///
    /// Terms absent from the document contribute zero.
    pub fn tfidf(&self, term: &str, doc: usize) -> f64 {
        let counts = match self.documents.get(doc) {
            Some(counts) => counts,
            None => return 0.0,
        };

        let tf = counts.get(term).copied().unwrap_or(0) as f64;
        if tf == 0.0 {
            return 0.0;
        }

        let n = self.documents.len() as f64;
        let df = self.document_frequency.get(term).copied().unwrap_or(0) as f64;

        tf * (1.0 + (n / (1.0 + df)).ln())
    }
}
