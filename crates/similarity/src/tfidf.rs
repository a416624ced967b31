//! TF-IDF vectorization over a fixed document collection.
//!
//! ## Weighting
//! - tf: raw term count within the document
//! - idf: smoothed, `ln((1 + n) / (1 + df)) + 1`
//! - each vector is L2-normalized; a document with no tokens stays all-zero
//!
//! Vectors are sparse, stored as `(term, weight)` pairs sorted by term id
//! so dot products are a linear merge.

use crate::tokenizer::tokenize;
use rayon::prelude::*;
use std::collections::HashMap;
use tracing::debug;

/// Column id of a vocabulary term
pub type TermId = usize;

/// L2-normalized sparse TF-IDF vector
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SparseVector {
    entries: Vec<(TermId, f64)>,
}

impl SparseVector {
    pub fn entries(&self) -> &[(TermId, f64)] {
        &self.entries
    }

    /// True when the document had no surviving tokens
    pub fn is_zero(&self) -> bool {
        self.entries.is_empty()
    }

    /// Dot product via sorted merge
    pub fn dot(&self, other: &SparseVector) -> f64 {
        let (mut i, mut j) = (0, 0);
        let mut sum = 0.0;
        while i < self.entries.len() && j < other.entries.len() {
            let (a_term, a_weight) = self.entries[i];
            let (b_term, b_weight) = other.entries[j];
            match a_term.cmp(&b_term) {
                std::cmp::Ordering::Less => i += 1,
                std::cmp::Ordering::Greater => j += 1,
                std::cmp::Ordering::Equal => {
                    sum += a_weight * b_weight;
                    i += 1;
                    j += 1;
                }
            }
        }
        sum
    }
}

/// Fitted vocabulary plus the TF-IDF vector of every input document
#[derive(Debug, Default)]
pub struct TfidfModel {
    vocabulary: HashMap<String, TermId>,
    idf: Vec<f64>,
    vectors: Vec<SparseVector>,
}

impl TfidfModel {
    /// Fit the vocabulary and idf on `documents` and transform them.
    ///
    /// Tokenization and weighting run in parallel; output order matches
    /// input order.
    pub fn fit_transform<S: AsRef<str> + Sync>(documents: &[S]) -> Self {
        let tokenized: Vec<Vec<String>> = documents
            .par_iter()
            .map(|doc| tokenize(doc.as_ref()))
            .collect();

        // Vocabulary ids follow first appearance so the model is deterministic
        let mut vocabulary: HashMap<String, TermId> = HashMap::new();
        let mut document_frequency: Vec<usize> = Vec::new();
        for tokens in &tokenized {
            let mut seen: Vec<TermId> = Vec::new();
            for token in tokens {
                let next_id = vocabulary.len();
                let id = *vocabulary.entry(token.clone()).or_insert_with(|| {
                    document_frequency.push(0);
                    next_id
                });
                if !seen.contains(&id) {
                    seen.push(id);
                    document_frequency[id] += 1;
                }
            }
        }

        let n = documents.len() as f64;
        let idf: Vec<f64> = document_frequency
            .iter()
            .map(|&df| ((1.0 + n) / (1.0 + df as f64)).ln() + 1.0)
            .collect();

        let vectors: Vec<SparseVector> = tokenized
            .par_iter()
            .map(|tokens| weigh(tokens, &vocabulary, &idf))
            .collect();

        debug!(
            "Fitted TF-IDF over {} documents, vocabulary size {}",
            documents.len(),
            vocabulary.len()
        );

        Self {
            vocabulary,
            idf,
            vectors,
        }
    }

    pub fn vocabulary_size(&self) -> usize {
        self.vocabulary.len()
    }

    /// Inverse document frequency of a term, if it is in the vocabulary
    pub fn idf(&self, term: &str) -> Option<f64> {
        self.vocabulary.get(term).map(|&id| self.idf[id])
    }

    pub fn vectors(&self) -> &[SparseVector] {
        &self.vectors
    }
}

/// Count terms, apply idf and L2-normalize
fn weigh(tokens: &[String], vocabulary: &HashMap<String, TermId>, idf: &[f64]) -> SparseVector {
    let mut counts: HashMap<TermId, u32> = HashMap::new();
    for token in tokens {
        if let Some(&id) = vocabulary.get(token) {
            *counts.entry(id).or_insert(0) += 1;
        }
    }

    let mut entries: Vec<(TermId, f64)> = counts
        .into_iter()
        .map(|(id, count)| (id, count as f64 * idf[id]))
        .collect();
    entries.sort_by_key(|&(id, _)| id);

    let norm = entries.iter().map(|(_, w)| w * w).sum::<f64>().sqrt();
    if norm > 0.0 {
        for (_, weight) in entries.iter_mut() {
            *weight /= norm;
        }
    } else {
        entries.clear();
    }

    SparseVector { entries }
}
