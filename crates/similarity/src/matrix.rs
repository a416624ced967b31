//! Dense pairwise cosine similarity matrix.
//!
//! Memory is O(N²); fine for catalogs of hundreds to low thousands of
//! movies, which is the only size this workspace targets.

use crate::tfidf::SparseVector;
use rayon::prelude::*;

/// Square, symmetric, row-major matrix of cosine similarities
#[derive(Debug, Clone, Default)]
pub struct SimilarityMatrix {
    size: usize,
    values: Vec<f64>,
}

impl SimilarityMatrix {
    /// Compute cosine similarity for every pair of L2-normalized vectors.
    ///
    /// Only the upper triangle is computed (rows in parallel) and then
    /// mirrored, so `get(i, j) == get(j, i)` holds exactly. The diagonal is
    /// 1.0 for non-zero vectors; a zero vector scores 0.0 against
    /// everything, itself included.
    pub fn from_vectors(vectors: &[SparseVector]) -> Self {
        let size = vectors.len();

        let upper: Vec<Vec<f64>> = (0..size)
            .into_par_iter()
            .map(|i| {
                let row = &vectors[i];
                (i..size)
                    .map(|j| {
                        if row.is_zero() || vectors[j].is_zero() {
                            0.0
                        } else if i == j {
                            1.0
                        } else {
                            // Rounding can push a normalized dot product past 1
                            row.dot(&vectors[j]).clamp(0.0, 1.0)
                        }
                    })
                    .collect()
            })
            .collect();

        let mut values = vec![0.0; size * size];
        for (i, row) in upper.into_iter().enumerate() {
            for (offset, score) in row.into_iter().enumerate() {
                let j = i + offset;
                values[i * size + j] = score;
                values[j * size + i] = score;
            }
        }

        Self { size, values }
    }

    /// Dimension (number of documents)
    pub fn size(&self) -> usize {
        self.size
    }

    /// Similarity of document `i` to document `j`
    pub fn get(&self, i: usize, j: usize) -> Option<f64> {
        if i < self.size && j < self.size {
            Some(self.values[i * self.size + j])
        } else {
            None
        }
    }

    /// All similarities of document `i`, indexed by document
    pub fn row(&self, i: usize) -> Option<&[f64]> {
        if i < self.size {
            Some(&self.values[i * self.size..(i + 1) * self.size])
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tfidf::TfidfModel;

    fn build(docs: &[&str]) -> SimilarityMatrix {
        let model = TfidfModel::fit_transform(docs);
        SimilarityMatrix::from_vectors(model.vectors())
    }

    #[test]
    fn test_symmetric_with_unit_diagonal() {
        let matrix = build(&[
            "thief steals secrets through dreams",
            "explorers travel through a wormhole in space",
            "space station crew fights for survival",
        ]);

        assert_eq!(matrix.size(), 3);
        for i in 0..3 {
            assert_eq!(matrix.get(i, i), Some(1.0));
            for j in 0..3 {
                assert_eq!(matrix.get(i, j), matrix.get(j, i));
            }
        }
        // Shared "space" makes 1 and 2 closer than 0 and 2
        assert!(matrix.get(1, 2).unwrap() > matrix.get(0, 2).unwrap());
    }

    #[test]
    fn test_zero_vector_row_is_all_zero() {
        let matrix = build(&["", "a film about dreams", "the"]);

        for j in 0..3 {
            assert_eq!(matrix.get(0, j), Some(0.0));
            assert_eq!(matrix.get(2, j), Some(0.0));
        }
        assert_eq!(matrix.get(1, 1), Some(1.0));
        assert!(matrix.row(0).unwrap().iter().all(|s| !s.is_nan()));
    }

    #[test]
    fn test_out_of_range() {
        let matrix = build(&["one document"]);
        assert!(matrix.get(0, 1).is_none());
        assert!(matrix.row(1).is_none());
    }

    #[test]
    fn test_empty() {
        let matrix = SimilarityMatrix::from_vectors(&[]);
        assert_eq!(matrix.size(), 0);
        assert!(matrix.row(0).is_none());
    }
}
