//! Batch ranking of candidate layouts against a reference layout.
//!
//! Callers extract each layout's ordered task codes (task-code joined with
//! group-code reference data, sorted by item order) and hand them over as
//! plain [`TaskSequence`] values; persistence of the resulting records is
//! equally out of scope here. Every candidate is compared to the reference
//! with [`hybrid_alignment`] independently, so the batch parallelizes
//! trivially across candidates.

use std::cmp::Ordering as CmpOrdering;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::thread;

use itertools::Itertools;
#[cfg(feature = "parallel_sort")]
use rayon::prelude::*;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::GapScoring;
use crate::error::AlignError;
use crate::hybrid::hybrid_alignment;

/// One layout's ordered task-code sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct TaskSequence {
    /// Human-facing layout identifier (the work-order item number)
    pub layout_id: String,
    /// Database identifier of the layout row
    pub db_layout_id: i64,
    /// Task codes in item/sort order
    pub tasks: Vec<String>,
}

/// Outcome of comparing one candidate layout (the `ref` side, seq1) against
/// the reference layout (the `test` side, seq2). Field and serde names follow
/// the upstream result schema.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SimilarityRecord {
    #[cfg_attr(feature = "serde", serde(rename = "LayoutIdRef"))]
    pub db_layout_id_ref: i64,
    pub layout_ref: String,
    #[cfg_attr(feature = "serde", serde(rename = "LayoutIdTest"))]
    pub db_layout_id_test: i64,
    pub layout_test: String,
    #[cfg_attr(feature = "serde", serde(rename = "TaskSequenceRef"))]
    pub seq1: Vec<String>,
    #[cfg_attr(feature = "serde", serde(rename = "TaskSequenceTest"))]
    pub seq2: Vec<String>,
    #[cfg_attr(feature = "serde", serde(rename = "AlignTaskSequenceRef"))]
    pub align_seq1: Vec<String>,
    #[cfg_attr(feature = "serde", serde(rename = "AlignTaskSequenceTest"))]
    pub align_seq2: Vec<String>,
    #[cfg_attr(feature = "serde", serde(rename = "Score"))]
    pub score: f64,
}

// Records sort by score descending, then layout_ref descending, matching the
// upstream report order
impl Ord for SimilarityRecord {
    fn cmp(&self, other: &Self) -> CmpOrdering {
        other
            .score
            .total_cmp(&self.score)
            .then_with(|| other.layout_ref.cmp(&self.layout_ref))
    }
}
impl PartialOrd for SimilarityRecord {
    fn partial_cmp(&self, other: &Self) -> Option<CmpOrdering> {
        Some(std::cmp::Ord::cmp(self, other))
    }
}
impl PartialEq for SimilarityRecord {
    fn eq(&self, other: &Self) -> bool {
        self.score.to_bits() == other.score.to_bits() && self.layout_ref == other.layout_ref
    }
}
impl Eq for SimilarityRecord {}

/// Compares candidate layouts against one reference layout. Useful over the
/// free functions when the same reference is ranked against several candidate
/// lists.
#[derive(Debug, Clone)]
pub struct Ranker<'a> {
    reference: &'a TaskSequence,
    scoring: GapScoring,
}

impl<'a> Ranker<'a> {
    pub fn new(reference: &'a TaskSequence, scoring: &GapScoring) -> Self {
        Self {
            reference,
            scoring: *scoring,
        }
    }

    /// Ranks `candidates`, sorted by score descending then layout id
    /// descending.
    pub fn rank(&self, candidates: &[TaskSequence]) -> Result<Vec<SimilarityRecord>, AlignError> {
        let mut records = Vec::with_capacity(candidates.len());
        self.rank_into(candidates, &mut records)?;

        #[cfg(feature = "parallel_sort")]
        records.par_sort_unstable();
        #[cfg(not(feature = "parallel_sort"))]
        records.sort_unstable();

        Ok(records)
    }

    fn rank_into(
        &self,
        candidates: &[TaskSequence],
        records: &mut Vec<SimilarityRecord>,
    ) -> Result<(), AlignError> {
        for candidate in candidates {
            let alignment =
                hybrid_alignment(&candidate.tasks, &self.reference.tasks, &self.scoring)?;

            log::debug!(
                "compared layout {}/{}: score {:.3}",
                candidate.layout_id,
                self.reference.layout_id,
                alignment.score,
            );

            records.push(SimilarityRecord {
                db_layout_id_ref: candidate.db_layout_id,
                layout_ref: candidate.layout_id.clone(),
                db_layout_id_test: self.reference.db_layout_id,
                layout_test: self.reference.layout_id.clone(),
                seq1: candidate.tasks.clone(),
                seq2: self.reference.tasks.clone(),
                align_seq1: alignment.seq1,
                align_seq2: alignment.seq2,
                score: alignment.score,
            });
        }

        Ok(())
    }
}

/// Ranks every candidate layout against `reference` on the calling thread.
pub fn rank_layouts(
    candidates: &[TaskSequence],
    reference: &TaskSequence,
    scoring: &GapScoring,
) -> Result<Vec<SimilarityRecord>, AlignError> {
    let ranker = Ranker::new(reference, scoring);
    let records = ranker.rank(candidates)?;

    log::info!(
        "ranked {} layouts against {}",
        records.len(),
        reference.layout_id,
    );

    Ok(records)
}

/// Ranks every candidate layout against `reference` across `threads` worker
/// threads. Each comparison is independent, so candidates are handed out in
/// chunks and the per-thread results are merged by rank order. Any failing
/// comparison aborts the whole batch.
pub fn rank_layouts_parallel(
    candidates: &[TaskSequence],
    reference: &TaskSequence,
    scoring: &GapScoring,
    threads: usize,
) -> Result<Vec<SimilarityRecord>, AlignError> {
    if candidates.is_empty() {
        return Ok(vec![]);
    }

    // Smaller chunks enable better load balancing via stealing, but too small
    // increases atomic contention; one alignment is heavy enough that modest
    // chunks amortize the atomic traffic
    let chunk_size = 64;
    let num_chunks = candidates.len().div_ceil(chunk_size);
    let next_chunk = AtomicUsize::new(0);

    let ranker = Ranker::new(reference, scoring);

    thread::scope(|s| {
        let handles: Vec<_> = (0..threads)
            .map(|_| {
                s.spawn(|| -> Result<Vec<SimilarityRecord>, AlignError> {
                    let mut local_records = Vec::new();

                    loop {
                        // Claim next available chunk
                        let chunk_idx = next_chunk.fetch_add(1, Ordering::Relaxed);
                        if chunk_idx >= num_chunks {
                            break;
                        }

                        let start = chunk_idx * chunk_size;
                        let end = (start + chunk_size).min(candidates.len());
                        ranker.rank_into(&candidates[start..end], &mut local_records)?;
                    }

                    // Each thread sorts so that we can perform k-way merge
                    local_records.sort_unstable();

                    Ok(local_records)
                })
            })
            .collect();

        let sorted: Vec<Vec<SimilarityRecord>> = handles
            .into_iter()
            .map(|handle| handle.join().unwrap())
            .collect::<Result<_, AlignError>>()?;

        Ok(sorted.into_iter().kmerge().collect())
    })
}
