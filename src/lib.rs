//! Taskalign measures how closely one maintenance work-order layout's task
//! sequence matches a reference layout's. The core is a hybrid alignment: a
//! from-scratch [Needleman-Wunsch](https://en.wikipedia.org/wiki/Needleman%E2%80%93Wunsch_algorithm)
//! global alignment pads both sequences to a common gap structure, then
//! [Smith-Waterman](https://en.wikipedia.org/wiki/Smith%E2%80%93Waterman_algorithm)
//! extracts the best contiguous block within that padded pair and reduces it
//! to a similarity score in `[0, 1]`. Every comparison is a pure function of
//! its two token sequences; batches parallelize trivially across candidates.
//!
//! The traceback tie-breaks are deliberately unconventional (equal-token
//! diagonals beat the max-score direction globally; Left before Up before
//! Diagonal locally, with last-maximum-wins start selection) because
//! downstream score comparisons depend on the exact alignment path. See
//! [`global`] and [`local`] for details before "fixing" either.
//!
//! # Example: comparing two sequences
//!
//! ```rust
//! use taskalign::{GapScoring, hybrid_alignment};
//!
//! let seq1 = ["vlml", "flayout", "ecpcrev"];
//! let seq2 = ["vlml", "flayout", "eholdcod"];
//!
//! let result = hybrid_alignment(&seq1, &seq2, &GapScoring::default()).unwrap();
//! assert!(result.score >= 0.0 && result.score <= 1.0);
//! ```
//!
//! # Example: ranking layouts against a reference
//!
//! ```rust
//! use taskalign::{GapScoring, TaskSequence, rank_layouts, rank_layouts_parallel};
//!
//! let reference = TaskSequence {
//!     layout_id: "A10".into(),
//!     db_layout_id: 100,
//!     tasks: vec!["vlml".into(), "flayout".into(), "ecpcrev".into()],
//! };
//! let candidates = vec![TaskSequence {
//!     layout_id: "B20".into(),
//!     db_layout_id: 200,
//!     tasks: vec!["vlml".into(), "flayout".into()],
//! }];
//!
//! let records = rank_layouts(&candidates, &reference, &GapScoring::default()).unwrap();
//! // or across 8 threads
//! let records = rank_layouts_parallel(&candidates, &reference, &GapScoring::default(), 8).unwrap();
//! ```

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

mod r#const;
mod error;
pub mod global;
pub mod hybrid;
pub mod local;
mod matrix;
mod rank;

pub use error::AlignError;
pub use global::{AlignedPair, needleman_wunsch};
pub use hybrid::hybrid_alignment;
pub use local::{LocalAlignment, smith_waterman};
pub use r#const::GAP_MARKER;
pub use rank::{Ranker, SimilarityRecord, TaskSequence, rank_layouts, rank_layouts_parallel};

use r#const::*;

/// Gap/substitution scoring for the global alignment stage. The local stage
/// runs on fixed constants and takes no parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct GapScoring {
    /// Cost of a gap or substitution. Must be negative.
    pub penalty: i32,
    /// Reward for a matching token pair. Must be positive.
    pub reward: i32,
}

impl Default for GapScoring {
    fn default() -> Self {
        GapScoring {
            penalty: GAP_PENALTY,
            reward: MATCH_REWARD,
        }
    }
}

impl GapScoring {
    pub(crate) fn validate(&self) -> Result<(), AlignError> {
        if self.reward <= 0 || self.penalty >= 0 {
            return Err(AlignError::InvalidArgument {
                reward: self.reward,
                penalty: self.penalty,
            });
        }
        Ok(())
    }
}
