/// Placeholder emitted when a position has no counterpart in the other sequence.
pub const GAP_MARKER: &str = "-";

// Global (Needleman-Wunsch) defaults. Overridable per call via `GapScoring`.
pub const GAP_PENALTY: i32 = -1;
pub const MATCH_REWARD: i32 = 1;

// Local (Smith-Waterman) scores. Fixed, not configurable.
pub const LOCAL_MATCH_SCORE: i32 = 1;
pub const LOCAL_MISMATCH_PENALTY: i32 = -1;
pub const LOCAL_GAP_PENALTY: i32 = -1;

/// Upper bound on score/trace matrix cells per alignment. Task sequences are
/// tens of tokens in practice; anything past this cap is a caller bug rather
/// than a workload we want to allocate O(n*m) for.
pub const MAX_MATRIX_CELLS: usize = 1 << 26;
