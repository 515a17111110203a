//! Board limits and engine defaults.
//!
//! Board size is chosen at runtime but must stay within
//! [`MIN_BOARD_SIZE`]..=[`MAX_BOARD_SIZE`]. The upper bound keeps every
//! coordinate a single digit, which the recorded log format relies on.

use crate::board::GameMode;

// =============================================================================
// Board Geometry
// =============================================================================

/// Smallest playable board (one triple fits exactly in a row).
pub const MIN_BOARD_SIZE: usize = 3;

/// Largest playable board.
pub const MAX_BOARD_SIZE: usize = 9;

/// Board size used when none is given.
pub const DEFAULT_BOARD_SIZE: usize = MIN_BOARD_SIZE;

/// Length of a scoring line.
pub const TRIPLE_LEN: usize = 3;

// =============================================================================
// Game Defaults
// =============================================================================

/// Mode of a freshly constructed board.
pub const DEFAULT_MODE: GameMode = GameMode::General;

/// Engine name reported by the text protocol.
pub const ENGINE_NAME: &str = "sos-engine";

/// Returns true if `size` is an acceptable board size.
pub fn is_valid_size(size: usize) -> bool {
    (MIN_BOARD_SIZE..=MAX_BOARD_SIZE).contains(&size)
}
