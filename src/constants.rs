//! Engine constants
//!
//! Board geometry, direction tables, piece values and evaluation weights.
//! Everything that tunes the engine's behaviour lives here so the evaluator and
//! the search read from one place.

/// Width and height of one layer
pub const BOARD_SIZE: usize = 8;

/// Number of stacked layers
pub const LAYER_COUNT: usize = 3;

/// The contested middle layer, rewarded by the evaluator
pub const MIDDLE_LAYER: u8 = 1;

// Direction tables as (dx, dy). Order matters: it fixes generation order and
// therefore the search tie-break.
pub const ROOK_DIRS: [(i8, i8); 4] = [(0, 1), (0, -1), (1, 0), (-1, 0)];
pub const BISHOP_DIRS: [(i8, i8); 4] = [(1, 1), (-1, 1), (1, -1), (-1, -1)];
pub const KING_DIRS: [(i8, i8); 8] = [
    (0, 1),
    (0, -1),
    (1, 0),
    (-1, 0),
    (1, 1),
    (-1, 1),
    (1, -1),
    (-1, -1),
];
pub const KNIGHT_OFFSETS: [(i8, i8); 8] = [
    (1, 2),
    (-1, 2),
    (2, 1),
    (-2, 1),
    (2, -1),
    (-2, -1),
    (1, -2),
    (-1, -2),
];

/// Layer deltas for pieces restricted to adjacent layers
pub const ADJACENT_LAYER_DELTAS: [i8; 2] = [1, -1];

// Material values in centipawns (pawn = 1, minor = 3, rook = 5, queen = 9)
pub const PAWN_VALUE: i32 = 100;
pub const KNIGHT_VALUE: i32 = 300;
pub const BISHOP_VALUE: i32 = 300;
pub const ROOK_VALUE: i32 = 500;
pub const QUEEN_VALUE: i32 = 900;
pub const KING_VALUE: i32 = 0;

// Evaluation weights
pub const MOBILITY_WEIGHT: i32 = 2;
pub const PAWN_SHIELD_WEIGHT: i32 = 12;
pub const KING_CRAMP_WEIGHT: i32 = 4;
pub const IN_CHECK_PENALTY: i32 = 40;
pub const CENTER_BONUS: i32 = 15;
pub const EXTENDED_CENTER_BONUS: i32 = 6;
pub const MIDDLE_LAYER_BONUS: i32 = 10;

/// Most destinations a king pattern can produce (8 on-layer + 2 layer steps)
pub const MAX_KING_MOVES: i32 = 10;

/// Score magnitude of a checkmate; mates found sooner score closer to this
pub const MATE_SCORE: i32 = 1_000_000;

/// Alpha-beta window bound, strictly larger than any reachable score
pub const AB_INF: i32 = MATE_SCORE * 2;

// Search depths in plies per difficulty
pub const BEGINNER_DEPTH: u8 = 2;
pub const INTERMEDIATE_DEPTH: u8 = 3;
pub const EXPERT_DEPTH: u8 = 4;

/// Default chance that a beginner opponent discards its search result
pub const DEFAULT_BEGINNER_RANDOM_MOVE_PROBABILITY: f64 = 0.25;

/// Version tag written into exported game records
pub const SNAPSHOT_VERSION: u32 = 1;
