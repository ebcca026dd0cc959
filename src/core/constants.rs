// Board layout
pub const BOARD_CELLS: u8 = 25;
pub const START_CELL: u8 = 0;
pub const FINISH_CELL: u8 = BOARD_CELLS - 1;
pub const BOARD_COLUMNS: u8 = 5;

// Movement and scoring
pub const CORRECT_STEP: u8 = 2;
pub const INCORRECT_STEP: u8 = 1;
pub const POINTS_PER_CORRECT: u32 = 10;

// Transition timing, in time units (scaled by GameConfig::time_unit_ms)
pub const DEFAULT_TIME_UNIT_MS: u64 = 1000;
pub const MOVE_DELAY_UNITS: f64 = 1.0;
pub const FEEDBACK_DELAY_UNITS: f64 = 3.0;
pub const NEXT_QUESTION_DELAY_UNITS: f64 = 0.5;
pub const RESET_QUESTION_DELAY_UNITS: f64 = 1.0;

// Main loop
pub const FRAME_POLL_MS: u64 = 50;
