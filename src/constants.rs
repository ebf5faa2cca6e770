pub const BOARD_WIDTH: usize = 10;
pub const BOARD_HEIGHT: usize = 20;

// New pieces always appear here, whatever their width
pub const SPAWN_ROW: i32 = 0;
pub const SPAWN_COL: i32 = BOARD_WIDTH as i32 / 2 - 1;

pub const POINTS_PER_LINE: u32 = 100;

// Gravity interval used when no --tick-ms is given (milliseconds)
pub const DEFAULT_TICK_MS: u64 = 1000;

// How long the front end waits for a key before checking the clock again
pub const INPUT_POLL_MS: u64 = 16;
