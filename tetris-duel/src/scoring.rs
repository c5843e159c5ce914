//! Score, penalty and level tables

/// Lines needed to advance one level
pub const LINES_PER_LEVEL: u32 = 10;

/// Points for clearing `lines` rows with a single lock
pub fn line_clear_score(lines: usize) -> u64 {
    match lines {
        0 => 0,
        1 => 40,
        2 => 100,
        3 => 300,
        _ => 1200,
    }
}

/// Penalty rows sent to the opponent for clearing `lines` rows at once
///
/// Singles send nothing, a four-line clear sends the full four.
pub fn penalty_lines(lines: usize) -> u32 {
    match lines {
        0 | 1 => 0,
        2 => 1,
        3 => 2,
        _ => 4,
    }
}

pub fn level_for_lines(lines_cleared: u32) -> u32 {
    lines_cleared / LINES_PER_LEVEL
}
