//! Player-facing message lines

/// Shown in the menu and after a reset
pub const WELCOME: &str = "Matching Adventure Quest!";

/// One of these is picked at random for each match
pub const CELEBRATIONS: [&str; 4] = [
    "Excellent observation!",
    "Data match found!",
    "Scientific success!",
    "Discovery made!",
];

pub const GO: &str = "Find the matching pairs!";

pub fn level_start(level: u32, pairs: usize) -> String {
    format!("Level {}: find {} pairs!", level, pairs)
}

pub fn level_complete(level: u32) -> String {
    format!("Level {} complete!", level)
}

pub const GAME_COMPLETE: &str = "CONGRATULATIONS!!";
