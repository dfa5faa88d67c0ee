use std::time::Duration;

pub const R_LED: u8 = 27; // Pin 13
pub const B_LED: u8 = 22; // Pin 15
pub const G_LED: u8 = 23; // Pin 16

pub const CYCLE_COUNT: u32 = 4999;
pub const PHASE_DELAY: Duration = Duration::from_millis(50);
