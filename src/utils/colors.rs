//! ANSI color helper utilities for terminal output.

use crate::models::recurrence::Recurrence;
use crate::models::ring::Ring;

pub const RESET: &str = "\x1b[0m";

pub const GREY: &str = "\x1b[90m";
pub const GREEN: &str = "\x1b[32m";
pub const YELLOW: &str = "\x1b[33m";
pub const BLUE: &str = "\x1b[34m";
pub const MAGENTA: &str = "\x1b[35m";

pub fn color_for_ring(ring: Ring) -> &'static str {
    match ring {
        Ring::Am => YELLOW,
        Ring::Pm => BLUE,
    }
}

pub fn color_for_recurrence(rec: Recurrence) -> &'static str {
    match rec {
        Recurrence::None => RESET,
        Recurrence::Daily => GREEN,
        Recurrence::Weekly => MAGENTA,
        Recurrence::Monthly => BLUE,
    }
}

/// Completed events and de-emphasized segments are printed in grey.
pub fn dim_if(value: &str, dim: bool) -> String {
    if dim {
        format!("{GREY}{value}{RESET}")
    } else {
        value.to_string()
    }
}

pub fn paint(value: &str, color: &str) -> String {
    format!("{color}{value}{RESET}")
}
