//! Splits a clock interval into spans on the AM and PM rings.

use super::angle::minutes_to_angle;
use crate::models::ring::Ring;
use crate::models::segment::RingSpan;
use crate::utils::time::{MINUTES_PER_DAY, lenient_minutes};

/// Segments an "HH:MM" interval. Malformed components count as zero.
pub fn segment_times(start: &str, end: &str) -> Vec<RingSpan> {
    segment_minutes(lenient_minutes(start), lenient_minutes(end))
}

/// Segments a minute-of-day interval (`end` may be 1440).
///
/// `end <= start` is a midnight rollover and yields `[start, 1440)` plus
/// `[0, end)`. Each piece is then cut at noon, giving at most four spans.
pub fn segment_minutes(start: u32, end: u32) -> Vec<RingSpan> {
    let start = start.min(MINUTES_PER_DAY);
    let end = end.min(MINUTES_PER_DAY);

    let pieces: Vec<(u32, u32)> = if end <= start {
        vec![(start, MINUTES_PER_DAY), (0, end)]
    } else {
        vec![(start, end)]
    };

    let mut spans = Vec::with_capacity(4);
    for (from, to) in pieces {
        for ring in Ring::ALL {
            let lo = from.max(ring.offset_minutes());
            let hi = to.min(ring.end_minutes());
            if lo < hi {
                spans.push(RingSpan {
                    ring,
                    start_angle: minutes_to_angle((lo - ring.offset_minutes()) as f64),
                    end_angle: minutes_to_angle((hi - ring.offset_minutes()) as f64),
                });
            }
        }
    }

    spans
}
