//! Interval algebra over angular spans: overlap test, merge, inversion.

/// Nudge applied to span ends before the overlap test.
///
/// Back-to-back spans share a boundary; without the nudge they would collide
/// and land on separate tracks.
pub const OVERLAP_EPSILON: f64 = 0.1;

/// Half-open `[start, end)` interval. When `end < start` it wraps past the
/// top of the domain.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Interval {
    pub start: f64,
    pub end: f64,
}

impl Interval {
    pub fn new(start: f64, end: f64) -> Self {
        Self { start, end }
    }
}

/// Modular "is-between": wrap-aware membership of `target` in `[start, end)`.
pub fn is_angle_between(target: f64, start: f64, end: f64) -> bool {
    if end < start {
        target >= start || target <= end
    } else {
        target >= start && target < end
    }
}

pub fn overlaps(a: Interval, b: Interval) -> bool {
    is_angle_between(a.start + OVERLAP_EPSILON, b.start, b.end)
        || is_angle_between(a.end - OVERLAP_EPSILON, b.start, b.end)
        || is_angle_between(b.start + OVERLAP_EPSILON, a.start, a.end)
        || is_angle_between(b.end - OVERLAP_EPSILON, a.start, a.end)
}

/// Coalesces intervals sorted by start. Touching intervals stay separate.
pub fn merge_sorted(intervals: &[Interval]) -> Vec<Interval> {
    let mut merged: Vec<Interval> = Vec::with_capacity(intervals.len());

    for iv in intervals {
        match merged.last_mut() {
            Some(running) if iv.start < running.end => {
                if iv.end > running.end {
                    running.end = iv.end;
                }
            }
            _ => merged.push(*iv),
        }
    }

    merged
}

/// Complement of merged intervals inside `[0, domain_end)`.
///
/// No trailing gap is produced once the pointer has reached `domain_end`.
pub fn invert(merged: &[Interval], domain_end: f64) -> Vec<Interval> {
    let mut gaps = Vec::new();
    let mut pointer = 0.0_f64;

    for iv in merged {
        if iv.start > pointer {
            gaps.push(Interval::new(pointer, iv.start));
        }
        if iv.end > pointer {
            pointer = iv.end;
        }
    }

    if pointer < domain_end {
        gaps.push(Interval::new(pointer, domain_end));
    }

    gaps
}

/// Sorts, merges and inverts in one step.
pub fn free_intervals(intervals: &[Interval], domain_end: f64) -> Vec<Interval> {
    let mut sorted = intervals.to_vec();
    sorted.sort_by(|a, b| a.start.total_cmp(&b.start));
    invert(&merge_sorted(&sorted), domain_end)
}
