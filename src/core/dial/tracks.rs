//! Greedy track assignment for overlapping spans on one ring.

use super::interval::{Interval, overlaps};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placement {
    /// Position of the span in the input slice.
    pub index: usize,
    pub track: usize,
}

/// Assigns each span the lowest track free of overlaps.
///
/// Spans are visited by ascending start (stable, so ties keep input order)
/// and the result comes back in that visiting order. This is the classic
/// greedy colouring: minimal for proper interval graphs, a heuristic in
/// general.
pub fn assign_tracks(spans: &[Interval]) -> Vec<Placement> {
    let mut order: Vec<usize> = (0..spans.len()).collect();
    order.sort_by(|&a, &b| spans[a].start.total_cmp(&spans[b].start));

    let mut placed: Vec<Placement> = Vec::with_capacity(spans.len());

    for index in order {
        let candidate = spans[index];
        let mut track = 0;
        while placed
            .iter()
            .any(|p| p.track == track && overlaps(candidate, spans[p.index]))
        {
            track += 1;
        }
        placed.push(Placement { index, track });
    }

    placed
}

/// Number of tracks in use (0 for no spans).
pub fn track_count(placements: &[Placement]) -> usize {
    placements.iter().map(|p| p.track + 1).max().unwrap_or(0)
}
