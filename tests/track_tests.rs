use daydial::core::dial::interval::Interval;
use daydial::core::dial::tracks::{Placement, assign_tracks, track_count};

fn tracks_by_input(spans: &[Interval]) -> Vec<usize> {
    let placements = assign_tracks(spans);
    let mut out = vec![usize::MAX; spans.len()];
    for Placement { index, track } in placements {
        out[index] = track;
    }
    out
}

#[test]
fn disjoint_spans_share_track_zero() {
    let spans = [Interval::new(0.0, 30.0), Interval::new(90.0, 120.0)];
    assert_eq!(tracks_by_input(&spans), vec![0, 0]);
}

#[test]
fn back_to_back_spans_share_track_zero() {
    let spans = [Interval::new(30.0, 60.0), Interval::new(0.0, 30.0)];
    assert_eq!(tracks_by_input(&spans), vec![0, 0]);
}

#[test]
fn identical_spans_take_tracks_zero_and_one_in_input_order() {
    let spans = [Interval::new(90.0, 120.0), Interval::new(90.0, 120.0)];
    let placements = assign_tracks(&spans);
    assert_eq!(
        placements,
        vec![
            Placement { index: 0, track: 0 },
            Placement { index: 1, track: 1 },
        ]
    );
    assert_eq!(track_count(&placements), 2);
}

#[test]
fn placements_come_back_sorted_by_start() {
    let spans = [
        Interval::new(200.0, 210.0),
        Interval::new(10.0, 20.0),
        Interval::new(100.0, 110.0),
    ];
    let order: Vec<usize> = assign_tracks(&spans).iter().map(|p| p.index).collect();
    assert_eq!(order, vec![1, 2, 0]);
}

#[test]
fn full_overlap_cluster_needs_one_track_per_span() {
    let spans = vec![Interval::new(0.0, 60.0); 3];
    assert_eq!(tracks_by_input(&spans), vec![0, 1, 2]);
}

#[test]
fn staircase_reuses_freed_tracks() {
    // Greedy colouring is minimal here because ring spans never wrap; for
    // arbitrary circular-arc graphs it is only a heuristic.
    let spans = [
        Interval::new(0.0, 60.0),
        Interval::new(30.0, 90.0),
        Interval::new(60.0, 120.0),
        Interval::new(90.0, 150.0),
    ];
    assert_eq!(tracks_by_input(&spans), vec![0, 1, 0, 1]);
    assert_eq!(track_count(&assign_tracks(&spans)), 2);
}

#[test]
fn no_spans_no_tracks() {
    assert!(assign_tracks(&[]).is_empty());
    assert_eq!(track_count(&[]), 0);
}
