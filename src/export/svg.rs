//! SVG rendering of a day layout.

use crate::core::dial::angle::{describe_arc, describe_donut_slice, polar_to_cartesian};
use crate::core::dial::layout::DayLayout;
use crate::models::geometry::DialGeometry;
use crate::models::ring::Ring;
use crate::models::segment::Segment;
use std::fmt::Write;

const DEFAULT_SEGMENT_COLOR: &str = "#f97316";
const GAP_COLOR: &str = "#a1a1aa";
const SLEEP_COLOR: &str = "#64748b";

/// Opacity of a segment given the focus state of the layout.
pub fn segment_opacity(layout: &DayLayout, segment: &Segment) -> f64 {
    let base = match (&layout.focus, layout.is_emphasized(segment)) {
        (Some(_), true) => 1.0,
        (Some(_), false) => 0.1,
        (None, _) => 0.9,
    };
    if segment.completed { base * 0.5 } else { base }
}

fn escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

fn hour_label(i: u32) -> u32 {
    if i == 0 { 12 } else { i }
}

pub fn render_svg(layout: &DayLayout, geometry: &DialGeometry) -> String {
    let (cx, cy) = geometry.center();
    let size = geometry.size;
    let mut out = String::new();

    let _ = writeln!(
        out,
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{size}" height="{size}" viewBox="0 0 {size} {size}">"#
    );
    let _ = writeln!(out, "  <title>{}</title>", layout.date.format("%Y-%m-%d"));

    // Background and ring divider
    let _ = writeln!(
        out,
        r##"  <circle cx="{cx}" cy="{cy}" r="{}" fill="#e2e8f0" opacity="0.1"/>"##,
        geometry.pm_click_outer
    );
    let _ = writeln!(
        out,
        r##"  <circle cx="{cx}" cy="{cy}" r="{}" fill="#e2e8f0" opacity="0.1"/>"##,
        geometry.am_click_outer
    );
    let _ = writeln!(
        out,
        r##"  <circle cx="{cx}" cy="{cy}" r="{}" fill="none" stroke="#cbd5e1" stroke-width="1" stroke-dasharray="4 4"/>"##,
        geometry.ring_boundary()
    );

    // Hour slots (click zones)
    for ring in Ring::ALL {
        let (inner, outer) = match ring {
            Ring::Am => (geometry.am_click_inner, geometry.am_click_outer),
            Ring::Pm => (geometry.pm_click_inner, geometry.pm_click_outer),
        };
        for i in 0..12u32 {
            let start = i as f64 * 30.0;
            let _ = writeln!(
                out,
                r#"  <path class="slot" d="{}" fill="transparent" stroke="none"><title>{} {}</title></path>"#,
                describe_donut_slice(cx, cy, inner, outer, start, start + 30.0),
                hour_label(i),
                ring.code()
            );
        }
    }

    // Sleep window
    for span in &layout.sleep {
        let _ = writeln!(
            out,
            r#"  <path class="sleep" d="{}" fill="none" stroke="{SLEEP_COLOR}" stroke-width="{}" opacity="0.25"/>"#,
            describe_arc(cx, cy, geometry.base_radius(span.ring), span.start_angle, span.end_angle),
            geometry.stroke_width
        );
    }

    // Free time
    for gap in layout.gaps() {
        let _ = writeln!(
            out,
            r#"  <path class="gap" d="{}" fill="none" stroke="{GAP_COLOR}" stroke-width="2" opacity="0.3"/>"#,
            describe_arc(cx, cy, geometry.base_radius(gap.ring), gap.start_angle, gap.end_angle)
        );
    }

    // Events, pushed outward by track
    for seg in layout.segments() {
        let focused = layout.focus.as_deref() == Some(seg.source_id.as_str());
        let stroke = if focused {
            geometry.stroke_width * 1.4
        } else {
            geometry.stroke_width
        };
        let color = if seg.color.is_empty() {
            DEFAULT_SEGMENT_COLOR
        } else {
            seg.color.as_str()
        };
        let _ = writeln!(
            out,
            r#"  <path class="event" data-id="{}" d="{}" fill="none" stroke="{}" stroke-width="{}" stroke-linecap="round" opacity="{}"><title>{}</title></path>"#,
            escape(&seg.source_id),
            describe_arc(
                cx,
                cy,
                geometry.track_radius(seg.ring, seg.track),
                seg.start_angle,
                seg.end_angle
            ),
            escape(color),
            stroke,
            segment_opacity(layout, seg),
            escape(&seg.title)
        );
    }

    // Face: ticks and numerals between the rings
    let tick_start = geometry.am_click_outer + 2.0;
    let tick_end = tick_start + 8.0;
    let numeral_radius = tick_end + 2.0;
    for i in 0..12u32 {
        let angle = i as f64 * 30.0;
        let a = polar_to_cartesian(cx, cy, tick_start, angle);
        let b = polar_to_cartesian(cx, cy, tick_end, angle);
        let n = polar_to_cartesian(cx, cy, numeral_radius, angle);
        let width = if i % 3 == 0 { 2 } else { 1 };
        let _ = writeln!(
            out,
            r##"  <line x1="{:.3}" y1="{:.3}" x2="{:.3}" y2="{:.3}" stroke="#a1a1aa" stroke-width="{width}"/>"##,
            a.x, a.y, b.x, b.y
        );
        let _ = writeln!(
            out,
            r#"  <text x="{:.3}" y="{:.3}" text-anchor="middle" dominant-baseline="middle" font-size="11" font-weight="600">{}</text>"#,
            n.x,
            n.y,
            hour_label(i)
        );
    }

    let _ = writeln!(
        out,
        r#"  <text x="{cx}" y="{}" text-anchor="middle" font-size="10" opacity="0.4">AM</text>"#,
        cy - 55.0
    );
    let _ = writeln!(
        out,
        r#"  <text x="{cx}" y="{}" text-anchor="middle" font-size="10" opacity="0.4">PM</text>"#,
        cy - 160.0
    );

    if layout.focus.is_some() {
        let _ = writeln!(
            out,
            r#"  <text x="50%" y="70%" text-anchor="middle" font-size="12" font-weight="bold">FOCUS MODE</text>"#
        );
    }

    out.push_str("</svg>\n");
    out
}
