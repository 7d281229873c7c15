//! Radial schedule layout engine.
//!
//! Everything under this module is pure and infallible: a day's layout is a
//! function of the event catalog and the request only.

pub mod angle;
pub mod interval;
pub mod layout;
pub mod pointer;
pub mod projector;
pub mod rings;
pub mod tracks;

pub use layout::{DayLayout, LayoutRequest, RingLayout, SleepWindow, build_day_layout};
pub use pointer::{DragGesture, PointerInput, Selection};
