pub mod event;
pub mod geometry;
pub mod occurrence;
pub mod recurrence;
pub mod ring;
pub mod segment;
