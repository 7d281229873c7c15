use serde::Serialize;

/// One of the concentric 12-hour bands of the dial.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum Ring {
    Am, // inner, 00:00-12:00
    Pm, // outer, 12:00-24:00
}

impl Ring {
    pub const ALL: [Ring; 2] = [Ring::Am, Ring::Pm];

    pub fn code(&self) -> &'static str {
        match self {
            Ring::Am => "AM",
            Ring::Pm => "PM",
        }
    }

    /// Minute-of-day where the ring starts.
    pub fn offset_minutes(&self) -> u32 {
        match self {
            Ring::Am => 0,
            Ring::Pm => 720,
        }
    }

    /// Minute-of-day where the ring ends (exclusive).
    pub fn end_minutes(&self) -> u32 {
        self.offset_minutes() + 720
    }

    /// Hours added to a 12-hour bucket to obtain the 24-hour value.
    pub fn hour_offset(&self) -> u32 {
        self.offset_minutes() / 60
    }
}
