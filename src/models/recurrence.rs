use serde::{Deserialize, Serialize};

/// Repetition rule of an event. Only the three simple calendar rules are modeled.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Recurrence {
    #[default]
    None,
    Daily,
    Weekly,
    Monthly,
}

impl Recurrence {
    pub fn as_str(&self) -> &'static str {
        match self {
            Recurrence::None => "none",
            Recurrence::Daily => "daily",
            Recurrence::Weekly => "weekly",
            Recurrence::Monthly => "monthly",
        }
    }

    /// Convert CLI input (any case) → enum
    pub fn from_code(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "none" | "" => Some(Recurrence::None),
            "daily" | "d" => Some(Recurrence::Daily),
            "weekly" | "w" => Some(Recurrence::Weekly),
            "monthly" | "m" => Some(Recurrence::Monthly),
            _ => None,
        }
    }

    pub fn is_recurring(&self) -> bool {
        !matches!(self, Recurrence::None)
    }
}
