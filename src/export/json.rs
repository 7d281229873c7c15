use crate::core::dial::layout::DayLayout;
use crate::errors::AppResult;

/// Serializes the layout as pretty-printed JSON.
pub fn render_json(layout: &DayLayout) -> AppResult<String> {
    Ok(serde_json::to_string_pretty(layout)?)
}
