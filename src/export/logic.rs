// src/export/logic.rs

use crate::core::dial::layout::DayLayout;
use crate::errors::AppResult;
use crate::export::fs_utils::ensure_writable;
use crate::export::json::render_json;
use crate::export::svg::render_svg;
use crate::export::{ExportFormat, notify_export_success};
use crate::models::geometry::DialGeometry;
use std::fs;
use std::path::Path;

/// High-level export of a day layout.
pub struct ExportLogic;

impl ExportLogic {
    /// Renders `layout` in `format`.
    pub fn render(
        layout: &DayLayout,
        geometry: &DialGeometry,
        format: ExportFormat,
    ) -> AppResult<String> {
        match format {
            ExportFormat::Svg => Ok(render_svg(layout, geometry)),
            ExportFormat::Json => render_json(layout),
        }
    }

    /// Writes the rendered layout to `file`, asking before overwriting unless
    /// `force` is set.
    pub fn export(
        layout: &DayLayout,
        geometry: &DialGeometry,
        format: ExportFormat,
        file: &str,
        force: bool,
    ) -> AppResult<()> {
        let path = Path::new(file);
        ensure_writable(path, force)?;

        let content = Self::render(layout, geometry, format)?;
        fs::write(path, content)?;

        log::info!(
            "event=export format={} date={} segments={} path={}",
            format.as_str(),
            layout.date,
            layout.segments().count(),
            path.display()
        );
        notify_export_success(&format.as_str().to_uppercase(), path);
        Ok(())
    }
}
