//! Render use cases: Markdown and terminal text from in-memory reports.

use onehealth_render::RenderableReport;

pub fn render_markdown(report: &RenderableReport) -> String {
    onehealth_render::render_markdown(report)
}

pub fn render_text(report: &RenderableReport) -> String {
    onehealth_render::render_text(report)
}
