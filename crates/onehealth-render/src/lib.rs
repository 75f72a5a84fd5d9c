//! Rendering utilities for human surfaces (Markdown, terminal text).

#![forbid(unsafe_code)]

mod markdown;
mod model;
mod text;

pub use markdown::render_markdown;
pub use model::{
    RenderableAssessment, RenderableData, RenderableLevel, RenderableReport, RenderableValue,
};
pub use text::render_text;

#[cfg(test)]
mod test_support;
