//! Rendering pipeline.
//!
//! Each request parses one YAML document into a typed schema and lays it out
//! as hypertext (askama templates) or as a word-processor document
//! (`docx-rs`). The pipeline is pure: no shared mutable state, no I/O beyond
//! the in-memory output buffer.

pub mod docx;
pub mod exam;
pub mod lesson_plan;
pub mod markup;
pub mod outline;
mod pipeline;
mod types;
pub mod worksheet;

pub use markup::MarkupRenderer;
pub use outline::LessonPlanOutline;
pub use pipeline::{TemplateRenderService, render_service};
pub use types::{DocumentKind, RenderError, RenderOutput, RenderRequest, RenderService};
