//! Domain layer: the parsed document tree, tolerant field access, and the
//! typed schemas of the three document kinds.

pub mod document;
pub mod error;
pub mod exam;
pub mod fields;
pub mod lesson_plan;
pub mod worksheet;
