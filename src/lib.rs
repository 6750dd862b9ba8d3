//! Lesson plans, worksheets and exam papers rendered from YAML into
//! print-ready HTML and Word documents.

pub mod application;
pub mod config;
pub mod domain;
pub mod infra;
pub mod presentation;
