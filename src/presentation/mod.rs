//! askama views for the hypertext outputs.

pub mod views;
