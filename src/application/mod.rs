//! Application services: rendering pipeline and the generator façade.

pub mod error;
pub mod generator;
pub mod render;
