//! Console components for the tumor diagnosis predictor.

pub mod console;
pub mod logging;
pub mod render;
