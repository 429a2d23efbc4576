//! Agent domain: model settings, result records, run steps, configuration issues.

pub mod model_config;
pub mod results;
pub mod step;
pub mod validation;
