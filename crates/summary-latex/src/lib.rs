//! LaTeX post-processing — sanitization of model output, brace validation,
//! and final document assembly.

pub mod document;
pub mod sanitize;
pub mod validate;
