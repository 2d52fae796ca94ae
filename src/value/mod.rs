//! Valores dinámicos y su codificación a la gramática de overrides gin.

mod encode;
mod param;

pub use encode::encode;
pub use param::{params_from_json, ParamValue};
