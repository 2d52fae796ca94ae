//! Constantes del builder de lanzamiento.
//!
//! Valores por defecto del contrato con el pipeline externo: si el mapping
//! no trae destino ni tareas, el registro se construye con estos literales
//! y el resultado es reproducible entre invocaciones.

/// Carpeta de salida usada cuando el mapping no trae `output_folder`.
pub const DEFAULT_OUTPUT_FOLDER: &str = "output_default_scenegen";

/// Lista de tareas por defecto (una sola pasada gruesa).
pub const DEFAULT_TASKS: &[&str] = &["coarse"];
