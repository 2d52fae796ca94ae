//! Errores del builder y del seam hacia el pipeline (simples por ahora).

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Fallos al construir o despachar un registro de lanzamiento.
#[derive(Debug, Error, PartialEq, Eq, Clone, Serialize, Deserialize)]
pub enum LaunchError {
    /// Una clave reservada trae un tipo que no puede poblar su campo
    /// estructural (ej. `seed` con una lista).
    #[error("reserved key `{key}` expects {expected}")] ReservedKeyType { key: String, expected: String },
    #[error("cannot create output folder `{path}`: {msg}")] OutputFolder { path: String, msg: String },
    #[error(transparent)] Pipeline(#[from] PipelineError),
}

/// Fallos del entry point externo. No se clasifican ni se reintentan aquí:
/// se propagan al caller tal cual.
#[derive(Debug, Error, PartialEq, Eq, Clone, Serialize, Deserialize)]
pub enum PipelineError {
    #[error("pipeline command not configured (SCENEGEN_PIPELINE_CMD)")] CommandNotConfigured,
    #[error("cannot spawn pipeline `{cmd}`: {msg}")] Spawn { cmd: String, msg: String },
    #[error("pipeline exited with status {status}")] ExitStatus { status: i32 },
    #[error("internal: {0}")] Internal(String),
}
