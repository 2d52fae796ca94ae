//! Seam hacia el pipeline externo de generación de escenas.
//!
//! `ScenePipeline` es la frontera: el builder entrega el registro y no
//! interpreta el resultado. `InMemoryPipeline` acumula despachos para tests
//! y embedding; `CommandPipeline` lanza el pipeline real como subproceso
//! con el argv del registro.

use std::process::Command;

use crate::config::CONFIG;
use crate::errors::PipelineError;
use crate::launch::LaunchArgs;

/// Entry point del pipeline. Exactamente una invocación por registro; la
/// llamada retorna o falla de forma síncrona.
pub trait ScenePipeline {
    fn generate(&mut self, args: &LaunchArgs) -> Result<(), PipelineError>;
}

/// Pipeline en memoria: registra cada despacho sin efectos externos.
pub struct InMemoryPipeline {
    pub dispatched: Vec<LaunchArgs>,
}

impl Default for InMemoryPipeline {
    fn default() -> Self {
        Self { dispatched: Vec::new() }
    }
}

impl ScenePipeline for InMemoryPipeline {
    fn generate(&mut self, args: &LaunchArgs) -> Result<(), PipelineError> {
        self.dispatched.push(args.clone());
        Ok(())
    }
}

/// Pipeline real: subproceso con el comando configurado.
pub struct CommandPipeline {
    program: String,
}

impl CommandPipeline {
    /// Resolución del comando desde `CONFIG` (fase de bootstrap). Falla
    /// antes de cualquier despacho si el comando no está configurado.
    pub fn from_config() -> Result<Self, PipelineError> {
        match &CONFIG.pipeline.command {
            Some(cmd) if !cmd.is_empty() => Ok(Self::new(cmd.clone())),
            _ => Err(PipelineError::CommandNotConfigured),
        }
    }

    pub fn new(program: impl Into<String>) -> Self {
        Self { program: program.into() }
    }
}

impl ScenePipeline for CommandPipeline {
    fn generate(&mut self, args: &LaunchArgs) -> Result<(), PipelineError> {
        let status = Command::new(&self.program)
            .args(args.to_cli_argv())
            .status()
            .map_err(|e| PipelineError::Spawn { cmd: self.program.clone(),
                                                msg: e.to_string() })?;
        if status.success() {
            Ok(())
        } else {
            Err(PipelineError::ExitStatus { status: status.code().unwrap_or(-1) })
        }
    }
}
