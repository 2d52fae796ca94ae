//! Registro de argumentos de lanzamiento y entradas de override.
//!
//! El registro se construye una vez por invocación, es inmutable tras la
//! construcción y se entrega como unidad al entry point del pipeline. Los
//! nombres de campo fijan el contrato de la frontera externa:
//! `output_folder`, `input_folder`, `seed`, `task`, `task_uniqname`,
//! `debug`, `configs`, `overrides`.

use std::fmt;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Par (nombre, texto codificado). Invariante: `value` es siempre un token
/// sintácticamente completo de la gramática de overrides (producido por
/// `value::encode`), nunca parcialmente citado.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OverrideEntry {
    pub name: String,
    pub value: String,
}

impl OverrideEntry {
    pub(crate) fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self { name: name.into(),
               value: value.into() }
    }
}

impl fmt::Display for OverrideEntry {
    /// Renderiza el token `name=value` de la gramática de inyección.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}={}", self.name, self.value)
    }
}

/// Argumentos de lanzamiento del pipeline externo de generación de escenas.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LaunchArgs {
    pub output_folder: PathBuf,
    pub input_folder: Option<PathBuf>,
    pub seed: Option<i64>,
    /// Lista ordenada de nombres de tarea.
    pub task: Vec<String>,
    pub task_uniqname: Option<String>,
    pub debug: Option<bool>,
    /// Referencias a archivos .gin adicionales.
    pub configs: Vec<String>,
    /// Overrides en el orden de iteración del mapping de entrada.
    pub overrides: Vec<OverrideEntry>,
}

impl LaunchArgs {
    /// Tokens `key=value` listos para el framework de inyección.
    pub fn override_tokens(&self) -> Vec<String> {
        self.overrides.iter().map(|o| o.to_string()).collect()
    }

    /// Renderiza el registro como argv estilo argparse para un pipeline
    /// lanzado como subproceso (`-g` configs, `-p` overrides). Los campos
    /// opcionales ausentes se omiten del argv.
    pub fn to_cli_argv(&self) -> Vec<String> {
        let mut argv = vec!["--output_folder".to_string(), self.output_folder.display().to_string()];
        if let Some(input) = &self.input_folder {
            argv.push("--input_folder".to_string());
            argv.push(input.display().to_string());
        }
        if let Some(seed) = self.seed {
            argv.push("--seed".to_string());
            argv.push(seed.to_string());
        }
        if !self.task.is_empty() {
            argv.push("--task".to_string());
            argv.extend(self.task.iter().cloned());
        }
        if let Some(uniq) = &self.task_uniqname {
            argv.push("--task_uniqname".to_string());
            argv.push(uniq.clone());
        }
        if self.debug == Some(true) {
            argv.push("--debug".to_string());
        }
        if !self.configs.is_empty() {
            argv.push("-g".to_string());
            argv.extend(self.configs.iter().cloned());
        }
        if !self.overrides.is_empty() {
            argv.push("-p".to_string());
            argv.extend(self.override_tokens());
        }
        argv
    }
}
