//! Configuración central de la aplicación.
//! Carga variables de entorno (.env) y expone una estructura inmutable (`CONFIG`)
//! con la sección del pipeline externo que usa el binario.

use once_cell::sync::Lazy;
use std::env;

/// Configuración global de la aplicación (extensible para más secciones).
pub struct AppConfig {
    /// Configuración específica del pipeline externo.
    pub pipeline: PipelineConfig,
}

/// Parámetros del pipeline de generación.
pub struct PipelineConfig {
    /// Comando externo que implementa el entry point (`SCENEGEN_PIPELINE_CMD`).
    pub command: Option<String>,
    /// Raíz opcional bajo la que el binario demo coloca su carpeta de salida
    /// (`SCENEGEN_OUTPUT_ROOT`).
    pub output_root: Option<String>,
}

/// Instancia global perezosa de configuración, evaluada una sola vez.
pub static CONFIG: Lazy<AppConfig> = Lazy::new(|| {
    let command = env::var("SCENEGEN_PIPELINE_CMD").ok();
    let output_root = env::var("SCENEGEN_OUTPUT_ROOT").ok();
    AppConfig { pipeline: PipelineConfig { command, output_root } }
});
