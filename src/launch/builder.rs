//! Particionado del mapping y despacho al pipeline.
//!
//! El builder separa claves reservadas de overrides genéricos, codifica
//! cada valor restante con `value::encode` y arma un `LaunchArgs` que se
//! entrega exactamente una vez al entry point externo. El mapping de
//! entrada nunca se muta; cada invocación trabaja sobre su propio snapshot.

use std::fs;
use std::path::PathBuf;

use indexmap::IndexMap;

use crate::constants::{DEFAULT_OUTPUT_FOLDER, DEFAULT_TASKS};
use crate::errors::LaunchError;
use crate::launch::{LaunchArgs, OverrideEntry, ReservedKey};
use crate::pipeline::ScenePipeline;
use crate::value::{encode, ParamValue};

/// Construye el registro a partir del mapping. Claves opcionales ausentes
/// toman sus defaults documentados (`output_default_scenegen`, `["coarse"]`,
/// configs vacíos, resto ausente); toda clave no reservada se convierte en
/// un `OverrideEntry`, preservando el orden de iteración del mapping.
pub fn build_launch_args(params: &IndexMap<String, ParamValue>) -> Result<LaunchArgs, LaunchError> {
    let mut args = LaunchArgs { output_folder: PathBuf::from(DEFAULT_OUTPUT_FOLDER),
                                input_folder: None,
                                seed: None,
                                task: DEFAULT_TASKS.iter().map(|t| t.to_string()).collect(),
                                task_uniqname: None,
                                debug: None,
                                configs: Vec::new(),
                                overrides: Vec::new() };
    for (key, value) in params {
        match ReservedKey::from_name(key) {
            Some(ReservedKey::OutputFolder) => args.output_folder = PathBuf::from(expect_text(key, value)?),
            Some(ReservedKey::InputFolder) => args.input_folder = Some(PathBuf::from(expect_text(key, value)?)),
            Some(ReservedKey::Seed) => args.seed = Some(expect_int(key, value)?),
            Some(ReservedKey::Tasks) => args.task = expect_text_list(key, value)?,
            Some(ReservedKey::TaskUniqname) => args.task_uniqname = Some(expect_text(key, value)?),
            Some(ReservedKey::Debug) => args.debug = Some(expect_bool(key, value)?),
            Some(ReservedKey::GinConfigs) => args.configs = expect_text_list(key, value)?,
            None => args.overrides.push(OverrideEntry::new(key.clone(), encode(value))),
        }
    }
    Ok(args)
}

/// Construye el registro, asegura la carpeta de salida (creación recursiva
/// e idempotente), publica el bloque de diagnóstico y despacha exactamente
/// una vez. Sin retry: el error del pipeline se propaga al caller tal cual.
pub fn build_and_dispatch<P>(params: &IndexMap<String, ParamValue>, pipeline: &mut P) -> Result<(), LaunchError>
    where P: ScenePipeline
{
    let args = build_launch_args(params)?;
    fs::create_dir_all(&args.output_folder).map_err(|e| LaunchError::OutputFolder { path: args.output_folder
                                                                                               .display()
                                                                                               .to_string(),
                                                                                    msg: e.to_string() })?;
    print_launch_summary(&args);
    pipeline.generate(&args)?;
    Ok(())
}

/// Bloque informativo sobre el registro construido. No forma parte del
/// contrato funcional.
fn print_launch_summary(args: &LaunchArgs) {
    println!("--- scenegen launch ---");
    println!("[launch] output folder: {}", args.output_folder.display());
    println!("[launch] seed: {:?}", args.seed);
    println!("[launch] tasks: {:?}", args.task);
    println!("[launch] extra gin configs: {:?}", args.configs);
    println!("[launch] gin overrides: {:?}", args.override_tokens());
    println!("-----------------------");
}

// Extracciones tipadas para claves reservadas. Cualquier otro tipo es un
// `ReservedKeyType`; los overrides genéricos nunca pasan por aquí.

fn expect_text(key: &str, value: &ParamValue) -> Result<String, LaunchError> {
    match value {
        ParamValue::Str(s) => Ok(s.clone()),
        _ => Err(type_error(key, "a string")),
    }
}

fn expect_int(key: &str, value: &ParamValue) -> Result<i64, LaunchError> {
    match value {
        ParamValue::Int(i) => Ok(*i),
        _ => Err(type_error(key, "an integer")),
    }
}

fn expect_bool(key: &str, value: &ParamValue) -> Result<bool, LaunchError> {
    match value {
        ParamValue::Bool(b) => Ok(*b),
        _ => Err(type_error(key, "a boolean")),
    }
}

fn expect_text_list(key: &str, value: &ParamValue) -> Result<Vec<String>, LaunchError> {
    let items = match value {
        ParamValue::List(items) | ParamValue::Tuple(items) => items,
        _ => return Err(type_error(key, "a list of strings")),
    };
    items.iter()
         .map(|item| expect_text(key, item))
         .collect()
}

fn type_error(key: &str, expected: &str) -> LaunchError {
    LaunchError::ReservedKeyType { key: key.to_string(),
                                   expected: expected.to_string() }
}
