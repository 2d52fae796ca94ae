//! scenegen-launch: construcción programática de argumentos de lanzamiento
//! y overrides gin para un pipeline externo de generación de escenas.
//!
//! Dos piezas, una cadena de llamada síncrona:
//! - `value`: codificador puro de valores dinámicos a tokens de la
//!   gramática de overrides.
//! - `launch`: particionado del mapping en parámetros de lanzamiento vs
//!   overrides genéricos, y despacho único al seam `pipeline`.

pub mod config;
pub mod constants;
pub mod errors;
pub mod launch;
pub mod pipeline;
pub mod value;

pub use errors::{LaunchError, PipelineError};
pub use launch::{build_and_dispatch, build_launch_args, LaunchArgs, OverrideEntry, ReservedKey};
pub use pipeline::{CommandPipeline, InMemoryPipeline, ScenePipeline};
pub use value::{encode, params_from_json, ParamValue};

#[cfg(test)]
mod tests {
	use super::*;
	use indexmap::IndexMap;
	use std::path::PathBuf;

	fn scenario_params() -> IndexMap<String, ParamValue> {
		let mut params = IndexMap::new();
		params.insert("output_folder".to_string(), ParamValue::from("out"));
		params.insert("seed".to_string(), ParamValue::from(5i64));
		params.insert("tasks".to_string(), ParamValue::list(["coarse"]));
		params.insert("x.y".to_string(), ParamValue::from(0.75));
		params.insert("x.z".to_string(),
		              ParamValue::Tuple(vec!["uniform".into(), 0i64.into(), 1i64.into()]));
		params.insert("x.tag".to_string(), ParamValue::from("%SEED"));
		params
	}

	#[test]
	fn scenario_record_matches_boundary_contract() {
		let args = build_launch_args(&scenario_params()).expect("record should build");
		assert_eq!(args.output_folder, PathBuf::from("out"));
		assert_eq!(args.seed, Some(5));
		assert_eq!(args.task, vec!["coarse".to_string()]);
		assert!(args.configs.is_empty());
		assert_eq!(args.override_tokens(),
		           vec!["x.y=0.75", "x.z=(\"uniform\",0,1)", "x.tag=%SEED"]);
	}

	#[test]
	fn reserved_keys_never_become_overrides() {
		let mut params = IndexMap::new();
		params.insert("compose.density".to_string(), ParamValue::from(0.5));
		params.insert("output_folder".to_string(), ParamValue::from("out"));
		params.insert("input_folder".to_string(), ParamValue::from("in"));
		params.insert("seed".to_string(), ParamValue::from(7i64));
		params.insert("tasks".to_string(), ParamValue::list(["coarse", "render"]));
		params.insert("task_uniqname".to_string(), ParamValue::from("run-a"));
		params.insert("debug".to_string(), ParamValue::from(true));
		params.insert("gin_configs".to_string(), ParamValue::list(["desert.gin"]));
		params.insert("compose.chance".to_string(), ParamValue::from(0.9));

		let args = build_launch_args(&params).expect("record should build");
		for key in ReservedKey::ALL {
			assert!(args.overrides.iter().all(|o| o.name != key.name()),
			        "reserved key {} leaked into overrides", key.name());
		}
		// Orden de iteración del mapping preservado entre las no reservadas.
		assert_eq!(args.override_tokens(), vec!["compose.density=0.5", "compose.chance=0.9"]);
		assert_eq!(args.input_folder, Some(PathBuf::from("in")));
		assert_eq!(args.task_uniqname.as_deref(), Some("run-a"));
		assert_eq!(args.debug, Some(true));
		assert_eq!(args.configs, vec!["desert.gin".to_string()]);
	}

	#[test]
	fn empty_mapping_takes_documented_defaults() {
		let params = IndexMap::new();
		let args = build_launch_args(&params).expect("record should build");
		assert_eq!(args.output_folder, PathBuf::from(constants::DEFAULT_OUTPUT_FOLDER));
		assert_eq!(args.input_folder, None);
		assert_eq!(args.seed, None);
		assert_eq!(args.task, vec!["coarse".to_string()]);
		assert_eq!(args.task_uniqname, None);
		assert_eq!(args.debug, None);
		assert!(args.configs.is_empty());
		assert!(args.overrides.is_empty());
	}

	#[test]
	fn reserved_key_with_wrong_kind_is_rejected() {
		let mut params = IndexMap::new();
		params.insert("seed".to_string(), ParamValue::list(["not-a-seed"]));
		let err = build_launch_args(&params).expect_err("seed as list must fail");
		assert_eq!(err,
		           LaunchError::ReservedKeyType { key: "seed".to_string(),
		                                          expected: "an integer".to_string() });

		let mut params = IndexMap::new();
		params.insert("tasks".to_string(), ParamValue::from(true));
		assert!(matches!(build_launch_args(&params),
		                 Err(LaunchError::ReservedKeyType { .. })));
	}

	#[test]
	fn json_bridge_preserves_override_order() {
		let params = params_from_json(serde_json::json!({
			"output_folder": "out",
			"a.second": 2,
			"a.first": 1.5,
			"a.flag": true,
			"a.tag": "%SEED",
			"a.empty": null
		}));
		let args = build_launch_args(&params).expect("record should build");
		assert_eq!(args.override_tokens(),
		           vec!["a.second=2", "a.first=1.5", "a.flag=True", "a.tag=%SEED", "a.empty=None"]);
	}
}
