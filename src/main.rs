//! Binario demo: arma el payload de escena desértica y lo despacha al
//! pipeline externo configurado. El payload vive aquí (y en los tests),
//! nunca en la librería.

use indexmap::IndexMap;
use scenegen_launch::config::CONFIG;
use scenegen_launch::{build_and_dispatch, CommandPipeline, ParamValue};
use std::path::Path;

/// Payload de ejemplo: escena desértica con overrides de composición y
/// poblado. Los nombres de parámetro deben coincidir con los que expone el
/// pipeline (.gin files / funciones configurables); eso no se valida aquí.
fn desert_scene_parameters() -> IndexMap<String, ParamValue> {
    let mut params = IndexMap::new();
    params.insert("output_folder".to_string(),
                  ParamValue::from("output_results/my_custom_desert_scene"));
    params.insert("seed".to_string(), ParamValue::from(12345i64));
    params.insert("tasks".to_string(),
                  ParamValue::list(["coarse", "populate", "fine_terrain", "render"]));
    params.insert("gin_configs".to_string(), ParamValue::list(["scene_types/desert.gin"]));

    // Composición de la escena: sin árboles, cactus dominantes.
    params.insert("compose_nature.terrain_enabled".to_string(), ParamValue::from(true));
    params.insert("compose_nature.max_tree_species".to_string(), ParamValue::from(0i64));
    params.insert("compose_nature.tree_density".to_string(), ParamValue::from(0.0));
    params.insert("compose_nature.bushes_chance".to_string(), ParamValue::from(0.75));
    params.insert("compose_nature.max_bush_species".to_string(), ParamValue::from(3i64));
    params.insert("compose_nature.bush_density".to_string(), ParamValue::from(0.02));
    params.insert("compose_nature.cactus_chance".to_string(), ParamValue::from(0.95));
    params.insert("compose_nature.max_cactus_species".to_string(), ParamValue::from(5i64));
    params.insert("compose_nature.cactus_density".to_string(),
                  ParamValue::Tuple(vec!["uniform".into(), 0.01f64.into(), 0.06f64.into()]));
    params.insert("compose_nature.boulders_chance".to_string(), ParamValue::from(0.65));
    params.insert("compose_nature.boulder_density".to_string(), ParamValue::from(0.025));
    params.insert("compose_nature.grass_chance".to_string(), ParamValue::from(0.15));
    params.insert("compose_nature.near_distance".to_string(), ParamValue::from(30i64));
    params.insert("compose_nature.inview_distance".to_string(), ParamValue::from(90i64));
    params.insert("compose_nature.land_domain_tags".to_string(),
                  ParamValue::from("landscape,-liquid_covered,-cave"));
    params.insert("compose_nature.fancy_clouds_chance".to_string(), ParamValue::from(0.1));
    params.insert("compose_nature.ground_creatures_chance".to_string(), ParamValue::from(0.05));
    params.insert("compose_nature.flying_creatures_chance".to_string(), ParamValue::from(0.02));

    // Poblado posterior.
    params.insert("populate_scene.slime_mold_chance".to_string(), ParamValue::from(0.0));
    params.insert("populate_scene.lichen_chance".to_string(), ParamValue::from(0.15));
    params.insert("populate_scene.fire_warmup".to_string(), ParamValue::from(25i64));
    params
}

fn main() {
    // Cargar .env si existe para SCENEGEN_PIPELINE_CMD / SCENEGEN_OUTPUT_ROOT
    let _ = dotenvy::dotenv();

    let mut params = desert_scene_parameters();
    if let Some(root) = &CONFIG.pipeline.output_root {
        let dest = Path::new(root).join("my_custom_desert_scene");
        params.insert("output_folder".to_string(),
                      ParamValue::from(dest.display().to_string()));
    }

    // Bootstrap del entry point: sin comando configurado no se intenta nada.
    let mut pipeline = match CommandPipeline::from_config() {
        Ok(p) => p,
        Err(e) => {
            eprintln!("[scenegen-launch] pipeline no disponible: {e}");
            eprintln!("[scenegen-launch] exporte SCENEGEN_PIPELINE_CMD con el comando del pipeline");
            std::process::exit(1);
        }
    };

    if let Err(e) = build_and_dispatch(&params, &mut pipeline) {
        eprintln!("[scenegen-launch] error: {e}");
        std::process::exit(5);
    }
    println!("[scenegen-launch] generación iniciada");
}
