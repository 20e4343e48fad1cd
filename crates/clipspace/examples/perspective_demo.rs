//! Prints the perspective demonstrations as JSON.
//!
//! Usage: `cargo run --example perspective_demo [scene.json]`
//!
//! Without an argument the default scene is used: a 2x2x2 cube at (0, 0, -5),
//! a camera at the origin (60 degree fov, near 0.5, far 50) and a second
//! camera position at (3, 2, 0).

use clipspace::scenarios;
use clipspace::{Result, SceneConfig};

fn main() -> Result<()> {
    clipspace::init_logging();

    let scene = match std::env::args().nth(1) {
        Some(path) => {
            log::info!("loading scene from {path}");
            SceneConfig::from_json(&std::fs::read_to_string(&path)?)?
        }
        None => SceneConfig::default(),
    };

    let report = scenarios::run(&scene)?;

    for case in &report.near_plane {
        log::info!(
            "{}: in view volume = {}, min NDC z = {:?}",
            case.label,
            case.in_view_volume,
            case.min_ndc_z
        );
    }
    log::info!(
        "camera motion max NDC shift = {:.4}",
        report.camera_motion.max_displacement()
    );

    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}
