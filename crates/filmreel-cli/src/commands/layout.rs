use anyhow::Result;
use serde::Serialize;

use filmreel_core::layout::{compute_layout, Placement};
use filmreel_core::AppConfig;

#[derive(Serialize)]
struct LayoutReport {
    width: f64,
    content_height: f64,
    placements: Vec<Placement>,
}

pub fn run(config: &AppConfig, heights: &[f64], width: f64) -> Result<()> {
    config.reel.validate()?;
    let result = compute_layout(heights, width, &config.reel.masonry_params());

    let report = LayoutReport {
        width,
        content_height: result.content_height,
        placements: result.placements,
    };
    println!("{}", serde_json::to_string_pretty(&report)?);

    Ok(())
}
