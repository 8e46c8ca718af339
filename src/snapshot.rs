use std::path::Path;

use anyhow::Context;

use crate::core::projection::ProjectionError;
use crate::core::scene::{self, SceneInput};
use crate::core::{Dimensions, Geography, Scene, svg};
use crate::dashboard::Dashboard;

/// Scene for a dashboard state at the given container width.
pub fn render_dashboard(
    dashboard: &Dashboard,
    geography: Option<&Geography>,
    width: f64,
) -> Result<Scene, ProjectionError> {
    scene::render(&SceneInput {
        catalog: dashboard.catalog(),
        geography,
        dimensions: Dimensions::from_container_width(width),
        selected: dashboard.selected_id(),
        failure: None,
    })
}

/// Load the topology once, render the map and write it as SVG.
pub async fn write_snapshot(
    dashboard: &Dashboard,
    topology: crate::core::TopologySource,
    width: f64,
    output: &Path,
) -> anyhow::Result<()> {
    let source = topology.to_string();
    let geography = topology
        .load()
        .await
        .with_context(|| format!("Failed to load topology from {source}"))?;

    let scene = render_dashboard(dashboard, Some(&geography), width)?;
    if let Some(map) = scene.map() {
        log::info!(
            "Rendered {} regions and {} markers at {}x{}",
            map.regions.len(),
            map.markers.len(),
            map.dimensions.width,
            map.dimensions.height
        );
    }
    svg::write_scene_file(output, &scene)?;
    log::info!("Snapshot written to {}", output.display());
    Ok(())
}
