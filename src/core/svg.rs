//! Standalone SVG rendering of a [`Scene`].

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use anyhow::{Context, Result};
use geo::{CoordsIter, LineString, MultiPolygon};

use crate::core::palette;
use crate::core::scene::{LABEL_SIZE, MapScene, Marker, Scene};
use crate::core::viewport::Dimensions;

/// Write `scene` as an SVG document to `path`.
pub fn write_scene_file(path: &Path, scene: &Scene) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("[svg] Failed to create {}", path.display()))?;
    let mut writer = BufWriter::new(file);
    write_scene(&mut writer, scene)?;
    writer.flush().context("[svg] Failed to flush output")?;
    Ok(())
}

pub fn scene_to_string(scene: &Scene) -> Result<String> {
    let mut buffer = Vec::new();
    write_scene(&mut buffer, scene)?;
    String::from_utf8(buffer).context("[svg] SVG output is not valid UTF-8")
}

pub fn write_scene<W: Write>(writer: &mut W, scene: &Scene) -> Result<()> {
    match scene {
        Scene::Loading { failure } => {
            let dimensions = Dimensions::default();
            write_header(writer, dimensions)?;
            let (x, y) = dimensions.center();
            writeln!(
                writer,
                r##"<text x="{x:.1}" y="{y:.1}" text-anchor="middle" fill="#1e40af">Loading Topology...</text>"##
            )?;
            if let Some(failure) = failure {
                writeln!(
                    writer,
                    r##"<text x="{x:.1}" y="{:.1}" text-anchor="middle" fill="#b91c1c" font-size="12">{}</text>"##,
                    y + 20.0,
                    escape(failure)
                )?;
            }
        }
        Scene::Map(map) => {
            write_header(writer, map.dimensions)?;
            write_map(writer, map)?;
        }
    }
    writeln!(writer, "</svg>")?;
    Ok(())
}

fn write_header<W: Write>(writer: &mut W, dimensions: Dimensions) -> Result<()> {
    let Dimensions { width, height } = dimensions;
    writeln!(writer, r##"<?xml version="1.0" encoding="UTF-8" standalone="no"?>"##)?;
    writeln!(
        writer,
        r##"<svg xmlns="http://www.w3.org/2000/svg" width="{width:.1}" height="{height:.1}" viewBox="0 0 {width:.1} {height:.1}">"##
    )?;
    writeln!(writer, r##"<rect width="100%" height="100%" fill="{}"/>"##, palette::MAP_BACKGROUND)?;
    Ok(())
}

fn write_map<W: Write>(writer: &mut W, map: &MapScene) -> Result<()> {
    writeln!(
        writer,
        r##"<g class="regions" stroke="{}" stroke-width="{}">"##,
        palette::REGION_STROKE,
        palette::REGION_STROKE_WIDTH
    )?;
    for region in &map.regions {
        writeln!(
            writer,
            r##"<path d="{}" fill="{}" data-active="{}"><title>{}</title></path>"##,
            multipolygon_to_path(&region.shape),
            region.fill,
            region.active,
            escape(&region.name)
        )?;
    }
    writeln!(writer, "</g>")?;

    writeln!(writer, r##"<g class="markers">"##)?;
    for marker in &map.markers {
        write_marker(writer, marker)?;
    }
    writeln!(writer, "</g>")?;
    Ok(())
}

fn write_marker<W: Write>(writer: &mut W, marker: &Marker) -> Result<()> {
    let (x, y) = (marker.position.x, marker.position.y);
    writeln!(
        writer,
        r##"<g data-project="{}" data-selected="{}">"##,
        escape(&marker.project_id),
        marker.selected
    )?;
    if let Some(halo) = marker.halo_radius {
        writeln!(
            writer,
            r##"<circle cx="{x:.3}" cy="{y:.3}" r="{halo}" fill="{}"/>"##,
            palette::MARKER_HALO
        )?;
    }
    writeln!(
        writer,
        r##"<circle cx="{x:.3}" cy="{y:.3}" r="{}" fill="{}" stroke="{}" stroke-width="{}"/>"##,
        marker.radius,
        palette::MARKER_FILL,
        palette::MARKER_STROKE,
        palette::MARKER_STROKE_WIDTH
    )?;
    if let Some(label) = &marker.label {
        writeln!(
            writer,
            r##"<text x="{:.3}" y="{:.3}" font-size="{LABEL_SIZE}" font-weight="bold" fill="{}">{}</text>"##,
            label.position.x,
            label.position.y,
            palette::MARKER_LABEL,
            escape(&label.text)
        )?;
    }
    writeln!(writer, "</g>")?;
    Ok(())
}

/// Compact path data for every ring of a multipolygon (exteriors + holes).
fn multipolygon_to_path(shape: &MultiPolygon<f64>) -> String {
    let mut out = String::new();
    for polygon in &shape.0 {
        ring_to_path(polygon.exterior(), &mut out);
        for interior in polygon.interiors() {
            ring_to_path(interior, &mut out);
        }
    }
    out
}

fn ring_to_path(ring: &LineString<f64>, out: &mut String) {
    let mut coords = ring.coords_iter();
    if let Some(first) = coords.next() {
        out.push_str(&format!("M{:.3},{:.3}", first.x, first.y));
        for c in coords {
            out.push_str(&format!(" L{:.3},{:.3}", c.x, c.y));
        }
        out.push('Z');
    }
}

fn escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}
