use crate::error::{Error, Result};
use crate::sky::annotation;
use crate::sky::body::{CelestialObject, ColumnNames, ObjectTable, LIGHT_NAME};
use crate::sky::catalog::{KM_PER_AU, LIGHT_KM_PER_MINUTE};
use serde::Serialize;
use serde_json::{json, Value};
use std::f64::consts::PI;

/// Small bodies get their marker area multiplied by this so they stay visible.
pub const AREA_UPSCALE: f64 = 500.0;
/// Rows at or above this share of the largest area keep their true area.
pub const AREA_KEEP_FRACTION: f64 = 0.9;
pub const MAX_FRAMES: u32 = 1_000_000;

#[derive(Clone, Debug)]
pub struct FrameConfig {
    /// Distance the light pulse advances per frame.
    pub speed: f64,
    /// Light marker radius as a multiple of the median body radius.
    pub light_size: f64,
    pub columns: ColumnNames,
}

impl Default for FrameConfig {
    fn default() -> Self {
        Self {
            speed: LIGHT_KM_PER_MINUTE,
            light_size: 1.0,
            columns: ColumnNames::default(),
        }
    }
}

impl FrameConfig {
    pub fn validate(&self) -> Result<()> {
        if !self.speed.is_finite() || self.speed <= 0.0 {
            return Err(Error::InvalidSpeed(self.speed));
        }
        if !self.light_size.is_finite() || self.light_size <= 0.0 {
            return Err(Error::InvalidLightSize(self.light_size));
        }
        Ok(())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum RowKind {
    Body,
    Light,
}

#[derive(Clone, Debug, PartialEq)]
pub struct FrameRow {
    pub object: String,
    pub kind: RowKind,
    pub distance: f64,
    pub frame: u32,
    pub y: f64,
    pub radius: f64,
    pub area: f64,
    pub au: f64,
    pub text: String,
}

impl FrameRow {
    fn body(object: &CelestialObject, frame: u32) -> Self {
        Self::blank(&object.name, RowKind::Body, object.distance, frame, object.radius)
    }

    fn light(frame: u32, speed: f64, radius: f64) -> Self {
        Self::blank(LIGHT_NAME, RowKind::Light, frame as f64 * speed, frame, radius)
    }

    fn blank(name: &str, kind: RowKind, distance: f64, frame: u32, radius: f64) -> Self {
        Self {
            object: name.to_string(),
            kind,
            distance,
            frame,
            y: 0.0,
            radius,
            area: PI * radius * radius,
            au: 0.0,
            text: String::new(),
        }
    }
}

/// Animation-ready rows, ordered by frame. Each frame holds every body in
/// table order followed by one light row.
#[derive(Clone, Debug)]
pub struct FrameTable {
    rows: Vec<FrameRow>,
    frame_count: u32,
    per_frame: usize,
    speed: f64,
    columns: ColumnNames,
}

impl FrameTable {
    pub fn rows(&self) -> &[FrameRow] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn frame_count(&self) -> u32 {
        self.frame_count
    }

    pub fn speed(&self) -> f64 {
        self.speed
    }

    pub fn columns(&self) -> &ColumnNames {
        &self.columns
    }

    pub fn frame(&self, index: u32) -> Option<&[FrameRow]> {
        let start = usize::try_from(index).ok()?.checked_mul(self.per_frame)?;
        let end = start.checked_add(self.per_frame)?;
        self.rows.get(start..end)
    }

    pub fn frames(&self) -> std::slice::Chunks<'_, FrameRow> {
        self.rows.chunks(self.per_frame)
    }

    pub fn max_area(&self) -> f64 {
        self.rows.iter().map(|r| r.area).fold(0.0, f64::max)
    }

    pub fn distance_range(&self) -> Option<(f64, f64)> {
        let mut distances = self.rows.iter().map(|r| r.distance);
        let first = distances.next()?;
        Some(distances.fold((first, first), |(lo, hi), d| (lo.min(d), hi.max(d))))
    }

    /// One JSON object per row, keyed by the configured column names.
    pub fn to_records(&self) -> Vec<Value> {
        self.rows
            .iter()
            .map(|row| {
                let mut record = json!({
                    "object": row.object,
                    "Y_axis": row.y,
                    "radius": row.radius,
                    "area": row.area,
                    "AU": row.au,
                    "text": row.text,
                    "kind": row.kind,
                });
                if let Some(map) = record.as_object_mut() {
                    map.insert(self.columns.distance.clone(), json!(row.distance));
                    map.insert(self.columns.frame.clone(), json!(row.frame));
                }
                record
            })
            .collect()
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(&self.to_records())?)
    }
}

/// Number of frames needed for the pulse to start at the sun and pass the
/// farthest body.
pub fn frame_count(max_distance: f64, speed: f64) -> Result<u32> {
    let steps = (max_distance / speed).floor();
    if !steps.is_finite() || steps + 2.0 > MAX_FRAMES as f64 {
        return Err(Error::TooManyFrames {
            max_distance,
            speed,
            limit: MAX_FRAMES,
        });
    }
    Ok(steps as u32 + 2)
}

pub fn build_frame_table(objects: &ObjectTable, config: &FrameConfig) -> Result<FrameTable> {
    config.validate()?;
    if objects.is_empty() {
        return Err(Error::EmptyTable);
    }

    let frame_count = frame_count(objects.max_distance(), config.speed)?;
    let light_radius = objects.median_radius() * config.light_size;
    let per_frame = objects.len() + 1;
    log::debug!(
        "building {} frames of {} rows (light radius {:.1} km)",
        frame_count,
        per_frame,
        light_radius
    );

    let mut rows = Vec::with_capacity(frame_count as usize * per_frame);
    for frame in 0..frame_count {
        rows.extend(objects.iter().map(|object| FrameRow::body(object, frame)));
        rows.push(FrameRow::light(frame, config.speed, light_radius));
    }

    upscale_small_areas(&mut rows);
    for row in &mut rows {
        row.au = row.distance / KM_PER_AU;
        row.text = annotation::label(&row.object, row.frame, row.distance / config.speed, row.au);
    }

    Ok(FrameTable {
        rows,
        frame_count,
        per_frame,
        speed: config.speed,
        columns: config.columns.clone(),
    })
}

fn upscale_small_areas(rows: &mut [FrameRow]) {
    let largest = rows.iter().map(|r| r.area).fold(0.0, f64::max);
    let keep_from = largest * AREA_KEEP_FRACTION;
    for row in rows.iter_mut().filter(|r| r.area < keep_from) {
        row.area *= AREA_UPSCALE;
    }
}
