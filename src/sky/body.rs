use crate::error::{Error, Result};
use serde_json::{Map, Value};
use std::collections::HashSet;

/// Name given to the synthetic row that carries the light pulse.
pub const LIGHT_NAME: &str = "Light";

const NAME_COLUMN: &str = "object";
const RADIUS_COLUMN: &str = "radius";

#[derive(Clone, Debug, PartialEq)]
pub struct CelestialObject {
    pub name: String,
    pub distance: f64, // km from the sun
    pub radius: f64,   // km
}

impl CelestialObject {
    pub fn new(name: impl Into<String>, distance: f64, radius: f64) -> Self {
        Self {
            name: name.into(),
            distance,
            radius,
        }
    }
}

/// Column labels used when a table crosses a JSON boundary.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ColumnNames {
    pub distance: String,
    pub frame: String,
}

impl Default for ColumnNames {
    fn default() -> Self {
        Self {
            distance: "aphelion".to_string(),
            frame: "minutes".to_string(),
        }
    }
}

/// A non-empty list of bodies with unique names, in display order.
#[derive(Clone, Debug)]
pub struct ObjectTable {
    objects: Vec<CelestialObject>,
}

impl ObjectTable {
    pub fn new(objects: Vec<CelestialObject>) -> Result<Self> {
        if objects.is_empty() {
            return Err(Error::EmptyTable);
        }

        let mut seen = HashSet::with_capacity(objects.len());
        for object in &objects {
            if object.name == LIGHT_NAME {
                return Err(Error::ReservedName(object.name.clone()));
            }
            if !seen.insert(object.name.as_str()) {
                return Err(Error::DuplicateName(object.name.clone()));
            }
            if !object.distance.is_finite() || object.distance < 0.0 {
                return Err(Error::InvalidDistance {
                    name: object.name.clone(),
                    distance: object.distance,
                });
            }
            if !object.radius.is_finite() || object.radius <= 0.0 {
                return Err(Error::InvalidRadius {
                    name: object.name.clone(),
                    radius: object.radius,
                });
            }
        }

        Ok(Self { objects })
    }

    /// Builds a table from compile-time rows that are covered by the catalog tests.
    pub(crate) fn from_static(rows: &[(&str, f64, f64)]) -> Self {
        let objects = rows
            .iter()
            .map(|&(name, distance, radius)| CelestialObject::new(name, distance, radius))
            .collect();
        Self { objects }
    }

    /// Parses an array of JSON records such as
    /// `[{"object": "Sun", "aphelion": 0, "radius": 696340}]`.
    pub fn from_json_records(json: &str, columns: &ColumnNames) -> Result<Self> {
        let records: Vec<Map<String, Value>> = serde_json::from_str(json)?;
        let objects = records
            .iter()
            .enumerate()
            .map(|(row, record)| {
                let name = column(record, row, NAME_COLUMN)?
                    .as_str()
                    .ok_or_else(|| wrong_type(row, NAME_COLUMN, "string"))?;
                let distance = number(record, row, &columns.distance)?;
                let radius = number(record, row, RADIUS_COLUMN)?;
                Ok(CelestialObject::new(name, distance, radius))
            })
            .collect::<Result<Vec<_>>>()?;
        Self::new(objects)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, CelestialObject> {
        self.objects.iter()
    }

    pub fn len(&self) -> usize {
        self.objects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    pub fn max_distance(&self) -> f64 {
        self.objects
            .iter()
            .map(|o| o.distance)
            .fold(f64::NEG_INFINITY, f64::max)
    }

    /// Median radius; the mean of the two middle values for an even count.
    pub fn median_radius(&self) -> f64 {
        let mut radii: Vec<f64> = self.objects.iter().map(|o| o.radius).collect();
        radii.sort_by(f64::total_cmp);
        let mid = radii.len() / 2;
        if radii.len() % 2 == 0 {
            (radii[mid - 1] + radii[mid]) / 2.0
        } else {
            radii[mid]
        }
    }
}

impl<'a> IntoIterator for &'a ObjectTable {
    type Item = &'a CelestialObject;
    type IntoIter = std::slice::Iter<'a, CelestialObject>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

fn column<'a>(record: &'a Map<String, Value>, row: usize, name: &str) -> Result<&'a Value> {
    record.get(name).ok_or_else(|| Error::MissingColumn {
        row,
        column: name.to_string(),
    })
}

fn number(record: &Map<String, Value>, row: usize, name: &str) -> Result<f64> {
    column(record, row, name)?
        .as_f64()
        .ok_or_else(|| wrong_type(row, name, "number"))
}

fn wrong_type(row: usize, column: &str, expected: &'static str) -> Error {
    Error::InvalidColumn {
        row,
        column: column.to_string(),
        expected,
    }
}
