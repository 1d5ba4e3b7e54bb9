//! Property-based tests for the frame-table builder.

use proptest::prelude::*;
use std::f64::consts::PI;

use crate::sky::body::{CelestialObject, ObjectTable};
use crate::sky::catalog::KM_PER_AU;
use crate::sky::frames::{build_frame_table, FrameConfig, RowKind, AREA_KEEP_FRACTION, AREA_UPSCALE};

fn object_table() -> impl Strategy<Value = ObjectTable> {
    prop::collection::vec((0.0f64..5.0e9, 1.0f64..1.0e6), 1..8).prop_map(|bodies| {
        let objects = bodies
            .into_iter()
            .enumerate()
            .map(|(i, (distance, radius))| CelestialObject::new(format!("Body {i}"), distance, radius))
            .collect();
        ObjectTable::new(objects).unwrap()
    })
}

fn config(speed: f64) -> FrameConfig {
    FrameConfig {
        speed,
        ..FrameConfig::default()
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    /// frame_count = floor(max / speed) + 2 and every frame holds n + 1 rows.
    #[test]
    fn prop_frame_and_row_counts(table in object_table(), speed in 1.0e6f64..1.0e9) {
        let frames = build_frame_table(&table, &config(speed)).unwrap();
        let expected = (table.max_distance() / speed).floor() as u32 + 2;
        prop_assert_eq!(frames.frame_count(), expected);
        prop_assert_eq!(frames.len(), expected as usize * (table.len() + 1));
    }

    /// The light row sits at frame × speed and the frame decodes back.
    #[test]
    fn prop_light_distance_tracks_frame(table in object_table(), speed in 1.0e6f64..1.0e9) {
        let frames = build_frame_table(&table, &config(speed)).unwrap();
        let lights: Vec<_> = frames.rows().iter().filter(|r| r.kind == RowKind::Light).collect();
        prop_assert_eq!(lights.len(), frames.frame_count() as usize);
        for light in lights {
            prop_assert_eq!(light.distance, light.frame as f64 * speed);
            prop_assert_eq!((light.distance / speed).round() as u32, light.frame);
        }
    }

    /// Only rows close to the largest marker keep their true area.
    #[test]
    fn prop_small_areas_are_upscaled(table in object_table(), speed in 1.0e6f64..1.0e9) {
        let frames = build_frame_table(&table, &config(speed)).unwrap();
        let largest = frames
            .rows()
            .iter()
            .map(|r| PI * r.radius * r.radius)
            .fold(0.0, f64::max);
        for row in frames.rows() {
            let true_area = PI * row.radius * row.radius;
            if true_area < largest * AREA_KEEP_FRACTION {
                prop_assert_eq!(row.area, true_area * AREA_UPSCALE);
            } else {
                prop_assert_eq!(row.area, true_area);
            }
        }
    }

    /// AU converts back to kilometres.
    #[test]
    fn prop_au_round_trips(table in object_table(), speed in 1.0e6f64..1.0e9) {
        let frames = build_frame_table(&table, &config(speed)).unwrap();
        for row in frames.rows() {
            let back = row.au * KM_PER_AU;
            prop_assert!(
                (back - row.distance).abs() <= row.distance.abs() * 1e-12 + 1e-6,
                "{} km came back as {} km",
                row.distance,
                back
            );
        }
    }
}
