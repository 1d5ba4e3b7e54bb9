use crate::sky::body::ObjectTable;

/// Speed of light in vacuum, in m/s.
pub const SPEED_OF_LIGHT: f64 = 299_792_458.0;
/// Distance light covers in one minute, in km. One animation frame is one minute.
pub const LIGHT_KM_PER_MINUTE: f64 = SPEED_OF_LIGHT / 1000.0 * 60.0;
/// Kilometres per astronomical unit.
pub const KM_PER_AU: f64 = 149_597_871.0;

// (name, aphelion km, mean radius km)
const INNER_PLANETS: &[(&str, f64, f64)] = &[
    ("Sun", 0.0, 696_340.0),
    ("Mercury", 69_817_445.0, 2_440.0),
    ("Venus", 108_942_780.0, 6_052.0),
    ("Earth", 152_098_233.0, 6_371.0),
    ("Mars", 249_232_432.0, 3_390.0),
];

const OUTER_PLANETS: &[(&str, f64, f64)] = &[
    ("Sun", 0.0, 696_340.0),
    ("Jupiter", 816_001_807.0, 69_911.0),
    ("Saturn", 1_503_509_229.0, 58_232.0),
    ("Uranus", 3_006_318_143.0, 25_362.0),
    ("Neptune", 4_537_039_826.0, 24_622.0),
];

pub const BODY_COLORS: &[(&str, &str)] = &[
    ("Sun", "#FFC404"),
    ("Light", "white"),
    ("Mercury", "#BeBeBe"),
    ("Venus", "#F9AB46"),
    ("Earth", "#0494cc"),
    ("Mars", "#D14734"),
    ("Jupiter", "#FE9C37"),
    ("Saturn", "#FDA369"),
    ("Uranus", "#3B97B6"),
    ("Neptune", "#1a5fa1"),
];

pub fn inner_planets() -> ObjectTable {
    ObjectTable::from_static(INNER_PLANETS)
}

pub fn outer_planets() -> ObjectTable {
    ObjectTable::from_static(OUTER_PLANETS)
}
