use crate::sky::body::LIGHT_NAME;

pub const LINE_BREAK: &str = "<br>";
const SUN_NAME: &str = "Sun";

/// Label shown under a marker.
///
/// Bodies show their light travel time in minutes and their distance in AU,
/// the light pulse shows the elapsed minutes, and the sun only its name.
pub fn label(name: &str, frame: u32, minutes: f64, au: f64) -> String {
    if name == SUN_NAME {
        name.to_string()
    } else if name == LIGHT_NAME {
        format!("{}{}{} m", name, LINE_BREAK, frame)
    } else {
        format!(
            "{}{}{} m{}{} AU",
            name,
            LINE_BREAK,
            round_display(minutes, 2),
            LINE_BREAK,
            round_display(au, 1)
        )
    }
}

/// Rounds to `decimals` places and drops trailing zeros, keeping one
/// fractional digit: `45.3648 -> "45.36"`, `46.0 -> "46.0"`.
///
/// Rounding is done on the exact binary value, so an exact tie such as
/// `0.125` goes to the even neighbour.
pub fn round_display(value: f64, decimals: usize) -> String {
    let mut text = format!("{:.*}", decimals, value);
    if text.contains('.') {
        let trimmed = text.trim_end_matches('0').len();
        text.truncate(trimmed);
        if text.ends_with('.') {
            text.push('0');
        }
    } else {
        text.push_str(".0");
    }
    if text == "-0.0" {
        text.remove(0);
    }
    text
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sun_is_labelled_with_its_name_only() {
        assert_eq!(label("Sun", 0, 0.0, 0.0), "Sun");
        assert_eq!(label("Sun", 12, 0.0, 0.0), "Sun");
    }

    #[test]
    fn light_shows_elapsed_minutes() {
        assert_eq!(label("Light", 5, 5.0, 0.6), "Light<br>5 m");
        assert_eq!(label("Light", 0, 0.0, 0.0), "Light<br>0 m");
    }

    #[test]
    fn bodies_show_minutes_and_au() {
        assert_eq!(
            label("Earth", 3, 8.455753, 1.016713),
            "Earth<br>8.46 m<br>1.0 AU"
        );
        assert_eq!(
            label("Jupiter", 0, 45.364826, 5.454640),
            "Jupiter<br>45.36 m<br>5.5 AU"
        );
    }

    #[test]
    fn rounding_trims_trailing_zeros() {
        assert_eq!(round_display(46.0, 2), "46.0");
        assert_eq!(round_display(3.10, 2), "3.1");
        assert_eq!(round_display(0.0, 1), "0.0");
        assert_eq!(round_display(252.2365, 2), "252.24");
        assert_eq!(round_display(7.0, 0), "7.0");
    }

    #[test]
    fn rounding_follows_the_binary_value() {
        // 0.125 is an exact tie and goes to the even digit.
        assert_eq!(round_display(0.125, 2), "0.12");
        assert_eq!(round_display(0.375, 2), "0.38");
        // 2.675 is stored slightly below the tie.
        assert_eq!(round_display(2.675, 2), "2.67");
        assert_eq!(round_display(-0.01, 1), "0.0");
    }
}
