//! Percentile ordinals and the red/amber/green percentile scale.
//!
//! Colors are kept as channel triples and only turned into CSS strings when
//! a payload is handed to the renderer.

use crate::models::Direction;
use serde::Serialize;

/// An 8-bit RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Rgb(pub u8, pub u8, pub u8);

pub const RED: Rgb = Rgb(220, 53, 69);
pub const AMBER: Rgb = Rgb(255, 193, 7);
pub const GREEN: Rgb = Rgb(40, 167, 69);

impl Rgb {
    /// Per-channel linear blend, rounded to the nearest integer.
    /// `factor` is clamped to [0, 1].
    pub fn lerp(self, other: Rgb, factor: f64) -> Rgb {
        let t = factor.clamp(0.0, 1.0);
        let mix = |a: u8, b: u8| -> u8 {
            let v = a as f64 + t * (b as f64 - a as f64);
            v.round().clamp(0.0, 255.0) as u8
        };
        Rgb(
            mix(self.0, other.0),
            mix(self.1, other.1),
            mix(self.2, other.2),
        )
    }

    pub fn to_css(self) -> String {
        format!("rgb({}, {}, {})", self.0, self.1, self.2)
    }

    pub fn to_css_alpha(self, alpha: f32) -> String {
        format!("rgba({}, {}, {}, {})", self.0, self.1, self.2, alpha)
    }
}

/// Map a percentile onto a 0-100 "goodness" scale.
pub fn normalise(percentile: f64, direction: Direction) -> f64 {
    let p = percentile.clamp(0.0, 100.0);
    match direction {
        Direction::LowerIsBetter => 100.0 - p,
        Direction::HigherIsBetter => p,
    }
}

/// Red at 0, amber at 50, green at 100 (after normalisation).
pub fn percentile_color(percentile: f64, direction: Direction) -> Rgb {
    scale_color(normalise(percentile, direction))
}

fn scale_color(normalised: f64) -> Rgb {
    if normalised < 50.0 {
        RED.lerp(AMBER, normalised / 50.0)
    } else {
        AMBER.lerp(GREEN, (normalised - 50.0) / 50.0)
    }
}

pub fn ordinal_suffix(n: i64) -> &'static str {
    let n = n.unsigned_abs();
    if (11..=13).contains(&(n % 100)) {
        return "th";
    }
    match n % 10 {
        1 => "st",
        2 => "nd",
        3 => "rd",
        _ => "th",
    }
}

/// `73` -> `"73rd"`
pub fn format_ordinal(n: i64) -> String {
    format!("{}{}", n, ordinal_suffix(n))
}

/// Display form of a percentile: ordinal label plus cell color.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PercentileBadge {
    pub label: String,
    pub color: Rgb,
}

pub fn percentile_badge(percentile: f64, direction: Direction) -> PercentileBadge {
    let p = percentile.clamp(0.0, 100.0);
    PercentileBadge {
        label: format_ordinal(p.round() as i64),
        color: percentile_color(p, direction),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn teens_take_th() {
        assert_eq!(format_ordinal(11), "11th");
        assert_eq!(format_ordinal(12), "12th");
        assert_eq!(format_ordinal(13), "13th");
        assert_eq!(format_ordinal(111), "111th");
        assert_eq!(format_ordinal(112), "112th");
    }

    #[test]
    fn ordinal_last_digit_rule() {
        assert_eq!(format_ordinal(1), "1st");
        assert_eq!(format_ordinal(2), "2nd");
        assert_eq!(format_ordinal(3), "3rd");
        assert_eq!(format_ordinal(4), "4th");
        assert_eq!(format_ordinal(21), "21st");
        assert_eq!(format_ordinal(73), "73rd");
        assert_eq!(format_ordinal(0), "0th");
        assert_eq!(format_ordinal(100), "100th");
    }

    #[test]
    fn scale_stops_are_exact() {
        assert_eq!(percentile_color(0.0, Direction::HigherIsBetter), RED);
        assert_eq!(percentile_color(50.0, Direction::HigherIsBetter), AMBER);
        assert_eq!(percentile_color(100.0, Direction::HigherIsBetter), GREEN);
    }

    #[test]
    fn lower_is_better_inverts() {
        assert_eq!(normalise(30.0, Direction::LowerIsBetter), 70.0);
        assert_eq!(normalise(30.0, Direction::HigherIsBetter), 30.0);
        assert_eq!(percentile_color(100.0, Direction::LowerIsBetter), RED);
        assert_eq!(percentile_color(0.0, Direction::LowerIsBetter), GREEN);
    }

    #[test]
    fn out_of_range_percentiles_are_clamped() {
        assert_eq!(normalise(130.0, Direction::HigherIsBetter), 100.0);
        assert_eq!(normalise(-5.0, Direction::LowerIsBetter), 100.0);
    }

    #[test]
    fn channels_move_monotonically_between_stops() {
        let mut prev = percentile_color(0.0, Direction::HigherIsBetter);
        for p in 1..50 {
            let c = percentile_color(p as f64, Direction::HigherIsBetter);
            // red -> amber: R and G rise, B falls
            assert!(c.0 >= prev.0 && c.1 >= prev.1 && c.2 <= prev.2, "at {p}");
            prev = c;
        }
        let mut prev = percentile_color(50.0, Direction::HigherIsBetter);
        for p in 51..=100 {
            let c = percentile_color(p as f64, Direction::HigherIsBetter);
            // amber -> green: R and G fall, B rises
            assert!(c.0 <= prev.0 && c.1 <= prev.1 && c.2 >= prev.2, "at {p}");
            prev = c;
        }
    }

    #[test]
    fn midpoint_blend_rounds() {
        // 25 is halfway from red to amber
        assert_eq!(
            percentile_color(25.0, Direction::HigherIsBetter),
            Rgb(238, 123, 38)
        );
    }

    #[test]
    fn badge_rounds_percentile() {
        let badge = percentile_badge(72.6, Direction::HigherIsBetter);
        assert_eq!(badge.label, "73rd");
        assert_eq!(badge.color, percentile_color(72.6, Direction::HigherIsBetter));
        assert_eq!(Rgb(1, 2, 3).to_css(), "rgb(1, 2, 3)");
        assert_eq!(Rgb(1, 2, 3).to_css_alpha(0.5), "rgba(1, 2, 3, 0.5)");
    }

    #[test]
    fn badge_label_and_color_share_the_clamp() {
        let high = percentile_badge(130.0, Direction::HigherIsBetter);
        assert_eq!(high.label, "100th");
        assert_eq!(high.color, GREEN);

        let low = percentile_badge(-8.0, Direction::HigherIsBetter);
        assert_eq!(low.label, "0th");
        assert_eq!(low.color, RED);
    }
}
