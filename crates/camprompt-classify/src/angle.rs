//! Camera-angle classification.

use camprompt_core::CameraConfig;

use crate::tables::{AngleCategory, ANGLE_TABLE};

/// Dutch low angle requires at least this much roll.
const DUTCH_LOW_ROLL_MIN_DEG: f64 = 10.0;
/// Fallback threshold for a bird's eye view.
const BIRD_EYE_MIN_DEG: f64 = 75.0;
/// Fallback threshold for a high angle.
const HIGH_ANGLE_MIN_DEG: f64 = 15.0;

/// Classifies pitch and roll into an angle category.
///
/// Rules are consulted in priority order: dutch-roll checks first, then the
/// tilt table in declaration order (test variable is negated pitch, inclusive
/// bounds), then a numeric threshold chain for anything the table missed.
///
/// The eye-level gate (`|pitch|` within tolerance produces no angle wording)
/// belongs to the caller; this function always returns a category.
#[must_use]
pub fn classify_angle(pitch_deg: f64, roll_deg: f64, cfg: &CameraConfig) -> AngleCategory {
    if roll_deg.abs() >= DUTCH_LOW_ROLL_MIN_DEG && pitch_deg < 0.0 {
        let dutch_low = ANGLE_TABLE
            .iter()
            .find(|row| row.category == AngleCategory::DutchLowAngle)
            .and_then(|row| row.roll_deg);
        if let Some([lo, hi]) = dutch_low {
            if lo <= roll_deg.abs() && roll_deg.abs() <= hi {
                return AngleCategory::DutchLowAngle;
            }
        }
    }

    if roll_deg.abs() >= cfg.dutch_roll_min_deg {
        return AngleCategory::DutchAngle;
    }

    let tilt = -pitch_deg;
    for row in &ANGLE_TABLE {
        let Some([lo, hi]) = row.tilt_deg else {
            continue;
        };
        // Eye level matches produce no wording; skip rather than return.
        if row.category == AngleCategory::EyeLevel {
            continue;
        }
        if lo <= tilt && tilt <= hi {
            return row.category;
        }
    }

    fallback_angle(pitch_deg)
}

/// Threshold chain for pitches the table ranges don't cover.
fn fallback_angle(pitch_deg: f64) -> AngleCategory {
    if pitch_deg >= BIRD_EYE_MIN_DEG {
        AngleCategory::BirdsEye
    } else if pitch_deg >= HIGH_ANGLE_MIN_DEG {
        AngleCategory::HighAngle
    } else if pitch_deg <= -75.0 {
        AngleCategory::ExtremeLowAngle
    } else if pitch_deg <= -45.0 {
        AngleCategory::DeepLowAngle
    } else if pitch_deg <= -30.0 {
        AngleCategory::StandardLowAngle
    } else if pitch_deg <= -15.0 {
        AngleCategory::SlightLowAngle
    } else if pitch_deg > 0.0 {
        AngleCategory::HighAngle
    } else {
        AngleCategory::LowAngle
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn classify(pitch: f64, roll: f64) -> AngleCategory {
        classify_angle(pitch, roll, &CameraConfig::default())
    }

    #[test]
    fn test_looking_down_uses_fallback() {
        // The High Angle and Bird's Eye table rows can't match, so downward
        // pitches resolve through the threshold chain.
        assert_eq!(classify(30.0, 0.0), AngleCategory::HighAngle);
        assert_eq!(classify(15.0, 0.0), AngleCategory::HighAngle);
        assert_eq!(classify(10.0, 0.0), AngleCategory::HighAngle);
        assert_eq!(classify(80.0, 0.0), AngleCategory::BirdsEye);
        assert_eq!(classify(90.0, 0.0), AngleCategory::BirdsEye);
    }

    #[test]
    fn test_looking_up_uses_table() {
        assert_eq!(classify(-10.0, 0.0), AngleCategory::SlightLowAngle);
        assert_eq!(classify(-20.0, 0.0), AngleCategory::StandardLowAngle);
        assert_eq!(classify(-35.0, 0.0), AngleCategory::DeepLowAngle);
        assert_eq!(classify(-50.0, 0.0), AngleCategory::ExtremeLowAngle);
        assert_eq!(classify(-90.0, 0.0), AngleCategory::ExtremeLowAngle);
    }

    #[test]
    fn test_first_match_wins_on_shared_bounds() {
        // Tilt 45 sits on the Deep Low / Extreme Low boundary; the earlier
        // row wins.
        assert_eq!(classify(-45.0, 0.0), AngleCategory::DeepLowAngle);
        // Tilt 15 sits on Slight Low / Standard Low; Slight Low is declared
        // first.
        assert_eq!(classify(-15.0, 0.0), AngleCategory::SlightLowAngle);
    }

    #[test]
    fn test_dutch_angles() {
        assert_eq!(classify(-10.0, 15.0), AngleCategory::DutchLowAngle);
        assert_eq!(classify(-10.0, -15.0), AngleCategory::DutchLowAngle);
        // Rolled but looking down: plain dutch.
        assert_eq!(classify(10.0, 15.0), AngleCategory::DutchAngle);
        // Roll beyond the dutch-low range falls through to plain dutch.
        assert_eq!(classify(-10.0, 50.0), AngleCategory::DutchAngle);
        // Small roll below the dutch-low minimum but above the dutch minimum.
        assert_eq!(classify(-10.0, 7.0), AngleCategory::DutchAngle);
    }
}
