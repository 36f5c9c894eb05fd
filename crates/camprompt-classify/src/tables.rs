//! Static reference tables for shot framing and camera angles.
//!
//! Tables are scanned in declaration order with first-match-wins semantics,
//! so row order is load-bearing. Range conventions differ by table and are
//! preserved deliberately: shot ranges are inclusive `[min, max]`, framing
//! bands are half-open `[min, max)` with a catch-all tail for the top band.

/// A shot-framing category, from tightest to widest.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShotCategory {
    /// Face or detail fills the frame.
    ExtremeCloseUp,
    /// Head and shoulders.
    CloseUp,
    /// Chest up.
    MediumCloseUp,
    /// Waist up.
    MediumShot,
    /// Knees up.
    MediumLongShot,
    /// Whole subject, little headroom.
    FullShot,
    /// Subject small in the surroundings.
    WideShot,
    /// Subject dwarfed by the surroundings.
    ExtremeWideShot,
}

impl ShotCategory {
    /// Human-readable label used in prompt text.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::ExtremeCloseUp => "extreme close-up",
            Self::CloseUp => "close-up",
            Self::MediumCloseUp => "medium close-up",
            Self::MediumShot => "medium shot",
            Self::MediumLongShot => "medium long shot",
            Self::FullShot => "full shot",
            Self::WideShot => "wide shot",
            Self::ExtremeWideShot => "extreme wide shot",
        }
    }

    /// Underscore identifier used in the machine-readable record.
    #[must_use]
    pub fn slug(self) -> &'static str {
        match self {
            Self::ExtremeCloseUp => "extreme_close_up",
            Self::CloseUp => "close_up",
            Self::MediumCloseUp => "medium_close_up",
            Self::MediumShot => "medium_shot",
            Self::MediumLongShot => "medium_long_shot",
            Self::FullShot => "full_shot",
            Self::WideShot => "wide_shot",
            Self::ExtremeWideShot => "extreme_wide_shot",
        }
    }
}

/// A camera-angle category.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AngleCategory {
    /// Camera level with the subject; no angle wording is emitted.
    EyeLevel,
    /// Camera above the subject, looking down.
    HighAngle,
    /// Slightly below the subject.
    SlightLowAngle,
    /// Clearly below the subject.
    StandardLowAngle,
    /// Well below the subject.
    DeepLowAngle,
    /// Near-vertical view up at the subject.
    ExtremeLowAngle,
    /// Near-vertical view down at the subject.
    BirdsEye,
    /// Camera rolled off the horizon.
    DutchAngle,
    /// Rolled and below the subject.
    DutchLowAngle,
    /// Generic below-subject fallback when nothing more specific applies.
    LowAngle,
}

impl AngleCategory {
    /// Human-readable label used in prompt text.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::EyeLevel => "eye level",
            Self::HighAngle => "high angle",
            Self::SlightLowAngle => "slight low angle",
            Self::StandardLowAngle => "standard low angle",
            Self::DeepLowAngle => "deep low angle",
            Self::ExtremeLowAngle => "extreme low angle",
            Self::BirdsEye => "bird's eye view",
            Self::DutchAngle => "dutch angle",
            Self::DutchLowAngle => "dutch low angle",
            Self::LowAngle => "low angle",
        }
    }
}

/// Reference ranges for one shot category.
#[derive(Debug, Clone, Copy)]
pub struct ShotRange {
    /// The category these ranges describe.
    pub category: ShotCategory,
    /// Camera-to-subject distance range in meters, inclusive.
    pub distance_m: [f64; 2],
    /// Typical focal-length range in millimeters, inclusive.
    pub focal_length_mm: [f64; 2],
    /// Typical field-of-view range in degrees, inclusive.
    pub fov_deg: [f64; 2],
}

/// Shot reference table, tightest framing first.
pub static SHOT_TABLE: [ShotRange; 8] = [
    ShotRange {
        category: ShotCategory::ExtremeCloseUp,
        distance_m: [0.3, 0.6],
        focal_length_mm: [85.0, 135.0],
        fov_deg: [10.0, 20.0],
    },
    ShotRange {
        category: ShotCategory::CloseUp,
        distance_m: [0.6, 1.2],
        focal_length_mm: [50.0, 85.0],
        fov_deg: [20.0, 30.0],
    },
    ShotRange {
        category: ShotCategory::MediumCloseUp,
        distance_m: [1.0, 1.8],
        focal_length_mm: [35.0, 50.0],
        fov_deg: [30.0, 40.0],
    },
    ShotRange {
        category: ShotCategory::MediumShot,
        distance_m: [1.5, 3.0],
        focal_length_mm: [28.0, 50.0],
        fov_deg: [35.0, 45.0],
    },
    ShotRange {
        category: ShotCategory::MediumLongShot,
        distance_m: [2.5, 4.0],
        focal_length_mm: [24.0, 35.0],
        fov_deg: [45.0, 55.0],
    },
    ShotRange {
        category: ShotCategory::FullShot,
        distance_m: [3.0, 5.0],
        focal_length_mm: [24.0, 35.0],
        fov_deg: [50.0, 60.0],
    },
    ShotRange {
        category: ShotCategory::WideShot,
        distance_m: [5.0, 10.0],
        focal_length_mm: [18.0, 24.0],
        fov_deg: [60.0, 90.0],
    },
    ShotRange {
        category: ShotCategory::ExtremeWideShot,
        distance_m: [10.0, 50.0],
        focal_length_mm: [14.0, 20.0],
        fov_deg: [90.0, 120.0],
    },
];

/// Reference range for one angle category: a tilt range or a roll range.
#[derive(Debug, Clone, Copy)]
pub struct AngleRange {
    /// The category this range describes.
    pub category: AngleCategory,
    /// Tilt range in degrees (the test variable is negated pitch), inclusive.
    pub tilt_deg: Option<[f64; 2]>,
    /// Roll magnitude range in degrees, inclusive.
    pub roll_deg: Option<[f64; 2]>,
}

/// Angle reference table.
///
/// The High Angle and Bird's Eye rows are declared with min > max and can
/// never match; those categories are only produced by the numeric fallback
/// chain. The rows are kept as declared so the rule order stays auditable
/// against the taxonomy they were transcribed from.
pub static ANGLE_TABLE: [AngleRange; 9] = [
    AngleRange {
        category: AngleCategory::EyeLevel,
        tilt_deg: Some([-5.0, 5.0]),
        roll_deg: None,
    },
    AngleRange {
        category: AngleCategory::HighAngle,
        tilt_deg: Some([-20.0, -45.0]),
        roll_deg: None,
    },
    AngleRange {
        category: AngleCategory::SlightLowAngle,
        tilt_deg: Some([5.0, 15.0]),
        roll_deg: None,
    },
    AngleRange {
        category: AngleCategory::StandardLowAngle,
        tilt_deg: Some([15.0, 30.0]),
        roll_deg: None,
    },
    AngleRange {
        category: AngleCategory::DeepLowAngle,
        tilt_deg: Some([30.0, 45.0]),
        roll_deg: None,
    },
    AngleRange {
        category: AngleCategory::ExtremeLowAngle,
        tilt_deg: Some([45.0, 90.0]),
        roll_deg: None,
    },
    AngleRange {
        category: AngleCategory::BirdsEye,
        tilt_deg: Some([-80.0, -90.0]),
        roll_deg: None,
    },
    AngleRange {
        category: AngleCategory::DutchAngle,
        tilt_deg: None,
        roll_deg: Some([5.0, 30.0]),
    },
    AngleRange {
        category: AngleCategory::DutchLowAngle,
        tilt_deg: None,
        roll_deg: Some([10.0, 45.0]),
    },
];

/// One framing band keyed by projected percent-of-frame.
#[derive(Debug, Clone, Copy)]
pub struct FramingBand {
    /// The category this band selects.
    pub category: ShotCategory,
    /// Inclusive lower percent bound.
    pub min_percent: f64,
    /// Exclusive upper percent bound; bands with `max >= 1000` also accept
    /// anything at or above their lower bound.
    pub max_percent: f64,
}

/// Framing table: percent of sensor height filled by the subject.
///
/// Bands overlap (medium shot vs medium close-up, full shot vs medium long
/// shot); the earlier band wins, which biases ambiguous percentages toward
/// the tighter reading.
pub static FRAMING_TABLE: [FramingBand; 8] = [
    FramingBand {
        category: ShotCategory::ExtremeCloseUp,
        min_percent: 90.0,
        max_percent: 1000.0,
    },
    FramingBand {
        category: ShotCategory::CloseUp,
        min_percent: 60.0,
        max_percent: 90.0,
    },
    FramingBand {
        category: ShotCategory::MediumCloseUp,
        min_percent: 45.0,
        max_percent: 60.0,
    },
    FramingBand {
        category: ShotCategory::MediumShot,
        min_percent: 30.0,
        max_percent: 60.0,
    },
    FramingBand {
        category: ShotCategory::MediumLongShot,
        min_percent: 20.0,
        max_percent: 30.0,
    },
    FramingBand {
        category: ShotCategory::FullShot,
        min_percent: 15.0,
        max_percent: 30.0,
    },
    FramingBand {
        category: ShotCategory::WideShot,
        min_percent: 5.0,
        max_percent: 15.0,
    },
    FramingBand {
        category: ShotCategory::ExtremeWideShot,
        min_percent: 0.0,
        max_percent: 5.0,
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shot_table_order_and_coverage() {
        assert_eq!(SHOT_TABLE.len(), 8);
        assert_eq!(SHOT_TABLE[0].category, ShotCategory::ExtremeCloseUp);
        assert_eq!(SHOT_TABLE[7].category, ShotCategory::ExtremeWideShot);
        // Distance ranges tile [0.3, 50] with no gaps.
        for pair in SHOT_TABLE.windows(2) {
            assert!(pair[0].distance_m[1] >= pair[1].distance_m[0]);
        }
    }

    #[test]
    fn test_labels_and_slugs() {
        assert_eq!(ShotCategory::ExtremeCloseUp.label(), "extreme close-up");
        assert_eq!(ShotCategory::ExtremeCloseUp.slug(), "extreme_close_up");
        assert_eq!(AngleCategory::BirdsEye.label(), "bird's eye view");
    }

    #[test]
    fn test_unsatisfiable_angle_rows() {
        for row in &ANGLE_TABLE {
            let unsatisfiable = row
                .tilt_deg
                .is_some_and(|[lo, hi]| lo > hi);
            let expect = matches!(
                row.category,
                AngleCategory::HighAngle | AngleCategory::BirdsEye
            );
            assert_eq!(unsatisfiable, expect, "row {:?}", row.category);
        }
    }
}
