//! Pinhole-optics helpers: FOV, focal length, and framing percentage.

/// Half the sensor height used when estimating a focal length from a FOV.
const FOCAL_ESTIMATE_HALF_HEIGHT_MM: f64 = 18.0;

/// Focal-length estimates are clamped to this plausible lens range (mm).
const FOCAL_ESTIMATE_RANGE_MM: (f64, f64) = (14.0, 200.0);

/// Field of view in degrees for a focal length over one sensor dimension.
///
/// Standard pinhole formula `2*atan(sensor / (2*focal))`. Returns `None` for
/// a non-positive focal length: no lens information, not an error.
#[must_use]
pub fn fov_from_focal_length(focal_mm: f64, sensor_dim_mm: f64) -> Option<f64> {
    if focal_mm <= 0.0 {
        return None;
    }
    Some((2.0 * (sensor_dim_mm / (2.0 * focal_mm)).atan()).to_degrees())
}

/// Estimates a focal length in millimeters from a field of view in degrees.
///
/// Inverts the pinhole formula for an 18 mm half-height and clamps the result
/// to a plausible 14-200 mm lens range. Returns `None` for a non-positive FOV.
#[must_use]
pub fn estimate_focal_from_fov(fov_deg: f64) -> Option<f64> {
    if fov_deg <= 0.0 {
        return None;
    }
    let focal = FOCAL_ESTIMATE_HALF_HEIGHT_MM / (fov_deg.to_radians() / 2.0).tan();
    let (lo, hi) = FOCAL_ESTIMATE_RANGE_MM;
    Some(focal.clamp(lo, hi))
}

/// Rough field-of-view estimate from camera distance alone, in degrees.
///
/// Bucketed by the same distance bands the shot taxonomy uses: a camera that
/// close to its subject is almost certainly on a long lens, and vice versa.
#[must_use]
pub fn estimate_fov_from_distance(distance_m: f64) -> f64 {
    if distance_m < 0.6 {
        15.0
    } else if distance_m < 1.2 {
        25.0
    } else if distance_m < 3.0 {
        37.5
    } else if distance_m < 5.0 {
        52.5
    } else if distance_m < 10.0 {
        70.0
    } else {
        100.0
    }
}

/// Projected size of an object on the sensor as a percentage of one sensor
/// dimension.
///
/// `None` when any input is non-positive (unknown scale, degenerate
/// distance, or no lens).
#[must_use]
pub fn framing_percent(
    object_scale_m: f64,
    distance_m: f64,
    focal_mm: f64,
    sensor_dim_mm: f64,
) -> Option<f64> {
    if object_scale_m <= 0.0 || distance_m <= 0.0 || focal_mm <= 0.0 {
        return None;
    }
    let projected_mm = focal_mm * (object_scale_m / distance_m);
    Some(100.0 * projected_mm / sensor_dim_mm)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fov_from_focal_length() {
        // 50mm over a 36mm sensor width.
        let fov = fov_from_focal_length(50.0, 36.0).unwrap();
        assert!((fov - 39.5978).abs() < 1e-3);

        assert_eq!(fov_from_focal_length(0.0, 36.0), None);
        assert_eq!(fov_from_focal_length(-10.0, 36.0), None);
    }

    #[test]
    fn test_estimate_focal_roundtrip_and_clamp() {
        // The estimator inverts the 36mm-width formula exactly (18mm half-dim).
        let fov = fov_from_focal_length(50.0, 36.0).unwrap();
        let focal = estimate_focal_from_fov(fov).unwrap();
        assert!((focal - 50.0).abs() < 1e-9);

        // Wide FOVs clamp to the short end, narrow FOVs to the long end.
        assert_eq!(estimate_focal_from_fov(150.0), Some(14.0));
        assert_eq!(estimate_focal_from_fov(5.0), Some(200.0));
        assert_eq!(estimate_focal_from_fov(0.0), None);
    }

    #[test]
    fn test_fov_from_distance_buckets() {
        assert_eq!(estimate_fov_from_distance(0.5), 15.0);
        assert_eq!(estimate_fov_from_distance(1.0), 25.0);
        assert_eq!(estimate_fov_from_distance(2.0), 37.5);
        assert_eq!(estimate_fov_from_distance(4.0), 52.5);
        assert_eq!(estimate_fov_from_distance(8.0), 70.0);
        assert_eq!(estimate_fov_from_distance(20.0), 100.0);
    }

    #[test]
    fn test_framing_percent() {
        // 1.8m subject at 3m on a 50mm lens: 30mm projected, 125% of a 24mm
        // sensor height.
        let pct = framing_percent(1.8, 3.0, 50.0, 24.0).unwrap();
        assert!((pct - 125.0).abs() < 1e-9);

        assert_eq!(framing_percent(0.0, 3.0, 50.0, 24.0), None);
        assert_eq!(framing_percent(1.8, 0.0, 50.0, 24.0), None);
        assert_eq!(framing_percent(1.8, 3.0, 0.0, 24.0), None);
    }
}
