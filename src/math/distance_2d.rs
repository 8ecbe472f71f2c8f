use super::{Point2, Vector2};

/// How the length of a segment between two adjacent points is measured.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DistanceMetric {
    /// Plain Euclidean distance.
    #[default]
    Planar,
    /// Longitude/latitude degrees, with the longitude difference scaled by the
    /// cosine of the segment's mean latitude.
    LonLat,
}

impl DistanceMetric {
    /// Returns the metric matching a `geographic` flag.
    #[must_use]
    pub fn from_geographic(geographic: bool) -> Self {
        if geographic {
            Self::LonLat
        } else {
            Self::Planar
        }
    }

    /// Returns the length of the segment from `a` to `b` under this metric.
    #[must_use]
    pub fn segment_length(self, a: &Point2, b: &Point2) -> f64 {
        match self {
            Self::Planar => planar_distance(a, b),
            Self::LonLat => lonlat_distance(a, b),
        }
    }
}

/// Returns the Euclidean distance between `a` and `b`.
#[must_use]
pub fn planar_distance(a: &Point2, b: &Point2) -> f64 {
    nalgebra::distance(a, b)
}

/// Returns the approximate local distance between two lon/lat points, in degrees
/// of latitude.
///
/// The longitude difference is multiplied by `cos(mean latitude)` before the
/// Pythagorean combination. This is a flat-earth approximation: it drifts near
/// the poles and over long segments, and is not a geodesic distance.
#[must_use]
pub fn lonlat_distance(a: &Point2, b: &Point2) -> f64 {
    let longitude_factor = ((a.y + b.y) * 0.5).to_radians().cos();
    let delta = Vector2::new((b.x - a.x) * longitude_factor, b.y - a.y);
    delta.norm()
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOL: f64 = 1e-10;

    #[test]
    fn planar_3_4_5() {
        let d = planar_distance(&Point2::new(0.0, 0.0), &Point2::new(3.0, 4.0));
        assert!((d - 5.0).abs() < TOL, "d={d}");
    }

    #[test]
    fn planar_is_symmetric() {
        let a = Point2::new(-1.5, 2.0);
        let b = Point2::new(4.0, -3.25);
        assert!((planar_distance(&a, &b) - planar_distance(&b, &a)).abs() < TOL);
    }

    #[test]
    fn lonlat_at_equator_matches_planar() {
        let a = Point2::new(10.0, 0.0);
        let b = Point2::new(13.0, 0.0);
        let d = lonlat_distance(&a, &b);
        assert!((d - 3.0).abs() < TOL, "d={d}");
    }

    #[test]
    fn lonlat_shrinks_longitude_at_60_degrees() {
        // cos(60°) = 0.5, so 2° of longitude spans 1° of latitude.
        let a = Point2::new(0.0, 60.0);
        let b = Point2::new(2.0, 60.0);
        let d = lonlat_distance(&a, &b);
        assert!((d - 1.0).abs() < 1e-9, "d={d}");
    }

    #[test]
    fn lonlat_latitude_difference_unscaled() {
        let a = Point2::new(5.0, 40.0);
        let b = Point2::new(5.0, 41.5);
        let d = lonlat_distance(&a, &b);
        assert!((d - 1.5).abs() < TOL, "d={d}");
    }

    #[test]
    fn lonlat_uses_mean_latitude() {
        // Mean latitude of 50° and 70° is 60°.
        let a = Point2::new(0.0, 50.0);
        let b = Point2::new(4.0, 70.0);
        let expected = (2.0_f64.powi(2) + 20.0_f64.powi(2)).sqrt();
        let d = lonlat_distance(&a, &b);
        assert!((d - expected).abs() < 1e-9, "d={d}");
    }

    #[test]
    fn metric_from_flag() {
        assert_eq!(DistanceMetric::from_geographic(false), DistanceMetric::Planar);
        assert_eq!(DistanceMetric::from_geographic(true), DistanceMetric::LonLat);
        assert_eq!(DistanceMetric::default(), DistanceMetric::Planar);
    }

    #[test]
    fn metric_dispatch() {
        let a = Point2::new(0.0, 60.0);
        let b = Point2::new(2.0, 60.0);
        assert!((DistanceMetric::Planar.segment_length(&a, &b) - 2.0).abs() < TOL);
        assert!((DistanceMetric::LonLat.segment_length(&a, &b) - 1.0).abs() < 1e-9);
    }
}
