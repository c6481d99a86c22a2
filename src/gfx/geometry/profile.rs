//! Cross-section profiles.
//!
//! A [`Profile`] describes the 2D outline swept along a curve as an ordered
//! sequence of `(radius, angle_degrees)` polar offsets in the plane
//! orthogonal to the sweep direction. A closed profile connects its last
//! point back to the first (a ring); an open profile does not (a fan).

use super::GeometryError;

/// Radius of the canonical square cross-section.
const SQUARE_RADIUS: f32 = 3.0;

/// An immutable polar cross-section.
#[derive(Debug, Clone)]
pub struct Profile {
    points: Vec<(f32, f32)>,
    closed: bool,
}

impl Profile {
    /// Create a profile from `(radius, angle_degrees)` pairs.
    pub fn new(points: Vec<(f32, f32)>, closed: bool) -> Result<Self, GeometryError> {
        if points.len() < 2 {
            return Err(GeometryError::TooFewProfilePoints(points.len()));
        }
        Ok(Self { points, closed })
    }

    /// The canonical closed square: four equally spaced points of radius 3.
    pub fn square() -> Self {
        Self {
            points: vec![
                (SQUARE_RADIUS, 0.0),
                (SQUARE_RADIUS, 90.0),
                (SQUARE_RADIUS, 180.0),
                (SQUARE_RADIUS, 270.0),
            ],
            closed: true,
        }
    }

    /// An open fan whose points lie on a flat line below the sweep path.
    ///
    /// The fan spans `width` at `depth` below the path: sample directions
    /// sweep symmetrically around straight-down (270°), and each radius is
    /// stretched to `depth / cos(offset)` so every sample lands on the same
    /// horizontal line. Swept along a curve this produces a flat terrain
    /// strip rather than a tube.
    pub fn fan(width: f32, depth: f32, samples: usize) -> Result<Self, GeometryError> {
        if samples < 2 {
            return Err(GeometryError::TooFewProfilePoints(samples));
        }

        let half_span = (width * 0.5).atan2(depth);
        let sweep_step = 2.0 * half_span / (samples - 1) as f32;

        let points = (0..samples)
            .map(|i| {
                let offset = -half_span + sweep_step * i as f32;
                let radius = depth / offset.cos();
                (radius, 270.0 + offset.to_degrees())
            })
            .collect();

        Ok(Self {
            points,
            closed: false,
        })
    }

    /// Number of points in the profile.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Whether the last point connects back to the first.
    pub fn is_closed(&self) -> bool {
        self.closed
    }

    /// Number of edges stitched per ring pair: `len` when closed, `len - 1`
    /// when open.
    pub fn edge_count(&self) -> usize {
        if self.closed {
            self.points.len()
        } else {
            self.points.len() - 1
        }
    }

    /// Restartable forward iteration over the `(radius, angle)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (f32, f32)> + '_ {
        self.points.iter().copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_square_is_closed_ring() {
        let square = Profile::square();
        assert_eq!(square.len(), 4);
        assert_eq!(square.edge_count(), 4);
        assert!(square.is_closed());

        let angles: Vec<f32> = square.iter().map(|(_, a)| a).collect();
        assert_eq!(angles, vec![0.0, 90.0, 180.0, 270.0]);
        assert!(square.iter().all(|(r, _)| r == SQUARE_RADIUS));
    }

    #[test]
    fn test_open_profile_drops_wrap_edge() {
        let fan = Profile::fan(80.0, 8.0, 11).unwrap();
        assert_eq!(fan.len(), 11);
        assert_eq!(fan.edge_count(), 10);
        assert!(!fan.is_closed());
    }

    #[test]
    fn test_fan_samples_are_coplanar_flat() {
        // Every sample projects to the same depth below the apex:
        // radius · cos(angle - 270°) == depth.
        let depth = 8.0;
        let fan = Profile::fan(80.0, depth, 11).unwrap();
        for (radius, angle) in fan.iter() {
            let down = radius * (angle - 270.0).to_radians().cos();
            assert!((down - depth).abs() < 1e-3);
        }
    }

    #[test]
    fn test_fan_spans_requested_width() {
        let fan = Profile::fan(80.0, 8.0, 11).unwrap();
        let points: Vec<(f32, f32)> = fan.iter().collect();
        let (first_r, first_a) = points[0];
        let (last_r, last_a) = points[points.len() - 1];

        let first_x = first_r * (first_a - 270.0).to_radians().sin();
        let last_x = last_r * (last_a - 270.0).to_radians().sin();
        assert!((last_x - first_x - 80.0).abs() < 1e-2);
    }

    #[test]
    fn test_iteration_is_restartable() {
        let square = Profile::square();
        let first: Vec<_> = square.iter().collect();
        let second: Vec<_> = square.iter().collect();
        assert_eq!(first, second);
    }

    #[test]
    fn test_rejects_short_profiles() {
        assert!(matches!(
            Profile::new(vec![(1.0, 0.0)], true),
            Err(GeometryError::TooFewProfilePoints(1))
        ));
        assert!(matches!(
            Profile::fan(10.0, 1.0, 1),
            Err(GeometryError::TooFewProfilePoints(1))
        ));
    }
}
