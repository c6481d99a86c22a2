//! Parametric curve evaluation.
//!
//! A [`Curve`] is a generalized Bézier path through an ordered list of
//! control points. Meshes are swept along it by sampling `point(t)` at
//! fixed parameter increments.

use cgmath::Vector3;
use cgmath::Zero;

use super::GeometryError;

/// A generalized Bézier curve of degree `control_points.len() - 1`.
///
/// Evaluation is a Bernstein-basis weighted sum of the control points, so
/// the curve interpolates the first control point at `t = 0` and the last
/// at `t = 1`. Parameters outside `[0, 1]` are accepted and extrapolate
/// through the same polynomial.
#[derive(Debug, Clone)]
pub struct Curve {
    control_points: Vec<Vector3<f32>>,
}

impl Curve {
    /// Create a curve from an ordered list of control points.
    ///
    /// Fails with [`GeometryError::TooFewControlPoints`] for fewer than
    /// two points; the list is immutable after construction.
    pub fn new(control_points: Vec<Vector3<f32>>) -> Result<Self, GeometryError> {
        if control_points.len() < 2 {
            return Err(GeometryError::TooFewControlPoints(control_points.len()));
        }
        Ok(Self { control_points })
    }

    /// Evaluate the curve at parameter `t`.
    ///
    /// Computes `Σ C(n,i) · tⁱ · (1-t)ⁿ⁻ⁱ · Pᵢ`. The binomial coefficients
    /// come from the multiplicative recurrence `C(n,i+1) = C(n,i)·(n-i)/(i+1)`,
    /// which stays finite for control-point counts the factorial form cannot
    /// represent. Pure function, no side effects.
    pub fn point(&self, t: f32) -> Vector3<f32> {
        let n = self.control_points.len() - 1;
        let mut result = Vector3::zero();
        let mut binomial = 1.0f32;

        for (i, control_point) in self.control_points.iter().enumerate() {
            let bernstein = binomial * t.powi(i as i32) * (1.0 - t).powi((n - i) as i32);
            result += *control_point * bernstein;
            binomial = binomial * (n - i) as f32 / (i + 1) as f32;
        }

        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cgmath::InnerSpace;

    const EPS: f32 = 1e-5;

    #[test]
    fn test_endpoint_interpolation() {
        let curve = Curve::new(vec![
            Vector3::new(0.0, -2.0, 0.0),
            Vector3::new(1.0, 2.0, -1.0),
            Vector3::new(0.0, 1.0, 0.0),
        ])
        .unwrap();

        assert!((curve.point(0.0) - Vector3::new(0.0, -2.0, 0.0)).magnitude() < EPS);
        assert!((curve.point(1.0) - Vector3::new(0.0, 1.0, 0.0)).magnitude() < EPS);
    }

    #[test]
    fn test_two_points_is_linear() {
        let p0 = Vector3::new(0.0, -2.0, 0.0);
        let p1 = Vector3::new(0.0, 1.0, 0.0);
        let curve = Curve::new(vec![p0, p1]).unwrap();

        for i in 0..=10 {
            let t = i as f32 / 10.0;
            let expected = p0 + (p1 - p0) * t;
            assert!((curve.point(t) - expected).magnitude() < EPS);
        }
    }

    #[test]
    fn test_extrapolates_outside_unit_range() {
        let p0 = Vector3::new(0.0, 0.0, 0.0);
        let p1 = Vector3::new(2.0, 0.0, 0.0);
        let curve = Curve::new(vec![p0, p1]).unwrap();

        // No clamping: the same polynomial continues past the endpoints.
        assert!((curve.point(1.5) - Vector3::new(3.0, 0.0, 0.0)).magnitude() < EPS);
        assert!((curve.point(-0.5) - Vector3::new(-1.0, 0.0, 0.0)).magnitude() < EPS);
    }

    #[test]
    fn test_quadratic_midpoint() {
        // B(0.5) = 0.25·P0 + 0.5·P1 + 0.25·P2
        let curve = Curve::new(vec![
            Vector3::new(0.0, 0.0, 0.0),
            Vector3::new(1.0, 2.0, 0.0),
            Vector3::new(2.0, 0.0, 0.0),
        ])
        .unwrap();

        assert!((curve.point(0.5) - Vector3::new(1.0, 1.0, 0.0)).magnitude() < EPS);
    }

    #[test]
    fn test_rejects_short_control_list() {
        assert!(matches!(
            Curve::new(vec![Vector3::new(0.0, 0.0, 0.0)]),
            Err(GeometryError::TooFewControlPoints(1))
        ));
        assert!(matches!(
            Curve::new(Vec::new()),
            Err(GeometryError::TooFewControlPoints(0))
        ));
    }
}
