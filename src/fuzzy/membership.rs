use crate::fuzzy::error::FuzzyError;

/// A piecewise-linear membership function.
///
/// The shape is defined by ordered `(x, degree)` breakpoints. Between two
/// breakpoints the degree is linearly interpolated; outside the first and
/// last breakpoint it is 0. Breakpoints may share an x coordinate, which
/// models vertical edges and point masses (a fully degenerate triangle);
/// at such an x the highest degree wins, so boundary values come out as
/// exact 0 or 1 rather than approximations.
#[derive(Debug, Clone, PartialEq)]
pub struct MembershipFunction {
    points: Vec<(f64, f64)>,
}

impl MembershipFunction {
    /// Triangular shape: degree 0 at `a`, 1 at `b`, 0 at `c`.
    ///
    /// `a == b == c` yields a point mass with degree 1 only at `a`.
    pub fn triangle(a: f64, b: f64, c: f64) -> Result<Self, FuzzyError> {
        Self::from_points(vec![(a, 0.0), (b, 1.0), (c, 0.0)])
    }

    /// Trapezoidal shape: flat top of degree 1 between `b` and `c`.
    ///
    /// `b == c` degenerates to a triangle.
    pub fn trapezoid(a: f64, b: f64, c: f64, d: f64) -> Result<Self, FuzzyError> {
        Self::from_points(vec![(a, 0.0), (b, 1.0), (c, 1.0), (d, 0.0)])
    }

    /// Builds a shape from an arbitrary polyline of `(x, degree)` pairs.
    ///
    /// Fails if the x coordinates are not non-decreasing, any degree falls
    /// outside `[0, 1]`, or fewer than two breakpoints are given.
    pub fn from_points(points: Vec<(f64, f64)>) -> Result<Self, FuzzyError> {
        if points.len() < 2 {
            return Err(FuzzyError::TooFewBreakpoints);
        }
        for &(x, degree) in &points {
            if !(0.0..=1.0).contains(&degree) {
                return Err(FuzzyError::DegreeOutOfRange { x, degree });
            }
        }
        for pair in points.windows(2) {
            // `!(b >= a)` also rejects NaN coordinates.
            if !(pair[1].0 >= pair[0].0) {
                return Err(FuzzyError::NonMonotonicBreakpoints(
                    points.iter().map(|&(x, _)| x).collect(),
                ));
            }
        }
        Ok(Self { points })
    }

    /// The interval outside of which the degree is identically zero.
    pub fn support(&self) -> (f64, f64) {
        // Non-empty by construction.
        (self.points[0].0, self.points[self.points.len() - 1].0)
    }

    /// Degree of membership of a crisp value, always within `[0, 1]`.
    pub fn degree(&self, x: f64) -> f64 {
        let (lo, hi) = self.support();
        if x < lo || x > hi {
            return 0.0;
        }
        let mut best: f64 = 0.0;
        for &(px, pd) in &self.points {
            if x == px {
                best = best.max(pd);
            }
        }
        for pair in self.points.windows(2) {
            let (x0, d0) = pair[0];
            let (x1, d1) = pair[1];
            if x0 == x1 {
                continue;
            }
            if x0 <= x && x <= x1 {
                best = best.max(d0 + (x - x0) * (d1 - d0) / (x1 - x0));
            }
        }
        best
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(16.9, 0.0)]
    #[case(17.0, 0.0)]
    #[case(19.5, 0.5)]
    #[case(22.0, 1.0)]
    #[case(24.5, 0.5)]
    #[case(27.0, 0.0)]
    #[case(27.1, 0.0)]
    fn triangle_degrees(#[case] x: f64, #[case] expected: f64) {
        let mf = MembershipFunction::triangle(17.0, 22.0, 27.0).unwrap();
        assert_eq!(mf.degree(x), expected);
    }

    #[rstest]
    #[case(-0.1, 0.0)]
    #[case(0.0, 1.0)]
    #[case(5.0, 1.0)]
    #[case(10.0, 1.0)]
    #[case(14.0, 0.5)]
    #[case(18.0, 0.0)]
    #[case(40.0, 0.0)]
    fn trapezoid_degrees(#[case] x: f64, #[case] expected: f64) {
        let mf = MembershipFunction::trapezoid(0.0, 0.0, 10.0, 18.0).unwrap();
        assert_eq!(mf.degree(x), expected);
    }

    #[test]
    fn right_shoulder_trapezoid_saturates_at_the_boundary() {
        let mf = MembershipFunction::trapezoid(25.0, 30.0, 40.0, 40.0).unwrap();
        assert_eq!(mf.degree(30.0), 1.0);
        assert_eq!(mf.degree(40.0), 1.0);
        assert_eq!(mf.degree(40.1), 0.0);
    }

    #[test]
    fn point_mass_triangle() {
        let mf = MembershipFunction::triangle(0.0, 0.0, 0.0).unwrap();
        assert_eq!(mf.degree(0.0), 1.0);
        assert_eq!(mf.degree(0.001), 0.0);
        assert_eq!(mf.degree(-0.001), 0.0);
    }

    #[test]
    fn degenerate_trapezoid_equals_triangle() {
        let trap = MembershipFunction::trapezoid(0.0, 15.0, 15.0, 30.0).unwrap();
        let tri = MembershipFunction::triangle(0.0, 15.0, 30.0).unwrap();
        for i in 0..=60 {
            let x = i as f64 * 0.5;
            assert_eq!(trap.degree(x), tri.degree(x));
        }
    }

    #[test]
    fn rejects_decreasing_breakpoints() {
        let err = MembershipFunction::triangle(10.0, 5.0, 20.0).unwrap_err();
        assert!(matches!(err, FuzzyError::NonMonotonicBreakpoints(_)));
    }

    #[test]
    fn rejects_nan_breakpoints() {
        let err = MembershipFunction::triangle(0.0, f64::NAN, 1.0).unwrap_err();
        assert!(matches!(err, FuzzyError::NonMonotonicBreakpoints(_)));
    }

    #[test]
    fn rejects_out_of_range_degrees() {
        let err = MembershipFunction::from_points(vec![(0.0, 0.0), (1.0, 1.5)]).unwrap_err();
        assert!(matches!(err, FuzzyError::DegreeOutOfRange { .. }));
    }

    #[test]
    fn rejects_single_breakpoint() {
        let err = MembershipFunction::from_points(vec![(0.0, 1.0)]).unwrap_err();
        assert_eq!(err, FuzzyError::TooFewBreakpoints);
    }
}
