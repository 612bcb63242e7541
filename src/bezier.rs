use crate::point::Point;

/// Single cubic Bezier segment. Curve starts at `start`, ends at `end` and is pulled
/// towards `first_control` and `second_control` in between.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CubicBezier {
    start: Point,
    first_control: Point,
    second_control: Point,
    end: Point,
}

impl CubicBezier {
    pub fn new(start: Point, first_control: Point, second_control: Point, end: Point) -> Self {
        CubicBezier { start, first_control, second_control, end }
    }

    pub fn get_start(&self) -> Point {
        self.start
    }

    pub fn get_first_control(&self) -> Point {
        self.first_control
    }

    pub fn get_second_control(&self) -> Point {
        self.second_control
    }

    pub fn get_end(&self) -> Point {
        self.end
    }

    /// Point of the curve at parameter `t`, computed with De Casteljau's cascade of linear
    /// interpolations. `t` is not clamped, values outside of `[0, 1]` extrapolate the segment.
    /// # Example
    /// ```
    /// use bezier_spline::{CubicBezier, Point};
    ///
    /// let segment = CubicBezier::new(
    ///     Point::new(0.0, 0.0),
    ///     Point::new(0.0, 1.0),
    ///     Point::new(1.0, 1.0),
    ///     Point::new(1.0, 0.0),
    /// );
    /// assert_eq!(Point::new(0.5, 0.75), segment.evaluate(0.5));
    /// ```
    pub fn evaluate(&self, t: f64) -> Point {
        let middle = self.first_control.lerp(&self.second_control, t);
        let left = self.start.lerp(&self.first_control, t).lerp(&middle, t);
        let right = middle.lerp(&self.second_control.lerp(&self.end, t), t);
        left.lerp(&right, t)
    }

    /// First derivative with respect to `t`.
    pub fn derivative(&self, t: f64) -> Point {
        let s = 1.0 - t;
        (self.first_control - self.start) * (3.0 * s * s)
            + (self.second_control - self.first_control) * (6.0 * s * t)
            + (self.end - self.second_control) * (3.0 * t * t)
    }

    /// Second derivative with respect to `t`.
    pub fn second_derivative(&self, t: f64) -> Point {
        let s = 1.0 - t;
        (self.second_control - self.first_control * 2.0 + self.start) * (6.0 * s)
            + (self.end - self.second_control * 2.0 + self.first_control) * (6.0 * t)
    }
}

#[cfg(test)]
mod tests {
    use assert_approx_eq::assert_approx_eq;
    use super::*;

    fn arch() -> CubicBezier {
        CubicBezier::new(
            Point::new(0.0, 0.0),
            Point::new(1.0, 3.0),
            Point::new(3.0, 3.0),
            Point::new(4.0, 0.0),
        )
    }

    #[test]
    fn evaluate_end_points() {
        let segment = arch();

        assert_eq!(segment.get_start(), segment.evaluate(0.0));
        assert_eq!(segment.get_end(), segment.evaluate(1.0));
    }

    #[test]
    fn evaluate_matches_bernstein_form() {
        let eps = 1e-12;
        let segment = arch();

        for t in [0.1, 0.25, 0.5, 0.8, 0.99, -0.3, 1.2] {
            let s = 1.0 - t;
            let expected = segment.get_start() * (s * s * s)
                + segment.get_first_control() * (3.0 * s * s * t)
                + segment.get_second_control() * (3.0 * s * t * t)
                + segment.get_end() * (t * t * t);
            let actual = segment.evaluate(t);

            assert_approx_eq!(expected.get_x(), actual.get_x(), eps);
            assert_approx_eq!(expected.get_y(), actual.get_y(), eps);
        }
    }

    #[test]
    fn derivative_at_end_points() {
        let eps = 1e-12;
        let segment = arch();

        let start_tangent = segment.derivative(0.0);
        assert_approx_eq!(3.0, start_tangent.get_x(), eps);
        assert_approx_eq!(9.0, start_tangent.get_y(), eps);

        let end_tangent = segment.derivative(1.0);
        assert_approx_eq!(3.0, end_tangent.get_x(), eps);
        assert_approx_eq!(-9.0, end_tangent.get_y(), eps);
    }

    #[test]
    fn derivatives_match_finite_differences() {
        let eps = 1e-4;
        let h = 1e-6;
        let segment = arch();

        for t in [0.2, 0.5, 0.7] {
            let forward = segment.evaluate(t + h);
            let backward = segment.evaluate(t - h);
            let numeric = (forward - backward) * (1.0 / (2.0 * h));
            let analytic = segment.derivative(t);
            assert_approx_eq!(numeric.get_x(), analytic.get_x(), eps);
            assert_approx_eq!(numeric.get_y(), analytic.get_y(), eps);

            let numeric_second =
                (segment.derivative(t + h) - segment.derivative(t - h)) * (1.0 / (2.0 * h));
            let analytic_second = segment.second_derivative(t);
            assert_approx_eq!(numeric_second.get_x(), analytic_second.get_x(), eps);
            assert_approx_eq!(numeric_second.get_y(), analytic_second.get_y(), eps);
        }
    }

    #[test]
    fn straight_line_has_no_curvature() {
        let eps = 1e-12;
        let segment = CubicBezier::new(
            Point::new(0.0, 0.0),
            Point::new(1.0, 1.0),
            Point::new(2.0, 2.0),
            Point::new(3.0, 3.0),
        );

        for t in [0.0, 0.3, 1.0] {
            let second = segment.second_derivative(t);
            assert_approx_eq!(0.0, second.get_x(), eps);
            assert_approx_eq!(0.0, second.get_y(), eps);
        }
    }
}
