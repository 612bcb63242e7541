use crate::{
    bezier::CubicBezier,
    error::CurveError,
    point::Point,
    sampler::{sample, segment_at, segment_handles, HandleSegment, SampledCurve},
    solver::solve,
};

/// Number of samples per segment used by [BezierSpline::sample_default].
pub const DEFAULT_SAMPLES_PER_SEGMENT: usize = 100;

/// Margin commonly added around the curve and its control points when choosing area to draw.
pub const DEFAULT_VIEW_MARGIN: f64 = 10.0;

/// Smooth curve made of cubic Bezier segments passing through every given point.
/// Tangent and curvature are continuous at every interior point and curvature is zero at both ends.
pub struct BezierSpline {
    points: Vec<Point>,
    control_points: Vec<Point>,
}

impl BezierSpline {
    /// Solves control points for ordered `points`. Points are kept in the given order.
    /// # Errors
    /// [CurveError::InvalidInput] when less than 2 points are given or a coordinate is not finite
    /// or too large to solve,
    /// [CurveError::SingularSystem] when control points can not be determined.
    pub fn new(points: Vec<Point>) -> Result<Self, CurveError> {
        let control_points = solve(&points)?;
        Ok(BezierSpline { points, control_points })
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn control_points(&self) -> &[Point] {
        &self.control_points
    }

    pub fn number_of_segments(&self) -> usize {
        self.points.len() - 1
    }

    pub fn segment(&self, index: usize) -> Result<CubicBezier, CurveError> {
        if index < self.number_of_segments() {
            Ok(segment_at(&self.points, &self.control_points, index))
        } else {
            Err(CurveError::InvalidInput(format!(
                "segment {} does not exist, curve has {} segments",
                index,
                self.number_of_segments()
            )))
        }
    }

    pub fn segments(&self) -> impl Iterator<Item = CubicBezier> + '_ {
        (0..self.number_of_segments())
            .map(|i| segment_at(&self.points, &self.control_points, i))
    }

    /// Point of segment `index` at parameter `t`.
    pub fn evaluate(&self, index: usize, t: f64) -> Result<Point, CurveError> {
        Ok(self.segment(index)?.evaluate(t))
    }

    pub fn sample(
        &self,
        samples_per_segment: usize,
    ) -> Result<(SampledCurve, Vec<HandleSegment>), CurveError> {
        sample(&self.points, &self.control_points, samples_per_segment)
    }

    pub fn sample_default(&self) -> Result<(SampledCurve, Vec<HandleSegment>), CurveError> {
        self.sample(DEFAULT_SAMPLES_PER_SEGMENT)
    }

    pub fn handle_segments(&self) -> Vec<HandleSegment> {
        self.segments().flat_map(|s| segment_handles(&s)).collect()
    }
}

#[cfg(test)]
mod tests {
    use assert_approx_eq::assert_approx_eq;
    use rand::{rngs::StdRng, Rng, SeedableRng};

    use super::*;

    fn zigzag() -> Vec<Point> {
        vec![
            Point::new(0.0, 0.0),
            Point::new(1.0, 2.0),
            Point::new(2.0, -1.0),
            Point::new(4.0, 3.0),
            Point::new(5.0, 0.0),
        ]
    }

    #[test]
    fn passes_through_points() {
        let eps = 1e-9;
        let points = zigzag();
        let spline = BezierSpline::new(points.clone()).unwrap();

        assert_eq!(4, spline.number_of_segments());
        assert_eq!(8, spline.control_points().len());
        assert_eq!(&points[..], spline.points());

        for i in 0..4 {
            let start = spline.evaluate(i, 0.0).unwrap();
            let end = spline.evaluate(i, 1.0).unwrap();
            assert_approx_eq!(points[i].get_x(), start.get_x(), eps);
            assert_approx_eq!(points[i].get_y(), start.get_y(), eps);
            assert_approx_eq!(points[i + 1].get_x(), end.get_x(), eps);
            assert_approx_eq!(points[i + 1].get_y(), end.get_y(), eps);
        }
    }

    #[test]
    fn segments_iterator() {
        let spline = BezierSpline::new(zigzag()).unwrap();
        let segments: Vec<CubicBezier> = spline.segments().collect();

        assert_eq!(4, segments.len());
        for (i, segment) in segments.iter().enumerate() {
            assert_eq!(spline.segment(i).unwrap(), *segment);
            assert_eq!(spline.control_points()[2 * i], segment.get_first_control());
            assert_eq!(spline.control_points()[2 * i + 1], segment.get_second_control());
        }
        assert!(spline.segment(4).is_err());
        assert!(spline.evaluate(4, 0.5).is_err());
    }

    #[test]
    fn handles_match_sampler() {
        let spline = BezierSpline::new(zigzag()).unwrap();
        let (curve, handles) = spline.sample_default().unwrap();

        assert_eq!(4 * DEFAULT_SAMPLES_PER_SEGMENT, curve.len());
        assert_eq!(handles, spline.handle_segments());
        assert_eq!(12, handles.len());
    }

    #[test]
    fn samples_follow_scaling() {
        let eps = 1e-7;
        let mut rng = StdRng::seed_from_u64(42);
        let points: Vec<Point> = (0..6)
            .map(|_| Point::new(rng.gen_range(-10.0..10.0), rng.gen_range(-10.0..10.0)))
            .collect();
        let scale = -3.0;
        let offset = Point::new(7.0, -2.0);
        let moved: Vec<Point> = points.iter().map(|p| *p * scale + offset).collect();

        let (curve, _) = BezierSpline::new(points).unwrap().sample(20).unwrap();
        let (moved_curve, _) = BezierSpline::new(moved).unwrap().sample(20).unwrap();

        assert_eq!(curve.len(), moved_curve.len());
        for (original, moved) in curve.get_points().iter().zip(moved_curve.get_points()) {
            let expected = *original * scale + offset;
            assert_approx_eq!(expected.get_x(), moved.get_x(), eps);
            assert_approx_eq!(expected.get_y(), moved.get_y(), eps);
        }
    }

    #[test]
    fn invalid_input() {
        assert!(matches!(
            BezierSpline::new(vec![]),
            Err(CurveError::InvalidInput(_))
        ));
        assert!(matches!(
            BezierSpline::new(vec![Point::new(0.0, 0.0)]),
            Err(CurveError::InvalidInput(_))
        ));

        let spline = BezierSpline::new(zigzag()).unwrap();
        assert!(matches!(spline.sample(0), Err(CurveError::InvalidInput(_))));
    }
}
