use log::debug;

use crate::{bezier::CubicBezier, bounds::Bounds, error::CurveError, point::Point};

/// Polyline approximating the whole curve. Samples of consecutive segments are concatenated,
/// each segment contributes values for `t = k / samples_per_segment`, `k = 0..samples_per_segment`.
/// `t = 1` is left out, the next segment starts at the same point.
#[derive(Debug, Clone, PartialEq)]
pub struct SampledCurve {
    points: Vec<Point>,
    samples_per_segment: usize,
}

impl SampledCurve {
    pub fn get_points(&self) -> &[Point] {
        &self.points
    }

    pub fn into_points(self) -> Vec<Point> {
        self.points
    }

    pub fn get_samples_per_segment(&self) -> usize {
        self.samples_per_segment
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Samples of segment `segment_index`, empty slice for index past the last segment.
    pub fn segment_samples(&self, segment_index: usize) -> &[Point] {
        let start = segment_index
            .saturating_mul(self.samples_per_segment)
            .min(self.points.len());
        let end = start
            .saturating_add(self.samples_per_segment)
            .min(self.points.len());
        &self.points[start..end]
    }

    /// Area needed to show the curve together with its `control_points`, grown by `margin` on every side.
    pub fn view_bounds(&self, control_points: &[Point], margin: f64) -> Option<Bounds> {
        Bounds::enclosing(self.points.iter().chain(control_points.iter()))
            .map(|bounds| bounds.with_margin(margin))
    }
}

/// Straight line between a curve point and a control point, or between two control points
/// of one segment. Used to draw tangent handles.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HandleSegment {
    start: Point,
    end: Point,
}

impl HandleSegment {
    pub fn new(start: Point, end: Point) -> Self {
        HandleSegment { start, end }
    }

    pub fn get_start(&self) -> Point {
        self.start
    }

    pub fn get_end(&self) -> Point {
        self.end
    }
}

impl From<HandleSegment> for [(f64, f64); 2] {
    fn from(value: HandleSegment) -> Self {
        [value.start.into(), value.end.into()]
    }
}

/// Builds segment `i` from `points[i]`, `control_points[2i]`, `control_points[2i + 1]` and `points[i + 1]`.
/// Caller guarantees lengths are consistent.
pub(crate) fn segment_at(points: &[Point], control_points: &[Point], index: usize) -> CubicBezier {
    CubicBezier::new(
        points[index],
        control_points[2 * index],
        control_points[2 * index + 1],
        points[index + 1],
    )
}

/// Handle lines of one segment: start to first control, first to second control,
/// second control to end.
pub(crate) fn segment_handles(segment: &CubicBezier) -> [HandleSegment; 3] {
    [
        HandleSegment::new(segment.get_start(), segment.get_first_control()),
        HandleSegment::new(segment.get_first_control(), segment.get_second_control()),
        HandleSegment::new(segment.get_second_control(), segment.get_end()),
    ]
}

/// Evaluates every segment at `samples_per_segment` evenly spaced parameters and collects
/// handle lines, three per segment: point to first control, first to second control, second control to next point.
/// # Example
/// ```
/// use bezier_spline::{sample, solve, Point};
///
/// let points = vec![Point::new(0.0, 0.0), Point::new(10.0, 0.0), Point::new(10.0, 10.0)];
/// let control_points = solve(&points).unwrap();
/// let (curve, handles) = sample(&points, &control_points, 100).unwrap();
///
/// assert_eq!(200, curve.len());
/// assert_eq!(6, handles.len());
/// ```
/// # Errors
/// [CurveError::InvalidInput] when `samples_per_segment` is 0, less than 2 points are given
/// or number of control points is not `2 * points.len() - 2`.
pub fn sample(
    points: &[Point],
    control_points: &[Point],
    samples_per_segment: usize,
) -> Result<(SampledCurve, Vec<HandleSegment>), CurveError> {
    if samples_per_segment == 0 {
        return Err(CurveError::InvalidInput(
            "number of samples per segment must be positive".to_string(),
        ));
    }
    if points.len() < 2 {
        return Err(CurveError::InvalidInput(format!(
            "at least 2 points are required, got {}",
            points.len()
        )));
    }
    let expected_control_points = 2 * points.len() - 2;
    if control_points.len() != expected_control_points {
        return Err(CurveError::InvalidInput(format!(
            "expected {} control points, got {}",
            expected_control_points,
            control_points.len()
        )));
    }

    let number_of_segments = points.len() - 1;
    debug!(
        "sampling {} segments with {} samples each",
        number_of_segments, samples_per_segment
    );

    let mut samples = Vec::with_capacity(number_of_segments * samples_per_segment);
    let mut handles = Vec::with_capacity(3 * number_of_segments);

    for i in 0..number_of_segments {
        let segment = segment_at(points, control_points, i);

        for k in 0..samples_per_segment {
            let t = k as f64 / samples_per_segment as f64;
            samples.push(segment.evaluate(t));
        }

        handles.extend(segment_handles(&segment));
    }

    let curve = SampledCurve {
        points: samples,
        samples_per_segment,
    };
    Ok((curve, handles))
}
