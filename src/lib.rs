//! Smooth curve through ordered points on a plane, built from cubic Bezier segments.
//! Control points of the segments are solved so that tangent and curvature are continuous
//! at every point the curve passes through.
//!
//! # Example
//! ```
//! use bezier_spline::{BezierSpline, Point};
//! use assert_approx_eq::assert_approx_eq;
//!
//! let points = vec![
//!     Point::new(0.0, 0.0),
//!     Point::new(10.0, 0.0),
//!     Point::new(10.0, 10.0)
//! ];
//! let spline = BezierSpline::new(points).unwrap();
//!
//! let first_control = spline.control_points()[0];
//! assert_approx_eq!(25.0 / 6.0, first_control.get_x(), 1e-9);
//! assert_approx_eq!(-5.0 / 6.0, first_control.get_y(), 1e-9);
//!
//! let (curve, handles) = spline.sample(100).unwrap();
//! assert_eq!(200, curve.len());
//! assert_eq!(6, handles.len());
//! ```

mod bezier;
mod bounds;
mod error;
mod point;
mod sampler;
mod solver;
mod spline;

pub use bezier::CubicBezier;
pub use bounds::Bounds;
pub use error::CurveError;
pub use point::Point;
pub use sampler::{sample, HandleSegment, SampledCurve};
pub use solver::{solve, LinearSystem};
pub use spline::{BezierSpline, DEFAULT_SAMPLES_PER_SEGMENT, DEFAULT_VIEW_MARGIN};
