use log::{debug, trace};
use nalgebra::{DMatrix, DVector};

use crate::{error::CurveError, point::Point};

/// Equations defining control points of a curve passing through given points.
///
/// For `n` points there are `n - 1` segments and `m = 2n - 2` unknown control points per axis.
/// Control point `2i` leaves point `i` and control point `2i + 1` arrives at point `i + 1`.
/// Both axes share the same `matrix` and differ only by the right hand side.
pub struct LinearSystem {
    matrix: DMatrix<f64>,
    rhs_x: DVector<f64>,
    rhs_y: DVector<f64>,
}

impl LinearSystem {
    /// Builds continuity equations for `points`.
    /// # Errors
    /// [CurveError::InvalidInput] when less than 2 points are given, any coordinate is not finite
    /// or coordinates are so large that the right hand side overflows.
    pub fn new(points: &[Point]) -> Result<Self, CurveError> {
        if points.len() < 2 {
            return Err(CurveError::InvalidInput(format!(
                "at least 2 points are required, got {}",
                points.len()
            )));
        }
        if let Some(index) = points.iter().position(|p| !p.is_finite()) {
            return Err(CurveError::InvalidInput(format!(
                "point {} has non-finite coordinates",
                index
            )));
        }

        let number_of_points = points.len();
        let size = 2 * number_of_points - 2;
        let mut matrix = DMatrix::<f64>::zeros(size, size);
        let mut rhs_x = DVector::<f64>::zeros(size);
        let mut rhs_y = DVector::<f64>::zeros(size);

        for row in 0..size {
            let equation = Equation::for_row(row, number_of_points);
            for (column, coefficient) in equation.coefficients() {
                matrix[(row, column)] = coefficient;
            }
            let rhs = equation.rhs(points);
            rhs_x[row] = rhs.get_x();
            rhs_y[row] = rhs.get_y();
        }

        if rhs_x.iter().chain(rhs_y.iter()).any(|v| !v.is_finite()) {
            return Err(CurveError::InvalidInput(
                "coordinates too large, right hand side overflows".to_string(),
            ));
        }

        debug!(
            "built {}x{} continuity system for {} points",
            size, size, number_of_points
        );
        trace!("matrix: {}", matrix);
        trace!("rhs x: {}", rhs_x);
        trace!("rhs y: {}", rhs_y);

        Ok(LinearSystem { matrix, rhs_x, rhs_y })
    }

    pub fn size(&self) -> usize {
        self.matrix.nrows()
    }

    pub fn get_matrix(&self) -> &DMatrix<f64> {
        &self.matrix
    }

    pub fn get_rhs_x(&self) -> &DVector<f64> {
        &self.rhs_x
    }

    pub fn get_rhs_y(&self) -> &DVector<f64> {
        &self.rhs_y
    }

    /// Solves the system for both axes with one LU decomposition and zips
    /// the results into control points.
    /// # Errors
    /// [CurveError::SingularSystem] when the matrix is not invertible,
    /// [CurveError::InvalidInput] when the solution overflows.
    pub fn solve(&self) -> Result<Vec<Point>, CurveError> {
        let lu = self.matrix.clone().lu();
        if !lu.is_invertible() {
            return Err(CurveError::SingularSystem);
        }

        let solution_x = lu.solve(&self.rhs_x).ok_or(CurveError::SingularSystem)?;
        let solution_y = lu.solve(&self.rhs_y).ok_or(CurveError::SingularSystem)?;
        trace!("solution x: {}", solution_x);
        trace!("solution y: {}", solution_y);

        let control_points: Vec<Point> = solution_x
            .iter()
            .zip(solution_y.iter())
            .map(|(x, y)| Point::new(*x, *y))
            .collect();

        if control_points.iter().any(|p| !p.is_finite()) {
            return Err(CurveError::InvalidInput(
                "coordinates too large, control points overflow".to_string(),
            ));
        }
        Ok(control_points)
    }
}

/// Computes `2n - 2` control points of the smooth curve through `n` ordered points.
/// # Example
/// ```
/// use bezier_spline::{solve, Point};
///
/// let points = vec![Point::new(0.0, 0.0), Point::new(3.0, 3.0)];
/// let control_points = solve(&points).unwrap();
///
/// assert_eq!(2, control_points.len());
/// ```
/// # Errors
/// [CurveError::InvalidInput] for less than 2 points or coordinates too large to solve,
/// [CurveError::SingularSystem] if equations can not be solved.
pub fn solve(points: &[Point]) -> Result<Vec<Point>, CurveError> {
    LinearSystem::new(points)?.solve()
}

/// Single row of the system. Interior points contribute two rows each,
/// end points one row each.
#[derive(Debug, PartialEq)]
enum Equation {
    /// Zero curvature at the first point: `2 c[0] - c[1] = p[0]`.
    Start,
    /// Control points around interior point `i` are mirrored through it:
    /// `c[2i - 1] + c[2i] = 2 p[i]`.
    Tangent(usize),
    /// Equal curvature on both sides of interior point `i`:
    /// `c[2i - 2] - 2 c[2i - 1] + 2 c[2i] - c[2i + 1] = 0`.
    Curvature(usize),
    /// Zero curvature at the last point `i = n - 1`: `-c[2i - 2] + 2 c[2i - 1] = p[i]`.
    End(usize),
}

impl Equation {
    fn for_row(row: usize, number_of_points: usize) -> Self {
        let last = number_of_points - 1;
        if row == 0 {
            Equation::Start
        } else if row == 2 * last - 1 {
            Equation::End(last)
        } else if row % 2 == 1 {
            Equation::Tangent((row + 1) / 2)
        } else {
            Equation::Curvature(row / 2)
        }
    }

    fn coefficients(&self) -> Vec<(usize, f64)> {
        match *self {
            Equation::Start => vec![(0, 2.0), (1, -1.0)],
            Equation::Tangent(i) => vec![(2 * i - 1, 1.0), (2 * i, 1.0)],
            Equation::Curvature(i) => vec![
                (2 * i - 2, 1.0),
                (2 * i - 1, -2.0),
                (2 * i, 2.0),
                (2 * i + 1, -1.0),
            ],
            Equation::End(i) => vec![(2 * i - 2, -1.0), (2 * i - 1, 2.0)],
        }
    }

    fn rhs(&self, points: &[Point]) -> Point {
        match *self {
            Equation::Start => points[0],
            Equation::Tangent(i) => points[i] * 2.0,
            Equation::Curvature(_) => Point::new(0.0, 0.0),
            Equation::End(i) => points[i],
        }
    }
}
