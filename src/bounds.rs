use crate::point::Point;

/// Axis aligned rectangle given by its lower left and upper right corner.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    min: Point,
    max: Point,
}

impl Bounds {
    /// Smallest rectangle containing all `points`, `None` when there are no points.
    /// # Example
    /// ```
    /// use bezier_spline::{Bounds, Point};
    ///
    /// let points = vec![Point::new(1.0, 5.0), Point::new(-2.0, 3.0), Point::new(4.0, 0.0)];
    /// let bounds = Bounds::enclosing(&points).unwrap();
    ///
    /// assert_eq!(Point::new(-2.0, 0.0), bounds.get_min());
    /// assert_eq!(Point::new(4.0, 5.0), bounds.get_max());
    /// ```
    pub fn enclosing<'a, I>(points: I) -> Option<Self>
    where
        I: IntoIterator<Item = &'a Point>,
    {
        let mut iter = points.into_iter();
        let first = *iter.next()?;

        Some(iter.fold(Bounds { min: first, max: first }, |bounds, p| Bounds {
            min: Point::new(bounds.min.get_x().min(p.get_x()), bounds.min.get_y().min(p.get_y())),
            max: Point::new(bounds.max.get_x().max(p.get_x()), bounds.max.get_y().max(p.get_y())),
        }))
    }

    /// Rectangle grown by `margin` in every direction.
    pub fn with_margin(&self, margin: f64) -> Self {
        let offset = Point::new(margin, margin);
        Bounds { min: self.min - offset, max: self.max + offset }
    }

    pub fn get_min(&self) -> Point {
        self.min
    }

    pub fn get_max(&self) -> Point {
        self.max
    }

    pub fn width(&self) -> f64 {
        self.max.get_x() - self.min.get_x()
    }

    pub fn height(&self) -> f64 {
        self.max.get_y() - self.min.get_y()
    }
}
