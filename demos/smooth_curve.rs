extern crate bezier_spline;

use bezier_spline::{BezierSpline, Point, DEFAULT_VIEW_MARGIN};

fn main() {

    let points = vec![
        Point::new(0.0, 0.0),
        Point::new(10.0, 0.0),
        Point::new(10.0, 10.0),
        Point::new(25.0, 15.0),
        Point::new(30.0, 0.0),
    ];

    let spline = BezierSpline::new(points).unwrap();
    let (curve, handles) = spline.sample(20).unwrap();

    println!("x;y");
    for p in curve.get_points() {
        println!("{:.2};{:.2}", p.get_x(), p.get_y());
    }

    println!();
    println!("x0;y0;x1;y1");
    for h in &handles {
        println!(
            "{:.2};{:.2};{:.2};{:.2}",
            h.get_start().get_x(),
            h.get_start().get_y(),
            h.get_end().get_x(),
            h.get_end().get_y()
        );
    }

    if let Some(bounds) = curve.view_bounds(spline.control_points(), DEFAULT_VIEW_MARGIN) {
        println!();
        println!(
            "view: ({:.2}, {:.2}) - ({:.2}, {:.2})",
            bounds.get_min().get_x(),
            bounds.get_min().get_y(),
            bounds.get_max().get_x(),
            bounds.get_max().get_y()
        );
    }
}
