use fractal_curves::{
    controller::Controller,
    fractal::{koch_points, koch_segments, sierpinski_triangles, Curve, FractalKind},
    geometry::{point, Point, Triangle},
    layout,
    render::{self, Canvas, Color, Style},
};

/// Collects every point handed to the canvas and counts paint calls.
#[derive(Default)]
struct Recorder {
    points: Vec<Point>,
    fills: usize,
    strokes: usize,
}

impl Canvas for Recorder {
    fn begin_path(&mut self) {
        self.points.clear();
    }
    fn move_to(&mut self, p: Point) {
        self.points.push(p);
    }
    fn line_to(&mut self, p: Point) {
        self.points.push(p);
    }
    fn close_path(&mut self) {}
    fn fill(&mut self, _color: Color) {
        self.fills += 1;
    }
    fn stroke(&mut self, _color: Color, _width: f32) {
        self.strokes += 1;
    }
}

#[test]
fn koch_depth_zero_on_the_base_triangle() {
    let vertices = [point(0.0, -100.0), point(-86.6, 50.0), point(86.6, 50.0)];
    let segments: Vec<_> = (0..3)
        .flat_map(|i| koch_segments(vertices[i], vertices[(i + 1) % 3], 0))
        .collect();
    assert_eq!(segments.len(), 3);
    for (i, segment) in segments.iter().enumerate() {
        assert_eq!(segment.start, vertices[i]);
        assert_eq!(segment.end, vertices[(i + 1) % 3]);
    }
}

#[test]
fn koch_depth_one_on_a_horizontal_segment() {
    let points = koch_points(point(0.0, 0.0), point(300.0, 0.0), 1);
    let expected = [(0.0, 0.0), (100.0, 0.0), (150.0, -86.6), (200.0, 0.0), (300.0, 0.0)];
    assert_eq!(points.len(), 5);
    for (got, want) in points.iter().zip(expected) {
        assert!(got.approx_eq(want.into(), 0.01), "{:?} != {:?}", got, want);
    }
}

#[test]
fn sierpinski_depth_two() {
    let (a, b, c) = (point(10.0, 10.0), point(250.0, 40.0), point(90.0, 300.0));
    let original = Triangle::new(a, b, c).side_lengths();
    let triangles: Vec<_> = sierpinski_triangles(a, b, c, 2).collect();
    assert_eq!(triangles.len(), 9);
    for triangle in triangles {
        for (side, full) in triangle.side_lengths().iter().zip(original) {
            assert!((side - full / 4.0).abs() < 1e-9);
        }
    }
}

#[test]
fn decrement_below_zero_is_a_no_op() {
    let mut controller = Controller::default();
    controller.decrease();
    controller.decrease();
    assert_eq!(controller.state().depth, 0);

    let base = layout::fit(0.0, 0.0, 640.0, 480.0);
    let mut canvas = Recorder::default();
    render::draw(controller.state(), &base, &mut canvas, &Style::default());
    assert_eq!(canvas.points, base.vertices().to_vec());
}

#[test]
fn fill_toggle_keeps_the_points() {
    let base = layout::fit(0.0, 0.0, 800.0, 800.0);
    let mut controller = Controller::default();
    controller.increase();
    controller.increase();
    for kind in FractalKind::ALL {
        controller.set_kind(kind);

        let mut plain = Recorder::default();
        render::draw(controller.state(), &base, &mut plain, &Style::default());
        controller.toggle_fill();
        let mut filled = Recorder::default();
        render::draw(controller.state(), &base, &mut filled, &Style::default());
        controller.toggle_fill();

        assert_eq!(plain.points, filled.points);
        assert_eq!((plain.fills, filled.fills), (0, 1));
        assert_eq!((plain.strokes, filled.strokes), (1, 1));
    }
}

#[test]
fn generation_is_repeatable() {
    let base = layout::fit(0.0, 0.0, 500.0, 500.0);
    for kind in FractalKind::ALL {
        for depth in 0..=4 {
            assert_eq!(
                Curve::generate(kind, &base, depth),
                Curve::generate(kind, &base, depth)
            );
        }
    }
}

#[test]
fn snowflake_stays_inside_the_circumcircle() {
    let base = layout::fit(0.0, 0.0, 600.0, 600.0);
    let center = base.centroid();
    let radius = base.vertices()[0].distance(center);
    let curve = Curve::generate(FractalKind::Koch, &base, 5);
    assert_eq!(curve.edge_count(), 3 * 4usize.pow(5));
    assert!(curve.points().all(|p| p.distance(center) <= radius + 1e-6));
}
