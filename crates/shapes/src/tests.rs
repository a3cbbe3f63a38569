//! Cross-module properties: distance, line caching, shape invariants.

use super::*;
use proptest::prelude::*;
use rand::{rngs::StdRng, Rng, SeedableRng};

fn coord() -> impl Strategy<Value = f64> {
    -1.0e3..1.0e3
}

fn point() -> impl Strategy<Value = Point> {
    (coord(), coord()).prop_map(|(x, y)| Point::new(x, y))
}

proptest! {
    #[test]
    fn distance_is_symmetric(p in point(), q in point()) {
        prop_assert_eq!(p.distance_to(&q), q.distance_to(&p));
        prop_assert!(p.distance_to(&q) >= 0.0);
        prop_assert_eq!(p.distance_to(&p), 0.0);
    }

    #[test]
    fn line_setters_keep_length_fresh(a in point(), b in point(), c in point(), d in point()) {
        let mut line = Line::new(a, b);
        prop_assert_eq!(line.length(), a.distance_to(&b));
        line.set_start(c);
        prop_assert_eq!(line.length(), c.distance_to(&b));
        line.set_end(d);
        prop_assert_eq!(line.length(), c.distance_to(&d));
    }

    #[test]
    fn rectangle_area_and_perimeter(bl in point(), w in 0.1f64..100.0, h in 0.1f64..100.0) {
        let r = Rectangle::new(bl, bl.offset(w, h));
        let area = r.area().unwrap();
        prop_assert!((area - r.width() * r.height()).abs() <= 1e-9 * area.abs().max(1.0));
        let expected = 2.0 * (r.width() + r.height());
        prop_assert!((r.perimeter() - expected).abs() < 1e-6);
        for a in r.inner_angles() {
            prop_assert!((a - 90.0).abs() < 1e-6);
        }
    }

    #[test]
    fn square_sides_agree(bl in point(), side in 0.1f64..100.0) {
        let s = Square::new(bl, side);
        let r = s.as_rectangle();
        prop_assert!((r.width() - side).abs() < 1e-9);
        prop_assert!((r.height() - side).abs() < 1e-9);
        prop_assert!((s.area().unwrap() - side * side).abs() < 1e-6);
    }

    #[test]
    fn triangle_perimeter_is_edge_sum(a in point(), b in point(), c in point()) {
        let t = Triangle::new(a, b, c);
        let [x, y, z] = t.edge_lengths();
        prop_assert_eq!(t.perimeter(), x + y + z);
        prop_assert_eq!(t.edges().len(), 3);
        let clamped = Triangle::with_cfg(a, b, c, ShapeCfg::clamped());
        prop_assert!(clamped.area().unwrap() >= 0.0);
    }
}

#[test]
fn shapes_snapshot_points_by_value() {
    let mut bl = Point::new(0.0, 0.0);
    let r = Rectangle::new(bl, Point::new(4.0, 3.0));
    bl.set_x(-10.0);
    assert_eq!(r.bottom_left(), Point::new(0.0, 0.0));
    assert_eq!(r.area().unwrap(), 12.0);
}

#[test]
fn random_convex_ring_angles_sum_seeded() {
    // Regular n-gon samples on a circle: convex, so interior angles sum to (n-2)·180.
    let mut rng = StdRng::seed_from_u64(7);
    for _ in 0..20 {
        let n: usize = rng.gen_range(3..12);
        let r: f64 = rng.gen_range(0.5..10.0);
        let phase: f64 = rng.gen_range(0.0..std::f64::consts::TAU);
        let verts: Vec<Point> = (0..n)
            .map(|k| {
                let th = phase + std::f64::consts::TAU * (k as f64) / (n as f64);
                Point::new(r * th.cos(), r * th.sin())
            })
            .collect();
        let poly = Polygon::from_vertices(verts);
        let sum: f64 = poly.inner_angles().iter().sum();
        assert!((sum - (n as f64 - 2.0) * 180.0).abs() < 1e-6);
        let expected = 180.0 * (n as f64 - 2.0) / n as f64;
        for a in poly.inner_angles() {
            assert!((a - expected).abs() < 1e-6);
        }
    }
}

#[test]
fn classification_is_all_or_nothing() {
    let verts = [
        Point::new(0.0, 0.0),
        Point::new(4.0, 0.0),
        Point::new(0.0, 3.0),
    ];
    let cfg = ShapeCfg::default();
    for kind in TriangleKind::ALL {
        let res = Triangle::classified(kind, verts, cfg);
        let holds = kind.holds([4.0, 5.0, 3.0], &cfg);
        assert_eq!(res.is_ok(), holds, "{kind}");
        if let Ok(t) = res {
            assert_eq!(t.kind(), kind);
            assert_eq!(t.area().unwrap(), 6.0);
        }
    }
}
