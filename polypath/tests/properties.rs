use polypath::{Anchor, Orientation, Path, Point, Rect, Shape};
use proptest::prelude::*;

#[derive(Clone, Debug)]
enum Op {
    Move { x: i16, y: i16 },
    Line { x: i16, y: i16 },
    Quad { cx: i16, cy: i16, x: i16, y: i16 },
    Cubic { c1x: i16, c1y: i16, c2x: i16, c2y: i16, x: i16, y: i16 },
}

fn coord(v: i16) -> f64 {
    v as f64 * 0.1
}

fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![
        1 => (any::<i16>(), any::<i16>()).prop_map(|(x, y)| Op::Move { x, y }),
        3 => (any::<i16>(), any::<i16>()).prop_map(|(x, y)| Op::Line { x, y }),
        2 => (any::<i16>(), any::<i16>(), any::<i16>(), any::<i16>())
            .prop_map(|(cx, cy, x, y)| Op::Quad { cx, cy, x, y }),
        2 => (any::<i16>(), any::<i16>(), any::<i16>(), any::<i16>(), any::<i16>(), any::<i16>())
            .prop_map(|(c1x, c1y, c2x, c2y, x, y)| Op::Cubic { c1x, c1y, c2x, c2y, x, y }),
    ]
}

fn build(start: (i16, i16), ops: &[Op], closed: bool) -> Path {
    let mut points = vec![Anchor::move_to(coord(start.0), coord(start.1))];
    for op in ops {
        match *op {
            Op::Move { x, y } => points.push(Anchor::move_to(coord(x), coord(y))),
            Op::Line { x, y } => points.push(Anchor::new(coord(x), coord(y))),
            Op::Quad { cx, cy, x, y } => {
                points.push(Anchor::new(coord(x), coord(y)).with_prev(coord(cx), coord(cy)))
            }
            Op::Cubic { c1x, c1y, c2x, c2y, x, y } => {
                if let Some(last) = points.last_mut() {
                    last.next = Some(Point::new(coord(c1x), coord(c1y)));
                }
                points.push(Anchor::new(coord(x), coord(y)).with_prev(coord(c2x), coord(c2y)));
            }
        }
    }
    Path::from_points(points, closed)
}

fn path_strategy() -> impl Strategy<Value = Path> {
    (
        (any::<i16>(), any::<i16>()),
        prop::collection::vec(op_strategy(), 0..12),
        any::<bool>(),
    )
        .prop_map(|(start, ops, closed)| build(start, &ops, closed))
}

fn near(a: Point, b: Point, eps: f64) -> bool {
    (a.x - b.x).abs() <= eps && (a.y - b.y).abs() <= eps
}

fn near_opt(a: Option<Point>, b: Option<Point>, eps: f64) -> bool {
    match (a, b) {
        (Some(a), Some(b)) => near(a, b, eps),
        (None, None) => true,
        _ => false,
    }
}

fn near_rect(a: Rect, b: Rect, eps: f64) -> bool {
    near(a.from, b.from, eps) && near(a.to, b.to, eps)
}

fn inside(r: &Rect, p: Point, slack: f64) -> bool {
    p.x >= r.from.x - slack && p.x <= r.to.x + slack && p.y >= r.from.y - slack && p.y <= r.to.y + slack
}

proptest! {
    #![proptest_config(ProptestConfig { cases: 512, .. ProptestConfig::default() })]

    #[test]
    fn svg_round_trip(path in path_strategy()) {
        let parsed = Path::from_svg(&path.to_svg()).unwrap();
        prop_assert_eq!(parsed.len(), path.len());
        prop_assert_eq!(parsed.closed, path.closed);
        for (a, b) in parsed.points().iter().zip(path.points()) {
            prop_assert!(near(a.pt, b.pt, 1e-3), "{:?} vs {:?}", a, b);
            prop_assert!(near_opt(a.prev, b.prev, 1e-3), "{:?} vs {:?}", a, b);
            prop_assert!(near_opt(a.next, b.next, 1e-3), "{:?} vs {:?}", a, b);
            prop_assert_eq!(a.move_to, b.move_to);
        }
    }

    #[test]
    fn bound_rect_contains_curves(path in path_strategy()) {
        let r = path.bound_rect().unwrap();
        for a in path.points() {
            prop_assert!(inside(&r, a.pt, 0.0), "anchor {:?} outside {:?}", a.pt, r);
        }
        for seg in path.segments() {
            for i in 0..=100 {
                let p = seg.eval(i as f64 / 100.0);
                prop_assert!(inside(&r, p, 1e-6), "{:?} outside {:?} on {:?}", p, r, seg);
            }
        }
    }

    #[test]
    fn mirror_is_an_involution(path in path_strategy(), vertical in any::<bool>()) {
        let o = if vertical { Orientation::Vertical } else { Orientation::Horizontal };
        let mut m = path.clone();
        m.mirror(o).mirror(o);
        for (a, b) in m.points().iter().zip(path.points()) {
            prop_assert!(near(a.pt, b.pt, 1e-6));
            prop_assert!(near_opt(a.prev, b.prev, 1e-6));
            prop_assert!(near_opt(a.next, b.next, 1e-6));
        }
    }

    #[test]
    fn fitting_twice_keeps_bounds(
        path in path_strategy(),
        (x1, y1, x2, y2) in (-1000i32..1000, -1000i32..1000, -1000i32..1000, -1000i32..1000),
    ) {
        let target = Rect::from_coords(x1 as f64, y1 as f64, x2 as f64, y2 as f64);
        let mut p = path;
        p.place_into_rect(&target);
        let first = p.bound_rect().unwrap();
        p.place_into_rect(&target);
        let second = p.bound_rect().unwrap();
        prop_assert!(near_rect(first, second, 1e-6), "{:?} vs {:?}", first, second);
    }

    #[test]
    fn fitting_lands_on_target(
        path in path_strategy(),
        (x1, y1, w, h) in (-1000i32..1000, -1000i32..1000, 1i32..500, 1i32..500),
    ) {
        let own = path.bound_rect().unwrap();
        prop_assume!(own.width() > 0.0 && own.height() > 0.0);
        let target = Rect::from_coords(x1 as f64, y1 as f64, (x1 + w) as f64, (y1 + h) as f64);
        let mut p = path;
        p.place_into_rect(&target);
        prop_assert!(near_rect(p.bound_rect().unwrap(), target, 1e-6));
    }
}
