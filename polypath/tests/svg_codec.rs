use polypath::{Anchor, Path, PathError, Point, Rect, Shape};

fn anchor_at(p: &Path, i: usize) -> Point {
    p.points()[i].pt
}

#[test]
fn closed_triangle_parses() {
    let p = Path::from_svg("M0,0 L10,0 L10,10 Z").unwrap();
    assert_eq!(p.len(), 3);
    assert!(p.closed);
    assert_eq!(p.bound_rect(), Some(Rect::from_coords(0.0, 0.0, 10.0, 10.0)));
}

#[test]
fn cubic_serializes_with_fixed_precision() {
    let p = Path::from_points(
        vec![Anchor::new(0.0, 0.0).with_next(1.0, 1.0), Anchor::new(5.0, 5.0).with_prev(4.0, 4.0)],
        false,
    );
    assert_eq!(p.to_svg(), "M0.000,0.000 C1.000,1.000 4.000,4.000 5.000,5.000");
    assert_eq!(p.to_string(), p.to_svg());
}

#[test]
fn serializer_command_selection() {
    let p = Path::from_points(
        vec![
            Anchor::new(0.0, 0.0),
            Anchor::new(10.0, 0.0),
            Anchor::new(10.0, 10.0).with_prev(15.0, 5.0),
            Anchor::move_to(-1.5, 2.25),
            Anchor::new(-0.0, 3.0),
        ],
        true,
    );
    assert_eq!(
        p.to_svg(),
        "M0.000,0.000 L10.000,0.000 Q15.000,5.000 10.000,10.000 M-1.500,2.250 L0.000,3.000Z"
    );
}

#[test]
fn outgoing_control_alone_is_quadratic() {
    let p = Path::from_points(vec![Anchor::new(0.0, 0.0).with_next(2.0, 4.0), Anchor::new(4.0, 0.0)], false);
    assert_eq!(p.to_svg(), "M0.000,0.000 Q2.000,4.000 4.000,0.000");
}

#[test]
fn empty_path_serializes_to_empty_string() {
    let mut p = Path::new();
    p.closed = true;
    assert_eq!(p.to_svg(), "");
}

#[test]
fn relative_commands_follow_current_point() {
    let p = Path::from_svg("m10 10 l5 0 h5 v5 l-10 0 z").unwrap();
    let pts: Vec<Point> = p.points().iter().map(|a| a.pt).collect();
    assert_eq!(
        pts,
        vec![
            Point::new(10.0, 10.0),
            Point::new(15.0, 10.0),
            Point::new(20.0, 10.0),
            Point::new(20.0, 15.0),
            Point::new(10.0, 15.0),
        ]
    );
    assert!(p.closed);
    assert!(p.points()[0].move_to);
}

#[test]
fn absolute_h_and_v() {
    let p = Path::from_svg("M1,2 H7 V9 H1").unwrap();
    assert_eq!(anchor_at(&p, 1), Point::new(7.0, 2.0));
    assert_eq!(anchor_at(&p, 2), Point::new(7.0, 9.0));
    assert_eq!(anchor_at(&p, 3), Point::new(1.0, 9.0));
}

#[test]
fn implicit_repetition() {
    let p = Path::from_svg("M0 0 10 0 10 10 L 0 10 0 5").unwrap();
    assert_eq!(p.len(), 5);
    assert!(p.points()[0].move_to);
    assert!(p.points()[1..].iter().all(|a| !a.move_to));
    assert_eq!(anchor_at(&p, 4), Point::new(0.0, 5.0));
}

#[test]
fn relative_implicit_lineto_after_moveto() {
    let p = Path::from_svg("m1 1 2 2 3 3").unwrap();
    assert_eq!(anchor_at(&p, 1), Point::new(3.0, 3.0));
    assert_eq!(anchor_at(&p, 2), Point::new(6.0, 6.0));
}

#[test]
fn cubic_controls_are_attached_to_anchors() {
    let p = Path::from_svg("M0,0 C1,2 3,4 5,6").unwrap();
    let pts = p.points();
    assert_eq!(pts[0].next, Some(Point::new(1.0, 2.0)));
    assert_eq!(pts[1].prev, Some(Point::new(3.0, 4.0)));
    assert_eq!(pts[1].pt, Point::new(5.0, 6.0));
}

#[test]
fn relative_cubic_is_relative_to_segment_start() {
    let p = Path::from_svg("M10,10 c1,2 3,4 5,6").unwrap();
    let pts = p.points();
    assert_eq!(pts[0].next, Some(Point::new(11.0, 12.0)));
    assert_eq!(pts[1].prev, Some(Point::new(13.0, 14.0)));
    assert_eq!(pts[1].pt, Point::new(15.0, 16.0));
}

#[test]
fn smooth_cubic_reflects_previous_control() {
    let p = Path::from_svg("M0,0 C0,10 10,10 10,0 S20,-10 20,0").unwrap();
    let pts = p.points();
    // (10,10) reflected through (10,0)
    assert_eq!(pts[1].next, Some(Point::new(10.0, -10.0)));
    assert_eq!(pts[2].prev, Some(Point::new(20.0, -10.0)));
}

#[test]
fn repeated_smooth_cubic_reflects_its_own_predecessor() {
    let p = Path::from_svg("M0,0 S5,5 10,0 15,-5 20,0").unwrap();
    let pts = p.points();
    // First S follows a moveto: synthetic control is the current point.
    assert_eq!(pts[0].next, Some(Point::new(0.0, 0.0)));
    // Second group reflects (5,5) through (10,0).
    assert_eq!(pts[1].next, Some(Point::new(15.0, -5.0)));
}

#[test]
fn smooth_cubic_after_line_uses_current_point() {
    let p = Path::from_svg("M0,0 L4,0 s2,2 4,0").unwrap();
    let pts = p.points();
    assert_eq!(pts[1].next, Some(Point::new(4.0, 0.0)));
    assert_eq!(pts[2].prev, Some(Point::new(6.0, 2.0)));
    assert_eq!(pts[2].pt, Point::new(8.0, 0.0));
}

#[test]
fn quadratic_and_smooth_quadratic() {
    let p = Path::from_svg("M0,0 Q5,10 10,0 T20,0 t10,0").unwrap();
    let pts = p.points();
    assert_eq!(pts[1].prev, Some(Point::new(5.0, 10.0)));
    assert_eq!(pts[2].prev, Some(Point::new(15.0, -10.0)));
    assert_eq!(pts[3].prev, Some(Point::new(25.0, 10.0)));
    assert_eq!(pts[3].pt, Point::new(30.0, 0.0));
    assert!(pts.iter().all(|a| a.next.is_none()));
}

#[test]
fn smooth_quadratic_without_predecessor_is_degenerate_line() {
    let p = Path::from_svg("T10,10").unwrap();
    assert_eq!(p.len(), 2);
    assert_eq!(p.points()[1].prev, Some(Point::ORIGIN));
}

#[test]
fn smooth_cubic_after_quadratic_does_not_reflect() {
    let p = Path::from_svg("M0,0 Q5,5 10,0 S15,5 20,0").unwrap();
    assert_eq!(p.points()[1].next, Some(Point::new(10.0, 0.0)));
}

#[test]
fn close_resets_to_subpath_start() {
    let p = Path::from_svg("M5,5 L10,5 Z m1,1 l1,0").unwrap();
    let pts = p.points();
    assert_eq!(pts[2].pt, Point::new(6.0, 6.0));
    assert!(pts[2].move_to);
    assert_eq!(pts[3].pt, Point::new(7.0, 6.0));
}

#[test]
fn every_moveto_starts_a_subpath() {
    let p = Path::from_svg("M0,0 L1,0 M5,5 L6,5 z l1,1").unwrap();
    let pts = p.points();
    // after z the current point is the second subpath's start
    assert_eq!(pts[4].pt, Point::new(5.0, 5.0));
    assert_eq!(pts[5].pt, Point::new(6.0, 6.0));
    assert_eq!(p.subpath_count(), 3);
}

#[test]
fn arcs_are_skipped_but_move_the_current_point() {
    let p = Path::from_svg("M0,0 L10,0 A5,5 0 0,1 20,0 l5,0").unwrap();
    assert_eq!(p.len(), 3);
    assert_eq!(anchor_at(&p, 2), Point::new(25.0, 0.0));

    let compact = Path::from_svg("M0 0a5 5 0 115 5l1 1").unwrap();
    assert_eq!(compact.len(), 2);
    assert_eq!(anchor_at(&compact, 1), Point::new(6.0, 6.0));
}

#[test]
fn compact_number_forms() {
    let p = Path::from_svg("M.5-.5L1e1,2E-1-3.5.25").unwrap();
    let pts: Vec<Point> = p.points().iter().map(|a| a.pt).collect();
    assert_eq!(pts, vec![Point::new(0.5, -0.5), Point::new(10.0, 0.2), Point::new(-3.5, 0.25)]);
}

#[test]
fn malformed_numbers_are_syntax_errors() {
    for d in ["M0,0 L1,x", "M0,0 L1", "M0,0 L1,2,3", "M0,0 L", "10,10", "M0,0 Lz", "M0,0 B1,1", "M1e999,0"] {
        let err = Path::from_svg(d).unwrap_err();
        assert!(matches!(err, PathError::InvalidPathSyntax { .. }), "{} -> {:?}", d, err);
        assert_eq!(err.code(), "invalid_syntax");
    }
}

#[test]
fn failed_set_svg_leaves_path_unchanged() {
    let mut p = Path::from_svg("M0,0 L1,1").unwrap();
    let before = p.clone();
    assert!(p.set_svg("M0,0 L2,nope").is_err());
    assert_eq!(p, before);

    p.set_svg("M3,3 L4,4 Z").unwrap();
    assert_eq!(p.len(), 2);
    assert!(p.closed);
}

#[test]
fn set_svg_replaces_closed_flag() {
    let mut p: Path = "M0,0 L1,0 L1,1 Z".parse().unwrap();
    assert!(p.closed);
    p.set_svg("M0,0 L1,0").unwrap();
    assert!(!p.closed);
}

#[test]
fn parses_serialized_output_back() {
    let src = "M0,0 C0,5 5,10 10,10 Q15,10 15,5 L15,0 M20,20 L30,30Z";
    let p = Path::from_svg(src).unwrap();
    let again = Path::from_svg(&p.to_svg()).unwrap();
    assert_eq!(p, again);
}
