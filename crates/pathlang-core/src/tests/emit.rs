use crate::geom::point;
use crate::*;

fn close(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

fn segments(text: &str) -> Vec<Segment> {
    let g = parse(text).unwrap();
    g.figures.into_iter().flat_map(|f| f.segments).collect()
}

#[test]
fn relative_coordinates_resolve_against_the_current_point() {
    assert_eq!(
        segments("M 10,10 l 5,5"),
        vec![Segment::Line {
            to: point(15.0, 15.0)
        }]
    );
    assert_eq!(
        segments("M 10,10 h 5 v -5 H 0 V 0"),
        vec![
            Segment::Line {
                to: point(15.0, 10.0)
            },
            Segment::Line {
                to: point(15.0, 5.0)
            },
            Segment::Line {
                to: point(0.0, 5.0)
            },
            Segment::Line {
                to: point(0.0, 0.0)
            },
        ]
    );
}

#[test]
fn compacted_relative_tuples_chain() {
    assert_eq!(
        segments("m 1 1 1 1 1 1"),
        vec![
            Segment::Line {
                to: point(2.0, 2.0)
            },
            Segment::Line {
                to: point(3.0, 3.0)
            },
        ]
    );
}

#[test]
fn smooth_quadratic_mirrors_the_previous_control() {
    let segs = segments("M 0,0 Q 10,0 10,10 T 20,20");
    assert_eq!(
        segs[1],
        Segment::Quadratic {
            control: point(10.0, 20.0),
            to: point(20.0, 20.0)
        }
    );
}

#[test]
fn smooth_quadratic_without_a_quadratic_predecessor_uses_the_current_point() {
    let segs = segments("M 0,0 L 5,5 T 10,10");
    assert_eq!(
        segs[1],
        Segment::Quadratic {
            control: point(5.0, 5.0),
            to: point(10.0, 10.0)
        }
    );

    // A cubic control point is not compatible with a smooth quadratic.
    let segs = segments("M 0,0 C 0,5 5,10 10,10 T 20,20");
    assert_eq!(
        segs[1],
        Segment::Quadratic {
            control: point(10.0, 10.0),
            to: point(20.0, 20.0)
        }
    );
}

#[test]
fn smooth_quadratics_chain_their_reflections() {
    let segs = segments("M 0,0 Q 5,-5 10,0 T 20,0 T 30,0");
    assert_eq!(
        segs[1],
        Segment::Quadratic {
            control: point(15.0, 5.0),
            to: point(20.0, 0.0)
        }
    );
    assert_eq!(
        segs[2],
        Segment::Quadratic {
            control: point(25.0, -5.0),
            to: point(30.0, 0.0)
        }
    );
}

#[test]
fn smooth_cubic_mirrors_the_second_control() {
    let segs = segments("M 0,0 C 0,10 10,10 10,0 s 10,-10 10,0");
    assert_eq!(
        segs[1],
        Segment::Cubic {
            control1: point(10.0, -10.0),
            control2: point(20.0, -10.0),
            to: point(20.0, 0.0)
        }
    );

    let segs = segments("M 0,0 L 5,5 S 10,10 15,5");
    assert_eq!(
        segs[1],
        Segment::Cubic {
            control1: point(5.0, 5.0),
            control2: point(10.0, 10.0),
            to: point(15.0, 5.0)
        }
    );
}

#[test]
fn arcs_keep_endpoint_parameters() {
    let segs = segments("M 0 0 a 5 5 0 1 1 10 0");
    let Segment::Arc(arc) = segs[0] else {
        panic!("expected arc, got {:?}", segs[0]);
    };
    assert_eq!(arc.from, point(0.0, 0.0));
    assert_eq!(arc.to, point(10.0, 0.0));
    assert!(arc.large_arc);
    assert!(arc.sweep_clockwise);

    // Zero radius degenerates to a straight line.
    assert_eq!(
        segments("M 0 0 A 0 5 0 0 0 10 0"),
        vec![Segment::Line {
            to: point(10.0, 0.0)
        }]
    );
}

#[test]
fn arcs_ending_where_they_start_become_lines() {
    let g = parse("M 5 5 A 3 3 0 0 1 5 5 L 6 6").unwrap();
    assert_eq!(g.segment_count(), 2);
    assert_eq!(
        g.figures[0].segments,
        vec![
            Segment::Line {
                to: point(5.0, 5.0)
            },
            Segment::Line {
                to: point(6.0, 6.0)
            },
        ]
    );
}

#[test]
fn close_path_marks_figures_and_keeps_the_current_point() {
    let err = parse("M 0 0 L 10 0 Z l 0 0").unwrap_err();
    assert!(matches!(err, Error::Validation { .. }));

    let g = parse("M 0 0 L 10 0 Z m 5 5 l 1 1").unwrap();
    assert_eq!(g.figures.len(), 2);
    assert!(g.figures[0].closed);
    assert!(!g.figures[1].closed);
    assert_eq!(g.figures[1].start, point(15.0, 5.0));
}

#[test]
fn polygon_vertices_lie_on_the_circumcircle() {
    let g = parse("P 6 10 0 0").unwrap();
    assert_eq!(g.figures.len(), 1);
    let figure = &g.figures[0];
    assert!(figure.closed);
    let vertices: Vec<_> = figure.vertices().collect();
    assert_eq!(vertices.len(), 6);
    for v in vertices {
        assert!(close(v.to_vector().length(), 10.0), "{v:?}");
    }
}

#[test]
fn polygons_need_three_sides() {
    let g = parse("P 2 10 0 0").unwrap();
    assert!(g.is_empty());
}

#[test]
fn figures_move_the_current_point_to_their_anchor() {
    let g = parse("O 5 5 10 10 m 1 1 l 1 0").unwrap();
    assert_eq!(g.figures.len(), 2);
    assert_eq!(g.figures[0].start, point(15.0, 10.0));
    assert_eq!(g.figures[1].start, point(11.0, 11.0));

    let g = parse("R 10 20 5 5 r 1 1 2 2").unwrap();
    assert_eq!(g.figures[1].start, point(11.0, 21.0));
    assert_eq!(g.figures[1].segments[1].end(), point(13.0, 23.0));
}

#[test]
fn rounded_rectangles_clamp_their_radii() {
    let g = parse("U 0 0 10 10 20 20").unwrap();
    let figure = &g.figures[0];
    assert_eq!(figure.start, point(5.0, 0.0));
    assert_eq!(figure.segments.len(), 4);
    for segment in &figure.segments {
        let Segment::Arc(arc) = segment else {
            panic!("expected arc, got {segment:?}");
        };
        assert_eq!((arc.radius_x, arc.radius_y), (5.0, 5.0));
    }
}

#[test]
fn fill_rule_reaches_the_geometry() {
    assert_eq!(parse("F0 M 0 0 L 1 1").unwrap().fill_rule, FillRule::EvenOdd);
    assert_eq!(parse("M 0 0 L 1 1").unwrap().fill_rule, FillRule::Nonzero);
}

#[test]
fn emission_is_deterministic() {
    let text = "F1 M 0,0 Q 10,0 10,10 T 20,20 C 1 2 3 4 5 6 S 7 8 9 10 A 4 4 30 0 1 0 0 Z P 5 3 1 1";
    let a = PathDocument::parse(text).unwrap();
    let b = PathDocument::parse(text).unwrap();
    assert_eq!(a.emit(), b.emit());
}

#[test]
fn trace_is_only_produced_on_request() {
    let doc = PathDocument::parse("M 0 0 L 1 1 Z").unwrap();
    assert!(doc.emit_with_options(EmitOptions::default()).trace.is_none());
    let out = doc.emit_with_options(EmitOptions::default().with_trace(true));
    assert_eq!(
        out.trace.as_deref(),
        Some("set_fill_rule(nonzero)\nbegin_figure(0, 0)\nadd_line(1, 1)\nend_figure(closed)\n")
    );
    assert_eq!(out.geometry, doc.emit());
}

#[test]
fn geometry_serializes_tagged_segments() {
    let g = parse("M 0 0 L 1 1").unwrap();
    let value = serde_json::to_value(&g).unwrap();
    assert_eq!(
        value,
        serde_json::json!({
            "fillRule": "nonzero",
            "figures": [{
                "start": [0.0, 0.0],
                "segments": [{"type": "line", "to": [1.0, 1.0]}],
                "closed": false
            }]
        })
    );
}
