use vectortagger::annotation::AnnotationRecord;
use vectortagger::annotation::VectorType;
use vectortagger::draw::{FormLog, LayerStore, ShapeId, ShapeKind};
use vectortagger::input::PointerEvent;
use vectortagger::util::Point;
use vectortagger::{Config, EditorSurface, InteractionState, SurfaceOptions};

fn surface(vector_type: VectorType, node_count: usize) -> EditorSurface<LayerStore, FormLog> {
    let options = SurfaceOptions::new(640.0, 480.0, vector_type, node_count).with_config(&Config::default());
    EditorSurface::new(options, LayerStore::new(), FormLog::new())
}

fn points(surface: &EditorSurface<LayerStore, FormLog>, id: ShapeId) -> Vec<(f64, f64)> {
    surface.point_tuples(id).unwrap()
}

#[test]
fn line_drawn_by_two_clicks() {
    let mut surface = surface(VectorType::Line, 0);
    surface.start_shape(ShapeKind::Line, 10.0, 10.0);
    surface.click(50.0, 50.0);

    let id = surface.active_id().unwrap();
    assert!(id.is_unsaved());
    let shape = surface.shape(id).unwrap();
    assert_eq!(points(&surface, id), vec![(10.0, 10.0), (50.0, 50.0)]);
    assert!(shape.is_closed());
    assert!(!surface.is_drawing());
}

#[test]
fn polygon_traced_with_pointer_events() {
    let mut surface = surface(VectorType::Polygon, 0);
    let events = [
        PointerEvent::Down { x: 0.0, y: 0.0 },
        PointerEvent::Click { x: 0.0, y: 0.0 },
        PointerEvent::Move { x: 80.0, y: 0.0 },
        PointerEvent::Down { x: 100.0, y: 0.0 },
        PointerEvent::Click { x: 100.0, y: 0.0 },
        PointerEvent::Move { x: 100.0, y: 60.0 },
        PointerEvent::Down { x: 100.0, y: 100.0 },
        PointerEvent::Click { x: 100.0, y: 100.0 },
        PointerEvent::Move { x: 5.0, y: 5.0 },
        PointerEvent::Click { x: 3.0, y: 4.0 },
    ];
    for event in events {
        surface.handle_pointer(event);
    }

    assert_eq!(
        points(&surface, ShapeId::Unsaved(1)),
        vec![(0.0, 0.0), (100.0, 0.0), (100.0, 100.0)]
    );
    assert!(surface.active_shape().unwrap().is_closed());
    assert_eq!(surface.state(), InteractionState::Idle);

    let layer = surface.renderer().layer("drawing_unsaved1").unwrap();
    assert_eq!(layer.vector.len(), 3);
    assert!(layer.closed);
}

#[test]
fn feed_with_unknown_vector_type_still_loads_valid_records() {
    let feed = r#"[
        {"id": 1, "vector": {"x1": 5, "y1": 5}, "annotation_type": {"id": 2, "vector_type": 7}},
        {"id": 2, "vector": {"x1": 5, "y1": 5, "x2": 9, "y2": 9}, "annotation_type": {"id": 2, "vector_type": 3}},
        {"id": 3, "vector": {"x1": 1, "y1": 2}, "annotation_type": {"id": 2, "vector_type": 2}},
        {"id": 4, "vector": null, "annotation_type": {"id": 2, "vector_type": 3}},
        {"id": 5, "vector": {"x1": 1, "y1": 2}, "annotation_type": {"id": 2, "vector_type": 300}},
        {"id": 6, "vector": {"x1": 1, "y1": 2}, "annotation_type": {"id": 2, "vector_type": -1}}
    ]"#;
    let records: Vec<AnnotationRecord> = serde_json::from_str(feed).unwrap();

    let mut surface = surface(VectorType::Line, 0);
    let loaded = surface.load_annotations(&records, 2);

    assert_eq!(loaded, 2);
    assert!(surface.shape(ShapeId::Annotation(1)).is_none());
    assert_eq!(points(&surface, ShapeId::Annotation(2)), vec![(5.0, 5.0), (9.0, 9.0)]);
    assert_eq!(surface.shape(ShapeId::Annotation(3)).unwrap().kind(), ShapeKind::Point);
    assert!(surface.shape(ShapeId::Annotation(4)).is_none());
    assert_eq!(records[4].annotation_type.vector_type, VectorType::Unknown(300));
    assert!(surface.shape(ShapeId::Annotation(5)).is_none());
    assert!(surface.shape(ShapeId::Annotation(6)).is_none());
}

#[test]
fn committed_shape_survives_next_drawing() {
    let mut surface = surface(VectorType::Line, 0);
    surface.click(10.0, 10.0);
    surface.click(50.0, 50.0);
    let (first, _) = surface.commit_edit().unwrap();

    surface.click(100.0, 100.0);
    surface.click(150.0, 120.0);

    let second = surface.active_id().unwrap();
    assert_ne!(first, second);
    assert_eq!(surface.shapes().len(), 2);
    assert_eq!(points(&surface, first), vec![(10.0, 10.0), (50.0, 50.0)]);
    assert_eq!(points(&surface, second), vec![(100.0, 100.0), (150.0, 120.0)]);
    assert!(surface.renderer().layer(&first.layer_name()).is_some());
    assert!(surface.renderer().layer(&second.layer_name()).is_some());
}

#[test]
fn edited_vector_serializes_as_numbered_coordinates() {
    let feed = r#"[{"id": 8, "vector": {"x1": 0, "y1": 0, "x2": 10, "y2": 0, "x3": 10, "y3": 10},
                    "annotation_type": {"id": 1, "vector_type": 5, "node_count": 3}}]"#;
    let records: Vec<AnnotationRecord> = serde_json::from_str(feed).unwrap();
    let mut surface = surface(VectorType::Polygon, 3);
    surface.load_annotations(&records, 1);

    let id = ShapeId::Annotation(8);
    surface.select_for_edit(id).unwrap();
    surface.move_down();
    let (committed, vector) = surface.commit_edit().unwrap();

    assert_eq!(committed, id);
    assert_eq!(vector.get(3), Some(Point::new(10.0, 12.0)));
    let json = serde_json::to_value(&vector).unwrap();
    assert_eq!(json["y1"], 2.0);
    assert_eq!(json["x3"], 10.0);
    assert!(json.get("x4").is_none());
}

#[test]
fn drag_release_does_not_start_a_shape() {
    let feed = r#"[{"id": 3, "vector": {"x1": 100, "y1": 100, "x2": 200, "y2": 200},
                    "annotation_type": {"id": 1, "vector_type": 3}}]"#;
    let records: Vec<AnnotationRecord> = serde_json::from_str(feed).unwrap();
    let mut surface = surface(VectorType::Line, 0);
    surface.load_annotations(&records, 1);

    surface.handle_pointer(PointerEvent::Down { x: 104.0, y: 95.0 });
    surface.handle_pointer(PointerEvent::Click { x: 140.0, y: 95.0 });
    assert_eq!(surface.shapes().len(), 1);

    surface.handle_pointer(PointerEvent::Down { x: 300.0, y: 300.0 });
    surface.handle_pointer(PointerEvent::Click { x: 300.0, y: 300.0 });
    assert_eq!(surface.shapes().len(), 2);
    assert!(surface.is_drawing());
}
