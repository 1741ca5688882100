mod fixtures;

use fixtures::assert_close;
use wanderlux_globe::haversine::haversine_km;
use wanderlux_globe::itinerary::{DEFAULT_GLOBE_RADIUS, DEFAULT_MARKER_RADIUS, ITALY_ITINERARY};
use wanderlux_globe::{ArcProfile, GeoError, GlobeLayout, Itinerary, RouteOptions, Waypoint};

#[test]
fn italy_scene_with_default_layout() {
    let scene = Itinerary::italy()
        .render(&GlobeLayout::default())
        .expect("default layout renders");

    assert_eq!(scene.globe_radius, DEFAULT_GLOBE_RADIUS);
    assert_eq!(scene.markers.len(), 8);
    assert_eq!(scene.route.len(), 7 * 21);
    assert_eq!(scene.summary.destinations, 8);

    for marker in &scene.markers {
        assert_close(marker.position.norm(), DEFAULT_MARKER_RADIUS, 1e-9);
    }
    for point in &scene.route {
        assert!(point.norm() >= DEFAULT_GLOBE_RADIUS);
    }
}

#[test]
fn italy_route_peaks_midway_through_each_leg() {
    let route = Itinerary::italy().route(&RouteOptions::default()).unwrap();
    for leg in route.chunks(21) {
        assert_close(leg[10].norm(), 2.03 * 1.08, 1e-9);
        assert!(leg[0].norm() < leg[10].norm());
        assert!(leg[20].norm() < leg[10].norm());
    }
}

#[test]
fn italy_summary_distance() {
    let summary = Itinerary::italy().summary();
    let rome_florence = haversine_km(&ITALY_ITINERARY[0], &ITALY_ITINERARY[1]);

    assert!(summary.total_km > rome_florence);
    // Great-circle legs Rome -> ... -> Ravello add up to roughly 1140 km.
    assert!(
        summary.total_km > 1050.0 && summary.total_km < 1250.0,
        "got {}",
        summary.total_km
    );
}

#[test]
fn custom_itinerary_round_trip_through_render() {
    let itinerary = Itinerary::new(vec![
        Waypoint::owned("Home", 51.5072, -0.1276, "Departure"),
        Waypoint::owned("Away", 48.8566, 2.3522, "2 nights"),
    ])
    .unwrap();
    let layout = GlobeLayout {
        globe_radius: 1.0,
        marker_radius: 1.0,
        route: RouteOptions::new(1.0, 2, 0.0),
    };

    let scene = itinerary.render(&layout).unwrap();

    assert_eq!(scene.route.len(), 2);
    assert!(scene.markers[0].position.distance(&scene.route[0]) < 1e-12);
    assert!(scene.markers[1].position.distance(&scene.route[1]) < 1e-12);
}

#[test]
fn render_rejects_invalid_layout() {
    let layout = GlobeLayout {
        globe_radius: 0.0,
        ..GlobeLayout::default()
    };
    assert!(matches!(
        Itinerary::italy().render(&layout),
        Err(GeoError::InvalidParameter { name: "radius", .. })
    ));
}

#[test]
fn scene_serializes_for_renderer() {
    let scene = Itinerary::italy().render(&GlobeLayout::default()).unwrap();
    let json = serde_json::to_value(&scene).unwrap();

    assert_eq!(json["globe_radius"], 2.0);
    assert_eq!(json["markers"][0]["name"], "Rome");
    assert_eq!(json["markers"][0]["label"], "3 nights");
    assert!(json["markers"][0]["position"]["x"].is_f64());
    assert_eq!(json["route"].as_array().map(Vec::len), Some(147));
    assert_eq!(json["summary"]["destinations"], 8);
}

#[test]
fn layout_accepts_partial_json_overrides() {
    let layout: GlobeLayout =
        serde_json::from_str(r#"{"route": {"sample_count": 5, "profile": "chord"}}"#).unwrap();

    assert_eq!(layout.globe_radius, DEFAULT_GLOBE_RADIUS);
    assert_eq!(layout.marker_radius, DEFAULT_MARKER_RADIUS);
    assert_eq!(layout.route.sample_count, 5);
    assert_eq!(layout.route.profile, ArcProfile::Chord);
    assert_eq!(layout.route.bulge_amplitude, 0.08);
    assert!(layout.validate().is_ok());
}

#[test]
fn waypoints_deserialize_with_owned_strings() {
    let stops: Vec<Waypoint> = serde_json::from_str(
        r#"[{"name": "Rome", "latitude": 41.9028, "longitude": 12.4964, "label": "3 nights"}]"#,
    )
    .unwrap();
    assert_eq!(stops[0], ITALY_ITINERARY[0]);
}
