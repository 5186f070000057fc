use campusnav::models::{Location, RouteEdge};

mod common;

#[tokio::test]
async fn test_shortest_path_across_campus() {
    let state = common::test_state();

    let route = state
        .planner
        .shortest_path("Library Entrance", "Physics Lab", false)
        .await
        .unwrap()
        .unwrap();

    // Direct Library-Gym (150) beats Cafeteria (120+150), then on to the lab
    assert_eq!(route.path, vec!["Library Entrance", "Gym", "Physics Lab"]);
    assert_eq!(route.distance_m, 240);
    assert_eq!(route.route_ids, vec!["R3", "R4"]);
}

#[tokio::test]
async fn test_accessible_route_avoids_shorter_inaccessible_edge() {
    let state = common::test_state();

    let unfiltered = state
        .planner
        .shortest_path("Library Entrance", "Gym", false)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(unfiltered.distance_m, 150);
    assert_eq!(unfiltered.route_ids, vec!["R3"]);

    // The accessible route is longer but never touches a non-accessible edge
    let accessible = state
        .accessibility
        .accessible_path("Library Entrance", "Gym")
        .await
        .unwrap()
        .unwrap();
    assert_eq!(accessible.path, vec!["Library Entrance", "Cafeteria", "Gym"]);
    assert_eq!(accessible.distance_m, 270);

    let edges = common::campus_edges();
    for id in &accessible.route_ids {
        let edge = edges.iter().find(|e| &e.id == id).unwrap();
        assert!(edge.accessible, "edge {} must be accessible", id);
    }
}

#[tokio::test]
async fn test_alternatives_are_ranked_and_distinct() {
    let state = common::test_state();

    let routes = state
        .planner
        .alternative_routes("Library Entrance", "Gym", 3, false)
        .await
        .unwrap();

    assert!(routes.len() >= 2);
    assert!(routes.len() <= 3);

    // Non-decreasing distances, no repeated node sequences
    let mut last = 0;
    for route in &routes {
        assert!(route.distance_m >= last);
        last = route.distance_m;
    }
    for (i, a) in routes.iter().enumerate() {
        for b in routes.iter().skip(i + 1) {
            assert_ne!(a.path, b.path);
        }
    }

    // The first alternative matches the shortest path
    assert_eq!(routes[0].path, vec!["Library Entrance", "Gym"]);
    assert_eq!(routes[0].distance_m, 150);
}

#[tokio::test]
async fn test_inaccessible_destination_scenario() {
    // Single non-accessible edge to a floor-2 location
    let state = common::test_state_with(
        vec![
            Location::new("Atrium", "Main", 1, true),
            Location::new("Archive", "Main", 2, false),
        ],
        vec![RouteEdge::new("R1", "Atrium", "Archive", 50, false)],
    );

    let route = state
        .planner
        .shortest_path("Atrium", "Archive", false)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(route.path, vec!["Atrium", "Archive"]);
    assert_eq!(route.distance_m, 50);

    // The only edge is non-accessible, so the filtered graph has no route
    assert!(state
        .accessibility
        .accessible_path("Atrium", "Archive")
        .await
        .unwrap()
        .is_none());

    let path: Vec<String> = route.path.clone();
    assert!(state.accessibility.needs_lift(&path).await.unwrap());

    let warnings = state.accessibility.accessibility_warnings(&path).await.unwrap();
    assert!(warnings
        .iter()
        .any(|w| w.contains("Archive may not be wheelchair accessible")));
}

#[tokio::test]
async fn test_disconnected_locations_have_no_route() {
    let state = common::test_state_with(
        vec![],
        vec![
            RouteEdge::new("R1", "A", "B", 10, true),
            RouteEdge::new("R2", "C", "D", 10, true),
        ],
    );

    assert!(state
        .planner
        .shortest_path("A", "D", false)
        .await
        .unwrap()
        .is_none());
    assert!(state
        .planner
        .alternative_routes("A", "D", 3, false)
        .await
        .unwrap()
        .is_empty());
}

#[tokio::test]
async fn test_lift_status_unknown_building_scenario() {
    let state = common::test_state();

    assert!(!state.accessibility.set_lift_status("Unknown", false));
    assert!(state.accessibility.lift_status_for("Unknown"));
}

#[tokio::test]
async fn test_downed_lift_feeds_route_warnings() {
    let state = common::test_state();
    assert!(state.accessibility.set_lift_status("Recreation", false));

    let route = state
        .planner
        .shortest_path("Library Entrance", "Physics Lab", false)
        .await
        .unwrap()
        .unwrap();

    let warnings = state
        .accessibility
        .accessibility_warnings(&route.path)
        .await
        .unwrap();

    assert!(warnings
        .iter()
        .any(|w| w.contains("Lift in Recreation building is currently not working")));

    // Advisory only: the route itself is unchanged
    assert_eq!(route.route_ids, vec!["R3", "R4"]);
}
