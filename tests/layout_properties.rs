//! Behavioral properties of the layout resolver

use pretty_assertions::assert_eq;

use set_piece_planner::{
    pitch_geometry, resolve_layout, Assignment, PlacedPlayer, Point, ScenarioKind, Zone,
};

fn full_assignment() -> Assignment {
    let names = ["Mateus", "Pedro", "Tiago", "André", "João", "Rui", "Lucas"];
    Assignment::from_entries(Zone::ALL.iter().map(|z| z.key()).zip(names))
}

#[test]
fn test_empty_assignment_places_nobody() {
    for scenario in ScenarioKind::ALL {
        assert!(resolve_layout(scenario, &Assignment::new()).is_empty());
    }
}

#[test]
fn test_geometry_is_non_empty_and_scenario_independent() {
    let geometry = pitch_geometry();
    assert!(!geometry.lines.is_empty());
    for _ in ScenarioKind::ALL {
        assert_eq!(pitch_geometry(), geometry);
    }
}

#[test]
fn test_one_placement_per_assigned_zone_with_names_echoed() {
    let assignment = full_assignment();
    for scenario in ScenarioKind::ALL {
        let placed = resolve_layout(scenario, &assignment);
        assert_eq!(placed.len(), assignment.len());
        for (player, (zone, name)) in placed.iter().zip(assignment.iter()) {
            assert_eq!(player.zone, zone);
            assert_eq!(player.name, name);
        }
    }
}

#[test]
fn test_output_follows_zone_declaration_order() {
    let assignment = Assignment::from_entries([
        ("defensive-balance", "Lucas"),
        ("goalkeeper-screen", "João"),
        ("near-post", "Pedro"),
    ]);
    let zones: Vec<Zone> = resolve_layout(ScenarioKind::CornerLeft, &assignment)
        .into_iter()
        .map(|p| p.zone)
        .collect();
    assert_eq!(
        zones,
        vec![Zone::NearPost, Zone::GoalkeeperScreen, Zone::DefensiveBalance]
    );
}

#[test]
fn test_resolution_is_deterministic() {
    let assignment = full_assignment();
    for scenario in ScenarioKind::ALL {
        assert_eq!(
            resolve_layout(scenario, &assignment),
            resolve_layout(scenario, &assignment)
        );
    }
}

#[test]
fn test_kicker_coordinates_per_scenario() {
    let assignment = Assignment::from_entries([("kicker", "Mateus")]);
    let kicker = |scenario| resolve_layout(scenario, &assignment)[0].position;

    assert_eq!(kicker(ScenarioKind::CornerLeft), Point::new(0.0, 0.0));
    assert_eq!(kicker(ScenarioKind::CornerRight), Point::new(100.0, 0.0));
    assert_eq!(kicker(ScenarioKind::LateralFreeKick), Point::new(20.0, 25.0));
}

#[test]
fn test_other_zones_ignore_scenario() {
    let mut assignment = full_assignment();
    assignment.clear(Zone::Kicker);

    let reference = resolve_layout(ScenarioKind::CornerLeft, &assignment);
    for scenario in ScenarioKind::ALL {
        assert_eq!(resolve_layout(scenario, &assignment), reference);
    }
}

#[test]
fn test_unknown_zone_is_skipped() {
    let with_unknown = Assignment::from_entries([
        ("near-post", "Pedro"),
        ("corner-flag", "Simão"),
        ("far-post", "Tiago"),
    ]);
    let without = Assignment::from_entries([("near-post", "Pedro"), ("far-post", "Tiago")]);

    assert_eq!(with_unknown, without);
    for scenario in ScenarioKind::ALL {
        assert_eq!(
            resolve_layout(scenario, &with_unknown),
            resolve_layout(scenario, &without)
        );
    }
}

#[test]
fn test_corner_left_example() {
    let assignment = Assignment::from_entries([
        ("near-post", "Pedro"),
        ("far-post", "Tiago"),
        ("penalty-spot", "André"),
    ]);

    let placed = resolve_layout(ScenarioKind::CornerLeft, &assignment);

    assert_eq!(
        placed,
        vec![
            PlacedPlayer {
                zone: Zone::NearPost,
                name: "Pedro".to_string(),
                position: Point::new(40.0, 6.0),
            },
            PlacedPlayer {
                zone: Zone::FarPost,
                name: "Tiago".to_string(),
                position: Point::new(60.0, 6.0),
            },
            PlacedPlayer {
                zone: Zone::PenaltySpot,
                name: "André".to_string(),
                position: Point::new(50.0, 11.0),
            },
        ]
    );
}

#[test]
fn test_same_player_in_two_zones_is_drawn_twice() {
    let assignment = Assignment::from_entries([("near-post", "Pedro"), ("edge-of-box", "Pedro")]);
    let placed = resolve_layout(ScenarioKind::CornerRight, &assignment);
    assert_eq!(placed.len(), 2);
    assert!(placed.iter().all(|p| p.name == "Pedro"));
}
