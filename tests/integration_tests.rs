//! End-to-end tests: plan files through validation, layout and rendering

use std::fs;
use std::path::Path;

use pretty_assertions::assert_eq;

use set_piece_planner::{
    render_plan_source, render_plan_with_config, Plan, PlanError, PlanFile, PlannerError,
    RenderConfig, ScenarioKind, Stylesheet, SvgConfig, Zone,
};

/// Every bundled plan renders and draws one marker per assignment.
#[test]
fn test_bundled_plans_render() {
    let plans_dir = Path::new("plans");
    let mut tested = 0;

    for entry in fs::read_dir(plans_dir).expect("Failed to read plans directory") {
        let path = entry.expect("Failed to read entry").path();
        if path.extension().map_or(true, |ext| ext != "toml") {
            continue;
        }

        let source = fs::read_to_string(&path).expect("Failed to read plan");
        let plan = PlanFile::parse(&source)
            .and_then(PlanFile::into_plan)
            .unwrap_or_else(|e| panic!("{}", e.format(&source, &path.display().to_string())));

        let rendered = render_plan_with_config(&plan, &RenderConfig::default());
        assert!(rendered.svg.contains("<svg"), "{}", path.display());
        assert!(rendered.svg.ends_with("</svg>"), "{}", path.display());
        assert_eq!(
            rendered.svg.matches(r#"class="sp-marker""#).count(),
            plan.assignment().len(),
            "{}",
            path.display()
        );
        tested += 1;
    }

    assert!(tested >= 3, "expected the bundled plans, found {}", tested);
}

#[test]
fn test_full_corner_summary() {
    let source = fs::read_to_string("plans/near-post-routine.toml").unwrap();
    let rendered = render_plan_source(&source, &RenderConfig::default()).unwrap();

    assert_eq!(
        rendered.summary.to_string(),
        "Set piece: Attacking corner (left)\n\
         Players:\n\
         - Mateus: Kicker (on the ball)\n\
         - Pedro: Near post (short)\n\
         - Tiago: Far post (long)\n\
         - André: Penalty spot (central zone)\n\
         - João: Goalkeeper zone (obstruction)\n\
         - Rui: Edge of the box (second balls)\n\
         - Lucas: Defensive balance (midfield)\n\
         Instruction: Attack the ball at its highest point."
    );
    assert!(rendered.svg.contains(r#"class="sp-marker" cx="0" cy="0""#));
}

#[test]
fn test_custom_roster_rejects_default_squad_names() {
    let source = r#"
roster = ["Bruno", "Diogo"]
[assignments]
kicker = "Pedro"
"#;
    let err = render_plan_source(source, &RenderConfig::default()).unwrap_err();
    match err {
        PlannerError::Plan(PlanError::UnknownPlayer { name, zone, .. }) => {
            assert_eq!(name, "Pedro");
            assert_eq!(zone, Zone::Kicker);
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn test_overrides_replace_file_choices() {
    let mut plan = PlanFile::parse(
        r#"
scenario = "corner-left"
[assignments]
near-post = "Pedro"
"#,
    )
    .and_then(PlanFile::into_plan)
    .unwrap();

    plan.set_scenario("corner-right".parse().unwrap());
    plan.assign(Zone::NearPost, "Tiago").unwrap();
    plan.assign(Zone::Kicker, "Mateus").unwrap();

    assert_eq!(plan.scenario(), ScenarioKind::CornerRight);
    assert_eq!(plan.assignment().get(Zone::NearPost), Some("Tiago"));

    let rendered = render_plan_with_config(&plan, &RenderConfig::default());
    assert!(rendered.svg.contains(r#"class="sp-marker" cx="100" cy="0""#));
    assert!(!rendered.svg.contains(">Pedro<"));
}

#[test]
fn test_stylesheet_colors_reach_markers() {
    let stylesheet = Stylesheet::from_str(
        r##"
[colors]
player-fill = "#1565c0"
pitch-grass = "#2e7d32"
"##,
    )
    .unwrap();
    let config = RenderConfig::new().with_stylesheet(stylesheet);

    let mut plan = Plan::default();
    plan.assign(Zone::PenaltySpot, "André").unwrap();
    let rendered = render_plan_with_config(&plan, &config);

    assert!(rendered.svg.contains(r##"fill="#1565c0""##));
    assert!(rendered.svg.contains(r##"fill="#2e7d32""##));
    assert!(!rendered.svg.contains("#FF5252"));
}

#[test]
fn test_marker_geometry_follows_svg_config() {
    let config = RenderConfig::new().with_svg(
        SvgConfig::new()
            .with_marker_radius(2.5)
            .with_label_offset(4.0),
    );
    let mut plan = Plan::default();
    plan.assign(Zone::DefensiveBalance, "Lucas").unwrap();
    let rendered = render_plan_with_config(&plan, &config);

    assert!(rendered.svg.contains(r#"class="sp-marker" cx="50" cy="-45" r="2.5""#));
    assert!(rendered.svg.contains(r#"x="50" y="-49""#));
}
