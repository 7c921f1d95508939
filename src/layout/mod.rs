//! Layout resolver for set-piece diagrams
//!
//! This module maps a scenario and a zone assignment to positioned players,
//! and provides the constant pitch markings they are drawn on. Everything
//! here is pure: no I/O, no shared state.

pub mod error;
pub mod types;

pub use error::LayoutError;
pub use types::*;

/// Place every assigned player on the pitch
///
/// Produces one [`PlacedPlayer`] per assigned zone, in zone declaration
/// order. Only the kicker's position depends on `scenario`.
pub fn resolve_layout(scenario: ScenarioKind, assignment: &Assignment) -> Vec<PlacedPlayer> {
    Zone::ALL
        .into_iter()
        .filter_map(|zone| {
            assignment.get(zone).map(|name| PlacedPlayer {
                zone,
                name: name.to_string(),
                position: zone.anchor(scenario),
            })
        })
        .collect()
}

/// The fixed markings of the attacking third, in normalized pitch units
pub fn pitch_geometry() -> StaticGeometry {
    StaticGeometry {
        lines: vec![
            // Goal line
            Segment::new(Point::new(0.0, 0.0), Point::new(100.0, 0.0)),
            // Halfway line
            Segment::new(Point::new(0.0, 100.0), Point::new(100.0, 100.0)),
            // Touchlines
            Segment::new(Point::new(0.0, 0.0), Point::new(0.0, 100.0)),
            Segment::new(Point::new(100.0, 0.0), Point::new(100.0, 100.0)),
        ],
        penalty_area: Rect::new(20.0, 0.0, 60.0, 16.5),
        six_yard_area: Rect::new(36.0, 0.0, 28.0, 5.5),
        goal: Rect::new(45.0, -2.5, 10.0, 2.5),
        penalty_arc: Arc {
            center: Point::new(50.0, 16.5),
            radius: 10.0,
            start_deg: 0.0,
            end_deg: 180.0,
        },
        penalty_spot: Point::new(50.0, 11.0),
    }
}

/// Compute Levenshtein edit distance between two strings
fn levenshtein_distance(a: &str, b: &str) -> usize {
    let a_chars: Vec<char> = a.chars().collect();
    let b_chars: Vec<char> = b.chars().collect();
    let m = a_chars.len();
    let n = b_chars.len();

    if m == 0 {
        return n;
    }
    if n == 0 {
        return m;
    }

    let mut prev: Vec<usize> = (0..=n).collect();
    let mut curr = vec![0usize; n + 1];

    for i in 1..=m {
        curr[0] = i;
        for j in 1..=n {
            let cost = usize::from(a_chars[i - 1] != b_chars[j - 1]);
            curr[j] = (prev[j] + 1).min(curr[j - 1] + 1).min(prev[j - 1] + cost);
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    prev[n]
}

/// Find known names within a maximum edit distance of `target`, closest first
pub(crate) fn find_similar<'a>(
    known: impl IntoIterator<Item = &'a str>,
    target: &str,
    max_distance: usize,
) -> Vec<String> {
    let mut candidates: Vec<(&str, usize)> = known
        .into_iter()
        .filter_map(|name| {
            let dist = levenshtein_distance(name, target);
            if dist <= max_distance && dist > 0 {
                Some((name, dist))
            } else {
                None
            }
        })
        .collect();

    candidates.sort_by_key(|(name, d)| (*d, *name));
    candidates
        .into_iter()
        .map(|(name, _)| name.to_string())
        .take(3)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_levenshtein_same() {
        assert_eq!(levenshtein_distance("kicker", "kicker"), 0);
    }

    #[test]
    fn test_levenshtein_one_off() {
        assert_eq!(levenshtein_distance("far-post", "far-pst"), 1);
        assert_eq!(levenshtein_distance("far-post", "far-past"), 1);
    }

    #[test]
    fn test_levenshtein_different() {
        assert_eq!(levenshtein_distance("cat", "dog"), 3);
        assert_eq!(levenshtein_distance("", "dog"), 3);
    }

    #[test]
    fn test_find_similar_orders_by_distance() {
        let known = ["near-post", "far-post", "kicker"];
        let suggestions = find_similar(known, "nea-post", 2);
        assert_eq!(suggestions[0], "near-post");
        assert!(!suggestions.contains(&"kicker".to_string()));
    }

    #[test]
    fn test_find_similar_skips_exact_match() {
        assert!(find_similar(["kicker"], "kicker", 2).is_empty());
    }

    #[test]
    fn test_resolve_places_only_assigned_zones() {
        let mut assignment = Assignment::new();
        assignment.assign(Zone::EdgeOfBox, "Rui");
        let placed = resolve_layout(ScenarioKind::CornerRight, &assignment);
        assert_eq!(placed.len(), 1);
        assert_eq!(placed[0].zone, Zone::EdgeOfBox);
        assert_eq!(placed[0].position, Point::new(50.0, 22.0));
    }

    #[test]
    fn test_kicker_follows_scenario() {
        let mut assignment = Assignment::new();
        assignment.assign(Zone::Kicker, "Mateus");
        let spot = |scenario| resolve_layout(scenario, &assignment)[0].position;
        assert_eq!(spot(ScenarioKind::CornerLeft), Point::new(0.0, 0.0));
        assert_eq!(spot(ScenarioKind::CornerRight), Point::new(100.0, 0.0));
        assert_eq!(spot(ScenarioKind::LateralFreeKick), Point::new(20.0, 25.0));
    }

    #[test]
    fn test_geometry_markings() {
        let geometry = pitch_geometry();
        assert_eq!(geometry.lines.len(), 4);
        let inside = |outer: &Rect, p: Point| {
            p.x >= outer.x && p.x <= outer.right() && p.y >= outer.y && p.y <= outer.top()
        };
        let six = &geometry.six_yard_area;
        assert!(inside(&geometry.penalty_area, geometry.penalty_spot));
        assert!(inside(&geometry.penalty_area, Point::new(six.x, six.top())));
        assert!(inside(&geometry.penalty_area, Point::new(six.right(), six.y)));
        assert!(geometry.goal.top() <= 0.0);
    }
}
