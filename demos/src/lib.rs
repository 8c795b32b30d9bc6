//! Shared helpers for the waypath demos: run a search over an ASCII layout
//! and draw the result back onto the map.

use anyhow::{Context, Result};
use waypath_core::{Grid, Layout, PassMap, Point};
use waypath_search::{SearchEngine, SearchSource, SearchState};

const ROUTE: char = '*';

/// What a demo search produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Plan {
    pub start: Point,
    pub goal: Point,
    pub state: SearchState,
    pub steps: usize,
    pub route: Option<Vec<Point>>,
}

/// Search `layout` from its `S` marker to its `G` marker.
///
/// With `step_cap` set, at most that many steps run; the plan may then still
/// be [`SearchState::Searching`].
pub fn plan(layout: &Layout, budget: i32, step_cap: Option<usize>) -> Result<Plan> {
    let start = layout.start.context("layout has no start marker (S)")?;
    let goal = layout.goal.context("layout has no goal marker (G)")?;

    let source = SearchSource::new(&layout.map, budget)?.with_endpoints(start, goal)?;
    let mut engine = SearchEngine::new(source)?;
    engine.init()?;

    let state = match step_cap {
        Some(n) => engine.run_for(n),
        None => engine.run_to_completion(),
    };
    let route = match state {
        SearchState::Completed => Some(engine.route()?),
        _ => None,
    };
    Ok(Plan {
        start,
        goal,
        state,
        steps: engine.steps(),
        route,
    })
}

/// Render `map` with the route drawn as `*` and the endpoints as `S`/`G`.
pub fn overlay(map: &PassMap, plan: &Plan) -> String {
    let mut chars = Grid::from_fn(map.width(), map.height(), |p| {
        if *map.grid().get(p.x, p.y) { '.' } else { '#' }
    });
    for p in plan.route.iter().flatten() {
        chars.set(p.x, p.y, ROUTE);
    }
    for (p, ch) in [(plan.start, 'S'), (plan.goal, 'G')] {
        if chars.is_in(p.x, p.y) {
            chars.set(p.x, p.y, ch);
        }
    }

    let mut out = String::with_capacity(chars.len() + chars.height() as usize);
    for y in 0..chars.height() {
        for x in 0..chars.width() {
            out.push(*chars.get(x, y));
        }
        out.push('\n');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    const CORRIDOR: &str = "
S.#
#.#
#.G
";

    #[test]
    fn plan_and_overlay() {
        let layout = Layout::parse(CORRIDOR).unwrap();
        let plan = plan(&layout, 4, None).unwrap();
        assert_eq!(plan.state, SearchState::Completed);
        assert_eq!(plan.route.as_ref().map(Vec::len), Some(5));
        assert_eq!(overlay(&layout.map, &plan), "S*#\n#*#\n#*G\n");
    }

    #[test]
    fn plan_respects_step_cap() {
        let layout = Layout::parse(CORRIDOR).unwrap();
        let plan = plan(&layout, 4, Some(1)).unwrap();
        assert_eq!(plan.state, SearchState::Searching);
        assert_eq!(plan.steps, 1);
        assert_eq!(plan.route, None);
    }

    #[test]
    fn plan_needs_markers() {
        let layout = Layout::parse("...").unwrap();
        assert!(plan(&layout, 4, None).is_err());
    }

    #[test]
    fn bundled_maps_parse() {
        for text in [include_str!("../maps/spiral.txt"), include_str!("../maps/rooms.txt")] {
            let layout = Layout::parse(text).unwrap();
            assert!(layout.start.is_some());
            assert!(layout.goal.is_some());
        }
    }

    #[test]
    fn spiral_needs_a_large_budget() {
        let layout = Layout::parse(include_str!("../maps/spiral.txt")).unwrap();
        assert_eq!(plan(&layout, 3, None).unwrap().state, SearchState::Incomplete);
        let wide = plan(&layout, 12, None).unwrap();
        assert_eq!(wide.state, SearchState::Completed);
    }
}
