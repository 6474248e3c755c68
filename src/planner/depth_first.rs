use std::collections::{HashSet, VecDeque};

use tracing::trace;

use super::{Planner, PlannerOptions, Transition};
use crate::common::{Action, Plan, State};
use crate::stat::Stats;
use crate::world::World;

/// Uninformed traversal over a deque frontier. Successors are inserted
/// at the front and states are removed from the back, reproducing the
/// reference discipline exactly; the counters depend on that order, so
/// it must not be "simplified" to push/pop on one end.
///
/// The `seen` set marks states when they are generated, not when they
/// are expanded, so no state is ever inserted into the frontier twice.
pub struct DepthFirst<'a> {
    world: &'a World,
    options: PlannerOptions,
    stats: Stats,
}

impl<'a> DepthFirst<'a> {
    pub fn new(world: &'a World) -> Self {
        Self::with_options(world, PlannerOptions::depth_first())
    }

    pub fn with_options(world: &'a World, options: PlannerOptions) -> Self {
        DepthFirst {
            world,
            options,
            stats: Stats::default(),
        }
    }
}

impl Planner for DepthFirst<'_> {
    fn plan(&mut self) -> Option<Plan> {
        self.stats = Stats::default();
        let transition = Transition::new(self.world, self.options.filter_illegal);

        let start = self.world.start_state();
        let mut frontier: VecDeque<(State, Plan)> = VecDeque::new();
        let mut seen: HashSet<State> = HashSet::new();
        frontier.push_front((start.clone(), Vec::new()));
        seen.insert(start);
        self.stats.generated = 1;

        while let Some((state, plan)) = frontier.pop_back() {
            trace!("expand state: {state:?}");
            self.stats.expanded += 1;

            // A state with no dirt left is a goal; the start state is the
            // only such state that can ever sit in the frontier.
            if state.dirt.is_empty() {
                self.stats.trace("depth-first");
                return Some(plan);
            }

            if let Some(next) = transition.clean(&state) {
                self.stats.generated += 1;
                let mut next_plan = plan.clone();
                next_plan.push(Action::Vacuum);
                // Goal test at generation time, before the state is ever
                // queued; the counters depend on the early return.
                if next.dirt.is_empty() {
                    self.stats.trace("depth-first");
                    return Some(next_plan);
                }
                if seen.insert(next.clone()) {
                    frontier.push_front((next, next_plan));
                }
            }

            for (next, action) in transition.moves(&state) {
                self.stats.generated += 1;
                let mut next_plan = plan.clone();
                next_plan.push(action);
                // Lets a plan end on a plain move once all dirt is gone.
                if self.options.check_goal_on_move && state.dirt.is_empty() {
                    self.stats.trace("depth-first");
                    return Some(next_plan);
                }
                if seen.insert(next.clone()) {
                    frontier.push_front((next, next_plan));
                }
            }
        }

        self.stats.trace("depth-first");
        None
    }

    fn stats(&self) -> &Stats {
        &self.stats
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::Action::*;

    #[test]
    fn test_strip_world_plan_and_counters() {
        let world = World::from_text("3\n1\n@*#\n").unwrap();
        let mut planner = DepthFirst::new(&world);
        let plan = planner.plan().unwrap();
        assert_eq!(plan, vec![East, Vacuum]);
        // Hand-traced: start, then (-1,0), (1,0) expanded before the dirt
        // cell; the clean successor is the 14th node generated.
        assert_eq!(planner.stats().generated, 14);
        assert_eq!(planner.stats().expanded, 4);
    }

    #[test]
    fn test_dirt_free_world_is_trivially_solved() {
        let world = World::from_text("1\n1\n@\n").unwrap();
        let mut planner = DepthFirst::new(&world);
        assert_eq!(planner.plan(), Some(vec![]));
        assert_eq!(planner.stats().generated, 1);
        assert_eq!(planner.stats().expanded, 1);
    }

    #[test]
    fn test_walled_in_origin_without_dirt() {
        // Goal fires on the first expansion, before any move.
        let world = World::from_text("3\n3\n###\n#@#\n###\n").unwrap();
        let mut planner = DepthFirst::new(&world);
        assert_eq!(planner.plan(), Some(vec![]));
        assert_eq!(planner.stats().generated, 1);
        assert_eq!(planner.stats().expanded, 1);
    }

    #[test]
    fn test_dirty_origin_cleans_first() {
        // The text format cannot overlap markers, so build it directly.
        let world = World::new(1, 1, (0, 0), vec![(0, 0)], HashSet::new()).unwrap();
        let mut planner = DepthFirst::new(&world);
        assert_eq!(planner.plan(), Some(vec![Vacuum]));
        assert_eq!(planner.stats().generated, 2);
        assert_eq!(planner.stats().expanded, 1);
    }

    #[test]
    fn test_enclosed_dirt_has_no_plan_when_filtered() {
        let text = "5\n5\n@....\n.###.\n.#*#.\n.###.\n.....\n";
        let world = World::from_text(text).unwrap();
        let mut planner =
            DepthFirst::with_options(&world, PlannerOptions::depth_first().filter_illegal(true));
        assert_eq!(planner.plan(), None);
        assert!(planner.stats().expanded > 0);
    }

    #[test]
    fn test_repeat_runs_are_identical() {
        let world = World::from_text("3\n1\n@*#\n").unwrap();
        let mut planner = DepthFirst::new(&world);
        let first = planner.plan();
        let first_stats = planner.stats().clone();
        let second = planner.plan();
        assert_eq!(first, second);
        assert_eq!(&first_stats, planner.stats());
    }
}
