use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashMap};

use tracing::trace;

use super::{Planner, PlannerOptions, Transition};
use crate::common::{Action, Plan, State};
use crate::stat::Stats;
use crate::world::World;

/// Open-list entry, min-ordered by accumulated cost with the state's
/// structural ordering as the deterministic tie-break.
#[derive(Clone, Eq)]
struct OpenNode {
    cost: usize,
    state: State,
    plan: Plan,
}

impl PartialEq for OpenNode {
    fn eq(&self, other: &Self) -> bool {
        self.cost == other.cost && self.state == other.state
    }
}

impl Ord for OpenNode {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .cost
            .cmp(&self.cost)
            .then_with(|| other.state.cmp(&self.state))
    }
}

impl PartialOrd for OpenNode {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Dijkstra-style traversal: a binary heap keyed by path cost and a
/// `best` map holding the cheapest cost at which each state has been
/// inserted. Stale heap entries (cost above `best`) are dropped on pop
/// without counting as expanded. Returns a cheapest plan.
///
/// Unlike the depth-first planner, no goal test is performed on plain
/// move successors; only clean actions (and the expansion-time check)
/// can end the search. That asymmetry is deliberate and kept.
pub struct UniformCost<'a> {
    world: &'a World,
    options: PlannerOptions,
    stats: Stats,
}

impl<'a> UniformCost<'a> {
    pub fn new(world: &'a World) -> Self {
        Self::with_options(world, PlannerOptions::uniform_cost())
    }

    pub fn with_options(world: &'a World, options: PlannerOptions) -> Self {
        UniformCost {
            world,
            options,
            stats: Stats::default(),
        }
    }

    fn relax(
        best: &mut HashMap<State, usize>,
        open: &mut BinaryHeap<OpenNode>,
        next: State,
        cost: usize,
        plan: Plan,
    ) {
        if cost < *best.get(&next).unwrap_or(&usize::MAX) {
            best.insert(next.clone(), cost);
            open.push(OpenNode {
                cost,
                state: next,
                plan,
            });
        }
    }
}

impl Planner for UniformCost<'_> {
    fn plan(&mut self) -> Option<Plan> {
        self.stats = Stats::default();
        let transition = Transition::new(self.world, self.options.filter_illegal);

        let start = self.world.start_state();
        let mut open = BinaryHeap::new();
        let mut best: HashMap<State, usize> = HashMap::new();
        best.insert(start.clone(), 0);
        open.push(OpenNode {
            cost: 0,
            state: start,
            plan: Vec::new(),
        });
        self.stats.generated = 1;

        while let Some(OpenNode { cost, state, plan }) = open.pop() {
            // Stale entry from an earlier, costlier insertion.
            if cost > *best.get(&state).unwrap_or(&usize::MAX) {
                continue;
            }
            trace!("expand state: {state:?} at cost {cost}");
            self.stats.expanded += 1;

            if state.dirt.is_empty() {
                self.stats.trace("uniform-cost");
                return Some(plan);
            }

            if let Some(next) = transition.clean(&state) {
                self.stats.generated += 1;
                let mut next_plan = plan.clone();
                next_plan.push(Action::Vacuum);
                // Goal test at generation, before any relaxation bookkeeping.
                if next.dirt.is_empty() {
                    self.stats.trace("uniform-cost");
                    return Some(next_plan);
                }
                Self::relax(&mut best, &mut open, next, cost + 1, next_plan);
            }

            for (next, action) in transition.moves(&state) {
                self.stats.generated += 1;
                let mut next_plan = plan.clone();
                next_plan.push(action);
                Self::relax(&mut best, &mut open, next, cost + 1, next_plan);
            }
        }

        self.stats.trace("uniform-cost");
        None
    }

    fn stats(&self) -> &Stats {
        &self.stats
    }
}
