use crate::common::{Action, Position, State};
use crate::world::World;

const MOVES: [(i32, i32, Action); 4] = [
    (-1, 0, Action::North),
    (1, 0, Action::South),
    (0, 1, Action::East),
    (0, -1, Action::West),
];

/// Successor model shared by both planners: an optional clean action at
/// the current cell, plus the four unit-cost compass moves.
///
/// In faithful mode (`filter_illegal = false`) the moves are generated
/// with no bounds or wall check at all; successors standing on a wall or
/// off the grid enter the frontier like any other state, and the
/// generated/expanded counters depend on that. The corrected rule is an
/// explicit opt-in, never applied silently.
pub struct Transition<'a> {
    world: &'a World,
    filter_illegal: bool,
}

impl<'a> Transition<'a> {
    pub fn new(world: &'a World, filter_illegal: bool) -> Self {
        Transition {
            world,
            filter_illegal,
        }
    }

    /// Clean-here successor: same position with the dirt bit for this
    /// cell cleared, or `None` when the state's cell carries no dirt.
    pub fn clean(&self, state: &State) -> Option<State> {
        let ordinal = self.world.dirt_ordinal(state.position)?;
        if !state.dirt.contains(ordinal) {
            return None;
        }
        Some(State {
            position: state.position,
            dirt: state.dirt.without(ordinal),
        })
    }

    /// The four move successors in fixed N, S, E, W order.
    pub fn moves(&self, state: &State) -> Vec<(State, Action)> {
        MOVES
            .iter()
            .filter_map(|&(dy, dx, action)| {
                let position: Position = (state.position.0 + dy, state.position.1 + dx);
                if self.filter_illegal
                    && (!self.world.in_bounds(position) || self.world.is_wall(position))
                {
                    return None;
                }
                Some((
                    State {
                        position,
                        dirt: state.dirt,
                    },
                    action,
                ))
            })
            .collect()
    }
}
