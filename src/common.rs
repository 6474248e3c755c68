use std::fmt;

/// Grid coordinate as (row, column). Signed on purpose: the successor
/// generator emits off-grid positions and they must remain ordinary keys.
pub type Position = (i32, i32);

/// One step of a plan: four compass moves plus the vacuum action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    North,
    South,
    East,
    West,
    Vacuum,
}

impl Action {
    pub fn label(&self) -> &'static str {
        match self {
            Action::North => "N",
            Action::South => "S",
            Action::East => "E",
            Action::West => "W",
            Action::Vacuum => "V",
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Remaining dirty cells as a bitset keyed by the ordinal of each dirty
/// cell in the world's sorted dirty-cell list. The set only shrinks from
/// the initial full set, so 64 bits cover every reachable value.
#[derive(Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DirtSet(u64);

impl DirtSet {
    pub const MAX_CELLS: usize = 64;

    /// All of the first `count` bits set.
    pub fn full(count: usize) -> Self {
        assert!(count <= Self::MAX_CELLS);
        if count == Self::MAX_CELLS {
            DirtSet(u64::MAX)
        } else {
            DirtSet((1u64 << count) - 1)
        }
    }

    pub fn contains(&self, ordinal: usize) -> bool {
        self.0 & (1u64 << ordinal) != 0
    }

    /// Copy of the set with one cell cleaned.
    pub fn without(&self, ordinal: usize) -> Self {
        DirtSet(self.0 & !(1u64 << ordinal))
    }

    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }

    pub fn len(&self) -> usize {
        self.0.count_ones() as usize
    }
}

impl fmt::Debug for DirtSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "DirtSet({:#b})", self.0)
    }
}

/// Search node identity: agent position plus the dirt still remaining.
/// Full structural equality; the same pair reached by different paths is
/// the same state. The derived ordering (position, then dirt) is the
/// deterministic tie-break used by the uniform-cost open list.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct State {
    pub position: Position,
    pub dirt: DirtSet,
}

pub type Plan = Vec<Action>;
