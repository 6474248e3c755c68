use serde::Serialize;
use tracing::debug;

/// Node accounting for one planning run. `generated` counts every
/// successor constructed (duplicates and illegal positions included),
/// `expanded` counts states popped and processed. Part of the observable
/// contract, owned by the planner and reset on every invocation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Stats {
    pub generated: usize,
    pub expanded: usize,
}

impl Stats {
    pub(crate) fn trace(&self, planner: &str) {
        debug!(
            "{planner}: generated {} nodes, expanded {} nodes",
            self.generated, self.expanded
        );
    }
}
