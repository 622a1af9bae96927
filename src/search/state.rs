/// Bookkeeping of a single search. Every search owns its state, so concurrent
/// searches never share anything.
pub(super) struct State {
    searched_nodes: u64,
}

impl State {
    pub(super) const fn new() -> Self {
        Self { searched_nodes: 0 }
    }

    pub(super) fn visit(&mut self) {
        self.searched_nodes += 1;
    }

    #[must_use]
    pub(super) const fn searched_nodes(&self) -> u64 {
        self.searched_nodes
    }
}
