use super::counter::TokenCounter;

/// Greedy token budget allocation.
pub struct TokenBudget<'a> {
    counter: &'a TokenCounter,
}

/// An item that fit into the budget.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Allocation {
    /// Index of the item in the input slice.
    pub index: usize,
    /// Tokens charged for this item.
    pub tokens: usize,
}

impl<'a> TokenBudget<'a> {
    pub fn new(counter: &'a TokenCounter) -> Self {
        Self { counter }
    }

    /// How many tokens remain from a total budget after using `used`.
    pub fn remaining(total: usize, used: usize) -> usize {
        total.saturating_sub(used)
    }

    /// Walk items in order, keeping each one that still fits.
    /// Items that don't fit are skipped, later smaller ones may still be taken.
    pub fn allocate<S: AsRef<str>>(&self, items: &[S], budget: usize) -> Vec<Allocation> {
        let mut remaining = budget;
        let mut allocations = Vec::new();

        for (index, item) in items.iter().enumerate() {
            let tokens = self.counter.count_cached(item.as_ref());
            if tokens <= remaining {
                remaining -= tokens;
                allocations.push(Allocation { index, tokens });
            }
        }

        allocations
    }
}
