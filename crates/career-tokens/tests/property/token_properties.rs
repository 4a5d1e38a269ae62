use career_tokens::{TokenBudget, TokenCounter};
use proptest::prelude::*;

proptest! {
    #[test]
    fn cached_equals_uncached(s in ".{0,200}") {
        let counter = TokenCounter::new(64).unwrap();
        prop_assert_eq!(counter.count(&s), counter.count_cached(&s));
    }

    #[test]
    fn subadditivity(a in ".{0,100}", b in ".{0,100}") {
        let counter = TokenCounter::new(64).unwrap();
        let combined = format!("{}{}", a, b);
        prop_assert!(
            counter.count(&combined) <= counter.count(&a) + counter.count(&b) + 1
        );
    }

    #[test]
    fn allocation_never_exceeds_budget(
        items in prop::collection::vec("[a-z ]{0,60}", 0..12),
        budget in 0usize..80,
    ) {
        let counter = TokenCounter::new(64).unwrap();
        let allocations = TokenBudget::new(&counter).allocate(&items, budget);
        let used: usize = allocations.iter().map(|a| a.tokens).sum();
        prop_assert!(used <= budget);
        // Indices stay in input order.
        prop_assert!(allocations.windows(2).all(|w| w[0].index < w[1].index));
    }
}
