//! Context budget: the best path is reserved first, then passages in rank
//! order, then further paths with whatever remains.

use career_core::models::{Passage, PathOutcome, TransitionPath};
use career_tokens::{TokenBudget, TokenCounter};

use crate::render;

#[derive(Debug, Clone)]
pub struct Packed {
    pub passages: Vec<Passage>,
    pub paths: PathOutcome,
    pub tokens_used: usize,
    /// Whether anything was dropped.
    pub truncated: bool,
}

pub fn pack(
    counter: &TokenCounter,
    passages: Vec<Passage>,
    paths: PathOutcome,
    budget: usize,
) -> Packed {
    let allocator = TokenBudget::new(counter);
    let mut used = 0usize;
    let mut truncated = false;

    let (top, further) = match paths {
        PathOutcome::Found { paths } => {
            let mut it = paths.into_iter();
            (it.next(), it.collect::<Vec<TransitionPath>>())
        }
        other => {
            // Nothing to reserve; passages get the whole budget.
            return pack_passages(&allocator, passages, other, budget);
        }
    };

    // The best path is always kept, even if it alone exceeds the budget.
    if let Some(top) = &top {
        used += counter.count_cached(&render::path_block(top));
    }

    let texts: Vec<&str> = passages.iter().map(|p| p.text.as_str()).collect();
    let allocations = allocator.allocate(&texts, TokenBudget::remaining(budget, used));
    truncated |= allocations.len() < passages.len();
    let kept_passages = take(passages, &allocations);
    used += allocations.iter().map(|a| a.tokens).sum::<usize>();

    let blocks: Vec<String> = further.iter().map(render::path_block).collect();
    let path_allocations = allocator.allocate(&blocks, TokenBudget::remaining(budget, used));
    truncated |= path_allocations.len() < further.len();
    used += path_allocations.iter().map(|a| a.tokens).sum::<usize>();

    let mut kept_paths: Vec<TransitionPath> = top.into_iter().collect();
    let mut further: Vec<Option<TransitionPath>> = further.into_iter().map(Some).collect();
    for a in &path_allocations {
        if let Some(path) = further[a.index].take() {
            kept_paths.push(path);
        }
    }

    Packed {
        passages: kept_passages,
        paths: PathOutcome::Found { paths: kept_paths },
        tokens_used: used,
        truncated,
    }
}

fn pack_passages(
    allocator: &TokenBudget<'_>,
    passages: Vec<Passage>,
    paths: PathOutcome,
    budget: usize,
) -> Packed {
    let texts: Vec<&str> = passages.iter().map(|p| p.text.as_str()).collect();
    let allocations = allocator.allocate(&texts, budget);
    let truncated = allocations.len() < passages.len();
    let tokens_used = allocations.iter().map(|a| a.tokens).sum();
    Packed {
        passages: take(passages, &allocations),
        paths,
        tokens_used,
        truncated,
    }
}

/// Keep the allocated passages, in order, with their token cost.
fn take(passages: Vec<Passage>, allocations: &[career_tokens::Allocation]) -> Vec<Passage> {
    let mut slots: Vec<Option<Passage>> = passages.into_iter().map(Some).collect();
    allocations
        .iter()
        .filter_map(|a| {
            slots[a.index].take().map(|mut p| {
                p.tokens = a.tokens;
                p
            })
        })
        .collect()
}
