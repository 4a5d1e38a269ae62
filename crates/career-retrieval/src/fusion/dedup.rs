//! Chunk-level deduplication across sub-query result lists.

use std::collections::HashMap;

use career_core::models::SearchHit;

/// One hit per chunk id, keeping the highest score. First-seen order.
pub fn deduplicate(hits: Vec<SearchHit>) -> Vec<SearchHit> {
    let mut position: HashMap<String, usize> = HashMap::new();
    let mut unique: Vec<SearchHit> = Vec::new();

    for hit in hits {
        match position.get(&hit.chunk_id) {
            Some(&i) => {
                if hit.score > unique[i].score {
                    unique[i] = hit;
                }
            }
            None => {
                position.insert(hit.chunk_id.clone(), unique.len());
                unique.push(hit);
            }
        }
    }
    unique
}
