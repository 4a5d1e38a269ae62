//! Call counting and fault injection shared by the in-memory adapters.

use std::collections::BTreeMap;
use std::sync::Mutex;
use std::time::Duration;

use career_core::errors::{AdapterError, CareerResult};

/// What an adapter does before answering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Fault {
    #[default]
    None,
    /// Fail every call with `AdapterError::Unavailable`.
    Unavailable,
    /// Sleep before answering. Longer than the configured timeout means a timeout.
    Delay(Duration),
}

/// A runtime-switchable fault.
#[derive(Debug, Default)]
pub struct FaultSwitch {
    fault: Mutex<Fault>,
}

impl FaultSwitch {
    pub fn set(&self, fault: Fault) {
        *self.fault.lock().unwrap() = fault;
    }

    pub fn clear(&self) {
        self.set(Fault::None);
    }

    pub fn current(&self) -> Fault {
        *self.fault.lock().unwrap()
    }

    /// Apply the current fault for one call of `adapter`.
    pub async fn apply(&self, adapter: &str) -> CareerResult<()> {
        match self.current() {
            Fault::None => Ok(()),
            Fault::Unavailable => Err(AdapterError::Unavailable {
                adapter: adapter.to_string(),
                reason: "fault injected".to_string(),
            }
            .into()),
            Fault::Delay(d) => {
                tokio::time::sleep(d).await;
                Ok(())
            }
        }
    }
}

/// Per-operation call counts.
#[derive(Debug, Default)]
pub struct CallCounter {
    counts: Mutex<BTreeMap<String, usize>>,
}

impl CallCounter {
    pub fn record(&self, operation: &str) {
        *self
            .counts
            .lock()
            .unwrap()
            .entry(operation.to_string())
            .or_default() += 1;
    }

    pub fn count(&self, operation: &str) -> usize {
        self.counts
            .lock()
            .unwrap()
            .get(operation)
            .copied()
            .unwrap_or(0)
    }

    pub fn total(&self) -> usize {
        self.counts.lock().unwrap().values().sum()
    }

    /// Copy of all counts, keyed by operation.
    pub fn snapshot(&self) -> BTreeMap<String, usize> {
        self.counts.lock().unwrap().clone()
    }

    pub fn reset(&self) {
        self.counts.lock().unwrap().clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn unavailable_fault_fails_calls() {
        let switch = FaultSwitch::default();
        assert!(switch.apply("graph").await.is_ok());
        switch.set(Fault::Unavailable);
        assert!(switch.apply("graph").await.is_err());
        switch.clear();
        assert!(switch.apply("graph").await.is_ok());
    }

    #[test]
    fn counter_tracks_operations() {
        let counter = CallCounter::default();
        counter.record("search");
        counter.record("search");
        counter.record("embed");
        assert_eq!(counter.count("search"), 2);
        assert_eq!(counter.count("missing"), 0);
        assert_eq!(counter.total(), 3);
        counter.reset();
        assert_eq!(counter.total(), 0);
    }
}
