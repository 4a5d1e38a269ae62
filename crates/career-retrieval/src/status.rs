//! OK / DEGRADED / unavailable, decided per adapter class.

use career_core::errors::{CareerError, CareerResult};
use career_core::guard::AdapterClass;
use career_core::models::{DegradationEvent, RetrievalStatus};

use crate::search::CallRecord;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ClassTally {
    pub successes: usize,
    pub failures: usize,
}

impl ClassTally {
    pub fn called(&self) -> bool {
        self.successes + self.failures > 0
    }

    /// Called, and not a single call succeeded.
    pub fn failed_entirely(&self) -> bool {
        self.called() && self.successes == 0
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StatusTally {
    pub graph: ClassTally,
    pub documents: ClassTally,
}

impl StatusTally {
    pub fn from_records(records: &[CallRecord]) -> Self {
        let mut tally = Self::default();
        for record in records {
            let class = match record.class {
                AdapterClass::Graph => &mut tally.graph,
                AdapterClass::Documents => &mut tally.documents,
            };
            if record.is_ok() {
                class.successes += 1;
            } else {
                class.failures += 1;
            }
        }
        tally
    }

    pub fn class(&self, class: AdapterClass) -> ClassTally {
        match class {
            AdapterClass::Graph => self.graph,
            AdapterClass::Documents => self.documents,
        }
    }

    /// OK when no called class failed entirely, DEGRADED when one did but
    /// something else succeeded, unavailable when nothing succeeded.
    pub fn decide(&self, retry_after_ms: u64) -> CareerResult<RetrievalStatus> {
        let successes = self.graph.successes + self.documents.successes;
        let failures = self.graph.failures + self.documents.failures;

        if successes == 0 && failures > 0 {
            return Err(CareerError::RetrievalUnavailable {
                failures,
                retry_after_ms,
            });
        }
        if self.graph.failed_entirely() || self.documents.failed_entirely() {
            Ok(RetrievalStatus::Degraded)
        } else {
            Ok(RetrievalStatus::Ok)
        }
    }
}

/// One event per failed call, naming what the answer fell back to.
pub fn degradation_events(records: &[CallRecord], tally: &StatusTally) -> Vec<DegradationEvent> {
    records
        .iter()
        .filter_map(|record| {
            let failure = record.failure.as_ref()?;
            let other = match record.class {
                AdapterClass::Graph => AdapterClass::Documents,
                AdapterClass::Documents => AdapterClass::Graph,
            };
            let fallback = if tally.class(record.class).successes > 0 {
                format!("remaining {} results", record.class.as_str())
            } else if tally.class(other).successes > 0 {
                format!("{} results only", other.as_str())
            } else {
                "none".to_string()
            };
            Some(DegradationEvent::new(
                record.class.as_str(),
                format!("{} for {:?}: {}", record.operation, record.subject, failure),
                fallback,
            ))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ok(class: AdapterClass) -> CallRecord {
        CallRecord::ok(class, "op", "x")
    }

    fn failed(class: AdapterClass) -> CallRecord {
        CallRecord {
            failure: Some("down".into()),
            ..ok(class)
        }
    }

    #[test]
    fn partial_failure_within_a_class_is_ok() {
        let records = [
            ok(AdapterClass::Documents),
            failed(AdapterClass::Documents),
            ok(AdapterClass::Graph),
        ];
        let tally = StatusTally::from_records(&records);
        assert_eq!(tally.decide(100).unwrap(), RetrievalStatus::Ok);
        let events = degradation_events(&records, &tally);
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].fallback_used, "remaining documents results");
    }

    #[test]
    fn whole_class_down_is_degraded() {
        let records = [failed(AdapterClass::Documents), ok(AdapterClass::Graph)];
        let tally = StatusTally::from_records(&records);
        assert_eq!(tally.decide(100).unwrap(), RetrievalStatus::Degraded);
        let events = degradation_events(&records, &tally);
        assert_eq!(events[0].component, "documents");
        assert_eq!(events[0].fallback_used, "graph results only");
    }

    #[test]
    fn nothing_succeeded_is_unavailable() {
        let records = [failed(AdapterClass::Documents), failed(AdapterClass::Graph)];
        let err = StatusTally::from_records(&records).decide(250).unwrap_err();
        assert_eq!(err.retry_after_ms(), Some(250));
        match err {
            CareerError::RetrievalUnavailable { failures, .. } => assert_eq!(failures, 2),
            other => panic!("unexpected {other}"),
        }
    }

    #[test]
    fn uncalled_class_does_not_degrade() {
        let records = [ok(AdapterClass::Documents)];
        let tally = StatusTally::from_records(&records);
        assert!(!tally.graph.called());
        assert_eq!(tally.decide(100).unwrap(), RetrievalStatus::Ok);
    }
}
