//! The three concurrent branches of a build: path search, document search,
//! graph facts. Each reports one `CallRecord` per adapter call it made.

pub mod documents;
pub mod facts;
pub mod paths;

use career_core::errors::CareerError;
use career_core::guard::AdapterClass;

/// Outcome of one guarded adapter call, for status and degradation accounting.
#[derive(Debug, Clone, PartialEq)]
pub struct CallRecord {
    pub class: AdapterClass,
    pub operation: &'static str,
    /// What the call was about: an entity name or the query text.
    pub subject: String,
    pub failure: Option<String>,
}

impl CallRecord {
    pub fn ok(class: AdapterClass, operation: &'static str, subject: &str) -> Self {
        Self {
            class,
            operation,
            subject: subject.to_string(),
            failure: None,
        }
    }

    pub fn failed(
        class: AdapterClass,
        operation: &'static str,
        subject: &str,
        error: &CareerError,
    ) -> Self {
        Self {
            class,
            operation,
            subject: subject.to_string(),
            failure: Some(error.to_string()),
        }
    }

    pub fn is_ok(&self) -> bool {
        self.failure.is_none()
    }
}
