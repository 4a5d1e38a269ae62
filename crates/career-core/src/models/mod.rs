mod degradation_event;
mod document;
mod path;
mod query;
mod result;

pub use degradation_event::DegradationEvent;
pub use document::{DocumentChunk, SearchHit, SourceKind, SourceMetadata};
pub use path::{PathHop, PathOutcome, SkillGap, TransitionPath};
pub use query::{EntityType, MatchStrategy, QueryIntent, ResolvedEntity, ResolvedQuery};
pub use result::{GraphFacts, Passage, RetrievalResult, RetrievalStatus};
