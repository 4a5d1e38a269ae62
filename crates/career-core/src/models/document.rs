use serde::{Deserialize, Serialize};

use super::EntityType;

/// What kind of reference document a chunk came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SourceKind {
    Role,
    Skill,
    Path,
    General,
}

/// Provenance of a document chunk.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceMetadata {
    /// Originating document, e.g. `skills/sql.md`.
    pub source: String,
    pub kind: SourceKind,
    /// Role or skill the document is about, if any.
    #[serde(default)]
    pub entity: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
    /// Markdown section header the chunk was split under.
    #[serde(default)]
    pub section: Option<String>,
}

impl SourceMetadata {
    /// Whether this source is about exactly `name` of the given type.
    ///
    /// Path documents count for roles: they describe the role they lead to.
    pub fn names_entity(&self, name: &str, entity_type: EntityType) -> bool {
        let kind_matches = matches!(
            (self.kind, entity_type),
            (SourceKind::Role, EntityType::Role)
                | (SourceKind::Path, EntityType::Role)
                | (SourceKind::Skill, EntityType::Skill)
        );
        kind_matches
            && self
                .entity
                .as_deref()
                .is_some_and(|e| e.eq_ignore_ascii_case(name))
    }
}

/// One ranked hit from the document index.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchHit {
    pub chunk_id: String,
    /// Similarity score; higher is better.
    pub score: f64,
    pub text: String,
    pub source: SourceMetadata,
}

/// An immutable chunk produced by the external embedding pipeline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DocumentChunk {
    pub id: String,
    pub text: String,
    pub embedding: Vec<f32>,
    pub source: SourceMetadata,
    /// blake3 of `text`, used for change detection.
    pub content_hash: String,
}

impl DocumentChunk {
    pub fn new(
        id: impl Into<String>,
        text: impl Into<String>,
        embedding: Vec<f32>,
        source: SourceMetadata,
    ) -> Self {
        let text = text.into();
        let content_hash = Self::compute_content_hash(&text);
        Self {
            id: id.into(),
            text,
            embedding,
            source,
            content_hash,
        }
    }

    pub fn compute_content_hash(text: &str) -> String {
        blake3::hash(text.as_bytes()).to_hex().to_string()
    }

    /// Whether `text` differs from what this chunk was built from.
    pub fn is_stale_for(&self, text: &str) -> bool {
        self.content_hash != Self::compute_content_hash(text)
    }
}
