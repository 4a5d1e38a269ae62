use async_trait::async_trait;

use crate::errors::CareerResult;
use crate::ontology::{RoleProfile, SkillProfile, Transition};

/// Read-only query surface over the externally owned role ontology.
///
/// Staleness is only observed through the graph generation stamp.
#[async_trait]
pub trait IOntologyGraph: Send + Sync {
    /// Everything the role points at. `None` if the role is unknown.
    async fn role_profile(&self, name: &str) -> CareerResult<Option<RoleProfile>>;

    /// Outgoing `LEADS_TO` edges of a role. Empty for unknown roles.
    async fn outgoing_transitions(&self, name: &str) -> CareerResult<Vec<Transition>>;

    /// Roles that require a skill. `None` if the skill is unknown.
    async fn skill_profile(&self, name: &str) -> CareerResult<Option<SkillProfile>>;

    /// All role names.
    async fn role_names(&self) -> CareerResult<Vec<String>>;

    /// All skill names.
    async fn skill_names(&self) -> CareerResult<Vec<String>>;

    /// Human-readable adapter name.
    fn name(&self) -> &str;
}
