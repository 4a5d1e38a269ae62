//! Skill differences between consecutive roles.

use std::collections::BTreeSet;

use career_core::models::SkillGap;
use career_core::ontology::RoleProfile;

/// Compare the skills of the current role with those of the next one.
/// All three lists come back sorted.
pub fn from_skill_sets(current: &BTreeSet<String>, next: &BTreeSet<String>) -> SkillGap {
    SkillGap {
        to_learn: next.difference(current).cloned().collect(),
        to_maintain: current.intersection(next).cloned().collect(),
        to_phase_out: current.difference(next).cloned().collect(),
    }
}

/// Skill gap between two role profiles.
pub fn between(current: &RoleProfile, next: &RoleProfile) -> SkillGap {
    let current: BTreeSet<String> = current.skills.iter().cloned().collect();
    let next: BTreeSet<String> = next.skills.iter().cloned().collect();
    from_skill_sets(&current, &next)
}
