//! Role and skill names the resolver can match, plus the alias table.

use std::collections::BTreeMap;
use std::time::Duration;

use tracing::{debug, warn};

use career_core::errors::CareerResult;
use career_core::guard::{guarded, AdapterClass};
use career_core::models::EntityType;
use career_core::traits::IOntologyGraph;

use super::normalize::{normalize, tokens};

/// Roles known without consulting the ontology.
pub const DEFAULT_ROLES: &[&str] = &[
    "BI Engineer",
    "Data Engineer",
    "Data Analyst",
    "Machine Learning Engineer",
];

/// Skills known without consulting the ontology.
pub const DEFAULT_SKILLS: &[&str] = &[
    "Python",
    "SQL",
    "Power BI",
    "Tableau",
    "Data Warehousing",
    "ETL Processes",
    "Statistics",
    "Machine Learning",
    "Deep Learning",
    "MLOps",
    "Cloud Platforms",
];

/// Built-in synonyms: alias phrase → canonical name.
pub const DEFAULT_ALIASES: &[(&str, &str)] = &[
    ("ml engineer", "Machine Learning Engineer"),
    ("mle", "Machine Learning Engineer"),
    ("machine learning developer", "Machine Learning Engineer"),
    ("business intelligence engineer", "BI Engineer"),
    ("bi developer", "BI Engineer"),
    ("data analytics", "Data Analyst"),
    ("analyst", "Data Analyst"),
    ("etl", "ETL Processes"),
    ("etl pipelines", "ETL Processes"),
    ("powerbi", "Power BI"),
    ("stats", "Statistics"),
    ("ml", "Machine Learning"),
    ("dl", "Deep Learning"),
    ("cloud", "Cloud Platforms"),
    ("aws", "Cloud Platforms"),
    ("data warehouse", "Data Warehousing"),
    ("postgres", "SQL"),
];

/// A canonical name and the normalized tokens that spell it.
#[derive(Debug, Clone, PartialEq)]
pub struct Term {
    pub name: String,
    pub entity_type: EntityType,
    pub tokens: Vec<String>,
}

impl Term {
    fn new(name: &str, entity_type: EntityType, spelling: &str) -> Option<Self> {
        let normalized = normalize(spelling);
        let tokens: Vec<String> = tokens(&normalized).into_iter().map(str::to_string).collect();
        if tokens.is_empty() {
            return None;
        }
        Some(Self {
            name: name.to_string(),
            entity_type,
            tokens,
        })
    }

    /// Normalized spelling, tokens joined by single spaces.
    pub fn text(&self) -> String {
        self.tokens.join(" ")
    }

    pub fn char_len(&self) -> usize {
        self.tokens.iter().map(|t| t.chars().count()).sum::<usize>() + self.tokens.len() - 1
    }
}

/// Immutable snapshot of matchable names. Rebuilt, never mutated.
#[derive(Debug, Clone, Default)]
pub struct Vocabulary {
    terms: Vec<Term>,
    aliases: Vec<Term>,
}

impl Vocabulary {
    /// Build from role and skill names plus `(alias, canonical)` pairs.
    ///
    /// Aliases whose canonical name is not in the vocabulary are dropped.
    pub fn new<R, S, A>(roles: R, skills: S, aliases: A) -> Self
    where
        R: IntoIterator,
        R::Item: AsRef<str>,
        S: IntoIterator,
        S::Item: AsRef<str>,
        A: IntoIterator<Item = (String, String)>,
    {
        let mut terms: Vec<Term> = Vec::new();
        for role in roles {
            terms.extend(Term::new(role.as_ref(), EntityType::Role, role.as_ref()));
        }
        for skill in skills {
            terms.extend(Term::new(skill.as_ref(), EntityType::Skill, skill.as_ref()));
        }
        terms.sort_by(|a, b| (a.entity_type, &a.name).cmp(&(b.entity_type, &b.name)));
        terms.dedup_by(|a, b| a.entity_type == b.entity_type && a.name == b.name);

        // Later aliases override earlier ones with the same spelling.
        let mut by_spelling: BTreeMap<String, Term> = BTreeMap::new();
        for (alias, canonical) in aliases {
            let Some(target) = terms.iter().find(|t| t.name.eq_ignore_ascii_case(&canonical)) else {
                warn!(alias = %alias, canonical = %canonical, "alias target not in vocabulary, dropped");
                continue;
            };
            if let Some(term) = Term::new(&target.name, target.entity_type, &alias) {
                by_spelling.insert(term.text(), term);
            }
        }

        Self {
            terms,
            aliases: by_spelling.into_values().collect(),
        }
    }

    /// Built-in roles, skills and aliases, with `extra` aliases merged over them.
    pub fn seed(extra: &BTreeMap<String, String>) -> Self {
        Self::new(
            DEFAULT_ROLES.iter().copied(),
            DEFAULT_SKILLS.iter().copied(),
            Self::merged_aliases(extra),
        )
    }

    /// Rebuild from the ontology adapter's current role and skill names.
    pub async fn load(
        graph: &dyn IOntologyGraph,
        extra: &BTreeMap<String, String>,
        timeout: Duration,
    ) -> CareerResult<Self> {
        let (roles, skills) = tokio::try_join!(
            guarded(AdapterClass::Graph, "role_names", timeout, graph.role_names()),
            guarded(AdapterClass::Graph, "skill_names", timeout, graph.skill_names()),
        )?;
        debug!(roles = roles.len(), skills = skills.len(), "vocabulary loaded from graph");
        Ok(Self::new(roles, skills, Self::merged_aliases(extra)))
    }

    fn merged_aliases(extra: &BTreeMap<String, String>) -> Vec<(String, String)> {
        DEFAULT_ALIASES
            .iter()
            .map(|(a, c)| (a.to_string(), c.to_string()))
            .chain(extra.iter().map(|(a, c)| (a.clone(), c.clone())))
            .collect()
    }

    pub fn terms(&self) -> &[Term] {
        &self.terms
    }

    pub fn aliases(&self) -> &[Term] {
        &self.aliases
    }

    pub fn role_count(&self) -> usize {
        self.terms
            .iter()
            .filter(|t| t.entity_type == EntityType::Role)
            .count()
    }

    pub fn skill_count(&self) -> usize {
        self.terms.len() - self.role_count()
    }

    /// Canonical term for a name, case-insensitively.
    pub fn lookup(&self, name: &str) -> Option<&Term> {
        let wanted = normalize(name);
        self.terms.iter().find(|t| t.text() == wanted)
    }
}
