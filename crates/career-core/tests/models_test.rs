use career_core::models::*;
use career_core::ontology::{EdgeType, EntityKind, RoleProfile};

fn bi_engineer() -> RoleProfile {
    RoleProfile {
        name: "BI Engineer".into(),
        levels: vec!["Junior".into(), "Senior".into()],
        skills: vec!["SQL".into(), "Power BI".into()],
        ..Default::default()
    }
}

#[test]
fn edge_type_labels_roundtrip() {
    for edge in EdgeType::ALL {
        assert_eq!(EdgeType::from_str_name(edge.as_str()), Some(edge));
    }
    assert_eq!(EdgeType::LeadsTo.target_kind(), EntityKind::Role);
    assert_eq!(EdgeType::RequiresSkill.target_kind(), EntityKind::Skill);
}

#[test]
fn role_profile_answers_skill_and_level_questions() {
    let role = bi_engineer();
    assert!(role.requires_skill("sql"));
    assert!(!role.requires_skill("Python"));
    assert!(role.has_level("Senior"));
    assert!(!role.has_level("Principal"));
    assert_eq!(role.targets(EdgeType::RequiresSkill).len(), 2);
    assert!(role.targets(EdgeType::LeadsTo).is_empty());
}

#[test]
fn graph_facts_lookup_is_case_insensitive() {
    let facts = GraphFacts {
        roles: vec![bi_engineer()],
        skills: Vec::new(),
    };
    assert!(facts.role_requires_skill("bi engineer", "SQL"));
    assert!(!facts.role_requires_skill("Data Engineer", "SQL"));
}

#[test]
fn source_metadata_matches_entity_by_kind() {
    let sql_doc = SourceMetadata {
        source: "skills/sql.md".into(),
        kind: SourceKind::Skill,
        entity: Some("SQL".into()),
        title: None,
        section: None,
    };
    assert!(sql_doc.names_entity("sql", EntityType::Skill));
    assert!(!sql_doc.names_entity("SQL", EntityType::Role));

    let path_doc = SourceMetadata {
        source: "paths/data_engineer.md".into(),
        kind: SourceKind::Path,
        entity: Some("Data Engineer".into()),
        title: None,
        section: None,
    };
    assert!(path_doc.names_entity("Data Engineer", EntityType::Role));
}

#[test]
fn chunk_content_hash_detects_changes() {
    let source = SourceMetadata {
        source: "roles/bi_engineer.md".into(),
        kind: SourceKind::Role,
        entity: Some("BI Engineer".into()),
        title: None,
        section: None,
    };
    let chunk = DocumentChunk::new("c1", "BI Engineers build dashboards.", vec![0.1], source);
    assert!(!chunk.is_stale_for("BI Engineers build dashboards."));
    assert!(chunk.is_stale_for("BI Engineers build reports."));
}

#[test]
fn intent_serializes_in_screaming_case() {
    let json = serde_json::to_string(&QueryIntent::TransitionPath).unwrap();
    assert_eq!(json, "\"TRANSITION_PATH\"");
    assert!(QueryIntent::LearningPlan.wants_path());
    assert!(!QueryIntent::SkillInfo.wants_path());
}

#[test]
fn path_outcome_serializes_with_tag() {
    let outcome = PathOutcome::NoPath {
        source: Some("Data Analyst".into()),
        target: "Machine Learning Engineer".into(),
        max_depth: 3,
    };
    let json = serde_json::to_value(&outcome).unwrap();
    assert_eq!(json["outcome"], "NO_PATH");
    assert!(outcome.is_no_path());
    assert!(outcome.paths().is_empty());
}

#[test]
fn entity_keys_are_sorted_and_deduplicated() {
    let entity = |name: &str, entity_type| ResolvedEntity {
        name: name.into(),
        entity_type,
        confidence: 1.0,
        strategy: MatchStrategy::Exact,
        span: (0, 1),
    };
    let query = ResolvedQuery {
        raw: String::new(),
        normalized: String::new(),
        entities: vec![
            entity("SQL", EntityType::Skill),
            entity("BI Engineer", EntityType::Role),
            entity("SQL", EntityType::Skill),
        ],
        intent: QueryIntent::SkillInfo,
        source_role: None,
        target_role: None,
    };
    assert_eq!(
        query.entity_keys(),
        vec![
            (EntityType::Role, "BI Engineer".to_string()),
            (EntityType::Skill, "SQL".to_string()),
        ]
    );
}
