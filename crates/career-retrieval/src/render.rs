//! Plain-text context for a downstream answer generator.

use career_core::models::{PathOutcome, RetrievalResult, TransitionPath};

/// One path with its per-hop skill changes. Also the unit the context
/// budget charges for a path.
pub fn path_block(path: &TransitionPath) -> String {
    let mut out = format!("{} (score {:.2})", path.display(), path.score);
    for hop in &path.hops {
        out.push_str(&format!("\n  {} -> {}:", hop.from, hop.to));
        if !hop.gap.to_learn.is_empty() {
            out.push_str(&format!(" learn {};", hop.gap.to_learn.join(", ")));
        }
        if !hop.gap.to_maintain.is_empty() {
            out.push_str(&format!(" keep {};", hop.gap.to_maintain.join(", ")));
        }
        if !hop.gap.to_phase_out.is_empty() {
            out.push_str(&format!(" less focus on {};", hop.gap.to_phase_out.join(", ")));
        }
    }
    out
}

fn graph_context(result: &RetrievalResult) -> String {
    let mut lines: Vec<String> = Vec::new();

    if !result.facts.roles.is_empty() {
        lines.push("Role Information:".to_string());
        for role in &result.facts.roles {
            lines.push(format!("Role: {}", role.name));
            if !role.levels.is_empty() {
                lines.push(format!("Levels: {}", role.levels.join(", ")));
            }
            if !role.skills.is_empty() {
                lines.push(format!("Skills: {}", role.skills.join(", ")));
            }
            if !role.responsibilities.is_empty() {
                lines.push(format!("Responsibilities: {}", role.responsibilities.join("; ")));
            }
        }
    }

    if !result.facts.skills.is_empty() {
        lines.push("Skill Information:".to_string());
        for skill in &result.facts.skills {
            if skill.required_by_roles.is_empty() {
                lines.push(format!("Skill: {}", skill.name));
            } else {
                lines.push(format!(
                    "Skill: {} (required by {})",
                    skill.name,
                    skill.required_by_roles.join(", ")
                ));
            }
        }
    }

    match &result.paths {
        PathOutcome::Found { paths } => {
            lines.push("Transition Paths:".to_string());
            for (i, path) in paths.iter().enumerate() {
                lines.push(format!("{}. {}", i + 1, path_block(path)));
            }
        }
        PathOutcome::NoPath {
            source,
            target,
            max_depth,
        } => {
            let from = source
                .as_deref()
                .map(|s| format!(" from {s}"))
                .unwrap_or_default();
            lines.push(format!(
                "No transition path{from} to {target} within {max_depth} steps."
            ));
        }
        PathOutcome::Unavailable => {
            lines.push("Transition paths are unavailable right now.".to_string());
        }
        PathOutcome::NotRequested => {}
    }

    if lines.is_empty() {
        "No specific roles or skills mentioned in the query.".to_string()
    } else {
        lines.join("\n")
    }
}

fn document_context(result: &RetrievalResult) -> String {
    let mut parts: Vec<String> = Vec::new();
    for passage in &result.passages {
        parts.push(format!("From {}", passage.source.source));
        if let Some(section) = &passage.source.section {
            parts.push(format!("Section: {section}"));
        }
        parts.push(passage.text.clone());
        parts.push("---".to_string());
    }
    parts.join("\n")
}

/// Graph context followed by document context.
pub fn render_context(result: &RetrievalResult) -> String {
    format!(
        "Context from the career graph:\n{}\n\nContext from documents:\n{}",
        graph_context(result),
        document_context(result)
    )
}
