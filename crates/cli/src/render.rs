//! Plain-text rendering of engine results.

use std::fmt::Write;

use projects::{
    AddedItem, CreatedIssue, Field, FieldKind, Item, ItemContent, ItemStateFilter, Project,
    UpdatedProject,
};

/// Project listing, one block per project.
pub fn projects(owner: &str, projects: &[Project]) -> String {
    if projects.is_empty() {
        return format!("No projects found for {owner}");
    }
    let mut out = format!("Projects for {owner}:\n\n");
    for project in projects {
        let _ = writeln!(out, "- ID: {}", project.id);
        let _ = writeln!(out, "  Number: {}", project.number);
        let _ = writeln!(out, "  Title: {}", project.title);
        let _ = writeln!(out, "  URL: {}", project.url);
        if project.closed {
            out.push_str("  Closed: true\n");
        }
        out.push('\n');
    }
    out
}

/// Field definitions with their options or iterations.
pub fn fields(owner: &str, number: u32, fields: &[Field]) -> String {
    if fields.is_empty() {
        return format!("No fields found for project #{number} in {owner}");
    }
    let mut out = format!("Fields for project #{number} in {owner}:\n\n");
    for field in fields {
        let _ = writeln!(out, "- ID: {}", field.id);
        let _ = writeln!(out, "  Name: {}", field.name);
        let _ = writeln!(out, "  Type: {}", field.typename());
        match &field.kind {
            FieldKind::SingleSelect { options } if !options.is_empty() => {
                out.push_str("  Options:\n");
                for option in options {
                    let _ = writeln!(out, "    - {} (ID: {})", option.name, option.id);
                }
            }
            FieldKind::Iteration { iterations } if !iterations.is_empty() => {
                out.push_str("  Iterations:\n");
                for iteration in iterations {
                    let _ = writeln!(
                        out,
                        "    - {} (ID: {}, Start: {})",
                        iteration.title, iteration.id, iteration.start_date
                    );
                }
            }
            _ => {}
        }
        out.push('\n');
    }
    out
}

/// Item listing. Mentions the state filter when one was applied.
pub fn items(owner: &str, number: u32, state: Option<&ItemStateFilter>, items: &[Item]) -> String {
    if items.is_empty() {
        let state = state
            .map(|s| format!(" with state '{s}'"))
            .unwrap_or_default();
        return format!("No items found in project #{number} for {owner}{state}");
    }
    let state = state.map(|s| format!(" (State: {s})")).unwrap_or_default();
    let mut out = format!("Items in project #{number} for {owner}{state}:\n\n");
    for item in items {
        let _ = writeln!(out, "- Item ID: {}", item.id);
        match &item.content {
            ItemContent::Issue(c) | ItemContent::PullRequest(c) => {
                let kind = if matches!(item.content, ItemContent::Issue(_)) {
                    "Issue"
                } else {
                    "Pull Request"
                };
                let _ = writeln!(out, "  Type: {kind}");
                let _ = writeln!(out, "  Number: #{}", c.number);
                let _ = writeln!(out, "  Title: {}", c.title);
                let _ = writeln!(out, "  State: {}", c.state);
                let _ = writeln!(out, "  URL: {}", c.url);
                let _ = writeln!(out, "  Repo: {}", c.repository);
            }
            ItemContent::DraftIssue(d) => {
                out.push_str("  Type: Draft Issue\n");
                let _ = writeln!(out, "  ID: {}", d.id);
                let _ = writeln!(out, "  Title: {}", d.title);
            }
            ItemContent::Unknown { .. } => unknown_content(&mut out, item),
        }
        field_values(&mut out, item);
        out.push('\n');
    }
    out
}

/// Search matches. Only issues and pull requests can appear.
pub fn search(number: u32, query: &str, items: &[Item]) -> String {
    if items.is_empty() {
        return format!("No items found in project #{number} matching query: '{query}'");
    }
    let mut out = format!("Found items in project #{number} matching '{query}':\n\n");
    for item in items {
        let _ = writeln!(out, "- Item ID: {}", item.id);
        match &item.content {
            ItemContent::Issue(c) | ItemContent::PullRequest(c) => {
                let kind = if matches!(item.content, ItemContent::Issue(_)) {
                    "Issue"
                } else {
                    "PR"
                };
                let _ = writeln!(out, "  Type: {kind} #{} ({})", c.number, c.repository);
                let _ = writeln!(out, "  Title: {}", c.title);
                let _ = writeln!(out, "  State: {}", c.state);
                let _ = writeln!(out, "  URL: {}", c.url);
            }
            _ => unknown_content(&mut out, item),
        }
        field_values(&mut out, item);
        out.push('\n');
    }
    out
}

fn unknown_content(out: &mut String, item: &Item) {
    let (typename, raw) = match &item.content {
        ItemContent::Unknown { typename, raw } => (typename.as_deref(), raw.clone()),
        other => (None, serde_json::to_value(other).unwrap_or_default()),
    };
    let kind = typename
        .or(item.item_type.as_deref())
        .unwrap_or("Unknown");
    let _ = writeln!(out, "  Type: {kind}");
    let _ = writeln!(out, "  Content: {raw}");
}

fn field_values(out: &mut String, item: &Item) {
    if item.field_values.is_empty() {
        return;
    }
    out.push_str("  Field Values:\n");
    for (name, value) in &item.field_values {
        let _ = writeln!(out, "    - {name}: {value}");
    }
}

/// Confirmation for a new issue.
pub fn created_issue(owner: &str, repo: &str, issue: &CreatedIssue) -> String {
    format!(
        "Issue created successfully!\n\n\
         Repository: {owner}/{repo}\n\
         Issue Number: #{}\n\
         Title: {}\n\
         URL: {}\n",
        issue.number, issue.title, issue.url
    )
}

/// Confirmation for an issue added to a project.
pub fn added_issue(
    number: u32,
    issue_owner: &str,
    issue_repo: &str,
    issue_number: u64,
    added: &AddedItem,
) -> String {
    format!(
        "Successfully added issue {issue_owner}/{issue_repo}#{issue_number} to project #{number}!\n\
         Item ID: {}",
        added.id
    )
}

/// Confirmation for a new draft issue.
pub fn draft_issue(number: u32, item_id: &str, title: &str) -> String {
    format!(
        "Successfully created draft issue in project #{number}!\n\
         Item ID: {item_id}\n\
         Title: {title}"
    )
}

/// Confirmation for a field update, echoing the value as typed.
pub fn field_update(number: u32, item_id: &str, field_id: &str, raw_value: &str) -> String {
    format!(
        "Successfully updated field for item in project #{number}!\n\
         Item ID: {item_id}\n\
         Field ID: {field_id}\n\
         Value Set: {raw_value}"
    )
}

/// Confirmation for a removed item.
pub fn deleted_item(number: u32, item_id: &str) -> String {
    format!(
        "Successfully deleted item from project #{number}!\n\
         Deleted Item ID: {item_id}"
    )
}

/// The project settings after an update.
pub fn updated_project(project: &UpdatedProject) -> String {
    let mut out = format!(
        "Project updated successfully!\n\n\
         ID: {}\n\
         Title: {}\n",
        project.id, project.title
    );
    if let Some(description) = &project.short_description {
        let _ = writeln!(out, "Description: {description}");
    }
    let _ = writeln!(out, "Public: {}", project.public);
    let _ = writeln!(out, "URL: {}", project.url);
    out
}

/// The single line printed when a command fails.
pub fn failure(summary: &str, err: &dyn std::fmt::Display) -> String {
    format!("Error: {summary}. Details: {err}")
}

#[cfg(test)]
#[path = "render_tests.rs"]
mod tests;
