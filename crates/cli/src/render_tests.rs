use super::*;
use indexmap::IndexMap;
use projects::{
    DraftIssueContent, FieldId, FieldScalar, ItemId, Iteration, LinkedContent, ProjectId,
    ProjectsError, RepositoryRef, SelectOption,
};
use serde_json::json;

fn issue_item() -> Item {
    let mut field_values = IndexMap::new();
    field_values.insert("Status".to_string(), FieldScalar::Text("Todo".to_string()));
    field_values.insert("Points".to_string(), FieldScalar::Number(3.0));
    Item {
        id: ItemId::new("PVTI_1").unwrap(),
        item_type: Some("ISSUE".to_string()),
        content: ItemContent::Issue(LinkedContent {
            id: projects::ContentId::new("I_1").unwrap(),
            number: 4,
            title: "Crash on start".to_string(),
            state: "OPEN".to_string(),
            url: "https://github.com/acme/app/issues/4".to_string(),
            repository: RepositoryRef {
                owner: "acme".to_string(),
                name: "app".to_string(),
            },
        }),
        field_values,
    }
}

#[test]
fn test_projects_listing() {
    let project = Project {
        id: ProjectId::new("P1").unwrap(),
        number: 1,
        title: "Roadmap".to_string(),
        short_description: None,
        url: "https://x".to_string(),
        closed: false,
        public: true,
    };
    assert_eq!(
        projects("acme", &[project]),
        "Projects for acme:\n\n- ID: P1\n  Number: 1\n  Title: Roadmap\n  URL: https://x\n\n"
    );
    assert_eq!(projects("acme", &[]), "No projects found for acme");
}

#[test]
fn test_fields_listing_shows_options_and_iterations() {
    let fields_list = vec![
        Field {
            id: FieldId::new("PVTSSF_1").unwrap(),
            name: "Status".to_string(),
            kind: FieldKind::SingleSelect {
                options: vec![SelectOption {
                    id: "o1".to_string(),
                    name: "Todo".to_string(),
                    color: "GRAY".to_string(),
                    description: String::new(),
                }],
            },
        },
        Field {
            id: FieldId::new("PVTIF_1").unwrap(),
            name: "Sprint".to_string(),
            kind: FieldKind::Iteration {
                iterations: vec![Iteration {
                    id: "it1".to_string(),
                    title: "Sprint 1".to_string(),
                    start_date: "2025-01-01".parse().unwrap(),
                    duration: 14,
                }],
            },
        },
    ];

    let out = fields("acme", 2, &fields_list);

    assert!(out.starts_with("Fields for project #2 in acme:\n\n"));
    assert!(out.contains("  Type: ProjectV2SingleSelectField\n  Options:\n    - Todo (ID: o1)\n"));
    assert!(out.contains("  Iterations:\n    - Sprint 1 (ID: it1, Start: 2025-01-01)\n"));
}

#[test]
fn test_items_listing() {
    let out = items("acme", 1, None, &[issue_item()]);
    assert_eq!(
        out,
        "Items in project #1 for acme:\n\n\
         - Item ID: PVTI_1\n\
         \x20 Type: Issue\n\
         \x20 Number: #4\n\
         \x20 Title: Crash on start\n\
         \x20 State: OPEN\n\
         \x20 URL: https://github.com/acme/app/issues/4\n\
         \x20 Repo: acme/app\n\
         \x20 Field Values:\n\
         \x20   - Status: Todo\n\
         \x20   - Points: 3\n\n"
    );
}

#[test]
fn test_empty_items_mentions_state_filter() {
    let state = ItemStateFilter::new("closed").unwrap();
    assert_eq!(
        items("acme", 1, Some(&state), &[]),
        "No items found in project #1 for acme with state 'CLOSED'"
    );
}

#[test]
fn test_draft_and_unknown_content() {
    let draft = Item {
        id: ItemId::new("PVTI_2").unwrap(),
        item_type: Some("DRAFT_ISSUE".to_string()),
        content: ItemContent::DraftIssue(DraftIssueContent {
            id: "DI_2".to_string(),
            title: "Idea".to_string(),
        }),
        field_values: IndexMap::new(),
    };
    let redacted = Item {
        id: ItemId::new("PVTI_3").unwrap(),
        item_type: Some("REDACTED".to_string()),
        content: ItemContent::Unknown {
            typename: None,
            raw: json!(null),
        },
        field_values: IndexMap::new(),
    };

    let out = items("acme", 1, None, &[draft, redacted]);

    assert!(out.contains("  Type: Draft Issue\n  ID: DI_2\n  Title: Idea\n"));
    assert!(out.contains("  Type: REDACTED\n  Content: null\n"));
    assert!(!out.contains("Field Values"));
}

#[test]
fn test_search_listing() {
    let out = search(1, "crash", &[issue_item()]);
    assert!(out.starts_with("Found items in project #1 matching 'crash':\n\n"));
    assert!(out.contains("  Type: Issue #4 (acme/app)\n"));
    assert_eq!(
        search(1, "crash", &[]),
        "No items found in project #1 matching query: 'crash'"
    );
}

#[test]
fn test_mutation_confirmations() {
    assert_eq!(
        deleted_item(3, "PVTI_1"),
        "Successfully deleted item from project #3!\nDeleted Item ID: PVTI_1"
    );
    assert_eq!(
        field_update(3, "PVTI_1", "PVTNU_123", "42"),
        "Successfully updated field for item in project #3!\nItem ID: PVTI_1\nField ID: PVTNU_123\nValue Set: 42"
    );
    let added = AddedItem {
        id: ItemId::new("PVTI_7").unwrap(),
        content_title: Some("Bug".to_string()),
        content_number: Some(7),
    };
    assert_eq!(
        added_issue(3, "acme", "app", 7, &added),
        "Successfully added issue acme/app#7 to project #3!\nItem ID: PVTI_7"
    );
}

#[test]
fn test_failure_line() {
    let err = ProjectsError::NotFound {
        entity: "owner ghost".to_string(),
    };
    assert_eq!(
        failure("Could not list projects for ghost", &err),
        "Error: Could not list projects for ghost. Details: owner ghost not found"
    );
}
