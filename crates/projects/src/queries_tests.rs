use super::*;
use yare::parameterized;

#[parameterized(
    owner_type = { GET_OWNER_TYPE },
    org_projects = { GET_ORG_PROJECTS },
    user_projects = { GET_USER_PROJECTS },
    project_id = { GET_PROJECT_ID },
    fields = { GET_PROJECT_FIELDS },
    items = { GET_PROJECT_ITEMS },
    search = { SEARCH_PROJECT_ITEMS },
    repository_id = { GET_REPOSITORY_ID },
    issue_id = { GET_ISSUE_ID },
    create_issue = { CREATE_ISSUE },
    add_item = { ADD_ITEM_TO_PROJECT },
    add_draft = { ADD_DRAFT_ISSUE },
    update_field = { UPDATE_ITEM_FIELD },
    delete_item = { DELETE_ITEM },
    update_project = { UPDATE_PROJECT },
)]
fn test_document_declares_its_operation_name(operation: Operation) {
    let declared = operation
        .text
        .split_whitespace()
        .nth(1)
        .and_then(|head| head.split('(').next())
        .unwrap();
    assert_eq!(declared, operation.name);
}

#[test]
fn test_fixed_page_sizes_match_documents() {
    assert!(GET_PROJECT_FIELDS
        .text
        .contains(&format!("fields(first: {FIELDS_PAGE_SIZE})")));
    let field_values = format!("fieldValues(first: {FIELD_VALUES_PAGE_SIZE})");
    assert!(GET_PROJECT_ITEMS.text.contains(&field_values));
    assert!(SEARCH_PROJECT_ITEMS.text.contains(&field_values));
}

#[test]
fn test_item_listing_selects_every_content_variant() {
    for fragment in ["... on Issue", "... on PullRequest", "... on DraftIssue"] {
        assert!(GET_PROJECT_ITEMS.text.contains(fragment), "{fragment}");
    }
}
