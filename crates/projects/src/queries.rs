//! Fixed GraphQL documents issued by the engine.
//!
//! Page sizes are part of the documents where they are fixed
//! ([`PROJECTS_PAGE_SIZE`], [`FIELDS_PAGE_SIZE`], [`FIELD_VALUES_PAGE_SIZE`],
//! [`SEARCH_PAGE_SIZE`]); item listings take `$first` from the caller.

use crate::transport::Operation;

/// Projects fetched per owner.
pub const PROJECTS_PAGE_SIZE: u32 = 50;

/// Field definitions fetched per project.
pub const FIELDS_PAGE_SIZE: u32 = 50;

/// Field values fetched per item.
pub const FIELD_VALUES_PAGE_SIZE: u32 = 20;

/// Search results scanned per search.
pub const SEARCH_PAGE_SIZE: u32 = 50;

// Selection shared by item listing and search: field values of one item.
macro_rules! field_values_selection {
    () => {
        r#"
        fieldValues(first: 20) {
          nodes {
            ... on ProjectV2ItemFieldTextValue {
              __typename
              text
              field { ... on ProjectV2FieldCommon { name } }
            }
            ... on ProjectV2ItemFieldDateValue {
              __typename
              date
              field { ... on ProjectV2FieldCommon { name } }
            }
            ... on ProjectV2ItemFieldSingleSelectValue {
              __typename
              name
              field { ... on ProjectV2FieldCommon { name } }
            }
            ... on ProjectV2ItemFieldNumberValue {
              __typename
              number
              field { ... on ProjectV2FieldCommon { name } }
            }
            ... on ProjectV2ItemFieldIterationValue {
              __typename
              title
              startDate
              duration
              field { ... on ProjectV2FieldCommon { name } }
            }
          }
        }
        "#
    };
}

// Issue/PR content selection without the leading fragment line.
macro_rules! linked_content_selection {
    () => {
        r#"
          __typename
          id
          number
          title
          state
          url
          repository { name owner { login } }
        "#
    };
}

pub const GET_OWNER_TYPE: Operation = Operation {
    name: "GetOwnerType",
    text: r#"
query GetOwnerType($login: String!) {
  organization(login: $login) { id login __typename }
  user(login: $login) { id login __typename }
}
"#,
};

pub const GET_ORG_PROJECTS: Operation = Operation {
    name: "GetOrgProjects",
    text: r#"
query GetOrgProjects($login: String!, $first: Int!) {
  organization(login: $login) {
    projectsV2(first: $first) {
      nodes { id number title shortDescription url closed public }
    }
  }
}
"#,
};

pub const GET_USER_PROJECTS: Operation = Operation {
    name: "GetUserProjects",
    text: r#"
query GetUserProjects($login: String!, $first: Int!) {
  user(login: $login) {
    projectsV2(first: $first) {
      nodes { id number title shortDescription url closed public }
    }
  }
}
"#,
};

pub const GET_PROJECT_ID: Operation = Operation {
    name: "GetProjectId",
    text: r#"
query GetProjectId($login: String!, $number: Int!) {
  organization(login: $login) { projectV2(number: $number) { id } }
  user(login: $login) { projectV2(number: $number) { id } }
}
"#,
};

pub const GET_PROJECT_FIELDS: Operation = Operation {
    name: "GetProjectFields",
    text: r#"
query GetProjectFields($projectId: ID!) {
  node(id: $projectId) {
    ... on ProjectV2 {
      fields(first: 50) {
        nodes {
          ... on ProjectV2Field { id name __typename }
          ... on ProjectV2IterationField {
            id
            name
            __typename
            configuration { iterations { id title startDate duration } }
          }
          ... on ProjectV2SingleSelectField {
            id
            name
            __typename
            options { id name color description }
          }
        }
      }
    }
  }
}
"#,
};

pub const GET_PROJECT_ITEMS: Operation = Operation {
    name: "GetProjectItems",
    text: concat!(
        r#"
query GetProjectItems($projectId: ID!, $first: Int!) {
  node(id: $projectId) {
    ... on ProjectV2 {
      items(first: $first) {
        nodes {
          id
          type
"#,
        field_values_selection!(),
        r#"
          content {
            ... on Issue {"#,
        linked_content_selection!(),
        r#"}
            ... on PullRequest {"#,
        linked_content_selection!(),
        r#"}
            ... on DraftIssue { __typename id title }
          }
        }
      }
    }
  }
}
"#
    ),
};

pub const SEARCH_PROJECT_ITEMS: Operation = Operation {
    name: "SearchProjectItems",
    text: concat!(
        r#"
query SearchProjectItems($query: String!, $first: Int!) {
  search(query: $query, type: ISSUE, first: $first) {
    nodes {
      ... on Issue {"#,
        linked_content_selection!(),
        r#"
        projectItems(first: 20) {
          nodes {
            id
            type
            project { id }
"#,
        field_values_selection!(),
        r#"
          }
        }
      }
      ... on PullRequest {"#,
        linked_content_selection!(),
        r#"
        projectItems(first: 20) {
          nodes {
            id
            type
            project { id }
"#,
        field_values_selection!(),
        r#"
          }
        }
      }
    }
  }
}
"#
    ),
};

pub const GET_REPOSITORY_ID: Operation = Operation {
    name: "GetRepositoryId",
    text: r#"
query GetRepositoryId($owner: String!, $name: String!) {
  repository(owner: $owner, name: $name) { id }
}
"#,
};

pub const GET_ISSUE_ID: Operation = Operation {
    name: "GetIssueId",
    text: r#"
query GetIssueId($owner: String!, $repo: String!, $number: Int!) {
  repository(owner: $owner, name: $repo) { issue(number: $number) { id } }
}
"#,
};

pub const CREATE_ISSUE: Operation = Operation {
    name: "CreateIssue",
    text: r#"
mutation CreateIssue($repositoryId: ID!, $title: String!, $body: String) {
  createIssue(input: { repositoryId: $repositoryId, title: $title, body: $body }) {
    issue { id number title url state }
  }
}
"#,
};

pub const ADD_ITEM_TO_PROJECT: Operation = Operation {
    name: "AddItemToProject",
    text: r#"
mutation AddItemToProject($projectId: ID!, $contentId: ID!) {
  addProjectV2ItemById(input: { projectId: $projectId, contentId: $contentId }) {
    item {
      id
      content {
        ... on Issue { __typename title number }
        ... on PullRequest { __typename title number }
      }
    }
  }
}
"#,
};

pub const ADD_DRAFT_ISSUE: Operation = Operation {
    name: "AddDraftIssueToProject",
    text: r#"
mutation AddDraftIssueToProject($projectId: ID!, $title: String!, $body: String) {
  addProjectV2DraftIssue(input: { projectId: $projectId, title: $title, body: $body }) {
    projectItem { id }
  }
}
"#,
};

pub const UPDATE_ITEM_FIELD: Operation = Operation {
    name: "UpdateProjectFieldValue",
    text: r#"
mutation UpdateProjectFieldValue($projectId: ID!, $itemId: ID!, $fieldId: ID!, $value: ProjectV2FieldValue!) {
  updateProjectV2ItemFieldValue(input: {
    projectId: $projectId, itemId: $itemId, fieldId: $fieldId, value: $value
  }) {
    projectV2Item { id }
  }
}
"#,
};

pub const DELETE_ITEM: Operation = Operation {
    name: "DeleteProjectItem",
    text: r#"
mutation DeleteProjectItem($projectId: ID!, $itemId: ID!) {
  deleteProjectV2Item(input: { projectId: $projectId, itemId: $itemId }) {
    deletedItemId
  }
}
"#,
};

pub const UPDATE_PROJECT: Operation = Operation {
    name: "UpdateProject",
    text: r#"
mutation UpdateProject($input: UpdateProjectV2Input!) {
  updateProjectV2(input: $input) {
    projectV2 { id title shortDescription public url }
  }
}
"#,
};

#[cfg(test)]
#[path = "queries_tests.rs"]
mod tests;
