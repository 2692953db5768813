//! The Projects V2 operation set.
//!
//! Each public operation is a short sequential pipeline: resolve the
//! identities it needs, issue exactly one operation-specific query or
//! mutation, normalize the result. Every step awaits the previous one, so
//! dropping the returned future cancels the in-flight call and no later step
//! is issued. The first failure aborts the operation.

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::{json, Value};
use tracing::{debug, instrument, warn};

use crate::errors::{ProjectsError, ProjectsResult, ResultExt};
use crate::inference::{infer_mutation_input, InputValue};
use crate::normalize::{decode_content, is_linked_content};
use crate::queries::{self, PROJECTS_PAGE_SIZE, SEARCH_PAGE_SIZE};
use crate::transport::{GraphQlTransport, Operation};
use crate::types::{
    AddedItem, CreatedIssue, Field, Item, ItemQuery, Owner, OwnerKind, Project,
    ProjectSettingsUpdate, UpdatedProject,
};
use crate::wire::{
    IdNode, IssueLookup, OrganizationProjects, OwnerLookup, ProjectFields, ProjectIdLookup,
    ProjectItems, RawAddedItem, RepositoryLookup, SearchHitItems, SearchResults, UserProjects,
};
use crate::{ContentId, FieldId, ItemId, ProjectId, RepositoryId};

/// Resolution and normalization engine over a [`GraphQlTransport`].
///
/// Holds no state besides the transport: nothing is cached between calls, so
/// every operation re-resolves the identifiers it needs.
#[derive(Debug)]
pub struct ProjectsEngine<T> {
    transport: T,
}

#[derive(Serialize)]
struct UpdateProjectInput<'a> {
    #[serde(rename = "projectId")]
    project_id: &'a ProjectId,
    #[serde(flatten)]
    settings: &'a ProjectSettingsUpdate,
}

fn malformed(operation: &Operation, err: impl std::fmt::Display) -> ProjectsError {
    ProjectsError::MalformedResponse {
        operation: operation.name.to_string(),
        message: err.to_string(),
    }
}

fn decode<R: DeserializeOwned>(operation: &Operation, data: Value) -> ProjectsResult<R> {
    serde_json::from_value(data).map_err(|e| malformed(operation, e))
}

impl<T: GraphQlTransport> ProjectsEngine<T> {
    /// Creates an engine that issues every call through `transport`.
    pub fn new(transport: T) -> Self {
        Self { transport }
    }

    async fn execute(&self, operation: &Operation, variables: Value) -> ProjectsResult<Value> {
        debug!(operation = operation.name, "executing GraphQL operation");
        Ok(self.transport.execute(operation, variables).await?)
    }

    async fn query<R: DeserializeOwned>(
        &self,
        operation: &Operation,
        variables: Value,
    ) -> ProjectsResult<R> {
        let data = self.execute(operation, variables).await?;
        decode(operation, data)
    }

    /// Runs a mutation and extracts `data.<mutation>.<member>`, failing with
    /// [`ProjectsError::MutationFailed`] when it is absent or null.
    async fn mutate<R: DeserializeOwned>(
        &self,
        operation: &Operation,
        variables: Value,
        (mutation, member): (&str, &str),
        action: impl FnOnce() -> String,
    ) -> ProjectsResult<R> {
        let mut data = self.execute(operation, variables).await?;
        let result = data
            .get_mut(mutation)
            .and_then(|payload| payload.get_mut(member))
            .map(Value::take)
            .filter(|v| !v.is_null());
        match result {
            Some(result) => decode(operation, result),
            None => Err(ProjectsError::MutationFailed {
                action: action(),
                mutation: mutation.to_string(),
            }),
        }
    }

    // -----------------------------------------------------------------------
    // Identity resolution
    // -----------------------------------------------------------------------

    /// Resolves a login to an organization or user.
    ///
    /// The organization branch wins when both resolve.
    #[instrument(skip(self))]
    pub async fn resolve_owner(&self, login: &str) -> ProjectsResult<Owner> {
        let lookup: OwnerLookup = self
            .query(&queries::GET_OWNER_TYPE, json!({ "login": login }))
            .await
            .with_context(|| format!("failed to determine owner type for {login}"))?;

        let (kind, node) = match (lookup.organization, lookup.user) {
            (Some(org), _) => (OwnerKind::Organization, org),
            (None, Some(user)) => (OwnerKind::User, user),
            (None, None) => {
                warn!(login, "owner did not resolve to an organization or user");
                return Err(ProjectsError::not_found(format!("owner {login}")));
            }
        };
        Ok(Owner {
            kind,
            id: node.id,
            login: node.login,
        })
    }

    /// Resolves `(owner, number)` to the project's node id.
    #[instrument(skip(self))]
    pub async fn resolve_project_id(&self, owner: &str, number: u32) -> ProjectsResult<ProjectId> {
        let lookup: ProjectIdLookup = self
            .query(
                &queries::GET_PROJECT_ID,
                json!({ "login": owner, "number": number }),
            )
            .await
            .with_context(|| format!("failed to look up project {owner}/{number}"))?;

        let project = lookup
            .organization
            .and_then(|holder| holder.project)
            .or_else(|| lookup.user.and_then(|holder| holder.project));
        match project {
            Some(node) => Ok(node.id),
            None => {
                warn!(owner, number, "project did not resolve");
                Err(ProjectsError::not_found(format!(
                    "project {number} for owner {owner}"
                )))
            }
        }
    }

    /// Resolves `owner/name` to the repository's node id.
    #[instrument(skip(self))]
    pub async fn resolve_repository_id(
        &self,
        owner: &str,
        name: &str,
    ) -> ProjectsResult<RepositoryId> {
        let lookup: RepositoryLookup = self
            .query(
                &queries::GET_REPOSITORY_ID,
                json!({ "owner": owner, "name": name }),
            )
            .await?;
        lookup
            .repository
            .map(|node| node.id)
            .ok_or_else(|| ProjectsError::not_found(format!("repository {owner}/{name}")))
    }

    /// Resolves `owner/repo#number` to the issue's node id.
    #[instrument(skip(self))]
    pub async fn resolve_issue_id(
        &self,
        owner: &str,
        repo: &str,
        number: u64,
    ) -> ProjectsResult<ContentId> {
        let lookup: IssueLookup = self
            .query(
                &queries::GET_ISSUE_ID,
                json!({ "owner": owner, "repo": repo, "number": number }),
            )
            .await?;
        lookup
            .repository
            .and_then(|holder| holder.issue)
            .map(|node| node.id)
            .ok_or_else(|| ProjectsError::not_found(format!("issue {owner}/{repo}#{number}")))
    }

    // -----------------------------------------------------------------------
    // Collections
    // -----------------------------------------------------------------------

    /// Lists up to 50 projects of an organization or user.
    ///
    /// An owner without a projects connection is [`ProjectsError::NotFound`];
    /// an empty connection is an empty list.
    #[instrument(skip(self))]
    pub async fn list_projects(&self, owner: &str) -> ProjectsResult<Vec<Project>> {
        let resolved = self.resolve_owner(owner).await?;
        let variables = json!({ "login": owner, "first": PROJECTS_PAGE_SIZE });

        let holder = match resolved.kind {
            OwnerKind::Organization => {
                self.query::<OrganizationProjects>(&queries::GET_ORG_PROJECTS, variables)
                    .await?
                    .organization
            }
            OwnerKind::User => {
                self.query::<UserProjects>(&queries::GET_USER_PROJECTS, variables)
                    .await?
                    .user
            }
        };
        let projects = holder.and_then(|h| h.projects).ok_or_else(|| {
            ProjectsError::not_found(format!("projects for {} {owner}", resolved.kind))
        })?;
        Ok(projects.into_nodes().collect())
    }

    /// Lists up to 50 field definitions of a project.
    #[instrument(skip(self))]
    pub async fn list_fields(&self, owner: &str, number: u32) -> ProjectsResult<Vec<Field>> {
        let project_id = self
            .resolve_project_id(owner, number)
            .await
            .context("cannot get fields")?;

        let fields: ProjectFields = self
            .query(
                &queries::GET_PROJECT_FIELDS,
                json!({ "projectId": project_id }),
            )
            .await?;
        let fields = fields.node.and_then(|n| n.fields).ok_or_else(|| {
            ProjectsError::not_found(format!("fields for project {owner}/{number}"))
        })?;
        Ok(fields.into_nodes().map(Field::from).collect())
    }

    /// Lists up to `query.limit` items with flattened field values.
    ///
    /// The state filter is applied after the fetch, so fewer than `limit`
    /// items may come back.
    #[instrument(skip(self))]
    pub async fn list_items(
        &self,
        owner: &str,
        number: u32,
        query: &ItemQuery,
    ) -> ProjectsResult<Vec<Item>> {
        let project_id = self
            .resolve_project_id(owner, number)
            .await
            .context("cannot get items")?;

        let operation = &queries::GET_PROJECT_ITEMS;
        let items: ProjectItems = self
            .query(
                operation,
                json!({ "projectId": project_id, "first": query.limit }),
            )
            .await?;
        let items = items.node.and_then(|n| n.items).ok_or_else(|| {
            ProjectsError::not_found(format!("items for project {owner}/{number}"))
        })?;

        let mut normalized = Vec::new();
        for raw in items.into_nodes() {
            let item = raw.into_item().map_err(|e| malformed(operation, e))?;
            if query
                .state
                .as_ref()
                .map_or(true, |state| state.matches(&item.content))
            {
                normalized.push(item);
            }
        }
        Ok(normalized)
    }

    /// Finds project items whose issue or pull request matches a GitHub
    /// search query. Draft issues are not searchable.
    #[instrument(skip(self))]
    pub async fn search_items(
        &self,
        owner: &str,
        number: u32,
        search_query: &str,
        limit: u32,
    ) -> ProjectsResult<Vec<Item>> {
        if search_query.trim().is_empty() {
            return Err(ProjectsError::invalid_input("search query must not be empty"));
        }
        let project_id = self
            .resolve_project_id(owner, number)
            .await
            .context("cannot search items")?;

        let operation = &queries::SEARCH_PROJECT_ITEMS;
        let results: SearchResults = self
            .query(
                operation,
                json!({ "query": search_query, "first": SEARCH_PAGE_SIZE }),
            )
            .await?;

        let mut matches = Vec::new();
        for hit in results.search.into_iter().flat_map(|c| c.into_nodes()) {
            if matches.len() >= limit as usize {
                break;
            }
            if !is_linked_content(&hit) {
                continue;
            }
            let hit_items: SearchHitItems = decode(operation, hit.clone())?;
            let in_project = hit_items
                .project_items
                .into_iter()
                .flat_map(|c| c.into_nodes())
                .find(|raw| raw.project.as_ref().is_some_and(|p| p.id == project_id));
            if let Some(raw) = in_project {
                let content = decode_content(Some(hit)).map_err(|e| malformed(operation, e))?;
                matches.push(raw.with_content(content));
            }
        }
        debug!(matches = matches.len(), "search complete");
        Ok(matches)
    }

    // -----------------------------------------------------------------------
    // Mutations
    // -----------------------------------------------------------------------

    /// Creates an issue in `owner/repo`.
    #[instrument(skip(self, body))]
    pub async fn create_issue(
        &self,
        owner: &str,
        repo: &str,
        title: &str,
        body: &str,
    ) -> ProjectsResult<CreatedIssue> {
        let repository_id = self
            .resolve_repository_id(owner, repo)
            .await
            .context("cannot create issue")?;

        self.mutate(
            &queries::CREATE_ISSUE,
            json!({ "repositoryId": repository_id, "title": title, "body": body }),
            ("createIssue", "issue"),
            || format!("create issue in {owner}/{repo}"),
        )
        .await
    }

    /// Adds an existing issue to a project.
    #[instrument(skip(self))]
    pub async fn add_issue_to_project(
        &self,
        owner: &str,
        number: u32,
        issue_owner: &str,
        issue_repo: &str,
        issue_number: u64,
    ) -> ProjectsResult<AddedItem> {
        let project_id = self
            .resolve_project_id(owner, number)
            .await
            .context("cannot add issue")?;
        let content_id = self
            .resolve_issue_id(issue_owner, issue_repo, issue_number)
            .await
            .context("cannot add issue")?;

        let item: RawAddedItem = self
            .mutate(
                &queries::ADD_ITEM_TO_PROJECT,
                json!({ "projectId": project_id, "contentId": content_id }),
                ("addProjectV2ItemById", "item"),
                || format!("add issue {issue_number} to project {number}"),
            )
            .await?;
        Ok(item.into())
    }

    /// Creates a draft issue inside a project. Returns the new item's id.
    #[instrument(skip(self, body))]
    pub async fn add_draft_issue(
        &self,
        owner: &str,
        number: u32,
        title: &str,
        body: &str,
    ) -> ProjectsResult<ItemId> {
        let project_id = self
            .resolve_project_id(owner, number)
            .await
            .context("cannot add draft issue")?;

        let item: IdNode<ItemId> = self
            .mutate(
                &queries::ADD_DRAFT_ISSUE,
                json!({ "projectId": project_id, "title": title, "body": body }),
                ("addProjectV2DraftIssue", "projectItem"),
                || format!("add draft issue to project {number}"),
            )
            .await?;
        Ok(item.id)
    }

    /// Sets one field value on an item.
    ///
    /// The mutation input is inferred from `field_id` before any remote call,
    /// so an incompatible value fails without touching the network.
    #[instrument(skip(self))]
    pub async fn update_item_field(
        &self,
        owner: &str,
        number: u32,
        item_id: &ItemId,
        field_id: &FieldId,
        value: InputValue,
    ) -> ProjectsResult<ItemId> {
        let input = infer_mutation_input(field_id, value)?;
        let project_id = self
            .resolve_project_id(owner, number)
            .await
            .context("cannot update item field")?;

        let item: IdNode<ItemId> = self
            .mutate(
                &queries::UPDATE_ITEM_FIELD,
                json!({
                    "projectId": project_id,
                    "itemId": item_id,
                    "fieldId": field_id,
                    "value": input,
                }),
                ("updateProjectV2ItemFieldValue", "projectV2Item"),
                || format!("update field {field_id} for item {item_id}"),
            )
            .await?;
        Ok(item.id)
    }

    /// Removes an item from a project. Returns the deleted item's id.
    #[instrument(skip(self))]
    pub async fn delete_item(
        &self,
        owner: &str,
        number: u32,
        item_id: &ItemId,
    ) -> ProjectsResult<ItemId> {
        let project_id = self
            .resolve_project_id(owner, number)
            .await
            .context("cannot delete item")?;

        self.mutate(
            &queries::DELETE_ITEM,
            json!({ "projectId": project_id, "itemId": item_id }),
            ("deleteProjectV2Item", "deletedItemId"),
            || format!("delete item {item_id}"),
        )
        .await
    }

    /// Changes the supplied project settings; absent settings are left alone.
    #[instrument(skip(self))]
    pub async fn update_project_settings(
        &self,
        owner: &str,
        number: u32,
        settings: &ProjectSettingsUpdate,
    ) -> ProjectsResult<UpdatedProject> {
        let project_id = self
            .resolve_project_id(owner, number)
            .await
            .context("cannot update project settings")?;

        let input = UpdateProjectInput {
            project_id: &project_id,
            settings,
        };
        self.mutate(
            &queries::UPDATE_PROJECT,
            json!({ "input": input }),
            ("updateProjectV2", "projectV2"),
            || format!("update project {number}"),
        )
        .await
    }
}

#[cfg(test)]
#[path = "engine_tests.rs"]
mod tests;
