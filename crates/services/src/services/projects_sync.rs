//! Client-side project state and its synchronization with the API.
//!
//! The provider owns the local collection for the session and is its only
//! writer; every mutation goes through [`dispatch`](ProjectsProvider::dispatch)
//! and the pure reducer. After the initial load the collection is never
//! re-fetched; CRUD flows keep it in sync under the assumption that this
//! process is the only writer. Overlapping flows apply their dispatches in
//! completion order (last completed wins); nothing queues or cancels them.

use std::mem;

use tracing::{error, info};

use store::models::project::{CreateProject, Project, all_technologies};
use store::reducer::{ProjectAction, reduce};

use super::projects_api::{ProjectsApiClient, ProjectsApiError};

pub struct ProjectsProvider {
    api: ProjectsApiClient,
    projects: Vec<Project>,
}

impl ProjectsProvider {
    pub fn new(api: ProjectsApiClient) -> Self {
        Self {
            api,
            projects: Vec::new(),
        }
    }

    pub fn projects(&self) -> &[Project] {
        &self.projects
    }

    /// Apply one reducer action to the local collection
    pub fn dispatch(&mut self, action: ProjectAction) {
        self.projects = reduce(mem::take(&mut self.projects), action);
    }

    /// Initial load: fetch the collection and dispatch `AddProject` once per
    /// item, in the order received. The collection fills incrementally, so a
    /// reader mid-load sees a partial list. On failure the collection stays
    /// empty and the error is returned; there is no retry.
    pub async fn load(&mut self) -> Result<usize, ProjectsApiError> {
        match self.api.list().await {
            Ok(items) => {
                let count = items.len();
                for project in items {
                    self.dispatch(ProjectAction::AddProject(project));
                }
                info!(count, "loaded projects");
                Ok(count)
            }
            Err(err) => {
                error!(%err, "failed to load projects");
                Err(err)
            }
        }
    }

    /// Add flow: create on the server, then append the stored record with
    /// its server-assigned id.
    pub async fn create(&mut self, draft: CreateProject) -> Result<Project, ProjectsApiError> {
        match self.api.create(&draft).await {
            Ok(created) => {
                self.dispatch(ProjectAction::AddProject(created.clone()));
                Ok(created)
            }
            Err(err) => {
                error!(%err, "failed to create project");
                Err(err)
            }
        }
    }

    /// Edit flow: replace on the server, then replace locally in place
    pub async fn update(&mut self, project: Project) -> Result<Project, ProjectsApiError> {
        match self.api.update(&project).await {
            Ok(updated) => {
                self.dispatch(ProjectAction::EditProject(updated.clone()));
                Ok(updated)
            }
            Err(err) => {
                error!(id = project.id, %err, "failed to update project");
                Err(err)
            }
        }
    }

    /// Delete flow: the local record is removed only once the server has
    /// confirmed the delete. Asking the user first is the caller's job.
    pub async fn delete(&mut self, id: i64) -> Result<(), ProjectsApiError> {
        match self.api.delete(id).await {
            Ok(()) => {
                self.dispatch(ProjectAction::DeleteProject(id));
                Ok(())
            }
            Err(err) => {
                error!(id, %err, "failed to delete project");
                Err(err)
            }
        }
    }

    /// Local-only filtering by technology tag; no API interaction
    pub fn filtered(&self, filters: &[String]) -> Vec<&Project> {
        self.projects
            .iter()
            .filter(|p| p.matches_filter(filters))
            .collect()
    }

    /// Distinct technology tags across the collection, for the filter UI
    pub fn technologies(&self) -> Vec<String> {
        all_technologies(&self.projects)
    }
}
