//! In-memory project collection shared by the route handlers.
//!
//! Storage here is an explicit placeholder: one `ProjectStore` is constructed
//! at process start and handed to every consumer, and its contents live only
//! as long as the process. Transitions go through [`reduce`], the same pure
//! function the client-side provider dispatches against.

use std::mem;
use std::sync::atomic::{AtomicI64, Ordering};

use thiserror::Error;
use tokio::sync::RwLock;
use tracing::debug;

use crate::models::project::{CreateProject, Project};
use crate::reducer::{ProjectAction, reduce};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    #[error("project {0} not found")]
    NotFound(i64),
}

/// Owned, injectable in-memory store. Ids are assigned from a monotonic
/// counter, so they are unique for the lifetime of the store.
pub struct ProjectStore {
    projects: RwLock<Vec<Project>>,
    next_id: AtomicI64,
}

impl ProjectStore {
    pub fn new() -> Self {
        Self {
            projects: RwLock::new(Vec::new()),
            next_id: AtomicI64::new(1),
        }
    }

    /// Start from an existing collection; the id counter resumes past the
    /// largest seeded id.
    pub fn with_projects(seed: Vec<Project>) -> Self {
        let next_id = seed.iter().map(|p| p.id).max().unwrap_or(0) + 1;
        Self {
            projects: RwLock::new(seed),
            next_id: AtomicI64::new(next_id),
        }
    }

    /// Snapshot of the collection in insertion order
    pub async fn list(&self) -> Vec<Project> {
        self.projects.read().await.clone()
    }

    /// Assign the next id and append the record, returning it as stored
    pub async fn create(&self, draft: CreateProject) -> Project {
        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        let project = draft.into_project(id);

        let mut guard = self.projects.write().await;
        *guard = reduce(
            mem::take(&mut *guard),
            ProjectAction::AddProject(project.clone()),
        );
        debug!(id, "created project");
        project
    }

    /// Replace the record with the same id wholesale, keeping its position
    pub async fn update(&self, project: Project) -> Result<Project, StoreError> {
        let mut guard = self.projects.write().await;
        if !guard.iter().any(|p| p.id == project.id) {
            return Err(StoreError::NotFound(project.id));
        }
        *guard = reduce(
            mem::take(&mut *guard),
            ProjectAction::EditProject(project.clone()),
        );
        debug!(id = project.id, "updated project");
        Ok(project)
    }

    /// Remove the record with the given id, returning how many were removed.
    /// Deleting an absent id removes zero and is not an error.
    pub async fn delete(&self, id: i64) -> u64 {
        let mut guard = self.projects.write().await;
        let before = guard.len();
        *guard = reduce(mem::take(&mut *guard), ProjectAction::DeleteProject(id));
        let removed = (before - guard.len()) as u64;
        debug!(id, removed, "deleted project");
        removed
    }
}

impl Default for ProjectStore {
    fn default() -> Self {
        Self::new()
    }
}
