//! Pure state transitions over the project collection.
//!
//! Both sides of the wire run their collection through the same function:
//! the client's provider applies it on dispatch, the server's store applies
//! it under its lock. It never performs I/O and never mutates its input
//! binding in place, so dispatches compose strictly left-to-right.

use crate::models::project::Project;

#[derive(Debug, Clone, PartialEq)]
pub enum ProjectAction {
    AddProject(Project),
    EditProject(Project),
    DeleteProject(i64),
}

/// Apply one action to the collection, returning the next collection.
///
/// `AddProject` appends without a duplicate-id check; uniqueness is the id
/// source's job. `EditProject` with an unknown id is a silent no-op.
pub fn reduce(state: Vec<Project>, action: ProjectAction) -> Vec<Project> {
    match action {
        ProjectAction::AddProject(project) => {
            let mut next = state;
            next.push(project);
            next
        }
        ProjectAction::EditProject(project) => state
            .into_iter()
            .map(|existing| {
                if existing.id == project.id {
                    project.clone()
                } else {
                    existing
                }
            })
            .collect(),
        ProjectAction::DeleteProject(id) => {
            state.into_iter().filter(|p| p.id != id).collect()
        }
    }
}
