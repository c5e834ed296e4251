pub mod project_form;
pub mod projects_api;
pub mod projects_sync;
