//! HTTP client for the projects API.

use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use thiserror::Error;

use store::models::project::{CreateProject, Project};

const BASE_URL_ENV: &str = "PROJECTS_API_BASE_URL";
const DEFAULT_BASE_URL: &str = "http://localhost:3000/api";

#[derive(Debug, Clone, Error)]
pub enum ProjectsApiError {
    #[error("network error: {0}")]
    Transport(String),
    #[error("http {status}: {body}")]
    Http { status: u16, body: String },
    #[error("json error: {0}")]
    Serde(String),
}

/// Thin wrapper over the four CRUD endpoints. Single-shot: no retry and no
/// request timeout, so a hung call hangs the flow that made it.
#[derive(Debug, Clone)]
pub struct ProjectsApiClient {
    http: Client,
    base_url: String,
}

impl ProjectsApiClient {
    /// Create a client from the `PROJECTS_API_BASE_URL` environment
    /// variable, falling back to the local development address.
    pub fn from_env() -> Result<Self, ProjectsApiError> {
        let base_url =
            std::env::var(BASE_URL_ENV).unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());
        Self::new(base_url)
    }

    pub fn new(base_url: impl Into<String>) -> Result<Self, ProjectsApiError> {
        let http = Client::builder()
            .user_agent(concat!("projects-client/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| ProjectsApiError::Transport(e.to_string()))?;

        Ok(Self {
            http,
            base_url: normalize_base_url(base_url.into()),
        })
    }

    /// GET the full collection
    pub async fn list(&self) -> Result<Vec<Project>, ProjectsApiError> {
        let res = self
            .http
            .get(self.collection_url())
            .send()
            .await
            .map_err(map_reqwest_error)?;
        decode(res).await
    }

    /// POST a draft; the server assigns the id
    pub async fn create(&self, draft: &CreateProject) -> Result<Project, ProjectsApiError> {
        let res = self
            .http
            .post(self.collection_url())
            .json(draft)
            .send()
            .await
            .map_err(map_reqwest_error)?;
        decode(res).await
    }

    /// PUT a full replacement, keyed by its id
    pub async fn update(&self, project: &Project) -> Result<Project, ProjectsApiError> {
        let res = self
            .http
            .put(self.item_url(project.id))
            .json(project)
            .send()
            .await
            .map_err(map_reqwest_error)?;
        decode(res).await
    }

    /// DELETE by id; success carries no body
    pub async fn delete(&self, id: i64) -> Result<(), ProjectsApiError> {
        let res = self
            .http
            .delete(self.item_url(id))
            .send()
            .await
            .map_err(map_reqwest_error)?;
        expect_success(res).await?;
        Ok(())
    }

    fn collection_url(&self) -> String {
        format!("{}/projects", self.base_url)
    }

    fn item_url(&self, id: i64) -> String {
        format!("{}/projects/{}", self.base_url, id)
    }
}

fn normalize_base_url(mut base_url: String) -> String {
    while base_url.ends_with('/') {
        base_url.pop();
    }
    base_url
}

fn map_reqwest_error(e: reqwest::Error) -> ProjectsApiError {
    ProjectsApiError::Transport(e.to_string())
}

async fn expect_success(res: Response) -> Result<Response, ProjectsApiError> {
    let status = res.status();
    if status.is_success() {
        Ok(res)
    } else {
        let body = res.text().await.unwrap_or_default();
        Err(ProjectsApiError::Http {
            status: status.as_u16(),
            body,
        })
    }
}

async fn decode<T: DeserializeOwned>(res: Response) -> Result<T, ProjectsApiError> {
    expect_success(res)
        .await?
        .json::<T>()
        .await
        .map_err(|e| ProjectsApiError::Serde(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn urls_are_joined_against_the_base() {
        let client = ProjectsApiClient::new("http://localhost:3000/api").unwrap();
        assert_eq!(client.collection_url(), "http://localhost:3000/api/projects");
        assert_eq!(client.item_url(7), "http://localhost:3000/api/projects/7");
    }

    #[test]
    fn trailing_slashes_on_the_base_are_dropped() {
        let client = ProjectsApiClient::new("http://example.test/api//").unwrap();
        assert_eq!(client.collection_url(), "http://example.test/api/projects");
    }
}
