use serde::{Deserialize, Serialize};
use thiserror::Error;
use ts_rs::TS;

/// Technology stack of a project, grouped the way the filter UI groups tags
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
pub struct Technologies {
    pub languages: Vec<String>,
    pub frameworks: Vec<String>,
    pub tools: Vec<String>,
}

impl Technologies {
    /// All tags across the three groups, in group-then-insertion order
    pub fn tags(&self) -> impl Iterator<Item = &str> {
        self.languages
            .iter()
            .chain(&self.frameworks)
            .chain(&self.tools)
            .map(String::as_str)
    }

    pub fn contains(&self, tag: &str) -> bool {
        self.tags().any(|t| t == tag)
    }
}

/// A single portfolio work item
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: i64,
    pub summary: String,
    pub role: String,
    pub team_size: u32,
    pub impact: String,
    pub period: String,
    pub details: String,
    pub responsibilities: Vec<String>,
    pub technologies: Technologies,
    pub challenges: Vec<String>,
    pub achievements: Vec<String>,
    pub learnings: Vec<String>,
}

impl Project {
    /// A project is visible when no filters are selected, or when it shares
    /// at least one technology tag with the selected set.
    pub fn matches_filter(&self, filters: &[String]) -> bool {
        filters.is_empty() || filters.iter().any(|f| self.technologies.contains(f))
    }
}

/// Request body for creating a project; the server assigns the id
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
pub struct CreateProject {
    pub summary: String,
    pub role: String,
    pub team_size: u32,
    pub impact: String,
    pub period: String,
    pub details: String,
    pub responsibilities: Vec<String>,
    pub technologies: Technologies,
    pub challenges: Vec<String>,
    pub achievements: Vec<String>,
    pub learnings: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("missing required field: {0}")]
    MissingField(&'static str),
    #[error("teamSize must be a positive integer")]
    InvalidTeamSize,
}

impl CreateProject {
    /// Field-present validation, mirroring what the form marks as required.
    /// Runs on the server before the payload reaches the store.
    pub fn validate(&self) -> Result<(), ValidationError> {
        text_present("summary", &self.summary)?;
        text_present("role", &self.role)?;
        text_present("impact", &self.impact)?;
        text_present("period", &self.period)?;
        text_present("details", &self.details)?;
        if self.team_size == 0 {
            return Err(ValidationError::InvalidTeamSize);
        }
        list_present("responsibilities", &self.responsibilities)?;
        list_present("technologies.languages", &self.technologies.languages)?;
        list_present("technologies.frameworks", &self.technologies.frameworks)?;
        list_present("technologies.tools", &self.technologies.tools)?;
        list_present("challenges", &self.challenges)?;
        list_present("achievements", &self.achievements)?;
        list_present("learnings", &self.learnings)?;
        Ok(())
    }

    /// Attach an id, turning the draft into a stored record
    pub fn into_project(self, id: i64) -> Project {
        Project {
            id,
            summary: self.summary,
            role: self.role,
            team_size: self.team_size,
            impact: self.impact,
            period: self.period,
            details: self.details,
            responsibilities: self.responsibilities,
            technologies: self.technologies,
            challenges: self.challenges,
            achievements: self.achievements,
            learnings: self.learnings,
        }
    }
}

fn text_present(name: &'static str, value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::MissingField(name));
    }
    Ok(())
}

fn list_present(name: &'static str, values: &[String]) -> Result<(), ValidationError> {
    if values.is_empty() {
        return Err(ValidationError::MissingField(name));
    }
    Ok(())
}

/// Split a comma-separated input into a list: trim each segment, drop empties
pub fn split_list(input: &str) -> Vec<String> {
    input
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

/// Every distinct technology tag across the given projects, first-seen order
pub fn all_technologies(projects: &[Project]) -> Vec<String> {
    let mut tags: Vec<String> = Vec::new();
    for project in projects {
        for tag in project.technologies.tags() {
            if !tags.iter().any(|t| t == tag) {
                tags.push(tag.to_string());
            }
        }
    }
    tags
}
