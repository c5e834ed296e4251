//! Add/edit form payload: free-text fields plus comma-separated list inputs.

use store::models::project::{
    CreateProject, Project, Technologies, ValidationError, split_list,
};

/// Raw form input. List-valued fields arrive as one comma-separated string
/// each and are split on parse.
#[derive(Debug, Clone)]
pub struct ProjectForm {
    pub summary: String,
    pub role: String,
    pub team_size: u32,
    pub impact: String,
    pub period: String,
    pub details: String,
    pub responsibilities: String,
    pub languages: String,
    pub frameworks: String,
    pub tools: String,
    pub challenges: String,
    pub achievements: String,
    pub learnings: String,
}

impl Default for ProjectForm {
    fn default() -> Self {
        Self {
            summary: String::new(),
            role: String::new(),
            team_size: 1,
            impact: String::new(),
            period: String::new(),
            details: String::new(),
            responsibilities: String::new(),
            languages: String::new(),
            frameworks: String::new(),
            tools: String::new(),
            challenges: String::new(),
            achievements: String::new(),
            learnings: String::new(),
        }
    }
}

impl ProjectForm {
    /// Prefill the form from an existing project for the edit flow,
    /// re-joining each list with commas.
    pub fn from_project(project: &Project) -> Self {
        Self {
            summary: project.summary.clone(),
            role: project.role.clone(),
            team_size: project.team_size,
            impact: project.impact.clone(),
            period: project.period.clone(),
            details: project.details.clone(),
            responsibilities: project.responsibilities.join(","),
            languages: project.technologies.languages.join(","),
            frameworks: project.technologies.frameworks.join(","),
            tools: project.technologies.tools.join(","),
            challenges: project.challenges.join(","),
            achievements: project.achievements.join(","),
            learnings: project.learnings.join(","),
        }
    }

    /// Split the list inputs, build the draft, and validate it
    pub fn parse(self) -> Result<CreateProject, ValidationError> {
        let draft = CreateProject {
            summary: self.summary,
            role: self.role,
            team_size: self.team_size,
            impact: self.impact,
            period: self.period,
            details: self.details,
            responsibilities: split_list(&self.responsibilities),
            technologies: Technologies {
                languages: split_list(&self.languages),
                frameworks: split_list(&self.frameworks),
                tools: split_list(&self.tools),
            },
            challenges: split_list(&self.challenges),
            achievements: split_list(&self.achievements),
            learnings: split_list(&self.learnings),
        };
        draft.validate()?;
        Ok(draft)
    }

    /// Edit submissions merge the existing id back into the parsed payload
    pub fn parse_with_id(self, id: i64) -> Result<Project, ValidationError> {
        Ok(self.parse()?.into_project(id))
    }
}
