//! Profile data collected during one builder session.
//!
//! The three entry sequences are append-only; the only other mutation is an
//! explicit clear. Insertion order is display order.

use serde::{Deserialize, Serialize};

/// Which kind of site the visitor is building.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SiteMode {
    #[default]
    PersonalPortfolio,
    CompanyLandingPage,
}

impl SiteMode {
    pub fn label(&self) -> &'static str {
        match self {
            SiteMode::PersonalPortfolio => "Personal Portfolio",
            SiteMode::CompanyLandingPage => "Company Landing Page",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExperienceEntry {
    pub role: String,
    pub organization: String,
    pub duration: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EducationEntry {
    pub degree: String,
    pub institution: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectEntry {
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub technology: Option<String>,
}

/// Identity fields of a profile, replaced as a whole from the basics form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProfileBasics {
    /// Display name; also the source of the published page's slug.
    pub name: String,
    pub tagline: String,
    pub bio: String,
    pub email: String,
    pub socials: String,
    /// Comma-delimited.
    pub skills: String,
    pub achievements: String,
    pub logo_url: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    #[serde(flatten)]
    pub basics: ProfileBasics,
    pub experience: Vec<ExperienceEntry>,
    pub education: Vec<EducationEntry>,
    pub projects: Vec<ProjectEntry>,
}

impl Profile {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_basics(&mut self, basics: ProfileBasics) {
        self.basics = basics;
    }

    pub fn add_experience(&mut self, entry: ExperienceEntry) {
        self.experience.push(entry);
    }

    pub fn add_education(&mut self, entry: EducationEntry) {
        self.education.push(entry);
    }

    pub fn add_project(&mut self, entry: ProjectEntry) {
        self.projects.push(entry);
    }

    pub fn clear_experience(&mut self) {
        self.experience.clear();
    }

    pub fn clear_education(&mut self) {
        self.education.clear();
    }

    pub fn clear_projects(&mut self) {
        self.projects.clear();
    }

    /// Skills split on commas, trimmed, blanks dropped.
    pub fn skill_list(&self) -> Vec<&str> {
        self.basics
            .skills
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .collect()
    }

    /// Logo URL, if one was given and is not blank.
    pub fn logo(&self) -> Option<&str> {
        self.basics
            .logo_url
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn job(role: &str) -> ExperienceEntry {
        ExperienceEntry {
            role: role.to_string(),
            organization: "Acme".to_string(),
            duration: "2022-2024".to_string(),
        }
    }

    #[test]
    fn test_new_profile_is_empty() {
        let profile = Profile::new();
        assert!(profile.experience.is_empty());
        assert!(profile.education.is_empty());
        assert!(profile.projects.is_empty());
    }

    #[test]
    fn test_entries_keep_insertion_order() {
        let mut profile = Profile::new();
        profile.add_experience(job("Intern"));
        profile.add_experience(job("Engineer"));
        profile.add_experience(job("Lead"));

        let roles: Vec<_> = profile.experience.iter().map(|e| e.role.as_str()).collect();
        assert_eq!(roles, vec!["Intern", "Engineer", "Lead"]);
    }

    #[test]
    fn test_clear_only_touches_its_sequence() {
        let mut profile = Profile::new();
        profile.add_experience(job("Engineer"));
        profile.add_education(EducationEntry {
            degree: "BSc".to_string(),
            institution: "State U".to_string(),
        });
        profile.add_project(ProjectEntry {
            title: "Site".to_string(),
            description: "A site".to_string(),
            technology: None,
        });

        profile.clear_experience();
        assert!(profile.experience.is_empty());
        assert_eq!(profile.education.len(), 1);
        assert_eq!(profile.projects.len(), 1);

        profile.clear_projects();
        assert!(profile.projects.is_empty());
        assert_eq!(profile.education.len(), 1);

        profile.clear_education();
        assert!(profile.education.is_empty());
    }

    #[test]
    fn test_skill_list_drops_blanks() {
        let mut profile = Profile::new();
        profile.basics.skills = "Python, AI,, Web Dev ,".to_string();
        assert_eq!(profile.skill_list(), vec!["Python", "AI", "Web Dev"]);
    }

    #[test]
    fn test_blank_logo_is_none() {
        let mut profile = Profile::new();
        profile.basics.logo_url = Some("  ".to_string());
        assert_eq!(profile.logo(), None);
    }

    #[test]
    fn test_profile_serializes_flat() {
        let mut profile = Profile::new();
        profile.basics.name = "Hari Krishnan".to_string();
        let value = serde_json::to_value(&profile).unwrap();
        assert_eq!(value["name"], "Hari Krishnan");
        assert!(value["experience"].as_array().unwrap().is_empty());
    }

    #[test]
    fn test_site_mode_deserializes_snake_case() {
        let mode: SiteMode = serde_json::from_str("\"company_landing_page\"").unwrap();
        assert_eq!(mode, SiteMode::CompanyLandingPage);
        assert_eq!(mode.label(), "Company Landing Page");
    }
}
