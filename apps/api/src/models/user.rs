#![allow(dead_code)]

use chrono::{DateTime, Datelike, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Database row for a user. Carries both auth fields and the career profile;
/// the profile travels to clients only via [`Account`].
#[derive(Debug, Clone, FromRow)]
pub struct UserRow {
    pub id: Uuid,
    pub email: String,
    pub name: String,
    pub password_digest: String,
    pub college: String,
    pub languages: String,
    pub frameworks: String,
    pub tools: String,
    pub platforms: String,
    pub soft_skills: String,
    pub projects: String,
    pub certifications: String,
    pub grad_year: String,
    pub cgpa: String,
    pub linkedin_url: String,
    pub github_url: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl UserRow {
    /// A freshly registered user: empty profile, graduation defaulted to next
    /// year.
    pub fn new(name: String, email: String, password_digest: String) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            email,
            name,
            password_digest,
            college: String::new(),
            languages: String::new(),
            frameworks: String::new(),
            tools: String::new(),
            platforms: String::new(),
            soft_skills: String::new(),
            projects: String::new(),
            certifications: String::new(),
            grad_year: (now.year() + 1).to_string(),
            cgpa: String::new(),
            linkedin_url: String::new(),
            github_url: String::new(),
            created_at: now,
            updated_at: now,
        }
    }

    pub fn apply(&mut self, update: ProfileUpdate) {
        self.name = update.name;
        self.college = update.college;
        self.languages = update.skills.languages;
        self.frameworks = update.skills.frameworks;
        self.tools = update.skills.tools;
        self.platforms = update.skills.platforms;
        self.soft_skills = update.skills.soft_skills;
        self.projects = update.projects;
        self.certifications = update.certifications;
        self.grad_year = update.grad_year;
        self.cgpa = update.cgpa;
        self.linkedin_url = update.linkedin_url;
        self.github_url = update.github_url;
        self.updated_at = Utc::now();
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SkillSet {
    pub languages: String,
    pub frameworks: String,
    pub tools: String,
    pub platforms: String,
    pub soft_skills: String,
}

/// Client-facing view of a user. Never carries the password digest.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Account {
    pub id: Uuid,
    pub email: String,
    pub name: String,
    pub college: String,
    pub skills: SkillSet,
    pub projects: String,
    pub certifications: String,
    pub grad_year: String,
    pub cgpa: String,
    pub linkedin_url: String,
    pub github_url: String,
}

impl From<&UserRow> for Account {
    fn from(row: &UserRow) -> Self {
        Account {
            id: row.id,
            email: row.email.clone(),
            name: row.name.clone(),
            college: row.college.clone(),
            skills: SkillSet {
                languages: row.languages.clone(),
                frameworks: row.frameworks.clone(),
                tools: row.tools.clone(),
                platforms: row.platforms.clone(),
                soft_skills: row.soft_skills.clone(),
            },
            projects: row.projects.clone(),
            certifications: row.certifications.clone(),
            grad_year: row.grad_year.clone(),
            cgpa: row.cgpa.clone(),
            linkedin_url: row.linkedin_url.clone(),
            github_url: row.github_url.clone(),
        }
    }
}

/// Editable profile fields. Auth fields (id, email, password) are untouched by
/// a profile update.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileUpdate {
    pub name: String,
    pub college: String,
    pub skills: SkillSet,
    pub projects: String,
    pub certifications: String,
    pub grad_year: String,
    pub cgpa: String,
    pub linkedin_url: String,
    pub github_url: String,
}
