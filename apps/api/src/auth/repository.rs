#![allow(dead_code)]

//! Repository interfaces over the simulated user/auth tables.
//!
//! The user table has read-modify-write update semantics with exactly one
//! writer (this process). `put` is a whole-record upsert; there is no
//! field-level merge and no concurrent-writer coordination.
//!
//! Carried in `AppState` as `Arc<dyn UserRepository>` / `Arc<dyn
//! SessionRepository>` so tests can swap in the in-memory backend.

use std::collections::HashMap;
use std::sync::RwLock;

use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::user::UserRow;

#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn get(&self, id: Uuid) -> Result<Option<UserRow>, AppError>;
    async fn get_by_email(&self, email: &str) -> Result<Option<UserRow>, AppError>;
    /// Whole-record upsert keyed by `id`.
    async fn put(&self, user: &UserRow) -> Result<(), AppError>;
}

#[async_trait]
pub trait SessionRepository: Send + Sync {
    async fn create(&self, user_id: Uuid) -> Result<Uuid, AppError>;
    async fn user_for(&self, token: Uuid) -> Result<Option<Uuid>, AppError>;
    async fn revoke(&self, token: Uuid) -> Result<(), AppError>;
}

// ────────────────────────────────────────────────────────────────────────────
// PostgreSQL backend
// ────────────────────────────────────────────────────────────────────────────

pub struct PgUserRepository {
    pool: PgPool,
}

impl PgUserRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserRepository for PgUserRepository {
    async fn get(&self, id: Uuid) -> Result<Option<UserRow>, AppError> {
        let row = sqlx::query_as("SELECT * FROM users WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row)
    }

    async fn get_by_email(&self, email: &str) -> Result<Option<UserRow>, AppError> {
        let row = sqlx::query_as("SELECT * FROM users WHERE lower(email) = lower($1)")
            .bind(email)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row)
    }

    async fn put(&self, user: &UserRow) -> Result<(), AppError> {
        sqlx::query(
            r#"
            INSERT INTO users
                (id, email, name, password_digest, college, languages, frameworks,
                 tools, platforms, soft_skills, projects, certifications,
                 grad_year, cgpa, linkedin_url, github_url, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, $15, $16, $17, $18)
            ON CONFLICT (id) DO UPDATE SET
                email = EXCLUDED.email,
                name = EXCLUDED.name,
                password_digest = EXCLUDED.password_digest,
                college = EXCLUDED.college,
                languages = EXCLUDED.languages,
                frameworks = EXCLUDED.frameworks,
                tools = EXCLUDED.tools,
                platforms = EXCLUDED.platforms,
                soft_skills = EXCLUDED.soft_skills,
                projects = EXCLUDED.projects,
                certifications = EXCLUDED.certifications,
                grad_year = EXCLUDED.grad_year,
                cgpa = EXCLUDED.cgpa,
                linkedin_url = EXCLUDED.linkedin_url,
                github_url = EXCLUDED.github_url,
                updated_at = EXCLUDED.updated_at
            "#,
        )
        .bind(user.id)
        .bind(&user.email)
        .bind(&user.name)
        .bind(&user.password_digest)
        .bind(&user.college)
        .bind(&user.languages)
        .bind(&user.frameworks)
        .bind(&user.tools)
        .bind(&user.platforms)
        .bind(&user.soft_skills)
        .bind(&user.projects)
        .bind(&user.certifications)
        .bind(&user.grad_year)
        .bind(&user.cgpa)
        .bind(&user.linkedin_url)
        .bind(&user.github_url)
        .bind(user.created_at)
        .bind(user.updated_at)
        .execute(&self.pool)
        .await?;
        Ok(())
    }
}

pub struct PgSessionRepository {
    pool: PgPool,
}

impl PgSessionRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl SessionRepository for PgSessionRepository {
    async fn create(&self, user_id: Uuid) -> Result<Uuid, AppError> {
        let token = Uuid::new_v4();
        sqlx::query("INSERT INTO sessions (token, user_id) VALUES ($1, $2)")
            .bind(token)
            .bind(user_id)
            .execute(&self.pool)
            .await?;
        Ok(token)
    }

    async fn user_for(&self, token: Uuid) -> Result<Option<Uuid>, AppError> {
        let user_id = sqlx::query_scalar("SELECT user_id FROM sessions WHERE token = $1")
            .bind(token)
            .fetch_optional(&self.pool)
            .await?;
        Ok(user_id)
    }

    async fn revoke(&self, token: Uuid) -> Result<(), AppError> {
        sqlx::query("DELETE FROM sessions WHERE token = $1")
            .bind(token)
            .execute(&self.pool)
            .await?;
        Ok(())
    }
}

// ────────────────────────────────────────────────────────────────────────────
// In-memory backend — unit tests and local experiments
// ────────────────────────────────────────────────────────────────────────────

#[derive(Default)]
pub struct InMemoryUserRepository {
    users: RwLock<HashMap<Uuid, UserRow>>,
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn get(&self, id: Uuid) -> Result<Option<UserRow>, AppError> {
        Ok(self.users.read().unwrap().get(&id).cloned())
    }

    async fn get_by_email(&self, email: &str) -> Result<Option<UserRow>, AppError> {
        Ok(self
            .users
            .read()
            .unwrap()
            .values()
            .find(|u| u.email.eq_ignore_ascii_case(email))
            .cloned())
    }

    async fn put(&self, user: &UserRow) -> Result<(), AppError> {
        self.users.write().unwrap().insert(user.id, user.clone());
        Ok(())
    }
}

#[derive(Default)]
pub struct InMemorySessionRepository {
    sessions: RwLock<HashMap<Uuid, Uuid>>,
}

#[async_trait]
impl SessionRepository for InMemorySessionRepository {
    async fn create(&self, user_id: Uuid) -> Result<Uuid, AppError> {
        let token = Uuid::new_v4();
        self.sessions.write().unwrap().insert(token, user_id);
        Ok(token)
    }

    async fn user_for(&self, token: Uuid) -> Result<Option<Uuid>, AppError> {
        Ok(self.sessions.read().unwrap().get(&token).copied())
    }

    async fn revoke(&self, token: Uuid) -> Result<(), AppError> {
        self.sessions.write().unwrap().remove(&token);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::password_digest;

    fn sample_user(email: &str) -> UserRow {
        UserRow::new(
            "Asha Rao".to_string(),
            email.to_string(),
            password_digest("pw"),
        )
    }

    #[tokio::test]
    async fn test_put_then_get() {
        let repo = InMemoryUserRepository::default();
        let user = sample_user("asha@example.com");
        repo.put(&user).await.unwrap();
        let fetched = repo.get(user.id).await.unwrap().unwrap();
        assert_eq!(fetched.email, "asha@example.com");
    }

    #[tokio::test]
    async fn test_get_by_email_is_case_insensitive() {
        let repo = InMemoryUserRepository::default();
        repo.put(&sample_user("Asha@Example.com")).await.unwrap();
        assert!(repo
            .get_by_email("asha@example.com")
            .await
            .unwrap()
            .is_some());
    }

    #[tokio::test]
    async fn test_put_replaces_whole_record() {
        let repo = InMemoryUserRepository::default();
        let mut user = sample_user("asha@example.com");
        repo.put(&user).await.unwrap();

        user.college = "IIT Bombay".to_string();
        user.projects = "A compiler".to_string();
        repo.put(&user).await.unwrap();

        let fetched = repo.get(user.id).await.unwrap().unwrap();
        assert_eq!(fetched.college, "IIT Bombay");
        assert_eq!(fetched.projects, "A compiler");
    }

    #[tokio::test]
    async fn test_session_round_trip_and_revoke() {
        let sessions = InMemorySessionRepository::default();
        let user_id = Uuid::new_v4();
        let token = sessions.create(user_id).await.unwrap();
        assert_eq!(sessions.user_for(token).await.unwrap(), Some(user_id));

        sessions.revoke(token).await.unwrap();
        assert_eq!(sessions.user_for(token).await.unwrap(), None);
    }
}
