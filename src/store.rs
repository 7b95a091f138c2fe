//! src/store.rs

use crate::domain::{NewRegistrant, RegistrantEmail};
use anyhow::Context;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

/// A registrant as persisted in the store.
#[derive(Debug, Clone, PartialEq, Eq, sqlx::FromRow)]
pub struct Registrant {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub registered_at: DateTime<Utc>,
}

impl Registrant {
    pub fn from_new(new_registrant: &NewRegistrant) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: new_registrant.name.as_ref().to_owned(),
            email: new_registrant.email.as_ref().to_owned(),
            registered_at: Utc::now(),
        }
    }
}

/// Persistence of waitlist registrants.
///
/// `insert` is unconditional: uniqueness by email is only checked by callers
/// through `find_by_email`.
#[async_trait]
pub trait RegistrantStore: Send + Sync {
    async fn find_by_email(&self, email: &RegistrantEmail) -> anyhow::Result<Option<Registrant>>;

    async fn insert(&self, new_registrant: &NewRegistrant) -> anyhow::Result<Registrant>;
}

pub struct PgRegistrantStore {
    pool: PgPool,
}

impl PgRegistrantStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl RegistrantStore for PgRegistrantStore {
    #[tracing::instrument(name = "Look up registrant by email", skip(self))]
    async fn find_by_email(&self, email: &RegistrantEmail) -> anyhow::Result<Option<Registrant>> {
        sqlx::query_as::<_, Registrant>(
            r#"SELECT id, name, email, registered_at FROM registrants
            WHERE email = $1
            LIMIT 1"#,
        )
        .bind(email.as_ref())
        .fetch_optional(&self.pool)
        .await
        .context("Failed to look up registrant by email.")
    }

    #[tracing::instrument(name = "Saving new registrant in the database", skip_all)]
    async fn insert(&self, new_registrant: &NewRegistrant) -> anyhow::Result<Registrant> {
        let registrant = Registrant::from_new(new_registrant);
        sqlx::query(
            r#"INSERT INTO registrants (id, name, email, registered_at)
            VALUES ($1, $2, $3, $4)"#,
        )
        .bind(registrant.id)
        .bind(&registrant.name)
        .bind(&registrant.email)
        .bind(registrant.registered_at)
        .execute(&self.pool)
        .await
        .context("Failed to insert new registrant in the database.")?;
        Ok(registrant)
    }
}
