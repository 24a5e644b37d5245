//! PostgreSQL queries for site content and leads.
//!
//! Every function takes a `&PgPool`. Queries are parameterized.

use chrono::{DateTime, Utc};
use makebetter_core::lead::{Lead, LeadSubmission};
use serde_json::Value;
use sqlx::{types::Json, PgPool};
use uuid::Uuid;

/// The site has exactly one content document.
const SITE_CONTENT_ID: i32 = 1;

#[derive(Debug, sqlx::FromRow)]
struct LeadRow {
    id: Uuid,
    name: String,
    company: String,
    email: String,
    message: String,
    created_at: DateTime<Utc>,
}

impl From<LeadRow> for Lead {
    fn from(row: LeadRow) -> Self {
        Lead {
            id: row.id,
            name: row.name,
            company: row.company,
            email: row.email,
            message: row.message,
            created_at: row.created_at,
        }
    }
}

/// Fetch the stored content document, if one was ever saved.
pub async fn fetch_content(pool: &PgPool) -> Result<Option<Value>, sqlx::Error> {
    let row: Option<(Json<Value>,)> =
        sqlx::query_as("SELECT content FROM site_content WHERE id = $1")
            .bind(SITE_CONTENT_ID)
            .fetch_optional(pool)
            .await?;

    Ok(row.map(|(Json(content),)| content))
}

/// Replace the content document wholesale, creating it on first write.
/// No revision check: the last writer wins.
pub async fn replace_content(pool: &PgPool, content: &Value) -> Result<(), sqlx::Error> {
    sqlx::query(
        r"INSERT INTO site_content (id, content, updated_at)
          VALUES ($1, $2, now())
          ON CONFLICT (id) DO UPDATE
          SET content = EXCLUDED.content, updated_at = now()",
    )
    .bind(SITE_CONTENT_ID)
    .bind(Json(content))
    .execute(pool)
    .await?;

    Ok(())
}

/// Append a lead. The store assigns `created_at`.
pub async fn insert_lead(pool: &PgPool, lead: &LeadSubmission) -> Result<Lead, sqlx::Error> {
    let row = sqlx::query_as::<_, LeadRow>(
        r"INSERT INTO leads (id, name, company, email, message)
          VALUES ($1, $2, $3, $4, $5)
          RETURNING id, name, company, email, message, created_at",
    )
    .bind(Uuid::now_v7())
    .bind(&lead.name)
    .bind(&lead.company)
    .bind(&lead.email)
    .bind(&lead.message)
    .fetch_one(pool)
    .await?;

    Ok(row.into())
}

/// All leads, newest first.
pub async fn list_leads(pool: &PgPool) -> Result<Vec<Lead>, sqlx::Error> {
    let rows = sqlx::query_as::<_, LeadRow>(
        r"SELECT id, name, company, email, message, created_at
          FROM leads
          ORDER BY created_at DESC",
    )
    .fetch_all(pool)
    .await?;

    Ok(rows.into_iter().map(Lead::from).collect())
}
