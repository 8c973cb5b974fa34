//! PostgreSQL Repository Implementations
//!
//! Uniqueness is enforced by the database constraints, not by
//! check-then-act in application code. The status transition is a
//! conditional UPDATE so the pending precondition holds at commit time.

use std::collections::HashMap;

use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::entity::link::{Link, NewLink, TagRef};
use crate::domain::entity::tag::{NewTag, Tag, TagPatch, TagWithUsage};
use crate::domain::repository::{LinkRepository, TagRepository};
use crate::domain::value_object::link_status::LinkStatus;
use crate::domain::value_object::submitted_url::SubmittedUrl;
use crate::domain::value_object::tag_name::TagName;
use crate::error::{LinksError, LinksResult};

/// PostgreSQL-backed links repository
#[derive(Clone)]
pub struct PgLinksRepository {
    pool: PgPool,
}

impl PgLinksRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    async fn tags_for_links(&self, link_ids: &[i64]) -> LinksResult<HashMap<i64, Vec<TagRef>>> {
        if link_ids.is_empty() {
            return Ok(HashMap::new());
        }

        let rows = sqlx::query_as::<_, LinkTagRow>(
            r#"
            SELECT lt.link_id, t.id, t.name, t.display_name
            FROM link_tags lt
            JOIN tags t ON t.id = lt.tag_id
            WHERE lt.link_id = ANY($1)
            "#,
        )
        .bind(link_ids)
        .fetch_all(&self.pool)
        .await?;

        let mut by_link: HashMap<i64, Vec<TagRef>> = HashMap::new();
        for row in rows {
            by_link.entry(row.link_id).or_default().push(TagRef {
                id: row.id,
                name: row.name,
                display_name: row.display_name,
            });
        }
        Ok(by_link)
    }
}

/// Map constraint violations on link insert to domain errors.
fn map_link_insert_error(err: sqlx::Error) -> LinksError {
    if let sqlx::Error::Database(db_err) = &err {
        match (db_err.code().as_deref(), db_err.constraint()) {
            (Some("23505"), Some("links_url_key")) => return LinksError::DuplicateUrl,
            (Some("23503"), Some("link_tags_tag_id_fkey")) => return LinksError::TagNotFound,
            _ => {}
        }
    }
    LinksError::Database(err)
}

fn map_tag_insert_error(err: sqlx::Error) -> LinksError {
    if let sqlx::Error::Database(db_err) = &err
        && db_err.code().as_deref() == Some("23505")
        && db_err.constraint() == Some("tags_name_key")
    {
        return LinksError::DuplicateTag;
    }
    LinksError::Database(err)
}

// ============================================================================
// Link Repository Implementation
// ============================================================================

impl LinkRepository for PgLinksRepository {
    async fn create(&self, new_link: &NewLink) -> LinksResult<i64> {
        let mut tx = self.pool.begin().await?;

        let link_id: i64 = sqlx::query_scalar(
            r#"
            INSERT INTO links (
                url,
                title,
                submitter_id,
                status,
                created_at_ms,
                approved_at_ms,
                approved_by
            ) VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING id
            "#,
        )
        .bind(new_link.url.as_str())
        .bind(&new_link.title)
        .bind(new_link.submitter_id)
        .bind(new_link.status.id())
        .bind(new_link.created_at_ms)
        .bind(new_link.approved_at_ms)
        .bind(new_link.approved_by)
        .fetch_one(&mut *tx)
        .await
        .map_err(map_link_insert_error)?;

        for tag_id in &new_link.tag_ids {
            sqlx::query("INSERT INTO link_tags (link_id, tag_id) VALUES ($1, $2)")
                .bind(link_id)
                .bind(tag_id)
                .execute(&mut *tx)
                .await
                .map_err(map_link_insert_error)?;
        }

        tx.commit().await?;

        Ok(link_id)
    }

    async fn find_by_id(&self, id: i64) -> LinksResult<Option<Link>> {
        let row = sqlx::query_as::<_, LinkRow>(
            r#"
            SELECT id, url, title, submitter_id, status,
                   created_at_ms, approved_at_ms, approved_by
            FROM links
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        let Some(row) = row else {
            return Ok(None);
        };

        let mut tags_by_link = self.tags_for_links(&[row.id]).await?;
        let tags = tags_by_link.remove(&row.id).unwrap_or_default();

        Ok(Some(row.into_link(tags)?))
    }

    async fn list_recent(&self) -> LinksResult<Vec<Link>> {
        let rows = sqlx::query_as::<_, LinkRow>(
            r#"
            SELECT id, url, title, submitter_id, status,
                   created_at_ms, approved_at_ms, approved_by
            FROM links
            WHERE status IN ($1, $2)
            ORDER BY created_at_ms DESC
            "#,
        )
        .bind(LinkStatus::Live.id())
        .bind(LinkStatus::Pending.id())
        .fetch_all(&self.pool)
        .await?;

        let link_ids: Vec<i64> = rows.iter().map(|r| r.id).collect();
        let mut tags_by_link = self.tags_for_links(&link_ids).await?;

        rows.into_iter()
            .map(|row| {
                let tags = tags_by_link.remove(&row.id).unwrap_or_default();
                row.into_link(tags)
            })
            .collect()
    }

    async fn resolve(
        &self,
        id: i64,
        status: LinkStatus,
        approver: Uuid,
        now_ms: i64,
    ) -> LinksResult<bool> {
        // Conditional update re-checks the pending precondition at
        // commit time
        let affected = sqlx::query(
            r#"
            UPDATE links
            SET status = $2, approved_at_ms = $3, approved_by = $4
            WHERE id = $1 AND status = $5
            "#,
        )
        .bind(id)
        .bind(status.id())
        .bind(now_ms)
        .bind(approver)
        .bind(LinkStatus::Pending.id())
        .execute(&self.pool)
        .await?
        .rows_affected();

        Ok(affected == 1)
    }

    async fn update_title(&self, id: i64, title: &str) -> LinksResult<()> {
        sqlx::query("UPDATE links SET title = $2 WHERE id = $1")
            .bind(id)
            .bind(title)
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    async fn replace_tags(&self, id: i64, tag_ids: &[i64]) -> LinksResult<()> {
        let mut tx = self.pool.begin().await?;

        sqlx::query("DELETE FROM link_tags WHERE link_id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        for tag_id in tag_ids {
            sqlx::query("INSERT INTO link_tags (link_id, tag_id) VALUES ($1, $2)")
                .bind(id)
                .bind(tag_id)
                .execute(&mut *tx)
                .await
                .map_err(map_link_insert_error)?;
        }

        tx.commit().await?;

        Ok(())
    }

    async fn pending_count(&self) -> LinksResult<i64> {
        let count =
            sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM links WHERE status = $1")
                .bind(LinkStatus::Pending.id())
                .fetch_one(&self.pool)
                .await?;

        Ok(count)
    }
}

// ============================================================================
// Tag Repository Implementation
// ============================================================================

impl TagRepository for PgLinksRepository {
    async fn create_tag(&self, new_tag: &NewTag) -> LinksResult<Tag> {
        let id: i64 = sqlx::query_scalar(
            r#"
            INSERT INTO tags (name, display_name, description, color, created_by, created_at_ms)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING id
            "#,
        )
        .bind(new_tag.name.as_str())
        .bind(&new_tag.display_name)
        .bind(&new_tag.description)
        .bind(&new_tag.color)
        .bind(new_tag.created_by)
        .bind(new_tag.created_at_ms)
        .fetch_one(&self.pool)
        .await
        .map_err(map_tag_insert_error)?;

        Ok(Tag {
            id,
            name: new_tag.name.clone(),
            display_name: new_tag.display_name.clone(),
            description: new_tag.description.clone(),
            color: new_tag.color.clone(),
            created_by: Some(new_tag.created_by),
            created_at_ms: new_tag.created_at_ms,
        })
    }

    async fn find_tag_by_id(&self, id: i64) -> LinksResult<Option<Tag>> {
        let row = sqlx::query_as::<_, TagRow>(
            r#"
            SELECT id, name, display_name, description, color, created_by, created_at_ms
            FROM tags
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(|r| r.into_tag()))
    }

    async fn list_tags(&self) -> LinksResult<Vec<TagWithUsage>> {
        let rows = sqlx::query_as::<_, TagUsageRow>(
            r#"
            SELECT t.id, t.name, t.display_name, t.description, t.color,
                   t.created_by, t.created_at_ms,
                   COUNT(lt.link_id) AS url_count
            FROM tags t
            LEFT JOIN link_tags lt ON t.id = lt.tag_id
            GROUP BY t.id
            ORDER BY t.display_name ASC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(|r| r.into_tag_with_usage()).collect())
    }

    async fn update_tag(&self, id: i64, patch: &TagPatch) -> LinksResult<()> {
        sqlx::query(
            r#"
            UPDATE tags SET
                display_name = COALESCE($2, display_name),
                description = COALESCE($3, description),
                color = COALESCE($4, color)
            WHERE id = $1
            "#,
        )
        .bind(id)
        .bind(&patch.display_name)
        .bind(&patch.description)
        .bind(&patch.color)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn delete_tag(&self, id: i64) -> LinksResult<()> {
        // link_tags rows go with it via ON DELETE CASCADE
        sqlx::query("DELETE FROM tags WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(())
    }
}

// ============================================================================
// Row Types
// ============================================================================

#[derive(sqlx::FromRow)]
struct LinkRow {
    id: i64,
    url: String,
    title: String,
    submitter_id: Option<Uuid>,
    status: i16,
    created_at_ms: i64,
    approved_at_ms: Option<i64>,
    approved_by: Option<Uuid>,
}

impl LinkRow {
    fn into_link(self, tags: Vec<TagRef>) -> LinksResult<Link> {
        let status = LinkStatus::from_id(self.status)
            .ok_or_else(|| LinksError::Internal(format!("Invalid status code: {}", self.status)))?;

        Ok(Link {
            id: self.id,
            url: SubmittedUrl::from_db(self.url),
            title: self.title,
            submitter_id: self.submitter_id,
            status,
            created_at_ms: self.created_at_ms,
            approved_at_ms: self.approved_at_ms,
            approved_by: self.approved_by,
            tags,
        })
    }
}

#[derive(sqlx::FromRow)]
struct LinkTagRow {
    link_id: i64,
    id: i64,
    name: String,
    display_name: String,
}

#[derive(sqlx::FromRow)]
struct TagRow {
    id: i64,
    name: String,
    display_name: String,
    description: Option<String>,
    color: Option<String>,
    created_by: Option<Uuid>,
    created_at_ms: i64,
}

impl TagRow {
    fn into_tag(self) -> Tag {
        Tag {
            id: self.id,
            name: TagName::from_db(self.name),
            display_name: self.display_name,
            description: self.description,
            color: self.color,
            created_by: self.created_by,
            created_at_ms: self.created_at_ms,
        }
    }
}

#[derive(sqlx::FromRow)]
struct TagUsageRow {
    id: i64,
    name: String,
    display_name: String,
    description: Option<String>,
    color: Option<String>,
    created_by: Option<Uuid>,
    created_at_ms: i64,
    url_count: i64,
}

impl TagUsageRow {
    fn into_tag_with_usage(self) -> TagWithUsage {
        TagWithUsage {
            tag: Tag {
                id: self.id,
                name: TagName::from_db(self.name),
                display_name: self.display_name,
                description: self.description,
                color: self.color,
                created_by: self.created_by,
                created_at_ms: self.created_at_ms,
            },
            url_count: self.url_count,
        }
    }
}
