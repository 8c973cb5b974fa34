//! PostgreSQL Repository Implementations

use kernel::id::UserId;
use kernel::viewer::Role;
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::entity::{auth_session::AuthSession, user::User};
use crate::domain::repository::{AuthSessionRepository, UserRepository};
use crate::domain::value_object::{email::Email, user_name::UserName};
use crate::error::{AuthError, AuthResult};

/// PostgreSQL-backed auth repository
#[derive(Clone)]
pub struct PgAuthRepository {
    pool: PgPool,
}

impl PgAuthRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// Map a unique-constraint violation on insert to the matching domain error.
fn map_user_insert_error(err: sqlx::Error) -> AuthError {
    if let sqlx::Error::Database(db_err) = &err
        && db_err.code().as_deref() == Some("23505")
    {
        match db_err.constraint() {
            Some("users_email_key") => return AuthError::EmailTaken,
            Some("users_user_name_canonical_key") => return AuthError::UserNameTaken,
            _ => {}
        }
    }
    AuthError::Database(err)
}

// ============================================================================
// User Repository Implementation
// ============================================================================

impl UserRepository for PgAuthRepository {
    async fn create(&self, user: &User) -> AuthResult<()> {
        sqlx::query(
            r#"
            INSERT INTO users (
                user_id,
                email,
                user_name,
                user_name_canonical,
                role,
                password_hash,
                last_login_at_ms,
                created_at_ms
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            "#,
        )
        .bind(user.user_id.as_uuid())
        .bind(user.email.as_str())
        .bind(user.user_name.as_str())
        .bind(user.user_name.canonical())
        .bind(user.role.id())
        .bind(&user.password_hash)
        .bind(user.last_login_at_ms)
        .bind(user.created_at_ms)
        .execute(&self.pool)
        .await
        .map_err(map_user_insert_error)?;

        Ok(())
    }

    async fn find_by_id(&self, user_id: UserId) -> AuthResult<Option<User>> {
        let row = sqlx::query_as::<_, UserRow>(
            r#"
            SELECT
                user_id,
                email,
                user_name,
                role,
                password_hash,
                last_login_at_ms,
                created_at_ms
            FROM users
            WHERE user_id = $1
            "#,
        )
        .bind(user_id.as_uuid())
        .fetch_optional(&self.pool)
        .await?;

        row.map(|r| r.into_user()).transpose()
    }

    async fn find_by_email(&self, email: &Email) -> AuthResult<Option<User>> {
        let row = sqlx::query_as::<_, UserRow>(
            r#"
            SELECT
                user_id,
                email,
                user_name,
                role,
                password_hash,
                last_login_at_ms,
                created_at_ms
            FROM users
            WHERE email = $1
            "#,
        )
        .bind(email.as_str())
        .fetch_optional(&self.pool)
        .await?;

        row.map(|r| r.into_user()).transpose()
    }

    async fn exists_by_email(&self, email: &Email) -> AuthResult<bool> {
        let exists =
            sqlx::query_scalar::<_, bool>("SELECT EXISTS(SELECT 1 FROM users WHERE email = $1)")
                .bind(email.as_str())
                .fetch_one(&self.pool)
                .await?;

        Ok(exists)
    }

    async fn exists_by_user_name(&self, user_name: &UserName) -> AuthResult<bool> {
        let exists = sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS(SELECT 1 FROM users WHERE user_name_canonical = $1)",
        )
        .bind(user_name.canonical())
        .fetch_one(&self.pool)
        .await?;

        Ok(exists)
    }

    async fn record_login(&self, user_id: UserId, now_ms: i64) -> AuthResult<()> {
        sqlx::query("UPDATE users SET last_login_at_ms = $2 WHERE user_id = $1")
            .bind(user_id.as_uuid())
            .bind(now_ms)
            .execute(&self.pool)
            .await?;

        Ok(())
    }
}

// ============================================================================
// Auth Session Repository Implementation
// ============================================================================

impl AuthSessionRepository for PgAuthRepository {
    async fn create(&self, session: &AuthSession) -> AuthResult<()> {
        sqlx::query(
            r#"
            INSERT INTO auth_sessions (token, user_id, created_at_ms, expires_at_ms)
            VALUES ($1, $2, $3, $4)
            "#,
        )
        .bind(&session.token)
        .bind(session.user_id.as_uuid())
        .bind(session.created_at_ms)
        .bind(session.expires_at_ms)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn find_by_token(&self, token: &str) -> AuthResult<Option<AuthSession>> {
        let row = sqlx::query_as::<_, AuthSessionRow>(
            r#"
            SELECT token, user_id, created_at_ms, expires_at_ms
            FROM auth_sessions
            WHERE token = $1
            "#,
        )
        .bind(token)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(|r| r.into_session()))
    }

    async fn delete(&self, token: &str) -> AuthResult<()> {
        sqlx::query("DELETE FROM auth_sessions WHERE token = $1")
            .bind(token)
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    async fn cleanup_expired(&self, now_ms: i64) -> AuthResult<u64> {
        let deleted = sqlx::query("DELETE FROM auth_sessions WHERE expires_at_ms <= $1")
            .bind(now_ms)
            .execute(&self.pool)
            .await?
            .rows_affected();

        if deleted > 0 {
            tracing::info!(sessions_deleted = deleted, "Cleaned up expired auth sessions");
        }

        Ok(deleted)
    }
}

// ============================================================================
// Row Types
// ============================================================================

#[derive(sqlx::FromRow)]
struct UserRow {
    user_id: Uuid,
    email: String,
    user_name: String,
    role: i16,
    password_hash: String,
    last_login_at_ms: Option<i64>,
    created_at_ms: i64,
}

impl UserRow {
    fn into_user(self) -> AuthResult<User> {
        let role = Role::from_id(self.role)
            .ok_or_else(|| AuthError::Internal(format!("Invalid role code: {}", self.role)))?;

        Ok(User {
            user_id: UserId::from_uuid(self.user_id),
            email: Email::from_db(self.email),
            user_name: UserName::from_db(self.user_name),
            role,
            password_hash: self.password_hash,
            last_login_at_ms: self.last_login_at_ms,
            created_at_ms: self.created_at_ms,
        })
    }
}

#[derive(sqlx::FromRow)]
struct AuthSessionRow {
    token: String,
    user_id: Uuid,
    created_at_ms: i64,
    expires_at_ms: i64,
}

impl AuthSessionRow {
    fn into_session(self) -> AuthSession {
        AuthSession {
            token: self.token,
            user_id: UserId::from_uuid(self.user_id),
            created_at_ms: self.created_at_ms,
            expires_at_ms: self.expires_at_ms,
        }
    }
}
