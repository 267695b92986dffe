//! Profile store — read-only access to user profiles owned by the account
//! service.
//!
//! `AppState` holds an `Option<Arc<dyn ProfileStore>>`; `None` when no
//! database is configured, in which case only the body-based estimate
//! endpoint is usable.

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::debug;
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::user::UserProfileRow;

#[async_trait]
pub trait ProfileStore: Send + Sync {
    async fn get_profile(&self, user_id: Uuid) -> Result<Option<UserProfileRow>, AppError>;
}

/// Reads profiles from the `user_profiles` table.
pub struct PgProfileStore {
    pool: PgPool,
}

impl PgProfileStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ProfileStore for PgProfileStore {
    async fn get_profile(&self, user_id: Uuid) -> Result<Option<UserProfileRow>, AppError> {
        let row = sqlx::query_as::<_, UserProfileRow>(
            r#"
            SELECT user_id, role, career, location, experience, education, updated_at
            FROM user_profiles
            WHERE user_id = $1
            "#,
        )
        .bind(user_id)
        .fetch_optional(&self.pool)
        .await?;

        debug!("Profile lookup for {user_id}: found={}", row.is_some());
        Ok(row)
    }
}
