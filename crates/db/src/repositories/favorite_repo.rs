//! Repository for the `favorite_characters` and `favorite_planets` junction tables.
//!
//! Every method is generic over [`FavoriteTarget`], which supplies the table
//! and column names. Those names are compile-time constants, never user input.

use holonet_core::types::DbId;
use sqlx::PgExecutor;

use crate::favorites::FavoriteTarget;

/// Single-statement operations on favorite association rows.
///
/// The ordered existence and duplicate checks live in
/// [`crate::favorites`]; this type only talks to the database.
pub struct FavoriteRepo;

impl FavoriteRepo {
    /// Whether the target entity (character or planet) exists.
    pub async fn target_exists<'e, T, E>(executor: E, target_id: DbId) -> Result<bool, sqlx::Error>
    where
        T: FavoriteTarget,
        E: PgExecutor<'e>,
    {
        let query = format!(
            "SELECT EXISTS (SELECT 1 FROM {} WHERE id = $1)",
            T::TARGET_TABLE
        );
        sqlx::query_scalar::<_, bool>(&query)
            .bind(target_id)
            .fetch_one(executor)
            .await
    }

    /// Find the association row for the full `(user_id, target_id)` key.
    pub async fn find<'e, T, E>(
        executor: E,
        user_id: DbId,
        target_id: DbId,
    ) -> Result<Option<T::Row>, sqlx::Error>
    where
        T: FavoriteTarget,
        E: PgExecutor<'e>,
    {
        let query = format!(
            "SELECT user_id, {col}, added_date FROM {table}
             WHERE user_id = $1 AND {col} = $2",
            col = T::TARGET_COLUMN,
            table = T::TABLE,
        );
        sqlx::query_as::<_, T::Row>(&query)
            .bind(user_id)
            .bind(target_id)
            .fetch_optional(executor)
            .await
    }

    /// Insert an association row stamped with the current time.
    ///
    /// Fails with a unique violation if the pair already exists.
    pub async fn insert<'e, T, E>(
        executor: E,
        user_id: DbId,
        target_id: DbId,
    ) -> Result<T::Row, sqlx::Error>
    where
        T: FavoriteTarget,
        E: PgExecutor<'e>,
    {
        let query = format!(
            "INSERT INTO {table} (user_id, {col}, added_date)
             VALUES ($1, $2, NOW())
             RETURNING user_id, {col}, added_date",
            col = T::TARGET_COLUMN,
            table = T::TABLE,
        );
        sqlx::query_as::<_, T::Row>(&query)
            .bind(user_id)
            .bind(target_id)
            .fetch_one(executor)
            .await
    }

    /// Delete the association row. Returns `true` if a row was removed.
    pub async fn delete<'e, T, E>(
        executor: E,
        user_id: DbId,
        target_id: DbId,
    ) -> Result<bool, sqlx::Error>
    where
        T: FavoriteTarget,
        E: PgExecutor<'e>,
    {
        let query = format!(
            "DELETE FROM {table} WHERE user_id = $1 AND {col} = $2",
            col = T::TARGET_COLUMN,
            table = T::TABLE,
        );
        let result = sqlx::query(&query)
            .bind(user_id)
            .bind(target_id)
            .execute(executor)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// List a user's favorites of one kind, oldest first.
    pub async fn list_for_user<'e, T, E>(
        executor: E,
        user_id: DbId,
    ) -> Result<Vec<T::Row>, sqlx::Error>
    where
        T: FavoriteTarget,
        E: PgExecutor<'e>,
    {
        let query = format!(
            "SELECT user_id, {col}, added_date FROM {table}
             WHERE user_id = $1
             ORDER BY added_date ASC, {col} ASC",
            col = T::TARGET_COLUMN,
            table = T::TABLE,
        );
        sqlx::query_as::<_, T::Row>(&query)
            .bind(user_id)
            .fetch_all(executor)
            .await
    }

    /// Count association rows of one kind that reference a user.
    pub async fn count_for_user<'e, T, E>(executor: E, user_id: DbId) -> Result<i64, sqlx::Error>
    where
        T: FavoriteTarget,
        E: PgExecutor<'e>,
    {
        let query = format!("SELECT COUNT(*) FROM {} WHERE user_id = $1", T::TABLE);
        sqlx::query_scalar::<_, i64>(&query)
            .bind(user_id)
            .fetch_one(executor)
            .await
    }

    /// Count association rows that reference a target entity.
    pub async fn count_for_target<'e, T, E>(
        executor: E,
        target_id: DbId,
    ) -> Result<i64, sqlx::Error>
    where
        T: FavoriteTarget,
        E: PgExecutor<'e>,
    {
        let query = format!(
            "SELECT COUNT(*) FROM {} WHERE {} = $1",
            T::TABLE,
            T::TARGET_COLUMN
        );
        sqlx::query_scalar::<_, i64>(&query)
            .bind(target_id)
            .fetch_one(executor)
            .await
    }
}
