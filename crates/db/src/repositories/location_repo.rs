//! Repository for the `locations` table.

use classifieds_core::types::DbId;
use sqlx::{PgConnection, PgPool};

use crate::models::location::{CreateLocation, Location, UpdateLocation};

const COLUMNS: &str = "id, name";

/// Provides CRUD operations and get-or-create lookup for locations.
pub struct LocationRepo;

impl LocationRepo {
    pub async fn create(pool: &PgPool, input: &CreateLocation) -> Result<Location, sqlx::Error> {
        let query = format!("INSERT INTO locations (name) VALUES ($1) RETURNING {COLUMNS}");
        sqlx::query_as::<_, Location>(&query)
            .bind(&input.name)
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Location>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM locations WHERE id = $1");
        sqlx::query_as::<_, Location>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find the oldest location with exactly this name.
    pub async fn find_by_name(
        conn: &mut PgConnection,
        name: &str,
    ) -> Result<Option<Location>, sqlx::Error> {
        let query =
            format!("SELECT {COLUMNS} FROM locations WHERE name = $1 ORDER BY id LIMIT 1");
        sqlx::query_as::<_, Location>(&query)
            .bind(name)
            .fetch_optional(conn)
            .await
    }

    /// Return the location with this name, inserting it if none exists.
    ///
    /// Runs on the caller's connection so it can join a larger transaction.
    /// Names are not unique-constrained; concurrent callers may each insert.
    pub async fn get_or_create(
        conn: &mut PgConnection,
        name: &str,
    ) -> Result<Location, sqlx::Error> {
        if let Some(existing) = Self::find_by_name(&mut *conn, name).await? {
            return Ok(existing);
        }

        tracing::debug!(name, "Creating location");
        let query = format!("INSERT INTO locations (name) VALUES ($1) RETURNING {COLUMNS}");
        sqlx::query_as::<_, Location>(&query)
            .bind(name)
            .fetch_one(conn)
            .await
    }

    pub async fn count(pool: &PgPool) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar("SELECT COUNT(*) FROM locations")
            .fetch_one(pool)
            .await
    }

    /// One page of locations ordered by name.
    pub async fn list_page(
        pool: &PgPool,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<Location>, sqlx::Error> {
        let query =
            format!("SELECT {COLUMNS} FROM locations ORDER BY name, id LIMIT $1 OFFSET $2");
        sqlx::query_as::<_, Location>(&query)
            .bind(limit)
            .bind(offset)
            .fetch_all(pool)
            .await
    }

    /// Overwrite the location name. Returns `None` if the row does not exist.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateLocation,
    ) -> Result<Option<Location>, sqlx::Error> {
        let query = format!("UPDATE locations SET name = $2 WHERE id = $1 RETURNING {COLUMNS}");
        sqlx::query_as::<_, Location>(&query)
            .bind(id)
            .bind(&input.name)
            .fetch_optional(pool)
            .await
    }

    /// Delete a location. Users living there keep their row with a null location.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM locations WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
