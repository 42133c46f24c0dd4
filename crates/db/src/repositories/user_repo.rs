//! Repository for the `users` table.
//!
//! Every read joins the user's location so the API can show its name
//! next to `location_id`.

use classifieds_core::types::DbId;
use sqlx::{PgConnection, PgPool};

use crate::models::user::{CreateUser, UpdateUser, User, UserListItem, DEFAULT_ROLE};
use crate::repositories::LocationRepo;

/// Columns of [`User`], selected from `users u LEFT JOIN locations l`.
const COLUMNS: &str = "u.id, u.username, u.first_name, u.last_name, u.role, u.password, \
                       u.age, u.location_id, l.name AS location";

/// Provides CRUD operations for users.
pub struct UserRepo;

impl UserRepo {
    /// Insert a new user, returning the created row.
    ///
    /// The location name (if any) is resolved with get-or-create in the same
    /// transaction, so a failed insert leaves no stray location behind.
    pub async fn create(pool: &PgPool, input: &CreateUser) -> Result<User, sqlx::Error> {
        let mut tx = pool.begin().await?;
        let location_id = resolve_location(&mut *tx, input.location.as_deref()).await?;

        let query = format!(
            "WITH u AS (
                INSERT INTO users (username, first_name, last_name, role, password, age, location_id)
                VALUES ($1, $2, $3, $4, $5, $6, $7)
                RETURNING *
             )
             SELECT {COLUMNS} FROM u LEFT JOIN locations l ON l.id = u.location_id"
        );
        let user = sqlx::query_as::<_, User>(&query)
            .bind(&input.username)
            .bind(&input.first_name)
            .bind(&input.last_name)
            .bind(input.role.as_deref().unwrap_or(DEFAULT_ROLE))
            .bind(&input.password)
            .bind(input.age)
            .bind(location_id)
            .fetch_one(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(user)
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<User>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM users u LEFT JOIN locations l ON l.id = u.location_id
             WHERE u.id = $1"
        );
        sqlx::query_as::<_, User>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    pub async fn count(pool: &PgPool) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar("SELECT COUNT(*) FROM users")
            .fetch_one(pool)
            .await
    }

    /// One page of users ordered by username, each with the number of
    /// their published ads.
    pub async fn list_page(
        pool: &PgPool,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<UserListItem>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS},
                (SELECT COUNT(*) FROM ads a WHERE a.author_id = u.id AND a.is_published)
                    AS ads_published
             FROM users u LEFT JOIN locations l ON l.id = u.location_id
             ORDER BY u.username, u.id
             LIMIT $1 OFFSET $2"
        );
        sqlx::query_as::<_, UserListItem>(&query)
            .bind(limit)
            .bind(offset)
            .fetch_all(pool)
            .await
    }

    /// Overwrite password, names, age and location from `input`.
    ///
    /// Absent fields are written as null. Returns `None` if no row with the
    /// given `id` exists; any location created on the way is rolled back.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateUser,
    ) -> Result<Option<User>, sqlx::Error> {
        let mut tx = pool.begin().await?;
        let location_id = resolve_location(&mut *tx, input.location.as_deref()).await?;

        let query = format!(
            "WITH u AS (
                UPDATE users SET
                    password = $2,
                    first_name = $3,
                    last_name = $4,
                    age = $5,
                    location_id = $6
                WHERE id = $1
                RETURNING *
             )
             SELECT {COLUMNS} FROM u LEFT JOIN locations l ON l.id = u.location_id"
        );
        let user = sqlx::query_as::<_, User>(&query)
            .bind(id)
            .bind(&input.password)
            .bind(&input.first_name)
            .bind(&input.last_name)
            .bind(input.age)
            .bind(location_id)
            .fetch_optional(&mut *tx)
            .await?;

        if user.is_some() {
            tx.commit().await?;
        }
        Ok(user)
    }

    /// Delete a user (and, through the foreign key, their ads).
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM users WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}

async fn resolve_location(
    conn: &mut PgConnection,
    name: Option<&str>,
) -> Result<Option<DbId>, sqlx::Error> {
    match name {
        Some(name) => Ok(Some(LocationRepo::get_or_create(conn, name).await?.id)),
        None => Ok(None),
    }
}
