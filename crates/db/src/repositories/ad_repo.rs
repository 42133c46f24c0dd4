//! Repository for the `ads` table.
//!
//! Reads return [`Ad`] rows joined with the author's username and the
//! category name. Writes use a data-modifying CTE so the joined row comes
//! back from the same statement.

use classifieds_core::types::DbId;
use sqlx::postgres::PgArguments;
use sqlx::query::QueryAs;
use sqlx::{PgPool, Postgres};

use crate::models::ad::{Ad, AdFilter, CreateAd, UpdateAd};

/// Columns of [`Ad`], selected from `a` joined with `users u` and `categories c`.
const COLUMNS: &str = "a.id, a.author_id, u.username AS author, a.name, a.price, \
                       a.description, a.is_published, a.image, a.category_id, c.name AS category";

const JOINS: &str = "JOIN users u ON u.id = a.author_id JOIN categories c ON c.id = a.category_id";

/// Provides CRUD operations and filtered listing for ads.
pub struct AdRepo;

impl AdRepo {
    /// Insert a new ad, returning the created row.
    ///
    /// Callers check that the author and category exist first; a dangling
    /// reference still fails here with a foreign-key violation.
    pub async fn create(pool: &PgPool, input: &CreateAd) -> Result<Ad, sqlx::Error> {
        let query = format!(
            "WITH a AS (
                INSERT INTO ads (name, author_id, price, description, is_published, category_id)
                VALUES ($1, $2, $3, $4, $5, $6)
                RETURNING *
             )
             SELECT {COLUMNS} FROM a {JOINS}"
        );
        sqlx::query_as::<_, Ad>(&query)
            .bind(&input.name)
            .bind(input.author_id)
            .bind(input.price)
            .bind(&input.description)
            .bind(input.is_published)
            .bind(input.category_id)
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Ad>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM ads a {JOINS} WHERE a.id = $1");
        sqlx::query_as::<_, Ad>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Number of ads matching `filter`.
    pub async fn count(pool: &PgPool, filter: &AdFilter) -> Result<i64, sqlx::Error> {
        let (where_clause, _) = build_where(filter);
        let query = format!("SELECT COUNT(*) FROM ads a {where_clause}");
        let (count,) = bind_filter(sqlx::query_as::<_, (i64,)>(&query), filter)
            .fetch_one(pool)
            .await?;
        Ok(count)
    }

    /// One page of ads matching `filter`, most expensive first.
    /// Ads without a price sort ahead of all priced ones.
    pub async fn list_page(
        pool: &PgPool,
        filter: &AdFilter,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<Ad>, sqlx::Error> {
        let (where_clause, bind_idx) = build_where(filter);
        let query = format!(
            "SELECT {COLUMNS} FROM ads a {JOINS} \
             {where_clause} \
             ORDER BY a.price DESC, a.id \
             LIMIT ${bind_idx} OFFSET ${next_idx}",
            next_idx = bind_idx + 1,
        );
        bind_filter(sqlx::query_as::<_, Ad>(&query), filter)
            .bind(limit)
            .bind(offset)
            .fetch_all(pool)
            .await
    }

    /// Overwrite name, price, description, publication flag and category.
    ///
    /// Absent fields are written as null. Returns `None` if no row with the
    /// given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateAd,
    ) -> Result<Option<Ad>, sqlx::Error> {
        let query = format!(
            "WITH a AS (
                UPDATE ads SET
                    name = $2,
                    price = $3,
                    description = $4,
                    is_published = $5,
                    category_id = $6
                WHERE id = $1
                RETURNING *
             )
             SELECT {COLUMNS} FROM a {JOINS}"
        );
        sqlx::query_as::<_, Ad>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(input.price)
            .bind(&input.description)
            .bind(input.is_published)
            .bind(input.category_id)
            .fetch_optional(pool)
            .await
    }

    /// Record the stored image path (relative to the media root).
    pub async fn set_image(
        pool: &PgPool,
        id: DbId,
        image: &str,
    ) -> Result<Option<Ad>, sqlx::Error> {
        let query = format!(
            "WITH a AS (UPDATE ads SET image = $2 WHERE id = $1 RETURNING *)
             SELECT {COLUMNS} FROM a {JOINS}"
        );
        sqlx::query_as::<_, Ad>(&query)
            .bind(id)
            .bind(image)
            .fetch_optional(pool)
            .await
    }

    /// Delete an ad. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM ads WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}

/// Build the `WHERE` clause for `filter`, returning it together with the
/// next free bind index.
fn build_where(filter: &AdFilter) -> (String, u32) {
    let mut conditions = Vec::new();
    let mut bind_idx = 1u32;

    if filter.category_id.is_some() {
        conditions.push(format!("a.category_id = ${bind_idx}"));
        bind_idx += 1;
    }
    if filter.text.is_some() {
        conditions.push(format!("a.name ILIKE ${bind_idx} ESCAPE '\\'"));
        bind_idx += 1;
    }
    if filter.price_from.is_some() {
        conditions.push(format!("a.price >= ${bind_idx}"));
        bind_idx += 1;
    }
    if filter.price_to.is_some() {
        conditions.push(format!("a.price <= ${bind_idx}"));
        bind_idx += 1;
    }
    if filter.is_published.is_some() {
        conditions.push(format!("a.is_published = ${bind_idx}"));
        bind_idx += 1;
    }

    let where_clause = if conditions.is_empty() {
        String::new()
    } else {
        format!("WHERE {}", conditions.join(" AND "))
    };
    (where_clause, bind_idx)
}

/// Bind the filter values in the same order [`build_where`] numbered them.
fn bind_filter<'q, O>(
    mut q: QueryAs<'q, Postgres, O, PgArguments>,
    filter: &AdFilter,
) -> QueryAs<'q, Postgres, O, PgArguments> {
    if let Some(category_id) = filter.category_id {
        q = q.bind(category_id);
    }
    if let Some(ref text) = filter.text {
        q = q.bind(format!("%{}%", escape_like(text)));
    }
    if let Some(price_from) = filter.price_from {
        q = q.bind(price_from);
    }
    if let Some(price_to) = filter.price_to {
        q = q.bind(price_to);
    }
    if let Some(is_published) = filter.is_published {
        q = q.bind(is_published);
    }
    q
}

/// Escape `LIKE` wildcards so `text` matches literally under `ESCAPE '\'`.
fn escape_like(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        if matches!(c, '\\' | '%' | '_') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}
