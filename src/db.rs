use async_trait::async_trait;
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;

use crate::error::StoreError;
use crate::models::Todo;

/// Storage for todo rows. Implementations wrap a single `todos` table with
/// columns `(id, status, body)`; ids are store-assigned integers carried as
/// strings at this boundary because they arrive as path parameters.
#[async_trait]
pub trait TodoStore: Send + Sync {
    /// All todos, in store order.
    async fn list(&self) -> Result<Vec<Todo>, StoreError>;

    /// Inserts a new todo with `status = false` and returns the row the
    /// store assigned, id included.
    async fn insert(&self, body: &str) -> Result<Todo, StoreError>;

    /// The row for `id`, or `StoreError::NotFound`.
    async fn fetch(&self, id: &str) -> Result<Todo, StoreError>;

    /// Writes `status` for `id`. Succeeds affecting zero rows when the id
    /// is absent, like the UPDATE it wraps.
    async fn set_status(&self, id: &str, status: bool) -> Result<(), StoreError>;

    /// Succeeds only if a row for `id` exists.
    async fn exists(&self, id: &str) -> Result<(), StoreError>;

    /// Removes the row for `id`. Succeeds affecting zero rows when absent.
    async fn delete(&self, id: &str) -> Result<(), StoreError>;
}

fn parse_id(id: &str) -> Result<i32, StoreError> {
    id.parse().map_err(|_| StoreError::InvalidId(id.to_string()))
}

/// PostgreSQL-backed store over a shared connection pool.
#[derive(Clone)]
pub struct PgStore {
    pool: PgPool,
}

impl PgStore {
    pub async fn connect(database_url: &str) -> Result<Self, StoreError> {
        let pool = PgPoolOptions::new()
            .max_connections(5)
            .connect(database_url)
            .await?;
        Ok(Self { pool })
    }

    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl TodoStore for PgStore {
    async fn list(&self) -> Result<Vec<Todo>, StoreError> {
        let todos = sqlx::query_as::<_, Todo>("SELECT id, status, body FROM todos")
            .fetch_all(&self.pool)
            .await?;
        Ok(todos)
    }

    async fn insert(&self, body: &str) -> Result<Todo, StoreError> {
        let todo = sqlx::query_as::<_, Todo>(
            "INSERT INTO todos (status, body) VALUES ($1, $2) RETURNING id, status, body",
        )
        .bind(false)
        .bind(body)
        .fetch_one(&self.pool)
        .await?;
        Ok(todo)
    }

    async fn fetch(&self, id: &str) -> Result<Todo, StoreError> {
        let id = parse_id(id)?;
        sqlx::query_as::<_, Todo>("SELECT id, status, body FROM todos WHERE id = $1")
            .bind(id)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| match e {
                sqlx::Error::RowNotFound => StoreError::NotFound(id.to_string()),
                e => e.into(),
            })
    }

    async fn set_status(&self, id: &str, status: bool) -> Result<(), StoreError> {
        let id = parse_id(id)?;
        sqlx::query("UPDATE todos SET status = $1 WHERE id = $2")
            .bind(status)
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    async fn exists(&self, id: &str) -> Result<(), StoreError> {
        let id = parse_id(id)?;
        sqlx::query_scalar::<_, i32>("SELECT id FROM todos WHERE id = $1")
            .bind(id)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| match e {
                sqlx::Error::RowNotFound => StoreError::NotFound(id.to_string()),
                e => e.into(),
            })?;
        Ok(())
    }

    async fn delete(&self, id: &str) -> Result<(), StoreError> {
        let id = parse_id(id)?;
        sqlx::query("DELETE FROM todos WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(())
    }
}
