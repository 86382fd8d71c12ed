//! # Comment Repository
//!
//! Append-only free-text comments. No identity is exposed to callers.

use sqlx::SqlitePool;
use tracing::debug;

use crate::error::DbResult;

/// Repository for the `comments` table.
#[derive(Debug, Clone)]
pub struct CommentRepository {
    pool: SqlitePool,
}

impl CommentRepository {
    /// Creates a new CommentRepository.
    pub fn new(pool: SqlitePool) -> Self {
        CommentRepository { pool }
    }

    /// Appends one comment with exactly the given text.
    pub async fn insert(&self, text: &str) -> DbResult<()> {
        debug!(len = text.len(), "Inserting comment");

        sqlx::query("INSERT INTO comments (comment) VALUES (?1)")
            .bind(text)
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    /// Counts stored comments.
    pub async fn count(&self) -> DbResult<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM comments")
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }

    /// All comment texts in insertion order.
    pub async fn list_all(&self) -> DbResult<Vec<String>> {
        let texts: Vec<String> = sqlx::query_scalar("SELECT comment FROM comments ORDER BY rowid")
            .fetch_all(&self.pool)
            .await?;

        Ok(texts)
    }
}

#[cfg(test)]
mod tests {
    use crate::pool::{Database, DbConfig};

    #[tokio::test]
    async fn test_insert_stores_text_verbatim() {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();
        let repo = db.comments();

        repo.insert("first").await.unwrap();
        repo.insert("  'quoted'; DROP TABLE comments; --").await.unwrap();

        assert_eq!(repo.count().await.unwrap(), 2);
        assert_eq!(
            repo.list_all().await.unwrap(),
            vec!["first", "  'quoted'; DROP TABLE comments; --"]
        );
    }
}
