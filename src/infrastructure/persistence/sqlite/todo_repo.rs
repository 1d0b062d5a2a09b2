//! SQLite Todo Repository

use async_trait::async_trait;
use chrono::DateTime;
use sqlx::FromRow;

use super::DbPool;
use crate::application::ports::{RepositoryError, TodoRepositoryPort};
use crate::domain::{TodoDraft, TodoId, TodoItem};

/// SQLite Todo Repository
pub struct SqliteTodoRepository {
    pool: DbPool,
}

impl SqliteTodoRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    /// 在同一连接上执行写语句并读取 `changes()`
    ///
    /// `changes()` 只反映当前连接最近一条写语句，连接在两步之间不能归还连接池。
    async fn execute_counting_changes<'q>(
        &self,
        query: sqlx::query::Query<'q, sqlx::Sqlite, sqlx::sqlite::SqliteArguments<'q>>,
    ) -> Result<u64, RepositoryError> {
        let mut conn = self.pool.acquire().await.map_err(db_error)?;

        query.execute(&mut *conn).await.map_err(db_error)?;

        let changed: i64 = sqlx::query_scalar("SELECT changes()")
            .fetch_one(&mut *conn)
            .await
            .map_err(db_error)?;

        Ok(changed.max(0) as u64)
    }
}

fn db_error(e: sqlx::Error) -> RepositoryError {
    RepositoryError::DatabaseError(e.to_string())
}

#[derive(FromRow)]
struct TodoRow {
    item_id: i64,
    title: Option<String>,
    done: Option<bool>,
    created_on: Option<String>,
}

impl TryFrom<TodoRow> for TodoItem {
    type Error = RepositoryError;

    fn try_from(row: TodoRow) -> Result<Self, Self::Error> {
        let created_on = row
            .created_on
            .map(|s| DateTime::parse_from_rfc3339(&s))
            .transpose()
            .map_err(|e| RepositoryError::SerializationError(e.to_string()))?;

        Ok(TodoItem {
            id: row.item_id,
            title: row.title.unwrap_or_default(),
            done: row.done.unwrap_or_default(),
            created_on,
        })
    }
}

#[async_trait]
impl TodoRepositoryPort for SqliteTodoRepository {
    async fn create_schema(&self) -> Result<(), RepositoryError> {
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS item (
                item_id INTEGER PRIMARY KEY AUTOINCREMENT,
                title TEXT,
                done BOOLEAN,
                created_on TIMESTAMP
            )
            "#,
        )
        .execute(&self.pool)
        .await
        .map_err(db_error)?;

        tracing::info!("Todo schema ready");
        Ok(())
    }

    async fn insert(&self, draft: &TodoDraft) -> Result<(), RepositoryError> {
        sqlx::query("INSERT INTO item (title, done, created_on) VALUES (?, ?, ?)")
            .bind(&draft.title)
            .bind(draft.done)
            .bind(draft.created_on.map(|t| t.to_rfc3339()))
            .execute(&self.pool)
            .await
            .map_err(db_error)?;

        Ok(())
    }

    async fn find_by_id(&self, id: TodoId) -> Result<Option<TodoItem>, RepositoryError> {
        let row: Option<TodoRow> = sqlx::query_as(
            "SELECT item_id, title, done, created_on FROM item WHERE item_id = ?",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(db_error)?;

        row.map(TodoItem::try_from).transpose()
    }

    async fn find_all(&self) -> Result<Vec<TodoItem>, RepositoryError> {
        // rowid 表的自然顺序，即插入顺序
        let rows: Vec<TodoRow> =
            sqlx::query_as("SELECT item_id, title, done, created_on FROM item ORDER BY item_id")
                .fetch_all(&self.pool)
                .await
                .map_err(db_error)?;

        rows.into_iter().map(TodoItem::try_from).collect()
    }

    async fn update(&self, id: TodoId, draft: &TodoDraft) -> Result<u64, RepositoryError> {
        let query = sqlx::query(
            "UPDATE item SET title = ?, done = ?, created_on = ? WHERE item_id = ?",
        )
        .bind(draft.title.clone())
        .bind(draft.done)
        .bind(draft.created_on.map(|t| t.to_rfc3339()))
        .bind(id);

        self.execute_counting_changes(query).await
    }

    async fn delete(&self, id: TodoId) -> Result<u64, RepositoryError> {
        let query = sqlx::query("DELETE FROM item WHERE item_id = ?").bind(id);

        self.execute_counting_changes(query).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::persistence::sqlite::{create_pool, DatabaseConfig};

    async fn create_repo() -> SqliteTodoRepository {
        let pool = create_pool(&DatabaseConfig::in_memory()).await.unwrap();
        let repo = SqliteTodoRepository::new(pool);
        repo.create_schema().await.unwrap();
        repo
    }

    fn draft(title: &str, done: bool) -> TodoDraft {
        TodoDraft {
            title: title.to_string(),
            done,
            created_on: Some(DateTime::parse_from_rfc3339("2015-03-07T01:10:20-05:30").unwrap()),
        }
    }

    #[tokio::test]
    async fn test_insert_assigns_increasing_ids() {
        let repo = create_repo().await;
        for title in ["Test-1", "Test-2", "Test-3"] {
            repo.insert(&draft(title, false)).await.unwrap();
        }

        let all = repo.find_all().await.unwrap();
        let titles: Vec<_> = all.iter().map(|t| t.title.as_str()).collect();
        assert_eq!(titles, ["Test-1", "Test-2", "Test-3"]);
        assert!(all.windows(2).all(|w| w[0].id < w[1].id));
    }

    #[tokio::test]
    async fn test_created_on_keeps_offset() {
        let repo = create_repo().await;
        repo.insert(&draft("Test-1", true)).await.unwrap();

        let item = repo.find_all().await.unwrap().remove(0);
        assert_eq!(
            item.created_on.unwrap().to_rfc3339(),
            "2015-03-07T01:10:20-05:30"
        );
    }

    #[tokio::test]
    async fn test_null_created_on() {
        let repo = create_repo().await;
        repo.insert(&TodoDraft::default()).await.unwrap();

        let item = repo.find_all().await.unwrap().remove(0);
        assert_eq!(item.title, "");
        assert!(!item.done);
        assert_eq!(item.created_on, None);
    }

    #[tokio::test]
    async fn test_update_reports_changed_rows() {
        let repo = create_repo().await;
        repo.insert(&draft("Test-1", false)).await.unwrap();
        let id = repo.find_all().await.unwrap()[0].id;

        assert_eq!(repo.update(id, &draft("Test-1", true)).await.unwrap(), 1);
        assert_eq!(repo.update(id + 100, &draft("x", true)).await.unwrap(), 0);
        assert!(repo.find_by_id(id).await.unwrap().unwrap().done);
    }

    #[tokio::test]
    async fn test_delete_reports_changed_rows() {
        let repo = create_repo().await;
        repo.insert(&draft("Test-1", false)).await.unwrap();
        let id = repo.find_all().await.unwrap()[0].id;

        assert_eq!(repo.delete(id).await.unwrap(), 1);
        assert_eq!(repo.delete(id).await.unwrap(), 0);
        assert_eq!(repo.find_by_id(id).await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_ids_not_reused_after_delete() {
        let repo = create_repo().await;
        repo.insert(&draft("Test-1", false)).await.unwrap();
        let first = repo.find_all().await.unwrap()[0].id;
        repo.delete(first).await.unwrap();

        repo.insert(&draft("Test-2", false)).await.unwrap();
        let second = repo.find_all().await.unwrap()[0].id;
        assert!(second > first);
    }

    #[tokio::test]
    async fn test_schema_creation_is_idempotent_on_file_db() {
        let dir = tempfile::tempdir().unwrap();
        let config = DatabaseConfig::new(dir.path().join("todo.db"));

        {
            let repo = SqliteTodoRepository::new(create_pool(&config).await.unwrap());
            repo.create_schema().await.unwrap();
            repo.insert(&draft("Test-1", false)).await.unwrap();
            repo.pool.close().await;
        }

        let repo = SqliteTodoRepository::new(create_pool(&config).await.unwrap());
        repo.create_schema().await.unwrap();
        let all = repo.find_all().await.unwrap();
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].title, "Test-1");
    }
}
