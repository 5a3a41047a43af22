#[cfg(feature = "ssr")]
mod db_impl {
    use crate::error::SourceError;
    use crate::models::approved::{ApprovedReview, ApprovedRow, ReviewStatus};
    use crate::source::ApprovedReviewSource;
    use async_trait::async_trait;
    use chrono::{DateTime, Utc};
    use leptos::logging;
    use leptos::logging::log;
    use rusqlite::{Connection, Error};
    use std::sync::Arc;
    use tokio::sync::Mutex;

    #[cfg(test)]
    mod tests {
        use super::*;
        use chrono::TimeZone;

        // Helper function to create test database
        async fn create_test_db() -> Database {
            log!("[TEST] Creating in-memory test database");
            let db = Database::new(":memory:").unwrap();
            db.create_schema().await.unwrap();
            log!("[TEST] Database schema created");
            db
        }

        fn row(name: &str, rating: i64, status: ReviewStatus, secs: i64) -> NewReviewRow {
            NewReviewRow {
                name: name.into(),
                role: "Client".into(),
                rating,
                text: format!("{} says hi", name),
                status,
                created_at: Utc.timestamp_opt(secs, 0).unwrap(),
            }
        }

        #[tokio::test]
        async fn test_schema_creation() {
            log!("[TEST] Starting test_schema_creation");
            let db = create_test_db().await;

            let conn = db.conn.lock().await;
            let mut stmt = conn
                .prepare("SELECT name FROM sqlite_master WHERE type='table'")
                .unwrap();
            let tables: Vec<String> = stmt
                .query_map([], |row| row.get(0))
                .unwrap()
                .collect::<Result<_, _>>()
                .unwrap();

            assert!(tables.contains(&"client_reviews".to_string()));
        }

        #[tokio::test]
        async fn test_schema_creation_is_repeatable() {
            let db = create_test_db().await;
            db.create_schema().await.unwrap();
            assert!(db.query_approved_reviews().await.unwrap().is_empty());
        }

        #[tokio::test]
        async fn test_only_approved_rows_newest_first() {
            log!("[TEST] Starting test_only_approved_rows_newest_first");
            let db = create_test_db().await;
            let t1 = db.insert_review(&row("T1", 5, ReviewStatus::Approved, 1_000)).await.unwrap();
            db.insert_review(&row("T2", 4, ReviewStatus::Pending, 2_000)).await.unwrap();
            let t3 = db.insert_review(&row("T3", 5, ReviewStatus::Approved, 3_000)).await.unwrap();

            let rows = db.approved_reviews().await.unwrap();
            let ids: Vec<i64> = rows.iter().map(|r| r.id).collect();
            assert_eq!(ids, vec![t3, t1]);
            assert!(rows.iter().all(|r| r.status == ReviewStatus::Approved));
            assert_eq!(rows[0].created_at, Utc.timestamp_opt(3_000, 0).unwrap());
            log!("[TEST] Approved filter and ordering - PASSED");
        }

        #[tokio::test]
        async fn test_source_rows_carry_every_column() {
            let db = create_test_db().await;
            let id = db.insert_review(&row("Pat", 4, ReviewStatus::Approved, 1_000)).await.unwrap();

            let rows = db.query_approved_reviews().await.unwrap();
            assert_eq!(rows.len(), 1);
            assert_eq!(rows[0].get("id"), Some(&serde_json::Value::from(id)));
            assert_eq!(rows[0].status(), Some(ReviewStatus::Approved));
            assert_eq!(
                rows[0].get("created_at").and_then(|v| v.as_str()),
                Some("1970-01-01T00:16:40+00:00")
            );
        }

        #[tokio::test]
        async fn test_rating_outranks_recency() {
            let db = create_test_db().await;
            db.insert_review(&row("old-five", 5, ReviewStatus::Approved, 10)).await.unwrap();
            db.insert_review(&row("new-three", 3, ReviewStatus::Approved, 30)).await.unwrap();
            db.insert_review(&row("mid-three", 3, ReviewStatus::Approved, 20)).await.unwrap();
            db.insert_review(&row("hidden", 5, ReviewStatus::Rejected, 40)).await.unwrap();

            let names: Vec<String> = db
                .approved_reviews()
                .await
                .unwrap()
                .into_iter()
                .map(|r| r.name)
                .collect();
            assert_eq!(names, vec!["old-five", "new-three", "mid-three"]);
        }

        #[tokio::test]
        async fn test_sub_second_timestamps_order() {
            let db = create_test_db().await;
            let base = Utc.timestamp_opt(5_000, 0).unwrap();
            let mut later = row("later", 4, ReviewStatus::Approved, 0);
            later.created_at = base + chrono::Duration::milliseconds(250);
            let mut earlier = row("earlier", 4, ReviewStatus::Approved, 0);
            earlier.created_at = base;
            db.insert_review(&earlier).await.unwrap();
            db.insert_review(&later).await.unwrap();

            let rows = db.approved_reviews().await.unwrap();
            assert_eq!(rows[0].name, "later");
            assert_eq!(rows[1].name, "earlier");
        }

        #[tokio::test]
        async fn test_rating_out_of_range_rejected() {
            let db = create_test_db().await;
            let result = db.insert_review(&row("bad", 7, ReviewStatus::Approved, 1)).await;
            assert!(result.is_err());
        }

        #[tokio::test]
        async fn test_malformed_row_surfaces_as_error() {
            let db = create_test_db().await;
            {
                let conn = db.conn.lock().await;
                conn.execute_batch("DROP TABLE client_reviews;
                    CREATE TABLE client_reviews (
                        id INTEGER PRIMARY KEY, name TEXT, role TEXT, rating INTEGER,
                        text TEXT, status TEXT, created_at TEXT);
                    INSERT INTO client_reviews (name, role, rating, text, status, created_at)
                    VALUES ('x', 'Client', 5, 't', 'approved', 'not a date');")
                    .unwrap();
            }
            assert!(db.query_approved_reviews().await.is_err());
        }

        #[tokio::test]
        async fn test_missing_table_is_an_error() {
            let db = Database::new(":memory:").unwrap();
            let err = db.query_approved_reviews().await.unwrap_err();
            assert!(matches!(err, SourceError::Database(_)));
        }
    }

    /// Values for a new `client_reviews` row.
    #[derive(Debug, Clone)]
    pub struct NewReviewRow {
        pub name: String,
        pub role: String,
        pub rating: i64,
        pub text: String,
        pub status: ReviewStatus,
        pub created_at: DateTime<Utc>,
    }

    // Define a struct to represent a database connection
    #[derive(Debug)]
    pub struct Database {
        conn: Arc<Mutex<Connection>>,
    }

    impl Database {
        // Create a new database connection
        pub fn new(db_path: &str) -> Result<Self, Error> {
            let conn = Connection::open(db_path)?;
            logging::log!("[DB] Connection established at: {}", db_path);
            Ok(Database {
                conn: Arc::new(Mutex::new(conn)),
            })
        }

        // Create the reviews table if it is missing
        pub async fn create_schema(&self) -> Result<(), Error> {
            let conn = self.conn.lock().await;
            conn.execute_batch(
                "CREATE TABLE IF NOT EXISTS client_reviews (
                    id INTEGER PRIMARY KEY,
                    name TEXT NOT NULL,
                    role TEXT NOT NULL,
                    rating INTEGER NOT NULL CHECK (rating BETWEEN 1 AND 5),
                    text TEXT NOT NULL,
                    status TEXT NOT NULL DEFAULT 'pending'
                        CHECK (status IN ('approved', 'pending', 'rejected')),
                    created_at TEXT NOT NULL
                );
                CREATE INDEX IF NOT EXISTS idx_client_reviews_status
                    ON client_reviews (status, rating, created_at);",
            )
            .map_err(|e| {
                logging::error!("[DB] Failed creating client_reviews table: {}", e);
                e
            })?;
            Ok(())
        }

        // Insert a review row, returning its id. Moderation happens elsewhere;
        // this exists to seed local databases.
        pub async fn insert_review(&self, review: &NewReviewRow) -> Result<i64, Error> {
            let conn = self.conn.lock().await;
            conn.execute(
                "INSERT INTO client_reviews (name, role, rating, text, status, created_at)
                VALUES (?, ?, ?, ?, ?, ?)",
                rusqlite::params![
                    &review.name,
                    &review.role,
                    review.rating,
                    &review.text,
                    review.status.as_str(),
                    review.created_at,
                ],
            )?;
            let id = conn.last_insert_rowid();
            log!("[DB] Inserted review {} with status {}", id, review.status.as_str());
            Ok(id)
        }

        // Approved rows, highest rated first, newest first within a rating
        pub async fn approved_reviews(&self) -> Result<Vec<ApprovedReview>, SourceError> {
            let conn = self.conn.lock().await;
            let mut stmt = conn.prepare(
                "SELECT id, name, role, rating, text, status, created_at
                FROM client_reviews
                WHERE status = ?
                ORDER BY rating DESC, created_at DESC",
            )?;
            let rows = stmt.query_map([ReviewStatus::Approved.as_str()], |row| {
                Ok((
                    row.get::<_, i64>(0)?,
                    row.get::<_, String>(1)?,
                    row.get::<_, String>(2)?,
                    row.get::<_, i64>(3)?,
                    row.get::<_, String>(4)?,
                    row.get::<_, String>(5)?,
                    row.get::<_, DateTime<Utc>>(6)?,
                ))
            })?;

            let mut result = Vec::new();
            for row in rows {
                let (id, name, role, rating, text, status, created_at) = row?;
                let status = ReviewStatus::parse(&status)
                    .ok_or_else(|| SourceError::Row(format!("review {} has status {:?}", id, status)))?;
                result.push(ApprovedReview {
                    id,
                    name,
                    role,
                    rating,
                    text,
                    status,
                    created_at,
                });
            }
            log!("[DB] Fetched {} approved reviews", result.len());
            Ok(result)
        }
    }

    #[async_trait]
    impl ApprovedReviewSource for Database {
        async fn query_approved_reviews(&self) -> Result<Vec<ApprovedRow>, SourceError> {
            let reviews = self.approved_reviews().await?;
            Ok(reviews.into_iter().map(ApprovedRow::from).collect())
        }
    }
}

#[cfg(feature = "ssr")]
pub use db_impl::{Database, NewReviewRow};
