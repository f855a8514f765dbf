use anyhow::Context;
use sqlx::{migrate::Migrator, sqlite::SqlitePoolOptions, SqlitePool};

use crate::datastore::DataStore;

static MIGRATOR: Migrator = sqlx::migrate!();

#[derive(Debug, Clone)]
pub struct SqliteDataStore {
    pub pool: SqlitePool,
}

impl SqliteDataStore {
    /// Establish connection to the database and create the transcripts table
    /// if not exists
    pub async fn init(database_url: &str) -> anyhow::Result<Self> {
        let pool = SqlitePoolOptions::new()
            .max_connections(5)
            .connect(database_url)
            .await
            .inspect_err(
                |e| tracing::error!(error = ?e, "Failed to establish connection to database"),
            )
            .context("Failed to connect to sqlite database")?;

        MIGRATOR
            .run(&pool)
            .await
            .inspect_err(|e| tracing::error!(error = ?e, "Failed to run database migrations"))
            .context("Failed to run database migrations")?;

        Ok(SqliteDataStore { pool })
    }
}

impl DataStore for SqliteDataStore {
    async fn get_transcript(&self, video_id: &str) -> anyhow::Result<Option<String>> {
        #[derive(sqlx::FromRow)]
        struct Row {
            transcript: String,
        }

        let row = sqlx::query_as::<_, Row>(
            "SELECT transcript FROM transcripts WHERE video_id = $1",
        )
        .bind(video_id)
        .fetch_optional(&self.pool)
        .await
        .inspect_err(|e| {
            tracing::error!(error = ?e, %video_id, "Failed to fetch cached transcript");
        })
        .context("Failed to fetch cached transcript")?;

        Ok(row.map(|r| r.transcript))
    }

    async fn insert_transcript(&self, video_id: &str, transcript: &str) -> anyhow::Result<()> {
        sqlx::query(
            r#"
            INSERT INTO transcripts (video_id, transcript)
            VALUES ($1, $2)
            ON CONFLICT (video_id) DO NOTHING
            "#,
        )
        .bind(video_id)
        .bind(transcript)
        .execute(&self.pool)
        .await
        .inspect_err(|err| {
            tracing::error!(
                error = ?err,
                %video_id,
                "Failed to insert transcript"
            )
        })
        .context("Failed to insert transcript")?;

        Ok(())
    }
}
