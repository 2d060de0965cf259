use color_eyre::Result;

use super::Db;

// The single global player's position lives in one row (id = 1).
// Mutation is plain read-modify-write with no isolation against concurrent
// submissions; intended usage is one player at a time.
impl Db {
    pub async fn current_index(&self) -> Result<i64> {
        let index: Option<i64> =
            sqlx::query_scalar("SELECT current_index FROM game_state WHERE id = 1")
                .fetch_optional(&self.pool)
                .await?;

        Ok(index.unwrap_or(0))
    }

    /// Increment the progress index by one and return the new value.
    pub async fn advance_progress(&self) -> Result<i64> {
        let index: i64 = sqlx::query_scalar(
            "UPDATE game_state SET current_index = current_index + 1 WHERE id = 1 RETURNING current_index",
        )
        .fetch_one(&self.pool)
        .await?;

        tracing::info!("progress advanced to index {index}");
        Ok(index)
    }

    pub async fn reset_progress(&self) -> Result<()> {
        sqlx::query("UPDATE game_state SET current_index = 0 WHERE id = 1")
            .execute(&self.pool)
            .await?;

        tracing::info!("progress reset to index 0");
        Ok(())
    }
}
