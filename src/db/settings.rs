use color_eyre::Result;

use super::Db;

impl Db {
    pub async fn final_message(&self) -> Result<String> {
        let message: Option<String> =
            sqlx::query_scalar("SELECT final_message FROM quiz_settings WHERE id = 1")
                .fetch_optional(&self.pool)
                .await?;

        Ok(message.unwrap_or_default())
    }

    pub async fn set_final_message(&self, message: &str) -> Result<()> {
        sqlx::query(
            r#"
            INSERT INTO quiz_settings (id, final_message) VALUES (1, $1)
            ON CONFLICT(id) DO UPDATE SET final_message = excluded.final_message
            "#,
        )
        .bind(message)
        .execute(&self.pool)
        .await?;

        tracing::info!("final completion message updated");
        Ok(())
    }
}
