use std::collections::HashMap;

use color_eyre::Result;

use super::models::{AnswerOptionRow, NewQuestion, QuestionRow, QuestionWithOptions};
use super::Db;

impl Db {
    pub async fn questions_count(&self) -> Result<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM questions")
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }

    /// Fetch the question at a zero-based position in the id-ordered list.
    pub async fn question_by_index(&self, index: i64) -> Result<Option<QuestionRow>> {
        let question = sqlx::query_as::<_, QuestionRow>(
            r#"
            SELECT id, text, correct_answer, image, comment, secret_password
            FROM questions ORDER BY id LIMIT 1 OFFSET $1
            "#,
        )
        .bind(index)
        .fetch_optional(&self.pool)
        .await?;

        Ok(question)
    }

    pub async fn get_question(&self, question_id: i64) -> Result<Option<QuestionRow>> {
        let question = sqlx::query_as::<_, QuestionRow>(
            r#"
            SELECT id, text, correct_answer, image, comment, secret_password
            FROM questions WHERE id = $1
            "#,
        )
        .bind(question_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(question)
    }

    pub async fn incorrect_option_texts(&self, question_id: i64) -> Result<Vec<String>> {
        let texts: Vec<String> = sqlx::query_scalar(
            "SELECT text FROM answer_options WHERE question_id = $1 AND is_correct = 0 ORDER BY id",
        )
        .bind(question_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(texts)
    }

    pub async fn list_questions(&self) -> Result<Vec<QuestionWithOptions>> {
        let questions = sqlx::query_as::<_, QuestionRow>(
            r#"
            SELECT id, text, correct_answer, image, comment, secret_password
            FROM questions ORDER BY id
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        let options = sqlx::query_as::<_, AnswerOptionRow>(
            "SELECT id, question_id, text, is_correct FROM answer_options ORDER BY question_id, id",
        )
        .fetch_all(&self.pool)
        .await?;

        let mut by_question: HashMap<i64, Vec<AnswerOptionRow>> = HashMap::new();
        for option in options {
            by_question
                .entry(option.question_id)
                .or_default()
                .push(option);
        }

        Ok(questions
            .into_iter()
            .map(|question| {
                let options = by_question.remove(&question.id).unwrap_or_default();
                QuestionWithOptions { question, options }
            })
            .collect())
    }

    /// Insert a question with its correct option and wrong answers atomically.
    /// Returns the id of the new question.
    pub async fn create_question(&self, new: &NewQuestion) -> Result<i64> {
        let mut tx = self.pool.begin().await?;

        let question_id: i64 = sqlx::query_scalar(
            r#"
            INSERT INTO questions (text, correct_answer, image, comment, secret_password)
            VALUES ($1, $2, $3, $4, $5) RETURNING id
            "#,
        )
        .bind(&new.text)
        .bind(&new.correct_answer)
        .bind(&new.image)
        .bind(&new.comment)
        .bind(&new.secret_password)
        .fetch_one(&mut *tx)
        .await?;

        insert_options(&mut tx, question_id, new).await?;

        tx.commit().await?;

        tracing::info!("new question created with id: {question_id}");
        Ok(question_id)
    }

    /// Update a question and replace all of its answer options.
    /// Existing option rows are deleted and fresh ones inserted, not merged.
    pub async fn update_question(&self, question_id: i64, new: &NewQuestion) -> Result<()> {
        let mut tx = self.pool.begin().await?;

        sqlx::query(
            r#"
            UPDATE questions
            SET text = $1, correct_answer = $2, image = $3, comment = $4, secret_password = $5
            WHERE id = $6
            "#,
        )
        .bind(&new.text)
        .bind(&new.correct_answer)
        .bind(&new.image)
        .bind(&new.comment)
        .bind(&new.secret_password)
        .bind(question_id)
        .execute(&mut *tx)
        .await?;

        sqlx::query("DELETE FROM answer_options WHERE question_id = $1")
            .bind(question_id)
            .execute(&mut *tx)
            .await?;

        insert_options(&mut tx, question_id, new).await?;

        tx.commit().await?;

        tracing::info!("question {question_id} updated");
        Ok(())
    }
}

async fn insert_options(
    tx: &mut sqlx::Transaction<'_, sqlx::Sqlite>,
    question_id: i64,
    new: &NewQuestion,
) -> Result<()> {
    sqlx::query("INSERT INTO answer_options (question_id, text, is_correct) VALUES ($1, $2, 1)")
        .bind(question_id)
        .bind(&new.correct_answer)
        .execute(&mut **tx)
        .await?;

    for wrong in &new.wrong_answers {
        sqlx::query("INSERT INTO answer_options (question_id, text, is_correct) VALUES ($1, $2, 0)")
            .bind(question_id)
            .bind(wrong)
            .execute(&mut **tx)
            .await?;
    }

    Ok(())
}
