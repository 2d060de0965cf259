// Database model structs

#[derive(Clone, sqlx::FromRow)]
pub struct QuestionRow {
    pub id: i64,
    pub text: String,
    pub correct_answer: String,
    pub image: Option<String>,
    pub comment: Option<String>,
    pub secret_password: String,
}

#[derive(Clone, sqlx::FromRow)]
pub struct AnswerOptionRow {
    pub id: i64,
    pub question_id: i64,
    pub text: String,
    pub is_correct: bool,
}

/// A question together with its answer options, as listed on the admin page.
pub struct QuestionWithOptions {
    pub question: QuestionRow,
    pub options: Vec<AnswerOptionRow>,
}

/// Validated input for creating or fully replacing a question.
#[derive(Debug, PartialEq)]
pub struct NewQuestion {
    pub text: String,
    pub correct_answer: String,
    pub wrong_answers: Vec<String>,
    pub secret_password: String,
    pub image: Option<String>,
    pub comment: Option<String>,
}
