use crate::db::NewQuestion;

/// Minimum number of wrong answers a question must carry.
pub const MIN_WRONG_ANSWERS: usize = 3;

/// Raw admin form input before validation. Wrong answers arrive either as one
/// newline-separated textarea (add form) or as repeated fields (edit form);
/// both are normalized to a list before calling [`validate`].
pub struct QuestionFormInput {
    pub text: String,
    pub correct_answer: String,
    pub wrong_answers: Vec<String>,
    pub secret_password: String,
    pub image: String,
    pub comment: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuestionFormError {
    /// Question text or correct answer is blank.
    MissingFields,
    /// Fewer than [`MIN_WRONG_ANSWERS`] non-blank wrong answers.
    TooFewWrongAnswers,
    /// Secret password is blank.
    MissingPassword,
}

/// Split a newline-separated textarea into individual wrong answers.
pub fn split_wrong_answers(raw: &str) -> Vec<String> {
    raw.lines().map(str::to_string).collect()
}

pub fn validate(input: QuestionFormInput) -> Result<NewQuestion, QuestionFormError> {
    let text = input.text.trim();
    let correct_answer = input.correct_answer.trim();
    if text.is_empty() || correct_answer.is_empty() {
        return Err(QuestionFormError::MissingFields);
    }

    let wrong_answers: Vec<String> = input
        .wrong_answers
        .iter()
        .map(|a| a.trim())
        .filter(|a| !a.is_empty())
        .map(str::to_string)
        .collect();
    if wrong_answers.len() < MIN_WRONG_ANSWERS {
        return Err(QuestionFormError::TooFewWrongAnswers);
    }

    let secret_password = input.secret_password.trim();
    if secret_password.is_empty() {
        return Err(QuestionFormError::MissingPassword);
    }

    Ok(NewQuestion {
        text: text.to_string(),
        correct_answer: correct_answer.to_string(),
        wrong_answers,
        secret_password: secret_password.to_string(),
        image: non_blank(&input.image),
        comment: non_blank(&input.comment),
    })
}

fn non_blank(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}
