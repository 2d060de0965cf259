use maud::{html, Markup};
use rust_i18n::t;

use crate::{db::QuestionRow, names};

pub struct QuestionPageData {
    pub question: QuestionRow,
    pub choices: Vec<String>,
    pub question_idx: i64,
    pub questions_count: i64,
    pub incorrect_feedback: bool,
}

pub fn question(data: QuestionPageData, locale: &str) -> Markup {
    html! {
        article {
            p."secondary" {
                (t!("play.question_prefix", locale = locale))
                strong { (data.question_idx + 1) }
                (t!("play.question_of", locale = locale))
                (data.questions_count)
            }

            @if data.incorrect_feedback {
                p."feedback-incorrect" { (t!("play.incorrect", locale = locale)) }
            }

            h3 { (data.question.text) }

            @if let Some(image) = &data.question.image {
                img."question-image" src=(image) alt="";
            }

            @if let Some(comment) = &data.question.comment {
                p."question-comment" { (comment) }
            }

            form method="post" action=(names::PLAY_URL) {
                input type="hidden" name="action" value=(names::ACTION_ANSWER);
                fieldset {
                    @for choice in &data.choices {
                        label {
                            input type="radio" name="answer" value=(choice) required;
                            (choice)
                        }
                    }
                }
                input type="submit" value=(t!("play.submit_answer", locale = locale));
            }
        }
    }
}

/// Shown after a correct answer on a password-protected question. Transient:
/// a fresh GET of the play page goes back to the question.
pub fn password_gate(question: &QuestionRow, wrong_password: bool, locale: &str) -> Markup {
    html! {
        article {
            p."feedback-correct" { (t!("play.password_prompt", locale = locale)) }

            h3 { (question.text) }

            @if let Some(comment) = &question.comment {
                p."question-comment" { (comment) }
            }

            @if wrong_password {
                p."feedback-incorrect" { (t!("play.password_wrong", locale = locale)) }
            }

            form method="post" action=(names::PLAY_URL) {
                input type="hidden" name="action" value=(names::ACTION_PASSWORD);
                label {
                    (t!("play.password_label", locale = locale))
                    input type="password" name="question_password" required;
                }
                input type="submit" value=(t!("play.password_submit", locale = locale));
            }
        }
    }
}

pub fn complete(final_message: &str, locale: &str) -> Markup {
    html! {
        article {
            h1 { (t!("play.complete_title", locale = locale)) }
            @if final_message.is_empty() {
                p { (t!("play.complete_default", locale = locale)) }
            } @else {
                p { (final_message) }
            }
        }
    }
}

pub fn empty(locale: &str) -> Markup {
    html! {
        article {
            h1 { (t!("play.empty_title", locale = locale)) }
            p { (t!("play.empty_body", locale = locale)) }
            p {
                a href=(names::ADMIN_URL) { (t!("admin.title", locale = locale)) }
            }
        }
    }
}
