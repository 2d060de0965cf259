use maud::{html, Markup};
use rust_i18n::t;

use crate::{
    db::{QuestionRow, QuestionWithOptions},
    names,
    services::question_form::QuestionFormError,
};

pub struct DashboardData<'a> {
    pub questions: &'a [QuestionWithOptions],
    pub final_message: &'a str,
    pub flash: Option<&'a str>,
    pub form_error: Option<QuestionFormError>,
}

fn form_error_key(error: QuestionFormError) -> &'static str {
    match error {
        QuestionFormError::MissingFields => "form_error.missing_fields",
        QuestionFormError::TooFewWrongAnswers => "form_error.too_few_wrong_answers",
        QuestionFormError::MissingPassword => "form_error.missing_password",
    }
}

fn flash_key(flash: &str) -> Option<&'static str> {
    match flash {
        names::FLASH_QUESTION_ADDED => Some("flash.question_added"),
        names::FLASH_QUESTION_UPDATED => Some("flash.question_updated"),
        names::FLASH_SETTINGS_UPDATED => Some("flash.settings_updated"),
        names::FLASH_PROGRESS_RESET => Some("flash.progress_reset"),
        _ => None,
    }
}

pub fn dashboard(data: DashboardData, locale: &str) -> Markup {
    html! {
        h1 { (t!("admin.title", locale = locale)) }

        @if let Some(key) = data.flash.and_then(flash_key) {
            p."flash" { (t!(key, locale = locale)) }
        }

        section {
            h2 { (t!("admin.questions_heading", locale = locale)) }
            @if data.questions.is_empty() {
                p."secondary" { (t!("admin.no_questions", locale = locale)) }
            }
            @for entry in data.questions {
                article {
                    h3 { (entry.question.text) }
                    @if let Some(image) = &entry.question.image {
                        img."question-image" src=(image) alt="";
                    }
                    p {
                        (t!("admin.correct_answer", locale = locale))
                        ": "
                        mark { (entry.question.correct_answer) }
                    }
                    ul {
                        @for option in &entry.options {
                            @if !option.is_correct {
                                li { (option.text) }
                            }
                        }
                    }
                    @if let Some(comment) = &entry.question.comment {
                        p."question-comment" { (comment) }
                    }
                    a href=(names::edit_question_url(entry.question.id)) {
                        (t!("admin.edit", locale = locale))
                    }
                }
            }
        }

        section {
            h2 { (t!("admin.add_heading", locale = locale)) }
            @if let Some(error) = data.form_error {
                p."form-error" { (t!(form_error_key(error), locale = locale)) }
            }
            form method="post" action=(names::ADMIN_URL) {
                input type="hidden" name="form_type" value=(names::FORM_TYPE_ADD_QUESTION);
                label {
                    (t!("admin.question_text", locale = locale))
                    input type="text" name="question_text";
                }
                label {
                    (t!("admin.correct_answer", locale = locale))
                    input type="text" name="correct_answer";
                }
                label {
                    (t!("admin.wrong_answers", locale = locale))
                    textarea name="wrong_answers" rows="4" {}
                }
                label {
                    (t!("admin.secret_password", locale = locale))
                    input type="text" name="secret_password";
                }
                label {
                    (t!("admin.image", locale = locale))
                    input type="text" name="image";
                }
                label {
                    (t!("admin.comment", locale = locale))
                    input type="text" name="comment";
                }
                input type="submit" value=(t!("admin.add_submit", locale = locale));
            }
        }

        section {
            h2 { (t!("admin.settings_heading", locale = locale)) }
            form method="post" action=(names::ADMIN_URL) {
                input type="hidden" name="form_type" value=(names::FORM_TYPE_UPDATE_SETTINGS);
                label {
                    (t!("admin.final_message", locale = locale))
                    input type="text" name="final_message" value=(data.final_message);
                }
                input type="submit" value=(t!("admin.settings_submit", locale = locale));
            }
        }

        section {
            h2 { (t!("admin.reset_heading", locale = locale)) }
            form method="post" action=(names::ADMIN_RESET_URL) {
                button { (t!("admin.reset_submit", locale = locale)) }
            }
        }
    }
}

pub struct EditData<'a> {
    pub question: &'a QuestionRow,
    pub incorrect_options: &'a [String],
    pub form_error: Option<QuestionFormError>,
}

pub fn edit(data: EditData, locale: &str) -> Markup {
    html! {
        h1 { (t!("admin.edit_heading", locale = locale)) }

        @if let Some(error) = data.form_error {
            p."form-error" { (t!(form_error_key(error), locale = locale)) }
        }

        form method="post" action=(names::edit_question_url(data.question.id)) {
            label {
                (t!("admin.question_text", locale = locale))
                input type="text" name="question_text" value=(data.question.text);
            }
            label {
                (t!("admin.correct_answer", locale = locale))
                input type="text" name="correct_answer" value=(data.question.correct_answer);
            }
            fieldset {
                @for option in data.incorrect_options {
                    label {
                        (t!("admin.wrong_answer", locale = locale))
                        input type="text" name="wrong_answers" value=(option);
                    }
                }
                // Spare inputs; blank entries are dropped on submit.
                @for _ in 0..2 {
                    label {
                        (t!("admin.wrong_answer", locale = locale))
                        input type="text" name="wrong_answers";
                    }
                }
            }
            label {
                (t!("admin.secret_password", locale = locale))
                input type="text" name="secret_password" value=(data.question.secret_password);
            }
            label {
                (t!("admin.image", locale = locale))
                input type="text" name="image" value=(data.question.image.as_deref().unwrap_or(""));
            }
            label {
                (t!("admin.comment", locale = locale))
                input type="text" name="comment" value=(data.question.comment.as_deref().unwrap_or(""));
            }
            input type="submit" value=(t!("admin.edit_submit", locale = locale));
        }

        p {
            a href=(names::ADMIN_URL) { (t!("admin.back", locale = locale)) }
        }
    }
}
