use axum::{
    extract::{Path, State},
    http::{
        header::{LOCATION, SET_COOKIE},
        HeaderValue, StatusCode,
    },
    response::{IntoResponse, Response},
    routing::{get, post},
    Router,
};
use axum_extra::extract::{CookieJar, Form};
use maud::Markup;
use rust_i18n::t;
use serde::Deserialize;

use crate::{
    db::Db,
    extractors::Locale,
    names,
    rejections::{AppError, ResultExt},
    services::question_form::{self, QuestionFormError, QuestionFormInput},
    utils, views,
    views::admin as admin_views,
    AppState,
};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/admin", get(admin_page).post(admin_post))
        .route("/admin/edit/{id}", get(edit_page).post(edit_post))
        .route("/admin/reset", post(reset))
}

async fn admin_page(
    State(state): State<AppState>,
    jar: CookieJar,
    Locale(locale): Locale,
) -> Result<Response, AppError> {
    let flash = jar
        .get(names::FLASH_COOKIE_NAME)
        .map(|c| c.value().to_string());

    let page = dashboard_page(&state.db, flash.as_deref(), None, &locale).await?;

    if flash.is_some() {
        let clear = utils::clear_cookie(names::FLASH_COOKIE_NAME)
            .reject("could not build clear-flash cookie")?;
        Ok(([(SET_COOKIE, clear)], page).into_response())
    } else {
        Ok(page.into_response())
    }
}

#[derive(Deserialize)]
struct AdminForm {
    form_type: String,
    #[serde(default)]
    question_text: String,
    #[serde(default)]
    correct_answer: String,
    #[serde(default)]
    wrong_answers: String,
    #[serde(default)]
    secret_password: String,
    #[serde(default)]
    image: String,
    #[serde(default)]
    comment: String,
    #[serde(default)]
    final_message: String,
}

async fn admin_post(
    State(state): State<AppState>,
    Locale(locale): Locale,
    Form(form): Form<AdminForm>,
) -> Result<Response, AppError> {
    match form.form_type.as_str() {
        names::FORM_TYPE_ADD_QUESTION => {
            let input = QuestionFormInput {
                text: form.question_text,
                correct_answer: form.correct_answer,
                wrong_answers: question_form::split_wrong_answers(&form.wrong_answers),
                secret_password: form.secret_password,
                image: form.image,
                comment: form.comment,
            };

            match question_form::validate(input) {
                Ok(new) => {
                    state
                        .db
                        .create_question(&new)
                        .await
                        .reject("could not create question")?;
                    redirect_with_flash(names::ADMIN_URL, names::FLASH_QUESTION_ADDED)
                }
                Err(error) => Ok(dashboard_page(&state.db, None, Some(error), &locale)
                    .await?
                    .into_response()),
            }
        }
        names::FORM_TYPE_UPDATE_SETTINGS => {
            state
                .db
                .set_final_message(form.final_message.trim())
                .await
                .reject("could not update settings")?;
            redirect_with_flash(names::ADMIN_URL, names::FLASH_SETTINGS_UPDATED)
        }
        _ => Err(AppError::Input("unknown admin form type")),
    }
}

async fn edit_page(
    State(state): State<AppState>,
    Path(question_id): Path<i64>,
    Locale(locale): Locale,
) -> Result<Response, AppError> {
    let question = state
        .db
        .get_question(question_id)
        .await
        .reject("could not get question")?
        .ok_or(AppError::NotFound)?;

    let incorrect_options = state
        .db
        .incorrect_option_texts(question_id)
        .await
        .reject("could not get answer options")?;

    Ok(edit_view(&question, &incorrect_options, None, &locale).into_response())
}

#[derive(Deserialize)]
struct EditQuestionForm {
    #[serde(default)]
    question_text: String,
    #[serde(default)]
    correct_answer: String,
    #[serde(default)]
    wrong_answers: Vec<String>,
    #[serde(default)]
    secret_password: String,
    #[serde(default)]
    image: String,
    #[serde(default)]
    comment: String,
}

async fn edit_post(
    State(state): State<AppState>,
    Path(question_id): Path<i64>,
    Locale(locale): Locale,
    Form(form): Form<EditQuestionForm>,
) -> Result<Response, AppError> {
    let question = state
        .db
        .get_question(question_id)
        .await
        .reject("could not get question")?
        .ok_or(AppError::NotFound)?;

    let input = QuestionFormInput {
        text: form.question_text,
        correct_answer: form.correct_answer,
        wrong_answers: form.wrong_answers,
        secret_password: form.secret_password,
        image: form.image,
        comment: form.comment,
    };

    match question_form::validate(input) {
        Ok(new) => {
            state
                .db
                .update_question(question_id, &new)
                .await
                .reject("could not update question")?;
            redirect_with_flash(names::ADMIN_URL, names::FLASH_QUESTION_UPDATED)
        }
        Err(error) => {
            let incorrect_options = state
                .db
                .incorrect_option_texts(question_id)
                .await
                .reject("could not get answer options")?;
            Ok(edit_view(&question, &incorrect_options, Some(error), &locale).into_response())
        }
    }
}

async fn reset(State(state): State<AppState>) -> Result<Response, AppError> {
    state
        .db
        .reset_progress()
        .await
        .reject("could not reset progress")?;
    redirect_with_flash(names::ADMIN_URL, names::FLASH_PROGRESS_RESET)
}

// --- Helper functions: DB queries + view delegation ---

async fn dashboard_page(
    db: &Db,
    flash: Option<&str>,
    form_error: Option<QuestionFormError>,
    locale: &str,
) -> Result<Markup, AppError> {
    let questions = db.list_questions().await.reject("could not list questions")?;
    let final_message = db
        .final_message()
        .await
        .reject("could not get final message")?;

    Ok(views::page(
        &t!("admin.title", locale = locale),
        admin_views::dashboard(
            admin_views::DashboardData {
                questions: &questions,
                final_message: &final_message,
                flash,
                form_error,
            },
            locale,
        ),
        locale,
    ))
}

fn edit_view(
    question: &crate::db::QuestionRow,
    incorrect_options: &[String],
    form_error: Option<QuestionFormError>,
    locale: &str,
) -> Markup {
    views::page(
        &t!("admin.edit_heading", locale = locale),
        admin_views::edit(
            admin_views::EditData {
                question,
                incorrect_options,
                form_error,
            },
            locale,
        ),
        locale,
    )
}

fn redirect_with_flash(location: &'static str, flash: &str) -> Result<Response, AppError> {
    let cookie = utils::cookie(names::FLASH_COOKIE_NAME, flash)
        .reject("could not build flash cookie")?;

    Ok((
        StatusCode::SEE_OTHER,
        [
            (SET_COOKIE, cookie),
            (LOCATION, HeaderValue::from_static(location)),
        ],
        "",
    )
        .into_response())
}
