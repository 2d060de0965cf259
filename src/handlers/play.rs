use axum::{
    extract::{Form, State},
    http::{
        header::{LOCATION, SET_COOKIE},
        HeaderValue, StatusCode,
    },
    response::{IntoResponse, Redirect, Response},
    routing::{get, post},
    Router,
};
use maud::Markup;
use rust_i18n::t;
use serde::Deserialize;

use crate::{
    db::{Db, QuestionRow},
    extractors::Locale,
    names,
    progress::{self, AnswerOutcome, PasswordOutcome, QuizPhase},
    rejections::{AppError, ResultExt},
    sampler, utils, views,
    views::play as play_views,
    AppState,
};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(play_page).post(submit))
        .route(names::SET_LOCALE_URL, post(set_locale))
}

async fn play_page(
    State(state): State<AppState>,
    Locale(locale): Locale,
) -> Result<Response, AppError> {
    let count = state
        .db
        .questions_count()
        .await
        .reject("could not count questions")?;
    if count == 0 {
        return Ok(empty_page(&locale).into_response());
    }

    let index = state
        .db
        .current_index()
        .await
        .reject("could not get progress index")?;
    if progress::phase(index, count) == QuizPhase::Complete {
        return Ok(complete_page(&state.db, &locale).await?.into_response());
    }

    question_page(&state.db, index, count, false, &locale).await
}

#[derive(Deserialize)]
struct PlayForm {
    action: String,
    #[serde(default)]
    answer: Option<String>,
    #[serde(default)]
    question_password: Option<String>,
}

async fn submit(
    State(state): State<AppState>,
    Locale(locale): Locale,
    Form(form): Form<PlayForm>,
) -> Result<Response, AppError> {
    let count = state
        .db
        .questions_count()
        .await
        .reject("could not count questions")?;
    let index = state
        .db
        .current_index()
        .await
        .reject("could not get progress index")?;

    if count == 0 || progress::phase(index, count) == QuizPhase::Complete {
        return Ok(Redirect::to(names::PLAY_URL).into_response());
    }

    let Some(question) = state
        .db
        .question_by_index(index)
        .await
        .reject("could not get question")?
    else {
        return Ok(Redirect::to(names::PLAY_URL).into_response());
    };

    match form.action.as_str() {
        names::ACTION_ANSWER => {
            let selected = form.answer.unwrap_or_default();
            match progress::evaluate_answer(
                &selected,
                &question.correct_answer,
                &question.secret_password,
            ) {
                AnswerOutcome::Incorrect => {
                    question_page(&state.db, index, count, true, &locale).await
                }
                AnswerOutcome::PasswordRequired => Ok(gate_page(&question, false, &locale)),
                AnswerOutcome::Advance => advance(&state.db).await,
            }
        }
        names::ACTION_PASSWORD => {
            // The gate only exists for password-protected questions; a stray
            // password submission must not skip the answer check.
            if question.secret_password.is_empty() {
                return Ok(Redirect::to(names::PLAY_URL).into_response());
            }

            let entered = form.question_password.unwrap_or_default();
            match progress::evaluate_password(&entered, &question.secret_password) {
                PasswordOutcome::Rejected => Ok(gate_page(&question, true, &locale)),
                PasswordOutcome::Advance => advance(&state.db).await,
            }
        }
        _ => Err(AppError::Input("unknown play action")),
    }
}

async fn advance(db: &Db) -> Result<Response, AppError> {
    db.advance_progress()
        .await
        .reject("could not advance progress")?;
    Ok(Redirect::to(names::PLAY_URL).into_response())
}

// --- Helper functions: DB queries + view delegation ---

async fn question_page(
    db: &Db,
    index: i64,
    count: i64,
    incorrect_feedback: bool,
    locale: &str,
) -> Result<Response, AppError> {
    let Some(question) = db
        .question_by_index(index)
        .await
        .reject("could not get question")?
    else {
        return Ok(Redirect::to(names::PLAY_URL).into_response());
    };

    let incorrect_pool = db
        .incorrect_option_texts(question.id)
        .await
        .reject("could not get answer options")?;

    let filler = t!("play.filler_option", locale = locale);
    let choices = sampler::sample_choices(
        &mut rand::thread_rng(),
        &question.correct_answer,
        &incorrect_pool,
        &filler,
    );

    let page = views::page(
        &t!("play.title", locale = locale),
        play_views::question(
            play_views::QuestionPageData {
                question,
                choices,
                question_idx: index,
                questions_count: count,
                incorrect_feedback,
            },
            locale,
        ),
        locale,
    );
    Ok(page.into_response())
}

fn gate_page(question: &QuestionRow, wrong_password: bool, locale: &str) -> Response {
    views::page(
        &t!("play.title", locale = locale),
        play_views::password_gate(question, wrong_password, locale),
        locale,
    )
    .into_response()
}

async fn complete_page(db: &Db, locale: &str) -> Result<Markup, AppError> {
    let final_message = db
        .final_message()
        .await
        .reject("could not get final message")?;

    Ok(views::page(
        &t!("play.complete_title", locale = locale),
        play_views::complete(&final_message, locale),
        locale,
    ))
}

fn empty_page(locale: &str) -> Markup {
    views::page(
        &t!("play.empty_title", locale = locale),
        play_views::empty(locale),
        locale,
    )
}

#[derive(Deserialize)]
struct SetLocaleForm {
    locale: String,
}

async fn set_locale(Form(form): Form<SetLocaleForm>) -> Result<Response, AppError> {
    let locale = match form.locale.as_str() {
        "ar" => "ar",
        _ => "en",
    };
    let cookie = utils::cookie(names::LOCALE_COOKIE_NAME, locale)
        .reject("could not build locale cookie")?;

    Ok((
        StatusCode::SEE_OTHER,
        [
            (SET_COOKIE, cookie),
            (LOCATION, HeaderValue::from_static(names::PLAY_URL)),
        ],
        "",
    )
        .into_response())
}
