pub const PLAY_URL: &str = "/";
pub const ADMIN_URL: &str = "/admin";
pub const ADMIN_RESET_URL: &str = "/admin/reset";
pub const SET_LOCALE_URL: &str = "/set-locale";

pub fn edit_question_url(question_id: i64) -> String {
    format!("/admin/edit/{question_id}")
}

// POST `/` dispatch
pub const ACTION_ANSWER: &str = "answer";
pub const ACTION_PASSWORD: &str = "password";

// POST `/admin` dispatch
pub const FORM_TYPE_ADD_QUESTION: &str = "add_question";
pub const FORM_TYPE_UPDATE_SETTINGS: &str = "update_settings";

// Flash cookie keys; ASCII in the cookie, localized at render time
pub const FLASH_COOKIE_NAME: &str = "flash";
pub const FLASH_QUESTION_ADDED: &str = "question_added";
pub const FLASH_QUESTION_UPDATED: &str = "question_updated";
pub const FLASH_SETTINGS_UPDATED: &str = "settings_updated";
pub const FLASH_PROGRESS_RESET: &str = "progress_reset";

// i18n
pub const LOCALE_COOKIE_NAME: &str = "lang";
pub const DEFAULT_LOCALE: &str = "en";
