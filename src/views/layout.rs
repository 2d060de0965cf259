use maud::{html, Markup, DOCTYPE};

use crate::{names, utils};

fn css() -> Markup {
    html! {
        link rel="stylesheet" href="/static/index.css";
    }
}

fn icon() -> Markup {
    html! {
        link rel="icon" href="/static/icon.svg" type="image/svg+xml";
    }
}

fn header() -> Markup {
    html! {
        header {
            nav {
                ul {
                    li."secondary" {
                        a href=(names::PLAY_URL) {
                            strong { "Quizgate" }
                        }
                    }
                    li."secondary" {
                        a href=(names::ADMIN_URL) { "Admin" }
                    }
                }
                ul {
                    li."secondary" { (utils::VERSION) }
                    li {
                        form method="post" action=(names::SET_LOCALE_URL) {
                            button."secondary" name="locale" value="en" { "EN" }
                            button."secondary" name="locale" value="ar" { "ع" }
                        }
                    }
                }
            }
        }
    }
}

fn main(body: Markup) -> Markup {
    html! {
        main { (body) }
    }
}

pub fn page(title: &str, body: Markup, locale: &str) -> Markup {
    let dir = if locale == "ar" { "rtl" } else { "ltr" };

    html! {
        (DOCTYPE)
        html lang=(locale) dir=(dir) {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1";
                meta name="color-scheme" content="light dark";

                (css())
                (icon())

                title { (format!("{title} - Quizgate")) }
            }

            body."container" {
                (header())
                (main(body))
            }
        }
    }
}
