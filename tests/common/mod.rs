use quizgate::db::{Db, NewQuestion};

pub async fn create_test_db() -> Db {
    use std::sync::atomic::{AtomicU32, Ordering};
    static COUNTER: AtomicU32 = AtomicU32::new(0);
    let id = COUNTER.fetch_add(1, Ordering::SeqCst);
    let path =
        std::env::temp_dir().join(format!("quizgate_test_{}_{}.db", std::process::id(), id));
    // Clean up leftover file from previous runs
    let _ = std::fs::remove_file(&path);
    let url = format!("sqlite:{}", path.display());
    Db::new(&url).await.expect("failed to create test database")
}

pub fn new_question(text: &str, correct_answer: &str, secret_password: &str) -> NewQuestion {
    NewQuestion {
        text: text.to_string(),
        correct_answer: correct_answer.to_string(),
        wrong_answers: vec![
            "Wrong 1".to_string(),
            "Wrong 2".to_string(),
            "Wrong 3".to_string(),
        ],
        secret_password: secret_password.to_string(),
        image: None,
        comment: None,
    }
}
