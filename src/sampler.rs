use rand::seq::SliceRandom;
use rand::Rng;

/// Number of choices presented for every question.
pub const CHOICE_COUNT: usize = 4;

const WRONG_CHOICES: usize = CHOICE_COUNT - 1;

/// Build the shuffled choice list for one question: up to three distinct
/// wrong answers drawn from the pool, padded by re-sampling with repetition
/// (or with `filler` when the pool is empty), plus the correct answer.
///
/// Best effort only; uniqueness of the padded entries is not guaranteed.
pub fn sample_choices<R: Rng + ?Sized>(
    rng: &mut R,
    correct_answer: &str,
    incorrect_pool: &[String],
    filler: &str,
) -> Vec<String> {
    let mut pool: Vec<&str> = incorrect_pool.iter().map(String::as_str).collect();
    pool.shuffle(rng);

    let mut choices: Vec<String> = pool
        .iter()
        .take(WRONG_CHOICES)
        .map(|s| (*s).to_string())
        .collect();

    while choices.len() < WRONG_CHOICES {
        match pool.choose(rng) {
            Some(s) => choices.push((*s).to_string()),
            None => choices.push(filler.to_string()),
        }
    }

    choices.push(correct_answer.to_string());
    choices.shuffle(rng);
    choices
}
