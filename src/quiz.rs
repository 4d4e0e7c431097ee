//! Quiz rounds: mode-aware question generation and answer grading.
//!
//! Everything here is a pure function of its inputs plus the fixed
//! `CipherMap`; nothing is remembered between calls.

use rand::seq::SliceRandom;
use rand::Rng;
use serde::Serialize;
use tracing::{debug, warn};

use crate::cipher::{normalize_symbol, Alphabet, CipherMap, ALPHABET_LEN};
use crate::error::QuizError;

/// Quiz direction: which alphabet is shown, which one is typed back.
/// Parsed from the wire with `Mode::from_wire`, which also takes the legacy
/// `english_to_albhed` / `albhed_to_english` names.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Mode {
    #[default]
    EnglishToCipher,
    CipherToEnglish,
}

impl Mode {
    /// Lenient parse used at the request boundary: missing or unknown
    /// values fall back to `EnglishToCipher` so older clients keep working.
    pub fn from_wire(raw: Option<&str>) -> Self {
        match raw.map(str::trim) {
            None | Some("") => Mode::default(),
            Some("english_to_cipher") | Some("english_to_albhed") => Mode::EnglishToCipher,
            Some("cipher_to_english") | Some("albhed_to_english") => Mode::CipherToEnglish,
            Some(other) => {
                warn!(target: "quiz", mode = %other, "Unrecognized quiz mode; using english_to_cipher");
                Mode::default()
            }
        }
    }

    pub fn question_alphabet(self) -> Alphabet {
        match self {
            Mode::EnglishToCipher => Alphabet::English,
            Mode::CipherToEnglish => Alphabet::Cipher,
        }
    }
}

/// One shuffled, complete enumeration of the question alphabet.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct QuestionSet {
    pub mode: Mode,
    pub letters: Vec<char>,
}

/// Verdict for one submitted answer.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct AnswerCheck {
    pub correct: bool,
    pub correct_answer: char,
    pub question_letter: char,
}

/// Start a round with the thread-local RNG.
pub fn start_quiz(map: &CipherMap, mode: Mode) -> QuestionSet {
    start_quiz_with(map, mode, &mut rand::thread_rng())
}

/// Start a round drawing the permutation from `rng`.
pub fn start_quiz_with<R: Rng + ?Sized>(map: &CipherMap, mode: Mode, rng: &mut R) -> QuestionSet {
    let mut letters = map.alphabet(mode.question_alphabet()).to_vec();
    letters.shuffle(rng);
    debug!(target: "quiz", ?mode, count = letters.len(), "Question set generated");
    QuestionSet { mode, letters }
}

/// Grade `answer` for the question `question` under `mode`.
pub fn check_answer(map: &CipherMap, mode: Mode, question: &str, answer: &str) -> Result<AnswerCheck, QuizError> {
    let question = normalize_symbol(question);
    let answer = normalize_symbol(answer);

    if question.is_empty() {
        return Err(QuizError::MissingInput { field: "letter" });
    }
    if answer.is_empty() {
        return Err(QuizError::MissingInput { field: "answer" });
    }

    let expected = match mode {
        Mode::EnglishToCipher => map.forward(&question)?,
        Mode::CipherToEnglish => map.reverse(&question)?,
    };

    // `question` resolved, so it is exactly one ASCII letter.
    let question_letter = question.chars().next().unwrap_or(expected);
    let mut answer_chars = answer.chars();
    let correct = answer_chars.next() == Some(expected) && answer_chars.next().is_none();

    Ok(AnswerCheck { correct, correct_answer: expected, question_letter })
}

/// Performance tier shown at the end of a round.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Performance {
    Perfect,
    Excellent,
    Good,
    KeepPracticing,
}

impl Performance {
    fn from_percentage(pct: u32) -> Self {
        match pct {
            100.. => Performance::Perfect,
            80..=99 => Performance::Excellent,
            60..=79 => Performance::Good,
            _ => Performance::KeepPracticing,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct RoundSummary {
    pub score: u32,
    pub total: u32,
    pub percentage: u32,
    pub performance: Performance,
}

/// Summarize a finished round. Score keeping lives with the caller; this only
/// turns the two numbers into a percentage (rounded half up) and a tier.
pub fn summarize(score: u32, total: u32) -> Result<RoundSummary, QuizError> {
    if total == 0 || score > total {
        return Err(QuizError::InvalidScore { score, total });
    }
    let (s, t) = (u64::from(score), u64::from(total));
    let percentage = ((200 * s + t) / (2 * t)) as u32;
    Ok(RoundSummary { score, total, percentage, performance: Performance::from_percentage(percentage) })
}
