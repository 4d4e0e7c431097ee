//! Al Bhed flash-card quiz.
//!
//! - `cipher`: the fixed English <-> Al Bhed letter bijection
//! - `quiz`: shuffled question sets, answer grading, round summaries
//! - `routes`: Axum HTTP + WebSocket surface over the two

pub mod cipher;
pub mod config;
pub mod error;
pub mod logic;
pub mod protocol;
pub mod quiz;
pub mod routes;
pub mod state;
pub mod telemetry;

pub use cipher::{Alphabet, CipherMap};
pub use error::{ApiError, CipherError, QuizError};
pub use quiz::{check_answer, start_quiz, start_quiz_with, summarize, AnswerCheck, Mode, QuestionSet};
