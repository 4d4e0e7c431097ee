//! Public protocol structs for WebSocket and HTTP endpoints (serde ready).
//! Keep this small and stable to evolve backend and frontend independently.

use serde::{Deserialize, Serialize};

use crate::cipher::CipherMap;
use crate::quiz::{AnswerCheck, Mode, QuestionSet, RoundSummary};

/// Messages the client can send over WebSocket.
#[derive(Debug, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ClientWsMessage {
    Ping,
    StartQuiz {
        #[serde(default)]
        mode: Option<String>,
    },
    CheckAnswer {
        #[serde(default)]
        mode: Option<String>,
        #[serde(default)]
        letter: Option<String>,
        #[serde(default)]
        answer: Option<String>,
    },
    Mapping,
    Summary {
        score: u32,
        total: u32,
    },
}

/// Messages the server sends back over WebSocket.
#[derive(Debug, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ServerWsMessage {
    Pong,
    Quiz(StartQuizOut),
    AnswerResult(CheckAnswerOut),
    Mapping(MappingOut),
    Summary(RoundSummary),
    Error {
        error: String,
        message: String,
    },
}

//
// HTTP request/response DTOs
//

#[derive(Debug, Default, Deserialize)]
pub struct StartQuizIn {
    #[serde(default)]
    pub mode: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct StartQuizOut {
    pub letters: Vec<char>,
    pub success: bool,
    pub mode: Mode,
}

impl From<QuestionSet> for StartQuizOut {
    fn from(set: QuestionSet) -> Self {
        StartQuizOut { letters: set.letters, success: true, mode: set.mode }
    }
}

/// `null` and absent fields both land as `None` and grade as missing input.
#[derive(Debug, Default, Deserialize)]
pub struct CheckAnswerIn {
    #[serde(default)]
    pub mode: Option<String>,
    #[serde(default)]
    pub letter: Option<String>,
    #[serde(default)]
    pub answer: Option<String>,
}

impl CheckAnswerIn {
    pub fn letter(&self) -> &str {
        self.letter.as_deref().unwrap_or("")
    }

    pub fn answer(&self) -> &str {
        self.answer.as_deref().unwrap_or("")
    }
}

#[derive(Debug, Serialize)]
pub struct CheckAnswerOut {
    pub correct: bool,
    pub correct_answer: String,
    pub question_letter: String,
}

impl From<AnswerCheck> for CheckAnswerOut {
    fn from(check: AnswerCheck) -> Self {
        CheckAnswerOut {
            correct: check.correct,
            correct_answer: check.correct_answer.to_string(),
            question_letter: check.question_letter.to_string(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct MappingPair {
    pub english: char,
    pub cipher: char,
}

#[derive(Debug, Serialize)]
pub struct MappingOut {
    pub pairs: Vec<MappingPair>,
}

pub fn mapping_out(map: &CipherMap) -> MappingOut {
    MappingOut {
        pairs: map
            .pairs()
            .into_iter()
            .map(|(english, cipher)| MappingPair { english, cipher })
            .collect(),
    }
}

#[derive(Debug, Deserialize)]
pub struct SummaryIn {
    pub score: u32,
    pub total: u32,
}

#[derive(Serialize)]
pub struct HealthOut {
    pub ok: bool,
}
