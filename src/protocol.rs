//! Public protocol structs for WebSocket and HTTP endpoints (serde ready).
//! Keep this small and stable to evolve backend and frontend independently.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::domain::{AxisDeltas, LearningStyle, PlotPoint, Question, ResponseSet, ScoreResult, Slate, StyleDescription, Tag, Totals};
use crate::logic::{completed_count, is_complete, slate_status, SlateStatus};
use crate::seeds::{style_description, QUESTIONS, QUESTION_COUNT};
use crate::state::{Phase, Session};

/// Messages the client can send over WebSocket.
#[derive(Debug, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ClientWsMessage {
    Ping,
    /// Drive an existing session (e.g. one created over HTTP) from this socket.
    Attach {
        #[serde(rename = "sessionId")]
        session_id: String,
    },
    Questionnaire,
    Start,
    SetRank {
        #[serde(rename = "questionIndex")]
        question_index: usize,
        tag: Tag,
        value: u8,
    },
    Submit,
    Reset,
    GetState,
}

/// Messages the server sends back over WebSocket.
#[derive(Debug, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ServerWsMessage {
    Pong,
    Questionnaire {
        questionnaire: QuestionnaireOut,
    },
    Session {
        session: SessionOut,
    },
    Result {
        result: ResultOut,
    },
    Error {
        message: String,
    },
}

#[derive(Debug, Serialize)]
pub struct TagOut {
    pub code: Tag,
    pub label: &'static str,
}

#[derive(Debug, Serialize)]
pub struct QuestionnaireOut {
    pub tags: Vec<TagOut>,
    pub questions: &'static [Question],
}

pub fn questionnaire_out() -> QuestionnaireOut {
    QuestionnaireOut {
        tags: Tag::ALL.iter().map(|t| TagOut { code: *t, label: t.label() }).collect(),
        questions: &QUESTIONS,
    }
}

/// Score plus the narrative to render next to it.
#[derive(Debug, Serialize)]
pub struct ResultOut {
    pub totals: Totals,
    pub axes: AxisDeltas,
    pub style: LearningStyle,
    pub plot: PlotPoint,
    pub description: &'static StyleDescription,
}

pub fn result_out(r: &ScoreResult) -> ResultOut {
    ResultOut {
        totals: r.totals,
        axes: r.axes,
        style: r.style,
        plot: r.plot,
        description: style_description(r.style),
    }
}

/// Per-question feedback derived from the current responses.
#[derive(Debug, Serialize)]
pub struct ValidationOut {
    pub statuses: Vec<SlateStatus>,
    pub completed: usize,
    pub total: usize,
    pub complete: bool,
}

pub fn validation_out(responses: &ResponseSet) -> ValidationOut {
    ValidationOut {
        statuses: responses.slates().iter().map(slate_status).collect(),
        completed: completed_count(responses),
        total: responses.len(),
        complete: is_complete(responses),
    }
}

#[derive(Debug, Serialize)]
pub struct SessionOut {
    pub id: String,
    pub phase: Phase,
    pub answers: Vec<Slate>,
    pub validation: ValidationOut,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<ResultOut>,
}

/// Build the public view of a session. Validity is computed here, from the
/// responses as they are now.
pub fn session_out(s: &Session) -> SessionOut {
    SessionOut {
        id: s.id.clone(),
        phase: s.phase,
        answers: s.responses.slates().to_vec(),
        validation: validation_out(&s.responses),
        result: s.result.as_ref().map(result_out),
    }
}

//
// HTTP request/response DTOs
//

#[derive(Debug, Serialize)]
pub struct StyleOut {
    pub style: LearningStyle,
    pub description: &'static StyleDescription,
}

#[derive(Debug, Deserialize)]
pub struct RankIn {
    #[serde(rename = "questionIndex")]
    pub question_index: usize,
    pub tag: Tag,
    pub value: u8,
}

/// A full slate list supplied by a caller that keeps its own state.
#[derive(Debug, Deserialize)]
pub struct ResponsesIn {
    pub answers: ResponseSet,
}

impl ResponsesIn {
    /// The answers, provided there is exactly one slate per question.
    pub fn into_responses(self) -> Result<ResponseSet> {
        let actual = self.answers.len();
        if actual != QUESTION_COUNT {
            return Err(Error::WrongQuestionCount { expected: QUESTION_COUNT, actual });
        }
        Ok(self.answers)
    }
}

#[derive(Serialize)]
pub struct HealthOut {
    pub ok: bool,
}
