use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// A selectable choice for a question. Higher points mean more impairment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct AnswerOption {
    pub label: String,
    pub points: u8,
}

/// One question within a health domain.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Question {
    pub id: String,
    pub prompt: String,
    pub options: Vec<AnswerOption>,
}

impl Question {
    /// The highest point value any option of this question carries.
    pub fn max_points(&self) -> u8 {
        self.options.iter().map(|o| o.points).max().unwrap_or(0)
    }

    /// Whether some option of this question is worth exactly `points`.
    pub fn offers_points(&self, points: u8) -> bool {
        self.options.iter().any(|o| o.points == points)
    }
}

/// One assessable health dimension (e.g., mobility).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Domain {
    pub id: String,
    pub name: String,
    /// Presentation hint for the portal UI, not used in scoring.
    pub icon: String,
    pub questions: Vec<Question>,
}

impl Domain {
    /// The maximum achievable score: the sum of every question's highest
    /// option value.
    pub fn max_score(&self) -> u32 {
        self.questions
            .iter()
            .map(|q| u32::from(q.max_points()))
            .sum()
    }

    pub fn question(&self, id: &str) -> Option<&Question> {
        self.questions.iter().find(|q| q.id == id)
    }
}

/// A wizard step groups 1–3 domains for UI pacing. Consumed only by the
/// lifecycle controller for step sequencing, never by the scorer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct WizardStep {
    pub title: String,
    pub domain_ids: Vec<String>,
}
