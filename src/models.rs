use std::collections::BTreeMap;

use serde::Serialize;

/// Field name → value mapping for the profile header section.
///
/// A map rather than a fixed struct: the positional extraction steps drop
/// trailing keys when the page carries fewer elements than expected, and
/// that truncation has to be representable in the response.
pub type GeneralInfo = BTreeMap<String, String>;

#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct Question {
    pub question: String,
    #[serde(rename = "questionUrl")]
    pub question_url: String,
}

#[derive(Serialize, Debug, Clone, PartialEq, Eq, Default)]
pub struct DifficultyBucket {
    pub count: usize,
    pub questions: Vec<Question>,
}

/// One bucket per difficulty tier. Every tier is always present in the
/// serialized response, populated or not.
#[derive(Serialize, Debug, Clone, PartialEq, Eq, Default)]
pub struct SolvedStats {
    pub school: DifficultyBucket,
    pub basic: DifficultyBucket,
    pub easy: DifficultyBucket,
    pub medium: DifficultyBucket,
    pub hard: DifficultyBucket,
}

#[derive(Serialize, Debug)]
pub struct ProfileResponse {
    pub info: GeneralInfo,
    #[serde(rename = "solvedStats")]
    pub solved_stats: SolvedStats,
}

#[derive(Serialize, Debug)]
pub struct ErrorResponse {
    pub error: String,
    pub details: String,
}
