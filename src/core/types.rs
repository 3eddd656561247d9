// wire types shared by the api client, the tui, and the cli output

use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    English,
    Indic,
}

impl Language {
    pub const ALL: [Language; 2] = [Language::English, Language::Indic];

    // the service reports languages as bare lowercase strings; anything
    // other than the two supported values counts as unrecognized
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "english" => Some(Language::English),
            "indic" => Some(Language::Indic),
            _ => None,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Language::English => "english",
            Language::Indic => "indic",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// what the check endpoints return inside responseData
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Classification {
    #[serde(rename = "isProfane")]
    pub is_profane: bool,
    pub category: String,
    pub confidence: f64,
}

impl Classification {
    // confidence comes back in [0,100]; one decimal matches the service docs
    pub fn confidence_label(&self) -> String {
        format!("{:.1}%", self.confidence)
    }
}

// llm validator payload: a classification plus the model's reasoning
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LlmVerification {
    #[serde(rename = "isProfane")]
    pub is_profane: bool,
    pub category: String,
    pub confidence: f64,
    pub reasoning: String,
}

impl LlmVerification {
    pub fn confidence_label(&self) -> String {
        format!("{:.1}%", self.confidence)
    }
}

// language detection result; `language` is None when the server string
// was not exactly english or indic
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Detection {
    pub language: Option<Language>,
    pub raw: String,
}
