// output formatting for one-shot commands - readable summary or raw json

use crate::core::{Classification, Detection, LlmVerification};

pub struct Output;

impl Output {
    pub fn check(text: &str, result: &Classification) {
        println!("text: {text}\n");

        let verdict = if result.is_profane {
            "Profane Content Detected"
        } else {
            "Clean Content"
        };
        println!("verdict:    {verdict}");
        println!("category:   {}", result.category);
        println!("confidence: {}", result.confidence_label());
    }

    pub fn verification(text: &str, result: &LlmVerification) {
        println!("text: {text}\n");

        let verdict = if result.is_profane {
            "Profane (LLM)"
        } else {
            "Clean (LLM)"
        };
        println!("verdict:    {verdict}");
        println!("category:   {}", result.category);
        println!("confidence: {}", result.confidence_label());
        println!("reason:     {}", result.reasoning);
    }

    pub fn detection(text: &str, result: &Detection) {
        println!("text: {text}\n");

        match result.language {
            Some(lang) => println!("detected: {lang}"),
            None => println!("detected: (unrecognized)"),
        }
        println!("raw:      {}", result.raw);
    }

    // raw json for scripts
    pub fn raw<T: serde::Serialize>(value: &T) {
        println!("{}", serde_json::to_string(value).unwrap_or_default());
    }
}
