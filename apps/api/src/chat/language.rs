//! Language detection and translation between Amharic and English.
//!
//! Both steps fail open: classification defaults to English, translation
//! falls back to the untranslated text. The fallback is an explicit match arm
//! on `Result<_, LlmError>` so it is visible at the call site.

use serde::Serialize;
use tracing::warn;

use crate::chat::prompts::{
    LANGUAGE_DETECT_PROMPT, TRANSLATE_PROMPT, TRANSLATE_TO_AMHARIC, TRANSLATE_TO_ENGLISH,
};
use crate::llm_client::{LlmError, TextGenerator};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Language {
    #[serde(rename = "am")]
    Amharic,
    #[serde(rename = "en")]
    English,
}

impl Language {
    pub fn code(&self) -> &'static str {
        match self {
            Language::Amharic => "am",
            Language::English => "en",
        }
    }
}

/// Interprets the classifier's reply. Anything mentioning `am` is Amharic.
pub fn parse_language_reply(reply: &str) -> Language {
    if reply.trim().to_lowercase().contains("am") {
        Language::Amharic
    } else {
        Language::English
    }
}

/// Asks the model whether `text` is Amharic or English.
pub async fn classify(llm: &dyn TextGenerator, text: &str) -> Result<Language, LlmError> {
    let prompt = LANGUAGE_DETECT_PROMPT.replace("{text}", text);
    let reply = llm.generate(None, &[], &prompt).await?;
    Ok(parse_language_reply(&reply))
}

/// `classify`, defaulting to English on any provider failure.
pub async fn detect_language(llm: &dyn TextGenerator, text: &str) -> Language {
    match classify(llm, text).await {
        Ok(lang) => lang,
        Err(e) => {
            warn!("Language detection failed, defaulting to English: {e}");
            Language::English
        }
    }
}

/// Translates `text` into `target`. An empty translation counts as a failure.
pub async fn translate(
    llm: &dyn TextGenerator,
    text: &str,
    target: Language,
) -> Result<String, LlmError> {
    let instruction = match target {
        Language::English => TRANSLATE_TO_ENGLISH,
        Language::Amharic => TRANSLATE_TO_AMHARIC,
    };
    let prompt = TRANSLATE_PROMPT
        .replace("{instruction}", instruction)
        .replace("{text}", text);

    let translated = llm.generate(None, &[], &prompt).await?;
    let translated = translated.trim();
    if translated.is_empty() {
        return Err(LlmError::EmptyContent);
    }
    Ok(translated.to_string())
}

/// `translate`, falling back to the original text on any failure.
pub async fn translate_or_original(llm: &dyn TextGenerator, text: &str, target: Language) -> String {
    match translate(llm, text, target).await {
        Ok(translated) => translated,
        Err(e) => {
            warn!(
                "Translation to '{}' failed, using original text: {e}",
                target.code()
            );
            text.to_string()
        }
    }
}
