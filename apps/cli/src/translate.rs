//! Word-by-word translation client.
//!
//! Asks a chat-completion model to translate a sentence fragment by
//! fragment, in a line format the anki renderer can align with the
//! original words:
//!
//! ```text
//! WORD1:::TRANSLATION;;;
//! WORD2:::TRANSLATION;;;
//! ```

use reqwest::Client;
use serde::{Deserialize, Serialize};

const API_URL: &str = "https://api.openai.com/v1/chat/completions";
const MODEL: &str = "gpt-4-turbo";

/// Translation errors.
#[derive(Debug, thiserror::Error)]
pub enum TranslateError {
    #[error("OPENAI_API_KEY is not set")]
    MissingApiKey,

    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("model returned no choices")]
    EmptyResponse,

    #[error("unparseable fragment line: {line}")]
    BadLine { line: String },
}

/// An aligned (source words, translation) pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fragment {
    pub source: String,
    pub translation: String,
}

/// Client for word-by-word sentence translation.
pub struct Translator {
    client: Client,
    api_key: String,
    prompt: String,
}

impl Translator {
    /// Build a translator from the `OPENAI_API_KEY` environment variable.
    pub fn from_env(source_lang: &str, target_lang: &str) -> Result<Self, TranslateError> {
        let api_key = std::env::var("OPENAI_API_KEY")
            .ok()
            .filter(|k| !k.trim().is_empty())
            .ok_or(TranslateError::MissingApiKey)?;
        Ok(Self {
            client: Client::new(),
            api_key: api_key.trim().to_string(),
            prompt: system_prompt(source_lang, target_lang),
        })
    }

    /// Translate one sentence into aligned fragments.
    pub async fn word_by_word(&self, sentence: &str) -> Result<Vec<Fragment>, TranslateError> {
        let request = ChatRequest {
            model: MODEL,
            messages: vec![
                ChatMessage {
                    role: "system".to_string(),
                    content: self.prompt.clone(),
                },
                ChatMessage {
                    role: "user".to_string(),
                    content: sentence.to_string(),
                },
            ],
        };

        let response: ChatResponse = self
            .client
            .post(API_URL)
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        let content = response
            .choices
            .into_iter()
            .next()
            .map(|c| c.message.content)
            .ok_or(TranslateError::EmptyResponse)?;

        parse_fragments(&content)
    }
}

fn system_prompt(source_lang: &str, target_lang: &str) -> String {
    format!(
        "You will receive a sentence in {source_lang}.\n\
         \n\
         Translate it to {target_lang} word-by-word.\n\
         However, function words, phrasemes etc. should be joined together.\n\
         Also, try to make the translation as coherent as possible.\n\
         \n\
         You must print the result precisely in the following format:\n\
         \tWORD1:::TRANSLATION;;;\n\
         \tWORD2:::TRANSLATION;;;\n\
         One line corresponds to one fragment.\n\
         The original fragment and its translation are separated by 3 colons.\n\
         The fragments are separated by 3 semicolons.\n\
         \n\
         Details:\n\
         1. If there are errors of any kind (formatting, punctuation, semantic)\n\
         \x20\x20 in the original sentence then modify the sentence to correct them.\n\
         2. The translation should have proper punctuation and formatting."
    )
}

/// Parse the model's `SOURCE:::TRANSLATION;;;` line format.
pub fn parse_fragments(raw: &str) -> Result<Vec<Fragment>, TranslateError> {
    let mut fragments = Vec::new();
    for piece in raw.trim().split(";;;") {
        let piece = piece.trim();
        if piece.is_empty() {
            continue;
        }
        let mut parts = piece.splitn(3, ":::");
        match (parts.next(), parts.next(), parts.next()) {
            (Some(source), Some(translation), None) => fragments.push(Fragment {
                source: source.trim().to_string(),
                translation: translation.trim().to_string(),
            }),
            _ => {
                return Err(TranslateError::BadLine {
                    line: piece.to_string(),
                })
            }
        }
    }
    Ok(fragments)
}

// === API request/response types ===

#[derive(Debug, Serialize)]
struct ChatRequest {
    model: &'static str,
    messages: Vec<ChatMessage>,
}

#[derive(Debug, Serialize, Deserialize)]
struct ChatMessage {
    role: String,
    content: String,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatMessage,
}
