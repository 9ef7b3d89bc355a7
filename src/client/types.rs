//! Request and response shapes for the Nativ API

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Documented tone levels of a translation
///
/// Requests carry formality as a plain string so that whatever the caller
/// gives reaches the API unchanged; this enum only names the known levels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Formality {
    VeryInformal,
    Informal,
    Neutral,
    Formal,
    VeryFormal,
}

impl std::str::FromStr for Formality {
    type Err = crate::Error;

    fn from_str(s: &str) -> crate::Result<Self> {
        match s.to_lowercase().replace('-', "_").as_str() {
            "very_informal" => Ok(Formality::VeryInformal),
            "informal" => Ok(Formality::Informal),
            "neutral" => Ok(Formality::Neutral),
            "formal" => Ok(Formality::Formal),
            "very_formal" => Ok(Formality::VeryFormal),
            _ => Err(crate::Error::InvalidInput(format!(
                "Invalid formality: {}. Valid options: very_informal, informal, neutral, formal, very_formal",
                s
            ))),
        }
    }
}

impl Formality {
    pub fn as_str(&self) -> &'static str {
        match self {
            Formality::VeryInformal => "very_informal",
            Formality::Informal => "informal",
            Formality::Neutral => "neutral",
            Formality::Formal => "formal",
            Formality::VeryFormal => "very_formal",
        }
    }
}

impl std::fmt::Display for Formality {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<Formality> for String {
    fn from(formality: Formality) -> Self {
        formality.as_str().to_string()
    }
}

pub(crate) const DEFAULT_SOURCE_LANGUAGE: &str = "English";
pub(crate) const DEFAULT_SOURCE_LANGUAGE_CODE: &str = "en";
pub(crate) const DEFAULT_TM_SEARCH_LIMIT: u32 = 10;

/// Parameters for a single translation
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TranslateRequest {
    pub text: String,
    pub target_language: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_language_code: Option<String>,
    pub source_language: String,
    pub source_language_code: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub context: Option<String>,
    /// Inline glossary as CSV (`term,translation` rows)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub glossary: Option<String>,
    /// Tone, e.g. "formal"; sent as given
    #[serde(skip_serializing_if = "Option::is_none")]
    pub formality: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_characters: Option<u32>,
    pub backtranslate: bool,
}

impl TranslateRequest {
    /// Translate `text` into `target_language` from English
    pub fn new(text: impl Into<String>, target_language: impl Into<String>) -> Self {
        TranslateRequest {
            text: text.into(),
            target_language: target_language.into(),
            target_language_code: None,
            source_language: DEFAULT_SOURCE_LANGUAGE.to_string(),
            source_language_code: DEFAULT_SOURCE_LANGUAGE_CODE.to_string(),
            context: None,
            glossary: None,
            formality: None,
            max_characters: None,
            backtranslate: false,
        }
    }
}

/// Parameters for translating several texts into one language
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BatchTranslateRequest {
    pub texts: Vec<String>,
    pub target_language: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_language_code: Option<String>,
    pub source_language: String,
    pub source_language_code: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub context: Option<String>,
    /// Tone, e.g. "formal"; sent as given
    #[serde(skip_serializing_if = "Option::is_none")]
    pub formality: Option<String>,
}

impl BatchTranslateRequest {
    pub fn new(texts: Vec<String>, target_language: impl Into<String>) -> Self {
        BatchTranslateRequest {
            texts,
            target_language: target_language.into(),
            target_language_code: None,
            source_language: DEFAULT_SOURCE_LANGUAGE.to_string(),
            source_language_code: DEFAULT_SOURCE_LANGUAGE_CODE.to_string(),
            context: None,
            formality: None,
        }
    }
}

/// Fuzzy search over the translation memory
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TmSearchRequest {
    pub query: String,
    pub source_language_code: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_language_code: Option<String>,
    /// Minimum fuzzy-match score (0-100)
    pub min_score: f64,
    pub limit: u32,
}

impl TmSearchRequest {
    pub fn new(query: impl Into<String>) -> Self {
        TmSearchRequest {
            query: query.into(),
            source_language_code: DEFAULT_SOURCE_LANGUAGE_CODE.to_string(),
            target_language_code: None,
            min_score: 0.0,
            limit: DEFAULT_TM_SEARCH_LIMIT,
        }
    }
}

/// An approved translation to store in the translation memory
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewTmEntry {
    pub source_text: String,
    pub target_text: String,
    pub source_language_code: String,
    pub target_language_code: String,
    /// Optional label, e.g. "homepage hero copy"
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

/// Result of a translation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Translation {
    pub translated_text: String,
    #[serde(default)]
    pub rationale: Option<String>,
    #[serde(default)]
    pub backtranslation: Option<String>,
    #[serde(default)]
    pub tm_match: Option<TmMatch>,
    #[serde(default)]
    pub metadata: Option<TranslationMetadata>,
}

impl Translation {
    /// A bare translation with no extras
    pub fn text(translated_text: impl Into<String>) -> Self {
        Translation {
            translated_text: translated_text.into(),
            rationale: None,
            backtranslation: None,
            tm_match: None,
            metadata: None,
        }
    }
}

/// Translation memory hit used for a translation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TmMatch {
    pub score: f64,
    pub match_type: String,
    #[serde(default)]
    pub tm_id: Option<String>,
    #[serde(default)]
    pub source_text: Option<String>,
    #[serde(default)]
    pub target_text: Option<String>,
}

/// Billing details of a translation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TranslationMetadata {
    #[serde(default)]
    pub word_count: u64,
    #[serde(default)]
    pub cost: u64,
}

/// A translation memory search hit
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TmSearchMatch {
    #[serde(default)]
    pub tm_id: String,
    pub score: f64,
    pub match_type: String,
    pub source_text: String,
    pub target_text: String,
    #[serde(default)]
    pub information_source: Option<String>,
}

/// A stored translation memory entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TmEntry {
    pub id: String,
    pub source_language_code: String,
    pub source_text: String,
    pub target_language_code: String,
    pub target_text: String,
    #[serde(default)]
    pub information_source: Option<String>,
    #[serde(default)]
    pub enabled: Option<bool>,
    #[serde(default)]
    pub priority: Option<i64>,
    #[serde(default)]
    pub name: Option<String>,
}

/// A target language configured in the workspace
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Language {
    #[serde(default)]
    pub id: Option<i64>,
    /// Display name, e.g. "French"
    pub language: String,
    pub language_code: String,
    #[serde(default)]
    pub formality: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StyleGuide {
    #[serde(default)]
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub is_enabled: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BrandVoice {
    #[serde(default)]
    pub prompt: Option<String>,
    #[serde(default)]
    pub exists: bool,
}

/// Translation memory counters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TmStats {
    pub total: u64,
    pub enabled: u64,
    pub disabled: u64,
    /// Source label to count, in the order the API returned them
    #[serde(default)]
    pub by_source: Option<Map<String, Value>>,
}
