//! Nativ localization tools
//!
//! One `Tool` per toolkit operation. Arguments are deserialized into typed
//! structs whose JSON Schema is generated with `schemars`, so the schema the
//! model sees and the parsing applied to its call cannot drift apart.

use std::sync::Arc;

use async_trait::async_trait;
use schemars::JsonSchema;
use serde::Deserialize;
use serde_json::Value;

use super::toolkit::NativToolkit;
use super::traits::{parse_arguments, Tool, ToolResult};
use crate::client::{
    BatchTranslateRequest, NewTmEntry, TmSearchRequest, TranslateRequest,
    DEFAULT_SOURCE_LANGUAGE, DEFAULT_SOURCE_LANGUAGE_CODE, DEFAULT_TM_SEARCH_LIMIT,
};
use crate::error::Result;

/// Tool names, in the order `to_tool_list` returns them
pub const TOOL_NAMES: [&str; 8] = [
    "translate",
    "translate_batch",
    "search_translation_memory",
    "add_translation_memory_entry",
    "get_languages",
    "get_style_guides",
    "get_brand_voice",
    "get_translation_memory_stats",
];

impl NativToolkit {
    /// All eight Nativ tools sharing this toolkit
    pub fn to_tool_list(self: &Arc<Self>) -> Vec<Arc<dyn Tool>> {
        vec![
            Arc::new(TranslateTool::new(self.clone())),
            Arc::new(TranslateBatchTool::new(self.clone())),
            Arc::new(SearchTranslationMemoryTool::new(self.clone())),
            Arc::new(AddTranslationMemoryEntryTool::new(self.clone())),
            Arc::new(GetLanguagesTool::new(self.clone())),
            Arc::new(GetStyleGuidesTool::new(self.clone())),
            Arc::new(GetBrandVoiceTool::new(self.clone())),
            Arc::new(GetTranslationMemoryStatsTool::new(self.clone())),
        ]
    }
}

fn schema_of<T: JsonSchema>() -> Value {
    serde_json::to_value(schemars::schema_for!(T))
        .unwrap_or_else(|_| serde_json::json!({ "type": "object" }))
}

fn default_source_language() -> String {
    DEFAULT_SOURCE_LANGUAGE.to_string()
}

fn default_source_language_code() -> String {
    DEFAULT_SOURCE_LANGUAGE_CODE.to_string()
}

fn default_limit() -> u32 {
    DEFAULT_TM_SEARCH_LIMIT
}

#[derive(Debug, Deserialize, JsonSchema)]
struct TranslateArgs {
    /// The text to translate.
    text: String,
    /// Full target language name, e.g. 'French', 'German'.
    target_language: String,
    /// ISO language code, e.g. 'fr'. Auto-detected if omitted.
    #[serde(default)]
    target_language_code: Option<String>,
    /// Source language name.
    #[serde(default = "default_source_language")]
    source_language: String,
    /// Source language ISO code.
    #[serde(default = "default_source_language_code")]
    source_language_code: String,
    /// Context to guide the translation, e.g. 'mobile app button'.
    #[serde(default)]
    context: Option<String>,
    /// Inline glossary as CSV, e.g. 'term,translation\nbrand,marque'.
    #[serde(default)]
    glossary: Option<String>,
    /// Tone: 'very_informal', 'informal', 'neutral', 'formal' or 'very_formal'.
    #[serde(default)]
    formality: Option<String>,
    /// Strict character limit for the output.
    #[serde(default)]
    max_characters: Option<u32>,
    /// If true, also return a back-translation to verify intent.
    #[serde(default)]
    backtranslate: bool,
}

impl From<TranslateArgs> for TranslateRequest {
    fn from(a: TranslateArgs) -> Self {
        TranslateRequest {
            text: a.text,
            target_language: a.target_language,
            target_language_code: a.target_language_code,
            source_language: a.source_language,
            source_language_code: a.source_language_code,
            context: a.context,
            glossary: a.glossary,
            formality: a.formality,
            max_characters: a.max_characters,
            backtranslate: a.backtranslate,
        }
    }
}

#[derive(Debug, Deserialize, JsonSchema)]
struct TranslateBatchArgs {
    /// List of texts to translate.
    texts: Vec<String>,
    /// Full target language name, e.g. 'French'.
    target_language: String,
    /// ISO language code.
    #[serde(default)]
    target_language_code: Option<String>,
    /// Source language name.
    #[serde(default = "default_source_language")]
    source_language: String,
    /// Source language code.
    #[serde(default = "default_source_language_code")]
    source_language_code: String,
    /// Context hint for all translations.
    #[serde(default)]
    context: Option<String>,
    /// Tone: 'very_informal', 'informal', 'neutral', 'formal' or 'very_formal'.
    #[serde(default)]
    formality: Option<String>,
}

impl From<TranslateBatchArgs> for BatchTranslateRequest {
    fn from(a: TranslateBatchArgs) -> Self {
        BatchTranslateRequest {
            texts: a.texts,
            target_language: a.target_language,
            target_language_code: a.target_language_code,
            source_language: a.source_language,
            source_language_code: a.source_language_code,
            context: a.context,
            formality: a.formality,
        }
    }
}

#[derive(Debug, Deserialize, JsonSchema)]
struct SearchArgs {
    /// Text to search for.
    query: String,
    /// Source language code.
    #[serde(default = "default_source_language_code")]
    source_language_code: String,
    /// Target language code to filter results.
    #[serde(default)]
    target_language_code: Option<String>,
    /// Minimum fuzzy-match score (0-100).
    #[serde(default)]
    min_score: f64,
    /// Maximum number of results.
    #[serde(default = "default_limit")]
    limit: u32,
}

impl From<SearchArgs> for TmSearchRequest {
    fn from(a: SearchArgs) -> Self {
        TmSearchRequest {
            query: a.query,
            source_language_code: a.source_language_code,
            target_language_code: a.target_language_code,
            min_score: a.min_score,
            limit: a.limit,
        }
    }
}

#[derive(Debug, Deserialize, JsonSchema)]
struct AddEntryArgs {
    /// The original text.
    source_text: String,
    /// The approved translation.
    target_text: String,
    /// Source language code, e.g. 'en'.
    source_language_code: String,
    /// Target language code, e.g. 'fr'.
    target_language_code: String,
    /// Optional label for this entry, e.g. 'homepage hero copy'.
    #[serde(default)]
    name: Option<String>,
}

impl From<AddEntryArgs> for NewTmEntry {
    fn from(a: AddEntryArgs) -> Self {
        NewTmEntry {
            source_text: a.source_text,
            target_text: a.target_text,
            source_language_code: a.source_language_code,
            target_language_code: a.target_language_code,
            name: a.name,
        }
    }
}

#[derive(Debug, Deserialize, JsonSchema)]
struct NoArgs {}

/// Tool to translate a single text
pub struct TranslateTool {
    toolkit: Arc<NativToolkit>,
}

impl TranslateTool {
    pub fn new(toolkit: Arc<NativToolkit>) -> Self {
        TranslateTool { toolkit }
    }
}

#[async_trait]
impl Tool for TranslateTool {
    fn name(&self) -> &str {
        "translate"
    }

    fn description(&self) -> &str {
        "Translate text using Nativ's AI localization engine. Automatically leverages the team's translation memory, brand voice, and style guides for consistent, on-brand translations."
    }

    fn parameters_schema(&self) -> Value {
        schema_of::<TranslateArgs>()
    }

    async fn execute(&self, args: Value) -> Result<ToolResult> {
        let args: TranslateArgs = parse_arguments(&args)?;
        let text = self.toolkit.translate(args.into()).await?;
        Ok(ToolResult::success(text))
    }
}

/// Tool to translate several texts into the same language
pub struct TranslateBatchTool {
    toolkit: Arc<NativToolkit>,
}

impl TranslateBatchTool {
    pub fn new(toolkit: Arc<NativToolkit>) -> Self {
        TranslateBatchTool { toolkit }
    }
}

#[async_trait]
impl Tool for TranslateBatchTool {
    fn name(&self) -> &str {
        "translate_batch"
    }

    fn description(&self) -> &str {
        "Translate multiple texts to the same target language in one call."
    }

    fn parameters_schema(&self) -> Value {
        schema_of::<TranslateBatchArgs>()
    }

    async fn execute(&self, args: Value) -> Result<ToolResult> {
        let args: TranslateBatchArgs = parse_arguments(&args)?;
        let text = self.toolkit.translate_batch(args.into()).await?;
        Ok(ToolResult::success(text))
    }
}

/// Tool to fuzzy-search the translation memory
pub struct SearchTranslationMemoryTool {
    toolkit: Arc<NativToolkit>,
}

impl SearchTranslationMemoryTool {
    pub fn new(toolkit: Arc<NativToolkit>) -> Self {
        SearchTranslationMemoryTool { toolkit }
    }
}

#[async_trait]
impl Tool for SearchTranslationMemoryTool {
    fn name(&self) -> &str {
        "search_translation_memory"
    }

    fn description(&self) -> &str {
        "Fuzzy-search existing translations in the translation memory."
    }

    fn parameters_schema(&self) -> Value {
        schema_of::<SearchArgs>()
    }

    async fn execute(&self, args: Value) -> Result<ToolResult> {
        let args: SearchArgs = parse_arguments(&args)?;
        let text = self.toolkit.search_translation_memory(args.into()).await?;
        Ok(ToolResult::success(text))
    }
}

/// Tool to store an approved translation
pub struct AddTranslationMemoryEntryTool {
    toolkit: Arc<NativToolkit>,
}

impl AddTranslationMemoryEntryTool {
    pub fn new(toolkit: Arc<NativToolkit>) -> Self {
        AddTranslationMemoryEntryTool { toolkit }
    }
}

#[async_trait]
impl Tool for AddTranslationMemoryEntryTool {
    fn name(&self) -> &str {
        "add_translation_memory_entry"
    }

    fn description(&self) -> &str {
        "Store an approved translation in the translation memory for reuse."
    }

    fn parameters_schema(&self) -> Value {
        schema_of::<AddEntryArgs>()
    }

    async fn execute(&self, args: Value) -> Result<ToolResult> {
        let args: AddEntryArgs = parse_arguments(&args)?;
        let text = self.toolkit.add_translation_memory_entry(args.into()).await?;
        Ok(ToolResult::success(text))
    }
}

pub struct GetLanguagesTool {
    toolkit: Arc<NativToolkit>,
}

impl GetLanguagesTool {
    pub fn new(toolkit: Arc<NativToolkit>) -> Self {
        GetLanguagesTool { toolkit }
    }
}

#[async_trait]
impl Tool for GetLanguagesTool {
    fn name(&self) -> &str {
        "get_languages"
    }

    fn description(&self) -> &str {
        "List all target languages configured in the Nativ workspace."
    }

    fn parameters_schema(&self) -> Value {
        schema_of::<NoArgs>()
    }

    async fn execute(&self, _args: Value) -> Result<ToolResult> {
        Ok(ToolResult::success(self.toolkit.get_languages().await?))
    }
}

pub struct GetStyleGuidesTool {
    toolkit: Arc<NativToolkit>,
}

impl GetStyleGuidesTool {
    pub fn new(toolkit: Arc<NativToolkit>) -> Self {
        GetStyleGuidesTool { toolkit }
    }
}

#[async_trait]
impl Tool for GetStyleGuidesTool {
    fn name(&self) -> &str {
        "get_style_guides"
    }

    fn description(&self) -> &str {
        "Get all style guides configured in the workspace."
    }

    fn parameters_schema(&self) -> Value {
        schema_of::<NoArgs>()
    }

    async fn execute(&self, _args: Value) -> Result<ToolResult> {
        Ok(ToolResult::success(self.toolkit.get_style_guides().await?))
    }
}

pub struct GetBrandVoiceTool {
    toolkit: Arc<NativToolkit>,
}

impl GetBrandVoiceTool {
    pub fn new(toolkit: Arc<NativToolkit>) -> Self {
        GetBrandVoiceTool { toolkit }
    }
}

#[async_trait]
impl Tool for GetBrandVoiceTool {
    fn name(&self) -> &str {
        "get_brand_voice"
    }

    fn description(&self) -> &str {
        "Get the brand voice prompt that shapes all translations."
    }

    fn parameters_schema(&self) -> Value {
        schema_of::<NoArgs>()
    }

    async fn execute(&self, _args: Value) -> Result<ToolResult> {
        Ok(ToolResult::success(self.toolkit.get_brand_voice().await?))
    }
}

pub struct GetTranslationMemoryStatsTool {
    toolkit: Arc<NativToolkit>,
}

impl GetTranslationMemoryStatsTool {
    pub fn new(toolkit: Arc<NativToolkit>) -> Self {
        GetTranslationMemoryStatsTool { toolkit }
    }
}

#[async_trait]
impl Tool for GetTranslationMemoryStatsTool {
    fn name(&self) -> &str {
        "get_translation_memory_stats"
    }

    fn description(&self) -> &str {
        "Get translation memory statistics: total entries, enabled/disabled, breakdown by source."
    }

    fn parameters_schema(&self) -> Value {
        schema_of::<NoArgs>()
    }

    async fn execute(&self, _args: Value) -> Result<ToolResult> {
        Ok(ToolResult::success(
            self.toolkit.get_translation_memory_stats().await?,
        ))
    }
}
