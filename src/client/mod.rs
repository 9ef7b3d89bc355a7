//! Nativ client interface
//!
//! The tools never talk to the Nativ platform directly. They go through a
//! `Connector`, which opens a short-lived `NativSession` for every call. A
//! session exposes the eight remote operations of `NativApi` and is closed
//! once the call has finished.
//!
//! The `http` module provides the production connector backed by `reqwest`.
//! Tests substitute their own connector.

mod http;
#[cfg(test)]
pub(crate) mod mock;
mod types;

use async_trait::async_trait;

use crate::config::NativConfig;
use crate::error::Result;

pub use http::{HttpConnector, HttpSession};
pub use types::{
    BatchTranslateRequest, BrandVoice, Formality, Language, NewTmEntry, StyleGuide, TmEntry,
    TmMatch, TmSearchMatch, TmSearchRequest, TmStats, TranslateRequest, Translation,
    TranslationMetadata,
};
pub(crate) use types::{
    DEFAULT_SOURCE_LANGUAGE, DEFAULT_SOURCE_LANGUAGE_CODE, DEFAULT_TM_SEARCH_LIMIT,
};

/// Remote operations offered by the Nativ platform
#[async_trait]
pub trait NativApi: Send + Sync {
    /// Translate a single text
    async fn translate(&self, request: &TranslateRequest) -> Result<Translation>;

    /// Translate several texts into the same language, results in input order
    async fn translate_batch(&self, request: &BatchTranslateRequest) -> Result<Vec<Translation>>;

    /// Fuzzy-search the translation memory
    async fn search_tm(&self, request: &TmSearchRequest) -> Result<Vec<TmSearchMatch>>;

    /// Store an approved translation
    async fn add_tm_entry(&self, entry: &NewTmEntry) -> Result<TmEntry>;

    async fn get_languages(&self) -> Result<Vec<Language>>;

    async fn get_style_guides(&self) -> Result<Vec<StyleGuide>>;

    async fn get_brand_voice(&self) -> Result<BrandVoice>;

    async fn get_tm_stats(&self) -> Result<TmStats>;
}

/// An open client handle, valid until `close` is called
#[async_trait]
pub trait NativSession: NativApi {
    /// Release the handle
    async fn close(&self) -> Result<()>;
}

/// Opens sessions against the Nativ platform
#[async_trait]
pub trait Connector: Send + Sync {
    async fn connect(&self, config: &NativConfig) -> Result<Box<dyn NativSession>>;
}
