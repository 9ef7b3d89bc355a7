//! Nativ toolkit - the eight localization operations as text-returning calls
//!
//! Every operation opens a session through the configured `Connector`, makes
//! exactly one API call, closes the session and renders the result with the
//! `format` module. Errors from the API are returned untouched.

use std::sync::Arc;

use futures::future::BoxFuture;
use tracing::{debug, info, warn};

use super::format;
use crate::client::{
    BatchTranslateRequest, Connector, HttpConnector, NativSession, NewTmEntry,
    TmSearchRequest, TranslateRequest,
};
use crate::config::NativConfig;
use crate::error::Result;

/// Closes a session once its call is done
///
/// If the caller drops the operation mid-call, `Drop` hands the close to the
/// current tokio runtime so the session is not leaked.
struct SessionGuard {
    session: Arc<dyn NativSession>,
    operation: &'static str,
    released: bool,
}

impl SessionGuard {
    fn new(session: Box<dyn NativSession>, operation: &'static str) -> Self {
        SessionGuard {
            session: Arc::from(session),
            operation,
            released: false,
        }
    }

    async fn release(mut self) {
        self.released = true;
        close_session(self.session.clone(), self.operation).await;
    }
}

impl Drop for SessionGuard {
    fn drop(&mut self) {
        if self.released {
            return;
        }
        let session = self.session.clone();
        let operation = self.operation;
        match tokio::runtime::Handle::try_current() {
            Ok(handle) => {
                debug!("Nativ call {} cancelled, closing session in background", operation);
                handle.spawn(close_session(session, operation));
            }
            Err(_) => warn!(
                "Nativ session for {} dropped outside a runtime and left open",
                operation
            ),
        }
    }
}

/// Close failures are logged and never replace the call's outcome
async fn close_session(session: Arc<dyn NativSession>, operation: &'static str) {
    match session.close().await {
        Ok(()) => debug!("Nativ session closed for {}", operation),
        Err(e) => warn!("Failed to close Nativ session after {}: {}", operation, e),
    }
}

/// Localization tools backed by the Nativ platform
pub struct NativToolkit {
    config: NativConfig,
    connector: Arc<dyn Connector>,
}

impl NativToolkit {
    /// Create a toolkit talking to the Nativ HTTP API
    ///
    /// `api_key` falls back to `NATIV_API_KEY`; `base_url` overrides the endpoint.
    pub fn new(api_key: Option<String>, base_url: Option<String>) -> Self {
        Self::with_config(NativConfig::new(api_key, base_url))
    }

    pub fn with_config(config: NativConfig) -> Self {
        Self::with_connector(config, Arc::new(HttpConnector))
    }

    /// Create a toolkit using a custom connector
    pub fn with_connector(config: NativConfig, connector: Arc<dyn Connector>) -> Self {
        NativToolkit { config, connector }
    }

    pub fn config(&self) -> &NativConfig {
        &self.config
    }

    /// Run `call` against a fresh session, closing it whatever the outcome
    async fn scoped<T, F>(&self, operation: &'static str, call: F) -> Result<T>
    where
        F: for<'s> FnOnce(&'s dyn NativSession) -> BoxFuture<'s, Result<T>>,
    {
        let session = self.connector.connect(&self.config).await?;
        debug!("Nativ session opened for {}", operation);
        let guard = SessionGuard::new(session, operation);

        let outcome = call(&*guard.session).await;

        guard.release().await;
        outcome
    }

    /// Translate text, reporting rationale, back-translation and TM match
    pub async fn translate(&self, request: TranslateRequest) -> Result<String> {
        let result = self
            .scoped("translate", move |api| {
                Box::pin(async move { api.translate(&request).await })
            })
            .await?;
        Ok(format::translation(&result))
    }

    /// Translate several texts, one numbered line per text
    pub async fn translate_batch(&self, request: BatchTranslateRequest) -> Result<String> {
        let results = self
            .scoped("translate_batch", move |api| {
                Box::pin(async move { api.translate_batch(&request).await })
            })
            .await?;
        Ok(format::batch(&results))
    }

    pub async fn search_translation_memory(&self, request: TmSearchRequest) -> Result<String> {
        let matches = self
            .scoped("search_translation_memory", move |api| {
                Box::pin(async move { api.search_tm(&request).await })
            })
            .await?;
        Ok(format::tm_matches(&matches))
    }

    pub async fn add_translation_memory_entry(&self, entry: NewTmEntry) -> Result<String> {
        let created = self
            .scoped("add_translation_memory_entry", move |api| {
                Box::pin(async move { api.add_tm_entry(&entry).await })
            })
            .await?;
        info!(
            "TM entry added: id={}, {} -> {}",
            created.id, created.source_language_code, created.target_language_code
        );
        Ok(format::tm_entry(&created))
    }

    pub async fn get_languages(&self) -> Result<String> {
        let langs = self
            .scoped("get_languages", |api| api.get_languages())
            .await?;
        Ok(format::languages(&langs))
    }

    pub async fn get_style_guides(&self) -> Result<String> {
        let guides = self
            .scoped("get_style_guides", |api| api.get_style_guides())
            .await?;
        Ok(format::style_guides(&guides))
    }

    pub async fn get_brand_voice(&self) -> Result<String> {
        let voice = self
            .scoped("get_brand_voice", |api| api.get_brand_voice())
            .await?;
        Ok(format::brand_voice(&voice))
    }

    pub async fn get_translation_memory_stats(&self) -> Result<String> {
        let stats = self
            .scoped("get_translation_memory_stats", |api| api.get_tm_stats())
            .await?;
        Ok(format::tm_stats(&stats))
    }
}
