//! In-memory connector for unit tests

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use serde::Serialize;
use serde_json::Value;

use super::types::*;
use super::{Connector, NativApi, NativSession};
use crate::config::NativConfig;
use crate::error::{Error, Result};

/// Canned responses; `None` makes the call fail with `Error::Api { status: 500 }`
#[derive(Debug, Clone, Default)]
pub struct Canned {
    pub translation: Option<Translation>,
    pub batch: Option<Vec<Translation>>,
    pub matches: Option<Vec<TmSearchMatch>>,
    pub entry: Option<TmEntry>,
    pub languages: Option<Vec<Language>>,
    pub style_guides: Option<Vec<StyleGuide>>,
    pub brand_voice: Option<BrandVoice>,
    pub stats: Option<TmStats>,
}

/// What happened to the connector, in order
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    Open,
    Call(&'static str),
    Close,
}

#[derive(Clone, Default)]
pub struct MockConnector {
    canned: Arc<Canned>,
    events: Arc<Mutex<Vec<Event>>>,
    /// Key seen by the last `connect`
    seen_key: Arc<Mutex<Option<String>>>,
    /// Request bodies as they reached the session
    requests: Arc<Mutex<Vec<Value>>>,
    fail_close: bool,
    /// Calls never complete
    hang: bool,
}

impl MockConnector {
    pub fn new(canned: Canned) -> Self {
        MockConnector {
            canned: Arc::new(canned),
            ..Default::default()
        }
    }

    pub fn failing_close(mut self) -> Self {
        self.fail_close = true;
        self
    }

    pub fn hanging(mut self) -> Self {
        self.hang = true;
        self
    }

    pub fn events(&self) -> Vec<Event> {
        self.events.lock().unwrap().clone()
    }

    pub fn calls(&self) -> Vec<&'static str> {
        self.events()
            .into_iter()
            .filter_map(|e| match e {
                Event::Call(name) => Some(name),
                _ => None,
            })
            .collect()
    }

    pub fn seen_key(&self) -> Option<String> {
        self.seen_key.lock().unwrap().clone()
    }

    pub fn requests(&self) -> Vec<Value> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl Connector for MockConnector {
    async fn connect(&self, config: &NativConfig) -> Result<Box<dyn NativSession>> {
        use secrecy::ExposeSecret;

        *self.seen_key.lock().unwrap() = config
            .api_key
            .as_ref()
            .map(|k| k.expose_secret().to_string());
        self.events.lock().unwrap().push(Event::Open);
        Ok(Box::new(MockSession {
            canned: self.canned.clone(),
            events: self.events.clone(),
            requests: self.requests.clone(),
            fail_close: self.fail_close,
            hang: self.hang,
        }))
    }
}

struct MockSession {
    canned: Arc<Canned>,
    events: Arc<Mutex<Vec<Event>>>,
    requests: Arc<Mutex<Vec<Value>>>,
    fail_close: bool,
    hang: bool,
}

impl MockSession {
    fn record<B: Serialize>(&self, body: &B) {
        let body = serde_json::to_value(body).unwrap();
        self.requests.lock().unwrap().push(body);
    }

    async fn answer<T: Clone>(&self, name: &'static str, value: &Option<T>) -> Result<T> {
        self.events.lock().unwrap().push(Event::Call(name));
        if self.hang {
            futures::future::pending::<()>().await;
        }
        value.clone().ok_or_else(|| Error::Api {
            status: 500,
            message: format!("{} failed", name),
        })
    }
}

#[async_trait]
impl NativApi for MockSession {
    async fn translate(&self, request: &TranslateRequest) -> Result<Translation> {
        self.record(request);
        self.answer("translate", &self.canned.translation).await
    }

    async fn translate_batch(&self, request: &BatchTranslateRequest) -> Result<Vec<Translation>> {
        self.record(request);
        self.answer("translate_batch", &self.canned.batch).await
    }

    async fn search_tm(&self, request: &TmSearchRequest) -> Result<Vec<TmSearchMatch>> {
        self.record(request);
        self.answer("search_tm", &self.canned.matches).await
    }

    async fn add_tm_entry(&self, entry: &NewTmEntry) -> Result<TmEntry> {
        self.record(entry);
        self.answer("add_tm_entry", &self.canned.entry).await
    }

    async fn get_languages(&self) -> Result<Vec<Language>> {
        self.answer("get_languages", &self.canned.languages).await
    }

    async fn get_style_guides(&self) -> Result<Vec<StyleGuide>> {
        self.answer("get_style_guides", &self.canned.style_guides).await
    }

    async fn get_brand_voice(&self) -> Result<BrandVoice> {
        self.answer("get_brand_voice", &self.canned.brand_voice).await
    }

    async fn get_tm_stats(&self) -> Result<TmStats> {
        self.answer("get_tm_stats", &self.canned.stats).await
    }
}

#[async_trait]
impl NativSession for MockSession {
    async fn close(&self) -> Result<()> {
        self.events.lock().unwrap().push(Event::Close);
        if self.fail_close {
            return Err(Error::Internal("close failed".to_string()));
        }
        Ok(())
    }
}

pub fn translation() -> Translation {
    Translation {
        translated_text: "Bonjour le monde".to_string(),
        rationale: Some("Standard greeting.".to_string()),
        backtranslation: None,
        tm_match: None,
        metadata: Some(TranslationMetadata { word_count: 2, cost: 1 }),
    }
}

pub fn tm_search_match() -> TmSearchMatch {
    TmSearchMatch {
        tm_id: "tm_1".to_string(),
        score: 95.0,
        match_type: "fuzzy".to_string(),
        source_text: "Hello".to_string(),
        target_text: "Bonjour".to_string(),
        information_source: Some("manual".to_string()),
    }
}

pub fn tm_entry() -> TmEntry {
    TmEntry {
        id: "entry_1".to_string(),
        source_language_code: "en".to_string(),
        source_text: "Hello".to_string(),
        target_language_code: "fr".to_string(),
        target_text: "Bonjour".to_string(),
        information_source: Some("manual".to_string()),
        enabled: Some(true),
        priority: Some(50),
        name: None,
    }
}

pub fn language(name: &str, code: &str, formality: Option<&str>) -> Language {
    Language {
        id: None,
        language: name.to_string(),
        language_code: code.to_string(),
        formality: formality.map(String::from),
    }
}

pub fn style_guide() -> StyleGuide {
    StyleGuide {
        id: "sg_1".to_string(),
        title: "Tone".to_string(),
        content: "Use a warm, friendly tone.".to_string(),
        is_enabled: true,
    }
}

pub fn brand_voice() -> BrandVoice {
    BrandVoice {
        prompt: Some("Be concise and friendly.".to_string()),
        exists: true,
    }
}

pub fn tm_stats() -> TmStats {
    TmStats {
        total: 100,
        enabled: 90,
        disabled: 10,
        by_source: None,
    }
}
