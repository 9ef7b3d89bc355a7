//! HTTP connector for the Nativ REST API

use async_trait::async_trait;
use reqwest::{header, Client, RequestBuilder};
use secrecy::ExposeSecret;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use tokio::sync::RwLock;
use tracing::{debug, warn};
use url::Url;

use super::types::*;
use super::{Connector, NativApi, NativSession};
use crate::config::{NativConfig, ResolvedConfig};
use crate::error::{Error, Result};

/// Opens `HttpSession`s, one `reqwest::Client` per session
#[derive(Debug, Clone, Copy, Default)]
pub struct HttpConnector;

impl HttpConnector {
    /// Open a session, filling unset config fields from `lookup`
    pub fn open_with<F>(&self, config: &NativConfig, lookup: F) -> Result<HttpSession>
    where
        F: Fn(&str) -> Option<String>,
    {
        HttpSession::open(config.resolve_with(lookup)?)
    }
}

#[async_trait]
impl Connector for HttpConnector {
    async fn connect(&self, config: &NativConfig) -> Result<Box<dyn NativSession>> {
        let session = self.open_with(config, |key| std::env::var(key).ok())?;
        Ok(Box::new(session))
    }
}

/// A live connection to the Nativ API
pub struct HttpSession {
    /// `None` once closed
    client: RwLock<Option<Client>>,
    base_url: Url,
}

#[derive(Deserialize)]
struct TranslationsResponse {
    translations: Vec<Translation>,
}

#[derive(Deserialize)]
struct MatchesResponse {
    matches: Vec<TmSearchMatch>,
}

#[derive(Deserialize)]
struct LanguagesResponse {
    languages: Vec<Language>,
}

#[derive(Deserialize)]
struct StyleGuidesResponse {
    style_guides: Vec<StyleGuide>,
}

impl HttpSession {
    /// Build the HTTP client for a resolved configuration
    pub fn open(config: ResolvedConfig) -> Result<Self> {
        let mut headers = header::HeaderMap::new();
        headers.insert(
            header::AUTHORIZATION,
            header::HeaderValue::from_str(&format!("Bearer {}", config.api_key.expose_secret()))
                .map_err(|e| Error::Config(format!("Invalid API key format: {}", e)))?,
        );
        headers.insert(
            header::USER_AGENT,
            header::HeaderValue::from_static(concat!("nativ-tools/", env!("CARGO_PKG_VERSION"))),
        );

        let client = Client::builder()
            .default_headers(headers)
            .timeout(config.timeout)
            .build()?;

        // `Url::join` drops the last path segment unless the base ends in '/'
        let mut base = config.base_url.trim_end_matches('/').to_string();
        base.push('/');
        let base_url = Url::parse(&base)?;

        debug!("Opened Nativ session: base_url={}", base_url);

        Ok(HttpSession {
            client: RwLock::new(Some(client)),
            base_url,
        })
    }

    async fn client(&self) -> Result<Client> {
        self.client
            .read()
            .await
            .clone()
            .ok_or_else(|| Error::Internal("Nativ session is already closed".to_string()))
    }

    async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let url = self.base_url.join(path)?;
        debug!("GET {}", url);
        let request = self.client().await?.get(url);
        self.execute(request).await
    }

    async fn post<B, T>(&self, path: &str, body: &B) -> Result<T>
    where
        B: Serialize + ?Sized + Sync,
        T: DeserializeOwned,
    {
        let url = self.base_url.join(path)?;
        debug!("POST {}", url);
        let request = self.client().await?.post(url).json(body);
        self.execute(request).await
    }

    async fn execute<T: DeserializeOwned>(&self, request: RequestBuilder) -> Result<T> {
        let response = request.send().await?;
        let status = response.status();

        if status.is_success() {
            return Ok(response.json::<T>().await?);
        }

        let error_text = response.text().await.unwrap_or_default();
        match status.as_u16() {
            429 => {
                warn!("Nativ rate limit exceeded: {}", error_text);
                Err(Error::RateLimit(error_text))
            }
            401 | 403 => Err(Error::Unauthorized(if error_text.is_empty() {
                "Invalid API key".to_string()
            } else {
                error_text
            })),
            code => Err(Error::Api {
                status: code,
                message: error_text,
            }),
        }
    }
}

#[async_trait]
impl NativApi for HttpSession {
    async fn translate(&self, request: &TranslateRequest) -> Result<Translation> {
        self.post("v1/translate", request).await
    }

    async fn translate_batch(&self, request: &BatchTranslateRequest) -> Result<Vec<Translation>> {
        let body: TranslationsResponse = self.post("v1/translate/batch", request).await?;
        Ok(body.translations)
    }

    async fn search_tm(&self, request: &TmSearchRequest) -> Result<Vec<TmSearchMatch>> {
        let body: MatchesResponse = self.post("v1/tm/search", request).await?;
        Ok(body.matches)
    }

    async fn add_tm_entry(&self, entry: &NewTmEntry) -> Result<TmEntry> {
        self.post("v1/tm/entries", entry).await
    }

    async fn get_languages(&self) -> Result<Vec<Language>> {
        let body: LanguagesResponse = self.get("v1/languages").await?;
        Ok(body.languages)
    }

    async fn get_style_guides(&self) -> Result<Vec<StyleGuide>> {
        let body: StyleGuidesResponse = self.get("v1/style-guides").await?;
        Ok(body.style_guides)
    }

    async fn get_brand_voice(&self) -> Result<BrandVoice> {
        self.get("v1/brand-voice").await
    }

    async fn get_tm_stats(&self) -> Result<TmStats> {
        self.get("v1/tm/stats").await
    }
}

#[async_trait]
impl NativSession for HttpSession {
    async fn close(&self) -> Result<()> {
        if self.client.write().await.take().is_some() {
            debug!("Closed Nativ session: base_url={}", self.base_url);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::time::Duration;
    use wiremock::matchers::{body_partial_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn session_for(server: &MockServer) -> HttpSession {
        HttpSession::open(ResolvedConfig {
            api_key: "nativ_test".into(),
            base_url: server.uri(),
            timeout: Duration::from_secs(5),
        })
        .unwrap()
    }

    #[tokio::test]
    async fn test_translate_request() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/v1/translate"))
            .and(header("authorization", "Bearer nativ_test"))
            .and(body_partial_json(json!({
                "text": "Hello world",
                "target_language": "French",
                "source_language_code": "en",
                "formality": "formal",
                "backtranslate": true
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "translated_text": "Bonjour le monde",
                "backtranslation": "Hello world",
                "metadata": { "word_count": 2, "cost": 1 }
            })))
            .expect(1)
            .mount(&server)
            .await;

        let session = session_for(&server);
        let mut request = TranslateRequest::new("Hello world", "French");
        request.formality = Some(Formality::Formal.into());
        request.backtranslate = true;

        let translation = session.translate(&request).await.unwrap();
        assert_eq!(translation.translated_text, "Bonjour le monde");
        assert_eq!(translation.backtranslation.as_deref(), Some("Hello world"));
        assert_eq!(translation.metadata.unwrap().word_count, 2);
    }

    #[tokio::test]
    async fn test_list_endpoints_unwrap_envelopes() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/v1/languages"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "languages": [
                    { "id": 1, "language": "French", "language_code": "fr", "formality": "formal" },
                    { "id": 2, "language": "German", "language_code": "de" }
                ]
            })))
            .mount(&server)
            .await;
        Mock::given(method("POST"))
            .and(path("/v1/tm/search"))
            .and(body_partial_json(json!({ "query": "Hello", "limit": 10 })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "matches": [{
                    "tm_id": "tm_1", "score": 95.0, "match_type": "fuzzy",
                    "source_text": "Hello", "target_text": "Bonjour"
                }]
            })))
            .mount(&server)
            .await;

        let session = session_for(&server);

        let languages = session.get_languages().await.unwrap();
        assert_eq!(languages.len(), 2);
        assert_eq!(languages[1].formality, None);

        let matches = session.search_tm(&TmSearchRequest::new("Hello")).await.unwrap();
        assert_eq!(matches[0].target_text, "Bonjour");
    }

    #[tokio::test]
    async fn test_base_url_with_path_prefix() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/v1/brand-voice"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "exists": true, "prompt": "Be concise."
            })))
            .expect(1)
            .mount(&server)
            .await;

        let session = HttpSession::open(ResolvedConfig {
            api_key: "nativ_test".into(),
            base_url: format!("{}/api", server.uri()),
            timeout: Duration::from_secs(5),
        })
        .unwrap();

        let voice = session.get_brand_voice().await.unwrap();
        assert!(voice.exists);
    }

    #[tokio::test]
    async fn test_status_mapping() {
        let server = MockServer::start().await;
        Mock::given(path("/v1/tm/stats"))
            .respond_with(ResponseTemplate::new(401))
            .mount(&server)
            .await;
        Mock::given(path("/v1/style-guides"))
            .respond_with(ResponseTemplate::new(429).set_body_string("slow down"))
            .mount(&server)
            .await;
        Mock::given(path("/v1/tm/entries"))
            .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
            .mount(&server)
            .await;

        let session = session_for(&server);

        let err = session.get_tm_stats().await.unwrap_err();
        assert!(matches!(err, Error::Unauthorized(_)));

        let err = session.get_style_guides().await.unwrap_err();
        assert!(matches!(err, Error::RateLimit(ref m) if m == "slow down"));

        let entry = NewTmEntry {
            source_text: "Hello".into(),
            target_text: "Bonjour".into(),
            source_language_code: "en".into(),
            target_language_code: "fr".into(),
            name: None,
        };
        let err = session.add_tm_entry(&entry).await.unwrap_err();
        assert!(matches!(err, Error::Api { status: 500, ref message } if message == "boom"));
    }

    #[tokio::test]
    async fn test_closed_session_rejects_calls() {
        let server = MockServer::start().await;
        let session = session_for(&server);

        session.close().await.unwrap();
        session.close().await.unwrap();

        let err = session.get_languages().await.unwrap_err();
        assert!(matches!(err, Error::Internal(_)));
    }

    #[test]
    fn test_connector_requires_key() {
        let config = NativConfig::new(None, Some("http://127.0.0.1:1".into()));

        let err = HttpConnector.open_with(&config, |_| None).err().unwrap();
        assert!(matches!(err, Error::Config(ref m) if m.contains("NATIV_API_KEY")));

        let session = HttpConnector
            .open_with(&config, |key| {
                (key == crate::config::API_KEY_ENV).then(|| "nativ_env".to_string())
            })
            .unwrap();
        assert_eq!(session.base_url.as_str(), "http://127.0.0.1:1/");
    }

    #[tokio::test]
    async fn test_connector_uses_explicit_key() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/v1/brand-voice"))
            .and(header("authorization", "Bearer nativ_explicit"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "exists": false })))
            .expect(1)
            .mount(&server)
            .await;

        let config = NativConfig::new(Some("nativ_explicit".into()), Some(server.uri()));
        let session = HttpConnector.connect(&config).await.unwrap();
        assert!(!session.get_brand_voice().await.unwrap().exists);
        session.close().await.unwrap();
    }
}
