use async_trait::async_trait;
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::application::ports::{MorphAnalyzer, MorphologyError};
use crate::domain::{GrammaticalCase, GrammaticalNumber, MorphParse};

/// Client for a morphology sidecar exposing `POST /parse` and
/// `POST /inflect` (a pymorphy-style analyzer behind a small HTTP wrapper).
pub struct HttpMorphAnalyzer {
    client: Client,
    base_url: String,
}

#[derive(Serialize)]
struct ParseRequest<'a> {
    word: &'a str,
}

#[derive(Deserialize)]
struct ParseResponse {
    #[serde(default)]
    parses: Vec<ParseData>,
}

#[derive(Deserialize)]
struct ParseData {
    word: String,
    normal_form: String,
    tag: String,
    #[serde(default)]
    score: f32,
}

#[derive(Serialize)]
struct InflectRequest<'a> {
    word: &'a str,
    normal_form: &'a str,
    tag: &'a str,
    grammemes: [&'static str; 2],
}

#[derive(Deserialize)]
struct InflectResponse {
    word: Option<String>,
}

impl HttpMorphAnalyzer {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    async fn post<Req: Serialize + Sync, Resp: DeserializeOwned>(
        &self,
        endpoint: &str,
        body: &Req,
    ) -> Result<Resp, MorphologyError> {
        let response = self
            .client
            .post(format!("{}/{}", self.base_url, endpoint))
            .json(body)
            .send()
            .await
            .map_err(|e| MorphologyError::RequestFailed(e.to_string()))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(MorphologyError::RequestFailed(format!(
                "HTTP {}: {}",
                status, body
            )));
        }

        response
            .json()
            .await
            .map_err(|e| MorphologyError::InvalidResponse(e.to_string()))
    }
}

#[async_trait]
impl MorphAnalyzer for HttpMorphAnalyzer {
    async fn parse(&self, word: &str) -> Result<Vec<MorphParse>, MorphologyError> {
        let response: ParseResponse = self.post("parse", &ParseRequest { word }).await?;

        Ok(response
            .parses
            .into_iter()
            .map(|p| MorphParse::new(p.word, p.normal_form, &p.tag, p.score))
            .collect())
    }

    async fn inflect(
        &self,
        parse: &MorphParse,
        case: GrammaticalCase,
        number: GrammaticalNumber,
    ) -> Result<Option<String>, MorphologyError> {
        if parse.tag.has_form(case, number) {
            return Ok(Some(parse.word.clone()));
        }

        let request = InflectRequest {
            word: &parse.word,
            normal_form: &parse.normal_form,
            tag: parse.tag.as_str(),
            grammemes: [case.as_grammeme(), number.as_grammeme()],
        };
        let response: InflectResponse = self.post("inflect", &request).await?;

        Ok(response.word)
    }
}
