use charchat_common::EnvVars;
use charchat_engine::{Generator, GeneratorError};
use serde::{Deserialize, Serialize};

use crate::env::GeminiEnv;

/// Client for the Gemini `generateContent` endpoint. The key travels as a
/// query parameter, not a header.
#[derive(Clone)]
pub struct GeminiClient {
    http: reqwest::Client,
    api_url: String,
    api_key: String,
}

#[derive(Debug, Serialize)]
struct GenerateRequest {
    contents: Vec<Content>,
}

#[derive(Debug, Serialize, Deserialize)]
struct Content {
    parts: Vec<Part>,
}

#[derive(Debug, Serialize, Deserialize)]
struct Part {
    text: String,
}

#[derive(Debug, Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Content,
}

impl GeminiClient {
    pub fn new() -> Self {
        let env = GeminiEnv::load();
        Self::with_endpoint(env.gemini_api_url, env.gemini_api_key)
    }

    pub fn with_endpoint(api_url: String, api_key: String) -> Self {
        Self {
            http: reqwest::Client::new(),
            api_url,
            api_key,
        }
    }

    async fn generate_content(&self, prompt: &str) -> Result<String, GeneratorError> {
        let payload = GenerateRequest {
            contents: vec![Content {
                parts: vec![Part {
                    text: prompt.to_string(),
                }],
            }],
        };

        let response = self
            .http
            .post(&self.api_url)
            .query(&[("key", self.api_key.as_str())])
            .json(&payload)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;
        if !status.is_success() {
            return Err(GeneratorError::Http {
                status: status.as_u16(),
                body,
            });
        }

        let parsed: GenerateResponse = serde_json::from_str(&body)
            .map_err(|e| GeneratorError::Malformed(e.to_string()))?;

        parsed
            .candidates
            .into_iter()
            .next()
            .and_then(|candidate| candidate.content.parts.into_iter().next())
            .map(|part| part.text)
            .ok_or_else(|| GeneratorError::Malformed("no candidates in response body".to_string()))
    }
}

#[async_trait::async_trait]
impl Generator for GeminiClient {
    async fn generate(&self, prompt: &str) -> Result<String, GeneratorError> {
        self.generate_content(prompt).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn client_for(server: &mockito::ServerGuard) -> GeminiClient {
        GeminiClient::with_endpoint(
            format!("{}/v1beta/models/gemini-2.0-flash:generateContent", server.url()),
            "test-key".to_string(),
        )
    }

    #[tokio::test]
    async fn extracts_first_candidate_text() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/v1beta/models/gemini-2.0-flash:generateContent")
            .match_query(mockito::Matcher::UrlEncoded("key".into(), "test-key".into()))
            .with_status(200)
            .with_body(
                json!({
                    "candidates": [
                        { "content": { "parts": [ { "text": "ahoy matey" } ] } }
                    ]
                })
                .to_string(),
            )
            .create_async()
            .await;

        let text = client_for(&server).generate("hi").await.unwrap();
        assert_eq!(text, "ahoy matey");
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn non_200_is_an_http_error_with_status() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("POST", "/v1beta/models/gemini-2.0-flash:generateContent")
            .match_query(mockito::Matcher::Any)
            .with_status(500)
            .with_body("boom")
            .create_async()
            .await;

        let err = client_for(&server).generate("hi").await.unwrap_err();
        match err {
            GeneratorError::Http { status, body } => {
                assert_eq!(status, 500);
                assert_eq!(body, "boom");
            }
            other => panic!("expected Http error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn empty_candidates_is_malformed() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("POST", "/v1beta/models/gemini-2.0-flash:generateContent")
            .match_query(mockito::Matcher::Any)
            .with_status(200)
            .with_body(json!({ "candidates": [] }).to_string())
            .create_async()
            .await;

        let err = client_for(&server).generate("hi").await.unwrap_err();
        assert!(matches!(err, GeneratorError::Malformed(_)));
    }
}
