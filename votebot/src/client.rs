use reqwest::header::HOST;
use reqwest::{Client, RequestBuilder, Response, Url};
use shared::{Emoji, ErrorResponse, LeaderboardEntry};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum BotError {
    #[error("Invalid target [{0}]: {1}")]
    InvalidTarget(String, String),
    #[error("Request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("Gateway answered {status}: {message}")]
    Rejected { status: u16, message: String },
}

/// Thin HTTP client over the gateway's `/api` endpoints.
pub struct GatewayClient {
    http: Client,
    base: Url,
    host_override: Option<String>,
}

impl GatewayClient {
    /// `target` is the gateway's `host:port`. When `host_override` is set it
    /// is sent as the `Host` header instead of the target's host.
    pub fn new(target: &str, host_override: Option<String>) -> Result<Self, BotError> {
        let base = parse_target(target)?;
        let host_override = host_override.filter(|h| !h.trim().is_empty());
        Ok(Self { http: Client::new(), base, host_override })
    }

    pub fn base(&self) -> &Url {
        &self.base
    }

    pub async fn shortcodes(&self) -> Result<Vec<String>, BotError> {
        let response = self.get("api/list")?.send().await?;
        let emoji: Vec<Emoji> = check(response).await?.json().await?;
        Ok(emoji.into_iter().map(|e| e.shortcode).collect())
    }

    pub async fn vote(&self, shortcode: &str) -> Result<(), BotError> {
        let response = self.get("api/vote")?
            .query(&[("choice", shortcode)])
            .send()
            .await?;
        check(response).await?;
        Ok(())
    }

    pub async fn leaderboard(&self) -> Result<Vec<LeaderboardEntry>, BotError> {
        let response = self.get("api/leaderboard")?.send().await?;
        Ok(check(response).await?.json().await?)
    }

    fn get(&self, path: &str) -> Result<RequestBuilder, BotError> {
        let request = self.http.get(self.endpoint(path)?);
        Ok(match &self.host_override {
            Some(host) => request.header(HOST, host),
            None => request,
        })
    }

    fn endpoint(&self, path: &str) -> Result<Url, BotError> {
        self.base.join(path)
            .map_err(|e| BotError::InvalidTarget(self.base.to_string(), e.to_string()))
    }
}

pub fn parse_target(target: &str) -> Result<Url, BotError> {
    let invalid = |reason: &str| BotError::InvalidTarget(target.to_string(), reason.to_string());
    if target.trim().is_empty() {
        return Err(invalid("empty target"));
    }
    let url = Url::parse(&format!("http://{}/", target)).map_err(|e| invalid(&e.to_string()))?;
    if url.host_str().is_none() || url.path() != "/" || url.query().is_some() {
        return Err(invalid("expected host:port"));
    }
    Ok(url)
}

async fn check(response: Response) -> Result<Response, BotError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let message = match response.json::<ErrorResponse>().await {
        Ok(body) => body.error,
        Err(_) => status.canonical_reason().unwrap_or("unknown error").to_string(),
    };
    Err(BotError::Rejected { status: status.as_u16(), message })
}
