use std::time::Duration;

use reqwest::{Client, Proxy, Url};
use tracing::debug;

use crate::error::{FactError, Result};
use crate::fact::Fact;

pub const FACT_URL: &str = "https://uselessfacts.jsph.pl/random.json?language=en";

#[derive(Clone, Debug, Default)]
pub struct ClientSetting {
    pub proxies: Option<Vec<Url>>,
    /// Whole-request timeout. `None` keeps the client default (no timeout).
    pub timeout: Option<Duration>,
    /// Ignore proxies from the environment.
    pub no_proxy: bool,
    pub user_agent: Option<String>,
}

impl ClientSetting {
    pub fn build(self) -> Result<Client> {
        let mut cb = Client::builder();

        if self.no_proxy {
            cb = cb.no_proxy();
        }

        if let Some(proxies) = self.proxies {
            let (secure, insecure): (Vec<Url>, Vec<Url>) =
                proxies.into_iter().partition(|u| u.scheme() == "https");

            for u in secure {
                cb = cb.proxy(Proxy::https(u)?);
            }

            for u in insecure {
                cb = cb.proxy(Proxy::http(u)?);
            }
        }

        if let Some(timeout) = self.timeout {
            cb = cb.timeout(timeout);
        }

        let agent = self
            .user_agent
            .unwrap_or_else(|| format!("pacer-fact/{}", env!("CARGO_PKG_VERSION")));

        Ok(cb.user_agent(agent).build()?)
    }
}

/// Fetches facts from one JSON endpoint.
pub struct FactClient {
    client: Client,
    url: Url,
}

impl FactClient {
    pub fn new(setting: ClientSetting) -> Result<Self> {
        Self::with_url(setting, FACT_URL)
    }

    pub fn with_url(setting: ClientSetting, url: &str) -> Result<Self> {
        let url = Url::parse(url).map_err(|e| FactError::InvalidUrl(format!("{url}: {e}")))?;
        Ok(Self {
            client: setting.build()?,
            url,
        })
    }

    pub fn url(&self) -> &Url {
        &self.url
    }

    /// One GET, a status check and a JSON decode. No retries.
    pub async fn fetch(&self) -> Result<Fact> {
        debug!(url = %self.url, "requesting fact");

        let response = self.client.get(self.url.clone()).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(FactError::Status(status));
        }

        let body = response.bytes().await?;
        debug!(status = %status, bytes = body.len(), "received fact");

        Ok(serde_json::from_slice(&body)?)
    }

    /// Drives [`fetch`](Self::fetch) to completion on a private runtime.
    ///
    /// Must not be called from inside an async runtime.
    pub fn fetch_blocking(&self) -> Result<Fact> {
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .map_err(FactError::Runtime)?;

        runtime.block_on(self.fetch())
    }
}
