use std::time::Duration;

use reqwest::{Client, StatusCode, Url};

use crate::error::UpdaterError;
use crate::pinned::{self, FALLBACK_PINNED};

const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

#[derive(Debug, Clone)]
pub struct Github {
    base: Url,
    client: Client,
}

impl Github {
    pub fn new(base: Url, proxy: Option<Url>, timeout: Duration) -> Result<Self, UpdaterError> {
        let mut builder = Client::builder().user_agent(USER_AGENT).timeout(timeout);
        if let Some(proxy) = proxy {
            log::debug!("using proxy: {proxy}");
            let proxy = reqwest::Proxy::all(proxy).map_err(|_| UpdaterError::ProxyBuildError)?;
            builder = builder.proxy(proxy);
        }
        let client = builder.build().map_err(|_| UpdaterError::ClientBuildError)?;
        Ok(Self { base, client })
    }

    /// `<base>/<user>`, with `user` percent-encoded as a single path segment.
    pub fn profile_url(&self, user: &str) -> Result<Url, UpdaterError> {
        let mut url = self.base.clone();
        url.path_segments_mut()
            .map_err(|_| UpdaterError::InvalidProfileUrl(user.to_owned()))?
            .pop_if_empty()
            .push(user);
        Ok(url)
    }

    /// Profile page HTML for `user`. Anything but 200 is an error.
    pub async fn fetch_profile(&self, user: &str) -> Result<String, UpdaterError> {
        let url = self.profile_url(user)?;
        log::debug!("profile_url {url}");
        let response = self
            .client
            .get(url.clone())
            .send()
            .await
            .map_err(|e| UpdaterError::UnableToConnect(format!("{url} ({e})")))?;

        let status = response.status();
        if status != StatusCode::OK {
            return Err(UpdaterError::BadStatus(status));
        }
        response.text().await.map_err(|_| UpdaterError::UnableToGetText)
    }

    /// Markdown list of `user`'s pinned repositories.
    ///
    /// Never fails: any error is logged and the fallback message returned.
    pub async fn pinned_repos(&self, user: &str, limit: usize) -> String {
        let html = match self.fetch_profile(user).await {
            Ok(html) => html,
            Err(e) => {
                log::warn!("could not fetch pinned repos for {user}: {e}");
                return FALLBACK_PINNED.to_owned();
            }
        };
        match pinned::extract_pinned(&html, &self.base, limit) {
            Ok(repos) => {
                if repos.is_empty() {
                    log::warn!("no pinned repos found on the profile of {user}");
                }
                pinned::render_list(&repos)
            }
            Err(e) => {
                log::warn!("error loading pinned repos from html: {e}");
                FALLBACK_PINNED.to_owned()
            }
        }
    }
}
