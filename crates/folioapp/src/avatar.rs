//! Fallback profile picture from the public GitHub API.
//!
//! The lookup is best effort: any failure is logged and treated as "no avatar".
//! Its result is only for display and is never written into the document.

use crate::error::{FolioError, Result};
use crate::model::PersonalInfo;
use serde::Deserialize;
use std::time::Duration;
use tracing::{debug, warn};

pub const DEFAULT_AVATAR_API: &str = "https://api.github.com";

#[derive(Debug, Deserialize)]
struct GitHubUser {
    avatar_url: Option<String>,
}

pub struct AvatarLookup {
    client: reqwest::blocking::Client,
    api_base: String,
}

impl AvatarLookup {
    pub fn new(api_base: impl Into<String>) -> Result<Self> {
        let client = reqwest::blocking::Client::builder()
            .user_agent(concat!("folio/", env!("CARGO_PKG_VERSION")))
            .connect_timeout(Duration::from_secs(5))
            .timeout(Duration::from_secs(10))
            .build()
            .map_err(|err| FolioError::Http(err.to_string()))?;
        Ok(Self {
            client,
            api_base: api_base.into(),
        })
    }

    pub fn endpoint(&self, username: &str) -> String {
        format!("{}/users/{}", self.api_base.trim_end_matches('/'), username)
    }

    /// Avatar URL for `username`, or None on any failure.
    pub fn fetch(&self, username: &str) -> Option<String> {
        let username = username.trim();
        if username.is_empty() {
            return None;
        }
        match self.try_fetch(username) {
            Ok(url) => url,
            Err(err) => {
                warn!(%username, error = %err, "avatar lookup failed");
                None
            }
        }
    }

    pub fn try_fetch(&self, username: &str) -> Result<Option<String>> {
        let endpoint = self.endpoint(username);
        debug!(%endpoint, "fetching avatar");

        let response = self
            .client
            .get(&endpoint)
            .header("Accept", "application/vnd.github+json")
            .send()
            .map_err(|err| FolioError::Http(err.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(FolioError::Http(format!("{} returned {}", endpoint, status)));
        }

        let user: GitHubUser = response
            .json()
            .map_err(|err| FolioError::Http(err.to_string()))?;
        Ok(user.avatar_url)
    }
}

/// The image a profile should display: the uploaded one, else the GitHub avatar.
pub fn display_image(info: &PersonalInfo, lookup: Option<&AvatarLookup>) -> Option<String> {
    if let Some(image) = info.profile_image.as_ref().filter(|s| !s.is_empty()) {
        return Some(image.clone());
    }
    lookup.and_then(|lookup| lookup.fetch(&info.github_username))
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::net::TcpListener;

    // Never contacted by these tests.
    const UNUSED_API: &str = "http://127.0.0.1:9";

    /// Base URL of a local port that was just released, so connections are refused.
    fn closed_api() -> String {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let port = listener.local_addr().unwrap().port();
        drop(listener);
        format!("http://127.0.0.1:{}", port)
    }

    #[test]
    fn test_endpoint_trims_trailing_slash() {
        let lookup = AvatarLookup::new("https://api.github.com/").unwrap();
        assert_eq!(
            lookup.endpoint("octocat"),
            "https://api.github.com/users/octocat"
        );
    }

    #[test]
    fn test_empty_username_skips_request() {
        let lookup = AvatarLookup::new(UNUSED_API).unwrap();
        assert_eq!(lookup.fetch("  "), None);
    }

    #[test]
    fn test_unreachable_api_yields_none() {
        let lookup = AvatarLookup::new(closed_api()).unwrap();
        assert_eq!(lookup.fetch("octocat"), None);
        assert!(matches!(lookup.try_fetch("octocat"), Err(FolioError::Http(_))));
    }

    #[test]
    fn test_uploaded_image_wins() {
        let info = PersonalInfo {
            profile_image: Some("data:image/png;base64,AAAA".to_string()),
            github_username: "octocat".to_string(),
            ..Default::default()
        };
        let lookup = AvatarLookup::new(UNUSED_API).unwrap();
        assert_eq!(
            display_image(&info, Some(&lookup)).as_deref(),
            Some("data:image/png;base64,AAAA")
        );
    }

    #[test]
    fn test_no_image_and_no_lookup() {
        let info = PersonalInfo::default();
        assert_eq!(display_image(&info, None), None);
    }
}
