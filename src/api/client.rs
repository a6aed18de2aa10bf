//! Snapchat API HTTP client.
//!
//! A deliberately thin, synchronous embodiment of the collaborator
//! interface. Request signing, payload decryption, retries, and rate
//! limiting are out of scope and not performed here.

use reqwest::blocking::{Client, Response};
use reqwest::StatusCode;

use crate::api::types::{LoginResponse, StoriesResponse, UpdatesResponse};
use crate::api::{Friend, SnapchatClient};
use crate::error::{Error, Result};
use crate::media::{SnapItem, StoryItem};

/// Snapchat API base URL.
const API_BASE: &str = "https://app.snapchat.com";

/// User agent of the last client version the legacy endpoints accepted.
const USER_AGENT: &str = "Snapchat/4.1.07 (Nexus 4; Android 4.3; gzip)";

/// Blocking HTTP client holding the session established by `login`.
pub struct Snapchat {
    client: Client,
    username: Option<String>,
    auth_token: Option<String>,
}

impl Snapchat {
    /// Create a new, not yet authenticated client.
    pub fn new() -> Result<Self> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .cookie_store(true)
            .build()?;

        Ok(Self {
            client,
            username: None,
            auth_token: None,
        })
    }

    /// Session form parameters plus `extra`, or an error before login.
    fn session_form(&self, extra: &[(&str, &str)]) -> Result<Vec<(String, String)>> {
        let (Some(username), Some(token)) = (&self.username, &self.auth_token) else {
            return Err(Error::Api("not logged in".to_string()));
        };

        let mut form = vec![
            ("username".to_string(), username.clone()),
            ("auth_token".to_string(), token.clone()),
        ];
        for (key, value) in extra {
            form.push((key.to_string(), value.to_string()));
        }
        Ok(form)
    }

    fn post(&self, path: &str, form: &[(String, String)]) -> Result<Response> {
        let url = format!("{}{}", API_BASE, path);
        tracing::debug!("POST {}", url);

        let response = self.client.post(&url).form(form).send()?;
        tracing::debug!("Response status: {}", response.status());

        Ok(response)
    }

    fn post_json<T: serde::de::DeserializeOwned>(
        &self,
        path: &str,
        form: &[(String, String)],
    ) -> Result<T> {
        let response = self.post(path, form)?;
        let status = response.status();
        if !status.is_success() {
            return Err(Error::Api(format!("{} returned HTTP {}", path, status)));
        }

        let body = response.bytes()?;
        Ok(serde_json::from_slice(&body)?)
    }

    /// Fetch raw payload bytes; gone or empty content maps to `None`.
    fn fetch_blob(&self, path: &str, form: &[(String, String)]) -> Result<Option<Vec<u8>>> {
        let response = self.post(path, form)?;
        let status = response.status();

        if status == StatusCode::NOT_FOUND || status == StatusCode::GONE {
            return Ok(None);
        }
        if !status.is_success() {
            return Err(Error::Api(format!("{} returned HTTP {}", path, status)));
        }

        let body = response.bytes()?;
        if body.is_empty() {
            return Ok(None);
        }
        Ok(Some(body.to_vec()))
    }
}

impl SnapchatClient for Snapchat {
    fn login(&mut self, username: &str, password: &str) -> Result<LoginResponse> {
        let form = vec![
            ("username".to_string(), username.to_string()),
            ("password".to_string(), password.to_string()),
        ];
        let login: LoginResponse = self.post_json("/bq/login", &form)?;

        if login.logged {
            self.username = Some(username.to_string());
            self.auth_token = login.auth_token.clone();
        }
        Ok(login)
    }

    fn get_snaps(&self) -> Result<Vec<SnapItem>> {
        let form = self.session_form(&[])?;
        let updates: UpdatesResponse = self.post_json("/bq/updates", &form)?;
        Ok(updates.snaps)
    }

    fn get_friend_stories(&self) -> Result<Vec<StoryItem>> {
        let form = self.session_form(&[])?;
        let stories: StoriesResponse = self.post_json("/bq/stories", &form)?;
        Ok(stories.stories)
    }

    fn get_friends(&self) -> Result<Vec<Friend>> {
        let form = self.session_form(&[])?;
        let updates: UpdatesResponse = self.post_json("/bq/updates", &form)?;
        Ok(updates.friends)
    }

    fn get_blob(&self, id: &str) -> Result<Option<Vec<u8>>> {
        let form = self.session_form(&[("id", id)])?;
        self.fetch_blob("/bq/blob", &form)
    }

    fn get_story_blob(&self, media_id: &str, key: &str, iv: &str) -> Result<Option<Vec<u8>>> {
        let form = self.session_form(&[("story_id", media_id), ("key", key), ("iv", iv)])?;
        self.fetch_blob("/bq/story_blob", &form)
    }
}
