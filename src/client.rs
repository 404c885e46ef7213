// src/client.rs
//! Typed wrapper over one provider's catalog API.
//!
//! Every JSON call goes to `{url}/player_api.php` with `username`, `password`
//! and `action` injected. A failed call (transport, status, or a body that
//! does not decode into the expected shape) is reported to the sink and
//! handed back as `Err`. Nothing here panics or aborts the caller.

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::{
    config::{
        Provider,
        consts::{DEFAULT_PLAYLIST_OUTPUT, DEFAULT_PLAYLIST_TYPE, PLAYER_API_PATH, PLAYLIST_PATH},
    },
    content::ContentType,
    core::Transport,
    error::ClientError,
    record::{Category, Record},
    report::Report,
};

pub struct CatalogClient<'a, T: Transport> {
    base_url: String,
    username: String,
    password: String,
    transport: &'a T,
    report: &'a dyn Report,
}

impl<'a, T: Transport> CatalogClient<'a, T> {
    pub fn new(provider: &Provider, transport: &'a T, report: &'a dyn Report) -> Self {
        Self::with_credentials(&provider.url, &provider.username, &provider.password, transport, report)
    }

    pub fn with_credentials(
        base_url: &str,
        username: &str,
        password: &str,
        transport: &'a T,
        report: &'a dyn Report,
    ) -> Self {
        Self {
            base_url: s!(base_url.trim_end_matches('/')),
            username: s!(username),
            password: s!(password),
            transport,
            report,
        }
    }

    /* ---------------- Account ---------------- */

    /// `user_info` + `server_info` block, as sent.
    pub fn get_user_info(&self) -> Result<Value, ClientError> {
        self.call("get_user_info", Vec::new())
    }

    /* ---------------- Listings ---------------- */

    pub fn get_live_streams(&self) -> Result<Vec<Record>, ClientError> {
        self.streams(&ContentType::Live)
    }

    pub fn get_vod_streams(&self) -> Result<Vec<Record>, ClientError> {
        self.streams(&ContentType::Vod)
    }

    pub fn get_series(&self) -> Result<Vec<Record>, ClientError> {
        self.streams(&ContentType::Series)
    }

    pub fn get_live_categories(&self) -> Result<Vec<Category>, ClientError> {
        self.categories(&ContentType::Live)
    }

    pub fn get_vod_categories(&self) -> Result<Vec<Category>, ClientError> {
        self.categories(&ContentType::Vod)
    }

    pub fn get_series_categories(&self) -> Result<Vec<Category>, ClientError> {
        self.categories(&ContentType::Series)
    }

    /// Streams (or series entries) for one content type.
    pub fn streams(&self, content_type: &ContentType) -> Result<Vec<Record>, ClientError> {
        let action = self.action_for(content_type, content_type.streams_action())?;
        self.call(action, Vec::new())
    }

    /// Category list matching [`streams`](Self::streams).
    pub fn categories(&self, content_type: &ContentType) -> Result<Vec<Category>, ClientError> {
        let action = self.action_for(content_type, content_type.categories_action())?;
        self.call(action, Vec::new())
    }

    /* ---------------- Details ---------------- */

    pub fn get_vod_info(&self, vod_id: u64) -> Result<Value, ClientError> {
        self.call("get_vod_info", vec![("vod_id", vod_id.to_string())])
    }

    pub fn get_series_info(&self, series_id: u64) -> Result<Value, ClientError> {
        self.call("get_series_info", vec![("series_id", series_id.to_string())])
    }

    /// Full EPG for a live stream. A limit of 0 is the same as no limit.
    pub fn get_epg(&self, stream_id: u64, limit: Option<u32>) -> Result<Value, ClientError> {
        self.call("get_epg", epg_params(stream_id, limit))
    }

    pub fn get_short_epg(&self, stream_id: u64, limit: Option<u32>) -> Result<Value, ClientError> {
        self.call("get_short_epg", epg_params(stream_id, limit))
    }

    /* ---------------- Playlist ---------------- */

    /// Raw playlist text from `{url}/playlist.php`. Credentials travel in the
    /// query string; this does not go through the action endpoint.
    pub fn get_playlist(&self, playlist_type: &str, output: &str) -> Result<String, ClientError> {
        let url = join!(&self.base_url, "/", PLAYLIST_PATH);
        let query = [
            ("username", self.username.clone()),
            ("password", self.password.clone()),
            ("type", s!(playlist_type)),
            ("output", s!(output)),
        ];

        self.transport.get(&url, &query).map_err(|e| {
            self.report.error(&format!("Error during M3U playlist retrieval: {e}"));
            ClientError::from(e)
        })
    }

    /// `m3u_plus` playlist with `ts` output.
    pub fn get_default_playlist(&self) -> Result<String, ClientError> {
        self.get_playlist(DEFAULT_PLAYLIST_TYPE, DEFAULT_PLAYLIST_OUTPUT)
    }

    /* ---------------- Plumbing ---------------- */

    fn action_for(
        &self,
        content_type: &ContentType,
        action: Option<&'static str>,
    ) -> Result<&'static str, ClientError> {
        action.ok_or_else(|| {
            let err = ClientError::Unsupported(content_type.clone());
            self.report.error(&format!("Error during API request: {err}"));
            err
        })
    }

    fn call<D: DeserializeOwned>(
        &self,
        action: &str,
        mut params: Vec<(&'static str, String)>,
    ) -> Result<D, ClientError> {
        params.push(("username", self.username.clone()));
        params.push(("password", self.password.clone()));
        params.push(("action", s!(action)));

        let url = join!(&self.base_url, "/", PLAYER_API_PATH);
        let result = self
            .transport
            .get(&url, &params)
            .map_err(ClientError::from)
            .and_then(|body| {
                serde_json::from_str(&body).map_err(|source| ClientError::Decode {
                    action: s!(action),
                    source,
                })
            });

        if let Err(e) = &result {
            match e {
                ClientError::Decode { .. } => {
                    self.report.error(&format!("Error parsing JSON response: {e}"))
                }
                _ => self.report.error(&format!("Error during API request ({action}): {e}")),
            }
        }
        result
    }
}

fn epg_params(stream_id: u64, limit: Option<u32>) -> Vec<(&'static str, String)> {
    let mut params = vec![("stream_id", stream_id.to_string())];
    if let Some(n) = limit.filter(|n| *n > 0) {
        params.push(("limit", n.to_string()));
    }
    params
}
