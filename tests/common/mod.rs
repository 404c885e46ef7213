// tests/common/mod.rs
//
// In-memory Transport: canned replies keyed by (url, action), every call recorded.
//
#![allow(dead_code)]

use std::{cell::RefCell, collections::HashMap, fs, path::Path};

use serde_json::Value;
use xtream_export::{core::Transport, error::TransportError};

#[derive(Clone, Debug)]
pub struct Call {
    pub url: String,
    pub query: Vec<(String, String)>,
}

impl Call {
    pub fn param(&self, key: &str) -> Option<&str> {
        self.query.iter().find(|(k, _)| k == key).map(|(_, v)| v.as_str())
    }

    pub fn keys(&self) -> Vec<&str> {
        self.query.iter().map(|(k, _)| k.as_str()).collect()
    }
}

enum Reply {
    Body(String),
    Status(u16),
}

#[derive(Default)]
pub struct FakeTransport {
    routes: HashMap<(String, String), Reply>,
    calls: RefCell<Vec<Call>>,
}

impl FakeTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn json(self, base: &str, action: &str, body: Value) -> Self {
        self.raw(base, action, &body.to_string())
    }

    pub fn raw(mut self, base: &str, action: &str, body: &str) -> Self {
        self.routes
            .insert((api_url(base), action.to_string()), Reply::Body(body.to_string()));
        self
    }

    pub fn status(mut self, base: &str, action: &str, code: u16) -> Self {
        self.routes.insert((api_url(base), action.to_string()), Reply::Status(code));
        self
    }

    pub fn playlist(mut self, base: &str, body: &str) -> Self {
        self.routes.insert(
            (format!("{base}/playlist.php"), String::new()),
            Reply::Body(body.to_string()),
        );
        self
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.borrow().clone()
    }
}

fn api_url(base: &str) -> String {
    format!("{base}/player_api.php")
}

impl Transport for FakeTransport {
    fn get(&self, url: &str, query: &[(&str, String)]) -> Result<String, TransportError> {
        let call = Call {
            url: url.to_string(),
            query: query.iter().map(|(k, v)| (k.to_string(), v.clone())).collect(),
        };
        let action = call.param("action").unwrap_or_default().to_string();
        self.calls.borrow_mut().push(call);

        match self.routes.get(&(url.to_string(), action)) {
            Some(Reply::Body(b)) => Ok(b.clone()),
            Some(Reply::Status(code)) => Err(TransportError::Status {
                status: *code,
                url: url.to_string(),
            }),
            None => Err(TransportError::Status {
                status: 404,
                url: url.to_string(),
            }),
        }
    }
}

/// CSV lines of a written file (CRLF-split, trailing empty dropped).
pub fn read_lines(path: &Path) -> Vec<String> {
    let text = fs::read_to_string(path).unwrap();
    let mut lines: Vec<String> = text.split("\r\n").map(str::to_string).collect();
    if lines.last().is_some_and(|l| l.is_empty()) {
        lines.pop();
    }
    lines
}

/// File names in `dir`, sorted.
pub fn file_names(dir: &Path) -> Vec<String> {
    let mut names: Vec<String> = fs::read_dir(dir)
        .unwrap()
        .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    names.sort();
    names
}
