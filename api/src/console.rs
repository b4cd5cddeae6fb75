//! Admin HTTP console: send arbitrary requests, keep a history of answers.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::clock::{Clock, SystemClock};
use crate::error::ConsoleError;
use crate::transport::{ApiRequest, HttpMethod, Transport};

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ConsoleRecord {
    pub timestamp: DateTime<Utc>,
    pub method: HttpMethod,
    pub url: String,
    pub status: u16,
    pub duration_ms: i64,
    pub response: serde_json::Value,
}

impl ConsoleRecord {
    pub fn status_class(&self) -> StatusClass {
        StatusClass::of(self.status)
    }

    pub fn pretty_response(&self) -> String {
        serde_json::to_string_pretty(&self.response).unwrap_or_else(|_| self.response.to_string())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StatusClass {
    Success,
    Redirect,
    ClientError,
    ServerError,
}

impl StatusClass {
    pub fn of(status: u16) -> Self {
        match status {
            200..=299 => Self::Success,
            300..=399 => Self::Redirect,
            400..=499 => Self::ClientError,
            _ => Self::ServerError,
        }
    }

    pub fn color(self) -> &'static str {
        match self {
            Self::Success => "green",
            Self::Redirect => "blue",
            Self::ClientError => "orange",
            Self::ServerError => "red",
        }
    }
}

/// Checks a request body before anything is sent. Blank bodies are allowed.
pub fn validate_body(body: Option<&str>) -> Result<Option<serde_json::Value>, ConsoleError> {
    match body.map(str::trim) {
        None | Some("") => Ok(None),
        Some(text) => serde_json::from_str(text)
            .map(Some)
            .map_err(ConsoleError::InvalidBody),
    }
}

/// Sends one console request and records the outcome. Failures that reach
/// the server boundary still produce a record, with status 500 when no
/// response came back.
pub async fn execute<T: Transport, C: Clock>(
    transport: &T,
    clock: &C,
    method: HttpMethod,
    url: &str,
    body: Option<&str>,
) -> Result<ConsoleRecord, ConsoleError> {
    let url = url.trim();
    if url.is_empty() {
        return Err(ConsoleError::MissingUrl);
    }
    let body = validate_body(body)?.filter(|_| method.carries_body());

    let started = clock.now();
    let outcome = transport.send(ApiRequest::new(method, url, body)).await;
    let duration_ms = (clock.now() - started).num_milliseconds();

    let (status, response) = match outcome {
        Ok(response) => (response.status, response.json_value()),
        Err(err) => {
            tracing::warn!(%method, url, error = %err, "console request failed");
            (500, serde_json::Value::String(err.to_string()))
        }
    };

    Ok(ConsoleRecord {
        timestamp: started,
        method,
        url: url.to_string(),
        status,
        duration_ms,
        response,
    })
}

/// Newest-first history with a selected entry.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ConsoleHistory {
    records: Vec<ConsoleRecord>,
    selected: Option<usize>,
}

impl ConsoleHistory {
    /// Adds a record at the front and selects it.
    pub fn push(&mut self, record: ConsoleRecord) {
        self.records.insert(0, record);
        self.selected = Some(0);
    }

    pub fn records(&self) -> &[ConsoleRecord] {
        &self.records
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn select(&mut self, index: usize) {
        if index < self.records.len() {
            self.selected = Some(index);
        }
    }

    pub fn selected_index(&self) -> Option<usize> {
        self.selected
    }

    pub fn selected(&self) -> Option<&ConsoleRecord> {
        self.selected.and_then(|i| self.records.get(i))
    }

    /// Text put on the clipboard by "copy response".
    pub fn clipboard_text(&self) -> String {
        self.selected()
            .map(ConsoleRecord::pretty_response)
            .unwrap_or_default()
    }

    pub fn clear(&mut self) {
        self.records.clear();
        self.selected = None;
    }
}

/// Console bound to a transport, used by the command line client.
pub struct ApiConsole<T, C = SystemClock> {
    transport: T,
    clock: C,
    history: ConsoleHistory,
}

impl<T: Transport> ApiConsole<T> {
    pub fn new(transport: T) -> Self {
        Self::with_clock(transport, SystemClock)
    }
}

impl<T: Transport, C: Clock> ApiConsole<T, C> {
    pub fn with_clock(transport: T, clock: C) -> Self {
        Self {
            transport,
            clock,
            history: ConsoleHistory::default(),
        }
    }

    pub async fn send(
        &mut self,
        method: HttpMethod,
        url: &str,
        body: Option<&str>,
    ) -> Result<&ConsoleRecord, ConsoleError> {
        let record = execute(&self.transport, &self.clock, method, url, body).await?;
        self.history.push(record);
        Ok(&self.history.records()[0])
    }

    pub fn history(&self) -> &ConsoleHistory {
        &self.history
    }
}
