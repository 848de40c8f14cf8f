//! Cursor-following fetch engine.
//!
//! [`Pages`] walks a paginated endpoint one request at a time and yields the
//! raw objects of every page as a single ordered stream. The next page is only
//! requested once the current one has been consumed. The first failure ends
//! the stream.

use reqwest::blocking::Client;
use serde::Deserialize;
use serde_json::Value;
use std::iter::FusedIterator;
use std::vec;
use tracing::{debug, error, info, instrument};

use super::urls::{QueryParams, with_cursor};
use crate::error::AppError;

/// Response envelope shared by all list endpoints.
#[derive(Debug, Default, Deserialize)]
struct PageEnvelope {
    #[serde(default)]
    data: Option<Vec<Value>>,
    #[serde(default)]
    meta: Option<PageMeta>,
}

#[derive(Debug, Default, Deserialize)]
struct PageMeta {
    #[serde(default)]
    next_cursor: Option<Value>,
}

/// One decoded page: its items and the cursor of the following page.
#[derive(Debug, Default)]
pub struct Page {
    pub items: Vec<Value>,
    pub next_cursor: Option<String>,
}

/// Reads `meta.next_cursor`. The API sends it as a number, but strings are
/// accepted too. Empty strings and zero mean there are no more pages.
fn cursor_from(value: Option<Value>) -> Option<String> {
    match value? {
        Value::String(s) if !s.is_empty() => Some(s),
        Value::Number(n) if n.as_u64() != Some(0) => Some(n.to_string()),
        _ => None,
    }
}

/// Decodes a response body into a [`Page`].
///
/// # Errors
/// * `AppError::ApiMalformedJson` - the body is not JSON at all
/// * `AppError::Unexpected` - valid JSON whose shape is not a page envelope
pub fn decode_page(body: &str, url: &str) -> Result<Page, AppError> {
    let value: Value = serde_json::from_str(body)
        .map_err(|e| AppError::api_malformed_json(e.to_string(), url))?;

    if !value.is_object() {
        return Err(AppError::unexpected(format!(
            "unexpected response structure from {url}: expected a JSON object"
        )));
    }

    let envelope: PageEnvelope = serde_json::from_value(value).map_err(|e| {
        AppError::unexpected(format!("unexpected response structure from {url}: {e}"))
    })?;

    Ok(Page {
        items: envelope.data.unwrap_or_default(),
        next_cursor: cursor_from(envelope.meta.and_then(|m| m.next_cursor)),
    })
}

/// Lazy iterator over every record of a paginated endpoint.
///
/// Created by [`crate::data_fetcher::api::NbaClient::fetch_all`]. Each call
/// creates a fresh iterator starting from the first page.
pub struct Pages<'a> {
    client: &'a Client,
    url: String,
    params: QueryParams,
    cursor: Option<String>,
    buffer: vec::IntoIter<Value>,
    pages_fetched: usize,
    done: bool,
}

impl<'a> Pages<'a> {
    pub fn new(client: &'a Client, url: String, params: QueryParams) -> Self {
        Self {
            client,
            url,
            params,
            cursor: None,
            buffer: Vec::new().into_iter(),
            pages_fetched: 0,
            done: false,
        }
    }

    /// Number of HTTP requests issued so far.
    pub fn pages_fetched(&self) -> usize {
        self.pages_fetched
    }

    #[instrument(skip(self), fields(url = %self.url, cursor = ?self.cursor))]
    fn fetch_page(&self) -> Result<Page, AppError> {
        let params = with_cursor(&self.params, self.cursor.as_deref());
        info!("Fetching page {} from {}", self.pages_fetched + 1, self.url);

        let response = self
            .client
            .get(&self.url)
            .query(&params)
            .send()
            .map_err(|e| {
                error!("Request failed for URL {}: {}", self.url, e);
                AppError::from_transport(e, self.url.as_str())
            })?;

        let status = response.status();
        debug!("Response status: {status}");

        if !status.is_success() {
            let status_code = status.as_u16();
            let reason = status.canonical_reason().unwrap_or("Unknown error");
            error!("HTTP {} - {} (URL: {})", status_code, reason, self.url);
            return Err(AppError::from_status(status_code, reason, self.url.as_str()));
        }

        let body = response
            .text()
            .map_err(|e| AppError::from_transport(e, self.url.as_str()))?;
        debug!("Response length: {} bytes", body.len());

        let page = decode_page(&body, &self.url)?;
        debug!(
            "Decoded {} items, next cursor: {:?}",
            page.items.len(),
            page.next_cursor
        );
        Ok(page)
    }
}

impl Iterator for Pages<'_> {
    type Item = Result<Value, AppError>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(item) = self.buffer.next() {
                return Some(Ok(item));
            }
            if self.done {
                return None;
            }

            let result = self.fetch_page();
            self.pages_fetched += 1;

            match result {
                Ok(page) => {
                    self.buffer = page.items.into_iter();
                    self.done = page.next_cursor.is_none();
                    self.cursor = page.next_cursor;
                }
                Err(e) => {
                    self.done = true;
                    return Some(Err(e));
                }
            }
        }
    }
}

impl FusedIterator for Pages<'_> {}
