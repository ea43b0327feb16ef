use anyhow::{Context, Result};
use reqwest::blocking::Client;
use reqwest::StatusCode;
use std::thread;
use std::time::Duration;

use super::{EventSource, FetchError};
use crate::models::calendar_event::CalendarEvent;
use crate::models::date_range::DateRange;
use crate::models::filters::EventFilters;
use crate::models::settings::AppConfig;

const EVENTS_PATH: &str = "/calendar/events";

/// Fetches calendar events from the property-management HTTP API.
pub struct HttpEventSource {
    client: Client,
    base_url: String,
    api_token: Option<String>,
    max_response_bytes: usize,
    max_retries: usize,
    retry_delay_ms: u64,
}

impl HttpEventSource {
    pub fn new(config: &AppConfig) -> Result<Self> {
        let base_url = config.api_base_url.trim().trim_end_matches('/').to_string();
        Self::check_scheme(&base_url, config.allow_insecure)?;

        let client = Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()
            .context("Failed to build event fetch HTTP client")?;

        Ok(Self {
            client,
            base_url,
            api_token: config.api_token.clone(),
            max_response_bytes: config.max_response_bytes,
            max_retries: config.max_retries,
            retry_delay_ms: config.retry_delay_ms,
        })
    }

    fn check_scheme(url: &str, allow_insecure: bool) -> Result<(), FetchError> {
        if url.starts_with("https://") || (allow_insecure && url.starts_with("http://")) {
            Ok(())
        } else if url.starts_with("http://") {
            Err(FetchError::InvalidUrl(
                "event API URL must use HTTPS (set allow_insecure for local development)".to_string(),
            ))
        } else {
            Err(FetchError::InvalidUrl(format!(
                "unsupported URL scheme in {}",
                Self::redact_url(url)
            )))
        }
    }

    /// Full request URL for a range and its filters.
    pub fn events_url(&self, range: &DateRange, filters: &EventFilters) -> String {
        Self::build_url(&self.base_url, range, filters)
    }

    fn build_url(base_url: &str, range: &DateRange, filters: &EventFilters) -> String {
        let (start, end) = range.query_bounds();
        let mut url = format!(
            "{}{}?startDate={}&endDate={}",
            base_url, EVENTS_PATH, start, end
        );
        for (key, value) in filters.query_pairs() {
            url.push('&');
            url.push_str(key);
            url.push('=');
            url.push_str(&urlencoding::encode(&value));
        }
        url
    }

    fn fetch_once(&self, url: &str) -> Result<Vec<CalendarEvent>, FetchError> {
        let mut request = self.client.get(url).header("Accept", "application/json");
        if let Some(ref token) = self.api_token {
            request = request.bearer_auth(token);
        }

        let response = request
            .send()
            .map_err(|e| FetchError::Network(e.to_string()))?;

        let status = response.status();
        if status != StatusCode::OK {
            return Err(FetchError::Status(status.as_u16()));
        }

        if let Some(content_length) = response.content_length() {
            if content_length as usize > self.max_response_bytes {
                return Err(FetchError::TooLarge {
                    size: content_length as usize,
                    limit: self.max_response_bytes,
                });
            }
        }

        let bytes = response
            .bytes()
            .map_err(|e| FetchError::Network(e.to_string()))?;

        if bytes.len() > self.max_response_bytes {
            return Err(FetchError::TooLarge {
                size: bytes.len(),
                limit: self.max_response_bytes,
            });
        }

        serde_json::from_slice(&bytes).map_err(|e| FetchError::Decode(e.to_string()))
    }

    /// Drop the query string so property ids and dates stay out of logs.
    fn redact_url(url: &str) -> String {
        match url.find('?') {
            Some(index) => format!("{}?***", &url[..index]),
            None => url.to_string(),
        }
    }
}

impl EventSource for HttpEventSource {
    fn fetch_events(
        &self,
        range: &DateRange,
        filters: &EventFilters,
    ) -> Result<Vec<CalendarEvent>, FetchError> {
        let url = self.events_url(range, filters);
        let redacted = Self::redact_url(&url);

        let mut attempt = 0;
        loop {
            match self.fetch_once(&url) {
                Ok(events) => {
                    log::info!(
                        "Fetched {} calendar events for {} to {}",
                        events.len(),
                        range.start_date,
                        range.end_date
                    );
                    return Ok(events);
                }
                Err(err) if err.is_transient() && attempt < self.max_retries => {
                    attempt += 1;
                    log::warn!(
                        "Event fetch attempt {} failed for {}: {}",
                        attempt,
                        redacted,
                        err
                    );
                    thread::sleep(Duration::from_millis(self.retry_delay_ms));
                }
                Err(err) => {
                    log::error!(
                        "Failed to fetch events from {} after {} attempts: {}",
                        redacted,
                        attempt + 1,
                        err
                    );
                    return Err(err);
                }
            }
        }
    }
}
