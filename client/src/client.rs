//! Stateless request builder and page parser for the Zettai service.
//!
//! # Design
//! `ZettaiClient` holds only a `base_url` and carries no mutable state
//! between calls. `build_get_list` produces an `HttpRequest`; the caller
//! executes the round-trip and hands the `HttpResponse` to `parse_get_list`,
//! which recovers the list from the rendered page. The heading and row
//! patterns are the page's stable contract: the text between `<h2>` and the
//! next tag is the list name, the text between each `<td>` and the next tag
//! is an item description, in page order.

use std::sync::LazyLock;

use regex::Regex;

use crate::error::ApiError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse};
use crate::types::{ListName, ToDoItem, ToDoList};

static LIST_NAME: LazyLock<Regex> =
    LazyLock::new(|| Regex::new("<h2>(.*?)<").expect("valid pattern"));
static ITEM: LazyLock<Regex> = LazyLock::new(|| Regex::new("<td>(.*?)<").expect("valid pattern"));

/// Synchronous, stateless client for the Zettai service.
///
/// Builds `HttpRequest` values and parses `HttpResponse` values without
/// touching the network. The caller is responsible for executing the HTTP
/// round-trip between `build_get_list` and `parse_get_list`.
#[derive(Debug, Clone)]
pub struct ZettaiClient {
    base_url: String,
}

impl ZettaiClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn build_get_list(&self, user: &str, list_name: &str) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Get,
            path: format!("{}/todo/{user}/{list_name}", self.base_url),
            headers: Vec::new(),
            body: None,
        }
    }

    pub fn parse_get_list(&self, response: HttpResponse) -> Result<ToDoList, ApiError> {
        check_status(&response, 200)?;
        Ok(ToDoList {
            list_name: extract_list_name(&response.body),
            items: extract_items(&response.body),
        })
    }
}

/// An absent heading parses as an empty list name rather than a failure; the
/// page shape is not validated beyond the two patterns.
fn extract_list_name(html: &str) -> ListName {
    let name = LIST_NAME
        .captures(html)
        .and_then(|captures| captures.get(1))
        .map(|m| m.as_str().to_string())
        .unwrap_or_default();
    ListName { name }
}

fn extract_items(html: &str) -> Vec<ToDoItem> {
    ITEM.captures_iter(html)
        .filter_map(|captures| captures.get(1))
        .map(|m| ToDoItem {
            description: m.as_str().to_string(),
        })
        .collect()
}

/// Map non-success status codes to the appropriate `ApiError` variant.
fn check_status(response: &HttpResponse, expected: u16) -> Result<(), ApiError> {
    if response.status == expected {
        return Ok(());
    }
    if response.status == 404 {
        return Err(ApiError::NotFound);
    }
    Err(ApiError::HttpError {
        status: response.status,
        body: response.body.clone(),
    })
}
