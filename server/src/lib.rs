//! Zettai: a web front end over per-user to-do lists.
//!
//! One route — `GET /todo/{user}/{list}` — looked up through the `ListHub`
//! capability and rendered as an HTML page. The handler is a chain of four
//! plain functions (extract, fetch, render, respond) with early return on
//! the only domain failure.

use std::collections::HashMap;
use std::sync::Arc;

use axum::{
    extract::{Path, State},
    response::Html,
    routing::get,
    Router,
};
use tokio::net::TcpListener;

pub mod error;
pub mod hub;
pub mod model;
pub mod render;

pub use error::ZettaiError;
pub use hub::{EmptyHub, ListHub, SharedHub, ToDoListHub};
pub use model::{HtmlPage, ListName, ToDoItem, ToDoList, User};
pub use render::render_html;

/// Build the router around a hub. Anything outside the single route falls
/// through to axum's default not-found handling.
pub fn app(hub: SharedHub) -> Router {
    Router::new()
        .route("/todo/{user}/{list}", get(show_list))
        .with_state(hub)
}

/// Serve `app` over `listener`, backed by a map-backed hub holding `lists`.
pub async fn run(
    listener: TcpListener,
    lists: HashMap<User, Vec<ToDoList>>,
) -> Result<(), std::io::Error> {
    let hub: SharedHub = Arc::new(ToDoListHub::new(lists));
    axum::serve(listener, app(hub)).await
}

async fn show_list(
    State(hub): State<SharedHub>,
    Path((user, list)): Path<(String, String)>,
) -> Result<Html<String>, ZettaiError> {
    let list_id = extract_list_data(user, list);
    let todo_list = fetch_list_content(hub.as_ref(), &list_id).inspect_err(|_| {
        tracing::debug!(user = %list_id.0.name, list = %list_id.1.name, "list lookup failed");
    })?;
    let page = render_html(&todo_list);
    Ok(create_response(page))
}

/// Path segments become identifiers as-is: no trimming, no validation.
fn extract_list_data(user: String, list: String) -> (User, ListName) {
    (User::new(user), ListName::new(list))
}

fn fetch_list_content(
    hub: &dyn ListHub,
    (user, list_name): &(User, ListName),
) -> Result<ToDoList, ZettaiError> {
    hub.get_list(user, list_name).ok_or(ZettaiError::ListUnknown)
}

fn create_response(page: HtmlPage) -> Html<String> {
    Html(page.raw)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extract_keeps_segments_as_raw_text() {
        let (user, list) = extract_list_data("  Frank ".to_string(), "".to_string());
        assert_eq!(user, User::new("  Frank "));
        assert_eq!(list, ListName::new(""));
    }

    #[test]
    fn fetch_from_an_empty_hub_fails() {
        let id = (User::new("Frank"), ListName::new("shopping"));
        let err = fetch_list_content(&EmptyHub, &id).unwrap_err();
        assert_eq!(err, ZettaiError::ListUnknown);
    }

    #[test]
    fn fetch_returns_the_stored_list() {
        let list = ToDoList {
            list_name: ListName::new("shopping"),
            items: vec![ToDoItem::new("carrots")],
        };
        let hub = ToDoListHub::new(HashMap::from([(User::new("Frank"), vec![list.clone()])]));
        let id = (User::new("Frank"), ListName::new("shopping"));
        assert_eq!(fetch_list_content(&hub, &id).unwrap(), list);
    }

    #[test]
    fn respond_carries_the_page_bytes() {
        let page = HtmlPage {
            raw: "<html></html>".to_string(),
        };
        let Html(body) = create_response(page);
        assert_eq!(body, "<html></html>");
    }
}
