use std::collections::HashMap;

use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;
use zettai_server::{ListName, ToDoItem, ToDoList, User};

#[tokio::main]
async fn main() -> Result<(), std::io::Error> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let port = std::env::var("PORT").unwrap_or_else(|_| "8080".to_string());
    let addr = format!("127.0.0.1:{port}");
    let listener = TcpListener::bind(&addr).await?;
    tracing::info!("listening on {addr}");
    zettai_server::run(listener, starter_lists()).await
}

/// Fixed starter data. There is no mutation surface, so this is the whole
/// content of the store for the process lifetime.
fn starter_lists() -> HashMap<User, Vec<ToDoList>> {
    HashMap::from([
        (
            User::new("Frank"),
            vec![ToDoList {
                list_name: ListName::new("shopping"),
                items: vec![
                    ToDoItem::new("carrots"),
                    ToDoItem::new("apples"),
                    ToDoItem::new("milk"),
                ],
            }],
        ),
        (
            User::new("Bob"),
            vec![ToDoList {
                list_name: ListName::new("gardening"),
                items: vec![
                    ToDoItem::new("fix the fence"),
                    ToDoItem::new("mowing the lawn"),
                ],
            }],
        ),
    ])
}
