//! Domain values recovered from a rendered list page.
//!
//! # Design
//! These types mirror the server's model but are defined independently, so
//! the client stands alone as a consumer of the HTTP surface. Integration
//! tests catch any drift between the two crates.

/// Name of a to-do list within one owner's collection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListName {
    pub name: String,
}

/// A single line item parsed from a table row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToDoItem {
    pub description: String,
}

/// A named, ordered collection of items, in page order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToDoList {
    pub list_name: ListName,
    pub items: Vec<ToDoItem>,
}
