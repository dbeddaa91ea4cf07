//! The lookup capability over list storage.
//!
//! The pipeline depends on the `ListHub` trait rather than a concrete map so
//! alternate backings can be substituted without touching the handler: the
//! fixture-backed `ToDoListHub` for the real application, `EmptyHub` for
//! wiring checks without data.

use std::collections::HashMap;
use std::sync::Arc;

use crate::model::{ListName, ToDoList, User};

/// Read-only lookup of a to-do list by its owner and name.
pub trait ListHub: Send + Sync {
    /// The first list filed under `user` whose name equals `list_name`, or
    /// `None` when the user is unknown or owns no list with that name.
    /// Never substitutes a default or empty list for an absent one.
    fn get_list(&self, user: &User, list_name: &ListName) -> Option<ToDoList>;
}

/// Hub handle shared with the router.
pub type SharedHub = Arc<dyn ListHub>;

/// Map-backed hub, fixed at construction and read-only for the process
/// lifetime.
pub struct ToDoListHub {
    lists: HashMap<User, Vec<ToDoList>>,
}

impl ToDoListHub {
    pub fn new(lists: HashMap<User, Vec<ToDoList>>) -> Self {
        Self { lists }
    }
}

impl ListHub for ToDoListHub {
    fn get_list(&self, user: &User, list_name: &ListName) -> Option<ToDoList> {
        self.lists
            .get(user)?
            .iter()
            .find(|list| list.list_name == *list_name)
            .cloned()
    }
}

/// Hub holding no lists at all.
pub struct EmptyHub;

impl ListHub for EmptyHub {
    fn get_list(&self, _user: &User, _list_name: &ListName) -> Option<ToDoList> {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ToDoItem;

    fn todo_list(name: &str, items: &[&str]) -> ToDoList {
        ToDoList {
            list_name: ListName::new(name),
            items: items.iter().map(|d| ToDoItem::new(*d)).collect(),
        }
    }

    fn hub() -> ToDoListHub {
        ToDoListHub::new(HashMap::from([
            (
                User::new("Frank"),
                vec![todo_list("shopping", &["carrots", "apples", "milk"])],
            ),
            (
                User::new("Bob"),
                vec![todo_list("gardening", &["fix the fence", "mowing the lawn"])],
            ),
        ]))
    }

    #[test]
    fn returns_the_stored_list() {
        let list = hub()
            .get_list(&User::new("Frank"), &ListName::new("shopping"))
            .unwrap();
        assert_eq!(list, todo_list("shopping", &["carrots", "apples", "milk"]));
    }

    #[test]
    fn unknown_user_is_absent() {
        assert!(hub()
            .get_list(&User::new("Alice"), &ListName::new("shopping"))
            .is_none());
    }

    #[test]
    fn known_user_unknown_list_is_absent() {
        assert!(hub()
            .get_list(&User::new("Frank"), &ListName::new("gardening"))
            .is_none());
    }

    #[test]
    fn lists_are_filed_per_owner() {
        // Bob must not see Frank's list even if he asks for its name.
        assert!(hub()
            .get_list(&User::new("Bob"), &ListName::new("shopping"))
            .is_none());
    }

    #[test]
    fn first_match_wins_on_duplicate_names() {
        let hub = ToDoListHub::new(HashMap::from([(
            User::new("Frank"),
            vec![
                todo_list("shopping", &["carrots"]),
                todo_list("shopping", &["bread"]),
            ],
        )]));
        let list = hub
            .get_list(&User::new("Frank"), &ListName::new("shopping"))
            .unwrap();
        assert_eq!(list, todo_list("shopping", &["carrots"]));
    }

    #[test]
    fn empty_hub_has_nothing() {
        assert!(EmptyHub
            .get_list(&User::new("Frank"), &ListName::new("shopping"))
            .is_none());
    }

    #[test]
    fn empty_identifiers_resolve_to_absent() {
        assert!(hub().get_list(&User::new(""), &ListName::new("")).is_none());
    }
}
