//! Pure rendering from a `ToDoList` to an `HtmlPage`.

use crate::model::{HtmlPage, ToDoItem, ToDoList};

/// Render the full page for one list: fixed title heading, the list name as
/// a second-level heading, one table row per item in stored order.
///
/// List name and item descriptions are interpolated verbatim, with no
/// HTML-escaping; the exact bytes are part of the external contract.
pub fn render_html(todo_list: &ToDoList) -> HtmlPage {
    HtmlPage {
        raw: format!(
            "<html><body><h1>Zettai</h1><h2>{}</h2><table><tbody>{}</tbody></table></body></html>",
            todo_list.list_name.name,
            render_items(&todo_list.items),
        ),
    }
}

fn render_items(items: &[ToDoItem]) -> String {
    items
        .iter()
        .map(|item| format!("<tr><td>{}</td></tr>", item.description))
        .collect()
}
