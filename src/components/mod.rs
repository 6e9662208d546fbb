//! UI Components
//!
//! Leptos components making up the widget.

mod new_todo_form;
mod tab_bar;
mod search_box;
mod todo_list_view;
mod todo_item;
mod clear_completed_button;

pub use new_todo_form::NewTodoForm;
pub use tab_bar::TabBar;
pub use search_box::SearchBox;
pub use todo_list_view::TodoList;
pub use todo_item::TodoItem;
pub use clear_completed_button::ClearCompletedButton;
