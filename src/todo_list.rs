//! Todo List Operations
//!
//! Pure operations over the flat todo list. The reactive store wraps these.

use crate::error::{TodoError, TodoResult};
use crate::models::{Tab, Todo, TodoId};

/// Item counts shown on the tab labels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TabCounts {
    pub todo: usize,
    pub completed: usize,
}

impl TabCounts {
    pub fn get(&self, tab: Tab) -> usize {
        match tab {
            Tab::Todo => self.todo,
            Tab::Completed => self.completed,
        }
    }
}

fn normalize(raw_text: &str) -> TodoResult<String> {
    let trimmed = raw_text.trim();
    if trimmed.is_empty() {
        return Err(TodoError::EmptyText);
    }
    Ok(trimmed.to_string())
}

fn find_mut<'a>(list: &'a mut [Todo], id: &TodoId) -> TodoResult<&'a mut Todo> {
    list.iter_mut()
        .find(|todo| &todo.id == id)
        .ok_or_else(|| TodoError::NotFound(id.clone()))
}

/// Prepend a new incomplete todo. Newest items come first.
pub fn create(list: &mut Vec<Todo>, id: TodoId, raw_text: &str) -> TodoResult<Todo> {
    let text = normalize(raw_text)?;
    let todo = Todo::new(id, text);
    list.insert(0, todo.clone());
    Ok(todo)
}

/// Flip the completed flag, returning the new value
pub fn toggle(list: &mut [Todo], id: &TodoId) -> TodoResult<bool> {
    let todo = find_mut(list, id)?;
    todo.completed = !todo.completed;
    Ok(todo.completed)
}

/// Replace the text of an item. Empty text leaves the item unchanged.
pub fn update_text(list: &mut [Todo], id: &TodoId, raw_text: &str) -> TodoResult<()> {
    let text = normalize(raw_text)?;
    find_mut(list, id)?.text = text;
    Ok(())
}

pub fn remove(list: &mut Vec<Todo>, id: &TodoId) -> TodoResult<Todo> {
    let index = list
        .iter()
        .position(|todo| &todo.id == id)
        .ok_or_else(|| TodoError::NotFound(id.clone()))?;
    Ok(list.remove(index))
}

/// Remove every completed item, returning how many were dropped
pub fn clear_completed(list: &mut Vec<Todo>) -> usize {
    let before = list.len();
    list.retain(|todo| !todo.completed);
    before - list.len()
}

/// Items visible under `tab` whose text contains `query` (case-insensitive).
/// A blank query matches everything. List order is preserved.
pub fn filter(list: &[Todo], tab: Tab, query: &str) -> Vec<Todo> {
    let query = query.trim().to_lowercase();
    list.iter()
        .filter(|todo| tab.accepts(todo.completed))
        .filter(|todo| query.is_empty() || todo.text.to_lowercase().contains(&query))
        .cloned()
        .collect()
}

pub fn counts(list: &[Todo]) -> TabCounts {
    let completed = list.iter().filter(|todo| todo.completed).count();
    TabCounts {
        todo: list.len() - completed,
        completed,
    }
}

pub fn contains(list: &[Todo], id: &TodoId) -> bool {
    list.iter().any(|todo| &todo.id == id)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn id(s: &str) -> TodoId {
        TodoId::new(s)
    }

    fn sample() -> Vec<Todo> {
        let mut list = Vec::new();
        create(&mut list, id("a"), "Buy milk").unwrap();
        create(&mut list, id("b"), "Walk the dog").unwrap();
        create(&mut list, id("c"), "Buy stamps").unwrap();
        toggle(&mut list, &id("b")).unwrap();
        list
    }

    #[test]
    fn test_create_prepends_trimmed() {
        let mut list = Vec::new();
        create(&mut list, id("1"), "first").unwrap();
        let todo = create(&mut list, id("2"), "  second  ").unwrap();

        assert_eq!(todo.text, "second");
        assert!(!todo.completed);
        assert_eq!(list[0].id, id("2"));
        assert_eq!(list[1].id, id("1"));
    }

    #[test]
    fn test_create_rejects_blank() {
        let mut list = Vec::new();
        assert_eq!(create(&mut list, id("1"), "   \t"), Err(TodoError::EmptyText));
        assert!(list.is_empty());
    }

    #[test]
    fn test_toggle() {
        let mut list = sample();
        assert_eq!(toggle(&mut list, &id("a")), Ok(true));
        assert_eq!(toggle(&mut list, &id("a")), Ok(false));
        assert_eq!(toggle(&mut list, &id("zz")), Err(TodoError::NotFound(id("zz"))));
    }

    #[test]
    fn test_update_text() {
        let mut list = sample();
        update_text(&mut list, &id("a"), " Buy oat milk ").unwrap();
        assert_eq!(list[2].text, "Buy oat milk");

        assert_eq!(update_text(&mut list, &id("a"), "  "), Err(TodoError::EmptyText));
        assert_eq!(list[2].text, "Buy oat milk");

        assert!(matches!(
            update_text(&mut list, &id("nope"), "x"),
            Err(TodoError::NotFound(_))
        ));
    }

    #[test]
    fn test_update_keeps_completed_flag() {
        let mut list = sample();
        update_text(&mut list, &id("b"), "Walk the cat").unwrap();
        let b = list.iter().find(|t| t.id == id("b")).unwrap();
        assert!(b.completed);
        assert_eq!(b.text, "Walk the cat");
    }

    #[test]
    fn test_remove() {
        let mut list = sample();
        let removed = remove(&mut list, &id("b")).unwrap();
        assert_eq!(removed.text, "Walk the dog");
        assert_eq!(list.len(), 2);
        assert!(!contains(&list, &id("b")));
        assert!(remove(&mut list, &id("b")).is_err());
    }

    #[test]
    fn test_filter_by_tab() {
        let list = sample();
        let todo: Vec<_> = filter(&list, Tab::Todo, "").into_iter().map(|t| t.id).collect();
        assert_eq!(todo, vec![id("c"), id("a")]);

        let done: Vec<_> = filter(&list, Tab::Completed, "").into_iter().map(|t| t.id).collect();
        assert_eq!(done, vec![id("b")]);
    }

    #[test]
    fn test_filter_search_is_case_insensitive() {
        let list = sample();
        let hits = filter(&list, Tab::Todo, "  BUY ");
        assert_eq!(hits.len(), 2);

        let hits = filter(&list, Tab::Todo, "stamps");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].id, id("c"));

        // Search never crosses tabs
        assert!(filter(&list, Tab::Todo, "dog").is_empty());
        assert_eq!(filter(&list, Tab::Completed, "DOG").len(), 1);
    }

    #[test]
    fn test_counts_and_clear_completed() {
        let mut list = sample();
        let c = counts(&list);
        assert_eq!(c, TabCounts { todo: 2, completed: 1 });
        assert_eq!(c.get(Tab::Completed), 1);

        assert_eq!(clear_completed(&mut list), 1);
        assert_eq!(counts(&list), TabCounts { todo: 2, completed: 0 });
        assert_eq!(clear_completed(&mut list), 0);
    }
}
