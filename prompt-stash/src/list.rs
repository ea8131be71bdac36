//! Ordered in-memory template list.
//!
//! Position is the only identity a template has. Out-of-range indices are
//! ignored rather than reported; the popup only ever passes indices taken
//! from the list it just rendered.

use crate::template::PromptTemplate;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TemplateList {
    items: Vec<PromptTemplate>,
}

impl TemplateList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a template at the end. Duplicates are allowed.
    pub fn append(&mut self, template: PromptTemplate) {
        self.items.push(template);
    }

    /// Replace the template at `index`. Returns false (and changes nothing)
    /// when the index is out of range.
    pub fn set_item(&mut self, index: usize, template: PromptTemplate) -> bool {
        match self.items.get_mut(index) {
            Some(slot) => {
                *slot = template;
                true
            }
            None => false,
        }
    }

    /// Remove the template at `index`, shifting later entries down by one.
    pub fn remove(&mut self, index: usize) -> Option<PromptTemplate> {
        if index < self.items.len() {
            Some(self.items.remove(index))
        } else {
            None
        }
    }

    /// Replace the whole list, used when hydrating from storage.
    pub fn set_state(&mut self, items: Vec<PromptTemplate>) {
        self.items = items;
    }

    pub fn get(&self, index: usize) -> Option<&PromptTemplate> {
        self.items.get(index)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, PromptTemplate> {
        self.items.iter()
    }

    pub fn as_slice(&self) -> &[PromptTemplate] {
        &self.items
    }

    pub fn to_vec(&self) -> Vec<PromptTemplate> {
        self.items.clone()
    }
}

impl From<Vec<PromptTemplate>> for TemplateList {
    fn from(items: Vec<PromptTemplate>) -> Self {
        Self { items }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn list_of(titles: &[&str]) -> TemplateList {
        titles
            .iter()
            .map(|t| PromptTemplate::new(*t, format!("{t} body")))
            .collect::<Vec<_>>()
            .into()
    }

    fn titles(list: &TemplateList) -> Vec<&str> {
        list.iter().map(|t| t.title.as_str()).collect()
    }

    #[test]
    fn test_append_keeps_insertion_order() {
        let mut list = TemplateList::new();
        list.append(PromptTemplate::new("a", "1"));
        list.append(PromptTemplate::new("b", "2"));
        list.append(PromptTemplate::new("a", "1"));
        assert_eq!(titles(&list), vec!["a", "b", "a"]);
    }

    #[test]
    fn test_set_item_replaces_only_target() {
        let mut list = list_of(&["a", "b", "c"]);
        assert!(list.set_item(1, PromptTemplate::new("B", "new")));
        assert_eq!(titles(&list), vec!["a", "B", "c"]);
        assert_eq!(list.get(1).unwrap().body, "new");
        assert_eq!(list.get(2).unwrap().body, "c body");
    }

    #[test]
    fn test_set_item_out_of_range_is_ignored() {
        let mut list = list_of(&["a"]);
        assert!(!list.set_item(1, PromptTemplate::new("x", "y")));
        assert_eq!(list, list_of(&["a"]));
    }

    #[test]
    fn test_remove_shifts_following_entries() {
        let mut list = list_of(&["a", "b", "c", "d"]);
        let removed = list.remove(1).unwrap();
        assert_eq!(removed.title, "b");
        assert_eq!(titles(&list), vec!["a", "c", "d"]);
        assert_eq!(list.get(1).unwrap().title, "c");
    }

    #[test]
    fn test_remove_out_of_range_is_ignored() {
        let mut list = list_of(&["a"]);
        assert!(list.remove(3).is_none());
        assert_eq!(list.len(), 1);
    }

    #[test]
    fn test_set_state_replaces_everything() {
        let mut list = list_of(&["a", "b"]);
        list.set_state(vec![PromptTemplate::new("z", "z")]);
        assert_eq!(titles(&list), vec!["z"]);
    }
}
