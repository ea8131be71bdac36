//! Random popup operation sequences: storage always matches the in-memory list.

use futures::executor::block_on;
use proptest::prelude::*;
use prompt_stash::{Config, MemoryStore, PopupState, PromptTemplate, TemplateStore};

#[derive(Debug, Clone)]
enum Op {
    Edit(usize),
    Submit(String, String),
    Delete(usize),
    Cancel,
}

fn template() -> impl Strategy<Value = PromptTemplate> {
    ("[a-z]{1,6}", "[a-z ]{0,4}[a-z]").prop_map(|(title, body)| PromptTemplate::new(title, body))
}

fn op() -> impl Strategy<Value = Op> {
    prop_oneof![
        (0usize..8).prop_map(Op::Edit),
        ("[a-z]{1,6}", "[a-z]{1,6}").prop_map(|(t, b)| Op::Submit(t, b)),
        (0usize..8).prop_map(Op::Delete),
        Just(Op::Cancel),
    ]
}

/// Plain `Vec` + cursor model of what the popup should hold.
#[derive(Debug, Default)]
struct Model {
    items: Vec<PromptTemplate>,
    cursor: Option<usize>,
}

impl Model {
    /// Applies `op`; returns true when the list changed and must be saved.
    fn apply(&mut self, op: &Op) -> bool {
        match op {
            Op::Edit(index) => {
                if *index < self.items.len() {
                    self.cursor = Some(*index);
                }
                false
            }
            Op::Submit(title, body) => {
                let t = PromptTemplate::new(title.clone(), body.clone());
                match self.cursor.take() {
                    Some(index) => self.items[index] = t,
                    None => self.items.push(t),
                }
                true
            }
            Op::Delete(index) => {
                if *index >= self.items.len() {
                    return false;
                }
                self.items.remove(*index);
                self.cursor = match self.cursor {
                    Some(c) if c == *index => None,
                    Some(c) if c > *index => Some(c - 1),
                    other => other,
                };
                true
            }
            Op::Cancel => {
                self.cursor = None;
                false
            }
        }
    }
}

proptest! {
    #[test]
    fn test_store_matches_memory_after_every_op(
        initial in prop::collection::vec(template(), 0..4),
        ops in prop::collection::vec(op(), 1..40),
    ) {
        let store = MemoryStore::with_items(initial.clone());
        let mut state = PopupState::new(Config::default());
        let stored = block_on(store.load()).unwrap();
        block_on(state.hydrate(stored).commit(&store)).unwrap();

        let mut model = Model { items: initial, cursor: None };

        for op in &ops {
            let saves_before = store.save_count();
            let expect_save = model.apply(op);

            match op {
                Op::Edit(index) => {
                    state.edit(*index);
                }
                Op::Submit(title, body) => {
                    state.set_title(title.clone());
                    state.set_body(body.clone());
                    let save = state.submit().expect("generated fields are non-empty");
                    block_on(save.commit(&store)).unwrap();
                }
                Op::Delete(index) => {
                    if let Some(save) = state.delete(*index) {
                        block_on(save.commit(&store)).unwrap();
                    }
                }
                Op::Cancel => state.cancel_edit(),
            }

            prop_assert_eq!(state.items().as_slice(), model.items.as_slice());
            prop_assert_eq!(store.snapshot(), Some(model.items.clone()));
            prop_assert_eq!(state.form().cursor.index(), model.cursor);
            prop_assert_eq!(store.save_count() - saves_before, usize::from(expect_save));
        }
    }
}
