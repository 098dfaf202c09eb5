//! Interning of symbol names and string literals.

use bimap::BiMap;
use log::trace;

use crate::value::TextId;


/// Maps each distinct text to one canonical TextId. Text is never mutated or
/// removed, except by clearing the whole pool.
///
/// Ids are never reused, so an id from before a clear cannot name new text.
#[derive(Debug, Default)]
pub struct TextPool {
    name: &'static str,
    map: BiMap<Box<[u8]>, TextId>,
    next_id: usize,
}

impl TextPool {
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            map: BiMap::new(),
            next_id: 0,
        }
    }

    pub fn intern(&mut self, text: &[u8]) -> TextId {
        if let Some(id) = self.map.get_by_left(text) {
            return *id;
        }

        let id = TextId(self.next_id);
        self.next_id += 1;
        trace!(
            "{} pool: interning {:?} as {}",
            self.name,
            String::from_utf8_lossy(text),
            id.index()
        );
        self.map.insert(text.into(), id);
        id
    }

    pub fn lookup(&self, text: &[u8]) -> Option<TextId> {
        self.map.get_by_left(text).copied()
    }

    pub fn get(&self, id: TextId) -> Option<&[u8]> {
        self.map.get_by_right(&id).map(|text| &**text)
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    pub fn clear(&mut self) {
        self.map.clear();
    }
}
