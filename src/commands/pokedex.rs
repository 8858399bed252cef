//! Pokedex Module
//!
//! The collection of pokemon caught during a session.

use std::collections::BTreeMap;

use crate::models::Pokemon;

// == Pokedex ==
/// Every pokemon caught this session, keyed by API name.
///
/// Owned by the caller of the dispatcher and lent to it per command.
#[derive(Debug, Default)]
pub struct Pokedex {
    caught: BTreeMap<String, Pokemon>,
}

impl Pokedex {
    // == Constructor ==
    pub fn new() -> Self {
        Self::default()
    }

    // == Record ==
    /// Records a catch. Catching the same pokemon again replaces the record.
    pub fn record(&mut self, pokemon: Pokemon) {
        self.caught.insert(pokemon.name.clone(), pokemon);
    }

    // == Lookup ==
    pub fn get(&self, name: &str) -> Option<&Pokemon> {
        self.caught.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.caught.contains_key(name)
    }

    /// Caught names in alphabetical order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.caught.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.caught.len()
    }

    pub fn is_empty(&self) -> bool {
        self.caught.is_empty()
    }
}
