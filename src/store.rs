// src/store.rs

use crate::domino::{Domino, Direction};
use crate::error::ValidationError;
use std::collections::HashMap;

/// Sparse position -> domino map. Empty positions take no space.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DominoStore {
    sparse: HashMap<u32, Domino>,
    ordered: Vec<u32>, // occupied positions, ascending
}

impl DominoStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        DominoStore {
            sparse: HashMap::with_capacity(capacity),
            ordered: Vec::with_capacity(capacity),
        }
    }

    /// Places `domino` at its own position. Ascending insertion is O(1)
    /// amortized; out-of-order insertion shifts the position index.
    pub fn insert(&mut self, domino: Domino) -> Result<(), ValidationError> {
        let position = domino.position();
        if self.sparse.contains_key(&position) {
            return Err(ValidationError::DuplicatePosition { position });
        }
        self.sparse.insert(position, domino);
        match self.ordered.last() {
            Some(&last) if last > position => {
                let at = self.ordered.partition_point(|&p| p < position);
                self.ordered.insert(at, position);
            }
            _ => self.ordered.push(position),
        }
        Ok(())
    }

    /// The domino at `position`, or `None` for a gap.
    #[inline]
    pub fn get(&self, position: i64) -> Option<&Domino> {
        u32::try_from(position)
            .ok()
            .and_then(|p| self.sparse.get(&p))
    }

    pub fn len(&self) -> usize {
        self.sparse.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sparse.is_empty()
    }

    /// Dominoes in ascending position order.
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &Domino> + ExactSizeIterator + '_ {
        self.ordered.iter().map(move |p| &self.sparse[p])
    }

    /// Dominoes in the order a pass tipping toward `direction` visits them:
    /// against the tip, so every domino that can be struck is seen first.
    pub fn scan_against(&self, direction: Direction) -> Box<dyn Iterator<Item = &Domino> + '_> {
        match direction {
            Direction::Right => Box::new(self.iter().rev()),
            Direction::Left => Box::new(self.iter()),
        }
    }
}

// -------------------------------------------------
// A full line: length plus its sparse occupants
// -------------------------------------------------
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DominoLine {
    length: usize,
    store: DominoStore,
}

impl DominoLine {
    pub fn new(length: usize) -> Self {
        DominoLine {
            length,
            store: DominoStore::new(),
        }
    }

    pub fn place(&mut self, domino: Domino) -> Result<(), ValidationError> {
        if domino.position() as usize >= self.length {
            return Err(ValidationError::PositionOutOfRange {
                position: i64::from(domino.position()),
                max: self.length as i64 - 1,
            });
        }
        self.store.insert(domino)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.length
    }

    pub fn is_empty(&self) -> bool {
        self.length == 0
    }

    #[inline]
    pub fn store(&self) -> &DominoStore {
        &self.store
    }

    /// Heights in position order, `0` for gaps.
    pub fn heights(&self) -> Vec<u32> {
        let mut heights = vec![0; self.length];
        for d in self.store.iter() {
            heights[d.position() as usize] = d.height();
        }
        heights
    }

    /// The same line read back to front.
    pub fn mirrored(&self) -> Result<DominoLine, ValidationError> {
        let mut store = DominoStore::with_capacity(self.store.len());
        for d in self.store.iter().rev() {
            let position = self.length as i64 - 1 - i64::from(d.position());
            store.insert(Domino::new(position, i64::from(d.height()))?)?;
        }
        Ok(DominoLine {
            length: self.length,
            store,
        })
    }
}
