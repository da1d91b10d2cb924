//! In-order iteration driven by cursors.

use std::iter::FusedIterator;

use super::cursor::Cursor;
use super::map::TreeMap;
use crate::policy::{KeyOrder, NaturalOrder};

/// An iterator over the entries of a [`TreeMap`] in key order.
///
/// The front walks by [`Cursor::successor`] from the minimum and the back by
/// [`Cursor::predecessor`] from the maximum; a shared count stops them when
/// they meet.
pub struct Iter<'a, K, V, O = NaturalOrder> {
    front: Cursor<'a, K, V, O>,
    back: Cursor<'a, K, V, O>,
    remaining: usize,
}

impl<'a, K, V, O: KeyOrder<K>> Iter<'a, K, V, O> {
    pub(crate) fn new(map: &'a TreeMap<K, V, O>) -> Self {
        let mut front = map.cursor();
        front.descend_min();
        let mut back = map.cursor();
        back.descend_max();
        Self {
            front,
            back,
            remaining: map.len(),
        }
    }
}

impl<'a, K, V, O: KeyOrder<K>> Iterator for Iter<'a, K, V, O> {
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let entry = self.front.entry()?;
        self.remaining -= 1;
        if self.remaining > 0 {
            self.front.successor();
        }
        Some(entry)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<K, V, O: KeyOrder<K>> DoubleEndedIterator for Iter<'_, K, V, O> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let entry = self.back.entry()?;
        self.remaining -= 1;
        if self.remaining > 0 {
            self.back.predecessor();
        }
        Some(entry)
    }
}

impl<K, V, O: KeyOrder<K>> ExactSizeIterator for Iter<'_, K, V, O> {
    fn len(&self) -> usize {
        self.remaining
    }
}

impl<K, V, O: KeyOrder<K>> FusedIterator for Iter<'_, K, V, O> {}

impl<K, V, O> Clone for Iter<'_, K, V, O> {
    fn clone(&self) -> Self {
        Self {
            front: self.front.clone(),
            back: self.back.clone(),
            remaining: self.remaining,
        }
    }
}
