//! FILENAME: matrix/src/entry.rs
//! PURPOSE: Defines the value-or-empty box stored in every Matrix cell.
//! CONTEXT: This file contains the `Entry` struct, a one-cell container
//! that distinguishes "no value was ever set" from every legal value the
//! caller can store — including caller-level nulls. Emptiness is modeled
//! as a sum type (`Option`), never as a magic sentinel value.

use serde::de::{Deserialize, Deserializer};
use serde::ser::{Serialize, Serializer};
use std::fmt;

/// A single-cell box around a value of type `T`.
///
/// An `Entry` is either empty or holds exactly one `T`. Any `T` is a legal
/// content: storing a caller-defined null (or `false`, or `0.0`) makes the
/// entry non-empty. Only `Entry::new` and `clear` produce the empty state.
#[derive(Debug, Clone, PartialEq)]
pub struct Entry<T> {
    slot: Option<T>,
}

impl<T> Entry<T> {
    /// Creates an empty Entry.
    pub fn new() -> Self {
        Entry { slot: None }
    }

    /// Creates a non-empty Entry holding `value`.
    pub fn with_value(value: T) -> Self {
        Entry { slot: Some(value) }
    }

    /// Returns true if no value has been set (or it was cleared).
    pub fn is_empty(&self) -> bool {
        self.slot.is_none()
    }

    /// Returns true if the Entry holds a value.
    pub fn is_not_empty(&self) -> bool {
        self.slot.is_some()
    }

    /// Forces the Entry back to empty, discarding any held value.
    pub fn clear(&mut self) {
        self.slot = None;
    }

    /// Returns a reference to the held value, or None if empty.
    pub fn value(&self) -> Option<&T> {
        self.slot.as_ref()
    }

    /// Sets the value. The Entry is non-empty afterwards, whatever `value` is.
    pub fn set_value(&mut self, value: T) {
        self.slot = Some(value);
    }

    /// Consumes the Entry and returns the held value, if any.
    pub fn into_value(self) -> Option<T> {
        self.slot
    }

    /// Adopts `value` only if the Entry is empty; otherwise a no-op.
    /// Returns `self` so calls can be chained.
    pub fn or_insert(&mut self, value: T) -> &mut Self {
        if self.slot.is_none() {
            self.slot = Some(value);
        }
        self
    }

    /// Replaces the held value with `f(value)` only if the Entry is
    /// non-empty; an empty Entry stays empty. Returns `self` for chaining.
    pub fn and_modify<F>(&mut self, f: F) -> &mut Self
    where
        F: FnOnce(T) -> T,
    {
        if let Some(value) = self.slot.take() {
            self.slot = Some(f(value));
        }
        self
    }
}

impl<T> Default for Entry<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: fmt::Display> fmt::Display for Entry<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.slot {
            Some(value) => write!(f, "Entry<{}>", value),
            None => write!(f, "Entry<(empty)>"),
        }
    }
}

/// Empty entries serialize as `null`; non-empty entries serialize as the
/// held value's own form.
impl<T: Serialize> Serialize for Entry<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match &self.slot {
            Some(value) => value.serialize(serializer),
            None => serializer.serialize_none(),
        }
    }
}

/// The inverse of serialization: `null` deserializes to an empty Entry.
/// A stored caller-level null is indistinguishable from empty on the wire,
/// so it comes back empty.
impl<'de, T: Deserialize<'de>> Deserialize<'de> for Entry<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Ok(Entry {
            slot: Option::<T>::deserialize(deserializer)?,
        })
    }
}
