//! Default iterator objects for pair-based collections.
//!
//! An `IteratorFactory` stamps out iterator objects over the pairs a
//! target exposes through its `PairSource`. A `CollectionMixin` builds one
//! factory and installs `keys`, `values`, `entries`, `forEach` and
//! `@@iterator` on a collection class.
//!
//! Iteration is live: the pair list is fetched again on every step,
//! so changes made to a collection while it is being iterated are seen
//! by the iterator at its current cursor position.
mod factory;
mod mixin;
mod oneshot;
mod source;
use crate::Class;
use crate::Error;
use crate::Handle;
use crate::HandleData;
use crate::NativeFunction;
use crate::RcStr;
use crate::Realm;
use crate::Record;
use crate::Result;
use crate::Symbol;
use crate::Value;
use crate::ITERATOR_KEY;
use crate::TO_STRING_TAG_KEY;
use log::debug;
use log::trace;
use std::fmt;
use std::rc::Rc;

pub use factory::*;
pub use mixin::*;
pub use oneshot::*;
pub use source::*;

/// Which projection of each pair an iterator yields
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Kind {
    Key,
    Value,
    KeyValue,
}

impl Kind {
    pub fn name(self) -> &'static str {
        match self {
            Kind::Key => "key",
            Kind::Value => "value",
            Kind::KeyValue => "key+value",
        }
    }

    pub fn project(self, key: Value, value: Value) -> Value {
        match self {
            Kind::Key => key,
            Kind::Value => value,
            Kind::KeyValue => Value::from(vec![key, value]),
        }
    }
}

/// Where in a pair the key or the value lives
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PairIndex {
    Position(usize),
    Field(RcStr),
}

impl fmt::Display for PairIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PairIndex::Position(i) => write!(f, "{}", i),
            PairIndex::Field(name) => write!(f, "{:?}", name),
        }
    }
}

impl From<usize> for PairIndex {
    fn from(i: usize) -> Self {
        PairIndex::Position(i)
    }
}

impl From<&str> for PairIndex {
    fn from(name: &str) -> Self {
        PairIndex::Field(name.into())
    }
}

impl From<RcStr> for PairIndex {
    fn from(name: RcStr) -> Self {
        PairIndex::Field(name)
    }
}

/// What one call to `next` produced
#[derive(Debug, Clone, PartialEq)]
pub struct IterResult {
    pub value: Value,
    pub done: bool,
}

impl IterResult {
    pub fn done() -> Self {
        Self {
            value: Value::Undefined,
            done: true,
        }
    }
    pub fn yielded(value: Value) -> Self {
        Self { value, done: false }
    }
}

impl From<IterResult> for Value {
    fn from(result: IterResult) -> Self {
        let record = Record::new();
        record.insert("value", result.value);
        record.insert("done", result.done);
        record.into()
    }
}
