mod cls;
mod coll;
mod conv;
mod format;
mod func;
mod hnd;
mod iterate;
mod obj;
use crate::Error;
use crate::IndexMap;
use crate::PairIndex;
use crate::RcStr;
use crate::Result;
use crate::Symbol;
use std::any::Any;
use std::cell::Ref;
use std::cell::RefCell;
use std::cell::RefMut;
use std::cmp;
use std::collections::HashMap;
use std::convert::TryFrom;
use std::fmt;
use std::marker::PhantomData;
use std::rc::Rc;
use std::rc::Weak;

pub use cls::*;
pub use coll::*;
pub use func::*;
pub use hnd::*;
pub use iterate::*;
pub use obj::*;

/// Method name of the default iteration hook
pub const ITERATOR_KEY: &str = "@@iterator";

/// Attribute name of the type tag used by `object_to_string`
pub const TO_STRING_TAG_KEY: &str = "@@toStringTag";

#[derive(Clone, PartialEq)]
pub enum Value {
    Undefined,
    Null,
    Bool(bool),
    Number(f64),
    String(RcStr),
    List(Rc<List>),
    Record(Rc<Record>),
    Function(Rc<NativeFunction>),
    Object(Rc<Object>),
    Handle(Rc<HandleData>),
}

impl Value {
    pub fn truthy(&self) -> bool {
        match self {
            Self::Undefined | Self::Null => false,
            Self::Bool(b) => *b,
            Self::Number(x) => *x != 0.0 && !x.is_nan(),
            Self::String(s) => !s.is_empty(),
            Self::List(_)
            | Self::Record(_)
            | Self::Function(_)
            | Self::Object(_)
            | Self::Handle(_) => true,
        }
    }
    pub fn is_undefined(&self) -> bool {
        matches!(self, Self::Undefined)
    }
    pub fn is_callable(&self) -> bool {
        matches!(self, Self::Function(_))
    }
    pub fn bool(&self) -> Result<bool> {
        if let Self::Bool(x) = self {
            Ok(*x)
        } else {
            Err(typeerr!(TypeMismatch, "Expected bool but got {:?}", self))
        }
    }
    pub fn number(&self) -> Result<f64> {
        if let Self::Number(x) = self {
            Ok(*x)
        } else {
            Err(typeerr!(TypeMismatch, "Expected number but got {:?}", self))
        }
    }
    pub fn string(&self) -> Result<&RcStr> {
        if let Self::String(x) = self {
            Ok(x)
        } else {
            Err(typeerr!(TypeMismatch, "Expected string but got {:?}", self))
        }
    }
    pub fn list(&self) -> Result<&Rc<List>> {
        if let Self::List(x) = self {
            Ok(x)
        } else {
            Err(typeerr!(TypeMismatch, "Expected list but got {:?}", self))
        }
    }
    pub fn record(&self) -> Result<&Rc<Record>> {
        if let Self::Record(x) = self {
            Ok(x)
        } else {
            Err(typeerr!(TypeMismatch, "Expected record but got {:?}", self))
        }
    }
    pub fn object(&self) -> Result<&Rc<Object>> {
        if let Self::Object(x) = self {
            Ok(x)
        } else {
            Err(typeerr!(TypeMismatch, "Expected object but got {:?}", self))
        }
    }

    /// Reads one entry out of a pair.
    /// Lists are indexed by position, records by field name.
    /// Entries that don't exist read as undefined, the same way
    /// destructuring a short array would.
    pub fn get_item(&self, index: &PairIndex) -> Result<Value> {
        match (self, index) {
            (Self::Undefined, _) | (Self::Null, _) => Err(typeerr!(
                TypeMismatch,
                "Cannot read entry {} of {:?}",
                index,
                self
            )),
            (Self::List(list), PairIndex::Position(i)) => {
                Ok(list.borrow().get(*i).cloned().unwrap_or(Value::Undefined))
            }
            (Self::List(list), PairIndex::Field(name)) => Ok(name
                .parse::<usize>()
                .ok()
                .and_then(|i| list.borrow().get(i).cloned())
                .unwrap_or(Value::Undefined)),
            (Self::Record(record), PairIndex::Position(i)) => {
                Ok(record.get(&i.to_string()).unwrap_or(Value::Undefined))
            }
            (Self::Record(record), PairIndex::Field(name)) => {
                Ok(record.get(name).unwrap_or(Value::Undefined))
            }
            _ => Ok(Value::Undefined),
        }
    }

    /// Looks up a method or attribute along the receiver's class chain
    pub fn lookup(&self, name: &str) -> Option<Value> {
        match self {
            Self::Object(obj) => obj.cls().lookup(name),
            _ => None,
        }
    }

    /// Calls this value as a function with the given receiver
    pub fn call(&self, this: &Value, args: Vec<Value>) -> Result<Value> {
        match self {
            Self::Function(func) => func.call(this, args),
            _ => Err(typeerr!(TypeMismatch, "{:?} is not a function", self)),
        }
    }

    pub fn apply_method(&self, method_name: &str, args: Vec<Value>) -> Result<Value> {
        match self.lookup(method_name) {
            Some(method) => method.call(self, args),
            None => Err(typeerr!(
                TypeMismatch,
                "Method {:?} not found for {:?}",
                method_name,
                self
            )),
        }
    }

    /// The nearest `@@toStringTag` on the class chain, if any
    pub fn to_string_tag(&self) -> Option<RcStr> {
        match self.lookup(TO_STRING_TAG_KEY) {
            Some(Value::String(tag)) => Some(tag),
            _ => None,
        }
    }

    /// Renders the value the way `Object.prototype.toString` would
    pub fn object_to_string(&self) -> RcStr {
        let tag: RcStr = match self {
            Self::Undefined => "Undefined".into(),
            Self::Null => "Null".into(),
            Self::List(_) => "Array".into(),
            Self::Function(_) => "Function".into(),
            _ => self.to_string_tag().unwrap_or_else(|| "Object".into()),
        };
        format!("[object {}]", tag).into()
    }
}
