use super::*;
use std::iter::FusedIterator;

/// Generic consumer of iterables, the equivalent of a `for ... of` loop.
///
/// Lists yield their elements directly. Objects are asked for an
/// iterator through their `@@iterator` method, and that iterator is then
/// driven through its `next` method until it reports `done`.
///
/// The first error ends the iteration.
pub struct ValueIter(State);

enum State {
    List(Rc<List>, usize),
    Protocol(Value),
    Finished,
}

impl Value {
    pub fn iterate(&self) -> Result<ValueIter> {
        match self {
            Self::List(list) => Ok(ValueIter(State::List(list.clone(), 0))),
            Self::Object(_) => match self.apply_method(ITERATOR_KEY, vec![])? {
                iter @ Value::Object(_) => Ok(ValueIter(State::Protocol(iter))),
                other => Err(typeerr!(
                    TypeMismatch,
                    "Result of the @@iterator method is not an object ({:?})",
                    other
                )),
            },
            _ => Err(typeerr!(TypeMismatch, "{:?} is not iterable", self)),
        }
    }
}

fn step(iter: &Value) -> Result<Option<Value>> {
    let result = iter.apply_method("next", vec![])?;
    let record = match &result {
        Value::Record(record) => record,
        _ => {
            return Err(typeerr!(
                TypeMismatch,
                "Iterator result {:?} is not an object",
                result
            ))
        }
    };
    let done = record.get("done").map(|d| d.truthy()).unwrap_or(false);
    if done {
        Ok(None)
    } else {
        Ok(Some(record.get("value").unwrap_or(Value::Undefined)))
    }
}

impl Iterator for ValueIter {
    type Item = Result<Value>;

    fn next(&mut self) -> Option<Result<Value>> {
        let item = match &mut self.0 {
            State::List(list, i) => {
                let x = list.borrow().get(*i).cloned();
                if x.is_some() {
                    *i += 1;
                }
                x.map(Ok)
            }
            State::Protocol(iter) => step(iter).transpose(),
            State::Finished => None,
        };
        if !matches!(item, Some(Ok(_))) {
            self.0 = State::Finished;
        }
        item
    }
}

impl FusedIterator for ValueIter {}
