use super::*;

type Accessor = Rc<dyn Fn(&Value) -> Result<Value>>;

/// How to get the current list of pairs out of an iteration target
#[derive(Clone)]
pub enum PairSource {
    /// The list stored in the target object's internal slot
    Slot(Symbol),

    /// Whatever list the closure returns for the target
    Accessor(Accessor),
}

impl PairSource {
    pub fn accessor<F>(f: F) -> Self
    where
        F: Fn(&Value) -> Result<Value> + 'static,
    {
        PairSource::Accessor(Rc::new(f))
    }

    /// Fetches the pairs as they are right now.
    /// Called on every step; the result must not be cached.
    pub fn fetch(&self, target: &Value) -> Result<Rc<crate::List>> {
        let pairs = match self {
            PairSource::Slot(key) => target.object()?.slot(key).unwrap_or(Value::Undefined),
            PairSource::Accessor(f) => f(target)?,
        };
        match pairs {
            Value::List(list) => Ok(list),
            other => Err(typeerr!(
                TypeMismatch,
                "Expected a list of pairs but got {:?}",
                other
            )),
        }
    }
}

impl fmt::Debug for PairSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PairSource::Slot(key) => write!(f, "PairSource::Slot({:?})", key),
            PairSource::Accessor(_) => write!(f, "PairSource::Accessor"),
        }
    }
}

impl From<Symbol> for PairSource {
    fn from(key: Symbol) -> Self {
        PairSource::Slot(key)
    }
}

impl From<&Symbol> for PairSource {
    fn from(key: &Symbol) -> Self {
        PairSource::Slot(key.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slot_source() {
        let key = Symbol::new("pairs");
        let cls = Class::new("Thing");
        let obj = Class::instantiate(&cls);
        let source = PairSource::from(&key);
        let target = Value::from(&obj);

        let err = source.fetch(&target).err().unwrap();
        assert_eq!(err.format(), "TypeError: Expected a list of pairs but got undefined");

        obj.set_slot(&key, vec![vec![1, 2]]);
        assert_eq!(source.fetch(&target).unwrap().len(), 1);

        // slots need an object to live in
        assert!(source.fetch(&Value::from(1)).is_err());
    }

    #[test]
    fn accessor_source_is_called_each_time() {
        let calls = Rc::new(std::cell::Cell::new(0));
        let counter = calls.clone();
        let source = PairSource::accessor(move |_target| {
            counter.set(counter.get() + 1);
            Ok(Value::from(vec![vec![counter.get(); 2]]))
        });
        source.fetch(&Value::Undefined).unwrap();
        let list = source.fetch(&Value::Undefined).unwrap();
        assert_eq!(calls.get(), 2);
        assert_eq!(list.borrow()[0], Value::from(vec![2, 2]));
    }
}
