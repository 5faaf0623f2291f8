use super::*;

/// Per-instance state, kept in the iterator object's brand slot
pub struct IteratorState {
    target: Value,
    kind: Kind,
    cursor: usize,
}

impl IteratorState {
    pub fn target(&self) -> &Value {
        &self.target
    }
    pub fn kind(&self) -> Kind {
        self.kind
    }
    pub fn cursor(&self) -> usize {
        self.cursor
    }
}

/// The parts of a factory that the prototype's `next` needs.
/// Kept apart from the prototype itself so that `next` can hold on to
/// them without the prototype referring back to itself.
struct Shared {
    name: RcStr,
    brand: Symbol,
    source: PairSource,
    key_index: PairIndex,
    value_index: PairIndex,
}

impl Shared {
    fn state(&self, this: &Value) -> Result<Handle<IteratorState>> {
        let state = match this {
            Value::Object(obj) => match obj.slot(&self.brand) {
                Some(Value::Handle(data)) => HandleData::downcast(data).ok(),
                _ => None,
            },
            _ => None,
        };
        state.ok_or_else(|| {
            typeerr!(
                Invocation,
                "next() called on a value that is not a {} iterator object",
                self.name
            )
        })
    }

    fn advance(&self, state: &Handle<IteratorState>) -> Result<Option<(Value, Value)>> {
        // the pair source may run arbitrary code, so no borrow
        // of the state may be held across the fetch
        let (target, cursor) = {
            let state = state.borrow();
            (state.target.clone(), state.cursor)
        };
        let pairs = self.source.fetch(&target)?;
        let pair = pairs.borrow().get(cursor).cloned();
        let pair = match pair {
            Some(pair) => pair,
            None => {
                trace!("{} Iterator exhausted at {}", self.name, cursor);
                return Ok(None);
            }
        };
        let key = pair.get_item(&self.key_index)?;
        let value = pair.get_item(&self.value_index)?;
        state.borrow_mut().cursor = cursor + 1;
        Ok(Some((key, value)))
    }

    fn next(&self, this: &Value) -> Result<IterResult> {
        let state = self.state(this)?;
        let kind = state.borrow().kind;
        Ok(match self.advance(&state)? {
            Some((key, value)) => IterResult::yielded(kind.project(key, value)),
            None => IterResult::done(),
        })
    }
}

/// Produces iterator objects over the pairs of a target.
///
/// All iterators of one factory are instances of one prototype class,
/// tagged `"<name> Iterator"` and deriving from the realm's
/// %ArrayIteratorPrototype%. Each factory has its own prototype and its own
/// brand, so iterators are only accepted by the `next` of the factory
/// that made them, even when two factories share a name.
///
/// ```
/// use idl_iter::*;
///
/// let realm = Realm::new();
/// let factory = IteratorFactory::new(
///     &realm,
///     "Pairs",
///     PairSource::accessor(|_| Ok(Value::from(vec![vec![1, 2]]))),
/// );
/// let iter = factory.create(Value::Undefined, Kind::Value);
/// assert_eq!(factory.next(&iter).unwrap(), IterResult::yielded(Value::from(2)));
/// assert!(factory.next(&iter).unwrap().done);
/// assert_eq!(&*iter.object_to_string(), "[object Pairs Iterator]");
/// ```
#[derive(Clone)]
pub struct IteratorFactory {
    shared: Rc<Shared>,
    prototype: Rc<Class>,
}

impl IteratorFactory {
    pub fn builder<S, P>(name: S, source: P) -> IteratorFactoryBuilder
    where
        S: Into<RcStr>,
        P: Into<PairSource>,
    {
        IteratorFactoryBuilder {
            name: name.into(),
            source: source.into(),
            key_index: PairIndex::Position(0),
            value_index: PairIndex::Position(1),
        }
    }

    /// A factory for plain two element pairs (key first, value second)
    pub fn new<S, P>(realm: &Realm, name: S, source: P) -> Self
    where
        S: Into<RcStr>,
        P: Into<PairSource>,
    {
        Self::builder(name, source).build(realm)
    }

    pub fn name(&self) -> &RcStr {
        &self.shared.name
    }

    /// The `"<name> Iterator"` tag shared by every iterator of this factory
    pub fn tag(&self) -> RcStr {
        format!("{} Iterator", self.shared.name).into()
    }

    pub fn prototype(&self) -> &Rc<Class> {
        &self.prototype
    }

    /// Creates a fresh iterator over `target`, positioned before the first pair
    pub fn create(&self, target: Value, kind: Kind) -> Value {
        let obj = Class::instantiate(&self.prototype);
        obj.set_slot(
            &self.shared.brand,
            Handle::new(IteratorState {
                target,
                kind,
                cursor: 0,
            }),
        );
        obj.into()
    }

    /// Whether `value` is an iterator made by this factory
    pub fn is_instance(&self, value: &Value) -> bool {
        self.shared.state(value).is_ok()
    }

    /// Same as calling the `next` method on `this`
    pub fn next(&self, this: &Value) -> Result<IterResult> {
        self.shared.next(this)
    }

    /// Advances `this` by one pair, returning the raw key and value
    pub(crate) fn step(&self, this: &Value) -> Result<Option<(Value, Value)>> {
        let state = self.shared.state(this)?;
        self.shared.advance(&state)
    }

    /// Snapshot of the iterator's current state
    pub fn inspect<F, R>(&self, this: &Value, f: F) -> Result<R>
    where
        F: FnOnce(&IteratorState) -> R,
    {
        let state = self.shared.state(this)?;
        let state = state.borrow();
        Ok(f(&state))
    }
}

pub struct IteratorFactoryBuilder {
    name: RcStr,
    source: PairSource,
    key_index: PairIndex,
    value_index: PairIndex,
}

impl IteratorFactoryBuilder {
    pub fn key_index<I: Into<PairIndex>>(mut self, index: I) -> Self {
        self.key_index = index.into();
        self
    }
    pub fn value_index<I: Into<PairIndex>>(mut self, index: I) -> Self {
        self.value_index = index.into();
        self
    }
    pub(crate) fn name(&self) -> &RcStr {
        &self.name
    }
    pub fn build(self, realm: &Realm) -> IteratorFactory {
        let tag = format!("{} Iterator", self.name);
        let shared = Rc::new(Shared {
            brand: Symbol::new(format!("{} state", tag)),
            name: self.name,
            source: self.source,
            key_index: self.key_index,
            value_index: self.value_index,
        });

        let prototype = Class::with_base(tag.clone(), realm.array_iterator_prototype().clone());
        let next_shared = shared.clone();
        prototype.set(
            "next",
            NativeFunction::new("next", 0, move |this, _args| {
                Ok(next_shared.next(this)?.into())
            }),
        );
        prototype.set(TO_STRING_TAG_KEY, tag.clone());

        debug!(
            "built iterator factory {:?} (key {}, value {})",
            tag, shared.key_index, shared.value_index
        );

        IteratorFactory { shared, prototype }
    }
}
