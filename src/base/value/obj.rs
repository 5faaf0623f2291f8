use super::*;

/// An instance of a class.
///
/// Besides its class, an object only carries internal slots.
/// Slots are keyed by Symbols, so code that was never handed the
/// symbol for a slot can neither read nor forge it.
pub struct Object {
    cls: Rc<Class>,
    slots: RefCell<HashMap<Symbol, Value>>,
}

impl cmp::PartialEq for Object {
    fn eq(&self, other: &Self) -> bool {
        self as *const _ == other as *const _
    }
}

impl fmt::Debug for Object {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<{} object>", self.cls.name())
    }
}

impl Object {
    pub(super) fn new(cls: Rc<Class>) -> Self {
        Self {
            cls,
            slots: RefCell::new(HashMap::new()),
        }
    }
    pub fn cls(&self) -> &Rc<Class> {
        &self.cls
    }
    pub fn slot(&self, key: &Symbol) -> Option<Value> {
        self.slots.borrow().get(key).cloned()
    }
    pub fn has_slot(&self, key: &Symbol) -> bool {
        self.slots.borrow().contains_key(key)
    }
    pub fn set_slot<V: Into<Value>>(&self, key: &Symbol, value: V) {
        self.slots.borrow_mut().insert(key.clone(), value.into());
    }
}

impl From<Rc<Object>> for Value {
    fn from(obj: Rc<Object>) -> Self {
        Self::Object(obj)
    }
}

impl From<&Rc<Object>> for Value {
    fn from(obj: &Rc<Object>) -> Self {
        Self::Object(obj.clone())
    }
}
