use super::*;

/// A class doubles as the prototype of its instances.
///
/// Identity (pointer equality) is what distinguishes a class from any
/// other class with the same name and methods, which is what the
/// brand checks in this crate rely on.
pub struct Class {
    name: RcStr,
    base: Option<Rc<Class>>,
    map: RefCell<HashMap<RcStr, Value>>,
}

impl Class {
    pub fn new<S: Into<RcStr>>(name: S) -> Rc<Self> {
        Rc::new(Self {
            name: name.into(),
            base: None,
            map: RefCell::new(HashMap::new()),
        })
    }
    pub fn with_base<S: Into<RcStr>>(name: S, base: Rc<Class>) -> Rc<Self> {
        Rc::new(Self {
            name: name.into(),
            base: Some(base),
            map: RefCell::new(HashMap::new()),
        })
    }
    pub fn name(&self) -> &RcStr {
        &self.name
    }
    pub fn base(&self) -> Option<&Rc<Class>> {
        self.base.as_ref()
    }

    /// Own attribute only; does not consult base classes
    pub fn get(&self, name: &str) -> Option<Value> {
        self.map.borrow().get(name).cloned()
    }

    /// Attribute lookup along the base class chain
    pub fn lookup(&self, name: &str) -> Option<Value> {
        let mut cls = self;
        loop {
            if let Some(value) = cls.get(name) {
                return Some(value);
            }
            match &cls.base {
                Some(base) => cls = &**base,
                None => return None,
            }
        }
    }

    pub fn set<S: Into<RcStr>, V: Into<Value>>(&self, name: S, value: V) {
        self.map.borrow_mut().insert(name.into(), value.into());
    }

    /// Convenience method for adding a batch of native functions
    pub fn define(&self, funcs: Vec<NativeFunction>) {
        let mut map = self.map.borrow_mut();
        for func in funcs {
            map.insert(func.name().clone(), func.into());
        }
    }

    /// True if this class is `other` or derives from it
    pub fn is_or_extends(&self, other: &Rc<Class>) -> bool {
        let mut cls = self;
        loop {
            if std::ptr::eq(cls, &**other) {
                return true;
            }
            match &cls.base {
                Some(base) => cls = &**base,
                None => return false,
            }
        }
    }

    /// The only way to create an object of this class
    pub fn instantiate(cls: &Rc<Self>) -> Rc<Object> {
        Rc::new(Object::new(cls.clone()))
    }
}

impl cmp::PartialEq for Class {
    fn eq(&self, other: &Self) -> bool {
        self as *const _ == other as *const _
    }
}

impl fmt::Debug for Class {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<class {}>", self.name)
    }
}

/// Returns the class that the given weak reference points to,
/// or an illegal invocation error if the class is gone
pub(crate) fn upgrade_class(cls: &Weak<Class>) -> Result<Rc<Class>> {
    cls.upgrade().ok_or_else(Error::illegal_invocation)
}
