use super::*;

/// Wrapper around RefCell<Vec<Value>>
/// Having a wrapper keeps the possibility open for e.g.
/// caching hash values, or mutability locks
#[derive(PartialEq)]
pub struct List {
    vec: RefCell<Vec<Value>>,
}

impl List {
    pub fn new(vec: Vec<Value>) -> Self {
        Self {
            vec: RefCell::new(vec),
        }
    }
    pub fn borrow(&self) -> Ref<Vec<Value>> {
        self.vec.borrow()
    }
    pub fn borrow_mut(&self) -> RefMut<Vec<Value>> {
        self.vec.borrow_mut()
    }
    pub fn len(&self) -> usize {
        self.vec.borrow().len()
    }
    pub fn into_inner(self) -> Vec<Value> {
        self.vec.into_inner()
    }
}

/// Insertion ordered, string keyed map of values.
/// Iterator results are records with `value` and `done` fields.
#[derive(PartialEq)]
pub struct Record {
    map: RefCell<IndexMap<RcStr, Value>>,
}

impl Record {
    pub fn new() -> Self {
        Self {
            map: RefCell::new(IndexMap::new()),
        }
    }
    pub fn borrow(&self) -> Ref<IndexMap<RcStr, Value>> {
        self.map.borrow()
    }
    pub fn borrow_mut(&self) -> RefMut<IndexMap<RcStr, Value>> {
        self.map.borrow_mut()
    }
    pub fn get(&self, key: &str) -> Option<Value> {
        self.map.borrow().get(key).cloned()
    }
    pub fn insert<K: Into<RcStr>, V: Into<Value>>(&self, key: K, value: V) {
        self.map.borrow_mut().insert(key.into(), value.into());
    }
    pub fn into_inner(self) -> IndexMap<RcStr, Value> {
        self.map.into_inner()
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(vec: Vec<T>) -> Self {
        Self::List(Rc::new(List::new(vec.into_iter().map(T::into).collect())))
    }
}

impl From<Rc<List>> for Value {
    fn from(list: Rc<List>) -> Self {
        Self::List(list)
    }
}

impl From<&Rc<List>> for Value {
    fn from(list: &Rc<List>) -> Self {
        Self::List(list.clone())
    }
}

impl From<IndexMap<RcStr, Value>> for Value {
    fn from(map: IndexMap<RcStr, Value>) -> Self {
        Self::Record(Rc::new(Record {
            map: RefCell::new(map),
        }))
    }
}

impl From<Record> for Value {
    fn from(record: Record) -> Self {
        Self::Record(Rc::new(record))
    }
}

impl From<Rc<Record>> for Value {
    fn from(record: Rc<Record>) -> Self {
        Self::Record(record)
    }
}
