use super::*;

/// Opaque native data stored inside a Value.
/// Handles are typically kept in internal slots, where they are out of
/// reach of anything that doesn't hold the slot's Symbol.
pub struct HandleData {
    typename: &'static str,
    data: RefCell<Box<dyn Any>>,
}

impl HandleData {
    pub fn typename(&self) -> &'static str {
        self.typename
    }
    pub fn is<T: Any>(&self) -> bool {
        self.data.borrow().is::<T>()
    }
    pub fn downcast<T: Any>(data: Rc<HandleData>) -> Result<Handle<T>> {
        if data.is::<T>() {
            Ok(Handle(data, PhantomData))
        } else {
            Err(typeerr!(
                TypeMismatch,
                "Expected {}/handle value, but got {}/handle value",
                std::any::type_name::<T>(),
                data.typename
            ))
        }
    }
}

impl cmp::PartialEq for HandleData {
    fn eq(&self, other: &Self) -> bool {
        (self as *const Self).eq(&(other as *const Self))
    }
}

impl fmt::Debug for HandleData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<{} native value>", self.typename())
    }
}

pub struct Handle<T: Any>(Rc<HandleData>, PhantomData<T>);

impl<T: Any> Handle<T> {
    pub fn new(data: T) -> Self {
        Self(
            Rc::new(HandleData {
                typename: std::any::type_name::<T>(),
                data: RefCell::new(Box::new(data)),
            }),
            PhantomData,
        )
    }
    pub fn borrow(&self) -> Ref<T> {
        // the type was checked when the handle was created or downcast
        Ref::map(self.0.data.borrow(), |r| match r.downcast_ref() {
            Some(t) => t,
            None => unreachable!(),
        })
    }
    pub fn borrow_mut(&self) -> RefMut<T> {
        RefMut::map(self.0.data.borrow_mut(), |r| match r.downcast_mut() {
            Some(t) => t,
            None => unreachable!(),
        })
    }
}

impl<T: Any> Clone for Handle<T> {
    fn clone(&self) -> Self {
        Self(self.0.clone(), PhantomData)
    }
}

impl<T: Any> From<Handle<T>> for Value {
    fn from(handle: Handle<T>) -> Self {
        Self::Handle(handle.0)
    }
}

impl<T: Any> TryFrom<&Value> for Handle<T> {
    type Error = Error;

    fn try_from(value: &Value) -> Result<Self> {
        match value {
            Value::Handle(data) => HandleData::downcast(data.clone()),
            _ => Err(typeerr!(
                TypeMismatch,
                "Expected {}/handle value, but got {:?}",
                std::any::type_name::<T>(),
                value
            )),
        }
    }
}
