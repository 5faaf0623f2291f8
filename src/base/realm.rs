use crate::Class;
use crate::NativeFunction;
use crate::Value;
use crate::ITERATOR_KEY;
use crate::TO_STRING_TAG_KEY;
use std::rc::Rc;

/// Intrinsic objects shared by everything created against one realm.
///
/// Nothing here is process-global: two realms have distinct intrinsics,
/// and iterator factories built against one realm chain their
/// prototypes to that realm's intrinsics only.
pub struct Realm {
    array_iterator_prototype: Rc<Class>,
}

impl Realm {
    pub fn new() -> Self {
        Self {
            array_iterator_prototype: new_array_iterator_prototype(),
        }
    }

    /// %ArrayIteratorPrototype%
    ///
    /// Anything deriving from this is an iterable iterator:
    /// its `@@iterator` returns the iterator itself.
    pub fn array_iterator_prototype(&self) -> &Rc<Class> {
        &self.array_iterator_prototype
    }
}

impl Default for Realm {
    fn default() -> Self {
        Self::new()
    }
}

fn new_array_iterator_prototype() -> Rc<Class> {
    let cls = Class::new("Array Iterator");
    cls.set(TO_STRING_TAG_KEY, "Array Iterator");
    cls.set(
        ITERATOR_KEY,
        NativeFunction::new("[Symbol.iterator]", 0, |this, _args| Ok(this.clone())),
    );
    cls
}
