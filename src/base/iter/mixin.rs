use super::*;
use crate::upgrade_class;
use std::rc::Weak;

/// Installs the iterable collection methods on a class:
/// `keys`, `values`, `entries`, `forEach` and `@@iterator`
/// (the last one being the very same function as `entries`).
///
/// Every installed method first checks that its receiver was constructed
/// by the class (or a class deriving from it), and fails with
/// "Illegal invocation" otherwise.
///
/// ```
/// use idl_iter::*;
///
/// let realm = Realm::new();
/// let cls = Class::new("Params");
/// let pairs = Symbol::new("pairs");
/// CollectionMixin::new("Params", &pairs).install(&realm, &cls);
///
/// let params = Class::instantiate(&cls);
/// params.set_slot(&pairs, vec![vec!["q", "rust"]]);
/// let keys = Value::from(params).apply_method("keys", vec![]).unwrap();
/// let keys: Vec<Value> = keys.iterate().unwrap().collect::<Result<_>>().unwrap();
/// assert_eq!(keys, vec![Value::from("q")]);
/// ```
pub struct CollectionMixin {
    factory: IteratorFactoryBuilder,
}

impl CollectionMixin {
    pub fn new<S, P>(name: S, source: P) -> Self
    where
        S: Into<RcStr>,
        P: Into<PairSource>,
    {
        Self {
            factory: IteratorFactory::builder(name, source),
        }
    }
    pub fn key_index<I: Into<PairIndex>>(mut self, index: I) -> Self {
        self.factory = self.factory.key_index(index);
        self
    }
    pub fn value_index<I: Into<PairIndex>>(mut self, index: I) -> Self {
        self.factory = self.factory.value_index(index);
        self
    }

    /// Adds the methods to `cls`, replacing any existing methods with the
    /// same names, and returns `cls`.
    pub fn install(self, realm: &Realm, cls: &Rc<Class>) -> Rc<Class> {
        let name = self.factory.name().clone();
        let factory = self.factory.build(realm);

        let entries = iterator_method("entries", Kind::KeyValue, cls, &factory);
        cls.set("keys", iterator_method("keys", Kind::Key, cls, &factory));
        cls.set("values", iterator_method("values", Kind::Value, cls, &factory));
        cls.set("entries", entries.clone());
        cls.set("forEach", for_each(name.clone(), cls, factory));
        cls.set(ITERATOR_KEY, entries);

        debug!("installed iterable methods of {:?} on {:?}", name, cls);
        cls.clone()
    }
}

/// Shorthand for `CollectionMixin::new(name, source).install(realm, cls)`
pub fn iterator_mixin<S, P>(realm: &Realm, name: S, cls: &Rc<Class>, source: P) -> Rc<Class>
where
    S: Into<RcStr>,
    P: Into<PairSource>,
{
    CollectionMixin::new(name, source).install(realm, cls)
}

// The installed methods live in the class's own method table,
// so they may only refer back to the class weakly.
fn brand_check(this: &Value, cls: &Weak<Class>) -> Result<()> {
    let cls = upgrade_class(cls)?;
    match this {
        Value::Object(obj) if obj.cls().is_or_extends(&cls) => Ok(()),
        _ => Err(Error::illegal_invocation()),
    }
}

fn iterator_method(name: &str, kind: Kind, cls: &Rc<Class>, factory: &IteratorFactory) -> Value {
    let cls = Rc::downgrade(cls);
    let factory = factory.clone();
    NativeFunction::new(name, 0, move |this, _args| {
        brand_check(this, &cls)?;
        Ok(factory.create(this.clone(), kind))
    })
    .into()
}

fn for_each(name: RcStr, cls: &Rc<Class>, factory: IteratorFactory) -> Value {
    let cls = Rc::downgrade(cls);
    NativeFunction::new("forEach", 1, move |this, args| {
        brand_check(this, &cls)?;
        let mut args = args.into_iter();
        let visit = match args.next() {
            Some(visit) => visit,
            None => {
                return Err(typeerr!(
                    Arity,
                    "Failed to execute 'forEach' on '{}': 1 argument required, but only 0 present.",
                    name
                ))
            }
        };
        if !visit.is_callable() {
            return Err(typeerr!(
                TypeMismatch,
                "Failed to execute 'forEach' on '{}': parameter 1 is not of type 'Function'.",
                name
            ));
        }
        let this_arg = args.next().unwrap_or(Value::Undefined);

        // pairs are fetched afresh on every step, so changes the visitor
        // makes to the collection are seen by the rest of the loop
        let iter = factory.create(this.clone(), Kind::KeyValue);
        while let Some((key, value)) = factory.step(&iter)? {
            visit.call(&this_arg, vec![value, key, this.clone()])?;
        }
        Ok(Value::Undefined)
    })
    .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ErrorKind;
    use proptest::prelude::*;
    use std::cell::RefCell;

    struct Fixture {
        realm: Realm,
        cls: Rc<Class>,
        pairs: Symbol,
    }

    impl Fixture {
        fn new(name: &str) -> Self {
            let realm = Realm::new();
            let cls = Class::new(name);
            let pairs = Symbol::new("pairs");
            let installed = CollectionMixin::new(name, &pairs).install(&realm, &cls);
            assert!(Rc::ptr_eq(&installed, &cls));
            Self { realm, cls, pairs }
        }

        fn instance(&self, items: &[(i64, &str)]) -> Value {
            let obj = Class::instantiate(&self.cls);
            obj.set_slot(
                &self.pairs,
                items
                    .iter()
                    .map(|(k, v)| Value::from(vec![Value::from(*k), Value::from(*v)]))
                    .collect::<Vec<_>>(),
            );
            obj.into()
        }

        fn pair_list(&self, target: &Value) -> Rc<crate::List> {
            target
                .object()
                .unwrap()
                .slot(&self.pairs)
                .unwrap()
                .list()
                .unwrap()
                .clone()
        }
    }

    fn collect(value: Value) -> Vec<Value> {
        value.iterate().unwrap().collect::<Result<_>>().unwrap()
    }

    fn recorder() -> (Value, Rc<RefCell<Vec<(Value, Vec<Value>)>>>) {
        let calls = Rc::new(RefCell::new(Vec::new()));
        let log = calls.clone();
        let visit = NativeFunction::new("visit", 3, move |this, args| {
            log.borrow_mut().push((this.clone(), args));
            Ok(Value::Undefined)
        });
        (visit.into(), calls)
    }

    fn pair(k: i64, v: &str) -> Value {
        Value::from(vec![Value::from(k), Value::from(v)])
    }

    #[test]
    fn keys_values_entries() {
        let fx = Fixture::new("Dict");
        let dict = fx.instance(&[(1, "a"), (2, "b")]);

        let keys = collect(dict.apply_method("keys", vec![]).unwrap());
        let values = collect(dict.apply_method("values", vec![]).unwrap());
        let entries = collect(dict.apply_method("entries", vec![]).unwrap());
        assert_eq!(keys, vec![Value::from(1), Value::from(2)]);
        assert_eq!(values, vec![Value::from("a"), Value::from("b")]);
        assert_eq!(entries, vec![pair(1, "a"), pair(2, "b")]);

        // default iteration is entries()
        assert_eq!(collect(dict.clone()), entries);
        assert_eq!(fx.cls.get(ITERATOR_KEY), fx.cls.get("entries"));
    }

    #[test]
    fn iterators_are_fresh_and_tagged() {
        let fx = Fixture::new("Dict");
        let dict = fx.instance(&[(1, "a")]);
        let a = dict.apply_method("entries", vec![]).unwrap();
        let b = dict.apply_method("entries", vec![]).unwrap();
        assert_ne!(a, b);
        assert!(Rc::ptr_eq(a.object().unwrap().cls(), b.object().unwrap().cls()));
        assert_eq!(&*a.object_to_string(), "[object Dict Iterator]");
        assert!(a
            .object()
            .unwrap()
            .cls()
            .is_or_extends(fx.realm.array_iterator_prototype()));

        a.apply_method("next", vec![]).unwrap();
        assert_eq!(collect(b), vec![pair(1, "a")]);
        assert_eq!(collect(a), Vec::<Value>::new());
    }

    #[test]
    fn illegal_invocation() {
        let fx = Fixture::new("Dict");
        // same name, same methods, same slot: still not a Dict
        let lookalike = Fixture {
            realm: Realm::new(),
            cls: Class::new("Dict"),
            pairs: fx.pairs.clone(),
        };
        CollectionMixin::new("Dict", &fx.pairs).install(&lookalike.realm, &lookalike.cls);
        let impostor = lookalike.instance(&[(1, "a")]);
        let dict = fx.instance(&[(1, "a")]);
        let (visit, calls) = recorder();

        for method in &["keys", "values", "entries", "forEach", ITERATOR_KEY] {
            let func = dict.lookup(method).unwrap();
            for receiver in &[impostor.clone(), Value::Undefined, Value::from(vec![pair(1, "a")])] {
                let err = func.call(receiver, vec![visit.clone()]).unwrap_err();
                assert_eq!(err.kind(), ErrorKind::IllegalInvocation);
                assert_eq!(err.format(), "TypeError: Illegal invocation");
            }
        }
        assert!(calls.borrow().is_empty());
    }

    #[test]
    fn subclass_instances_pass_brand_check() {
        let fx = Fixture::new("Dict");
        let sub = Class::with_base("SubDict", fx.cls.clone());
        let obj = Class::instantiate(&sub);
        obj.set_slot(&fx.pairs, vec![pair(7, "x")]);
        assert_eq!(collect(obj.into()), vec![pair(7, "x")]);
    }

    #[test]
    fn for_each_visits_in_order() {
        let fx = Fixture::new("Dict");
        let dict = fx.instance(&[(1, "a"), (2, "b")]);
        let (visit, calls) = recorder();

        let ret = dict.apply_method("forEach", vec![visit]).unwrap();
        assert_eq!(ret, Value::Undefined);
        let calls = calls.borrow();
        assert_eq!(calls.len(), 2);
        assert_eq!(calls[0].0, Value::Undefined);
        assert_eq!(calls[0].1, vec![Value::from("a"), Value::from(1), dict.clone()]);
        assert_eq!(calls[1].1, vec![Value::from("b"), Value::from(2), dict.clone()]);
    }

    #[test]
    fn for_each_this_arg() {
        let fx = Fixture::new("Dict");
        let dict = fx.instance(&[(1, "a")]);
        let (visit, calls) = recorder();
        let receiver = Value::from("receiver");

        dict.apply_method("forEach", vec![visit, receiver.clone()])
            .unwrap();
        assert_eq!(calls.borrow()[0].0, receiver);
    }

    #[test]
    fn for_each_argument_errors() {
        let fx = Fixture::new("FormData");
        let dict = fx.instance(&[(1, "a")]);

        let err = dict.apply_method("forEach", vec![]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Arity);
        assert_eq!(
            err.message().str(),
            "Failed to execute 'forEach' on 'FormData': 1 argument required, but only 0 present."
        );

        for arg in vec![Value::Undefined, Value::from(1), Value::from("f"), dict.clone()] {
            let err = dict.apply_method("forEach", vec![arg]).unwrap_err();
            assert_eq!(err.kind(), ErrorKind::TypeMismatch);
            assert_eq!(
                err.message().str(),
                "Failed to execute 'forEach' on 'FormData': parameter 1 is not of type 'Function'."
            );
        }
        assert_eq!(fx.cls.get("forEach").map(|f| match f {
            Value::Function(f) => f.arity(),
            _ => 0,
        }), Some(1));
    }

    #[test]
    fn for_each_propagates_visitor_error() {
        let fx = Fixture::new("Dict");
        let dict = fx.instance(&[(1, "a"), (2, "b"), (3, "c")]);
        let thrown = rterr!("visitor failed");
        let raised = thrown.clone();
        let count = Rc::new(RefCell::new(0));
        let counter = count.clone();
        let visit = NativeFunction::new("visit", 3, move |_, _| {
            *counter.borrow_mut() += 1;
            if *counter.borrow() == 2 {
                Err(raised.clone())
            } else {
                Ok(Value::Undefined)
            }
        });

        let err = dict.apply_method("forEach", vec![visit.into()]).unwrap_err();
        assert!(err.same(&thrown));
        assert_eq!(*count.borrow(), 2);
    }

    #[test]
    fn for_each_sees_live_mutation() {
        // removing the pair after the current one from inside the visitor
        // means the loop never visits it
        let fx = Fixture::new("Dict");
        let dict = fx.instance(&[(1, "a"), (2, "b"), (3, "c")]);
        let list = fx.pair_list(&dict);
        let seen = Rc::new(RefCell::new(Vec::new()));
        let log = seen.clone();
        let visit = NativeFunction::new("visit", 3, move |_, args| {
            if args[1] == Value::from(1) {
                list.borrow_mut().remove(1);
            }
            log.borrow_mut().push(args[1].clone());
            Ok(Value::Undefined)
        });

        dict.apply_method("forEach", vec![visit.into()]).unwrap();
        assert_eq!(*seen.borrow(), vec![Value::from(1), Value::from(3)]);
    }

    #[test]
    fn accessor_source_with_field_indices() {
        let realm = Realm::new();
        let cls = Class::new("Headers");
        let entries = Symbol::new("header list");
        let key = entries.clone();
        CollectionMixin::new(
            "Headers",
            PairSource::accessor(move |target| {
                Ok(target.object()?.slot(&key).unwrap_or_else(|| Value::from(Vec::<Value>::new())))
            }),
        )
        .key_index("name")
        .value_index("value")
        .install(&realm, &cls);

        let headers = Class::instantiate(&cls);
        let headers = Value::from(headers);
        assert_eq!(collect(headers.clone()), Vec::<Value>::new());

        let header = Record::new();
        header.insert("name", "accept");
        header.insert("value", "*/*");
        headers.object().unwrap().set_slot(&entries, vec![Value::from(header)]);
        assert_eq!(
            collect(headers.apply_method("entries", vec![]).unwrap()),
            vec![Value::from(vec!["accept", "*/*"])]
        );
    }

    #[test]
    fn dropped_class_rejects_calls() {
        let realm = Realm::new();
        let cls = Class::new("Gone");
        iterator_mixin(&realm, "Gone", &cls, Symbol::new("pairs"));
        let keys = cls.get("keys").unwrap();
        let obj = Value::from(Class::instantiate(&cls));
        drop(cls);
        // the instance keeps its class alive
        assert!(keys.call(&obj, vec![]).is_ok());
        drop(obj);
        assert_eq!(
            keys.call(&Value::Undefined, vec![]).unwrap_err().kind(),
            ErrorKind::IllegalInvocation
        );
    }

    proptest! {
        #[test]
        fn for_each_call_count_and_abort(
            keys in prop::collection::vec(any::<i32>(), 0..12),
            fail_at in 0usize..14,
        ) {
            let fx = Fixture::new("Prop");
            let obj = Class::instantiate(&fx.cls);
            obj.set_slot(
                &fx.pairs,
                keys.iter().map(|k| Value::from(vec![Value::from(*k), Value::from(k.to_string())])).collect::<Vec<_>>(),
            );
            let dict = Value::from(obj);

            let calls = Rc::new(RefCell::new(Vec::new()));
            let log = calls.clone();
            let visit = NativeFunction::new("visit", 3, move |_, args| {
                log.borrow_mut().push(args[1].clone());
                if log.borrow().len() == fail_at + 1 {
                    Err(rterr!("stop"))
                } else {
                    Ok(Value::Undefined)
                }
            });

            let result = dict.apply_method("forEach", vec![visit.into()]);
            let expected: Vec<Value> = keys.iter().take(fail_at + 1).map(|k| Value::from(*k)).collect();
            prop_assert_eq!(&*calls.borrow(), &expected);
            prop_assert_eq!(result.is_err(), fail_at < keys.len());

            // default iteration and entries() agree
            let by_default = collect(dict.clone());
            let by_entries = collect(dict.apply_method("entries", vec![]).unwrap());
            prop_assert_eq!(by_default, by_entries);
        }
    }
}
