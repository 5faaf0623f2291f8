use super::*;

type NativeBody = Box<dyn Fn(&Value, Vec<Value>) -> Result<Value>>;

/// A function implemented in Rust.
///
/// The body receives the call receiver (`this`) separately from the
/// positional arguments. `arity` is the number of parameters a caller
/// is expected to pass and is informational only; bodies do their own
/// argument checking so that they can report errors in their own words.
pub struct NativeFunction {
    name: RcStr,
    arity: usize,
    body: NativeBody,
}

impl NativeFunction {
    pub fn new<S, B>(name: S, arity: usize, body: B) -> Self
    where
        S: Into<RcStr>,
        B: Fn(&Value, Vec<Value>) -> Result<Value> + 'static,
    {
        Self {
            name: name.into(),
            arity,
            body: Box::new(body),
        }
    }
    pub fn name(&self) -> &RcStr {
        &self.name
    }
    pub fn arity(&self) -> usize {
        self.arity
    }
    pub fn call(&self, this: &Value, args: Vec<Value>) -> Result<Value> {
        (self.body)(this, args)
    }
}

impl cmp::PartialEq for NativeFunction {
    fn eq(&self, other: &Self) -> bool {
        self as *const _ == other as *const _
    }
}

impl fmt::Debug for NativeFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<native function {}>", self.name())
    }
}

impl From<NativeFunction> for Value {
    fn from(func: NativeFunction) -> Self {
        Self::Function(Rc::new(func))
    }
}

impl From<Rc<NativeFunction>> for Value {
    fn from(func: Rc<NativeFunction>) -> Self {
        Self::Function(func)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn receiver_is_passed_separately() {
        let func = NativeFunction::new("pair", 1, |this, args| {
            Ok(Value::from(vec![this.clone(), args[0].clone()]))
        });
        assert_eq!(func.arity(), 1);
        assert_eq!(
            func.call(&Value::from("me"), vec![Value::from(2)]).unwrap(),
            Value::from(vec![Value::from("me"), Value::from(2)])
        );
    }
}
