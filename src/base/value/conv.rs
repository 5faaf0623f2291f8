use super::*;

impl From<()> for Value {
    fn from(_: ()) -> Self {
        Self::Undefined
    }
}

impl From<bool> for Value {
    fn from(x: bool) -> Self {
        Self::Bool(x)
    }
}

macro_rules! from_number_for_value {
    ($t:ty) => {
        impl From<$t> for Value {
            fn from(x: $t) -> Self {
                Self::Number(x as f64)
            }
        }
    };
}

from_number_for_value!(i64);
from_number_for_value!(i32);
from_number_for_value!(u64);
from_number_for_value!(u32);
from_number_for_value!(usize);
from_number_for_value!(f64);

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Self::String(s.into())
    }
}

impl From<&String> for Value {
    fn from(s: &String) -> Self {
        Self::String(s.into())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Self::String(s.into())
    }
}

impl From<RcStr> for Value {
    fn from(s: RcStr) -> Self {
        Self::String(s)
    }
}

impl From<&RcStr> for Value {
    fn from(s: &RcStr) -> Self {
        Self::String(s.clone())
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(opt: Option<T>) -> Self {
        match opt {
            Some(t) => t.into(),
            None => Self::Undefined,
        }
    }
}

macro_rules! try_from_for_int {
    ($t:ty) => {
        impl TryFrom<&Value> for $t {
            type Error = Error;

            fn try_from(v: &Value) -> Result<Self> {
                let x = v.number()?;
                if x < <$t>::MIN as f64
                    || x > <$t>::MAX as f64
                    || !x.is_finite()
                    || x.fract() != 0.0
                {
                    Err(typeerr!(
                        TypeMismatch,
                        concat!("Expected ", stringify!($t), " but got {:?}"),
                        x
                    ))
                } else {
                    Ok(x as $t)
                }
            }
        }
        impl TryFrom<Value> for $t {
            type Error = Error;

            fn try_from(v: Value) -> Result<Self> {
                <$t>::try_from(&v)
            }
        }
    };
}

try_from_for_int!(i64);
try_from_for_int!(i32);
try_from_for_int!(usize);

impl TryFrom<&Value> for RcStr {
    type Error = Error;

    fn try_from(v: &Value) -> Result<Self> {
        v.string().map(Clone::clone)
    }
}
