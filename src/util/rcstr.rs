use std::borrow;
use std::cmp;
use std::fmt;
use std::hash;
use std::ops;
use std::rc::Rc;

/// Cheaply clonable, immutable string
#[derive(Clone)]
pub struct RcStr(Rc<str>);

impl RcStr {
    pub fn str(&self) -> &str {
        &*self.0
    }
}

impl fmt::Debug for RcStr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", &*self.0)
    }
}

impl fmt::Display for RcStr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", &*self.0)
    }
}

impl borrow::Borrow<str> for RcStr {
    fn borrow(&self) -> &str {
        self.str()
    }
}

impl ops::Deref for RcStr {
    type Target = str;

    fn deref(&self) -> &str {
        self.str()
    }
}

impl AsRef<str> for RcStr {
    fn as_ref(&self) -> &str {
        self.str()
    }
}

impl cmp::PartialOrd for RcStr {
    fn partial_cmp(&self, other: &Self) -> Option<cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl cmp::Ord for RcStr {
    fn cmp(&self, other: &Self) -> cmp::Ordering {
        self.str().cmp(other.str())
    }
}

impl cmp::PartialEq for RcStr {
    fn eq(&self, other: &Self) -> bool {
        self.str() == other.str()
    }
}

impl cmp::Eq for RcStr {}

impl hash::Hash for RcStr {
    fn hash<H: hash::Hasher>(&self, state: &mut H) {
        self.str().hash(state)
    }
}

impl From<String> for RcStr {
    fn from(string: String) -> Self {
        Self(string.into())
    }
}

impl From<&String> for RcStr {
    fn from(string: &String) -> Self {
        Self(string.as_str().into())
    }
}

impl From<&str> for RcStr {
    fn from(s: &str) -> Self {
        Self(s.into())
    }
}

impl From<&RcStr> for RcStr {
    fn from(s: &RcStr) -> Self {
        s.clone()
    }
}
