use crate::RcStr;
use std::fmt;
use std::rc::Rc;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// An iterator's `next` was applied to something that is not
    /// an iterator of the matching factory
    Invocation,

    /// A collection method was applied to something that was not
    /// constructed by the collection's class
    IllegalInvocation,

    /// Too few arguments
    Arity,

    /// An argument or intermediate value had the wrong type
    TypeMismatch,

    /// Anything raised by user code (e.g. a forEach visitor)
    Runtime,
}

impl ErrorKind {
    /// The script-visible name of the error's type
    pub fn type_name(self) -> &'static str {
        match self {
            ErrorKind::Invocation
            | ErrorKind::IllegalInvocation
            | ErrorKind::Arity
            | ErrorKind::TypeMismatch => "TypeError",
            ErrorKind::Runtime => "Error",
        }
    }
}

pub struct ErrorData {
    kind: ErrorKind,
    message: RcStr,
}

#[derive(Clone)]
pub struct Error(Rc<ErrorData>);

impl Error {
    pub fn new(kind: ErrorKind, message: RcStr) -> Self {
        Self(ErrorData { kind, message }.into())
    }
    pub fn rt(message: RcStr) -> Self {
        if message.is_empty() {
            panic!("Empty runtime error message");
        }
        Self::new(ErrorKind::Runtime, message)
    }
    pub fn illegal_invocation() -> Self {
        Self::new(ErrorKind::IllegalInvocation, "Illegal invocation".into())
    }
    pub fn kind(&self) -> ErrorKind {
        self.0.kind
    }
    pub fn type_name(&self) -> &'static str {
        self.0.kind.type_name()
    }
    pub fn message(&self) -> &RcStr {
        &self.0.message
    }
    pub fn format(&self) -> String {
        format!("{}", self)
    }

    /// Whether the two errors are the very same error value
    /// (i.e. one was propagated unchanged into the other)
    pub fn same(&self, other: &Error) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl fmt::Debug for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Error({:?}, {})", self.0.kind, self.0.message)
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.type_name(), self.0.message)
    }
}

impl std::error::Error for Error {}
