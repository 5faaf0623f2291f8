/// Utility for constructing runtime errors
#[macro_export]
macro_rules! rterr {
    ( $($args:expr),+ $(,)?) => {
        $crate::Error::rt(format!( $($args),+ ).into())
    };
}

/// Utility for constructing type errors of a given kind
#[macro_export]
macro_rules! typeerr {
    ($kind:ident, $($args:expr),+ $(,)?) => {
        $crate::Error::new(
            $crate::ErrorKind::$kind,
            format!( $($args),+ ).into())
    };
}

mod base;
mod util;

pub extern crate indexmap;

pub use base::*;
pub use indexmap::IndexMap;
pub use util::*;
