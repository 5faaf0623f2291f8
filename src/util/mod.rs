mod rcstr;
mod symbol;

pub use rcstr::RcStr;
pub use symbol::Symbol;
