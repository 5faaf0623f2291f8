mod er;
mod iter;
mod realm;
mod value;

pub use er::*;
pub use iter::*;
pub use realm::*;
pub use value::*;
