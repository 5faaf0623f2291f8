use crate::RcStr;
use std::cell::Cell;
use std::cmp;
use std::fmt;
use std::hash;

thread_local! {
    static NEXT_ID: Cell<usize> = Cell::new(0);
}

/// A unique, unforgeable key for internal slots.
///
/// Every call to `Symbol::new` produces a symbol that compares unequal to
/// every other symbol ever created on this thread, even if the descriptions
/// match. The only way to get hold of an existing symbol is to be handed
/// a clone of it.
///
/// Borrow<str> is not implemented for Symbol: the description is
/// informational only and plays no part in Eq, Ord or Hash.
#[derive(Clone)]
pub struct Symbol {
    id: usize,
    description: RcStr,
}

impl Symbol {
    pub fn new<S: Into<RcStr>>(description: S) -> Self {
        let id = NEXT_ID.with(|next| {
            let id = next.get();
            next.set(id + 1);
            id
        });
        Self {
            id,
            description: description.into(),
        }
    }

    pub fn id(&self) -> usize {
        self.id
    }

    pub fn description(&self) -> &RcStr {
        &self.description
    }
}

impl fmt::Debug for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Symbol({})", self.description)
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

impl cmp::PartialOrd for Symbol {
    fn partial_cmp(&self, other: &Self) -> Option<cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl cmp::Ord for Symbol {
    fn cmp(&self, other: &Self) -> cmp::Ordering {
        self.id.cmp(&other.id)
    }
}

impl cmp::PartialEq for Symbol {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl cmp::Eq for Symbol {}

impl hash::Hash for Symbol {
    fn hash<H: hash::Hasher>(&self, state: &mut H) {
        self.id.hash(state)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn same_description_different_symbol() {
        let a = Symbol::new("pairs");
        let b = Symbol::new("pairs");
        assert_ne!(a, b);
        assert_eq!(a, a.clone());
        assert_eq!(a.description(), b.description());

        let set: HashSet<Symbol> = vec![a.clone(), b, a].into_iter().collect();
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn debug_shows_description() {
        assert_eq!(format!("{:?}", Symbol::new("internal Object")), "Symbol(internal Object)");
    }
}
