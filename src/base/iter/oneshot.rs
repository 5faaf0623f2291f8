use super::*;

/// A standalone iterator over whatever pairs `values` returns.
///
/// Builds a dedicated factory, so the iterator has a prototype of its
/// own that no other iterator shares. `values` is called on every step.
pub fn generate_iterator<S, F>(realm: &Realm, name: S, kind: Kind, values: F) -> Value
where
    S: Into<RcStr>,
    F: Fn() -> Result<Value> + 'static,
{
    generate_iterator_with(realm, name, kind, 0usize, 1usize, values)
}

/// Like `generate_iterator`, with explicit positions of the key and value
/// in each pair
pub fn generate_iterator_with<S, K, V, F>(
    realm: &Realm,
    name: S,
    kind: Kind,
    key_index: K,
    value_index: V,
    values: F,
) -> Value
where
    S: Into<RcStr>,
    K: Into<PairIndex>,
    V: Into<PairIndex>,
    F: Fn() -> Result<Value> + 'static,
{
    IteratorFactory::builder(name, PairSource::accessor(move |_| values()))
        .key_index(key_index)
        .value_index(value_index)
        .build(realm)
        .create(Value::Undefined, kind)
}
