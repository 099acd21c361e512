//! Query parameters.
//!
//! Parameters follow the bracket syntax of HTML form submissions:
//! `a[]=1&a[]=2` is a list, `a[k]=v` a nested map.

use core::cmp::Ordering;

use indexmap::map::{self, IndexMap};

use crate::percent_encoding;

/// Parameter value: a string, or nested parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Value {
    /// Plain string value.
    String(String),
    /// Nested parameters. Lists use the keys `"0"`, `"1"`, ...
    Array(Parameters),
}

impl Value {
    /// Creates a list value from strings.
    ///
    /// # Examples
    ///
    /// ```
    /// use urlnorm::component::{Parameters, Value};
    ///
    /// let params = Parameters::parse("a[]=bc&a[]=de");
    /// assert_eq!(params.get("a"), Some(&Value::list(["bc", "de"])));
    /// ```
    #[must_use]
    pub fn list<I, S>(items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<Value>,
    {
        let mut params = Parameters::new();
        for (index, item) in items.into_iter().enumerate() {
            params.insert(index.to_string(), item);
        }
        Self::Array(params)
    }

    /// Returns the string value, if this is not an array.
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s),
            Self::Array(_) => None,
        }
    }

    /// Returns the nested parameters, if this is an array.
    #[inline]
    #[must_use]
    pub fn as_array(&self) -> Option<&Parameters> {
        match self {
            Self::String(_) => None,
            Self::Array(params) => Some(params),
        }
    }
}

impl From<&str> for Value {
    #[inline]
    fn from(s: &str) -> Self {
        Self::String(s.to_owned())
    }
}

impl From<String> for Value {
    #[inline]
    fn from(s: String) -> Self {
        Self::String(s)
    }
}

impl From<Parameters> for Value {
    #[inline]
    fn from(params: Parameters) -> Self {
        Self::Array(params)
    }
}

/// Insertion-ordered query parameters.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Parameters(IndexMap<String, Value>);

impl Parameters {
    /// Creates empty parameters.
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses a query string (without `?`).
    ///
    /// Keys and values are form-decoded. A pair without `=` has an empty
    /// value, pairs with an empty key are skipped, and a key whose first `[`
    /// is never closed is taken literally.
    ///
    /// # Examples
    ///
    /// ```
    /// use urlnorm::component::{Parameters, Value};
    ///
    /// let params = Parameters::parse("a[0]=bc&a[1]=de&q");
    /// assert_eq!(params.get("a"), Some(&Value::list(["bc", "de"])));
    /// assert_eq!(params.get("q"), Some(&Value::from("")));
    /// ```
    #[must_use]
    pub fn parse(query: &str) -> Self {
        let mut params = Self::new();
        for pair in query.split('&').filter(|pair| !pair.is_empty()) {
            let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
            let key = percent_encoding::form_decode(key);
            let value = percent_encoding::form_decode(value);
            let (name, subkeys) = split_key(&key);
            if name.is_empty() {
                continue;
            }
            params.insert_nested(name, &subkeys, value);
        }
        params
    }

    /// Returns the value of the parameter.
    #[inline]
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// Returns `true` if the parameter exists.
    #[inline]
    #[must_use]
    pub fn has(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    /// Sets a parameter, returning the previous value.
    ///
    /// A new key goes last; an existing key keeps its position.
    #[inline]
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        self.0.insert(key.into(), value.into())
    }

    /// Sets every given parameter.
    pub fn add<I, K, V>(&mut self, params: I)
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<Value>,
    {
        for (key, value) in params {
            self.insert(key, value);
        }
    }

    /// Removes the given keys, keeping the order of the rest.
    pub fn remove<I, K>(&mut self, keys: I)
    where
        I: IntoIterator<Item = K>,
        K: AsRef<str>,
    {
        for key in keys {
            self.0.shift_remove(key.as_ref());
        }
    }

    /// Keeps only the given keys.
    pub fn filter<I, K>(&mut self, keys: I)
    where
        I: IntoIterator<Item = K>,
        K: AsRef<str>,
    {
        let keep: Vec<K> = keys.into_iter().collect();
        self.0
            .retain(|key, _| keep.iter().any(|k| k.as_ref() == key.as_str()));
    }

    /// Keeps only the parameters for which the predicate returns `true`.
    #[inline]
    pub fn retain(&mut self, f: impl FnMut(&String, &mut Value) -> bool) {
        self.0.retain(f);
    }

    /// Returns the number of top-level parameters.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if there are no parameters.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns an iterator over the top-level parameters.
    #[inline]
    pub fn iter(&self) -> map::Iter<'_, String, Value> {
        self.0.iter()
    }

    /// Sorts the parameters by key, recursing into arrays.
    ///
    /// Integer keys come first, in numeric order; other keys follow in
    /// lexicographic order.
    pub fn sort_recursive(&mut self) {
        self.0.sort_by(|k1, _, k2, _| compare_keys(k1, k2));
        for value in self.0.values_mut() {
            if let Value::Array(nested) = value {
                nested.sort_recursive();
            }
        }
    }

    /// Serializes the parameters as a form-encoded query string.
    ///
    /// Nested keys are written `a[k]` and then encoded as a whole.
    ///
    /// # Examples
    ///
    /// ```
    /// use urlnorm::component::{Parameters, Value};
    ///
    /// let mut params = Parameters::new();
    /// params.insert("a", Value::list(["bc", "de"]));
    /// assert_eq!(params.to_query_string(), "a%5B0%5D=bc&a%5B1%5D=de");
    /// ```
    #[must_use]
    pub fn to_query_string(&self) -> String {
        let mut pairs = Vec::new();
        for (key, value) in &self.0 {
            collect_pairs(key.clone(), value, &mut pairs);
        }
        pairs.join("&")
    }

    /// Sets a value under `name[subkeys[0]][subkeys[1]]...`.
    fn insert_nested(&mut self, name: &str, subkeys: &[&str], value: String) {
        let Some((first, rest)) = subkeys.split_first() else {
            self.insert(name, value);
            return;
        };
        let slot = self
            .0
            .entry(name.to_owned())
            .or_insert_with(|| Value::Array(Parameters::new()));
        if !matches!(slot, Value::Array(_)) {
            *slot = Value::Array(Parameters::new());
        }
        if let Value::Array(nested) = slot {
            let key = if first.is_empty() {
                let Some(index) = nested.next_index() else {
                    tracing::debug!(key = name, "no free index for `[]`, value dropped");
                    return;
                };
                index.to_string()
            } else {
                (*first).to_owned()
            };
            nested.insert_nested(&key, rest, value);
        }
    }

    /// Returns the index used by an empty `[]`: one more than the largest
    /// integer key, or zero.
    ///
    /// Returns `None` when the largest key is `u64::MAX`.
    fn next_index(&self) -> Option<u64> {
        match self.0.keys().filter_map(|key| integer_key(key)).max() {
            Some(max) => max.checked_add(1),
            None => Some(0),
        }
    }
}

impl<'a> IntoIterator for &'a Parameters {
    type Item = (&'a String, &'a Value);
    type IntoIter = map::Iter<'a, String, Value>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl<K, V> FromIterator<(K, V)> for Parameters
where
    K: Into<String>,
    V: Into<Value>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut params = Self::new();
        params.add(iter);
        params
    }
}

/// Splits `a[b][c]` into `("a", ["b", "c"])`.
///
/// If the first `[` is unclosed the key is returned whole. Text after the
/// last well-formed group is ignored.
fn split_key(key: &str) -> (&str, Vec<&str>) {
    let Some(open) = key.find('[') else {
        return (key, Vec::new());
    };
    if !key[open..].contains(']') {
        return (key, Vec::new());
    }
    let name = &key[..open];
    let mut subkeys = Vec::new();
    let mut rest = &key[open..];
    while let Some(inner) = rest.strip_prefix('[') {
        let Some(close) = inner.find(']') else {
            break;
        };
        subkeys.push(&inner[..close]);
        rest = &inner[close + 1..];
    }
    (name, subkeys)
}

/// Returns the key as an integer if it is written in canonical decimal form.
fn integer_key(key: &str) -> Option<u64> {
    let n: u64 = key.parse().ok()?;
    (n.to_string() == key).then_some(n)
}

/// Orders integer keys numerically before all other keys.
fn compare_keys(k1: &str, k2: &str) -> Ordering {
    match (integer_key(k1), integer_key(k2)) {
        (Some(n1), Some(n2)) => n1.cmp(&n2),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => k1.cmp(k2),
    }
}

/// Appends the encoded `key=value` pairs of the value.
fn collect_pairs(key: String, value: &Value, pairs: &mut Vec<String>) {
    match value {
        Value::String(s) => pairs.push(format!(
            "{}={}",
            percent_encoding::form_encode(&key),
            percent_encoding::form_encode(s)
        )),
        Value::Array(nested) => {
            for (subkey, subvalue) in nested {
                collect_pairs(format!("{key}[{subkey}]"), subvalue, pairs);
            }
        }
    }
}
