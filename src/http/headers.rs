//! HTTP headers abstraction for [`Message`](crate::http::message::Message)
//!
//! Headers are stored in an ordered map to preserve insertion order. Names keep
//! the casing they were first inserted with, but every lookup compares names
//! ignoring ASCII case, so `Content-Type` and `content-type` always address the
//! same entry. Each name maps to one or more string values.
//!
//! The case-insensitive lookup is a linear scan over stored names rather than a
//! folded key, which is what lets [`HttpHeaders::iter`] hand back the original
//! display casing.
//!
//! This abstraction does not enforce any HTTP grammar on names or values.

use indexmap::IndexMap;

/// Header values given to a mutator: a single string or a sequence of strings.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct HeaderValues(Vec<String>);

impl HeaderValues {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn into_vec(self) -> Vec<String> {
        self.0
    }
}

impl From<&str> for HeaderValues {
    fn from(value: &str) -> Self {
        Self(vec![value.to_string()])
    }
}

impl From<String> for HeaderValues {
    fn from(value: String) -> Self {
        Self(vec![value])
    }
}

impl From<&String> for HeaderValues {
    fn from(value: &String) -> Self {
        Self(vec![value.clone()])
    }
}

impl From<Vec<String>> for HeaderValues {
    fn from(values: Vec<String>) -> Self {
        Self(values)
    }
}

impl From<Vec<&str>> for HeaderValues {
    fn from(values: Vec<&str>) -> Self {
        Self(values.into_iter().map(str::to_string).collect())
    }
}

impl From<&[&str]> for HeaderValues {
    fn from(values: &[&str]) -> Self {
        Self(values.iter().map(|v| v.to_string()).collect())
    }
}

impl From<&[String]> for HeaderValues {
    fn from(values: &[String]) -> Self {
        Self(values.to_vec())
    }
}

impl<const N: usize> From<[&str; N]> for HeaderValues {
    fn from(values: [&str; N]) -> Self {
        Self(values.into_iter().map(str::to_string).collect())
    }
}

#[derive(Debug, Clone, Default)]
pub struct HttpHeaders {
    headers: IndexMap<String, Vec<String>>,
}

impl HttpHeaders {
    pub fn new() -> Self {
        Self {
            headers: IndexMap::new(),
        }
    }

    /// Returns the stored name matching `name` ignoring ASCII case, or `name`
    /// itself when nothing matches.
    ///
    /// Every mutator resolves its target key through here, so at most one
    /// stored name can ever match.
    pub fn matching_name_or<'a>(&'a self, name: &'a str) -> &'a str {
        self.headers
            .keys()
            .find(|stored| stored.eq_ignore_ascii_case(name))
            .map(String::as_str)
            .unwrap_or(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.headers
            .keys()
            .any(|stored| stored.eq_ignore_ascii_case(name))
    }

    /// Values of the header matching `name`, or an empty slice.
    pub fn get(&self, name: &str) -> &[String] {
        self.headers
            .iter()
            .find(|(stored, _)| stored.eq_ignore_ascii_case(name))
            .map(|(_, values)| values.as_slice())
            .unwrap_or(&[])
    }

    /// Values of the header matching `name` joined by `,`.
    pub fn line(&self, name: &str) -> String {
        self.get(name).join(",")
    }

    /// Replaces every value of the header matching `name`.
    ///
    /// An empty `values` removes the header instead of storing an empty
    /// entry, so a present header always has at least one value.
    pub fn set(&mut self, name: &str, values: HeaderValues) {
        if values.is_empty() {
            self.remove(name);
            return;
        }
        let key = self.matching_name_or(name).to_string();
        self.headers.insert(key, values.into_vec());
    }

    /// Appends `values` after the existing values of the header matching `name`.
    pub fn append(&mut self, name: &str, values: HeaderValues) {
        if values.is_empty() {
            return;
        }
        let key = self.matching_name_or(name).to_string();
        self.headers
            .entry(key)
            .or_default()
            .extend(values.into_vec());
    }

    /// Removes the header matching `name`, keeping the order of the others.
    pub fn remove(&mut self, name: &str) -> Option<Vec<String>> {
        let key = self.matching_name_or(name).to_string();
        self.headers.shift_remove(&key)
    }

    pub fn iter(&self) -> indexmap::map::Iter<'_, String, Vec<String>> {
        self.headers.iter()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.headers.keys().map(String::as_str)
    }

    pub fn as_map(&self) -> &IndexMap<String, Vec<String>> {
        &self.headers
    }

    pub fn len(&self) -> usize {
        self.headers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.headers.is_empty()
    }
}

// `IndexMap` equality ignores order; two header sets are only equal when
// their names, values and positions all match.
impl PartialEq for HttpHeaders {
    fn eq(&self, other: &Self) -> bool {
        self.headers.iter().eq(other.headers.iter())
    }
}

impl Eq for HttpHeaders {}

impl<'a> IntoIterator for &'a HttpHeaders {
    type Item = (&'a String, &'a Vec<String>);
    type IntoIter = indexmap::map::Iter<'a, String, Vec<String>>;

    fn into_iter(self) -> Self::IntoIter {
        self.headers.iter()
    }
}
