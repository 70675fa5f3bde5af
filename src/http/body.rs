use bytes::Bytes;

/// Opaque content of a [`Message`](crate::http::message::Message).
///
/// Backed by [`Bytes`], so clones share the underlying buffer and copying a
/// message never duplicates its payload.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Body {
    contents: Bytes,
}

impl Body {
    pub fn empty() -> Self {
        Self {
            contents: Bytes::new(),
        }
    }

    pub fn new(contents: impl Into<Bytes>) -> Self {
        Self {
            contents: contents.into(),
        }
    }

    pub fn contents(&self) -> &Bytes {
        &self.contents
    }

    pub fn len(&self) -> usize {
        self.contents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.contents.is_empty()
    }
}

impl From<Bytes> for Body {
    fn from(contents: Bytes) -> Self {
        Self { contents }
    }
}

impl From<Vec<u8>> for Body {
    fn from(contents: Vec<u8>) -> Self {
        Self::new(contents)
    }
}

impl From<&'static [u8]> for Body {
    fn from(contents: &'static [u8]) -> Self {
        Self::new(contents)
    }
}

impl From<String> for Body {
    fn from(contents: String) -> Self {
        Self::new(contents)
    }
}

impl From<&'static str> for Body {
    fn from(contents: &'static str) -> Self {
        Self::new(contents)
    }
}
