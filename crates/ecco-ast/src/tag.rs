//! Short diagnostic tags naming the operator or keyword a node stands for.
//!
//! A [`Tag`] is a constant of at most four ASCII bytes (`"+"`, `"++"`,
//! `"elif"`). It is fixed per node kind or per operator and carries no
//! runtime state. Untagged shapes report [`Tag::NONE`], which decodes to the
//! empty string.
//!
//! Some tooling exchanges tags in their packed form: the bytes stored
//! big-endian in a `u32` with insignificant leading zero bytes. [`Tag::packed`]
//! and [`decode_packed`] convert to and from that form.
//!
//! # Examples
//!
//! ```
//! use ecco_ast::tag::{decode_packed, Tag};
//!
//! const CONCAT: Tag = Tag::new("++");
//!
//! assert_eq!(CONCAT.decode(), "++");
//! assert_eq!(CONCAT.packed(), 0x2B2B);
//! assert_eq!(decode_packed(0x2B2B).as_deref(), Some("++"));
//! assert_eq!(Tag::NONE.decode(), "");
//! ```

use std::fmt;

/// A compile-time tag of up to [`Tag::MAX_LEN`] ASCII bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Tag(&'static str);

impl Tag {
    /// Longest tag text, in bytes.
    pub const MAX_LEN: usize = 4;

    /// Tag of untagged shapes.
    pub const NONE: Tag = Tag("");

    /// Creates a tag from its text.
    ///
    /// # Panics
    ///
    /// Panics if `text` is longer than four bytes, is not ASCII or contains a
    /// NUL byte. In a `const` item the panic becomes a compile error.
    #[must_use]
    pub const fn new(text: &'static str) -> Self {
        assert!(text.len() <= Self::MAX_LEN, "tag text is longer than four bytes");

        let bytes = text.as_bytes();
        let mut i = 0;
        while i < bytes.len() {
            assert!(bytes[i].is_ascii(), "tag text must be ASCII");
            assert!(bytes[i] != 0, "tag text must not contain NUL");
            i += 1;
        }
        Self(text)
    }

    /// Returns the human-readable text of the tag.
    #[must_use]
    pub const fn decode(self) -> &'static str {
        self.0
    }

    /// Whether this is the empty tag of an untagged shape.
    #[must_use]
    pub const fn is_none(self) -> bool {
        self.0.is_empty()
    }

    /// Packs the tag bytes big-endian into a `u32`.
    #[must_use]
    pub const fn packed(self) -> u32 {
        let bytes = self.0.as_bytes();
        let mut raw = 0u32;
        let mut i = 0;
        while i < bytes.len() {
            raw = (raw << 8) | bytes[i] as u32;
            i += 1;
        }
        raw
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

/// Decodes a packed tag, most significant byte first, skipping leading zeros.
///
/// Returns `None` for values [`Tag::packed`] never produces: a byte outside
/// ASCII, or a zero byte after the first non-zero one.
#[must_use]
pub fn decode_packed(raw: u32) -> Option<String> {
    let bytes = raw.to_be_bytes();
    let start = bytes.iter().position(|&b| b != 0).unwrap_or(bytes.len());
    let text = &bytes[start..];

    if !text.iter().all(|&b| b.is_ascii() && b != 0) {
        return None;
    }
    Some(text.iter().copied().map(char::from).collect())
}

/// Shapes that expose a diagnostic tag.
pub trait Tagged {
    /// The tag of this node; [`Tag::NONE`] when the shape is untagged.
    fn tag(&self) -> Tag;

    /// Shorthand for `self.tag().decode()`.
    fn decode(&self) -> &'static str {
        self.tag().decode()
    }
}
