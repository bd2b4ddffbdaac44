//! Integer ids referring into tables owned outside the tree.
//!
//! Identifier leaves carry the id of a name in the interpreter's symbol
//! table, and string-literal leaves the id of an entry in its constant table.
//! The tree never resolves these ids itself.
//!
//! # Examples
//!
//! ```
//! use ecco_ast::Symbol;
//!
//! let x = Symbol::new(7);
//! assert_eq!(x, Symbol::from(7));
//! assert_eq!(x.as_usize(), 7);
//! ```

use std::fmt;

/// A 32-bit id into an external symbol or constant table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Symbol(u32);

impl Symbol {
    /// Wraps a raw table index.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Returns the raw id.
    #[must_use]
    pub const fn as_u32(self) -> u32 {
        self.0
    }

    /// Returns the raw id widened for slice indexing.
    #[must_use]
    pub const fn as_usize(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

impl From<u32> for Symbol {
    fn from(id: u32) -> Self {
        Self(id)
    }
}
