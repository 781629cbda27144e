//! Character-sequence adaptor.
//!
//! [`Text`] lets a string participate in the extension layer as a carrier
//! of `char`, and [`Extended<Text>`] adds the string conveniences on top:
//! token splitting, delimiter joining, ASCII case folding. All of them
//! are built on the public operation contracts — `fold`, `transform`,
//! `map` — with no privileged access.
//!
//! `Text` is a non-parameterized kind, so its rebinding MUST name an
//! analogous kind explicitly: mapping characters to some other type lands
//! in a `Vec` of that type.

use core::fmt;
use std::sync::LazyLock;

use regex::Regex;

use crate::caps::bool::{Absent, Present};
use crate::caps::classify::Classify;
use crate::caps::sort::DirectAccess;
use crate::carrier::Carrier;
use crate::extended::Extended;
use crate::kinds::{ExtText, ExtVec};
use crate::rebind::Rebind;

/// The default token pattern: runs of non-whitespace.
static TOKEN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\S+").expect("literal pattern compiles")
});

/// A string as a carrier of `char`.
///
/// Stored as decoded characters so that positional primitives (truncate,
/// retain, indexed access) mean "per character", matching every other
/// kind.
#[derive(Clone, PartialEq, Eq, Hash, Default)]
pub struct Text(Vec<char>);

impl Text {
    /// An empty text.
    pub fn new() -> Self {
        Text(Vec::new())
    }

    /// Append another string's characters.
    pub fn push_str(&mut self, s: &str) {
        self.0.extend(s.chars());
    }

    /// Render back to an owned `String`.
    pub fn render(&self) -> String {
        self.0.iter().collect()
    }
}

impl From<&str> for Text {
    fn from(s: &str) -> Self {
        Text(s.chars().collect())
    }
}

impl From<String> for Text {
    fn from(s: String) -> Self {
        Text::from(s.as_str())
    }
}

impl fmt::Display for Text {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for c in &self.0 {
            write!(f, "{c}")?;
        }
        Ok(())
    }
}

impl fmt::Debug for Text {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self.render())
    }
}

impl PartialEq<&str> for Text {
    fn eq(&self, other: &&str) -> bool {
        self.0.iter().copied().eq(other.chars())
    }
}

impl FromIterator<char> for Text {
    fn from_iter<I: IntoIterator<Item = char>>(chars: I) -> Self {
        Text(chars.into_iter().collect())
    }
}

// =============================================================================
// Carrier / capabilities / rebinding
// =============================================================================

impl Carrier for Text {
    type Elem = char;
    type Iter<'a>
        = std::slice::Iter<'a, char>
    where
        Self: 'a;
    type IntoElems = std::vec::IntoIter<char>;

    fn collect<I: IntoIterator<Item = char>>(chars: I) -> Self {
        chars.into_iter().collect()
    }

    fn iter(&self) -> Self::Iter<'_> {
        self.0.iter()
    }

    fn into_elems(self) -> Self::IntoElems {
        self.0.into_iter()
    }

    fn push_back(&mut self, value: char) {
        self.0.push(value);
    }

    fn append(&mut self, other: &mut Self) {
        self.0.append(&mut other.0);
    }

    fn retain<F: FnMut(&char) -> bool>(&mut self, keep: F) {
        self.0.retain(keep);
    }

    fn truncate(&mut self, len: usize) {
        self.0.truncate(len);
    }

    fn len(&self) -> usize {
        self.0.len()
    }
}

impl Classify for Text {
    type RandomAccess = Present;
    type NativeSort = Absent;
    type FastLen = Present;
}

impl DirectAccess for Text {
    fn at(&self, index: usize) -> Option<&char> {
        self.0.get(index)
    }

    fn contiguous(&mut self) -> &mut [char] {
        self.0.as_mut_slice()
    }
}

// Non-parameterized kind: the explicit override is mandatory, and it
// names `Vec` as the analogous kind for arbitrary element types.
impl Rebind for Text {
    type Of<U> = Vec<U>;
}

// =============================================================================
// String conveniences on the extended wrapper
// =============================================================================

impl Extended<Text> {
    /// Split into whitespace-separated tokens.
    ///
    /// ```
    /// use seqext::prelude::*;
    ///
    /// let msg = ExtText::from("hello world");
    /// let words = msg.split();
    /// assert_eq!(words, seq![ExtText::from("hello"), ExtText::from("world")]);
    /// ```
    pub fn split(&self) -> ExtVec<ExtText> {
        self.tokens(&TOKEN)
    }

    /// Split into the substrings matching `pattern`, in order.
    pub fn tokens(&self, pattern: &Regex) -> ExtVec<ExtText> {
        let rendered = self.render();
        pattern
            .find_iter(&rendered)
            .map(|m| ExtText::from(Text::from(m.as_str())))
            .collect()
    }

    /// Join a collection of texts, with self as the delimiter.
    ///
    /// ```
    /// use seqext::prelude::*;
    /// use seqext::carrier::SinglyList;
    ///
    /// let parts = seq![SinglyList<Text>; Text::from("hello"), Text::from("world")];
    /// let joined = ExtText::from(", ").join(&parts);
    /// assert_eq!(joined.render(), "hello, world");
    /// ```
    pub fn join<D: Carrier<Elem = Text>>(&self, parts: &Extended<D>) -> Extended<Text> {
        let (joined, _) = parts.fold((Text::new(), true), |(mut acc, first), part| {
            if !first {
                acc.push_str(&self.render());
            }
            acc.push_str(&part.render());
            (acc, false)
        });
        Extended::new(joined)
    }

    /// A copy folded to ASCII lower case.
    pub fn to_lowercase(&self) -> Extended<Text> {
        let mut out = self.clone();
        out.transform(|c| c.to_ascii_lowercase());
        out
    }

    /// A copy folded to ASCII upper case.
    pub fn to_uppercase(&self) -> Extended<Text> {
        let mut out = self.clone();
        out.transform(|c| c.to_ascii_uppercase());
        out
    }
}

impl From<&str> for Extended<Text> {
    fn from(s: &str) -> Self {
        Extended::new(Text::from(s))
    }
}

impl PartialEq<&str> for Extended<Text> {
    fn eq(&self, other: &&str) -> bool {
        self.inner() == other
    }
}
