// Copyright 2025 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::string::String;
use alloc::sync::Arc;

/// Text that can carry attributes in an [`AttributedText`].
///
/// Offsets are UTF-8 byte indices.
///
/// [`AttributedText`]: crate::AttributedText
pub trait TextStorage {
    /// The length of the text in bytes.
    fn len(&self) -> usize;

    /// Returns `true` if the text is empty.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns `true` if `index` falls between two UTF-8 encoded characters (or at either end).
    fn is_char_boundary(&self, index: usize) -> bool;
}

impl TextStorage for str {
    fn len(&self) -> usize {
        Self::len(self)
    }

    fn is_char_boundary(&self, index: usize) -> bool {
        Self::is_char_boundary(self, index)
    }
}

impl TextStorage for String {
    fn len(&self) -> usize {
        Self::len(self)
    }

    fn is_char_boundary(&self, index: usize) -> bool {
        self.as_str().is_char_boundary(index)
    }
}

impl TextStorage for &str {
    fn len(&self) -> usize {
        str::len(self)
    }

    fn is_char_boundary(&self, index: usize) -> bool {
        str::is_char_boundary(self, index)
    }
}

impl TextStorage for Arc<str> {
    fn len(&self) -> usize {
        str::len(self)
    }

    fn is_char_boundary(&self, index: usize) -> bool {
        str::is_char_boundary(self, index)
    }
}

#[cfg(test)]
mod tests {
    use super::TextStorage;
    use alloc::string::String;
    use alloc::sync::Arc;

    fn boundaries<T: TextStorage + ?Sized>(text: &T) -> alloc::vec::Vec<usize> {
        (0..=text.len() + 1)
            .filter(|&i| text.is_char_boundary(i))
            .collect()
    }

    #[test]
    fn storages_agree_on_boundaries() {
        let s = "añb";
        let expected = [0, 1, 3, 4];
        assert_eq!(boundaries(&s), expected);
        assert_eq!(boundaries(&String::from(s)), expected);
        assert_eq!(boundaries(&Arc::<str>::from(s)), expected);
        assert_eq!(boundaries(s), expected);
    }

    #[test]
    fn empty_text() {
        let s = String::new();
        assert!(TextStorage::is_empty(&s));
        assert!(s.is_char_boundary(0));
        assert!(!s.is_char_boundary(1));
    }
}
