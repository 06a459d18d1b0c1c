// Copyright 2023-2024 Logan Magee
//
// SPDX-License-Identifier: LicenseRef-Proprietary

use crate::{
    error::{SaisError, try_alloc},
    histogram::Symbol,
};

const WORD_BITS: usize = u64::BITS as usize;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum CharType {
    L,
    S,
}

/// The S/L classification of every suffix of a text, stored as one bit per position.
///
/// The text is sorted as if a unique sentinel smaller than every symbol followed it. That
/// sentinel sits at position `len` and is the only S-type suffix that is not backed by a real
/// symbol, which makes the last real position L-type.
pub(crate) struct SuffixTypes {
    bits: Vec<u64>,
    len: usize,
}

impl SuffixTypes {
    /// Classifies each suffix of `text` with a single backward scan.
    pub(crate) fn classify<S: Symbol>(text: &[S]) -> Result<Self, SaisError> {
        let len = text.len();
        let mut types = Self {
            bits: try_alloc(len.div_ceil(WORD_BITS))?,
            len,
        };

        if len < 2 {
            return Ok(types);
        }

        // text[len - 1] is L-type because the sentinel follows it
        let mut successive_type = CharType::L;
        for i in (0..len - 1).rev() {
            let current_type = if text[i] < text[i + 1]
                || (text[i] == text[i + 1] && successive_type == CharType::S)
            {
                CharType::S
            } else {
                CharType::L
            };
            if current_type == CharType::S {
                types.bits[i / WORD_BITS] |= 1 << (i % WORD_BITS);
            }
            successive_type = current_type;
        }

        Ok(types)
    }

    /// Returns the type of the suffix at `i`, where `i == len` is the sentinel.
    #[inline]
    pub(crate) fn get(&self, i: usize) -> CharType {
        if i == self.len || self.bits[i / WORD_BITS] & (1 << (i % WORD_BITS)) != 0 {
            CharType::S
        } else {
            CharType::L
        }
    }

    /// Returns `true` if `i` is a leftmost S-type position of the text.
    ///
    /// Position 0 is never LMS since nothing precedes it. The sentinel is not reported either.
    #[inline]
    pub(crate) fn is_lms(&self, i: usize) -> bool {
        i > 0 && i < self.len && self.get(i) == CharType::S && self.get(i - 1) == CharType::L
    }

    /// Returns the LMS positions of the text in increasing order.
    pub(crate) fn lms_positions(&self) -> impl Iterator<Item = usize> + '_ {
        (1..self.len).filter(|&i| self.is_lms(i))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn type_string(text: &[u8]) -> String {
        let types = SuffixTypes::classify(text).unwrap();
        (0..text.len())
            .map(|i| match types.get(i) {
                CharType::L => 'L',
                CharType::S => 'S',
            })
            .collect()
    }

    #[test]
    fn banana() {
        assert_eq!(type_string(b"banana"), "LSLSLL");
    }

    #[test]
    fn mississippi() {
        assert_eq!(type_string(b"mississippi"), "LSLLSLLSLLL");
    }

    #[test]
    fn equal_run_takes_type_of_successor() {
        assert_eq!(type_string(b"aaab"), "SSSL");
        assert_eq!(type_string(b"bbba"), "LLLL");
    }

    #[test]
    fn sentinel_is_s_type() {
        let types = SuffixTypes::classify(b"ab".as_slice()).unwrap();

        assert_eq!(types.get(2), CharType::S);
        assert!(!types.is_lms(2));
    }

    #[test]
    fn lms_positions_of_banana() {
        let types = SuffixTypes::classify(b"banana".as_slice()).unwrap();

        assert_eq!(types.lms_positions().collect::<Vec<_>>(), [1, 3]);
    }

    #[test]
    fn first_position_is_never_lms() {
        let types = SuffixTypes::classify(b"abab".as_slice()).unwrap();

        assert_eq!(types.get(0), CharType::S);
        assert_eq!(types.lms_positions().collect::<Vec<_>>(), [2]);
    }

    #[test]
    fn spans_multiple_words() {
        let text: Vec<u8> = (0..200).map(|i| if i % 3 == 0 { b'a' } else { b'b' }).collect();
        let types = SuffixTypes::classify(text.as_slice()).unwrap();

        assert_eq!(types.lms_positions().count(), 66);
    }
}
