//! Code 39 symbology encoder.
//!
//! [`encode`] maps one symbol to its [`Code`], a compact handle over the
//! nine alternating bar/space elements of the pattern. Elements are produced
//! by iteration; nothing is allocated.

use core::iter;

use crate::error::{LabelError, Result};
use crate::tables::{self, ELEMENTS_PER_CODE};

/// Ratio of a wide element's width to a narrow element's width.
pub const WIDE_RATIO: f64 = 2.75;

/// Width of one encoded character in narrow units: 3 wide + 6 narrow
/// elements. The inter-character gap (one narrow unit) is not included.
pub const UNITS_PER_CODE: f64 = 3.0 * WIDE_RATIO + 6.0;

/// Whether an element is inked or blank.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ElementKind {
    Bar,
    Space,
}

/// One of the nine elements of a Code 39 pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Element {
    pub kind: ElementKind,
    pub wide: bool,
}

impl Element {
    /// Width of this element in narrow units.
    #[inline]
    pub const fn units(&self) -> f64 {
        if self.wide {
            WIDE_RATIO
        } else {
            1.0
        }
    }

    #[inline]
    pub const fn is_bar(&self) -> bool {
        matches!(self.kind, ElementKind::Bar)
    }
}

/// An encoded Code 39 character: a 9-bit wide-mask over alternating
/// bar/space elements, bars first.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Code(u16);

impl Code {
    /// Iterate over the nine elements, first to last.
    pub fn elements(self) -> Elements {
        Elements { mask: self.0, remaining: ELEMENTS_PER_CODE }
    }
}

impl iter::IntoIterator for Code {
    type Item = Element;
    type IntoIter = Elements;

    fn into_iter(self) -> Self::IntoIter {
        self.elements()
    }
}

/// Iterator over the elements of a [`Code`].
#[derive(Debug, Clone)]
pub struct Elements {
    mask: u16,
    remaining: usize,
}

impl iter::Iterator for Elements {
    type Item = Element;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let wide = (self.mask >> (self.remaining - 1)) & 1 != 0;
        // odd remaining count = bar (nine elements start and end on a bar)
        let kind = if self.remaining % 2 == 1 {
            ElementKind::Bar
        } else {
            ElementKind::Space
        };
        self.remaining -= 1;
        Some(Element { kind, wide })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl iter::ExactSizeIterator for Elements {}
impl iter::FusedIterator for Elements {}

/// Encode one symbol of the Code 39 alphabet (digits, `A`-`Z`, space, `-`,
/// `.`, `*`).
pub fn encode(c: char) -> Result<Code> {
    tables::lookup(c)
        .map(Code)
        .ok_or(LabelError::UnsupportedChar(c))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tables::{CODES, WIDE_PER_CODE};

    #[test]
    fn all_symbols_encode_to_nine_well_formed_elements() {
        for &(sym, _) in CODES.iter() {
            let code = encode(sym as char).unwrap();
            let elements: Vec<Element> = code.elements().collect();
            assert_eq!(elements.len(), 9);

            let wide = elements.iter().filter(|e| e.wide).count();
            assert_eq!(wide as u32, WIDE_PER_CODE, "{}", sym as char);
            assert_eq!(elements.len() - wide, 6, "{}", sym as char);

            // strict bar/space alternation, bar first and last
            for (i, e) in elements.iter().enumerate() {
                let expected = if i % 2 == 0 {
                    ElementKind::Bar
                } else {
                    ElementKind::Space
                };
                assert_eq!(e.kind, expected, "{} element {}", sym as char, i);
            }
        }
    }

    #[test]
    fn encode_rejects_unsupported_characters() {
        for c in ['a', '$', '+', '/', '%', '\n', 'é', '🦀'] {
            assert!(matches!(encode(c), Err(LabelError::UnsupportedChar(u)) if u == c));
        }
    }

    #[test]
    fn delimiter_pattern_matches_the_standard() {
        // '*' is nwnnwnwnn over bar,space,bar,... elements
        let wides: Vec<bool> = encode('*').unwrap().elements().map(|e| e.wide).collect();
        assert_eq!(
            wides,
            [false, true, false, false, true, false, true, false, false]
        );
    }

    #[test]
    fn digit_one_pattern_matches_the_standard() {
        let wides: Vec<bool> = encode('1').unwrap().elements().map(|e| e.wide).collect();
        assert_eq!(
            wides,
            [true, false, false, true, false, false, false, false, true]
        );
    }

    #[test]
    fn code_width_in_units_is_fixed() {
        for &(sym, _) in CODES.iter() {
            let total: f64 = encode(sym as char).unwrap().elements().map(|e| e.units()).sum();
            assert!((total - UNITS_PER_CODE).abs() < 1e-9);
        }
    }
}
