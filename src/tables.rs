//! Fixed Code 39 pattern table.
//!
//! Each entry maps one symbol to a 9-bit mask over its nine alternating
//! bar/space elements (first, third, ... are bars). The most significant of
//! the nine bits is the first element; a set bit marks a wide element.
//! Every pattern has exactly 3 wide and 6 narrow elements.

/// Number of elements making up one encoded character.
pub const ELEMENTS_PER_CODE: usize = 9;

/// Number of wide elements in every pattern.
pub const WIDE_PER_CODE: u32 = 3;

/// The alphabet in table order: digits, letters, then `-`, `.`, space, `*`.
/// [`lookup`] computes the index arithmetically from the same ordering.
pub(crate) const CODES: [(u8, u16); 40] = [
    (b'0', 0b000110100),
    (b'1', 0b100100001),
    (b'2', 0b001100001),
    (b'3', 0b101100000),
    (b'4', 0b000110001),
    (b'5', 0b100110000),
    (b'6', 0b001110000),
    (b'7', 0b000100101),
    (b'8', 0b100100100),
    (b'9', 0b001100100),
    (b'A', 0b100001001),
    (b'B', 0b001001001),
    (b'C', 0b101001000),
    (b'D', 0b000011001),
    (b'E', 0b100011000),
    (b'F', 0b001011000),
    (b'G', 0b000001101),
    (b'H', 0b100001100),
    (b'I', 0b001001100),
    (b'J', 0b000011100),
    (b'K', 0b100000011),
    (b'L', 0b001000011),
    (b'M', 0b101000010),
    (b'N', 0b000010011),
    (b'O', 0b100010010),
    (b'P', 0b001010010),
    (b'Q', 0b000000111),
    (b'R', 0b100000110),
    (b'S', 0b001000110),
    (b'T', 0b000010110),
    (b'U', 0b110000001),
    (b'V', 0b011000001),
    (b'W', 0b111000000),
    (b'X', 0b010010001),
    (b'Y', 0b110010000),
    (b'Z', 0b011010000),
    (b'-', 0b010000101),
    (b'.', 0b110000100),
    (b' ', 0b011000100),
    (b'*', 0b010010100),
];

fn index(c: char) -> Option<usize> {
    if !c.is_ascii() {
        return None;
    }
    let i = match c as u8 {
        b @ b'0'..=b'9' => b - b'0',
        b @ b'A'..=b'Z' => 10 + (b - b'A'),
        b'-' => 36,
        b'.' => 37,
        b' ' => 38,
        b'*' => 39,
        _ => return None,
    };
    Some(i as usize)
}

pub(crate) fn lookup(c: char) -> Option<u16> {
    index(c).map(|i| CODES[i].1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_pattern_has_three_wide_elements() {
        for &(sym, mask) in CODES.iter() {
            assert_eq!(mask >> 9, 0, "{} uses more than 9 elements", sym as char);
            assert_eq!(mask.count_ones(), WIDE_PER_CODE, "{}", sym as char);
        }
    }

    #[test]
    fn symbols_are_unique() {
        for (i, &(a, _)) in CODES.iter().enumerate() {
            for &(b, _) in &CODES[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn lookup_finds_all_symbols() {
        assert_eq!(CODES.len(), 40);
        for &(sym, mask) in CODES.iter() {
            assert_eq!(lookup(sym as char), Some(mask));
        }
    }

    #[test]
    fn index_arithmetic_matches_the_table_order() {
        for (i, &(sym, _)) in CODES.iter().enumerate() {
            assert_eq!(index(sym as char), Some(i), "{}", sym as char);
        }
    }

    #[test]
    fn lookup_rejects_foreign_symbols() {
        assert_eq!(lookup('a'), None);
        assert_eq!(lookup('$'), None);
        assert_eq!(lookup('é'), None);
        assert_eq!(lookup('🦀'), None);
    }
}
