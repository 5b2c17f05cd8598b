//! Format string scanner.
//!
//! Grammar: `%[0][width]specifier`. The format string ends at the first NUL
//! byte or at the end of the slice, whichever comes first.

/// Terminating byte of a directive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Specifier {
    /// `c`
    Char,
    /// `d` or `i`
    Signed,
    /// `u`
    Unsigned,
    /// `x`
    Hex,
    /// `X`
    HexUpper,
    /// `s`
    Str,
    /// `%%`
    Percent,
    /// Anything else. Emits nothing and consumes no argument.
    Unknown(u8),
}

impl Specifier {
    pub fn from_byte(byte: u8) -> Self {
        match byte {
            b'c' => Specifier::Char,
            b'd' | b'i' => Specifier::Signed,
            b'u' => Specifier::Unsigned,
            b'x' => Specifier::Hex,
            b'X' => Specifier::HexUpper,
            b's' => Specifier::Str,
            b'%' => Specifier::Percent,
            other => Specifier::Unknown(other),
        }
    }
}

/// One parsed `%` directive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Directive {
    pub zero_pad: bool,
    pub width: u8,
    pub specifier: Specifier,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Piece {
    Literal(u8),
    Directive(Directive),
}

/// Walks a format string and yields literal bytes and directives in order.
pub struct Scanner<'f> {
    format: &'f [u8],
    pos: usize,
}

impl<'f> Scanner<'f> {
    pub fn new(format: &'f [u8]) -> Self {
        Self { format, pos: 0 }
    }

    /// Reads the next byte, treating the end of the slice as a terminator.
    #[inline]
    fn next_byte(&mut self) -> u8 {
        match self.format.get(self.pos) {
            Some(&byte) if byte != 0 => {
                self.pos += 1;
                byte
            }
            _ => 0,
        }
    }

    /// Parses the part of a directive following the `%`.
    fn directive(&mut self) -> Option<Directive> {
        let mut zero_pad = false;
        let mut width = 0_u8;

        let mut current = self.next_byte();
        if current == b'0' {
            zero_pad = true;
            current = self.next_byte();
        }
        while current.is_ascii_digit() {
            // Widths above 255 are out of contract and wrap.
            width = width.wrapping_mul(10).wrapping_add(current - b'0');
            current = self.next_byte();
        }
        if current == 0 {
            return None;
        }

        Some(Directive {
            zero_pad,
            width,
            specifier: Specifier::from_byte(current),
        })
    }
}

impl Iterator for Scanner<'_> {
    type Item = Piece;

    fn next(&mut self) -> Option<Piece> {
        match self.next_byte() {
            0 => None,
            b'%' => self.directive().map(Piece::Directive),
            literal => Some(Piece::Literal(literal)),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    extern crate std;
    use std::vec::Vec;

    fn pieces(format: &[u8]) -> Vec<Piece> {
        Scanner::new(format).collect()
    }

    fn directive(zero_pad: bool, width: u8, specifier: Specifier) -> Piece {
        Piece::Directive(Directive {
            zero_pad,
            width,
            specifier,
        })
    }

    #[test]
    fn test_literals() {
        assert_eq!(
            pieces(b"ab"),
            [Piece::Literal(b'a'), Piece::Literal(b'b')]
        );
        assert!(pieces(b"").is_empty());
    }

    #[test]
    fn test_stops_at_nul() {
        assert_eq!(pieces(b"a\0b"), [Piece::Literal(b'a')]);
    }

    #[test]
    fn test_flag_and_width() {
        assert_eq!(pieces(b"%04d"), [directive(true, 4, Specifier::Signed)]);
        assert_eq!(pieces(b"%12X"), [directive(false, 12, Specifier::HexUpper)]);
        assert_eq!(pieces(b"%0s"), [directive(true, 0, Specifier::Str)]);
        assert_eq!(pieces(b"%255u"), [directive(false, 255, Specifier::Unsigned)]);
    }

    #[test]
    fn test_single_zero_flag() {
        // The second '0' is the first width digit.
        assert_eq!(pieces(b"%005i"), [directive(true, 5, Specifier::Signed)]);
    }

    #[test]
    fn test_width_wraps_past_255() {
        assert_eq!(pieces(b"%256d"), [directive(false, 0, Specifier::Signed)]);
    }

    #[test]
    fn test_widths_reset_per_directive() {
        assert_eq!(
            pieces(b"%08x%c"),
            [
                directive(true, 8, Specifier::Hex),
                directive(false, 0, Specifier::Char),
            ]
        );
    }

    #[test]
    fn test_unknown_and_percent() {
        assert_eq!(
            pieces(b"%q%%"),
            [
                directive(false, 0, Specifier::Unknown(b'q')),
                directive(false, 0, Specifier::Percent),
            ]
        );
    }

    #[test]
    fn test_trailing_percent() {
        assert_eq!(pieces(b"a%"), [Piece::Literal(b'a')]);
        assert_eq!(pieces(b"a%05"), [Piece::Literal(b'a')]);
        assert_eq!(pieces(b"a%\0d"), [Piece::Literal(b'a')]);
    }
}
