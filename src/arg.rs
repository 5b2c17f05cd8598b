//! Argument values and the sequential argument source.

use core::ffi::CStr;

/// One formatting argument.
///
/// Numbers travel as raw 32-bit words; the directive decides whether a word is
/// read as signed, unsigned, hexadecimal or a character. Strings are borrowed
/// and end at their first NUL byte or at the end of the slice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Arg<'a> {
    Word(u32),
    Str(&'a [u8]),
}

macro_rules! word_from {
    ($($t:ty),*) => {
        $(
            impl From<$t> for Arg<'_> {
                #[inline]
                fn from(val: $t) -> Self {
                    Arg::Word(val as u32)
                }
            }
        )*
    };
}

// Signed values sign-extend to 32 bits first.
word_from!(u32, u16, u8, i32, i16, i8, char);

impl From<bool> for Arg<'_> {
    fn from(val: bool) -> Self {
        Arg::Word(val as u32)
    }
}

impl<'a> From<&'a [u8]> for Arg<'a> {
    fn from(val: &'a [u8]) -> Self {
        Arg::Str(val)
    }
}

impl<'a, const N: usize> From<&'a [u8; N]> for Arg<'a> {
    fn from(val: &'a [u8; N]) -> Self {
        Arg::Str(val)
    }
}

impl<'a> From<&'a str> for Arg<'a> {
    fn from(val: &'a str) -> Self {
        Arg::Str(val.as_bytes())
    }
}

impl<'a> From<&'a CStr> for Arg<'a> {
    fn from(val: &'a CStr) -> Self {
        Arg::Str(val.to_bytes())
    }
}

#[cfg(feature = "alloc")]
impl<'a> From<&'a alloc::string::String> for Arg<'a> {
    fn from(val: &'a alloc::string::String) -> Self {
        Arg::Str(val.as_bytes())
    }
}

#[cfg(feature = "alloc")]
impl<'a> From<&'a alloc::vec::Vec<u8>> for Arg<'a> {
    fn from(val: &'a alloc::vec::Vec<u8>) -> Self {
        Arg::Str(val)
    }
}

/// Sequential, type-directed access to the caller's arguments.
///
/// Each directive consumes at most one argument, left to right.
pub trait Args<'a> {
    /// Next argument as a 32-bit word.
    fn next_word(&mut self) -> u32;
    /// Next argument as a byte string.
    fn next_str(&mut self) -> &'a [u8];
}

/// [`Args`] over a slice of [`Arg`].
///
/// A missing argument reads as `0` or as the empty string. So does an argument
/// of the wrong kind: a string where a number is expected is `0`, a number
/// where a string is expected is `""`.
pub struct ArgList<'s, 'a> {
    args: core::slice::Iter<'s, Arg<'a>>,
}

impl<'s, 'a> ArgList<'s, 'a> {
    pub fn new(args: &'s [Arg<'a>]) -> Self {
        Self { args: args.iter() }
    }

    /// Arguments not consumed yet.
    pub fn remaining(&self) -> usize {
        self.args.len()
    }
}

impl<'a> Args<'a> for ArgList<'_, 'a> {
    fn next_word(&mut self) -> u32 {
        match self.args.next() {
            Some(&Arg::Word(word)) => word,
            _ => 0,
        }
    }

    fn next_str(&mut self) -> &'a [u8] {
        match self.args.next() {
            Some(&Arg::Str(s)) => s,
            _ => b"",
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_conversions() {
        assert_eq!(Arg::from(-1_i8), Arg::Word(u32::MAX));
        assert_eq!(Arg::from(-2_i16), Arg::Word(0xFFFF_FFFE));
        assert_eq!(Arg::from(0xFF_u8), Arg::Word(255));
        assert_eq!(Arg::from('A'), Arg::Word(65));
        assert_eq!(Arg::from(true), Arg::Word(1));
        assert_eq!(Arg::from("hi"), Arg::Str(b"hi"));
        assert_eq!(Arg::from(b"hi"), Arg::Str(b"hi"));
        let c = CStr::from_bytes_with_nul(b"hi\0").unwrap();
        assert_eq!(Arg::from(c), Arg::Str(b"hi"));
    }

    #[cfg(feature = "alloc")]
    #[test]
    fn test_owned_strings() {
        use alloc::string::String;
        use alloc::vec::Vec;

        let owned = String::from("owned");
        let bytes: Vec<u8> = Vec::from(&b"vec"[..]);
        assert_eq!(Arg::from(&owned), Arg::Str(b"owned"));
        assert_eq!(Arg::from(&bytes), Arg::Str(b"vec"));
    }

    #[test]
    fn test_sequential_and_exhausted() {
        let args = [Arg::Word(7), Arg::Str(b"x")];
        let mut list = ArgList::new(&args);
        assert_eq!(list.remaining(), 2);
        assert_eq!(list.next_word(), 7);
        assert_eq!(list.next_str(), b"x");
        assert_eq!(list.next_word(), 0);
        assert_eq!(list.next_str(), b"");
        assert_eq!(list.remaining(), 0);
    }

    #[test]
    fn test_kind_mismatch() {
        let args = [Arg::Str(b"x"), Arg::Word(1)];
        let mut list = ArgList::new(&args);
        assert_eq!(list.next_word(), 0);
        assert_eq!(list.next_str(), b"");
    }
}
