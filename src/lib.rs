//! embfmt - printf for targets where `core::fmt` does not fit
//!
//! # Design objective:
//! 1. No `core::fmt`, no allocation, no division: digits come from
//!    subtract-and-count over fixed place values.
//! 2. Output leaves one byte at a time through a caller supplied [`Sink`].
//! 3. All state lives on the stack of the call, so formatting is re-entrant.
//!
//! Supported directive grammar: `%[0][width]specifier`
//!
//! | specifier | argument                     | output                        |
//! |-----------|------------------------------|-------------------------------|
//! | `c`       | word, low byte used          | one byte                      |
//! | `d`, `i`  | word as `i32`                | signed decimal                |
//! | `u`       | word as `u32`                | unsigned decimal              |
//! | `x`, `X`  | word as `u32`                | hexadecimal, no `0x` prefix   |
//! | `s`       | byte string, NUL or slice end| the string                    |
//! | `%`       | none                         | `%`                           |
//!
//! Widths go up to 255. Any other specifier is consumed silently.
//!
//! # Examples
//!
//! ```rust
//! use embfmt::{format, Arg, BufSink};
//!
//! let mut buf = [0_u8; 32];
//! let mut sink = BufSink::new(&mut buf);
//! format(&mut sink, b"x=%d, y=%04X\0", &[Arg::from(-3), Arg::from(255_u32)]);
//! assert_eq!(sink.as_bytes(), b"x=-3, y=00FF");
//! ```
//!
//! With the `macros` feature the format string is checked at compile time:
//!
//! ```rust
//! let mut buf = [0_u8; 16];
//! let n = embfmt::bprintf!(&mut buf, "%s:%5u", "t", 42);
//! assert_eq!(&buf[..n], b"t:   42");
//! ```

#![no_std]

#[cfg(feature = "alloc")]
extern crate alloc;

pub mod arg;
pub mod emit;
pub mod scan;
pub mod sink;
pub mod stage;

pub use arg::{Arg, ArgList, Args};
pub use scan::{Directive, Specifier};
#[cfg(feature = "embedded-io")]
pub use sink::IoSink;
pub use sink::{BufSink, PutChar, Sink};

#[cfg(feature = "macros")]
pub use embfmt_macros::{bprintf, printf, printfln, sprintf};

use emit::emit_padded;
use scan::{Piece, Scanner};
use stage::{Flags, Staging};

/// Formats `format` with `args` into `sink`.
///
/// `format` ends at its first NUL byte or at the end of the slice. Returns the
/// number of bytes handed to the sink.
pub fn format<S: Sink + ?Sized>(sink: &mut S, format: &[u8], args: &[Arg<'_>]) -> usize {
    vformat(sink, format, &mut ArgList::new(args))
}

/// Like [`format`], pulling arguments from any [`Args`] source.
#[inline(never)]
pub fn vformat<'a, S, A>(sink: &mut S, format: &[u8], args: &mut A) -> usize
where
    S: Sink + ?Sized,
    A: Args<'a> + ?Sized,
{
    let mut ctx = Context::new();
    let mut written = 0;
    for piece in Scanner::new(format) {
        match piece {
            Piece::Literal(byte) => {
                sink.put_char(byte);
                written += 1;
            }
            Piece::Directive(directive) => written += ctx.directive(sink, directive, args),
        }
    }
    written
}

/// Scratch state of one formatting call.
struct Context {
    staging: Staging,
    flags: Flags,
}

impl Context {
    fn new() -> Self {
        Self {
            staging: Staging::new(),
            flags: Flags::default(),
        }
    }

    fn directive<'a, S, A>(&mut self, sink: &mut S, directive: Directive, args: &mut A) -> usize
    where
        S: Sink + ?Sized,
        A: Args<'a> + ?Sized,
    {
        self.flags.zero_pad = directive.zero_pad;
        self.staging.reset();

        let source: &[u8] = match directive.specifier {
            Specifier::Signed => {
                let word = args.next_word();
                self.staging.stage_decimal(&mut self.flags, word, true);
                self.staging.terminate()
            }
            Specifier::Unsigned => {
                let word = args.next_word();
                self.staging.stage_decimal(&mut self.flags, word, false);
                self.staging.terminate()
            }
            Specifier::Hex | Specifier::HexUpper => {
                let word = args.next_word();
                let capitals = directive.specifier == Specifier::HexUpper;
                self.staging.stage_hex(&mut self.flags, word, capitals);
                self.staging.terminate()
            }
            Specifier::Char => {
                self.staging.push(args.next_word() as u8);
                self.staging.terminate()
            }
            Specifier::Percent => {
                self.staging.push(b'%');
                self.staging.terminate()
            }
            Specifier::Str => args.next_str(),
            Specifier::Unknown(_) => return 0,
        };

        emit_padded(sink, source, directive.width, self.flags.zero_pad)
    }
}
