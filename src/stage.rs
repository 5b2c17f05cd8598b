//! Numeric staging: 32-bit values to digits without division.
//!
//! Digits are extracted by counting how many times each place value fits into
//! the remaining magnitude. Nothing here multiplies, divides or takes a
//! remainder, which keeps the code small on cores without a hardware divider.

/// Sign plus ten decimal digits, or "0x" plus eight hex digits, plus the terminator.
pub const STAGING_CAPACITY: usize = 12;

/// Place values for a 32-bit decimal number, most significant first.
pub const DECIMAL_PLACES: [u32; 9] = [
    1_000_000_000,
    100_000_000,
    10_000_000,
    1_000_000,
    100_000,
    10_000,
    1_000,
    100,
    10,
];

/// Place values for a 32-bit hexadecimal number, most significant first.
pub const HEX_PLACES: [u32; 7] = [
    0x1000_0000,
    0x0100_0000,
    0x0010_0000,
    0x0001_0000,
    0x0000_1000,
    0x0000_0100,
    0x0000_0010,
];

/// Per-call state bits.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Flags {
    /// Pad with `'0'` instead of `' '`.
    pub zero_pad: bool,
    /// Hex digits above 9 use `A`-`F`.
    pub hex_capitals: bool,
    /// A significant digit of the current number has been staged.
    pub digit_emitted: bool,
}

/// Fixed-capacity scratch buffer holding one formatted number or character.
pub struct Staging {
    bytes: [u8; STAGING_CAPACITY],
    cursor: usize,
}

impl Default for Staging {
    fn default() -> Self {
        Self::new()
    }
}

impl Staging {
    pub const fn new() -> Self {
        Self {
            bytes: [0_u8; STAGING_CAPACITY],
            cursor: 0,
        }
    }

    /// Logically truncates the buffer.
    #[inline]
    pub fn reset(&mut self) {
        self.cursor = 0;
    }

    /// Appends one byte at the cursor.
    #[inline]
    pub fn push(&mut self, byte: u8) {
        // The slot after the last byte is reserved for the terminator.
        debug_assert!(self.cursor < STAGING_CAPACITY - 1);
        self.bytes[self.cursor] = byte;
        self.cursor += 1;
    }

    /// Writes the terminator and returns the staged bytes including it.
    pub fn terminate(&mut self) -> &[u8] {
        self.bytes[self.cursor] = 0;
        &self.bytes[..=self.cursor]
    }

    /// The staged bytes, without terminator.
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes[..self.cursor]
    }

    pub fn len(&self) -> usize {
        self.cursor
    }

    pub fn is_empty(&self) -> bool {
        self.cursor == 0
    }

    /// Stages the decimal digits of `value`, with a leading `-` when `signed`
    /// and the value is negative as an `i32`.
    pub fn stage_decimal(&mut self, flags: &mut Flags, value: u32, signed: bool) {
        let mut magnitude = value;
        if signed && (value as i32) < 0 {
            // i32::MIN comes out as 0x8000_0000, which fits a u32 magnitude.
            magnitude = (!value).wrapping_add(1);
            self.push(b'-');
        }
        self.stage_digits(flags, magnitude, &DECIMAL_PLACES);
    }

    /// Stages the hexadecimal digits of `value`. No `0x` prefix.
    pub fn stage_hex(&mut self, flags: &mut Flags, value: u32, capitals: bool) {
        flags.hex_capitals = capitals;
        self.stage_digits(flags, value, &HEX_PLACES);
    }

    /// Runs the subtract-and-count loop over `places`, then stages the
    /// remainder as the least significant digit.
    pub fn stage_digits(&mut self, flags: &mut Flags, mut magnitude: u32, places: &[u32]) {
        flags.digit_emitted = false;
        for &place in places {
            let digit = count_place(&mut magnitude, place);
            if digit != 0 || flags.digit_emitted {
                self.push(digit_to_ascii(digit, flags.hex_capitals));
                flags.digit_emitted = true;
            }
        }
        self.push(digit_to_ascii(magnitude as u8, flags.hex_capitals));
        flags.digit_emitted = false;
    }
}

/// Subtracts `place` from `magnitude` until it no longer fits and returns the count.
#[inline(never)]
fn count_place(magnitude: &mut u32, place: u32) -> u8 {
    let mut count = 0_u8;
    while *magnitude >= place {
        *magnitude -= place;
        count += 1;
    }
    count
}

#[inline]
pub fn digit_to_ascii(digit: u8, capitals: bool) -> u8 {
    assert!(digit < 16, "digit out of range");
    match digit {
        0..=9 => b'0' + digit,
        _ if capitals => b'A' + (digit - 10),
        _ => b'a' + (digit - 10),
    }
}
