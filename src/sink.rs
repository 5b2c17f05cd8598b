//! Character sinks.
//!
//! The core hands every output byte, in order, to a [`Sink`]. A sink has no
//! way to report failure back to the formatter; adapters over fallible
//! writers keep the error themselves.

/// Single-character output primitive supplied by the embedding environment.
pub trait Sink {
    fn put_char(&mut self, byte: u8);
}

impl<S: Sink + ?Sized> Sink for &mut S {
    #[inline]
    fn put_char(&mut self, byte: u8) {
        (**self).put_char(byte)
    }
}

/// Adapts a `putChar`-style function or closure.
///
/// ```
/// let mut out = [0_u8; 8];
/// let mut n = 0;
/// let mut sink = embfmt::PutChar(|b: u8| {
///     out[n] = b;
///     n += 1;
/// });
/// embfmt::format(&mut sink, b"%03u\0", &[7_u32.into()]);
/// drop(sink);
/// assert_eq!(&out[..n], b"007");
/// ```
pub struct PutChar<F>(pub F);

impl<F: FnMut(u8)> Sink for PutChar<F> {
    #[inline]
    fn put_char(&mut self, byte: u8) {
        (self.0)(byte)
    }
}

/// Writes into a caller buffer, silently dropping bytes once it is full.
pub struct BufSink<'a> {
    buf: &'a mut [u8],
    pos: usize,
    wanted: usize,
}

impl<'a> BufSink<'a> {
    pub fn new(buf: &'a mut [u8]) -> Self {
        Self {
            buf,
            pos: 0,
            wanted: 0,
        }
    }

    /// Bytes actually stored.
    pub fn len(&self) -> usize {
        self.pos
    }

    pub fn is_empty(&self) -> bool {
        self.pos == 0
    }

    /// Bytes the formatter produced, including the ones that did not fit.
    pub fn wanted(&self) -> usize {
        self.wanted
    }

    pub fn is_truncated(&self) -> bool {
        self.wanted > self.pos
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.buf[..self.pos]
    }
}

impl Sink for BufSink<'_> {
    fn put_char(&mut self, byte: u8) {
        if let Some(slot) = self.buf.get_mut(self.pos) {
            *slot = byte;
            self.pos += 1;
        }
        self.wanted += 1;
    }
}

/// Truncating sink over a `heapless::Vec`.
#[cfg(feature = "heapless")]
impl<const N: usize> Sink for heapless::Vec<u8, N> {
    fn put_char(&mut self, byte: u8) {
        let _ = self.push(byte);
    }
}

/// Sink over an `embedded_io::Write`, e.g. a UART.
///
/// The first write error is latched; every later byte is dropped. Call
/// [`IoSink::finish`] to flush and collect the outcome.
#[cfg(feature = "embedded-io")]
pub struct IoSink<W: embedded_io::Write> {
    writer: W,
    error: Option<W::Error>,
}

#[cfg(feature = "embedded-io")]
impl<W: embedded_io::Write> IoSink<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            error: None,
        }
    }

    pub fn has_failed(&self) -> bool {
        self.error.is_some()
    }

    pub fn finish(mut self) -> Result<W, W::Error> {
        if let Some(err) = self.error {
            return Err(err);
        }
        self.writer.flush()?;
        Ok(self.writer)
    }
}

#[cfg(feature = "embedded-io")]
impl<W: embedded_io::Write> Sink for IoSink<W> {
    fn put_char(&mut self, byte: u8) {
        if self.error.is_some() {
            return;
        }
        if let Err(err) = self.writer.write_all(&[byte]) {
            self.error = Some(err);
        }
    }
}

/// Declares the sink used by `printf!`/`printfln!` from a `fn(u8)`.
///
/// ```no_run
/// fn uart_put_char(_: u8) {}
/// embfmt::make_putchar_sink!(uart_put_char);
///
/// embfmt::printf!("%s=%04X\n", "reg", 0x1F);
/// ```
#[macro_export]
macro_rules! make_putchar_sink {
    ($put_char: path) => {
        #[allow(non_camel_case_types)]
        #[derive(Default)]
        struct _embfmt_Sink;
        impl $crate::Sink for _embfmt_Sink {
            #[inline]
            fn put_char(&mut self, byte: u8) {
                $put_char(byte)
            }
        }
    };
}

/// Uses a caller type implementing `Sink + Default` as the `printf!` sink.
/// A fresh value is created for every call.
#[macro_export]
macro_rules! default_sink {
    ($sink: ty) => {
        #[allow(non_camel_case_types)]
        type _embfmt_Sink = $sink;
    };
}
