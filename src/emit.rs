use crate::Sink;

/// Length of `source` up to the first NUL, or the whole slice.
#[inline]
pub fn terminated_len(source: &[u8]) -> usize {
    source.iter().position(|&b| b == 0).unwrap_or(source.len())
}

/// Emits `width` padding minus the source length, then the source itself.
/// Returns the number of bytes handed to the sink.
pub fn emit_padded<S: Sink + ?Sized>(sink: &mut S, source: &[u8], width: u8, zero_pad: bool) -> usize {
    let content = &source[..terminated_len(source)];
    let padding = (width as usize).saturating_sub(content.len());
    let fill = if zero_pad { b'0' } else { b' ' };

    for _ in 0..padding {
        sink.put_char(fill);
    }
    for &byte in content {
        sink.put_char(byte);
    }
    padding + content.len()
}
