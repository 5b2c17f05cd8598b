use std::io::Write;

fn put_char(byte: u8) {
    std::io::stdout().write_all(&[byte]).ok();
}

embfmt::make_putchar_sink!(put_char);

fn main() {
    let mut b = [0_u8; 32];
    let n = embfmt::bprintf!(&mut b, "bprintf(%s)", "hello buffer");

    let mut v = Vec::new();
    embfmt::sprintf!(embfmt::PutChar(|c: u8| v.push(c)), "sprintf(%08X)", 0xC0FFEE);

    embfmt::printfln!(
        "d = %d i = %5i u = %u x = %x X = %04X c = %c s = %s %%",
        -100,
        200,
        -1,
        0xBEEF,
        0xAB,
        'z',
        "str"
    );
    embfmt::printfln!("buf = %s (%u bytes)", &b[..n], n);
    embfmt::printfln!("vec = %s", v.as_slice());
    embfmt::printfln!("min = %d max = %u", i32::MIN, u32::MAX);
}
