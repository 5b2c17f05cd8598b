//!
//! embfmt-macros
//! Compile-time checked front end for `embfmt::format`.
//!
//! The format string keeps the runtime grammar `%[0][width]specifier`. What the
//! runtime forgives silently is rejected here: unknown specifiers, a trailing
//! `%`, widths above 255 and argument counts that do not match.
//!

extern crate proc_macro;
use proc_macro::TokenStream;
use proc_macro2::Span;
use quote::quote;
use syn::{
    parse_macro_input,
    Expr, LitByteStr, LitStr, Token,
    parse::{self, Parse, ParseStream},
    punctuated::Punctuated,
};

/// `printf!(fmt, args..)`: formats through the sink declared with
/// `embfmt::make_putchar_sink!` or `embfmt::default_sink!`.
#[proc_macro]
pub fn printf(input: TokenStream) -> TokenStream {
    default_printf(input, false)
}

/// `printfln!(fmt, args..)`: [`printf!`] followed by `\n`.
#[proc_macro]
pub fn printfln(input: TokenStream) -> TokenStream {
    default_printf(input, true)
}

/// `sprintf!(sink, fmt, args..)`: formats into any `embfmt::Sink`.
#[proc_macro]
pub fn sprintf(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as TargetInput);
    let target = &input.target;
    let sink = quote!(&mut (#target));
    expand(&input.input, false, |call| quote! { { #call } }, sink)
}

/// `bprintf!(buf, fmt, args..)`: formats into a `&mut [u8]` and evaluates to
/// the number of bytes stored.
#[proc_macro]
pub fn bprintf(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as TargetInput);
    let target = &input.target;
    let ident = syn::Ident::new("buf_sink", Span::mixed_site());
    let sink = quote!(&mut #ident);
    expand(
        &input.input,
        false,
        |call| {
            quote! { {
                let mut #ident = ::embfmt::BufSink::new(#target);
                #call;
                #ident.len()
            } }
        },
        sink,
    )
}

fn default_printf(input: TokenStream, ln: bool) -> TokenStream {
    let input = parse_macro_input!(input as Input);
    let sink = quote!(&mut <_embfmt_Sink as ::core::default::Default>::default());
    expand(&input, ln, |call| quote! { { #call } }, sink)
}

fn expand<F>(input: &Input, ln: bool, wrap: F, sink: proc_macro2::TokenStream) -> TokenStream
where
    F: Fn(proc_macro2::TokenStream) -> proc_macro2::TokenStream,
{
    let span = input.format.span();
    let mut format = input.format.value().into_bytes();
    let conversions = match parse(&format, span) {
        Err(e) => return e.to_compile_error().into(),
        Ok(conversions) => conversions,
    };

    let argc = input.args.len();
    if argc != conversions.len() {
        return parse::Error::new(span,
            &format!("format string required {} arguments but {} were supplied",
                conversions.len(), argc)).to_compile_error().into();
    }

    if ln {
        format.push(b'\n');
    }
    format.push(0);
    let literal = LitByteStr::new(&format, span);

    // Through i64 so that negative literals and wide values both cast; the
    // runtime keeps the low 32 bits.
    let args: Vec<_> = conversions.iter().zip(input.args.iter()).map(|(conversion, arg)| {
        match conversion {
            Conversion::Word => quote!(::embfmt::Arg::Word((#arg) as i64 as u32)),
            Conversion::Str => quote!(::embfmt::Arg::from(#arg)),
        }
    }).collect();

    wrap(quote! { ::embfmt::format(#sink, #literal, &[#(#args),*]) }).into()
}

struct Input {
    format: LitStr,
    _comma: Option<Token![,]>,
    args:   Punctuated<Expr, Token![,]>,
}

impl Parse for Input {
    fn parse(input: ParseStream) -> parse::Result<Self> {
        let format = input.parse()?;
        if input.is_empty() {
            Ok(Input {
                format,
                _comma: None,
                args:   Punctuated::new(),
            })
        } else {
            Ok(Input {
                format,
                _comma: input.parse()?,
                args:   Punctuated::parse_terminated(input)?,
            })
        }
    }
}

struct TargetInput {
    target: Expr,
    input: Input,
}

impl Parse for TargetInput {
    fn parse(input: ParseStream) -> parse::Result<Self> {
        let target = input.parse()?;
        let _: Token![,] = input.parse()?;
        let input = Input::parse(input)?;
        Ok(TargetInput { target, input })
    }
}

/// How a directive's argument is converted before it reaches the runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Conversion {
    /// `c`, `d`, `i`, `u`, `x`, `X`
    Word,
    /// `s`
    Str,
}

const MAX_WIDTH: u32 = 255;

/// Checks `format` and returns the conversion of every argument-taking
/// directive, in order.
fn parse(format: &[u8], span: Span) -> parse::Result<Vec<Conversion>> {
    let mut conversions = vec![];
    let mut bytes = format.iter().copied();

    while let Some(byte) = bytes.next() {
        match byte {
            0 => return Err(parse::Error::new(span, "invalid format string: NUL byte inside format")),
            b'%' => {},
            _ => continue,
        }

        let mut current = bytes.next();
        if current == Some(b'0') {
            current = bytes.next();
        }
        let mut width: u32 = 0;
        while let Some(digit @ b'0'..=b'9') = current {
            width = width * 10 + (digit - b'0') as u32;
            if width > MAX_WIDTH {
                return Err(parse::Error::new(span, "invalid format string: width above 255"));
            }
            current = bytes.next();
        }

        let conversion = match current {
            Some(b'c' | b'd' | b'i' | b'u' | b'x' | b'X') => Conversion::Word,
            Some(b's') => Conversion::Str,
            Some(b'%') => continue,
            Some(_) => {
                return Err(parse::Error::new(span,
                    "invalid format string: expected %c, %d, %i, %s, %u, %x, %X or %%"));
            },
            None => return Err(parse::Error::new(span, "invalid format string: incomplete directive at end")),
        };
        conversions.push(conversion);
    }

    Ok(conversions)
}

#[cfg(test)]
mod test {
    use super::*;

    fn conversions(format: &str) -> Vec<Conversion> {
        parse(format.as_bytes(), Span::call_site()).unwrap()
    }

    fn rejected(format: &str) -> bool {
        parse(format.as_bytes(), Span::call_site()).is_err()
    }

    #[test]
    fn test_conversions() {
        assert!(conversions("plain text").is_empty());
        assert_eq!(
            conversions("x=%d, y=%04X %5s %c %i %u %x %%"),
            [
                Conversion::Word,
                Conversion::Word,
                Conversion::Str,
                Conversion::Word,
                Conversion::Word,
                Conversion::Word,
                Conversion::Word,
            ]
        );
    }

    #[test]
    fn test_width_limit() {
        assert_eq!(conversions("%0255u"), [Conversion::Word]);
        assert!(rejected("%256u"));
        assert!(rejected("%99999999999u"));
    }

    #[test]
    fn test_rejects_malformed() {
        assert!(rejected("%q"));
        assert!(rejected("%-5d"));
        assert!(rejected("%.2d"));
        assert!(rejected("tail %"));
        assert!(rejected("tail %08"));
        assert!(rejected("a\0b"));
    }
}
