//! Positional (printf-style) rendering.
//!
//! Rendering never fails. Argument count and type mismatches are written into
//! the output as inline markers (`%!d(MISSING)`, `%!s(int=3)`, `%!(EXTRA ...)`)
//! so the resulting message still says what went wrong. Widths and precisions
//! above one million are dropped and marked `%!(BADWIDTH)` / `%!(BADPREC)`.

use core::fmt::Write;

use crate::render::Arg;
use crate::types::alloc_type::{format, String};

/// Widths and precisions above this are rejected rather than padded.
const MAX_PAD: usize = 1_000_000;

/// Flags, width and precision parsed from one directive.
#[derive(Debug, Default, Clone, Copy)]
struct Directive {
    minus: bool,
    plus: bool,
    sharp: bool,
    zero: bool,
    space: bool,
    width: Option<usize>,
    precision: Option<usize>,
    bad_width: bool,
    bad_precision: bool,
}

/// Renders `spec` with `args` substituted by position.
pub fn render(spec: &str, args: &[Arg]) -> String {
    let mut out = String::with_capacity(spec.len() + 8 * args.len());
    let mut next = 0usize;
    let mut rest = spec;

    while let Some(pos) = rest.find('%') {
        out.push_str(&rest[..pos]);
        rest = &rest[pos + 1..];

        let (directive, consumed) = parse_directive(rest);
        rest = &rest[consumed..];

        if directive.bad_width {
            out.push_str("%!(BADWIDTH)");
        }
        if directive.bad_precision {
            out.push_str("%!(BADPREC)");
        }

        let mut chars = rest.chars();
        let Some(verb) = chars.next() else {
            out.push_str("%!(NOVERB)");
            break;
        };
        rest = chars.as_str();

        if verb == '%' {
            out.push('%');
            continue;
        }

        match args.get(next) {
            Some(arg) => {
                next += 1;
                format_arg(&mut out, verb, directive, arg);
            },
            None => {
                let _ = write!(out, "%!{verb}(MISSING)");
            },
        }
    }
    out.push_str(rest);

    if next < args.len() {
        out.push_str("%!(EXTRA ");
        for (i, arg) in args[next..].iter().enumerate() {
            if i > 0 {
                out.push_str(", ");
            }
            let _ = write!(out, "{}={}", arg.type_name(), arg);
        }
        out.push(')');
    }

    out
}

/// Returns true if `text` contains something the positional dialect would treat
/// as a verb: a `%` followed by a letter, digit or underscore.
pub fn has_verbs(text: &str) -> bool {
    text.as_bytes()
        .windows(2)
        .any(|w| w[0] == b'%' && (w[1].is_ascii_alphanumeric() || w[1] == b'_'))
}

fn parse_directive(s: &str) -> (Directive, usize) {
    let bytes = s.as_bytes();
    let mut d = Directive::default();
    let mut i = 0;

    while let Some(&b) = bytes.get(i) {
        match b {
            b'-' => d.minus = true,
            b'+' => d.plus = true,
            b'#' => d.sharp = true,
            b'0' => d.zero = true,
            b' ' => d.space = true,
            _ => break,
        }
        i += 1;
    }

    let (width, used) = parse_number(&bytes[i..]);
    d.bad_width = width.is_some_and(|w| w > MAX_PAD);
    d.width = width.filter(|_| !d.bad_width);
    i += used;

    if bytes.get(i) == Some(&b'.') {
        i += 1;
        let (precision, used) = parse_number(&bytes[i..]);
        let precision = precision.unwrap_or(0);
        d.bad_precision = precision > MAX_PAD;
        d.precision = Some(precision).filter(|_| !d.bad_precision);
        i += used;
    }

    (d, i)
}

fn parse_number(bytes: &[u8]) -> (Option<usize>, usize) {
    let digits = bytes.iter().take_while(|b| b.is_ascii_digit()).count();
    if digits == 0 {
        return (None, 0);
    }
    let value = bytes[..digits]
        .iter()
        .fold(0usize, |acc, b| acc.saturating_mul(10).saturating_add(usize::from(b - b'0')));
    (Some(value), digits)
}

fn format_arg(out: &mut String, verb: char, d: Directive, arg: &Arg) {
    let body = match (verb, arg) {
        ('v', Arg::Float(v)) | ('g', Arg::Float(v)) | ('G', Arg::Float(v)) => {
            signed(d, *v < 0.0, float_general(v.abs(), d.precision))
        },
        ('v', Arg::Int(v)) | ('d', Arg::Int(v)) => signed(d, *v < 0, format!("{}", v.unsigned_abs())),
        ('v', Arg::Uint(v)) | ('d', Arg::Uint(v)) => signed(d, false, format!("{v}")),
        ('v', Arg::Str(s)) | ('s', Arg::Str(s)) => truncate(s, d.precision),
        ('v', Arg::Bool(b)) | ('t', Arg::Bool(b)) => format!("{b}"),
        ('v', Arg::Char(c)) | ('c', Arg::Char(c)) => format!("{c}"),
        ('d', Arg::Char(c)) => format!("{}", u32::from(*c)),
        ('c', Arg::Int(v)) => format!("{}", char_from(u64::try_from(*v).unwrap_or(u64::MAX))),
        ('c', Arg::Uint(v)) => format!("{}", char_from(*v)),
        ('q', Arg::Str(s)) => format!("{s:?}"),
        ('q', Arg::Char(c)) => format!("{c:?}"),
        ('x' | 'X' | 'o' | 'b', Arg::Int(v)) => {
            signed(d, *v < 0, radix(verb, d, v.unsigned_abs()))
        },
        ('x' | 'X' | 'o' | 'b', Arg::Uint(v)) => signed(d, false, radix(verb, d, *v)),
        ('x' | 'X', Arg::Str(s)) => hex_bytes(verb, s),
        ('f' | 'F', Arg::Float(v)) => {
            signed(d, *v < 0.0, format!("{:.*}", d.precision.unwrap_or(6), v.abs()))
        },
        ('e' | 'E', Arg::Float(v)) => signed(d, *v < 0.0, exponent(verb, v.abs(), d.precision)),
        _ => {
            let _ = write!(out, "%!{verb}({}={arg})", arg.type_name());
            return;
        },
    };

    pad(out, &body, d, is_numeric(arg) && !matches!(verb, 'q' | 'c'));
}

fn is_numeric(arg: &Arg) -> bool {
    matches!(arg, Arg::Int(_) | Arg::Uint(_) | Arg::Float(_))
}

fn signed(d: Directive, negative: bool, magnitude: String) -> String {
    let sign = if negative {
        "-"
    } else if d.plus {
        "+"
    } else if d.space {
        " "
    } else {
        ""
    };
    if sign.is_empty() {
        magnitude
    } else {
        format!("{sign}{magnitude}")
    }
}

fn truncate(s: &str, precision: Option<usize>) -> String {
    match precision {
        Some(p) => s.chars().take(p).collect(),
        None => s.into(),
    }
}

fn char_from(code: u64) -> char {
    u32::try_from(code).ok().and_then(char::from_u32).unwrap_or(char::REPLACEMENT_CHARACTER)
}

fn radix(verb: char, d: Directive, v: u64) -> String {
    match (verb, d.sharp) {
        ('x', false) => format!("{v:x}"),
        ('x', true) => format!("{v:#x}"),
        ('X', false) => format!("{v:X}"),
        ('X', true) => format!("0X{v:X}"),
        ('o', false) => format!("{v:o}"),
        ('o', true) => format!("0{v:o}"),
        (_, false) => format!("{v:b}"),
        (_, true) => format!("{v:#b}"),
    }
}

fn hex_bytes(verb: char, s: &str) -> String {
    let mut out = String::with_capacity(s.len() * 2);
    for b in s.bytes() {
        let _ = if verb == 'X' { write!(out, "{b:02X}") } else { write!(out, "{b:02x}") };
    }
    out
}

fn float_general(v: f64, precision: Option<usize>) -> String {
    match precision {
        Some(p) => {
            let fixed = format!("{v:.p$}");
            if fixed.contains('.') {
                fixed.trim_end_matches('0').trim_end_matches('.').into()
            } else {
                fixed
            }
        },
        None => format!("{v}"),
    }
}

/// Formats `v` in scientific notation with a signed, two-digit exponent.
fn exponent(verb: char, v: f64, precision: Option<usize>) -> String {
    let raw = format!("{:.*e}", precision.unwrap_or(6), v);
    let (mantissa, exp) = raw.split_once('e').unwrap_or((raw.as_str(), "0"));
    let (sign, digits) = match exp.strip_prefix('-') {
        Some(digits) => ('-', digits),
        None => ('+', exp),
    };
    let e = if verb == 'E' { 'E' } else { 'e' };
    format!("{mantissa}{e}{sign}{digits:0>2}")
}

fn pad(out: &mut String, body: &str, d: Directive, numeric: bool) {
    let len = body.chars().count();
    let fill = d.width.map_or(0, |w| w.saturating_sub(len));

    if fill == 0 {
        out.push_str(body);
    } else if d.minus {
        out.push_str(body);
        out.extend(core::iter::repeat(' ').take(fill));
    } else if d.zero && numeric {
        let split = body.find(|c: char| c.is_ascii_digit()).unwrap_or(0);
        out.push_str(&body[..split]);
        out.extend(core::iter::repeat('0').take(fill));
        out.push_str(&body[split..]);
    } else {
        out.extend(core::iter::repeat(' ').take(fill));
        out.push_str(body);
    }
}
