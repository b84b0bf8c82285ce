//! printf-style specifier substitution.

use crate::value::{FloatDisplay, Value};

/// Specifier tokens recognised inside a template string.
const SPECIFIERS: &[u8] = b"sdifoOc";

/// Substitute printf-style specifiers in the leading string.
///
/// Each step finds the leftmost specifier in `args[0]`, converts `args[1]`
/// for it, splices the result into the template and drops the consumed
/// argument. The loop ends when the template has no specifier left or no
/// argument remains to consume. Unconsumed arguments are returned after the
/// rewritten template; a non-textual first argument disables substitution.
#[must_use]
pub fn format(mut args: Vec<Value>) -> Vec<Value> {
    while args.len() > 1 {
        let Some(Value::Str(target)) = args.first() else {
            break;
        };
        let Some((at, spec)) = find_specifier(target) else {
            break;
        };
        let current = args.remove(1);
        let converted = convert(spec, &current);
        if let Some(Value::Str(target)) = args.first_mut() {
            target.replace_range(at..at + 2, &converted);
        }
    }
    args
}

/// Byte offset and letter of the leftmost specifier.
fn find_specifier(target: &str) -> Option<(usize, u8)> {
    let bytes = target.as_bytes();
    bytes
        .windows(2)
        .position(|w| w[0] == b'%' && SPECIFIERS.contains(&w[1]))
        .map(|at| (at, bytes[at + 1]))
}

fn convert(spec: u8, current: &Value) -> String {
    match spec {
        b's' => current.to_string(),
        b'd' | b'i' => parse_int(&current.to_string()),
        b'f' => parse_float(&current.to_string()),
        b'o' | b'O' => current.inspect(),
        // styling has no effect on a plain text stream
        _ => String::new(),
    }
}

/// Leading integer of `s` in base 10, or `NaN`.
fn parse_int(s: &str) -> String {
    let s = s.trim_start();
    let (sign, rest) = split_sign(s);
    let digits = rest.bytes().take_while(u8::is_ascii_digit).count();
    if digits == 0 {
        return NAN.to_owned();
    }
    let text = &s[..sign + digits];
    text.parse::<i64>().map_or_else(
        |_| {
            text.parse::<f64>()
                .map_or_else(|_| NAN.to_owned(), |x| FloatDisplay(x).to_string())
        },
        |i| i.to_string(),
    )
}

/// Longest floating-point prefix of `s`, or `NaN`.
fn parse_float(s: &str) -> String {
    let s = s.trim_start();
    let (sign, rest) = split_sign(s);
    if rest.starts_with("Infinity") {
        let neg = s.starts_with('-');
        return if neg { "-Infinity" } else { "Infinity" }.to_owned();
    }
    let b = rest.as_bytes();
    let mut end = digits_from(b, 0);
    let int_digits = end;
    let mut frac_digits = 0;
    if b.get(end) == Some(&b'.') {
        let after = digits_from(b, end + 1);
        frac_digits = after - (end + 1);
        if int_digits > 0 || frac_digits > 0 {
            end = after;
        }
    }
    if int_digits == 0 && frac_digits == 0 {
        return NAN.to_owned();
    }
    if matches!(b.get(end), Some(b'e' | b'E')) {
        let mut exp = end + 1;
        if matches!(b.get(exp), Some(b'+' | b'-')) {
            exp += 1;
        }
        let exp_end = digits_from(b, exp);
        if exp_end > exp {
            end = exp_end;
        }
    }
    s[..sign + end]
        .parse::<f64>()
        .map_or_else(|_| NAN.to_owned(), |x| FloatDisplay(x).to_string())
}

const NAN: &str = "NaN";

fn split_sign(s: &str) -> (usize, &str) {
    match s.as_bytes().first() {
        Some(b'+' | b'-') => (1, &s[1..]),
        _ => (0, s),
    }
}

fn digits_from(b: &[u8], start: usize) -> usize {
    start + b.iter().skip(start).take_while(|c| c.is_ascii_digit()).count()
}
