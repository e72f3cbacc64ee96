//! Numeric coercion for raw form input.
//!
//! Form fields hold whatever text the user typed. Right before a request is
//! built, numeric fields are coerced with *leading-prefix* parsing: the longest
//! numeric prefix wins and trailing garbage is ignored (`"12abc"` is `12`).
//! Input with no numeric prefix at all coerces to "not a number", which goes
//! over the wire as JSON `null`.

/// Coerce raw input to a float.
///
/// Accepts leading whitespace, an optional sign, then either `Infinity` or a
/// decimal literal (`12`, `12.5`, `.5`, `12.`, `1e3`, `1.5E-2`). Returns
/// `f64::NAN` when no such prefix exists.
pub fn parse_float(input: &str) -> f64 {
    let trimmed = skip_leading_whitespace(input);
    let (negative, body) = split_sign(trimmed);

    if body.starts_with("Infinity") {
        return if negative {
            f64::NEG_INFINITY
        } else {
            f64::INFINITY
        };
    }

    let len = decimal_prefix_len(body);
    if len == 0 {
        return f64::NAN;
    }

    let sign_len = trimmed.len() - body.len();
    match trimmed[..sign_len + len].parse::<f64>() {
        // Negative zero has no distinct JSON spelling.
        Ok(value) if value == 0.0 => 0.0,
        Ok(value) => value,
        Err(_) => f64::NAN,
    }
}

/// Coerce raw input to an integer.
///
/// Accepts leading whitespace, an optional sign, and either decimal digits or
/// a `0x`/`0X` prefixed hexadecimal run. Anything after the digits is ignored,
/// including a fractional part (`"1.9"` is `1`).
///
/// Returns `None` when there are no digits or the value does not fit in `i64`.
pub fn parse_int(input: &str) -> Option<i64> {
    let trimmed = skip_leading_whitespace(input);
    let (negative, body) = split_sign(trimmed);

    let (radix, digits) = match body
        .strip_prefix("0x")
        .or_else(|| body.strip_prefix("0X"))
    {
        Some(hex) => (16, hex),
        None => (10, body),
    };

    let len = digits
        .bytes()
        .take_while(|b| (*b as char).is_digit(radix))
        .count();
    if len == 0 {
        return None;
    }

    let mut literal = String::with_capacity(len + 1);
    if negative {
        literal.push('-');
    }
    literal.push_str(&digits[..len]);

    i64::from_str_radix(&literal, radix).ok()
}

fn skip_leading_whitespace(input: &str) -> &str {
    input.trim_start_matches(is_form_whitespace)
}

/// Whitespace and line terminators skipped before a number, as a browser does.
/// Unlike `char::is_whitespace` this excludes U+0085.
fn is_form_whitespace(c: char) -> bool {
    matches!(
        c,
        '\t' | '\n'
            | '\u{0b}'
            | '\u{0c}'
            | '\r'
            | ' '
            | '\u{a0}'
            | '\u{1680}'
            | '\u{2000}'..='\u{200a}'
            | '\u{2028}'
            | '\u{2029}'
            | '\u{202f}'
            | '\u{205f}'
            | '\u{3000}'
            | '\u{feff}'
    )
}

fn split_sign(input: &str) -> (bool, &str) {
    if let Some(rest) = input.strip_prefix('-') {
        (true, rest)
    } else if let Some(rest) = input.strip_prefix('+') {
        (false, rest)
    } else {
        (false, input)
    }
}

/// Length in bytes of the longest unsigned decimal literal at the start of `s`.
fn decimal_prefix_len(s: &str) -> usize {
    let bytes = s.as_bytes();

    let int_digits = count_digits(bytes, 0);
    let mut end = int_digits;

    let mut frac_digits = 0;
    if bytes.get(end) == Some(&b'.') {
        frac_digits = count_digits(bytes, end + 1);
        if int_digits > 0 || frac_digits > 0 {
            end += 1 + frac_digits;
        }
    }

    if int_digits == 0 && frac_digits == 0 {
        return 0;
    }

    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut exp_start = end + 1;
        if matches!(bytes.get(exp_start), Some(b'+' | b'-')) {
            exp_start += 1;
        }
        let exp_digits = count_digits(bytes, exp_start);
        // A dangling exponent marker is not part of the literal.
        if exp_digits > 0 {
            end = exp_start + exp_digits;
        }
    }

    end
}

fn count_digits(bytes: &[u8], from: usize) -> usize {
    bytes
        .get(from..)
        .map_or(0, |rest| rest.iter().take_while(|b| b.is_ascii_digit()).count())
}
