use crate::{new_parser_error, Result, Rule};
use num::Num;
use pest::iterators::Pair;
use std::num::ParseIntError;

// Integer literals are decimal or 0x-prefixed hexadecimal, optionally
// negative. The grammar guarantees the shape; only range errors remain.

fn split_radix(text: &str) -> (bool, u32, &str) {
    let (negative, body) = if text.starts_with('-') {
        (true, &text[1..])
    } else {
        (false, text)
    };
    if body.starts_with("0x") {
        (negative, 16, &body[2..])
    } else {
        (negative, 10, body)
    }
}

fn num_lit<T>(pair: &Pair<Rule>, digits: &str, radix: u32) -> Result<T>
where
    T: Num<FromStrRadixErr = ParseIntError>,
{
    T::from_str_radix(digits, radix)
        .map_err(|err| new_parser_error(pair.as_span(), format!("Parsing integer failed: {}", err)))
}

/// Processes an `int` pair into an unsigned 64-bit value.
pub fn process_uint(pair: &Pair<Rule>) -> Result<u64> {
    let (negative, radix, digits) = split_radix(pair.as_str());
    if negative {
        return Err(new_parser_error(
            pair.as_span(),
            "Expected an unsigned value".to_owned(),
        ));
    }
    num_lit(pair, digits, radix)
}

/// Processes an `int` pair into a signed 64-bit value.
pub fn process_int(pair: &Pair<Rule>) -> Result<i64> {
    let (negative, radix, digits) = split_radix(pair.as_str());
    let magnitude: u64 = num_lit(pair, digits, radix)?;

    let limit = i64::max_value() as u64 + if negative { 1 } else { 0 };
    if magnitude > limit {
        return Err(new_parser_error(
            pair.as_span(),
            "Integer value out of range".to_owned(),
        ));
    }
    if negative {
        Ok(magnitude.wrapping_neg() as i64)
    } else {
        Ok(magnitude as i64)
    }
}
