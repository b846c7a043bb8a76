use std::str::FromStr;

use combine::{easy, parser::char::digit, EasyParser, ParseError, Parser, Stream};

pub type EzParseError<'a> = easy::ParseError<&'a str>;
pub type Result<'a, T> = std::result::Result<T, EzParseError<'a>>;

/// Runs `parser` against the whole of `s`, requiring it to consume all input.
pub fn from_str<'a, P>(s: &'a str, parser: P) -> Result<'a, P::Output>
where
    P: Parser<easy::Stream<&'a str>>,
{
    (parser, combine::eof())
        .map(|(output, _)| output)
        .easy_parse(s)
        .map(|(output, rest)| {
            debug_assert_eq!(rest, "");
            output
        })
}

/// Parses an unsigned decimal integer, e.g. `"42"`.
pub fn decimal_integer<T, Input>() -> impl Parser<Input, Output = T>
where
    T: FromStr,
    T::Err: std::fmt::Debug,
    Input: Stream<Token = char>,
    Input::Error: ParseError<Input::Token, Input::Range, Input::Position>,
{
    combine::many1(digit()).map(|digits: String| {
        digits
            .parse()
            .expect("a run of decimal digits should parse as an integer")
    })
}

/// Parses a decimal integer with an optional leading minus sign, e.g. `"-7"`.
pub fn signed_decimal_integer<T, Input>() -> impl Parser<Input, Output = T>
where
    T: FromStr,
    T::Err: std::fmt::Debug,
    Input: Stream<Token = char>,
    Input::Error: ParseError<Input::Token, Input::Range, Input::Position>,
{
    (
        combine::optional(combine::token('-')),
        combine::many1(digit()),
    )
        .map(|(sign, digits): (Option<char>, String)| {
            let mut number = String::new();
            if sign.is_some() {
                number.push('-');
            }
            number.push_str(&digits);
            number
                .parse()
                .expect("a signed run of decimal digits should parse as an integer")
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decimal_integer() {
        assert_eq!(from_str("42", decimal_integer::<u32, _>()), Ok(42));
        assert!(from_str("4x", decimal_integer::<u32, _>()).is_err());
    }

    #[test]
    fn test_signed_decimal_integer() {
        assert_eq!(from_str("42", signed_decimal_integer::<i64, _>()), Ok(42));
        assert_eq!(from_str("-7", signed_decimal_integer::<i64, _>()), Ok(-7));
    }
}
