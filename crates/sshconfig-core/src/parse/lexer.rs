//! Lexer and token parsers for ssh_config lines.
//!
//! This module contains the nom-based parsers for each stage of the line
//! grammar. Every parser recognizes raw text only; quote and escape
//! resolution happens in [`super::arguments`].

use nom::{
    IResult, Parser,
    branch::alt,
    bytes::complete::{is_not, tag, take_till, take_while},
    character::complete::{char, none_of, satisfy, space0, space1},
    combinator::{opt, recognize},
    multi::{many0, separated_list1},
    sequence::{delimited, preceded},
};

/// Result type shared by the line lexers.
pub type LexResult<'a, O = &'a str> = IResult<&'a str, O>;

/// Whitespace inside a line: spaces and tabs only.
pub fn is_space(c: char) -> bool {
    c == ' ' || c == '\t'
}

/// Characters that may appear in a keyword.
pub fn is_keyword_char(c: char) -> bool {
    c.is_ascii_alphanumeric()
}

/// Characters that may appear in an unquoted argument token.
///
/// A `"` is allowed anywhere but at the start, where it opens a quoted token.
pub fn is_unquoted_char(c: char) -> bool {
    !matches!(c, ' ' | '\t' | '#' | '\r' | '\n')
}

/// Parses the leading whitespace of a line.
pub fn prefix(input: &str) -> LexResult<'_> {
    space0(input)
}

/// Parses a keyword (possibly empty).
pub fn keyword(input: &str) -> LexResult<'_> {
    take_while(is_keyword_char).parse(input)
}

/// Parses the separator between keyword and arguments.
///
/// Any run of whitespace with at most one `=` inside it. May be empty.
pub fn assignment(input: &str) -> LexResult<'_> {
    recognize((space0, opt(char('=')), space0)).parse(input)
}

/// Parses a double-quoted argument, quotes included.
///
/// Inside the quotes a backslash always pairs with the following character,
/// so `\"` never terminates the string.
pub fn quoted_argument(input: &str) -> LexResult<'_> {
    recognize(delimited(
        char('"'),
        many0(alt((
            is_not("\\\"\r\n"),
            recognize(preceded(char('\\'), none_of("\r\n"))),
        ))),
        char('"'),
    ))
    .parse(input)
}

/// Parses an unquoted argument, which must not start with `"`.
pub fn unquoted_argument(input: &str) -> LexResult<'_> {
    recognize((
        satisfy(|c| c != '"' && is_unquoted_char(c)),
        take_while(is_unquoted_char),
    ))
    .parse(input)
}

/// Parses a single argument token, quoted or not.
pub fn argument_token(input: &str) -> LexResult<'_> {
    alt((quoted_argument, unquoted_argument)).parse(input)
}

/// Parses the whitespace-separated argument tokens, returning the raw text.
///
/// Whitespace after the last token is left for the postfix.
pub fn arguments(input: &str) -> LexResult<'_> {
    recognize(separated_list1(space1, argument_token)).parse(input)
}

/// Parses trailing whitespace after the arguments.
pub fn postfix(input: &str) -> LexResult<'_> {
    space0(input)
}

/// Parses a comment: `#` and everything up to the line terminator.
pub fn comment(input: &str) -> LexResult<'_> {
    recognize((char('#'), take_till(|c: char| c == '\r' || c == '\n'))).parse(input)
}

/// Parses the line terminator, verbatim.
pub fn newline(input: &str) -> LexResult<'_> {
    alt((tag("\r\n"), tag("\n"))).parse(input)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prefix_spaces_and_tabs() {
        assert_eq!(prefix(" \t Host"), Ok(("Host", " \t ")));
        assert_eq!(prefix("Host"), Ok(("Host", "")));
    }

    #[test]
    fn keyword_alphanumeric_only() {
        assert_eq!(keyword("Port22 x"), Ok((" x", "Port22")));
        assert_eq!(keyword("Host=a"), Ok(("=a", "Host")));
        assert_eq!(keyword("@x"), Ok(("@x", "")));
    }

    #[test]
    fn assignment_forms() {
        assert_eq!(assignment(" a"), Ok(("a", " ")));
        assert_eq!(assignment("=a"), Ok(("a", "=")));
        assert_eq!(assignment(" \t= \ta"), Ok(("a", " \t= \t")));
        assert_eq!(assignment("==a"), Ok(("=a", "=")));
        assert_eq!(assignment("a"), Ok(("a", "")));
    }

    #[test]
    fn quoted_argument_with_escapes() {
        assert_eq!(quoted_argument(r#""a b" c"#), Ok((" c", r#""a b""#)));
        assert_eq!(quoted_argument(r#""a \"b\"""#), Ok(("", r#""a \"b\"""#)));
        assert_eq!(quoted_argument(r#""c:\\dir""#), Ok(("", r#""c:\\dir""#)));
        assert_eq!(quoted_argument(r#""a\nb""#), Ok(("", r#""a\nb""#)));
        assert_eq!(quoted_argument(r#""""#), Ok(("", r#""""#)));
    }

    #[test]
    fn quoted_argument_unterminated_fails() {
        assert!(quoted_argument(r#""abc"#).is_err());
        assert!(quoted_argument(r#""abc\""#).is_err());
        assert!(quoted_argument("\"abc\n\"").is_err());
    }

    #[test]
    fn unquoted_argument_stops_at_delimiters() {
        assert_eq!(unquoted_argument("a.b#c"), Ok(("#c", "a.b")));
        assert_eq!(unquoted_argument("a\"b c"), Ok((" c", "a\"b")));
        assert!(unquoted_argument("\"b").is_err());
        assert_eq!(unquoted_argument("a\tb"), Ok(("\tb", "a")));
        assert!(unquoted_argument(" a").is_err());
    }

    #[test]
    fn arguments_leave_trailing_whitespace() {
        assert_eq!(arguments("a \"b c\"  d  #x"), Ok(("  #x", "a \"b c\"  d")));
        assert_eq!(arguments("a\r\n"), Ok(("\r\n", "a")));
        assert!(arguments("#x").is_err());
    }

    #[test]
    fn arguments_keep_embedded_quotes() {
        assert_eq!(arguments("a\"b\""), Ok(("", "a\"b\"")));
        assert_eq!(
            arguments("-o ProxyCommand=\"nc %h %p\" jump"),
            Ok(("", "-o ProxyCommand=\"nc %h %p\" jump"))
        );
    }

    #[test]
    fn arguments_stop_after_closing_quote() {
        assert_eq!(arguments("\"a\"b"), Ok(("b", "\"a\"")));
        assert!(arguments("\"open").is_err());
    }

    #[test]
    fn comment_runs_to_terminator() {
        assert_eq!(comment("# foo bar\n"), Ok(("\n", "# foo bar")));
        assert_eq!(comment("#"), Ok(("", "#")));
        assert!(comment("foo").is_err());
    }

    #[test]
    fn newline_verbatim() {
        assert_eq!(newline("\n"), Ok(("", "\n")));
        assert_eq!(newline("\r\n"), Ok(("", "\r\n")));
        assert!(newline("\r").is_err());
        assert!(newline("").is_err());
    }
}
