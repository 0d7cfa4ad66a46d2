//! Argument codec.
//!
//! Converts the raw arguments text of a line into logical values and back.
//! Inside double quotes, `\"` and `\\` are the only escapes; every other
//! character, including a lone backslash, is literal. Unquoted tokens are
//! taken verbatim.

use super::error::{DecodeError, EncodeError};
use super::lexer::{argument_token, is_space, is_unquoted_char};
use super::span::SpanTracker;

/// Decodes raw argument text into its logical values.
///
/// Leading and trailing whitespace is accepted. Text that the line parser
/// would not have produced fails instead of being guessed at.
pub fn decode_arguments(raw: &str) -> Result<Vec<String>, DecodeError> {
    let mut tracker = SpanTracker::new(raw);
    let mut values = Vec::new();

    loop {
        skip_whitespace(&mut tracker);
        let Some(next) = tracker.peek_char() else {
            break;
        };

        match argument_token(tracker.as_str()) {
            Ok((rest, token)) => {
                tracker.advance_to(rest);
                values.push(decode_token(token));
                // Tokens must be separated by whitespace
                match tracker.peek_char() {
                    Some(c) if !is_space(c) => {
                        return Err(DecodeError::UnexpectedCharacter {
                            position: tracker.offset(),
                            character: c,
                        });
                    }
                    _ => {}
                }
            }
            Err(_) if next == '"' => {
                return Err(DecodeError::UnterminatedQuote {
                    position: tracker.offset(),
                });
            }
            Err(_) => {
                return Err(DecodeError::UnexpectedCharacter {
                    position: tracker.offset(),
                    character: next,
                });
            }
        }
    }

    Ok(values)
}

fn skip_whitespace(tracker: &mut SpanTracker<'_>) {
    let rest = tracker.as_str().trim_start_matches(is_space);
    tracker.advance_to(rest);
}

/// Decodes one token recognized by the lexer.
fn decode_token(token: &str) -> String {
    let Some(inner) = token
        .strip_prefix('"')
        .and_then(|quoted| quoted.strip_suffix('"'))
    else {
        return token.to_string();
    };

    let mut value = String::with_capacity(inner.len());
    let mut chars = inner.chars().peekable();
    while let Some(c) = chars.next() {
        if c == '\\' {
            if let Some(&next) = chars.peek() {
                if next == '"' || next == '\\' {
                    value.push(next);
                    chars.next();
                    continue;
                }
            }
        }
        value.push(c);
    }
    value
}

/// Encodes one logical value as an argument token.
///
/// Values that are valid unquoted tokens are returned unchanged; everything
/// else is quoted with `"` and `\` escaped. A leading `=` is quoted too, as
/// the line parser would read it as part of the assignment.
pub fn encode_argument(value: &str) -> Result<String, EncodeError> {
    if value.contains(['\r', '\n']) {
        return Err(EncodeError::LineTerminator {
            value: value.to_string(),
        });
    }
    if is_plain_token(value) {
        return Ok(value.to_string());
    }

    let mut encoded = String::with_capacity(value.len() + 2);
    encoded.push('"');
    for c in value.chars() {
        if c == '"' || c == '\\' {
            encoded.push('\\');
        }
        encoded.push(c);
    }
    encoded.push('"');
    Ok(encoded)
}

fn is_plain_token(value: &str) -> bool {
    match value.chars().next() {
        None | Some('"' | '=') => false,
        Some(_) => value.chars().all(is_unquoted_char),
    }
}

/// Encodes values as raw argument text, separated by single spaces.
pub fn encode_arguments(values: &[impl AsRef<str>]) -> Result<String, EncodeError> {
    let encoded = values
        .iter()
        .map(|value| encode_argument(value.as_ref()))
        .collect::<Result<Vec<_>, _>>()?;
    Ok(encoded.join(" "))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decode_plain_tokens() {
        assert_eq!(decode_arguments("").unwrap(), Vec::<String>::new());
        assert_eq!(decode_arguments("a").unwrap(), vec!["a"]);
        assert_eq!(decode_arguments("  a \t b   ").unwrap(), vec!["a", "b"]);
    }

    #[test]
    fn decode_quoted_tokens() {
        assert_eq!(decode_arguments(r#""a b" c"#).unwrap(), vec!["a b", "c"]);
        assert_eq!(decode_arguments(r#""a \"b\"""#).unwrap(), vec![r#"a "b""#]);
        assert_eq!(decode_arguments(r#""c:\\dir""#).unwrap(), vec![r"c:\dir"]);
        assert_eq!(decode_arguments(r#""""#).unwrap(), vec![""]);
    }

    #[test]
    fn decode_keeps_other_backslashes() {
        assert_eq!(decode_arguments(r#""a\nb""#).unwrap(), vec![r"a\nb"]);
        assert_eq!(decode_arguments(r"C:\keys\id").unwrap(), vec![r"C:\keys\id"]);
    }

    #[test]
    fn decode_unquoted_tokens_keep_quotes() {
        assert_eq!(decode_arguments(r#"a"b"#).unwrap(), vec![r#"a"b"#]);
        assert_eq!(
            decode_arguments(r#"-o ProxyCommand="nc %h %p" jump"#).unwrap(),
            vec!["-o", r#"ProxyCommand="nc"#, "%h", r#"%p""#, "jump"]
        );
    }

    #[test]
    fn decode_unterminated_quote() {
        assert_eq!(
            decode_arguments(r#"a "bc"#),
            Err(DecodeError::UnterminatedQuote { position: 2 })
        );
        assert_eq!(
            decode_arguments(r#""abc\""#),
            Err(DecodeError::UnterminatedQuote { position: 0 })
        );
    }

    #[test]
    fn decode_rejects_comment_and_glued_quote() {
        assert_eq!(
            decode_arguments("a #b"),
            Err(DecodeError::UnexpectedCharacter {
                position: 2,
                character: '#'
            })
        );
        assert_eq!(
            decode_arguments(r#""a"b"#),
            Err(DecodeError::UnexpectedCharacter {
                position: 3,
                character: 'b'
            })
        );
    }

    #[test]
    fn encode_leaves_simple_values_alone() {
        assert_eq!(encode_argument("example.com").unwrap(), "example.com");
        assert_eq!(encode_argument(r"C:\id").unwrap(), r"C:\id");
        assert_eq!(encode_argument(r#"a"b"#).unwrap(), r#"a"b"#);
        assert_eq!(encode_argument("a=b").unwrap(), "a=b");
    }

    #[test]
    fn encode_quotes_when_needed() {
        assert_eq!(encode_argument("a b").unwrap(), r#""a b""#);
        assert_eq!(encode_argument("").unwrap(), r#""""#);
        assert_eq!(encode_argument("#x").unwrap(), r##""#x""##);
        assert_eq!(encode_argument("=x").unwrap(), r#""=x""#);
        assert_eq!(encode_argument(r#""x"#).unwrap(), r#""\"x""#);
        assert_eq!(encode_argument(r#"say "hi" \o/"#).unwrap(), r#""say \"hi\" \\o/""#);
    }

    #[test]
    fn encode_rejects_line_terminators() {
        assert!(matches!(
            encode_argument("a\nb"),
            Err(EncodeError::LineTerminator { .. })
        ));
    }

    #[test]
    fn encoded_values_decode_back() {
        let values = [
            "plain", "with space", "", "quote\"d", "\"lead", r"back\slash", "tab\there", "#hash", "=eq",
        ];
        let raw = encode_arguments(&values).unwrap();
        assert_eq!(decode_arguments(&raw).unwrap(), values);
    }
}
