use crate::error::{GameError, Result};

const QUOTE: char = '"';

fn needs_quotes(arg: &str) -> bool {
    arg.is_empty() || arg.starts_with(QUOTE) || arg.chars().any(char::is_whitespace)
}

fn quote_arg(arg: &str) -> String {
    if !needs_quotes(arg) {
        return arg.to_string();
    }
    let escaped = arg.replace(QUOTE, "\"\"");
    format!("{QUOTE}{escaped}{QUOTE}")
}

/// Joins argument tokens with single spaces into one form-field string.
///
/// Tokens without whitespace are written verbatim, backslashes, `#` and
/// apostrophes included. A token that is empty, contains whitespace or
/// starts with `"` is wrapped in double quotes, with inner `"` doubled.
pub fn encode_args<I, S>(args: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    args.into_iter()
        .map(|arg| quote_arg(arg.as_ref()))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Splits a form-field string into argument tokens.
///
/// Runs of whitespace separate tokens, so a trailing space is harmless. A
/// token starting with `"` runs to the matching closing quote (`""` inside
/// stands for one `"`); every other token is taken literally. An unterminated
/// quoted token, or one glued to further text, is rejected.
pub fn decode_args(input: &str) -> Result<Vec<String>> {
    let mut tokens = Vec::new();
    let mut chars = input.chars().peekable();

    loop {
        while chars.next_if(|c| c.is_whitespace()).is_some() {}
        let Some(&first) = chars.peek() else {
            break;
        };

        if first != QUOTE {
            let mut token = String::new();
            while let Some(c) = chars.next_if(|c| !c.is_whitespace()) {
                token.push(c);
            }
            tokens.push(token);
            continue;
        }

        chars.next();
        let mut token = String::new();
        loop {
            match chars.next() {
                Some(QUOTE) if chars.next_if_eq(&QUOTE).is_some() => token.push(QUOTE),
                Some(QUOTE) => break,
                Some(c) => token.push(c),
                None => {
                    return Err(GameError::malformed(format!(
                        "unterminated quoted argument in {input:?}"
                    )))
                }
            }
        }
        if chars.peek().is_some_and(|c| !c.is_whitespace()) {
            return Err(GameError::malformed(format!(
                "text after closing quote in arguments {input:?}"
            )));
        }
        tokens.push(token);
    }

    Ok(tokens)
}
