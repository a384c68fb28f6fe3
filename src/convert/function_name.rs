// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Node2json-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of node2json and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Reads the name and parameters of a wrapped function from its source text.
//!
//! Grammar for the name: take the text up to the first `:`, then up to the first `(`, then the
//! last whitespace-separated token. `def my_filter(x):` yields `my_filter`.

use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FunctionNameError {
    MissingColon,
    MissingOpenParen,
    MissingName,
    InvalidName { name: String },
    InvalidParam { param: String },
    UnterminatedParams,
}

impl fmt::Display for FunctionNameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingColon => f.write_str("function source has no ':'"),
            Self::MissingOpenParen => f.write_str("function header has no '('"),
            Self::MissingName => f.write_str("function header has no name before '('"),
            Self::InvalidName { name } => write!(f, "function name is not an identifier: {name:?}"),
            Self::InvalidParam { param } => {
                write!(f, "function parameter is not an identifier: {param:?}")
            }
            Self::UnterminatedParams => f.write_str("function parameter list is not closed"),
        }
    }
}

impl std::error::Error for FunctionNameError {}

pub fn parse_function_name(source: &str) -> Result<String, FunctionNameError> {
    let (header, _) = source.split_once(':').ok_or(FunctionNameError::MissingColon)?;
    let (before_paren, _) = header.split_once('(').ok_or(FunctionNameError::MissingOpenParen)?;
    let name = before_paren.split_whitespace().last().ok_or(FunctionNameError::MissingName)?;
    if !is_identifier(name) {
        return Err(FunctionNameError::InvalidName { name: name.to_owned() });
    }
    Ok(name.to_owned())
}

/// Parameter names of the function, in order.
///
/// Annotations, defaults, `#` comments and `*`/`**` markers are stripped; the bare `*` and `/`
/// separators are skipped. Commas nested in brackets or string literals do not split
/// parameters. Any other chunk that does not name a parameter is an error.
pub fn parse_function_params(source: &str) -> Result<Vec<String>, FunctionNameError> {
    parse_function_name(source)?;
    let (_, after_paren) = source.split_once('(').ok_or(FunctionNameError::MissingOpenParen)?;

    let mut chunks = Vec::new();
    let mut current = String::new();
    let mut depth = 0usize;
    let mut quote: Option<char> = None;
    let mut escaped = false;
    let mut in_comment = false;
    let mut closed = false;

    for ch in after_paren.chars() {
        if in_comment {
            if ch == '\n' {
                in_comment = false;
                current.push(ch);
            }
            continue;
        }
        if let Some(q) = quote {
            if escaped {
                escaped = false;
            } else if ch == '\\' {
                escaped = true;
            } else if ch == q {
                quote = None;
            }
            current.push(ch);
            continue;
        }
        match ch {
            '#' => in_comment = true,
            '\'' | '"' => {
                quote = Some(ch);
                current.push(ch);
            }
            '(' | '[' | '{' => {
                depth += 1;
                current.push(ch);
            }
            ')' if depth == 0 => {
                closed = true;
                break;
            }
            ')' | ']' | '}' => {
                depth = depth.saturating_sub(1);
                current.push(ch);
            }
            ',' if depth == 0 => chunks.push(std::mem::take(&mut current)),
            _ => current.push(ch),
        }
    }

    if !closed {
        return Err(FunctionNameError::UnterminatedParams);
    }
    // Empty only for `f()` or after a trailing comma.
    if !current.trim().is_empty() {
        chunks.push(current);
    }

    let mut params = Vec::new();
    for chunk in &chunks {
        params.extend(param_name(chunk)?);
    }
    Ok(params)
}

fn param_name(raw: &str) -> Result<Option<String>, FunctionNameError> {
    let end = raw.find(|c| c == ':' || c == '=').unwrap_or(raw.len());
    let head = raw[..end].trim();
    if head == "*" || head == "/" {
        return Ok(None);
    }
    let name = head.strip_prefix("**").or_else(|| head.strip_prefix('*')).unwrap_or(head).trim();
    if !is_identifier(name) {
        return Err(FunctionNameError::InvalidParam { param: raw.trim().to_owned() });
    }
    Ok(Some(name.to_owned()))
}

fn is_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) if first == '_' || first.is_alphabetic() => {}
        _ => return false,
    }
    chars.all(|c| c == '_' || c.is_alphanumeric())
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::{parse_function_name, parse_function_params, FunctionNameError};

    #[rstest]
    #[case("def my_filter(x):\n    return x", "my_filter")]
    #[case("def  spaced (a, b):\n    pass", "spaced")]
    #[case("\n\ndef leading_newlines(img):\n    pass", "leading_newlines")]
    #[case("def annotated(x: int) -> int:\n    return x", "annotated")]
    #[case("async def fetch(url):\n    pass", "fetch")]
    fn parses_function_names(#[case] source: &str, #[case] expected: &str) {
        assert_eq!(parse_function_name(source).expect("parse"), expected);
    }

    #[rstest]
    #[case("def missing_colon(x)", FunctionNameError::MissingColon)]
    #[case("x = 1: 2", FunctionNameError::MissingOpenParen)]
    #[case("(x):", FunctionNameError::MissingName)]
    #[case("def 9lives(x):", FunctionNameError::InvalidName { name: "9lives".to_owned() })]
    fn rejects_malformed_headers(#[case] source: &str, #[case] expected: FunctionNameError) {
        assert_eq!(parse_function_name(source).unwrap_err(), expected);
    }

    #[rstest]
    #[case("def f(a, b: int = 3, *args, c=(1, 2), d={'k': [1, 2]}, **kwargs):\n    pass",
        &["a", "b", "args", "c", "d", "kwargs"])]
    #[case("def f(a, /, b, *, c):\n    pass", &["a", "b", "c"])]
    #[case("def f(sep=',', x=\"(\"):\n    pass", &["sep", "x"])]
    #[case("def f(q='\\'', x=1):\n    return q", &["q", "x"])]
    #[case("def f(p=\"a\\\\\", y=2):\n    return p", &["p", "y"])]
    #[case("def band(in_file,  # input image\n         low=0.01):\n    return in_file",
        &["in_file", "low"])]
    #[case("def f(\n    a,  # first, with a comma\n    b,  # (unbalanced\n):\n    pass",
        &["a", "b"])]
    #[case("def f(a, b,):\n    pass", &["a", "b"])]
    fn parses_function_params(#[case] source: &str, #[case] expected: &[&str]) {
        assert_eq!(parse_function_params(source).expect("params"), expected);
    }

    #[rstest]
    #[case("def f(a, 1b):\n    pass", "1b")]
    #[case("def f(a,, b):\n    pass", "")]
    #[case("def f(a b):\n    pass", "a b")]
    #[case("def f(,):\n    pass", "")]
    fn rejects_malformed_params(#[case] source: &str, #[case] param: &str) {
        assert_eq!(
            parse_function_params(source).unwrap_err(),
            FunctionNameError::InvalidParam { param: param.to_owned() }
        );
    }

    #[test]
    fn params_allow_empty_list() {
        assert!(parse_function_params("def f():\n    pass").expect("params").is_empty());
    }

    #[test]
    fn params_reject_unterminated_list() {
        assert_eq!(
            parse_function_params("def f(a, b:").unwrap_err(),
            FunctionNameError::UnterminatedParams
        );
    }
}
