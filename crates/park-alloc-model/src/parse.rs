// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

use crate::err::ParseTupleError;

/// Parses a tuple of non-negative integers such as `"(1, 2, 3)"`.
///
/// Surrounding parentheses and all whitespace are optional, so `"1,2,3"`
/// parses the same. Range checks are left to the validated input types.
///
/// # Examples
///
/// ```
/// use park_alloc_model::parse::parse_tuple;
///
/// assert_eq!(parse_tuple("(2, 2, 1)"), Ok(vec![2, 2, 1]));
/// assert!(parse_tuple("(2, x)").is_err());
/// ```
pub fn parse_tuple(input: &str) -> Result<Vec<usize>, ParseTupleError> {
    let cleaned: String = input.chars().filter(|c| !c.is_whitespace()).collect();
    let inner = cleaned.trim_start_matches('(').trim_end_matches(')');
    if inner.is_empty() {
        return Err(ParseTupleError::Empty);
    }

    inner
        .split(',')
        .map(|token| {
            token
                .parse::<usize>()
                .map_err(|_| ParseTupleError::InvalidNumber(token.to_string()))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_with_parentheses_and_spaces() {
        assert_eq!(parse_tuple("(1, 2, 3)"), Ok(vec![1, 2, 3]));
    }

    #[test]
    fn test_parse_without_parentheses() {
        assert_eq!(parse_tuple("3,1,2"), Ok(vec![3, 1, 2]));
    }

    #[test]
    fn test_parse_single_value() {
        assert_eq!(parse_tuple("(4)"), Ok(vec![4]));
    }

    #[test]
    fn test_parse_inner_whitespace() {
        assert_eq!(parse_tuple("  ( 1 ,\t2 )  "), Ok(vec![1, 2]));
    }

    #[test]
    fn test_parse_empty() {
        assert_eq!(parse_tuple("()"), Err(ParseTupleError::Empty));
        assert_eq!(parse_tuple("   "), Err(ParseTupleError::Empty));
    }

    #[test]
    fn test_parse_rejects_negative() {
        assert_eq!(
            parse_tuple("(1, -2)"),
            Err(ParseTupleError::InvalidNumber("-2".to_string()))
        );
    }

    #[test]
    fn test_parse_rejects_trailing_comma() {
        assert_eq!(
            parse_tuple("(1, 2,)"),
            Err(ParseTupleError::InvalidNumber(String::new()))
        );
    }
}
