//! Literal tag-pair extraction.
//!
//! The installer query tool emits XML, but only a handful of flat fields are
//! needed, so this is substring search for a literal opening tag and the next
//! literal closing tag. Attributes, entities and nested same-name tags are
//! not handled.

use crate::error::{Result, VsFindError};

/// Every non-overlapping text enclosed by `open` … `close`, in order.
///
/// An opening tag without a matching closing tag ends the scan.
pub fn find_all_enclosed<'a>(input: &'a str, open: &str, close: &str) -> Vec<&'a str> {
    let mut found = Vec::new();
    let mut rest = input;

    while let Some(start) = rest.find(open) {
        let after_open = &rest[start + open.len()..];
        let Some(end) = after_open.find(close) else {
            break;
        };
        found.push(&after_open[..end]);
        rest = &after_open[end + close.len()..];
    }

    found
}

/// The enclosed text when the tag pair occurs zero or one times.
pub fn find_at_most_one_enclosed<'a>(
    input: &'a str,
    open: &str,
    close: &str,
) -> Result<Option<&'a str>> {
    let all = find_all_enclosed(input, open, close);
    match all.as_slice() {
        [] => Ok(None),
        [single] => Ok(Some(*single)),
        _ => Err(VsFindError::MalformedQueryOutput {
            message: format!("expected at most one {}, found {}", open, all.len()),
        }),
    }
}

/// The enclosed text when the tag pair occurs exactly once.
pub fn find_exactly_one_enclosed<'a>(input: &'a str, open: &str, close: &str) -> Result<&'a str> {
    let all = find_all_enclosed(input, open, close);
    match all.as_slice() {
        [single] => Ok(*single),
        _ => Err(VsFindError::MalformedQueryOutput {
            message: format!("expected exactly one {}, found {}", open, all.len()),
        }),
    }
}
