//! Input line parsing.
//!
//! A line has the shape `id:title:body`, optionally followed by `#comment`
//! inside the body. There is no escaping: a `:` inside the id or title shifts
//! the fields, while any `:` after the second delimiter stays in the body.

use crate::Record;
use crate::error::ParseError;

pub const FIELD_DELIMITER: char = ':';
pub const COMMENT_MARKER: char = '#';

const FIELD_COUNT: usize = 3;

pub fn parse_line(line: &str) -> Result<Record, ParseError> {
    let parts: Vec<&str> = line.splitn(FIELD_COUNT, FIELD_DELIMITER).collect();

    let [id, title, rest] = parts.as_slice() else {
        return Err(ParseError::InvalidFormat {
            line: line.trim_end_matches(['\r', '\n']).to_string(),
            fields: parts.len(),
        });
    };

    Ok(Record::new(
        id.trim().to_string(),
        title.trim().to_string(),
        strip_comment(rest).trim().to_string(),
    ))
}

fn strip_comment(field: &str) -> &str {
    match field.split_once(COMMENT_MARKER) {
        Some((value, _comment)) => value,
        None => field,
    }
}
