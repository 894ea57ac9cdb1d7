//! Archived web page (MHTML) decoding.
//!
//! An MHTML capture is a MIME multi-part message; the page markup lives in a
//! `text/html` part next to images and stylesheets.

use mailparse::{parse_mail, ParsedMail};

use crate::config::DEFAULT_CHARSET;
use crate::error::DecodeError;

/// Charset mailparse reports when a part declares none.
const MAILPARSE_DEFAULT_CHARSET: &str = "us-ascii";

/// Decode the first `text/html` part of an archive container.
///
/// Parts are visited depth-first in document order. A part without a
/// declared charset is decoded as UTF-8.
///
/// # Errors
/// `DecodeError::NoMarkupPart` when the container holds no markup part.
pub fn decode_markup(raw: &[u8]) -> Result<String, DecodeError> {
    let message = parse_mail(raw).map_err(DecodeError::MimeParse)?;

    let mut parts = Vec::new();
    walk(&message, &mut parts);
    tracing::debug!(parts = parts.len(), "Scanned archive container");

    let part = parts
        .into_iter()
        .find(|p| p.ctype.mimetype == "text/html")
        .ok_or(DecodeError::NoMarkupPart)?;

    decode_part(part)
}

/// Collect a part and all its subparts, pre-order.
fn walk<'a, 'm>(part: &'a ParsedMail<'m>, out: &mut Vec<&'a ParsedMail<'m>>) {
    out.push(part);
    for sub in &part.subparts {
        walk(sub, out);
    }
}

fn decode_part(part: &ParsedMail<'_>) -> Result<String, DecodeError> {
    let charset = part.ctype.charset.as_str();

    // mailparse reports us-ascii for an undeclared charset; UTF-8 is a
    // superset, so both cases decode the same way.
    if charset == MAILPARSE_DEFAULT_CHARSET || charset == DEFAULT_CHARSET {
        let bytes = part.get_body_raw().map_err(DecodeError::Body)?;
        tracing::debug!(bytes = bytes.len(), charset = DEFAULT_CHARSET, "Decoded markup part");
        return Ok(String::from_utf8_lossy(&bytes).into_owned());
    }

    let body = part.get_body().map_err(DecodeError::Body)?;
    tracing::debug!(bytes = body.len(), charset, "Decoded markup part");
    Ok(body)
}
