use std::io::{Cursor, Read};

use once_cell::sync::Lazy;
use regex::Regex;

use super::ExtractionError;

const DOCUMENT_PART: &str = "word/document.xml";

/// Runs of text plus the markup that becomes whitespace.
static DOCX_TOKEN_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"<w:t(?:\s[^>]*)?>([^<]*)</w:t>|</w:p>|<w:p\s*/>|<w:tab\s*/>|<w:br\s*/>").unwrap()
});

/// Paragraph texts of the main document part, one per line.
///
/// The decompressed document part may not exceed `max_xml_bytes`. The declared
/// size is checked first, then the read itself is capped, since the header can lie.
pub fn extract_docx(bytes: &[u8], max_xml_bytes: usize) -> Result<String, ExtractionError> {
    let mut archive = zip::ZipArchive::new(Cursor::new(bytes))
        .map_err(|e| ExtractionError::Failed(format!("not a DOCX archive: {e}")))?;

    let part = archive
        .by_name(DOCUMENT_PART)
        .map_err(|e| ExtractionError::Failed(format!("missing {DOCUMENT_PART}: {e}")))?;

    let limit = max_xml_bytes as u64;
    if part.size() > limit {
        return Err(too_large(max_xml_bytes));
    }

    let mut raw = Vec::new();
    part.take(limit + 1)
        .read_to_end(&mut raw)
        .map_err(|e| ExtractionError::Failed(e.to_string()))?;
    if raw.len() > max_xml_bytes {
        return Err(too_large(max_xml_bytes));
    }

    let xml = String::from_utf8(raw)
        .map_err(|e| ExtractionError::Failed(format!("{DOCUMENT_PART} is not UTF-8: {e}")))?;
    Ok(document_xml_to_text(&xml))
}

fn too_large(max_xml_bytes: usize) -> ExtractionError {
    ExtractionError::Failed(format!(
        "{DOCUMENT_PART} expands beyond {max_xml_bytes} bytes"
    ))
}

fn document_xml_to_text(xml: &str) -> String {
    let mut paragraphs = Vec::new();
    let mut current = String::new();

    for caps in DOCX_TOKEN_RE.captures_iter(xml) {
        if let Some(run) = caps.get(1) {
            current.push_str(&decode_entities(run.as_str()));
            continue;
        }
        match &caps[0] {
            tag if tag.starts_with("<w:tab") => current.push('\t'),
            tag if tag.starts_with("<w:br") => current.push('\n'),
            _ => paragraphs.push(std::mem::take(&mut current)),
        }
    }
    if !current.is_empty() {
        paragraphs.push(current);
    }

    paragraphs.join("\n")
}

fn decode_entities(text: &str) -> String {
    if !text.contains('&') {
        return text.to_string();
    }

    let mut out = String::with_capacity(text.len());
    let mut rest = text;
    while let Some(amp) = rest.find('&') {
        out.push_str(&rest[..amp]);
        let tail = &rest[amp..];
        let decoded = tail.find(';').and_then(|semi| {
            let entity = &tail[1..semi];
            let ch = match entity {
                "amp" => Some('&'),
                "lt" => Some('<'),
                "gt" => Some('>'),
                "quot" => Some('"'),
                "apos" => Some('\''),
                _ => entity
                    .strip_prefix("#x")
                    .and_then(|hex| u32::from_str_radix(hex, 16).ok())
                    .or_else(|| entity.strip_prefix('#').and_then(|d| d.parse().ok()))
                    .and_then(char::from_u32),
            };
            ch.map(|c| (c, semi + 1))
        });
        match decoded {
            Some((c, consumed)) => {
                out.push(c);
                rest = &tail[consumed..];
            }
            None => {
                out.push('&');
                rest = &tail[1..];
            }
        }
    }
    out.push_str(rest);
    out
}
