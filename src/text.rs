//! String helpers for API payload text: HTML entity decoding applied during
//! wire-to-domain mapping, plus display formatting for dates and phone
//! numbers carried as raw API strings.

use chrono::DateTime;

/// Decode HTML entities in API text fields (`&amp;`, `&#39;`, `&#x27;`, ...).
///
/// Unknown or unterminated entities are left as-is rather than failing the
/// whole string.
pub fn html_decoded(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut rest = input;
    while let Some(pos) = rest.find('&') {
        out.push_str(&rest[..pos]);
        let tail = &rest[pos..];
        // Entity names and numeric references are short; anything longer is
        // treated as a literal ampersand.
        match tail.find(';') {
            Some(end) if end <= 10 => match decode_entity(&tail[1..end]) {
                Some(decoded) => {
                    out.push_str(&decoded);
                    rest = &tail[end + 1..];
                }
                None => {
                    out.push('&');
                    rest = &tail[1..];
                }
            },
            _ => {
                out.push('&');
                rest = &tail[1..];
            }
        }
    }
    out.push_str(rest);
    out
}

fn decode_entity(entity: &str) -> Option<String> {
    let named = match entity {
        "amp" => '&',
        "lt" => '<',
        "gt" => '>',
        "quot" => '"',
        "apos" => '\'',
        "nbsp" => '\u{a0}',
        _ => {
            let code = entity
                .strip_prefix("#x")
                .or_else(|| entity.strip_prefix("#X"))
                .map(|hex| u32::from_str_radix(hex, 16))
                .or_else(|| entity.strip_prefix('#').map(str::parse::<u32>))?
                .ok()?;
            return char::from_u32(code).map(String::from);
        }
    };
    Some(named.to_string())
}

/// Render an API ISO-8601 timestamp (fractional seconds and zone offset) as
/// a readable date, e.g. `August 11, 2020`. Returns `None` when the string
/// does not parse.
pub fn format_iso8601_date(raw: &str) -> Option<String> {
    DateTime::parse_from_rfc3339(raw)
        .ok()
        .map(|date| date.format("%B %-d, %Y").to_string())
}

/// Format an 11-digit US phone number as `+1 (555) 123-4567`.
///
/// Only supports US numbers; anything else is returned unchanged. A proper
/// formatter is needed for international use.
pub fn format_phone_number(raw: &str) -> String {
    if raw.len() != 11 || !raw.bytes().all(|b| b.is_ascii_digit()) {
        return raw.to_string();
    }
    format!("+{} ({}) {}-{}", &raw[..1], &raw[1..4], &raw[4..7], &raw[7..])
}
