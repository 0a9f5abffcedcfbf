// src/checker/entities.rs
// =============================================================================
// Decodes the handful of HTML entities that show up in school page titles.
//
// The parser already decodes entities in real markup, but many CMS pages
// double-escape their titles ("Schule &amp;amp; Co"), so after parsing we
// still see "&amp;" in the text. Decoding repeats until nothing changes.
// We only handle a small fixed set; anything else is left exactly as it is.
// =============================================================================

// Entity -> replacement. The en dash becomes a plain hyphen on purpose:
// the results end up in a spreadsheet.
const ENTITIES: [(&str, &str); 6] = [
    ("&amp;", "&"),
    ("&lt;", "<"),
    ("&gt;", ">"),
    ("&quot;", "\""),
    ("&nbsp;", " "),
    ("&#8211;", "-"),
];

/// Replaces the known entities until none are left, so double-escaped
/// text ("&amp;lt;") comes out fully decoded and decoding is idempotent.
/// Unknown entities and stray ampersands are copied through unchanged.
pub fn decode_entities(text: &str) -> String {
    let mut decoded = decode_once(text);
    // Every replacement is shorter than its entity, so this terminates
    loop {
        let next = decode_once(&decoded);
        if next == decoded {
            return decoded;
        }
        decoded = next;
    }
}

fn decode_once(text: &str) -> String {
    let mut decoded = String::with_capacity(text.len());
    let mut rest = text;

    while let Some(pos) = rest.find('&') {
        decoded.push_str(&rest[..pos]);
        rest = &rest[pos..];

        match ENTITIES.iter().find(|(entity, _)| rest.starts_with(entity)) {
            Some((entity, replacement)) => {
                decoded.push_str(replacement);
                rest = &rest[entity.len()..];
            }
            None => {
                decoded.push('&');
                rest = &rest[1..];
            }
        }
    }

    decoded.push_str(rest);
    decoded
}
