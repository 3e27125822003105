//! Eddystone-URL scheme and TLD token tables.
//!
//! The URL frame compresses well-known scheme prefixes and top-level
//! domains down to single bytes. Table order is wire-significant: an
//! entry's index *is* its encoded byte value, so the tables must never be
//! reordered.

use crate::error::BeaconError;

/// URL scheme prefixes, indexed by their wire byte value.
pub const SCHEMES: [&str; 4] = ["http://www.", "https://www.", "http://", "https://"];

/// Top-level-domain expansions, indexed by their wire byte value. The
/// `/`-suffixed forms come first so that they win over their bare
/// counterparts when both occur at the same position.
pub const TLDS: [&str; 14] = [
    ".com/", ".org/", ".edu/", ".net/", ".info/", ".biz/", ".gov/", ".com", ".org", ".edu",
    ".net", ".info", ".biz", ".gov",
];

/// Scheme index used when the URL starts with no table entry.
pub const DEFAULT_SCHEME: u8 = 3; // "https://"

/// Compresses a URL into its scheme index byte and token-substituted body.
///
/// The longest matching scheme prefix is stripped; the earliest-occurring
/// TLD table entry in the remainder is replaced by its index byte. A URL
/// with no recognized TLD is carried unmodified after the scheme byte.
pub fn compress_url(url: &str) -> (u8, Vec<u8>) {
    let mut scheme = DEFAULT_SCHEME;
    let mut rest = url;
    let mut matched_len = 0usize;
    for (index, prefix) in SCHEMES.iter().enumerate() {
        if url.starts_with(prefix) && prefix.len() > matched_len {
            scheme = index as u8;
            matched_len = prefix.len();
        }
    }
    if matched_len > 0 {
        rest = &url[matched_len..];
    }

    let mut tld: Option<(usize, usize)> = None; // (position, table index)
    for (index, entry) in TLDS.iter().enumerate() {
        if let Some(pos) = rest.find(entry) {
            if tld.map_or(true, |(best, _)| pos < best) {
                tld = Some((pos, index));
            }
        }
    }

    let body = match tld {
        Some((pos, index)) => {
            let mut body = Vec::with_capacity(rest.len());
            body.extend_from_slice(rest[..pos].as_bytes());
            body.push(index as u8);
            body.extend_from_slice(rest[pos + TLDS[index].len()..].as_bytes());
            body
        }
        None => rest.as_bytes().to_vec(),
    };
    (scheme, body)
}

/// Expands a compressed URL body back to its plain-text form.
///
/// The scheme index selects the prefix; every body byte within the TLD
/// table range is expanded in place, everything else passes through. The
/// body is assembled as raw bytes so multi-byte UTF-8 sequences survive
/// intact.
pub fn expand_url(scheme: u8, body: &[u8]) -> Result<String, BeaconError> {
    let prefix = SCHEMES
        .get(scheme as usize)
        .ok_or(BeaconError::UnrecognizedDiscriminant(scheme))?;
    let mut url = Vec::with_capacity(prefix.len() + body.len() + 4);
    url.extend_from_slice(prefix.as_bytes());
    for &byte in body {
        if (byte as usize) < TLDS.len() {
            url.extend_from_slice(TLDS[byte as usize].as_bytes());
        } else {
            url.push(byte);
        }
    }
    Ok(String::from_utf8_lossy(&url).into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn compress_strips_scheme_and_substitutes_tld() {
        let (scheme, body) = compress_url("https://micropython.com");
        assert_eq!(scheme, 3);
        assert_eq!(body, b"micropython\x07");
    }

    #[test]
    fn compress_prefers_longest_scheme() {
        let (scheme, body) = compress_url("https://www.example.org/x");
        assert_eq!(scheme, 1);
        assert_eq!(body, b"example\x01x");
    }

    #[test]
    fn slash_form_wins_over_bare_tld() {
        let (_, body) = compress_url("https://example.com/page");
        assert_eq!(body, b"example\x00page");
    }

    #[test]
    fn earliest_tld_occurrence_wins() {
        let (_, body) = compress_url("https://a.net.example.com");
        assert_eq!(body, b"a\x0a.example.com");
    }

    #[test]
    fn unknown_tld_passes_through() {
        let (scheme, body) = compress_url("https://micropython.de");
        assert_eq!(scheme, 3);
        assert_eq!(body, b"micropython.de");
    }

    #[test]
    fn unknown_scheme_defaults_without_stripping() {
        let (scheme, body) = compress_url("ftp://example.com");
        assert_eq!(scheme, DEFAULT_SCHEME);
        assert_eq!(body, b"ftp://example\x07");
    }

    #[test]
    fn expand_reverses_compress() {
        for url in [
            "https://micropython.com",
            "https://micropython.de",
            "http://www.example.org/path",
            "https://example.com/page",
        ] {
            let (scheme, body) = compress_url(url);
            assert_eq!(expand_url(scheme, &body).unwrap(), url);
        }
    }

    #[test]
    fn multibyte_characters_survive_the_round_trip() {
        for url in ["https://über.com", "https://例え.net/テスト"] {
            let (scheme, body) = compress_url(url);
            assert_eq!(expand_url(scheme, &body).unwrap(), url);
        }
    }

    #[test]
    fn expand_rejects_unknown_scheme_index() {
        assert!(matches!(
            expand_url(4, b"x"),
            Err(BeaconError::UnrecognizedDiscriminant(4))
        ));
    }
}
