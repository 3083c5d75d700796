/// Paste URL recognition and raw-endpoint normalization
use crate::error::OpenerError;
use url::Url;

/// A paste service that serves the same content as a rendered page and as raw text
#[derive(Debug, PartialEq)]
pub struct PasteHost {
    pub domain: &'static str,
    /// Path segment in front of the id on the rendered page, if any
    pub page_segment: Option<&'static str>,
    /// Path segment in front of the id on the raw-text endpoint
    pub raw_segment: &'static str,
}

pub static PASTE_HOSTS: [PasteHost; 2] = [
    PasteHost {
        domain: "pastebin.com",
        page_segment: None,
        raw_segment: "raw",
    },
    PasteHost {
        domain: "paste.ee",
        page_segment: Some("p"),
        raw_segment: "r",
    },
];

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PasteForm {
    Page,
    Raw,
}

/// A recognized reference to a single paste
#[derive(Debug, PartialEq)]
pub struct PasteRef {
    pub host: &'static PasteHost,
    pub id: String,
    pub form: PasteForm,
}

impl PasteRef {
    /// Path of the raw-text endpoint for this paste
    pub fn raw_path(&self) -> String {
        format!("/{}/{}", self.host.raw_segment, self.id)
    }
}

/// Prefix `https://` when the input carries no scheme
///
/// Examples:
/// - pastebin.com/abc123 → https://pastebin.com/abc123
/// - http://example.com → http://example.com
/// - "  https://a.io  " → https://a.io
pub fn ensure_scheme(input: &str) -> String {
    let trimmed = input.trim();
    if trimmed.is_empty() || trimmed.contains("://") {
        trimmed.to_string()
    } else {
        format!("https://{}", trimmed)
    }
}

/// Recognize a paste reference in an already-parsed URL
///
/// Algorithm:
/// 1. Scheme must be http or https
/// 2. Host (minus a leading "www.") must be a known paste host
/// 3. Non-empty path segments must be exactly `<raw>/<id>` (raw form)
///    or the host's page form (`<id>` or `<page>/<id>`)
pub fn parse_paste_ref(url: &Url) -> Option<PasteRef> {
    if !matches!(url.scheme(), "http" | "https") {
        return None;
    }

    let host = url.host_str()?;
    let host = host.strip_prefix("www.").unwrap_or(host);
    let paste_host = PASTE_HOSTS.iter().find(|h| h.domain == host)?;

    let segments: Vec<&str> = url.path_segments()?.filter(|s| !s.is_empty()).collect();

    let (id, form) = match (paste_host.page_segment, segments.as_slice()) {
        (_, [raw, id]) if *raw == paste_host.raw_segment => (*id, PasteForm::Raw),
        (None, [id]) if *id != paste_host.raw_segment => (*id, PasteForm::Page),
        (Some(page), [segment, id]) if *segment == page => (*id, PasteForm::Page),
        _ => return None,
    };

    if !is_paste_id(id) {
        return None;
    }

    Some(PasteRef {
        host: paste_host,
        id: id.to_string(),
        form,
    })
}

fn is_paste_id(s: &str) -> bool {
    !s.is_empty() && s.chars().all(|c| c.is_ascii_alphanumeric())
}

/// Rewrite a paste page link into its raw-content form
///
/// Raw-form paste links and non-paste URLs come back unchanged apart from
/// trimming and a missing scheme being filled in.
///
/// Examples:
/// - https://pastebin.com/abc123 → https://pastebin.com/raw/abc123
/// - https://pastebin.com/raw/abc123 → https://pastebin.com/raw/abc123
/// - https://paste.ee/p/Xy12 → https://paste.ee/r/Xy12
/// - example.com/notes.txt → https://example.com/notes.txt
pub fn normalize(input: &str) -> String {
    let candidate = ensure_scheme(input);

    let Ok(mut url) = Url::parse(&candidate) else {
        return candidate;
    };

    match parse_paste_ref(&url) {
        Some(paste) if paste.form == PasteForm::Page => {
            url.set_path(&paste.raw_path());
            url.to_string()
        }
        _ => candidate,
    }
}

/// Check whether the input refers to a paste on a known host, in either form
pub fn is_paste_url(input: &str) -> bool {
    Url::parse(&ensure_scheme(input))
        .ok()
        .and_then(|url| parse_paste_ref(&url))
        .is_some()
}

/// Validate a URL before it is saved for quick open
///
/// Returns the trimmed, scheme-prefixed URL on success.
pub fn validate_paste_url(input: &str) -> Result<String, OpenerError> {
    let candidate = ensure_scheme(input);
    if candidate.is_empty() {
        return Err(OpenerError::EmptyInput);
    }

    if is_paste_url(&candidate) {
        Ok(candidate)
    } else {
        Err(OpenerError::InvalidPasteUrl(candidate))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_pastebin_page() {
        assert_eq!(normalize("https://pastebin.com/abc123"), "https://pastebin.com/raw/abc123");
        assert_eq!(normalize("http://pastebin.com/abc123"), "http://pastebin.com/raw/abc123");
        assert_eq!(normalize("https://www.pastebin.com/abc123"), "https://www.pastebin.com/raw/abc123");
    }

    #[test]
    fn test_normalize_already_raw_is_unchanged() {
        for input in [
            "https://pastebin.com/raw/abc123",
            "https://www.pastebin.com/raw/Q9x8Z7",
            "https://paste.ee/r/Xy12",
            "http://pastebin.com/raw/abc123?ref=home",
        ] {
            assert_eq!(normalize(input), input);
        }
    }

    #[test]
    fn test_normalize_paste_ee_page() {
        assert_eq!(normalize("https://paste.ee/p/Xy12"), "https://paste.ee/r/Xy12");
    }

    #[test]
    fn test_normalize_adds_scheme() {
        assert_eq!(normalize("pastebin.com/abc123"), "https://pastebin.com/raw/abc123");
        assert_eq!(normalize("example.com/notes.txt"), "https://example.com/notes.txt");
        assert_eq!(normalize("  https://pastebin.com/abc123  "), "https://pastebin.com/raw/abc123");
    }

    #[test]
    fn test_normalize_keeps_query_and_trailing_slash_variants() {
        assert_eq!(normalize("https://pastebin.com/abc123/"), "https://pastebin.com/raw/abc123");
        assert_eq!(normalize("https://pastebin.com/abc123?x=1"), "https://pastebin.com/raw/abc123?x=1");
    }

    #[test]
    fn test_normalize_other_urls_unchanged() {
        assert_eq!(normalize("https://example.com/abc123"), "https://example.com/abc123");
        assert_eq!(normalize("https://gist.github.com/user/abc"), "https://gist.github.com/user/abc");
        assert_eq!(normalize("https://pastebin.com/u/someone"), "https://pastebin.com/u/someone");
        assert_eq!(normalize("https://pastebin.com"), "https://pastebin.com");
        assert_eq!(normalize("https://pastebin.com/raw"), "https://pastebin.com/raw");
    }

    #[test]
    fn test_normalize_empty() {
        assert_eq!(normalize(""), "");
        assert_eq!(normalize("   "), "");
    }

    #[test]
    fn test_parse_paste_ref() {
        let url = Url::parse("https://PASTEBIN.com/abc123").unwrap();
        let paste = parse_paste_ref(&url).unwrap();
        assert_eq!(paste.host.domain, "pastebin.com");
        assert_eq!(paste.id, "abc123");
        assert_eq!(paste.form, PasteForm::Page);

        let url = Url::parse("https://paste.ee/r/Xy12").unwrap();
        let paste = parse_paste_ref(&url).unwrap();
        assert_eq!(paste.form, PasteForm::Raw);
        assert_eq!(paste.raw_path(), "/r/Xy12");
    }

    #[test]
    fn test_parse_paste_ref_rejects() {
        for input in [
            "ftp://pastebin.com/abc123",
            "https://notpastebin.com/abc123",
            "https://pastebin.com/abc-123",
            "https://pastebin.com/raw/abc/extra",
            "https://paste.ee/Xy12",
        ] {
            let url = Url::parse(input).unwrap();
            assert!(parse_paste_ref(&url).is_none(), "{} should not be a paste", input);
        }
    }

    #[test]
    fn test_is_paste_url() {
        assert!(is_paste_url("https://pastebin.com/abc123"));
        assert!(is_paste_url("pastebin.com/raw/abc123"));
        assert!(is_paste_url("https://paste.ee/p/Xy12"));
        assert!(!is_paste_url("https://example.com/abc123"));
        assert!(!is_paste_url("not a url"));
        assert!(!is_paste_url(""));
    }

    #[test]
    fn test_validate_paste_url() {
        assert_eq!(
            validate_paste_url(" pastebin.com/abc123 "),
            Ok("https://pastebin.com/abc123".to_string())
        );
        assert_eq!(validate_paste_url(""), Err(OpenerError::EmptyInput));
        assert_eq!(
            validate_paste_url("https://example.com/x"),
            Err(OpenerError::InvalidPasteUrl("https://example.com/x".to_string()))
        );
    }
}
