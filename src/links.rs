/// Link extraction from fetched paste content
use regex::Regex;
use std::collections::HashSet;
use std::sync::OnceLock;
use url::Url;

// Authority up to the first path, query or fragment delimiter, then anything up to whitespace.
// `Url::parse` decides whether the authority is a real host.
const AUTHORITY_AND_PATH: &str = r#"[^\s/?#<>"]+(?:[/?#][^\s<>"]*)?"#;

fn link_regex() -> &'static Regex {
    static LINK_RE: OnceLock<Regex> = OnceLock::new();
    LINK_RE.get_or_init(|| {
        Regex::new(&format!(r"(?i)\bhttps?://{}", AUTHORITY_AND_PATH)).expect("link pattern is valid")
    })
}

// A bare `www.` only counts at the start of the text or after whitespace or an opening bracket/quote
fn first_link_regex() -> &'static Regex {
    static FIRST_LINK_RE: OnceLock<Regex> = OnceLock::new();
    FIRST_LINK_RE.get_or_init(|| {
        Regex::new(&format!(
            r#"(?i)(?P<scheme>\bhttps?://{0})|(?:^|[\s(<\["'])(?P<www>www\.{0})"#,
            AUTHORITY_AND_PATH
        ))
        .expect("first link pattern is valid")
    })
}

/// Extract every absolute http(s) link from text, in order of appearance
///
/// Duplicates are kept; see `unique_links` to drop them.
///
/// Examples:
/// - "visit https://foo.com/x" → ["https://foo.com/x"]
/// - "a http://a.io, then https://b.io/p." → ["http://a.io", "https://b.io/p"]
/// - "no links here" → []
pub fn extract_links(text: &str) -> Vec<String> {
    link_regex()
        .find_iter(text)
        .map(|m| trim_trailing_punctuation(m.as_str()))
        .filter(|link| is_absolute_url(link))
        .map(str::to_string)
        .collect()
}

/// Extract only the first link, accepting a bare `www.` host
///
/// A `www.` match gets an `https://` scheme prepended.
pub fn first_link(text: &str) -> Option<String> {
    first_link_regex().captures_iter(text).find_map(|caps| {
        let link = match (caps.name("scheme"), caps.name("www")) {
            (Some(m), _) => trim_trailing_punctuation(m.as_str()).to_string(),
            (None, Some(m)) => format!("https://{}", trim_trailing_punctuation(m.as_str())),
            (None, None) => return None,
        };
        is_absolute_url(&link).then_some(link)
    })
}

/// Drop repeated links, keeping the first occurrence
///
/// Returns the unique links and how many duplicates were dropped.
pub fn unique_links(links: &[String]) -> (Vec<String>, usize) {
    let mut seen = HashSet::new();
    let mut keep = Vec::new();
    let mut dropped = 0;

    for link in links {
        if seen.insert(link.as_str()) {
            keep.push(link.clone());
        } else {
            dropped += 1;
        }
    }

    (keep, dropped)
}

/// Strip sentence punctuation and unbalanced closing brackets off the end
fn trim_trailing_punctuation(link: &str) -> &str {
    let mut end = link;
    loop {
        let Some(last) = end.chars().last() else {
            return end;
        };
        let strip = match last {
            '.' | ',' | ';' | ':' | '!' | '?' | '\'' => true,
            ')' => end.matches('(').count() < end.matches(')').count(),
            ']' => end.matches('[').count() < end.matches(']').count(),
            '}' => end.matches('{').count() < end.matches('}').count(),
            _ => false,
        };
        if !strip {
            return end;
        }
        end = &end[..end.len() - last.len_utf8()];
    }
}

fn is_absolute_url(link: &str) -> bool {
    Url::parse(link)
        .map(|url| matches!(url.scheme(), "http" | "https") && url.host_str().is_some())
        .unwrap_or(false)
}
