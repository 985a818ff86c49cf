//! Compiled patterns for the linkify passes.

use std::sync::OnceLock;

use regex::Regex;

/// Scheme plus URL characters; the last character excludes sentence punctuation (`.,:;!?`).
const ABSOLUTE_URL: &str = r"(?i-u)\b(?:https?|ftp)://[a-z0-9\-+&@#/%?=~_|!:,.;]*[a-z0-9\-+&@#/%=~_|]";

/// Group 1: line start or any character except `/`. Group 2: the `www.` token.
/// Lines end at `\r` or `\n`. The token stops at browser-script whitespace: U+FEFF
/// counts as a space, U+0085 does not.
const BARE_WWW: &str = concat!(
    r"(?imR)(^|[^/])(www\.[^",
    r"\t\n\x0B\f\r \x{A0}\x{1680}\x{2000}-\x{200A}\x{2028}\x{2029}\x{202F}\x{205F}\x{3000}\x{FEFF}",
    r"]+(?:(?-u:\b)|$))"
);

/// Local part, shortest domain label, then one or more 2-6 letter suffixes.
const EMAIL: &str = r"(?i-u)[a-z0-9_.]+@[a-z_\-]+?(?:\.[a-z]{2,6})+";

static ABSOLUTE_URL_RE: OnceLock<Regex> = OnceLock::new();
static BARE_WWW_RE: OnceLock<Regex> = OnceLock::new();
static EMAIL_RE: OnceLock<Regex> = OnceLock::new();

pub(super) fn absolute_url() -> &'static Regex {
    ABSOLUTE_URL_RE.get_or_init(|| Regex::new(ABSOLUTE_URL).expect("absolute URL pattern is valid"))
}

pub(super) fn bare_www() -> &'static Regex {
    BARE_WWW_RE.get_or_init(|| Regex::new(BARE_WWW).expect("bare www pattern is valid"))
}

pub(super) fn email() -> &'static Regex {
    EMAIL_RE.get_or_init(|| Regex::new(EMAIL).expect("email pattern is valid"))
}
