//! Linkify: wrap URLs, bare `www.` hosts and email addresses in anchor markup.
//!
//! Three substitution passes run in a fixed order over the whole text, each one
//! seeing the output of the previous pass. Overlaps are settled by that order only.

mod patterns;

use std::borrow::Cow;

use regex::{Captures, Regex};

/// One substitution stage of the linkify pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pass {
    /// `http://`, `https://` and `ftp://` URLs.
    AbsoluteUrl,
    /// `www.` hosts without a scheme, not directly preceded by `/`.
    BareWww,
    /// `local@domain.tld` addresses.
    Email,
}

impl Pass {
    /// Pipeline order. The URL pass must run before the www pass so that `www.`
    /// inside an absolute URL is already preceded by `/` when the www pass sees it.
    pub const ORDER: [Pass; 3] = [Pass::AbsoluteUrl, Pass::BareWww, Pass::Email];

    fn regex(self) -> &'static Regex {
        match self {
            Pass::AbsoluteUrl => patterns::absolute_url(),
            Pass::BareWww => patterns::bare_www(),
            Pass::Email => patterns::email(),
        }
    }

    fn anchor(self, caps: &Captures<'_>) -> String {
        match self {
            Pass::AbsoluteUrl => format!("<a href=\"{0}\">{0}</a>", &caps[0]),
            Pass::BareWww => format!("{0}<a href=\"http://{1}\">{1}</a>", &caps[1], &caps[2]),
            Pass::Email => format!("<a href=\"mailto:{0}\">{0}</a>", &caps[0]),
        }
    }

    /// Run this pass alone. Borrows the input back when nothing matched.
    pub fn apply(self, text: &str) -> Cow<'_, str> {
        let mut count = 0usize;
        let out = self.regex().replace_all(text, |caps: &Captures<'_>| {
            count += 1;
            self.anchor(caps)
        });
        if count > 0 {
            log::debug!("{:?} pass wrapped {} match(es)", self, count);
        }
        out
    }
}

/// Convert plain text into HTML with every recognized link wrapped in an anchor.
///
/// Never fails. Running it again over its own output can wrap links twice.
pub fn linkify(text: &str) -> String {
    let mut out = text.to_owned();
    for pass in Pass::ORDER {
        out = pass.apply(&out).into_owned();
    }
    out
}
