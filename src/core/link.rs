// src/core/link.rs
//
// Order links come in two encodings on the case-detail page:
//   <a href="orders/123.pdf">                       direct
//   <a href="#" onclick="showpdf('..filename=x.pdf&..')">  script parameter
// Both resolve against the portal base URL.

use std::sync::LazyLock;

use regex::Regex;
use scraper::ElementRef;
use url::Url;

use crate::config::consts::BASE_URL;

static FILENAME_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"filename=([^&'"]+)"#).expect("filename regex"));

static BASE: LazyLock<Url> =
    LazyLock::new(|| Url::parse(BASE_URL).expect("BASE_URL is an absolute URL"));

/// Parsed portal base URL.
pub fn base_url() -> &'static Url {
    &BASE
}

/// Absolute PDF URL for an anchor, or `None` when it carries no PDF reference.
pub fn resolve_pdf_link(anchor: ElementRef, base: &Url) -> Option<String> {
    let attrs = anchor.value();
    resolve_pdf_ref(attrs.attr("href"), attrs.attr("onclick"), base)
}

/// Attribute-level resolution; `href` wins when it names a PDF.
pub fn resolve_pdf_ref(href: Option<&str>, onclick: Option<&str>, base: &Url) -> Option<String> {
    if let Some(href) = href.map(str::trim).filter(|h| h.ends_with(".pdf")) {
        return absolutize(href, base);
    }
    let caps = FILENAME_RE.captures(onclick?)?;
    absolutize(caps.get(1)?.as_str().trim(), base)
}

/// Relative or absolute reference → absolute URL. Absolute input is returned as-is.
pub fn absolutize(reference: &str, base: &Url) -> Option<String> {
    match base.join(reference) {
        Ok(u) => Some(u.into()),
        Err(e) => {
            logd!("Link: cannot resolve {reference:?} against {base}: {e}");
            None
        }
    }
}
