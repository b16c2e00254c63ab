/*! License URL normalizer.

Maps a URL onto a canonical `(family, version)` pair, or rejects it when it
does not point at a recognized Creative Commons domain.

Typical shapes:
```text
https://creativecommons.org/licenses/by-nc-nd/4.0/
http://www.creativecommons.org/publicdomain/zero/1.0
//creativecommons.org/licenses/by/4.0/deed.fr
```
!*/
use lazy_static::lazy_static;
use percent_encoding::percent_decode_str;
use regex::Regex;
use url::Url;

use super::types::LicenseAbbr;

/// Hosts recognized as Creative Commons license providers.
pub const CC_HOSTS: &[&str] = &["creativecommons.org"];

lazy_static! {
    /// License family and optional version segment in a CC URL path.
    static ref LICENSE_PATH: Regex =
        Regex::new(r"creativecommons\.org/(?:licenses|publicdomain)/([^/?#]+)(?:/(\d+\.\d+))?")
            .unwrap();
}

/// Normalize a candidate license URL.
///
/// Returns [None] when the URL is not on a recognized CC host. A URL on a
/// CC host whose path does not match a known license family yields
/// [LicenseAbbr::Unknown]: it is still evidence of a license link.
/// Matching is case-insensitive and tolerant of protocol, `www.` prefixes
/// and trailing slashes. Percent-escapes are decoded first, so an href
/// carrying a fully percent-encoded CC URL still normalizes.
pub fn normalize_url(raw: &str) -> Option<(LicenseAbbr, Option<String>)> {
    let decoded = percent_decode_str(raw.trim()).decode_utf8_lossy();
    let lower = decoded.to_lowercase();

    if !on_cc_host(&lower) {
        return None;
    }

    let Some(caps) = LICENSE_PATH.captures(&lower) else {
        return Some((LicenseAbbr::Unknown, None));
    };

    // tolerate stray punctuation around the family token, e.g. "/by/" vs "/by."
    let family = caps[1].trim_matches(|c: char| !c.is_ascii_alphabetic());
    let version = caps.get(2).map(|v| v.as_str().to_string());

    match family.parse::<LicenseAbbr>() {
        Ok(abbr) => Some((abbr, version)),
        // on-domain but unknown family: keep the link, drop the version
        Err(()) => Some((LicenseAbbr::Unknown, None)),
    }
}

/// Host check. Absolute URLs are matched on their parsed host (exact or
/// subdomain); relative and scheme-relative references fall back to a
/// substring check.
fn on_cc_host(lower: &str) -> bool {
    match Url::parse(lower) {
        Ok(url) => match url.host_str() {
            Some(host) => CC_HOSTS
                .iter()
                .any(|cc| host == *cc || host.ends_with(&format!(".{cc}"))),
            None => false,
        },
        Err(_) => CC_HOSTS.iter().any(|cc| lower.contains(cc)),
    }
}
