/*! License mention scanner.

Walks the tree once, in document order, and collects candidate license
references from the four structural sources:

1. `<meta>` tags whose `name`/`property` is a license key, URL in `content`
2. `<script type="application/ld+json">` blocks with a `license` field
3. `<link>` tags carrying a `license` rel token, URL in `href`
4. `<a>` tags whose `href` is a CC license URL

Insertion order of the returned mentions is traversal order; the resolver
relies on it for deterministic tie-breaking.
!*/
use scraper::ElementRef;
use serde_json::Value;

use super::classify;
use super::dom::HtmlTree;
use super::normalize;
use super::types::{LicenseLocation, LicenseMention};

/// `<meta>` attribute values naming a license property.
const META_LICENSE_KEYS: &[&str] = &["license", "og:license"];

/// Scan a parsed document for license mentions.
pub fn find_licenses(tree: &HtmlTree) -> Vec<LicenseMention> {
    let mut mentions = Vec::new();

    for el in tree.elements() {
        match el.value().name() {
            "meta" => scan_meta(&el, &mut mentions),
            "link" => scan_link(&el, &mut mentions),
            "a" => scan_anchor(&el, &mut mentions),
            "script" => scan_json_ld(&el, &mut mentions),
            _ => (),
        }
    }

    mentions
}

/// Normalize a candidate URL and emit a mention if it is recognized.
fn push_candidate(
    url: &str,
    location: LicenseLocation,
    el: &ElementRef,
    mentions: &mut Vec<LicenseMention>,
) {
    if let Some((abbr, version)) = normalize::normalize_url(url) {
        mentions.push(LicenseMention {
            abbr,
            version,
            location,
            in_head: classify::in_head(el),
            in_footer: classify::in_footer(el),
        });
    }
}

fn scan_meta(el: &ElementRef, mentions: &mut Vec<LicenseMention>) {
    let element = el.value();
    let key = element
        .attr("name")
        .filter(|name| !name.is_empty())
        .or_else(|| element.attr("property"))
        .unwrap_or("");

    if META_LICENSE_KEYS.contains(&key.to_ascii_lowercase().as_str()) {
        if let Some(content) = element.attr("content") {
            push_candidate(content, LicenseLocation::MetaTag, el, mentions);
        }
    }
}

fn scan_link(el: &ElementRef, mentions: &mut Vec<LicenseMention>) {
    let element = el.value();
    let has_license_rel = element
        .attr("rel")
        .map(|rel| {
            rel.split_ascii_whitespace()
                .any(|token| token.eq_ignore_ascii_case("license"))
        })
        .unwrap_or(false);

    if has_license_rel {
        if let Some(href) = element.attr("href") {
            push_candidate(href, LicenseLocation::LinkTag, el, mentions);
        }
    }
}

fn scan_anchor(el: &ElementRef, mentions: &mut Vec<LicenseMention>) {
    // anchor text is irrelevant, only the target URL matters
    if let Some(href) = el.value().attr("href") {
        push_candidate(href, LicenseLocation::ATag, el, mentions);
    }
}

/// JSON-LD license field, e.g.
/// ```json
/// {
///     "@context": "http://schema.org",
///     "@type": "CreativeWork",
///     "license": "https://creativecommons.org/licenses/by-nc-nd/4.0/"
/// }
/// ```
/// The license value may also be a typed object carrying the URL under
/// `@id` or `url`. Malformed JSON bodies are skipped.
fn scan_json_ld(el: &ElementRef, mentions: &mut Vec<LicenseMention>) {
    let is_json_ld = el
        .value()
        .attr("type")
        .map(|t| t.trim().eq_ignore_ascii_case("application/ld+json"))
        .unwrap_or(false);
    if !is_json_ld {
        return;
    }

    let body: String = el.text().collect();
    let Ok(data) = serde_json::from_str::<Value>(&body) else {
        return;
    };

    // top-level value can be a single object or an array of objects
    let items: Vec<&Value> = match &data {
        Value::Object(_) => vec![&data],
        Value::Array(values) => values.iter().collect(),
        _ => return,
    };

    for item in items {
        let Some(license) = item.get("license") else {
            continue;
        };
        let url = match license {
            Value::String(s) => Some(s.as_str()),
            Value::Object(map) => map
                .get("@id")
                .or_else(|| map.get("url"))
                .and_then(Value::as_str),
            _ => None,
        };
        if let Some(url) = url {
            push_candidate(url, LicenseLocation::JsonLd, el, mentions);
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::license::types::LicenseAbbr;

    use super::*;

    fn scan(raw: &str) -> Vec<LicenseMention> {
        find_licenses(&HtmlTree::parse(raw).unwrap())
    }

    #[test]
    fn test_meta_tag() {
        let raw = r#"<html><head>
            <meta property="license" content="https://creativecommons.org/licenses/by/4.0/">
        </head><body></body></html>"#;
        let mentions = scan(raw);
        assert_eq!(mentions.len(), 1);
        assert_eq!(mentions[0].abbr, LicenseAbbr::By);
        assert_eq!(mentions[0].version.as_deref(), Some("4.0"));
        assert_eq!(mentions[0].location, LicenseLocation::MetaTag);
        assert!(mentions[0].in_head);
        assert!(!mentions[0].in_footer);
    }

    #[test]
    fn test_meta_name_attribute_and_og_prefix() {
        let raw = r#"<html><head>
            <meta name="LICENSE" content="https://creativecommons.org/licenses/by-sa/3.0/">
            <meta property="og:license" content="https://creativecommons.org/licenses/by/4.0/">
            <meta name="description" content="https://creativecommons.org/licenses/by/4.0/">
        </head></html>"#;
        let mentions = scan(raw);
        assert_eq!(mentions.len(), 2);
    }

    #[test]
    fn test_link_requires_license_rel() {
        let raw = r#"<html><head>
            <link rel="license" href="https://creativecommons.org/licenses/by-nd/4.0/">
            <link rel="stylesheet" href="https://creativecommons.org/licenses/by/4.0/">
        </head></html>"#;
        let mentions = scan(raw);
        assert_eq!(mentions.len(), 1);
        assert_eq!(mentions[0].location, LicenseLocation::LinkTag);
        assert_eq!(mentions[0].abbr, LicenseAbbr::ByNd);
    }

    #[test]
    fn test_anchor_urls_only() {
        let raw = r#"<html><body>
            <a href="https://creativecommons.org/licenses/by-nc/4.0/">some license</a>
            <a href="https://example.com/">cc by-nc link text is ignored</a>
        </body></html>"#;
        let mentions = scan(raw);
        assert_eq!(mentions.len(), 1);
        assert_eq!(mentions[0].location, LicenseLocation::ATag);
        assert_eq!(mentions[0].abbr, LicenseAbbr::ByNc);
    }

    #[test]
    fn test_json_ld_string_and_object() {
        let raw = r#"<html><head>
            <script type="application/ld+json">
            {"@type": "CreativeWork", "license": "https://creativecommons.org/licenses/by/4.0/"}
            </script>
            <script type="application/ld+json">
            {"@type": "CreativeWork",
             "license": {"@type": "CreativeWork", "url": "https://creativecommons.org/licenses/by-nc-nd/4.0/"}}
            </script>
        </head></html>"#;
        let mentions = scan(raw);
        assert_eq!(mentions.len(), 2);
        assert!(mentions
            .iter()
            .all(|m| m.location == LicenseLocation::JsonLd));
        assert_eq!(mentions[1].abbr, LicenseAbbr::ByNcNd);
    }

    #[test]
    fn test_json_ld_array_of_items() {
        let raw = r#"<html><head><script type="application/ld+json">
            [{"@type": "WebSite"},
             {"@type": "CreativeWork", "license": "https://creativecommons.org/licenses/zero/1.0/"}]
        </script></head></html>"#;
        let mentions = scan(raw);
        assert_eq!(mentions.len(), 1);
        assert_eq!(mentions[0].abbr, LicenseAbbr::Zero);
    }

    #[test]
    fn test_malformed_json_ld_skipped() {
        let raw = r#"<html><head>
            <script type="application/ld+json">{not json at all</script>
            <script type="application/ld+json">"just a string"</script>
        </head><body>
            <a href="https://creativecommons.org/licenses/by/4.0/">ok</a>
        </body></html>"#;
        let mentions = scan(raw);
        assert_eq!(mentions.len(), 1);
        assert_eq!(mentions[0].location, LicenseLocation::ATag);
    }

    #[test]
    fn test_insertion_is_document_order() {
        let raw = r#"<html><body>
            <a href="https://creativecommons.org/licenses/by/4.0/">first</a>
            <a href="https://creativecommons.org/licenses/by-sa/4.0/">second</a>
        </body></html>"#;
        let mentions = scan(raw);
        assert_eq!(mentions[0].abbr, LicenseAbbr::By);
        assert_eq!(mentions[1].abbr, LicenseAbbr::BySa);
    }
}
