// src/core/html.rs
//
// Small helpers over `scraper`'s DOM: element text, mailto addresses,
// direct children by tag name.

use scraper::{ElementRef, Selector};

use super::sanitize::normalize_ws;

/// Compile a selector from a literal. Only ever called with static CSS.
pub fn css(selector: &'static str) -> Selector {
    Selector::parse(selector)
        .unwrap_or_else(|e| panic!("bad static selector {selector:?}: {e}"))
}

/// Visible text of an element, whitespace collapsed.
pub fn text_of(el: ElementRef<'_>) -> String {
    normalize_ws(&el.text().collect::<String>())
}

/// Everything after the `mailto:` scheme, query included.
/// Scheme matched case-insensitively; `None` for other schemes or nothing after it.
pub fn mailto_target(href: &str) -> Option<&str> {
    let href = href.trim();
    let scheme = href.get(..7)?;
    if !scheme.eq_ignore_ascii_case("mailto:") {
        return None;
    }
    let target = href[7..].trim();
    if target.is_empty() { None } else { Some(target) }
}

/// Address part of a `mailto:` href, any `?query` dropped.
pub fn mailto_address(href: &str) -> Option<&str> {
    let target = mailto_target(href)?;
    let addr = target.split('?').next().unwrap_or(target).trim();
    if addr.is_empty() { None } else { Some(addr) }
}

/// Element children (not descendants) with the given tag name.
pub fn child_elements<'a>(el: ElementRef<'a>, tag: &str) -> Vec<ElementRef<'a>> {
    el.children()
        .filter_map(ElementRef::wrap)
        .filter(|c| c.value().name().eq_ignore_ascii_case(tag))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use scraper::Html;

    #[test]
    fn mailto_address_variants() {
        assert_eq!(mailto_address("mailto:a@x.edu"), Some("a@x.edu"));
        assert_eq!(mailto_address("  MAILTO:a@x.edu "), Some("a@x.edu"));
        assert_eq!(mailto_address("mailto:a@x.edu?subject=Hi"), Some("a@x.edu"));
        assert_eq!(mailto_address("mailto:"), None);
        assert_eq!(mailto_address("https://x.edu"), None);
        assert_eq!(mailto_address("tel:1"), None);
        assert_eq!(mailto_address("mailto:?subject=Hi"), None);
    }

    #[test]
    fn mailto_target_keeps_query() {
        assert_eq!(mailto_target("Mailto:a@x.edu?subject=Hi"), Some("a@x.edu?subject=Hi"));
        assert_eq!(mailto_target(" mailto:a@x.edu "), Some("a@x.edu"));
        assert_eq!(mailto_target("mailto:"), None);
        assert_eq!(mailto_target("http://x"), None);
    }

    #[test]
    fn text_of_collapses_nested_text() {
        let doc = Html::parse_fragment("<p class=n>  Dr.\n <b>Chen</b>  </p>");
        let p = doc.select(&css("p.n")).next().unwrap();
        assert_eq!(text_of(p), "Dr. Chen");
    }

    #[test]
    fn child_elements_skips_grandchildren() {
        let doc = Html::parse_document(
            "<table><tr id=r><td>1</td><td><table><tr><td>x</td></tr></table></td></tr></table>",
        );
        let tr = doc.select(&css("tr#r")).next().unwrap();
        assert_eq!(child_elements(tr, "td").len(), 2);
    }
}
