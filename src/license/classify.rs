/*! Structural context classifier.

Decides whether a node lives in the document head or in a footer region.
Both checks walk the inclusive ancestor chain; candidate nodes are rare
relative to the tree so the O(depth) walk per candidate is fine.
!*/
use scraper::ElementRef;

/// True iff the element or any of its ancestors is a `<head>`.
pub fn in_head(el: &ElementRef) -> bool {
    ancestors_inclusive(el).any(|a| a.value().name() == "head")
}

/// True iff the element or any of its ancestors is a footer region:
/// a `<footer>` tag, or an id/class token containing "footer"
/// (case-insensitive substring).
pub fn in_footer(el: &ElementRef) -> bool {
    ancestors_inclusive(el).any(|a| {
        let element = a.value();
        element.name() == "footer"
            || element
                .attr("id")
                .is_some_and(|id| id.to_ascii_lowercase().contains("footer"))
            || element
                .classes()
                .any(|class| class.to_ascii_lowercase().contains("footer"))
    })
}

fn ancestors_inclusive<'a>(el: &ElementRef<'a>) -> impl Iterator<Item = ElementRef<'a>> {
    std::iter::once(*el).chain(el.ancestors().filter_map(ElementRef::wrap))
}
