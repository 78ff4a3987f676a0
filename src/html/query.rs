use crate::error::{AssertError, Result};
use ego_tree::NodeId;
use scraper::{ElementRef, Html, Selector};

pub(crate) fn select_all(document: &Html, selector: &str) -> Result<Vec<NodeId>> {
    let parsed = Selector::parse(selector).map_err(|e| AssertError::InvalidSelector {
        selector: selector.to_string(),
        reason: e.to_string(),
    })?;

    Ok(document.select(&parsed).map(|element| element.id()).collect())
}

/// First element, in document order, whose `id` attribute equals `id`.
pub(crate) fn find_by_id(document: &Html, id: &str) -> Option<NodeId> {
    document
        .root_element()
        .descendants()
        .filter_map(ElementRef::wrap)
        .find(|element| element.value().id() == Some(id))
        .map(|element| element.id())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page() -> Html {
        Html::parse_document(
            r#"<div id="a"><span id="b">first</span><span id="b">second</span></div>"#,
        )
    }

    #[test]
    fn select_all_keeps_document_order() {
        let document = page();
        let ids = select_all(&document, "span").unwrap();
        let texts: Vec<String> = ids
            .iter()
            .filter_map(|id| document.tree.get(*id))
            .filter_map(ElementRef::wrap)
            .map(|element| element.text().collect())
            .collect();
        assert_eq!(texts, vec!["first", "second"]);
    }

    #[test]
    fn select_all_without_match_is_empty() {
        assert!(select_all(&page(), ".missing").unwrap().is_empty());
    }

    #[test]
    fn select_all_rejects_bad_selector() {
        let err = select_all(&page(), "div[").unwrap_err();
        assert!(matches!(err, AssertError::InvalidSelector { ref selector, .. } if selector == "div["));
    }

    #[test]
    fn find_by_id_returns_first_duplicate() {
        let document = page();
        let id = find_by_id(&document, "b").unwrap();
        let element = ElementRef::wrap(document.tree.get(id).unwrap()).unwrap();
        assert_eq!(element.text().collect::<String>(), "first");
    }

    #[test]
    fn find_by_id_misses() {
        assert!(find_by_id(&page(), "nope").is_none());
    }
}
