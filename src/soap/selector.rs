/// Candidate selector chains
///
/// SOAP servers disagree on casing and namespace prefixes, so every field is
/// looked up through an ordered list of alternatives. The first alternative
/// that yields a (non-empty) result wins; later ones are never consulted.
use super::xml::{Element, XmlDocument};

/// One way of finding an element relative to a scope element.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lookup {
    /// First direct child with exactly this qualified name.
    Child(&'static str),
    /// First descendant (document order) with exactly this qualified name.
    Descendant(&'static str),
    /// First direct child with this local name, whatever its prefix.
    ChildLocal(&'static str),
    /// First descendant with this local name, whatever its prefix.
    DescendantLocal(&'static str),
}

impl Lookup {
    pub fn find<'d>(&self, scope: Element<'d>) -> Option<Element<'d>> {
        match *self {
            Lookup::Child(name) => scope.children().find(|e| e.name() == name),
            Lookup::Descendant(name) => scope.descendants().find(|e| e.name() == name),
            Lookup::ChildLocal(local) => scope.children().find(|e| e.local_name() == local),
            Lookup::DescendantLocal(local) => scope.descendants().find(|e| e.local_name() == local),
        }
    }
}

/// Ordered list of lookups tried in sequence.
pub type Chain = [Lookup];

/// First element any lookup of the chain finds, trying lookups in order.
pub fn first_element<'d>(scope: Element<'d>, chain: &Chain) -> Option<Element<'d>> {
    chain.iter().find_map(|lookup| lookup.find(scope))
}

/// First non-empty trimmed text found through the chain.
///
/// A lookup that finds an element with blank text does not stop the search.
pub fn first_text(scope: Element<'_>, chain: &Chain) -> Option<String> {
    chain.iter().find_map(|lookup| {
        lookup
            .find(scope)
            .map(|e| e.text_content().trim().to_string())
            .filter(|t| !t.is_empty())
    })
}

/// Every element of the document whose qualified name is one of `names`, in document order.
pub fn select_all<'d>(doc: &'d XmlDocument, names: &[&str]) -> Vec<Element<'d>> {
    doc.elements().filter(|e| names.contains(&e.name())).collect()
}

/// Like [`select_all`], but an element whose local name is one of `locals` also matches.
pub fn select_all_or_local<'d>(doc: &'d XmlDocument, names: &[&str], locals: &[&str]) -> Vec<Element<'d>> {
    doc.elements()
        .filter(|e| names.contains(&e.name()) || locals.contains(&e.local_name()))
        .collect()
}

/// First element of the document matching any of `names`, honoring the order of `names`.
pub fn select_first<'d>(doc: &'d XmlDocument, names: &[&str]) -> Option<Element<'d>> {
    names
        .iter()
        .find_map(|name| doc.elements().find(|e| e.name() == *name))
}

#[cfg(test)]
mod tests {
    use super::*;

    const NAME: &Chain = &[Lookup::Child("name"), Lookup::Child("Name"), Lookup::Child("ns2:name")];

    fn doc(xml: &str) -> XmlDocument {
        XmlDocument::parse(xml).unwrap()
    }

    #[test]
    fn test_first_candidate_wins_even_when_later_in_document() {
        let d = doc("<p><ns2:name>Prefixed</ns2:name><name>Bare</name></p>");
        assert_eq!(first_text(d.root().unwrap(), NAME), Some("Bare".into()));
    }

    #[test]
    fn test_falls_through_to_later_candidates() {
        let d = doc("<p><ns2:name> Prefixed </ns2:name></p>");
        assert_eq!(first_text(d.root().unwrap(), NAME), Some("Prefixed".into()));
    }

    #[test]
    fn test_blank_text_does_not_stop_the_chain() {
        let d = doc("<p><name>  </name><Name>Cased</Name></p>");
        assert_eq!(first_text(d.root().unwrap(), NAME), Some("Cased".into()));
    }

    #[test]
    fn test_child_lookup_ignores_grandchildren() {
        let d = doc("<p><organization><name>Org</name></organization></p>");
        assert_eq!(first_text(d.root().unwrap(), NAME), None);
        let nested: &Chain = &[Lookup::Descendant("name")];
        assert_eq!(first_text(d.root().unwrap(), nested), Some("Org".into()));
    }

    #[test]
    fn test_local_lookup_matches_any_prefix() {
        let d = doc("<p><tns:name>Lamp</tns:name></p>");
        assert_eq!(first_text(d.root().unwrap(), NAME), None);
        let chain: &Chain = &[Lookup::Child("name"), Lookup::ChildLocal("name")];
        assert_eq!(first_text(d.root().unwrap(), chain), Some("Lamp".into()));
    }

    #[test]
    fn test_select_all_or_local_keeps_document_order() {
        let d = doc("<r><tns:product n='1'/><product n='2'/><tns:products/></r>");
        let found = select_all_or_local(&d, &["product"], &["product"]);
        let names: Vec<&str> = found.iter().map(|e| e.name()).collect();
        assert_eq!(names, vec!["tns:product", "product"]);
    }

    #[test]
    fn test_select_all_preserves_document_order_across_names() {
        let d = doc("<r><Product n='1'/><product n='2'/><Product n='3'/></r>");
        let found = select_all(&d, &["product", "Product"]);
        let names: Vec<&str> = found.iter().map(|e| e.name()).collect();
        assert_eq!(names, vec!["Product", "product", "Product"]);
    }

    #[test]
    fn test_select_first_honors_candidate_order() {
        let d = doc("<r><Fault>late</Fault><soap:Fault>early</soap:Fault></r>");
        let hit = select_first(&d, &["soap:Fault", "Fault"]).unwrap();
        assert_eq!(hit.name(), "soap:Fault");
    }
}
