/// Turns a parsed SOAP response into catalog records
use super::selector::{first_element, first_text, select_all_or_local, select_first, Chain, Lookup};
use super::xml::{Element, XmlDocument};
use crate::error::CatalogError;
use crate::models::{CategoryRef, OrganizationRef, Product};

/// Message used when a fault carries no `faultstring`.
pub const DEFAULT_FAULT_MESSAGE: &str = "SOAP Fault";

const FAULT_TAGS: &[&str] = &["soap:Fault", "SOAP-ENV:Fault", "soapenv:Fault", "Fault"];
const FAULT_LOCAL: &str = "Fault";
const FAULT_STRING: &Chain = &[
    Lookup::Descendant("faultstring"),
    Lookup::Descendant("faultString"),
    Lookup::DescendantLocal("faultstring"),
    Lookup::DescendantLocal("faultString"),
    // SOAP 1.2: <env:Reason><env:Text>
    Lookup::DescendantLocal("Text"),
];

const PRODUCT_TAGS: &[&str] = &["product", "Product", "ns2:product"];
const PRODUCT_LOCAL: &[&str] = &["product", "Product"];

// Exact names first; any other prefix is accepted last.
const ID: &Chain = &[
    Lookup::Child("id"),
    Lookup::Child("Id"),
    Lookup::Child("ns2:id"),
    Lookup::ChildLocal("id"),
    Lookup::ChildLocal("Id"),
];
const NAME: &Chain = &[
    Lookup::Child("name"),
    Lookup::Child("Name"),
    Lookup::Child("ns2:name"),
    Lookup::ChildLocal("name"),
    Lookup::ChildLocal("Name"),
];
const DESCRIPTION: &Chain = &[
    Lookup::Child("description"),
    Lookup::Child("Description"),
    Lookup::Child("ns2:description"),
    Lookup::ChildLocal("description"),
    Lookup::ChildLocal("Description"),
];
const ORGANIZATION: &Chain = &[
    Lookup::Child("organization"),
    Lookup::Child("Organization"),
    Lookup::Child("ns2:organization"),
    Lookup::ChildLocal("organization"),
    Lookup::ChildLocal("Organization"),
];
const CATEGORY: &Chain = &[
    Lookup::Child("category"),
    Lookup::Child("Category"),
    Lookup::Child("ns2:category"),
    Lookup::ChildLocal("category"),
    Lookup::ChildLocal("Category"),
];

/// Fail with `SoapFault` if the document contains a fault element.
pub fn check_fault(doc: &XmlDocument) -> Result<(), CatalogError> {
    let fault = select_first(doc, FAULT_TAGS).or_else(|| doc.elements().find(|e| e.local_name() == FAULT_LOCAL));
    match fault {
        Some(fault) => {
            let message = first_text(fault, FAULT_STRING).unwrap_or_else(|| DEFAULT_FAULT_MESSAGE.to_string());
            tracing::warn!(%message, "SOAP response carries a fault");
            Err(CatalogError::SoapFault { message })
        }
        None => Ok(()),
    }
}

/// Extract products from a `GetProductsResponse` / `CreateProductResponse` document.
///
/// A fault anywhere in the document takes precedence over product data.
/// Product elements lacking a usable `id` or `name` are dropped.
pub fn normalize_products(doc: &XmlDocument) -> Result<Vec<Product>, CatalogError> {
    check_fault(doc)?;

    let elements = select_all_or_local(doc, PRODUCT_TAGS, PRODUCT_LOCAL);
    let total = elements.len();
    let products: Vec<Product> = elements.into_iter().filter_map(normalize_product).collect();
    if products.len() < total {
        tracing::debug!("Dropped {} incomplete SOAP product record(s)", total - products.len());
    }
    Ok(products)
}

fn normalize_product(element: Element<'_>) -> Option<Product> {
    let name = first_text(element, NAME)?;
    let id = parse_id(first_text(element, ID)?)?;

    let organization = first_element(element, ORGANIZATION).map(|org| OrganizationRef {
        id: first_text(org, ID).and_then(parse_id),
        name: first_text(org, NAME),
    });
    let category = first_element(element, CATEGORY).map(|cat| CategoryRef {
        id: first_text(cat, ID).and_then(parse_id),
        name: first_text(cat, NAME),
        description: first_text(cat, DESCRIPTION),
    });

    Some(Product {
        id: Some(id),
        name,
        organization,
        category,
    })
}

fn parse_id(raw: String) -> Option<i64> {
    match raw.parse::<i64>() {
        Ok(id) => Some(id),
        Err(_) => {
            tracing::debug!(raw = %raw, "Ignoring non-numeric SOAP id");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(xml: &str) -> XmlDocument {
        XmlDocument::parse(xml).unwrap()
    }

    const LIST_RESPONSE: &str = r#"<SOAP-ENV:Envelope xmlns:SOAP-ENV="http://schemas.xmlsoap.org/soap/envelope/">
  <SOAP-ENV:Header/>
  <SOAP-ENV:Body>
    <ns2:GetProductsResponse xmlns:ns2="http://example.com/products">
      <ns2:products>
        <ns2:product>
          <ns2:id>1</ns2:id>
          <ns2:name>Laptop</ns2:name>
          <ns2:organization><ns2:id>10</ns2:id><ns2:name>TechCorp</ns2:name></ns2:organization>
          <ns2:category><ns2:id>20</ns2:id><ns2:name>Hardware</ns2:name><ns2:description>Things</ns2:description></ns2:category>
        </ns2:product>
        <ns2:product>
          <ns2:id>2</ns2:id>
          <ns2:name>Chair</ns2:name>
          <ns2:organization/>
          <ns2:category/>
        </ns2:product>
      </ns2:products>
    </ns2:GetProductsResponse>
  </SOAP-ENV:Body>
</SOAP-ENV:Envelope>"#;

    #[test]
    fn test_normalize_namespaced_list() {
        let products = normalize_products(&parse(LIST_RESPONSE)).unwrap();
        assert_eq!(products.len(), 2);

        let laptop = &products[0];
        assert_eq!(laptop.id, Some(1));
        assert_eq!(laptop.name, "Laptop");
        assert_eq!(laptop.organization_id(), Some(10));
        assert_eq!(laptop.organization_name(), Some("TechCorp"));
        assert_eq!(laptop.category_id(), Some(20));
        assert_eq!(laptop.category_description(), Some("Things"));

        let chair = &products[1];
        assert_eq!(chair.name, "Chair");
        assert_eq!(chair.organization_label(), "N/A");
        assert_eq!(chair.category_label(), "N/A");
    }

    #[test]
    fn test_fault_supersedes_products() {
        let xml = r#"<soap:Envelope xmlns:soap="http://schemas.xmlsoap.org/soap/envelope/"><soap:Body>
            <soap:Fault><faultcode>soap:Server</faultcode><faultstring>Category not found</faultstring></soap:Fault>
            <product><id>1</id><name>Ghost</name></product>
        </soap:Body></soap:Envelope>"#;
        match normalize_products(&parse(xml)) {
            Err(CatalogError::SoapFault { message }) => assert_eq!(message, "Category not found"),
            other => panic!("expected fault, got {:?}", other),
        }
    }

    #[test]
    fn test_fault_without_faultstring_uses_default_message() {
        let xml = "<Envelope><Body><Fault><faultcode>Client</faultcode></Fault></Body></Envelope>";
        match normalize_products(&parse(xml)) {
            Err(CatalogError::SoapFault { message }) => assert_eq!(message, DEFAULT_FAULT_MESSAGE),
            other => panic!("expected fault, got {:?}", other),
        }
    }

    #[test]
    fn test_fault_with_any_prefix_is_detected() {
        let jaxws = r#"<S:Envelope xmlns:S="http://schemas.xmlsoap.org/soap/envelope/"><S:Body>
            <S:Fault><faultcode>S:Client</faultcode><faultstring>Category not found</faultstring></S:Fault>
        </S:Body></S:Envelope>"#;
        match normalize_products(&parse(jaxws)) {
            Err(CatalogError::SoapFault { message }) => assert_eq!(message, "Category not found"),
            other => panic!("expected fault, got {:?}", other),
        }

        let soap12 = r#"<env:Envelope xmlns:env="http://www.w3.org/2003/05/soap-envelope"><env:Body>
            <env:Fault><env:Code><env:Value>env:Sender</env:Value></env:Code>
            <env:Reason><env:Text xml:lang="en">Invalid organization</env:Text></env:Reason></env:Fault>
        </env:Body></env:Envelope>"#;
        match normalize_products(&parse(soap12)) {
            Err(CatalogError::SoapFault { message }) => assert_eq!(message, "Invalid organization"),
            other => panic!("expected fault, got {:?}", other),
        }
    }

    #[test]
    fn test_products_with_other_prefix_are_read() {
        let xml = r#"<S:Envelope xmlns:S="http://schemas.xmlsoap.org/soap/envelope/"><S:Body>
            <tns:GetProductsResponse xmlns:tns="http://example.com/products">
              <tns:product>
                <tns:id>1</tns:id><tns:name>Lamp</tns:name>
                <tns:organization><tns:id>4</tns:id><tns:name>Luz SA</tns:name></tns:organization>
              </tns:product>
            </tns:GetProductsResponse>
        </S:Body></S:Envelope>"#;
        let products = normalize_products(&parse(xml)).unwrap();
        assert_eq!(products.len(), 1);
        assert_eq!(products[0].id, Some(1));
        assert_eq!(products[0].name, "Lamp");
        assert_eq!(products[0].organization_id(), Some(4));
        assert_eq!(products[0].organization_name(), Some("Luz SA"));
    }

    #[test]
    fn test_incomplete_records_are_dropped() {
        let xml = r#"<r>
            <product><name>No id</name></product>
            <product><id>5</id></product>
            <product><id>6</id><name>   </name></product>
            <product><id>abc</id><name>Bad id</name></product>
            <Product><Id>7</Id><Name>Kept</Name></Product>
        </r>"#;
        let products = normalize_products(&parse(xml)).unwrap();
        assert_eq!(products.len(), 1);
        assert_eq!(products[0].id, Some(7));
        assert_eq!(products[0].name, "Kept");
    }

    #[test]
    fn test_bare_name_preferred_over_prefixed() {
        let xml = "<r><product><id>1</id><ns2:name>Prefixed</ns2:name><name>Bare</name></product></r>";
        let products = normalize_products(&parse(xml)).unwrap();
        assert_eq!(products[0].name, "Bare");
    }

    #[test]
    fn test_product_id_is_not_taken_from_nested_organization() {
        let xml = "<r><product><organization><id>9</id></organization><name>Orphan</name></product></r>";
        assert!(normalize_products(&parse(xml)).unwrap().is_empty());
    }

    #[test]
    fn test_empty_response_yields_empty_list() {
        let xml = "<Envelope><Body><GetProductsResponse/></Body></Envelope>";
        assert!(normalize_products(&parse(xml)).unwrap().is_empty());
    }
}
