/// SOAP request envelopes for the products service
use quick_xml::escape::escape;

use crate::models::NewProduct;

/// SOAP 1.1 envelope namespace
pub const SOAP_ENV_NS: &str = "http://schemas.xmlsoap.org/soap/envelope/";

/// Target namespace of the products service
pub const PRODUCTS_NS: &str = "http://example.com/products";

/// Operations exposed by the products endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SoapOperation {
    GetProducts,
    CreateProduct,
}

impl SoapOperation {
    pub fn request_element(&self) -> &'static str {
        match self {
            SoapOperation::GetProducts => "GetProductsRequest",
            SoapOperation::CreateProduct => "CreateProductRequest",
        }
    }

    /// Value of the `SOAPAction` header.
    pub fn action(&self) -> String {
        format!("{}/{}", PRODUCTS_NS, self.request_element())
    }
}

/// Product fields sent with `CreateProductRequest`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SoapProductInput {
    pub name: String,
    pub organization_id: i64,
    pub category_id: i64,
}

impl From<&NewProduct> for SoapProductInput {
    fn from(product: &NewProduct) -> Self {
        SoapProductInput {
            name: product.name.clone(),
            organization_id: product.organization.id,
            category_id: product.category.id,
        }
    }
}

fn wrap(body: &str) -> String {
    format!(
        r#"<soapenv:Envelope xmlns:soapenv="{}" xmlns:prod="{}">
    <soapenv:Header/>
    <soapenv:Body>
{}
    </soapenv:Body>
</soapenv:Envelope>"#,
        SOAP_ENV_NS, PRODUCTS_NS, body
    )
}

pub fn get_products_envelope() -> String {
    wrap(&format!("        <prod:{}/>", SoapOperation::GetProducts.request_element()))
}

/// Build the create envelope. Text values are XML-escaped.
pub fn create_product_envelope(product: &SoapProductInput) -> String {
    let op = SoapOperation::CreateProduct.request_element();
    wrap(&format!(
        r#"        <prod:{op}>
            <prod:product>
                <prod:name>{name}</prod:name>
                <prod:organization>
                    <prod:id>{org}</prod:id>
                </prod:organization>
                <prod:category>
                    <prod:id>{cat}</prod:id>
                </prod:category>
            </prod:product>
        </prod:{op}>"#,
        op = op,
        name = escape(product.name.as_str()),
        org = product.organization_id,
        cat = product.category_id,
    ))
}
