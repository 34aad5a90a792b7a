/// SOAP transport adapter
use reqwest::header::CONTENT_TYPE;
use yansi::Paint;

use super::envelope::{create_product_envelope, get_products_envelope, SoapOperation, SoapProductInput};
use super::xml::XmlDocument;
use crate::api::client::log_output;
use crate::error::CatalogError;

pub const SOAP_CONTENT_TYPE: &str = "text/xml; charset=utf-8";

/// Posts hand-built envelopes to the products endpoint and returns the parsed response.
///
/// Faults are not interpreted here; see [`crate::soap::normalize_products`].
#[derive(Clone)]
pub struct SoapClient {
    client: reqwest::Client,
    endpoint: String,
}

impl SoapClient {
    pub fn new(client: reqwest::Client, endpoint: impl Into<String>) -> Self {
        Self {
            client,
            endpoint: endpoint.into(),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    pub async fn list_products(&self) -> Result<XmlDocument, CatalogError> {
        self.post(SoapOperation::GetProducts, get_products_envelope()).await
    }

    pub async fn create_product(&self, product: &SoapProductInput) -> Result<XmlDocument, CatalogError> {
        self.post(SoapOperation::CreateProduct, create_product_envelope(product)).await
    }

    async fn post(&self, operation: SoapOperation, envelope: String) -> Result<XmlDocument, CatalogError> {
        let action = operation.action();

        // --- Curl Logging ---
        let parts = [
            Paint::new("curl").fg(yansi::Color::Green).bold().to_string(),
            format!("-X {}", Paint::new("POST").fg(yansi::Color::Yellow).bold()),
            format!("'{}'", Paint::new(&self.endpoint).fg(yansi::Color::Cyan)),
            format!(
                "{} {}",
                Paint::new("-H").fg(yansi::Color::Magenta),
                Paint::new(format!("'Content-Type: {}'", SOAP_CONTENT_TYPE)).fg(yansi::Color::Magenta)
            ),
            format!(
                "{} {}",
                Paint::new("-H").fg(yansi::Color::Magenta),
                Paint::new(format!("'SOAPAction: {}'", action)).fg(yansi::Color::Magenta)
            ),
        ];
        log_output(format!("Request:\n{}", parts.join(" ")));
        // --------------------

        tracing::debug!(endpoint = %self.endpoint, %action, "Posting SOAP envelope");
        let response = self
            .client
            .post(&self.endpoint)
            .header(CONTENT_TYPE, SOAP_CONTENT_TYPE)
            .header("SOAPAction", action)
            .body(envelope)
            .send()
            .await
            .map_err(|e| CatalogError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            log_output(format!("Response:\n{}", Paint::new(format!("HTTP {}", status)).fg(yansi::Color::Red)));
            return Err(CatalogError::Http { status: status.as_u16() });
        }

        let text = response.text().await.map_err(|e| CatalogError::Network(e.to_string()))?;
        log_output(format!("Response:\n{}", Paint::new(&text).rgb(100, 100, 100)));
        XmlDocument::parse(&text)
    }
}
