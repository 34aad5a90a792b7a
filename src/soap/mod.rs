//! SOAP/XML side of the catalog
//!
//! The products service also speaks SOAP 1.1. Requests are hand-built
//! envelopes ([`envelope`]), responses are parsed into a small element tree
//! ([`xml`]) and then normalized into [`crate::models::Product`] records
//! ([`normalizer`]) through ordered candidate lookups ([`selector`]).
//!
//! ```
//! use catalog::soap::{normalize_products, XmlDocument};
//!
//! let doc = XmlDocument::parse(
//!     "<Envelope><Body><product><id>1</id><name>Lamp</name></product></Body></Envelope>",
//! ).unwrap();
//! let products = normalize_products(&doc).unwrap();
//! assert_eq!(products[0].name, "Lamp");
//! ```

pub mod client;
pub mod envelope;
pub mod normalizer;
pub mod selector;
pub mod xml;

pub use client::SoapClient;
pub use envelope::{SoapOperation, SoapProductInput};
pub use normalizer::{check_fault, normalize_products};
pub use xml::{Element, XmlDocument};
