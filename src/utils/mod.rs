// Parsing utilities
pub mod parse_int;
pub mod query_string;

// JSON utilities
pub mod json_converter;

// Re-export all utilities for convenient access
pub use parse_int::parse_optional_id;
pub use query_string::build_query_string;
pub use json_converter::value_to_short_string;
