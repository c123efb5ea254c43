//! Convenience wrapper around the Google Sheets v4 values API: read a range
//! into a header-first table, convert it to and from field-keyed records,
//! and write it back.

pub mod api;
pub mod auth;
pub mod client;
pub mod convert;
pub mod error;
pub mod settings;

pub use auth::AuthMode;
pub use client::{Client, ClientBuilder};
pub use convert::{records_to_table, table_to_records, Record, Row, Table};
pub use error::ClientError;
pub use google_sheets4::api::UpdateValuesResponse;
pub use settings::Settings;
