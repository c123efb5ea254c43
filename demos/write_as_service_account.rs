//! Write to a Google Sheet as a service account.
//!
//! ```sh
//! export GOOGLE_SHEETS_CREDENTIALS="path/to/your/creds.json"
//! export SHEET_ID="your-spreadsheet-id"
//! export DEFAULT_RANGE="your-named-range"
//! ```

use anyhow::Result;
use gsheets::{Client, Record};
use serde_json::json;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt().init();

    let mut client = Client::builder()
        .default_range(&std::env::var("DEFAULT_RANGE")?)
        .build();

    let data: Vec<Record> = [
        json!({"First Name": "John", "Last Name": "Smith", "Age": "32", "Role": "Analyst"}),
        json!({"First Name": "Jane", "Last Name": "Doe", "Age": "35", "Role": "Engineer"}),
    ]
    .into_iter()
    .filter_map(|value| value.as_object().cloned())
    .collect();

    let response = client.as_table(&data, true)?.write_data(None, None).await?;
    println!("{response:?}");
    Ok(())
}
