//! Read from a Google Sheet as a service account.
//!
//! ```sh
//! export GOOGLE_SHEETS_CREDENTIALS="path/to/your/creds.json"
//! export SHEET_ID="your-spreadsheet-id"
//! ```

use anyhow::Result;
use gsheets::Client;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt().init();

    let mut client = Client::builder().default_range("employees").build();

    let records = client.read_data(None).await?.as_records(None)?;
    for record in &records {
        println!("{}", serde_json::to_string(record)?);
    }
    Ok(())
}
