//! Read from a Google Sheet as a user.
//!
//! ```sh
//! export GOOGLE_SHEETS_CREDENTIALS="path/to/your/creds.json"
//! ```

use anyhow::Result;
use gsheets::{AuthMode, Client};

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt().init();

    let mut builder = Client::builder()
        .scopes(["https://www.googleapis.com/auth/spreadsheets.readonly"])
        .sheet_id("1ivbBDpVF2NJRFOCv_87nUic3iEHlvHQ_AhJbvyvt1bk")
        .default_range("employees")
        .auth_mode(AuthMode::InteractiveUser);
    // The first run walks through the consent screen and writes a token
    // file; export its path as TOKEN to reuse it on later runs.
    if let Ok(token) = std::env::var("TOKEN") {
        builder = builder.token_path(token);
    }
    let mut client = builder.build();

    let records = client.read_data(None).await?.as_records(None)?;
    println!("{}", serde_json::to_string_pretty(&records)?);
    Ok(())
}
