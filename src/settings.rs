use std::path::PathBuf;

use serde::Deserialize;

use crate::auth::AuthMode;

pub const SPREADSHEETS_SCOPE: &str = "https://www.googleapis.com/auth/spreadsheets";

/// Environment variable overriding the credentials file path.
pub const CREDENTIALS_ENV: &str = "GOOGLE_SHEETS_CREDENTIALS";
/// Environment variable supplying the spreadsheet id.
pub const SHEET_ID_ENV: &str = "SHEET_ID";

#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(default)]
pub struct Settings {
    pub scopes: Vec<String>,
    pub sheet_id: Option<String>,
    pub credentials_path: PathBuf,
    pub token_path: PathBuf,
    pub default_range: Option<String>,
    pub auth_mode: AuthMode,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            scopes: vec![SPREADSHEETS_SCOPE.to_string()],
            sheet_id: None,
            credentials_path: PathBuf::from("credentials.json"),
            token_path: PathBuf::from("token.json"),
            default_range: None,
            auth_mode: AuthMode::ServiceAccount,
        }
    }
}
