use std::{env, path::PathBuf};

use google_sheets4::{hyper_rustls, Sheets};
use hyper::client::HttpConnector;

use crate::{
    auth::{self, AuthMode},
    convert::{self, Record, Row, Table},
    error::ClientError,
    settings::{Settings, CREDENTIALS_ENV, SHEET_ID_ENV},
};

type HttpsConnector = hyper_rustls::HttpsConnector<HttpConnector>;

/// Client for a single spreadsheet, holding at most one working table.
///
/// `read_data` and `as_table` buffer a table and hand the client back, so a
/// fetch can be chained straight into a conversion or a write:
///
/// ```no_run
/// # async fn run() -> Result<(), gsheets::ClientError> {
/// let mut client = gsheets::Client::builder()
///     .sheet_id("1ivbBDpVF2NJRFOCv_87nUic3iEHlvHQ_AhJbvyvt1bk")
///     .default_range("employees")
///     .build();
/// let records = client.read_data(None).await?.as_records(None)?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct Client {
    pub settings: Settings,
    pub(crate) data: Option<Table>,
}

impl Client {
    pub fn new(settings: Settings) -> Self {
        Self {
            settings,
            data: None,
        }
    }

    pub fn builder() -> ClientBuilder {
        ClientBuilder::default()
    }

    /// The buffered working table, if a read or conversion has set one.
    pub fn data(&self) -> Option<&Table> {
        self.data.as_ref()
    }

    /// Pick the range for a call: explicit argument first, configured
    /// default second.
    pub fn resolve_range(&self, range: Option<&str>) -> Result<String, ClientError> {
        range
            .map(str::to_owned)
            .or_else(|| self.settings.default_range.clone())
            .ok_or(ClientError::MissingRange)
    }

    /// Convert the supplied table, or the buffered one, into records.
    pub fn as_records(&self, table: Option<&[Row]>) -> Result<Vec<Record>, ClientError> {
        let rows = match table {
            Some(rows) => rows,
            None => self.data.as_deref().unwrap_or_default(),
        };
        convert::table_to_records(rows)
    }

    /// Convert records into a table and buffer it for a following write.
    pub fn as_table(
        &mut self,
        records: &[Record],
        include_header: bool,
    ) -> Result<&mut Self, ClientError> {
        self.data = Some(convert::records_to_table(records, include_header)?);
        Ok(self)
    }

    pub(crate) fn sheet_id(&self) -> Result<&str, ClientError> {
        self.settings
            .sheet_id
            .as_deref()
            .ok_or(ClientError::MissingSheetId)
    }

    pub(crate) async fn hub(&self) -> Result<Sheets<HttpsConnector>, ClientError> {
        let auth = auth::authenticator(&self.settings).await?;
        let connector = hyper_rustls::HttpsConnectorBuilder::new()
            .with_native_roots()?
            .https_only()
            .enable_http1()
            .build();
        Ok(Sheets::new(hyper::Client::builder().build(connector), auth))
    }
}

/// Builds a [`Client`], falling back to the process environment for the
/// spreadsheet id and credentials path when they are not given explicitly.
#[derive(Debug, Default)]
pub struct ClientBuilder {
    scopes: Option<Vec<String>>,
    sheet_id: Option<String>,
    credentials_path: Option<PathBuf>,
    token_path: Option<PathBuf>,
    default_range: Option<String>,
    auth_mode: Option<AuthMode>,
}

impl ClientBuilder {
    pub fn scopes<I, S>(mut self, scopes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.scopes = Some(scopes.into_iter().map(Into::into).collect());
        self
    }

    pub fn sheet_id(mut self, sheet_id: &str) -> Self {
        self.sheet_id = Some(sheet_id.to_owned());
        self
    }

    pub fn credentials_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.credentials_path = Some(path.into());
        self
    }

    pub fn token_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.token_path = Some(path.into());
        self
    }

    pub fn default_range(mut self, range: &str) -> Self {
        self.default_range = Some(range.to_owned());
        self
    }

    pub fn auth_mode(mut self, mode: AuthMode) -> Self {
        self.auth_mode = Some(mode);
        self
    }

    /// Resolve the configuration once, with explicit arguments beating the
    /// environment and the environment beating built-in defaults.
    pub fn build(self) -> Client {
        let defaults = Settings::default();
        let settings = Settings {
            scopes: self.scopes.unwrap_or(defaults.scopes),
            sheet_id: self.sheet_id.or_else(|| env::var(SHEET_ID_ENV).ok()),
            credentials_path: self
                .credentials_path
                .or_else(|| env::var(CREDENTIALS_ENV).ok().map(PathBuf::from))
                .unwrap_or(defaults.credentials_path),
            token_path: self.token_path.unwrap_or(defaults.token_path),
            default_range: self.default_range,
            auth_mode: self.auth_mode.unwrap_or_default(),
        };
        Client::new(settings)
    }
}

#[cfg(test)]
mod test {
    use serde_json::json;

    use super::*;

    #[test]
    fn explicit_range_wins_over_default() {
        let client = Client::builder().default_range("named_range").build();
        assert_eq!(
            client.resolve_range(Some("some_other_range")).unwrap(),
            "some_other_range"
        );
        assert_eq!(client.resolve_range(None).unwrap(), "named_range");
    }

    #[test]
    fn missing_range_is_an_error() {
        let client = Client::new(Settings::default());
        assert!(matches!(
            client.resolve_range(Some("test_range")),
            Ok(range) if range == "test_range"
        ));
        assert!(matches!(
            client.resolve_range(None),
            Err(ClientError::MissingRange)
        ));
    }

    #[test]
    fn environment_fills_unset_identifiers() {
        env::set_var(SHEET_ID_ENV, "env-sheet");
        env::set_var(CREDENTIALS_ENV, "/tmp/env-creds.json");
        let from_env = Client::builder().build();
        let explicit = Client::builder()
            .sheet_id("arg-sheet")
            .credentials_path("arg-creds.json")
            .build();
        env::remove_var(SHEET_ID_ENV);
        env::remove_var(CREDENTIALS_ENV);

        assert_eq!(from_env.settings.sheet_id.as_deref(), Some("env-sheet"));
        assert_eq!(
            from_env.settings.credentials_path,
            PathBuf::from("/tmp/env-creds.json")
        );
        assert_eq!(explicit.settings.sheet_id.as_deref(), Some("arg-sheet"));
        assert_eq!(
            explicit.settings.credentials_path,
            PathBuf::from("arg-creds.json")
        );
    }

    #[test]
    fn builder_overrides_every_default() {
        let client = Client::builder()
            .scopes(["https://www.googleapis.com/auth/spreadsheets.readonly"])
            .sheet_id("abc")
            .credentials_path("creds.json")
            .token_path("tokens/cached.json")
            .default_range("employees")
            .auth_mode(AuthMode::InteractiveUser)
            .build();
        assert_eq!(
            client.settings.scopes,
            vec!["https://www.googleapis.com/auth/spreadsheets.readonly".to_string()]
        );
        assert_eq!(client.settings.sheet_id.as_deref(), Some("abc"));
        assert_eq!(client.settings.default_range.as_deref(), Some("employees"));
        assert_eq!(client.settings.auth_mode, AuthMode::InteractiveUser);
    }

    #[test]
    fn as_records_without_data_is_invalid() {
        let client = Client::new(Settings::default());
        assert!(matches!(
            client.as_records(None),
            Err(ClientError::InvalidData)
        ));
    }

    #[test]
    fn as_records_on_an_empty_fetch_is_invalid() {
        // a read that returns no values buffers an empty table
        let mut client = Client::new(Settings::default());
        client.data = Some(Vec::new());
        assert!(matches!(
            client.as_records(None),
            Err(ClientError::InvalidData)
        ));
    }

    #[test]
    fn as_records_prefers_the_supplied_table() {
        let client = Client::new(Settings::default());
        let table = vec![vec![json!("Name")], vec![json!("Fred")]];
        let records = client.as_records(Some(&table)).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].get("Name"), Some(&json!("Fred")));
    }

    #[test]
    fn as_table_buffers_converted_rows() {
        let table = vec![
            vec![json!("Name"), json!("Age")],
            vec![json!("Fred"), json!(31)],
        ];
        let records = convert::table_to_records(&table).unwrap();

        let mut client = Client::new(Settings::default());
        client.as_table(&records, true).unwrap();
        assert_eq!(client.data(), Some(&table));

        client.as_table(&records, false).unwrap();
        assert_eq!(client.data().map(Vec::len), Some(1));
    }
}
