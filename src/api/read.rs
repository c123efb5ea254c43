use tracing::debug;

use crate::{client::Client, error::ClientError};

impl Client {
    /// Fetch the values in `range` (or the configured default range) and
    /// buffer them as the working table.
    ///
    /// A range with no stored values buffers an empty table. Returns the
    /// client so the fetch can be chained into [`Client::as_records`].
    pub async fn read_data(&mut self, range: Option<&str>) -> Result<&mut Self, ClientError> {
        let sheet_id = self.sheet_id()?.to_owned();
        let range = self.resolve_range(range)?;
        let hub = self.hub().await?;

        let mut call = hub.spreadsheets().values_get(&sheet_id, &range);
        for scope in &self.settings.scopes {
            call = call.add_scope(scope);
        }
        let (_, value_range) = call.doit().await?;

        let table = value_range.values.unwrap_or_default();
        debug!(%range, rows = table.len(), "fetched values");
        self.data = Some(table);
        Ok(self)
    }
}
