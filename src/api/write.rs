use google_sheets4::api::{UpdateValuesResponse, ValueRange};
use tracing::info;

use crate::{client::Client, convert::Table, error::ClientError};

impl Client {
    /// Write `table`, or the buffered working table, to `range` (or the
    /// configured default range) with raw value semantics.
    ///
    /// The provider's update summary is passed back untouched.
    pub async fn write_data(
        &self,
        table: Option<Table>,
        range: Option<&str>,
    ) -> Result<UpdateValuesResponse, ClientError> {
        let table = match table {
            Some(table) => table,
            None => self.data().cloned().unwrap_or_default(),
        };
        if table.is_empty() {
            return Err(ClientError::InvalidData);
        }
        let sheet_id = self.sheet_id()?.to_owned();
        let range = self.resolve_range(range)?;
        let hub = self.hub().await?;

        let body = ValueRange {
            major_dimension: None,
            range: Some(range.clone()),
            values: Some(table),
        };
        let mut call = hub
            .spreadsheets()
            .values_update(body, &sheet_id, &range)
            .value_input_option("RAW");
        for scope in &self.settings.scopes {
            call = call.add_scope(scope);
        }
        let (_, response) = call.doit().await?;

        info!(
            %range,
            updated_rows = response.updated_rows,
            updated_cells = response.updated_cells,
            "values updated"
        );
        Ok(response)
    }
}
