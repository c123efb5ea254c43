use google_sheets4::{hyper_rustls::HttpsConnector, oauth2};
use hyper::client::HttpConnector;
use serde::Deserialize;
use strum::EnumString;
use tracing::debug;

use crate::{error::ClientError, settings::Settings};

pub(crate) type Authenticator = oauth2::authenticator::Authenticator<HttpsConnector<HttpConnector>>;

/// How credentials at `credentials_path` are turned into a transport.
///
/// `ServiceAccount` expects a private-key file and never prompts.
/// `InteractiveUser` expects an OAuth client secret, runs the one-time
/// consent flow in a local browser, and persists the token to `token_path`
/// for reuse and refresh on later calls.
#[derive(Clone, Copy, Debug, Default, Deserialize, EnumString, PartialEq, Eq)]
#[strum(ascii_case_insensitive)]
pub enum AuthMode {
    #[default]
    ServiceAccount,
    InteractiveUser,
}

pub(crate) async fn authenticator(settings: &Settings) -> Result<Authenticator, ClientError> {
    match settings.auth_mode {
        AuthMode::ServiceAccount => {
            let key = oauth2::read_service_account_key(&settings.credentials_path).await?;
            debug!(email = %key.client_email, "loaded service account key");
            let auth = oauth2::ServiceAccountAuthenticator::builder(key)
                .build()
                .await?;
            Ok(auth)
        }
        AuthMode::InteractiveUser => {
            let secret = oauth2::read_application_secret(&settings.credentials_path).await?;
            debug!(token_path = %settings.token_path.display(), "starting installed flow");
            let auth = oauth2::InstalledFlowAuthenticator::builder(
                secret,
                oauth2::InstalledFlowReturnMethod::HTTPRedirect,
            )
            .persist_tokens_to_disk(settings.token_path.clone())
            .build()
            .await?;
            Ok(auth)
        }
    }
}
