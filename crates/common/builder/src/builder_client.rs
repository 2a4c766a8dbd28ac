use reqwest::StatusCode;
use tracing::{info, warn};

use crate::{
    BuilderConfig,
    errors::RegistrationError,
    http_client::{ClientWithBaseUrl, ContentType},
    validator_registration::SignedValidatorRegistrationV1,
};

pub struct BuilderClient {
    client: ClientWithBaseUrl,
    register_validator_endpoint: String,
    content_type: ContentType,
}

impl BuilderClient {
    pub fn new(config: BuilderConfig) -> Result<Self, RegistrationError> {
        Ok(Self {
            client: ClientWithBaseUrl::new(config.mev_relay_url, config.request_timeout)?,
            register_validator_endpoint: config.register_validator_endpoint,
            content_type: config.content_type,
        })
    }

    /// Registers a validator's preferred fee recipient and gas limit.
    ///
    /// One request bounded by the configured timeout, no retry. Returns the response body on
    /// `200 OK`.
    pub async fn register_validator(
        &self,
        signed_registration: &SignedValidatorRegistrationV1,
    ) -> Result<String, RegistrationError> {
        let request = self
            .client
            .post(&self.register_validator_endpoint, self.content_type)?;
        let request = match self.content_type {
            ContentType::Json => request.json(signed_registration),
            ContentType::Ssz => request.body(signed_registration.to_ssz_bytes()),
        };

        info!(
            url = %self.client.base_url(),
            endpoint = %self.register_validator_endpoint,
            pubkey = %signed_registration.message.pubkey,
            "Submitting validator registration"
        );
        let response = request.send().await?;
        let status = response.status();
        let body = response.text().await?;

        match status {
            StatusCode::OK => Ok(body),
            status => {
                warn!(?status, body = %body, "Relay rejected validator registration");
                Err(RegistrationError::UnexpectedStatus { status, body })
            }
        }
    }
}
