use std::time::Duration;

use clap::Parser;
use mevreg_builder::{BuilderConfig, REGISTER_VALIDATOR_ENDPOINT, http_client::ContentType};
use url::Url;

use crate::cli::{
    RegistrationArgs,
    constants::{DEFAULT_CONTENT_TYPE, DEFAULT_MEV_RELAY_URL, DEFAULT_REQUEST_TIMEOUT},
};

#[derive(Debug, Parser)]
pub struct RegisterConfig {
    #[command(flatten)]
    pub registration: RegistrationArgs,

    #[arg(long, help = "Set HTTP url of the MEV relay", default_value = DEFAULT_MEV_RELAY_URL)]
    pub mev_relay_url: Url,

    #[arg(long, help = "Set the relay path validator registrations are posted to", default_value = REGISTER_VALIDATOR_ENDPOINT)]
    pub endpoint: String,

    #[arg(long, help = "Set HTTP request timeout in seconds for relay calls", default_value = DEFAULT_REQUEST_TIMEOUT, value_parser = duration_parser)]
    pub request_timeout: Duration,

    #[arg(long, help = "Set content type for relay calls", default_value = DEFAULT_CONTENT_TYPE, value_parser = content_type_parser)]
    pub content_type: ContentType,

    #[arg(long, help = "Print the signed registration instead of submitting it")]
    pub dry_run: bool,
}

impl RegisterConfig {
    pub fn builder_config(&self) -> BuilderConfig {
        BuilderConfig {
            mev_relay_url: self.mev_relay_url.clone(),
            register_validator_endpoint: self.endpoint.clone(),
            request_timeout: self.request_timeout,
            content_type: self.content_type,
        }
    }
}

pub fn duration_parser(duration_string: &str) -> Result<Duration, String> {
    Ok(Duration::from_secs(duration_string.parse().map_err(
        |err| format!("Could not parse the request timeout: {err:?}"),
    )?))
}

pub fn content_type_parser(content_type_string: &str) -> Result<ContentType, String> {
    match content_type_string {
        "ssz" => Ok(ContentType::Ssz),
        "json" => Ok(ContentType::Json),
        _ => Err(format!(
            "Invalid Content Type provided: {content_type_string}"
        )),
    }
}
