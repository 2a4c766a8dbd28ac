use std::time::Duration;

use alloy_primitives::{aliases::B32, fixed_bytes};
use url::Url;

use crate::http_client::ContentType;

pub mod builder_client;
pub mod errors;
pub mod http_client;
pub mod registration;
pub mod validator_registration;

pub const DOMAIN_APPLICATION_BUILDER: B32 = fixed_bytes!("0x00000001");
pub const REGISTER_VALIDATOR_ENDPOINT: &str = "/eth/v1/builder/validators";
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(5);

#[derive(Debug, Clone)]
pub struct BuilderConfig {
    pub mev_relay_url: Url,
    pub register_validator_endpoint: String,
    pub request_timeout: Duration,
    pub content_type: ContentType,
}

impl BuilderConfig {
    pub fn new(mev_relay_url: Url) -> Self {
        Self {
            mev_relay_url,
            register_validator_endpoint: REGISTER_VALIDATOR_ENDPOINT.to_string(),
            request_timeout: DEFAULT_REQUEST_TIMEOUT,
            content_type: ContentType::Json,
        }
    }
}
