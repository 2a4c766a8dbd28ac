use std::time::Duration;

use reqwest::{
    Client, RequestBuilder, Url,
    header::{ACCEPT, CONTENT_TYPE, HeaderValue},
};

use crate::errors::RegistrationError;

pub const JSON_CONTENT_TYPE: &str = "application/json";
pub const SSZ_CONTENT_TYPE: &str = "application/octet-stream";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentType {
    Json,
    Ssz,
}

impl ContentType {
    pub fn header_value(&self) -> HeaderValue {
        match self {
            ContentType::Json => HeaderValue::from_static(JSON_CONTENT_TYPE),
            ContentType::Ssz => HeaderValue::from_static(SSZ_CONTENT_TYPE),
        }
    }
}

#[derive(Debug, Clone)]
pub struct ClientWithBaseUrl {
    client: Client,
    base_url: Url,
}

impl ClientWithBaseUrl {
    pub fn new(url: Url, request_timeout: Duration) -> Result<Self, RegistrationError> {
        let client = Client::builder().timeout(request_timeout).build()?;

        Ok(Self {
            client,
            base_url: url,
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    pub fn post(
        &self,
        endpoint: &str,
        content_type: ContentType,
    ) -> Result<RequestBuilder, RegistrationError> {
        let url = self.base_url.join(endpoint)?;
        Ok(self
            .client
            .post(url)
            .header(CONTENT_TYPE, content_type.header_value())
            .header(ACCEPT, HeaderValue::from_static(JSON_CONTENT_TYPE)))
    }
}
