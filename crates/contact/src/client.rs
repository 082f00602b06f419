use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::CONTENT_TYPE;
use serde::Serialize;

use crate::ContactFormState;

pub const FORM_NAME: &str = "contact";
pub const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded";

#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    #[error("form endpoint timed out: {0}")]
    Timeout(reqwest::Error),

    #[error("form endpoint unreachable: {0}")]
    Connect(reqwest::Error),

    #[error("form request failed: {0}")]
    Request(reqwest::Error),
}

impl From<reqwest::Error> for TransportError {
    fn from(value: reqwest::Error) -> Self {
        if value.is_timeout() {
            Self::Timeout(value)
        } else if value.is_connect() {
            Self::Connect(value)
        } else {
            Self::Request(value)
        }
    }
}

/// Whatever the endpoint answered. Only the status matters to the form.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EndpointResponse {
    pub status: u16,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Classification {
    Success,
    AppError(u16),
}

pub fn classify(response: &EndpointResponse) -> Classification {
    match response.status {
        200..=299 => Classification::Success,
        status => Classification::AppError(status),
    }
}

/// Urlencoded body sent to the form-handling endpoint. Field order is the wire order.
#[derive(Serialize)]
pub struct ContactSubmission<'a> {
    #[serde(rename = "form-name")]
    form_name: &'static str,
    name: &'a str,
    email: &'a str,
    service: &'a str,
    message: &'a str,
}

impl<'a> From<&'a ContactFormState> for ContactSubmission<'a> {
    fn from(form: &'a ContactFormState) -> Self {
        Self {
            form_name: FORM_NAME,
            name: &form.name,
            email: &form.email,
            service: form.service.as_ref(),
            message: &form.message,
        }
    }
}

impl ContactSubmission<'_> {
    pub fn encode(&self) -> crate::Result<String> {
        Ok(serde_urlencoded::to_string(self)?)
    }
}

#[async_trait]
pub trait SubmissionClient: Send + Sync {
    /// Performs a single POST. `Ok` for any HTTP status, `Err` only when the transport failed.
    async fn post_form(&self, body: String) -> Result<EndpointResponse, TransportError>;
}

#[derive(Clone)]
pub struct HttpSubmissionClient {
    http: reqwest::Client,
    endpoint: String,
}

impl HttpSubmissionClient {
    pub fn new(endpoint: impl Into<String>, timeout: Duration) -> crate::Result<Self> {
        let endpoint = endpoint.into();
        if endpoint.trim().is_empty() {
            crate::bail!("contact endpoint is empty");
        }

        let http = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(TransportError::from)?;

        Ok(Self { http, endpoint })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl SubmissionClient for HttpSubmissionClient {
    async fn post_form(&self, body: String) -> Result<EndpointResponse, TransportError> {
        let response = self
            .http
            .post(&self.endpoint)
            .header(CONTENT_TYPE, FORM_CONTENT_TYPE)
            .body(body)
            .send()
            .await?;

        Ok(EndpointResponse {
            status: response.status().as_u16(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ServiceChoice;

    #[test]
    fn classify_statuses() {
        assert_eq!(
            classify(&EndpointResponse { status: 200 }),
            Classification::Success
        );
        assert_eq!(
            classify(&EndpointResponse { status: 204 }),
            Classification::Success
        );
        assert_eq!(
            classify(&EndpointResponse { status: 302 }),
            Classification::AppError(302)
        );
        assert_eq!(
            classify(&EndpointResponse { status: 500 }),
            Classification::AppError(500)
        );
    }

    #[test]
    fn encode_body() {
        let form = ContactFormState {
            name: "Alice Martin".to_owned(),
            email: "alice@x.com".to_owned(),
            service: ServiceChoice::OfficeWindows,
            message: "Prix & délai?".to_owned(),
        };

        let body = ContactSubmission::from(&form).encode().unwrap();

        assert_eq!(
            body,
            "form-name=contact&name=Alice+Martin&email=alice%40x.com\
             &service=Installation+Office+%2F+Windows&message=Prix+%26+d%C3%A9lai%3F"
        );
    }

    #[test]
    fn empty_endpoint_is_rejected() {
        assert!(HttpSubmissionClient::new(" ", Duration::from_secs(1)).is_err());
    }
}
