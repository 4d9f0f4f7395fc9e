//! Form Service - Application service for the form backend
//!
//! Fetches published forms by unique URL and upserts visitor responses.
//! The backend keys stored responses by (form, email): posting a document
//! for an email that already answered replaces that visitor's answers.

use std::sync::Arc;

use chatform_domain::{Form, UniqueUrl};
use chatform_shared::{FormEnvelope, ResponseDocument};

use crate::application::ServiceError;
use crate::ports::outbound::RawApiPort;

/// Path of the form lookup endpoint.
pub fn form_path(unique_url: &UniqueUrl) -> String {
    format!("/api/forms/url/{}", encode_segment(unique_url.as_str()))
}

/// Path of the response upsert endpoint.
pub fn responses_path(unique_url: &UniqueUrl) -> String {
    format!("{}/responses", form_path(unique_url))
}

fn encode_segment(segment: &str) -> String {
    url::form_urlencoded::byte_serialize(segment.as_bytes()).collect()
}

#[derive(Clone)]
pub struct FormService {
    api: Arc<dyn RawApiPort>,
}

impl FormService {
    pub fn new(api: Arc<dyn RawApiPort>) -> Self {
        Self { api }
    }

    /// Load the form published under `unique_url`.
    ///
    /// A 404 and a `{"form": null}` body both mean there is no such form.
    pub async fn fetch_form_by_unique_url(&self, unique_url: &UniqueUrl) -> Result<Form, ServiceError> {
        let value = self
            .api
            .get_optional_json(&form_path(unique_url))
            .await?
            .ok_or(ServiceError::FormNotFound)?;

        let envelope: FormEnvelope =
            serde_json::from_value(value).map_err(|e| ServiceError::ParseError(e.to_string()))?;
        let dto = envelope.form.ok_or(ServiceError::FormNotFound)?;
        let form = Form::try_from(dto).map_err(|e| ServiceError::ParseError(e.to_string()))?;

        tracing::info!(unique_url = %unique_url, fields = form.len(), "Loaded form");
        Ok(form)
    }

    /// Upsert the whole response document for this visitor.
    pub async fn save_form_response(
        &self,
        unique_url: &UniqueUrl,
        document: &ResponseDocument,
    ) -> Result<(), ServiceError> {
        let body = document.clone().into_value();
        self.api
            .post_json(&responses_path(unique_url), &body)
            .await?;
        tracing::debug!(unique_url = %unique_url, keys = document.len(), "Saved form response");
        Ok(())
    }
}
