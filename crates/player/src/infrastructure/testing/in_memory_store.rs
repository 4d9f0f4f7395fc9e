use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;
use serde_json::{json, Value};

use chatform_domain::{Form, UniqueUrl};
use chatform_shared::{FormDto, ResponseDocument};

use crate::application::services::{form_path, responses_path};
use crate::ports::outbound::{ApiError, RawApiPort};

#[derive(Debug, Default)]
struct StoreState {
    /// Keyed by form lookup path.
    forms: HashMap<String, FormDto>,
    /// Keyed by responses path; one document per email.
    responses: HashMap<String, Vec<ResponseDocument>>,
}

/// A form backend held in memory.
///
/// Serves forms by unique URL and stores responses with the backend's
/// upsert rule: a document whose email already has a stored response is
/// merged into it instead of adding a second one.
#[derive(Debug, Default)]
pub struct InMemoryFormStore {
    state: Mutex<StoreState>,
}

impl InMemoryFormStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_form(self, form: Form) -> Self {
        self.insert_form(&form);
        self
    }

    pub fn insert_form(&self, form: &Form) {
        let mut state = self.lock();
        state
            .forms
            .insert(form_path(form.unique_url()), FormDto::from(form));
    }

    /// Stored response documents for a form, in first-submission order.
    pub fn responses(&self, unique_url: &UniqueUrl) -> Vec<Value> {
        self.lock()
            .responses
            .get(&responses_path(unique_url))
            .map(|docs| docs.iter().cloned().map(ResponseDocument::into_value).collect())
            .unwrap_or_default()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, StoreState> {
        self.state.lock().unwrap_or_else(|e| e.into_inner())
    }
}

#[async_trait]
impl RawApiPort for InMemoryFormStore {
    async fn get_optional_json(&self, path: &str) -> Result<Option<Value>, ApiError> {
        Ok(self
            .lock()
            .forms
            .get(path)
            .map(|form| json!({ "form": form })))
    }

    async fn post_json(&self, path: &str, body: &Value) -> Result<Value, ApiError> {
        let form_key = path.strip_suffix("/responses").unwrap_or(path);
        let mut state = self.lock();
        if !state.forms.contains_key(form_key) {
            return Err(ApiError::HttpError {
                status: 404,
                message: "Form not found".into(),
            });
        }

        let document = ResponseDocument::try_from(body.clone())
            .map_err(|e| ApiError::ParseError(e.to_string()))?;
        let email = document.email().map(str::to_owned).ok_or(ApiError::HttpError {
            status: 400,
            message: "email is required".into(),
        })?;

        let stored = state.responses.entry(path.to_string()).or_default();
        match stored.iter_mut().find(|doc| doc.email() == Some(email.as_str())) {
            Some(existing) => existing.merge(&document),
            None => stored.push(document),
        }
        Ok(json!({ "message": "Response saved" }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::testing::fixtures;

    #[tokio::test]
    async fn serves_known_forms_only() {
        let store = InMemoryFormStore::new().with_form(fixtures::email_form());
        let url = fixtures::unique_url();

        let found = store.get_optional_json(&form_path(&url)).await.unwrap();
        assert_eq!(found.unwrap()["form"]["uniqueUrl"], json!(fixtures::UNIQUE_URL));
        assert_eq!(store.get_optional_json("/api/forms/url/nope").await, Ok(None));
    }

    #[tokio::test]
    async fn upserts_by_email() {
        let store = InMemoryFormStore::new().with_form(fixtures::email_form());
        let url = fixtures::unique_url();
        let path = responses_path(&url);

        store
            .post_json(&path, &json!({ "email": "a@x.io", "name": "A", "1": "one" }))
            .await
            .unwrap();
        store
            .post_json(&path, &json!({ "email": "b@x.io", "name": "B", "1": "bee" }))
            .await
            .unwrap();
        store
            .post_json(&path, &json!({ "email": "a@x.io", "name": "A", "1": "two" }))
            .await
            .unwrap();

        assert_eq!(
            store.responses(&url),
            vec![
                json!({ "email": "a@x.io", "name": "A", "1": "two" }),
                json!({ "email": "b@x.io", "name": "B", "1": "bee" }),
            ]
        );
    }

    #[tokio::test]
    async fn rejects_unknown_forms_and_anonymous_documents() {
        let store = InMemoryFormStore::new().with_form(fixtures::email_form());
        let unknown = store
            .post_json("/api/forms/url/nope/responses", &json!({ "email": "a@x.io" }))
            .await
            .unwrap_err();
        assert_eq!(unknown.status(), Some(404));

        let anonymous = store
            .post_json(&responses_path(&fixtures::unique_url()), &json!({ "name": "A" }))
            .await
            .unwrap_err();
        assert_eq!(anonymous.status(), Some(400));
    }
}
