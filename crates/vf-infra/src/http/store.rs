//! HTTP implementation of the application store port.
//!
//! Talks to the concierge backend under `{base_url}/api/visa-applications`
//! with a bearer credential on every request. Requests carry a bounded
//! client-side timeout; server failure messages are passed through verbatim.

use async_trait::async_trait;
use reqwest::{Client, Response, StatusCode};
use tracing::{debug, warn};

use vf_core::application::{ApplicationForm, ApplicationRecord, CreatedApplication};
use vf_core::auth::AccessToken;
use vf_core::ids::{ApplicationId, ApplicationNumber};
use vf_core::ports::{ApplicationStorePort, StoreError};
use vf_core::wizard::WizardProgress;

use super::dto::{ApplicationPayload, ApplicationRecordDto, CreatedDto, Envelope, ErrorBody};
use crate::config::StoreConfig;

pub struct HttpApplicationStore {
    client: Client,
    base_url: String,
}

impl HttpApplicationStore {
    /// Build a store client from connection settings.
    pub fn new(config: &StoreConfig) -> anyhow::Result<Self> {
        let client = Client::builder()
            .timeout(config.timeout())
            .user_agent(config.user_agent.clone())
            .build()?;
        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    fn applications_url(&self) -> String {
        format!("{}/api/visa-applications", self.base_url)
    }

    fn application_url(&self, id: &ApplicationId) -> String {
        format!("{}/{}", self.applications_url(), id)
    }

    /// Map a non-success response to a store error, keeping the server's
    /// own message.
    async fn failure(response: Response) -> StoreError {
        let status = response.status();
        let message = response
            .json::<ErrorBody>()
            .await
            .ok()
            .and_then(|body| body.detail.or(body.message))
            .unwrap_or_else(|| status.to_string());
        warn!(status = status.as_u16(), %message, "store request failed");

        match status {
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => StoreError::Unauthorized(message),
            StatusCode::NOT_FOUND => StoreError::NotFound,
            _ => StoreError::Rejected {
                status: status.as_u16(),
                message,
            },
        }
    }

    fn transport(error: reqwest::Error) -> StoreError {
        if error.is_timeout() {
            StoreError::Timeout
        } else {
            StoreError::Transport(error.to_string())
        }
    }

    /// Unwrap the backend's `{success, data, message}` envelope.
    fn unwrap_envelope<T>(envelope: Envelope<T>, operation: &str) -> Result<T, StoreError> {
        if !envelope.success {
            return Err(StoreError::Rejected {
                status: 200,
                message: envelope
                    .message
                    .unwrap_or_else(|| format!("{operation} reported failure")),
            });
        }
        envelope.data.ok_or_else(|| {
            StoreError::Transport(format!("{operation} response is missing data"))
        })
    }
}

#[async_trait]
impl ApplicationStorePort for HttpApplicationStore {
    async fn create(
        &self,
        token: &AccessToken,
        form: &ApplicationForm,
    ) -> Result<CreatedApplication, StoreError> {
        let response = self
            .client
            .post(self.applications_url())
            .bearer_auth(token.expose())
            .json(&ApplicationPayload::for_create(form))
            .send()
            .await
            .map_err(Self::transport)?;

        if !response.status().is_success() {
            return Err(Self::failure(response).await);
        }

        let envelope: Envelope<CreatedDto> = response
            .json()
            .await
            .map_err(|e| StoreError::Transport(e.to_string()))?;
        let created = Self::unwrap_envelope(envelope, "create")?;
        debug!(id = %created.application_id, "application created");

        Ok(CreatedApplication {
            id: ApplicationId::from(created.application_id),
            application_number: ApplicationNumber::from(created.application_number),
        })
    }

    async fn fetch(
        &self,
        token: &AccessToken,
        id: &ApplicationId,
    ) -> Result<ApplicationRecord, StoreError> {
        let response = self
            .client
            .get(self.application_url(id))
            .bearer_auth(token.expose())
            .send()
            .await
            .map_err(Self::transport)?;

        if !response.status().is_success() {
            return Err(Self::failure(response).await);
        }

        let envelope: Envelope<ApplicationRecordDto> = response
            .json()
            .await
            .map_err(|e| StoreError::Transport(e.to_string()))?;
        Ok(Self::unwrap_envelope(envelope, "fetch")?.into_record())
    }

    async fn update(
        &self,
        token: &AccessToken,
        id: &ApplicationId,
        form: &ApplicationForm,
        progress: &WizardProgress,
    ) -> Result<(), StoreError> {
        let response = self
            .client
            .put(self.application_url(id))
            .bearer_auth(token.expose())
            .json(&ApplicationPayload::for_update(form, progress))
            .send()
            .await
            .map_err(Self::transport)?;

        if !response.status().is_success() {
            return Err(Self::failure(response).await);
        }
        debug!(%id, step = progress.current_step, "application updated");
        Ok(())
    }

    async fn submit(&self, token: &AccessToken, id: &ApplicationId) -> Result<(), StoreError> {
        let response = self
            .client
            .post(format!("{}/submit", self.application_url(id)))
            .bearer_auth(token.expose())
            .send()
            .await
            .map_err(Self::transport)?;

        if !response.status().is_success() {
            return Err(Self::failure(response).await);
        }
        debug!(%id, "application submitted");
        Ok(())
    }

    async fn delete(&self, token: &AccessToken, id: &ApplicationId) -> Result<(), StoreError> {
        let response = self
            .client
            .delete(self.application_url(id))
            .bearer_auth(token.expose())
            .send()
            .await
            .map_err(Self::transport)?;

        if !response.status().is_success() {
            return Err(Self::failure(response).await);
        }
        debug!(%id, "application deleted");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockito::Matcher;
    use serde_json::json;

    fn store_for(server: &mockito::ServerGuard) -> HttpApplicationStore {
        let config = StoreConfig {
            base_url: server.url(),
            timeout_secs: 5,
            ..StoreConfig::default()
        };
        HttpApplicationStore::new(&config).unwrap()
    }

    fn token() -> AccessToken {
        AccessToken::new("token-1")
    }

    fn sample_form() -> ApplicationForm {
        let mut form = ApplicationForm::default();
        form.personal.full_name = "Jane Doe".to_string();
        form.personal.email = "jane@x.com".to_string();
        form.personal.citizenship = "US".to_string();
        form
    }

    #[tokio::test]
    async fn test_create_posts_the_draft_with_bearer_auth() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/api/visa-applications")
            .match_header("authorization", "Bearer token-1")
            .match_body(Matcher::PartialJson(json!({
                "personalInfo": { "fullName": "Jane Doe" }
            })))
            .with_status(200)
            .with_body(
                json!({
                    "success": true,
                    "data": {
                        "application_id": "app_123",
                        "application_number": "USA-20260807-A1B2"
                    },
                    "message": "Visa application created successfully"
                })
                .to_string(),
            )
            .create_async()
            .await;

        let store = store_for(&server);
        let created = store.create(&token(), &sample_form()).await.unwrap();

        assert_eq!(created.id, ApplicationId::from("app_123"));
        assert_eq!(
            created.application_number,
            ApplicationNumber::from("USA-20260807-A1B2")
        );
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_create_401_surfaces_the_server_detail() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("POST", "/api/visa-applications")
            .with_status(401)
            .with_body(json!({ "detail": "Invalid authentication credentials" }).to_string())
            .create_async()
            .await;

        let store = store_for(&server);
        let err = store.create(&token(), &sample_form()).await.unwrap_err();

        assert_eq!(
            err,
            StoreError::Unauthorized("Invalid authentication credentials".to_string())
        );
    }

    #[tokio::test]
    async fn test_update_puts_progress_to_the_record_path() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("PUT", "/api/visa-applications/app_123")
            .match_header("authorization", "Bearer token-1")
            .match_body(Matcher::PartialJson(json!({
                "currentStep": 3,
                "completedSteps": [1, 2]
            })))
            .with_status(200)
            .with_body(
                json!({ "success": true, "message": "Application updated successfully" })
                    .to_string(),
            )
            .create_async()
            .await;

        let store = store_for(&server);
        let progress = WizardProgress {
            current_step: 3,
            completed_steps: vec![1, 2],
        };
        store
            .update(&token(), &ApplicationId::from("app_123"), &sample_form(), &progress)
            .await
            .unwrap();
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_update_500_passes_the_message_through() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("PUT", "/api/visa-applications/app_123")
            .with_status(500)
            .with_body(json!({ "detail": "database unavailable" }).to_string())
            .create_async()
            .await;

        let store = store_for(&server);
        let err = store
            .update(
                &token(),
                &ApplicationId::from("app_123"),
                &sample_form(),
                &WizardProgress {
                    current_step: 2,
                    completed_steps: vec![1],
                },
            )
            .await
            .unwrap_err();

        assert_eq!(
            err,
            StoreError::Rejected {
                status: 500,
                message: "database unavailable".to_string()
            }
        );
    }

    #[tokio::test]
    async fn test_fetch_hydrates_a_record() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("GET", "/api/visa-applications/app_42")
            .with_status(200)
            .with_body(
                json!({
                    "success": true,
                    "data": {
                        "id": "app_42",
                        "applicationNumber": "USA-20260807-C3D4",
                        "status": "draft",
                        "personalInfo": { "fullName": "Jane Doe" },
                        "travelDetails": {},
                        "passportInfo": {},
                        "currentStep": 2,
                        "completedSteps": [1],
                        "createdAt": "2026-08-07T10:00:00Z",
                        "updatedAt": "2026-08-07T10:05:00Z"
                    },
                    "message": "Application retrieved successfully"
                })
                .to_string(),
            )
            .create_async()
            .await;

        let store = store_for(&server);
        let record = store
            .fetch(&token(), &ApplicationId::from("app_42"))
            .await
            .unwrap();

        assert_eq!(record.form.personal.full_name, "Jane Doe");
        assert_eq!(record.current_step, 2);
        assert!(record.is_editable());
    }

    #[tokio::test]
    async fn test_fetch_missing_record_is_not_found() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("GET", "/api/visa-applications/gone")
            .with_status(404)
            .with_body(json!({ "detail": "Application not found" }).to_string())
            .create_async()
            .await;

        let store = store_for(&server);
        let err = store
            .fetch(&token(), &ApplicationId::from("gone"))
            .await
            .unwrap_err();

        assert_eq!(err, StoreError::NotFound);
    }

    #[tokio::test]
    async fn test_submit_posts_to_the_submit_path() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/api/visa-applications/app_123/submit")
            .match_header("authorization", "Bearer token-1")
            .with_status(200)
            .with_body(
                json!({ "success": true, "message": "Application submitted successfully" })
                    .to_string(),
            )
            .create_async()
            .await;

        let store = store_for(&server);
        store
            .submit(&token(), &ApplicationId::from("app_123"))
            .await
            .unwrap();
        mock.assert_async().await;
    }
}
