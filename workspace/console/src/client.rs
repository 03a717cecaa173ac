//! Access to the backend tables.

use async_trait::async_trait;
use common::{
    ApiResponse, ErrorResponse, RepairRow, RoomRow, SystemSettings, SystemStats, TenantDto,
    TenantProfile,
};
use reqwest::{Client, RequestBuilder};
use serde::de::DeserializeOwned;
use tracing::{debug, error, info, trace, warn};
use uuid::Uuid;

use crate::config::ConsoleConfig;
use crate::error::{ConsoleError, Result};

/// Remote data operations the console depends on. Implemented over HTTP by
/// [`HttpDataClient`]; tests substitute their own.
#[async_trait]
pub trait DataClient: Send + Sync {
    /// The stored tariffs. A 404 means none were ever saved.
    async fn load_settings(&self) -> Result<SystemSettings>;

    /// Upserts all four tariffs and returns what was stored.
    async fn save_settings(&self, settings: &SystemSettings) -> Result<SystemSettings>;

    async fn load_tenant(&self, tenant_id: Uuid) -> Result<TenantDto>;

    /// Overwrites every editable profile field of the tenant.
    async fn update_profile(&self, tenant_id: Uuid, profile: &TenantProfile) -> Result<TenantDto>;

    async fn list_rooms(&self) -> Result<Vec<RoomRow>>;

    async fn list_repairs(&self) -> Result<Vec<RepairRow>>;

    async fn system_stats(&self) -> Result<SystemStats>;
}

/// [`DataClient`] speaking the backend's JSON API.
#[derive(Clone, Debug)]
pub struct HttpDataClient {
    client: Client,
    base_url: String,
    token: Option<String>,
}

impl HttpDataClient {
    pub fn new(config: &ConsoleConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(config.request_timeout())
            .build()?;
        Ok(Self {
            client,
            base_url: config.api_base_url.trim_end_matches('/').to_string(),
            token: None,
        })
    }

    /// Sends `Authorization: Bearer <token>` with every request.
    #[must_use]
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    fn url(&self, endpoint: &str) -> String {
        format!("{}{}", self.base_url, endpoint)
    }

    fn authorize(&self, request: RequestBuilder) -> RequestBuilder {
        match &self.token {
            Some(token) => request.bearer_auth(token),
            None => request,
        }
    }

    async fn get<T: DeserializeOwned>(&self, endpoint: &str) -> Result<T> {
        let url = self.url(endpoint);
        debug!("GET request to: {}", url);
        let request = self.authorize(self.client.get(&url));
        self.execute("GET", endpoint, request).await
    }

    async fn put<T: DeserializeOwned, B: serde::Serialize + ?Sized>(
        &self,
        endpoint: &str,
        body: &B,
    ) -> Result<T> {
        let url = self.url(endpoint);
        debug!("PUT request to: {}", url);
        let request = self.authorize(self.client.put(&url).json(body));
        self.execute("PUT", endpoint, request).await
    }

    async fn execute<T: DeserializeOwned>(
        &self,
        method: &str,
        endpoint: &str,
        request: RequestBuilder,
    ) -> Result<T> {
        let response = request.send().await.map_err(|e| {
            error!("{} {} - Request failed: {}", method, endpoint, e);
            ConsoleError::Http(e)
        })?;

        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            warn!("{} {} - Non-OK response: {}", method, endpoint, status);
            let (code, message) = match serde_json::from_str::<ErrorResponse>(&body) {
                Ok(err) => (err.code, err.error),
                Err(_) => (
                    "HTTP_ERROR".to_string(),
                    status.canonical_reason().unwrap_or("error").to_string(),
                ),
            };
            return Err(ConsoleError::Api {
                status: status.as_u16(),
                code,
                message,
            });
        }

        trace!("{} {} - Response received, parsing JSON", method, endpoint);
        let envelope: ApiResponse<T> = serde_json::from_str(&body).map_err(|e| {
            error!("{} {} - Failed to parse response: {}", method, endpoint, e);
            ConsoleError::Decode(e.to_string())
        })?;

        info!("{} {} - Success", method, endpoint);
        Ok(envelope.data)
    }
}

#[async_trait]
impl DataClient for HttpDataClient {
    async fn load_settings(&self) -> Result<SystemSettings> {
        self.get("/settings").await
    }

    async fn save_settings(&self, settings: &SystemSettings) -> Result<SystemSettings> {
        self.put("/settings", settings).await
    }

    async fn load_tenant(&self, tenant_id: Uuid) -> Result<TenantDto> {
        self.get(&format!("/tenants/{}", tenant_id)).await
    }

    async fn update_profile(&self, tenant_id: Uuid, profile: &TenantProfile) -> Result<TenantDto> {
        self.put(&format!("/tenants/{}/profile", tenant_id), profile)
            .await
    }

    async fn list_rooms(&self) -> Result<Vec<RoomRow>> {
        self.get("/rooms").await
    }

    async fn list_repairs(&self) -> Result<Vec<RepairRow>> {
        self.get("/repairs").await
    }

    async fn system_stats(&self) -> Result<SystemStats> {
        self.get("/system/stats").await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;
    use serde_json::json;
    use wiremock::matchers::{body_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    async fn client_for(server: &MockServer) -> HttpDataClient {
        let config = ConsoleConfig {
            api_base_url: format!("{}/api/v1", server.uri()),
            ..ConsoleConfig::default()
        };
        HttpDataClient::new(&config).unwrap()
    }

    #[tokio::test]
    async fn test_unwraps_envelope() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/v1/settings"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "data": {
                    "waterRate": "18",
                    "electricityRate": "8.5",
                    "lateFee": "100",
                    "depositRate": "3000"
                },
                "message": "Settings retrieved successfully",
                "success": true
            })))
            .expect(1)
            .mount(&server)
            .await;

        let settings = client_for(&server).await.load_settings().await.unwrap();
        assert_eq!(settings.electricity_rate, Decimal::new(85, 1));
    }

    #[tokio::test]
    async fn test_error_body_is_mapped() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/v1/settings"))
            .respond_with(ResponseTemplate::new(404).set_body_json(json!({
                "error": "Settings have not been saved yet",
                "code": "SETTINGS_NOT_FOUND",
                "success": false
            })))
            .mount(&server)
            .await;

        let err = client_for(&server).await.load_settings().await.unwrap_err();
        assert!(err.is_not_found());
        match err {
            ConsoleError::Api { code, .. } => assert_eq!(code, "SETTINGS_NOT_FOUND"),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_plain_error_status() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/v1/rooms"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&server)
            .await;

        let err = client_for(&server).await.list_rooms().await.unwrap_err();
        assert!(matches!(err, ConsoleError::Api { status: 500, .. }));
    }

    #[tokio::test]
    async fn test_garbage_body_is_decode_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/v1/repairs"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>"))
            .mount(&server)
            .await;

        let err = client_for(&server).await.list_repairs().await.unwrap_err();
        assert!(matches!(err, ConsoleError::Decode(_)));
    }

    #[tokio::test]
    async fn test_profile_update_sends_token_and_body() {
        let server = MockServer::start().await;
        let tenant_id = Uuid::new_v4();
        let profile = TenantProfile {
            first_name: "Malee".to_string(),
            last_name: "Suksan".to_string(),
            phone: "0899999999".to_string(),
            address: "12 Rama IV".to_string(),
            email: "malee@example.com".to_string(),
        };

        Mock::given(method("PUT"))
            .and(path(format!("/api/v1/tenants/{}/profile", tenant_id)))
            .and(header("authorization", "Bearer secret"))
            .and(body_json(&profile))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "data": {
                    "id": tenant_id,
                    "first_name": "Malee",
                    "last_name": "Suksan",
                    "phone": "0899999999",
                    "address": "12 Rama IV",
                    "email": "malee@example.com",
                    "room_id": null,
                    "created_at": "2025-01-01T00:00:00Z",
                    "updated_at": "2025-06-01T10:00:00Z"
                },
                "message": "Profile updated successfully",
                "success": true
            })))
            .expect(1)
            .mount(&server)
            .await;

        let client = client_for(&server).await.with_token("secret");
        let tenant = client.update_profile(tenant_id, &profile).await.unwrap();
        assert_eq!(tenant.id, tenant_id);
        assert_eq!(tenant.first_name, "Malee");
    }
}
