use serde::Deserialize;
use super::{decode_json, ApiConfig, ApiError};
use crate::constants::{TRAVEL_STATUS_PATH, USERS_ME_PATH};
use crate::models::TravelStatus;

/// Body of `GET /api/users/me`
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
#[serde(default)]
pub struct CurrentUserResponse {
    pub success: bool,
    pub user: Option<UserProfile>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UserProfile {
    pub name: Option<String>,
    pub email: Option<String>,
    pub travel_status: Option<TravelStatus>,
}

/// Body of `PUT /api/users/travel-status`
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
#[serde(default)]
pub struct StatusAck {
    pub success: bool,
    pub message: Option<String>,
}

/// The two user endpoints a train card talks to
#[allow(async_fn_in_trait)]
pub trait UserApi {
    /// Fetch the signed-in user, including their current travel status
    async fn current_user(&self, token: &str) -> Result<CurrentUserResponse, ApiError>;

    /// Overwrite the signed-in user's travel status
    async fn update_travel_status(&self, token: &str, status: &TravelStatus) -> Result<StatusAck, ApiError>;
}

/// [`UserApi`] over HTTP with a bearer token
#[derive(Debug, Clone)]
pub struct HttpUserApi {
    client: reqwest::Client,
    config: ApiConfig,
}

impl HttpUserApi {
    #[must_use]
    pub fn new(config: ApiConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            config,
        }
    }
}

impl UserApi for HttpUserApi {
    async fn current_user(&self, token: &str) -> Result<CurrentUserResponse, ApiError> {
        let response = self
            .client
            .get(self.config.url(USERS_ME_PATH))
            .bearer_auth(token)
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        decode_json(response).await
    }

    async fn update_travel_status(&self, token: &str, status: &TravelStatus) -> Result<StatusAck, ApiError> {
        let response = self
            .client
            .put(self.config.url(TRAVEL_STATUS_PATH))
            .bearer_auth(token)
            .json(status)
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        decode_json(response).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_current_user_response() {
        let json = r#"{
            "success": true,
            "user": {
                "name": "Asha",
                "email": "asha@example.org",
                "travelStatus": {
                    "isActive": true,
                    "boardingStation": "MMCT",
                    "destinationStation": "NDLS",
                    "trainNumber": "12951",
                    "travelDate": "2024-03-05T00:00:00.000Z",
                    "preferredClass": "3A"
                }
            }
        }"#;
        let response: CurrentUserResponse = serde_json::from_str(json).expect("should parse");
        assert!(response.success);
        let status = response
            .user
            .and_then(|u| u.travel_status)
            .expect("travel status present");
        assert!(status.is_active);
        assert_eq!(status.preferred_class, "3A");
    }

    #[test]
    fn test_current_user_without_status() {
        let json = r#"{"success": true, "user": {"travelStatus": null}}"#;
        let response: CurrentUserResponse = serde_json::from_str(json).expect("should parse");
        assert_eq!(response.user.and_then(|u| u.travel_status), None);
    }

    #[test]
    fn test_status_ack() {
        let ack: StatusAck = serde_json::from_str(r#"{"success": false, "message": "Not allowed"}"#)
            .expect("should parse");
        assert!(!ack.success);
        assert_eq!(ack.message.as_deref(), Some("Not allowed"));

        let ack: StatusAck = serde_json::from_str(r#"{"success": true}"#).expect("should parse");
        assert!(ack.success);
        assert_eq!(ack.message, None);
    }
}
