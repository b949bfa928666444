use crate::api::models::ErrorResponse;
use crate::client::UserApi;
use crate::core::errors::RosterioError;
use crate::core::models::user::{NewUser, User, UserUpdate};
use async_trait::async_trait;
use http::StatusCode;
use tracing::debug;

/// [`UserApi`] backed by a running server.
#[derive(Clone)]
pub struct HttpUserApi {
    client: reqwest::Client,
    base_url: String,
}

impl HttpUserApi {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        HttpUserApi {
            client: reqwest::Client::new(),
            base_url,
        }
    }

    fn users_url(&self) -> String {
        format!("{}/api/users", self.base_url)
    }

    fn user_url(&self, id: i64) -> String {
        format!("{}/api/users/{}", self.base_url, id)
    }

    /// Turns a non-success response into the matching error variant. A 404
    /// stays addressable (`UserNotFound`) so callers can reconcile caches; a
    /// 400 carries the server's rejection message.
    async fn decode_failure(id: Option<i64>, response: reqwest::Response) -> RosterioError {
        let status = response.status();
        let message = match response.json::<ErrorResponse>().await {
            Ok(body) => body.error,
            Err(_) => format!("HTTP {}", status),
        };
        debug!(%status, message, "request failed");
        match (status, id) {
            (StatusCode::NOT_FOUND, Some(id)) => RosterioError::UserNotFound(id),
            (StatusCode::BAD_REQUEST, _) => RosterioError::RejectedInput(message),
            _ => RosterioError::TransportError(message),
        }
    }
}

fn transport_error(err: reqwest::Error) -> RosterioError {
    RosterioError::TransportError(err.to_string())
}

#[async_trait]
impl UserApi for HttpUserApi {
    async fn list_users(&self) -> Result<Vec<User>, RosterioError> {
        let response = self
            .client
            .get(self.users_url())
            .send()
            .await
            .map_err(transport_error)?;
        if !response.status().is_success() {
            return Err(Self::decode_failure(None, response).await);
        }
        response.json::<Vec<User>>().await.map_err(transport_error)
    }

    async fn get_user(&self, id: i64) -> Result<User, RosterioError> {
        let response = self
            .client
            .get(self.user_url(id))
            .send()
            .await
            .map_err(transport_error)?;
        if !response.status().is_success() {
            return Err(Self::decode_failure(Some(id), response).await);
        }
        response.json::<User>().await.map_err(transport_error)
    }

    async fn create_user(&self, new_user: NewUser) -> Result<User, RosterioError> {
        let response = self
            .client
            .post(self.users_url())
            .json(&new_user)
            .send()
            .await
            .map_err(transport_error)?;
        if !response.status().is_success() {
            return Err(Self::decode_failure(None, response).await);
        }
        response.json::<User>().await.map_err(transport_error)
    }

    async fn update_user(&self, id: i64, fields: UserUpdate) -> Result<User, RosterioError> {
        let response = self
            .client
            .put(self.user_url(id))
            .json(&fields)
            .send()
            .await
            .map_err(transport_error)?;
        if !response.status().is_success() {
            return Err(Self::decode_failure(Some(id), response).await);
        }
        response.json::<User>().await.map_err(transport_error)
    }

    async fn delete_user(&self, id: i64) -> Result<(), RosterioError> {
        let response = self
            .client
            .delete(self.user_url(id))
            .send()
            .await
            .map_err(transport_error)?;
        if !response.status().is_success() {
            return Err(Self::decode_failure(Some(id), response).await);
        }
        Ok(())
    }
}
