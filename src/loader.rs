use std::future::Future;

use futures::future::{AbortHandle, AbortRegistration, Abortable};
use log::{debug, error};
use reqwest::{Client, StatusCode};

use crate::data::{Directory, User, ViewState};

#[derive(thiserror::Error, Debug)]
pub enum LoadError {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("server answered {0}")]
    Status(StatusCode),
    #[error("malformed user list: {0}")]
    Decode(#[from] serde_json::Error),
    #[error("load aborted")]
    Aborted,
}

/// Fetches the user collection once. Any non-2xx answer is an error.
pub async fn load_users(client: &Client, url: &str) -> Result<Vec<User>, LoadError> {
    let response = client.get(url).send().await?;
    let status = response.status();
    if !status.is_success() {
        return Err(LoadError::Status(status));
    }
    let body = response.bytes().await?;
    Ok(serde_json::from_slice(&body)?)
}

/// Maps a finished load to the next view state. `None` means the view that
/// issued the load is gone and nothing must be written.
pub fn settle(result: Result<Vec<User>, LoadError>) -> Option<ViewState> {
    match result {
        Ok(users) => Some(ViewState::Loaded(Directory::from_users(users))),
        Err(LoadError::Aborted) => {
            debug!("User load aborted before completion");
            None
        }
        Err(err) => {
            error!("Error fetching users: {err}");
            Some(ViewState::Failed(err.to_string()))
        }
    }
}

/// Ties a load to the lifetime of its owner: dropping the guard aborts the
/// bound future, which then resolves to [`LoadError::Aborted`].
#[derive(Debug)]
pub struct LoadGuard {
    handle: AbortHandle,
    registration: Option<AbortRegistration>,
}

impl LoadGuard {
    pub fn new() -> Self {
        let (handle, registration) = AbortHandle::new_pair();
        LoadGuard {
            handle,
            registration: Some(registration),
        }
    }

    /// Only the first call binds; later calls return `None`.
    pub fn bind<F, T>(&mut self, load: F) -> Option<impl Future<Output = Result<T, LoadError>>>
    where
        F: Future<Output = Result<T, LoadError>>,
    {
        let registration = self.registration.take()?;
        Some(async move {
            Abortable::new(load, registration)
                .await
                .unwrap_or(Err(LoadError::Aborted))
        })
    }

    pub fn abort(&self) {
        self.handle.abort();
    }
}

impl Default for LoadGuard {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for LoadGuard {
    fn drop(&mut self) {
        self.abort();
    }
}


#[cfg(all(test, unix))]
mod http_tests {
    use std::net::SocketAddr;

    use axum::{http::StatusCode, routing::get, Json, Router};
    use serde_json::json;

    use super::*;

    async fn mock_endpoint(router: Router) -> String {
        let server = axum::Server::bind(&SocketAddr::from(([127, 0, 0, 1], 0)))
            .serve(router.into_make_service());
        let addr = server.local_addr();
        tokio::spawn(server);
        format!("http://{addr}/users")
    }

    #[tokio::test]
    async fn loads_users_from_endpoint() {
        let url = mock_endpoint(Router::new().route(
            "/users",
            get(|| async {
                Json(json!([{
                    "id": 1,
                    "name": "A B",
                    "email": "a@b.com",
                    "phone": "1",
                    "website": "http://a.com"
                }]))
            }),
        ))
        .await;

        let users = load_users(&Client::new(), &url).await.unwrap();
        let state = settle(Ok(users)).unwrap();
        let directory = state.directory().unwrap();
        assert_eq!(directory.len(), 1);
        assert_eq!(directory.users()[0].name, "A B");
        assert!(!directory.users()[0].is_following);
    }

    #[tokio::test]
    async fn server_error_leaves_collection_empty() {
        let url = mock_endpoint(Router::new().route(
            "/users",
            get(|| async { StatusCode::INTERNAL_SERVER_ERROR }),
        ))
        .await;

        let result = load_users(&Client::new(), &url).await;
        assert!(matches!(
            result,
            Err(LoadError::Status(StatusCode::INTERNAL_SERVER_ERROR))
        ));
        let state = settle(result).unwrap();
        assert!(matches!(state, ViewState::Failed(_)));
        assert!(state.directory().is_none());
    }

    #[tokio::test]
    async fn malformed_body_is_a_decode_error() {
        let url = mock_endpoint(Router::new().route(
            "/users",
            get(|| async { Json(json!({ "users": [] })) }),
        ))
        .await;

        let result = load_users(&Client::new(), &url).await;
        assert!(matches!(result, Err(LoadError::Decode(_))));
    }

    #[tokio::test]
    async fn unreachable_endpoint_is_a_transport_error() {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let result = load_users(&Client::new(), &format!("http://{addr}/users")).await;
        assert!(matches!(result, Err(LoadError::Transport(_))));
    }
}
