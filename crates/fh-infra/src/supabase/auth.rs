use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Duration, Utc};
use reqwest::Url;
use serde::Deserialize;
use serde_json::json;
use tracing::{debug, info};

use fh_core::ports::{AuthError, AuthSessionPort};
use fh_core::{AuthSession, AuthUser, OAuthProvider, RegistrationForm, SecretString, UserId};

use super::client::{SupabaseClient, SupabaseError};
use super::session_store::{copy_session, SessionStore};

const SIGNUP_PATH: &str = "/auth/v1/signup";
const TOKEN_PATH: &str = "/auth/v1/token";
const LOGOUT_PATH: &str = "/auth/v1/logout";
const USER_PATH: &str = "/auth/v1/user";
const AUTHORIZE_PATH: &str = "/auth/v1/authorize";

#[derive(Debug, Deserialize)]
struct GoTrueUser {
    id: String,
    email: Option<String>,
    #[serde(default)]
    user_metadata: UserMetadata,
}

#[derive(Debug, Default, Deserialize)]
struct UserMetadata {
    full_name: Option<String>,
    name: Option<String>,
}

impl From<GoTrueUser> for AuthUser {
    fn from(user: GoTrueUser) -> Self {
        AuthUser {
            id: UserId::from(user.id),
            email: user.email,
            display_name: user.user_metadata.full_name.or(user.user_metadata.name),
        }
    }
}

#[derive(Debug, Deserialize)]
struct GoTrueSession {
    access_token: String,
    refresh_token: Option<String>,
    /// Unix seconds.
    expires_at: Option<i64>,
    expires_in: Option<i64>,
    user: GoTrueUser,
}

impl GoTrueSession {
    fn into_session(self, now: DateTime<Utc>) -> AuthSession {
        let expires_at = self
            .expires_at
            .and_then(|secs| DateTime::from_timestamp(secs, 0))
            .or_else(|| self.expires_in.map(|secs| now + Duration::seconds(secs)));
        AuthSession {
            access_token: SecretString::new(self.access_token),
            refresh_token: self.refresh_token.map(SecretString::new),
            expires_at,
            user: self.user.into(),
        }
    }
}

/// Sign-up answers with a full session when email confirmation is off and
/// with the bare user when it is on.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum SignUpResponse {
    Session(GoTrueSession),
    User(GoTrueUser),
}

/// GoTrue-backed identity provider.
pub struct SupabaseAuth {
    client: Arc<SupabaseClient>,
    store: Arc<SessionStore>,
    redirect_url: String,
}

impl SupabaseAuth {
    pub fn new(
        client: Arc<SupabaseClient>,
        store: Arc<SessionStore>,
        redirect_url: String,
    ) -> Self {
        Self {
            client,
            store,
            redirect_url,
        }
    }

    fn keep(&self, session: GoTrueSession) -> AuthSession {
        let session = session.into_session(Utc::now());
        self.store.replace(copy_session(&session));
        session
    }
}

fn auth_error(error: SupabaseError) -> AuthError {
    match error {
        SupabaseError::Timeout => AuthError::Transport("request timed out".to_string()),
        SupabaseError::Network(message) | SupabaseError::Config(message) => {
            AuthError::Transport(message)
        }
        SupabaseError::Decode(message) => AuthError::Decode(message),
        SupabaseError::Status { status, message } => AuthError::Rejected { status, message },
    }
}

fn is_session_missing(error: &SupabaseError) -> bool {
    match error {
        SupabaseError::Status { status, message } => {
            matches!(status, 401 | 403 | 404) || message.to_lowercase().contains("session")
        }
        _ => false,
    }
}

#[async_trait]
impl AuthSessionPort for SupabaseAuth {
    async fn sign_up(&self, registration: &RegistrationForm) -> Result<AuthUser, AuthError> {
        let mut request = self.client.post(SIGNUP_PATH, None).json(&json!({
            "email": registration.email,
            "password": registration.password.expose(),
            "data": { "full_name": registration.name },
        }));
        if !self.redirect_url.is_empty() {
            request = request.query(&[("redirect_to", self.redirect_url.as_str())]);
        }

        let response: SignUpResponse = self.client.send_json(request).await.map_err(auth_error)?;
        let user = match response {
            SignUpResponse::Session(session) => self.keep(session).user,
            SignUpResponse::User(user) => {
                debug!("sign-up awaiting email confirmation");
                user.into()
            }
        };
        info!(user_id = %user.id, "account registered with identity provider");
        Ok(user)
    }

    async fn sign_in_with_password(
        &self,
        email: &str,
        password: &SecretString,
    ) -> Result<AuthSession, AuthError> {
        let request = self
            .client
            .post(TOKEN_PATH, None)
            .query(&[("grant_type", "password")])
            .json(&json!({ "email": email, "password": password.expose() }));

        let session: GoTrueSession = self.client.send_json(request).await.map_err(|e| match e {
            SupabaseError::Status { status: 400, ref message }
                if message.to_lowercase().contains("invalid login") =>
            {
                AuthError::InvalidCredentials
            }
            other => auth_error(other),
        })?;
        Ok(self.keep(session))
    }

    fn federated_sign_in_url(&self, provider: OAuthProvider) -> Result<String, AuthError> {
        let mut params = vec![("provider", provider.as_str())];
        if !self.redirect_url.is_empty() {
            params.push(("redirect_to", self.redirect_url.as_str()));
        }
        Url::parse_with_params(&self.client.url(AUTHORIZE_PATH), &params)
            .map(String::from)
            .map_err(|e| AuthError::Transport(format!("invalid authorize URL: {}", e)))
    }

    async fn sign_out(&self) -> Result<(), AuthError> {
        let Some(token) = self.store.access_token() else {
            return Err(AuthError::SessionMissing);
        };
        let request = self
            .client
            .post(LOGOUT_PATH, Some(&token))
            .query(&[("scope", "local")]);

        match self.client.send(request).await {
            Ok(_) => Ok(()),
            Err(e) if is_session_missing(&e) => Err(AuthError::SessionMissing),
            Err(e) => Err(auth_error(e)),
        }
    }

    async fn current_session(&self) -> Result<Option<AuthSession>, AuthError> {
        Ok(self.store.snapshot())
    }

    async fn current_user(&self) -> Result<Option<AuthUser>, AuthError> {
        let Some(token) = self.store.access_token() else {
            return Ok(None);
        };
        let request = self.client.get(USER_PATH, Some(&token));
        match self.client.send_json::<GoTrueUser>(request).await {
            Ok(user) => Ok(Some(user.into())),
            Err(SupabaseError::Status {
                status: 401 | 403, ..
            }) => {
                debug!("stored session rejected by identity provider");
                Ok(None)
            }
            Err(e) => Err(auth_error(e)),
        }
    }

    fn clear_local_session(&self) {
        if self.store.clear() {
            debug!("local session cleared");
        }
    }
}
