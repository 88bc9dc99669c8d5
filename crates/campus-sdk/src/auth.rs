//! Sign-in, registration, and sign-out flows
//!
//! The only writers of the session store live here. The API client and
//! the guard only ever read it.

use campus_client::{ApiClient, RegisterRequest, Role, Session};
use tracing::info;

use crate::error::{Result, SdkError};
use crate::guard::Route;

/// Outcome of a successful sign-in
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SignedIn {
    pub role: Role,
    /// Dashboard this role lands on
    pub landing: Route,
}

/// Exchange credentials for a session and store it.
///
/// The role claim is decoded before anything is written: a token that
/// cannot name its role fails the whole sign-in and the store stays
/// untouched. On success the token and role are stored in one write.
pub async fn sign_in(client: &ApiClient, username: &str, password: &str) -> Result<SignedIn> {
    let tokens = client.login(username, password).await?;
    let session = Session::from_tokens(tokens)?;
    let role = session.role;
    client.session().set(session);
    info!(%role, username, "signed in");

    Ok(SignedIn {
        role,
        landing: Route::landing(role),
    })
}

/// Register a new student or mentor account.
///
/// Admin accounts are never self-registered. Returns the message to show
/// the user; mentor accounts stay inactive until an admin approves them.
pub async fn register(
    client: &ApiClient,
    username: &str,
    password: &str,
    role: Role,
) -> Result<&'static str> {
    if role == Role::Admin {
        return Err(SdkError::Validation(
            "admin accounts cannot self-register".to_string(),
        ));
    }
    if username.trim().is_empty() || password.is_empty() {
        return Err(SdkError::Validation(
            "username and password are required".to_string(),
        ));
    }

    let request = RegisterRequest {
        username: username.to_string(),
        password: password.to_string(),
        role,
    };
    client.register(&request).await?;
    info!(%role, username, "registered");

    Ok(registration_message(role))
}

/// Message shown after a successful registration
pub fn registration_message(role: Role) -> &'static str {
    match role {
        Role::Mentor => "Registration successful. Wait for admin approval before signing in.",
        _ => "Registration successful. You can sign in now.",
    }
}

/// Clear the session. Idempotent; makes no network call.
pub fn sign_out(client: &ApiClient) {
    client.session().clear();
    info!("signed out");
}

#[cfg(test)]
mod tests {
    use super::*;
    use base64::{engine::general_purpose, Engine as _};
    use campus_client::{ClientConfig, SessionStore, TokenPair};

    fn client_with_store() -> (ApiClient, SessionStore) {
        let store = SessionStore::new();
        (ApiClient::new(ClientConfig::default(), store.clone()), store)
    }

    fn token_for(role: &str) -> String {
        let header = general_purpose::URL_SAFE_NO_PAD.encode(r#"{"alg":"HS256"}"#);
        let payload =
            general_purpose::URL_SAFE_NO_PAD.encode(format!(r#"{{"role":"{role}","user_id":1}}"#));
        format!("{header}.{payload}.sig")
    }

    #[test]
    fn test_registration_message_per_role() {
        assert!(registration_message(Role::Mentor).contains("admin approval"));
        assert!(registration_message(Role::Student).contains("sign in now"));
    }

    #[tokio::test]
    async fn test_register_rejects_admin_role() {
        let (client, _) = client_with_store();
        let err = register(&client, "eve", "pw", Role::Admin).await.unwrap_err();
        assert!(matches!(err, SdkError::Validation(_)));
    }

    #[tokio::test]
    async fn test_register_rejects_blank_fields() {
        let (client, _) = client_with_store();
        let err = register(&client, "  ", "pw", Role::Student).await.unwrap_err();
        assert!(matches!(err, SdkError::Validation(_)));
        let err = register(&client, "amara", "", Role::Student).await.unwrap_err();
        assert!(matches!(err, SdkError::Validation(_)));
    }

    #[test]
    fn test_undecodable_token_stores_no_session() {
        // The decode step runs before the store write; when it fails the
        // store must stay empty.
        let (_, store) = client_with_store();
        let tokens = TokenPair {
            access: "not-a-jwt".to_string(),
            refresh: "r".to_string(),
        };
        assert!(Session::from_tokens(tokens).is_err());
        assert!(store.get().is_none());
    }

    #[test]
    fn test_session_role_comes_from_token() {
        let tokens = TokenPair {
            access: token_for("MENTOR"),
            refresh: "r".to_string(),
        };
        let session = Session::from_tokens(tokens).unwrap();
        assert_eq!(session.role, Role::Mentor);
        assert_eq!(session.user_id, Some(1));
    }

    #[test]
    fn test_sign_out_is_idempotent() {
        let (client, store) = client_with_store();
        store.set(
            Session::from_tokens(TokenPair {
                access: token_for("STUDENT"),
                refresh: "r".to_string(),
            })
            .unwrap(),
        );

        sign_out(&client);
        assert!(store.get().is_none());
        sign_out(&client);
        assert!(store.get().is_none());
    }
}
