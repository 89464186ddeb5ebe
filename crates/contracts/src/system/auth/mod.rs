use serde::{Deserialize, Serialize};

use crate::enums::Role;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SignInRequest {
    pub email: String,
    pub password: String,
    /// Extends the backend session lifetime, nothing else
    pub remember: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ForgotPasswordRequest {
    pub email: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResetPasswordRequest {
    pub password: String,
    pub reset_token: String,
}

/// Payload of `POST /auth/signin` and `GET /user`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserPayload {
    pub user: UserInfo,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserInfo {
    pub id: String,
    pub name: String,
    /// Raw role identifier. Kept as a string so that a role this client
    /// does not know about still deserializes.
    pub role: String,
}

impl UserInfo {
    pub fn role(&self) -> Option<Role> {
        Role::parse(&self.role)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::envelope::ApiEnvelope;

    #[test]
    fn test_user_envelope() {
        let json = r#"{"data":{"user":{"id":"7","name":"Ana Cruz","role":"peso"}}}"#;
        let body: ApiEnvelope<UserPayload> = serde_json::from_str(json).unwrap();
        assert_eq!(body.data.user.name, "Ana Cruz");
        assert_eq!(body.data.user.role(), Some(Role::Peso));
    }

    #[test]
    fn test_unknown_role_still_parses() {
        let json = r#"{"id":"1","name":"Dean","role":"dean"}"#;
        let user: UserInfo = serde_json::from_str(json).unwrap();
        assert_eq!(user.role(), None);
    }

    #[test]
    fn test_reset_request_field_names() {
        let body = ResetPasswordRequest {
            password: "secret1".into(),
            reset_token: "abc".into(),
        };
        let value = serde_json::to_value(&body).unwrap();
        assert_eq!(value["reset_token"], "abc");
    }
}
