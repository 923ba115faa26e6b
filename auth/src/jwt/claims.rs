use chrono::Duration;
use chrono::Utc;
use serde::Deserialize;
use serde::Serialize;

/// Session claims carried by an access token.
///
/// Field names follow the wire format (`userId`, `username`, `role`) plus the
/// registered `iat`, `exp` and optional `nbf` timestamps.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Claims {
    /// Subject identifier
    pub user_id: String,

    pub username: String,

    pub role: String,

    /// Issued at (Unix timestamp)
    pub iat: i64,

    /// Expiration time (Unix timestamp)
    pub exp: i64,

    /// Not before (Unix timestamp)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nbf: Option<i64>,
}

impl Claims {
    /// Create claims for a user session starting now.
    ///
    /// # Arguments
    /// * `user_id` - Unique user identifier
    /// * `username` - Username at issuance time
    /// * `role` - Role name at issuance time
    /// * `lifetime` - Time until the token expires
    ///
    /// # Returns
    /// Claims with iat set to now and exp set to now + lifetime
    pub fn for_user(
        user_id: impl ToString,
        username: impl Into<String>,
        role: impl Into<String>,
        lifetime: Duration,
    ) -> Self {
        let now = Utc::now();

        Self {
            user_id: user_id.to_string(),
            username: username.into(),
            role: role.into(),
            iat: now.timestamp(),
            exp: (now + lifetime).timestamp(),
            nbf: None,
        }
    }

    /// Set issued at (Unix timestamp).
    pub fn with_issued_at(mut self, iat: i64) -> Self {
        self.iat = iat;
        self
    }

    /// Set expiration (Unix timestamp).
    pub fn with_expiration(mut self, exp: i64) -> Self {
        self.exp = exp;
        self
    }

    /// Set not-before (Unix timestamp).
    pub fn with_not_before(mut self, nbf: i64) -> Self {
        self.nbf = Some(nbf);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_for_user() {
        let claims = Claims::for_user("user123", "alice", "user", Duration::hours(24));

        assert_eq!(claims.user_id, "user123");
        assert_eq!(claims.username, "alice");
        assert_eq!(claims.role, "user");
        assert!(claims.nbf.is_none());
        assert_eq!(claims.exp - claims.iat, 24 * 60 * 60);
    }

    #[test]
    fn test_wire_field_names() {
        let claims = Claims::for_user("user123", "alice", "admin", Duration::hours(1))
            .with_issued_at(100)
            .with_expiration(200);

        let json = serde_json::to_value(&claims).unwrap();
        assert_eq!(json["userId"], "user123");
        assert_eq!(json["username"], "alice");
        assert_eq!(json["role"], "admin");
        assert_eq!(json["iat"], 100);
        assert_eq!(json["exp"], 200);
        assert!(json.get("nbf").is_none());
        assert!(json.get("user_id").is_none());
    }

    #[test]
    fn test_not_before_is_serialized_when_set() {
        let claims =
            Claims::for_user("user123", "alice", "user", Duration::hours(1)).with_not_before(500);

        let json = serde_json::to_value(&claims).unwrap();
        assert_eq!(json["nbf"], 500);
    }
}
