use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Roles del sistema
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    Admin,
    User,
}

impl UserRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            UserRole::Admin => "admin",
            UserRole::User => "user",
        }
    }
}

impl fmt::Display for UserRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for UserRole {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.to_lowercase().as_str() {
            "admin" => Ok(UserRole::Admin),
            "user" => Ok(UserRole::User),
            other => Err(format!("Unknown role '{}'", other)),
        }
    }
}

/// Claims del JWT
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JwtClaims {
    pub sub: String, // user_id
    pub email: String,
    pub role: String,
    pub exp: i64, // expiration timestamp
    pub iat: i64, // issued at timestamp
}

impl JwtClaims {
    /// Id numérico del usuario contenido en `sub`
    pub fn user_id(&self) -> Option<i32> {
        self.sub.parse().ok().filter(|id| *id > 0)
    }
}

/// Par de tokens devuelto por login y refresh
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenPair {
    pub id: i32,
    pub token: String,
    pub refresh_token: String,
    pub refresh_token_expiry_time: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_parsing() {
        assert_eq!("ADMIN".parse::<UserRole>().unwrap(), UserRole::Admin);
        assert_eq!("user".parse::<UserRole>().unwrap(), UserRole::User);
        assert!("root".parse::<UserRole>().is_err());
        assert_eq!(UserRole::Admin.to_string(), "admin");
    }

    #[test]
    fn test_claims_user_id() {
        let mut claims = JwtClaims {
            sub: "42".to_string(),
            email: "a@b.fr".to_string(),
            role: "user".to_string(),
            exp: 0,
            iat: 0,
        };
        assert_eq!(claims.user_id(), Some(42));

        claims.sub = "abc".to_string();
        assert_eq!(claims.user_id(), None);

        claims.sub = "0".to_string();
        assert_eq!(claims.user_id(), None);
    }
}
