use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::auth::UserRole;
use crate::models::user::User;

// Response de usuario (sin password ni tokens)
#[derive(Debug, Serialize, Deserialize)]
pub struct UserResponse {
    pub id: i32,
    pub created_at: DateTime<Utc>,
    pub firstname: String,
    pub lastname: String,
    pub email: String,
    pub role: UserRole,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        let role = user.role();
        Self {
            id: user.id,
            created_at: user.created_at,
            firstname: user.firstname,
            lastname: user.lastname,
            email: user.email,
            role,
        }
    }
}
