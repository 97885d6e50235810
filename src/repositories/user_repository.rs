use chrono::{DateTime, Utc};
use sqlx::PgPool;

use crate::models::auth::UserRole;
use crate::models::user::User;
use crate::utils::errors::AppError;

pub struct UserRepository {
    pool: PgPool,
}

impl UserRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<User>, AppError> {
        let user = sqlx::query_as::<_, User>("SELECT * FROM users WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(user)
    }

    /// Búsqueda por email sin distinguir mayúsculas
    pub async fn find_by_email(&self, email: &str) -> Result<Option<User>, AppError> {
        let user = sqlx::query_as::<_, User>("SELECT * FROM users WHERE LOWER(email) = LOWER($1)")
            .bind(email)
            .fetch_optional(&self.pool)
            .await?;

        Ok(user)
    }

    /// Verificar si el email ya pertenece a otro usuario
    pub async fn email_taken(&self, email: &str, except_id: Option<i32>) -> Result<bool, AppError> {
        let result: (bool,) = sqlx::query_as(
            r#"
            SELECT EXISTS(
                SELECT 1 FROM users
                WHERE LOWER(email) = LOWER($1) AND ($2::INTEGER IS NULL OR id <> $2)
            )
            "#,
        )
        .bind(email)
        .bind(except_id)
        .fetch_one(&self.pool)
        .await?;

        Ok(result.0)
    }

    /// Inserta un usuario; el primero de la tabla recibe el rol admin
    ///
    /// El lock de tabla serializa los registros concurrentes, así que solo
    /// una inserción puede ver la tabla vacía.
    pub async fn create(
        &self,
        firstname: &str,
        lastname: &str,
        email: &str,
        password_hash: &str,
    ) -> Result<User, AppError> {
        let mut tx = self.pool.begin().await?;

        sqlx::query("LOCK TABLE users IN SHARE ROW EXCLUSIVE MODE")
            .execute(&mut *tx)
            .await?;

        let user = sqlx::query_as::<_, User>(
            r#"
            INSERT INTO users (firstname, lastname, email, password_hash, role)
            VALUES (
                $1, $2, $3, $4,
                CASE WHEN EXISTS (SELECT 1 FROM users) THEN $5 ELSE $6 END
            )
            RETURNING *
            "#,
        )
        .bind(firstname)
        .bind(lastname)
        .bind(email)
        .bind(password_hash)
        .bind(UserRole::User.as_str())
        .bind(UserRole::Admin.as_str())
        .fetch_one(&mut *tx)
        .await?;

        tx.commit().await?;
        Ok(user)
    }

    pub async fn update(
        &self,
        id: i32,
        firstname: &str,
        lastname: &str,
        email: &str,
    ) -> Result<Option<User>, AppError> {
        let user = sqlx::query_as::<_, User>(
            r#"
            UPDATE users SET firstname = $2, lastname = $3, email = $4
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(firstname)
        .bind(lastname)
        .bind(email)
        .fetch_optional(&self.pool)
        .await?;

        Ok(user)
    }

    /// Guardar el par de tokens vigente del usuario
    pub async fn update_tokens(
        &self,
        id: i32,
        token: &str,
        refresh_token: &str,
        refresh_token_expiry_time: DateTime<Utc>,
    ) -> Result<(), AppError> {
        sqlx::query(
            r#"
            UPDATE users SET token = $2, refresh_token = $3, refresh_token_expiry_time = $4
            WHERE id = $1
            "#,
        )
        .bind(id)
        .bind(token)
        .bind(refresh_token)
        .bind(refresh_token_expiry_time)
        .execute(&self.pool)
        .await?;

        Ok(())
    }
}
