//! Utilidades JWT
//!
//! Helpers para leer tokens del header Authorization antes de pasarlos
//! al `JwtService`.

use crate::utils::errors::AppError;

/// Validar formato de token (básico)
pub fn validate_token_format(token: &str) -> Result<(), AppError> {
    if token.is_empty() {
        return Err(AppError::Jwt("Token cannot be empty".to_string()));
    }

    if token.split('.').count() != 3 {
        return Err(AppError::Jwt("Token must have 3 dot-separated parts".to_string()));
    }

    Ok(())
}

/// Extraer token del header Authorization
pub fn extract_token_from_header(auth_header: &str) -> Result<&str, AppError> {
    let token = auth_header
        .strip_prefix("Bearer ")
        .ok_or_else(|| AppError::Unauthorized("Authorization header must start with 'Bearer '".to_string()))?
        .trim();

    validate_token_format(token)?;
    Ok(token)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_token_from_header() {
        assert_eq!(extract_token_from_header("Bearer aaa.bbb.ccc").unwrap(), "aaa.bbb.ccc");
        assert!(matches!(
            extract_token_from_header("Basic dXNlcjpwYXNz"),
            Err(AppError::Unauthorized(_))
        ));
        assert!(matches!(extract_token_from_header("Bearer "), Err(AppError::Jwt(_))));
    }

    #[test]
    fn test_validate_token_format() {
        assert!(validate_token_format("a.b.c").is_ok());
        assert!(validate_token_format("a.b").is_err());
        assert!(validate_token_format("").is_err());
    }
}
