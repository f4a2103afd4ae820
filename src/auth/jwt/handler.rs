//! Core JWT handler implementation

use super::types::{Claims, JwtHandler, TokenPair, TokenType, UserIdentity};
use crate::config::AuthConfig;
use crate::utils::error::{GatewayError, Result};
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use std::time::{SystemTime, UNIX_EPOCH};
use tracing::debug;
use uuid::Uuid;

/// Refresh tokens outlive access tokens by this factor
const REFRESH_LIFETIME_FACTOR: u64 = 24;

impl JwtHandler {
    /// Create a new JWT handler
    pub fn new(config: &AuthConfig) -> Self {
        let secret = config.jwt_secret.as_bytes();

        Self {
            encoding_key: EncodingKey::from_secret(secret),
            decoding_key: DecodingKey::from_secret(secret),
            algorithm: Algorithm::HS256,
            expiration: config.jwt_expiration,
            issuer: "imagegen-gateway".to_string(),
        }
    }

    /// Create an access token for a user
    pub async fn create_access_token(&self, user: &UserIdentity) -> Result<String> {
        let token = self.sign(user, TokenType::Access, self.expiration)?;
        debug!("Created access token for user: {}", user.id);
        Ok(token)
    }

    /// Create a refresh token for a user
    pub async fn create_refresh_token(&self, user: &UserIdentity) -> Result<String> {
        let token = self.sign(
            user,
            TokenType::Refresh,
            self.expiration.saturating_mul(REFRESH_LIFETIME_FACTOR),
        )?;
        debug!("Created refresh token for user: {}", user.id);
        Ok(token)
    }

    /// Create a token pair (access + refresh)
    pub async fn create_token_pair(&self, user: &UserIdentity) -> Result<TokenPair> {
        Ok(TokenPair {
            access_token: self.create_access_token(user).await?,
            refresh_token: self.create_refresh_token(user).await?,
            expires_in: self.expiration,
        })
    }

    /// Verify and decode a token
    pub async fn verify_token(&self, token: &str) -> Result<Claims> {
        let mut validation = Validation::new(self.algorithm);
        validation.set_issuer(&[&self.issuer]);

        let token_data =
            decode::<Claims>(token, &self.decoding_key, &validation).map_err(GatewayError::Jwt)?;

        Ok(token_data.claims)
    }

    /// Verify a refresh token and return the identity it was issued for
    pub async fn verify_refresh_token(&self, token: &str) -> Result<UserIdentity> {
        let claims = self.verify_token(token).await?;

        if claims.token_type != TokenType::Refresh {
            return Err(GatewayError::auth("Invalid token type for refresh"));
        }

        Ok(UserIdentity {
            id: claims.sub,
            email: claims.email,
            name: claims.name,
        })
    }

    fn sign(&self, user: &UserIdentity, token_type: TokenType, lifetime: u64) -> Result<String> {
        let now = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map_err(|e| GatewayError::internal(format!("System time error: {}", e)))?
            .as_secs();

        let claims = Claims {
            sub: user.id.clone(),
            email: user.email.clone(),
            name: user.name.clone(),
            iat: now,
            exp: now.saturating_add(lifetime),
            iss: self.issuer.clone(),
            jti: Uuid::new_v4().to_string(),
            token_type,
        };

        let header = Header::new(self.algorithm);
        encode(&header, &claims, &self.encoding_key).map_err(GatewayError::Jwt)
    }
}
