use chrono::DateTime;
use jsonwebtoken::{decode, errors::ErrorKind, Algorithm, DecodingKey, Validation};

use crate::{AuthError, Claims, CredentialAlgorithm, Principal};

/// Verifies bearer credentials against a shared symmetric secret.
///
/// Constructed once at bootstrap and shared (it is cheap to clone the
/// `Arc` around it); verification itself is pure in-memory work with no
/// per-request state.
///
/// Only HMAC-SHA256 is accepted. A token whose header names any other
/// algorithm is rejected before claim inspection, so a valid-looking
/// claim set cannot smuggle itself in under a downgraded algorithm.
pub struct TokenVerifier {
    key: DecodingKey,
    validation: Validation,
}

impl TokenVerifier {
    /// `issuer` is the exact `iss` value credentials must carry.
    pub fn new(secret: &[u8], issuer: &str) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.set_issuer(&[issuer]);
        // Expiry is exact; the default 60s leeway would accept tokens that
        // are already dead.
        validation.leeway = 0;

        Self {
            key: DecodingKey::from_secret(secret),
            validation,
        }
    }

    /// Check a credential and extract its principal.
    ///
    /// Check order as observed by callers: algorithm/signature first,
    /// then expiry, then issuer. A token signed with the wrong key is
    /// rejected as `InvalidSignature` regardless of its claim content.
    pub fn verify(&self, token: &str) -> Result<Principal, AuthError> {
        let data =
            decode::<Claims>(token, &self.key, &self.validation).map_err(map_decode_error)?;

        principal_from_claims(data.claims)
    }
}

fn map_decode_error(err: jsonwebtoken::errors::Error) -> AuthError {
    match err.kind() {
        ErrorKind::InvalidSignature | ErrorKind::InvalidAlgorithm => AuthError::InvalidSignature,
        ErrorKind::InvalidIssuer => AuthError::InvalidIssuer,
        ErrorKind::ExpiredSignature => AuthError::ExpiredCredential,
        // Undecodable tokens, missing required claims, bad base64/JSON.
        _ => AuthError::Malformed,
    }
}

fn principal_from_claims(claims: Claims) -> Result<Principal, AuthError> {
    let issued_at = DateTime::from_timestamp(claims.iat, 0).ok_or(AuthError::Malformed)?;
    let expires_at = DateTime::from_timestamp(claims.exp, 0).ok_or(AuthError::Malformed)?;

    Ok(Principal {
        subject: claims.sub,
        issuer: claims.iss,
        algorithm: CredentialAlgorithm::Hs256,
        issued_at,
        expires_at,
    })
}

#[cfg(test)]
mod tests {
    use chrono::{Duration, Utc};
    use jsonwebtoken::{encode, EncodingKey, Header};

    use super::*;
    use crate::TokenSigner;

    const SECRET: &[u8] = b"test-secret";
    const ISSUER: &str = "custom";

    fn verifier() -> TokenVerifier {
        TokenVerifier::new(SECRET, ISSUER)
    }

    fn claims(iss: &str, offset: Duration) -> Claims {
        let now = Utc::now();
        Claims {
            iss: iss.to_string(),
            sub: "user-1".to_string(),
            iat: now.timestamp(),
            exp: (now + offset).timestamp(),
        }
    }

    fn mint(claims: &Claims, secret: &[u8], alg: Algorithm) -> String {
        encode(
            &Header::new(alg),
            claims,
            &EncodingKey::from_secret(secret),
        )
        .unwrap()
    }

    #[test]
    fn valid_credential_yields_matching_principal() {
        let claims = claims(ISSUER, Duration::hours(1));
        let token = mint(&claims, SECRET, Algorithm::HS256);

        let principal = verifier().verify(&token).unwrap();

        assert_eq!(principal.subject, "user-1");
        assert_eq!(principal.issuer, ISSUER);
        assert_eq!(principal.algorithm, CredentialAlgorithm::Hs256);
        assert_eq!(principal.issued_at.timestamp(), claims.iat);
        assert_eq!(principal.expires_at.timestamp(), claims.exp);
    }

    #[test]
    fn signer_and_verifier_share_the_secret() {
        let signer = TokenSigner::new(SECRET, ISSUER);
        let token = signer.sign("user-42", Duration::minutes(10)).unwrap();

        let principal = verifier().verify(&token).unwrap();
        assert_eq!(principal.subject, "user-42");
    }

    #[test]
    fn wrong_secret_is_invalid_signature_even_with_valid_claims() {
        let token = mint(&claims(ISSUER, Duration::hours(1)), b"other-secret", Algorithm::HS256);

        assert_eq!(verifier().verify(&token), Err(AuthError::InvalidSignature));
    }

    #[test]
    fn non_hs256_algorithm_is_rejected() {
        let token = mint(&claims(ISSUER, Duration::hours(1)), SECRET, Algorithm::HS384);

        assert_eq!(verifier().verify(&token), Err(AuthError::InvalidSignature));
    }

    #[test]
    fn wrong_issuer_is_rejected() {
        let token = mint(&claims("other", Duration::hours(1)), SECRET, Algorithm::HS256);

        assert_eq!(verifier().verify(&token), Err(AuthError::InvalidIssuer));
    }

    #[test]
    fn expired_credential_is_rejected_despite_valid_signature_and_issuer() {
        let token = mint(&claims(ISSUER, Duration::seconds(-1)), SECRET, Algorithm::HS256);

        assert_eq!(verifier().verify(&token), Err(AuthError::ExpiredCredential));
    }

    #[test]
    fn expiry_is_checked_before_issuer() {
        // Both claims are bad; expiry wins once the signature holds.
        let token = mint(&claims("other", Duration::seconds(-1)), SECRET, Algorithm::HS256);

        assert_eq!(verifier().verify(&token), Err(AuthError::ExpiredCredential));
    }

    #[test]
    fn garbage_token_is_malformed() {
        assert_eq!(
            verifier().verify("not-a-jwt"),
            Err(AuthError::Malformed)
        );
    }

    #[test]
    fn missing_issuer_claim_is_rejected() {
        // No `iss` at all; the verifier requires it.
        #[derive(serde::Serialize)]
        struct Bare {
            sub: String,
            iat: i64,
            exp: i64,
        }
        let now = Utc::now();
        let token = encode(
            &Header::new(Algorithm::HS256),
            &Bare {
                sub: "user-1".to_string(),
                iat: now.timestamp(),
                exp: (now + Duration::hours(1)).timestamp(),
            },
            &EncodingKey::from_secret(SECRET),
        )
        .unwrap();

        assert!(verifier().verify(&token).is_err());
    }
}
