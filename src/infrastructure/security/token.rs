// src/infrastructure/security/token.rs
use crate::application::{
    dto::{AuthTokenDto, AuthenticatedUser, TokenSubject},
    error::{ApplicationError, ApplicationResult},
    ports::security::TokenManager,
};
use async_trait::async_trait;
use biscuit_auth::{
    Biscuit, KeyPair, PrivateKey, PublicKey,
    builder::{Algorithm, AuthorizerBuilder, Term},
};
use chrono::{DateTime, Duration as ChronoDuration, Utc};
use std::{
    collections::HashMap,
    sync::Arc,
    time::{Duration, SystemTime},
};

#[derive(Clone)]
pub struct BiscuitTokenManager {
    root: Arc<KeyPair>,
    public: PublicKey,
    ttl: Duration,
}

impl BiscuitTokenManager {
    pub fn new(private_key_hex: &str, ttl: Duration) -> ApplicationResult<Self> {
        let private = PrivateKey::from_bytes_hex(private_key_hex, Algorithm::Ed25519)
            .map_err(|err| ApplicationError::infrastructure(err.to_string()))?;
        let keypair = KeyPair::from(&private);
        let public = keypair.public();

        Ok(Self {
            root: Arc::new(keypair),
            public,
            ttl,
        })
    }

    /// A manager with a freshly generated key; tokens die with the process.
    pub fn ephemeral(ttl: Duration) -> Self {
        let keypair = KeyPair::new();
        let public = keypair.public();
        Self {
            root: Arc::new(keypair),
            public,
            ttl,
        }
    }
}

fn escape_literal(value: &str) -> String {
    value.replace('\\', "\\\\").replace('"', "\\\"")
}

fn build_code_and_params(
    subject: &TokenSubject,
    issued_at: SystemTime,
    expires_at: SystemTime,
) -> (String, HashMap<String, Term>) {
    let mut params: HashMap<String, Term> = HashMap::new();
    params.insert("uid".to_string(), i64::from(subject.user_id).into());
    params.insert("uname".to_string(), subject.username.clone().into());
    params.insert("issued".to_string(), issued_at.into());
    params.insert("exp".to_string(), expires_at.into());

    let mut code = String::from(
        r#"
                user({uid}, {uname});
                issued_at({issued});
                expires_at({exp});
                check if time($now), $now >= {issued};
                check if time($now), $now <= {exp};
                "#,
    );

    if let Some(role) = subject.role.as_ref() {
        code.push_str("role({urole});\n");
        params.insert("urole".to_string(), role.clone().into());
    }

    let mut capabilities: Vec<_> = subject.capabilities.iter().collect();
    capabilities.sort_by(|a, b| (&a.resource, &a.action).cmp(&(&b.resource, &b.action)));
    for cap in capabilities {
        code.push_str(&format!(
            "right(\"{}\", \"{}\");\n",
            escape_literal(&cap.resource),
            escape_literal(&cap.action)
        ));
    }

    (code, params)
}

fn build_and_serialize_biscuit(
    code: &str,
    params: HashMap<String, Term>,
    root: &KeyPair,
) -> Result<String, ApplicationError> {
    let token = Biscuit::builder()
        .code_with_params(code, params, HashMap::new())
        .map_err(|err| ApplicationError::infrastructure(err.to_string()))?
        .build(root)
        .map_err(|err| ApplicationError::infrastructure(err.to_string()))?;

    token
        .seal()
        .map_err(|err| ApplicationError::infrastructure(err.to_string()))?
        .to_base64()
        .map_err(|err| ApplicationError::infrastructure(err.to_string()))
}

fn ttl_to_expires_in_seconds(ttl: Duration) -> i64 {
    ChronoDuration::from_std(ttl)
        .unwrap_or_else(|_| ChronoDuration::seconds(ttl.as_secs() as i64))
        .num_seconds()
        .max(0)
}

#[async_trait]
impl TokenManager for BiscuitTokenManager {
    async fn issue(&self, subject: TokenSubject) -> ApplicationResult<AuthTokenDto> {
        let issued_at = SystemTime::now();
        let expires_at = issued_at
            .checked_add(self.ttl)
            .ok_or_else(|| ApplicationError::infrastructure("token expiration overflow"))?;
        let (code, params) = build_code_and_params(&subject, issued_at, expires_at);

        let token = build_and_serialize_biscuit(&code, params, self.root.as_ref())?;

        Ok(AuthTokenDto {
            token,
            issued_at: DateTime::<Utc>::from(issued_at),
            expires_at: DateTime::<Utc>::from(expires_at),
            expires_in: ttl_to_expires_in_seconds(self.ttl),
        })
    }

    async fn authenticate(&self, token: &str) -> ApplicationResult<AuthenticatedUser> {
        let biscuit = Biscuit::from_base64(token, self.public)
            .map_err(|err| ApplicationError::unauthorized(err.to_string()))?;

        // enforces the expiry checks embedded in the token
        let mut authorizer = AuthorizerBuilder::new()
            .time()
            .code("allow if true;")
            .map_err(|err| ApplicationError::unauthorized(err.to_string()))?
            .build(&biscuit)
            .map_err(|err| ApplicationError::unauthorized(err.to_string()))?;

        authorizer
            .authorize()
            .map_err(|err| ApplicationError::unauthorized(err.to_string()))?;

        let view = biscuit
            .authorizer()
            .map_err(|err| ApplicationError::unauthorized(err.to_string()))?;
        let (facts, _, _, _) = view.dump();

        super::claims::parse_claims(facts)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::user::{Capability, UserId};
    use std::collections::HashSet;

    fn subject() -> TokenSubject {
        TokenSubject {
            user_id: UserId(7),
            username: "writer".into(),
            role: Some("Author".into()),
            capabilities: HashSet::from([
                Capability::new("content", "create"),
                Capability::new("content", "publish"),
            ]),
        }
    }

    #[tokio::test]
    async fn issued_tokens_authenticate_with_claims_intact() {
        let manager = BiscuitTokenManager::ephemeral(Duration::from_secs(600));
        let issued = manager.issue(subject()).await.unwrap();
        assert_eq!(issued.expires_in, 600);

        let user = manager.authenticate(&issued.token).await.unwrap();
        assert_eq!(user.id, UserId(7));
        assert_eq!(user.username, "writer");
        assert_eq!(user.role.as_deref(), Some("Author"));
        assert!(user.has_capability("content", "publish"));
        assert!(!user.has_capability("users", "manage"));
    }

    #[tokio::test]
    async fn tokens_from_another_key_are_rejected() {
        let issuer = BiscuitTokenManager::ephemeral(Duration::from_secs(600));
        let verifier = BiscuitTokenManager::ephemeral(Duration::from_secs(600));
        let issued = issuer.issue(subject()).await.unwrap();

        let err = verifier.authenticate(&issued.token).await.unwrap_err();
        assert!(matches!(err, ApplicationError::Unauthorized(_)));
    }

    #[tokio::test]
    async fn subjects_without_role_still_round_trip() {
        let manager = BiscuitTokenManager::ephemeral(Duration::from_secs(60));
        let mut subject = subject();
        subject.role = None;
        subject.capabilities.clear();

        let issued = manager.issue(subject).await.unwrap();
        let user = manager.authenticate(&issued.token).await.unwrap();
        assert!(user.role.is_none());
        assert!(user.capabilities.is_empty());
    }
}
