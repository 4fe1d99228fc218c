use crate::{
    abstract_trait::{
        AuthServiceTrait, DynHashing, DynJwtService, DynUserCommandRepository,
        DynUserQueryRepository,
    },
    domain::{
        requests::{LoginRequest, RegisterRequest},
        responses::{ApiResponse, TokenResponse, UserResponse},
    },
    errors::{RepositoryError, ServiceError},
};
use async_trait::async_trait;
use tracing::{error, info, warn};

pub struct AuthService {
    query: DynUserQueryRepository,
    command: DynUserCommandRepository,
    hashing: DynHashing,
    jwt: DynJwtService,
}

impl AuthService {
    pub fn new(
        query: DynUserQueryRepository,
        command: DynUserCommandRepository,
        hashing: DynHashing,
        jwt: DynJwtService,
    ) -> Self {
        Self {
            query,
            command,
            hashing,
            jwt,
        }
    }
}

#[async_trait]
impl AuthServiceTrait for AuthService {
    async fn register(
        &self,
        req: &RegisterRequest,
    ) -> Result<ApiResponse<UserResponse>, ServiceError> {
        info!("📝 Registering user: {}", req.email);

        let password_hash = self.hashing.hash_password(&req.password).await?;

        let user = self
            .command
            .create_user(&req.username, &req.email, &password_hash)
            .await
            .map_err(|err| {
                if matches!(err, RepositoryError::AlreadyExists(_)) {
                    warn!("⚠️ Registration rejected, email already taken: {}", req.email);
                } else {
                    error!("❌ Failed to create user: {err:?}");
                }
                ServiceError::Repo(err)
            })?;

        info!("✅ User registered: {} (ID: {})", user.email, user.user_id);

        Ok(ApiResponse {
            status: "success".to_string(),
            message: "Registration successful".to_string(),
            data: UserResponse::from(user),
        })
    }

    async fn login(&self, req: &LoginRequest) -> Result<ApiResponse<TokenResponse>, ServiceError> {
        info!("🔐 Login attempt: {}", req.email);

        let user = self
            .query
            .find_by_email(&req.email)
            .await
            .map_err(ServiceError::Repo)?
            .ok_or(ServiceError::InvalidCredentials)?;

        self.hashing
            .compare_password(&user.password, &req.password)
            .await
            .map_err(|_| ServiceError::InvalidCredentials)?;

        let access_token =
            self.jwt
                .generate_token(user.user_id as i64, user.is_admin, "access")?;

        info!("✅ Login successful: {} (ID: {})", user.email, user.user_id);

        Ok(ApiResponse {
            status: "success".to_string(),
            message: "Login successful".to_string(),
            data: TokenResponse {
                access_token,
                user: UserResponse::from(user),
            },
        })
    }

    async fn profile(&self, user_id: i32) -> Result<ApiResponse<UserResponse>, ServiceError> {
        let user = self
            .query
            .find_by_id(user_id)
            .await
            .map_err(ServiceError::Repo)?
            .ok_or_else(|| ServiceError::NotFound(format!("User {user_id} not found")))?;

        Ok(ApiResponse {
            status: "success".to_string(),
            message: "Profile fetched successfully".to_string(),
            data: UserResponse::from(user),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        abstract_trait::{JwtServiceTrait, UserCommandRepositoryTrait, UserQueryRepositoryTrait},
        config::{Hashing, JwtConfig},
        model::User,
    };
    use std::sync::Arc;

    fn user(id: i32, email: &str, password_hash: &str, is_admin: bool) -> User {
        User {
            user_id: id,
            username: "teszt".to_string(),
            email: email.to_string(),
            password: password_hash.to_string(),
            is_admin,
            created_at: None,
            updated_at: None,
        }
    }

    struct FakeUserQueryRepo {
        user: Option<User>,
    }

    #[async_trait]
    impl UserQueryRepositoryTrait for FakeUserQueryRepo {
        async fn find_by_id(&self, _id: i32) -> Result<Option<User>, RepositoryError> {
            Ok(self.user.clone())
        }

        async fn find_by_email(&self, _email: &str) -> Result<Option<User>, RepositoryError> {
            Ok(self.user.clone())
        }
    }

    struct FakeUserCommandRepo {
        duplicate: bool,
    }

    #[async_trait]
    impl UserCommandRepositoryTrait for FakeUserCommandRepo {
        async fn create_user(
            &self,
            username: &str,
            email: &str,
            password_hash: &str,
        ) -> Result<User, RepositoryError> {
            if self.duplicate {
                return Err(RepositoryError::AlreadyExists("users.email".to_string()));
            }
            let mut u = user(1, email, password_hash, false);
            u.username = username.to_string();
            Ok(u)
        }
    }

    fn service(existing: Option<User>, duplicate: bool) -> AuthService {
        AuthService::new(
            Arc::new(FakeUserQueryRepo { user: existing }),
            Arc::new(FakeUserCommandRepo { duplicate }),
            Arc::new(Hashing),
            Arc::new(JwtConfig::new("test-secret")),
        )
    }

    #[tokio::test]
    async fn register_hashes_and_omits_password_from_response() {
        let svc = service(None, false);

        let req = RegisterRequest {
            username: "teszt".to_string(),
            email: "teszt@example.com".to_string(),
            password: "titok".to_string(),
        };
        let response = svc.register(&req).await.unwrap();

        assert_eq!(response.data.email, "teszt@example.com");
        assert!(!response.data.is_admin);
        assert!(!serde_json::to_string(&response.data).unwrap().contains("titok"));
    }

    #[tokio::test]
    async fn register_duplicate_email_is_rejected() {
        let svc = service(None, true);

        let req = RegisterRequest {
            username: "teszt".to_string(),
            email: "teszt@example.com".to_string(),
            password: "titok".to_string(),
        };

        assert!(matches!(
            svc.register(&req).await,
            Err(ServiceError::Repo(RepositoryError::AlreadyExists(_)))
        ));
    }

    #[tokio::test]
    async fn login_issues_token_carrying_admin_flag() {
        let hash = bcrypt::hash("titok", 4).unwrap();
        let svc = service(Some(user(7, "admin@example.com", &hash, true)), false);

        let req = LoginRequest {
            email: "admin@example.com".to_string(),
            password: "titok".to_string(),
        };
        let response = svc.login(&req).await.unwrap();

        let claims = JwtConfig::new("test-secret")
            .verify_token(&response.data.access_token, "access")
            .unwrap();
        assert_eq!(claims.user_id, 7);
        assert!(claims.is_admin);
    }

    #[tokio::test]
    async fn login_wrong_password_is_invalid_credentials() {
        let hash = bcrypt::hash("titok", 4).unwrap();
        let svc = service(Some(user(7, "a@example.com", &hash, false)), false);

        let req = LoginRequest {
            email: "a@example.com".to_string(),
            password: "rossz".to_string(),
        };

        assert!(matches!(
            svc.login(&req).await,
            Err(ServiceError::InvalidCredentials)
        ));
    }

    #[tokio::test]
    async fn login_unknown_email_is_invalid_credentials() {
        let svc = service(None, false);

        let req = LoginRequest {
            email: "senki@example.com".to_string(),
            password: "titok".to_string(),
        };

        assert!(matches!(
            svc.login(&req).await,
            Err(ServiceError::InvalidCredentials)
        ));
    }
}
