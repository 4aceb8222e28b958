//! Unit tests for the auth crate
//!
//! Use cases are exercised against the in-memory repository, which is
//! also the production fallback backend.

#[cfg(test)]
mod sign_up_tests {
    use crate::application::config::AuthConfig;
    use crate::application::sign_up::{SignUpInput, SignUpUseCase};
    use crate::application::token::TokenService;
    use crate::error::AuthError;
    use crate::infra::memory::MemoryUserRepository;
    use std::sync::Arc;

    fn use_case(repo: &MemoryUserRepository) -> SignUpUseCase<MemoryUserRepository> {
        let config = Arc::new(AuthConfig::with_random_secret());
        let tokens = TokenService::from_config(&config);
        SignUpUseCase::new(Arc::new(repo.clone()), config, tokens)
    }

    fn input(email: &str) -> SignUpInput {
        SignUpInput {
            name: "Asha".to_string(),
            email: email.to_string(),
            password: "secret1".to_string(),
        }
    }

    #[tokio::test]
    async fn test_signup_success_returns_user_and_token() {
        let repo = MemoryUserRepository::new();
        let output = use_case(&repo).execute(input("asha@x.com")).await.unwrap();

        assert!(!output.token.is_empty());
        assert_eq!(output.user.email.as_str(), "asha@x.com");
        assert_eq!(output.user.user_id.as_str(), "mem-1");
        assert_eq!(repo.len(), 1);
    }

    #[tokio::test]
    async fn test_signup_missing_fields() {
        let repo = MemoryUserRepository::new();
        let result = use_case(&repo)
            .execute(SignUpInput {
                name: String::new(),
                email: "asha@x.com".to_string(),
                password: "secret1".to_string(),
            })
            .await;

        assert!(matches!(result, Err(AuthError::MissingFields(_))));
        assert_eq!(repo.len(), 0);
    }

    #[tokio::test]
    async fn test_signup_short_password() {
        let repo = MemoryUserRepository::new();
        let result = use_case(&repo)
            .execute(SignUpInput {
                password: "five5".to_string(),
                ..input("asha@x.com")
            })
            .await;

        assert!(matches!(result, Err(AuthError::Validation(_))));
        assert_eq!(repo.len(), 0);
    }

    #[tokio::test]
    async fn test_signup_duplicate_email_is_conflict_and_leaves_store_unchanged() {
        let repo = MemoryUserRepository::new();
        let use_case = use_case(&repo);

        use_case.execute(input("asha@x.com")).await.unwrap();
        let result = use_case.execute(input("asha@x.com")).await;

        assert!(matches!(result, Err(AuthError::EmailTaken)));
        assert_eq!(repo.len(), 1);
    }

    #[tokio::test]
    async fn test_signup_email_uniqueness_is_case_insensitive() {
        let repo = MemoryUserRepository::new();
        let use_case = use_case(&repo);

        use_case.execute(input("asha@x.com")).await.unwrap();
        let result = use_case.execute(input("Asha@X.com")).await;

        assert!(matches!(result, Err(AuthError::EmailTaken)));
    }
}

#[cfg(test)]
mod sign_in_tests {
    use crate::application::config::AuthConfig;
    use crate::application::sign_in::{SignInInput, SignInUseCase};
    use crate::application::sign_up::{SignUpInput, SignUpUseCase};
    use crate::application::token::TokenService;
    use crate::error::AuthError;
    use crate::infra::memory::MemoryUserRepository;
    use std::sync::Arc;

    struct Fixture {
        repo: MemoryUserRepository,
        config: Arc<AuthConfig>,
        tokens: Arc<TokenService>,
    }

    impl Fixture {
        async fn with_user() -> Self {
            let repo = MemoryUserRepository::new();
            let config = Arc::new(AuthConfig::with_random_secret());
            let tokens = TokenService::from_config(&config);

            SignUpUseCase::new(Arc::new(repo.clone()), config.clone(), tokens.clone())
                .execute(SignUpInput {
                    name: "Asha".to_string(),
                    email: "asha@x.com".to_string(),
                    password: "secret1".to_string(),
                })
                .await
                .unwrap();

            Self {
                repo,
                config,
                tokens,
            }
        }

        fn sign_in(&self) -> SignInUseCase<MemoryUserRepository> {
            SignInUseCase::new(
                Arc::new(self.repo.clone()),
                self.config.clone(),
                self.tokens.clone(),
            )
        }
    }

    #[tokio::test]
    async fn test_signin_success_token_resolves_to_same_user() {
        let fixture = Fixture::with_user().await;

        let output = fixture
            .sign_in()
            .execute(SignInInput {
                email: "asha@x.com".to_string(),
                password: "secret1".to_string(),
            })
            .await
            .unwrap();

        let user_id = fixture.tokens.verify(&output.token).unwrap();
        assert_eq!(user_id, output.user.user_id);
    }

    #[tokio::test]
    async fn test_wrong_password_and_unknown_email_are_indistinguishable() {
        let fixture = Fixture::with_user().await;
        let sign_in = fixture.sign_in();

        let wrong_password = sign_in
            .execute(SignInInput {
                email: "asha@x.com".to_string(),
                password: "wrong".to_string(),
            })
            .await
            .unwrap_err();

        let unknown_email = sign_in
            .execute(SignInInput {
                email: "nobody@x.com".to_string(),
                password: "secret1".to_string(),
            })
            .await
            .unwrap_err();

        assert!(matches!(wrong_password, AuthError::InvalidCredentials));
        assert!(matches!(unknown_email, AuthError::InvalidCredentials));
        assert_eq!(
            wrong_password.status_code(),
            unknown_email.status_code()
        );
        assert_eq!(wrong_password.to_string(), unknown_email.to_string());
    }

    #[tokio::test]
    async fn test_signin_missing_fields() {
        let fixture = Fixture::with_user().await;

        let result = fixture
            .sign_in()
            .execute(SignInInput {
                email: String::new(),
                password: "secret1".to_string(),
            })
            .await;

        assert!(matches!(result, Err(AuthError::MissingFields(_))));
    }
}

#[cfg(test)]
mod profile_tests {
    use crate::application::config::AuthConfig;
    use crate::application::profile::{ProfileUpdateInput, ProfileUseCase};
    use crate::application::sign_up::{SignUpInput, SignUpUseCase};
    use crate::application::token::TokenService;
    use crate::error::AuthError;
    use crate::infra::memory::MemoryUserRepository;
    use kernel::id::UserId;
    use std::sync::Arc;

    async fn repo_with_user() -> (MemoryUserRepository, UserId) {
        let repo = MemoryUserRepository::new();
        let config = Arc::new(AuthConfig::with_random_secret());
        let tokens = TokenService::from_config(&config);

        let output = SignUpUseCase::new(Arc::new(repo.clone()), config, tokens)
            .execute(SignUpInput {
                name: "Asha".to_string(),
                email: "asha@x.com".to_string(),
                password: "secret1".to_string(),
            })
            .await
            .unwrap();

        (repo, output.user.user_id)
    }

    #[tokio::test]
    async fn test_get_profile_roundtrip() {
        let (repo, user_id) = repo_with_user().await;
        let use_case = ProfileUseCase::new(Arc::new(repo));

        let user = use_case.get(&user_id).await.unwrap();
        assert_eq!(user.name, "Asha");
    }

    #[tokio::test]
    async fn test_get_profile_unknown_id() {
        let (repo, _) = repo_with_user().await;
        let use_case = ProfileUseCase::new(Arc::new(repo));

        let result = use_case.get(&UserId::from_string("mem-99")).await;
        assert!(matches!(result, Err(AuthError::UserNotFound)));
    }

    #[tokio::test]
    async fn test_update_profile_touches_only_given_fields() {
        let (repo, user_id) = repo_with_user().await;
        let use_case = ProfileUseCase::new(Arc::new(repo.clone()));

        let updated = use_case
            .update(
                &user_id,
                ProfileUpdateInput {
                    phone: Some("9876543210".to_string()),
                    ..Default::default()
                },
            )
            .await
            .unwrap();

        assert_eq!(updated.name, "Asha");
        assert_eq!(updated.phone.as_deref(), Some("9876543210"));

        // The stored copy matches what was returned
        let reread = use_case.get(&user_id).await.unwrap();
        assert_eq!(reread.phone.as_deref(), Some("9876543210"));
    }
}

#[cfg(test)]
mod failover_tests {
    use crate::application::config::AuthConfig;
    use crate::application::sign_up::{SignUpInput, SignUpUseCase};
    use crate::application::token::TokenService;
    use crate::domain::repository::UserRepository;
    use crate::domain::value_object::email::Email;
    use crate::infra::failover::FailoverUserRepository;
    use std::sync::Arc;

    #[tokio::test]
    async fn test_memory_only_failover_assigns_counter_ids() {
        let repo = FailoverUserRepository::memory_only();
        let config = Arc::new(AuthConfig::with_random_secret());
        let tokens = TokenService::from_config(&config);

        let use_case = SignUpUseCase::new(Arc::new(repo.clone()), config, tokens);

        let first = use_case
            .execute(SignUpInput {
                name: "Asha".to_string(),
                email: "asha@x.com".to_string(),
                password: "secret1".to_string(),
            })
            .await
            .unwrap();
        let second = use_case
            .execute(SignUpInput {
                name: "Vikram".to_string(),
                email: "vikram@x.com".to_string(),
                password: "secret2".to_string(),
            })
            .await
            .unwrap();

        assert_eq!(first.user.user_id.as_str(), "mem-1");
        assert_eq!(second.user.user_id.as_str(), "mem-2");

        let email = Email::new("vikram@x.com").unwrap();
        let found = repo.find_by_email(&email).await.unwrap().unwrap();
        assert_eq!(found.user_id, second.user.user_id);
    }
}
