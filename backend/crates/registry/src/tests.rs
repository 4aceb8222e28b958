//! Unit tests for the registry crate
//!
//! Use cases run against the in-memory repository, which is also the
//! production fallback backend.

#[cfg(test)]
mod animal_tests {
    use crate::application::register_animal::{RegisterAnimalInput, RegisterAnimalUseCase};
    use crate::application::{DeleteAnimalUseCase, ListAnimalsUseCase};
    use crate::error::RegistryError;
    use crate::infra::memory::MemoryRegistryRepository;
    use kernel::id::{AnimalId, UserId};
    use std::sync::Arc;

    fn input(tag_id: &str) -> RegisterAnimalInput {
        RegisterAnimalInput {
            breed: Some("Gir".to_string()),
            animal_type: Some("Cattle".to_string()),
            age: Some(3),
            gender: Some("Female".to_string()),
            tag_id: Some(tag_id.to_string()),
            location: None,
            owner_name: None,
            notes: None,
            image_uri: None,
            confidence: None,
            feedback_id: None,
            breed_ratings: vec![],
            registration_date: None,
        }
    }

    #[tokio::test]
    async fn test_create_then_list_roundtrip() {
        let repo = MemoryRegistryRepository::new();
        let user = UserId::from_counter(1);

        let register = RegisterAnimalUseCase::new(Arc::new(repo.clone()));
        let created = register.execute(&user, input("TAG001")).await.unwrap();

        let listed = ListAnimalsUseCase::new(Arc::new(repo))
            .execute(&user)
            .await
            .unwrap();

        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].animal_id, created.animal_id);
        assert_eq!(listed[0].breed, "Gir");
        assert_eq!(listed[0].tag_id, "TAG001");
        assert_eq!(listed[0].age, 3);
    }

    #[tokio::test]
    async fn test_listing_is_newest_first_and_owner_scoped() {
        let repo = MemoryRegistryRepository::new();
        let asha = UserId::from_counter(1);
        let vikram = UserId::from_counter(2);

        let register = RegisterAnimalUseCase::new(Arc::new(repo.clone()));
        register.execute(&asha, input("TAG001")).await.unwrap();
        register.execute(&asha, input("TAG002")).await.unwrap();
        register.execute(&vikram, input("TAG003")).await.unwrap();

        let listed = ListAnimalsUseCase::new(Arc::new(repo))
            .execute(&asha)
            .await
            .unwrap();

        assert_eq!(listed.len(), 2);
        assert_eq!(listed[0].tag_id, "TAG002");
        assert_eq!(listed[1].tag_id, "TAG001");
        assert!(listed[0].created_at >= listed[1].created_at);
    }

    #[tokio::test]
    async fn test_missing_required_fields() {
        let repo = MemoryRegistryRepository::new();
        let user = UserId::from_counter(1);
        let register = RegisterAnimalUseCase::new(Arc::new(repo.clone()));

        let result = register
            .execute(
                &user,
                RegisterAnimalInput {
                    tag_id: None,
                    ..input("TAG001")
                },
            )
            .await;

        assert!(matches!(result, Err(RegistryError::MissingFields)));
        assert_eq!(repo.animal_count(), 0);
    }

    #[tokio::test]
    async fn test_bad_enum_and_age_values() {
        let repo = MemoryRegistryRepository::new();
        let user = UserId::from_counter(1);
        let register = RegisterAnimalUseCase::new(Arc::new(repo.clone()));

        let bad_type = register
            .execute(
                &user,
                RegisterAnimalInput {
                    animal_type: Some("Goat".to_string()),
                    ..input("TAG001")
                },
            )
            .await;
        assert!(matches!(bad_type, Err(RegistryError::Validation(_))));

        let bad_age = register
            .execute(
                &user,
                RegisterAnimalInput {
                    age: Some(0),
                    ..input("TAG002")
                },
            )
            .await;
        assert!(matches!(bad_age, Err(RegistryError::Validation(_))));
    }

    #[tokio::test]
    async fn test_duplicate_tag_id_is_conflict_and_original_untouched() {
        let repo = MemoryRegistryRepository::new();
        let user = UserId::from_counter(1);
        let register = RegisterAnimalUseCase::new(Arc::new(repo.clone()));

        let first = register.execute(&user, input("TAG001")).await.unwrap();

        let second = register
            .execute(
                &user,
                RegisterAnimalInput {
                    breed: Some("Sahiwal".to_string()),
                    ..input("TAG001")
                },
            )
            .await;

        assert!(matches!(second, Err(RegistryError::DuplicateTagId)));

        let listed = ListAnimalsUseCase::new(Arc::new(repo))
            .execute(&user)
            .await
            .unwrap();
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].animal_id, first.animal_id);
        assert_eq!(listed[0].breed, "Gir");
    }

    #[tokio::test]
    async fn test_delete_by_non_owner_is_not_found_and_keeps_record() {
        let repo = MemoryRegistryRepository::new();
        let asha = UserId::from_counter(1);
        let vikram = UserId::from_counter(2);

        let register = RegisterAnimalUseCase::new(Arc::new(repo.clone()));
        let animal = register.execute(&asha, input("TAG001")).await.unwrap();

        let delete = DeleteAnimalUseCase::new(Arc::new(repo.clone()));
        let result = delete.execute(&vikram, &animal.animal_id).await;

        // Same failure as a nonexistent id
        assert!(matches!(result, Err(RegistryError::AnimalNotFound)));
        let missing = delete
            .execute(&vikram, &AnimalId::from_string("mem-99"))
            .await;
        assert!(matches!(missing, Err(RegistryError::AnimalNotFound)));

        // Asha still owns the animal and can delete it
        let listed = ListAnimalsUseCase::new(Arc::new(repo.clone()))
            .execute(&asha)
            .await
            .unwrap();
        assert_eq!(listed.len(), 1);

        delete.execute(&asha, &animal.animal_id).await.unwrap();
        assert_eq!(repo.animal_count(), 0);
    }
}

#[cfg(test)]
mod feedback_tests {
    use crate::application::record_feedback::{RecordFeedbackInput, RecordFeedbackUseCase};
    use crate::application::FeedbackStatsUseCase;
    use crate::domain::value_object::{BreedPrediction, BreedRating};
    use crate::error::RegistryError;
    use crate::infra::memory::MemoryRegistryRepository;
    use kernel::id::UserId;
    use std::sync::Arc;

    fn predictions() -> Vec<BreedPrediction> {
        vec![
            BreedPrediction {
                breed: "Gir (Cattle)".to_string(),
                confidence: 92,
                rank: 1,
            },
            BreedPrediction {
                breed: "Sahiwal (Cattle)".to_string(),
                confidence: 5,
                rank: 2,
            },
        ]
    }

    fn input(selected: &str, rating: i32) -> RecordFeedbackInput {
        RecordFeedbackInput {
            image_uri: Some("data:image/jpeg;base64,x".to_string()),
            predicted_breeds: predictions(),
            user_selected_breed: Some(selected.to_string()),
            user_rating: Some(rating),
            user_comments: None,
            breed_ratings: vec![],
            heatmap_data: None,
        }
    }

    #[tokio::test]
    async fn test_is_correct_computed_server_side() {
        let repo = MemoryRegistryRepository::new();
        let user = UserId::from_counter(1);
        let record = RecordFeedbackUseCase::new(Arc::new(repo));

        let correct = record
            .execute(&user, input("Gir (Cattle)", 5))
            .await
            .unwrap();
        assert!(correct.is_correct);

        let wrong = record
            .execute(&user, input("Sahiwal (Cattle)", 2))
            .await
            .unwrap();
        assert!(!wrong.is_correct);
    }

    #[tokio::test]
    async fn test_rating_bounds() {
        let repo = MemoryRegistryRepository::new();
        let user = UserId::from_counter(1);
        let record = RecordFeedbackUseCase::new(Arc::new(repo));

        for rating in [0, 6] {
            let result = record.execute(&user, input("Gir (Cattle)", rating)).await;
            assert!(matches!(result, Err(RegistryError::Validation(_))));
        }
    }

    #[tokio::test]
    async fn test_breed_rating_scale_is_zero_to_ten() {
        let repo = MemoryRegistryRepository::new();
        let user = UserId::from_counter(1);
        let record = RecordFeedbackUseCase::new(Arc::new(repo));

        let result = record
            .execute(
                &user,
                RecordFeedbackInput {
                    breed_ratings: vec![BreedRating {
                        breed: "Gir (Cattle)".to_string(),
                        rating: 11,
                    }],
                    ..input("Gir (Cattle)", 4)
                },
            )
            .await;

        assert!(matches!(result, Err(RegistryError::Validation(_))));
    }

    #[tokio::test]
    async fn test_stats_accumulate_per_user() {
        let repo = MemoryRegistryRepository::new();
        let user = UserId::from_counter(1);
        let other = UserId::from_counter(2);
        let record = RecordFeedbackUseCase::new(Arc::new(repo.clone()));

        record
            .execute(&user, input("Gir (Cattle)", 5))
            .await
            .unwrap();
        record
            .execute(&user, input("Sahiwal (Cattle)", 3))
            .await
            .unwrap();
        record
            .execute(&other, input("Gir (Cattle)", 1))
            .await
            .unwrap();

        let stats = FeedbackStatsUseCase::new(Arc::new(repo))
            .stats(&user)
            .await
            .unwrap();

        assert_eq!(stats.total_predictions, 2);
        assert_eq!(stats.correct_predictions, 1);
        assert_eq!(stats.average_rating, 4.0);
        assert_eq!(stats.accuracy, 50.0);
    }

    #[tokio::test]
    async fn test_stats_empty_user_is_all_zero() {
        let repo = MemoryRegistryRepository::new();
        let stats = FeedbackStatsUseCase::new(Arc::new(repo))
            .stats(&UserId::from_counter(9))
            .await
            .unwrap();

        assert_eq!(stats.total_predictions, 0);
        assert_eq!(stats.accuracy, 0.0);
    }

    #[tokio::test]
    async fn test_breed_stats_grouping_and_ordering() {
        let repo = MemoryRegistryRepository::new();
        let user = UserId::from_counter(1);
        let record = RecordFeedbackUseCase::new(Arc::new(repo.clone()));

        record
            .execute(
                &user,
                RecordFeedbackInput {
                    breed_ratings: vec![
                        BreedRating {
                            breed: "Gir (Cattle)".to_string(),
                            rating: 8,
                        },
                        BreedRating {
                            breed: "Sahiwal (Cattle)".to_string(),
                            rating: 4,
                        },
                    ],
                    ..input("Gir (Cattle)", 5)
                },
            )
            .await
            .unwrap();
        record
            .execute(
                &user,
                RecordFeedbackInput {
                    breed_ratings: vec![BreedRating {
                        breed: "Gir (Cattle)".to_string(),
                        rating: 6,
                    }],
                    ..input("Gir (Cattle)", 4)
                },
            )
            .await
            .unwrap();

        let stats = FeedbackStatsUseCase::new(Arc::new(repo))
            .breed_stats(&user)
            .await
            .unwrap();

        assert_eq!(stats.len(), 2);
        assert_eq!(stats[0].breed, "Gir (Cattle)");
        assert_eq!(stats[0].total_ratings, 2);
        assert_eq!(stats[0].average_rating, 7.0);
        assert_eq!(stats[0].max_rating, 8);
        assert_eq!(stats[0].min_rating, 6);
        assert_eq!(stats[1].breed, "Sahiwal (Cattle)");
    }
}

#[cfg(test)]
mod ticket_tests {
    use crate::application::submit_ticket::{SubmitTicketInput, SubmitTicketUseCase};
    use crate::application::ListTicketsUseCase;
    use crate::domain::value_object::TicketStatus;
    use crate::error::RegistryError;
    use crate::infra::memory::MemoryRegistryRepository;
    use kernel::id::UserId;
    use std::sync::Arc;

    fn input(subject: &str) -> SubmitTicketInput {
        SubmitTicketInput {
            kind: Some("bug".to_string()),
            subject: Some(subject.to_string()),
            message: Some("The camera screen goes blank".to_string()),
            user_email: Some("asha@x.com".to_string()),
            user_name: Some("Asha".to_string()),
            timestamp: None,
        }
    }

    #[tokio::test]
    async fn test_submitted_ticket_is_pending() {
        let repo = MemoryRegistryRepository::new();
        let user = UserId::from_counter(1);

        let ticket = SubmitTicketUseCase::new(Arc::new(repo))
            .execute(&user, input("Camera bug"))
            .await
            .unwrap();

        assert_eq!(ticket.status, TicketStatus::Pending);
        assert_eq!(ticket.ticket_id.as_str(), "mem-1");
    }

    #[tokio::test]
    async fn test_unknown_kind_rejected() {
        let repo = MemoryRegistryRepository::new();
        let user = UserId::from_counter(1);

        let result = SubmitTicketUseCase::new(Arc::new(repo))
            .execute(
                &user,
                SubmitTicketInput {
                    kind: Some("urgent".to_string()),
                    ..input("Camera bug")
                },
            )
            .await;

        assert!(matches!(result, Err(RegistryError::Validation(_))));
    }

    #[tokio::test]
    async fn test_my_feedback_is_scoped_but_all_is_not() {
        let repo = MemoryRegistryRepository::new();
        let asha = UserId::from_counter(1);
        let vikram = UserId::from_counter(2);

        let submit = SubmitTicketUseCase::new(Arc::new(repo.clone()));
        submit.execute(&asha, input("From Asha")).await.unwrap();
        submit.execute(&vikram, input("From Vikram")).await.unwrap();

        let list = ListTicketsUseCase::new(Arc::new(repo));
        assert_eq!(list.for_user(&asha).await.unwrap().len(), 1);

        // Every authenticated user sees everything; the known gap
        assert_eq!(list.all().await.unwrap().len(), 2);
    }
}
