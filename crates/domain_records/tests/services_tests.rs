//! Comprehensive tests for the record constraint engine
//!
//! All tests run against isolated in-memory stores.

use core_kernel::CoreError;
use domain_records::{ClaimStatus, ClaimUpdate, PolicyUpdate, PolicyholderUpdate, RecordService};
use rust_decimal_macros::dec;
use test_utils::{
    memory_service, AmountFixtures, DateFixtures, TestClaimBuilder, TestPolicyBuilder,
    TestPolicyholderBuilder,
};

/// Creates a service seeded with policyholder ph1 and policy p1
async fn seeded_service() -> RecordService {
    let service = memory_service();
    service
        .create_policyholder(TestPolicyholderBuilder::new().build())
        .await
        .unwrap();
    service
        .create_policy(TestPolicyBuilder::new().build())
        .await
        .unwrap();
    service
}

mod policyholder_tests {
    use super::*;

    #[tokio::test]
    async fn test_create_and_get_round_trip() {
        let service = memory_service();
        let created = service
            .create_policyholder(TestPolicyholderBuilder::new().build())
            .await
            .unwrap();

        let fetched = service.get_policyholder("ph1").await.unwrap();
        assert_eq!(fetched, created);
        assert_eq!(fetched.name, "Alice");
    }

    #[tokio::test]
    async fn test_duplicate_id_conflicts() {
        let service = memory_service();
        service
            .create_policyholder(TestPolicyholderBuilder::new().build())
            .await
            .unwrap();

        // Same id, different payload: still a conflict
        let err = service
            .create_policyholder(TestPolicyholderBuilder::new().with_name("Bob").build())
            .await
            .unwrap_err();
        assert!(err.is_conflict());
    }

    #[tokio::test]
    async fn test_rejects_invalid_email() {
        let service = memory_service();
        let err = service
            .create_policyholder(
                TestPolicyholderBuilder::new()
                    .with_contact("not-an-email")
                    .build(),
            )
            .await
            .unwrap_err();
        assert_eq!(err.message(), "Invalid email format");
    }

    #[tokio::test]
    async fn test_rejects_over_long_name() {
        let service = memory_service();
        let err = service
            .create_policyholder(
                TestPolicyholderBuilder::new()
                    .with_name("x".repeat(101))
                    .build(),
            )
            .await
            .unwrap_err();
        assert!(err.is_invalid_input());
    }

    #[tokio::test]
    async fn test_partial_update_touches_only_provided_fields() {
        let service = memory_service();
        service
            .create_policyholder(TestPolicyholderBuilder::new().build())
            .await
            .unwrap();

        let updated = service
            .update_policyholder(
                "ph1",
                PolicyholderUpdate {
                    name: Some("Alice B.".to_string()),
                    ..Default::default()
                },
            )
            .await
            .unwrap();
        assert_eq!(updated.name, "Alice B.");
        assert_eq!(updated.contact, "alice@example.com");
    }

    #[tokio::test]
    async fn test_update_missing_policyholder_not_found() {
        let service = memory_service();
        let err = service
            .update_policyholder("ghost", PolicyholderUpdate::default())
            .await
            .unwrap_err();
        assert!(err.is_not_found());
    }

    #[tokio::test]
    async fn test_delete_blocked_while_policies_exist() {
        let service = seeded_service().await;

        let err = service.delete_policyholder("ph1").await.unwrap_err();
        assert!(err.is_conflict());
        assert_eq!(err.message(), "Policyholder has existing policies");

        // After the dependent policy is removed, deletion succeeds
        service.delete_policy("p1").await.unwrap();
        service.delete_policyholder("ph1").await.unwrap();
        assert!(service.get_policyholder("ph1").await.unwrap_err().is_not_found());
    }

    #[tokio::test]
    async fn test_list_is_stable_between_reads() {
        let service = memory_service();
        for id in ["ph2", "ph1", "ph3"] {
            service
                .create_policyholder(TestPolicyholderBuilder::new().with_id(id).build())
                .await
                .unwrap();
        }

        let first = service.list_policyholders().await.unwrap();
        let second = service.list_policyholders().await.unwrap();
        assert_eq!(first, second);
        let ids: Vec<&str> = first.iter().map(|ph| ph.id.as_str()).collect();
        assert_eq!(ids, vec!["ph1", "ph2", "ph3"]);
    }
}

mod policy_tests {
    use super::*;

    #[tokio::test]
    async fn test_create_and_get_round_trip() {
        let service = seeded_service().await;
        let fetched = service.get_policy("p1").await.unwrap();
        assert_eq!(fetched.policy_type, "Home");
        assert_eq!(fetched.coverage_amount, AmountFixtures::coverage());
        assert_eq!(fetched.start_date, DateFixtures::parse("2024-01-01"));
    }

    #[tokio::test]
    async fn test_requires_existing_policyholder() {
        let service = memory_service();
        let err = service
            .create_policy(TestPolicyBuilder::new().with_policyholder_id("ghost").build())
            .await
            .unwrap_err();
        assert!(err.is_not_found());
    }

    #[tokio::test]
    async fn test_rejects_reversed_date_range() {
        let service = seeded_service().await;
        let err = service
            .create_policy(
                TestPolicyBuilder::new()
                    .with_id("p2")
                    .with_start_date("2025-01-01")
                    .with_end_date("2024-01-01")
                    .build(),
            )
            .await
            .unwrap_err();
        assert_eq!(err.message(), "End date must be after start date");
    }

    #[tokio::test]
    async fn test_rejects_equal_start_and_end() {
        let service = seeded_service().await;
        let err = service
            .create_policy(
                TestPolicyBuilder::new()
                    .with_id("p2")
                    .with_start_date("2024-01-01")
                    .with_end_date("2024-01-01")
                    .build(),
            )
            .await
            .unwrap_err();
        assert!(err.is_invalid_input());
    }

    #[tokio::test]
    async fn test_rejects_negative_coverage() {
        let service = seeded_service().await;
        let err = service
            .create_policy(
                TestPolicyBuilder::new()
                    .with_id("p2")
                    .with_coverage_amount(dec!(-1))
                    .build(),
            )
            .await
            .unwrap_err();
        assert_eq!(err.message(), "Amount must be non-negative");
    }

    #[tokio::test]
    async fn test_rejects_malformed_date() {
        let service = seeded_service().await;
        let err = service
            .create_policy(
                TestPolicyBuilder::new()
                    .with_id("p2")
                    .with_start_date("01/01/2024")
                    .build(),
            )
            .await
            .unwrap_err();
        assert_eq!(err.message(), "Invalid date format. Use YYYY-MM-DD");
    }

    #[tokio::test]
    async fn test_duplicate_id_conflicts() {
        let service = seeded_service().await;
        let err = service
            .create_policy(TestPolicyBuilder::new().build())
            .await
            .unwrap_err();
        assert!(err.is_conflict());
    }

    #[tokio::test]
    async fn test_update_date_range_merges_untouched_endpoint() {
        let service = seeded_service().await;

        // Moving start past the stored end must fail
        let err = service
            .update_policy(
                "p1",
                PolicyUpdate {
                    start_date: Some("2025-06-01".to_string()),
                    ..Default::default()
                },
            )
            .await
            .unwrap_err();
        assert!(err.is_invalid_input());

        // Moving both endpoints together succeeds
        let updated = service
            .update_policy(
                "p1",
                PolicyUpdate {
                    start_date: Some("2025-06-01".to_string()),
                    end_date: Some("2026-06-01".to_string()),
                    ..Default::default()
                },
            )
            .await
            .unwrap();
        assert_eq!(updated.start_date, DateFixtures::parse("2025-06-01"));
        assert_eq!(updated.end_date, DateFixtures::parse("2026-06-01"));
    }

    #[tokio::test]
    async fn test_coverage_cannot_drop_below_existing_claim() {
        let service = seeded_service().await;
        service
            .create_claim(TestClaimBuilder::new().with_amount(dec!(60000.00)).build())
            .await
            .unwrap();

        let err = service
            .update_policy(
                "p1",
                PolicyUpdate {
                    coverage_amount: Some(dec!(50000.00)),
                    ..Default::default()
                },
            )
            .await
            .unwrap_err();
        assert_eq!(
            err.message(),
            "Coverage amount is below an existing claim amount"
        );

        // Lowering above the claim is fine
        let updated = service
            .update_policy(
                "p1",
                PolicyUpdate {
                    coverage_amount: Some(dec!(60000.00)),
                    ..Default::default()
                },
            )
            .await
            .unwrap();
        assert_eq!(updated.coverage_amount, dec!(60000.00));
    }

    #[tokio::test]
    async fn test_delete_blocked_while_claims_exist() {
        let service = seeded_service().await;
        service
            .create_claim(TestClaimBuilder::new().build())
            .await
            .unwrap();

        let err = service.delete_policy("p1").await.unwrap_err();
        assert_eq!(err.message(), "Policy has existing claims");

        service.delete_claim("c1").await.unwrap();
        service.delete_policy("p1").await.unwrap();
    }
}

mod claim_tests {
    use super::*;

    #[tokio::test]
    async fn test_create_defaults_status_to_pending() {
        let service = seeded_service().await;
        let claim = service
            .create_claim(TestClaimBuilder::new().build())
            .await
            .unwrap();
        assert_eq!(claim.status, ClaimStatus::Pending);
        assert_eq!(claim.amount, AmountFixtures::claim_within_coverage());
    }

    #[tokio::test]
    async fn test_create_with_explicit_status() {
        let service = seeded_service().await;
        let claim = service
            .create_claim(TestClaimBuilder::new().with_status("Approved").build())
            .await
            .unwrap();
        assert_eq!(claim.status, ClaimStatus::Approved);
    }

    #[tokio::test]
    async fn test_amount_at_coverage_limit_is_accepted() {
        let service = seeded_service().await;
        let claim = service
            .create_claim(
                TestClaimBuilder::new()
                    .with_amount(AmountFixtures::coverage())
                    .build(),
            )
            .await
            .unwrap();
        assert_eq!(claim.amount, AmountFixtures::coverage());
    }

    #[tokio::test]
    async fn test_amount_over_coverage_is_rejected() {
        let service = seeded_service().await;
        let err = service
            .create_claim(
                TestClaimBuilder::new()
                    .with_amount(AmountFixtures::claim_over_coverage())
                    .build(),
            )
            .await
            .unwrap_err();
        assert_eq!(err.message(), "Claim amount exceeds policy coverage");
    }

    #[tokio::test]
    async fn test_requires_existing_policy() {
        let service = seeded_service().await;
        let err = service
            .create_claim(TestClaimBuilder::new().with_policy_id("ghost").build())
            .await
            .unwrap_err();
        assert!(err.is_not_found());
    }

    #[tokio::test]
    async fn test_date_outside_policy_period_is_rejected() {
        let service = seeded_service().await;
        let err = service
            .create_claim(
                TestClaimBuilder::new()
                    .with_date(DateFixtures::out_of_period_date())
                    .build(),
            )
            .await
            .unwrap_err();
        assert_eq!(err.message(), "Claim date outside policy period");
    }

    #[tokio::test]
    async fn test_invalid_status_is_rejected() {
        let service = seeded_service().await;
        let err = service
            .create_claim(TestClaimBuilder::new().with_status("Settled").build())
            .await
            .unwrap_err();
        assert!(err.is_invalid_input());
    }

    #[tokio::test]
    async fn test_status_update_is_free_assignment() {
        let service = seeded_service().await;
        service
            .create_claim(TestClaimBuilder::new().build())
            .await
            .unwrap();

        for status in ["Approved", "Rejected", "Pending", "Approved"] {
            let updated = service
                .update_claim(
                    "c1",
                    ClaimUpdate {
                        status: Some(status.to_string()),
                        ..Default::default()
                    },
                )
                .await
                .unwrap();
            assert_eq!(updated.status.as_str(), status);
        }
    }

    #[tokio::test]
    async fn test_amount_update_rechecks_current_coverage() {
        let service = seeded_service().await;
        service
            .create_claim(TestClaimBuilder::new().build())
            .await
            .unwrap();

        let err = service
            .update_claim(
                "c1",
                ClaimUpdate {
                    amount: Some(AmountFixtures::claim_over_coverage()),
                    ..Default::default()
                },
            )
            .await
            .unwrap_err();
        assert_eq!(err.message(), "Claim amount exceeds policy coverage");

        // A failed update leaves the record untouched
        let claim = service.get_claim("c1").await.unwrap();
        assert_eq!(claim.amount, AmountFixtures::claim_within_coverage());
    }

    #[tokio::test]
    async fn test_date_update_rechecks_policy_period() {
        let service = seeded_service().await;
        service
            .create_claim(TestClaimBuilder::new().build())
            .await
            .unwrap();

        let err = service
            .update_claim(
                "c1",
                ClaimUpdate {
                    date: Some(DateFixtures::out_of_period_date().to_string()),
                    ..Default::default()
                },
            )
            .await
            .unwrap_err();
        assert_eq!(err.message(), "Claim date outside policy period");
    }

    #[tokio::test]
    async fn test_amount_is_stored_with_two_fractional_digits() {
        let service = seeded_service().await;
        let claim = service
            .create_claim(TestClaimBuilder::new().with_amount(dec!(100.005)).build())
            .await
            .unwrap();
        assert_eq!(claim.amount, dec!(100.00));
        assert!(claim.amount.scale() <= 2);
    }

    #[tokio::test]
    async fn test_delete_then_get_not_found() {
        let service = seeded_service().await;
        service
            .create_claim(TestClaimBuilder::new().build())
            .await
            .unwrap();

        service.delete_claim("c1").await.unwrap();
        assert!(matches!(
            service.get_claim("c1").await,
            Err(CoreError::NotFound(_))
        ));
        assert!(service.delete_claim("c1").await.unwrap_err().is_not_found());
    }
}

mod property_tests {
    use super::*;
    use proptest::prelude::*;
    use rust_decimal::Decimal;

    fn run<F: std::future::Future>(future: F) -> F::Output {
        tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .expect("runtime")
            .block_on(future)
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(64))]

        /// Claims at or under the coverage ceiling succeed; above it they
        /// fail with InvalidInput, regardless of the exact amounts.
        #[test]
        fn prop_claim_amount_bounded_by_coverage(
            coverage_cents in 1i64..10_000_000_00,
            claim_cents in 1i64..10_000_000_00,
        ) {
            let coverage = Decimal::new(coverage_cents, 2);
            let amount = Decimal::new(claim_cents, 2);

            let outcome = run(async {
                let service = memory_service();
                service
                    .create_policyholder(TestPolicyholderBuilder::new().build())
                    .await
                    .unwrap();
                service
                    .create_policy(
                        TestPolicyBuilder::new()
                            .with_coverage_amount(coverage)
                            .build(),
                    )
                    .await
                    .unwrap();
                service
                    .create_claim(TestClaimBuilder::new().with_amount(amount).build())
                    .await
            });

            if amount <= coverage {
                prop_assert!(outcome.is_ok());
            } else {
                prop_assert!(matches!(outcome, Err(CoreError::InvalidInput(_))));
            }
        }
    }
}
