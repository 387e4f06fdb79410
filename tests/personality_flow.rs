//! End-to-end flow through the in-memory adapters:
//! aggregate -> classify -> store -> compare.

use std::sync::Arc;

use choice_persona::adapters::{InMemoryEventBus, InMemoryPersonalityStore};
use choice_persona::application::{
    ClassifyUserCommand, ClassifyUserHandler, ClassifyUserOutcome, CompareUsersHandler,
    CompareUsersQuery, RecomputeDecision,
};
use choice_persona::config::ClassificationConfig;
use choice_persona::domain::foundation::{ErrorCode, UserId};
use choice_persona::domain::personality::{
    classify, compute_axes, ArchetypeId, Axis, BehaviorAggregate, CompatibilityLabel,
    PersonalityClassified, TraitProfile,
};
use choice_persona::ports::PersonalityRepository;
use proptest::prelude::*;

struct App {
    store: Arc<InMemoryPersonalityStore>,
    bus: Arc<InMemoryEventBus>,
    classify: ClassifyUserHandler,
    compare: CompareUsersHandler,
}

fn app() -> App {
    let store = Arc::new(InMemoryPersonalityStore::new());
    let bus = Arc::new(InMemoryEventBus::new());
    let config = ClassificationConfig::default();

    App {
        classify: ClassifyUserHandler::new(store.clone(), store.clone(), bus.clone(), &config),
        compare: CompareUsersHandler::new(store.clone()),
        store,
        bus,
    }
}

fn user(id: &str) -> UserId {
    UserId::new(id).unwrap()
}

fn alice_votes() -> BehaviorAggregate {
    BehaviorAggregate {
        total_votes: 40,
        majority_count: 30,
        avg_vote_time_seconds: 4.0,
        unique_categories: 6,
        minority_in_skewed: 3,
        skewed_questions: 10,
        ..Default::default()
    }
}

fn bob_votes() -> BehaviorAggregate {
    BehaviorAggregate {
        total_votes: 20,
        majority_count: 2,
        avg_vote_time_seconds: 2.0,
        unique_categories: 5,
        minority_in_skewed: 9,
        skewed_questions: 10,
        ..Default::default()
    }
}

#[tokio::test]
async fn classify_then_compare_two_users() {
    let app = app();
    app.store.put_aggregate(user("alice"), alice_votes()).await;
    app.store.put_aggregate(user("bob"), bob_votes()).await;

    let alice = app.classify.handle(ClassifyUserCommand::new(user("alice"))).await.unwrap();
    let bob = app.classify.handle(ClassifyUserCommand::new(user("bob"))).await.unwrap();

    assert_eq!(alice.archetype_id(), Some(ArchetypeId::Diplomat));
    assert_eq!(bob.archetype_id(), Some(ArchetypeId::Rebel));

    let result = app
        .compare
        .handle(CompareUsersQuery {
            user_id: user("alice"),
            other_user_id: user("bob"),
        })
        .await
        .unwrap();

    assert_eq!(result.user_archetype, ArchetypeId::Diplomat);
    assert_eq!(result.other_archetype, ArchetypeId::Rebel);
    assert_eq!(result.compatibility.overall_score.value(), 60);
    assert_eq!(result.compatibility.label, CompatibilityLabel::Compatible);
    assert_eq!(result.compatibility.common_ground, vec![Axis::Speed, Axis::Diversity]);
    assert_eq!(result.compatibility.differences, vec![Axis::Conformity, Axis::Courage]);

    assert_eq!(app.bus.events_of_type("personality.classified.v1").len(), 2);
}

#[tokio::test]
async fn reclassification_follows_vote_growth() {
    let app = app();
    app.store.put_aggregate(user("carol"), alice_votes()).await;
    app.classify.handle(ClassifyUserCommand::new(user("carol"))).await.unwrap();

    // three new votes: below the default interval of five
    app.store
        .put_aggregate(
            user("carol"),
            BehaviorAggregate {
                total_votes: 43,
                ..alice_votes()
            },
        )
        .await;
    let outcome = app.classify.handle(ClassifyUserCommand::new(user("carol"))).await.unwrap();
    assert!(matches!(outcome, ClassifyUserOutcome::Unchanged { new_votes: 3, .. }));

    // carol turns contrarian
    app.store
        .put_aggregate(
            user("carol"),
            BehaviorAggregate {
                total_votes: 60,
                majority_count: 6,
                minority_in_skewed: 18,
                skewed_questions: 20,
                ..alice_votes()
            },
        )
        .await;
    let outcome = app.classify.handle(ClassifyUserCommand::new(user("carol"))).await.unwrap();

    let result = match outcome {
        ClassifyUserOutcome::Classified(result) => result,
        other => panic!("expected Classified, got {:?}", other),
    };
    assert_eq!(result.decision, RecomputeDecision::IntervalReached { new_votes: 20 });
    assert_eq!(result.event.previous_archetype, Some(ArchetypeId::Diplomat));
    assert!(result.event.archetype_changed());

    let stored = app.store.find_by_user(&user("carol")).await.unwrap().unwrap();
    assert_eq!(stored.votes_analyzed, 60);
    assert_eq!(stored.archetype_id, result.classification.archetype_id);

    let events = app.bus.events_for_aggregate("carol");
    assert_eq!(events.len(), 2);
    let last: PersonalityClassified = events[1].payload_as().unwrap();
    assert_eq!(last.previous_archetype, Some(ArchetypeId::Diplomat));
}

#[tokio::test]
async fn new_user_is_provisional() {
    let app = app();
    app.store.put_aggregate(user("dave"), BehaviorAggregate::default()).await;

    let outcome = app.classify.handle(ClassifyUserCommand::new(user("dave"))).await.unwrap();

    assert!(outcome.is_provisional());
    assert_eq!(outcome.archetype_id(), Some(ArchetypeId::CrowdSurfer));
}

#[tokio::test]
async fn comparing_unclassified_user_fails() {
    let app = app();
    app.store.put_aggregate(user("alice"), alice_votes()).await;
    app.classify.handle(ClassifyUserCommand::new(user("alice"))).await.unwrap();

    let err = app
        .compare
        .handle(CompareUsersQuery {
            user_id: user("alice"),
            other_user_id: user("erin"),
        })
        .await
        .unwrap_err();

    assert_eq!(err.code, ErrorCode::ProfileNotFound);
}

#[tokio::test]
async fn classifying_unknown_user_fails() {
    let app = app();

    let err = app
        .classify
        .handle(ClassifyUserCommand::new(user("ghost")))
        .await
        .unwrap_err();

    assert_eq!(err.code, ErrorCode::AggregateNotFound);
    assert_eq!(app.bus.event_count(), 0);
}

#[tokio::test]
async fn retry_after_bus_failure_publishes_event() {
    let store = Arc::new(InMemoryPersonalityStore::new());
    let config = ClassificationConfig::default();
    store.put_aggregate(user("frank"), alice_votes()).await;

    let full_bus = Arc::new(InMemoryEventBus::with_capacity_limit(0));
    let failing =
        ClassifyUserHandler::new(store.clone(), store.clone(), full_bus.clone(), &config);
    assert!(failing.handle(ClassifyUserCommand::new(user("frank"))).await.is_err());
    assert!(store.find_by_user(&user("frank")).await.unwrap().is_none());

    let bus = Arc::new(InMemoryEventBus::new());
    let healthy = ClassifyUserHandler::new(store.clone(), store.clone(), bus.clone(), &config);
    let outcome = healthy.handle(ClassifyUserCommand::new(user("frank"))).await.unwrap();

    assert!(matches!(outcome, ClassifyUserOutcome::Classified(_)));
    assert_eq!(bus.events_for_aggregate("frank").len(), 1);
    assert!(store.find_by_user(&user("frank")).await.unwrap().is_some());
}

proptest! {
    #[test]
    fn pipeline_is_total_and_consistent(
        total in 0u32..5_000,
        majority in 0u32..5_000,
        seconds in 0.0f64..30.0,
        categories in 0u32..30,
        skewed in 0u32..300,
        minority in 0u32..300,
    ) {
        let aggregate = BehaviorAggregate {
            total_votes: total,
            majority_count: majority.min(total),
            avg_vote_time_seconds: seconds,
            unique_categories: categories,
            minority_in_skewed: minority.min(skewed),
            skewed_questions: skewed,
            ..Default::default()
        };

        let profile = compute_axes(&aggregate);
        let archetype = classify(&profile);

        prop_assert_eq!(archetype.id, classify(&profile).id);
        prop_assert!(archetype.score(&profile) >= 0.0);
        prop_assert!(archetype.score(&profile) <= 100.0);
    }

    #[test]
    fn identical_profiles_are_soulmates(
        c in 0u8..=100, s in 0u8..=100, d in 0u8..=100, k in 0u8..=100,
    ) {
        let profile = TraitProfile::new(c, s, d, k);
        let result = choice_persona::domain::personality::compute_compatibility(&profile, &profile);
        prop_assert_eq!(result.overall_score.value(), 100);
        prop_assert_eq!(result.common_ground, Axis::ALL.to_vec());
        prop_assert!(result.differences.is_empty());
    }
}
