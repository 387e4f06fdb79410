//! ClassifyUserHandler - Command handler for (re)classifying a user.

use std::sync::Arc;

use tracing::{debug, info};

use crate::config::ClassificationConfig;
use crate::domain::foundation::{
    DomainError, ErrorCode, SerializableDomainEvent, Timestamp, UserId,
};
use crate::domain::personality::{
    Archetype, ArchetypeId, ArchetypeRanking, BehaviorAggregate, PersonalityClassification,
    PersonalityClassified,
};
use crate::ports::{BehaviorAggregateReader, EventPublisher, PersonalityRepository};

use super::{RecomputeDecision, RecomputePolicy};

/// Command to classify a user from their current vote history.
#[derive(Debug, Clone)]
pub struct ClassifyUserCommand {
    pub user_id: UserId,
    /// Recompute even if the policy would keep the stored classification.
    pub force: bool,
    /// Copied onto the published event's metadata.
    pub correlation_id: Option<String>,
}

impl ClassifyUserCommand {
    pub fn new(user_id: UserId) -> Self {
        Self {
            user_id,
            force: false,
            correlation_id: None,
        }
    }

    pub fn forced(user_id: UserId) -> Self {
        Self {
            force: true,
            ..Self::new(user_id)
        }
    }

    pub fn with_correlation_id(mut self, id: impl Into<String>) -> Self {
        self.correlation_id = Some(id.into());
        self
    }
}

/// A freshly computed classification.
#[derive(Debug, Clone)]
pub struct ClassifyUserResult {
    pub classification: PersonalityClassification,
    pub archetype: &'static Archetype,
    pub ranking: ArchetypeRanking,
    pub event: PersonalityClassified,
    pub decision: RecomputeDecision,
    /// Too few votes for the archetype to be shown as final.
    pub is_provisional: bool,
}

/// Outcome of a classify command.
#[derive(Debug, Clone)]
pub enum ClassifyUserOutcome {
    Classified(ClassifyUserResult),
    /// Policy kept the previous classification.
    Unchanged {
        classification: Option<PersonalityClassification>,
        new_votes: u32,
        is_provisional: bool,
    },
}

impl ClassifyUserOutcome {
    /// Archetype the user currently holds, if any.
    pub fn archetype_id(&self) -> Option<ArchetypeId> {
        match self {
            Self::Classified(result) => Some(result.classification.archetype_id),
            Self::Unchanged { classification, .. } => {
                classification.as_ref().map(|c| c.archetype_id)
            }
        }
    }

    pub fn is_provisional(&self) -> bool {
        match self {
            Self::Classified(result) => result.is_provisional,
            Self::Unchanged { is_provisional, .. } => *is_provisional,
        }
    }
}

/// Handler for classifying users.
pub struct ClassifyUserHandler {
    aggregate_reader: Arc<dyn BehaviorAggregateReader>,
    repository: Arc<dyn PersonalityRepository>,
    event_publisher: Arc<dyn EventPublisher>,
    policy: RecomputePolicy,
    min_votes_for_reveal: u32,
}

impl ClassifyUserHandler {
    pub fn new(
        aggregate_reader: Arc<dyn BehaviorAggregateReader>,
        repository: Arc<dyn PersonalityRepository>,
        event_publisher: Arc<dyn EventPublisher>,
        config: &ClassificationConfig,
    ) -> Self {
        Self {
            aggregate_reader,
            repository,
            event_publisher,
            policy: RecomputePolicy::from_config(config),
            min_votes_for_reveal: config.min_votes_for_reveal,
        }
    }

    pub async fn handle(&self, cmd: ClassifyUserCommand) -> Result<ClassifyUserOutcome, DomainError> {
        // 1. Load aggregate and any stored classification
        let aggregate = self
            .aggregate_reader
            .get_aggregate(&cmd.user_id)
            .await?
            .ok_or_else(|| {
                DomainError::new(
                    ErrorCode::AggregateNotFound,
                    format!("No behavior aggregate for user {}", cmd.user_id),
                )
                .with_detail("user_id", cmd.user_id.to_string())
            })?;

        let stored = self.repository.find_by_user(&cmd.user_id).await?;

        // stored record wins over the aggregate's own bookkeeping
        let bookkeeping = match &stored {
            Some(record) => BehaviorAggregate {
                current_type: Some(record.archetype_id),
                votes_analyzed: record.votes_analyzed,
                ..aggregate.clone()
            },
            None => aggregate.clone(),
        };

        let is_provisional = aggregate.total_votes < self.min_votes_for_reveal;

        // 2. Consult policy
        let decision = self.policy.decide(&bookkeeping, cmd.force);
        if let RecomputeDecision::Skip { new_votes } = decision {
            debug!(
                user_id = %cmd.user_id,
                new_votes,
                interval = self.policy.interval_votes(),
                "Classification unchanged"
            );
            return Ok(ClassifyUserOutcome::Unchanged {
                classification: stored,
                new_votes,
                is_provisional,
            });
        }

        // 3. Compute
        let (classification, ranking) = PersonalityClassification::from_aggregate(
            cmd.user_id.clone(),
            &aggregate,
            Timestamp::now(),
        );
        let archetype = classification.archetype_id.archetype();

        // 4. Publish event; nothing is stored unless this succeeds
        let event =
            PersonalityClassified::from_classification(&classification, bookkeeping.current_type);
        let mut envelope = event
            .to_envelope()?
            .with_user_id(cmd.user_id.to_string());
        if let Some(correlation_id) = &cmd.correlation_id {
            envelope = envelope.with_correlation_id(correlation_id.clone());
        }
        self.event_publisher.publish(envelope).await?;

        // 5. Persist
        self.repository.save(&classification).await?;

        info!(
            user_id = %cmd.user_id,
            archetype = %classification.archetype_id,
            previous = ?bookkeeping.current_type,
            votes_analyzed = classification.votes_analyzed,
            is_provisional,
            ?decision,
            "Classified user"
        );

        Ok(ClassifyUserOutcome::Classified(ClassifyUserResult {
            classification,
            archetype,
            ranking,
            event,
            decision,
            is_provisional,
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::EventEnvelope;
    use crate::domain::personality::TraitProfile;
    use async_trait::async_trait;
    use std::collections::HashMap;
    use std::sync::Mutex;

    struct MockAggregateReader {
        aggregates: Mutex<HashMap<UserId, BehaviorAggregate>>,
    }

    impl MockAggregateReader {
        fn new() -> Self {
            Self {
                aggregates: Mutex::new(HashMap::new()),
            }
        }

        fn with_aggregate(user_id: UserId, aggregate: BehaviorAggregate) -> Self {
            let reader = Self::new();
            reader.set(user_id, aggregate);
            reader
        }

        fn set(&self, user_id: UserId, aggregate: BehaviorAggregate) {
            self.aggregates.lock().unwrap().insert(user_id, aggregate);
        }
    }

    #[async_trait]
    impl BehaviorAggregateReader for MockAggregateReader {
        async fn get_aggregate(
            &self,
            user_id: &UserId,
        ) -> Result<Option<BehaviorAggregate>, DomainError> {
            Ok(self.aggregates.lock().unwrap().get(user_id).cloned())
        }
    }

    struct MockPersonalityRepository {
        records: Mutex<HashMap<UserId, PersonalityClassification>>,
        saves: Mutex<u32>,
    }

    impl MockPersonalityRepository {
        fn new() -> Self {
            Self {
                records: Mutex::new(HashMap::new()),
                saves: Mutex::new(0),
            }
        }

        fn save_count(&self) -> u32 {
            *self.saves.lock().unwrap()
        }

        fn get(&self, user_id: &UserId) -> Option<PersonalityClassification> {
            self.records.lock().unwrap().get(user_id).cloned()
        }
    }

    #[async_trait]
    impl PersonalityRepository for MockPersonalityRepository {
        async fn save(&self, classification: &PersonalityClassification) -> Result<(), DomainError> {
            *self.saves.lock().unwrap() += 1;
            self.records
                .lock()
                .unwrap()
                .insert(classification.user_id.clone(), classification.clone());
            Ok(())
        }

        async fn find_by_user(
            &self,
            user_id: &UserId,
        ) -> Result<Option<PersonalityClassification>, DomainError> {
            Ok(self.records.lock().unwrap().get(user_id).cloned())
        }
    }

    struct MockEventPublisher {
        published_events: Mutex<Vec<EventEnvelope>>,
        fail: Mutex<bool>,
    }

    impl MockEventPublisher {
        fn new() -> Self {
            Self {
                published_events: Mutex::new(Vec::new()),
                fail: Mutex::new(false),
            }
        }

        fn failing() -> Self {
            Self {
                published_events: Mutex::new(Vec::new()),
                fail: Mutex::new(true),
            }
        }

        fn recover(&self) {
            *self.fail.lock().unwrap() = false;
        }

        fn published_events(&self) -> Vec<EventEnvelope> {
            self.published_events.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl EventPublisher for MockEventPublisher {
        async fn publish(&self, event: EventEnvelope) -> Result<(), DomainError> {
            if *self.fail.lock().unwrap() {
                return Err(DomainError::new(ErrorCode::InternalError, "bus unavailable"));
            }
            self.published_events.lock().unwrap().push(event);
            Ok(())
        }

        async fn publish_all(&self, events: Vec<EventEnvelope>) -> Result<(), DomainError> {
            for event in events {
                self.publish(event).await?;
            }
            Ok(())
        }
    }

    fn test_user_id() -> UserId {
        UserId::new("test-user-123").unwrap()
    }

    fn agreeable_aggregate() -> BehaviorAggregate {
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

    struct Fixture {
        reader: Arc<MockAggregateReader>,
        repo: Arc<MockPersonalityRepository>,
        publisher: Arc<MockEventPublisher>,
        handler: ClassifyUserHandler,
    }

    fn fixture_with(reader: MockAggregateReader, publisher: MockEventPublisher) -> Fixture {
        let reader = Arc::new(reader);
        let repo = Arc::new(MockPersonalityRepository::new());
        let publisher = Arc::new(publisher);
        let handler = ClassifyUserHandler::new(
            reader.clone(),
            repo.clone(),
            publisher.clone(),
            &ClassificationConfig::default(),
        );
        Fixture {
            reader,
            repo,
            publisher,
            handler,
        }
    }

    fn fixture(aggregate: BehaviorAggregate) -> Fixture {
        fixture_with(
            MockAggregateReader::with_aggregate(test_user_id(), aggregate),
            MockEventPublisher::new(),
        )
    }

    fn expect_classified(outcome: ClassifyUserOutcome) -> ClassifyUserResult {
        match outcome {
            ClassifyUserOutcome::Classified(result) => result,
            other => panic!("expected Classified, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn classifies_first_time_user() {
        let f = fixture(agreeable_aggregate());

        let outcome = f.handler.handle(ClassifyUserCommand::new(test_user_id())).await.unwrap();
        let result = expect_classified(outcome);

        assert_eq!(result.decision, RecomputeDecision::FirstClassification);
        assert_eq!(result.classification.profile, TraitProfile::new(75, 60, 60, 30));
        assert_eq!(result.classification.archetype_id, ArchetypeId::Diplomat);
        assert_eq!(result.archetype.id, ArchetypeId::Diplomat);
        assert_eq!(result.ranking.winner, ArchetypeId::Diplomat);
        assert_eq!(result.classification.votes_analyzed, 40);
        assert!(!result.is_provisional);
    }

    #[tokio::test]
    async fn persists_classification() {
        let f = fixture(agreeable_aggregate());

        f.handler.handle(ClassifyUserCommand::new(test_user_id())).await.unwrap();

        let stored = f.repo.get(&test_user_id()).unwrap();
        assert_eq!(stored.archetype_id, ArchetypeId::Diplomat);
        assert_eq!(stored.votes_analyzed, 40);
    }

    #[tokio::test]
    async fn publishes_personality_classified_event() {
        let f = fixture(agreeable_aggregate());

        f.handler.handle(ClassifyUserCommand::new(test_user_id())).await.unwrap();

        let events = f.publisher.published_events();
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].event_type, "personality.classified.v1");
        assert_eq!(events[0].aggregate_id, "test-user-123");
        assert_eq!(events[0].metadata.user_id.as_deref(), Some("test-user-123"));
        assert_eq!(events[0].payload["archetype_id"], "diplomat");
        assert!(events[0].payload["previous_archetype"].is_null());
    }

    #[tokio::test]
    async fn few_votes_are_provisional() {
        let f = fixture(BehaviorAggregate {
            total_votes: 9,
            majority_count: 9,
            ..Default::default()
        });

        let outcome = f.handler.handle(ClassifyUserCommand::new(test_user_id())).await.unwrap();
        assert!(outcome.is_provisional());
        assert!(outcome.archetype_id().is_some());
    }

    #[tokio::test]
    async fn skips_recompute_below_interval() {
        let f = fixture(agreeable_aggregate());
        f.handler.handle(ClassifyUserCommand::new(test_user_id())).await.unwrap();

        f.reader.set(
            test_user_id(),
            BehaviorAggregate {
                total_votes: 44,
                majority_count: 34,
                ..agreeable_aggregate()
            },
        );
        let outcome = f.handler.handle(ClassifyUserCommand::new(test_user_id())).await.unwrap();

        match outcome {
            ClassifyUserOutcome::Unchanged {
                classification,
                new_votes,
                is_provisional,
            } => {
                assert_eq!(new_votes, 4);
                assert!(!is_provisional);
                assert_eq!(classification.unwrap().archetype_id, ArchetypeId::Diplomat);
            }
            other => panic!("expected Unchanged, got {:?}", other),
        }
        assert_eq!(f.repo.save_count(), 1);
        assert_eq!(f.publisher.published_events().len(), 1);
    }

    #[tokio::test]
    async fn recomputes_once_interval_is_reached() {
        let f = fixture(agreeable_aggregate());
        f.handler.handle(ClassifyUserCommand::new(test_user_id())).await.unwrap();

        f.reader.set(
            test_user_id(),
            BehaviorAggregate {
                total_votes: 45,
                majority_count: 34,
                ..agreeable_aggregate()
            },
        );
        let outcome = f.handler.handle(ClassifyUserCommand::new(test_user_id())).await.unwrap();
        let result = expect_classified(outcome);

        assert_eq!(result.decision, RecomputeDecision::IntervalReached { new_votes: 5 });
        assert_eq!(result.event.previous_archetype, Some(ArchetypeId::Diplomat));
        assert_eq!(f.repo.save_count(), 2);
        assert_eq!(f.repo.get(&test_user_id()).unwrap().votes_analyzed, 45);
    }

    #[tokio::test]
    async fn force_recomputes_without_new_votes() {
        let f = fixture(agreeable_aggregate());
        f.handler.handle(ClassifyUserCommand::new(test_user_id())).await.unwrap();

        let outcome = f
            .handler
            .handle(ClassifyUserCommand::forced(test_user_id()))
            .await
            .unwrap();
        let result = expect_classified(outcome);

        assert_eq!(result.decision, RecomputeDecision::Forced);
        assert!(!result.event.archetype_changed());
    }

    #[tokio::test]
    async fn aggregate_bookkeeping_used_without_stored_record() {
        let f = fixture(BehaviorAggregate {
            current_type: Some(ArchetypeId::Rebel),
            votes_analyzed: 38,
            ..agreeable_aggregate()
        });

        let outcome = f.handler.handle(ClassifyUserCommand::new(test_user_id())).await.unwrap();

        match outcome {
            ClassifyUserOutcome::Unchanged {
                classification,
                new_votes,
                ..
            } => {
                assert!(classification.is_none());
                assert_eq!(new_votes, 2);
            }
            other => panic!("expected Unchanged, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn fails_when_aggregate_missing() {
        let f = fixture_with(MockAggregateReader::new(), MockEventPublisher::new());

        let result = f.handler.handle(ClassifyUserCommand::new(test_user_id())).await;

        let err = result.unwrap_err();
        assert_eq!(err.code, ErrorCode::AggregateNotFound);
        assert_eq!(err.details.get("user_id").map(String::as_str), Some("test-user-123"));
        assert!(f.publisher.published_events().is_empty());
    }

    #[tokio::test]
    async fn publisher_failure_is_propagated() {
        let f = fixture_with(
            MockAggregateReader::with_aggregate(test_user_id(), agreeable_aggregate()),
            MockEventPublisher::failing(),
        );

        let result = f.handler.handle(ClassifyUserCommand::new(test_user_id())).await;

        assert_eq!(result.unwrap_err().code, ErrorCode::InternalError);
    }

    #[tokio::test]
    async fn failed_publish_stores_nothing() {
        let f = fixture_with(
            MockAggregateReader::with_aggregate(test_user_id(), agreeable_aggregate()),
            MockEventPublisher::failing(),
        );

        assert!(f.handler.handle(ClassifyUserCommand::new(test_user_id())).await.is_err());

        assert_eq!(f.repo.save_count(), 0);
        assert!(f.repo.get(&test_user_id()).is_none());
    }

    #[tokio::test]
    async fn retry_after_failed_publish_publishes_event() {
        let f = fixture_with(
            MockAggregateReader::with_aggregate(test_user_id(), agreeable_aggregate()),
            MockEventPublisher::failing(),
        );
        assert!(f.handler.handle(ClassifyUserCommand::new(test_user_id())).await.is_err());

        f.publisher.recover();
        let outcome = f.handler.handle(ClassifyUserCommand::new(test_user_id())).await.unwrap();
        let result = expect_classified(outcome);

        assert_eq!(result.decision, RecomputeDecision::FirstClassification);
        let events = f.publisher.published_events();
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].event_type, "personality.classified.v1");
        assert_eq!(f.repo.save_count(), 1);
    }

    #[tokio::test]
    async fn correlation_id_reaches_event_metadata() {
        let f = fixture(agreeable_aggregate());

        f.handler
            .handle(ClassifyUserCommand::new(test_user_id()).with_correlation_id("req-42"))
            .await
            .unwrap();

        let events = f.publisher.published_events();
        assert_eq!(events[0].metadata.correlation_id.as_deref(), Some("req-42"));
    }

    #[tokio::test]
    async fn correlation_id_absent_by_default() {
        let f = fixture(agreeable_aggregate());

        f.handler.handle(ClassifyUserCommand::new(test_user_id())).await.unwrap();

        assert!(f.publisher.published_events()[0].metadata.correlation_id.is_none());
    }
}
