//! Anti-corruption layer between ClearanceOS and the legacy mainframe.
//!
//! Decisions land in the local cache immediately. The mainframe only
//! learns about them when an update is forced or the batch job runs, so
//! the two views diverge in between.
//!
//! ## Auto sync
//!
//! `run_auto_sync` drives batch processing from a timer and stops when the
//! shutdown channel flips to `true`, flushing one last batch on the way out.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use tokio::sync::{watch, RwLock};
use tokio::task::JoinHandle;
use tokio::time;
use tracing::{debug, info, warn};

use crate::domain::adjudication::{AdjudicationDecision, Recommendation};
use crate::domain::foundation::{
    DecisionId, EventId, SerializableDomainEvent, SubjectId, Timestamp,
};
use crate::domain::legacy::{
    build_status_update, AclError, ClearanceStatus, DecisionPublished, LegacyStatus,
    LegacySyncCompleted, SoapEnvelope, SyncTrigger,
};
use crate::ports::{EventPublisher, LegacyMainframe};

/// Timing knobs for the sync buffer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AclSettings {
    /// Lag reported for a freshly published decision.
    pub sync_interval_hours: u32,
    /// Simulated per-record delay inside a batch run.
    pub batch_item_latency: Duration,
}

impl Default for AclSettings {
    fn default() -> Self {
        Self {
            sync_interval_hours: 96,
            batch_item_latency: Duration::ZERO,
        }
    }
}

/// A decision waiting for the next mainframe batch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QueuedUpdate {
    pub subject_id: SubjectId,
    pub decision_id: DecisionId,
    pub recommendation: Recommendation,
    pub queued_at: Timestamp,
    pub envelope: SoapEnvelope,
}

#[derive(Debug, Default)]
struct AclState {
    status_cache: HashMap<SubjectId, LegacyStatus>,
    pending_queue: Vec<QueuedUpdate>,
    last_batch_sync: Option<Timestamp>,
}

/// Dual-status sync buffer in front of the mainframe.
pub struct AntiCorruptionLayer {
    state: RwLock<AclState>,
    mainframe: Arc<dyn LegacyMainframe>,
    event_publisher: Arc<dyn EventPublisher>,
    settings: AclSettings,
}

impl AntiCorruptionLayer {
    pub fn new(
        mainframe: Arc<dyn LegacyMainframe>,
        event_publisher: Arc<dyn EventPublisher>,
        settings: AclSettings,
    ) -> Self {
        Self {
            state: RwLock::new(AclState::default()),
            mainframe,
            event_publisher,
            settings,
        }
    }

    pub fn settings(&self) -> &AclSettings {
        &self.settings
    }

    /// Caches a decision locally and queues it for the mainframe.
    ///
    /// The mainframe value keeps whatever it showed before; for a subject
    /// seen for the first time that is `ACTIVE`. An older queued update for
    /// the same subject is replaced.
    ///
    /// # Errors
    ///
    /// - `EventPublication` if the `DecisionPublished` event is rejected
    pub async fn publish_decision(
        &self,
        subject_id: &SubjectId,
        decision: &AdjudicationDecision,
    ) -> Result<LegacyStatus, AclError> {
        let local_status = ClearanceStatus::from(decision.recommendation);
        let lag = self.settings.sync_interval_hours;
        let queued_at = Timestamp::now();
        let envelope = build_status_update(subject_id, decision, queued_at);

        let status = {
            let mut state = self.state.write().await;
            let status = match state.status_cache.get_mut(subject_id) {
                Some(existing) => {
                    existing.record_local(local_status, lag)?;
                    existing.clone()
                }
                None => {
                    let fresh = LegacyStatus::new(local_status, lag);
                    state.status_cache.insert(subject_id.clone(), fresh.clone());
                    fresh
                }
            };

            state.pending_queue.retain(|u| &u.subject_id != subject_id);
            state.pending_queue.push(QueuedUpdate {
                subject_id: subject_id.clone(),
                decision_id: decision.id,
                recommendation: decision.recommendation,
                queued_at,
                envelope,
            });
            status
        };

        info!(
            subject_id = %subject_id,
            local_status = %status.local_status(),
            mainframe_status = %status.mainframe_status(),
            sync_lag_hours = lag,
            "decision cached locally, mainframe update queued"
        );

        let event = DecisionPublished {
            event_id: EventId::new(),
            subject_id: subject_id.clone(),
            decision_id: decision.id,
            recommendation: decision.recommendation,
            local_status: status.local_status(),
            mainframe_status: status.mainframe_status(),
            published_at: queued_at,
        };
        self.event_publisher.publish(event.to_envelope()).await?;

        Ok(status)
    }

    /// Pushes the queued update for one subject to the mainframe now.
    ///
    /// A subject that is already in sync is returned unchanged.
    ///
    /// # Errors
    ///
    /// - `SubjectNotFound` if no decision was ever published for the subject
    /// - `Transmission` if the mainframe rejects the envelope; the update stays queued
    /// - `EventPublication` if the `LegacySyncCompleted` event is rejected
    pub async fn force_sync(&self, subject_id: &SubjectId) -> Result<LegacyStatus, AclError> {
        let (status, synced_at) = {
            let mut state = self.state.write().await;

            let is_pending = match state.status_cache.get(subject_id) {
                Some(status) => status.is_pending(),
                None => return Err(AclError::SubjectNotFound(subject_id.clone())),
            };
            if !is_pending {
                debug!(subject_id = %subject_id, "force sync skipped, already in sync");
                return state
                    .status_cache
                    .get(subject_id)
                    .cloned()
                    .ok_or_else(|| AclError::SubjectNotFound(subject_id.clone()));
            }

            let queued = state
                .pending_queue
                .iter()
                .position(|u| &u.subject_id == subject_id);
            if let Some(index) = queued {
                let envelope = &state.pending_queue[index].envelope;
                self.mainframe.transmit(envelope).await?;
                state.pending_queue.remove(index);
            }

            let synced_at = Timestamp::now();
            let status = state
                .status_cache
                .get_mut(subject_id)
                .ok_or_else(|| AclError::SubjectNotFound(subject_id.clone()))?;
            status.mark_synced(synced_at)?;
            (status.clone(), synced_at)
        };

        info!(
            subject_id = %subject_id,
            mainframe_status = %status.mainframe_status(),
            "forced sync complete"
        );

        let event = LegacySyncCompleted {
            event_id: EventId::new(),
            subject_id: subject_id.clone(),
            status: status.mainframe_status(),
            trigger: SyncTrigger::Forced,
            synced_at,
        };
        self.event_publisher.publish(event.to_envelope()).await?;

        Ok(status)
    }

    /// Runs the nightly batch: every queued update is transmitted and synced.
    ///
    /// Updates the mainframe rejects stay queued for the next run. Returns
    /// the number of subjects brought in sync.
    pub async fn simulate_batch_processing(&self) -> usize {
        let mut completed = Vec::new();

        {
            let mut state = self.state.write().await;
            let queued = std::mem::take(&mut state.pending_queue);
            let mut retained = Vec::new();
            info!(queue_size = queued.len(), "batch sync started");

            for update in queued {
                if !self.settings.batch_item_latency.is_zero() {
                    time::sleep(self.settings.batch_item_latency).await;
                }

                if let Err(e) = self.mainframe.transmit(&update.envelope).await {
                    warn!(subject_id = %update.subject_id, error = %e, "batch transmission failed, update kept");
                    retained.push(update);
                    continue;
                }

                let synced_at = Timestamp::now();
                let Some(status) = state.status_cache.get_mut(&update.subject_id) else {
                    warn!(subject_id = %update.subject_id, "queued update has no cached status");
                    continue;
                };
                if !status.is_pending() {
                    continue;
                }
                match status.mark_synced(synced_at) {
                    Ok(()) => completed.push(LegacySyncCompleted {
                        event_id: EventId::new(),
                        subject_id: update.subject_id.clone(),
                        status: status.mainframe_status(),
                        trigger: SyncTrigger::Batch,
                        synced_at,
                    }),
                    Err(e) => warn!(subject_id = %update.subject_id, error = %e, "sync state rejected"),
                }
            }

            state.pending_queue = retained;
            state.last_batch_sync = Some(Timestamp::now());
        }

        let processed = completed.len();
        for event in completed {
            if let Err(e) = self.event_publisher.publish(event.to_envelope()).await {
                warn!(subject_id = %event.subject_id, error = %e, "failed to publish sync event");
            }
        }

        info!(processed, "batch sync finished");
        processed
    }

    /// Current dual-status view for a subject.
    pub async fn get_status(&self, subject_id: &SubjectId) -> Option<LegacyStatus> {
        self.state.read().await.status_cache.get(subject_id).cloned()
    }

    /// Number of updates waiting for the mainframe.
    pub async fn sync_queue_size(&self) -> usize {
        self.state.read().await.pending_queue.len()
    }

    /// Updates waiting for the mainframe, oldest first.
    pub async fn pending_updates(&self) -> Vec<QueuedUpdate> {
        self.state.read().await.pending_queue.clone()
    }

    /// When the batch job last ran, if ever.
    pub async fn last_batch_sync(&self) -> Option<Timestamp> {
        self.state.read().await.last_batch_sync
    }

    /// Runs batch processing every `period` until shutdown is signalled.
    ///
    /// The first batch runs one full period after the call.
    pub async fn run_auto_sync(&self, period: Duration, mut shutdown: watch::Receiver<bool>) {
        let mut interval = time::interval_at(time::Instant::now() + period, period);
        info!(period_secs = period.as_secs_f64(), "auto sync started");

        loop {
            tokio::select! {
                changed = shutdown.changed() => {
                    if changed.is_err() || *shutdown.borrow() {
                        self.simulate_batch_processing().await;
                        info!("auto sync stopped");
                        return;
                    }
                }

                _ = interval.tick() => {
                    self.simulate_batch_processing().await;
                }
            }
        }
    }

    /// Spawns `run_auto_sync` on the runtime.
    pub fn spawn_auto_sync(
        self: Arc<Self>,
        period: Duration,
        shutdown: watch::Receiver<bool>,
    ) -> JoinHandle<()> {
        tokio::spawn(async move { self.run_auto_sync(period, shutdown).await })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::{InMemoryEventBus, MockMainframe};
    use crate::domain::adjudication::AdjudicationEngine;
    use crate::domain::foundation::ReportId;
    use crate::domain::incident::{Charge, Incident, Severity};
    use crate::domain::legacy::SyncState;

    fn incident(alcohol: bool, charges: usize) -> Incident {
        let charges = (0..charges)
            .map(|i| Charge::new(format!("Charge {}", i + 1), Severity::Misdemeanor, None).unwrap())
            .collect();
        Incident::new(
            ReportId::new("LEA-2024-0001").unwrap(),
            Incident::parse_date("2024-05-12").unwrap(),
            "John Doe",
            "Routine stop.",
            charges,
            alcohol,
        )
        .unwrap()
    }

    fn revoke_decision() -> AdjudicationDecision {
        AdjudicationEngine::new().adjudicate_case(&incident(true, 2))
    }

    fn grant_decision() -> AdjudicationDecision {
        AdjudicationEngine::new().adjudicate_case(&incident(false, 0))
    }

    struct Fixture {
        acl: Arc<AntiCorruptionLayer>,
        mainframe: Arc<MockMainframe>,
        bus: Arc<InMemoryEventBus>,
    }

    fn fixture() -> Fixture {
        let mainframe = Arc::new(MockMainframe::new());
        let bus = Arc::new(InMemoryEventBus::new());
        let acl = Arc::new(AntiCorruptionLayer::new(
            mainframe.clone(),
            bus.clone(),
            AclSettings::default(),
        ));
        Fixture { acl, mainframe, bus }
    }

    fn subject(n: u32) -> SubjectId {
        SubjectId::new(format!("SUBJ-{:05}", n)).unwrap()
    }

    #[tokio::test]
    async fn publish_updates_local_only() {
        let f = fixture();
        let status = f.acl.publish_decision(&subject(1), &revoke_decision()).await.unwrap();

        assert_eq!(status.local_status(), ClearanceStatus::Revoked);
        assert_eq!(status.mainframe_status(), ClearanceStatus::Active);
        assert_eq!(status.sync_lag_hours(), 96);
        assert_eq!(status.sync_state(), SyncState::Pending);
        assert_eq!(f.acl.sync_queue_size().await, 1);
        assert_eq!(f.mainframe.received_count(), 0);
        assert!(f.bus.has_event("decision.published.v1"));
    }

    #[tokio::test]
    async fn republish_replaces_queue_entry() {
        let f = fixture();
        f.acl.publish_decision(&subject(1), &revoke_decision()).await.unwrap();
        let second = grant_decision();
        f.acl.publish_decision(&subject(1), &second).await.unwrap();

        let pending = f.acl.pending_updates().await;
        assert_eq!(pending.len(), 1);
        assert_eq!(pending[0].decision_id, second.id);
        assert_eq!(pending[0].recommendation, Recommendation::Grant);
    }

    #[tokio::test]
    async fn force_sync_copies_local_to_mainframe() {
        let f = fixture();
        f.acl.publish_decision(&subject(1), &revoke_decision()).await.unwrap();

        let status = f.acl.force_sync(&subject(1)).await.unwrap();

        assert_eq!(status.mainframe_status(), ClearanceStatus::Revoked);
        assert_eq!(status.sync_lag_hours(), 0);
        assert!(status.last_sync().is_some());
        assert_eq!(f.acl.sync_queue_size().await, 0);
        assert_eq!(f.mainframe.received_count(), 1);
        assert_eq!(f.bus.events_of_type("legacy.sync_completed.v1").len(), 1);
    }

    #[tokio::test]
    async fn force_sync_unknown_subject_fails() {
        let f = fixture();
        let err = f.acl.force_sync(&subject(9)).await.unwrap_err();
        assert!(matches!(err, AclError::SubjectNotFound(_)));
    }

    #[tokio::test]
    async fn force_sync_twice_is_a_no_op() {
        let f = fixture();
        f.acl.publish_decision(&subject(1), &revoke_decision()).await.unwrap();
        let first = f.acl.force_sync(&subject(1)).await.unwrap();
        let second = f.acl.force_sync(&subject(1)).await.unwrap();

        assert_eq!(first, second);
        assert_eq!(f.mainframe.received_count(), 1);
    }

    #[tokio::test]
    async fn force_sync_failure_keeps_update_queued() {
        let f = fixture();
        f.acl.publish_decision(&subject(1), &revoke_decision()).await.unwrap();
        f.mainframe.set_offline(true);

        let err = f.acl.force_sync(&subject(1)).await.unwrap_err();
        assert!(matches!(err, AclError::Transmission(_)));

        let status = f.acl.get_status(&subject(1)).await.unwrap();
        assert!(status.is_pending());
        assert_eq!(status.mainframe_status(), ClearanceStatus::Active);
        assert_eq!(f.acl.sync_queue_size().await, 1);
    }

    #[tokio::test]
    async fn batch_syncs_every_queued_subject() {
        let f = fixture();
        f.acl.publish_decision(&subject(1), &revoke_decision()).await.unwrap();
        f.acl.publish_decision(&subject(2), &grant_decision()).await.unwrap();
        assert!(f.acl.last_batch_sync().await.is_none());

        let processed = f.acl.simulate_batch_processing().await;

        assert_eq!(processed, 2);
        assert_eq!(f.acl.sync_queue_size().await, 0);
        assert!(f.acl.last_batch_sync().await.is_some());
        for n in [1, 2] {
            let status = f.acl.get_status(&subject(n)).await.unwrap();
            assert!(!status.is_pending());
            assert!(!status.is_divergent());
        }
    }

    #[tokio::test]
    async fn batch_on_empty_queue_processes_nothing() {
        let f = fixture();
        assert_eq!(f.acl.simulate_batch_processing().await, 0);
        assert!(f.acl.last_batch_sync().await.is_some());
    }

    #[tokio::test]
    async fn batch_keeps_rejected_updates() {
        let f = fixture();
        f.acl.publish_decision(&subject(1), &revoke_decision()).await.unwrap();
        f.mainframe.set_offline(true);

        assert_eq!(f.acl.simulate_batch_processing().await, 0);
        assert_eq!(f.acl.sync_queue_size().await, 1);

        f.mainframe.set_offline(false);
        assert_eq!(f.acl.simulate_batch_processing().await, 1);
    }

    #[tokio::test]
    async fn get_status_unknown_subject_is_none() {
        let f = fixture();
        assert!(f.acl.get_status(&subject(3)).await.is_none());
    }

    #[tokio::test(start_paused = true)]
    async fn auto_sync_runs_batch_on_timer() {
        let f = fixture();
        f.acl.publish_decision(&subject(1), &revoke_decision()).await.unwrap();

        let (tx, rx) = watch::channel(false);
        let handle = Arc::clone(&f.acl).spawn_auto_sync(Duration::from_secs(60), rx);

        time::sleep(Duration::from_secs(61)).await;
        assert_eq!(f.acl.sync_queue_size().await, 0);

        tx.send(true).unwrap();
        handle.await.unwrap();
    }

    #[tokio::test(start_paused = true)]
    async fn auto_sync_flushes_on_shutdown() {
        let f = fixture();
        let (tx, rx) = watch::channel(false);
        let handle = Arc::clone(&f.acl).spawn_auto_sync(Duration::from_secs(3600), rx);

        f.acl.publish_decision(&subject(1), &revoke_decision()).await.unwrap();
        tx.send(true).unwrap();
        handle.await.unwrap();

        assert_eq!(f.acl.sync_queue_size().await, 0);
        assert_eq!(
            f.acl.get_status(&subject(1)).await.unwrap().mainframe_status(),
            ClearanceStatus::Revoked
        );
    }
}
