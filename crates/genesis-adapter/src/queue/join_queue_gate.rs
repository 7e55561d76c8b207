//! JoinQueueGate - the process-wide join-queue implementation
//!
//! Holds the enabled flag from configuration and the two player counts.
//! Reads are lock-free. The counts are written by connection handling
//! through `report_counts`; the gate itself makes no admission decisions.

use std::sync::atomic::{AtomicU8, AtomicUsize, Ordering};

use genesis_domain::service::join_queue::{
    JoinQueueError, JoinQueuePhase, ServerJoinQueueManager,
};
use shared::JoinQueueConfig;
use tracing::{debug, info};

const CREATED: u8 = 0;
const INITIALIZING: u8 = 1;
const INITIALIZED: u8 = 2;
const POST_INITIALIZING: u8 = 3;
const POST_INITIALIZED: u8 = 4;

/// Join-queue gate
#[derive(Debug)]
pub struct JoinQueueGate {
    enabled: bool,
    queued: AtomicUsize,
    connected: AtomicUsize,
    phase: AtomicU8,
}

impl JoinQueueGate {
    /// Create a gate in the `Created` phase
    pub fn new(enabled: bool) -> Self {
        Self {
            enabled,
            queued: AtomicUsize::new(0),
            connected: AtomicUsize::new(0),
            phase: AtomicU8::new(CREATED),
        }
    }

    pub fn from_config(config: &JoinQueueConfig) -> Self {
        Self::new(config.enabled)
    }

    /// Current lifecycle phase.
    ///
    /// A phase that is still running reports the phase before it.
    pub fn phase(&self) -> JoinQueuePhase {
        match self.phase.load(Ordering::Acquire) {
            CREATED | INITIALIZING => JoinQueuePhase::Created,
            INITIALIZED | POST_INITIALIZING => JoinQueuePhase::Initialized,
            _ => JoinQueuePhase::PostInitialized,
        }
    }

    /// Publish the latest counts from connection handling
    pub fn report_counts(&self, queued: usize, connected: usize) {
        self.queued.store(queued, Ordering::Release);
        self.connected.store(connected, Ordering::Release);
        debug!(queued, connected, "join queue counts reported");
    }
}

impl ServerJoinQueueManager for JoinQueueGate {
    fn is_enabled(&self) -> bool {
        self.enabled
    }

    fn player_in_queue_count(&self) -> usize {
        self.queued.load(Ordering::Acquire)
    }

    fn actual_players_count(&self) -> usize {
        self.connected.load(Ordering::Acquire)
    }

    fn initialize(&self) -> Result<(), JoinQueueError> {
        self.phase
            .compare_exchange(CREATED, INITIALIZING, Ordering::AcqRel, Ordering::Acquire)
            .map_err(|_| JoinQueueError::AlreadyInitialized)?;

        self.phase.store(INITIALIZED, Ordering::Release);
        info!(enabled = self.enabled, "join queue initialized");
        Ok(())
    }

    fn post_initialize(&self) -> Result<(), JoinQueueError> {
        self.phase
            .compare_exchange(
                INITIALIZED,
                POST_INITIALIZING,
                Ordering::AcqRel,
                Ordering::Acquire,
            )
            .map_err(|current| match current {
                CREATED | INITIALIZING => JoinQueueError::NotInitialized,
                _ => JoinQueueError::AlreadyPostInitialized,
            })?;

        self.phase.store(POST_INITIALIZED, Ordering::Release);
        info!(enabled = self.enabled, "join queue ready");
        Ok(())
    }
}
