//! Join Queue - admission gate contract for incoming players
//!
//! The server picks exactly one implementation at startup. Connection
//! handling reads the gate continuously; the two startup phases run once,
//! in order:
//!
//! ```text
//! Created ──initialize()──▶ Initialized ──post_initialize()──▶ PostInitialized
//! ```

/// Lifecycle phase of a join-queue gate
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum JoinQueuePhase {
    Created,
    Initialized,
    PostInitialized,
}

impl core::fmt::Display for JoinQueuePhase {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let name = match self {
            JoinQueuePhase::Created => "created",
            JoinQueuePhase::Initialized => "initialized",
            JoinQueuePhase::PostInitialized => "post-initialized",
        };
        f.write_str(name)
    }
}

/// Lifecycle ordering violations
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum JoinQueueError {
    /// `initialize` was called a second time
    AlreadyInitialized,
    /// `post_initialize` was called before `initialize`
    NotInitialized,
    /// `post_initialize` was called a second time
    AlreadyPostInitialized,
}

impl core::fmt::Display for JoinQueueError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            JoinQueueError::AlreadyInitialized => {
                write!(f, "Join queue is already initialized")
            }
            JoinQueueError::NotInitialized => {
                write!(f, "Join queue post-initialization requires initialization first")
            }
            JoinQueueError::AlreadyPostInitialized => {
                write!(f, "Join queue is already post-initialized")
            }
        }
    }
}

impl std::error::Error for JoinQueueError {}

/// Point-in-time view of a gate
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct JoinQueueStatus {
    pub enabled: bool,
    pub queued: usize,
    pub connected: usize,
}

/// Join-queue gate contract
///
/// Implementations must be safe to read from many connection handlers at
/// once. How the counts change is up to the implementation.
pub trait ServerJoinQueueManager: Send + Sync {
    /// Whether the queue is gating admissions at all
    fn is_enabled(&self) -> bool;

    /// Players currently waiting in the queue
    fn player_in_queue_count(&self) -> usize;

    /// Players actually connected and playing
    fn actual_players_count(&self) -> usize;

    /// Run once at process start
    fn initialize(&self) -> Result<(), JoinQueueError>;

    /// Run once after every startup dependency is ready
    fn post_initialize(&self) -> Result<(), JoinQueueError>;

    /// Snapshot of the three read-only properties
    fn status(&self) -> JoinQueueStatus {
        JoinQueueStatus {
            enabled: self.is_enabled(),
            queued: self.player_in_queue_count(),
            connected: self.actual_players_count(),
        }
    }
}
