//! ForceSyncHandler - Operator-triggered mainframe update for one subject.

use std::sync::Arc;

use crate::application::AntiCorruptionLayer;
use crate::domain::foundation::SubjectId;
use crate::domain::legacy::{AclError, LegacyStatus};

/// Command to push a subject's queued update immediately.
#[derive(Debug, Clone)]
pub struct ForceSyncCommand {
    pub subject_id: SubjectId,
}

/// Handler for forced syncs.
pub struct ForceSyncHandler {
    acl: Arc<AntiCorruptionLayer>,
}

impl ForceSyncHandler {
    pub fn new(acl: Arc<AntiCorruptionLayer>) -> Self {
        Self { acl }
    }

    pub async fn handle(&self, cmd: ForceSyncCommand) -> Result<LegacyStatus, AclError> {
        self.acl.force_sync(&cmd.subject_id).await
    }
}
