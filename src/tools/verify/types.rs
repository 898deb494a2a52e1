use serde::{Deserialize, Serialize};

use crate::tools::types::ContentSlot;

/// Outcome of verifying a slot sequence.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Verification {
    /// Surviving slots, in their original order.
    pub slots: Vec<ContentSlot>,
    /// Number of image slots that were probed.
    pub probed: usize,
    /// Number of image slots dropped because their probe failed.
    pub dropped: usize,
}

impl Verification {
    /// True when images were probed and none survived.
    pub fn lost_all_images(&self) -> bool {
        self.probed > 0 && self.dropped == self.probed
    }
}
