//! Verify Tools

mod prober;
mod tests;
pub mod types;

pub use prober::*;
pub use types::*;

use std::sync::Arc;

use crate::tools::batch::batch;
use crate::tools::types::ContentSlot;

pub const DEFAULT_PROBE_CONCURRENCY: usize = 8;

/// Drop image slots whose URL does not resolve.
///
/// Video, markup and info slots pass through unprobed. Probes run with at most
/// `concurrency` in flight; the surviving slots keep their original order.
pub async fn verify_sequence(
    slots: Vec<ContentSlot>,
    prober: Arc<dyn Prober>,
    concurrency: usize,
) -> Verification {
    let probed = slots.iter().filter(|s| s.is_image()).count();

    let checked = batch(slots, concurrency, move |slot| {
        let prober = Arc::clone(&prober);
        async move {
            let keep = match &slot {
                ContentSlot::Image { url } => prober.exists(url).await,
                _ => true,
            };
            (slot, keep)
        }
    })
    .await;

    let slots: Vec<ContentSlot> = checked
        .into_iter()
        .filter_map(|(slot, keep)| keep.then_some(slot))
        .collect();
    let kept = slots.iter().filter(|s| s.is_image()).count();

    Verification {
        slots,
        probed,
        dropped: probed - kept,
    }
}
