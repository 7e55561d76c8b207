//! Wound licking - turning the targeted action into a do-after
//!
//! The action event arrives from the action system; this hands it to the
//! do-after scheduler and marks it handled. Healing on completion is left
//! to whoever subscribes to `WoundLickingDoAfterEvent`.

use core::time::Duration;

use crate::service::do_after::{DoAfterArgs, DoAfterId, DoAfterScheduler};
use crate::service::events::{WoundLickingActionEvent, WoundLickingDoAfterEvent};

/// Start the lick-wound do-after for an action.
///
/// Returns `None` without touching the action if it was already handled or
/// the scheduler rejected the request.
pub fn start_wound_licking<S>(
    action: &mut WoundLickingActionEvent,
    delay: Duration,
    scheduler: &mut S,
) -> Option<DoAfterId>
where
    S: DoAfterScheduler<WoundLickingDoAfterEvent>,
{
    if action.handled {
        return None;
    }

    let event = WoundLickingDoAfterEvent::new(action.performer, Some(action.target));
    let args = DoAfterArgs::new(action.performer, delay, event)
        .with_target(action.target)
        .break_on_move()
        .break_on_damage();

    let id = scheduler.try_start(args)?;
    action.handled = true;
    Some(id)
}
