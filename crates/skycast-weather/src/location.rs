//! Location update plumbing.
//!
//! Raw device positioning lives outside this crate; whatever produces
//! coordinates forwards them through [`SessionHandle::update_location`].

use std::time::Duration;

use crate::session::SessionHandle;
use crate::types::Coordinate;

/// A single update from the location collaborator. `None` means no fix.
pub type LocationUpdate = Option<Coordinate>;

/// Re-announce a fixed coordinate on a timer, the way a platform location
/// service delivers periodic updates. The first announcement is immediate.
pub fn spawn_fixed_interval(
    coordinate: Coordinate,
    period: Duration,
    handle: SessionHandle,
) -> tokio::task::JoinHandle<()> {
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(period);
        loop {
            interval.tick().await;
            handle.update_location(Some(coordinate));
        }
    })
}
