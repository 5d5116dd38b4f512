/*!
 * Scheduler Traits
 * Seam between the shared timeline and the per-policy selection rules
 */

use super::timeline::Timeline;
use super::types::Dispatch;

/// Policy selection rule driven by the timeline
///
/// The timeline owns the clock and the records; a selector only decides which
/// ready process runs next and for how long.
pub(crate) trait Selector {
    /// Choose the next dispatch at the current clock
    ///
    /// Returning `None` means nothing is runnable yet; the timeline then jumps
    /// the clock to the next arrival.
    fn select(&mut self, timeline: &Timeline) -> Option<Dispatch>;

    /// Observe the timeline after a dispatched slice has been executed
    fn on_slice_end(&mut self, _timeline: &Timeline, _dispatch: Dispatch) {}

    /// Merge back-to-back slices of the same process into one segment
    ///
    /// Only set by policies that re-decide at arbitrary instants, where a new
    /// segment must start only on an actual change of the running process.
    fn coalesces_segments(&self) -> bool {
        false
    }
}
