/*!
 * Process Module
 * Read-only process contract consumed by schedulers and its simulated implementation
 */

pub mod traits;
pub mod types;

pub use traits::{ProcessRef, ProcessView};
pub use types::{ProcessPhase, SimProcess};
