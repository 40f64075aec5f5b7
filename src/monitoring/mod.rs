/*!
 * Monitoring
 * Scheduling narration sinks and structured tracing
 */

mod platform;
mod tracer;

pub use platform::{Platform, RecordingPlatform, TracingPlatform};
pub use tracer::{init_tracing, span_simulation};
