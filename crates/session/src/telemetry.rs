//! Observability hook for best-effort persistence.

use portale_types::PortaleError;

/// Receives persistence failures that the session store swallows.
///
/// Session persistence is best-effort by contract: a failed write or delete
/// must never propagate to the caller. This hook is the one place those
/// failures remain observable, and it is injectable so tests can assert
/// they were recorded.
pub trait SessionTelemetry: Send + Sync {
    /// Called once per failed storage operation.
    ///
    /// `op` names the operation, e.g. `"save.token"` or `"clear.user"`.
    fn persistence_failure(&self, op: &str, err: &PortaleError);
}

/// Default telemetry that logs failures through `tracing`.
#[derive(Debug, Default)]
pub struct TracingTelemetry;

impl SessionTelemetry for TracingTelemetry {
    fn persistence_failure(&self, op: &str, err: &PortaleError) {
        tracing::warn!(op, error = %err, "session persistence failure");
    }
}
