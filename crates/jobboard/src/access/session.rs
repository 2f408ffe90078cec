use super::domain::Identity;

/// Stub identity/session provider consumed by the routers.
///
/// There is no real authentication behind this seam; implementations hold the
/// current identity in memory for the lifetime of the process.
pub trait SessionProvider: Send + Sync {
    fn current_identity(&self) -> Option<Identity>;
    fn sign_out(&self);
}
