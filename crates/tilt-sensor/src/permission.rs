use anyhow::Result;

/// Answer to an orientation permission request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PermissionState {
    Granted,
    Denied,
}

/// Optional capability of sources that must be granted access before they deliver samples.
pub trait PermissionGate: Send {
    fn request(&mut self) -> Result<PermissionState>;
}

/// Gate with a fixed answer, for simulated devices.
#[derive(Debug, Clone, Copy)]
pub struct StaticGate(pub PermissionState);

impl PermissionGate for StaticGate {
    fn request(&mut self) -> Result<PermissionState> {
        tracing::debug!(state = ?self.0, "Permission requested");
        Ok(self.0)
    }
}
