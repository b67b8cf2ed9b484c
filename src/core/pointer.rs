//! Pointer-capture protocol between the camera rig and the host window.
//!
//! The rig never grabs the cursor itself. It queues [`HostRequest`]s, the host
//! executes them, and the outcome comes back as an acknowledge, a denial, or
//! a later revocation.

/// Where the capture handshake currently stands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PointerCapture {
    /// Not held and not asked for
    #[default]
    Idle,
    /// Asked for, host has not answered yet
    Requested,
    /// Host confirmed exclusive mouse deltas
    Active,
}

impl PointerCapture {
    pub fn is_active(self) -> bool {
        self == PointerCapture::Active
    }
}

/// Work the host must perform on the rig's behalf
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HostRequest {
    AcquirePointer,
    ReleasePointer,
}
