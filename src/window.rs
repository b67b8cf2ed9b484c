use log::{debug, warn};
use std::sync::Arc;
use winit::window::{CursorGrabMode, Window as WinitWindow};

use crate::core::pointer::HostRequest;

/// Wrapper around winit Window that executes pointer requests
pub struct Window {
    inner: Arc<WinitWindow>,
}

impl Window {
    pub fn new(window: Arc<WinitWindow>) -> Self {
        Self { inner: window }
    }

    pub fn inner(&self) -> &Arc<WinitWindow> {
        &self.inner
    }

    /// Carry out one pointer request.
    ///
    /// Returns the host's answer to an acquire: `Some(true)` granted,
    /// `Some(false)` denied. Releases have no answer.
    pub fn apply_host_request(&self, request: HostRequest) -> Option<bool> {
        match request {
            HostRequest::AcquirePointer => Some(self.grab_pointer()),
            HostRequest::ReleasePointer => {
                self.release_pointer();
                None
            }
        }
    }

    /// Not every platform supports a locked cursor; confined is close enough
    /// because mouse look reads raw device motion.
    fn grab_pointer(&self) -> bool {
        let grabbed = self
            .inner
            .set_cursor_grab(CursorGrabMode::Locked)
            .or_else(|e| {
                debug!("locked cursor unavailable ({:?}), trying confined", e);
                self.inner.set_cursor_grab(CursorGrabMode::Confined)
            });

        match grabbed {
            Ok(()) => {
                self.inner.set_cursor_visible(false);
                true
            }
            Err(e) => {
                warn!("pointer capture failed: {:?}", e);
                self.inner.set_cursor_visible(true);
                false
            }
        }
    }

    pub fn release_pointer(&self) {
        if let Err(e) = self.inner.set_cursor_grab(CursorGrabMode::None) {
            debug!("cursor release failed: {:?}", e);
        }
        self.inner.set_cursor_visible(true);
    }

    pub fn request_redraw(&self) {
        self.inner.request_redraw();
    }
}
