pub mod clock;
pub mod controller;
pub mod free_fly;
pub mod input_adapter;
pub mod orbit;
pub mod orientation;
pub mod playback;
pub mod pointer;
pub mod rig;

pub use clock::Clock;
pub use controller::{Button, Controller};
pub use free_fly::{FreeFlyIntegrator, KeyState, MouseLook, MoveKey};
pub use input_adapter::{PointerDrag, WinitController};
pub use orbit::OrbitController;
pub use orientation::{EulerZyx, HudReadout, MappedOrientation, OrientationMapper, OrientationSample};
pub use playback::{PlaybackClock, PlaybackState};
pub use pointer::{HostRequest, PointerCapture};
pub use rig::{CameraMode, CameraRig, ExitReason};
