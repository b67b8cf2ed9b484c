pub mod camera;
pub mod cli;
pub mod core;
pub mod hud;
pub mod loaders;
pub mod renderer;
pub mod scene;
pub mod session;
pub mod types;
pub mod ui;
pub mod window;

pub use camera::{Camera, CameraPose};
pub use session::{Session, ViewerAction};
