// cli.rs - Command-line interface configuration
use clap::Parser;
use std::path::PathBuf;

use crate::core::free_fly::DEFAULT_MOVE_SPEED;
use crate::core::playback::DEFAULT_SPEED;
use crate::loaders::Series;
use crate::scene::ProxyModel;

#[derive(Parser, Debug, Clone)]
#[command(name = "attitude-viewer")]
#[command(about = "Orientation sample playback viewer", long_about = None)]
pub struct Cli {
    /// JSON sample file to import at startup
    #[arg(long)]
    pub data: Option<PathBuf>,

    /// Which sequence of the sample file to play
    #[arg(long, value_enum, default_value_t = Series::Original)]
    pub series: Series,

    /// Initial playback speed multiplier
    #[arg(long, default_value_t = DEFAULT_SPEED)]
    pub speed: f64,

    /// Free camera speed in world units per second
    #[arg(long = "move-speed", default_value_t = DEFAULT_MOVE_SPEED)]
    pub move_speed: f32,

    /// Proxy geometry
    #[arg(long, value_enum, default_value_t = ProxyModel::Wheelchair)]
    pub model: ProxyModel,

    /// Start playing as soon as data is loaded
    #[arg(long)]
    pub autoplay: bool,

    /// Hide the UI panels and log the HUD instead
    #[arg(long = "no-ui", default_value = "false")]
    pub no_ui: bool,
}
