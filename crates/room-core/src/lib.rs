pub mod ball;
pub mod color;
pub mod config;
pub mod constants;
pub mod controls;
pub mod note;
pub mod picking;
pub mod room;
pub mod scene;
pub mod synth;
pub mod transport;

pub use ball::*;
pub use config::*;
pub use constants::*;
pub use note::*;
pub use picking::*;
pub use room::*;
pub use scene::*;
