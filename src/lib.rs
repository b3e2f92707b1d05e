//! Mini Arcade - a small 2D arcade game runtime
//!
//! Core modules:
//! - `sim`: deterministic scene simulation (geometry, kinematics, AABB
//!   collision, boundary resolution, entities, scenes)
//! - `game`: loop state machine, frame pacing, command queue
//! - `backend`: rendering seam plus the bundled software backend
//! - `capture`: screenshot path building and PNG encoding
//! - `config`: JSON-backed runtime configuration
//! - `audio`: sound-request port
//! - `ui`: menu overlay helper

pub mod audio;
pub mod backend;
pub mod capture;
pub mod config;
pub mod game;
pub mod sim;
pub mod ui;

pub use audio::{AudioPort, NullAudio};
pub use backend::{
    Backend, Color, DrawStyle, FrameCapture, HeadlessBackend, SpriteHandle, TextStyle,
};
pub use capture::{CaptureError, CapturePathBuilder};
pub use config::{ConfigError, GameConfig};
pub use game::{Command, CommandQueue, FrameContext, Game, GameError, GameStatus};
pub use sim::{
    BouncePolicy, Bounds2D, Entity, EntityId, GeometryError, Motion, RectCollider, Scene, Size2D,
    Velocity2D, Visual,
};
pub use ui::{Menu, MenuItem, MenuStyle};

/// Engine defaults
pub mod consts {
    /// Default logical playfield width
    pub const DEFAULT_WIDTH: f32 = 800.0;
    /// Default logical playfield height
    pub const DEFAULT_HEIGHT: f32 = 600.0;
    /// Default target frame rate
    pub const DEFAULT_FPS: u32 = 60;
    /// Default window/surface title
    pub const DEFAULT_TITLE: &str = "Mini Arcade";
}
