//! View-projection core for the four-seat tile board.
//!
//! Turns the engine's read-only state into one flat scene description: the
//! timeline strip aligned per seat, each seat's field and hand placed around
//! the viewer, and concealed faces resolved through the reveal toggle. The
//! rendering backend consumes [`scene::Scene`] and knows nothing about the
//! game; the engine is reached only through [`game_board::BoardProvider`].
pub mod config;
pub mod layout;
pub mod rotation;
pub mod scene;
pub mod session;
pub mod timeline;
pub mod visibility;

pub use config::{ConfigError, ViewConfig};
pub use rotation::DisplaySlot;
pub use scene::{
    compose, Command, ElementKey, ElementKind, Scene, SceneElement, TextureKey,
};
pub use session::ViewSession;
pub use timeline::{build_columns, TimelineColumn, TimelineSlot};
pub use visibility::{Exposure, VisibilityEngine};
