//! Event-driven view session.
//!
//! One `ViewSession` owns the provider, the visibility state, and the current
//! frame. Every handler runs to completion on the caller's thread; events
//! cannot interleave, so a rebuild is always atomic with respect to the
//! trigger that caused it.

use game_board::{BoardProvider, Seat};
use tracing::debug;

use crate::config::ViewConfig;
use crate::layout::viewport_scale;
use crate::scene::{compose, Command, Scene};
use crate::visibility::VisibilityEngine;

/// Drives the view for one observer across load, history stepping, reveal
/// toggling, and viewport resizes.
pub struct ViewSession<P> {
    provider: P,
    viewer: Seat,
    visibility: VisibilityEngine,
    scene: Scene,
    scale: f32,
}

impl<P: BoardProvider> ViewSession<P> {
    /// Builds the session and composes the initial frame.
    pub fn new(provider: P, config: ViewConfig) -> Self {
        let mut visibility = VisibilityEngine::new(config.reveal_hidden);
        let scene = compose(&provider, config.viewer, &mut visibility);
        debug!(
            viewer = %config.viewer,
            reveal = config.reveal_hidden,
            elements = scene.len(),
            "view session started"
        );
        Self {
            provider,
            viewer: config.viewer,
            visibility,
            scene,
            scale: 1.0,
        }
    }

    /// The frame currently on screen.
    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    pub fn viewer(&self) -> Seat {
        self.viewer
    }

    /// Global transform applied on top of element positions.
    pub fn scale(&self) -> f32 {
        self.scale
    }

    pub fn provider(&self) -> &P {
        &self.provider
    }

    /// Current state of the reveal toggle.
    pub fn reveal(&self) -> bool {
        self.visibility.reveal()
    }

    /// Dispatches a control activation. Returns true if the scene changed.
    pub fn activate(&mut self, command: Command) -> bool {
        match command {
            Command::Undo => self.on_undo(),
            Command::Redo => self.on_redo(),
            Command::ToggleReveal => self.on_toggle_reveal(),
        }
    }

    /// Steps one move back, rebuilding only when the provider could comply.
    pub fn on_undo(&mut self) -> bool {
        if !self.provider.can_undo() {
            debug!(command = %Command::Undo, "capability missing, keeping scene");
            return false;
        }
        self.provider.undo();
        self.rebuild();
        true
    }

    /// Steps one move forward, rebuilding only when the provider could comply.
    pub fn on_redo(&mut self) -> bool {
        if !self.provider.can_redo() {
            debug!(command = %Command::Redo, "capability missing, keeping scene");
            return false;
        }
        self.provider.redo();
        self.rebuild();
        true
    }

    /// Flips the reveal toggle and rewrites the registered faces in place.
    /// Engine state is untouched.
    pub fn on_toggle_reveal(&mut self) -> bool {
        self.visibility.toggle(&mut self.scene);
        debug!(reveal = self.visibility.reveal(), "reveal toggled");
        true
    }

    /// Refits the content to the viewport. Element positions are untouched;
    /// only the global scale changes.
    pub fn on_resize(&mut self, viewport_width: f32, viewport_height: f32) {
        self.scale = viewport_scale(viewport_width, viewport_height);
        debug!(scale = self.scale, "viewport resized");
    }

    fn rebuild(&mut self) {
        self.scene = compose(&self.provider, self.viewer, &mut self.visibility);
        debug!(elements = self.scene.len(), "scene rebuilt");
    }
}
