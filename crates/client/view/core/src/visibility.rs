//! Concealed-face disclosure, resolved per viewer.

use game_board::Seat;

use crate::scene::{ElementId, Scene};

/// Disclosure category of a rendered tile face, fixed when the element is
/// created.
///
/// The four cases deliberately form one flat enum rather than nested seat and
/// face-down conditionals, so each can be exercised on its own.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Exposure {
    /// Face-up to everyone; never consults the reveal flag.
    Open,
    /// The viewer's own face-down play. You always know what you played, so
    /// the face stays shown whatever the flag says.
    OwnSecret,
    /// An opponent's face-down play; shown only while revealing.
    ForeignSecret,
    /// An opponent's hand tile; shown only while revealing.
    ForeignHand,
}

impl Exposure {
    /// Category of a face-down block played by `owner`, seen by `viewer`.
    pub fn face_down_block(owner: Seat, viewer: Seat) -> Self {
        if owner == viewer {
            Self::OwnSecret
        } else {
            Self::ForeignSecret
        }
    }

    /// Category of a hand tile owned by `owner`, seen by `viewer`.
    pub fn hand_tile(owner: Seat, viewer: Seat) -> Self {
        if owner == viewer {
            Self::Open
        } else {
            Self::ForeignHand
        }
    }

    /// Whether elements in this category follow the reveal toggle.
    pub const fn tracks_reveal(self) -> bool {
        matches!(self, Self::ForeignSecret | Self::ForeignHand)
    }
}

/// Owns the reveal toggle and the per-frame registry of concealed elements.
///
/// The flag lives for the whole view session; the registry is torn down and
/// repopulated on every rebuild, so element ids never outlive the scene they
/// were created for. Toggling never touches engine state — the only
/// observable effect is the shown flag on registered elements.
#[derive(Clone, Debug, Default)]
pub struct VisibilityEngine {
    reveal: bool,
    registry: Vec<ElementId>,
}

impl VisibilityEngine {
    pub fn new(reveal: bool) -> Self {
        Self {
            reveal,
            registry: Vec::new(),
        }
    }

    /// Current state of the reveal toggle.
    pub fn reveal(&self) -> bool {
        self.reveal
    }

    /// Number of elements following the toggle in the current scene.
    pub fn registered(&self) -> usize {
        self.registry.len()
    }

    /// Drops the previous frame's registry. The composer calls this once at
    /// the start of every rebuild.
    pub(crate) fn begin_rebuild(&mut self) {
        self.registry.clear();
    }

    /// Resolves the shown flag for a newly created face element and records
    /// it when its category follows the toggle. Returns the shown state.
    pub(crate) fn register(&mut self, id: ElementId, exposure: Exposure) -> bool {
        match exposure {
            Exposure::Open | Exposure::OwnSecret => true,
            Exposure::ForeignSecret | Exposure::ForeignHand => {
                self.registry.push(id);
                self.reveal
            }
        }
    }

    /// Inverts the reveal flag and rewrites every registered element's shown
    /// state in place. Applying it twice restores the previous scene.
    pub fn toggle(&mut self, scene: &mut Scene) {
        self.reveal = !self.reveal;
        for &id in &self.registry {
            scene.set_shown(id, self.reveal);
        }
    }
}
