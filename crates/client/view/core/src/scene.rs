//! Scene description types and the frame composer.
//!
//! [`compose`] is the single entry point: it reads the provider's current
//! snapshot and produces the complete frame as one flat element list. There
//! is no incremental diffing — turn-based state changes are rare and the
//! element count is small, so every trigger regenerates the scene from
//! scratch and a whole class of stale-state bugs never exists.

use std::fmt;

use game_board::{BoardProvider, Rack, Rank, Seat, Tile, RACK_SIZE};

use crate::layout;
use crate::layout::rotate_offset;
use crate::rotation::DisplaySlot;
use crate::timeline::{build_columns_for, TimelineSlot};
use crate::visibility::{Exposure, VisibilityEngine};

/// Commands a control element can send back to the session.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display)]
pub enum Command {
    Undo,
    Redo,
    ToggleReveal,
}

/// Identity keys for sprite textures, matching the shipped asset names.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TextureKey {
    BoardBackground,
    BoardLines,
    /// Backing under a face-up tile.
    TileBase,
    /// Back of a face-down tile.
    TileBack,
    /// Marker for an unoccupied field slot.
    TileEmpty,
    /// Face of a revealed tile.
    TileFace(Rank),
    /// Dimmed face drawn over concealed tiles when peeking.
    TileFaceDark(Rank),
    ArrowBack,
    ArrowForward,
}

impl fmt::Display for TextureKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::BoardBackground => write!(f, "board-bg"),
            Self::BoardLines => write!(f, "board-line"),
            Self::TileBase => write!(f, "koma"),
            Self::TileBack => write!(f, "komax"),
            Self::TileEmpty => write!(f, "koma0"),
            Self::TileFace(rank) => write!(f, "koma{rank}"),
            Self::TileFaceDark(rank) => write!(f, "koma{rank}dark"),
            Self::ArrowBack => write!(f, "back"),
            Self::ArrowForward => write!(f, "forward"),
        }
    }
}

/// What an element displays.
#[derive(Clone, Debug, PartialEq)]
pub enum ElementKey {
    Texture(TextureKey),
    Text(String),
    /// Rounded-rectangle chrome of the given size.
    Frame { width: f32, height: f32 },
}

/// Broad grouping of scene elements, for backends that style or layer by
/// role.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ElementKind {
    Backdrop,
    HistoryChrome,
    HistoryLabel,
    HistoryTile,
    FieldTile,
    HandTile,
    MenuChrome,
    MenuLabel,
}

/// One positioned visual element of the frame.
#[derive(Clone, Debug, PartialEq)]
pub struct SceneElement {
    pub kind: ElementKind,
    pub key: ElementKey,
    pub x: f32,
    pub y: f32,
    /// Rotation in radians.
    pub rotation: f32,
    pub scale: f32,
    pub shown: bool,
    pub interactive: bool,
    pub command: Option<Command>,
}

impl SceneElement {
    pub(crate) fn sprite(kind: ElementKind, texture: TextureKey, x: f32, y: f32) -> Self {
        Self {
            kind,
            key: ElementKey::Texture(texture),
            x,
            y,
            rotation: 0.0,
            scale: 1.0,
            shown: true,
            interactive: false,
            command: None,
        }
    }

    pub(crate) fn text(kind: ElementKind, content: impl Into<String>, x: f32, y: f32) -> Self {
        Self {
            kind,
            key: ElementKey::Text(content.into()),
            x,
            y,
            rotation: 0.0,
            scale: 1.0,
            shown: true,
            interactive: false,
            command: None,
        }
    }

    pub(crate) fn frame(kind: ElementKind, width: f32, height: f32, x: f32, y: f32) -> Self {
        Self {
            kind,
            key: ElementKey::Frame { width, height },
            x,
            y,
            rotation: 0.0,
            scale: 1.0,
            shown: true,
            interactive: false,
            command: None,
        }
    }

    pub(crate) fn rotated(mut self, rotation: f32) -> Self {
        self.rotation = rotation;
        self
    }

    pub(crate) fn scaled(mut self, scale: f32) -> Self {
        self.scale = scale;
        self
    }

    pub(crate) fn activates(mut self, command: Command) -> Self {
        self.interactive = true;
        self.command = Some(command);
        self
    }
}

/// Opaque handle to an element inside the current scene. Ids are positional
/// and die with the scene they were created for.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ElementId(pub(crate) usize);

/// One complete frame description.
#[derive(Clone, Debug, PartialEq, Default)]
pub struct Scene {
    elements: Vec<SceneElement>,
}

impl Scene {
    pub fn elements(&self) -> &[SceneElement] {
        &self.elements
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &SceneElement> {
        self.elements.iter()
    }

    pub(crate) fn push(&mut self, element: SceneElement) -> ElementId {
        let id = ElementId(self.elements.len());
        self.elements.push(element);
        id
    }

    pub(crate) fn set_shown(&mut self, id: ElementId, shown: bool) {
        self.elements[id.0].shown = shown;
    }
}

/// Builds one complete frame from the provider's current state.
///
/// Pure in its inputs: the same snapshot, viewer, and reveal flag always
/// yield the same scene, which is what makes the view testable without a
/// backend. The engine's registry is repopulated as a side effect so a later
/// [`VisibilityEngine::toggle`] can rewrite this frame in place.
pub fn compose<P>(provider: &P, viewer: Seat, visibility: &mut VisibilityEngine) -> Scene
where
    P: BoardProvider + ?Sized,
{
    visibility.begin_rebuild();

    let snapshot = provider.snapshot();
    let mut scene = Scene::default();

    push_backdrop(&mut scene);
    push_menu(&mut scene, provider.can_undo(), provider.can_redo());
    push_history(&mut scene, snapshot, viewer, visibility);
    for seat in Seat::ALL {
        push_seat(&mut scene, snapshot.rack(seat), seat, viewer, visibility);
    }

    scene
}

/// Pushes a face element and resolves its shown flag through the engine.
fn push_tracked(
    scene: &mut Scene,
    visibility: &mut VisibilityEngine,
    element: SceneElement,
    exposure: Exposure,
) {
    let id = scene.push(element);
    let shown = visibility.register(id, exposure);
    scene.set_shown(id, shown);
}

fn push_backdrop(scene: &mut Scene) {
    let (cx, cy) = layout::BOARD_CENTER;
    scene.push(
        SceneElement::sprite(ElementKind::Backdrop, TextureKey::BoardBackground, cx, cy)
            .scaled(layout::BOARD_SCALE),
    );
    scene.push(
        SceneElement::sprite(ElementKind::Backdrop, TextureKey::BoardLines, cx, cy)
            .scaled(layout::BOARD_SCALE),
    );
}

fn push_menu(scene: &mut Scene, can_undo: bool, can_redo: bool) {
    let (mx, my) = layout::MENU_ORIGIN;

    let (toggle_w, toggle_h) = layout::MENU_TOGGLE_SIZE;
    scene.push(
        SceneElement::frame(ElementKind::MenuChrome, toggle_w, toggle_h, mx, my)
            .activates(Command::ToggleReveal),
    );
    scene.push(SceneElement::text(
        ElementKind::MenuLabel,
        "非表示切替",
        mx + toggle_w / 2.0,
        my + toggle_h / 2.0,
    ));

    let (button_w, button_h) = layout::MENU_BUTTON_SIZE;
    let mut undo =
        SceneElement::frame(ElementKind::MenuChrome, button_w, button_h, mx + layout::MENU_UNDO_OFFSET, my);
    if can_undo {
        undo = undo.activates(Command::Undo);
    }
    scene.push(undo);
    scene.push(SceneElement::sprite(
        ElementKind::MenuLabel,
        TextureKey::ArrowBack,
        mx + layout::MENU_UNDO_OFFSET + button_w / 2.0,
        my + button_h / 2.0,
    ));

    let mut redo =
        SceneElement::frame(ElementKind::MenuChrome, button_w, button_h, mx + layout::MENU_REDO_OFFSET, my);
    if can_redo {
        redo = redo.activates(Command::Redo);
    }
    scene.push(redo);
    scene.push(SceneElement::sprite(
        ElementKind::MenuLabel,
        TextureKey::ArrowForward,
        mx + layout::MENU_REDO_OFFSET + button_w / 2.0,
        my + button_h / 2.0,
    ));
}

fn push_history(
    scene: &mut Scene,
    snapshot: &game_board::BoardSnapshot,
    viewer: Seat,
    visibility: &mut VisibilityEngine,
) {
    let (hx, hy) = layout::HISTORY_ORIGIN;
    scene.push(SceneElement::frame(
        ElementKind::HistoryChrome,
        layout::HISTORY_FRAME_WIDTH,
        layout::HISTORY_FRAME_HEIGHT,
        hx,
        hy,
    ));

    let inner_x = hx + layout::HISTORY_INNER_X;
    let column_stride = layout::TILE_WIDTH + layout::HISTORY_SLOT_MARGIN;
    let columns = build_columns_for(&snapshot.history);

    for (row, column) in columns.iter().enumerate() {
        let row_y = hy + layout::HISTORY_ROW_STRIDE * row as f32 + layout::HISTORY_HEADER_HEIGHT;
        scene.push(SceneElement::text(
            ElementKind::HistoryLabel,
            column.seat().to_string(),
            inner_x,
            row_y,
        ));

        for (col, slot) in column.slots().iter().enumerate() {
            let slot_x = inner_x + column_stride * col as f32 + layout::HISTORY_NAME_OFFSET;
            match slot {
                TimelineSlot::Placeholder => {}
                TimelineSlot::Pass => {
                    scene.push(SceneElement::text(
                        ElementKind::HistoryLabel,
                        "なし",
                        slot_x,
                        row_y,
                    ));
                }
                TimelineSlot::Play(play) => {
                    // block first so the attack overlaps it
                    if play.face_down {
                        scene.push(
                            SceneElement::sprite(
                                ElementKind::HistoryTile,
                                TextureKey::TileBack,
                                slot_x,
                                row_y,
                            )
                            .scaled(layout::HISTORY_TILE_SCALE),
                        );
                        push_tracked(
                            scene,
                            visibility,
                            SceneElement::sprite(
                                ElementKind::HistoryTile,
                                TextureKey::TileFaceDark(play.block),
                                slot_x,
                                row_y,
                            )
                            .scaled(layout::HISTORY_TILE_SCALE),
                            Exposure::face_down_block(column.seat(), viewer),
                        );
                    } else {
                        for texture in [TextureKey::TileBase, TextureKey::TileFace(play.block)] {
                            scene.push(
                                SceneElement::sprite(
                                    ElementKind::HistoryTile,
                                    texture,
                                    slot_x,
                                    row_y,
                                )
                                .scaled(layout::HISTORY_TILE_SCALE),
                            );
                        }
                    }

                    let attack_x = inner_x
                        + layout::TILE_WIDTH * (col as f32 + 0.5)
                        + layout::HISTORY_SLOT_MARGIN * col as f32
                        + layout::HISTORY_NAME_OFFSET;
                    for texture in [TextureKey::TileBase, TextureKey::TileFace(play.attack)] {
                        scene.push(
                            SceneElement::sprite(
                                ElementKind::HistoryTile,
                                texture,
                                attack_x,
                                row_y,
                            )
                            .scaled(layout::HISTORY_TILE_SCALE),
                        );
                    }
                }
            }
        }
    }

    // round headers; column 0 always carries the maximal slot count, either
    // through its placeholder or by being the dealer
    for col in 0..columns[0].len() {
        scene.push(SceneElement::text(
            ElementKind::HistoryLabel,
            format!("{}順目", col + 1),
            inner_x + column_stride * col as f32 + layout::HISTORY_NAME_OFFSET,
            hy,
        ));
    }
}

fn push_seat(
    scene: &mut Scene,
    rack: &Rack,
    seat: Seat,
    viewer: Seat,
    visibility: &mut VisibilityEngine,
) {
    let slot = DisplaySlot::of(seat, viewer);
    let angle = slot.rotation();
    let (ux, uy) = slot.unit_offset();
    let (cx, cy) = layout::BOARD_CENTER;

    let field_origin = (cx + ux * layout::FIELD_RADIUS, cy + uy * layout::FIELD_RADIUS);
    push_field(scene, rack, seat, viewer, field_origin, angle, visibility);

    let hand_origin = (cx + ux * layout::HAND_RADIUS, cy + uy * layout::HAND_RADIUS);
    push_hand(scene, rack, seat, viewer, hand_origin, angle, visibility);
}

/// Played tiles in a 4×2 grid facing the table centre.
fn push_field(
    scene: &mut Scene,
    rack: &Rack,
    seat: Seat,
    viewer: Seat,
    origin: (f32, f32),
    angle: f32,
    visibility: &mut VisibilityEngine,
) {
    // grid pivot sits at its centre so rotation keeps it on the radius
    let pivot = (layout::TILE_WIDTH * 2.0, layout::TILE_HEIGHT);

    for index in 0..RACK_SIZE {
        let local = (
            (index / 2) as f32 * layout::TILE_WIDTH - pivot.0,
            (index % 2) as f32 * layout::TILE_HEIGHT - pivot.1,
        );
        let (dx, dy) = rotate_offset(angle, local);
        let (x, y) = (origin.0 + dx, origin.1 + dy);

        match rack.field[index] {
            Tile::Empty => {
                scene.push(
                    SceneElement::sprite(ElementKind::FieldTile, TextureKey::TileEmpty, x, y)
                        .rotated(angle),
                );
            }
            Tile::Concealed(_) => {
                scene.push(
                    SceneElement::sprite(ElementKind::FieldTile, TextureKey::TileBack, x, y)
                        .rotated(angle),
                );
                // the true face lives at the same index of the hidden field
                if let Some(rank) = rack.hidden_field[index].rank() {
                    push_tracked(
                        scene,
                        visibility,
                        SceneElement::sprite(
                            ElementKind::FieldTile,
                            TextureKey::TileFaceDark(rank),
                            x,
                            y,
                        )
                        .rotated(angle),
                        Exposure::face_down_block(seat, viewer),
                    );
                }
            }
            Tile::Revealed(rank) => {
                for texture in [TextureKey::TileBase, TextureKey::TileFace(rank)] {
                    scene.push(
                        SceneElement::sprite(ElementKind::FieldTile, texture, x, y).rotated(angle),
                    );
                }
            }
        }
    }
}

/// Hand tiles in a single row; empty slots leave gaps rather than markers.
fn push_hand(
    scene: &mut Scene,
    rack: &Rack,
    seat: Seat,
    viewer: Seat,
    origin: (f32, f32),
    angle: f32,
    visibility: &mut VisibilityEngine,
) {
    let pivot = (layout::TILE_WIDTH * 4.0, layout::TILE_HEIGHT / 2.0);

    for (index, tile) in rack.hand.iter().enumerate() {
        let Some(rank) = tile.rank() else {
            continue;
        };
        let local = (index as f32 * layout::TILE_WIDTH - pivot.0, -pivot.1);
        let (dx, dy) = rotate_offset(angle, local);
        let (x, y) = (origin.0 + dx, origin.1 + dy);

        if seat == viewer {
            for texture in [TextureKey::TileBase, TextureKey::TileFace(rank)] {
                scene.push(
                    SceneElement::sprite(ElementKind::HandTile, texture, x, y).rotated(angle),
                );
            }
        } else {
            scene.push(
                SceneElement::sprite(ElementKind::HandTile, TextureKey::TileBack, x, y)
                    .rotated(angle),
            );
            push_tracked(
                scene,
                visibility,
                SceneElement::sprite(ElementKind::HandTile, TextureKey::TileFaceDark(rank), x, y)
                    .rotated(angle),
                Exposure::hand_tile(seat, viewer),
            );
        }
    }
}
