use std::rc::Rc;

use log::{debug, info};

use crate::control_file::{ControlFile, Outcome};
use crate::tile_config::{TileConfig, TorchEncoding};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TileState {
    Active,
    Inactive,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Icon {
    FlashlightOn,
    FlashlightOff,
}

/// Events the host delivers to a tile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TileEvent {
    /// The tile became visible and should show current state.
    Attached,
    /// The user tapped the tile.
    Tapped,
}

/// The host's side of a tile: what the controller may set on it.
pub trait TileSurface {
    fn set_icon(&mut self, icon: Icon);
    fn set_state(&mut self, state: TileState);
    /// Pushes the icon and state set so far to the screen.
    fn update_tile(&mut self);
}

pub type TileHandler = Box<dyn FnMut(&mut dyn TileSurface)>;

/// Something that delivers tile events to registered handlers.
pub trait TileHost {
    fn register(&mut self, event: TileEvent, handler: TileHandler);
}

/// Torch toggle driven entirely by the control file's content.
#[derive(Debug, Clone)]
pub struct TorchTile {
    control: ControlFile,
    encoding: TorchEncoding,
}

impl TorchTile {
    pub fn new(control: ControlFile, encoding: TorchEncoding) -> Self {
        TorchTile { control, encoding }
    }

    pub fn from_config(config: &TileConfig) -> Self {
        TorchTile::new(ControlFile::new(&config.control_path), config.encoding.clone())
    }

    pub fn control_file(&self) -> &ControlFile {
        &self.control
    }

    /// Re-reads the control file. Anything but the "on" token, including a
    /// missing file, counts as off.
    pub fn is_enabled(&self) -> bool {
        self.control.read_first_line().value.as_deref() == Some(self.encoding.on.as_str())
    }

    pub fn state(&self) -> TileState {
        if self.is_enabled() {
            TileState::Active
        } else {
            TileState::Inactive
        }
    }

    pub fn on_attached(&self, surface: &mut dyn TileSurface) {
        self.refresh(surface);
    }

    /// Flips the torch, then redraws from whatever the file holds afterwards.
    /// The returned outcome is informational; the redraw happens either way.
    pub fn on_tapped(&self, surface: &mut dyn TileSurface) -> Outcome<bool> {
        let next = if self.is_enabled() {
            &self.encoding.off
        } else {
            &self.encoding.on
        };
        info!("torch tapped, writing {:?} to {}", next, self.control.path().display());
        let outcome = self.control.write(next);
        if !outcome.value {
            debug!("torch write failed, refreshing from file anyway");
        }
        self.refresh(surface);
        outcome
    }

    pub fn refresh(&self, surface: &mut dyn TileSurface) {
        match self.state() {
            TileState::Active => {
                surface.set_icon(Icon::FlashlightOn);
                surface.set_state(TileState::Active);
            }
            TileState::Inactive => {
                surface.set_icon(Icon::FlashlightOff);
                surface.set_state(TileState::Inactive);
            }
        }
        surface.update_tile();
    }

    /// Hands this tile's attach and tap handlers to `host`.
    pub fn register(self, host: &mut impl TileHost) {
        let tile = Rc::new(self);

        let attached = Rc::clone(&tile);
        host.register(
            TileEvent::Attached,
            Box::new(move |surface: &mut dyn TileSurface| attached.on_attached(surface)),
        );
        host.register(
            TileEvent::Tapped,
            Box::new(move |surface: &mut dyn TileSurface| {
                tile.on_tapped(surface);
            }),
        );
    }
}
