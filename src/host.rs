use std::collections::HashMap;

use log::debug;

use crate::tile::{Icon, TileEvent, TileHandler, TileHost, TileState, TileSurface};

/// Surface that remembers what it was last told to show.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct RecordingSurface {
    pub icon: Option<Icon>,
    pub state: Option<TileState>,
    pub updates: usize,
}

impl TileSurface for RecordingSurface {
    fn set_icon(&mut self, icon: Icon) {
        self.icon = Some(icon);
    }

    fn set_state(&mut self, state: TileState) {
        self.state = Some(state);
    }

    fn update_tile(&mut self) {
        self.updates += 1;
    }
}

/// In-process host: keeps handlers per event and runs them, in the order they
/// were registered, against its surface on the calling thread.
pub struct TileDispatcher<S: TileSurface> {
    surface: S,
    handlers: HashMap<TileEvent, Vec<TileHandler>>,
}

impl<S: TileSurface> TileDispatcher<S> {
    pub fn new(surface: S) -> Self {
        TileDispatcher {
            surface,
            handlers: HashMap::new(),
        }
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    /// Returns how many handlers ran.
    pub fn dispatch(&mut self, event: TileEvent) -> usize {
        let Some(handlers) = self.handlers.get_mut(&event) else {
            debug!("no handler for {:?}", event);
            return 0;
        };
        for handler in handlers.iter_mut() {
            handler(&mut self.surface);
        }
        handlers.len()
    }
}

impl<S: TileSurface> TileHost for TileDispatcher<S> {
    fn register(&mut self, event: TileEvent, handler: TileHandler) {
        self.handlers.entry(event).or_default().push(handler);
    }
}
