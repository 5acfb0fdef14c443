use std::sync::{Arc, Mutex};

use crate::model::{Place, RoutePath};

/// Display state of the companion bottom-sheet panel.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Sheet {
    pub is_open: bool,
    pub index: i32,
}

#[derive(Default)]
struct Cells {
    selected_place_id: Option<String>,
    sheet: Sheet,
    route_path: Option<RoutePath>,
    places: Vec<Place>,
    epoch: u64,
}

/// Shared view state read by sibling screens: the selected place, the sheet
/// visibility, the last computed route and the current search results.
///
/// Handles are cheap clones of one underlying store. Writes that come back
/// from async work go through the `*_if` methods, which drop the write when
/// [`ScreenState::clear_screen`] has run since the epoch was sampled. That
/// keeps a search or route lookup that outlives its screen from resurrecting
/// stale results.
#[derive(Clone, Default)]
pub struct ScreenState {
    inner: Arc<Mutex<Cells>>,
}

impl ScreenState {
    pub fn new() -> ScreenState {
        ScreenState::default()
    }

    /// Current write generation. Sample before suspending, pass to `*_if`.
    pub fn epoch(&self) -> u64 {
        self.lock().epoch
    }

    /// Marks `id` as the selection and opens the sheet at index 0. Both
    /// cells change under a single lock acquisition.
    pub fn select(&self, id: &str) {
        let mut cells = self.lock();
        cells.selected_place_id = Some(id.to_string());
        cells.sheet = Sheet { is_open: true, index: 0 };
    }

    /// Stores search results unless the screen was cleared after `epoch`.
    /// Returns whether the write took effect.
    pub fn set_places_if(&self, epoch: u64, places: Vec<Place>) -> bool {
        let mut cells = self.lock();
        if cells.epoch != epoch {
            return false;
        }
        cells.places = places;
        true
    }

    /// Overwrites the last computed route unless the screen was cleared
    /// after `epoch`. Returns whether the write took effect.
    pub fn set_route_if(&self, epoch: u64, path: RoutePath) -> bool {
        let mut cells = self.lock();
        if cells.epoch != epoch {
            return false;
        }
        cells.route_path = Some(path);
        true
    }

    /// Clears the route and the search results together and invalidates any
    /// outstanding epoch. Idempotent.
    pub fn clear_screen(&self) {
        let mut cells = self.lock();
        cells.route_path = None;
        cells.places.clear();
        cells.epoch += 1;
    }

    pub fn selected_place_id(&self) -> Option<String> {
        self.lock().selected_place_id.clone()
    }

    pub fn sheet(&self) -> Sheet {
        self.lock().sheet
    }

    pub fn route_path(&self) -> Option<RoutePath> {
        self.lock().route_path.clone()
    }

    pub fn places(&self) -> Vec<Place> {
        self.lock().places.clone()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Cells> {
        self.inner.lock().expect("screen state lock poisoned")
    }
}
