use std::future::Future;

use crate::kakao::{PlaceSearch, HOSPITAL_CATEGORY};
use crate::location::{LocationProvider, PositionError, PositionOptions};
use crate::model::{Coordinate, Place};
use crate::routing::RouteFinder;
use crate::state::ScreenState;

/// Screen controller for the hospital list: permission, location fix,
/// nearby-hospital search, selection and route lookup.
///
/// Failures never surface to the caller. A denied permission is logged and
/// the flow continues; a failed fix or search leaves the list empty; a
/// failed route lookup leaves the previous route in place. The user retries
/// by re-entering the screen.
pub struct HospitalFinder<L, S, R> {
    location: L,
    places: S,
    routing: R,
    state: ScreenState,
    current_location: Option<Coordinate>,
}

impl<L, S, R> HospitalFinder<L, S, R>
where
    L: LocationProvider,
    S: PlaceSearch,
    R: RouteFinder + Clone,
{
    pub fn new(location: L, places: S, routing: R, state: ScreenState) -> HospitalFinder<L, S, R> {
        HospitalFinder {
            location,
            places,
            routing,
            state,
            current_location: None,
        }
    }

    /// The fix captured by the last successful [`HospitalFinder::activate`].
    pub fn current_location(&self) -> Option<Coordinate> {
        self.current_location
    }

    /// Runs the screen-mount flow: permission, one-shot high-accuracy fix
    /// with a 15 second cap, then the hospital search centered on the fix.
    /// The result write is dropped if the screen deactivated meanwhile.
    pub async fn activate(&mut self) {
        if !self.location.request_permission().await {
            log::warn!("fine-location permission denied, requesting position anyway");
        }

        let epoch = self.state.epoch();
        let options = PositionOptions::default();
        let position = match tokio::time::timeout(
            options.timeout,
            self.location.current_position(options),
        )
        .await
        {
            Ok(result) => result,
            Err(_) => Err(PositionError::timeout()),
        };

        let center = match position {
            Ok(coordinate) => coordinate,
            Err(error) => {
                log::warn!("location unavailable ({}): {}", error.code, error.message);
                return;
            }
        };

        self.current_location = Some(center);
        let hospitals = self.search_places(center).await;
        if !self.state.set_places_if(epoch, hospitals) {
            log::debug!("hospital results discarded, screen deactivated during search");
        }
    }

    /// Searches hospitals around `center`. A transport error or non-2xx
    /// status is logged and yields an empty list, never an error.
    pub async fn search_places(&self, center: Coordinate) -> Vec<Place> {
        match self.places.search(HOSPITAL_CATEGORY, center).await {
            Ok(documents) => documents,
            Err(error) => {
                log::error!("hospital search failed: {error}");
                Vec::new()
            }
        }
    }

    /// Marks `place` as selected and opens the sheet, then hands back the
    /// route lookup for the caller to drive. The selection write completes
    /// before this returns; the lookup races freely against everything else.
    ///
    /// Returns `None` when no location fix exists yet, in which case the
    /// selection still happens but no lookup is issued.
    pub fn select_place(&self, place: &Place) -> Option<impl Future<Output = ()>> {
        self.state.select(&place.id);

        let origin = match self.current_location {
            Some(coordinate) => coordinate,
            None => {
                log::warn!("route lookup for {} skipped, no location fix yet", place.id);
                return None;
            }
        };

        let destination = place.coordinate();
        let routing = self.routing.clone();
        let state = self.state.clone();
        let epoch = state.epoch();

        Some(async move {
            match routing.find(origin, destination).await {
                Ok(path) => {
                    if !state.set_route_if(epoch, path) {
                        log::debug!("route discarded, screen deactivated during lookup");
                    }
                }
                // prior route stays as-is
                Err(error) => log::error!("route lookup failed: {error}"),
            }
        })
    }

    /// Screen-unmount cleanup: clears the route and the hospital list and
    /// invalidates in-flight writes. Safe to call repeatedly.
    pub fn deactivate(&mut self) {
        self.state.clear_screen();
    }
}
