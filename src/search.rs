//! Per-session search state.
//!
//! Each search owns its routes. Sessions that run concurrently keep separate
//! `RouteSearch` values; nothing here is shared between them.

use rayon::prelude::*;
use tracing::{debug, warn};

use crate::errors::RouteError;
use crate::route::Route;
use crate::traits::{DirectionsQuery, ElevationProvider, RoutingProvider};

#[derive(Debug, Clone, Default)]
pub struct RouteSearch {
    query: Option<DirectionsQuery>,
    routes: Vec<Route>,
    selected: Option<usize>,
}

impl RouteSearch {
    pub fn new() -> Self {
        Self::default()
    }

    /// Asks the routing provider for routes and replaces the current results.
    ///
    /// On failure the previous results are kept.
    pub fn run<R>(&mut self, routing: &R, query: DirectionsQuery) -> Result<&[Route], RouteError>
    where
        R: RoutingProvider + ?Sized,
    {
        let responses = routing.directions(&query).inspect_err(|err| {
            warn!(origin = %query.origin, destination = %query.destination, %err, "directions request failed");
        })?;

        let routes = responses
            .into_iter()
            .map(|response| Route::new(response, query.mode))
            .collect::<Result<Vec<_>, _>>()?;

        debug!(count = routes.len(), mode = %query.mode, "directions search complete");
        self.routes = routes;
        self.selected = None;
        self.query = Some(query);
        Ok(self.routes.as_slice())
    }

    /// Fetches elevations and derives segments for every route.
    ///
    /// All or nothing: on the first provider failure every route's profile
    /// is cleared, so no route is left holding samples from a failed run.
    pub fn profile<E>(&mut self, elevation: &E) -> Result<(), RouteError>
    where
        E: ElevationProvider + Sync + ?Sized,
    {
        let result = self.routes.par_iter_mut().try_for_each(|route| {
            route.fetch_elevations(elevation, None)?;
            route.derive_segments().map(|_| ())
        });

        if let Err(err) = &result {
            warn!(%err, routes = self.routes.len(), "profiling failed, clearing elevations");
            self.routes.iter_mut().for_each(Route::clear_profile);
        }
        result
    }

    pub fn query(&self) -> Option<&DirectionsQuery> {
        self.query.as_ref()
    }

    pub fn routes(&self) -> &[Route] {
        &self.routes
    }

    pub fn routes_mut(&mut self) -> &mut [Route] {
        &mut self.routes
    }

    pub fn labels(&self) -> Vec<String> {
        self.routes.iter().map(Route::label).collect()
    }

    /// Marks a result as active. Out-of-range indices clear the selection.
    pub fn select(&mut self, index: Option<usize>) -> Option<&Route> {
        self.selected = index.filter(|&i| i < self.routes.len());
        self.selected()
    }

    pub fn selected(&self) -> Option<&Route> {
        self.selected.and_then(|i| self.routes.get(i))
    }

    pub fn selected_index(&self) -> Option<usize> {
        self.selected
    }
}
