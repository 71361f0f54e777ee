//! Application state for the web layer.

use std::sync::Arc;

use crate::cache::CachedOsClient;
use crate::directory::CourtDirectory;

/// Shared application state.
///
/// Contains the collaborators needed to handle requests.
#[derive(Clone)]
pub struct AppState {
    /// Cached postcode geocoding client
    pub resolver: Arc<CachedOsClient>,

    /// The court estate and its reference data
    pub directory: Arc<CourtDirectory>,
}

impl AppState {
    /// Create a new app state.
    pub fn new(resolver: CachedOsClient, directory: CourtDirectory) -> Self {
        Self {
            resolver: Arc::new(resolver),
            directory: Arc::new(directory),
        }
    }
}
