//! Application state shared across handlers.

use std::sync::Arc;

use brain_core::Brain;
use memory_service::MemoryService;
use vapi_client::{VapiClient, VoiceClones, VoiceSessions};

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    /// Text chat brain.
    pub brain: Arc<dyn Brain>,
    /// Voice call sessions.
    pub sessions: VoiceSessions,
    /// Voice cloning.
    pub clones: VoiceClones,
    /// Memories and users.
    pub memory: MemoryService,
}

impl AppState {
    /// Create new application state.
    pub fn new(brain: Arc<dyn Brain>, vapi: VapiClient, memory: MemoryService) -> Self {
        Self {
            brain,
            sessions: VoiceSessions::new(vapi.clone()),
            clones: VoiceClones::new(vapi),
            memory,
        }
    }

    /// The voice platform client.
    pub fn vapi(&self) -> &VapiClient {
        self.sessions.client()
    }
}
