//! In-memory conference store using a Tokio mutex.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::Mutex;
use tracing::{debug, info};

use confbook_core::error::AppError;
use confbook_core::result::AppResult;
use confbook_entity::Conference;

use crate::traits::ConferenceStore;

/// In-memory conference store keyed by conference name.
#[derive(Debug, Clone, Default)]
pub struct MemoryConferenceStore {
    /// Protected conference map.
    conferences: Arc<Mutex<HashMap<String, Conference>>>,
}

impl MemoryConferenceStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ConferenceStore for MemoryConferenceStore {
    async fn create(&self, conference: Conference) -> AppResult<()> {
        let mut conferences = self.conferences.lock().await;

        if conferences.contains_key(&conference.name) {
            return Err(AppError::conflict(format!(
                "Conference '{}' already exists",
                conference.name
            )));
        }

        info!(
            conference = %conference.name,
            slots = conference.available_slots,
            "Conference created"
        );
        conferences.insert(conference.name.clone(), conference);
        Ok(())
    }

    async fn find_by_name(&self, name: &str) -> AppResult<Conference> {
        let conferences = self.conferences.lock().await;
        conferences
            .get(name)
            .cloned()
            .ok_or_else(|| AppError::not_found(format!("Conference '{name}' not found")))
    }

    async fn update(&self, conference: Conference) -> AppResult<()> {
        let mut conferences = self.conferences.lock().await;

        let Some(slot) = conferences.get_mut(&conference.name) else {
            return Err(AppError::not_found(format!(
                "Conference '{}' not found",
                conference.name
            )));
        };
        *slot = conference;
        Ok(())
    }

    async fn adjust_slots(&self, name: &str, delta: i64) -> AppResult<Conference> {
        let mut conferences = self.conferences.lock().await;

        let conference = conferences
            .get_mut(name)
            .ok_or_else(|| AppError::not_found(format!("Conference '{name}' not found")))?;

        let next = i64::from(conference.available_slots) + delta;
        if next < 0 {
            return Err(AppError::slot_unavailable(format!(
                "No slots available for conference '{name}'"
            )));
        }
        if next > i64::from(conference.capacity) {
            return Err(AppError::invalid_action(format!(
                "Conference '{name}' cannot exceed its capacity of {}",
                conference.capacity
            )));
        }

        conference.available_slots = u32::try_from(next)
            .map_err(|_| AppError::internal("Slot count out of range"))?;
        debug!(
            conference = %name,
            delta = delta,
            available = conference.available_slots,
            "Slots adjusted"
        );

        Ok(conference.clone())
    }
}
