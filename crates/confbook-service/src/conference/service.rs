//! Conference registration service.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::info;

use confbook_core::config::BookingConfig;
use confbook_core::error::AppError;
use confbook_core::result::AppResult;
use confbook_entity::Conference;
use confbook_store::ConferenceStore;

/// Request to register a conference.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AddConferenceRequest {
    /// Unique conference name.
    pub name: String,
    /// Start of the conference window.
    pub start_time: DateTime<Utc>,
    /// End of the conference window.
    pub end_time: DateTime<Utc>,
    /// Number of seats.
    pub available_slots: u32,
}

/// Registers conferences after validating their scheduling window.
#[derive(Debug, Clone)]
pub struct ConferenceService {
    /// Conference store.
    conferences: Arc<dyn ConferenceStore>,
    /// Window limits.
    config: BookingConfig,
}

impl ConferenceService {
    /// Creates a new conference service.
    pub fn new(conferences: Arc<dyn ConferenceStore>, config: BookingConfig) -> Self {
        Self {
            conferences,
            config,
        }
    }

    /// Validates and stores a new conference.
    pub async fn add_conference(&self, req: AddConferenceRequest) -> AppResult<Conference> {
        let name = req.name.trim();
        if name.is_empty() {
            return Err(AppError::invalid_input("Conference name must not be blank"));
        }

        if req.end_time <= req.start_time {
            return Err(AppError::invalid_input(
                "Conference end time must be after its start time",
            ));
        }

        let max = self.config.max_conference_duration();
        if req.end_time - req.start_time > max {
            return Err(AppError::invalid_input(format!(
                "Conference may not run longer than {} hours",
                self.config.max_conference_hours
            )));
        }

        let conference = Conference::new(name, req.start_time, req.end_time, req.available_slots);
        self.conferences.create(conference.clone()).await?;

        info!(
            conference = %conference.name,
            start_time = %conference.start_time,
            end_time = %conference.end_time,
            slots = conference.capacity,
            "Conference added"
        );

        Ok(conference)
    }

    /// Looks up a conference by name.
    pub async fn get_conference(&self, name: &str) -> AppResult<Conference> {
        self.conferences.find_by_name(name).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;
    use confbook_core::error::ErrorKind;
    use confbook_store::MemoryConferenceStore;

    fn service() -> ConferenceService {
        ConferenceService::new(
            Arc::new(MemoryConferenceStore::new()),
            BookingConfig::default(),
        )
    }

    fn request(name: &str, hours: i64, slots: u32) -> AddConferenceRequest {
        let start = Utc::now() + Duration::days(1);
        AddConferenceRequest {
            name: name.to_string(),
            start_time: start,
            end_time: start + Duration::hours(hours),
            available_slots: slots,
        }
    }

    #[tokio::test]
    async fn test_add_conference_sets_capacity() {
        let svc = service();
        let conf = svc.add_conference(request("RustConf", 8, 50)).await.unwrap();
        assert_eq!(conf.capacity, 50);
        assert_eq!(conf.available_slots, 50);
        assert_eq!(svc.get_conference("RustConf").await.unwrap(), conf);
    }

    #[tokio::test]
    async fn test_twelve_hours_is_allowed() {
        let svc = service();
        assert!(svc.add_conference(request("Marathon", 12, 1)).await.is_ok());
    }

    #[tokio::test]
    async fn test_thirteen_hours_rejected() {
        let err = service()
            .add_conference(request("TooLong", 13, 1))
            .await
            .unwrap_err();
        assert_eq!(err.kind, ErrorKind::InvalidInput);
    }

    #[tokio::test]
    async fn test_end_before_start_rejected() {
        let mut req = request("Backwards", 2, 1);
        std::mem::swap(&mut req.start_time, &mut req.end_time);
        let err = service().add_conference(req).await.unwrap_err();
        assert_eq!(err.kind, ErrorKind::InvalidInput);
    }

    #[tokio::test]
    async fn test_zero_length_rejected() {
        let mut req = request("Instant", 2, 1);
        req.end_time = req.start_time;
        let err = service().add_conference(req).await.unwrap_err();
        assert_eq!(err.kind, ErrorKind::InvalidInput);
    }

    #[tokio::test]
    async fn test_blank_name_rejected() {
        let err = service()
            .add_conference(request("   ", 2, 1))
            .await
            .unwrap_err();
        assert_eq!(err.kind, ErrorKind::InvalidInput);
    }

    #[tokio::test]
    async fn test_duplicate_name_conflicts() {
        let svc = service();
        svc.add_conference(request("RustConf", 2, 1)).await.unwrap();
        let err = svc.add_conference(request("RustConf", 3, 5)).await.unwrap_err();
        assert_eq!(err.kind, ErrorKind::Conflict);
    }
}
