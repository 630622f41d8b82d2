use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Mutex;
use tracing::{debug, info, instrument};

use super::models::{EventModel, EventResultModel};
use crate::shared::AppError;

/// Trait for event and event-result storage
#[async_trait]
pub trait EventRepository {
    async fn list_events_by_season(&self, season_id: &str) -> Result<Vec<EventModel>, AppError>;
    async fn get_event_result(&self, event_id: &str)
        -> Result<Option<EventResultModel>, AppError>;

    /// Creates or updates an event's schedule entry
    async fn upsert_event(&self, event: &EventModel) -> Result<(), AppError>;

    /// Records or corrects the actual podium for an event. At most one
    /// result row exists per event; a second write replaces the first.
    async fn upsert_event_result(&self, result: &EventResultModel) -> Result<(), AppError>;
}

/// In-memory implementation of EventRepository for development and testing
pub struct InMemoryEventRepository {
    events: Mutex<HashMap<String, EventModel>>,
    results: Mutex<HashMap<String, EventResultModel>>,
}

impl Default for InMemoryEventRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryEventRepository {
    /// Creates a new empty in-memory repository
    pub fn new() -> Self {
        Self {
            events: Mutex::new(HashMap::new()),
            results: Mutex::new(HashMap::new()),
        }
    }

    /// Creates an in-memory repository with pre-populated events
    pub fn with_events(events: Vec<EventModel>) -> Self {
        let mut event_map = HashMap::new();
        for event in events {
            event_map.insert(event.id.clone(), event);
        }

        Self {
            events: Mutex::new(event_map),
            results: Mutex::new(HashMap::new()),
        }
    }
}

#[async_trait]
impl EventRepository for InMemoryEventRepository {
    #[instrument(skip(self))]
    async fn list_events_by_season(&self, season_id: &str) -> Result<Vec<EventModel>, AppError> {
        let events = self.events.lock().unwrap();
        let mut season_events: Vec<EventModel> = events
            .values()
            .filter(|event| event.season_id == season_id)
            .cloned()
            .collect();
        season_events.sort_by(|a, b| a.starts_at.cmp(&b.starts_at));

        debug!(season_id = %season_id, count = season_events.len(), "Listed season events");
        Ok(season_events)
    }

    #[instrument(skip(self))]
    async fn get_event_result(
        &self,
        event_id: &str,
    ) -> Result<Option<EventResultModel>, AppError> {
        let results = self.results.lock().unwrap();
        let result = results.get(event_id).cloned();

        match &result {
            Some(_) => debug!(event_id = %event_id, "Event result found in memory"),
            None => debug!(event_id = %event_id, "No result recorded for event"),
        }

        Ok(result)
    }

    #[instrument(skip(self, event))]
    async fn upsert_event(&self, event: &EventModel) -> Result<(), AppError> {
        debug!(event_id = %event.id, season_id = %event.season_id, "Upserting event in memory");

        let mut events = self.events.lock().unwrap();
        events.insert(event.id.clone(), event.clone());

        Ok(())
    }

    #[instrument(skip(self, result))]
    async fn upsert_event_result(&self, result: &EventResultModel) -> Result<(), AppError> {
        let mut results = self.results.lock().unwrap();
        let replaced = results
            .insert(result.event_id.clone(), result.clone())
            .is_some();

        info!(
            event_id = %result.event_id,
            replaced = replaced,
            "Event result recorded"
        );
        Ok(())
    }
}
