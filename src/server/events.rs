//! In-memory event listing.

use chrono::{TimeZone, Utc};
use std::collections::VecDeque;
use std::sync::{PoisonError, RwLock};
use uuid::Uuid;

use campus_connect::models::{Event, NewEvent};

/// Created events kept before the oldest ones are evicted
pub const MAX_CREATED_EVENTS: usize = 256;

/// Seeded demo events followed by events created while the server runs.
///
/// Created events are lost on restart and capped at a fixed count; once full,
/// each new event evicts the oldest created one. Seeded events are never evicted.
pub struct EventStore {
    seeded: Vec<Event>,
    created: RwLock<VecDeque<Event>>,
    capacity: usize,
}

impl EventStore {
    pub fn seeded() -> Self {
        Self::with_capacity(MAX_CREATED_EVENTS)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            seeded: demo_events(),
            created: RwLock::new(VecDeque::with_capacity(capacity)),
            capacity,
        }
    }

    pub fn list(&self) -> Vec<Event> {
        let created = self.created.read().unwrap_or_else(PoisonError::into_inner);
        self.seeded.iter().chain(created.iter()).cloned().collect()
    }

    pub fn create(&self, new: NewEvent) -> Event {
        let event = new.into_event(Uuid::new_v4().to_string());
        if self.capacity == 0 {
            return event;
        }

        let mut created = self.created.write().unwrap_or_else(PoisonError::into_inner);
        while created.len() >= self.capacity {
            created.pop_front();
        }
        created.push_back(event.clone());
        event
    }
}

fn demo_events() -> Vec<Event> {
    // (id, title, organizer, location, day of August 2025, hour UTC, description)
    let seeds = [
        (
            "1",
            "Robotics Workshop",
            "Tech Club",
            "Room 204",
            22,
            14,
            "Hands-on robotics session.",
        ),
        (
            "2",
            "Cultural Night",
            "Cultural Committee",
            "Auditorium",
            23,
            19,
            "Music, dance, and more.",
        ),
        (
            "3",
            "Placement Talk",
            "T&P Cell",
            "Seminar Hall",
            24,
            10,
            "Resume and interview tips.",
        ),
    ];

    seeds
        .into_iter()
        .map(|(id, title, organizer, location, day, hour, description)| Event {
            id: id.to_string(),
            title: title.to_string(),
            organizer: organizer.to_string(),
            location: location.to_string(),
            time: Utc.with_ymd_and_hms(2025, 8, day, hour, 0, 0).single(),
            description: description.to_string(),
        })
        .collect()
}
