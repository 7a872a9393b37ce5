//! In-memory booking store.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use crate::domain::booking::Booking;
use crate::domain::foundation::{BookingId, UserId};
use crate::ports::{BookingStore, StoreError};

/// Mutex-guarded `BookingStore`.
#[derive(Debug, Clone, Default)]
pub struct InMemoryBookingStore {
    bookings: Arc<Mutex<HashMap<BookingId, Booking>>>,
    fail_insert: Arc<Mutex<Option<String>>>,
}

impl InMemoryBookingStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Makes every insert fail with the given backend error (test
    /// setup for partial-failure paths).
    pub fn failing_insert(message: impl Into<String>) -> Self {
        let store = Self::new();
        *store.fail_insert.lock().unwrap() = Some(message.into());
        store
    }

    /// Number of stored bookings.
    pub fn booking_count(&self) -> usize {
        self.bookings.lock().unwrap().len()
    }
}

#[async_trait]
impl BookingStore for InMemoryBookingStore {
    async fn insert(&self, booking: &Booking) -> Result<(), StoreError> {
        if let Some(message) = self.fail_insert.lock().unwrap().clone() {
            return Err(StoreError::backend(message));
        }
        self.bookings
            .lock()
            .unwrap()
            .insert(booking.id, booking.clone());
        Ok(())
    }

    async fn find(&self, id: &BookingId) -> Result<Option<Booking>, StoreError> {
        Ok(self.bookings.lock().unwrap().get(id).cloned())
    }

    async fn update(&self, booking: &Booking) -> Result<(), StoreError> {
        let mut bookings = self.bookings.lock().unwrap();
        if !bookings.contains_key(&booking.id) {
            return Err(StoreError::NotFound);
        }
        bookings.insert(booking.id, booking.clone());
        Ok(())
    }

    async fn list_for_user(&self, user_id: &UserId) -> Result<Vec<Booking>, StoreError> {
        Ok(self
            .bookings
            .lock()
            .unwrap()
            .values()
            .filter(|b| &b.user_id == user_id)
            .cloned()
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::booking::Schedule;
    use crate::domain::foundation::MeetingId;

    fn booking(user: &str) -> Booking {
        let schedule = Schedule::new("2025-01-10", "09:00 AM", None).unwrap();
        Booking::confirmed(
            UserId::new(user).unwrap(),
            "Alice".into(),
            "alice@example.com".into(),
            "Recipe Consultation".into(),
            None,
            &schedule,
            MeetingId::new("9923456789").unwrap(),
            "https://meet.example.com/j/9923456789".into(),
            "2025-01-10T09:00:00".into(),
        )
    }

    #[tokio::test]
    async fn insert_then_find_round_trips() {
        let store = InMemoryBookingStore::new();
        let b = booking("u-1");
        store.insert(&b).await.unwrap();
        let found = store.find(&b.id).await.unwrap().unwrap();
        assert_eq!(found.id, b.id);
        assert_eq!(found.topic, "Recipe Consultation");
    }

    #[tokio::test]
    async fn update_requires_existing_record() {
        let store = InMemoryBookingStore::new();
        let b = booking("u-1");
        assert!(matches!(
            store.update(&b).await,
            Err(StoreError::NotFound)
        ));
    }

    #[tokio::test]
    async fn list_filters_by_owner() {
        let store = InMemoryBookingStore::new();
        store.insert(&booking("u-1")).await.unwrap();
        store.insert(&booking("u-1")).await.unwrap();
        store.insert(&booking("u-2")).await.unwrap();

        let mine = store.list_for_user(&UserId::new("u-1").unwrap()).await.unwrap();
        assert_eq!(mine.len(), 2);
    }

    #[tokio::test]
    async fn injected_insert_failure() {
        let store = InMemoryBookingStore::failing_insert("disk full");
        assert!(store.insert(&booking("u-1")).await.is_err());
        assert_eq!(store.booking_count(), 0);
    }
}
