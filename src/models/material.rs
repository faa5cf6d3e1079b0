//! Material catalog model.
//!
//! A material has a delivery lead time and a minimum storage buffer, both
//! in calendar days; together they form the replenishment lead. Catalog
//! entries are immutable — the mutable remaining-stock copy lives in the
//! `ResourceLedger`.

use chrono::Duration;
use serde::{Deserialize, Serialize};

/// A raw material consumed by jobs.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Material {
    /// Unique material identifier.
    pub id: String,
    /// Supplier delivery lead time (calendar days).
    pub delivery_days: i64,
    /// Buffer stock horizon (days). Carried for loaders, unused by the
    /// algorithm.
    pub buffer_days: i64,
    /// Minimum storage time before use (calendar days). Added to the
    /// delivery lead when computing ready time.
    pub min_storage_days: i64,
    /// Initial stock, seeded into the ledger at run start.
    pub available_quantity: i64,
}

impl Material {
    /// Creates a new material.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            delivery_days: 0,
            buffer_days: 0,
            min_storage_days: 0,
            available_quantity: 0,
        }
    }

    /// Sets the delivery lead time (days).
    pub fn with_delivery_days(mut self, days: i64) -> Self {
        self.delivery_days = days;
        self
    }

    /// Sets the buffer horizon (days).
    pub fn with_buffer_days(mut self, days: i64) -> Self {
        self.buffer_days = days;
        self
    }

    /// Sets the minimum storage time (days).
    pub fn with_min_storage_days(mut self, days: i64) -> Self {
        self.min_storage_days = days;
        self
    }

    /// Sets the initial stock.
    pub fn with_available_quantity(mut self, quantity: i64) -> Self {
        self.available_quantity = quantity;
        self
    }

    /// Replenishment lead: delivery plus minimum storage, in calendar days.
    pub fn replenishment_lead(&self) -> Duration {
        Duration::days(self.delivery_days + self.min_storage_days)
    }
}
