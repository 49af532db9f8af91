//! Guests attached to tables: reservations and walk-in waitlist entries.
//!
//! Both kinds share the same guest details. The kind is resolved once when a
//! record is decoded (`kind` tag on the wire) so callers match on
//! [`GuestEntry`] instead of probing optional fields.

#[cfg(test)]
#[path = "guest_test.rs"]
mod guest_test;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::layout::{Table, TableId};

/// Details common to every guest record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Guest {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    pub party_size: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

/// Lifecycle of a booked reservation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReservationStatus {
    #[default]
    Confirmed,
    Seated,
    Cancelled,
    NoShow,
}

/// A reservation or a waitlist entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum GuestEntry {
    Reservation {
        id: Uuid,
        #[serde(flatten)]
        guest: Guest,
        /// Booked arrival, ms since Unix epoch.
        time_ms: i64,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        table_id: Option<TableId>,
        #[serde(default)]
        status: ReservationStatus,
    },
    Waitlist {
        id: Uuid,
        #[serde(flatten)]
        guest: Guest,
        /// When the party joined the list, ms since Unix epoch.
        added_at_ms: i64,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        quoted_wait_minutes: Option<u32>,
    },
}

impl GuestEntry {
    /// Decode a raw store record.
    ///
    /// # Errors
    ///
    /// Returns the decode error if the `kind` tag is missing or unknown, or a
    /// required field is absent.
    pub fn from_record(record: serde_json::Value) -> Result<Self, serde_json::Error> {
        serde_json::from_value(record)
    }

    #[must_use]
    pub fn id(&self) -> Uuid {
        match self {
            Self::Reservation { id, .. } | Self::Waitlist { id, .. } => *id,
        }
    }

    #[must_use]
    pub fn guest(&self) -> &Guest {
        match self {
            Self::Reservation { guest, .. } | Self::Waitlist { guest, .. } => guest,
        }
    }

    #[must_use]
    pub fn party_size(&self) -> u32 {
        self.guest().party_size
    }

    /// Table the reservation was booked against. Waitlist entries have none.
    #[must_use]
    pub fn table_id(&self) -> Option<TableId> {
        match self {
            Self::Reservation { table_id, .. } => *table_id,
            Self::Waitlist { .. } => None,
        }
    }

    #[must_use]
    pub fn is_reservation(&self) -> bool {
        matches!(self, Self::Reservation { .. })
    }

    /// Whether the party fits the table's seat count.
    #[must_use]
    pub fn fits(&self, table: &Table) -> bool {
        self.party_size() <= table.capacity
    }

    /// Minutes a waitlist party has been waiting at `now_ms`. `None` for reservations.
    #[must_use]
    pub fn waited_minutes(&self, now_ms: i64) -> Option<i64> {
        match self {
            Self::Waitlist { added_at_ms, .. } => Some((now_ms - added_at_ms).max(0) / 60_000),
            Self::Reservation { .. } => None,
        }
    }
}
