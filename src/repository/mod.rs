//! Repository layer: the in-memory entity store

pub mod bookings;
pub mod devices;
pub mod periods;
pub mod users;

use std::sync::{
    atomic::{AtomicI32, Ordering},
    Arc,
};

use indexmap::IndexMap;
use tokio::sync::RwLock;

use crate::models::{Booking, Device, Period, User};

/// Monotonic id generator for one entity type, starting at 1
#[derive(Debug, Default)]
pub struct IdSequence(AtomicI32);

impl IdSequence {
    pub fn next(&self) -> i32 {
        self.0.fetch_add(1, Ordering::SeqCst) + 1
    }
}

#[derive(Debug, Default)]
struct Sequences {
    devices: IdSequence,
    periods: IdSequence,
    bookings: IdSequence,
    users: IdSequence,
}

/// Entity collections keyed by id, in insertion order
#[derive(Debug, Default)]
struct Store {
    devices: IndexMap<i32, Device>,
    periods: IndexMap<i32, Period>,
    bookings: IndexMap<i32, Booking>,
    users: IndexMap<i32, User>,
}

/// Main repository struct, cheap to clone and shared by all services
#[derive(Clone, Default)]
pub struct Repository {
    store: Arc<RwLock<Store>>,
    sequences: Arc<Sequences>,
}

impl Repository {
    /// Create an empty repository
    pub fn new() -> Self {
        Self::default()
    }
}
