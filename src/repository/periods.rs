//! Class period domain methods on Repository

use super::Repository;
use crate::models::{NewPeriod, Period};

impl Repository {
    /// List all periods in school-day order
    pub async fn periods_list(&self) -> Vec<Period> {
        self.store.read().await.periods.values().cloned().collect()
    }

    pub async fn periods_get_by_id(&self, id: i32) -> Option<Period> {
        self.store.read().await.periods.get(&id).cloned()
    }

    pub async fn periods_create(&self, data: NewPeriod) -> Period {
        let mut store = self.store.write().await;
        let period = Period {
            id: self.sequences.periods.next(),
            name: data.name,
            start_time: data.start_time,
            end_time: data.end_time,
        };
        store.periods.insert(period.id, period.clone());
        period
    }
}
