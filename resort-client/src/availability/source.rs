use async_trait::async_trait;
use chrono::NaiveTime;
use shared::dining::{AvailabilitySnapshot, MealSchedule};
use shared::models::MealType;

use crate::ClientResult;
use crate::client::{HttpClient, ResortClient};

/// The three counts availability is computed from
#[async_trait]
pub trait StatsSource: Send + Sync {
    /// Rooms at the resort
    async fn room_count(&self, resort_id: i64) -> ClientResult<u32>;

    /// Rooms checked in (not yet out) for `meal`
    async fn checked_in_count(&self, resort_id: i64, meal: MealType) -> ClientResult<u32>;

    /// All check-ins of the day, display only
    async fn today_count(&self, resort_id: i64) -> ClientResult<u32>;
}

#[async_trait]
impl<C: HttpClient> StatsSource for ResortClient<C> {
    async fn room_count(&self, resort_id: i64) -> ClientResult<u32> {
        self.rooms().room_count(resort_id).await
    }

    async fn checked_in_count(&self, resort_id: i64, meal: MealType) -> ClientResult<u32> {
        self.check_ins().checked_in_count(resort_id, meal).await
    }

    async fn today_count(&self, resort_id: i64) -> ClientResult<u32> {
        self.check_ins().today_count(resort_id).await
    }
}

/// Load the counts concurrently and compute availability at `now`
///
/// Between services the current-period count is not fetched. Any failed
/// fetch fails the whole load.
pub async fn load_availability<S>(
    source: &S,
    schedule: &MealSchedule,
    resort_id: i64,
    now: NaiveTime,
) -> ClientResult<AvailabilitySnapshot>
where
    S: StatsSource + ?Sized,
{
    let meal = schedule.resolve_at(now);
    let within_period = meal.is_some_and(|m| schedule.is_within_at(m, now));

    let current_period = async {
        match meal {
            Some(meal) => source.checked_in_count(resort_id, meal).await,
            None => Ok(0),
        }
    };

    let (total_rooms, current_period_check_ins, today_check_ins) = tokio::try_join!(
        source.room_count(resort_id),
        current_period,
        source.today_count(resort_id),
    )?;

    let snapshot = AvailabilitySnapshot::compute(
        resort_id,
        meal,
        within_period,
        total_rooms,
        current_period_check_ins,
        today_check_ins,
    );
    tracing::debug!(
        resort_id,
        meal = ?snapshot.meal,
        total = snapshot.total_rooms,
        available = snapshot.available,
        "Availability loaded"
    );
    Ok(snapshot)
}
