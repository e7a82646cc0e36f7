//! Check-in / check-out submission
//!
//! Local validation and role checks run before anything is sent; a request
//! that fails them never reaches the backend.

use chrono::{Local, NaiveDate, TimeZone};
use shared::dining::{CheckInForm, CheckOutForm, RoomSlot};
use shared::models::{CheckIn, MealType};

use crate::{ClientError, ClientResult};
use crate::client::{HttpClient, ResortClient};

impl<C: HttpClient> ResortClient<C> {
    /// Validate the form and record a check-in
    pub async fn check_in(&self, form: &CheckInForm) -> ClientResult<CheckIn> {
        let req = form.validate()?;
        let record = self.check_ins().check_in(&req).await?;
        tracing::info!(
            check_in_id = record.id,
            room_id = record.room_id,
            meal = %record.meal_type,
            "Guest checked in"
        );
        Ok(record)
    }

    /// Record a check-out
    ///
    /// The session role is checked before the remarks, and both before any
    /// request is sent.
    pub async fn check_out(&self, form: &CheckOutForm) -> ClientResult<CheckIn> {
        let role = self.role().await;
        let req = form.validate(role)?;
        let record = self.check_ins().check_out(&req).await?;
        if let Err(e) = record.validate_times(&Local) {
            tracing::warn!(
                check_in_id = record.id,
                error = %e,
                "Backend returned inconsistent check-out time"
            );
        }
        tracing::info!(check_in_id = record.id, room_id = record.room_id, "Guest checked out");
        Ok(record)
    }

    /// Check in against a slot; the slot only advances once the backend accepted
    pub async fn check_in_slot(
        &self,
        slot: &mut RoomSlot,
        form: &CheckInForm,
    ) -> ClientResult<CheckIn> {
        let req = slot.prepare_check_in(form)?;
        let record = self.check_ins().check_in(&req).await?;
        slot.confirm_check_in(&record);
        Ok(record)
    }

    /// Check out a slot; the slot only advances once the backend accepted
    pub async fn check_out_slot(
        &self,
        slot: &mut RoomSlot,
        form: &CheckOutForm,
    ) -> ClientResult<CheckIn> {
        let role = self.role().await;
        let req = slot.prepare_check_out(role, form)?;
        if slot.check_in_id != Some(req.check_in_id) {
            return Err(ClientError::InvalidState(format!(
                "Room {} is checked in under {:?}, not {}",
                slot.room_id, slot.check_in_id, req.check_in_id
            )));
        }
        let record = self.check_ins().check_out(&req).await?;
        slot.confirm_check_out();
        Ok(record)
    }

    /// Current slot of every room at a resort for one meal on `date`
    pub async fn room_slots<Tz>(
        &self,
        resort_id: i64,
        meal: MealType,
        date: NaiveDate,
        tz: &Tz,
    ) -> ClientResult<Vec<RoomSlot>>
    where
        Tz: TimeZone + Sync,
    {
        let rooms = self.rooms();
        let check_ins = self.check_ins();
        let (rooms, records) = tokio::try_join!(
            rooms.list_by_resort(resort_id),
            check_ins.list(resort_id, date),
        )?;

        let mut slots = Vec::with_capacity(rooms.len());
        for room in &rooms {
            slots.push(RoomSlot::from_records(room.id, date, meal, &records, tz)?);
        }
        Ok(slots)
    }
}
