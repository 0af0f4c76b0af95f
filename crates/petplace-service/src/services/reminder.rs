//! Check-in reminder job
//!
//! Once a day the job looks up confirmed reservations checking in today
//! or tomorrow and pushes a reminder to each guest. It runs on a spawned
//! task beside the HTTP server and never blocks a request.

use std::sync::Arc;

use chrono::{DateTime, Days, Timelike, Utc};
use tokio::time::{sleep, Duration};
use tracing::{info, instrument, warn};

use petplace_core::entities::{NotificationType, RefType};

use super::context::ServiceContext;
use super::error::ServiceResult;
use super::notification::NotificationService;

/// Hour of day (UTC) the job fires
const REMINDER_HOUR: u32 = 9;

const SECS_PER_DAY: u32 = 86_400;

/// Check-in reminder service
pub struct ReminderService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> ReminderService<'a> {
    /// Create a new ReminderService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Push a reminder for every confirmed stay checking in today or
    /// tomorrow, returning how many were sent
    #[instrument(skip(self))]
    pub async fn send_check_in_reminders(&self) -> ServiceResult<u64> {
        let today = Utc::now().date_naive();
        let reservations = self
            .ctx
            .reservation_repo()
            .list_confirmed_checking_in(today, today + Days::new(1))
            .await?;

        let notifications = NotificationService::new(self.ctx);
        let mut sent = 0;
        for reservation in reservations {
            let hotel_name = match self.ctx.hotel_repo().find_by_id(reservation.hotel_id).await {
                Ok(Some(hotel)) => hotel.name,
                Ok(None) => "your hotel".to_string(),
                Err(e) => {
                    warn!(hotel_id = reservation.hotel_id, error = %e,
                        "Failed to look up hotel for reminder");
                    "your hotel".to_string()
                }
            };

            notifications
                .notify(
                    reservation.user_id,
                    NotificationType::Reservation,
                    RefType::Reservation,
                    reservation.id,
                    format!(
                        "Reminder: your stay at {hotel_name} checks in on {}",
                        reservation.check_in
                    ),
                    None,
                )
                .await;
            sent += 1;
        }

        info!(sent, "Check-in reminders sent");
        Ok(sent)
    }
}

/// Run forever, firing once a day at the reminder hour
pub async fn run_daily(ctx: Arc<ServiceContext>) {
    loop {
        let wait = seconds_until_next_run(&Utc::now());
        sleep(Duration::from_secs(wait)).await;

        if let Err(e) = ReminderService::new(&ctx).send_check_in_reminders().await {
            warn!(error = %e, "Reminder job failed");
        }
    }
}

/// Seconds from `now` until the next run. A tick landing exactly on the
/// reminder hour waits a full day, since that run has already fired.
fn seconds_until_next_run(now: &DateTime<Utc>) -> u64 {
    let elapsed = now.time().num_seconds_from_midnight();
    let target = REMINDER_HOUR * 3_600;

    u64::from(if elapsed < target {
        target - elapsed
    } else {
        SECS_PER_DAY - elapsed + target
    })
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    fn at(hour: u32, min: u32, sec: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 8, 29, hour, min, sec).unwrap()
    }

    #[test]
    fn test_wait_before_the_hour() {
        assert_eq!(seconds_until_next_run(&at(8, 59, 0)), 60);
        assert_eq!(seconds_until_next_run(&at(0, 0, 0)), 9 * 3_600);
    }

    #[test]
    fn test_wait_after_the_hour_rolls_to_next_day() {
        assert_eq!(seconds_until_next_run(&at(9, 0, 0)), 86_400);
        assert_eq!(seconds_until_next_run(&at(10, 0, 0)), 86_400 - 3_600);
    }
}
