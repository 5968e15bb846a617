//! Reconciliation pass over every stored booking.

use tracing::{debug, info};

use confbook_core::error::ErrorKind;
use confbook_core::result::AppResult;
use confbook_entity::{BookingStatus, CancelReason};

use super::dto::SweepReport;
use super::engine::BookingEngine;

impl BookingEngine {
    /// Runs one reconciliation pass.
    ///
    /// - a waitlist entry past its deadline is canceled;
    /// - a promoted offer past its deadline is expired;
    /// - a confirmed booking cancels the user's overlapping waitlist entries;
    /// - a live booking whose conference has ended is canceled.
    ///
    /// The pass neither restores slots nor promotes waitlist entries, and
    /// bookings whose conference cannot be resolved are skipped.
    pub async fn run_sweep(&self) -> AppResult<SweepReport> {
        let _tx = self.gate.write().await;
        let now = self.clock.now();

        let snapshot = self.bookings.get_all_bookings().await?;
        let mut report = SweepReport::default();

        for entry in snapshot {
            // Re-read: an earlier booking in this pass may have canceled it.
            let mut booking = match self.bookings.find_by_id(&entry.id).await {
                Ok(booking) => booking,
                Err(e) if e.is(ErrorKind::NotFound) => continue,
                Err(e) => return Err(e),
            };

            if booking.deadline_passed(now) {
                match booking.status {
                    BookingStatus::Waitlisted => {
                        booking.cancel(CancelReason::WaitlistLapsed, now);
                        report.expired_waitlist += 1;
                    }
                    _ => {
                        booking.expire(now);
                        report.lapsed_offers += 1;
                    }
                }
                debug!(booking_id = %booking.id, status = %booking.status, "Deadline lapsed");
                self.bookings.update(booking).await?;
                continue;
            }

            let conference = match self.conferences.find_by_name(&booking.conference_id).await {
                Ok(conference) => conference,
                Err(e) if e.is(ErrorKind::NotFound) => {
                    debug!(
                        booking_id = %booking.id,
                        conference = %booking.conference_id,
                        "Skipping booking for unknown conference"
                    );
                    continue;
                }
                Err(e) => return Err(e),
            };

            if booking.status == BookingStatus::Confirmed {
                report.overlaps_cleared += self
                    .bookings
                    .remove_overlapping_waitlists(&booking.user_id, conference.window(), now)
                    .await?;
            }

            if booking.is_active() && conference.has_ended(now) {
                booking.cancel(CancelReason::ConferenceEnded, now);
                self.bookings.update(booking).await?;
                report.closed_out += 1;
            }
        }

        if report.total() > 0 {
            info!(
                expired_waitlist = report.expired_waitlist,
                lapsed_offers = report.lapsed_offers,
                overlaps_cleared = report.overlaps_cleared,
                closed_out = report.closed_out,
                "Sweep pass reconciled bookings"
            );
        } else {
            debug!("Sweep pass found nothing to reconcile");
        }

        Ok(report)
    }
}
