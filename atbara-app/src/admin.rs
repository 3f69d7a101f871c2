use std::str::FromStr;

use atbara_catalog::admin::{ActivityEntry, AdminStats, BookingStatus, RecentBooking, TrainRoute};
use atbara_catalog::{fixtures, User};
use atbara_core::identity::SessionProvider;
use atbara_shared::{format_date, format_time};
use serde::{Deserialize, Serialize};

use crate::context::AppContext;
use crate::error::{AppError, AppResult};

/// Proof that the current user may see the admin panel. Only `AdminGrant::check`
/// creates one.
#[derive(Debug, Clone, Copy)]
pub struct AdminGrant {
    _private: (),
}

impl AdminGrant {
    pub fn check<S: SessionProvider + ?Sized>(session: &S) -> AppResult<Self> {
        match session.current_user() {
            Some(user) if user.is_admin() => Ok(Self { _private: () }),
            Some(user) => {
                tracing::warn!(user_id = %user.id, "Admin panel refused");
                Err(AppError::AccessDenied)
            }
            None => {
                tracing::warn!("Admin panel refused for anonymous session");
                Err(AppError::AccessDenied)
            }
        }
    }
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum AdminTab {
    #[default]
    Overview,
    Trains,
    Bookings,
    Users,
}

impl FromStr for AdminTab {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "overview" => Ok(AdminTab::Overview),
            "trains" => Ok(AdminTab::Trains),
            "bookings" => Ok(AdminTab::Bookings),
            "users" => Ok(AdminTab::Users),
            other => Err(AppError::Validation(format!("unknown admin tab '{}'", other))),
        }
    }
}

/// Read-only panel over the static statistics
#[derive(Debug, Clone)]
pub struct AdminOverview {
    pub stats: AdminStats,
    pub activity: Vec<ActivityEntry>,
    pub routes: Vec<TrainRoute>,
    pub bookings: Vec<RecentBooking>,
    pub users: Vec<User>,
}

impl AdminOverview {
    pub fn load(_grant: AdminGrant) -> Self {
        Self {
            stats: fixtures::admin_stats(),
            activity: fixtures::recent_activity(),
            routes: fixtures::train_routes(),
            bookings: fixtures::recent_bookings(),
            users: fixtures::users(),
        }
    }

    /// Gate then load. Non-admins get `AccessDenied`.
    pub fn open(ctx: &AppContext) -> AppResult<Self> {
        let grant = AdminGrant::check(&ctx.session)?;
        Ok(Self::load(grant))
    }

    pub fn render(&self, ctx: &AppContext, tab: AdminTab) -> String {
        let mut out = vec![format!("== {} ==", ctx.t("admin.dashboard"))];
        match tab {
            AdminTab::Overview => {
                let currency = &ctx.config.business_rules.currency;
                out.push(format!("{}: {}", ctx.t("total.bookings"), self.stats.total_bookings));
                out.push(format!("{}: {} {}", ctx.t("total.revenue"), self.stats.total_revenue, currency));
                out.push(format!("{}: {}", ctx.t("total.trains"), self.stats.total_trains));
                out.push(format!("{}: {}", ctx.t("total.users"), self.stats.total_users));
                out.push(format!("-- {} --", ctx.t("recent.activity")));
                for entry in &self.activity {
                    out.push(format!(
                        "{}: {} ({} {})",
                        ctx.t(entry.kind.translation_key()),
                        entry.details,
                        entry.minutes_ago,
                        ctx.t("minutes.ago")
                    ));
                }
            }
            AdminTab::Trains => {
                out.push(format!("-- {} --", ctx.t("train.routes")));
                for route in &self.routes {
                    out.push(format!(
                        "{}  {} → {}  {}-{}  {}  {}: {}/{} ({:.0}%)",
                        route.name,
                        route.from,
                        route.to,
                        format_time(route.departure),
                        format_time(route.arrival),
                        ctx.price(route.price),
                        ctx.t("capacity"),
                        route.booked,
                        route.capacity,
                        route.occupancy_percent()
                    ));
                }
            }
            AdminTab::Bookings => {
                out.push(format!("-- {} --", ctx.t("recent.bookings")));
                for booking in &self.bookings {
                    let status = match booking.status {
                        BookingStatus::Confirmed => "confirmed",
                        BookingStatus::Cancelled => "cancelled",
                    };
                    out.push(format!(
                        "{}  {}  {} → {}  {}  {}",
                        booking.reference,
                        booking.passenger,
                        ctx.t(&booking.from),
                        ctx.t(&booking.to),
                        format_date(booking.date),
                        ctx.t(status)
                    ));
                }
            }
            AdminTab::Users => {
                out.push(format!("-- {} --", ctx.t("user.management")));
                for user in &self.users {
                    out.push(format!(
                        "{}  {}  {} {}  {} {}",
                        user.name,
                        user.email,
                        ctx.t("joined"),
                        format_date(user.joined),
                        user.trips,
                        ctx.t("trips")
                    ));
                }
            }
        }
        out.join("\n")
    }
}
