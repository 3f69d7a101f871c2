use atbara_booking::{DashboardTab, TripDashboard};
use atbara_catalog::Trip;
use atbara_shared::{format_date, format_time};

use crate::context::AppContext;
use crate::error::AppResult;

#[derive(Debug, Clone, Default)]
pub struct DashboardScreen {
    pub trips: TripDashboard,
    pub tab: DashboardTab,
}

impl DashboardScreen {
    pub fn new(trips: TripDashboard) -> Self {
        Self {
            trips,
            tab: DashboardTab::default(),
        }
    }

    pub fn render(&self, ctx: &AppContext) -> String {
        let mut out = vec![format!("== {} ==", ctx.t("my.trips"))];
        if let Some(name) = ctx.greeting_name() {
            out.push(format!("{}, {}", ctx.t("welcome.back"), name));
        }

        let (upcoming, past) = self.trips.counts();
        out.push(format!(
            "{} ({})  |  {} ({})",
            ctx.t(DashboardTab::Upcoming.translation_key()),
            upcoming,
            ctx.t(DashboardTab::Past.translation_key()),
            past
        ));

        let trips = self.trips.tab(self.tab);
        if trips.is_empty() {
            out.push(ctx.t(self.tab.empty_key()));
        }
        for trip in trips {
            out.push(trip_line(ctx, trip));
        }
        out.join("\n")
    }

    /// E-ticket view for one booking reference
    pub fn render_ticket(&self, ctx: &AppContext, booking_ref: &str) -> AppResult<String> {
        let trip = self.trips.find_ticket(booking_ref)?;
        Ok([
            format!("== {} ==", ctx.t("e.ticket")),
            format!("{}: {}", ctx.t("booking.ref"), trip.booking_ref),
            format!("{}: {}", ctx.t("train"), trip.train_name),
            format!("{}: {} → {}", ctx.t("route"), trip.from, trip.to),
            format!("{}: {}", ctx.t("date"), format_date(trip.date)),
            format!(
                "{}: {}  {}: {}",
                ctx.t("departure"),
                format_time(trip.departure),
                ctx.t("arrival"),
                format_time(trip.arrival)
            ),
            format!("{}: {}", ctx.t("seat"), trip.seat),
            format!("{}: {}", ctx.t("class"), ctx.t(trip.fare_class.translation_key())),
            format!("{}: {}", ctx.t("total"), ctx.price(trip.price)),
            ctx.t("scan.qr.code"),
        ]
        .join("\n"))
    }
}

fn trip_line(ctx: &AppContext, trip: &Trip) -> String {
    let mut line = format!(
        "{}  {}  {} → {}  {} {}  {} {}  {}",
        trip.booking_ref,
        trip.train_name,
        trip.from,
        trip.to,
        format_date(trip.date),
        format_time(trip.departure),
        ctx.t("seat"),
        trip.seat,
        ctx.price(trip.price),
    );
    if trip.is_upcoming() {
        line.push_str(&format!("  [{}] [{}]", ctx.t("download.ticket"), ctx.t("cancel.trip")));
    }
    line
}
