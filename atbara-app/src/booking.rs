use atbara_booking::{BookingConfirmation, BookingWizard, WizardConfig, WizardStep};
use atbara_catalog::{SeatMap, SeatStatus};
use atbara_shared::{format_date, format_time};

use crate::context::AppContext;
use crate::error::{AppError, AppResult};
use crate::navigation::BookingPayload;

/// The booking page. Without a train and query there is nothing to book, so the page
/// shows a recovery view pointing back to search.
#[derive(Debug)]
pub enum BookingScreen {
    Wizard(Box<BookingWizard>),
    Recovery { missing: String },
}

impl BookingScreen {
    pub fn open(payload: BookingPayload, config: WizardConfig) -> Self {
        match BookingWizard::start(payload.train, payload.search_params, config) {
            Ok(wizard) => BookingScreen::Wizard(Box::new(wizard)),
            Err(err) => {
                tracing::warn!(error = %err, "Booking page opened without a selection");
                BookingScreen::Recovery {
                    missing: err.to_string(),
                }
            }
        }
    }

    pub fn is_recovery(&self) -> bool {
        matches!(self, BookingScreen::Recovery { .. })
    }

    pub fn wizard(&self) -> AppResult<&BookingWizard> {
        match self {
            BookingScreen::Wizard(wizard) => Ok(&**wizard),
            BookingScreen::Recovery { missing } => Err(AppError::MissingPrecondition(missing.clone())),
        }
    }

    pub fn wizard_mut(&mut self) -> AppResult<&mut BookingWizard> {
        match self {
            BookingScreen::Wizard(wizard) => Ok(&mut **wizard),
            BookingScreen::Recovery { missing } => Err(AppError::MissingPrecondition(missing.clone())),
        }
    }

    pub fn render(&self, ctx: &AppContext) -> String {
        let wizard = match self.wizard() {
            Ok(wizard) => wizard,
            Err(err) => return err.render(ctx),
        };

        let mut out = vec![render_progress(ctx, wizard.step())];
        match wizard.step() {
            WizardStep::PassengerInfo => out.push(render_passenger(ctx, wizard)),
            WizardStep::SeatSelection => out.push(render_seats(ctx, wizard)),
            WizardStep::Payment => out.push(render_payment(ctx, wizard)),
            WizardStep::Confirmation => {
                if let Some(confirmation) = wizard.confirmation() {
                    out.push(render_confirmation(ctx, confirmation));
                }
            }
        }
        if wizard.step() != WizardStep::Confirmation {
            out.push(render_summary(ctx, wizard));
        }
        out.join("\n\n")
    }
}

fn render_progress(ctx: &AppContext, current: WizardStep) -> String {
    WizardStep::ALL
        .iter()
        .map(|step| {
            let marker = if *step == current {
                "●"
            } else if *step < current {
                "✓"
            } else {
                "○"
            };
            format!("{} {}. {}", marker, step.number(), ctx.t(step.translation_key()))
        })
        .collect::<Vec<_>>()
        .join("  ")
}

fn render_passenger(ctx: &AppContext, wizard: &BookingWizard) -> String {
    let p = wizard.passenger();
    [
        format!("{}: {}", ctx.t("full.name.arabic"), blank(p.full_name_local.as_str())),
        format!("{}: {}", ctx.t("full.name.english"), blank(p.full_name_latin.as_str())),
        format!("{}: {}", ctx.t("id.passport.number"), if p.id_number.is_blank() { "-".to_string() } else { p.id_number.to_string() }),
        format!("{}: {}", ctx.t("nationality"), p.nationality),
        format!(
            "{}: {} ({})",
            ctx.t("email"),
            blank(p.email.as_deref().unwrap_or_default()),
            ctx.t("optional")
        ),
        format!("{}: {}", ctx.t("phone"), if p.phone.is_blank() { "-".to_string() } else { p.phone.to_string() }),
        format!("{}: {}", ctx.t("gender"), ctx.t(p.gender.translation_key())),
        format!("{}: {}", ctx.t("birth.date"), p.birth_date.map(format_date).unwrap_or_else(|| "-".to_string())),
    ]
    .join("\n")
}

fn blank(value: &str) -> String {
    if value.is_empty() {
        "-".to_string()
    } else {
        value.to_string()
    }
}

fn render_seats(ctx: &AppContext, wizard: &BookingWizard) -> String {
    let grid = wizard.seats().grid();
    let mut rows = Vec::new();
    for (row, chunk) in grid.chunks(4).enumerate() {
        let cells: Vec<String> = chunk
            .iter()
            .enumerate()
            .map(|(col, status)| {
                let index = row * 4 + col;
                match status {
                    SeatStatus::Available => format!("{:>4}", SeatMap::label(index)),
                    SeatStatus::Occupied => format!("{:>4}", "xx"),
                    SeatStatus::Selected => format!("{:>4}", "[*]"),
                }
            })
            .collect();
        rows.push(format!("{} {} | {} {}", cells[0], cells[1], cells[2], cells[3]));
    }
    rows.push(format!(
        "{}: {}  xx = {}",
        ctx.t("selected.seat"),
        wizard.seats().selected_label().unwrap_or_else(|| "-".to_string()),
        ctx.t("occupied"),
    ));
    rows.join("\n")
}

fn render_payment(ctx: &AppContext, wizard: &BookingWizard) -> String {
    let payment = wizard.payment();
    let mut out = vec![ctx.t("choose.payment.method")];
    for method in atbara_core::payment::PaymentMethod::ALL {
        let marker = if method == payment.method { "(x)" } else { "( )" };
        let providers = match method.providers() {
            Some(providers) => providers.to_string(),
            None => ctx.t("pay.via.bank"),
        };
        out.push(format!("{} {} {}", marker, ctx.t(method.translation_key()), providers));
    }
    if let Some(card) = &payment.card {
        out.push(format!(
            "{}: {}  {}: {}",
            ctx.t("cardholder.name"),
            card.holder_name,
            ctx.t("card.number"),
            card.number.tail()
        ));
    }
    let terms = if wizard.terms_accepted() { "[x]" } else { "[ ]" };
    out.push(format!("{} {}", terms, ctx.t("agree.terms.conditions")));
    out.push(format!("{} {}", ctx.t("continue.payment"), ctx.price(wizard.total_price())));
    out.join("\n")
}

fn render_summary(ctx: &AppContext, wizard: &BookingWizard) -> String {
    let summary = wizard.summary();
    let mut out = vec![
        format!("== {} ==", ctx.t("booking.summary")),
        format!("{} ({})", summary.train_name, ctx.t(summary.fare_class.translation_key())),
        format!("{}: {} → {}", ctx.t("route"), ctx.t(&summary.origin), ctx.t(&summary.destination)),
        format!("{}: {}", ctx.t("departure"), format_time(summary.departure)),
        format!("{}: {}", ctx.t("arrival"), format_time(summary.arrival)),
    ];
    if let Some(seat) = &summary.seat_label {
        out.push(format!("{}: {}", ctx.t("seat"), seat));
    }
    out.push(format!("{}: {}", ctx.t("ticket.price"), summary.price.display_ticket()));
    out.push(format!("{}: {}", ctx.t("service.fee"), summary.price.display_fee()));
    out.push(format!("{}: {}", ctx.t("total"), summary.price.display_total()));
    if summary.secure_payment_notice {
        out.push(ctx.t("secure.payment.guaranteed"));
    }
    out.join("\n")
}

fn render_confirmation(ctx: &AppContext, confirmation: &BookingConfirmation) -> String {
    [
        ctx.t("booking.confirmed"),
        ctx.t("ticket.booked.successfully"),
        format!("{}: {}", ctx.t("booking.reference"), confirmation.reference),
        format!("{}: {}", ctx.t("train"), confirmation.train.name),
        format!(
            "{}: {} → {}",
            ctx.t("route"),
            ctx.t(&confirmation.search_params.origin),
            ctx.t(&confirmation.search_params.destination)
        ),
        format!("{}: {}", ctx.t("date"), format_date(confirmation.search_params.date)),
        format!("{}: {}", ctx.t("seat"), confirmation.seat_label),
        format!("{}: {}", ctx.t("total"), confirmation.price.display_total()),
        format!("QR: {}", confirmation.qr_payload()),
        ctx.t("scan.at.station"),
        format!("[{}: trips]  [{}: home]", ctx.t("view.my.trips"), ctx.t("book.another.trip")),
    ]
    .join("\n")
}
