//! Line-oriented front end. Each input line is one user action; the reply is the
//! view that action leads to, rendered in the active locale.

use atbara_booking::{BookingWizard, DashboardTab, PassengerField};
use atbara_catalog::SelectOutcome;
use atbara_core::identity::SessionProvider;
use atbara_core::locale::Locale;
use atbara_core::payment::{CardDetails, PaymentMethod};
use atbara_core::search::{SearchForm, SortKey};
use atbara_shared::{FareClass, Masked};
use rand::rngs::StdRng;

use crate::admin::{AdminOverview, AdminTab};
use crate::booking::BookingScreen;
use crate::context::AppContext;
use crate::dashboard::DashboardScreen;
use crate::error::{AppError, AppResult};
use crate::home::HomeScreen;
use crate::navigation::{BookingPayload, Route};
use crate::search::SearchResultsScreen;

pub const HELP: &str = "\
home | cities                                          list stations and search defaults
search <from> <to> <YYYY-MM-DD> [passengers] [class]   start a search
results                                                wait for and show results
filter class <economy|business|vip|all>                filter by fare class
filter price <min> <max>                               filter by price range
filter reset                                           clear filters
sort <time|price|duration>                             change sort order
book [train-id]                                        open the booking page
passenger <field> <value>                              fill a passenger field
seat <number>                                          pick a seat (1-40)
auto-seat                                              pick a random seat
pay <card|mobile|bank>                                 choose a payment method
card <holder>|<number>|<MM/YY>|<cvv>                   enter card details
terms [off]                                            accept the terms
next | prev                                            move through the booking steps
summary                                                show the booking page
trips [upcoming|past]                                  show my trips
ticket | download | cancel <booking-ref>               trip actions
admin [overview|trains|bookings|users]                 admin panel
login <user-id> | logout                               switch account
lang [ar|en]                                           switch language
help | quit";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Continue(String),
    Quit,
}

pub struct Shell {
    ctx: AppContext,
    route: Route,
    results: Option<SearchResultsScreen>,
    booking: Option<BookingScreen>,
    dashboard: DashboardScreen,
    rng: StdRng,
}

impl Shell {
    pub fn new(ctx: AppContext, rng: StdRng) -> Self {
        Self {
            ctx,
            route: Route::Home,
            results: None,
            booking: None,
            dashboard: DashboardScreen::default(),
            rng,
        }
    }

    pub fn context(&self) -> &AppContext {
        &self.ctx
    }

    pub fn route(&self) -> Route {
        self.route
    }

    pub fn results(&self) -> Option<&SearchResultsScreen> {
        self.results.as_ref()
    }

    pub fn booking(&self) -> Option<&BookingScreen> {
        self.booking.as_ref()
    }

    /// Run one command. Errors are rendered into the reply, never returned.
    pub async fn execute(&mut self, line: &str) -> Outcome {
        let mut parts = line.split_whitespace();
        let Some(command) = parts.next() else {
            return Outcome::Continue(String::new());
        };
        let args: Vec<&str> = parts.collect();

        tracing::debug!(command, route = ?self.route, "Shell command");
        match self.dispatch(command, &args).await {
            Ok(outcome) => outcome,
            Err(err) => {
                tracing::debug!(error = %err, "Command failed");
                Outcome::Continue(err.render(&self.ctx))
            }
        }
    }

    async fn dispatch(&mut self, command: &str, args: &[&str]) -> AppResult<Outcome> {
        let text = match command {
            "home" | "cities" => {
                let home = HomeScreen::open(&self.ctx).await?;
                self.navigate(Route::Home);
                home.render(&self.ctx)
            }
            "search" => self.search(args)?,
            "results" => {
                let screen = open_results(&mut self.results)?;
                screen.wait().await?;
                screen.render(&self.ctx)
            }
            "filter" => self.filter(args)?,
            "sort" => {
                let key: SortKey = arg(args, 0, "sort key")?.parse()?;
                let screen = open_results(&mut self.results)?;
                screen.sort = key;
                screen.render(&self.ctx)
            }
            "book" => self.book(args)?,
            "passenger" => {
                let field: PassengerField = arg(args, 0, "field")?.parse().map_err(AppError::Validation)?;
                let value = args.get(1..).map(|rest| rest.join(" ")).unwrap_or_default();
                active_wizard(&mut self.booking)?.set_passenger_field(field, &value)?;
                self.render_booking()?
            }
            "seat" => {
                let number: usize = parse_number(arg(args, 0, "seat number")?)?;
                let index = number
                    .checked_sub(1)
                    .ok_or_else(|| AppError::Validation("seats are numbered from 1".to_string()))?;
                let outcome = active_wizard(&mut self.booking)?.select_seat(index)?;
                let mut text = self.render_booking()?;
                if outcome == SelectOutcome::Ignored {
                    text = format!("{}: {}\n\n{}", self.ctx.t("occupied"), number, text);
                }
                text
            }
            "auto-seat" => {
                active_wizard(&mut self.booking)?.auto_select_seat(&mut self.rng)?;
                self.render_booking()?
            }
            "pay" => {
                let method: PaymentMethod = arg(args, 0, "payment method")?.parse()?;
                active_wizard(&mut self.booking)?.choose_payment(method)?;
                self.render_booking()?
            }
            "card" => {
                let card = parse_card(&args.join(" "))?;
                active_wizard(&mut self.booking)?.set_card_details(card)?;
                self.render_booking()?
            }
            "terms" => {
                let accepted = args.first().map(|a| *a != "off").unwrap_or(true);
                active_wizard(&mut self.booking)?.accept_terms(accepted)?;
                self.render_booking()?
            }
            "next" => {
                active_wizard(&mut self.booking)?.next_with_rng(&mut self.rng)?;
                self.render_booking()?
            }
            "prev" => {
                active_wizard(&mut self.booking)?.previous()?;
                self.render_booking()?
            }
            "summary" => self.render_booking()?,
            "trips" => {
                self.navigate(Route::Dashboard);
                self.dashboard.tab = match args.first().copied() {
                    None | Some("upcoming") => DashboardTab::Upcoming,
                    Some("past") => DashboardTab::Past,
                    Some(other) => return Err(AppError::Validation(format!("unknown tab '{}'", other))),
                };
                self.dashboard.render(&self.ctx)
            }
            "ticket" => {
                self.navigate(Route::Dashboard);
                self.dashboard.render_ticket(&self.ctx, arg(args, 0, "booking reference")?)?
            }
            "download" => {
                let event = self.dashboard.trips.download_ticket(arg(args, 0, "booking reference")?)?;
                format!("{}: {}", self.ctx.t("download.ticket"), event.booking_ref)
            }
            "cancel" => {
                let event = self.dashboard.trips.cancel_trip(arg(args, 0, "booking reference")?)?;
                format!("{}: {}", self.ctx.t("cancel.trip"), event.booking_ref)
            }
            "admin" => {
                let tab: AdminTab = match args.first() {
                    Some(tab) => tab.parse()?,
                    None => AdminTab::default(),
                };
                let overview = AdminOverview::open(&self.ctx)?;
                self.navigate(Route::Admin);
                overview.render(&self.ctx, tab)
            }
            "login" => {
                let name = self.ctx.session.login_as(arg(args, 0, "user id")?)?.name.clone();
                format!("{}, {}", self.ctx.t("welcome.back"), name)
            }
            "logout" => {
                self.ctx.session.logout();
                if self.route == Route::Admin {
                    self.navigate(Route::Home);
                }
                self.ctx.t("home")
            }
            "lang" => {
                let locale = match args.first() {
                    Some(code) => code.parse::<Locale>()?,
                    None => self.ctx.locale().toggled(),
                };
                self.ctx.set_locale(locale);
                format!("{} ({:?})", self.ctx.t("atbara.rail"), self.ctx.direction())
            }
            "help" => HELP.to_string(),
            "quit" | "exit" => return Ok(Outcome::Quit),
            other => return Err(AppError::Validation(format!("unknown command '{}', try 'help'", other))),
        };
        Ok(Outcome::Continue(text))
    }

    fn search(&mut self, args: &[&str]) -> AppResult<String> {
        let form = SearchForm {
            from: arg(args, 0, "origin")?.to_string(),
            to: arg(args, 1, "destination")?.to_string(),
            date: arg(args, 2, "date")?.to_string(),
            passengers: args.get(3).map(|s| s.to_string()).unwrap_or_else(|| "1".to_string()),
            class: args.get(4).map(|s| s.to_string()).unwrap_or_else(|| "economy".to_string()),
        };
        let query = form.into_query()?;

        self.navigate(Route::Results);
        // Replacing the screen drops any earlier pending fetch.
        let screen = SearchResultsScreen::open(&mut self.ctx, query);
        let text = screen.render(&self.ctx);
        self.results = Some(screen);
        Ok(text)
    }

    fn filter(&mut self, args: &[&str]) -> AppResult<String> {
        let ctx = &self.ctx;
        let screen = open_results(&mut self.results)?;
        match arg(args, 0, "filter")? {
            "class" => {
                let class = match arg(args, 1, "class")? {
                    "all" => None,
                    name => Some(name.parse::<FareClass>().map_err(|e| AppError::Validation(e.to_string()))?),
                };
                screen.set_class_filter(class);
            }
            "price" => {
                let min = parse_number(arg(args, 1, "minimum price")?)?;
                let max = parse_number(arg(args, 2, "maximum price")?)?;
                screen.set_price_range(min, max)?;
            }
            "reset" => screen.reset_filters(ctx),
            other => return Err(AppError::Validation(format!("unknown filter '{}'", other))),
        }
        Ok(screen.render(ctx))
    }

    fn book(&mut self, args: &[&str]) -> AppResult<String> {
        let payload = match (args.first(), self.results.as_ref()) {
            (Some(train_id), Some(screen)) => screen.book(train_id)?,
            // Reached without a selection: the booking page shows its recovery view.
            _ => BookingPayload::default(),
        };
        let screen = BookingScreen::open(payload, self.ctx.wizard_config());
        self.navigate(Route::Booking);
        let text = screen.render(&self.ctx);
        self.booking = Some(screen);
        Ok(text)
    }

    fn render_booking(&self) -> AppResult<String> {
        let screen = self
            .booking
            .as_ref()
            .ok_or_else(|| AppError::MissingPrecondition("booking".to_string()))?;
        Ok(screen.render(&self.ctx))
    }

    /// Leaving a page unmounts it. For the results page that also cancels its fetch.
    fn navigate(&mut self, to: Route) {
        if self.route == to {
            return;
        }
        if to != Route::Results && self.results.take().is_some() {
            tracing::debug!("Left results page");
        }
        if to != Route::Booking {
            self.booking = None;
        }
        tracing::debug!(from = ?self.route, to = ?to, "Navigate");
        self.route = to;
    }
}

fn open_results(results: &mut Option<SearchResultsScreen>) -> AppResult<&mut SearchResultsScreen> {
    results
        .as_mut()
        .ok_or_else(|| AppError::Validation("no search in progress".to_string()))
}

fn active_wizard(booking: &mut Option<BookingScreen>) -> AppResult<&mut BookingWizard> {
    booking
        .as_mut()
        .ok_or_else(|| AppError::MissingPrecondition("booking".to_string()))?
        .wizard_mut()
}

fn arg<'a>(args: &[&'a str], index: usize, name: &str) -> AppResult<&'a str> {
    args.get(index)
        .copied()
        .ok_or_else(|| AppError::Validation(format!("missing {}", name)))
}

fn parse_number<T: std::str::FromStr>(raw: &str) -> AppResult<T> {
    raw.parse()
        .map_err(|_| AppError::Validation(format!("'{}' is not a number", raw)))
}

fn parse_card(raw: &str) -> AppResult<CardDetails> {
    let parts: Vec<&str> = raw.split('|').map(str::trim).collect();
    if parts.len() != 4 {
        return Err(AppError::Validation(
            "expected <holder>|<number>|<MM/YY>|<cvv>".to_string(),
        ));
    }
    Ok(CardDetails {
        holder_name: parts[0].to_string(),
        number: Masked::from(parts[1]),
        expiry: parts[2].to_string(),
        cvv: Masked::from(parts[3]),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    fn shell() -> Shell {
        Shell::new(AppContext::for_tests(Locale::English), StdRng::seed_from_u64(1))
    }

    #[tokio::test]
    async fn test_unknown_command() {
        let mut shell = shell();
        match shell.execute("fly away").await {
            Outcome::Continue(text) => assert!(text.contains("unknown command")),
            Outcome::Quit => panic!("should not quit"),
        }
        assert_eq!(shell.execute("quit").await, Outcome::Quit);
        assert_eq!(shell.execute("   ").await, Outcome::Continue(String::new()));
    }

    #[tokio::test]
    async fn test_book_without_search_shows_recovery() {
        let mut shell = shell();
        let Outcome::Continue(text) = shell.execute("book").await else {
            panic!("should not quit");
        };
        assert!(text.contains("No train selected"));
        assert!(shell.booking().map(|b| b.is_recovery()).unwrap_or(false));

        let Outcome::Continue(text) = shell.execute("next").await else {
            panic!("should not quit");
        };
        assert!(text.contains("Back to search"));
    }

    #[tokio::test]
    async fn test_home_lists_cities_and_leaves_results() {
        let mut shell = shell();
        shell.execute("search khartoum atbara 2024-01-15").await;
        assert_eq!(shell.route(), Route::Results);

        let Outcome::Continue(text) = shell.execute("home").await else {
            panic!("should not quit");
        };
        assert!(text.contains("port.sudan"));
        assert!(text.contains("Port Sudan"));
        assert!(text.contains("1 passengers"));
        assert!(text.contains("Class: Economy"));
        assert_eq!(shell.route(), Route::Home);
        assert!(shell.results().is_none());

        assert_eq!(shell.execute("cities").await, Outcome::Continue(text));
    }

    #[tokio::test]
    async fn test_lang_toggle() {
        let mut shell = shell();
        shell.execute("lang").await;
        assert_eq!(shell.context().locale(), Locale::Arabic);
        shell.execute("lang en").await;
        assert_eq!(shell.context().locale(), Locale::English);
    }

    #[test]
    fn test_parse_card() {
        let card = parse_card("Ahmed Mohamed | 4111 1111 1111 1111 | 12/27 | 123").unwrap();
        assert_eq!(card.holder_name, "Ahmed Mohamed");
        assert_eq!(card.number.expose(), "4111 1111 1111 1111");
        assert!(parse_card("Ahmed|4111").is_err());
    }
}
