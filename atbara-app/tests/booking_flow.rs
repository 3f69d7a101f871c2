use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use atbara_app::{AppContext, Outcome, Route, Shell};
use atbara_catalog::{fixtures, City, Train};
use atbara_core::locale::Locale;
use atbara_core::repository::TrainRepository;
use atbara_core::search::SearchQuery;
use atbara_core::CoreResult;
use atbara_store::Config;
use rand::rngs::StdRng;
use rand::SeedableRng;

/// Fixture repository that records whether it ever got to answer
struct RecordingRepository {
    delay: Duration,
    answered: Arc<AtomicBool>,
}

#[async_trait]
impl TrainRepository for RecordingRepository {
    async fn search_trains(&self, _query: &SearchQuery) -> CoreResult<Vec<Train>> {
        tokio::time::sleep(self.delay).await;
        self.answered.store(true, Ordering::SeqCst);
        Ok(fixtures::trains())
    }

    async fn list_cities(&self) -> CoreResult<Vec<City>> {
        Ok(fixtures::cities())
    }
}

fn english_config(delay_ms: u64) -> Config {
    let mut config = Config::default();
    config.app.default_locale = Locale::English;
    config.business_rules.search_delay_ms = delay_ms;
    config
}

fn recording_shell(answered: Arc<AtomicBool>) -> Shell {
    let repo = RecordingRepository {
        delay: Duration::from_millis(1000),
        answered,
    };
    let ctx = AppContext::new(english_config(1000), Arc::new(repo));
    Shell::new(ctx, StdRng::seed_from_u64(2024))
}

async fn run(shell: &mut Shell, line: &str) -> String {
    match shell.execute(line).await {
        Outcome::Continue(text) => text,
        Outcome::Quit => panic!("'{}' quit the shell", line),
    }
}

#[tokio::test]
async fn test_search_to_confirmation() {
    let ctx = AppContext::from_config(english_config(0));
    let mut shell = Shell::new(ctx, StdRng::seed_from_u64(7));

    run(&mut shell, "search khartoum atbara 2024-01-15 1 business").await;
    let text = run(&mut shell, "results").await;
    assert!(text.contains("4 trains found"), "{}", text);

    let text = run(&mut shell, "filter class business").await;
    assert!(text.contains("Al Haramain Express"));
    assert!(!text.contains("Saudi Express"));

    let text = run(&mut shell, "book 1").await;
    assert_eq!(shell.route(), Route::Booking);
    assert!(text.contains("● 1. Passenger Information"));

    let text = run(&mut shell, "next").await;
    assert!(text.contains("Please fill in"), "{}", text);

    run(&mut shell, "passenger name_ar أحمد محمد").await;
    run(&mut shell, "passenger name_en Ahmed Mohamed").await;
    run(&mut shell, "passenger id P1234567").await;
    run(&mut shell, "passenger phone +249 123 456 789").await;
    run(&mut shell, "passenger dob 1990-05-01").await;
    let text = run(&mut shell, "next").await;
    assert!(text.contains("● 2. Seat Selection"), "{}", text);

    let text = run(&mut shell, "seat 4").await;
    assert!(text.starts_with("Occupied: 4"), "{}", text);
    let text = run(&mut shell, "seat 12").await;
    assert!(text.contains("Selected seat: 12A"));

    let text = run(&mut shell, "next").await;
    assert!(text.contains("● 3. Payment"));
    assert!(text.contains("Secure payment guaranteed"));

    let text = run(&mut shell, "prev").await;
    assert!(text.contains("● 2. Seat Selection"));
    assert!(text.contains("Seat: 12A"));
    run(&mut shell, "next").await;

    let text = run(&mut shell, "next").await;
    assert!(text.contains("Card Number"), "{}", text);
    assert!(text.contains("Please accept the terms and conditions"));

    let text = run(&mut shell, "pay bank").await;
    assert!(text.contains("(x) Bank Transfer Pay via your bank"), "{}", text);
    run(&mut shell, "pay mobile").await;
    run(&mut shell, "terms").await;
    let text = run(&mut shell, "next").await;
    assert!(text.contains("Booking Confirmed"), "{}", text);
    assert!(text.contains("Booking Reference: SD-2024-"));
    assert!(text.contains("Seat: 12A"));
    assert!(text.contains("Total: 175 SDG"));
    assert!(text.contains("[View My Trips: trips]  [Book Another Trip: home]"));

    let text = run(&mut shell, "prev").await;
    assert!(text.contains("Cannot go previous"), "{}", text);
}

#[tokio::test]
async fn test_confirmed_booking_not_on_dashboard() {
    let ctx = AppContext::from_config(english_config(0));
    let mut shell = Shell::new(ctx, StdRng::seed_from_u64(9));

    run(&mut shell, "search khartoum port.sudan 2024-02-01").await;
    run(&mut shell, "results").await;
    run(&mut shell, "book 2").await;
    for line in [
        "passenger name_ar فاطمة",
        "passenger name_en Fatima",
        "passenger id 998877",
        "passenger phone 0912345678",
        "passenger dob 1995-03-03",
        "next",
        "seat 1",
        "next",
        "card Fatima | 4111 1111 1111 1111 | 01/28 | 321",
        "terms",
        "next",
    ] {
        run(&mut shell, line).await;
    }
    let confirmed = run(&mut shell, "summary").await;
    assert!(confirmed.contains("SD-2024-"));

    let text = run(&mut shell, "trips").await;
    assert_eq!(shell.route(), Route::Dashboard);
    assert!(shell.booking().is_none());
    assert!(text.contains("AT-ABC123456"));
    assert!(!text.contains("SD-2024-"));
}

#[tokio::test]
async fn test_admin_requires_admin_account() {
    let ctx = AppContext::from_config(english_config(0));
    let mut shell = Shell::new(ctx, StdRng::seed_from_u64(1));

    let text = run(&mut shell, "admin").await;
    assert!(text.contains("Access Denied"));

    run(&mut shell, "login omar").await;
    let text = run(&mut shell, "admin").await;
    assert!(text.contains("Access Denied"));
    assert_ne!(shell.route(), Route::Admin);

    run(&mut shell, "login admin").await;
    let text = run(&mut shell, "admin users").await;
    assert_eq!(shell.route(), Route::Admin);
    assert!(text.contains("User Management"));
    assert!(text.contains("admin@atbararail.sd"));

    run(&mut shell, "logout").await;
    assert_eq!(shell.route(), Route::Home);
}

#[tokio::test]
async fn test_dashboard_actions() {
    let ctx = AppContext::from_config(english_config(0));
    let mut shell = Shell::new(ctx, StdRng::seed_from_u64(1));

    let text = run(&mut shell, "trips past").await;
    assert!(text.contains("AT-DEF789012"));

    let text = run(&mut shell, "cancel AT-DEF789012").await;
    assert!(text.contains("cannot be cancelled"), "{}", text);

    let text = run(&mut shell, "cancel AT-ABC123456").await;
    assert!(text.contains("Cancel Trip: AT-ABC123456"));

    let text = run(&mut shell, "download AT-NOPE").await;
    assert!(text.contains("Not found"));
}

#[tokio::test(start_paused = true)]
async fn test_results_arrive_after_delay() {
    let answered = Arc::new(AtomicBool::new(false));
    let mut shell = recording_shell(answered.clone());

    let text = run(&mut shell, "search khartoum atbara 2024-01-15").await;
    assert!(text.contains("Loading"));
    assert!(shell.results().map(|r| r.is_loading()).unwrap_or(false));

    let started = tokio::time::Instant::now();
    let text = run(&mut shell, "results").await;
    assert!(started.elapsed() >= Duration::from_millis(1000));
    assert!(answered.load(Ordering::SeqCst));
    assert!(text.contains("Royal Train"));
}

#[tokio::test(start_paused = true)]
async fn test_leaving_results_discards_pending_load() {
    let answered = Arc::new(AtomicBool::new(false));
    let mut shell = recording_shell(answered.clone());

    run(&mut shell, "search khartoum atbara 2024-01-15").await;
    run(&mut shell, "trips").await;
    assert!(shell.results().is_none());

    tokio::time::sleep(Duration::from_millis(5000)).await;
    assert!(!answered.load(Ordering::SeqCst));
}

#[tokio::test(start_paused = true)]
async fn test_new_search_replaces_pending_load() {
    let answered = Arc::new(AtomicBool::new(false));
    let mut shell = recording_shell(answered.clone());

    run(&mut shell, "search khartoum atbara 2024-01-15").await;
    let first = shell.results().map(|r| r.generation()).unwrap_or_default();
    run(&mut shell, "search kassala sennar 2024-01-20").await;
    let second = shell.results().map(|r| r.generation()).unwrap_or_default();
    assert!(second > first);

    let text = run(&mut shell, "results").await;
    assert!(text.contains("Kassala → Sennar"), "{}", text);
}
