use std::sync::Arc;

use atbara_booking::{ReferenceGenerator, WizardConfig};
use atbara_catalog::PricingPolicy;
use atbara_core::identity::{InMemorySession, SessionProvider};
use atbara_core::locale::{Locale, StaticTranslator, TextDirection, Translator};
use atbara_core::repository::{FixtureTrainRepository, TrainRepository};
use atbara_core::search::FilterCriteria;
use atbara_store::Config;

/// Everything a screen needs, passed explicitly instead of living in globals
#[derive(Clone)]
pub struct AppContext {
    pub config: Config,
    pub session: InMemorySession,
    pub trains: Arc<dyn TrainRepository>,
    translator: Arc<dyn Translator>,
    generation: u64,
}

impl AppContext {
    pub fn new(config: Config, trains: Arc<dyn TrainRepository>) -> Self {
        let translator = Arc::new(StaticTranslator::new(config.app.default_locale));
        Self {
            config,
            session: InMemorySession::new(),
            trains,
            translator,
            generation: 0,
        }
    }

    /// Context backed by the fixture repository with the configured delay
    pub fn from_config(config: Config) -> Self {
        let repo = FixtureTrainRepository::new(config.business_rules.search_delay());
        Self::new(config, Arc::new(repo))
    }

    pub fn locale(&self) -> Locale {
        self.translator.locale()
    }

    pub fn direction(&self) -> TextDirection {
        self.locale().direction()
    }

    pub fn set_locale(&mut self, locale: Locale) {
        if locale != self.locale() {
            tracing::info!(locale = locale.code(), "Locale changed");
            self.translator = Arc::new(StaticTranslator::new(locale));
        }
    }

    pub fn t(&self, key: &str) -> String {
        self.translator.lookup(key).into_owned()
    }

    pub fn price(&self, amount: i32) -> String {
        atbara_shared::format_price(amount, &self.config.business_rules.currency)
    }

    pub fn greeting_name(&self) -> Option<&str> {
        self.session.current_user().map(|u| u.name.as_str())
    }

    pub fn wizard_config(&self) -> WizardConfig {
        let rules = &self.config.business_rules;
        WizardConfig {
            pricing: PricingPolicy::new(rules.service_fee, rules.currency.clone()),
            references: ReferenceGenerator::new(rules.reference_prefix.clone()),
        }
    }

    pub fn default_filter(&self) -> FilterCriteria {
        FilterCriteria {
            price_max: self.config.business_rules.default_price_max,
            ..FilterCriteria::default()
        }
    }

    /// Fresh id for a results view; loads tagged with an older id are dropped
    pub fn next_generation(&mut self) -> u64 {
        self.generation += 1;
        self.generation
    }

    #[cfg(test)]
    pub(crate) fn for_tests(locale: Locale) -> Self {
        let mut config = Config::default();
        config.app.default_locale = locale;
        config.business_rules.search_delay_ms = 0;
        Self::from_config(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_locale_switch() {
        let mut ctx = AppContext::for_tests(Locale::Arabic);
        assert_eq!(ctx.direction(), TextDirection::RightToLeft);
        assert_eq!(ctx.t("search"), "بحث");

        ctx.set_locale(Locale::English);
        assert_eq!(ctx.direction(), TextDirection::LeftToRight);
        assert_eq!(ctx.t("search"), "Search");
    }

    #[test]
    fn test_wizard_config_follows_business_rules() {
        let mut ctx = AppContext::for_tests(Locale::English);
        ctx.config.business_rules.service_fee = 40;
        let cfg = ctx.wizard_config();
        assert_eq!(cfg.pricing.total(100), 140);
        assert_eq!(ctx.price(525), "525 SDG");
    }

    #[test]
    fn test_generations_increase() {
        let mut ctx = AppContext::for_tests(Locale::English);
        let first = ctx.next_generation();
        assert!(ctx.next_generation() > first);
    }
}
