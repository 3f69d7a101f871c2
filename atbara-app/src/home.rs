use atbara_catalog::City;
use atbara_core::search::SearchForm;

use crate::context::AppContext;
use crate::error::AppResult;

/// Landing page: the served stations and a search form holding its defaults.
#[derive(Debug, Clone)]
pub struct HomeScreen {
    pub cities: Vec<City>,
    pub form: SearchForm,
}

impl HomeScreen {
    pub async fn open(ctx: &AppContext) -> AppResult<Self> {
        let cities = ctx.trains.list_cities().await?;
        Ok(Self {
            cities,
            form: SearchForm::default(),
        })
    }

    pub fn render(&self, ctx: &AppContext) -> String {
        let mut out = vec![
            format!("== {} ==", ctx.t("atbara.rail")),
            ctx.t("book.your.journey"),
            format!("-- {} --", ctx.t("cities")),
        ];
        for city in &self.cities {
            out.push(format!("{:<12} {}", city.id, ctx.t(&city.id)));
        }
        out.push(format!(
            "{}: {}  {}: {}  {}: {}  {} {}  {}: {}",
            ctx.t("from"),
            placeholder(&self.form.from),
            ctx.t("to"),
            placeholder(&self.form.to),
            ctx.t("travel.date"),
            placeholder(&self.form.date),
            self.form.passengers,
            ctx.t("passengers"),
            ctx.t("class"),
            ctx.t(&self.form.class),
        ));
        out.push(format!(
            "[{}: search <from> <to> <YYYY-MM-DD> [passengers] [class]]",
            ctx.t("search.trains")
        ));
        out.join("\n")
    }
}

fn placeholder(value: &str) -> &str {
    if value.is_empty() {
        "-"
    } else {
        value
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use atbara_core::locale::Locale;

    #[tokio::test]
    async fn test_lists_every_city_with_local_name() {
        let ctx = AppContext::for_tests(Locale::Arabic);
        let home = HomeScreen::open(&ctx).await.unwrap();
        assert_eq!(home.cities.len(), 9);

        let text = home.render(&ctx);
        assert!(text.contains("port.sudan"));
        assert!(text.contains("بورتسودان"));
    }

    #[tokio::test]
    async fn test_form_defaults() {
        let ctx = AppContext::for_tests(Locale::English);
        let home = HomeScreen::open(&ctx).await.unwrap();
        let text = home.render(&ctx);
        assert!(text.contains("From: -  To: -  Travel Date: -  1 passengers  Class: Economy"));
        assert!(text.contains("wad.medani   Wad Medani"));
    }
}
