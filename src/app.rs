use std::sync::Arc;

use dioxus::prelude::*;

use estimate_builder::domain::{Catalog, EstimateSession, NoticeFeed};
use estimate_builder::util::{
    assets,
    settings::{self, Settings},
};

use crate::ui::{
    components::notices::NoticeStack,
    pages::{CatalogPage, EstimatePage},
    shell::Shell,
};

#[derive(Routable, Clone, PartialEq)]
pub enum Route {
    #[route("/")]
    Estimate {},
    #[route("/catalog")]
    CostCatalog {},
}

#[component]
pub fn App() -> Element {
    let session = use_signal(|| start_session(settings::current()));
    use_context_provider(|| session);

    let notices = use_signal(NoticeFeed::default);
    use_context_provider(|| notices);

    rsx! {
        document::Style { "{assets::main_css()}" }
        Router::<Route> {}
        NoticeStack {}
    }
}

/// One session per window; nothing carries over between launches.
fn start_session(settings: &Settings) -> EstimateSession {
    let catalog = match Catalog::builtin() {
        Ok(catalog) => catalog,
        Err(err) => {
            tracing::error!("failed to load catalog: {err}");
            Catalog::default()
        }
    };
    tracing::info!(
        items = catalog.len(),
        markup_rate = settings.default_markup_rate,
        "starting estimate session"
    );
    EstimateSession::with_settings(Arc::new(catalog), settings)
}

#[component]
pub fn Estimate() -> Element {
    rsx! { Shell { EstimatePage {} } }
}

#[component]
pub fn CostCatalog() -> Element {
    rsx! { Shell { CatalogPage {} } }
}
