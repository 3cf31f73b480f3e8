use dioxus::prelude::*;

use estimate_builder::util::version::{version_label, APP_NAME};

use crate::app::Route;
use crate::ui::theme;

#[component]
pub fn Shell(children: Element) -> Element {
    let current_route = use_route::<Route>();
    let nav = use_navigator();
    let version = version_label();

    rsx! {
        div { class: "app",
            header {
                class: "app-header",
                div { class: "header-inner",
                    div {
                        h1 { class: "app-title", "{APP_NAME}" }
                        p { class: "{theme::TEXT_MUTED}", "Cost, markup and margin at a glance" }
                    }
                    nav { class: "nav",
                        NavButton {
                            active: matches!(current_route, Route::Estimate {}),
                            onclick: move |_| { nav.push(Route::Estimate {}); },
                            label: "Estimate",
                        }
                        NavButton {
                            active: matches!(current_route, Route::CostCatalog {}),
                            onclick: move |_| { nav.push(Route::CostCatalog {}); },
                            label: "Catalog",
                        }
                    }
                }
            }
            main { class: "app-main",
                {children}
            }
            footer { class: "app-footer {theme::TEXT_MUTED}", "{APP_NAME} {version}" }
        }
    }
}

#[component]
fn NavButton(active: bool, onclick: EventHandler<()>, label: &'static str) -> Element {
    rsx! {
        button {
            class: "{theme::nav_button(active)}",
            onclick: move |_| onclick.call(()),
            "{label}"
        }
    }
}
