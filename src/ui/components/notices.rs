use std::time::Duration;

use dioxus::prelude::*;

use estimate_builder::domain::{EstimateNotice, NoticeFeed, NoticeLevel};
use estimate_builder::util::settings;

const NOTICE_LIFETIME: Duration = Duration::from_secs(4);

pub fn post_notice(mut feed: Signal<NoticeFeed>, notice: EstimateNotice) {
    tracing::debug!(level = ?notice.level(), "{}", notice.message(""));
    feed.with_mut(|feed| feed.post(notice));
}

fn level_class(level: NoticeLevel) -> &'static str {
    match level {
        NoticeLevel::Info => "notice-info",
        NoticeLevel::Success => "notice-success",
        NoticeLevel::Warning => "notice-warning",
        NoticeLevel::Error => "notice-error",
    }
}

/// Bottom-of-window stack showing the outcome of recent estimate edits.
#[component]
pub fn NoticeStack() -> Element {
    let feed = use_context::<Signal<NoticeFeed>>();
    let currency = &settings::current().currency_suffix;
    let shown: Vec<(u64, NoticeLevel, String)> = feed
        .read()
        .entries()
        .map(|posted| {
            (
                posted.seq,
                posted.notice.level(),
                posted.notice.message(currency),
            )
        })
        .collect();

    if shown.is_empty() {
        return rsx! { Fragment {} };
    }

    rsx! {
        div {
            class: "notice-stack",
            ul {
                for (seq, level, text) in shown {
                    NoticeCard { key: "{seq}", seq, level, text }
                }
            }
        }
    }
}

#[component]
fn NoticeCard(seq: u64, level: NoticeLevel, text: String) -> Element {
    let mut feed = use_context::<Signal<NoticeFeed>>();
    let tone = level_class(level);

    let _dismiss_timer = use_future(move || {
        let mut feed = feed;
        async move {
            tokio::time::sleep(NOTICE_LIFETIME).await;
            feed.with_mut(|feed| feed.dismiss(seq));
        }
    });

    rsx! {
        li {
            class: "notice {tone}",
            p { class: "notice-text", "{text}" }
            button {
                class: "notice-dismiss",
                onclick: move |_| {
                    feed.with_mut(|feed| feed.dismiss(seq));
                },
                "Dismiss"
            }
        }
    }
}
