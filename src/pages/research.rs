//! Research page - questions, topics and policy.

use dioxus::prelude::*;
use panorama_core::research::{policy_detail, topic_detail, POLICY_IDS, QUESTIONS, TOPIC_IDS};
use panorama_core::{Connection, ResearchPage, ResearchSection};
use panorama_ui::{Button, ButtonVariant, DetailPanel};

use crate::app::Route;

fn highlight_class(base: &str, highlighted: bool) -> String {
    if highlighted {
        format!("{base} highlighted")
    } else {
        base.to_string()
    }
}

#[component]
pub fn Research() -> Element {
    let mut page = use_signal(ResearchPage::new);
    let section = page.read().section();

    rsx! {
        main { class: "research",
            Link { class: "back-link", to: Route::Showcase {}, "\u{2190} Back" }

            nav { class: "research-nav",
                for candidate in ResearchSection::ALL {
                    Button {
                        key: "{candidate.id()}",
                        variant: ButtonVariant::Nav,
                        active: candidate == section,
                        onclick: move |_| page.write().show_section(candidate),
                        "{candidate.label()}"
                    }
                }
            }

            {match section {
                ResearchSection::Questions => rsx! { QuestionList { page } },
                ResearchSection::Topics => rsx! { TopicList { page } },
                ResearchSection::Policy => rsx! { PolicyList { page } },
            }}

            DetailPanel {
                detail: page.read().detail().cloned(),
                on_close: move |_| page.write().close_detail(),
            }
        }
    }
}

#[component]
fn QuestionList(page: Signal<ResearchPage>) -> Element {
    let open = page.read().open_question();

    rsx! {
        section { id: "questions", class: "research-section active",
            for (i, question) in QUESTIONS.iter().enumerate() {
                {
                    let number = i as u8 + 1;
                    let class = if open == Some(number) { "question-card expanded" } else { "question-card" };
                    rsx! {
                        article {
                            key: "{number}",
                            class,
                            onclick: move |_| page.write().toggle_question(number),
                            onmouseenter: move |_| page.write().hover_question(number),
                            onmouseleave: move |_| page.write().clear_highlights(),
                            span { class: "question-number", "{number:02}" }
                            p { "{question}" }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn TopicList(page: Signal<ResearchPage>) -> Element {
    rsx! {
        section { id: "topics", class: "research-section active",
            for id in TOPIC_IDS {
                if let Some(detail) = topic_detail(id) {
                    div {
                        key: "{id}",
                        class: highlight_class("topic", page.read().is_highlighted(&Connection::Topic(id))),
                        "data-topic": id,
                        onclick: move |_| {
                            page.write().show_topic(id);
                        },
                        h3 { "{detail.title}" }
                    }
                }
            }
        }
    }
}

#[component]
fn PolicyList(page: Signal<ResearchPage>) -> Element {
    rsx! {
        section { id: "policy", class: "research-section active",
            for id in POLICY_IDS {
                if let Some(detail) = policy_detail(id) {
                    div {
                        key: "{id}",
                        class: highlight_class("policy-item", page.read().is_highlighted(&Connection::Policy(id))),
                        "data-policy": id,
                        onclick: move |_| {
                            page.write().show_policy(id);
                        },
                        h3 { "{detail.title}" }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn highlight_appends_class() {
        assert_eq!(highlight_class("topic", true), "topic highlighted");
        assert_eq!(highlight_class("topic", false), "topic");
    }
}
