use dioxus::prelude::*;

/// One tile of the home screen's topic chooser.
#[component]
pub fn TopicCard(
    title: &'static str,
    description: &'static str,
    icon: &'static str,
    on_open: EventHandler<()>,
) -> Element {
    rsx! {
        button {
            class: "topic-card",
            r#type: "button",
            onclick: move |_| on_open.call(()),
            span { class: "topic-card-icon", "{icon}" }
            h3 { class: "topic-card-title", "{title}" }
            p { class: "topic-card-description", "{description}" }
            span { class: "topic-card-cta", "Explore →" }
        }
    }
}
