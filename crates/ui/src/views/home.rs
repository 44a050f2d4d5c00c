use dioxus::prelude::*;
use dioxus_router::use_navigator;

use crate::components::{ShareCard, TopicCard};
use crate::routes::Route;

#[component]
pub fn HomeView() -> Element {
    let navigator = use_navigator();
    let topics = content::topics();

    rsx! {
        div { class: "page home-page",
            header { class: "home-header",
                h2 { class: "home-title", "Compilers" }
                p { class: "home-subtitle",
                    "Pick a topic to explore the theory behind compilers"
                }
            }

            div { class: "topic-grid",
                for topic in topics {
                    TopicCard {
                        key: "{topic.slug}",
                        title: topic.title,
                        description: topic.description,
                        icon: topic.icon,
                        on_open: move |()| {
                            if let Some(route) = Route::for_topic(topic.slug) {
                                let _ = navigator.push(route);
                            }
                        },
                    }
                }
            }

            section { class: "home-share",
                ShareCard {}
            }
        }
    }
}
