use dioxus::prelude::*;
use dioxus_router::{Link, Outlet, Routable, use_navigator};

use crate::context::{AppContext, LaunchPage};
use crate::views::{AmbiguityView, GrammarView, HomeView, TreesView};

#[derive(Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Layout)]
        #[route("/", HomeView)] Home {},
        #[route("/grammar", GrammarView)] Grammar {},
        #[route("/trees", TreesView)] Trees {},
        #[route("/ambiguity", AmbiguityView)] Ambiguity {},
}

impl Route {
    /// Resolves a topic slug from the content crate to its page.
    #[must_use]
    pub fn for_topic(slug: &str) -> Option<Self> {
        match slug {
            "grammar" => Some(Self::Grammar {}),
            "trees" => Some(Self::Trees {}),
            "ambiguity" => Some(Self::Ambiguity {}),
            _ => None,
        }
    }
}

impl From<LaunchPage> for Route {
    fn from(page: LaunchPage) -> Self {
        match page {
            LaunchPage::Home => Self::Home {},
            LaunchPage::Grammar => Self::Grammar {},
            LaunchPage::Trees => Self::Trees {},
            LaunchPage::Ambiguity => Self::Ambiguity {},
        }
    }
}

#[component]
fn Layout() -> Element {
    let ctx = use_context::<AppContext>();
    let navigator = use_navigator();

    // Honor `--page` exactly once, on the first layout render.
    use_effect(move || {
        if let Some(page) = ctx.take_launch_redirect() {
            let _ = navigator.push(Route::from(page));
        }
    });

    rsx! {
        div { class: "app",
            TopBar {}
            main { class: "content",
                Outlet::<Route> {}
            }
        }
    }
}

#[component]
fn TopBar() -> Element {
    rsx! {
        nav { class: "topbar",
            h1 { class: "topbar-brand", "Syntax Lab" }
            ul { class: "topbar-links",
                li { Link { to: Route::Home {}, "Home" } }
                li { Link { to: Route::Grammar {}, "Grammar" } }
                li { Link { to: Route::Trees {}, "Trees" } }
                li { Link { to: Route::Ambiguity {}, "Ambiguity" } }
            }
        }
    }
}
