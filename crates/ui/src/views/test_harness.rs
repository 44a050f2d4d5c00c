use dioxus::core::NoOpMutations;
use dioxus::prelude::*;
use dioxus_router::{Routable, Router};
use syntax_core::share::ShareLink;

use crate::context::{AppContext, LaunchPage};
use crate::views::{AmbiguityView, GrammarView, HomeView, TreesView};

pub const TEST_SHARE_URL: &str = "https://example.com/syntax-lab";

#[derive(Clone, Copy, PartialEq, Eq)]
pub enum ViewKind {
    Home,
    Grammar,
    Trees,
    Ambiguity,
}

#[derive(Props, Clone)]
struct ViewHarnessProps {
    view: ViewKind,
}

impl PartialEq for ViewHarnessProps {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

impl Eq for ViewHarnessProps {}

#[component]
fn ViewRouterHarness(props: ViewHarnessProps) -> Element {
    let share_link = ShareLink::parse(TEST_SHARE_URL).expect("test share url");
    use_context_provider(|| AppContext::new(share_link, LaunchPage::Home));
    use_context_provider(|| props.view);
    rsx! {
        Router::<TestRoute> {}
    }
}

#[derive(Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum TestRoute {
    #[route("/")]
    Root {},
}

#[component]
fn Root() -> Element {
    let view = use_context::<ViewKind>();
    match view {
        ViewKind::Home => rsx! { HomeView {} },
        ViewKind::Grammar => rsx! { GrammarView {} },
        ViewKind::Trees => rsx! { TreesView {} },
        ViewKind::Ambiguity => rsx! { AmbiguityView {} },
    }
}

pub struct ViewHarness {
    pub dom: VirtualDom,
}

impl ViewHarness {
    pub fn rebuild(&mut self) {
        self.dom.rebuild_in_place();
        drive_dom(&mut self.dom);
    }

    pub fn render(&self) -> String {
        dioxus_ssr::render(&self.dom)
    }
}

pub fn drive_dom(dom: &mut VirtualDom) {
    dom.process_events();
    dom.render_immediate(&mut NoOpMutations);
    dom.process_events();
}

pub fn setup_view_harness(view: ViewKind) -> ViewHarness {
    let dom = VirtualDom::new_with_props(ViewRouterHarness, ViewHarnessProps { view });
    ViewHarness { dom }
}
