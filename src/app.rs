use std::cell::RefCell;
use std::rc::Rc;

use dioxus::prelude::*;
use panorama_core::{CursorState, HashSync, PanelNavigator};
use panorama_ui::CustomCursor;

use crate::context::{get_config, SharedConfig, SharedFragments};
use crate::pages::{Intro, JourneyRoute, Research, Showcase, ShowcasePanel, Wardrobe};
use crate::theme::GLOBAL_STYLES;

/// Application routes.
///
/// - `/` - Paneled showcase, starting at the first panel
/// - `/panel/:id` - Showcase with the panel addressed by fragment id
/// - `/intro`, `/research`, `/wardrobe`, `/route` - Stand-alone sub-pages
#[derive(Clone, Routable, PartialEq, Debug)]
pub enum Route {
    #[route("/")]
    Showcase {},
    #[route("/panel/:id")]
    ShowcasePanel { id: String },
    #[route("/intro")]
    Intro {},
    #[route("/research")]
    Research {},
    #[route("/wardrobe")]
    Wardrobe {},
    #[route("/route")]
    JourneyRoute {},
}

/// Root application component.
///
/// Provides global styles, configuration, the panel navigator with its
/// fragment tracker, the custom cursor and routing.
#[component]
pub fn App() -> Element {
    let config: SharedConfig = use_hook(get_config);
    let fragments: SharedFragments = use_hook({
        let config = config.clone();
        move || Rc::new(RefCell::new(HashSync::from_config(&config)))
    });
    let navigator = use_signal({
        let config = config.clone();
        let fragments = fragments.clone();
        move || {
            let mut navigator = PanelNavigator::new(&config);
            navigator.subscribe(Box::new(fragments));
            navigator
        }
    });
    let mut cursor = use_signal(CursorState::default);

    use_context_provider(|| config.clone());
    use_context_provider(|| fragments.clone());
    use_context_provider(|| navigator);
    use_context_provider(|| cursor);

    rsx! {
        style { {GLOBAL_STYLES} }
        div {
            class: "app-root",
            onmousemove: move |evt: MouseEvent| {
                let point = evt.client_coordinates();
                cursor.write().move_to(point.x, point.y);
            },
            onmouseleave: move |_| cursor.write().leave(),
            onmouseenter: move |_| cursor.write().enter(),

            Router::<Route> {}
            CustomCursor { state: cursor() }
        }
    }
}
