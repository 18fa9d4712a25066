use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::window;
use yew::prelude::*;
use yew_hooks::prelude::*;

use crate::components::theme_toggle::ThemeToggle;
use crate::config::{Section, ANCHOR_OFFSET_PX, HEADER_ALLOWANCE_PX, NAVBAR_SCROLLED_PX, SCROLL_THROTTLE_MS};
use crate::utils::dom;
use crate::utils::menu::{MenuAction, MenuState};
use crate::utils::scroll_spy::active_section;
use crate::utils::throttle::Throttle;

/// Click handler for in-page links: smooth scroll to the section instead of
/// jumping, leaving room for the fixed navbar.
pub fn scroll_to_anchor(id: &str) -> Callback<MouseEvent> {
    let id = id.to_string();
    Callback::from(move |e: MouseEvent| {
        e.prevent_default();
        dom::scroll_to_section(&id, ANCHOR_OFFSET_PX);
    })
}

#[derive(Properties, PartialEq)]
pub struct NavProps {
    pub brand: String,
    pub sections: Vec<Section>,
}

#[function_component(Nav)]
pub fn nav(props: &NavProps) -> Html {
    let NavProps { brand, sections } = props;
    let menu = use_reducer_eq(MenuState::default);
    let is_scrolled = use_state_eq(|| false);
    let active = use_state_eq(|| None::<String>);
    let nav_ref = use_node_ref();

    {
        let is_scrolled = is_scrolled.clone();
        let active = active.clone();
        let ids: Vec<String> = sections.iter().map(|s| s.id.clone()).collect();
        use_effect_with_deps(move |ids: &Vec<String>| {
            let ids = ids.clone();
            let mut throttle = Throttle::new(SCROLL_THROTTLE_MS);

            let scroll_callback = Closure::wrap(Box::new(move || {
                let scroll_y = dom::scroll_y();
                is_scrolled.set(scroll_y > NAVBAR_SCROLLED_PX);

                if throttle.ready(dom::now_ms()) {
                    let bounds = dom::section_bounds(&ids);
                    active.set(active_section(&bounds, scroll_y, HEADER_ALLOWANCE_PX).map(str::to_string));
                }
            }) as Box<dyn FnMut()>);

            let listener = window().and_then(|window| {
                window
                    .add_event_listener_with_callback("scroll", scroll_callback.as_ref().unchecked_ref())
                    .ok()
                    .map(|_| window)
            });

            move || {
                if let Some(window) = listener {
                    let _ = window.remove_event_listener_with_callback(
                        "scroll",
                        scroll_callback.as_ref().unchecked_ref(),
                    );
                }
            }
        }, ids);
    }

    // Clicking anywhere outside the navbar closes the mobile menu.
    {
        let menu = menu.clone();
        use_click_away(nav_ref.clone(), move |_: Event| {
            menu.dispatch(MenuAction::ClickAway);
        });
    }

    let toggle_menu = {
        let menu = menu.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu.dispatch(MenuAction::Toggle);
        })
    };

    let menu_state = menu.is_open().then_some("active");

    html! {
        <nav id="navbar" ref={nav_ref} class={classes!("navbar", (*is_scrolled).then_some("scrolled"))}>
            <div class="nav-container">
                <a href="#home" class="nav-logo" onclick={scroll_to_anchor("home")}>{brand}</a>
                <ul id="nav-menu" class={classes!("nav-menu", menu_state)}>
                    { for sections.iter().map(|section| {
                        let is_active = active.as_deref() == Some(section.id.as_str());
                        let onclick = {
                            let menu = menu.clone();
                            let scroll = scroll_to_anchor(&section.id);
                            Callback::from(move |e: MouseEvent| {
                                menu.dispatch(MenuAction::SelectLink);
                                scroll.emit(e);
                            })
                        };
                        html! {
                            <li class="nav-item">
                                <a
                                    href={format!("#{}", section.id)}
                                    class={classes!("nav-link", is_active.then_some("active"))}
                                    {onclick}
                                >
                                    {&section.label}
                                </a>
                            </li>
                        }
                    }) }
                </ul>
                <div class="nav-actions">
                    <ThemeToggle />
                    <button id="hamburger" class={classes!("hamburger", menu_state)} onclick={toggle_menu} aria-label="Menu">
                        <span class="bar"></span>
                        <span class="bar"></span>
                        <span class="bar"></span>
                    </button>
                </div>
            </div>
        </nav>
    }
}
