use yew::prelude::*;

use crate::utils::dom;
use crate::utils::storage::LocalStorage;
use crate::utils::theme::{load_theme, toggle_theme, Theme};

const THEME_ATTRIBUTE: &str = "data-theme";

#[function_component(ThemeToggle)]
pub fn theme_toggle() -> Html {
    let theme = use_state_eq(|| load_theme(&LocalStorage));

    // Keep the root attribute in sync, including the saved theme on first render.
    use_effect_with_deps(
        move |theme: &Theme| {
            dom::set_root_attribute(THEME_ATTRIBUTE, theme.as_str());
            || ()
        },
        *theme,
    );

    let onclick = {
        let theme = theme.clone();
        Callback::from(move |_: MouseEvent| {
            let current = dom::root_attribute(THEME_ATTRIBUTE);
            let next = toggle_theme(current.as_deref(), &LocalStorage);
            log::info!("Theme switched to {}", next);
            theme.set(next);
        })
    };

    html! {
        <button id="theme-toggle" class="theme-toggle" aria-label="Toggle theme" {onclick}>
            <i class={theme.icon_class()}></i>
        </button>
    }
}
