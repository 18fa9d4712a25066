use gloo_timers::callback::Timeout;
use yew::prelude::*;

use crate::config::{ContactShortcut, BUTTON_PRESS_MS};

#[derive(Properties, PartialEq)]
pub struct WhatsappFloatProps {
    pub shortcut: ContactShortcut,
}

/// Floating chat shortcut. Only the press feedback lives here; the link
/// itself opens WhatsApp in a new tab.
#[function_component(WhatsappFloat)]
pub fn whatsapp_float(props: &WhatsappFloatProps) -> Html {
    let pressed = use_state_eq(|| false);

    let onclick = {
        let pressed = pressed.clone();
        Callback::from(move |_: MouseEvent| {
            log::debug!("WhatsApp shortcut clicked");
            pressed.set(true);
            let pressed = pressed.clone();
            Timeout::new(BUTTON_PRESS_MS, move || pressed.set(false)).forget();
        })
    };

    let transform = if *pressed { "transform: scale(0.95);" } else { "transform: scale(1);" };

    html! {
        <div id="whatsapp-float" class="whatsapp-float">
            <a
                class="whatsapp-btn"
                href={props.shortcut.chat_url()}
                target="_blank"
                rel="noopener noreferrer"
                style={transform}
                aria-label="Chat with us on WhatsApp"
                {onclick}
            >
                <i class="fab fa-whatsapp"></i>
            </a>
        </div>
    }
}
