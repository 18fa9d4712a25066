use gloo_timers::callback::Timeout;
use log::info;
use std::rc::Rc;
use web_sys::ErrorEvent;
use yew::prelude::*;
use yew_hooks::prelude::*;

mod config;
mod pages {
    pub mod landing;
}
mod components {
    pub mod back_to_top;
    pub mod contact_form;
    pub mod gallery;
    pub mod nav;
    pub mod notification;
    pub mod plans;
    pub mod reveal;
    pub mod scroll_progress;
    pub mod testimonials;
    pub mod theme_toggle;
    pub mod whatsapp_float;
}
mod utils {
    pub mod carousel;
    pub mod contact_state;
    pub mod cycle;
    pub mod dom;
    pub mod lightbox;
    pub mod menu;
    pub mod notifications;
    pub mod plan_filter;
    pub mod prefill;
    pub mod scroll_spy;
    pub mod storage;
    pub mod theme;
    pub mod throttle;
    pub mod validation;
}

use components::{
    back_to_top::BackToTop,
    nav::Nav,
    notification::NotificationHost,
    scroll_progress::ScrollProgress,
    whatsapp_float::WhatsappFloat,
};
use config::LOADED_CLASS_DELAY_MS;
use pages::landing::Landing;
use utils::dom;
use utils::notifications::{NotificationContext, NotificationQueue};

#[function_component]
fn App() -> Html {
    let content = use_state(|| {
        config::load_site_content()
            .map(Rc::new)
            .inspect_err(|e| log::error!("Failed to load site content: {}", e))
    });
    let notifications = use_reducer(NotificationQueue::default);

    // Focus outlines only for keyboard users.
    use_event_with_window("keydown", |e: KeyboardEvent| {
        if e.key() == "Tab" {
            dom::set_body_class("keyboard-navigation", true);
        }
    });
    use_event_with_window("mousedown", |_: MouseEvent| {
        dom::set_body_class("keyboard-navigation", false);
    });

    // Uncaught script errors are only reported, never handled.
    use_event_with_window("error", |e: ErrorEvent| {
        gloo_console::error!("JavaScript Error:", e.message());
    });

    use_effect_with_deps(
        |_| {
            let timeout = Timeout::new(LOADED_CLASS_DELAY_MS, || dom::set_body_class("loaded", true));
            move || drop(timeout)
        },
        (),
    );

    let content = match &*content {
        Ok(content) => content.clone(),
        Err(e) => {
            return html! {
                <div class="content-error">
                    <h1>{"Something went wrong"}</h1>
                    <p>{e.to_string()}</p>
                </div>
            };
        }
    };

    html! {
        <ContextProvider<NotificationContext> context={notifications}>
            <ScrollProgress />
            <Nav brand={content.brand.clone()} sections={content.sections.clone()} />
            <Landing content={content.clone()} />
            <BackToTop />
            <WhatsappFloat shortcut={content.contact_shortcut.clone()} />
            <NotificationHost />
        </ContextProvider<NotificationContext>>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(config::log_level()).expect("error initializing log");

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
