use gloo_timers::callback::Timeout;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::js_sys::Array;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};
use yew::prelude::*;

/// Starting transform for an entrance animation name.
pub fn initial_transform(animation: &str) -> &'static str {
    match animation {
        "fade-up" => "translateY(30px)",
        "fade-down" => "translateY(-30px)",
        "fade-left" => "translateX(30px)",
        "fade-right" => "translateX(-30px)",
        "zoom-in" => "scale(0.8)",
        "zoom-out" => "scale(1.2)",
        _ => "translateY(30px)",
    }
}

fn default_animation() -> String {
    "fade-up".to_string()
}

#[derive(Properties, PartialEq)]
pub struct RevealProps {
    #[prop_or_else(default_animation)]
    pub animation: String,
    #[prop_or_default]
    pub delay_ms: u32,
    #[prop_or_default]
    pub class: Classes,
    pub children: Children,
}

/// Fades its children in the first time they scroll into view.
#[function_component(Reveal)]
pub fn reveal(props: &RevealProps) -> Html {
    let node = use_node_ref();
    let revealed = use_state_eq(|| false);

    {
        let node = node.clone();
        let revealed = revealed.clone();
        let delay_ms = props.delay_ms;
        use_effect_with_deps(
            move |_| {
                let observer = node.cast::<Element>().and_then(|element| {
                    let callback = Closure::wrap(Box::new(
                        move |entries: Array, observer: IntersectionObserver| {
                            for entry in entries.iter() {
                                let entry: IntersectionObserverEntry = entry.unchecked_into();
                                if entry.is_intersecting() {
                                    observer.unobserve(&entry.target());
                                    let revealed = revealed.clone();
                                    Timeout::new(delay_ms, move || revealed.set(true)).forget();
                                }
                            }
                        },
                    )
                        as Box<dyn FnMut(Array, IntersectionObserver)>);

                    let options = IntersectionObserverInit::new();
                    options.set_threshold(&JsValue::from_f64(0.1));
                    options.set_root_margin("0px 0px -50px 0px");
                    let observer = IntersectionObserver::new_with_options(
                        callback.as_ref().unchecked_ref(),
                        &options,
                    )
                    .map_err(|e| log::warn!("IntersectionObserver unavailable: {:?}", e))
                    .ok()?;
                    observer.observe(&element);
                    Some((observer, callback))
                });

                move || {
                    if let Some((observer, _callback)) = observer {
                        observer.disconnect();
                    }
                }
            },
            (),
        );
    }

    let style = if *revealed {
        "opacity: 1; transform: none; transition: opacity 0.6s ease, transform 0.6s ease;".to_string()
    } else {
        format!(
            "opacity: 0; transform: {}; transition: opacity 0.6s ease, transform 0.6s ease;",
            initial_transform(&props.animation)
        )
    };

    html! {
        <div
            ref={node}
            class={classes!(props.class.clone(), (*revealed).then_some("aos-animate"))}
            data-aos={props.animation.clone()}
            {style}
        >
            { for props.children.iter() }
        </div>
    }
}
