use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys::Element;
use yew::prelude::*;
use yew_hooks::prelude::*;

use crate::utils::dom;
use crate::utils::lightbox::{GalleryImage, LightboxAction, LightboxState};

#[derive(Properties, PartialEq)]
pub struct GalleryProps {
    pub images: Vec<GalleryImage>,
}

#[function_component(Gallery)]
pub fn gallery(props: &GalleryProps) -> Html {
    let lightbox = {
        let images = Rc::new(props.images.clone());
        use_reducer(move || LightboxState::new(images))
    };
    let backdrop_ref = use_node_ref();

    // Page behind the modal must not scroll while it is open.
    use_effect_with_deps(
        |open: &bool| {
            let locked = *open;
            if locked {
                dom::set_body_overflow("hidden");
            }
            move || {
                if locked {
                    dom::set_body_overflow("auto");
                }
            }
        },
        lightbox.is_open(),
    );

    {
        let lightbox = lightbox.clone();
        use_event_with_window("keydown", move |e: KeyboardEvent| {
            lightbox.dispatch(LightboxAction::Key(e.key()));
        });
    }

    let dispatch = |action: fn() -> LightboxAction| {
        let lightbox = lightbox.clone();
        Callback::from(move |_: MouseEvent| lightbox.dispatch(action()))
    };

    let on_backdrop = {
        let lightbox = lightbox.clone();
        let backdrop_ref = backdrop_ref.clone();
        Callback::from(move |e: MouseEvent| {
            let target = e.target().and_then(|t| t.dyn_into::<Element>().ok());
            if target.is_some() && target == backdrop_ref.cast::<Element>() {
                lightbox.dispatch(LightboxAction::Close);
            }
        })
    };

    let shown = lightbox.image();

    html! {
        <section id="gallery" class="gallery">
            <div class="container">
                <h2 class="section-title">{"Inside the Studio"}</h2>
                <div class="gallery-grid">
                    { for props.images.iter().enumerate().map(|(i, image)| {
                        let onclick = {
                            let lightbox = lightbox.clone();
                            Callback::from(move |_: MouseEvent| lightbox.dispatch(LightboxAction::Open(i)))
                        };
                        html! {
                            <div class="gallery-item" {onclick}>
                                <img src={image.src.clone()} alt={image.alt.clone()} loading="lazy" />
                                <div class="gallery-overlay"><i class="fas fa-search-plus"></i></div>
                            </div>
                        }
                    }) }
                </div>
            </div>
            <div
                id="lightbox"
                ref={backdrop_ref}
                class={classes!("lightbox", lightbox.is_open().then_some("active"))}
                onclick={on_backdrop}
            >
                <div class="lightbox-content">
                    <button class="lightbox-close" onclick={dispatch(|| LightboxAction::Close)} aria-label="Close">
                        {"\u{00d7}"}
                    </button>
                    <button class="lightbox-prev" onclick={dispatch(|| LightboxAction::Prev)} aria-label="Previous image">
                        <i class="fas fa-chevron-left"></i>
                    </button>
                    <img
                        id="lightbox-img"
                        src={shown.map(|img| img.src.clone()).unwrap_or_default()}
                        alt={shown.map(|img| img.alt.clone()).unwrap_or_default()}
                    />
                    <button class="lightbox-next" onclick={dispatch(|| LightboxAction::Next)} aria-label="Next image">
                        <i class="fas fa-chevron-right"></i>
                    </button>
                    if let Some(image) = lightbox.current() {
                        <p class="lightbox-caption">
                            {format!("{} ({}/{})", image.alt, lightbox.current_index() + 1, props.images.len())}
                        </p>
                    }
                </div>
            </div>
        </section>
    }
}
