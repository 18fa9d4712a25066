use gloo_timers::callback::Interval;
use yew::prelude::*;

use crate::config::{Testimonial, CAROUSEL_INTERVAL_MS};
use crate::utils::carousel::{CarouselAction, CarouselState};

#[derive(Properties, PartialEq)]
pub struct TestimonialsProps {
    pub testimonials: Vec<Testimonial>,
}

#[function_component(Testimonials)]
pub fn testimonials(props: &TestimonialsProps) -> Html {
    let count = props.testimonials.len();
    let carousel = use_reducer(move || CarouselState::new(count));

    // Autoplay runs for the life of the page and is not reset by the
    // prev/next/dot controls.
    {
        let carousel = carousel.clone();
        use_effect_with_deps(
            move |count: &usize| {
                let interval = (*count > 0).then(|| {
                    Interval::new(CAROUSEL_INTERVAL_MS, move || carousel.dispatch(CarouselAction::Tick))
                });
                move || drop(interval)
            },
            count,
        );
    }

    if count == 0 {
        return html! {};
    }

    let on_prev = {
        let carousel = carousel.clone();
        Callback::from(move |_: MouseEvent| carousel.dispatch(CarouselAction::Prev))
    };
    let on_next = {
        let carousel = carousel.clone();
        Callback::from(move |_: MouseEvent| carousel.dispatch(CarouselAction::Next))
    };

    html! {
        <section id="testimonials" class="testimonials">
            <div class="container">
                <h2 class="section-title">{"What Our Members Say"}</h2>
                <div
                    class="testimonial-slider"
                    aria-live="polite"
                    aria-label={format!("Testimonial {} of {}", carousel.current() + 1, count)}
                >
                    { for props.testimonials.iter().enumerate().map(|(i, t)| html! {
                        <div class={classes!("testimonial-card", carousel.is_active(i).then_some("active"))}>
                            <p class="testimonial-text">{"\u{201c}"}{&t.quote}{"\u{201d}"}</p>
                            <div class="testimonial-author">
                                <h4>{&t.author}</h4>
                                <span>{&t.role}</span>
                            </div>
                        </div>
                    }) }
                </div>
                <div class="testimonial-controls">
                    <button class="prev-btn" onclick={on_prev} aria-label="Previous testimonial">
                        <i class="fas fa-chevron-left"></i>
                    </button>
                    <div class="testimonial-dots">
                        { for (0..count).map(|i| {
                            let onclick = {
                                let carousel = carousel.clone();
                                Callback::from(move |_: MouseEvent| carousel.dispatch(CarouselAction::Jump(i)))
                            };
                            html! {
                                <span class={classes!("dot", carousel.is_active(i).then_some("active"))} {onclick}></span>
                            }
                        }) }
                    </div>
                    <button class="next-btn" onclick={on_next} aria-label="Next testimonial">
                        <i class="fas fa-chevron-right"></i>
                    </button>
                </div>
            </div>
        </section>
    }
}
