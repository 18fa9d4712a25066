use gloo_timers::callback::Timeout;
use std::rc::Rc;
use yew::prelude::*;

use crate::components::contact_form::{ContactForm, PlanPrefill};
use crate::components::gallery::Gallery;
use crate::components::nav::scroll_to_anchor;
use crate::components::plans::Plans;
use crate::components::reveal::Reveal;
use crate::components::testimonials::Testimonials;
use crate::config::{Plan, SiteContent, PREFILL_DELAY_MS};
use crate::utils::dom;
use crate::utils::notifications::{NotificationAction, NotificationContext, NotificationKind};
use crate::utils::prefill::match_plan_option;

#[derive(Properties, PartialEq)]
pub struct LandingProps {
    pub content: Rc<SiteContent>,
}

#[function_component(Landing)]
pub fn landing(props: &LandingProps) -> Html {
    let content = &props.content;
    let prefill = use_state(|| None::<PlanPrefill>);
    let prefill_seq = use_mut_ref(|| 0u32);
    let notifications = use_context::<NotificationContext>();

    // Plan CTA: bring the form into view, then pick the plan once the
    // scroll has had time to land.
    let on_book = {
        let prefill = prefill.clone();
        let options = content.plan_options.clone();
        Callback::from(move |plan: Plan| {
            log::info!("Booking requested for {}", plan.title);
            dom::scroll_into_view("contact");

            let prefill = prefill.clone();
            let prefill_seq = prefill_seq.clone();
            let options = options.clone();
            let notifications = notifications.clone();
            Timeout::new(PREFILL_DELAY_MS, move || {
                let value = match_plan_option(&plan.title, &options).map(|o| o.value.clone());
                if value.is_none() {
                    log::warn!("No plan option matches {:?}", plan.title);
                }
                let seq = {
                    let mut seq = prefill_seq.borrow_mut();
                    *seq = seq.wrapping_add(1);
                    *seq
                };
                prefill.set(Some(PlanPrefill { value, seq }));

                if let Some(queue) = notifications {
                    queue.dispatch(NotificationAction::Push(NotificationKind::Booking {
                        title: plan.title,
                        price: plan.price,
                    }));
                }
            })
            .forget();
        })
    };

    html! {
        <div class="landing-page">
            <header id="home" class="hero">
                <div class="hero-background"></div>
                <div class="hero-content">
                    <Reveal animation="fade-up">
                        <h1 class="hero-title">{&content.brand}</h1>
                    </Reveal>
                    <Reveal animation="fade-up" delay_ms={200}>
                        <p class="hero-subtitle">{&content.tagline}</p>
                    </Reveal>
                    <Reveal animation="zoom-in" delay_ms={400} class={classes!("hero-cta-group")}>
                        <a href="#plans" class="hero-cta" onclick={scroll_to_anchor("plans")}>
                            {"Explore Plans"}
                        </a>
                        <a href="#contact" class="hero-secondary" onclick={scroll_to_anchor("contact")}>
                            {"Talk to us"}
                        </a>
                    </Reveal>
                </div>
            </header>

            <Plans
                plans={content.plans.clone()}
                filters={content.filters.clone()}
                on_book={on_book}
            />
            <Testimonials testimonials={content.testimonials.clone()} />
            <Gallery images={content.gallery.clone()} />
            <ContactForm plan_options={content.plan_options.clone()} prefill={(*prefill).clone()} />

            <footer class="footer">
                <Reveal animation="fade-up">
                    <p>{format!("\u{00a9} {} {}", chrono::Utc::now().format("%Y"), content.brand)}</p>
                </Reveal>
            </footer>

            <style>
                {r#"
                    :root {
                        --primary-color: #ff6b35;
                        --secondary-color: #f7931e;
                        --accent-color: #ffd23f;
                        --bg-color: #ffffff;
                        --text-color: #1a1a1a;
                        --shadow-medium: rgba(0, 0, 0, 0.15);
                    }
                    [data-theme="dark"] {
                        --bg-color: #121212;
                        --text-color: #f0f0f0;
                        --shadow-medium: rgba(0, 0, 0, 0.5);
                    }
                    body {
                        background: var(--bg-color);
                        color: var(--text-color);
                        transition: background 0.3s ease, color 0.3s ease;
                    }
                    .scroll-progress {
                        position: fixed;
                        top: 0;
                        left: 0;
                        height: 3px;
                        background: var(--primary-color);
                        z-index: 1001;
                    }
                    .navbar {
                        position: fixed;
                        top: 0;
                        width: 100%;
                        z-index: 1000;
                        transition: background 0.3s ease, box-shadow 0.3s ease;
                    }
                    .navbar.scrolled {
                        background: var(--bg-color);
                        box-shadow: 0 2px 20px var(--shadow-medium);
                    }
                    .nav-link.active {
                        color: var(--primary-color);
                    }
                    .hamburger {
                        display: none;
                    }
                    @media (max-width: 768px) {
                        .hamburger {
                            display: block;
                        }
                        .nav-menu {
                            position: fixed;
                            left: -100%;
                            top: 70px;
                            width: 100%;
                            flex-direction: column;
                            background: var(--bg-color);
                            transition: left 0.3s ease;
                        }
                        .nav-menu.active {
                            left: 0;
                        }
                    }
                    .filter-btn.active {
                        background: var(--primary-color);
                        color: white;
                    }
                    .plan-card {
                        transition: opacity 0.3s ease, transform 0.3s ease;
                    }
                    .testimonial-card {
                        display: none;
                    }
                    .testimonial-card.active {
                        display: block;
                        animation: fadeIn 0.5s ease;
                    }
                    .dot.active {
                        background: var(--primary-color);
                    }
                    .lightbox {
                        display: none;
                        position: fixed;
                        inset: 0;
                        background: rgba(0, 0, 0, 0.9);
                        z-index: 2000;
                        align-items: center;
                        justify-content: center;
                    }
                    .lightbox.active {
                        display: flex;
                    }
                    .form-error {
                        display: none;
                        color: #e74c3c;
                        font-size: 0.85rem;
                    }
                    .form-error.show {
                        display: block;
                    }
                    .form-group.focused label {
                        transform: translateY(-1.4rem) scale(0.85);
                        color: var(--primary-color);
                    }
                    .back-to-top {
                        position: fixed;
                        bottom: 100px;
                        right: 30px;
                        opacity: 0;
                        visibility: hidden;
                        transition: opacity 0.3s ease;
                    }
                    .back-to-top.visible {
                        opacity: 1;
                        visibility: visible;
                    }
                    .whatsapp-float {
                        position: fixed;
                        bottom: 30px;
                        right: 30px;
                        z-index: 999;
                    }
                    .whatsapp-btn {
                        transition: transform 0.15s ease;
                    }
                    body.keyboard-navigation *:focus {
                        outline: 2px solid var(--primary-color);
                        outline-offset: 2px;
                    }
                    @keyframes fadeIn {
                        from { opacity: 0; }
                        to { opacity: 1; }
                    }
                "#}
            </style>
        </div>
    }
}
