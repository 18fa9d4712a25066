use gloo_timers::future::TimeoutFuture;
use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::config::{PlanOption, SUBMIT_DELAY_MS};
use crate::utils::contact_state::{complete_send, ContactAction, ContactFormState};
use crate::utils::notifications::NotificationContext;
use crate::utils::validation::Field;

/// A plan chosen from a plan card. `value` is the matching dropdown option,
/// if any. `seq` changes on every click so picking the same plan twice
/// still re-applies it.
#[derive(Clone, Debug, PartialEq)]
pub struct PlanPrefill {
    pub value: Option<String>,
    pub seq: u32,
}

#[derive(Properties, PartialEq)]
pub struct ContactFormProps {
    pub plan_options: Vec<PlanOption>,
    #[prop_or_default]
    pub prefill: Option<PlanPrefill>,
}

#[function_component(ContactForm)]
pub fn contact_form(props: &ContactFormProps) -> Html {
    let form = use_reducer(ContactFormState::default);
    let notifications = use_context::<NotificationContext>();
    let plan_ref = use_node_ref();

    {
        let form = form.clone();
        use_effect_with_deps(
            move |prefill: &Option<PlanPrefill>| {
                if let Some(prefill) = prefill {
                    form.dispatch(ContactAction::Prefill(prefill.value.clone()));
                }
                || ()
            },
            props.prefill.clone(),
        );
    }

    // Option `selected` attributes stop driving the select once the user has
    // picked by hand, so the value is pushed onto the element directly.
    {
        let plan_ref = plan_ref.clone();
        use_effect_with_deps(
            move |plan: &String| {
                if let Some(select) = plan_ref.cast::<HtmlSelectElement>() {
                    select.set_value(plan);
                }
                || ()
            },
            form.value(Field::Plan).to_string(),
        );
    }

    // Simulated send. Nothing leaves the browser; the request is logged.
    {
        let sending = form.is_sending();
        let form = form.clone();
        use_effect_with_deps(
            move |sending: &bool| {
                if *sending {
                    let request = form.request(chrono::Utc::now());
                    match serde_json::to_string(&request) {
                        Ok(json) => log::info!("Contact request: {}", json),
                        Err(e) => log::warn!("Could not serialize contact request: {}", e),
                    }
                    spawn_local(async move {
                        TimeoutFuture::new(SUBMIT_DELAY_MS).await;
                        complete_send(
                            |action| match notifications {
                                Some(queue) => queue.dispatch(action),
                                None => log::warn!("No notification context, success not shown"),
                            },
                            |action| form.dispatch(action),
                        );
                    });
                }
                || ()
            },
            sending,
        );
    }

    let onsubmit = {
        let form = form.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            form.dispatch(ContactAction::Submit);
        })
    };

    let on_focus = |field: Field| {
        let form = form.clone();
        Callback::from(move |_: FocusEvent| form.dispatch(ContactAction::Focus(field)))
    };
    let on_blur = |field: Field| {
        let form = form.clone();
        Callback::from(move |_: FocusEvent| form.dispatch(ContactAction::Blur(field)))
    };
    let on_text_input = |field: Field| {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            form.dispatch(ContactAction::Input(field, input.value()));
        })
    };
    let on_plan_change = {
        let form = form.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            form.dispatch(ContactAction::Input(Field::Plan, select.value()));
        })
    };
    let on_message_input = {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            let area: HtmlTextAreaElement = e.target_unchecked_into();
            form.dispatch(ContactAction::Input(Field::Message, area.value()));
        })
    };

    let group_class = |field: Field| classes!("form-group", form.is_focused(field).then_some("focused"));
    let border = |field: Field| {
        if form.error(field).is_some() {
            "border-color: #e74c3c;"
        } else if field == Field::Plan && form.is_plan_prefilled() {
            "border-color: var(--primary-color);"
        } else {
            ""
        }
    };
    let error_for = |field: Field| {
        let error = form.error(field);
        html! {
            <div class={classes!("form-error", error.is_some().then_some("show"))}>
                { error.map(|e| e.to_string()).unwrap_or_default() }
            </div>
        }
    };
    let text_field = |field: Field, label: &str, input_type: &str| {
        html! {
            <div class={group_class(field)}>
                <input
                    type={input_type.to_string()}
                    id={field.name()}
                    name={field.name()}
                    value={form.value(field).to_string()}
                    style={border(field)}
                    oninput={on_text_input(field)}
                    onfocus={on_focus(field)}
                    onblur={on_blur(field)}
                />
                <label for={field.name()}>{label.to_string()}</label>
                { error_for(field) }
            </div>
        }
    };

    html! {
        <section id="contact" class="contact">
            <div class="container">
                <h2 class="section-title">{"Get in Touch"}</h2>
                <form id="contact-form" class="contact-form" novalidate={true} {onsubmit}>
                    { text_field(Field::Name, "Full Name", "text") }
                    { text_field(Field::Email, "Email Address", "email") }
                    { text_field(Field::Mobile, "Mobile Number", "tel") }
                    <div class={group_class(Field::Plan)}>
                        <select
                            ref={plan_ref}
                            id="plan"
                            name="plan"
                            style={border(Field::Plan)}
                            onchange={on_plan_change}
                            onfocus={on_focus(Field::Plan)}
                            onblur={on_blur(Field::Plan)}
                        >
                            <option value="" selected={form.value(Field::Plan).is_empty()}>{"Select a plan"}</option>
                            { for props.plan_options.iter().map(|option| html! {
                                <option
                                    value={option.value.clone()}
                                    selected={form.value(Field::Plan) == option.value}
                                >
                                    {&option.label}
                                </option>
                            }) }
                        </select>
                        <label for="plan">{"Preferred Plan"}</label>
                        { error_for(Field::Plan) }
                    </div>
                    <div class={group_class(Field::Message)}>
                        <textarea
                            id="message"
                            name="message"
                            rows="4"
                            value={form.value(Field::Message).to_string()}
                            oninput={on_message_input}
                            onfocus={on_focus(Field::Message)}
                            onblur={on_blur(Field::Message)}
                        />
                        <label for="message">{"Message (optional)"}</label>
                    </div>
                    <button type="submit" class="form-submit" disabled={form.is_sending()}>
                        if form.is_sending() {
                            <i class="fas fa-spinner fa-spin"></i>{" Sending..."}
                        } else {
                            <i class="fas fa-paper-plane"></i>{" Send Message"}
                        }
                    </button>
                </form>
            </div>
        </section>
    }
}
