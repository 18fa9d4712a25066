use chrono::{DateTime, Utc};
use serde::Serialize;
use std::collections::{BTreeMap, BTreeSet};
use std::rc::Rc;
use yew::Reducible;

use super::notifications::{NotificationAction, NotificationKind};
use super::validation::{validate_field, Field, FieldError};

pub enum ContactAction {
    Input(Field, String),
    Focus(Field),
    Blur(Field),
    Submit,
    /// The simulated send finished.
    Sent,
    /// A plan CTA asked for its plan. `None` when no dropdown option
    /// matched; the field is still marked as filled.
    Prefill(Option<String>),
}

/// What a real backend would receive for an accepted form.
#[derive(Clone, Debug, Serialize, PartialEq)]
pub struct ContactRequest {
    pub name: String,
    pub email: String,
    pub mobile: String,
    pub plan: String,
    pub message: String,
    pub submitted_at: DateTime<Utc>,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ContactFormState {
    values: BTreeMap<Field, String>,
    errors: BTreeMap<Field, FieldError>,
    focused: BTreeSet<Field>,
    plan_prefilled: bool,
    sending: bool,
}

/// Checks every validated field and returns the failures by field.
pub fn validate_all(values: &BTreeMap<Field, String>) -> BTreeMap<Field, FieldError> {
    Field::VALIDATED
        .into_iter()
        .filter_map(|field| {
            let value = values.get(&field).map(String::as_str).unwrap_or_default();
            validate_field(field, value).err().map(|err| (field, err))
        })
        .collect()
}

/// Finishes a simulated send: exactly one success toast, then the form
/// resets and the submit control is enabled again.
pub fn complete_send(notify: impl FnOnce(NotificationAction), form: impl FnOnce(ContactAction)) {
    notify(NotificationAction::Push(NotificationKind::Success));
    form(ContactAction::Sent);
}

impl ContactFormState {
    pub fn value(&self, field: Field) -> &str {
        self.values.get(&field).map(String::as_str).unwrap_or_default()
    }

    pub fn error(&self, field: Field) -> Option<&FieldError> {
        self.errors.get(&field)
    }

    pub fn error_count(&self) -> usize {
        self.errors.len()
    }

    /// Whether the field's wrapper carries the floating-label `focused` class.
    pub fn is_focused(&self, field: Field) -> bool {
        self.focused.contains(&field)
    }

    pub fn is_plan_prefilled(&self) -> bool {
        self.plan_prefilled
    }

    /// True between a valid submit and the end of the simulated send; the
    /// submit button is disabled meanwhile.
    pub fn is_sending(&self) -> bool {
        self.sending
    }

    pub fn request(&self, submitted_at: DateTime<Utc>) -> ContactRequest {
        ContactRequest {
            name: self.value(Field::Name).trim().to_string(),
            email: self.value(Field::Email).to_string(),
            mobile: self.value(Field::Mobile).to_string(),
            plan: self.value(Field::Plan).to_string(),
            message: self.value(Field::Message).to_string(),
            submitted_at,
        }
    }
}

impl Reducible for ContactFormState {
    type Action = ContactAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            ContactAction::Input(field, value) => {
                next.errors.remove(&field);
                if field == Field::Plan {
                    next.plan_prefilled = false;
                }
                next.values.insert(field, value);
            }
            ContactAction::Focus(field) => {
                next.focused.insert(field);
            }
            ContactAction::Blur(field) => {
                if next.value(field).is_empty() {
                    next.focused.remove(&field);
                }
            }
            ContactAction::Submit => {
                if self.sending {
                    return self;
                }
                next.errors = validate_all(&next.values);
                next.sending = next.errors.is_empty();
                if next.sending {
                    log::info!("Contact form valid, sending");
                } else {
                    log::debug!("Contact form rejected with {} errors", next.error_count());
                }
            }
            ContactAction::Sent => {
                next = ContactFormState::default();
            }
            ContactAction::Prefill(plan) => {
                if let Some(plan) = plan {
                    next.errors.remove(&Field::Plan);
                    next.values.insert(Field::Plan, plan);
                }
                next.focused.insert(Field::Plan);
                next.plan_prefilled = true;
            }
        }
        Rc::new(next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::notifications::NotificationQueue;
    use std::cell::RefCell;

    fn filled(values: [(Field, &str); 4]) -> Rc<ContactFormState> {
        values
            .into_iter()
            .fold(Rc::new(ContactFormState::default()), |state, (field, value)| {
                state.reduce(ContactAction::Input(field, value.to_string()))
            })
    }

    #[test]
    fn bad_input_reports_four_errors_and_does_not_send() {
        let state = filled([
            (Field::Name, "A"),
            (Field::Email, "bad"),
            (Field::Mobile, "12345"),
            (Field::Plan, ""),
        ])
        .reduce(ContactAction::Submit);
        assert_eq!(state.error_count(), 4);
        assert!(!state.is_sending());
        for field in Field::VALIDATED {
            assert!(state.error(field).is_some(), "{field:?}");
        }
    }

    #[test]
    fn good_input_sends_then_resets() {
        let state = filled([
            (Field::Name, "Jordan Lee"),
            (Field::Email, "j@x.com"),
            (Field::Mobile, "9876543210"),
            (Field::Plan, "Basic"),
        ])
        .reduce(ContactAction::Focus(Field::Name))
        .reduce(ContactAction::Submit);
        assert_eq!(state.error_count(), 0);
        assert!(state.is_sending());

        let state = state.reduce(ContactAction::Sent);
        assert!(!state.is_sending());
        assert!(Field::VALIDATED.iter().all(|f| state.value(*f).is_empty()));
        assert!(!state.is_focused(Field::Name));
    }

    #[test]
    fn editing_a_field_clears_only_its_error() {
        let state = Rc::new(ContactFormState::default())
            .reduce(ContactAction::Submit)
            .reduce(ContactAction::Input(Field::Email, "x".to_string()));
        assert!(state.error(Field::Email).is_none());
        assert!(state.error(Field::Name).is_some());
        assert_eq!(state.error_count(), 3);
    }

    #[test]
    fn resubmit_clears_fixed_errors() {
        let state = filled([
            (Field::Name, "A"),
            (Field::Email, "j@x.com"),
            (Field::Mobile, "9876543210"),
            (Field::Plan, "Basic"),
        ])
        .reduce(ContactAction::Submit);
        assert_eq!(state.error_count(), 1);
        let state = state
            .reduce(ContactAction::Input(Field::Name, "Al".to_string()))
            .reduce(ContactAction::Submit);
        assert_eq!(state.error_count(), 0);
        assert!(state.is_sending());
    }

    #[test]
    fn submit_while_sending_is_ignored() {
        let sending = filled([
            (Field::Name, "Jordan Lee"),
            (Field::Email, "j@x.com"),
            (Field::Mobile, "9876543210"),
            (Field::Plan, "Basic"),
        ])
        .reduce(ContactAction::Submit);
        let again = sending.clone().reduce(ContactAction::Submit);
        assert!(Rc::ptr_eq(&sending, &again));
    }

    #[test]
    fn blur_keeps_label_up_only_when_filled() {
        let state = Rc::new(ContactFormState::default())
            .reduce(ContactAction::Focus(Field::Name))
            .reduce(ContactAction::Blur(Field::Name));
        assert!(!state.is_focused(Field::Name));

        let state = state
            .reduce(ContactAction::Focus(Field::Name))
            .reduce(ContactAction::Input(Field::Name, "Jo".to_string()))
            .reduce(ContactAction::Blur(Field::Name));
        assert!(state.is_focused(Field::Name));
    }

    #[test]
    fn request_carries_trimmed_name_and_timestamp() {
        let at = DateTime::parse_from_rfc3339("2026-10-19T09:30:00Z").unwrap().with_timezone(&Utc);
        let state = filled([
            (Field::Name, "  Jordan Lee "),
            (Field::Email, "j@x.com"),
            (Field::Mobile, "9876543210"),
            (Field::Plan, "Basic"),
        ]);
        let request = state.request(at);
        assert_eq!(request.name, "Jordan Lee");
        assert_eq!(request.message, "");
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["submitted_at"], "2026-10-19T09:30:00Z");
        assert_eq!(json["plan"], "Basic");
    }

    #[test]
    fn prefill_selects_plan_and_marks_filled() {
        let state = Rc::new(ContactFormState::default())
            .reduce(ContactAction::Submit)
            .reduce(ContactAction::Prefill(Some("Premium".to_string())));
        assert_eq!(state.value(Field::Plan), "Premium");
        assert!(state.is_focused(Field::Plan));
        assert!(state.is_plan_prefilled());
        assert!(state.error(Field::Plan).is_none());
    }

    #[test]
    fn unmatched_prefill_only_marks_the_field() {
        let state = Rc::new(ContactFormState::default()).reduce(ContactAction::Prefill(None));
        assert_eq!(state.value(Field::Plan), "");
        assert!(state.is_focused(Field::Plan));
        assert!(state.is_plan_prefilled());
    }

    #[test]
    fn completed_send_shows_one_success_and_reenables_submit() {
        let form = RefCell::new(
            filled([
                (Field::Name, "Jordan Lee"),
                (Field::Email, "j@x.com"),
                (Field::Mobile, "9876543210"),
                (Field::Plan, "Basic"),
            ])
            .reduce(ContactAction::Submit),
        );
        let queue = RefCell::new(Rc::new(NotificationQueue::default()));
        assert!(form.borrow().is_sending());

        complete_send(
            |action| {
                queue.replace_with(|q| Rc::clone(q).reduce(action));
            },
            |action| {
                form.replace_with(|f| Rc::clone(f).reduce(action));
            },
        );

        let queue = queue.borrow();
        assert_eq!(queue.items().len(), 1);
        assert_eq!(queue.items()[0].kind, NotificationKind::Success);
        assert!(!form.borrow().is_sending());
        assert_eq!(form.borrow().value(Field::Plan), "");
    }

    #[test]
    fn prefill_replaces_a_manually_picked_plan() {
        let state = Rc::new(ContactFormState::default())
            .reduce(ContactAction::Input(Field::Plan, "Yoga".to_string()))
            .reduce(ContactAction::Prefill(Some("Premium".to_string())));
        assert_eq!(state.value(Field::Plan), "Premium");
        assert!(state.is_plan_prefilled());
    }
}
