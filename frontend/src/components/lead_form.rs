use std::collections::BTreeMap;
use std::rc::Rc;

use log::{error, info, warn};
use serde::Serialize;
use wasm_bindgen::JsValue;
use web_sys::{FormData, HtmlFormElement, SubmitEvent};
use yew::prelude::*;

use crate::components::notice::use_ephemeral_notice;
use crate::config::{SiteConfig, NOTICE_DELAY_MS};
use crate::content::{FieldKind, FormField, FormSpec};
use crate::error::{SubmissionError, ValidationError};

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Submission {
    pub form: &'static str,
    pub values: BTreeMap<&'static str, String>,
}

impl Submission {
    /// Reads one value per declared field; missing values become empty.
    pub fn collect(form_spec: &FormSpec, mut read: impl FnMut(&str) -> Option<String>) -> Self {
        let values = form_spec
            .fields
            .iter()
            .map(|field| (field.id, read(field.id).unwrap_or_default()))
            .collect();
        Self {
            form: form_spec.id,
            values,
        }
    }

    pub fn value(&self, field: &str) -> &str {
        self.values.get(field).map(String::as_str).unwrap_or("")
    }
}

fn looks_like_email(value: &str) -> bool {
    match value.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty() && domain.contains('.') && !domain.starts_with('.') && !domain.ends_with('.')
        }
        None => false,
    }
}

pub fn validate(form_spec: &FormSpec, submission: &Submission) -> Result<(), ValidationError> {
    for field in form_spec.fields {
        let value = submission.value(field.id).trim();
        if value.is_empty() {
            if field.required {
                return Err(ValidationError::MissingField { field: field.label });
            }
            continue;
        }
        match field.kind {
            FieldKind::Email if !looks_like_email(value) => {
                return Err(ValidationError::InvalidEmail { field: field.label });
            }
            FieldKind::Select(options) if !options.iter().any(|o| o.value == value) => {
                return Err(ValidationError::UnknownOption {
                    field: field.label,
                    value: value.to_string(),
                });
            }
            _ => {}
        }
    }
    Ok(())
}

/// Where a validated submission goes. Swapping in a real endpoint only
/// changes what happens before the acknowledgement is shown.
pub trait SubmissionHandler {
    fn deliver(&self, submission: &Submission) -> Result<(), SubmissionError>;
}

pub struct SimulatedDelivery;

impl SubmissionHandler for SimulatedDelivery {
    fn deliver(&self, submission: &Submission) -> Result<(), SubmissionError> {
        info!(
            "simulated delivery of {} form ({} fields)",
            submission.form,
            submission.values.len()
        );
        Ok(())
    }
}

#[derive(Clone)]
pub struct Delivery(Rc<dyn SubmissionHandler>);

impl Delivery {
    pub fn new(handler: impl SubmissionHandler + 'static) -> Self {
        Self(Rc::new(handler))
    }
}

impl Default for Delivery {
    fn default() -> Self {
        Self::new(SimulatedDelivery)
    }
}

impl PartialEq for Delivery {
    fn eq(&self, other: &Self) -> bool {
        Rc::as_ptr(&self.0) as *const () == Rc::as_ptr(&other.0) as *const ()
    }
}

pub fn submit_with(
    form_spec: &FormSpec,
    submission: &Submission,
    handler: &dyn SubmissionHandler,
) -> Result<(), SubmissionError> {
    validate(form_spec, submission)?;
    handler.deliver(submission)
}

fn read_form(form: &HtmlFormElement, form_spec: &FormSpec) -> Result<Submission, JsValue> {
    let data = FormData::new_with_form(form)?;
    Ok(Submission::collect(form_spec, |name| data.get(name).as_string()))
}

/// Groups consecutive half-width fields in pairs; everything else gets a row.
pub fn layout_rows(fields: &[FormField]) -> Vec<&[FormField]> {
    let mut rows = Vec::new();
    let mut i = 0;
    while i < fields.len() {
        let pair = fields[i].half_width && fields.get(i + 1).map_or(false, |f| f.half_width);
        let len = if pair { 2 } else { 1 };
        rows.push(&fields[i..i + len]);
        i += len;
    }
    rows
}

fn render_field(form_id: &str, field: &FormField) -> Html {
    let dom_id = format!("{}-{}", form_id, field.id);
    let control = match field.kind {
        FieldKind::Text | FieldKind::Email => html! {
            <input
                id={dom_id.clone()}
                name={field.id}
                type={if field.kind == FieldKind::Email { "email" } else { "text" }}
                required={field.required}
                placeholder={field.placeholder}
                class="field-input"
            />
        },
        FieldKind::Select(options) => html! {
            <select id={dom_id.clone()} name={field.id} class="field-input">
                { for options.iter().map(|o| html! { <option value={o.value}>{ o.label }</option> }) }
            </select>
        },
        FieldKind::TextArea { rows } => html! {
            <textarea
                id={dom_id.clone()}
                name={field.id}
                rows={rows.to_string()}
                required={field.required}
                placeholder={field.placeholder}
                class="field-input"
            />
        },
    };

    html! {
        <div class="field">
            <label for={dom_id} class="field-label">{ field.label }</label>
            { control }
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct LeadFormProps {
    pub form_spec: &'static FormSpec,
    pub site: &'static SiteConfig,
    #[prop_or_default]
    pub delivery: Delivery,
}

#[function_component(LeadForm)]
pub fn lead_form(props: &LeadFormProps) -> Html {
    let notice = use_ephemeral_notice(NOTICE_DELAY_MS);
    let form_spec = props.form_spec;

    let onsubmit = {
        let notice = notice.clone();
        let delivery = props.delivery.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let Some(form) = e.target_dyn_into::<HtmlFormElement>() else {
                error!("submit event for {} form had no form target", form_spec.id);
                return;
            };
            let submission = match read_form(&form, form_spec) {
                Ok(submission) => submission,
                Err(err) => {
                    error!("could not read {} form: {:?}", form_spec.id, err);
                    return;
                }
            };
            match submit_with(form_spec, &submission, delivery.0.as_ref()) {
                Ok(()) => notice.acknowledge.emit(()),
                Err(err) => {
                    warn!("{} form rejected: {}", form_spec.id, err);
                    notice.reject.emit(err);
                }
            }
        })
    };

    let state = notice.state();
    let status = if state.is_submitted() {
        html! {
            <p class="notice notice-success">
                { form_spec.acknowledgement.replace("{brand}", props.site.brand) }
            </p>
        }
    } else if let Some(err) = &state.error {
        html! { <p class="notice notice-error" role="alert">{ err.to_string() }</p> }
    } else {
        html! {}
    };

    html! {
        <form class="card lead-form" aria-label={form_spec.aria_label} {onsubmit}>
            {
                for layout_rows(form_spec.fields).into_iter().map(|row| html! {
                    <div class={classes!("field-row", (row.len() > 1).then_some("field-row-split"))}>
                        { for row.iter().map(|field| render_field(form_spec.id, field)) }
                    </div>
                })
            }
            <div class="form-actions">
                <button class="btn btn-primary" type="submit">{ form_spec.submit_label }</button>
                <a href={props.site.booking_url} target="_blank" rel="noreferrer" class="btn btn-ghost">
                    { form_spec.booking_label }
                </a>
            </div>
            <div class="form-status" aria-live="polite">{ status }</div>
            {
                if let Some(footnote) = form_spec.footnote {
                    html! { <p class="muted form-footnote">{ footnote }</p> }
                } else {
                    html! {}
                }
            }
        </form>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::{CONTACT_FORM, PLAN_FORM};
    use std::cell::RefCell;

    fn submission(form_spec: &FormSpec, pairs: &[(&str, &str)]) -> Submission {
        Submission::collect(form_spec, |name| {
            pairs
                .iter()
                .find(|(k, _)| *k == name)
                .map(|(_, v)| v.to_string())
        })
    }

    #[derive(Default)]
    struct Recording {
        seen: RefCell<Vec<Submission>>,
        fail: bool,
    }

    impl SubmissionHandler for Recording {
        fn deliver(&self, submission: &Submission) -> Result<(), SubmissionError> {
            self.seen.borrow_mut().push(submission.clone());
            if self.fail {
                Err(SubmissionError::Delivery("endpoint unavailable".into()))
            } else {
                Ok(())
            }
        }
    }

    #[test]
    fn collect_fills_every_declared_field() {
        let s = submission(&PLAN_FORM, &[("name", "Jane")]);
        assert_eq!(s.form, "plan");
        assert_eq!(s.values.len(), PLAN_FORM.fields.len());
        assert_eq!(s.value("name"), "Jane");
        assert_eq!(s.value("company"), "");
    }

    #[test]
    fn missing_required_field_is_reported_by_label() {
        let s = submission(&CONTACT_FORM, &[("name", "Jane"), ("email", "  ")]);
        assert_eq!(
            validate(&CONTACT_FORM, &s),
            Err(ValidationError::MissingField { field: "Email" })
        );
    }

    #[test]
    fn optional_fields_may_be_empty() {
        let s = submission(&CONTACT_FORM, &[("name", "Jane"), ("email", "jane@brand.com")]);
        assert_eq!(validate(&CONTACT_FORM, &s), Ok(()));
    }

    #[test]
    fn email_shape_is_checked() {
        for bad in ["jane", "@brand.com", "jane@brand", "jane@.com"] {
            let s = submission(&CONTACT_FORM, &[("name", "Jane"), ("email", bad)]);
            assert_eq!(
                validate(&CONTACT_FORM, &s),
                Err(ValidationError::InvalidEmail { field: "Email" }),
                "accepted {bad}"
            );
        }
    }

    #[test]
    fn select_value_must_be_an_option() {
        let s = submission(
            &PLAN_FORM,
            &[
                ("name", "Jane"),
                ("email", "jane@company.com"),
                ("budget", "1m"),
                ("message", "Invoices"),
            ],
        );
        assert!(matches!(
            validate(&PLAN_FORM, &s),
            Err(ValidationError::UnknownOption { .. })
        ));

        let s = submission(
            &PLAN_FORM,
            &[
                ("name", "Jane"),
                ("email", "jane@company.com"),
                ("budget", "10-25"),
                ("message", "Invoices"),
            ],
        );
        assert_eq!(validate(&PLAN_FORM, &s), Ok(()));
    }

    #[test]
    fn invalid_submission_never_reaches_handler() {
        let handler = Recording::default();
        let s = submission(&PLAN_FORM, &[("name", "Jane")]);
        let result = submit_with(&PLAN_FORM, &s, &handler);
        assert!(matches!(result, Err(SubmissionError::Invalid(_))));
        assert!(handler.seen.borrow().is_empty());
    }

    #[test]
    fn delivery_failure_is_distinct_from_validation() {
        let handler = Recording {
            fail: true,
            ..Default::default()
        };
        let s = submission(&CONTACT_FORM, &[("name", "Jane"), ("email", "jane@brand.com")]);
        let result = submit_with(&CONTACT_FORM, &s, &handler);
        assert!(matches!(result, Err(SubmissionError::Delivery(_))));
        assert_eq!(handler.seen.borrow().len(), 1);
    }

    #[test]
    fn simulated_delivery_always_succeeds() {
        let s = submission(&CONTACT_FORM, &[("name", "Jane"), ("email", "jane@brand.com")]);
        assert_eq!(submit_with(&CONTACT_FORM, &s, &SimulatedDelivery), Ok(()));
    }

    #[test]
    fn submission_serializes_as_flat_map() {
        let s = submission(&CONTACT_FORM, &[("name", "Jane"), ("email", "jane@brand.com")]);
        let json = serde_json::to_value(&s).unwrap();
        assert_eq!(json["form"], "contact");
        assert_eq!(json["values"]["email"], "jane@brand.com");
        assert_eq!(json["values"]["message"], "");
    }

    #[test]
    fn half_width_fields_share_rows() {
        let rows = layout_rows(PLAN_FORM.fields);
        let shape: Vec<usize> = rows.iter().map(|r| r.len()).collect();
        assert_eq!(shape, vec![2, 1, 1, 1]);
        assert_eq!(rows[0][1].id, "email");
    }

    #[test]
    fn delivery_equality_is_identity() {
        let a = Delivery::default();
        let b = a.clone();
        assert!(a == b);
        assert!(a != Delivery::default());
    }
}
