//! Form layouts and form views
//!
//! A layout says how each schema field is presented (label, widget). A view
//! is a layout joined with the live state of one form instance and is what
//! the templates render.

use crate::toggles::Toggles;
use serde::Serialize;
use std::collections::HashMap;
use thotw_forms::catalog::choices::{
    Choice, APPOINTMENT_SERVICES, BANKS, DOCTORS, DONATION_PAYMENT_METHODS, DONATION_TYPES,
    GENDERS, REFUND_PAYMENT_METHODS, REFUND_SERVICES, RELATIONSHIPS, TIME_SLOTS,
};
use thotw_forms::catalog::{
    BOOK_APPOINTMENT, CHANGE_PASSWORD, DONATION, EDIT_PROFILE, LOGIN, NOTIFICATION_PREFERENCES,
    REFUND_REQUEST, SIGN_UP,
};
use thotw_forms::{FieldKind, FieldValue, FormState, FormValues, RecordSchema};

/// Hidden input naming the form a post belongs to.
pub const FORM_ID_FIELD: &str = "form";

#[derive(Clone, Copy, Debug)]
pub enum Widget {
    Text,
    Email,
    Tel,
    Date,
    Number,
    TextArea,
    /// Password input whose visibility follows the named toggle.
    Password(&'static str),
    Select(&'static [Choice]),
    Checkbox,
}

#[derive(Clone, Copy, Debug)]
pub struct FieldSpec {
    pub name: &'static str,
    pub label: &'static str,
    pub widget: Widget,
    pub shown_when: Option<fn(&FormValues) -> bool>,
}

const fn spec(name: &'static str, label: &'static str, widget: Widget) -> FieldSpec {
    FieldSpec {
        name,
        label,
        widget,
        shown_when: None,
    }
}

#[derive(Clone, Copy, Debug)]
pub struct FormLayout {
    pub form: &'static str,
    pub submit_label: &'static str,
    pub fields: &'static [FieldSpec],
}

const FIRST_NAME: FieldSpec = spec("firstName", "First Name", Widget::Text);
const LAST_NAME: FieldSpec = spec("lastName", "Last Name", Widget::Text);
const EMAIL: FieldSpec = spec("email", "Email Address", Widget::Email);
const PHONE: FieldSpec = spec("phone", "Phone Number", Widget::Tel);
const DATE_OF_BIRTH: FieldSpec = spec("dateOfBirth", "Date of Birth", Widget::Date);
const GENDER: FieldSpec = spec("gender", "Gender", Widget::Select(GENDERS));
const ADDRESS: FieldSpec = spec("address", "Complete Address", Widget::TextArea);
const EMERGENCY_CONTACT: FieldSpec =
    spec("emergencyContact", "Emergency Contact Number", Widget::Tel);
const ACCOUNT_NAME: FieldSpec = spec("accountName", "Account Name", Widget::Text);
const ACCOUNT_NUMBER: FieldSpec = spec("accountNumber", "Account Number", Widget::Text);

fn pays_by_bank(values: &FormValues) -> bool {
    BANKS.contains(&values.text("paymentMethod"))
}

pub const SIGN_UP_LAYOUT: FormLayout = FormLayout {
    form: SIGN_UP,
    submit_label: "Create Account",
    fields: &[
        FIRST_NAME,
        LAST_NAME,
        EMAIL,
        PHONE,
        DATE_OF_BIRTH,
        GENDER,
        ADDRESS,
        spec("password", "Password", Widget::Password("show_password")),
        spec("confirmPassword", "Confirm Password", Widget::Password("show_confirm")),
        EMERGENCY_CONTACT,
        spec("emergencyRelation", "Relationship", Widget::Select(RELATIONSHIPS)),
        spec("termsAccepted", "I accept the Terms and Conditions", Widget::Checkbox),
        spec("privacyAccepted", "I accept the Privacy Policy", Widget::Checkbox),
    ],
};

pub const LOGIN_LAYOUT: FormLayout = FormLayout {
    form: LOGIN,
    submit_label: "Sign In",
    fields: &[
        EMAIL,
        spec("password", "Password", Widget::Password("show_password")),
        spec("rememberMe", "Remember me", Widget::Checkbox),
    ],
};

pub const BOOK_APPOINTMENT_LAYOUT: FormLayout = FormLayout {
    form: BOOK_APPOINTMENT,
    submit_label: "Book Appointment",
    fields: &[
        FIRST_NAME,
        LAST_NAME,
        EMAIL,
        PHONE,
        DATE_OF_BIRTH,
        spec("preferredDate", "Preferred Date", Widget::Date),
        spec("preferredTime", "Preferred Time", Widget::Select(TIME_SLOTS)),
        spec("serviceType", "Service Type", Widget::Select(APPOINTMENT_SERVICES)),
        spec("doctor", "Preferred Doctor", Widget::Select(DOCTORS)),
        spec("reasonForVisit", "Reason for Visit", Widget::TextArea),
        spec("insuranceProvider", "Insurance Provider (Optional)", Widget::Text),
        EMERGENCY_CONTACT,
        spec("medicalHistory", "Medical History (Optional)", Widget::TextArea),
    ],
};

pub const DONATION_LAYOUT: FormLayout = FormLayout {
    form: DONATION,
    submit_label: "Donate Now",
    fields: &[
        FIRST_NAME,
        LAST_NAME,
        EMAIL,
        PHONE,
        spec("donationType", "Donation Type", Widget::Select(DONATION_TYPES)),
        spec("amount", "Donation Amount (PHP)", Widget::Number),
        spec("paymentMethod", "Payment Method", Widget::Select(DONATION_PAYMENT_METHODS)),
        ACCOUNT_NAME,
        ACCOUNT_NUMBER,
        FieldSpec {
            shown_when: Some(pays_by_bank),
            ..spec("bankName", "Bank Branch (Optional)", Widget::Text)
        },
        spec("message", "Message (Optional)", Widget::TextArea),
        spec("isAnonymous", "Make this donation anonymous", Widget::Checkbox),
    ],
};

pub const REFUND_REQUEST_LAYOUT: FormLayout = FormLayout {
    form: REFUND_REQUEST,
    submit_label: "Submit Refund Request",
    fields: &[
        FIRST_NAME,
        LAST_NAME,
        EMAIL,
        PHONE,
        spec("transactionId", "Transaction ID", Widget::Text),
        spec("serviceDate", "Service Date", Widget::Date),
        spec("serviceType", "Service Type", Widget::Select(REFUND_SERVICES)),
        spec("amountPaid", "Amount Paid (PHP)", Widget::Number),
        spec("refundAmount", "Refund Amount (PHP)", Widget::Number),
        spec("paymentMethod", "Original Payment Method", Widget::Select(REFUND_PAYMENT_METHODS)),
        spec("refundReason", "Reason for Refund", Widget::TextArea),
        ACCOUNT_NAME,
        ACCOUNT_NUMBER,
        spec("bankName", "Bank Name (Optional)", Widget::Text),
        spec("supportingDocuments", "Supporting Documents (Optional)", Widget::Text),
    ],
};

pub const EDIT_PROFILE_LAYOUT: FormLayout = FormLayout {
    form: EDIT_PROFILE,
    submit_label: "Save Changes",
    fields: &[FIRST_NAME, LAST_NAME, EMAIL, PHONE, DATE_OF_BIRTH, GENDER, ADDRESS],
};

pub const CHANGE_PASSWORD_LAYOUT: FormLayout = FormLayout {
    form: CHANGE_PASSWORD,
    submit_label: "Update Password",
    fields: &[
        spec("currentPassword", "Current Password", Widget::Password("show_current")),
        spec("newPassword", "New Password", Widget::Password("show_new")),
        spec("confirmPassword", "Confirm New Password", Widget::Password("show_confirm")),
    ],
};

pub const NOTIFICATION_PREFERENCES_LAYOUT: FormLayout = FormLayout {
    form: NOTIFICATION_PREFERENCES,
    submit_label: "Save Preferences",
    fields: &[
        spec("email", "Email notifications", Widget::Checkbox),
        spec("appointments", "Appointment reminders", Widget::Checkbox),
        spec("promotions", "Promotional updates", Widget::Checkbox),
    ],
};

pub const LAYOUTS: [FormLayout; 8] = [
    SIGN_UP_LAYOUT,
    LOGIN_LAYOUT,
    BOOK_APPOINTMENT_LAYOUT,
    DONATION_LAYOUT,
    REFUND_REQUEST_LAYOUT,
    EDIT_PROFILE_LAYOUT,
    CHANGE_PASSWORD_LAYOUT,
    NOTIFICATION_PREFERENCES_LAYOUT,
];

/// Stored profile shown when the edit-profile page opens.
pub fn profile_defaults() -> FormValues {
    FormValues::new()
        .with("firstName", "John")
        .with("lastName", "Doe")
        .with("email", "john.doe@example.com")
        .with("phone", "+1 (555) 123-4567")
        .with("dateOfBirth", "1990-01-01")
        .with("gender", "male")
        .with("address", "123 Healthcare Street, Medical District, City, State 12345")
}

pub fn notification_defaults() -> FormValues {
    FormValues::new()
        .with("email", true)
        .with("appointments", true)
        .with("promotions", false)
}

/// Turn a url-encoded body into raw form values. Unchecked boxes are not
/// posted, so a missing boolean reads as `false`.
pub fn bind(schema: &RecordSchema, posted: &HashMap<String, String>) -> FormValues {
    schema
        .fields()
        .iter()
        .map(|field| {
            let raw = posted.get(field.name()).map(String::as_str);
            let value = match field.kind() {
                FieldKind::Boolean => FieldValue::Flag(matches!(
                    raw.map(str::trim),
                    Some("on" | "true" | "yes" | "1")
                )),
                _ => FieldValue::text(raw.unwrap_or_default()),
            };
            (field.name().to_string(), value)
        })
        .collect()
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct OptionView {
    pub value: &'static str,
    pub label: &'static str,
    pub selected: bool,
}

#[derive(Clone, Debug, Serialize)]
pub struct FieldView {
    pub name: &'static str,
    pub label: &'static str,
    pub widget: &'static str,
    pub input_type: &'static str,
    pub value: String,
    pub checked: bool,
    pub error: Option<String>,
    pub options: Vec<OptionView>,
    pub toggle_href: Option<String>,
    pub revealed: bool,
}

impl FieldView {
    fn new(spec: &FieldSpec, state: &FormState, toggles: &Toggles, path: &str) -> Self {
        let value = state.values().text(spec.name).to_string();
        let (widget, input_type) = match spec.widget {
            Widget::Text => ("input", "text"),
            Widget::Email => ("input", "email"),
            Widget::Tel => ("input", "tel"),
            Widget::Date => ("input", "date"),
            Widget::Number => ("input", "number"),
            Widget::TextArea => ("textarea", ""),
            Widget::Password(toggle) if toggles.get(toggle) => ("password", "text"),
            Widget::Password(_) => ("password", "password"),
            Widget::Select(_) => ("select", ""),
            Widget::Checkbox => ("checkbox", "checkbox"),
        };
        let options = match spec.widget {
            Widget::Select(choices) => choices
                .iter()
                .map(|c| OptionView {
                    value: c.value,
                    label: c.label,
                    selected: c.value == value,
                })
                .collect(),
            _ => Vec::new(),
        };
        let (toggle_href, revealed) = match spec.widget {
            Widget::Password(toggle) => (Some(toggles.flipped(path, toggle)), toggles.get(toggle)),
            _ => (None, false),
        };

        Self {
            name: spec.name,
            label: spec.label,
            widget,
            input_type,
            checked: state.values().flag(spec.name),
            value,
            error: state.error(spec.name).map(String::from),
            options,
            toggle_href,
            revealed,
        }
    }
}

/// One form ready for rendering.
#[derive(Clone, Debug, Serialize)]
pub struct FormView {
    pub form: &'static str,
    pub action: String,
    pub submit_label: &'static str,
    pub fields: Vec<FieldView>,
    pub form_error: Option<String>,
    pub acknowledgement: Option<String>,
    pub error_count: usize,
}

impl FormView {
    pub fn new(layout: &FormLayout, state: &FormState, toggles: &Toggles, path: &str) -> Self {
        let fields = layout
            .fields
            .iter()
            .filter(|f| f.shown_when.map_or(true, |shown| shown(state.values())))
            .map(|f| FieldView::new(f, state, toggles, path))
            .collect();
        Self {
            form: layout.form,
            action: toggles.href(path),
            submit_label: layout.submit_label,
            fields,
            form_error: state.form_error().map(String::from),
            acknowledgement: state.acknowledgement().map(|a| a.message.clone()),
            error_count: state.error_count(),
        }
    }

    pub fn field(&self, name: &str) -> Option<&FieldView> {
        self.fields.iter().find(|f| f.name == name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use thotw_forms::{Acknowledgement, Catalog, FormController, HandlerError, ValidatedRecord};

    fn ack(_: &ValidatedRecord) -> Result<Acknowledgement, HandlerError> {
        Ok(Acknowledgement::new("ok"))
    }

    fn fresh(schema: &Arc<RecordSchema>) -> FormState {
        FormController::new(schema.clone(), ack).into_state()
    }

    #[test]
    fn test_layouts_match_schemas() {
        let catalog = Catalog::load().unwrap();
        for layout in LAYOUTS {
            let schema = catalog.get(layout.form).unwrap();
            let names: Vec<&str> = layout.fields.iter().map(|f| f.name).collect();
            let expected: Vec<&str> = schema.fields().iter().map(|f| f.name()).collect();
            assert_eq!(names, expected, "layout for {}", layout.form);
        }
    }

    #[test]
    fn test_bind_reads_checkboxes() {
        let catalog = Catalog::load().unwrap();
        let posted: HashMap<String, String> = [
            ("email".to_string(), "a@b.co".to_string()),
            ("rememberMe".to_string(), "on".to_string()),
            ("stray".to_string(), "x".to_string()),
        ]
        .into_iter()
        .collect();
        let values = bind(&catalog.login, &posted);
        assert_eq!(values.text("email"), "a@b.co");
        assert_eq!(values.text("password"), "");
        assert!(values.flag("rememberMe"));
        assert!(values.get("stray").is_none());

        let values = bind(&catalog.notification_preferences, &HashMap::new());
        assert!(!values.flag("email"));
    }

    #[test]
    fn test_bank_branch_only_for_banks() {
        let catalog = Catalog::load().unwrap();
        let toggles = Toggles::default();

        let view = FormView::new(&DONATION_LAYOUT, &fresh(&catalog.donation), &toggles, "/donors");
        assert!(view.field("bankName").is_none());

        let state = FormController::with_values(
            catalog.donation.clone(),
            ack,
            &FormValues::new().with("paymentMethod", "bpi"),
        )
        .into_state();
        let view = FormView::new(&DONATION_LAYOUT, &state, &toggles, "/donors");
        assert_eq!(view.field("bankName").map(|f| f.label), Some("Bank Branch (Optional)"));
        let method = view.field("paymentMethod").unwrap();
        assert!(method.options.iter().any(|o| o.value == "bpi" && o.selected));
    }

    #[test]
    fn test_password_visibility_follows_toggle() {
        let catalog = Catalog::load().unwrap();
        let state = fresh(&catalog.sign_up);

        let hidden = FormView::new(&SIGN_UP_LAYOUT, &state, &Toggles::default(), "/signup");
        let password = hidden.field("password").unwrap();
        assert_eq!(password.input_type, "password");
        assert_eq!(password.toggle_href.as_deref(), Some("/signup?show_password=true"));

        let toggles = Toggles {
            show_password: true,
            ..Toggles::default()
        };
        let shown = FormView::new(&SIGN_UP_LAYOUT, &state, &toggles, "/signup");
        assert_eq!(shown.field("password").unwrap().input_type, "text");
        assert_eq!(shown.field("confirmPassword").unwrap().input_type, "password");
        assert_eq!(shown.action, "/signup?show_password=true");
    }

    #[test]
    fn test_view_carries_errors() {
        let catalog = Catalog::load().unwrap();
        let mut form = FormController::new(catalog.login.clone(), ack);
        form.set_field_value("email", "not-an-email").unwrap();
        form.submit();
        let view = FormView::new(&LOGIN_LAYOUT, form.state(), &Toggles::default(), "/login");
        assert_eq!(
            view.field("email").unwrap().error.as_deref(),
            Some("Please enter a valid email address")
        );
        assert_eq!(view.field("email").unwrap().value, "not-an-email");
        assert_eq!(view.error_count, 2);
    }
}
