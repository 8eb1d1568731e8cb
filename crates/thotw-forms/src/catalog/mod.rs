//! Form catalog
//!
//! The record schemas used by the THOTW site. Messages match the text shown
//! to patients next to each input.

pub mod choices;

use crate::domain::schema::{FieldSchema, RecordSchema};
use crate::domain::value_objects::FormValues;
use crate::Result;
use choices::{
    values, APPOINTMENT_SERVICES, DOCTORS, DONATION_PAYMENT_METHODS, DONATION_TYPES, GENDERS,
    REFUND_PAYMENT_METHODS, REFUND_SERVICES, RELATIONSHIPS, TIME_SLOTS,
};
use rust_decimal::Decimal;
use std::str::FromStr;
use std::sync::Arc;

pub const SIGN_UP: &str = "sign_up";
pub const LOGIN: &str = "login";
pub const BOOK_APPOINTMENT: &str = "book_appointment";
pub const DONATION: &str = "donation";
pub const REFUND_REQUEST: &str = "refund_request";
pub const EDIT_PROFILE: &str = "edit_profile";
pub const CHANGE_PASSWORD: &str = "change_password";
pub const NOTIFICATION_PREFERENCES: &str = "notification_preferences";

fn first_name() -> FieldSchema {
    FieldSchema::text("firstName")
        .min_length(2)
        .message("First name must be at least 2 characters")
}

fn last_name() -> FieldSchema {
    FieldSchema::text("lastName")
        .min_length(2)
        .message("Last name must be at least 2 characters")
}

fn email() -> FieldSchema {
    FieldSchema::email("email")
        .required()
        .message("Please enter a valid email address")
}

fn phone() -> FieldSchema {
    FieldSchema::phone("phone")
        .min_length(10)
        .message("Phone number must be at least 10 digits")
}

fn date_of_birth() -> FieldSchema {
    FieldSchema::date("dateOfBirth")
        .required()
        .message("Date of birth is required")
}

fn emergency_contact() -> FieldSchema {
    FieldSchema::phone("emergencyContact")
        .min_length(10)
        .message("Emergency contact is required")
}

fn gender() -> FieldSchema {
    FieldSchema::text("gender")
        .required()
        .choices(values(GENDERS))
        .message("Please select gender")
}

fn address() -> FieldSchema {
    FieldSchema::text("address")
        .min_length(10)
        .message("Please enter complete address")
}

fn amount(name: &str, required: &str) -> FieldSchema {
    FieldSchema::number(name)
        .required()
        .message(required)
        .type_message("Please enter a valid amount")
}

pub fn sign_up() -> Result<RecordSchema> {
    RecordSchema::builder(SIGN_UP)
        .field(first_name())
        .field(last_name())
        .field(email())
        .field(phone())
        .field(date_of_birth())
        .field(gender())
        .field(address())
        .field(
            FieldSchema::text("password")
                .min_length(8)
                .verbatim()
                .message("Password must be at least 8 characters"),
        )
        .field(
            FieldSchema::text("confirmPassword")
                .min_length(8)
                .verbatim()
                .message("Please confirm your password"),
        )
        .field(emergency_contact())
        .field(
            FieldSchema::text("emergencyRelation")
                .required()
                .choices(values(RELATIONSHIPS))
                .message("Emergency contact relationship is required"),
        )
        .field(
            FieldSchema::boolean("termsAccepted")
                .required()
                .message("You must accept the terms and conditions"),
        )
        .field(
            FieldSchema::boolean("privacyAccepted")
                .required()
                .message("You must accept the privacy policy"),
        )
        .must_match("password", "confirmPassword", "Passwords don't match")
        .build()
}

pub fn login() -> Result<RecordSchema> {
    RecordSchema::builder(LOGIN)
        .field(email())
        .field(
            FieldSchema::text("password")
                .required()
                .verbatim()
                .message("Password is required"),
        )
        .field(FieldSchema::boolean("rememberMe"))
        .build()
}

pub fn book_appointment() -> Result<RecordSchema> {
    RecordSchema::builder(BOOK_APPOINTMENT)
        .field(first_name())
        .field(last_name())
        .field(email())
        .field(phone())
        .field(date_of_birth())
        .field(
            FieldSchema::date("preferredDate")
                .required()
                .message("Preferred appointment date is required"),
        )
        .field(
            FieldSchema::text("preferredTime")
                .required()
                .choices(values(TIME_SLOTS))
                .message("Preferred time is required"),
        )
        .field(
            FieldSchema::text("serviceType")
                .required()
                .choices(values(APPOINTMENT_SERVICES))
                .message("Please select a service type"),
        )
        .field(
            FieldSchema::text("doctor")
                .required()
                .choices(values(DOCTORS))
                .message("Please select a preferred doctor"),
        )
        .field(
            FieldSchema::text("reasonForVisit")
                .min_length(10)
                .message("Please provide reason for visit (minimum 10 characters)"),
        )
        .field(FieldSchema::text("insuranceProvider"))
        .field(emergency_contact())
        .field(FieldSchema::text("medicalHistory"))
        .build()
}

pub fn donation() -> Result<RecordSchema> {
    RecordSchema::builder(DONATION)
        .field(first_name())
        .field(last_name())
        .field(email())
        .field(phone())
        .field(
            FieldSchema::text("donationType")
                .required()
                .choices(values(DONATION_TYPES))
                .message("Please select donation type"),
        )
        .field(amount("amount", "Please enter donation amount").min_value(Decimal::ONE))
        .field(
            FieldSchema::text("paymentMethod")
                .required()
                .choices(values(DONATION_PAYMENT_METHODS))
                .message("Please select payment method"),
        )
        .field(
            FieldSchema::text("accountName")
                .min_length(2)
                .message("Account name is required"),
        )
        .field(
            FieldSchema::text("accountNumber")
                .required()
                .message("Account number is required"),
        )
        .field(FieldSchema::text("bankName"))
        .field(FieldSchema::text("message"))
        .field(FieldSchema::boolean("isAnonymous"))
        .build()
}

pub fn refund_request() -> Result<RecordSchema> {
    RecordSchema::builder(REFUND_REQUEST)
        .field(first_name())
        .field(last_name())
        .field(email())
        .field(phone())
        .field(
            FieldSchema::text("transactionId")
                .required()
                .message("Transaction ID is required"),
        )
        .field(
            FieldSchema::date("serviceDate")
                .required()
                .message("Service date is required"),
        )
        .field(
            FieldSchema::text("serviceType")
                .required()
                .choices(values(REFUND_SERVICES))
                .message("Please select service type"),
        )
        .field(amount("amountPaid", "Amount paid is required").min_value(Decimal::ONE))
        .field(amount("refundAmount", "Refund amount is required").min_value(Decimal::ONE))
        .field(
            FieldSchema::text("paymentMethod")
                .required()
                .choices(values(REFUND_PAYMENT_METHODS))
                .message("Please select original payment method"),
        )
        .field(
            FieldSchema::text("refundReason")
                .min_length(10)
                .message("Please provide detailed reason (minimum 10 characters)"),
        )
        .field(
            FieldSchema::text("accountName")
                .min_length(2)
                .message("Account name is required for refund"),
        )
        .field(
            FieldSchema::text("accountNumber")
                .required()
                .message("Account number is required for refund"),
        )
        .field(FieldSchema::text("bankName"))
        .field(FieldSchema::text("supportingDocuments"))
        .refine(
            "refundAmount",
            "Refund amount cannot exceed the amount paid",
            refund_within_paid,
        )
        .build()
}

/// Holds unless both amounts parse and the refund is larger.
fn refund_within_paid(values: &FormValues) -> bool {
    let paid = Decimal::from_str(values.text("amountPaid").trim());
    let refund = Decimal::from_str(values.text("refundAmount").trim());
    match (paid, refund) {
        (Ok(paid), Ok(refund)) => refund <= paid,
        _ => true,
    }
}

pub fn edit_profile() -> Result<RecordSchema> {
    RecordSchema::builder(EDIT_PROFILE)
        .field(first_name())
        .field(last_name())
        .field(email())
        .field(phone())
        .field(date_of_birth())
        .field(gender())
        .field(address())
        .build()
}

pub fn change_password() -> Result<RecordSchema> {
    RecordSchema::builder(CHANGE_PASSWORD)
        .field(
            FieldSchema::text("currentPassword")
                .required()
                .verbatim()
                .message("Current password is required"),
        )
        .field(
            FieldSchema::text("newPassword")
                .min_length(8)
                .verbatim()
                .message("Password must be at least 8 characters"),
        )
        .field(
            FieldSchema::text("confirmPassword")
                .required()
                .verbatim()
                .message("Please confirm your new password"),
        )
        .must_match("newPassword", "confirmPassword", "New passwords do not match.")
        .build()
}

pub fn notification_preferences() -> Result<RecordSchema> {
    RecordSchema::builder(NOTIFICATION_PREFERENCES)
        .field(FieldSchema::boolean("email"))
        .field(FieldSchema::boolean("appointments"))
        .field(FieldSchema::boolean("promotions"))
        .build()
}

/// Every schema of the site, built once and shared.
#[derive(Clone, Debug)]
pub struct Catalog {
    pub sign_up: Arc<RecordSchema>,
    pub login: Arc<RecordSchema>,
    pub book_appointment: Arc<RecordSchema>,
    pub donation: Arc<RecordSchema>,
    pub refund_request: Arc<RecordSchema>,
    pub edit_profile: Arc<RecordSchema>,
    pub change_password: Arc<RecordSchema>,
    pub notification_preferences: Arc<RecordSchema>,
}

impl Catalog {
    pub fn load() -> Result<Self> {
        Ok(Self {
            sign_up: Arc::new(sign_up()?),
            login: Arc::new(login()?),
            book_appointment: Arc::new(book_appointment()?),
            donation: Arc::new(donation()?),
            refund_request: Arc::new(refund_request()?),
            edit_profile: Arc::new(edit_profile()?),
            change_password: Arc::new(change_password()?),
            notification_preferences: Arc::new(notification_preferences()?),
        })
    }

    pub fn get(&self, form: &str) -> Option<&Arc<RecordSchema>> {
        match form {
            SIGN_UP => Some(&self.sign_up),
            LOGIN => Some(&self.login),
            BOOK_APPOINTMENT => Some(&self.book_appointment),
            DONATION => Some(&self.donation),
            REFUND_REQUEST => Some(&self.refund_request),
            EDIT_PROFILE => Some(&self.edit_profile),
            CHANGE_PASSWORD => Some(&self.change_password),
            NOTIFICATION_PREFERENCES => Some(&self.notification_preferences),
            _ => None,
        }
    }
}
