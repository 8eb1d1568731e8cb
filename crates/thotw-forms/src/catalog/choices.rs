//! Choice lists offered by the site's select inputs and radio groups.

use serde::Serialize;

/// One selectable option.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Choice {
    pub value: &'static str,
    pub label: &'static str,
}

const fn choice(value: &'static str, label: &'static str) -> Choice {
    Choice { value, label }
}

/// Values of a choice list, for use in a `choices` rule.
pub fn values(list: &[Choice]) -> Vec<&'static str> {
    list.iter().map(|c| c.value).collect()
}

pub const GENDERS: &[Choice] = &[
    choice("male", "Male"),
    choice("female", "Female"),
    choice("other", "Other"),
    choice("prefer-not-to-say", "Prefer not to say"),
];

pub const RELATIONSHIPS: &[Choice] = &[
    choice("spouse", "Spouse"),
    choice("parent", "Parent"),
    choice("child", "Child"),
    choice("sibling", "Sibling"),
    choice("relative", "Other Relative"),
    choice("friend", "Friend"),
];

pub const TIME_SLOTS: &[Choice] = &[
    choice("08:00", "8:00 AM"),
    choice("09:00", "9:00 AM"),
    choice("10:00", "10:00 AM"),
    choice("11:00", "11:00 AM"),
    choice("13:00", "1:00 PM"),
    choice("14:00", "2:00 PM"),
    choice("15:00", "3:00 PM"),
    choice("16:00", "4:00 PM"),
    choice("17:00", "5:00 PM"),
];

pub const APPOINTMENT_SERVICES: &[Choice] = &[
    choice("general", "General Consultation"),
    choice("preventive", "Preventive Care"),
    choice("emergency", "Emergency Care"),
    choice("specialist", "Specialist Consultation"),
    choice("laboratory", "Laboratory Services"),
    choice("wellness", "Wellness Program"),
];

pub const DOCTORS: &[Choice] = &[
    choice("dr-santos", "Dr. Maria Santos - General Medicine"),
    choice("dr-reyes", "Dr. Juan Reyes - Cardiology"),
    choice("dr-cruz", "Dr. Ana Cruz - Pediatrics"),
    choice("dr-garcia", "Dr. Miguel Garcia - Dermatology"),
    choice("any", "Any Available Doctor"),
];

pub const DONATION_TYPES: &[Choice] = &[
    choice("medical-equipment", "Medical Equipment"),
    choice("medicine-fund", "Medicine Fund"),
    choice("facility-improvement", "Facility Improvement"),
    choice("general", "General Donation"),
    choice("emergency-fund", "Emergency Fund"),
];

pub const DONATION_PAYMENT_METHODS: &[Choice] = &[
    choice("gcash", "GCash"),
    choice("paymaya", "PayMaya"),
    choice("bdo", "BDO"),
    choice("bpi", "BPI"),
    choice("metrobank", "Metrobank"),
    choice("chinabank", "China Bank"),
];

/// Payment methods that ask for a bank branch.
pub const BANKS: &[&str] = &["bdo", "bpi", "metrobank", "chinabank"];

pub const REFUND_SERVICES: &[Choice] = &[
    choice("consultation", "Medical Consultation"),
    choice("laboratory", "Laboratory Services"),
    choice("emergency", "Emergency Care"),
    choice("specialist", "Specialist Consultation"),
    choice("wellness", "Wellness Program"),
    choice("appointment", "Appointment Booking"),
    choice("other", "Other Services"),
];

pub const REFUND_PAYMENT_METHODS: &[Choice] = &[
    choice("cash", "Cash"),
    choice("gcash", "GCash"),
    choice("paymaya", "PayMaya"),
    choice("bdo", "BDO"),
    choice("bpi", "BPI"),
    choice("metrobank", "Metrobank"),
    choice("chinabank", "China Bank"),
    choice("credit-card", "Credit Card"),
    choice("debit-card", "Debit Card"),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_banks_are_payment_methods() {
        let methods = values(DONATION_PAYMENT_METHODS);
        for bank in BANKS {
            assert!(methods.contains(bank));
        }
    }

    #[test]
    fn test_values_keep_list_order() {
        assert_eq!(values(GENDERS), vec!["male", "female", "other", "prefer-not-to-say"]);
        assert!(values(TIME_SLOTS).contains(&"13:00"));
    }
}
