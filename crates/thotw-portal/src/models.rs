//! Data Models
//!
//! Demo patient records shown on the dashboard. Nothing is persisted.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AppointmentStatus {
    Completed,
    Upcoming,
    Scheduled,
    Cancelled,
}

impl AppointmentStatus {
    /// Still ahead of the patient.
    pub fn is_pending(self) -> bool {
        matches!(self, Self::Upcoming | Self::Scheduled)
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct Appointment {
    pub id: u32,
    pub service: String,
    pub doctor: String,
    pub date: NaiveDate,
    pub time: String,
    pub status: AppointmentStatus,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DonationStatus {
    Completed,
    Pending,
}

#[derive(Debug, Clone, Serialize)]
pub struct Donation {
    pub id: u32,
    pub amount: Decimal,
    pub date: NaiveDate,
    pub method: String,
    pub purpose: String,
    pub status: DonationStatus,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RefundStatus {
    Approved,
    Pending,
    Processing,
    Rejected,
}

#[derive(Debug, Clone, Serialize)]
pub struct Refund {
    pub id: u32,
    pub transaction_id: String,
    pub amount: Decimal,
    pub date: NaiveDate,
    pub reason: String,
    pub status: RefundStatus,
    pub description: String,
}

/// Summary cards on the dashboard overview.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DashboardStats {
    pub total_donations: Decimal,
    pub pending_appointments: usize,
    pub completed_appointments: usize,
    pub open_refunds: usize,
}

/// All demo records for the signed-in patient.
#[derive(Debug, Clone, Serialize)]
pub struct PatientRecords {
    pub appointments: Vec<Appointment>,
    pub donations: Vec<Donation>,
    pub refunds: Vec<Refund>,
}

impl PatientRecords {
    pub fn demo() -> Self {
        Self {
            appointments: mock_appointments(),
            donations: mock_donations(),
            refunds: mock_refunds(),
        }
    }

    pub fn stats(&self) -> DashboardStats {
        DashboardStats {
            total_donations: self.donation_total(),
            pending_appointments: self
                .appointments
                .iter()
                .filter(|a| a.status.is_pending())
                .count(),
            completed_appointments: self
                .appointments
                .iter()
                .filter(|a| a.status == AppointmentStatus::Completed)
                .count(),
            open_refunds: self
                .refunds
                .iter()
                .filter(|r| matches!(r.status, RefundStatus::Pending | RefundStatus::Processing))
                .count(),
        }
    }

    pub fn donation_total(&self) -> Decimal {
        self.donations.iter().map(|d| d.amount).sum()
    }

    /// Most recent appointments first.
    pub fn recent_appointments(&self, limit: usize) -> Vec<&Appointment> {
        let mut recent: Vec<&Appointment> = self.appointments.iter().collect();
        recent.sort_by(|a, b| b.date.cmp(&a.date));
        recent.truncate(limit);
        recent
    }
}

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap_or_default()
}

pub fn mock_appointments() -> Vec<Appointment> {
    vec![
        Appointment { id: 1, service: "General Checkup".into(), doctor: "Dr. Smith".into(), date: date(2024, 12, 15), time: "10:00 AM".into(), status: AppointmentStatus::Completed },
        Appointment { id: 2, service: "Dental Cleaning".into(), doctor: "Dr. Johnson".into(), date: date(2024, 12, 20), time: "2:00 PM".into(), status: AppointmentStatus::Upcoming },
        Appointment { id: 3, service: "Blood Test".into(), doctor: "Lab Services".into(), date: date(2024, 12, 22), time: "9:00 AM".into(), status: AppointmentStatus::Scheduled },
        Appointment { id: 4, service: "Consultation".into(), doctor: "Dr. Brown".into(), date: date(2024, 11, 28), time: "3:30 PM".into(), status: AppointmentStatus::Cancelled },
    ]
}

pub fn mock_donations() -> Vec<Donation> {
    vec![
        Donation { id: 1, amount: Decimal::from(5000), date: date(2024, 12, 10), method: "GCash".into(), purpose: "General Fund".into(), status: DonationStatus::Completed },
        Donation { id: 2, amount: Decimal::from(10000), date: date(2024, 11, 15), method: "BPI".into(), purpose: "Medical Equipment".into(), status: DonationStatus::Completed },
        Donation { id: 3, amount: Decimal::from(2500), date: date(2024, 10, 20), method: "PayMaya".into(), purpose: "Emergency Fund".into(), status: DonationStatus::Completed },
    ]
}

pub fn mock_refunds() -> Vec<Refund> {
    vec![
        Refund { id: 1, transaction_id: "TXN-001234".into(), amount: Decimal::from(2500), date: date(2024, 12, 5), reason: "Service Cancelled".into(), status: RefundStatus::Approved, description: "Appointment was cancelled due to doctor unavailability".into() },
        Refund { id: 2, transaction_id: "TXN-001235".into(), amount: Decimal::from(1500), date: date(2024, 11, 28), reason: "Billing Error".into(), status: RefundStatus::Pending, description: "Duplicate charge on my account".into() },
        Refund { id: 3, transaction_id: "TXN-001236".into(), amount: Decimal::from(3000), date: date(2024, 11, 15), reason: "Service Not Provided".into(), status: RefundStatus::Processing, description: "Lab test was not conducted as scheduled".into() },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stats_from_demo_records() {
        let stats = PatientRecords::demo().stats();
        assert_eq!(stats.total_donations, Decimal::from(17500));
        assert_eq!(stats.pending_appointments, 2);
        assert_eq!(stats.completed_appointments, 1);
        assert_eq!(stats.open_refunds, 2);
    }

    #[test]
    fn test_recent_appointments_newest_first() {
        let records = PatientRecords::demo();
        let recent = records.recent_appointments(3);
        let ids: Vec<u32> = recent.iter().map(|a| a.id).collect();
        assert_eq!(ids, vec![3, 2, 1]);
    }

    #[test]
    fn test_refunds_carry_ids() {
        let records = PatientRecords::demo();
        let ids: Vec<u32> = records.refunds.iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }
}
