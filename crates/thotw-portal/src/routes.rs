//! Routes and navigation shell
//!
//! Every page knows its path and title. The shell marks the link for the
//! route it is given as active; it never inspects the request itself.

use crate::toggles::Toggles;
use serde::Serialize;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Route {
    Home,
    About,
    Services,
    Contact,
    Donors,
    Refund,
    SignUp,
    Login,
    BookAppointment,
    Dashboard,
    EditProfile,
    AppointmentHistory,
    DonationRecords,
    RefundRequests,
    AccountSettings,
    NotFound,
}

impl Route {
    pub const ALL: [Route; 15] = [
        Route::Home,
        Route::About,
        Route::Services,
        Route::Contact,
        Route::Donors,
        Route::Refund,
        Route::SignUp,
        Route::Login,
        Route::BookAppointment,
        Route::Dashboard,
        Route::EditProfile,
        Route::AppointmentHistory,
        Route::DonationRecords,
        Route::RefundRequests,
        Route::AccountSettings,
    ];

    pub fn path(self) -> &'static str {
        match self {
            Route::Home => "/",
            Route::About => "/about",
            Route::Services => "/services",
            Route::Contact => "/contact",
            Route::Donors => "/donors",
            Route::Refund => "/refund",
            Route::SignUp => "/signup",
            Route::Login => "/login",
            Route::BookAppointment => "/book-appointment",
            Route::Dashboard => "/dashboard",
            Route::EditProfile => "/dashboard/profile",
            Route::AppointmentHistory => "/dashboard/appointments",
            Route::DonationRecords => "/dashboard/donations",
            Route::RefundRequests => "/dashboard/refunds",
            Route::AccountSettings => "/dashboard/settings",
            Route::NotFound => "/404",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Route::Home => "Home",
            Route::About => "About Us",
            Route::Services => "Health Services",
            Route::Contact => "Contact Us",
            Route::Donors => "Donors",
            Route::Refund => "Refund Request",
            Route::SignUp => "Sign Up",
            Route::Login => "Login",
            Route::BookAppointment => "Book an Appointment",
            Route::Dashboard => "Dashboard",
            Route::EditProfile => "Edit Profile",
            Route::AppointmentHistory => "Appointment History",
            Route::DonationRecords => "Donation Records",
            Route::RefundRequests => "Refund Requests",
            Route::AccountSettings => "Account Settings",
            Route::NotFound => "Page Not Found",
        }
    }

    /// Rendered inside the dashboard layout with the sidebar.
    pub fn is_dashboard(self) -> bool {
        matches!(
            self,
            Route::Dashboard
                | Route::EditProfile
                | Route::AppointmentHistory
                | Route::DonationRecords
                | Route::RefundRequests
                | Route::AccountSettings
        )
    }
}

pub const LOGOUT_PATH: &str = "/logout";

/// Static navigation entry.
#[derive(Clone, Copy, Debug)]
pub struct NavItem {
    pub label: &'static str,
    pub path: &'static str,
}

const fn item(label: &'static str, path: &'static str) -> NavItem {
    NavItem { label, path }
}

pub const PUBLIC_NAV: &[NavItem] = &[
    item("HOME", "/"),
    item("ABOUT", "/about"),
    item("HEALTH SERVICES", "/services"),
    item("CONTACT US", "/contact"),
    item("DONORS", "/donors"),
    item("REFUND REQUEST", "/refund"),
];

pub const AUTH_NAV: &[NavItem] = &[item("SIGN UP", "/signup"), item("LOGIN", "/login")];

pub const UTILITY_NAV: &[NavItem] = &[item("BOOK AN APPOINTMENT", "/book-appointment")];

pub const SIDEBAR_NAV: &[NavItem] = &[
    item("Dashboard", "/dashboard"),
    item("Edit Profile", "/dashboard/profile"),
    item("Appointment History", "/dashboard/appointments"),
    item("Book Appointment", "/book-appointment"),
    item("Donation Records", "/dashboard/donations"),
    item("Refund Requests", "/dashboard/refunds"),
    item("Account Settings", "/dashboard/settings"),
    item("Logout", LOGOUT_PATH),
];

/// Navigation entry resolved against the current route.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct NavLink {
    pub label: &'static str,
    pub path: &'static str,
    pub active: bool,
    /// Rendered as a form button instead of a link.
    pub post: bool,
}

pub fn links(items: &[NavItem], current: Route) -> Vec<NavLink> {
    items
        .iter()
        .map(|i| NavLink {
            label: i.label,
            path: i.path,
            active: i.path == current.path(),
            post: i.path == LOGOUT_PATH,
        })
        .collect()
}

/// Header, mobile menu and dashboard sidebar for one page.
#[derive(Clone, Debug, Serialize)]
pub struct Shell {
    pub public: Vec<NavLink>,
    pub auth: Vec<NavLink>,
    pub utility: Vec<NavLink>,
    pub sidebar: Vec<NavLink>,
    pub dashboard: bool,
    pub menu_open: bool,
    pub sidebar_open: bool,
    pub menu_href: String,
    pub sidebar_href: String,
}

impl Shell {
    pub fn new(current: Route, toggles: &Toggles) -> Self {
        let dashboard = current.is_dashboard();
        Self {
            public: links(PUBLIC_NAV, current),
            auth: links(AUTH_NAV, current),
            utility: links(UTILITY_NAV, current),
            sidebar: if dashboard {
                links(SIDEBAR_NAV, current)
            } else {
                Vec::new()
            },
            dashboard,
            menu_open: toggles.menu,
            sidebar_open: toggles.sidebar,
            menu_href: toggles.flipped(current.path(), "menu"),
            sidebar_href: toggles.flipped(current.path(), "sidebar"),
        }
    }

    /// Every link marked active, across all groups.
    pub fn active(&self) -> Vec<&NavLink> {
        self.public
            .iter()
            .chain(&self.auth)
            .chain(&self.utility)
            .chain(&self.sidebar)
            .filter(|l| l.active)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paths_are_unique() {
        let paths: std::collections::HashSet<_> = Route::ALL.iter().map(|r| r.path()).collect();
        assert_eq!(paths.len(), Route::ALL.len());
        assert!(!paths.contains(Route::NotFound.path()));
    }

    #[test]
    fn test_exactly_one_public_item_active() {
        let shell = Shell::new(Route::Donors, &Toggles::default());
        let active = shell.active();
        assert_eq!(active.len(), 1);
        assert_eq!(active[0].label, "DONORS");
    }

    #[test]
    fn test_dashboard_has_sidebar() {
        let shell = Shell::new(Route::DonationRecords, &Toggles::default());
        assert!(shell.dashboard);
        assert_eq!(shell.sidebar.len(), 8);
        let active: Vec<_> = shell.active().iter().map(|l| l.label).collect();
        assert_eq!(active, vec!["Donation Records"]);
        assert!(shell.sidebar.iter().any(|l| l.label == "Logout" && l.post));
    }

    #[test]
    fn test_book_appointment_marks_utility_link() {
        let shell = Shell::new(Route::BookAppointment, &Toggles::default());
        assert!(shell.sidebar.is_empty());
        assert_eq!(shell.active()[0].label, "BOOK AN APPOINTMENT");
    }

    #[test]
    fn test_not_found_marks_nothing() {
        let shell = Shell::new(Route::NotFound, &Toggles::default());
        assert!(shell.active().is_empty());
    }

    #[test]
    fn test_menu_toggle_href() {
        let closed = Shell::new(Route::About, &Toggles::default());
        assert!(!closed.menu_open);
        assert_eq!(closed.menu_href, "/about?menu=true");

        let open = Shell::new(Route::About, &Toggles { menu: true, ..Toggles::default() });
        assert!(open.menu_open);
        assert_eq!(open.menu_href, "/about");
    }
}
