//! Page templates
//!
//! Registered once at start-up. Page bodies are rendered first and then
//! placed into the layout.

pub const LAYOUT: &str = "layout";
pub const FORM_PARTIAL: &str = "form";

pub const HOME: &str = "home";
pub const ABOUT: &str = "about";
pub const SERVICES: &str = "services";
pub const CONTACT: &str = "contact";
pub const DONORS: &str = "donors";
pub const REFUND: &str = "refund";
pub const SIGN_UP: &str = "signup";
pub const LOGIN: &str = "login";
pub const BOOK_APPOINTMENT: &str = "book_appointment";
pub const DASHBOARD: &str = "dashboard";
pub const EDIT_PROFILE: &str = "edit_profile";
pub const APPOINTMENTS: &str = "appointments";
pub const DONATIONS: &str = "donations";
pub const REFUNDS: &str = "refunds";
pub const SETTINGS: &str = "settings";
pub const NOT_FOUND: &str = "not_found";

pub const PAGES: &[(&str, &str)] = &[
    (LAYOUT, LAYOUT_TEMPLATE),
    (HOME, HOME_TEMPLATE),
    (ABOUT, ABOUT_TEMPLATE),
    (SERVICES, SERVICES_TEMPLATE),
    (CONTACT, CONTACT_TEMPLATE),
    (DONORS, DONORS_TEMPLATE),
    (REFUND, REFUND_TEMPLATE),
    (SIGN_UP, SIGN_UP_TEMPLATE),
    (LOGIN, LOGIN_TEMPLATE),
    (BOOK_APPOINTMENT, BOOK_APPOINTMENT_TEMPLATE),
    (DASHBOARD, DASHBOARD_TEMPLATE),
    (EDIT_PROFILE, EDIT_PROFILE_TEMPLATE),
    (APPOINTMENTS, APPOINTMENTS_TEMPLATE),
    (DONATIONS, DONATIONS_TEMPLATE),
    (REFUNDS, REFUNDS_TEMPLATE),
    (SETTINGS, SETTINGS_TEMPLATE),
    (NOT_FOUND, NOT_FOUND_TEMPLATE),
];

const LAYOUT_TEMPLATE: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="utf-8">
  <meta name="viewport" content="width=device-width, initial-scale=1">
  <title>{{title}} | {{site.site_name}}</title>
</head>
<body>
  <div class="top-bar">
    <span>Emergency: {{site.emergency_phone}}</span>
    <span>{{site.contact_email}}</span>
    {{#each shell.utility}}<a class="utility{{#if active}} active{{/if}}" href="{{path}}">{{label}}</a>{{/each}}
  </div>
  <header>
    <a class="brand" href="/">{{site.site_name}}</a>
    <nav class="main-nav{{#if shell.menu_open}} open{{/if}}">
      {{#each shell.public}}<a class="nav-item{{#if active}} active{{/if}}" href="{{path}}">{{label}}</a>
      {{/each}}
    </nav>
    <div class="auth">
      {{#each shell.auth}}<a class="button{{#if active}} active{{/if}}" href="{{path}}">{{label}}</a>{{/each}}
    </div>
    <a class="menu-toggle" href="{{shell.menu_href}}">{{#if shell.menu_open}}Close menu{{else}}Menu{{/if}}</a>
  </header>
  {{#if shell.dashboard}}
  <div class="dashboard">
    <aside class="sidebar{{#if shell.sidebar_open}} open{{/if}}">
      <a class="sidebar-toggle" href="{{shell.sidebar_href}}">{{#if shell.sidebar_open}}Hide{{else}}Show{{/if}} sidebar</a>
      {{#each shell.sidebar}}
      {{#if post}}
      <form method="post" action="{{path}}"><button class="sidebar-item" type="submit">{{label}}</button></form>
      {{else}}
      <a class="sidebar-item{{#if active}} active{{/if}}" href="{{path}}">{{label}}</a>
      {{/if}}
      {{/each}}
    </aside>
    <main>{{{body}}}</main>
  </div>
  {{else}}
  <main>{{{body}}}</main>
  {{/if}}
  <footer>
    <p>&copy; {{year}} {{site.site_name}}. All rights reserved.</p>
  </footer>
</body>
</html>
"#;

pub const FORM_TEMPLATE: &str = r#"<form method="post" action="{{action}}" class="form form-{{form}}" novalidate>
  <input type="hidden" name="form" value="{{form}}">
  {{#if acknowledgement}}<div class="notice success" role="status">{{acknowledgement}}</div>{{/if}}
  {{#if form_error}}<div class="notice error" role="alert">{{form_error}}</div>{{/if}}
  {{#each fields}}
  <div class="field{{#if error}} invalid{{/if}}">
    {{#if (eq widget "checkbox")}}
    <label><input type="checkbox" name="{{name}}"{{#if checked}} checked{{/if}}> {{label}}</label>
    {{else}}
    <label for="{{name}}">{{label}}</label>
    {{#if (eq widget "select")}}
    <select id="{{name}}" name="{{name}}">
      <option value="">Select...</option>
      {{#each options}}<option value="{{value}}"{{#if selected}} selected{{/if}}>{{label}}</option>{{/each}}
    </select>
    {{/if}}
    {{#if (eq widget "textarea")}}<textarea id="{{name}}" name="{{name}}">{{value}}</textarea>{{/if}}
    {{#if (eq widget "input")}}<input id="{{name}}" name="{{name}}" type="{{input_type}}" value="{{value}}">{{/if}}
    {{#if (eq widget "password")}}
    <input id="{{name}}" name="{{name}}" type="{{input_type}}" value="{{value}}">
    <a class="reveal" href="{{toggle_href}}">{{#if revealed}}Hide{{else}}Show{{/if}}</a>
    {{/if}}
    {{/if}}
    {{#if error}}<p class="error-message">{{error}}</p>{{/if}}
  </div>
  {{/each}}
  <button type="submit">{{submit_label}}</button>
</form>
"#;

const HOME_TEMPLATE: &str = r#"<section class="hero">
  <h1>Your Health, Our Priority</h1>
  <p>Compassionate, comprehensive care for you and your family at {{site.site_name}}.</p>
  <a class="button" href="/book-appointment">Book an Appointment</a>
  <a class="button secondary" href="/services">Our Services</a>
</section>
<section class="highlights">
  <div><h3>24/7 Emergency Care</h3><p>Call {{site.emergency_phone}} any time.</p></div>
  <div><h3>Qualified Doctors</h3><p>Experienced specialists across general medicine, cardiology, pediatrics and dermatology.</p></div>
  <div><h3>Community Support</h3><p>Donations keep our equipment, medicine and facilities ready for patients in need.</p></div>
</section>
"#;

const ABOUT_TEMPLATE: &str = r#"<section>
  <h1>About {{site.site_name}}</h1>
  <p>The House Of The Way is a community healthcare provider offering preventive, primary and emergency care.</p>
  <h2>Our Mission</h2>
  <p>To provide accessible, high-quality healthcare to every patient who walks through our doors.</p>
  <h2>Our Vision</h2>
  <p>A healthier community where care is never out of reach.</p>
</section>
"#;

const SERVICES_TEMPLATE: &str = r#"<section>
  <h1>Health Services</h1>
  <ul class="services">
    {{#each services}}<li><h3>{{label}}</h3></li>{{/each}}
  </ul>
  <a class="button" href="/book-appointment">Book an Appointment</a>
</section>
"#;

const CONTACT_TEMPLATE: &str = r#"<section>
  <h1>Contact Us</h1>
  <dl>
    <dt>Emergency</dt><dd>{{site.emergency_phone}}</dd>
    <dt>Email</dt><dd>{{site.contact_email}}</dd>
  </dl>
  <h2>Hours</h2>
  <ul>
    {{#each hours}}<li>{{this}}</li>{{/each}}
  </ul>
</section>
"#;

const DONORS_TEMPLATE: &str = r#"<section>
  <h1>Support Our Mission</h1>
  <p>Your donation helps us provide quality care to patients who need it most.</p>
  <div class="cards">
    {{#each causes}}<div class="card"><h3>{{title}}</h3><p>{{description}}</p></div>{{/each}}
  </div>
  {{> form form}}
</section>
"#;

const REFUND_TEMPLATE: &str = r#"<section>
  <h1>Refund Request</h1>
  <p>Submit a refund request for services that were cancelled, not provided or billed in error.</p>
  <aside class="policy">
    <h2>Refund Policy</h2>
    <ul>{{#each policy}}<li>{{this}}</li>{{/each}}</ul>
  </aside>
  {{> form form}}
</section>
"#;

const SIGN_UP_TEMPLATE: &str = r#"<section>
  <h1>Create Your Account</h1>
  <p>Join {{site.site_name}} to book appointments and manage your health records.</p>
  {{> form form}}
  <p>Already have an account? <a href="/login">Login</a></p>
</section>
"#;

const LOGIN_TEMPLATE: &str = r#"<section>
  <h1>Welcome Back</h1>
  <p>Sign in to your {{site.site_name}} account.</p>
  {{> form form}}
  <p>Don't have an account? <a href="/signup">Sign up</a></p>
</section>
"#;

const BOOK_APPOINTMENT_TEMPLATE: &str = r#"<section>
  <h1>Book an Appointment</h1>
  <p>Fill in the details below and we will confirm your schedule.</p>
  {{> form form}}
</section>
"#;

const DASHBOARD_TEMPLATE: &str = r#"<section>
  <h1>Welcome back, {{first_name}}!</h1>
  <div class="stats">
    <div class="stat"><span>Upcoming Appointments</span><strong>{{stats.pending_appointments}}</strong></div>
    <div class="stat"><span>Completed Visits</span><strong>{{stats.completed_appointments}}</strong></div>
    <div class="stat"><span>Total Donations</span><strong>&#8369;{{stats.total_donations}}</strong></div>
    <div class="stat"><span>Open Refunds</span><strong>{{stats.open_refunds}}</strong></div>
  </div>
  <h2>Recent Appointments</h2>
  <ul class="recent">
    {{#each recent}}<li>{{service}} with {{doctor}} on {{date}} at {{time}} <span class="status {{status}}">{{status}}</span></li>{{/each}}
  </ul>
  <h2>Health Tips</h2>
  <ul class="tips">
    {{#each tips}}<li><strong>{{title}}</strong> {{text}}</li>{{/each}}
  </ul>
</section>
"#;

const EDIT_PROFILE_TEMPLATE: &str = r#"<section>
  <h1>Edit Profile</h1>
  <p>Keep your personal information up to date.</p>
  {{> form form}}
</section>
"#;

const APPOINTMENTS_TEMPLATE: &str = r#"<section>
  <h1>Appointment History</h1>
  <table>
    <thead><tr><th>Service</th><th>Doctor</th><th>Date</th><th>Time</th><th>Status</th></tr></thead>
    <tbody>
      {{#each appointments}}<tr><td>{{service}}</td><td>{{doctor}}</td><td>{{date}}</td><td>{{time}}</td><td class="status {{status}}">{{status}}</td></tr>
      {{/each}}
    </tbody>
  </table>
  <a class="button" href="/book-appointment">Book New Appointment</a>
</section>
"#;

const DONATIONS_TEMPLATE: &str = r#"<section>
  <h1>Donation Records</h1>
  <p class="total">Total donated: &#8369;{{total}}</p>
  <table>
    <thead><tr><th>Date</th><th>Amount</th><th>Method</th><th>Purpose</th><th>Status</th></tr></thead>
    <tbody>
      {{#each donations}}<tr><td>{{date}}</td><td>&#8369;{{amount}}</td><td>{{method}}</td><td>{{purpose}}</td><td class="status {{status}}">{{status}}</td></tr>
      {{/each}}
    </tbody>
  </table>
  <a class="button" href="/donors">Make a Donation</a>
</section>
"#;

const REFUNDS_TEMPLATE: &str = r#"<section>
  <h1>Refund Requests</h1>
  <table>
    <thead><tr><th>Transaction</th><th>Date</th><th>Amount</th><th>Reason</th><th>Status</th></tr></thead>
    <tbody>
      {{#each refunds}}<tr><td>{{transaction_id}}</td><td>{{date}}</td><td>&#8369;{{amount}}</td><td>{{reason}}<br><small>{{description}}</small></td><td class="status {{status}}">{{status}}</td></tr>
      {{/each}}
    </tbody>
  </table>
  <a class="button" href="/refund">New Refund Request</a>
</section>
"#;

const SETTINGS_TEMPLATE: &str = r#"<section>
  <h1>Account Settings</h1>
  <p>Manage your account security and preferences.</p>
  {{#if notice}}<div class="notice warning" role="status">{{notice}}</div>{{/if}}
  <h2>Change Password</h2>
  {{> form password}}
  <h2>Notification Preferences</h2>
  {{> form notifications}}
  <h2>Danger Zone</h2>
  <a class="button danger" href="{{delete_href}}">Delete Account</a>
  {{#if confirm_delete}}
  <div class="modal" role="dialog">
    <h3>Delete Account</h3>
    <p>Are you sure you want to delete your account? This action cannot be undone.</p>
    <form method="post" action="/dashboard/settings">
      <input type="hidden" name="form" value="delete_account">
      <button class="danger" type="submit">Delete Account</button>
    </form>
    <a class="button secondary" href="{{delete_href}}">Cancel</a>
  </div>
  {{/if}}
</section>
"#;

const NOT_FOUND_TEMPLATE: &str = r#"<section class="not-found">
  <h1>404</h1>
  <p>Oops! Page not found</p>
  <a href="/">Return to Home</a>
</section>
"#;
