//! HTML rendering

use chrono::{Datelike, Utc};
use handlebars::Handlebars;
use serde::Serialize;
use serde_json::{json, Value};

use crate::config::PortalConfig;
use crate::error::Result;
use crate::routes::{Route, Shell};
use crate::templates::{FORM_PARTIAL, FORM_TEMPLATE, LAYOUT, PAGES};
use crate::toggles::Toggles;

pub struct Renderer {
    handlebars: Handlebars<'static>,
    site: Value,
}

impl Renderer {
    pub fn new(config: &PortalConfig) -> Result<Self> {
        let mut hb = Handlebars::new();
        for (name, template) in PAGES {
            hb.register_template_string(name, template)?;
        }
        hb.register_partial(FORM_PARTIAL, FORM_TEMPLATE)?;

        Ok(Self {
            handlebars: hb,
            site: json!({
                "site_name": config.site_name,
                "emergency_phone": config.emergency_phone,
                "contact_email": config.contact_email,
            }),
        })
    }

    pub fn render<T: Serialize>(&self, template: &str, data: &T) -> Result<String> {
        Ok(self.handlebars.render(template, data)?)
    }

    /// Render `template` with `data` and wrap it in the site layout for
    /// `route`. `data` gains a `site` key when it is an object.
    pub fn page(&self, route: Route, toggles: &Toggles, template: &str, mut data: Value) -> Result<String> {
        if let Value::Object(map) = &mut data {
            map.insert("site".to_string(), self.site.clone());
        }
        let body = self.render(template, &data)?;

        self.render(
            LAYOUT,
            &json!({
                "site": self.site,
                "title": route.title(),
                "shell": Shell::new(route, toggles),
                "body": body,
                "year": Utc::now().year(),
            }),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::templates::NOT_FOUND;

    #[test]
    fn test_every_template_registers() {
        assert!(Renderer::new(&PortalConfig::default()).is_ok());
    }

    #[test]
    fn test_layout_marks_active_route() {
        let renderer = Renderer::new(&PortalConfig::default()).unwrap();
        let html = renderer
            .page(Route::About, &Toggles::default(), NOT_FOUND, json!({}))
            .unwrap();
        assert!(html.contains(r#"<a class="nav-item active" href="/about">ABOUT</a>"#));
        assert!(html.contains(r#"<a class="nav-item" href="/">HOME</a>"#));
        assert!(html.contains("<title>About Us | THOTW</title>"));
    }

    #[test]
    fn test_values_are_escaped() {
        let renderer = Renderer::new(&PortalConfig::default()).unwrap();
        let html = renderer
            .render(FORM_PARTIAL, &json!({ "fields": [{ "name": "firstName", "label": "First", "widget": "input", "input_type": "text", "value": "<script>" }] }))
            .unwrap();
        assert!(html.contains("&lt;script&gt;"));
        assert!(!html.contains("<script>"));
    }
}
