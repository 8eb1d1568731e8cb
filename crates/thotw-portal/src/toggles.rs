//! Page-local toggle state
//!
//! Menus, password visibility and the delete-account modal. Read from the
//! query string; a link flips one flag and keeps the others.

use serde::Deserialize;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Toggles {
    pub menu: bool,
    pub sidebar: bool,
    pub show_password: bool,
    pub show_confirm: bool,
    pub show_current: bool,
    pub show_new: bool,
    pub confirm_delete: bool,
}

impl Toggles {
    fn flags(&self) -> [(&'static str, bool); 7] {
        [
            ("menu", self.menu),
            ("sidebar", self.sidebar),
            ("show_password", self.show_password),
            ("show_confirm", self.show_confirm),
            ("show_current", self.show_current),
            ("show_new", self.show_new),
            ("confirm_delete", self.confirm_delete),
        ]
    }

    pub fn get(&self, name: &str) -> bool {
        self.flags()
            .into_iter()
            .any(|(n, on)| n == name && on)
    }

    /// Query string of every flag that is on, without the leading `?`.
    pub fn query(&self) -> String {
        self.flags()
            .into_iter()
            .filter(|(_, on)| *on)
            .map(|(n, _)| format!("{}=true", n))
            .collect::<Vec<_>>()
            .join("&")
    }

    /// `path` with the current flags and `name` inverted.
    pub fn flipped(&self, path: &str, name: &str) -> String {
        let mut next = *self;
        match name {
            "menu" => next.menu = !next.menu,
            "sidebar" => next.sidebar = !next.sidebar,
            "show_password" => next.show_password = !next.show_password,
            "show_confirm" => next.show_confirm = !next.show_confirm,
            "show_current" => next.show_current = !next.show_current,
            "show_new" => next.show_new = !next.show_new,
            "confirm_delete" => next.confirm_delete = !next.confirm_delete,
            _ => {}
        }
        next.href(path)
    }

    /// `path` carrying the current flags.
    pub fn href(&self, path: &str) -> String {
        let query = self.query();
        if query.is_empty() {
            path.to_string()
        } else {
            format!("{}?{}", path, query)
        }
    }
}
