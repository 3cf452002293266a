use serde::Serialize;
use strum::{AsRefStr, EnumIter};

#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct Contact {
    pub(crate) kind: ContactKind,
    pub(crate) label: &'static str,
    pub(crate) href: &'static str,
}

impl Contact {
    pub fn kind(&self) -> &ContactKind {
        &self.kind
    }

    pub fn label(&self) -> &'static str {
        self.label
    }

    pub fn href(&self) -> &'static str {
        self.href
    }

    /// Links leaving the site open in a new tab.
    pub fn is_external(&self) -> bool {
        self.kind != ContactKind::Email
    }
}

#[derive(Serialize, AsRefStr, EnumIter, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum ContactKind {
    Email,
    Github,
    Linkedin,
    Twitter,
}
