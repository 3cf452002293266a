use crate::model::contact::{Contact, ContactKind};

pub const CONTACTS: &[Contact] = &[
    Contact {
        kind: ContactKind::Email,
        label: "hello@example.dev",
        href: "mailto:hello@example.dev",
    },
    Contact {
        kind: ContactKind::Github,
        label: "GitHub",
        href: "https://github.com/janedoe",
    },
    Contact {
        kind: ContactKind::Linkedin,
        label: "LinkedIn",
        href: "https://www.linkedin.com/in/janedoe",
    },
    Contact {
        kind: ContactKind::Twitter,
        label: "Twitter",
        href: "https://twitter.com/janedoe",
    },
];
