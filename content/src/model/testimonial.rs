use serde::Serialize;

#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct Testimonial {
    pub(crate) author: &'static str,
    pub(crate) role: &'static str,
    pub(crate) company: &'static str,
    pub(crate) quote: &'static str,
}

impl Testimonial {
    pub fn author(&self) -> &'static str {
        self.author
    }

    pub fn role(&self) -> &'static str {
        self.role
    }

    pub fn company(&self) -> &'static str {
        self.company
    }

    pub fn quote(&self) -> &'static str {
        self.quote
    }
}
