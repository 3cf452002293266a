pub mod blog;
pub mod contacts;
pub mod projects;
pub mod skills;
pub mod testimonials;
