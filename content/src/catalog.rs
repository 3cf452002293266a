use crate::{
    data::{
        blog::BLOG_POSTS, contacts::CONTACTS, projects::PROJECTS, skills::SKILLS,
        testimonials::TESTIMONIALS,
    },
    model::{
        blog::BlogPost, contact::Contact, project::Project, skill::Skill,
        testimonial::Testimonial,
    },
};

/// Read-only view over the compiled-in content lists.
#[derive(Clone, Copy)]
pub struct Catalog {
    projects: &'static [Project],
    blog_posts: &'static [BlogPost],
    skills: &'static [Skill],
    testimonials: &'static [Testimonial],
    contacts: &'static [Contact],
}

impl Catalog {
    pub fn new(
        projects: &'static [Project],
        blog_posts: &'static [BlogPost],
        skills: &'static [Skill],
        testimonials: &'static [Testimonial],
        contacts: &'static [Contact],
    ) -> Self {
        Self {
            projects,
            blog_posts,
            skills,
            testimonials,
            contacts,
        }
    }

    pub fn seeded() -> Self {
        Self::new(PROJECTS, BLOG_POSTS, SKILLS, TESTIMONIALS, CONTACTS)
    }

    pub fn projects(&self) -> &'static [Project] {
        self.projects
    }

    pub fn blog_posts(&self) -> &'static [BlogPost] {
        self.blog_posts
    }

    pub fn skills(&self) -> &'static [Skill] {
        self.skills
    }

    pub fn testimonials(&self) -> &'static [Testimonial] {
        self.testimonials
    }

    pub fn contacts(&self) -> &'static [Contact] {
        self.contacts
    }

    pub fn project(&self, slug: &str) -> Option<&'static Project> {
        self.projects.iter().find(|p| p.slug() == slug)
    }

    pub fn blog_post(&self, slug: &str) -> Option<&'static BlogPost> {
        self.blog_posts.iter().find(|p| p.slug() == slug)
    }

    /// Posts with an unparsable date sort last.
    pub fn blog_posts_newest_first(&self) -> Vec<&'static BlogPost> {
        let mut posts = self.blog_posts.iter().collect::<Vec<_>>();
        posts.sort_by(|a, b| b.published_on().cmp(&a.published_on()));
        posts
    }

    /// Skills grouped by `Skill::group`, groups in first-seen order.
    pub fn skill_groups(&self) -> Vec<(&'static str, Vec<&'static Skill>)> {
        let mut groups: Vec<(&'static str, Vec<&'static Skill>)> = Vec::new();
        for skill in self.skills {
            match groups.iter_mut().find(|(group, _)| *group == skill.group()) {
                Some((_, skills)) => skills.push(skill),
                None => groups.push((skill.group(), vec![skill])),
            }
        }
        groups
    }
}
