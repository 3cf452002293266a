use crate::model::project::{CaseStudy, Project, ProjectLinks};

pub const PROJECTS: &[Project] = &[
    Project {
        slug: "green-thumb",
        title: "Green Thumb",
        description: "A plant care companion that tracks watering schedules, sunlight needs and \
                      growth milestones for every plant in your home.",
        image: "/images/projects/green-thumb.png",
        category: "front-end",
        tags: &["front-end", "react", "tailwind", "pwa"],
        links: Some(ProjectLinks {
            live: Some("https://green-thumb.example.dev"),
            source: Some("https://github.com/janedoe/green-thumb"),
        }),
        case_study: Some(CaseStudy {
            role: "Design and front-end development",
            duration: "6 weeks",
            challenge: "Plant owners forget watering days and have no single place to record \
                        how each plant responds to light and care.",
            solution: "An offline-first progressive web app with per-plant schedules, push \
                       reminders and a photo timeline stored on the device.",
            outcome: "Used daily by a small community of hobbyists; reminders cut missed \
                      waterings by more than half in a four-week trial.",
            stack: &["React", "Tailwind CSS", "Workbox", "IndexedDB"],
        }),
    },
    Project {
        slug: "vitaflow",
        title: "VitaFlow",
        description: "A wellness dashboard that visualises sleep, hydration and activity trends \
                      with animated charts and weekly goals.",
        image: "/images/projects/vitaflow.png",
        category: "front-end",
        tags: &["front-end", "react", "framer-motion", "charts"],
        links: Some(ProjectLinks {
            live: Some("https://vitaflow.example.dev"),
            source: None,
        }),
        case_study: None,
    },
    Project {
        slug: "infinitepages",
        title: "InfinitePages",
        description: "An online bookstore with full-text catalogue search, wishlists and a \
                      Stripe-powered checkout.",
        image: "/images/projects/infinitepages.png",
        category: "full-stack",
        tags: &["full-stack", "next.js", "typescript", "postgresql", "stripe"],
        links: Some(ProjectLinks {
            live: Some("https://infinitepages.example.dev"),
            source: Some("https://github.com/janedoe/infinitepages"),
        }),
        case_study: Some(CaseStudy {
            role: "Full-stack development",
            duration: "3 months",
            challenge: "An independent seller needed a storefront that could search tens of \
                        thousands of titles without a dedicated search service.",
            solution: "Server-rendered catalogue pages backed by PostgreSQL full-text indexes, \
                       with incremental regeneration for popular listings.",
            outcome: "Search responses stay under 100ms at the 95th percentile and the shop \
                      moved all sales off its previous marketplace.",
            stack: &["Next.js", "TypeScript", "PostgreSQL", "Stripe"],
        }),
    },
];
