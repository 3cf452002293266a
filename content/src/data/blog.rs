use crate::model::blog::BlogPost;

pub const BLOG_POSTS: &[BlogPost] = &[
    BlogPost {
        slug: "designing-offline-first-apps",
        title: "Designing offline-first apps",
        excerpt: "What I learned building a plant tracker that has to work in a greenhouse \
                  with no signal.",
        published: "2024-02-18",
        reading_minutes: 7,
        tags: &["pwa", "architecture"],
        body: &[
            "Offline-first starts with deciding which copy of the data is the truth. For \
             Green Thumb the device is the source of truth and the network is an optional \
             backup.",
            "Service workers handle the shell, IndexedDB stores the records, and every write \
             goes to the local store before anything else happens.",
            "The hardest part was not caching but conflict handling: two devices editing the \
             same schedule. Last-write-wins per field turned out to be good enough.",
        ],
    },
    BlogPost {
        slug: "animating-charts-without-jank",
        title: "Animating charts without jank",
        excerpt: "Keeping sixty frames per second while dozens of data points move at once.",
        published: "2024-06-03",
        reading_minutes: 5,
        tags: &["animation", "performance"],
        body: &[
            "Animating SVG paths directly is expensive. Animating transforms on grouped \
             elements is cheap.",
            "VitaFlow precomputes chart geometry once per data change and only animates \
             opacity and translation afterwards.",
        ],
    },
    BlogPost {
        slug: "full-text-search-in-postgres",
        title: "Full-text search in Postgres is enough",
        excerpt: "You probably do not need a separate search cluster for a catalogue of a \
                  few hundred thousand rows.",
        published: "2023-11-27",
        reading_minutes: 9,
        tags: &["postgresql", "search"],
        body: &[
            "A generated tsvector column plus a GIN index handled every query InfinitePages \
             needed.",
            "Ranking with ts_rank_cd and a small boost for exact title matches gave results \
             customers described as better than the marketplace they came from.",
            "The main trade-off is language configuration: pick one per column and stick \
             with it.",
        ],
    },
];
