use crate::model::testimonial::Testimonial;

pub const TESTIMONIALS: &[Testimonial] = &[
    Testimonial {
        author: "Maya Patel",
        role: "Founder",
        company: "InfinitePages",
        quote: "Jane turned a spreadsheet of books into a shop our customers actually enjoy \
                using. Search finally works.",
    },
    Testimonial {
        author: "Tomás Herrera",
        role: "Product Designer",
        company: "Northwind Studio",
        quote: "Rare to find someone who cares about motion details and accessibility in \
                the same pull request.",
    },
    Testimonial {
        author: "Grace Liu",
        role: "Engineering Manager",
        company: "Bloom Labs",
        quote: "Shipped ahead of schedule and left the codebase cleaner than it was before.",
    },
];
