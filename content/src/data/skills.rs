use crate::model::skill::Skill;

pub const SKILLS: &[Skill] = &[
    Skill { name: "TypeScript", group: "Frontend", proficiency: 90 },
    Skill { name: "React", group: "Frontend", proficiency: 90 },
    Skill { name: "Next.js", group: "Frontend", proficiency: 85 },
    Skill { name: "Tailwind CSS", group: "Frontend", proficiency: 85 },
    Skill { name: "Framer Motion", group: "Frontend", proficiency: 70 },
    Skill { name: "Node.js", group: "Backend", proficiency: 80 },
    Skill { name: "PostgreSQL", group: "Backend", proficiency: 75 },
    Skill { name: "Rust", group: "Backend", proficiency: 60 },
    Skill { name: "Figma", group: "Design", proficiency: 70 },
    Skill { name: "Docker", group: "Tooling", proficiency: 65 },
    Skill { name: "GitHub Actions", group: "Tooling", proficiency: 70 },
];
