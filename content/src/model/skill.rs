use serde::Serialize;

#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct Skill {
    pub(crate) name: &'static str,
    pub(crate) group: &'static str,
    pub(crate) proficiency: u8,
}

impl Skill {
    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn group(&self) -> &'static str {
        self.group
    }

    /// Percentage in `0..=100`.
    pub fn proficiency(&self) -> &u8 {
        &self.proficiency
    }
}
