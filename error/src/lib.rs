use thiserror::Error as ThisError;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(ThisError, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("{0}")]
    BadRequest(String),
    #[error("{0}")]
    NotFound(String),
    #[error("{0}")]
    InternalServerError(String),
}

impl Error {
    pub fn not_found(kind: &str, slug: &str) -> Self {
        Self::NotFound(format!("{kind} '{slug}' does not exist"))
    }

    pub fn message(&self) -> &str {
        match self {
            Self::BadRequest(msg) | Self::NotFound(msg) | Self::InternalServerError(msg) => msg,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_names_the_missing_record() {
        let err = Error::not_found("Project", "ghost");
        assert_eq!(err.to_string(), "Project 'ghost' does not exist");
        assert_eq!(err.message(), "Project 'ghost' does not exist");
    }
}
