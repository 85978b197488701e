use thiserror::Error;

pub type Result<T> = std::result::Result<T, ProgressError>;

#[derive(Debug, Error)]
pub enum ProgressError {
    #[error("unknown template field: {0}")]
    UnknownField(String),

    #[error("unterminated template field starting at byte {0}")]
    Unterminated(usize),

    #[error("invalid template: {0}")]
    Template(#[from] indicatif::style::TemplateError),
}
