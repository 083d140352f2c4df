use thiserror::Error;

#[derive(Error, Debug)]
pub enum TestError {
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),
    #[error(transparent)]
    Narthex(#[from] narthex::error::Error),
    #[error("Failed to hash test password: {0}")]
    PasswordHash(String),
}
