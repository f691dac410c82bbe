pub type Result<T, E = anyhow::Error> = core::result::Result<T, E>;

#[derive(thiserror::Error, Debug)]
pub enum CliError {
    #[error("Invalid search term \"{0}\": only letters, numbers, '-', '_' and '%' are allowed")]
    InvalidSearch(String),
}
