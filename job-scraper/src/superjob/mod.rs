//! superjob.ru vacancy search
pub mod scraper;
pub mod types;

pub use scraper::{SuperJob, DEFAULT_BASE_URL};
pub use types::Vacancy;
