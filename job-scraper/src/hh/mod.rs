//! hh.ru (HeadHunter) vacancy search
pub mod scraper;
pub mod types;

pub use scraper::{HeadHunter, DEFAULT_BASE_URL};
pub use types::{Salary, Vacancy};
