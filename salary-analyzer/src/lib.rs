pub mod api;
pub mod models;
pub mod predict;
pub mod report;

pub use api::{SalaryPredictor, Vacancies, VacancySource};
pub use models::LanguageStatistics;
pub use report::{collect_report, SalaryReport};
