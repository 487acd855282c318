use crate::api::{SalaryPredictor, Vacancies};

/// Salary statistics of one programming language on one job site
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct LanguageStatistics {
    /// Total reported by the job site, independent of salary data
    pub vacancies_found: u32,
    /// Vacancies an expected salary could be computed for
    pub vacancies_processed: u32,
    /// Truncated mean of the expected salaries, 0 if nothing was processed
    pub average_salary: u64,
}

impl LanguageStatistics {
    pub fn from_predictions<I>(vacancies_found: u32, predictions: I) -> Self
    where
        I: IntoIterator<Item = Option<f64>>,
    {
        let mut statistics = LanguageStatistics {
            vacancies_found,
            ..Default::default()
        };
        let mut salary_sum = 0.0;
        for salary in predictions.into_iter().flatten() {
            statistics.vacancies_processed += 1;
            salary_sum += salary;
        }
        if statistics.vacancies_processed > 0 {
            statistics.average_salary = (salary_sum / statistics.vacancies_processed as f64) as u64;
        }
        statistics
    }

    pub fn from_vacancies<V: SalaryPredictor>(vacancies: &Vacancies<V>) -> Self {
        Self::from_predictions(
            vacancies.found,
            vacancies.items.iter().map(SalaryPredictor::predict_rub_salary),
        )
    }
}
