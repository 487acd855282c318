use async_trait::async_trait;
use std::error::Error;

use crate::models::LanguageStatistics;

/// Maps a raw vacancy of one job site to an expected salary in roubles
pub trait SalaryPredictor {
    fn predict_rub_salary(&self) -> Option<f64>;
}

/// All vacancies fetched for one keyword, together with the total count
/// reported by the job site
#[derive(Debug)]
pub struct Vacancies<V> {
    pub items: Vec<V>,
    pub found: u32,
}

/// Trait for job sites that can be searched for vacancies by keyword
#[async_trait]
pub trait VacancySource {
    type Vacancy: SalaryPredictor + Send;
    type E: Error + Send + Sync;

    /// Title of the report built from this source
    fn title(&self) -> &str;

    /// Fetch every page of vacancies matching `keyword`
    async fn fetch_vacancies(&self, keyword: &str) -> Result<Vacancies<Self::Vacancy>, Self::E>;

    async fn salary_statistics(&self, keyword: &str) -> Result<LanguageStatistics, Self::E> {
        let vacancies = self.fetch_vacancies(keyword).await?;
        let statistics = LanguageStatistics::from_vacancies(&vacancies);
        log::info!(
            "{}: {} vacancies found for {}, {} with salary",
            self.title(),
            statistics.vacancies_found,
            keyword,
            statistics.vacancies_processed
        );
        Ok(statistics)
    }
}
