use async_trait::async_trait;
use reqwest::Client;
use salary_analyzer::{Vacancies, VacancySource};
use serde::{Deserialize, Serialize};

use crate::hh::types::Vacancy;
use crate::types::{Error, Result};

pub const DEFAULT_BASE_URL: &str = "https://api.hh.ru";

/// "Programmer, developer"
const PROFESSIONAL_ROLE: u32 = 96;
/// Moscow
const AREA: u32 = 1;
const PER_PAGE: u32 = 100;

#[derive(Serialize, Debug)]
struct SearchParams<'a> {
    professional_role: u32,
    area: u32,
    text: &'a str,
    per_page: u32,
    page: u32,
}

#[derive(Deserialize, Debug)]
struct ApiResponse {
    items: Vec<Vacancy>,
    found: u32,
    pages: u32,
}

pub struct HeadHunter {
    client: Client,
    base_url: String,
}

impl HeadHunter {
    pub fn new(client: Client) -> Self {
        Self::with_base_url(client, DEFAULT_BASE_URL)
    }

    pub fn with_base_url(client: Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into(),
        }
    }

    async fn fetch_page(&self, keyword: &str, page: u32) -> Result<ApiResponse> {
        let url = format!("{}/vacancies", self.base_url.trim_end_matches('/'));
        let params = SearchParams {
            professional_role: PROFESSIONAL_ROLE,
            area: AREA,
            text: keyword,
            per_page: PER_PAGE,
            page,
        };
        log::debug!("requesting vacancies from hh, page: {}, keyword: {}", page, keyword);
        let resp = self.client.get(&url).query(&params).send().await?;
        let status = resp.status();
        if !status.is_success() {
            let url = resp.url().to_string();
            let error_body = resp.text().await;
            log::error!(
                "failed to retrieve hh vacancies for page: {}, keyword: {}, error resp body: {:?}",
                page,
                keyword,
                error_body,
            );
            return Err(Error::RequestNotOk { url, status });
        }
        let vacancies_page: ApiResponse = resp.json().await?;
        Ok(vacancies_page)
    }
}

#[async_trait]
impl VacancySource for HeadHunter {
    type Vacancy = Vacancy;
    type E = Error;

    fn title(&self) -> &str {
        "HeadHunter Moscow"
    }

    async fn fetch_vacancies(&self, keyword: &str) -> Result<Vacancies<Vacancy>> {
        let mut page = 0;
        let mut items = Vec::new();
        loop {
            let vacancies_page = self.fetch_page(keyword, page).await?;
            items.extend(vacancies_page.items);
            page += 1;
            // hh.ru reports `pages: 0` for an empty search
            if page >= vacancies_page.pages {
                log::debug!("fetched {} hh pages for keyword: {}", page, keyword);
                return Ok(Vacancies {
                    items,
                    found: vacancies_page.found,
                });
            }
        }
    }
}
