use async_trait::async_trait;
use reqwest::Client;
use salary_analyzer::{Vacancies, VacancySource};
use serde::{Deserialize, Serialize};

use crate::superjob::types::Vacancy;
use crate::types::{Error, Result};

pub const DEFAULT_BASE_URL: &str = "https://api.superjob.ru";
const APP_ID_HEADER: &str = "X-Api-App-Id";

/// Moscow
const TOWN: u32 = 4;
/// "Development, programming"
const CATALOGUES: u32 = 48;
const COUNT: u32 = 100;

#[derive(Serialize, Debug)]
struct SearchParams<'a> {
    town: u32,
    catalogues: u32,
    keyword: &'a str,
    count: u32,
    page: u32,
}

#[derive(Deserialize, Debug)]
struct ApiResponse {
    objects: Vec<Vacancy>,
    more: bool,
    total: u32,
}

pub struct SuperJob {
    client: Client,
    base_url: String,
    secret_key: String,
}

impl SuperJob {
    pub fn new(client: Client, secret_key: String) -> Self {
        Self::with_base_url(client, DEFAULT_BASE_URL, secret_key)
    }

    pub fn with_base_url(client: Client, base_url: impl Into<String>, secret_key: String) -> Self {
        Self {
            client,
            base_url: base_url.into(),
            secret_key,
        }
    }

    async fn fetch_page(&self, keyword: &str, page: u32) -> Result<ApiResponse> {
        let url = format!("{}/2.0/vacancies", self.base_url.trim_end_matches('/'));
        let params = SearchParams {
            town: TOWN,
            catalogues: CATALOGUES,
            keyword,
            count: COUNT,
            page,
        };
        log::debug!("requesting vacancies from superjob, page: {}, keyword: {}", page, keyword);
        let resp = self
            .client
            .get(&url)
            .header(APP_ID_HEADER, &self.secret_key)
            .query(&params)
            .send()
            .await?;
        let status = resp.status();
        if !status.is_success() {
            let url = resp.url().to_string();
            let error_body = resp.text().await;
            log::error!(
                "failed to retrieve superjob vacancies for page: {}, keyword: {}, error resp body: {:?}",
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
impl VacancySource for SuperJob {
    type Vacancy = Vacancy;
    type E = Error;

    fn title(&self) -> &str {
        "SuperJob Moscow"
    }

    async fn fetch_vacancies(&self, keyword: &str) -> Result<Vacancies<Vacancy>> {
        let mut page = 0;
        let mut items = Vec::new();
        loop {
            let vacancies_page = self.fetch_page(keyword, page).await?;
            items.extend(vacancies_page.objects);
            if !vacancies_page.more {
                log::debug!("fetched {} superjob pages for keyword: {}", page + 1, keyword);
                return Ok(Vacancies {
                    items,
                    found: vacancies_page.total,
                });
            }
            page += 1;
        }
    }
}

#[cfg(test)]
mod test {
    use reqwest::StatusCode;
    use serde_json::{json, Value};
    use wiremock::matchers::{header, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use super::*;

    const SECRET_KEY: &str = "v3.r.test-secret";

    fn vacancies_page(items: usize, more: bool, total: u32) -> Value {
        let objects: Vec<Value> = (0..items)
            .map(|id| {
                json!({
                    "id": id,
                    "profession": "Ruby developer",
                    "payment_from": 90000,
                    "payment_to": 0,
                    "currency": "rub",
                })
            })
            .collect();
        json!({"objects": objects, "more": more, "total": total})
    }

    async fn mount_page(server: &MockServer, keyword: &str, page: u32, body: Value) {
        Mock::given(method("GET"))
            .and(path("/2.0/vacancies"))
            .and(header(APP_ID_HEADER, SECRET_KEY))
            .and(query_param("town", "4"))
            .and(query_param("catalogues", "48"))
            .and(query_param("keyword", keyword))
            .and(query_param("count", "100"))
            .and(query_param("page", page.to_string()))
            .respond_with(ResponseTemplate::new(200).set_body_json(body))
            .expect(1)
            .mount(server)
            .await;
    }

    fn superjob(server: &MockServer) -> SuperJob {
        SuperJob::with_base_url(Client::new(), server.uri(), SECRET_KEY.to_owned())
    }

    #[tokio::test]
    async fn test_fetch_while_more_pages() {
        let server = MockServer::start().await;
        mount_page(&server, "Ruby", 0, vacancies_page(100, true, 142)).await;
        mount_page(&server, "Ruby", 1, vacancies_page(42, false, 142)).await;

        let vacancies = superjob(&server)
            .fetch_vacancies("Ruby")
            .await
            .expect("Fetching vacancies should not fail");

        assert_eq!(vacancies.items.len(), 142);
        assert_eq!(vacancies.found, 142);
        let requests = server.received_requests().await.expect("Recording is enabled");
        assert_eq!(requests.len(), 2);
    }

    #[tokio::test]
    async fn test_keyword_is_encoded() {
        let server = MockServer::start().await;
        mount_page(&server, "C#", 0, vacancies_page(3, false, 3)).await;

        let statistics = superjob(&server)
            .salary_statistics("C#")
            .await
            .expect("Statistics should be collected");

        assert_eq!(statistics.vacancies_found, 3);
        assert_eq!(statistics.vacancies_processed, 3);
        assert_eq!(statistics.average_salary, 108000);
    }

    #[tokio::test]
    async fn test_error_status_fails_fetch() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/2.0/vacancies"))
            .respond_with(ResponseTemplate::new(403).set_body_json(json!({
                "error": {"code": 403, "message": "Invalid app_key"}
            })))
            .expect(1)
            .mount(&server)
            .await;

        let result = SuperJob::with_base_url(Client::new(), server.uri(), "wrong".to_owned())
            .fetch_vacancies("PHP")
            .await;

        match result {
            Err(Error::RequestNotOk { status, url }) => {
                assert_eq!(status, StatusCode::FORBIDDEN);
                assert!(url.contains("keyword=PHP"));
            }
            other => panic!("expected RequestNotOk, got: {:?}", other),
        }
    }
}
