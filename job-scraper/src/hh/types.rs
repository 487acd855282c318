use salary_analyzer::predict::{predict_salary, SalaryBounds};
use salary_analyzer::SalaryPredictor;
use serde::{Deserialize, Serialize};

/// hh.ru reports roubles with the legacy "RUR" code
pub const RUB_CURRENCY: &str = "RUR";

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Salary {
    pub from: Option<f64>,
    pub to: Option<f64>,
    pub currency: Option<String>,
    pub gross: Option<bool>,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Vacancy {
    pub id: String,
    pub name: String,
    pub salary: Option<Salary>,
}

impl SalaryPredictor for Vacancy {
    fn predict_rub_salary(&self) -> Option<f64> {
        let salary = self.salary.as_ref()?;
        if salary.currency.as_deref() != Some(RUB_CURRENCY) {
            return None;
        }
        SalaryBounds::new(salary.from, salary.to).map(predict_salary)
    }
}
