use salary_analyzer::predict::{predict_salary, SalaryBounds};
use salary_analyzer::SalaryPredictor;
use serde::{Deserialize, Serialize};

/// superjob.ru reports currency codes in lowercase
pub const RUB_CURRENCY: &str = "rub";

/// Missing payments are reported as `0`
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Vacancy {
    pub id: u64,
    pub profession: String,
    pub payment_from: Option<f64>,
    pub payment_to: Option<f64>,
    #[serde(default)]
    pub currency: String,
}

impl SalaryPredictor for Vacancy {
    fn predict_rub_salary(&self) -> Option<f64> {
        if self.currency != RUB_CURRENCY {
            return None;
        }
        SalaryBounds::new(self.payment_from, self.payment_to).map(predict_salary)
    }
}
