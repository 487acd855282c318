/// Salary bounds as published by a job site, at least one side is known
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SalaryBounds {
    From(f64),
    To(f64),
    Range(f64, f64),
}

impl SalaryBounds {
    /// Job sites report a missing bound either as `null` or as `0`,
    /// both are treated as unknown.
    pub fn new(from: Option<f64>, to: Option<f64>) -> Option<Self> {
        let known = |bound: Option<f64>| bound.filter(|value| *value != 0.0);
        match (known(from), known(to)) {
            (Some(from), Some(to)) => Some(SalaryBounds::Range(from, to)),
            (Some(from), None) => Some(SalaryBounds::From(from)),
            (None, Some(to)) => Some(SalaryBounds::To(to)),
            (None, None) => None,
        }
    }
}

/// Expected salary for a possibly one-sided range
pub fn predict_salary(bounds: SalaryBounds) -> f64 {
    match bounds {
        SalaryBounds::To(to) => to * 0.8,
        SalaryBounds::From(from) => from * 1.2,
        SalaryBounds::Range(from, to) => (from + to) / 2.0,
    }
}
