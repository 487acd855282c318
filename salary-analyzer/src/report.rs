use std::fmt::{self, Display, Formatter};

use crate::api::VacancySource;
use crate::models::LanguageStatistics;

const HEADER: [&str; 4] = [
    "Programming Language",
    "Vacancies Found",
    "Vacancies Processed",
    "Average Salary",
];

/// Per-language statistics of one job site, rows keep insertion order
#[derive(Debug, Default)]
pub struct SalaryReport {
    pub title: String,
    pub rows: Vec<(String, LanguageStatistics)>,
}

impl SalaryReport {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            rows: Vec::new(),
        }
    }

    pub fn push(&mut self, language: impl Into<String>, statistics: LanguageStatistics) {
        self.rows.push((language.into(), statistics));
    }

    fn cells(&self) -> Vec<[String; 4]> {
        let mut cells = Vec::with_capacity(self.rows.len() + 1);
        cells.push(HEADER.map(String::from));
        for (language, statistics) in &self.rows {
            cells.push([
                language.clone(),
                statistics.vacancies_found.to_string(),
                statistics.vacancies_processed.to_string(),
                statistics.average_salary.to_string(),
            ]);
        }
        cells
    }
}

fn border(widths: &[usize; 4]) -> String {
    let segments = widths
        .iter()
        .map(|width| "-".repeat(width + 2))
        .collect::<Vec<_>>()
        .join("+");
    format!("+{}+", segments)
}

fn row(cells: &[String; 4], widths: &[usize; 4]) -> String {
    let padded = cells
        .iter()
        .zip(widths)
        .map(|(cell, width)| {
            let fill = width - cell.chars().count();
            format!(" {}{} ", cell, " ".repeat(fill))
        })
        .collect::<Vec<_>>()
        .join("|");
    format!("|{}|", padded)
}

/// Renders an ascii table, the title is embedded in the top border
/// if it fits
impl Display for SalaryReport {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let cells = self.cells();
        let mut widths = [0usize; 4];
        for line in &cells {
            for (width, cell) in widths.iter_mut().zip(line) {
                *width = (*width).max(cell.chars().count());
            }
        }
        let border = border(&widths);

        let border_len = border.chars().count();
        let title_len = self.title.chars().count();
        if title_len > 0 && title_len <= border_len - 2 {
            let tail: String = border.chars().skip(title_len + 1).collect();
            writeln!(f, "+{}{}", self.title, tail)?;
        } else {
            writeln!(f, "{}", border)?;
        }

        let mut lines = cells.iter();
        if let Some(header) = lines.next() {
            writeln!(f, "{}", row(header, &widths))?;
            writeln!(f, "{}", border)?;
        }
        for line in lines {
            writeln!(f, "{}", row(line, &widths))?;
        }
        writeln!(f, "{}", border)
    }
}

/// Collect statistics for every language from `source`, one language at a time.
/// The first failing language aborts the report.
pub async fn collect_report<S, I>(source: &S, languages: I) -> Result<SalaryReport, S::E>
where
    S: VacancySource + Sync,
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    let mut report = SalaryReport::new(source.title());
    for language in languages {
        let language = language.as_ref();
        log::info!("collecting {} statistics for {}", source.title(), language);
        let statistics = source.salary_statistics(language).await?;
        report.push(language, statistics);
    }
    Ok(report)
}
