use super::ReportStrategy;
use crate::domain::Transaction;

/// Assembles a report document from a title line and a strategy-rendered body.
///
/// Both parts default to empty strings, so a bare `build` yields whatever
/// was actually set rather than raising.
#[derive(Debug, Default, Clone)]
pub struct ReportBuilder {
    title: String,
    body: String,
}

impl ReportBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores the header line as `=== {title} ===`.
    pub fn with_title(mut self, title: &str) -> Self {
        self.title = format!("=== {title} ===\n");
        self
    }

    /// Runs the strategy over the log and stores its output as the body.
    pub fn with_body(
        mut self,
        strategy: &dyn ReportStrategy,
        transactions: &[Transaction],
    ) -> Self {
        self.body = strategy.aggregate(transactions);
        self
    }

    pub fn build(&self) -> String {
        format!("{}{}", self.title, self.body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::TransactionKind;
    use crate::reports::CategoryReport;

    fn sample_log() -> Vec<Transaction> {
        vec![Transaction::new(TransactionKind::Income, 1000.0, "Salary").unwrap()]
    }

    #[test]
    fn chains_title_and_strategy_body() {
        let report = ReportBuilder::new()
            .with_title("Test Report")
            .with_body(&CategoryReport, &sample_log())
            .build();
        assert_eq!(
            report,
            "=== Test Report ===\n=== Report by Category ===\nSalary: 1000.00\n"
        );
    }

    #[test]
    fn unset_parts_stay_empty() {
        assert_eq!(ReportBuilder::new().build(), "");
        assert_eq!(
            ReportBuilder::new().with_title("Totals").build(),
            "=== Totals ===\n"
        );
        assert_eq!(
            ReportBuilder::new().with_body(&CategoryReport, &[]).build(),
            "=== Report by Category ===\n"
        );
    }

    #[test]
    fn builder_can_render_more_than_once() {
        let builder = ReportBuilder::new().with_title("Totals");
        assert_eq!(builder.build(), builder.build());
    }
}
