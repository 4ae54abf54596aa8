pub mod builder;
pub mod by_category;
pub mod by_month;

use crate::domain::Transaction;

/// Strategy turning a transaction log into a rendered text report.
///
/// Implementations own their header line and row format; income counts
/// positive and expenses negative in every aggregate.
pub trait ReportStrategy {
    fn aggregate(&self, transactions: &[Transaction]) -> String;
}

pub use builder::ReportBuilder;
pub use by_category::CategoryReport;
pub use by_month::MonthlyReport;
