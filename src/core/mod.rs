pub mod aggregator;
pub mod engine;
pub mod report;
pub mod store;
pub mod validator;

pub use crate::domain::model::{BreedReport, RawRecord, RegistrationRecord, YearlyBreakdown};
pub use crate::domain::ports::{ConfigProvider, OutputFormat, Storage};
pub use crate::utils::error::Result;
pub use aggregator::Aggregator;
pub use store::RecordStore;
