//! Service layer for the money tracker
//!
//! The service layer provides business logic on top of the storage layer,
//! handling validation, household ownership checks and cross-entity
//! operations.

pub mod category;
pub mod household;
pub mod recurring;
pub mod summary;
pub mod transaction;

pub use category::CategoryService;
pub use household::{DeletedCounts, HouseholdService};
pub use recurring::{
    CreateOverrideInput, CreateRecurringInput, RecurringService, UpdateOverrideInput,
    UpdateRecurringInput,
};
pub use summary::SummaryService;
pub use transaction::{CreateTransactionInput, TransactionService, UpdateTransactionInput};
