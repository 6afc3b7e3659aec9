//! In-memory transactional store for orgdir aggregates
//!
//! One table per aggregate behind a single lock: a lock scope is a
//! transaction, so readers never observe a company pointing at a missing
//! department or a department outliving its removal from an owner.

pub mod collection;
pub mod store;

pub use collection::Collection;
pub use store::{Companies, Departments, OrgStore, StoreCounts, Teams};
