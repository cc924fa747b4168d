/// Aggregated account models
pub mod account;
/// Transaction category models
pub mod category;
/// Balance, net worth and summary history models
pub mod history;
/// User message models
pub mod message;
/// Person profile models
pub mod person;
/// Transaction models
pub mod transaction;

pub use account::*;
pub use category::*;
pub use history::*;
pub use message::*;
pub use person::*;
pub use transaction::*;
