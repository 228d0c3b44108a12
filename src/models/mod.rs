mod budget;
mod category;
mod period;
mod summary;
mod transaction;
mod user;

pub use budget::Budget;
pub use category::Category;
pub use period::{Period, PeriodUnit};
pub use summary::Summary;
#[cfg(test)]
pub use summary::NO_DATA;
pub use transaction::Transaction;
pub use user::User;

#[cfg(test)]
mod tests;
