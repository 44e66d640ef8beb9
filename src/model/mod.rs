//! Plain domain records. Constructors that take operator input validate it.

pub mod customer;
pub mod restaurant;
pub mod meal;
pub mod order;
pub mod driver;

pub use customer::*;
pub use restaurant::*;
pub use meal::*;
pub use order::*;
pub use driver::*;
