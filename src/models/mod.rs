pub mod acknowledgment;
pub mod coffee;
pub mod document;
pub mod user;

pub use acknowledgment::*;
pub use coffee::CoffeeFields;
pub use document::*;
pub use user::LoginUpdate;
