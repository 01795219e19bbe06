pub mod chrome;
pub mod driver;
pub mod selectors;

pub use chrome::{ChromeElement, ChromePage};
pub use driver::{find_by_text, DomElement, DriverResult, PageDriver};
