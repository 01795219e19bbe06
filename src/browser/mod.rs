pub mod connection;
pub mod headless;
pub mod request_filter;
pub mod session;

pub use connection::connect_to_browser;
pub use headless::launch_headless_browser;
pub use request_filter::{BlockRule, RequestFilter};
pub use session::BrowserSession;
