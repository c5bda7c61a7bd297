// Request bodies shared across route groups.

pub mod request;

pub use request::HeadlineRequest;
