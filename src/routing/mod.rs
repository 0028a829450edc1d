mod error;
mod preference;
mod request;
mod response;
mod service;
mod straight;

pub use error::*;
pub use preference::*;
pub use request::*;
pub use response::*;
pub use service::*;
pub use straight::*;
