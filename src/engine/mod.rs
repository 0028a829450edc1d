mod engine;
mod job;
mod outcome;
mod result;
mod status;
mod views;


pub use engine::*;
pub use job::*;
pub use outcome::*;
pub use result::*;
pub use status::*;
pub use views::*;
