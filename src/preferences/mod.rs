mod preferences;
mod profile;
mod settings;
mod theme;
mod travel;

pub use preferences::*;
pub use profile::*;
pub use settings::*;
pub use theme::*;
pub use travel::*;
