mod gazetteer;
mod geocoder;

pub use gazetteer::*;
pub use geocoder::*;
