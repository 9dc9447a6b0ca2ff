mod bitmap;
mod cardinality;
mod error;


pub use bitmap::Bitmap;
pub use cardinality::CardinalityIndex;
pub use error::{err, Error, Result};
