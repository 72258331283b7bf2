pub mod convert;

pub use crate::domain::model::Rgb;
pub use crate::utils::error::Result;
