pub mod session;
pub mod transform;

pub use crate::domain::model::Mode;
pub use crate::domain::ports::{ConfigProvider, Storage};
pub use crate::utils::error::Result;
