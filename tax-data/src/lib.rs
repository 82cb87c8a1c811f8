pub mod input;
pub mod loader;

pub use input::{InputLoader, InputLoaderError};
pub use loader::{BandScheduleLoader, BandScheduleLoaderError, BandScheduleRecord};
