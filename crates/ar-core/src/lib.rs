pub mod config;
pub mod constants;
pub mod controller;
pub mod driver;
pub mod gesture;
pub mod plants;
pub mod transform;

pub use config::*;
pub use constants::*;
pub use controller::*;
pub use driver::*;
pub use gesture::*;
pub use plants::*;
pub use transform::*;
