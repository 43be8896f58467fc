pub mod entities;
pub mod highlight;
pub mod ports;
pub mod prompt;
pub mod report;
pub mod schema;
pub mod score;
pub mod services;
pub mod value_objects;

pub use entities::*;
pub use ports::*;
pub use value_objects::*;
