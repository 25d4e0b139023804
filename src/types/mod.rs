pub mod granularity;
pub mod location;
pub mod schema;
pub mod variable;
pub mod weather_code;
