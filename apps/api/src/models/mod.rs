pub mod dates;
pub mod profile;
pub mod sample;
