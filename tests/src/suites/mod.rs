pub mod constant_time;
pub mod kat;
