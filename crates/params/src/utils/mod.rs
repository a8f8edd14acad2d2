//! Constants shared by the primitives the KEM consumes

pub mod hash;
