pub mod manifest;
pub mod scan;
