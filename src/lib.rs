pub mod batch;
pub mod installers;
pub mod preflight;
