pub mod command;
pub mod runners;
pub mod toolchain;
