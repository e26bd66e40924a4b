pub mod askpass;
pub mod bootstrap;
pub mod cli;
pub mod config;
pub mod logging;
pub mod process;
