#[allow(non_snake_case)]
pub mod Combustion;
#[allow(non_snake_case)]
pub mod Molecules;
pub mod cli;
pub mod settings;
