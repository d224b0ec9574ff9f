/// interactive shell: name or formula in, lean and rich combustion report out
pub mod cli_main;
