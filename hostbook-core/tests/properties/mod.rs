mod command_tests;
mod generators;
mod store_tests;
