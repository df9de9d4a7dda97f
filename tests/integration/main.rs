mod cli_test;
mod ring_test;
