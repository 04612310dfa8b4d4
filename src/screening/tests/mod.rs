mod common;
mod engine;
mod table;
