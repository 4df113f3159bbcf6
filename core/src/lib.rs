pub mod network;
pub mod resolver;
pub mod scanner;
