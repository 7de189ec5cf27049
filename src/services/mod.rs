pub mod backend;
pub mod capture;
pub mod dates;
pub mod parser;
pub mod resolver;
