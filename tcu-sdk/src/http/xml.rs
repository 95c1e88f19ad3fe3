pub mod parser;
pub mod serializer;
