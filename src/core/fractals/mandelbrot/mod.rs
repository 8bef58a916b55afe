pub mod evaluator;
pub mod gradient;
pub mod resolver;
