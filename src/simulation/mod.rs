pub mod rate_generator;
