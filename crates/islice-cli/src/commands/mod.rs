pub mod demo;
pub mod input;
pub mod run;
