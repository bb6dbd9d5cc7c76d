pub mod animator;
pub mod run;
