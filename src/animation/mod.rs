mod spring;

pub use spring::{SpringConfig, SpringReturn, SpringStep};
