mod sample_steps;

pub use sample_steps::{SampleSteps, StepSample};
