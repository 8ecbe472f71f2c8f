pub mod path_sampler;

pub use path_sampler::{PathSampler, SamplerOptions};
