mod describer;

pub use describer::{Describer, ResourceConfigResult};
