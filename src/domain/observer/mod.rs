pub mod registry;

pub use registry::{observer, Listeners, Observer, ObserverRegistry};
