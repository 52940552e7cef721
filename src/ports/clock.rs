use async_trait::async_trait;

/// Port for accessing time, performance measurement and timed delays
#[async_trait(?Send)]
pub trait ClockPort: Send + Sync {
    /// Returns the current timestamp in milliseconds
    fn now(&self) -> f64;

    /// Checks if performance timing is available
    fn is_available(&self) -> bool;

    /// Suspends the caller for the given number of milliseconds
    async fn sleep(&self, millis: u32);
}
