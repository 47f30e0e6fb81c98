use std::time::Duration;

use async_trait::async_trait;

/// Waits between consecutive requests
#[async_trait]
pub trait Pacer: Send + Sync {
    async fn pause(&self, interval: Duration);
}

/// Sleeps on the tokio timer
#[derive(Debug, Clone, Copy, Default)]
pub struct TokioPacer;

#[async_trait]
impl Pacer for TokioPacer {
    async fn pause(&self, interval: Duration) {
        tokio::time::sleep(interval).await;
    }
}

#[async_trait]
impl<P: Pacer + ?Sized> Pacer for &P {
    async fn pause(&self, interval: Duration) {
        (**self).pause(interval).await;
    }
}

/// Fixed gap kept between two requests to the dictionary API
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequestPacing {
    pub interval: Duration,
}

impl RequestPacing {
    pub fn new(interval: Duration) -> Self {
        Self { interval }
    }

    /// No gap at all
    pub fn none() -> Self {
        Self::new(Duration::ZERO)
    }

    pub fn is_paced(&self) -> bool {
        !self.interval.is_zero()
    }
}

impl Default for RequestPacing {
    fn default() -> Self {
        Self::new(Duration::from_millis(100))
    }
}
