use async_trait::async_trait;
use gloo_timers::future::TimeoutFuture;

use crate::components::copy_page::FeedbackTimer;

/// Revert delay on the browser event loop (`setTimeout` under the hood)
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserTimer;

#[async_trait(?Send)]
impl FeedbackTimer for BrowserTimer {
    async fn sleep(&self, millis: u32) {
        TimeoutFuture::new(millis).await;
    }
}
