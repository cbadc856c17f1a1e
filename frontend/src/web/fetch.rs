//! 请求生命周期守卫
//!
//! 屏幕在参数变化或卸载后可能收到迟到的响应。每次发起请求前领取一个
//! 令牌，响应到达时只有仍然最新的令牌才允许把结果写进视图状态，
//! 迟到者直接丢弃（latest-wins）。UI 线程单线程协作调度，
//! `Arc<AtomicU64>` 仅为满足 Leptos 上下文的 `Send + Sync` 约束。

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

/// 每个取数来源（一个屏幕、一个 store）各持有一个 tracker。
#[derive(Clone, Default)]
pub struct RequestTracker {
    latest: Arc<AtomicU64>,
}

impl RequestTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// 开始一次新请求：旧令牌立即全部失效。
    pub fn begin(&self) -> RequestToken {
        let seq = self.latest.load(Ordering::Relaxed) + 1;
        self.latest.store(seq, Ordering::Relaxed);
        RequestToken {
            seq,
            latest: Arc::clone(&self.latest),
        }
    }
}

/// 单次请求的令牌。
#[derive(Clone)]
pub struct RequestToken {
    seq: u64,
    latest: Arc<AtomicU64>,
}

impl RequestToken {
    /// 此请求是否仍是该来源的最新一次。
    pub fn is_current(&self) -> bool {
        self.latest.load(Ordering::Relaxed) == self.seq
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_token_is_current() {
        let tracker = RequestTracker::new();
        let token = tracker.begin();
        assert!(token.is_current());
    }

    #[test]
    fn newer_request_invalidates_older_tokens() {
        let tracker = RequestTracker::new();
        let first = tracker.begin();
        let second = tracker.begin();
        assert!(!first.is_current());
        assert!(second.is_current());

        let third = tracker.begin();
        assert!(!second.is_current());
        assert!(third.is_current());
    }

    #[test]
    fn trackers_are_independent() {
        let a = RequestTracker::new();
        let b = RequestTracker::new();
        let token_a = a.begin();
        let _token_b = b.begin();
        assert!(token_a.is_current());
    }
}
