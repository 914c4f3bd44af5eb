use core::future::Future;
use core::pin::pin;
use core::task::{Context, Poll, Waker};
use std::vec::Vec;

/// Async delay that returns immediately and records every requested wait in nanoseconds
#[derive(Debug, Default)]
pub struct RecordingDelay {
    pub delays_ns: Vec<u32>,
}

impl embedded_hal_async::delay::DelayNs for RecordingDelay {
    async fn delay_ns(&mut self, ns: u32) {
        self.delays_ns.push(ns);
    }
}

/// Poll a future that never actually waits (mock bus, recording delay) to completion
pub fn block_on<F: Future>(fut: F) -> F::Output {
    let mut fut = pin!(fut);
    let mut cx = Context::from_waker(Waker::noop());
    loop {
        if let Poll::Ready(output) = fut.as_mut().poll(&mut cx) {
            return output;
        }
    }
}
