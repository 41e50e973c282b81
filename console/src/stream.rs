//! Async receive path
//!
//! [`RxStream`] yields received bytes to an executor instead of spinning in
//! [`Console::getc`]. The receive interrupt wakes the registered task after
//! each burst. It pops from the same consumer side of the ring as `getc`, so
//! only one of the two may be in use at a time.

use core::pin::Pin;
use core::task::{Context, Poll};

use futures_util::stream::Stream;

use crate::console::Console;

pub struct RxStream<'a> {
    console: &'a Console,
}

impl Console {
    pub fn rx_stream(&self) -> RxStream<'_> {
        RxStream { console: self }
    }
}

impl Stream for RxStream<'_> {
    type Item = u8;

    fn poll_next(self: Pin<&mut Self>, cx: &mut Context) -> Poll<Option<u8>> {
        let console = self.console;

        // fast path
        if let Some(byte) = console.rx.pop() {
            return Poll::Ready(Some(byte));
        }

        console.rx_waker.register(cx.waker());
        match console.rx.pop() {
            Some(byte) => {
                console.rx_waker.take();
                Poll::Ready(Some(byte))
            }
            None => Poll::Pending,
        }
    }
}
