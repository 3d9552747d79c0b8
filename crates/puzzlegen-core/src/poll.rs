//! Minimal future driver for synchronous callers.

use std::{
    future::Future,
    pin::pin,
    sync::Arc,
    task::{Context, Poll, Wake, Waker},
    thread::{self, Thread},
};

/// Unparks the thread blocked in [`block_on`].
struct ThreadWaker(Thread);

impl Wake for ThreadWaker {
    fn wake(self: Arc<Self>) {
        self.0.unpark();
    }

    fn wake_by_ref(self: &Arc<Self>) {
        self.0.unpark();
    }
}

/// Drives `future` to completion on the current thread.
///
/// The thread parks while the future is pending and is re-polled once its
/// waker fires.
///
/// ```
/// assert_eq!(puzzlegen_core::block_on(async { 6 * 7 }), 42);
/// ```
pub fn block_on<F: Future>(future: F) -> F::Output {
    let mut future = pin!(future);
    let waker = Waker::from(Arc::new(ThreadWaker(thread::current())));
    let mut cx = Context::from_waker(&waker);
    loop {
        if let Poll::Ready(output) = future.as_mut().poll(&mut cx) {
            return output;
        }
        thread::park();
    }
}

#[cfg(test)]
mod tests {
    use std::{
        future::poll_fn,
        sync::{
            Mutex,
            atomic::{AtomicBool, Ordering},
        },
        time::Duration,
    };

    use super::*;

    #[test]
    fn test_block_on_repolls_after_wake() {
        let mut remaining = 3;
        let output = block_on(poll_fn(|cx| {
            if remaining == 0 {
                Poll::Ready("done")
            } else {
                remaining -= 1;
                cx.waker().wake_by_ref();
                Poll::Pending
            }
        }));
        assert_eq!(output, "done");
        assert_eq!(remaining, 0);
    }

    #[test]
    fn test_block_on_sleeps_until_woken_from_another_thread() {
        let ready = Arc::new(AtomicBool::new(false));
        let waker_slot: Arc<Mutex<Option<Waker>>> = Arc::new(Mutex::new(None));

        let handle = {
            let ready = Arc::clone(&ready);
            let waker_slot = Arc::clone(&waker_slot);
            thread::spawn(move || {
                thread::sleep(Duration::from_millis(100));
                ready.store(true, Ordering::SeqCst);
                if let Some(waker) = waker_slot.lock().unwrap().take() {
                    waker.wake();
                }
            })
        };

        let mut polls = 0;
        block_on(poll_fn(|cx| {
            polls += 1;
            *waker_slot.lock().unwrap() = Some(cx.waker().clone());
            if ready.load(Ordering::SeqCst) {
                Poll::Ready(())
            } else {
                Poll::Pending
            }
        }));
        handle.join().unwrap();

        // parking allows the odd spurious wakeup, never a spin
        assert!(polls < 10, "polled {polls} times");
    }
}
