//! Background evaluation over lock-free ring buffers.
//!
//! The interface pushes requests into one SPSC queue and pops responses from
//! another. A single worker thread consumes requests strictly in order, so a
//! computation's results are always stored before the next one starts.

use std::{
    io,
    sync::{
        atomic::{AtomicBool, Ordering},
        Arc,
    },
    thread::{self, JoinHandle},
    time::Duration,
};

use log::{debug, warn};
use rtrb::{Consumer, Producer, PushError, RingBuffer};

use super::{message::RequestReceiver, process, PlotRequest, PlotResponse};

/// How long an idle worker sleeps before polling again.
const IDLE_POLL: Duration = Duration::from_millis(1);

/// Handle to a running engine thread. Dropping it stops the thread.
pub struct EngineWorker {
    requests: Producer<PlotRequest>,
    responses: Consumer<PlotResponse>,
    running: Arc<AtomicBool>,
    handle: Option<JoinHandle<()>>,
    in_flight: usize,
}

impl EngineWorker {
    /// Start a worker with room for `capacity` queued requests and responses.
    pub fn spawn(capacity: usize) -> io::Result<Self> {
        let capacity = capacity.max(1);
        let (requests, request_rx) = RingBuffer::<PlotRequest>::new(capacity);
        let (response_tx, responses) = RingBuffer::<PlotResponse>::new(capacity);
        let running = Arc::new(AtomicBool::new(true));

        let flag = running.clone();
        let handle = thread::Builder::new()
            .name("sigscope-engine".into())
            .spawn(move || run(request_rx, response_tx, flag))?;

        debug!("engine worker started (capacity {capacity})");

        Ok(Self {
            requests,
            responses,
            running,
            handle: Some(handle),
            in_flight: 0,
        })
    }

    /// Queue a request. Hands it back if the queue is full.
    pub fn submit(&mut self, request: PlotRequest) -> Result<(), PlotRequest> {
        match self.requests.push(request) {
            Ok(()) => {
                self.in_flight += 1;
                Ok(())
            }
            Err(PushError::Full(request)) => Err(request),
        }
    }

    /// Take the next finished response without blocking.
    pub fn try_recv(&mut self) -> Option<PlotResponse> {
        let response = self.responses.pop().ok()?;
        self.in_flight = self.in_flight.saturating_sub(1);
        Some(response)
    }

    /// Requests submitted whose responses have not been taken yet.
    pub fn in_flight(&self) -> usize {
        self.in_flight
    }
}

impl Drop for EngineWorker {
    fn drop(&mut self) {
        self.running.store(false, Ordering::Release);
        if let Some(handle) = self.handle.take() {
            if handle.join().is_err() {
                warn!("engine worker panicked");
            }
        }
    }
}

fn run(mut rx: Consumer<PlotRequest>, mut tx: Producer<PlotResponse>, running: Arc<AtomicBool>) {
    while running.load(Ordering::Acquire) {
        let Some(request) = RequestReceiver::pop(&mut rx) else {
            thread::sleep(IDLE_POLL);
            continue;
        };

        let mut pending = process(request);
        // Wait for room rather than drop a result the interface is owed.
        loop {
            match tx.push(pending) {
                Ok(()) => break,
                Err(PushError::Full(returned)) => {
                    if tx.is_abandoned() || !running.load(Ordering::Acquire) {
                        return;
                    }
                    pending = returned;
                    thread::sleep(IDLE_POLL);
                }
            }
        }
    }
    debug!("engine worker stopped");
}

#[cfg(test)]
mod tests {
    use std::time::Instant;

    use super::*;
    use crate::{
        fourier::{FourierForm, FundamentalKind},
        sampling::SampleGrid,
        synth::SignalSpec,
    };

    const WAIT: Duration = Duration::from_secs(5);

    fn recv_within(worker: &mut EngineWorker, timeout: Duration) -> Option<PlotResponse> {
        let deadline = Instant::now() + timeout;
        loop {
            if let Some(response) = worker.try_recv() {
                return Some(response);
            }
            if Instant::now() >= deadline {
                return None;
            }
            thread::sleep(IDLE_POLL);
        }
    }

    #[test]
    fn responses_arrive_in_submission_order() {
        let mut worker = EngineWorker::spawn(8).unwrap();

        worker
            .submit(PlotRequest::Signals {
                specs: vec![SignalSpec::cosine(1.0, 1.0)],
                grid: SampleGrid::SIGNALS,
            })
            .unwrap();
        worker
            .submit(PlotRequest::Fourier {
                form: FourierForm::new("0", "1", "", FundamentalKind::W0, "1"),
                grid: SampleGrid::FOURIER,
            })
            .unwrap();
        worker
            .submit(PlotRequest::Fourier {
                form: FourierForm::new("2", "0", "0", FundamentalKind::W0, "1"),
                grid: SampleGrid::FOURIER,
            })
            .unwrap();
        assert_eq!(worker.in_flight(), 3);

        assert!(matches!(recv_within(&mut worker, WAIT), Some(PlotResponse::Signals { .. })));
        assert!(matches!(recv_within(&mut worker, WAIT), Some(PlotResponse::Failed { .. })));
        assert!(matches!(recv_within(&mut worker, WAIT), Some(PlotResponse::Fourier { .. })));
        assert_eq!(worker.in_flight(), 0);
    }

    #[test]
    fn full_queue_hands_request_back() {
        let mut worker = EngineWorker::spawn(1).unwrap();
        // Response queue holds one result; the worker blocks on the second,
        // so the request queue eventually refuses a third.
        let request = || PlotRequest::Signals {
            specs: vec![],
            grid: SampleGrid::new(0.0, 1.0, 2),
        };

        let mut refused = false;
        for _ in 0..1000 {
            if worker.submit(request()).is_err() {
                refused = true;
                break;
            }
        }
        assert!(refused);
    }

    #[test]
    fn drop_stops_idle_worker() {
        let worker = EngineWorker::spawn(4).unwrap();
        drop(worker);
    }
}
