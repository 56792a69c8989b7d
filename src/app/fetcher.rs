//! Background page fetcher using std::thread and mpsc channels
//!
//! Stands in for the network: every ticket sent to the worker comes back
//! after a fixed delay. The worker never touches feed state; the event loop
//! applies the page with `FeedController::complete_fetch` when the ticket
//! returns.

use std::sync::mpsc::{self, Receiver, Sender, TryRecvError};
use std::thread::{self, JoinHandle};
use std::time::Duration;

use tracing::{debug, warn};

use crate::core::FetchTicket;

/// Default simulated network latency per page
pub const DEFAULT_FETCH_DELAY: Duration = Duration::from_millis(800);

/// Background page fetcher
///
/// Spawns a worker thread that delays each request.
/// Uses mpsc channels for communication between the main thread and worker.
pub struct PageFetcher {
    /// Sender for fetch requests
    request_tx: Sender<FetchTicket>,
    /// Receiver for completed fetches
    result_rx: Receiver<FetchTicket>,
    /// Handle to the worker thread
    _worker: JoinHandle<()>,
    /// Ticket currently with the worker
    in_flight: Option<FetchTicket>,
}

impl PageFetcher {
    /// Create a new fetcher with a background worker thread
    pub fn new(delay: Duration) -> Self {
        let (request_tx, request_rx) = mpsc::channel::<FetchTicket>();
        let (result_tx, result_rx) = mpsc::channel::<FetchTicket>();

        let worker = thread::spawn(move || {
            Self::worker_loop(request_rx, result_tx, delay);
        });

        Self {
            request_tx,
            result_rx,
            _worker: worker,
            in_flight: None,
        }
    }

    /// Worker thread main loop
    fn worker_loop(request_rx: Receiver<FetchTicket>, result_tx: Sender<FetchTicket>, delay: Duration) {
        while let Ok(ticket) = request_rx.recv() {
            if !delay.is_zero() {
                thread::sleep(delay);
            }

            // If the main thread has dropped, stop the worker
            if result_tx.send(ticket).is_err() {
                break;
            }
        }
    }

    /// Hand a ticket to the worker
    pub fn request(&mut self, ticket: FetchTicket) {
        debug!(tab = %ticket.tab, page = ticket.cursor, "page requested");
        self.in_flight = Some(ticket);

        // A dead worker is noticed by try_recv, which then returns the ticket
        let _ = self.request_tx.send(ticket);
    }

    /// Try to receive a completed fetch
    ///
    /// Returns the ticket if one is ready, or None if no result is available.
    /// If the worker is gone the in-flight ticket is returned right away so
    /// the loading flag can still be released.
    pub fn try_recv(&mut self) -> Option<FetchTicket> {
        match self.result_rx.try_recv() {
            Ok(ticket) => {
                if self.in_flight == Some(ticket) {
                    self.in_flight = None;
                }
                Some(ticket)
            }
            Err(TryRecvError::Empty) => None,
            Err(TryRecvError::Disconnected) => {
                let ticket = self.in_flight.take();
                if ticket.is_some() {
                    warn!("page fetcher worker stopped; completing in-flight fetch");
                }
                ticket
            }
        }
    }
}
