//! Runs searches on a dedicated thread so the caller stays responsive.
//!
//! A [`SearchCoordinator`] owns one worker thread. Requests go in through an
//! unbounded channel and are searched one at a time in the order they were
//! submitted; responses come back through a second channel in that same
//! order, each tagged with the [`Ticket`] handed out by
//! [`SearchCoordinator::submit`].
//!
//! ```no_run
//! use search_worker::{SearchCoordinator, SearchRequest};
//! use silverpoint_core::{Board, Objective};
//!
//! # async fn run() -> Result<(), search_worker::WorkerError> {
//! let mut coordinator = SearchCoordinator::spawn()?;
//! coordinator.submit(SearchRequest::new(Board::initial(), 3, Objective::Best))?;
//! let response = coordinator
//!     .recv_with_progress(std::time::Duration::from_millis(250), || print!("."))
//!     .await?;
//! println!("{:?}", response.result);
//! # Ok(())
//! # }
//! ```

use std::collections::VecDeque;
use std::fmt;
use std::thread::{self, JoinHandle};
use std::time::Duration;

use silverpoint_core::{Board, Engine, MinimaxEngine, Objective, SearchError, SearchOutcome};
use thiserror::Error;
use tokio::sync::mpsc::{self, error::TryRecvError, UnboundedReceiver, UnboundedSender};
use tokio::time::{interval_at, Instant, MissedTickBehavior};
use tracing::{debug, trace, warn};

/// A position to search and how to pick the move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchRequest {
    pub board: Board,
    pub depth: u8,
    pub objective: Objective,
}

impl SearchRequest {
    pub fn new(board: Board, depth: u8, objective: Objective) -> Self {
        Self {
            board,
            depth,
            objective,
        }
    }
}

/// Receipt for a submitted request. Tickets from one coordinator increase
/// strictly in submission order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Ticket(u64);

impl Ticket {
    pub fn id(self) -> u64 {
        self.0
    }
}

impl fmt::Display for Ticket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A finished search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchResponse {
    pub ticket: Ticket,
    pub request: SearchRequest,
    pub result: Result<SearchOutcome, SearchError>,
}

/// Worker thread settings.
#[derive(Debug, Clone)]
pub struct WorkerConfig {
    /// Name given to the OS thread, visible in debuggers and panics
    pub thread_name: String,
}

impl Default for WorkerConfig {
    fn default() -> Self {
        Self {
            thread_name: "search-worker".to_string(),
        }
    }
}

#[derive(Debug, Error)]
pub enum WorkerError {
    #[error("failed to start the search worker thread")]
    Spawn(#[source] std::io::Error),
    #[error("the search worker has stopped")]
    Disconnected,
    #[error("no search request is waiting for a response")]
    NothingPending,
}

/// Handle to a single background search worker.
///
/// Dropping the coordinator closes the request channel and waits for the
/// worker to finish the requests it already accepted. That wait is a plain
/// thread join, so dropping it inside an async task while a deep search is
/// queued blocks the runtime thread until the search ends.
pub struct SearchCoordinator {
    requests: Option<UnboundedSender<(Ticket, SearchRequest)>>,
    responses: UnboundedReceiver<SearchResponse>,
    outstanding: VecDeque<Ticket>,
    next_ticket: u64,
    worker: Option<JoinHandle<()>>,
}

impl SearchCoordinator {
    /// Starts a worker running the built-in minimax engine.
    pub fn spawn() -> Result<Self, WorkerError> {
        Self::with_config(WorkerConfig::default())
    }

    pub fn with_config(config: WorkerConfig) -> Result<Self, WorkerError> {
        Self::with_engine(MinimaxEngine, config)
    }

    /// Starts a worker that answers requests with `engine`.
    pub fn with_engine<E>(engine: E, config: WorkerConfig) -> Result<Self, WorkerError>
    where
        E: Engine + 'static,
    {
        let (request_tx, request_rx) = mpsc::unbounded_channel();
        let (response_tx, response_rx) = mpsc::unbounded_channel();

        let worker = thread::Builder::new()
            .name(config.thread_name.clone())
            .spawn(move || worker_loop(engine, request_rx, response_tx))
            .map_err(WorkerError::Spawn)?;
        trace!(thread = %config.thread_name, "search worker started");

        Ok(Self {
            requests: Some(request_tx),
            responses: response_rx,
            outstanding: VecDeque::new(),
            next_ticket: 0,
            worker: Some(worker),
        })
    }

    /// Queues `request` behind any searches already submitted.
    pub fn submit(&mut self, request: SearchRequest) -> Result<Ticket, WorkerError> {
        let sender = self.requests.as_ref().ok_or(WorkerError::Disconnected)?;
        let ticket = Ticket(self.next_ticket);
        sender
            .send((ticket, request))
            .map_err(|_| WorkerError::Disconnected)?;

        self.next_ticket += 1;
        self.outstanding.push_back(ticket);
        debug!(%ticket, depth = request.depth, objective = ?request.objective, "search submitted");
        Ok(ticket)
    }

    /// Number of submitted requests whose responses have not been taken yet.
    pub fn pending(&self) -> usize {
        self.outstanding.len()
    }

    /// Returns the next response if it is ready, without waiting.
    pub fn try_recv(&mut self) -> Result<Option<SearchResponse>, WorkerError> {
        self.ensure_pending()?;
        match self.responses.try_recv() {
            Ok(response) => Ok(Some(self.settle(response))),
            Err(TryRecvError::Empty) => Ok(None),
            Err(TryRecvError::Disconnected) => Err(WorkerError::Disconnected),
        }
    }

    /// Waits for the next response from synchronous code.
    ///
    /// # Panics
    /// When called from inside an async runtime; use [`Self::recv`] there.
    pub fn blocking_recv(&mut self) -> Result<SearchResponse, WorkerError> {
        self.ensure_pending()?;
        let response = self
            .responses
            .blocking_recv()
            .ok_or(WorkerError::Disconnected)?;
        Ok(self.settle(response))
    }

    /// Waits for the next response.
    pub async fn recv(&mut self) -> Result<SearchResponse, WorkerError> {
        self.ensure_pending()?;
        let response = self.responses.recv().await.ok_or(WorkerError::Disconnected)?;
        Ok(self.settle(response))
    }

    /// Waits for the next response, calling `on_tick` every `every` until it
    /// arrives. The first tick fires one full period after the call.
    pub async fn recv_with_progress<F>(
        &mut self,
        every: Duration,
        mut on_tick: F,
    ) -> Result<SearchResponse, WorkerError>
    where
        F: FnMut(),
    {
        self.ensure_pending()?;

        let every = every.max(Duration::from_millis(1));
        let mut ticker = interval_at(Instant::now() + every, every);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

        loop {
            tokio::select! {
                biased;
                response = self.responses.recv() => {
                    let response = response.ok_or(WorkerError::Disconnected)?;
                    return Ok(self.settle(response));
                }
                _ = ticker.tick() => on_tick(),
            }
        }
    }

    /// Closes the request channel and waits for the worker to exit.
    ///
    /// Searches already submitted still run to completion first.
    pub fn shutdown(mut self) -> Result<(), WorkerError> {
        self.stop()
    }

    fn stop(&mut self) -> Result<(), WorkerError> {
        self.requests.take();
        match self.worker.take() {
            Some(handle) => handle.join().map_err(|_| WorkerError::Disconnected),
            None => Ok(()),
        }
    }

    fn ensure_pending(&self) -> Result<(), WorkerError> {
        if self.outstanding.is_empty() {
            return Err(WorkerError::NothingPending);
        }
        Ok(())
    }

    fn settle(&mut self, response: SearchResponse) -> SearchResponse {
        let expected = self.outstanding.pop_front();
        debug_assert_eq!(expected, Some(response.ticket), "responses out of order");
        debug!(ticket = %response.ticket, ok = response.result.is_ok(), "search received");
        response
    }
}

impl Drop for SearchCoordinator {
    fn drop(&mut self) {
        if self.stop().is_err() {
            warn!("search worker panicked");
        }
    }
}

fn worker_loop<E: Engine>(
    mut engine: E,
    mut requests: UnboundedReceiver<(Ticket, SearchRequest)>,
    responses: UnboundedSender<SearchResponse>,
) {
    while let Some((ticket, request)) = requests.blocking_recv() {
        debug!(%ticket, engine = engine.name(), "search started");
        let result = engine.choose(&request.board, request.depth, request.objective);

        let response = SearchResponse {
            ticket,
            request,
            result,
        };
        if responses.send(response).is_err() {
            warn!(%ticket, "search finished but nobody is listening");
            break;
        }
    }
    trace!("search worker exiting");
}
