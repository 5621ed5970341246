//! Bounded hand-off between logging callers and the network. Callers enqueue without waiting;
//! a fixed set of worker threads drains the queue. A full queue sheds the job instead of
//! blocking the caller or spawning more threads.

use super::payload::{Multipart, Notification};
use super::transport::{JSON_CONTENT_TYPE, Transport};
use crate::console::Console;
use crate::severity::Severity;
use std::sync::mpsc::{self, Receiver, SyncSender, TrySendError};
use std::sync::{Arc, Mutex, PoisonError};
use std::thread::{self, JoinHandle};

pub const DEFAULT_WORKERS: usize = 2;
pub const DEFAULT_QUEUE_CAPACITY: usize = 256;

/// One unit of notification work. URL and content are fixed at submission so a later
/// `configure` cannot change where an already-logged message goes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Job {
    Text {
        url: String,
        notification: Notification,
    },
    /// Upload first, then the text message — in that order, on one worker.
    Attachment {
        url: String,
        attachment: Vec<u8>,
        notification: Notification,
    },
}

/// Worker pool fed by a `sync_channel`.
pub struct Dispatcher {
    /// `None` once closed.
    sender: Mutex<Option<SyncSender<Job>>>,
    workers: Mutex<Vec<JoinHandle<()>>>,
}

impl std::fmt::Debug for Dispatcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Dispatcher")
            .field("closed", &self.is_closed())
            .finish_non_exhaustive()
    }
}

impl Dispatcher {
    /// Starts `workers` threads sharing a queue of `capacity` jobs. Both are raised to at
    /// least one. Failures are reported on `console`, which workers also use for their own
    /// delivery errors.
    #[must_use]
    pub fn spawn(
        workers: usize,
        capacity: usize,
        transport: Arc<dyn Transport>,
        console: Arc<Console>,
    ) -> Self {
        let (sender, receiver) = mpsc::sync_channel(capacity.max(1));
        let receiver = Arc::new(Mutex::new(receiver));

        let mut handles = Vec::with_capacity(workers.max(1));
        for id in 0..workers.max(1) {
            let receiver = Arc::clone(&receiver);
            let transport = Arc::clone(&transport);
            let worker_console = Arc::clone(&console);
            let spawned = thread::Builder::new()
                .name(format!("hooklog-webhook-{id}"))
                .spawn(move || worker_loop(&receiver, &*transport, &worker_console));

            match spawned {
                Ok(handle) => handles.push(handle),
                Err(e) => console.write(
                    Severity::Error,
                    &format!("webhook: failed to start worker {id}: {e}"),
                ),
            }
        }

        Self {
            sender: Mutex::new(Some(sender)),
            workers: Mutex::new(handles),
        }
    }

    /// Enqueues without blocking.
    ///
    /// # Errors
    /// `QueueFull` when every slot is taken, `Closed` after `close`.
    pub fn submit(&self, job: Job) -> Result<(), crate::Error> {
        let sender = self.sender.lock().unwrap_or_else(PoisonError::into_inner);
        let Some(sender) = sender.as_ref() else {
            return Err(crate::Error::Closed);
        };

        sender.try_send(job).map_err(|e| match e {
            TrySendError::Full(_) => crate::Error::QueueFull,
            TrySendError::Disconnected(_) => crate::Error::Closed,
        })
    }

    /// Stops accepting jobs, lets workers finish everything already queued, then joins them.
    /// Safe to call more than once; a concurrent call waits for the first to finish joining.
    pub fn close(&self) {
        // Dropping the only sender ends every worker's `recv` once the queue is empty.
        drop(
            self.sender
                .lock()
                .unwrap_or_else(PoisonError::into_inner)
                .take(),
        );

        // Held across the joins so a second caller blocks here until the workers are gone.
        let mut workers = self.workers.lock().unwrap_or_else(PoisonError::into_inner);
        for handle in workers.drain(..) {
            let _ = handle.join();
        }
    }

    #[must_use]
    pub fn is_closed(&self) -> bool {
        self.sender
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .is_none()
    }
}

impl Drop for Dispatcher {
    fn drop(&mut self) {
        self.close();
    }
}

fn worker_loop(receiver: &Mutex<Receiver<Job>>, transport: &dyn Transport, console: &Console) {
    loop {
        // The guard is released at the end of this statement, before the job runs.
        let job = receiver
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .recv();
        match job {
            Ok(job) => run(job, transport, console),
            Err(_) => break,
        }
    }
}

/// Executes one job. Every failure ends up as an Error line; nothing is retried.
fn run(job: Job, transport: &dyn Transport, console: &Console) {
    match job {
        Job::Text { url, notification } => send_text(&url, &notification, transport, console),
        Job::Attachment {
            url,
            attachment,
            notification,
        } => {
            let upload = Multipart::attachment(&attachment);
            if let Err(e) = transport.post(&url, &upload.content_type(), upload.body()) {
                report(console, "attachment upload failed", &e);
            }
            send_text(&url, &notification, transport, console);
        }
    }
}

fn send_text(url: &str, notification: &Notification, transport: &dyn Transport, console: &Console) {
    let body = match notification.to_json() {
        Ok(body) => body,
        Err(e) => {
            report(console, "could not encode notification", &e);
            return;
        }
    };

    if let Err(e) = transport.post(url, JSON_CONTENT_TYPE, &body) {
        report(console, "notification failed", &e);
    }
}

fn report(console: &Console, what: &str, err: &crate::Error) {
    console.write(Severity::Error, &format!("webhook: {what}: {err}"));
}
