//! Shared test doubles: an in-memory console and a transport that records instead of sending.

#![allow(dead_code)]

use hooklog::Transport;
use std::io::{self, Write};
use std::sync::mpsc::{Receiver, Sender};
use std::sync::{Arc, Mutex};

/// Cloneable in-memory writer — one clone goes into the logger, the test keeps the other.
#[derive(Clone, Default)]
pub struct SharedBuf(Arc<Mutex<Vec<u8>>>);

impl SharedBuf {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contents(&self) -> String {
        String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
    }

    pub fn lines(&self) -> Vec<String> {
        self.contents().lines().map(ToString::to_string).collect()
    }
}

impl Write for SharedBuf {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Request {
    pub url: String,
    pub content_type: String,
    pub body: Vec<u8>,
}

impl Request {
    pub fn body_str(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }

    pub fn is_multipart(&self) -> bool {
        self.content_type.starts_with("multipart/form-data")
    }
}

/// Records every request. Optionally fails uploads, or every request, after recording it.
#[derive(Default)]
pub struct RecordingTransport {
    requests: Mutex<Vec<Request>>,
    fail_uploads: bool,
    fail_all: bool,
}

impl RecordingTransport {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn failing_uploads() -> Arc<Self> {
        Arc::new(Self {
            fail_uploads: true,
            ..Self::default()
        })
    }

    pub fn failing() -> Arc<Self> {
        Arc::new(Self {
            fail_all: true,
            ..Self::default()
        })
    }

    pub fn requests(&self) -> Vec<Request> {
        self.requests.lock().unwrap().clone()
    }
}

impl Transport for RecordingTransport {
    fn post(&self, url: &str, content_type: &str, body: &[u8]) -> Result<(), hooklog::Error> {
        self.requests.lock().unwrap().push(Request {
            url: url.to_string(),
            content_type: content_type.to_string(),
            body: body.to_vec(),
        });
        if self.fail_all || (self.fail_uploads && content_type.starts_with("multipart/")) {
            return Err(hooklog::Error::Http("status code 500".to_string()));
        }
        Ok(())
    }
}

/// Blocks inside `post` until released, announcing each call on `started`.
pub struct GatedTransport {
    started: Mutex<Sender<()>>,
    release: Mutex<Receiver<()>>,
    pub inner: Arc<RecordingTransport>,
}

impl GatedTransport {
    pub fn new(started: Sender<()>, release: Receiver<()>) -> Arc<Self> {
        Arc::new(Self {
            started: Mutex::new(started),
            release: Mutex::new(release),
            inner: RecordingTransport::new(),
        })
    }
}

impl Transport for GatedTransport {
    fn post(&self, url: &str, content_type: &str, body: &[u8]) -> Result<(), hooklog::Error> {
        let _ = self.started.lock().unwrap().send(());
        let _ = self.release.lock().unwrap().recv();
        self.inner.post(url, content_type, body)
    }
}
