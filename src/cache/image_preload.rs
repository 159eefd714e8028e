//! Best-effort artwork preloading
//!
//! Warms the HTTP layer for artwork images so detail and card views render
//! without a visible load. A URL is requested at most once per process;
//! callers asking again while a load is in flight (or after it settled)
//! share the same signal. Failures settle the signal, they never surface.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use futures::future::{BoxFuture, Shared};
use futures::FutureExt;

use crate::api::pokeapi;
use crate::models::Pokemon;

/// Terminal state of one preload
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PreloadState {
    Loaded,
    /// The load failed; the signal still settles so callers never error
    Failed,
}

/// Shared completion signal for one artwork URL
pub type PreloadSignal = Shared<BoxFuture<'static, PreloadState>>;

/// Idempotent, fire-and-forget image preloader
///
/// Loads start as soon as [`ImagePreloader::preload`] is called; awaiting
/// the returned signal is optional. Must be used within a tokio runtime.
/// Cloning is cheap; clones share the same in-flight map.
#[derive(Clone)]
pub struct ImagePreloader {
    http: reqwest::Client,
    in_flight: Arc<Mutex<HashMap<String, PreloadSignal>>>,
}

impl ImagePreloader {
    pub fn new(http: reqwest::Client) -> Self {
        Self {
            http,
            in_flight: Arc::new(Mutex::new(HashMap::new())),
        }
    }

    /// Begin loading a URL, or return the signal of a load already started
    pub fn preload(&self, url: &str) -> PreloadSignal {
        let mut in_flight = self.in_flight.lock().unwrap();
        if let Some(signal) = in_flight.get(url) {
            return signal.clone();
        }

        let http = self.http.clone();
        let target = url.to_string();
        let task = tokio::spawn(async move {
            match pokeapi::fetch_image(&http, &target).await {
                Ok(bytes) => {
                    log::debug!("Preloaded {} ({} bytes)", target, bytes.len());
                    PreloadState::Loaded
                }
                Err(e) => {
                    log::debug!("Image preload failed for {}: {}", target, e);
                    PreloadState::Failed
                }
            }
        });
        let signal: PreloadSignal = async move { task.await.unwrap_or(PreloadState::Failed) }
            .boxed()
            .shared();

        in_flight.insert(url.to_string(), signal.clone());
        signal
    }

    /// Preload artwork for a batch of entities
    ///
    /// Entities without an artwork URL are skipped; each load is
    /// independent and individual failures do not affect the batch.
    pub fn preload_many<'a>(&self, entities: impl IntoIterator<Item = &'a Pokemon>) {
        for entity in entities {
            if let Some(url) = entity.artwork_url() {
                self.preload(url);
            }
        }
    }

    /// Number of distinct URLs seen so far
    pub fn len(&self) -> usize {
        self.in_flight.lock().unwrap().len()
    }

    /// Check if empty
    pub fn is_empty(&self) -> bool {
        self.in_flight.lock().unwrap().is_empty()
    }
}
