//! Query sessions: answer accumulation and supersession.
//!
//! A [`QuerySession`] runs one logical query-to-answer interaction at a
//! time on top of a [`ChatService`], guaranteeing that only the most
//! recently submitted query's output is ever visible — even while an older
//! stream is still draining. The guarantee comes from a generation counter,
//! not from cancelling the older transport: each `submit` bumps the
//! counter, and a fragment is appended only if its stream's captured
//! generation still matches. Stale fragments are silently dropped. The
//! superseded request may run to completion in the background; its bytes
//! are discarded (accepted resource waste, not a correctness issue).

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use crate::services::ChatService;

/// Fixed user-visible text shown when a query fails.
///
/// On failure the accumulated answer — including any partially streamed
/// text — is overwritten with this marker: a clear "something broke"
/// signal is preferred over a silently truncated answer.
pub const CONNECTION_ERROR_MARKER: &str = "connection error";

/// Mutable state of a query session.
#[derive(Debug, Clone, Default)]
struct SessionState {
    /// The most recently submitted query, trimmed.
    query: String,
    /// The accumulated answer text for the current generation.
    answer: String,
    /// Whether a stream for the current generation is in flight.
    busy: bool,
    /// Monotonically increasing token identifying the current submission.
    generation: u64,
}

/// A query session over the chat service.
///
/// State is guarded by a mutex for the interior mutability Rust requires
/// of a shared session; locks are only held for individual state mutations
/// and never across a suspension point, so chunk handling stays strictly
/// sequential per stream.
///
/// # Example
///
/// ```rust,no_run
/// # async fn example(client: std::sync::Arc<dyn docchat_client::DocChatClient>) {
/// let session = client.session();
/// session.submit("what is in doc A?").await;
/// if !session.is_busy() {
///     println!("{}", session.answer());
/// }
/// # }
/// ```
pub struct QuerySession {
    chat: Arc<dyn ChatService>,
    state: Mutex<SessionState>,
}

impl QuerySession {
    /// Create a session over the given chat service.
    pub fn new(chat: Arc<dyn ChatService>) -> Self {
        Self {
            chat,
            state: Mutex::new(SessionState::default()),
        }
    }

    fn lock(&self) -> MutexGuard<'_, SessionState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Submit a query and stream its answer into the session.
    ///
    /// A blank query (empty after trimming) is a silent no-op: no state
    /// change, no network call. Otherwise the accumulated answer is reset
    /// immediately — never only on first chunk, so a stale answer cannot
    /// linger under a slow new stream — and fragments are appended as they
    /// arrive, for as long as this submission is still the current one.
    ///
    /// Errors never propagate out of `submit`: on failure the answer is
    /// replaced with [`CONNECTION_ERROR_MARKER`] and the busy flag is
    /// cleared. If a newer submission has already superseded this one, its
    /// outcome is discarded entirely.
    pub async fn submit(&self, query: &str) {
        let trimmed = query.trim();
        if trimmed.is_empty() {
            return;
        }

        let generation = {
            let mut state = self.lock();
            state.generation += 1;
            state.query = trimmed.to_string();
            state.answer.clear();
            state.busy = true;
            state.generation
        };

        let result = self
            .chat
            .stream_answer(trimmed, &mut |fragment: &str| {
                let mut state = self.lock();
                // Supersession guard: drop fragments from stale streams.
                if state.generation == generation {
                    state.answer.push_str(fragment);
                }
            })
            .await;

        let mut state = self.lock();
        if state.generation != generation {
            // Superseded mid-flight; the newer submission owns the flags.
            return;
        }

        state.busy = false;
        if let Err(err) = result {
            tracing::warn!(generation, error = %err, "query failed");
            state.answer = CONNECTION_ERROR_MARKER.to_string();
        }
    }

    /// The accumulated answer for the current generation.
    pub fn answer(&self) -> String {
        self.lock().answer.clone()
    }

    /// Whether a stream for the current generation is in flight.
    pub fn is_busy(&self) -> bool {
        self.lock().busy
    }

    /// The current generation number. Starts at zero; each accepted
    /// submission increments it.
    pub fn generation(&self) -> u64 {
        self.lock().generation
    }

    /// The most recently submitted query, trimmed.
    pub fn last_query(&self) -> String {
        self.lock().query.clone()
    }
}
