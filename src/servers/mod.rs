//! Server roles.
//!
//! Every role is a state machine: a closed enum whose `process` maps the
//! current state and one inbound message to the next state plus the messages
//! to send back. [`Server`] runs one machine per accepted connection.
//!
//! - patch: PC patch server
//! - auth: BB authentication and login handoff servers
//! - data: BB character data server
//! - proxy: relay between real clients and servers, rewriting redirects

pub mod accounts;
pub mod auth;
pub mod data;
pub mod files;
pub mod patch;
pub mod proxy;

use crate::messages::Message;
use crate::network::{Connection, ConnectionError};
use anyhow::{Context, Result};
use std::sync::Arc;
use std::time::Duration;
use tokio::net::{TcpListener, TcpStream};
use tracing::Instrument;

pub use accounts::AuthPolicy;
pub use auth::{HandoffContext, HandoffState};
pub use data::{DataContext, DataState};
pub use files::FileStore;
pub use patch::{PatchContext, PatchState};
pub use proxy::{ProxyServer, RedirectMap};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ProtocolError {
    #[error("unexpected {message} in state {state}")]
    UnexpectedMessage {
        state: &'static str,
        message: &'static str,
    },
}

/// Result of a single transition.
#[derive(Debug, Clone, PartialEq)]
pub struct Transition<S: ServerState> {
    pub state: S,
    pub outgoing: Vec<S::Message>,
}

impl<S: ServerState> Transition<S> {
    pub fn to(state: S) -> Self {
        Self {
            state,
            outgoing: Vec::new(),
        }
    }

    pub fn send(mut self, message: S::Message) -> Self {
        self.outgoing.push(message);
        self
    }
}

pub trait ServerState: Sized + Send + std::fmt::Debug + 'static {
    type Message: Message;
    type Context: Send + Sync + 'static;

    fn initial(ctx: &Self::Context) -> Self;

    /// Handles one inbound message. Must not touch anything but `self`,
    /// `ctx` and `message`.
    fn process(
        &self,
        ctx: &Self::Context,
        message: &Self::Message,
    ) -> Result<Transition<Self>, ProtocolError>;

    fn is_final(&self) -> bool;

    fn name(&self) -> &'static str;

    fn unexpected(&self, message: &Self::Message) -> ProtocolError {
        ProtocolError::UnexpectedMessage {
            state: self.name(),
            message: message.name(),
        }
    }
}

/// A listener that runs one `S` state machine per connection.
pub struct Server<S: ServerState> {
    name: String,
    ctx: Arc<S::Context>,
}

impl<S: ServerState> Server<S> {
    pub fn new(name: impl Into<String>, ctx: S::Context) -> Self {
        Self {
            name: name.into(),
            ctx: Arc::new(ctx),
        }
    }

    pub async fn run(self: Arc<Self>, bind_addr: &str) -> Result<()> {
        let listener = TcpListener::bind(bind_addr)
            .await
            .with_context(|| format!("[{}] cannot bind {}", self.name, bind_addr))?;
        tracing::info!("[{}] [ready] addr={}", self.name, bind_addr);
        self.serve(listener).await
    }

    /// Accepts connections on an already bound listener until the task is
    /// cancelled.
    pub async fn serve(self: Arc<Self>, listener: TcpListener) -> Result<()> {
        loop {
            let (stream, peer) = match listener.accept().await {
                Ok(accepted) => accepted,
                Err(e) => {
                    tracing::error!("[{}] [accept_failed] err={}", self.name, e);
                    tokio::time::sleep(Duration::from_millis(100)).await;
                    continue;
                }
            };
            let server = Arc::clone(&self);
            let span = tracing::info_span!("conn", server = %self.name, peer = %peer);
            tokio::spawn(
                async move {
                    tracing::debug!("[{}] [connected]", server.name);
                    match server.handle_connection(stream).await {
                        Ok(()) => tracing::debug!("[{}] [closed]", server.name),
                        Err(e) => log_connection_error(&server.name, &e),
                    }
                }
                .instrument(span),
            );
        }
    }

    async fn handle_connection(&self, stream: TcpStream) -> Result<(), ConnectionError> {
        stream.set_nodelay(true)?;
        let mut conn =
            Connection::<S::Message, _>::accept(stream, <S::Message as Message>::BANNER).await?;
        let mut state = S::initial(&self.ctx);

        while let Some(frame) = conn.read_frame().await? {
            let message = <S::Message as Message>::decode(&frame)?;
            if message.name() == "Unknown" {
                tracing::debug!(
                    "[{}] [recv_unknown] state={} frame={}",
                    self.name,
                    state.name(),
                    hex::encode(&frame)
                );
            } else {
                tracing::trace!("[{}] [recv] state={} msg={:?}", self.name, state.name(), message);
            }

            let Transition { state: next, outgoing } = state.process(&self.ctx, &message)?;
            for out in &outgoing {
                tracing::trace!("[{}] [send] msg={:?}", self.name, out);
                conn.send(out).await?;
            }
            if next.name() != state.name() {
                tracing::debug!("[{}] [state] {} -> {}", self.name, state.name(), next.name());
            }
            state = next;
        }
        Ok(())
    }
}

pub(crate) fn log_connection_error(server: &str, e: &ConnectionError) {
    match e {
        ConnectionError::Io(_) if e.is_disconnect() => {
            tracing::debug!("[{}] [disconnected] err={}", server, e)
        }
        ConnectionError::Io(_) => tracing::error!("[{}] [io_error] err={}", server, e),
        ConnectionError::Codec(_) | ConnectionError::Key(_) => {
            tracing::warn!("[{}] [decode_error] err={}", server, e)
        }
        ConnectionError::Protocol(_) => {
            tracing::warn!("[{}] [protocol_violation] err={}", server, e)
        }
    }
}
