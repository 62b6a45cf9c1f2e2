//! Man-in-the-middle relay between a real client and a real server.
//!
//! Each client connection gets its own downstream connection to the remote.
//! Frames are relayed as decrypted plaintext and re-encrypted for the other
//! leg. Only `Redirect` is touched: its target is rewritten to the proxy
//! listener that fronts it, so the client's next hop goes through the proxy
//! as well.

use super::log_connection_error;
use crate::messages::Message;
use crate::network::{Connection, ConnectionError, FrameReader, FrameWriter};
use anyhow::{Context, Result};
use std::collections::HashMap;
use std::marker::PhantomData;
use std::net::SocketAddrV4;
use std::sync::Arc;
use std::time::Duration;
use tokio::io::{AsyncRead, AsyncWrite};
use tokio::net::{TcpListener, TcpStream};
use tracing::Instrument;

/// Real server endpoint -> proxy endpoint that fronts it.
pub type RedirectMap = HashMap<SocketAddrV4, SocketAddrV4>;

/// Returns the rewritten message if `message` is a redirect to a mapped
/// endpoint.
pub fn rewrite_redirect<M: Message>(message: &M, redirects: &RedirectMap) -> Option<M> {
    let target = message.as_redirect()?;
    redirects.get(&target).map(|&proxied| M::redirect(proxied))
}

pub struct ProxyServer<M: Message> {
    name: String,
    remote: SocketAddrV4,
    redirects: Arc<RedirectMap>,
    _message: PhantomData<fn() -> M>,
}

impl<M: Message> ProxyServer<M> {
    pub fn new(name: impl Into<String>, remote: SocketAddrV4, redirects: Arc<RedirectMap>) -> Self {
        Self {
            name: name.into(),
            remote,
            redirects,
            _message: PhantomData,
        }
    }

    pub async fn run(self: Arc<Self>, bind_addr: &str) -> Result<()> {
        let listener = TcpListener::bind(bind_addr)
            .await
            .with_context(|| format!("[{}] cannot bind {}", self.name, bind_addr))?;
        tracing::info!(
            "[{}] [ready] addr={} remote={}",
            self.name,
            bind_addr,
            self.remote
        );
        self.serve(listener).await
    }

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
            let proxy = Arc::clone(&self);
            let span = tracing::info_span!("proxy", server = %self.name, peer = %peer);
            tokio::spawn(
                async move {
                    match proxy.relay(stream).await {
                        Ok(()) => tracing::debug!("[{}] [closed]", proxy.name),
                        Err(e) => log_connection_error(&proxy.name, &e),
                    }
                }
                .instrument(span),
            );
        }
    }

    async fn relay(&self, client: TcpStream) -> Result<(), ConnectionError> {
        client.set_nodelay(true)?;
        let remote = TcpStream::connect(self.remote).await?;
        remote.set_nodelay(true)?;
        tracing::debug!("[{}] [downstream_connected] remote={}", self.name, self.remote);

        let (server_conn, banner) = Connection::<M, _>::connect(remote).await?;
        let client_conn = Connection::<M, _>::accept(client, &banner).await?;

        let (client_rx, client_tx) = client_conn.into_split();
        let (server_rx, server_tx) = server_conn.into_split();

        // Whichever direction finishes first tears down both legs.
        tokio::select! {
            r = self.pump_upstream(client_rx, server_tx) => r,
            r = self.pump_downstream(server_rx, client_tx) => r,
        }
    }

    /// Client -> server. Forwarded verbatim.
    async fn pump_upstream<R, W>(
        &self,
        mut rx: FrameReader<M, R>,
        mut tx: FrameWriter<M, W>,
    ) -> Result<(), ConnectionError>
    where
        R: AsyncRead + Unpin,
        W: AsyncWrite + Unpin,
    {
        while let Some(frame) = rx.read_frame().await? {
            tracing::trace!("[{}] [client->server] frame={}", self.name, hex::encode(&frame));
            tx.write_frame(frame).await?;
        }
        Ok(())
    }

    /// Server -> client, with redirects rewritten.
    async fn pump_downstream<R, W>(
        &self,
        mut rx: FrameReader<M, R>,
        mut tx: FrameWriter<M, W>,
    ) -> Result<(), ConnectionError>
    where
        R: AsyncRead + Unpin,
        W: AsyncWrite + Unpin,
    {
        while let Some(frame) = rx.read_frame().await? {
            tracing::trace!("[{}] [server->client] frame={}", self.name, hex::encode(&frame));
            let frame = self.filter_downstream(frame);
            tx.write_frame(frame).await?;
        }
        Ok(())
    }

    fn filter_downstream(&self, frame: Vec<u8>) -> Vec<u8> {
        let message = match M::decode(&frame) {
            Ok(message) => message,
            Err(e) => {
                tracing::debug!("[{}] [passthrough_undecodable] err={}", self.name, e);
                return frame;
            }
        };
        let Some(target) = message.as_redirect() else {
            return frame;
        };
        match rewrite_redirect(&message, &self.redirects) {
            Some(rewritten) => {
                tracing::info!(
                    "[{}] [redirect_rewritten] from={} to={:?}",
                    self.name,
                    target,
                    rewritten.as_redirect()
                );
                rewritten.encode()
            }
            None => {
                tracing::warn!("[{}] [redirect_unmapped] target={}", self.name, target);
                frame
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::messages::{BbMessage, PcMessage};
    use std::net::Ipv4Addr;

    fn addr(a: u8, port: u16) -> SocketAddrV4 {
        SocketAddrV4::new(Ipv4Addr::new(10, 0, 0, a), port)
    }

    fn map() -> RedirectMap {
        RedirectMap::from([(addr(1, 1), addr(2, 2))])
    }

    #[test]
    fn test_rewrite_mapped_redirect() {
        let map = map();
        assert_eq!(
            rewrite_redirect(&BbMessage::Redirect(addr(1, 1)), &map),
            Some(BbMessage::Redirect(addr(2, 2)))
        );
        assert_eq!(
            rewrite_redirect(&PcMessage::Redirect(addr(1, 1)), &map),
            Some(PcMessage::Redirect(addr(2, 2)))
        );
    }

    #[test]
    fn test_unmapped_or_other_messages_untouched() {
        let map = map();
        assert_eq!(rewrite_redirect(&BbMessage::Redirect(addr(1, 2)), &map), None);
        assert_eq!(rewrite_redirect(&BbMessage::Disconnect, &map), None);
        assert_eq!(rewrite_redirect(&PcMessage::Login, &map), None);
    }

    #[test]
    fn test_filter_downstream_reencodes_only_redirects() {
        let proxy = ProxyServer::<PcMessage>::new("proxy", addr(9, 9), Arc::new(map()));

        let frame = PcMessage::Redirect(addr(1, 1)).encode();
        let out = proxy.filter_downstream(frame);
        assert_eq!(PcMessage::decode(&out).unwrap(), PcMessage::Redirect(addr(2, 2)));

        let frame = PcMessage::WelcomeMessage("hi".into()).encode();
        assert_eq!(proxy.filter_downstream(frame.clone()), frame);

        // Garbage passes through untouched.
        let frame = vec![0xFF, 0xFF, 0x14, 0];
        assert_eq!(proxy.filter_downstream(frame.clone()), frame);
    }
}
