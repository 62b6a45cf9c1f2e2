use anyhow::{Context, Result};
use psoserv::config::{GameVersion, ServerConfig};
use psoserv::messages::{BbMessage, PcMessage};
use psoserv::servers::{
    AuthPolicy, DataContext, DataState, FileStore, HandoffContext, HandoffState, PatchContext,
    PatchState, ProxyServer, Server,
};
use std::net::SocketAddrV4;
use std::path::Path;
use std::sync::Arc;
use tokio::task::JoinSet;

const DEFAULT_CONF: &str = "conf/psoserv.yaml";

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_ansi(std::io::IsTerminal::is_terminal(&std::io::stderr()))
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let mut conf_file: Option<String> = None;

    let args: Vec<String> = std::env::args().collect();
    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--help" | "--h" | "--?" | "/?" => {
                println!("Usage: psoserv [--conf FILE]");
                return Ok(());
            }
            "--conf" => {
                if i + 1 < args.len() {
                    i += 1;
                    conf_file = Some(args[i].clone());
                } else {
                    eprintln!("Error: --conf requires a FILE argument");
                    return Ok(());
                }
            }
            other => {
                eprintln!("Warning: ignoring unknown argument {}", other);
            }
        }
        i += 1;
    }

    let config = match conf_file {
        Some(path) => ServerConfig::from_file(&path)?,
        None if Path::new(DEFAULT_CONF).exists() => ServerConfig::from_file(DEFAULT_CONF)?,
        None => {
            tracing::info!("[psoserv] [config] no {} found, using defaults", DEFAULT_CONF);
            ServerConfig::default()
        }
    };

    let mut servers = JoinSet::new();
    let address = config.address;
    let bind = |port: u16| SocketAddrV4::new(address, port).to_string();
    let policy = AuthPolicy::from_accounts(
        config
            .accounts
            .iter()
            .map(|a| (a.username.clone(), a.password.clone())),
    );

    if let Some(patch) = &config.patch {
        let server = Arc::new(Server::<PatchState>::new(
            "patch",
            PatchContext {
                welcome_message: patch.welcome_message.clone(),
            },
        ));
        let addr = bind(patch.port);
        servers.spawn(async move { server.run(&addr).await });
    }

    if let Some(auth) = &config.auth {
        let next_hop = config
            .data_endpoint()
            .context("auth server needs a data server")?;
        let server = Arc::new(Server::<HandoffState>::new(
            "auth",
            HandoffContext {
                next_hop,
                policy: policy.clone(),
            },
        ));
        let addr = bind(auth.port);
        servers.spawn(async move { server.run(&addr).await });
    }

    if let Some(data) = &config.data {
        let files = match &data.files_dir {
            Some(dir) => FileStore::load_dir(dir)?,
            None => FileStore::empty(),
        };
        let server = Arc::new(Server::<DataState>::new(
            "data",
            DataContext::new(Arc::new(files), policy.clone()),
        ));
        let addr = bind(data.port);
        servers.spawn(async move { server.run(&addr).await });
    }

    if let Some(login) = &config.login {
        let server = Arc::new(Server::<HandoffState>::new(
            "login",
            HandoffContext {
                next_hop: SocketAddrV4::new(login.next_address, login.next_port),
                policy: policy.clone(),
            },
        ));
        let addr = bind(login.port);
        servers.spawn(async move { server.run(&addr).await });
    }

    if let Some(proxy) = &config.proxy {
        let redirects = Arc::new(proxy.redirect_map(address));
        for entry in &proxy.servers {
            let remote = entry.remote(proxy.remote_address);
            let addr = bind(entry.bind_port);
            let name = format!("proxy:{}", entry.name);
            match entry.version {
                GameVersion::Pc => {
                    let server = Arc::new(ProxyServer::<PcMessage>::new(
                        name,
                        remote,
                        Arc::clone(&redirects),
                    ));
                    servers.spawn(async move { server.run(&addr).await });
                }
                GameVersion::Bb => {
                    let server = Arc::new(ProxyServer::<BbMessage>::new(
                        name,
                        remote,
                        Arc::clone(&redirects),
                    ));
                    servers.spawn(async move { server.run(&addr).await });
                }
            }
        }
    }

    anyhow::ensure!(!servers.is_empty(), "no servers configured");
    tracing::info!("[psoserv] [started] servers={}", servers.len());

    // Listeners only return on bind failure.
    while let Some(joined) = servers.join_next().await {
        joined.context("server task panicked")??;
    }
    Ok(())
}
