//! psoserv - PSO server session engine
//!
//! Emulates the bootstrap tiers of a Phantasy Star Online server: the PC
//! patch server, the Blue Burst auth, login and data servers, and a proxy that
//! sits between a real client and a real server.

/// Server configuration
pub mod config;
/// Wire messages (PC and BB)
pub mod messages;
/// Ciphers and encrypted framing
pub mod network;
/// Server roles and the proxy
pub mod servers;
