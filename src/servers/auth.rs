//! BB handoff roles. The auth server and the login server behave the same:
//! authenticate once, then redirect the client to the next tier.

use super::{AuthPolicy, ProtocolError, ServerState, Transition};
use crate::messages::bb::{AuthenticationStatus, BbMessage};
use std::net::SocketAddrV4;

#[derive(Debug, Clone)]
pub struct HandoffContext {
    /// Where successfully authenticated clients are sent.
    pub next_hop: SocketAddrV4,
    pub policy: AuthPolicy,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HandoffState {
    Authentication,
    Final,
}

impl ServerState for HandoffState {
    type Message = BbMessage;
    type Context = HandoffContext;

    fn initial(_ctx: &HandoffContext) -> Self {
        Self::Authentication
    }

    fn process(
        &self,
        ctx: &HandoffContext,
        message: &BbMessage,
    ) -> Result<Transition<Self>, ProtocolError> {
        match (self, message) {
            (Self::Authentication, BbMessage::Authenticate(auth)) => {
                let status = ctx.policy.check(&auth.username, &auth.password);
                let t = Transition::to(Self::Final).send(BbMessage::AuthenticationResponse {
                    status,
                    guild_card: auth.guild_card,
                    team_id: auth.team_id,
                });
                if status == AuthenticationStatus::Success {
                    Ok(t.send(BbMessage::Redirect(ctx.next_hop)))
                } else {
                    tracing::info!(
                        "[auth] [rejected] user={} status={:?}",
                        auth.username,
                        status
                    );
                    Ok(t)
                }
            }
            (Self::Authentication, BbMessage::Disconnect) => Ok(Transition::to(Self::Final)),
            _ => Err(self.unexpected(message)),
        }
    }

    fn is_final(&self) -> bool {
        matches!(self, Self::Final)
    }

    fn name(&self) -> &'static str {
        match self {
            Self::Authentication => "Authentication",
            Self::Final => "Final",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::messages::bb::Authenticate;
    use std::net::Ipv4Addr;

    fn ctx(policy: AuthPolicy) -> HandoffContext {
        HandoffContext {
            next_hop: SocketAddrV4::new(Ipv4Addr::new(10, 0, 0, 2), 12001),
            policy,
        }
    }

    fn authenticate(username: &str, password: &str) -> BbMessage {
        BbMessage::Authenticate(Authenticate {
            guild_card: 1234,
            version: 0x41,
            team_id: 77,
            username: username.into(),
            password: password.into(),
        })
    }

    #[test]
    fn test_success_redirects_to_next_hop() {
        let ctx = ctx(AuthPolicy::AcceptAll);
        let t = HandoffState::Authentication
            .process(&ctx, &authenticate("u", "p"))
            .unwrap();
        assert_eq!(t.state, HandoffState::Final);
        assert_eq!(
            t.outgoing,
            vec![
                BbMessage::AuthenticationResponse {
                    status: AuthenticationStatus::Success,
                    guild_card: 1234,
                    team_id: 77,
                },
                BbMessage::Redirect(ctx.next_hop),
            ]
        );
    }

    #[test]
    fn test_failure_sends_no_redirect() {
        let policy = AuthPolicy::from_accounts([("u".to_string(), "right".to_string())]);
        let ctx = ctx(policy);

        let t = HandoffState::Authentication
            .process(&ctx, &authenticate("u", "wrong"))
            .unwrap();
        assert_eq!(t.state, HandoffState::Final);
        assert_eq!(
            t.outgoing,
            vec![BbMessage::AuthenticationResponse {
                status: AuthenticationStatus::Error,
                guild_card: 1234,
                team_id: 77,
            }]
        );

        let t = HandoffState::Authentication
            .process(&ctx, &authenticate("nobody", "x"))
            .unwrap();
        assert!(matches!(
            t.outgoing.as_slice(),
            [BbMessage::AuthenticationResponse {
                status: AuthenticationStatus::UnknownUser,
                ..
            }]
        ));
    }

    #[test]
    fn test_disconnect_ends_session() {
        let t = HandoffState::Authentication
            .process(&ctx(AuthPolicy::AcceptAll), &BbMessage::Disconnect)
            .unwrap();
        assert_eq!(t.state, HandoffState::Final);
        assert!(t.outgoing.is_empty());
    }

    #[test]
    fn test_final_rejects_everything() {
        let ctx = ctx(AuthPolicy::AcceptAll);
        assert!(HandoffState::Final
            .process(&ctx, &authenticate("u", "p"))
            .is_err());
        assert!(HandoffState::Final
            .process(&ctx, &BbMessage::Disconnect)
            .is_err());
    }

    #[test]
    fn test_unknown_message_rejected() {
        let msg = BbMessage::Unknown {
            code: 0x9999,
            flags: 0,
            body: Default::default(),
        };
        assert_eq!(
            HandoffState::Authentication
                .process(&ctx(AuthPolicy::AcceptAll), &msg)
                .unwrap_err(),
            ProtocolError::UnexpectedMessage {
                state: "Authentication",
                message: "Unknown"
            }
        );
    }
}
