//! PC patch server. No files are ever offered: the patch list is always
//! empty, so clients go straight to `PatchDone`.

use super::{ProtocolError, ServerState, Transition};
use crate::messages::PcMessage;

#[derive(Debug, Clone)]
pub struct PatchContext {
    pub welcome_message: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PatchState {
    Welcome,
    Login,
    PatchListDone,
    Final,
}

impl ServerState for PatchState {
    type Message = PcMessage;
    type Context = PatchContext;

    fn initial(_ctx: &PatchContext) -> Self {
        Self::Welcome
    }

    fn process(
        &self,
        ctx: &PatchContext,
        message: &PcMessage,
    ) -> Result<Transition<Self>, ProtocolError> {
        match (self, message) {
            (Self::Welcome, PcMessage::InitEncryption(_)) => {
                Ok(Transition::to(Self::Login).send(PcMessage::Login))
            }
            (Self::Login, PcMessage::Login) => Ok(Transition::to(Self::PatchListDone)
                .send(PcMessage::WelcomeMessage(ctx.welcome_message.clone()))
                .send(PcMessage::PatchListStart)
                .send(PcMessage::PatchListEnd)),
            (Self::PatchListDone, PcMessage::PatchListOk) => {
                Ok(Transition::to(Self::Final).send(PcMessage::PatchDone))
            }
            _ => Err(self.unexpected(message)),
        }
    }

    fn is_final(&self) -> bool {
        matches!(self, Self::Final)
    }

    fn name(&self) -> &'static str {
        match self {
            Self::Welcome => "Welcome",
            Self::Login => "Login",
            Self::PatchListDone => "PatchListDone",
            Self::Final => "Final",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ctx() -> PatchContext {
        PatchContext {
            welcome_message: "Welcome.".into(),
        }
    }

    #[test]
    fn test_full_patch_session() {
        let ctx = ctx();
        let mut state = PatchState::initial(&ctx);
        let mut sent = Vec::new();

        for msg in [
            PcMessage::InitEncryption(None),
            PcMessage::Login,
            PcMessage::PatchListOk,
        ] {
            let t = state.process(&ctx, &msg).unwrap();
            sent.extend(t.outgoing);
            state = t.state;
        }

        assert_eq!(
            sent,
            vec![
                PcMessage::Login,
                PcMessage::WelcomeMessage("Welcome.".into()),
                PcMessage::PatchListStart,
                PcMessage::PatchListEnd,
                PcMessage::PatchDone,
            ]
        );
        assert_eq!(state, PatchState::Final);
        assert!(state.is_final());
    }

    #[test]
    fn test_process_is_pure() {
        let ctx = ctx();
        let a = PatchState::Login.process(&ctx, &PcMessage::Login).unwrap();
        let b = PatchState::Login.process(&ctx, &PcMessage::Login).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_out_of_order_message_rejected() {
        let err = PatchState::Welcome
            .process(&ctx(), &PcMessage::PatchListOk)
            .unwrap_err();
        assert_eq!(
            err,
            ProtocolError::UnexpectedMessage {
                state: "Welcome",
                message: "PatchListOk"
            }
        );
    }

    #[test]
    fn test_final_rejects_everything() {
        let ctx = ctx();
        for msg in [
            PcMessage::InitEncryption(None),
            PcMessage::Login,
            PcMessage::PatchListOk,
            PcMessage::PatchDone,
        ] {
            assert!(PatchState::Final.process(&ctx, &msg).is_err());
        }
    }
}
