//! [`Command`] for authorizing an admin [`Session`].

use derive_more::{Display, Error, From};
use jsonwebtoken::Validation;
use tracerr::Traced;

use crate::{
    domain::admin::{self, Session},
    Service,
};

use super::Command;

/// [`Command`] for authorizing an admin [`Session`] by its
/// [`admin::Token`].
///
/// Expired or forged tokens are rejected by the [JWT] validation itself.
///
/// [JWT]: https://datatracker.ietf.org/doc/html/rfc7519
#[derive(Clone, Debug, From)]
pub struct AuthorizeAdminSession {
    /// [`Session`] token to authorize.
    pub token: admin::Token,
}

impl<St, Pay> Command<AuthorizeAdminSession> for Service<St, Pay> {
    type Ok = Session;
    type Err = Traced<ExecutionError>;

    async fn execute(
        &self,
        cmd: AuthorizeAdminSession,
    ) -> Result<Self::Ok, Self::Err> {
        use ExecutionError as E;

        let AuthorizeAdminSession { token } = cmd;

        let session = jsonwebtoken::decode::<Session>(
            token.as_ref(),
            &self.config().jwt_decoding_key,
            &Validation::default(),
        )
        .map_err(tracerr::from_and_wrap!(=> E))?
        .claims;

        Ok(session)
    }
}

/// Error of [`AuthorizeAdminSession`] [`Command`] execution.
#[derive(Debug, Display, Error, From)]
pub enum ExecutionError {
    /// [`jsonwebtoken`] decoding error.
    #[display("Failed to decode a JSON Web Token: {_0}")]
    JsonWebTokenDecodeError(jsonwebtoken::errors::Error),
}

#[cfg(test)]
mod spec {
    use secrecy::SecretBox;

    use crate::{
        command::CreateAdminSession, domain::admin, infra::Memory,
        Command as _, Config, Service,
    };

    use super::AuthorizeAdminSession;

    fn service() -> Service<Memory> {
        Service::new(Config::from_jwt_secret(b"test-secret"), Memory::new())
    }

    #[tokio::test]
    async fn issued_token_authorizes() {
        let service = service();

        let out = service
            .execute(CreateAdminSession {
                password: SecretBox::new(Box::new(
                    admin::Password::new("admin123").unwrap(),
                )),
            })
            .await
            .unwrap();

        let session = service
            .execute(AuthorizeAdminSession { token: out.token })
            .await
            .unwrap();
        // JWT claims carry whole seconds only.
        assert_eq!(
            session.expires_at.unix_timestamp(),
            out.expires_at.unix_timestamp(),
        );
    }

    #[tokio::test]
    async fn garbage_token_is_rejected() {
        let result = service()
            .execute(AuthorizeAdminSession {
                token: admin::Token::new_unchecked("garbage".into()),
            })
            .await;
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn foreign_token_is_rejected() {
        let foreign = Service::new(
            Config::from_jwt_secret(b"other-secret"),
            Memory::new(),
        );
        let out = foreign
            .execute(CreateAdminSession {
                password: SecretBox::new(Box::new(
                    admin::Password::new("admin123").unwrap(),
                )),
            })
            .await
            .unwrap();

        let result = service()
            .execute(AuthorizeAdminSession { token: out.token })
            .await;
        assert!(result.is_err());
    }
}
