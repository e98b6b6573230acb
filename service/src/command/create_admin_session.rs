//! [`Command`] for creating an admin [`Session`].

use std::time::Duration;

use common::{
    operations::{All, By, Select},
    DateTime,
};
use derive_more::{Display, Error, From};
use secrecy::{ExposeSecret, SecretBox};
use tracerr::Traced;

use crate::{
    domain::admin::{self, Session},
    infra::{storage, Storage},
    Service,
};

use super::Command;

/// [`Command`] for creating an admin [`Session`] by the admin
/// [`admin::Password`].
#[derive(Debug, From)]
pub struct CreateAdminSession {
    /// Submitted admin [`admin::Password`].
    pub password: SecretBox<admin::Password>,
}

impl CreateAdminSession {
    /// [`Duration`] of [`Session`] expiration.
    const EXPIRATION_DURATION: Duration = Duration::from_secs(30 * 60);
}

/// Output of [`CreateAdminSession`] [`Command`].
#[derive(Clone, Debug)]
pub struct Output {
    /// [`admin::Token`] of the created [`Session`].
    pub token: admin::Token,

    /// [`DateTime`] when the [`Session`] expires.
    pub expires_at: admin::ExpirationDateTime,
}

impl<St, Pay> Command<CreateAdminSession> for Service<St, Pay>
where
    St: Storage<
        Select<By<admin::PasswordHash, All>>,
        Ok = admin::PasswordHash,
        Err = Traced<storage::Error>,
    >,
{
    type Ok = Output;
    type Err = Traced<ExecutionError>;

    async fn execute(
        &self,
        cmd: CreateAdminSession,
    ) -> Result<Self::Ok, Self::Err> {
        use CreateAdminSession as Cmd;
        use ExecutionError as E;

        let Cmd { password } = cmd;

        let stored = self
            .storage()
            .execute(Select(By::new(All)))
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))?;

        let hash = admin::PasswordHash::new(password.expose_secret());
        if stored != hash {
            return Err(tracerr::new!(E::WrongPassword));
        }

        let expires_at = (DateTime::now() + Cmd::EXPIRATION_DURATION).coerce();
        let token = jsonwebtoken::encode::<Session>(
            &jsonwebtoken::Header::default(),
            &Session { expires_at },
            &self.config().jwt_encoding_key,
        )
        .map_err(tracerr::from_and_wrap!(=> E))?;

        Ok(Output {
            token: admin::Token::new_unchecked(token),
            expires_at,
        })
    }
}

/// Error of [`CreateAdminSession`] [`Command`] execution.
#[derive(Debug, Display, Error, From)]
pub enum ExecutionError {
    /// [`Storage`] error.
    #[display("`Storage` operation failed: {_0}")]
    St(storage::Error),

    /// [`jsonwebtoken`] encoding error.
    #[display("Failed to encode a JSON Web Token: {_0}")]
    JsonWebTokenEncodeError(jsonwebtoken::errors::Error),

    /// Wrong admin [`admin::Password`] submitted.
    #[display("Wrong admin password")]
    WrongPassword,
}
