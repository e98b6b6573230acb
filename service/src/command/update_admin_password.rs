//! [`Command`] for updating the admin [`Password`].

use common::operations::{All, By, Select, Update};
use derive_more::{Display, Error, From};
use tracerr::Traced;

#[cfg(doc)]
use crate::domain::admin::Password;
use crate::{
    domain::admin,
    infra::{storage, Storage},
    Service,
};

use super::Command;

/// [`Command`] for updating the admin [`Password`].
#[derive(Clone, Debug, From)]
pub struct UpdateAdminPassword {
    /// New admin [`Password`].
    pub new_password: admin::Password,

    /// Current admin [`Password`].
    pub old_password: admin::Password,
}

impl<St, Pay> Command<UpdateAdminPassword> for Service<St, Pay>
where
    St: Storage<
            Select<By<admin::PasswordHash, All>>,
            Ok = admin::PasswordHash,
            Err = Traced<storage::Error>,
        > + Storage<
            Update<admin::PasswordHash>,
            Ok = (),
            Err = Traced<storage::Error>,
        >,
{
    type Ok = ();
    type Err = Traced<ExecutionError>;

    async fn execute(
        &self,
        cmd: UpdateAdminPassword,
    ) -> Result<Self::Ok, Self::Err> {
        use ExecutionError as E;

        let UpdateAdminPassword {
            new_password,
            old_password,
        } = cmd;

        let stored = self
            .storage()
            .execute(Select(By::new(All)))
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))?;

        let old_password_hash = admin::PasswordHash::new(&old_password);
        if stored != old_password_hash {
            return Err(tracerr::new!(E::WrongPassword));
        }

        let new_password_hash = admin::PasswordHash::new(&new_password);
        if stored == new_password_hash {
            return Ok(());
        }

        self.storage()
            .execute(Update(new_password_hash))
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))
    }
}

/// Error of [`UpdateAdminPassword`] [`Command`] execution.
#[derive(Debug, Display, Error, From)]
pub enum ExecutionError {
    /// [`Storage`] error.
    #[display("`Storage` operation failed: {_0}")]
    St(storage::Error),

    /// Wrong current [`Password`] provided.
    #[display("Wrong current password")]
    WrongPassword,
}

#[cfg(test)]
mod spec {
    use secrecy::SecretBox;

    use crate::{
        command::CreateAdminSession, domain::admin, infra::Memory,
        Command as _, Config, Service,
    };

    use super::UpdateAdminPassword;

    fn service() -> Service<Memory> {
        Service::new(Config::from_jwt_secret(b"test-secret"), Memory::new())
    }

    fn login(password: &str) -> CreateAdminSession {
        CreateAdminSession {
            password: SecretBox::new(Box::new(
                admin::Password::new(password).unwrap(),
            )),
        }
    }

    #[tokio::test]
    async fn requires_matching_current_password() {
        let err = service()
            .execute(UpdateAdminPassword {
                new_password: admin::Password::new("new-pass").unwrap(),
                old_password: admin::Password::new("wrong").unwrap(),
            })
            .await
            .unwrap_err();
        assert!(err.to_string().contains("Wrong current password"));
    }

    #[tokio::test]
    async fn changed_password_takes_effect() {
        let service = service();

        service
            .execute(UpdateAdminPassword {
                new_password: admin::Password::new("new-pass").unwrap(),
                old_password: admin::Password::new("admin123").unwrap(),
            })
            .await
            .unwrap();

        assert!(service.execute(login("admin123")).await.is_err());
        assert!(service.execute(login("new-pass")).await.is_ok());
    }
}
