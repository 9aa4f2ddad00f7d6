use std::future::{Ready, ready};

use actix_session::{Session, SessionExt};
use actix_web::{FromRequest, HttpRequest, dev::Payload};
use anyhow::Context;
use uuid::Uuid;

pub struct TypedSession(Session);

impl TypedSession {
    const WIZARD_ID_KEY: &'static str = "wizard_id";
    const HAS_ACCESS_KEY: &'static str = "has_access";

    pub fn renew(&self) {
        self.0.renew();
    }

    pub fn insert_wizard_id(&self, wizard_id: Uuid) -> Result<(), anyhow::Error> {
        self.0
            .insert(Self::WIZARD_ID_KEY, wizard_id)
            .context("Failed to insert wizard id into the session")
    }

    pub fn get_wizard_id(&self) -> Result<Option<Uuid>, anyhow::Error> {
        self.0
            .get(Self::WIZARD_ID_KEY)
            .context("Failed to get wizard id from the session")
    }

    // There is no way back: the flag is never removed once granted
    pub fn grant_access(&self) -> Result<(), anyhow::Error> {
        self.0
            .insert(Self::HAS_ACCESS_KEY, true)
            .context("Failed to insert access flag into the session")
    }

    pub fn has_access(&self) -> Result<bool, anyhow::Error> {
        let flag: Option<bool> = self
            .0
            .get(Self::HAS_ACCESS_KEY)
            .context("Failed to get access flag from the session")?;
        Ok(flag.unwrap_or(false))
    }
}

impl FromRequest for TypedSession {
    type Error = <Session as FromRequest>::Error;
    type Future = Ready<Result<TypedSession, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        ready(Ok(TypedSession(req.get_session())))
    }
}
