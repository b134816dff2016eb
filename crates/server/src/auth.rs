use axum::{
    extract::FromRequestParts,
    http::{StatusCode, request::Parts},
};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Driver,
    Dispatcher,
}

/// The authenticated caller, as asserted by the identity service in front of
/// this server. Identity itself is an external concern; we only read the
/// headers it injects.
#[derive(Debug, Clone, Copy)]
pub struct Actor {
    pub id: Uuid,
    pub role: Role,
}

impl Actor {
    pub fn require_dispatcher(&self) -> Result<(), StatusCode> {
        if self.role != Role::Dispatcher {
            return Err(StatusCode::FORBIDDEN);
        }
        Ok(())
    }
}

impl<S> FromRequestParts<S> for Actor
where
    S: Send + Sync,
{
    type Rejection = StatusCode;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let id = parts
            .headers
            .get("x-actor-id")
            .and_then(|value| value.to_str().ok())
            .and_then(|value| Uuid::parse_str(value).ok())
            .ok_or(StatusCode::UNAUTHORIZED)?;
        let role = match parts
            .headers
            .get("x-actor-role")
            .and_then(|value| value.to_str().ok())
        {
            Some("driver") => Role::Driver,
            Some("dispatcher") => Role::Dispatcher,
            _ => return Err(StatusCode::UNAUTHORIZED),
        };
        Ok(Self { id, role })
    }
}
