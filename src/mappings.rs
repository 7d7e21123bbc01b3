//! Projects LendingPool events onto their entities.
//!
//! Every handler builds one entity keyed by `transactionHash ++ logIndex`,
//! copies the event fields verbatim, stamps block provenance and issues a
//! single upsert. Store failures are returned to the caller untouched.

use thiserror::Error;
use tracing::debug;

use crate::db::models::{PositionClosed, PositionCreated, Repaid};
use crate::db::repositories::{Repository, StoreError};
use crate::events::{
    Event, MappingError, PositionClosedParams, PositionCreatedParams, RepaidParams,
};

#[derive(Debug, Error)]
pub enum HandlerError {
    #[error(transparent)]
    Mapping(#[from] MappingError),
    #[error(transparent)]
    Store(#[from] StoreError),
}

pub fn handle_position_closed(
    event: &Event<PositionClosedParams>,
    repo: &dyn Repository<PositionClosed>,
) -> Result<PositionClosed, HandlerError> {
    let entity = event.try_map_to_db()?;
    repo.upsert(&entity)?;
    debug!(id = %entity.id, "saved PositionClosed");
    Ok(entity)
}

pub fn handle_position_created(
    event: &Event<PositionCreatedParams>,
    repo: &dyn Repository<PositionCreated>,
) -> Result<PositionCreated, HandlerError> {
    let entity = event.try_map_to_db()?;
    repo.upsert(&entity)?;
    debug!(id = %entity.id, "saved PositionCreated");
    Ok(entity)
}

pub fn handle_repaid(
    event: &Event<RepaidParams>,
    repo: &dyn Repository<Repaid>,
) -> Result<Repaid, HandlerError> {
    let entity = event.try_map_to_db()?;
    repo.upsert(&entity)?;
    debug!(id = %entity.id, "saved Repaid");
    Ok(entity)
}
