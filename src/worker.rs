use primitive_types::H160;
use tracing::{debug, error, info};

use crate::db::Repositories;
use crate::events::common::convert_hash_to_hex_string;
use crate::events::{LendingPoolEvent, RawLog};
use crate::mappings::{self, HandlerError};

/// Counts for one processed batch of logs.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ProcessSummary {
    pub stored: usize,
    pub skipped: usize,
    pub failed: usize,
}

/// Routes LendingPool logs to their handlers.
#[derive(Clone)]
pub struct LendingPoolWorker {
    repos: Repositories,
    contract_address: H160,
}

impl LendingPoolWorker {
    pub fn new(repos: Repositories, contract_address: H160) -> Self {
        info!("Worker configured for contract: {:?}", contract_address);
        Self {
            repos,
            contract_address,
        }
    }

    /// Processes `logs` in order. A log that fails to decode or store is
    /// logged and counted; the rest of the batch still runs.
    pub fn process_logs(&self, logs: &[RawLog]) -> ProcessSummary {
        let mut summary = ProcessSummary::default();

        for log in logs {
            let tx_hash = convert_hash_to_hex_string(log.transaction_hash);

            if log.address != self.contract_address {
                debug!("Skipping log {} of tx {} from {:?}", log.log_index, tx_hash, log.address);
                summary.skipped += 1;
                continue;
            }

            let event = match LendingPoolEvent::from_log(log) {
                Ok(Some(event)) => event,
                Ok(None) => {
                    debug!("Ignoring unknown event in tx {} (log {})", tx_hash, log.log_index);
                    summary.skipped += 1;
                    continue;
                }
                Err(e) => {
                    error!("Decode Error for log {} of tx {}: {}. Data: 0x{}", log.log_index, tx_hash, e, hex::encode(&log.data));
                    summary.failed += 1;
                    continue;
                }
            };

            let name = event.name();
            match self.dispatch(&event) {
                Ok(id) => {
                    info!("Successfully stored {} {} for tx {}", name, id, tx_hash);
                    summary.stored += 1;
                }
                Err(e) => {
                    error!("Error storing {} for tx {}: {}", name, tx_hash, e);
                    summary.failed += 1;
                }
            }
        }

        summary
    }

    fn dispatch(&self, event: &LendingPoolEvent) -> Result<String, HandlerError> {
        let id = match event {
            LendingPoolEvent::PositionClosed(e) => {
                mappings::handle_position_closed(e, self.repos.position_closed.as_ref())?.id
            }
            LendingPoolEvent::PositionCreated(e) => {
                mappings::handle_position_created(e, self.repos.position_created.as_ref())?.id
            }
            LendingPoolEvent::Repaid(e) => {
                mappings::handle_repaid(e, self.repos.repaid.as_ref())?.id
            }
        };
        Ok(id)
    }
}
