// Copyright 2022-2023 Futureverse Corporation Limited
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.
// You may obtain a copy of the License at the root of this project source code

//! Import processing: turns a received `CrossChainExport` into the matching `CrossChainImport`
//! and post-conversion currency state, in the fixed order the specification requires.

use crate::types::{
	CrossChainExport, CrossChainImport, Destination, ImportFlags, TransferDestination,
	MAX_FEE_WINDOW_BLOCKS,
};
use seed_primitives::{Balance, CurrencyId};
use sp_runtime::DispatchError;
use sp_std::prelude::*;

/// Reasons an import is rejected, named so callers can match on them instead of parsing strings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImportError {
	/// A prior import for this `(sourceSystemID, importCurrencyID)` pair is missing.
	OutOfOrder,
	/// `ccx.source_height_start != priorImport.source_system_height + 1`.
	HeightGap,
	/// The export's declared fee-lottery exporter does not match the destination the fee leg
	/// actually paid.
	FeeRecipientMismatch,
	/// A transfer's fee fell below the minimum required for its transfer kind.
	InadequateFees,
	/// The reserve-deposit balance equation did not hold.
	BalanceViolation(DispatchError),
}

/// Per-transfer-kind minimum fee schedule, read from pallet configuration.
pub struct FeeSchedule {
	pub identity_import_fee: Balance,
	pub currency_import_fee: Balance,
	pub currency_import_fee_nft: Balance,
	pub cross_chain_transfer_fee: Balance,
	pub transfer_fee: Balance,
}

/// Minimal view of a pending transfer's fee leg needed for the adequacy check.
pub struct FeeCheckInput {
	pub fee_native_equivalent: Balance,
	pub is_identity_export: bool,
	pub is_currency_export: bool,
	pub is_currency_export_nft: bool,
	pub is_cross_chain: bool,
}

/// Verifies `ImportHasAdequateFees` for one transfer: its native-equivalent fee must meet or
/// exceed the minimum for its kind.
pub fn check_fee_adequate(input: &FeeCheckInput, schedule: &FeeSchedule) -> Result<(), ImportError> {
	let minimum = if input.is_identity_export {
		schedule.identity_import_fee
	} else if input.is_currency_export {
		if input.is_currency_export_nft {
			schedule.currency_import_fee_nft
		} else {
			schedule.currency_import_fee
		}
	} else if input.is_cross_chain {
		schedule.cross_chain_transfer_fee
	} else {
		schedule.transfer_fee
	};
	if input.fee_native_equivalent < minimum {
		return Err(ImportError::InadequateFees)
	}
	Ok(())
}

/// The cross-chain fee-adequacy pricing window is bounded to 40 minutes of wall-clock or
/// `MAX_FEE_WINDOW_BLOCKS` blocks, whichever is smaller - callers compute both and pass the min.
pub fn bounded_fee_window_blocks(block_time_secs: u64, window_secs: u64) -> u32 {
	if block_time_secs == 0 {
		return MAX_FEE_WINDOW_BLOCKS
	}
	let blocks_for_time = (window_secs / block_time_secs).min(MAX_FEE_WINDOW_BLOCKS as u64) as u32;
	blocks_for_time.min(MAX_FEE_WINDOW_BLOCKS)
}

/// Verifies ordering: this export's `source_height_start` must immediately follow the prior
/// import's recorded source-system height.
pub fn check_ordering<AccountId>(
	export: &CrossChainExport<AccountId>,
	prior_import: Option<&CrossChainImport>,
) -> Result<(), ImportError> {
	match prior_import {
		None =>
			if export.source_height_start == 0 {
				Ok(())
			} else {
				Err(ImportError::OutOfOrder)
			},
		Some(prior) =>
			if export.source_height_start == prior.source_system_height.saturating_add(1) {
				Ok(())
			} else {
				Err(ImportError::HeightGap)
			},
	}
}

/// Verifies the export's declared `exporter` destination matches the fee recipient the transfers
/// actually designate, by direct or auxiliary-destination equality.
pub fn check_fee_recipient<AccountId: PartialEq>(
	exporter: &Destination<AccountId>,
	fee_destination: &TransferDestination<AccountId>,
) -> Result<(), ImportError> {
	if fee_destination.matches(exporter) {
		Ok(())
	} else {
		Err(ImportError::FeeRecipientMismatch)
	}
}

/// Builds the `CrossChainImport` record for a successfully validated export.
pub fn build_import<AccountId>(
	export: &CrossChainExport<AccountId>,
	import_value: Vec<(CurrencyId, Balance)>,
	total_reserve_out: Vec<(CurrencyId, Balance)>,
	same_chain: bool,
) -> CrossChainImport {
	let mut flags = ImportFlags(0);
	if same_chain {
		flags.0 |= ImportFlags::SAME_CHAIN;
	} else {
		flags.0 |= ImportFlags::SOURCE_SYSTEM;
	}
	CrossChainImport {
		source_system_id: export.source_system_id,
		source_system_height: export.source_height_end.saturating_sub(1),
		import_currency_id: export.dest_currency_id,
		import_value,
		total_reserve_out,
		num_outputs: 0,
		hash_reserve_transfers: export.hash_reserve_transfers,
		export_tx_id: Default::default(),
		export_tx_out_num: 0,
		flags,
	}
}
