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

//! Export aggregation: turns a destination currency's pending transfer backlog into the next
//! `CrossChainExport`, deterministically and without favoring whoever happens to author a block.

use crate::{
	hash::hash_reserve_transfers,
	types::{Destination, ExportFlags, ReserveTransfer, MAX_EXPORT_INPUTS, MIN_BLOCKS, MIN_INPUTS},
};
use seed_primitives::{Balance, CurrencyId, SystemId};
use sp_core::H256;
use sp_std::{collections::btree_map::BTreeMap, prelude::*};

/// One pending transfer together with the height it arrived at, as read from pallet storage.
pub struct PendingTransfer<AccountId> {
	pub height: u32,
	pub transfer: ReserveTransfer<AccountId>,
}

/// Inputs the exporter needs beyond the pending-transfer backlog itself.
pub struct ExportContext {
	pub current_height: u32,
	pub prior_export_height_end: u32,
	/// Low bit of `entropy_source(current_height + 1)`; decides which side of a threshold this
	/// block's transfers fall on, so no participant can game the cut by timing.
	pub tie_break_bit: bool,
	pub is_clear_launch_boundary: bool,
}

/// Decides whether an export should be cut now, and if so, builds it.
///
/// `pending` must be sorted ascending by height (the caller's storage iteration order). Returns
/// `None` when nothing qualifies yet (failure mode: "nothing to export").
pub fn try_build_export<AccountId: Clone + codec::Encode>(
	pending: &[PendingTransfer<AccountId>],
	dest_currency_id: CurrencyId,
	dest_system_id: SystemId,
	source_system_id: SystemId,
	ctx: &ExportContext,
	exporter: Destination<AccountId>,
) -> Option<crate::types::CrossChainExport<AccountId>> {
	if pending.is_empty() {
		return None
	}

	let blocks_elapsed = ctx.current_height.saturating_sub(ctx.prior_export_height_end);
	let threshold_met =
		pending.len() as u32 >= MIN_INPUTS || blocks_elapsed >= MIN_BLOCKS || ctx.is_clear_launch_boundary;
	if !threshold_met {
		return None
	}

	// Cap enforcement: never admit more than MAX_EXPORT_INPUTS in one export. On an exact tie at
	// the cap boundary, the deterministic coin flip decides whether the boundary transfer joins
	// this export or waits for the next one - this is the anti-front-running rule from 4.D.2.
	let mut take = core::cmp::min(pending.len(), MAX_EXPORT_INPUTS as usize);
	if pending.len() as u32 == MAX_EXPORT_INPUTS + 1 && !ctx.tie_break_bit {
		take = MAX_EXPORT_INPUTS as usize - 1;
	}

	let batch = &pending[..take];
	let transfers: Vec<ReserveTransfer<AccountId>> = batch.iter().map(|p| p.transfer.clone()).collect();

	let mut total_amounts: BTreeMap<CurrencyId, Balance> = BTreeMap::new();
	let mut total_fees: Balance = 0;
	for p in batch {
		if let Ok(totals) = p.transfer.total_currency_out() {
			for (currency_id, amount) in totals {
				let entry = total_amounts.entry(currency_id).or_insert(0);
				*entry = entry.saturating_add(amount);
			}
		}
		total_fees = total_fees.saturating_add(p.transfer.fees);
	}

	let mut flags = ExportFlags(0);
	if ctx.is_clear_launch_boundary {
		flags.0 |= ExportFlags::CLEAR_LAUNCH;
	}

	Some(crate::types::CrossChainExport {
		source_system_id,
		source_height_start: batch.first().map(|p| p.height).unwrap_or_default(),
		source_height_end: batch.last().map(|p| p.height).unwrap_or_default() + 1,
		dest_system_id,
		dest_currency_id,
		first_input: 0,
		num_inputs: batch.len() as u32,
		total_amounts: total_amounts.into_iter().collect(),
		total_fees,
		total_burned: 0,
		hash_reserve_transfers: hash_reserve_transfers(&transfers),
		exporter,
		flags,
		transfers,
	})
}

/// Picks the fee-lottery winning block among the heights that contributed transfers to an
/// export, per the `selectBlockEntropy` rule: hash the destination currency together with the
/// export's end-of-range entropy, then reduce modulo the candidate count.
pub fn select_lottery_height(contributing_heights: &[u32], select_entropy: H256) -> Option<u32> {
	if contributing_heights.is_empty() {
		return None
	}
	let entropy_low64 = u64::from_le_bytes(select_entropy.as_bytes()[0..8].try_into().ok()?);
	let idx = (entropy_low64 % contributing_heights.len() as u64) as usize;
	contributing_heights.get(idx).copied()
}
