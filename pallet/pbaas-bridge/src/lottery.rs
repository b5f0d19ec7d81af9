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

//! Deterministic fee-lottery recipient selection for aggregated export fees.
//!
//! Pure functions only: no storage access, so the selection can be exercised directly with
//! synthetic entropy in tests without constructing pallet storage.

use crate::types::Destination;
use sp_core::H256;
use sp_std::prelude::*;

/// One candidate coinbase in the lottery window: the height it was produced at and its eligible
/// fee-recipient destination (or `None` if its coinbase had no eligible recipient).
pub struct LotteryEntry<AccountId> {
	pub height: u32,
	pub entropy: H256,
	pub recipient: Option<Destination<AccountId>>,
}

/// Selects the winning recipient for an aggregated fee pool from a window of candidate entries.
///
/// The winner is chosen by reducing each entry's entropy to a single weight and picking the
/// entry with the lowest weight; ties break toward the lower height. Entries with no eligible
/// recipient are skipped entirely, never awarded a fee. Returns `None` if no entry in the window
/// has an eligible recipient, in which case the caller should carry the fee pool forward.
pub fn select_winner<AccountId: Clone>(window: &[LotteryEntry<AccountId>]) -> Option<Destination<AccountId>> {
	window
		.iter()
		.filter(|entry| entry.recipient.as_ref().map(|d| d.is_eligible_fee_recipient()).unwrap_or(false))
		.min_by_key(|entry| (entry.entropy.as_bytes().to_vec(), entry.height))
		.and_then(|entry| entry.recipient.clone())
}
