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

//! The optional arbitrage hook: lets an importer inject a same-block, arbitrage-only transfer
//! against a local offer book to capture a price dislocation created by the import itself.

use crate::types::{CoinbaseCurrencyState, TransferFlags};
use seed_primitives::{Balance, CurrencyId};
use sp_runtime::DispatchError;

/// A local venue an arbitrage-only transfer can be matched against. The host runtime implements
/// this (e.g. backed by an AMM pallet's trading pairs in a production runtime); it is never
/// implemented by this pallet itself, so the hook compiles out entirely when unused.
pub trait ArbitrageOfferBook {
	/// Returns the best available out-amount for converting `amount` of `from` into `to`, if any
	/// offer exists, without mutating anything - a quote, not a fill.
	fn best_offer(from: CurrencyId, to: CurrencyId, amount: Balance) -> Option<Balance>;
}

/// No-op implementation: no local venue, so the arbitrage hook never fires.
impl ArbitrageOfferBook for () {
	fn best_offer(_from: CurrencyId, _to: CurrencyId, _amount: Balance) -> Option<Balance> {
		None
	}
}

/// Given the post-import currency state and an amount available for arbitrage, decides whether
/// injecting an `ARBITRAGE_ONLY` transfer is profitable: the local venue's offer must beat the
/// reserve basket's own post-import conversion price.
pub fn find_opportunity<B: ArbitrageOfferBook>(
	state: &CoinbaseCurrencyState,
	from: CurrencyId,
	to: CurrencyId,
	amount: Balance,
) -> Result<Option<Balance>, DispatchError> {
	let reserve_price_out = crate::conversion::convert_to_primary(state, from, amount)
		.ok()
		.and_then(|primary| crate::conversion::convert_from_primary(state, to, primary).ok());

	let Some(reserve_price_out) = reserve_price_out else { return Ok(None) };
	match B::best_offer(from, to, amount) {
		Some(offer) if offer > reserve_price_out => Ok(Some(offer)),
		_ => Ok(None),
	}
}

/// An arbitrage-only transfer's flags must carry `ARBITRAGE_ONLY` and nothing else incompatible
/// (enforced by `TransferFlags::is_internally_consistent`, re-checked here for callers that build
/// the flags freshly rather than parsing a submitted transfer).
pub fn arbitrage_flags() -> TransferFlags {
	TransferFlags(TransferFlags::ARBITRAGE_ONLY)
}
