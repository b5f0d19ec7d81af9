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

//! The reserve deposit ledger and its balance-equation invariant.
//!
//! Every import must satisfy: deposits held before the import, plus reserves arriving with the
//! import, equal deposits held after the import, plus reserves paid out to destinations. Nothing
//! is minted or destroyed at the ledger layer; minting/burning of a currency's own supply is
//! accounted separately via `CoinbaseCurrencyState::supply`.

use crate::types::SafeMath;
use seed_primitives::{Balance, CurrencyId};
use sp_runtime::DispatchError;
use sp_std::{collections::btree_map::BTreeMap, prelude::*};

/// Verifies the balance equation for one import: `before + in == after + out`, per reserve
/// currency. Returns an error naming the first currency that fails to balance.
pub fn verify_balance(
	before: &BTreeMap<CurrencyId, Balance>,
	reserves_in: &BTreeMap<CurrencyId, Balance>,
	after: &BTreeMap<CurrencyId, Balance>,
	reserves_out: &BTreeMap<CurrencyId, Balance>,
) -> Result<(), DispatchError> {
	let mut currencies: Vec<CurrencyId> =
		before.keys().chain(reserves_in.keys()).chain(after.keys()).chain(reserves_out.keys()).copied().collect();
	currencies.sort_unstable_by(|a, b| a.as_bytes().cmp(b.as_bytes()));
	currencies.dedup();

	for currency_id in currencies {
		let b = before.get(&currency_id).copied().unwrap_or_default();
		let i = reserves_in.get(&currency_id).copied().unwrap_or_default();
		let a = after.get(&currency_id).copied().unwrap_or_default();
		let o = reserves_out.get(&currency_id).copied().unwrap_or_default();
		let lhs = b.safe_add(i)?;
		let rhs = a.safe_add(o)?;
		if lhs != rhs {
			return Err(DispatchError::Other("reserve ledger balance equation violated"))
		}
	}
	Ok(())
}

/// Adds `amount` of `currency_id` to a deposit-ledger snapshot, used to build up the `before`/
/// `after` maps passed to `verify_balance` from pallet storage reads.
pub fn add_to(
	ledger: &mut BTreeMap<CurrencyId, Balance>,
	currency_id: CurrencyId,
	amount: Balance,
) -> Result<(), DispatchError> {
	let entry = ledger.entry(currency_id).or_insert(0);
	*entry = entry.safe_add(amount)?;
	Ok(())
}

/// Subtracts `amount` of `currency_id` from a deposit-ledger snapshot.
pub fn subtract_from(
	ledger: &mut BTreeMap<CurrencyId, Balance>,
	currency_id: CurrencyId,
	amount: Balance,
) -> Result<(), DispatchError> {
	let entry = ledger.entry(currency_id).or_insert(0);
	*entry = entry.safe_sub(amount)?;
	Ok(())
}
