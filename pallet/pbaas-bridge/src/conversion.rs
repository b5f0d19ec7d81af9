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

//! Bancor-style reserve-weighted conversion pricing for fractional currencies.

use crate::types::{
	CoinbaseCurrencyState, CurrencyDefinition, Destination, ReserveTransfer, SafeMath, TransferFlags,
	PRICE_SCALE,
};
use seed_primitives::{Balance, CurrencyId};
use sp_runtime::{ArithmeticError, DispatchError, FixedPointNumber, FixedU128};
use sp_std::{collections::btree_map::BTreeMap, prelude::*};

/// Fixed-point price type shared with the rest of the workspace's AMM code.
pub type Price = FixedU128;

/// A numerator/denominator fee rate, matching `Config::GetExchangeFee`'s `(u32, u32)` encoding
/// elsewhere in this workspace, to avoid internal floating-point division.
pub type FeeRate = (u32, u32);

/// `amount * numerator / denominator`, checked.
pub fn calculate_conversion_fee(amount: Balance, rate: FeeRate) -> Result<Balance, DispatchError> {
	let (num, denom) = rate;
	if denom == 0 {
		return Err(ArithmeticError::DivisionByZero.into())
	}
	amount
		.checked_mul(num as Balance)
		.and_then(|v| v.checked_div(denom as Balance))
		.ok_or_else(|| ArithmeticError::Overflow.into())
}

/// Index of `currency_id` within a `CoinbaseCurrencyState`'s parallel reserve arrays.
fn reserve_index(state: &CoinbaseCurrencyState, currency_id: seed_primitives::CurrencyId) -> Option<usize> {
	state.currencies.iter().position(|c| *c == currency_id)
}

/// Converts `amount` of `from` into the fractional currency's primary token, at the reserve
/// basket's current weighted price: `primary_out = amount * weight / reserve_price(from)`.
///
/// This mirrors the single-leg Bancor conversion formula: the reserve ratio moves the price
/// along the bonding curve, so repeated small conversions approximate one large conversion only
/// up to the curve's convexity - callers performing multi-leg conversions must re-price each
/// leg against the post-conversion reserve state, never the pre-conversion one.
pub fn convert_to_primary(
	state: &CoinbaseCurrencyState,
	from: seed_primitives::CurrencyId,
	amount: Balance,
) -> Result<Balance, DispatchError> {
	let idx = reserve_index(state, from).ok_or(DispatchError::Other("unknown reserve currency"))?;
	let reserve = state.reserves.get(idx).copied().unwrap_or_default();
	let weight = state.weights.get(idx).copied().unwrap_or_default();
	if reserve == 0 || weight == 0 {
		return Err(DispatchError::Other("reserve not yet priced"))
	}
	let price = Price::checked_from_rational(reserve, weight as Balance)
		.ok_or::<DispatchError>(ArithmeticError::Overflow.into())?;
	let amount_fp = Price::checked_from_integer(amount).ok_or::<DispatchError>(ArithmeticError::Overflow.into())?;
	let out = amount_fp
		.checked_div(&price)
		.ok_or::<DispatchError>(ArithmeticError::DivisionByZero.into())?;
	Ok(out.into_inner() / Price::accuracy())
}

/// Converts `amount` of the fractional currency's primary token back into reserve `to`, at the
/// reserve basket's current weighted price: `reserve_out = amount * reserve_price(to) / weight`.
pub fn convert_from_primary(
	state: &CoinbaseCurrencyState,
	to: seed_primitives::CurrencyId,
	amount: Balance,
) -> Result<Balance, DispatchError> {
	let idx = reserve_index(state, to).ok_or(DispatchError::Other("unknown reserve currency"))?;
	let reserve = state.reserves.get(idx).copied().unwrap_or_default();
	let weight = state.weights.get(idx).copied().unwrap_or_default();
	if reserve == 0 || weight == 0 {
		return Err(DispatchError::Other("reserve not yet priced"))
	}
	let price = Price::checked_from_rational(reserve, weight as Balance)
		.ok_or::<DispatchError>(ArithmeticError::Overflow.into())?;
	let amount_fp = Price::checked_from_integer(amount).ok_or::<DispatchError>(ArithmeticError::Overflow.into())?;
	let out = amount_fp
		.checked_mul(&price)
		.ok_or::<DispatchError>(ArithmeticError::Overflow.into())?;
	Ok(out.into_inner() / Price::accuracy())
}

/// Renormalizes reserve weights so they sum back to `PRICE_SCALE` after a governance-gated
/// mint/burn-change-weight operation. Reachable only through the dedicated extrinsic, never
/// from the import path, so centralized currencies cannot silently reweight themselves.
pub fn renormalize_weights(weights: &mut [u32]) -> Result<(), DispatchError> {
	let total: u64 = weights.iter().map(|w| *w as u64).sum();
	if total == 0 {
		return Err(DispatchError::Other("cannot renormalize a zero-weight basket"))
	}
	for w in weights.iter_mut() {
		*w = ((*w as u64) * (PRICE_SCALE as u64) / total) as u32;
	}
	Ok(())
}

/// Pays out each transfer's reserve leg(s) directly, at 1:1, with no conversion: used for
/// centralized (non-fractional) currencies and for refunded pre-launch deposits, neither of which
/// prices against the reserve basket.
pub fn passthrough_outputs<AccountId: Clone>(
	transfers: &[ReserveTransfer<AccountId>],
) -> Vec<(Destination<AccountId>, CurrencyId, Balance)> {
	let mut outputs = Vec::new();
	for transfer in transfers {
		for (currency_id, amount) in &transfer.reserve_values {
			outputs.push((transfer.destination.primary.clone(), *currency_id, *amount));
		}
	}
	outputs
}

/// `AddReserveTransferImportOutputs`: batch-prices an entire import's worth of reserve transfers
/// against a fractional currency's reserve basket in two passes, mutating `state` in place and
/// returning the primary-currency payout owed to each transfer's destination.
///
/// Pass one accumulates every transfer's reserve-in by currency and applies the aggregate to
/// `state.reserves`/`state.reserve_in`, moving the reserve basket to its post-batch level. Pass
/// two prices every individual transfer's reserve leg at the average of the pre- and post-batch
/// reserve price for that currency - the same average-price rule the single-leg
/// `convert_to_primary`/`convert_from_primary` helpers document as required once multiple
/// conversions land against the same reserve in one step. A transfer carrying `PRECONVERT` is
/// priced instead at its currency definition's declared `launch_conversion_price`, never the live
/// basket price, per the pre-launch pricing rule.
pub fn add_reserve_transfer_import_outputs<AccountId: Clone>(
	state: &mut CoinbaseCurrencyState,
	definition: &CurrencyDefinition<AccountId>,
	transfers: &[ReserveTransfer<AccountId>],
) -> Result<Vec<(Destination<AccountId>, CurrencyId, Balance)>, DispatchError> {
	let mut reserve_in: BTreeMap<CurrencyId, Balance> = BTreeMap::new();
	for transfer in transfers {
		for (currency_id, amount) in &transfer.reserve_values {
			let entry = reserve_in.entry(*currency_id).or_insert(0);
			*entry = entry.safe_add(*amount)?;
		}
	}

	let pre_reserves = state.reserves.clone();
	for (currency_id, amount) in &reserve_in {
		if let Some(idx) = reserve_index(state, *currency_id) {
			state.reserves[idx] = state.reserves[idx].saturating_add(*amount);
			if let Some(slot) = state.reserve_in.get_mut(idx) {
				*slot = slot.saturating_add(*amount);
			}
		}
	}

	let mut outputs = Vec::new();
	let mut total_primary_minted: Balance = 0;
	for transfer in transfers {
		let at_launch_price = transfer.flags.has(TransferFlags::PRECONVERT);
		for (currency_id, amount) in &transfer.reserve_values {
			let primary_out = if at_launch_price {
				let launch_price = definition
					.reserves
					.iter()
					.find(|r| r.currency_id == *currency_id)
					.map(|r| r.launch_conversion_price)
					.unwrap_or(0);
				if launch_price == 0 {
					0
				} else {
					amount.saturating_mul(PRICE_SCALE) / launch_price
				}
			} else {
				let Some(idx) = reserve_index(state, *currency_id) else { continue };
				let pre = pre_reserves.get(idx).copied().unwrap_or_default();
				let post = state.reserves.get(idx).copied().unwrap_or_default();
				let avg_reserve = pre.saturating_add(post) / 2;
				let weight = state.weights.get(idx).copied().unwrap_or_default();
				if avg_reserve == 0 || weight == 0 {
					0
				} else {
					let price = Price::checked_from_rational(avg_reserve, weight as Balance)
						.ok_or::<DispatchError>(ArithmeticError::Overflow.into())?;
					let amount_fp = Price::checked_from_integer(*amount)
						.ok_or::<DispatchError>(ArithmeticError::Overflow.into())?;
					let out = amount_fp
						.checked_div(&price)
						.ok_or::<DispatchError>(ArithmeticError::DivisionByZero.into())?;
					out.into_inner() / Price::accuracy()
				}
			};
			total_primary_minted = total_primary_minted.saturating_add(primary_out);
			outputs.push((transfer.destination.primary.clone(), definition.id, primary_out));
		}
	}
	state.supply = state.supply.saturating_add(total_primary_minted);
	state.primary_currency_out =
		state.primary_currency_out.saturating_add(total_primary_minted as i64);
	Ok(outputs)
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::types::CurrencyStateFlags;
	use sp_core::H160;

	fn state() -> CoinbaseCurrencyState {
		CoinbaseCurrencyState {
			currencies: vec![H160::from_low_u64_be(1), H160::from_low_u64_be(2)],
			reserves: vec![1_000_000, 2_000_000],
			reserve_in: vec![0, 0],
			reserve_out: vec![0, 0],
			primary_currency_out: 0,
			primary_currency_in: 0,
			primary_currency_fees: 0,
			supply: 10_000_000,
			weights: vec![500_000_000, 500_000_000],
			prior_weights: vec![500_000_000, 500_000_000],
			conversion_price: vec![0, 0],
			via_conversion_price: vec![0, 0],
			fees: vec![0, 0],
			conversion_fees: vec![0, 0],
			emitted: 0,
			flags: CurrencyStateFlags(CurrencyStateFlags::LAUNCHCOMPLETE),
		}
	}

	#[test]
	fn convert_to_and_from_primary_round_trips_within_rounding() {
		let s = state();
		let primary = convert_to_primary(&s, H160::from_low_u64_be(1), 1_000).unwrap();
		assert!(primary > 0);
		let back = convert_from_primary(&s, H160::from_low_u64_be(1), primary).unwrap();
		assert!(back <= 1_000 && back > 0);
	}

	#[test]
	fn conversion_fee_is_linear() {
		assert_eq!(calculate_conversion_fee(1_000_000, (3, 1000)).unwrap(), 3_000);
	}

	#[test]
	fn renormalize_restores_unit_sum() {
		let mut weights = vec![400_000_000u32, 400_000_000u32];
		renormalize_weights(&mut weights).unwrap();
		let total: u64 = weights.iter().map(|w| *w as u64).sum();
		assert_eq!(total, PRICE_SCALE as u64);
	}

	fn reserve_transfer(
		flags: TransferFlags,
		currency_id: CurrencyId,
		amount: Balance,
		destination: AccountId,
	) -> ReserveTransfer<AccountId> {
		ReserveTransfer {
			flags,
			fee_currency_id: currency_id,
			fees: 0,
			reserve_values: vec![(currency_id, amount)],
			dest_currency_id: H160::from_low_u64_be(9),
			dest_system_id: H160::from_low_u64_be(9),
			second_reserve_id: None,
			destination: crate::types::TransferDestination {
				primary: Destination::Account(destination),
				aux: vec![],
				next_leg_gateway: None,
			},
			source_height: 0,
			source_tx_index: 0,
			source_output_index: 0,
		}
	}

	type AccountId = u64;

	fn definition() -> CurrencyDefinition<AccountId> {
		CurrencyDefinition {
			id: H160::from_low_u64_be(9),
			parent: None,
			system_id: H160::from_low_u64_be(1),
			launch_system_id: H160::from_low_u64_be(1),
			gateway_id: None,
			options: crate::types::CurrencyOptions(crate::types::CurrencyOptions::FRACTIONAL),
			reserves: vec![crate::types::ReserveEntry {
				currency_id: H160::from_low_u64_be(1),
				weight_ppb: 500_000_000,
				launch_conversion_price: PRICE_SCALE,
				min_preconvert: 0,
				max_preconvert: Balance::MAX,
			}],
			pre_allocation: vec![],
			gateway_converter_issuance: 0,
			start_block: 0,
			end_block: 0,
			initial_fractional_supply: 0,
			proof_protocol: crate::types::ProofProtocol::PBaaSMMR,
		}
	}

	#[test]
	fn batch_outputs_price_at_average_of_pre_and_post_reserve() {
		let mut s = state();
		let transfers =
			vec![reserve_transfer(TransferFlags(0), H160::from_low_u64_be(1), 10_000, 42u64)];
		let outputs = add_reserve_transfer_import_outputs(&mut s, &definition(), &transfers).unwrap();
		assert_eq!(outputs.len(), 1);
		assert!(outputs[0].2 > 0);
		assert_eq!(s.reserves[0], 1_010_000);
		assert!(s.supply > 10_000_000);
	}

	#[test]
	fn preconvert_transfers_price_at_declared_launch_price_not_live_price() {
		let mut s = state();
		s.reserves[0] = 0;
		let transfers = vec![reserve_transfer(
			TransferFlags(TransferFlags::PRECONVERT),
			H160::from_low_u64_be(1),
			1_000,
			42u64,
		)];
		let outputs = add_reserve_transfer_import_outputs(&mut s, &definition(), &transfers).unwrap();
		// launch_conversion_price == PRICE_SCALE here, so payout == amount exactly.
		assert_eq!(outputs[0].2, 1_000);
	}

	#[test]
	fn passthrough_pays_each_reserve_leg_one_to_one() {
		let transfers =
			vec![reserve_transfer(TransferFlags(0), H160::from_low_u64_be(1), 5_000, 42u64)];
		let outputs = passthrough_outputs(&transfers);
		assert_eq!(outputs, vec![(Destination::Account(42u64), H160::from_low_u64_be(1), 5_000)]);
	}
}
