#![cfg(feature = "runtime-benchmarks")]

use super::*;
use crate::types::{
	CurrencyDefinition, Destination, ProofProtocol, ReserveTransfer, TransferDestination,
	TransferFlags,
};
use crate::Pallet as PbaasBridge;
use frame_benchmarking::{account as bench_account, benchmarks, impl_benchmark_test_suite};
use frame_support::{assert_ok, traits::fungibles::Mutate};
use frame_system::RawOrigin;
use sp_std::prelude::*;

/// This is a helper function to get an account.
pub fn account<T: Config>(name: &'static str) -> T::AccountId {
	bench_account(name, 0, 0)
}

pub fn transfer_funds<T: Config>(account: &T::AccountId, asset_id: AssetId, amount: Balance) {
	assert_ok!(T::MultiCurrency::mint_into(asset_id, account, amount));
}

fn dest_currency<T: Config>() -> CurrencyId {
	CurrencyId::from_low_u64_be(42)
}

fn define_dest_currency<T: Config>() -> CurrencyId {
	let currency_id = dest_currency::<T>();
	let definition: CurrencyDefinition<T::AccountId> = CurrencyDefinition {
		id: currency_id,
		parent: None,
		system_id: SystemId::from_low_u64_be(1),
		launch_system_id: SystemId::from_low_u64_be(1),
		gateway_id: None,
		options: crate::types::CurrencyOptions(0),
		reserves: vec![],
		pre_allocation: vec![],
		gateway_converter_issuance: 0,
		start_block: 0,
		end_block: 0,
		initial_fractional_supply: 0,
		proof_protocol: ProofProtocol::ChainId,
	};
	CurrencyDefinitions::<T>::insert(currency_id, definition);
	currency_id
}

fn sample_transfer<T: Config>(who: &T::AccountId, dest_currency_id: CurrencyId) -> ReserveTransfer<T::AccountId> {
	ReserveTransfer {
		flags: TransferFlags(0),
		fee_currency_id: dest_currency_id,
		fees: 1,
		reserve_values: vec![(dest_currency_id, 100)],
		dest_currency_id,
		dest_system_id: SystemId::from_low_u64_be(1),
		second_reserve_id: None,
		destination: TransferDestination {
			primary: Destination::Account(who.clone()),
			aux: vec![],
			next_leg_gateway: None,
		},
		source_height: 0,
		source_tx_index: 0,
		source_output_index: 0,
	}
}

benchmarks! {
	submit_reserve_transfer {
		let caller = account::<T>("Alice");
		let dest_currency_id = define_dest_currency::<T>();
		let asset_id = PbaasBridge::<T>::asset_for_currency(dest_currency_id);
		transfer_funds::<T>(&caller, asset_id, 1_000);
		let transfer = sample_transfer::<T>(&caller, dest_currency_id);
	}: _(RawOrigin::Signed(caller), transfer)
	verify {
		assert_eq!(PendingTransfers::<T>::get(dest_currency_id, 0u32).len(), 1);
	}

	submit_import {
		let caller = account::<T>("Alice");
		let dest_currency_id = define_dest_currency::<T>();
		let export = crate::types::CrossChainExport {
			source_system_id: SystemId::from_low_u64_be(2),
			source_height_start: 0,
			source_height_end: 10,
			dest_system_id: SystemId::from_low_u64_be(1),
			dest_currency_id,
			first_input: 0,
			num_inputs: 1,
			total_amounts: vec![(dest_currency_id, 100)],
			total_fees: 1,
			total_burned: 0,
			hash_reserve_transfers: H256::zero(),
			exporter: Destination::Account(caller.clone()),
			flags: crate::types::ExportFlags(0),
			transfers: vec![],
		};
	}: _(RawOrigin::Signed(caller), export, None)
	verify {
		assert!(CurrencyStates::<T>::get(dest_currency_id).is_some());
	}

	define_currency {
		let currency_id = dest_currency::<T>();
		let definition: CurrencyDefinition<T::AccountId> = CurrencyDefinition {
			id: currency_id,
			parent: None,
			system_id: SystemId::from_low_u64_be(1),
			launch_system_id: SystemId::from_low_u64_be(1),
			gateway_id: None,
			options: crate::types::CurrencyOptions(0),
			reserves: vec![],
			pre_allocation: vec![],
			gateway_converter_issuance: 0,
			start_block: 0,
			end_block: 0,
			initial_fractional_supply: 0,
			proof_protocol: ProofProtocol::ChainId,
		};
	}: _(RawOrigin::Root, definition)
	verify {
		assert!(CurrencyDefinitions::<T>::get(currency_id).is_some());
	}

	mint_burn_change_weight {
		let currency_id = define_dest_currency::<T>();
		CurrencyStates::<T>::insert(currency_id, crate::types::CoinbaseCurrencyState {
			currencies: vec![],
			reserves: vec![],
			reserve_in: vec![],
			reserve_out: vec![],
			primary_currency_out: 0,
			primary_currency_in: 0,
			primary_currency_fees: 0,
			supply: 0,
			weights: vec![500_000_000, 500_000_000],
			prior_weights: vec![],
			conversion_price: vec![],
			via_conversion_price: vec![],
			fees: vec![],
			conversion_fees: vec![],
			emitted: 0,
			flags: crate::types::CurrencyStateFlags(0),
		});
	}: _(RawOrigin::Root, currency_id, vec![600_000_000, 400_000_000])
	verify {
		let state = CurrencyStates::<T>::get(currency_id).unwrap();
		assert_eq!(state.weights, vec![600_000_000, 400_000_000]);
	}

	set_upgrade_gate {
		let info = crate::upgrade::UpgradeInfo { disable_defi: true, disable_cross_chain: false, disable_gateway: false };
	}: _(RawOrigin::Root, info.clone())
	verify {
		assert_eq!(UpgradeGateStorage::<T>::get(), info);
	}

	set_arbitrage_currencies {
		let currencies = vec![dest_currency::<T>()];
	}: _(RawOrigin::Root, currencies.clone())
	verify {
		assert_eq!(ArbitrageCurrencies::<T>::get(), currencies);
	}

	panic_revoke_notary {
		let caller = account::<T>("Alice");
		AutoNotaryRevokeAccount::<T>::put(Some(caller.clone()));
	}: _(RawOrigin::Signed(caller))
	verify {
		assert!(GracefulStopHeight::<T>::get().is_some());
	}
}

impl_benchmark_test_suite!(
	PbaasBridge,
	crate::mock::ExtBuilder::default().build(),
	crate::mock::TestRuntime
);
