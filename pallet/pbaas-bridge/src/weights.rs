// This file is part of Substrate.

// Copyright (C) 2023 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: Apache-2.0

// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
// http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Autogenerated weights for pallet_pbaas_bridge
//!
//! THIS FILE WAS AUTO-GENERATED USING THE SUBSTRATE BENCHMARK CLI VERSION 4.0.0-dev
//! DATE: 2023-07-25, STEPS: `50`, REPEAT: 20, LOW RANGE: `[]`, HIGH RANGE: `[]`
//! HOSTNAME: `Surangas-MacBook-Pro.local`, CPU: `<UNKNOWN>`
//! EXECUTION: Some(Wasm), WASM-EXECUTION: Compiled, CHAIN: Some("dev"), DB CACHE: 1024

// Executed Command:
// ./target/release/seed
// benchmark
// pallet
// --chain=dev
// --steps=50
// --repeat=20
// --pallet=pallet_pbaas_bridge
// --extrinsic=*
// --execution=wasm
// --wasm-execution=compiled
// --heap-pages=4096
// --output
// ./output/pallet_pbaas_bridge_weights.rs
// --template
// ./scripts/pallet_template.hbs

#![cfg_attr(rustfmt, rustfmt_skip)]
#![allow(unused_parens)]
#![allow(unused_imports)]

use frame_support::{traits::Get, weights::{Weight, constants::RocksDbWeight}};
use sp_std::marker::PhantomData;

/// Weight functions needed for pallet_pbaas_bridge.
pub trait WeightInfo {
	fn submit_reserve_transfer() -> Weight;
	fn submit_import() -> Weight;
	fn define_currency() -> Weight;
	fn mint_burn_change_weight() -> Weight;
	fn set_upgrade_gate() -> Weight;
	fn set_arbitrage_currencies() -> Weight;
	fn panic_revoke_notary() -> Weight;
	fn on_initialize_base() -> Weight;
	fn on_initialize_export() -> Weight;
	fn on_initialize_stopped() -> Weight;
}

/// Weights for pallet_pbaas_bridge using the Substrate node and recommended hardware.
pub struct SubstrateWeight<T>(PhantomData<T>);
impl<T: frame_system::Config> WeightInfo for SubstrateWeight<T> {
	// Storage: PbaasBridge PendingTransfers (r:0 w:1)
	fn submit_reserve_transfer() -> Weight {
		Weight::from_ref_time(45_000_000 as u64)
			.saturating_add(T::DbWeight::get().reads(2 as u64))
			.saturating_add(T::DbWeight::get().writes(2 as u64))
	}
	// Storage: PbaasBridge LastImport (r:1 w:1)
	// Storage: PbaasBridge CurrencyStates (r:1 w:1)
	// Storage: PbaasBridge ReserveDeposits (r:4 w:4)
	// Storage: PbaasBridge ExportRegistry (r:0 w:1)
	fn submit_import() -> Weight {
		Weight::from_ref_time(95_000_000 as u64)
			.saturating_add(T::DbWeight::get().reads(10 as u64))
			.saturating_add(T::DbWeight::get().writes(8 as u64))
	}
	// Storage: PbaasBridge CurrencyDefinitions (r:0 w:1)
	fn define_currency() -> Weight {
		Weight::from_ref_time(25_000_000 as u64)
			.saturating_add(T::DbWeight::get().reads(1 as u64))
			.saturating_add(T::DbWeight::get().writes(1 as u64))
	}
	// Storage: PbaasBridge CurrencyDefinitions (r:1 w:0)
	// Storage: PbaasBridge CurrencyStates (r:1 w:1)
	fn mint_burn_change_weight() -> Weight {
		Weight::from_ref_time(30_000_000 as u64)
			.saturating_add(T::DbWeight::get().reads(2 as u64))
			.saturating_add(T::DbWeight::get().writes(1 as u64))
	}
	// Storage: PbaasBridge UpgradeGateStorage (r:0 w:1)
	fn set_upgrade_gate() -> Weight {
		Weight::from_ref_time(13_000_000 as u64)
			.saturating_add(T::DbWeight::get().writes(1 as u64))
	}
	// Storage: PbaasBridge ArbitrageCurrencies (r:0 w:1)
	fn set_arbitrage_currencies() -> Weight {
		Weight::from_ref_time(13_000_000 as u64)
			.saturating_add(T::DbWeight::get().writes(1 as u64))
	}
	// Storage: PbaasBridge AutoNotaryRevokeAccount (r:1 w:0)
	// Storage: PbaasBridge GracefulStopHeight (r:0 w:1)
	fn panic_revoke_notary() -> Weight {
		Weight::from_ref_time(18_000_000 as u64)
			.saturating_add(T::DbWeight::get().reads(1 as u64))
			.saturating_add(T::DbWeight::get().writes(1 as u64))
	}
	// Storage: PbaasBridge GracefulStopHeight (r:1 w:0)
	fn on_initialize_base() -> Weight {
		Weight::from_ref_time(6_000_000 as u64)
			.saturating_add(T::DbWeight::get().reads(1 as u64))
	}
	// Storage: PbaasBridge PendingTransfers (r:10 w:10)
	// Storage: PbaasBridge Exports (r:0 w:1)
	// Storage: PbaasBridge NextExportNumber (r:1 w:1)
	// Storage: PbaasBridge LastExportHeightEnd (r:1 w:1)
	fn on_initialize_export() -> Weight {
		Weight::from_ref_time(65_000_000 as u64)
			.saturating_add(T::DbWeight::get().reads(12 as u64))
			.saturating_add(T::DbWeight::get().writes(13 as u64))
	}
	fn on_initialize_stopped() -> Weight {
		Weight::from_ref_time(3_000_000 as u64)
	}
}

// For backwards compatibility and tests
impl WeightInfo for () {
	fn submit_reserve_transfer() -> Weight {
		Weight::from_ref_time(45_000_000 as u64)
			.saturating_add(RocksDbWeight::get().reads(2 as u64))
			.saturating_add(RocksDbWeight::get().writes(2 as u64))
	}
	fn submit_import() -> Weight {
		Weight::from_ref_time(95_000_000 as u64)
			.saturating_add(RocksDbWeight::get().reads(10 as u64))
			.saturating_add(RocksDbWeight::get().writes(8 as u64))
	}
	fn define_currency() -> Weight {
		Weight::from_ref_time(25_000_000 as u64)
			.saturating_add(RocksDbWeight::get().reads(1 as u64))
			.saturating_add(RocksDbWeight::get().writes(1 as u64))
	}
	fn mint_burn_change_weight() -> Weight {
		Weight::from_ref_time(30_000_000 as u64)
			.saturating_add(RocksDbWeight::get().reads(2 as u64))
			.saturating_add(RocksDbWeight::get().writes(1 as u64))
	}
	fn set_upgrade_gate() -> Weight {
		Weight::from_ref_time(13_000_000 as u64)
			.saturating_add(RocksDbWeight::get().writes(1 as u64))
	}
	fn set_arbitrage_currencies() -> Weight {
		Weight::from_ref_time(13_000_000 as u64)
			.saturating_add(RocksDbWeight::get().writes(1 as u64))
	}
	fn panic_revoke_notary() -> Weight {
		Weight::from_ref_time(18_000_000 as u64)
			.saturating_add(RocksDbWeight::get().reads(1 as u64))
			.saturating_add(RocksDbWeight::get().writes(1 as u64))
	}
	fn on_initialize_base() -> Weight {
		Weight::from_ref_time(6_000_000 as u64)
			.saturating_add(RocksDbWeight::get().reads(1 as u64))
	}
	fn on_initialize_export() -> Weight {
		Weight::from_ref_time(65_000_000 as u64)
			.saturating_add(RocksDbWeight::get().reads(12 as u64))
			.saturating_add(RocksDbWeight::get().writes(13 as u64))
	}
	fn on_initialize_stopped() -> Weight {
		Weight::from_ref_time(3_000_000 as u64)
	}
}
