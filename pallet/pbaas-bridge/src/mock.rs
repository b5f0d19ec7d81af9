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

#![cfg(test)]

use crate::{self as pallet_pbaas_bridge, arbitrage::ArbitrageOfferBook, BlockEntropySource, Config};
use frame_support::{construct_runtime, parameter_types, PalletId};
use frame_system::EnsureRoot;
use seed_primitives::{AssetId, Balance, CurrencyId, SystemId};
use sp_core::{H160, H256};
use sp_runtime::{
	testing::Header,
	traits::{BlakeTwo256, IdentityLookup},
};

pub type MockAccountId = u64;

pub const ALICE: MockAccountId = 1;
pub const BOB: MockAccountId = 2;

/// Builds a `CurrencyId` from a single repeated byte, for terse test fixtures.
pub fn currency(byte: u8) -> CurrencyId {
	H160::repeat_byte(byte)
}

/// Builds a `SystemId` from a single repeated byte, for terse test fixtures.
pub fn system(byte: u8) -> SystemId {
	H160::repeat_byte(byte)
}

type UncheckedExtrinsic = frame_system::mocking::MockUncheckedExtrinsic<TestRuntime>;
type Block = frame_system::mocking::MockBlock<TestRuntime>;

construct_runtime!(
	pub enum TestRuntime where
		Block = Block,
		NodeBlock = Block,
		UncheckedExtrinsic = UncheckedExtrinsic,
	{
		System: frame_system::{Pallet, Call, Config, Storage, Event<T>},
		Balances: pallet_balances::{Pallet, Call, Storage, Config<T>, Event<T>},
		Assets: pallet_assets::{Pallet, Storage, Config<T>, Event<T>},
		AssetsExt: pallet_assets_ext::{Pallet, Storage, Event<T>},
		PbaasBridge: pallet_pbaas_bridge::{Pallet, Call, Storage, Event<T>},
	}
);

parameter_types! {
	pub const BlockHashCount: u64 = 250;
}
impl frame_system::Config for TestRuntime {
	type BaseCallFilter = frame_support::traits::Everything;
	type Origin = Origin;
	type Index = u64;
	type BlockNumber = u64;
	type Call = Call;
	type Hash = H256;
	type Hashing = BlakeTwo256;
	type AccountId = MockAccountId;
	type Lookup = IdentityLookup<Self::AccountId>;
	type Header = Header;
	type Event = Event;
	type BlockHashCount = BlockHashCount;
	type BlockLength = ();
	type BlockWeights = ();
	type DbWeight = ();
	type Version = ();
	type PalletInfo = PalletInfo;
	type AccountData = pallet_balances::AccountData<Balance>;
	type OnNewAccount = ();
	type OnKilledAccount = ();
	type SystemWeightInfo = ();
	type SS58Prefix = ();
	type OnSetCode = ();
	type MaxConsumers = frame_support::traits::ConstU32<16>;
}

parameter_types! {
	pub const MaxReserves: u32 = 50;
}
impl pallet_balances::Config for TestRuntime {
	type Balance = Balance;
	type DustRemoval = ();
	type Event = Event;
	type ExistentialDeposit = ();
	type AccountStore = System;
	type WeightInfo = ();
	type MaxLocks = ();
	type MaxReserves = MaxReserves;
	type ReserveIdentifier = [u8; 8];
}

parameter_types! {
	pub const AssetDeposit: Balance = 1_000_000;
	pub const AssetAccountDeposit: Balance = 16;
	pub const ApprovalDeposit: Balance = 1;
	pub const AssetsStringLimit: u32 = 50;
	pub const MetadataDepositBase: Balance = 68;
	pub const MetadataDepositPerByte: Balance = 1;
}
impl pallet_assets::Config for TestRuntime {
	type Event = Event;
	type Balance = Balance;
	type AssetId = AssetId;
	type Currency = Balances;
	type ForceOrigin = EnsureRoot<MockAccountId>;
	type AssetDeposit = AssetDeposit;
	type AssetAccountDeposit = AssetAccountDeposit;
	type MetadataDepositBase = MetadataDepositBase;
	type MetadataDepositPerByte = MetadataDepositPerByte;
	type ApprovalDeposit = ApprovalDeposit;
	type StringLimit = AssetsStringLimit;
	type Freezer = ();
	type Extra = ();
	type WeightInfo = ();
}

parameter_types! {
	pub const NativeAssetId: AssetId = 1;
	pub const AssetsExtPalletId: PalletId = PalletId(*b"assetext");
	pub const MaxHolds: u32 = 16;
	pub const TestParachainId: u32 = 100;
}
impl pallet_assets_ext::Config for TestRuntime {
	type Event = Event;
	type ParachainId = TestParachainId;
	type MaxHolds = MaxHolds;
	type NativeAssetId = NativeAssetId;
	type OnNewAssetSubscription = ();
	type PalletId = AssetsExtPalletId;
	type WeightInfo = ();
}

pub struct MockBlockEntropy;
impl BlockEntropySource for MockBlockEntropy {
	fn block_entropy(height: u32) -> H256 {
		H256::from_low_u64_be(height as u64)
	}
}

pub struct MockArbitrageBook;
impl ArbitrageOfferBook for MockArbitrageBook {
	fn best_offer(_from: CurrencyId, _to: CurrencyId, _amount: Balance) -> Option<Balance> {
		None
	}
}

parameter_types! {
	pub const PbaasBridgePalletId: PalletId = PalletId(*b"pbaasbrg");
	pub const ConversionFeeRate: (u32, u32) = (3, 1_000);
	pub const IdentityImportFee: Balance = 100;
	pub const CurrencyImportFee: Balance = 50;
	pub const CurrencyImportFeeNft: Balance = 75;
	pub const CrossChainTransferFee: Balance = 20;
	pub const TransferFee: Balance = 5;
	pub const BlockTimeSeconds: u64 = 4;
}
impl Config for TestRuntime {
	type Event = Event;
	type PalletId = PbaasBridgePalletId;
	type NativeAssetId = NativeAssetId;
	type ConversionFeeRate = ConversionFeeRate;
	type IdentityImportFee = IdentityImportFee;
	type CurrencyImportFee = CurrencyImportFee;
	type CurrencyImportFeeNft = CurrencyImportFeeNft;
	type CrossChainTransferFee = CrossChainTransferFee;
	type TransferFee = TransferFee;
	type BlockTimeSeconds = BlockTimeSeconds;
	type MultiCurrency = AssetsExt;
	type BlockEntropy = MockBlockEntropy;
	type NotaryRpc = ();
	type ProofAdapter = crate::proof::LocalProofAdapter;
	type ArbitrageBook = MockArbitrageBook;
	type WeightInfo = ();
}

#[derive(Clone, Default)]
pub struct ExtBuilder {
	endowed: Vec<(MockAccountId, Balance)>,
}

impl ExtBuilder {
	pub fn with_endowed(mut self, who: MockAccountId, amount: Balance) -> Self {
		self.endowed.push((who, amount));
		self
	}

	pub fn build(self) -> sp_io::TestExternalities {
		let mut ext = frame_system::GenesisConfig::default().build_storage::<TestRuntime>().unwrap();
		if !self.endowed.is_empty() {
			pallet_balances::GenesisConfig::<TestRuntime> { balances: self.endowed }
				.assimilate_storage(&mut ext)
				.unwrap();
		}
		let mut ext: sp_io::TestExternalities = ext.into();
		ext.execute_with(|| System::set_block_number(1));
		ext
	}
}
