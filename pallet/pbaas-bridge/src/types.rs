/* Copyright 2021-2023 Centrality Investments Limited
 *
 * Licensed under the LGPL, Version 3.0 (the "License");
 * you may not use this file except in compliance with the License.
 * Unless required by applicable law or agreed to in writing, software
 * distributed under the License is distributed on an "AS IS" BASIS,
 * WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
 * See the License for the specific language governing permissions and
 * limitations under the License.
 * You may obtain a copy of the License at the root of this project source code,
 * or at:
 *     https://centrality.ai/licenses/gplv3.txt
 *     https://centrality.ai/licenses/lgplv3.txt
 */

//! Wire types for the cross-chain reserve bridge: currency definitions, reserve transfers,
//! exports, imports, notarized currency state, reserve deposits and proof evidence.

use codec::{Decode, Encode, MaxEncodedLen};
use scale_info::TypeInfo;
use seed_primitives::{Balance, CurrencyId, SystemId};
use sp_core::H256;
use sp_runtime::{ArithmeticError, DispatchError, RuntimeDebug};
use sp_std::{collections::btree_map::BTreeMap, prelude::*};

/// Checked math that returns a `DispatchError`, matching the `SafeMath` helper used across
/// this workspace's AMM code.
pub trait SafeMath {
	type Output;
	fn safe_add(&self, rhs: Self::Output) -> Result<Self::Output, DispatchError>;
	fn safe_sub(&self, rhs: Self::Output) -> Result<Self::Output, DispatchError>;
	fn safe_mul(&self, rhs: Self::Output) -> Result<Self::Output, DispatchError>;
	fn safe_div(&self, rhs: Self::Output) -> Result<Self::Output, DispatchError>;
}

macro_rules! safe_math {
	($type: ident) => {
		impl SafeMath for $type {
			type Output = $type;
			fn safe_add(&self, rhs: Self::Output) -> Result<Self::Output, DispatchError> {
				self.checked_add(rhs).ok_or_else(|| ArithmeticError::Overflow.into())
			}
			fn safe_sub(&self, rhs: Self::Output) -> Result<Self::Output, DispatchError> {
				self.checked_sub(rhs).ok_or_else(|| ArithmeticError::Underflow.into())
			}
			fn safe_mul(&self, rhs: Self::Output) -> Result<Self::Output, DispatchError> {
				self.checked_mul(rhs).ok_or_else(|| ArithmeticError::Overflow.into())
			}
			fn safe_div(&self, rhs: Self::Output) -> Result<Self::Output, DispatchError> {
				self.checked_div(rhs).ok_or_else(|| ArithmeticError::DivisionByZero.into())
			}
		}
	};
}
safe_math!(u64);
safe_math!(i64);
safe_math!(u128);

/// Serialization size ceilings.
pub const MAX_NORMAL_TRANSFER_SIZE: u32 = 1024;
pub const MAX_CURRENCYEXPORT_SIZE: u32 = 4096;
pub const MAX_IDENTITYEXPORT_SIZE: u32 = 4096;

/// Per-block/per-export aggregation thresholds.
pub const MIN_INPUTS: u32 = 10;
pub const MIN_BLOCKS: u32 = 10;
pub const MAX_EXPORT_INPUTS: u32 = 50;

/// Cross-system notarization freshness bound before the bridge auto-pauses.
pub const MAX_NOTARIZATION_DELAY_BLOCKS: u32 = 2 * 24 * 60 * 60 / 4;

/// Cross-chain fee-adequacy pricing window bound: 40 minutes or 50 blocks, whichever is smaller.
pub const MAX_FEE_WINDOW_SECONDS: u64 = 40 * 60;
pub const MAX_FEE_WINDOW_BLOCKS: u32 = 50;

/// Domain separators mixed into transfer-hash and lottery-entropy hashing. Protocol constants:
/// every validator must use the same bytes, so these are fixed rather than re-derived.
pub const TRANSFER_HASH_DOMAIN: [u8; 12] = *b"pbaas-xfer01";
pub const ENTROPY_HASH_DOMAIN: [u8; 12] = *b"pbaas-lotto1";

/// Fixed-point scale for prices and reserve weights (1.0 == `PRICE_SCALE`).
pub const PRICE_SCALE: u128 = 1_000_000_000;

/// Bitset of currency definition options.
#[derive(Clone, Copy, PartialEq, Eq, Encode, Decode, RuntimeDebug, TypeInfo, MaxEncodedLen)]
pub struct CurrencyOptions(pub u32);

impl CurrencyOptions {
	pub const FRACTIONAL: u32 = 1 << 0;
	pub const TOKEN: u32 = 1 << 1;
	pub const PBAAS_CHAIN: u32 = 1 << 2;
	pub const GATEWAY: u32 = 1 << 3;
	pub const GATEWAY_CONVERTER: u32 = 1 << 4;
	pub const NAME_CONTROLLER: u32 = 1 << 5;
	pub const NFT_TOKEN: u32 = 1 << 6;

	pub fn has(&self, bit: u32) -> bool {
		self.0 & bit != 0
	}
	pub fn is_fractional(&self) -> bool {
		self.has(Self::FRACTIONAL)
	}
	pub fn is_gateway_converter(&self) -> bool {
		self.has(Self::GATEWAY_CONVERTER)
	}
}

/// How a centralized (non-PBaaS) currency's issuance is proven.
#[derive(Clone, Copy, PartialEq, Eq, Encode, Decode, RuntimeDebug, TypeInfo, MaxEncodedLen)]
pub enum ProofProtocol {
	/// PBaaS merkle mountain range proofs between sibling chains.
	PBaaSMMR,
	/// Ethereum-style state-root notarization.
	ETHNotarization,
	/// Centralized, single-controller issuance (mint/burn authorized directly).
	ChainId,
}

/// One entry of a fractional currency's reserve basket: the reserve currency, its normalized
/// weight (parts per `PRICE_SCALE` of 1.0), and pre-launch conversion bounds.
#[derive(Clone, PartialEq, Eq, Encode, Decode, RuntimeDebug, TypeInfo, MaxEncodedLen)]
pub struct ReserveEntry {
	pub currency_id: CurrencyId,
	pub weight_ppb: u32,
	pub launch_conversion_price: u128,
	pub min_preconvert: Balance,
	pub max_preconvert: Balance,
}

/// A currency definition.
#[derive(Clone, PartialEq, Eq, Encode, Decode, RuntimeDebug, TypeInfo)]
pub struct CurrencyDefinition<AccountId> {
	pub id: CurrencyId,
	pub parent: Option<CurrencyId>,
	pub system_id: SystemId,
	pub launch_system_id: SystemId,
	pub gateway_id: Option<SystemId>,
	pub options: CurrencyOptions,
	pub reserves: Vec<ReserveEntry>,
	pub pre_allocation: Vec<(AccountId, Balance)>,
	pub gateway_converter_issuance: Balance,
	pub start_block: u32,
	pub end_block: u32,
	pub initial_fractional_supply: Balance,
	pub proof_protocol: ProofProtocol,
}

impl<AccountId> CurrencyDefinition<AccountId> {
	/// A fractional currency must declare at least one reserve and its weights must sum to 1.0.
	pub fn validate(&self) -> Result<(), &'static str> {
		if self.options.is_fractional() {
			if self.reserves.is_empty() {
				return Err("fractional currency must declare at least one reserve")
			}
			let total_weight: u64 = self.reserves.iter().map(|r| r.weight_ppb as u64).sum();
			if total_weight != PRICE_SCALE as u64 {
				return Err("reserve weights must sum to 1.0")
			}
		}
		Ok(())
	}
}

/// Bitset of `ReserveTransfer` flags.
#[derive(Clone, Copy, PartialEq, Eq, Encode, Decode, RuntimeDebug, TypeInfo, MaxEncodedLen)]
pub struct TransferFlags(pub u32);

impl TransferFlags {
	pub const PRECONVERT: u32 = 1 << 0;
	pub const BURN_CHANGE_PRICE: u32 = 1 << 1;
	pub const MINT_CURRENCY: u32 = 1 << 2;
	pub const CROSS_SYSTEM: u32 = 1 << 3;
	pub const IMPORT_TO_SOURCE: u32 = 1 << 4;
	pub const RESERVE_TO_RESERVE: u32 = 1 << 5;
	pub const CURRENCY_EXPORT: u32 = 1 << 6;
	pub const IDENTITY_EXPORT: u32 = 1 << 7;
	pub const ARBITRAGE_ONLY: u32 = 1 << 8;
	pub const HAS_NEXT_LEG: u32 = 1 << 9;

	pub fn has(&self, bit: u32) -> bool {
		self.0 & bit != 0
	}

	/// Arbitrage-only transfers cannot coexist with export/cross-system/conversion flags.
	pub fn is_internally_consistent(&self) -> bool {
		if self.has(Self::ARBITRAGE_ONLY) {
			let incompatible = Self::CURRENCY_EXPORT |
				Self::IDENTITY_EXPORT |
				Self::CROSS_SYSTEM |
				Self::RESERVE_TO_RESERVE |
				Self::PRECONVERT;
			if self.0 & incompatible != 0 {
				return false
			}
		}
		true
	}
}

/// A typed transfer recipient.
#[derive(Clone, PartialEq, Eq, Encode, Decode, RuntimeDebug, TypeInfo)]
pub enum Destination<AccountId> {
	/// A plain account on the destination system.
	Account(AccountId),
	/// A raw 20-byte address, used for gateway (non-PBaaS) destinations.
	Raw([u8; 20]),
	/// The service (eval-key) pseudo-destination; never a valid fee-lottery recipient.
	Service,
	/// An index-type (multisig/threshold) destination; never a valid fee-lottery recipient.
	Index(Vec<AccountId>, u8),
}

impl<AccountId> Destination<AccountId> {
	/// The fee-lottery recipient must not be the service pseudo-destination or an index-type
	/// destination.
	pub fn is_eligible_fee_recipient(&self) -> bool {
		!matches!(self, Destination::Service | Destination::Index(..))
	}
}

/// A typed transfer destination, with fallback auxiliary destinations and an optional next-leg
/// gateway for multi-hop transfers.
#[derive(Clone, PartialEq, Eq, Encode, Decode, RuntimeDebug, TypeInfo)]
pub struct TransferDestination<AccountId> {
	pub primary: Destination<AccountId>,
	pub aux: Vec<Destination<AccountId>>,
	pub next_leg_gateway: Option<SystemId>,
}

impl<AccountId: PartialEq> TransferDestination<AccountId> {
	/// Fee-recipient equivalence checks both the primary and auxiliary destinations.
	pub fn matches(&self, other: &Destination<AccountId>) -> bool {
		&self.primary == other || self.aux.iter().any(|d| d == other)
	}
}

/// The atomic, immutable user-level transfer record.
#[derive(Clone, PartialEq, Eq, Encode, Decode, RuntimeDebug, TypeInfo)]
pub struct ReserveTransfer<AccountId> {
	pub flags: TransferFlags,
	pub fee_currency_id: CurrencyId,
	pub fees: Balance,
	/// currency -> amount; one entry normally, two for reserve-to-reserve conversion.
	pub reserve_values: Vec<(CurrencyId, Balance)>,
	pub dest_currency_id: CurrencyId,
	pub dest_system_id: SystemId,
	pub second_reserve_id: Option<CurrencyId>,
	pub destination: TransferDestination<AccountId>,
	/// Source ordering key, used only to sort transfers inside `hash_reserve_transfers`.
	pub source_height: u32,
	pub source_tx_index: u32,
	pub source_output_index: u32,
}

impl<AccountId> ReserveTransfer<AccountId> {
	/// Total currency moved out of the source system: every reserve leg plus the fee leg.
	pub fn total_currency_out(&self) -> Result<BTreeMap<CurrencyId, Balance>, DispatchError> {
		let mut totals: BTreeMap<CurrencyId, Balance> = BTreeMap::new();
		for (currency_id, amount) in &self.reserve_values {
			let entry = totals.entry(*currency_id).or_insert(0);
			*entry = entry.safe_add(*amount)?;
		}
		let entry = totals.entry(self.fee_currency_id).or_insert(0);
		*entry = entry.safe_add(self.fees)?;
		Ok(totals)
	}

	pub fn is_import_to_source(&self) -> bool {
		self.flags.has(TransferFlags::IMPORT_TO_SOURCE)
	}

	/// The transfer's unambiguous target currency, honoring `IMPORT_TO_SOURCE`.
	pub fn target_currency(&self) -> CurrencyId {
		if self.is_import_to_source() {
			self.reserve_values.first().map(|(c, _)| *c).unwrap_or(self.dest_currency_id)
		} else {
			self.dest_currency_id
		}
	}

	/// Validated at creation and again at export admission.
	pub fn validate(&self, encoded_len: usize) -> Result<(), &'static str> {
		if !self.flags.is_internally_consistent() {
			return Err("arbitrage transfer cannot combine with export/cross-system/conversion flags")
		}
		let max_size = if self.flags.has(TransferFlags::CURRENCY_EXPORT) {
			MAX_CURRENCYEXPORT_SIZE
		} else if self.flags.has(TransferFlags::IDENTITY_EXPORT) {
			MAX_IDENTITYEXPORT_SIZE
		} else {
			MAX_NORMAL_TRANSFER_SIZE
		};
		if encoded_len as u32 > max_size {
			return Err("transfer exceeds its size ceiling")
		}
		if self.reserve_values.is_empty() {
			return Err("transfer must move at least one reserve value")
		}
		if self.flags.has(TransferFlags::RESERVE_TO_RESERVE) && self.reserve_values.len() != 2 {
			return Err("reserve-to-reserve transfer must carry exactly two reserve values")
		}
		Ok(())
	}
}

/// Bitset of `CrossChainExport` flags.
#[derive(Clone, Copy, PartialEq, Eq, Encode, Decode, RuntimeDebug, TypeInfo, MaxEncodedLen)]
pub struct ExportFlags(pub u32);

impl ExportFlags {
	pub const PRELAUNCH: u32 = 1 << 0;
	pub const CLEAR_LAUNCH: u32 = 1 << 1;
	pub const POSTLAUNCH: u32 = 1 << 2;
	pub const CHAIN_DEFINITION: u32 = 1 << 3;
	pub const SYSTEM_THREAD: u32 = 1 << 4;
	pub const SUPPLEMENTAL: u32 = 1 << 5;
	pub const EVIDENCE_ONLY: u32 = 1 << 6;

	pub fn has(&self, bit: u32) -> bool {
		self.0 & bit != 0
	}
}

/// A numbered, immutable cross-chain export batch.
#[derive(Clone, PartialEq, Eq, Encode, Decode, RuntimeDebug, TypeInfo)]
pub struct CrossChainExport<AccountId> {
	pub source_system_id: SystemId,
	pub source_height_start: u32,
	/// Half-open upper bound: the export covers `[source_height_start, source_height_end)`.
	pub source_height_end: u32,
	pub dest_system_id: SystemId,
	pub dest_currency_id: CurrencyId,
	pub first_input: u32,
	pub num_inputs: u32,
	pub total_amounts: Vec<(CurrencyId, Balance)>,
	pub total_fees: Balance,
	pub total_burned: Balance,
	pub hash_reserve_transfers: H256,
	/// The destination whose coinbase earned the export's aggregated fees.
	pub exporter: Destination<AccountId>,
	pub flags: ExportFlags,
	/// The full batch of reserve transfers this export carries, in source order. `total_amounts`
	/// is a convenience summary of this field; the importer prices and pays out each entry here
	/// individually rather than only crediting the aggregate.
	pub transfers: Vec<ReserveTransfer<AccountId>>,
}

/// Bitset of `CrossChainImport` flags.
#[derive(Clone, Copy, PartialEq, Eq, Encode, Decode, RuntimeDebug, TypeInfo, MaxEncodedLen)]
pub struct ImportFlags(pub u32);

impl ImportFlags {
	pub const DEFINITION_IMPORT: u32 = 1 << 0;
	pub const INITIAL_LAUNCH: u32 = 1 << 1;
	pub const POSTLAUNCH: u32 = 1 << 2;
	pub const SAME_CHAIN: u32 = 1 << 3;
	pub const SOURCE_SYSTEM: u32 = 1 << 4;

	pub fn has(&self, bit: u32) -> bool {
		self.0 & bit != 0
	}
}

/// The destination-chain record produced by consuming one export.
#[derive(Clone, PartialEq, Eq, Encode, Decode, RuntimeDebug, TypeInfo)]
pub struct CrossChainImport {
	pub source_system_id: SystemId,
	pub source_system_height: u32,
	pub import_currency_id: CurrencyId,
	pub import_value: Vec<(CurrencyId, Balance)>,
	pub total_reserve_out: Vec<(CurrencyId, Balance)>,
	pub num_outputs: u32,
	pub hash_reserve_transfers: H256,
	pub export_tx_id: H256,
	pub export_tx_out_num: u32,
	pub flags: ImportFlags,
}

/// Bitset of `CoinbaseCurrencyState` flags.
#[derive(Clone, Copy, PartialEq, Eq, Encode, Decode, RuntimeDebug, TypeInfo, MaxEncodedLen)]
pub struct CurrencyStateFlags(pub u32);

impl CurrencyStateFlags {
	pub const PRELAUNCH: u32 = 1 << 0;
	pub const LAUNCHCLEAR: u32 = 1 << 1;
	pub const LAUNCHCONFIRMED: u32 = 1 << 2;
	pub const LAUNCHCOMPLETE: u32 = 1 << 3;
	pub const REFUNDING: u32 = 1 << 4;

	pub fn has(&self, bit: u32) -> bool {
		self.0 & bit != 0
	}
	pub fn set(&mut self, bit: u32) {
		self.0 |= bit;
	}
}

/// The notarized currency state attached to every import.
#[derive(Clone, PartialEq, Eq, Encode, Decode, RuntimeDebug, TypeInfo)]
pub struct CoinbaseCurrencyState {
	pub currencies: Vec<CurrencyId>,
	pub reserves: Vec<Balance>,
	pub reserve_in: Vec<Balance>,
	pub reserve_out: Vec<Balance>,
	pub primary_currency_out: i64,
	pub primary_currency_in: i64,
	pub primary_currency_fees: Balance,
	pub supply: Balance,
	pub weights: Vec<u32>,
	pub prior_weights: Vec<u32>,
	pub conversion_price: Vec<u128>,
	pub via_conversion_price: Vec<u128>,
	pub fees: Vec<Balance>,
	pub conversion_fees: Vec<Balance>,
	pub emitted: Balance,
	pub flags: CurrencyStateFlags,
}

/// A notarization carrying a `CoinbaseCurrencyState` plus, for cross-system notarizations, the
/// latest confirmed `ProofRoot`s of remote systems.
#[derive(Clone, PartialEq, Eq, Encode, Decode, RuntimeDebug, TypeInfo)]
pub struct PBaaSNotarization {
	pub notarization_height: u32,
	pub prev_notarization: Option<H256>,
	pub currency_state: CoinbaseCurrencyState,
	pub proof_roots: Vec<(SystemId, ProofRoot)>,
}

/// `{systemID, rootHeight, blockHash, stateRoot, [gasPrice]}`.
#[derive(Clone, PartialEq, Eq, Encode, Decode, RuntimeDebug, TypeInfo, MaxEncodedLen)]
pub struct ProofRoot {
	pub system_id: SystemId,
	pub root_height: u32,
	pub block_hash: H256,
	pub state_root: H256,
	pub gas_price: Option<u128>,
}

/// A reserve-deposit escrow output, keyed by controlling currency and held asset.
#[derive(Clone, PartialEq, Eq, Encode, Decode, RuntimeDebug, TypeInfo)]
pub struct ReserveDeposit {
	pub controlling_currency_id: CurrencyId,
	pub reserve_values: Vec<(CurrencyId, Balance)>,
}

/// A partial-transaction proof rooted in a confirmed `ProofRoot`.
#[derive(Clone, PartialEq, Eq, Encode, Decode, RuntimeDebug, TypeInfo)]
pub struct PartialTransactionProof {
	pub tx_id: H256,
	pub claimed_state_root: H256,
	/// Opaque merkle/MMR proof bytes; interpreted by the `ProofAdapter` implementation.
	pub proof_bytes: Vec<u8>,
	/// Output index within the proven transaction that must be the export output.
	pub export_output_index: u32,
}

/// Proof evidence; large evidence is split into sequential parts bound by output position.
#[derive(Clone, PartialEq, Eq, Encode, Decode, RuntimeDebug, TypeInfo)]
pub enum NotaryEvidence {
	ImportProof(PartialTransactionProof),
	/// Finalization signatures, keyed by authority index.
	NotarySignatures(Vec<(u32, Vec<u8>)>),
}
