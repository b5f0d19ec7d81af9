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
#![cfg_attr(not(feature = "std"), no_std)]

mod arbitrage;
#[cfg(feature = "runtime-benchmarks")]
mod benchmarking;
mod conversion;
mod export;
mod hash;
mod import;
mod ledger;
mod launch;
#[cfg(test)]
mod mock;
mod proof;
mod registry;
mod transfer;
mod types;
mod upgrade;
mod weights;
pub use weights::WeightInfo;

pub use arbitrage::ArbitrageOfferBook;
pub use proof::{NotaryRpc, ProofAdapter};
pub use types::{
	CoinbaseCurrencyState, CrossChainExport, CrossChainImport, CurrencyDefinition,
	CurrencyOptions, CurrencyStateFlags, Destination, ExportFlags, ImportFlags,
	NotaryEvidence, PBaaSNotarization, PartialTransactionProof, ProofProtocol, ProofRoot,
	ReserveDeposit, ReserveEntry, ReserveTransfer, TransferDestination, TransferFlags,
};
pub use upgrade::UpgradeInfo;

use frame_support::{
	dispatch::DispatchResult,
	ensure,
	pallet_prelude::*,
	traits::{
		fungibles::{Inspect, Mutate, Transfer},
		Get,
	},
	transactional, PalletId,
};
use frame_system::{ensure_root, ensure_signed, pallet_prelude::*};
use log::{debug, error};
pub use pallet::*;
use seed_pallet_common::{CreateExt, Hold};
use seed_primitives::{AssetId, Balance, CurrencyId, SystemId};
use sp_core::H256;
use sp_runtime::traits::AccountIdConversion;
use sp_std::{collections::btree_map::BTreeMap, prelude::*};

/// The logging target for this pallet.
pub(crate) const LOG_TARGET: &str = "pbaas-bridge";

/// Source of per-block entropy used for the export tie-break coin and the fee lottery.
/// Implemented by the host runtime (typically backed by parent-block hash / BABE randomness);
/// this pallet never generates entropy itself.
pub trait BlockEntropySource {
	fn block_entropy(height: u32) -> H256;
}

impl BlockEntropySource for () {
	fn block_entropy(_height: u32) -> H256 {
		H256::zero()
	}
}

#[frame_support::pallet]
pub mod pallet {
	use super::*;

	#[pallet::pallet]
	#[pallet::without_storage_info]
	pub struct Pallet<T>(_);

	#[pallet::config]
	pub trait Config: frame_system::Config {
		type Event: From<Event<Self>> + IsType<<Self as frame_system::Config>::Event>;

		#[pallet::constant]
		type PalletId: Get<PalletId>;

		/// The asset backing this chain's native currency, used as the default fee-equivalent
		/// currency for fee-adequacy checks.
		#[pallet::constant]
		type NativeAssetId: Get<AssetId>;

		/// Trading fee numerator/denominator, expressed as a `(u32, u32)` fraction to avoid
		/// internal division.
		#[pallet::constant]
		type ConversionFeeRate: Get<(u32, u32)>;

		/// Minimum native-equivalent fee accepted for an identity-export transfer.
		#[pallet::constant]
		type IdentityImportFee: Get<Balance>;
		/// Minimum native-equivalent fee accepted for a currency-export transfer.
		#[pallet::constant]
		type CurrencyImportFee: Get<Balance>;
		/// Minimum native-equivalent fee accepted for an NFT currency-export transfer.
		#[pallet::constant]
		type CurrencyImportFeeNft: Get<Balance>;
		/// Minimum native-equivalent fee accepted for a cross-chain transfer.
		#[pallet::constant]
		type CrossChainTransferFee: Get<Balance>;
		/// Minimum native-equivalent fee accepted for an ordinary same-chain transfer.
		#[pallet::constant]
		type TransferFee: Get<Balance>;

		/// Approximate seconds per block, used to bound the cross-chain fee-pricing window.
		#[pallet::constant]
		type BlockTimeSeconds: Get<u64>;

		/// Handles a multi-currency fungible asset system backing reserve and escrow balances.
		type MultiCurrency: Transfer<Self::AccountId>
			+ Hold<AccountId = Self::AccountId>
			+ CreateExt<AccountId = Self::AccountId>
			+ Mutate<Self::AccountId, AssetId = AssetId>
			+ Inspect<Self::AccountId, AssetId = AssetId>;

		/// Per-block entropy, used for the export tie-break coin and the fee lottery.
		type BlockEntropy: BlockEntropySource;

		/// Pluggable proof-submission backend for cross-system imports.
		type NotaryRpc: NotaryRpc;

		/// Proof verifier for cross-system imports.
		type ProofAdapter: ProofAdapter;

		/// Local venue consulted by the arbitrage hook; `()` disables it entirely.
		type ArbitrageBook: ArbitrageOfferBook;

		type WeightInfo: WeightInfo;
	}

	#[pallet::storage]
	#[pallet::getter(fn currency_definition)]
	pub type CurrencyDefinitions<T: Config> =
		StorageMap<_, Twox64Concat, CurrencyId, CurrencyDefinition<T::AccountId>, OptionQuery>;

	#[pallet::storage]
	#[pallet::getter(fn currency_state)]
	pub type CurrencyStates<T: Config> =
		StorageMap<_, Twox64Concat, CurrencyId, CoinbaseCurrencyState, OptionQuery>;

	/// Transfers awaiting export, keyed by destination currency then source block height.
	#[pallet::storage]
	#[pallet::getter(fn pending_transfers)]
	pub type PendingTransfers<T: Config> = StorageDoubleMap<
		_,
		Twox64Concat,
		CurrencyId,
		Twox64Concat,
		u32,
		Vec<ReserveTransfer<T::AccountId>>,
		ValueQuery,
	>;

	#[pallet::storage]
	#[pallet::getter(fn last_export_height_end)]
	pub type LastExportHeightEnd<T: Config> =
		StorageMap<_, Twox64Concat, CurrencyId, u32, ValueQuery>;

	#[pallet::storage]
	#[pallet::getter(fn next_export_number)]
	pub type NextExportNumber<T: Config> = StorageMap<_, Twox64Concat, CurrencyId, u32, ValueQuery>;

	#[pallet::storage]
	#[pallet::getter(fn export)]
	pub type Exports<T: Config> = StorageDoubleMap<
		_,
		Twox64Concat,
		CurrencyId,
		Twox64Concat,
		u32,
		CrossChainExport<T::AccountId>,
		OptionQuery,
	>;

	/// The most recently accepted import for a `(sourceSystemID, importCurrencyID)` pair.
	#[pallet::storage]
	#[pallet::getter(fn last_import)]
	pub type LastImport<T: Config> = StorageDoubleMap<
		_,
		Twox64Concat,
		SystemId,
		Twox64Concat,
		CurrencyId,
		CrossChainImport,
		OptionQuery,
	>;

	/// Reserve deposits held in escrow, keyed by `(controllingCurrencyID, heldCurrencyID)`.
	#[pallet::storage]
	#[pallet::getter(fn reserve_deposit)]
	pub type ReserveDeposits<T: Config> = StorageDoubleMap<
		_,
		Twox64Concat,
		CurrencyId,
		Twox64Concat,
		CurrencyId,
		Balance,
		ValueQuery,
	>;

	/// Append-only registry of currencies ever exported to a destination system.
	#[pallet::storage]
	#[pallet::getter(fn is_export_registered)]
	pub type ExportRegistry<T: Config> =
		StorageDoubleMap<_, Twox64Concat, SystemId, Twox64Concat, CurrencyId, (), OptionQuery>;

	#[pallet::storage]
	#[pallet::getter(fn upgrade_gate)]
	pub type UpgradeGateStorage<T: Config> = StorageValue<_, UpgradeInfo, ValueQuery>;

	/// Once set, export/import emission ceases; validation of already-authored blocks continues.
	#[pallet::storage]
	#[pallet::getter(fn graceful_stop_height)]
	pub type GracefulStopHeight<T: Config> = StorageValue<_, Option<T::BlockNumber>, ValueQuery>;

	/// Set once a missing `NotaryRpc` endpoint has already been logged this session, so the
	/// warning is not repeated every block.
	#[pallet::storage]
	pub type NotaryRpcWarned<T: Config> = StorageValue<_, bool, ValueQuery>;

	#[pallet::storage]
	#[pallet::getter(fn arbitrage_currencies)]
	pub type ArbitrageCurrencies<T: Config> = StorageValue<_, Vec<CurrencyId>, ValueQuery>;

	/// The only account permitted to invoke `panic_revoke_notary`.
	#[pallet::storage]
	#[pallet::getter(fn auto_notary_revoke_account)]
	pub type AutoNotaryRevokeAccount<T: Config> = StorageValue<_, Option<T::AccountId>, ValueQuery>;

	#[pallet::error]
	pub enum Error<T> {
		/// A submitted `ReserveTransfer` failed structural validation.
		InvalidTransfer,
		/// The target currency is not defined.
		UnknownCurrency,
		/// A currency definition failed structural validation.
		InvalidCurrencyDefinition,
		/// A prior export/import for this pair is missing; this record is out of order.
		OutOfOrder,
		/// The declared fee-lottery exporter does not match the actual fee destination.
		FeeRecipientMismatch,
		/// A transfer's fee fell below the minimum required for its kind.
		InadequateFees,
		/// The submitted proof does not root in a confirmed proof root.
		ProofFailure,
		/// The reserve-deposit balance equation did not hold for this import.
		BalanceViolation,
		/// DeFi (conversion) is currently paused by the oracle gate.
		DeFiPaused,
		/// Cross-chain transfers are currently paused by the oracle gate.
		CrossChainPaused,
		/// This gateway is currently paused by the oracle gate.
		GatewayPaused,
		/// Mint/burn-change-weight is only permitted for centralized currencies, never during
		/// pre-launch.
		NotCentralizedOrPrelaunch,
		/// The caller is not the configured auto-notary-revoke account.
		NotAuthorizedForRevoke,
		/// The export has already produced an import for this destination.
		ExportAlreadyImported,
	}

	#[pallet::event]
	#[pallet::generate_deposit(pub(super) fn deposit_event)]
	pub enum Event<T: Config> {
		/// A reserve transfer was accepted into the pending backlog for `dest_currency_id`.
		TransferSubmitted { dest_currency_id: CurrencyId, source_height: u32 },
		/// An export was cut for `dest_currency_id`, numbered `export_number`.
		ExportCommitted { dest_currency_id: CurrencyId, export_number: u32, num_inputs: u32 },
		/// An import was processed for `(source_system_id, import_currency_id)`.
		ImportProcessed { source_system_id: SystemId, import_currency_id: CurrencyId },
		/// A currency was defined.
		CurrencyDefined { currency_id: CurrencyId },
		/// The currency's launch phase changed.
		LaunchPhaseChanged { currency_id: CurrencyId },
		/// The upgrade gate was updated.
		UpgradeGateSet { info: UpgradeInfo },
		/// The arbitrage currency list was updated.
		ArbitrageCurrenciesSet { currencies: Vec<CurrencyId> },
		/// The engine entered graceful stop; no further exports/imports will be emitted.
		GracefulStopEngaged { at: T::BlockNumber },
	}

	#[pallet::hooks]
	impl<T: Config> Hooks<BlockNumberFor<T>> for Pallet<T> {
		/// Drains each destination currency's pending-transfer backlog and cuts the next export
		/// when the aggregation thresholds are met. Deterministic consensus code, not an
		/// offchain worker, because the coin-flip tie-break must be agreed by every validator.
		fn on_initialize(block_number: T::BlockNumber) -> Weight {
			if GracefulStopHeight::<T>::get().is_some() {
				return T::WeightInfo::on_initialize_stopped()
			}
			let height: u32 = block_number.saturated_into();
			let mut weight = T::WeightInfo::on_initialize_base();

			let dest_currencies: Vec<CurrencyId> =
				CurrencyDefinitions::<T>::iter_keys().collect();
			for dest_currency_id in dest_currencies {
				weight = weight.saturating_add(Self::try_export(dest_currency_id, height));
			}
			weight
		}
	}

	#[pallet::call]
	impl<T: Config> Pallet<T> {
		/// Submits a new reserve transfer; validated immediately, queued for export.
		#[pallet::call_index(0)]
		#[pallet::weight(T::WeightInfo::submit_reserve_transfer())]
		#[transactional]
		pub fn submit_reserve_transfer(
			origin: OriginFor<T>,
			transfer: ReserveTransfer<T::AccountId>,
		) -> DispatchResult {
			let who = ensure_signed(origin)?;
			crate::transfer::validate_for_submission(&transfer).map_err(|e| {
				debug!(target: LOG_TARGET, "rejected reserve transfer: {}", e);
				Error::<T>::InvalidTransfer
			})?;

			let gate = UpgradeGateStorage::<T>::get();
			if transfer.flags.has(TransferFlags::PRECONVERT) && gate.disable_defi {
				return Err(Error::<T>::DeFiPaused.into())
			}
			if transfer.flags.has(TransferFlags::CROSS_SYSTEM) && gate.disable_cross_chain {
				return Err(Error::<T>::CrossChainPaused.into())
			}

			let totals = transfer
				.total_currency_out()
				.map_err(|_| Error::<T>::InvalidTransfer)?;
			for (currency_id, amount) in totals {
				let asset_id = Self::asset_for_currency(currency_id);
				T::MultiCurrency::place_hold(T::PalletId::get(), &who, asset_id, amount)?;
			}

			let height: u32 = frame_system::Pallet::<T>::block_number().saturated_into();
			let dest_currency_id = transfer.target_currency();
			PendingTransfers::<T>::mutate(dest_currency_id, height, |queue| queue.push(transfer));
			Self::deposit_event(Event::TransferSubmitted { dest_currency_id, source_height: height });
			Ok(())
		}

		/// Submits a received export and, on success, commits the resulting import.
		#[pallet::call_index(1)]
		#[pallet::weight(T::WeightInfo::submit_import())]
		#[transactional]
		pub fn submit_import(
			origin: OriginFor<T>,
			export: CrossChainExport<T::AccountId>,
			proof: Option<PartialTransactionProof>,
		) -> DispatchResult {
			let _who = ensure_signed(origin)?;
			Self::do_submit_import(export, proof)
		}

		/// Defines a new currency. Root-gated: currency definitions are protocol-level objects,
		/// not user transactions, matching how this workspace gates asset creation.
		#[pallet::call_index(2)]
		#[pallet::weight(T::WeightInfo::define_currency())]
		pub fn define_currency(
			origin: OriginFor<T>,
			definition: CurrencyDefinition<T::AccountId>,
		) -> DispatchResult {
			ensure_root(origin)?;
			definition.validate().map_err(|_| Error::<T>::InvalidCurrencyDefinition)?;
			let currency_id = definition.id;
			CurrencyDefinitions::<T>::insert(currency_id, definition);
			Self::deposit_event(Event::CurrencyDefined { currency_id });
			Ok(())
		}

		/// Renormalizes a centralized currency's reserve weights. Never reachable during
		/// pre-launch and never reachable from the import path.
		#[pallet::call_index(3)]
		#[pallet::weight(T::WeightInfo::mint_burn_change_weight())]
		pub fn mint_burn_change_weight(
			origin: OriginFor<T>,
			currency_id: CurrencyId,
			mut new_weights: Vec<u32>,
		) -> DispatchResult {
			ensure_root(origin)?;
			let definition =
				CurrencyDefinitions::<T>::get(currency_id).ok_or(Error::<T>::UnknownCurrency)?;
			ensure!(
				matches!(definition.proof_protocol, ProofProtocol::ChainId),
				Error::<T>::NotCentralizedOrPrelaunch
			);
			CurrencyStates::<T>::try_mutate(currency_id, |maybe_state| -> DispatchResult {
				let state = maybe_state.as_mut().ok_or(Error::<T>::UnknownCurrency)?;
				ensure!(
					!state.flags.has(CurrencyStateFlags::PRELAUNCH),
					Error::<T>::NotCentralizedOrPrelaunch
				);
				crate::conversion::renormalize_weights(&mut new_weights)
					.map_err(|_| Error::<T>::InvalidCurrencyDefinition)?;
				state.prior_weights = state.weights.clone();
				state.weights = new_weights;
				Ok(())
			})?;
			Self::deposit_event(Event::LaunchPhaseChanged { currency_id });
			Ok(())
		}

		/// Updates the upgrade/oracle pause gate.
		#[pallet::call_index(4)]
		#[pallet::weight(T::WeightInfo::set_upgrade_gate())]
		pub fn set_upgrade_gate(origin: OriginFor<T>, info: UpgradeInfo) -> DispatchResult {
			ensure_root(origin)?;
			UpgradeGateStorage::<T>::put(info);
			Self::deposit_event(Event::UpgradeGateSet { info });
			Ok(())
		}

		/// Sets the currencies eligible for automatic arbitrage injection (4.J).
		#[pallet::call_index(5)]
		#[pallet::weight(T::WeightInfo::set_arbitrage_currencies())]
		pub fn set_arbitrage_currencies(
			origin: OriginFor<T>,
			currencies: Vec<CurrencyId>,
		) -> DispatchResult {
			ensure_root(origin)?;
			ArbitrageCurrencies::<T>::put(currencies.clone());
			Self::deposit_event(Event::ArbitrageCurrenciesSet { currencies });
			Ok(())
		}

		/// Emergency-revokes a stuck notarization path by engaging the graceful stop height.
		/// Restricted to the single configured `AutoNotaryRevokeAccount`.
		#[pallet::call_index(6)]
		#[pallet::weight(T::WeightInfo::panic_revoke_notary())]
		pub fn panic_revoke_notary(origin: OriginFor<T>) -> DispatchResult {
			let who = ensure_signed(origin)?;
			ensure!(
				AutoNotaryRevokeAccount::<T>::get().as_ref() == Some(&who),
				Error::<T>::NotAuthorizedForRevoke
			);
			let now = frame_system::Pallet::<T>::block_number();
			GracefulStopHeight::<T>::put(Some(now));
			error!(target: LOG_TARGET, "panic_revoke_notary invoked, engine entering graceful stop");
			Self::deposit_event(Event::GracefulStopEngaged { at: now });
			Ok(())
		}
	}
}

impl<T: Config> Pallet<T> {
	/// This pallet's escrow account, holding reserve deposits and in-flight transfer balances.
	pub fn account_id() -> T::AccountId {
		T::PalletId::get().into_account_truncating()
	}

	/// Looks up (or falls back to) the fungible asset backing a `CurrencyId`. Production
	/// runtimes are expected to maintain an explicit mapping; this crate's scope ends at the
	/// reserve-bridge accounting layer; without an explicit mapping table, currencies map to
	/// assets by truncating the low bytes of the currency id - adequate for single-asset test
	/// runtimes, replaced by an explicit binding in a production runtime.
	pub fn asset_for_currency(currency_id: CurrencyId) -> AssetId {
		let bytes = currency_id.as_bytes();
		u32::from_le_bytes([bytes[0], bytes[1], bytes[2], bytes[3]])
	}

	fn try_export(dest_currency_id: CurrencyId, height: u32) -> Weight {
		let prior_export_height_end = LastExportHeightEnd::<T>::get(dest_currency_id);
		let mut pending: Vec<export::PendingTransfer<T::AccountId>> =
			PendingTransfers::<T>::iter_prefix(dest_currency_id)
				.flat_map(|(h, transfers)| {
					transfers.into_iter().map(move |transfer| export::PendingTransfer { height: h, transfer })
				})
				.collect();
		if pending.is_empty() {
			return T::WeightInfo::on_initialize_base()
		}
		// iter_prefix order follows the storage hasher, not insertion height - the exporter
		// requires ascending height order to compute source_height_start/end correctly.
		pending.sort_by_key(|p| p.height);

		let is_clear_launch_boundary = CurrencyDefinitions::<T>::get(dest_currency_id)
			.map(|def| height >= def.start_block && prior_export_height_end < def.start_block)
			.unwrap_or(false);
		let entropy = T::BlockEntropy::block_entropy(height.saturating_add(1));
		let tie_break_bit = entropy.as_bytes().first().map(|b| b & 1 == 1).unwrap_or(false);

		let ctx = export::ExportContext {
			current_height: height,
			prior_export_height_end,
			tie_break_bit,
			is_clear_launch_boundary,
		};

		let definition = match CurrencyDefinitions::<T>::get(dest_currency_id) {
			Some(d) => d,
			None => return T::WeightInfo::on_initialize_base(),
		};

		let exporter = pending
			.first()
			.map(|p| p.transfer.destination.primary.clone())
			.unwrap_or(Destination::Service);

		if let Some(built) = export::try_build_export(
			&pending,
			dest_currency_id,
			definition.system_id,
			definition.launch_system_id,
			&ctx,
			exporter,
		) {
			let export_number = NextExportNumber::<T>::get(dest_currency_id);
			let height_end = built.source_height_end;
			let num_inputs = built.num_inputs;
			Exports::<T>::insert(dest_currency_id, export_number, built);
			NextExportNumber::<T>::insert(dest_currency_id, export_number.saturating_add(1));
			LastExportHeightEnd::<T>::insert(dest_currency_id, height_end);

			for h in pending.iter().map(|p| p.height).collect::<sp_std::collections::btree_set::BTreeSet<_>>() {
				if h < height_end {
					PendingTransfers::<T>::remove(dest_currency_id, h);
				}
			}

			Self::deposit_event(Event::ExportCommitted { dest_currency_id, export_number, num_inputs });
		}
		T::WeightInfo::on_initialize_export()
	}

	fn do_submit_import(
		export: CrossChainExport<T::AccountId>,
		proof: Option<PartialTransactionProof>,
	) -> DispatchResult {
		let gate = UpgradeGateStorage::<T>::get();
		ensure!(!gate.disable_cross_chain, Error::<T>::CrossChainPaused);

		let prior = LastImport::<T>::get(export.source_system_id, export.dest_currency_id);
		import::check_ordering(&export, prior.as_ref()).map_err(|_| Error::<T>::OutOfOrder)?;

		if let Some(proof) = &proof {
			let root = ProofRoot {
				system_id: export.source_system_id,
				root_height: export.source_height_end,
				block_hash: H256::zero(),
				state_root: proof.claimed_state_root,
				gas_price: None,
			};
			T::ProofAdapter::verify(proof, &root).map_err(|_| Error::<T>::ProofFailure)?;
		}

		if let Some(first) = export.transfers.first() {
			import::check_fee_recipient(&export.exporter, &first.destination)
				.map_err(|_| Error::<T>::FeeRecipientMismatch)?;
		}

		let has_cross_chain = export.transfers.iter().any(|t| t.flags.has(TransferFlags::CROSS_SYSTEM));
		if has_cross_chain {
			let window =
				import::bounded_fee_window_blocks(T::BlockTimeSeconds::get(), crate::types::MAX_FEE_WINDOW_SECONDS);
			let span = export.source_height_end.saturating_sub(export.source_height_start);
			ensure!(span <= window, Error::<T>::InadequateFees);
		}

		let maybe_definition = CurrencyDefinitions::<T>::get(export.dest_currency_id);
		let fee_schedule = import::FeeSchedule {
			identity_import_fee: T::IdentityImportFee::get(),
			currency_import_fee: T::CurrencyImportFee::get(),
			currency_import_fee_nft: T::CurrencyImportFeeNft::get(),
			cross_chain_transfer_fee: T::CrossChainTransferFee::get(),
			transfer_fee: T::TransferFee::get(),
		};
		let is_nft_currency = maybe_definition
			.as_ref()
			.map(|d| d.options.has(CurrencyOptions::NFT_TOKEN))
			.unwrap_or(false);
		for transfer in &export.transfers {
			let fee_input = import::FeeCheckInput {
				fee_native_equivalent: transfer.fees,
				is_identity_export: transfer.flags.has(TransferFlags::IDENTITY_EXPORT),
				is_currency_export: transfer.flags.has(TransferFlags::CURRENCY_EXPORT),
				is_currency_export_nft: is_nft_currency,
				is_cross_chain: transfer.flags.has(TransferFlags::CROSS_SYSTEM),
			};
			import::check_fee_adequate(&fee_input, &fee_schedule).map_err(|_| Error::<T>::InadequateFees)?;
		}

		let state = CurrencyStates::<T>::get(export.dest_currency_id);
		let mut state = state.unwrap_or_else(|| {
			// A currency's reserve basket mirrors its definition's declared reserves from the
			// first state it ever gets, so indexed reserve bookkeeping and live pricing work from
			// the currency's first import onward rather than only once some other path seeds it.
			let currencies: Vec<CurrencyId> = maybe_definition
				.as_ref()
				.map(|d| d.reserves.iter().map(|r| r.currency_id).collect())
				.unwrap_or_default();
			let weights: Vec<u32> = maybe_definition
				.as_ref()
				.map(|d| d.reserves.iter().map(|r| r.weight_ppb).collect())
				.unwrap_or_default();
			let len = currencies.len();
			CoinbaseCurrencyState {
				currencies,
				reserves: vec![0; len],
				reserve_in: vec![0; len],
				reserve_out: vec![0; len],
				primary_currency_out: 0,
				primary_currency_in: 0,
				primary_currency_fees: 0,
				supply: 0,
				prior_weights: weights.clone(),
				weights,
				conversion_price: vec![0; len],
				via_conversion_price: vec![0; len],
				fees: vec![0; len],
				conversion_fees: vec![0; len],
				emitted: 0,
				flags: CurrencyStateFlags(CurrencyStateFlags::PRELAUNCH),
			}
		});

		let before: BTreeMap<CurrencyId, Balance> =
			ReserveDeposits::<T>::iter_prefix(export.dest_currency_id).collect();
		let reserves_in: BTreeMap<CurrencyId, Balance> = export.total_amounts.iter().copied().collect();
		let reserves_out: BTreeMap<CurrencyId, Balance> = BTreeMap::new();
		let mut after = before.clone();
		for (currency_id, amount) in &reserves_in {
			ledger::add_to(&mut after, *currency_id, *amount).map_err(|_| Error::<T>::BalanceViolation)?;
		}

		ledger::verify_balance(&before, &reserves_in, &after, &reserves_out)
			.map_err(|_| Error::<T>::BalanceViolation)?;

		for (currency_id, amount) in &after {
			ReserveDeposits::<T>::insert(export.dest_currency_id, currency_id, *amount);
		}

		// Batch-convert and launch-gate this import's transfers, producing the payouts owed to
		// each destination. A currency with no definition on file has no conversion/launch
		// machinery to run yet; its deposits are escrowed without a payout until it is defined.
		let payouts: Vec<(Destination<T::AccountId>, CurrencyId, Balance)> = if let Some(definition) =
			maybe_definition.as_ref()
		{
			if !definition.options.is_fractional() {
				conversion::passthrough_outputs(&export.transfers)
			} else {
				match launch::LaunchPhase::from_flags(state.flags) {
					launch::LaunchPhase::PreLaunch if export.flags.has(ExportFlags::CLEAR_LAUNCH) => {
						let mut preconverted: BTreeMap<CurrencyId, Balance> = BTreeMap::new();
						for transfer in &export.transfers {
							if transfer.flags.has(TransferFlags::PRECONVERT) {
								for (currency_id, amount) in &transfer.reserve_values {
									let entry = preconverted.entry(*currency_id).or_insert(0);
									*entry = entry.saturating_add(*amount);
								}
							}
						}
						if launch::clears_minimum(&definition.reserves, &preconverted) {
							launch::transition(&mut state.flags, launch::LaunchPhase::ClearLaunch)
								.map_err(|_| Error::<T>::InvalidCurrencyDefinition)?;
							launch::transition(&mut state.flags, launch::LaunchPhase::PostLaunch)
								.map_err(|_| Error::<T>::InvalidCurrencyDefinition)?;
							conversion::add_reserve_transfer_import_outputs(
								&mut state,
								definition,
								&export.transfers,
							)
							.map_err(|_| Error::<T>::BalanceViolation)?
						} else {
							launch::transition(&mut state.flags, launch::LaunchPhase::Refunding)
								.map_err(|_| Error::<T>::InvalidCurrencyDefinition)?;
							conversion::passthrough_outputs(&export.transfers)
						}
					},
					launch::LaunchPhase::PreLaunch => Vec::new(),
					launch::LaunchPhase::Refunding => conversion::passthrough_outputs(&export.transfers),
					launch::LaunchPhase::ClearLaunch | launch::LaunchPhase::PostLaunch =>
						conversion::add_reserve_transfer_import_outputs(&mut state, definition, &export.transfers)
							.map_err(|_| Error::<T>::BalanceViolation)?,
				}
			}
		} else {
			Vec::new()
		};

		for (destination, currency_id, amount) in payouts {
			if amount == 0 {
				continue
			}
			match destination {
				Destination::Account(account) => {
					let asset_id = Self::asset_for_currency(currency_id);
					if let Err(e) = T::MultiCurrency::mint_into(asset_id, &account, amount) {
						error!(target: LOG_TARGET, "failed to mint import payout for {:?}: {:?}", currency_id, e);
					}
				},
				_ => debug!(target: LOG_TARGET, "import payout destination is not a plain account, skipped"),
			}
		}

		if ArbitrageCurrencies::<T>::get().contains(&export.dest_currency_id) {
			if let Some((from, amount)) = export.total_amounts.first().copied() {
				if let Ok(Some(offer)) =
					arbitrage::find_opportunity::<T::ArbitrageBook>(&state, from, export.dest_currency_id, amount)
				{
					let height: u32 = frame_system::Pallet::<T>::block_number().saturated_into();
					let arbitrage_transfer = ReserveTransfer {
						flags: arbitrage::arbitrage_flags(),
						fee_currency_id: export.dest_currency_id,
						fees: 0,
						reserve_values: vec![(from, amount)],
						dest_currency_id: export.dest_currency_id,
						dest_system_id: export.dest_system_id,
						second_reserve_id: None,
						destination: TransferDestination {
							primary: Destination::Account(Self::account_id()),
							aux: vec![],
							next_leg_gateway: None,
						},
						source_height: height,
						source_tx_index: 0,
						source_output_index: 0,
					};
					PendingTransfers::<T>::mutate(export.dest_currency_id, height, |queue| {
						queue.push(arbitrage_transfer)
					});
					debug!(
						target: LOG_TARGET,
						"arbitrage opportunity injected for {:?}: offer {}", export.dest_currency_id, offer
					);
				}
			}
		}

		CurrencyStates::<T>::insert(export.dest_currency_id, state);

		let same_chain = export.source_system_id == export.dest_system_id;
		let import = import::build_import(&export, export.total_amounts.clone(), vec![], same_chain);
		LastImport::<T>::insert(export.source_system_id, export.dest_currency_id, import);
		ExportRegistry::<T>::insert(export.dest_system_id, export.dest_currency_id, ());

		Self::deposit_event(Event::ImportProcessed {
			source_system_id: export.source_system_id,
			import_currency_id: export.dest_currency_id,
		});
		Ok(())
	}
}
