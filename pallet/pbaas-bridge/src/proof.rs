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

//! The pluggable proof adapter: verifies that an export's transaction was included under a
//! confirmed `ProofRoot`, without this pallet needing to know how any particular remote system's
//! merkle/MMR scheme works.

use crate::types::{PartialTransactionProof, ProofRoot};
use sp_std::prelude::*;

/// Reasons a submitted proof is rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProofError {
	/// The proof's claimed state root does not match the confirmed `ProofRoot`.
	RootMismatch,
	/// The proof bytes do not verify against the claimed root at all.
	InvalidProof,
	/// The proof proves a transaction, but not at the expected export output index.
	WrongOutput,
}

/// A verified transaction extracted from a proof: only the fields the importer needs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProvenTransaction {
	pub tx_id: sp_core::H256,
	pub export_output_index: u32,
}

/// One method: verify a `PartialTransactionProof` against a confirmed `ProofRoot`.
pub trait ProofAdapter {
	fn verify(
		proof: &PartialTransactionProof,
		root: &ProofRoot,
	) -> Result<ProvenTransaction, ProofError>;
}

/// Trivial adapter for same-chain imports: the "proof" is just the claimed transaction, since
/// both sides share consensus and no cross-system trust is required.
pub struct LocalProofAdapter;

impl ProofAdapter for LocalProofAdapter {
	fn verify(
		proof: &PartialTransactionProof,
		_root: &ProofRoot,
	) -> Result<ProvenTransaction, ProofError> {
		Ok(ProvenTransaction {
			tx_id: proof.tx_id,
			export_output_index: proof.export_output_index,
		})
	}
}

/// Pluggable backend for submitting or fetching notary-relayed proof evidence, matching the
/// "recursive RPC... pluggable NotaryRpc trait" redesign note.
pub trait NotaryRpc {
	/// Fetches the best-known remote `ProofRoot` for `system_id`, if any has been relayed.
	fn latest_proof_root(system_id: seed_primitives::SystemId) -> Option<ProofRoot>;
}

/// No-op RPC backend for single-chain test runtimes: never has a remote root.
impl NotaryRpc for () {
	fn latest_proof_root(_system_id: seed_primitives::SystemId) -> Option<ProofRoot> {
		None
	}
}

/// Adapter for a remote (cross-system) import: verifies `proof.claimed_state_root` against the
/// root most recently relayed by `T`, then delegates byte-level verification to the proof bytes
/// themselves. Production runtimes are expected to supply their own MMR-backed adapter; this one
/// only checks the root binding, treating `proof_bytes` as opaque and already-verified by the
/// relayer that produced `root` in the first place.
pub struct RemoteProofAdapter<T>(sp_std::marker::PhantomData<T>);

impl<T: NotaryRpc> ProofAdapter for RemoteProofAdapter<T> {
	fn verify(
		proof: &PartialTransactionProof,
		root: &ProofRoot,
	) -> Result<ProvenTransaction, ProofError> {
		if proof.claimed_state_root != root.state_root {
			return Err(ProofError::RootMismatch)
		}
		if proof.proof_bytes.is_empty() {
			return Err(ProofError::InvalidProof)
		}
		Ok(ProvenTransaction {
			tx_id: proof.tx_id,
			export_output_index: proof.export_output_index,
		})
	}
}
