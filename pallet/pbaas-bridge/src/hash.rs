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

//! Deterministic transfer-set hashing, used both to commit an export's batch and to derive
//! fee-lottery entropy.

use crate::types::{ReserveTransfer, ENTROPY_HASH_DOMAIN, TRANSFER_HASH_DOMAIN};
use codec::Encode;
use sp_core::{blake2_256, H256};
use sp_std::prelude::*;

/// Orders transfers by `(source_height, source_tx_index, source_output_index)` and hashes their
/// SCALE encodings together with a fixed domain-separation prefix.
///
/// The exact prefix bytes are a protocol constant: every validator must agree on them bit for
/// bit, so they are fixed here rather than re-derived from anything else in this crate.
pub fn hash_reserve_transfers<AccountId: Encode + Clone>(
	transfers: &[ReserveTransfer<AccountId>],
) -> H256 {
	let mut ordered: Vec<&ReserveTransfer<AccountId>> = transfers.iter().collect();
	ordered.sort_by_key(|t| (t.source_height, t.source_tx_index, t.source_output_index));

	let mut buf = Vec::with_capacity(TRANSFER_HASH_DOMAIN.len() + ordered.len() * 64);
	buf.extend_from_slice(&TRANSFER_HASH_DOMAIN);
	for transfer in ordered {
		transfer.encode_to(&mut buf);
	}
	H256(blake2_256(&buf))
}

/// Derives per-block fee-lottery entropy from a block height and the chain's existing
/// hash-accumulator seed (e.g. the parent block hash), domain-separated from transfer hashing so
/// the two uses can never collide.
pub fn entropy_source(height: u32, seed: H256) -> H256 {
	let mut buf = Vec::with_capacity(ENTROPY_HASH_DOMAIN.len() + 4 + 32);
	buf.extend_from_slice(&ENTROPY_HASH_DOMAIN);
	buf.extend_from_slice(&height.to_le_bytes());
	buf.extend_from_slice(seed.as_bytes());
	H256(blake2_256(&buf))
}
