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

//! Submission-time validation of a `ReserveTransfer`, run both when a user submits one and again
//! by the exporter before it is admitted to a batch.

use crate::types::ReserveTransfer;
use codec::Encode;

/// Validates `transfer` against its own declared size ceiling and flag consistency rules.
/// Cheap and pure - callers re-run it at export admission without re-fetching anything.
pub fn validate_for_submission<AccountId: Encode>(
	transfer: &ReserveTransfer<AccountId>,
) -> Result<(), &'static str> {
	transfer.validate(transfer.encoded_size())
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::types::{Destination, TransferDestination, TransferFlags};
	use sp_core::H160;

	#[test]
	fn well_formed_transfer_validates() {
		let transfer = ReserveTransfer {
			flags: TransferFlags(0),
			fee_currency_id: H160::from_low_u64_be(1),
			fees: 1,
			reserve_values: vec![(H160::from_low_u64_be(1), 100)],
			dest_currency_id: H160::from_low_u64_be(2),
			dest_system_id: H160::from_low_u64_be(9),
			second_reserve_id: None,
			destination: TransferDestination {
				primary: Destination::Account(1u64),
				aux: vec![],
				next_leg_gateway: None,
			},
			source_height: 1,
			source_tx_index: 0,
			source_output_index: 0,
		};
		assert!(validate_for_submission(&transfer).is_ok());
	}
}
