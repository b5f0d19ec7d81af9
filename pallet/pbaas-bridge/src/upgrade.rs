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

//! The upgrade / oracle gate: a cascading set of pause flags that can independently or jointly
//! disable DeFi, cross-chain transfers, and a specific gateway.

use codec::{Decode, Encode, MaxEncodedLen};
use scale_info::TypeInfo;
use sp_runtime::RuntimeDebug;

/// Current pause state for the bridge. `DisableDeFi` implies the other two: if conversion math
/// itself is untrusted, nothing downstream of it can be trusted either.
#[derive(Clone, Copy, Default, PartialEq, Eq, Encode, Decode, RuntimeDebug, TypeInfo, MaxEncodedLen)]
pub struct UpgradeInfo {
	pub disable_defi: bool,
	pub disable_cross_chain: bool,
	pub disable_gateway: bool,
}

/// What, if anything, is currently paused.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PauseState {
	Active,
	DeFiPaused,
	CrossChainPaused,
	GatewayPaused,
}

impl UpgradeInfo {
	/// Waterfalls `disable_defi` down through the other two flags before evaluating.
	pub fn is_paused(&self) -> Option<PauseState> {
		if self.disable_defi {
			return Some(PauseState::DeFiPaused)
		}
		if self.disable_cross_chain {
			return Some(PauseState::CrossChainPaused)
		}
		if self.disable_gateway {
			return Some(PauseState::GatewayPaused)
		}
		None
	}
}
