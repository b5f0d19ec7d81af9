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

//! The currency launch state machine: pre-launch, clear-launch, post-launch, or refunding.

use crate::types::{CurrencyStateFlags, ReserveEntry};
use seed_primitives::{Balance, CurrencyId};
use sp_std::collections::btree_map::BTreeMap;

/// The currency's launch phase, derived from `CoinbaseCurrencyState.flags`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LaunchPhase {
	/// Accepting pre-conversions; not yet trading.
	PreLaunch,
	/// The one-time clearing notarization that fixes the launch price.
	ClearLaunch,
	/// Normal trading.
	PostLaunch,
	/// Launch failed to clear (insufficient pre-conversion); pre-converted funds are returned.
	Refunding,
}

impl LaunchPhase {
	pub fn from_flags(flags: CurrencyStateFlags) -> Self {
		if flags.has(CurrencyStateFlags::REFUNDING) {
			LaunchPhase::Refunding
		} else if flags.has(CurrencyStateFlags::LAUNCHCOMPLETE) {
			LaunchPhase::PostLaunch
		} else if flags.has(CurrencyStateFlags::LAUNCHCONFIRMED) || flags.has(CurrencyStateFlags::LAUNCHCLEAR) {
			LaunchPhase::ClearLaunch
		} else {
			LaunchPhase::PreLaunch
		}
	}
}

/// Applies a one-way phase transition to `flags`, in place, returning an error if the requested
/// transition is not legal from the current phase.
///
/// The only transitions allowed are: `PreLaunch -> ClearLaunch`, `ClearLaunch -> PostLaunch`,
/// `ClearLaunch -> Refunding`, and `PreLaunch -> Refunding` (launch abandoned before it clears).
/// Multiple pre-launch exports may occur while still in `PreLaunch` - that is not a transition,
/// just repeated aggregation within the same phase. Every other edge, including any transition
/// out of `PostLaunch` or `Refunding`, is rejected.
pub fn transition(flags: &mut CurrencyStateFlags, target: LaunchPhase) -> Result<(), &'static str> {
	let current = LaunchPhase::from_flags(*flags);
	let legal = matches!(
		(current, target),
		(LaunchPhase::PreLaunch, LaunchPhase::ClearLaunch) |
			(LaunchPhase::PreLaunch, LaunchPhase::Refunding) |
			(LaunchPhase::ClearLaunch, LaunchPhase::PostLaunch) |
			(LaunchPhase::ClearLaunch, LaunchPhase::Refunding)
	);
	if !legal {
		return Err("illegal launch phase transition")
	}
	match target {
		LaunchPhase::PreLaunch => {},
		LaunchPhase::ClearLaunch => flags.set(CurrencyStateFlags::LAUNCHCLEAR),
		LaunchPhase::PostLaunch => flags.set(CurrencyStateFlags::LAUNCHCOMPLETE),
		LaunchPhase::Refunding => flags.set(CurrencyStateFlags::REFUNDING),
	}
	Ok(())
}

/// `minPreconvert`: a currency only clears launch if every reserve entry that declares a nonzero
/// minimum has received at least that much in accumulated pre-conversions. A reserve with no
/// declared minimum (`min_preconvert == 0`) imposes no requirement.
pub fn clears_minimum(reserves: &[ReserveEntry], preconverted: &BTreeMap<CurrencyId, Balance>) -> bool {
	reserves.iter().all(|reserve| {
		if reserve.min_preconvert == 0 {
			return true
		}
		preconverted.get(&reserve.currency_id).copied().unwrap_or(0) >= reserve.min_preconvert
	})
}
