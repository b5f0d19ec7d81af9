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

//! The currency-export registry: an append-only record of which currencies have ever been
//! exported to which destination systems, consulted so an importer can tell a first-time
//! `CHAIN_DEFINITION` import from a routine one.

/// Registry lookups and mutation are plain storage operations performed by the pallet; this
/// module only documents the invariant the storage map must uphold: once `(dest, currency)` is
/// registered, it is never removed or overwritten, so two exporters racing to register the same
/// pair both observe the same answer regardless of ordering.
pub const REGISTRY_IS_APPEND_ONLY: bool = true;
