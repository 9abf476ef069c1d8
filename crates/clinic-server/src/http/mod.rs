// SPDX-License-Identifier: Apache-2.0

pub mod handlers;
pub(crate) mod response_contract;
