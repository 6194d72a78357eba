// SPDX-FileCopyrightText: 2025 Hong Minhee <https://hongminhee.org/>
// SPDX-License-Identifier: GPL-3.0-or-later
//! Text transforms and term selection.

pub mod case;
pub mod join;
pub mod list;
pub mod localize;
pub mod numerals;
pub mod registry;
pub mod term;
