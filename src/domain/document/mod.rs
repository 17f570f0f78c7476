// SPDX-License-Identifier: GPL-3.0-or-later
// src/domain/document/mod.rs

pub mod operations;
