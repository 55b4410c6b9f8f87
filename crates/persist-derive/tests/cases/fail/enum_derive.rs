// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

#![allow(dead_code)]

use persist_derive::Persistent;

#[derive(Persistent)]
pub enum Status {
    Active,
    Inactive,
}

fn main() {}
