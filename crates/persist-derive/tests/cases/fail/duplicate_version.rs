// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

#![allow(dead_code)]

use persist_derive::Persistent;

#[derive(Persistent)]
pub struct Doc {
    #[version]
    pub v1: i32,
    #[jpa(version)]
    pub v2: i32,
}

fn main() {}
