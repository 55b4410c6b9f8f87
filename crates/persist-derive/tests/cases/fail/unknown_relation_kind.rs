// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

#![allow(dead_code)]

use persist_derive::Persistent;

pub struct Author;

#[derive(Persistent)]
pub struct Post {
    #[relation(kind = "belongs_to")]
    pub author: Author,
}

fn main() {}
