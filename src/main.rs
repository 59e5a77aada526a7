// Copyright 2025 the AlphaQuest Authors
// SPDX-License-Identifier: Apache-2.0

//! AlphaQuest: score a drawing of a letter from the command line

use std::process::ExitCode;

fn main() -> anyhow::Result<ExitCode> {
    alphaquest::run()
}
